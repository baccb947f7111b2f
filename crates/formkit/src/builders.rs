//! Form element builders.
//!
//! Each builder interpolates its arguments into a fixed markup shape using
//! [`attributes_to_string`] and [`options_to_string`]. Nothing is escaped or
//! validated, and the spacing of the output is part of the contract: an
//! empty attribute map still leaves its separating space behind, e.g.
//! `<select name='gender' >`.

use crate::attributes::{Attributes, attributes_to_string};
use crate::error::FormResult;
use crate::options::{SelectOptions, options_to_string};
use crate::registry::{CustomArgs, CustomTypeRegistry};

/// Default `type` for [`input`].
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// Default `type` for [`button`].
pub const DEFAULT_BUTTON_TYPE: &str = "submit";

/// Default caption for [`button`].
pub const DEFAULT_BUTTON_VALUE: &str = "Submit";

/// Opening form tag.
pub fn open(attributes: &Attributes) -> String {
    format!("<form {}>", attributes_to_string(attributes))
}

/// Closing form tag.
pub fn close() -> String {
    "</form>".to_string()
}

/// Input field of any type.
pub fn input(name: &str, input_type: &str, value: &str, attributes: &Attributes) -> String {
    let attrs = attributes_to_string(attributes);
    format!("<input type='{input_type}' name='{name}' value='{value}' {attrs}>")
}

/// Select field with its options; `selected` marks the matching option.
pub fn select(
    name: &str,
    selected: &str,
    options: &SelectOptions,
    attributes: &Attributes,
) -> String {
    let attrs = attributes_to_string(attributes);
    let options = options_to_string(options, selected);
    format!("<select name='{name}' {attrs}>{options}</select>")
}

/// Textarea with `value` as its content.
pub fn textarea(name: &str, value: &str, attributes: &Attributes) -> String {
    let attrs = attributes_to_string(attributes);
    format!("<textarea name='{name}' {attrs}>{value}</textarea>")
}

/// Checkbox input.
pub fn checkbox(name: &str, value: &str, is_checked: bool, attributes: &Attributes) -> String {
    checkable("checkbox", name, value, is_checked, attributes)
}

/// Radio button.
pub fn radio(name: &str, value: &str, is_checked: bool, attributes: &Attributes) -> String {
    checkable("radio", name, value, is_checked, attributes)
}

// An unchecked box leaves an empty slot between two spaces.
fn checkable(
    input_type: &str,
    name: &str,
    value: &str,
    is_checked: bool,
    attributes: &Attributes,
) -> String {
    let attrs = attributes_to_string(attributes);
    let checked = if is_checked { "checked" } else { "" };
    format!("<input type='{input_type}' name='{name}' value='{value}' {checked} {attrs}>")
}

/// Button with `value` as its caption.
pub fn button(button_type: &str, value: &str, attributes: &Attributes) -> String {
    let attrs = attributes_to_string(attributes);
    format!("<button type='{button_type}' {attrs}>{value}</button>")
}

/// `<button type='submit' ...>Submit</button>`.
pub fn submit_button(attributes: &Attributes) -> String {
    button(DEFAULT_BUTTON_TYPE, DEFAULT_BUTTON_VALUE, attributes)
}

/// File upload input.
pub fn file(name: &str, attributes: &Attributes) -> String {
    let attrs = attributes_to_string(attributes);
    format!("<input type='file' name='{name}' {attrs}>")
}

/// Password input. Never carries a value.
pub fn password(name: &str, attributes: &Attributes) -> String {
    let attrs = attributes_to_string(attributes);
    format!("<input type='password' name='{name}' {attrs}>")
}

/// Email input.
pub fn email(name: &str, value: &str, attributes: &Attributes) -> String {
    let attrs = attributes_to_string(attributes);
    format!("<input type='email' name='{name}' value='{value}' {attrs}>")
}

/// Required-marker placement for [`label_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOptions {
    /// Markup flagging the field as required, e.g. `<span>*</span>`.
    pub required_html: String,
    /// Place the marker before the text (`true`) or after it.
    pub before_text: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            required_html: String::new(),
            before_text: true,
        }
    }
}

impl LabelOptions {
    /// Marker placed before the label text.
    pub fn required_before(required_html: impl Into<String>) -> Self {
        Self {
            required_html: required_html.into(),
            before_text: true,
        }
    }

    /// Marker placed after the label text.
    pub fn required_after(required_html: impl Into<String>) -> Self {
        Self {
            required_html: required_html.into(),
            before_text: false,
        }
    }
}

/// Label without a required marker.
pub fn label(for_id: &str, text: &str, attributes: &Attributes) -> String {
    label_with(for_id, text, attributes, &LabelOptions::default())
}

/// Label with a required marker.
///
/// The marker and text are joined by one space and the result is trimmed,
/// so an empty marker leaves just the text.
pub fn label_with(
    for_id: &str,
    text: &str,
    attributes: &Attributes,
    options: &LabelOptions,
) -> String {
    let attrs = attributes_to_string(attributes);
    let marker = &options.required_html;
    let joined = if options.before_text {
        format!("{marker} {text}")
    } else {
        format!("{text} {marker}")
    };
    let content = joined.trim_matches(is_trimmed);
    format!("<label for='{for_id}' {attrs}>{content}</label>")
}

fn is_trimmed(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0b')
}

/// Register a custom type renderer.
pub fn register_custom_type<F>(registry: &mut CustomTypeRegistry, name: &str, renderer: F)
where
    F: Fn(&[String]) -> anyhow::Result<String> + Send + Sync + 'static,
{
    registry.register(name, renderer);
}

/// Render a registered custom type.
pub fn custom(
    registry: &CustomTypeRegistry,
    name: &str,
    params: impl CustomArgs,
) -> FormResult<String> {
    registry.render(name, params)
}
