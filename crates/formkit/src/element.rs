//! Declarative form documents.
//!
//! A [`FormDocument`] describes a whole form as data: the `<form>` tag
//! attributes plus an ordered list of [`FormElement`]s. Documents are
//! serde-friendly, so a form can be written as JSON and rendered without
//! any Rust code:
//!
//! ```json
//! {
//!   "attributes": {"action": "/submit", "method": "post"},
//!   "elements": [
//!     {"type": "label", "for": "email", "text": "Email"},
//!     {"type": "email", "name": "email"},
//!     {"type": "button"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::builders::{
    self, DEFAULT_BUTTON_TYPE, DEFAULT_BUTTON_VALUE, DEFAULT_INPUT_TYPE, LabelOptions,
};
use crate::error::FormResult;
use crate::options::SelectOptions;
use crate::registry::{CustomArgs, CustomTypeRegistry};

/// A complete form definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDocument {
    /// Attributes of the `<form>` tag.
    #[serde(default)]
    pub attributes: Attributes,

    /// Elements rendered between the opening and closing tags, in order.
    #[serde(default)]
    pub elements: Vec<FormElement>,
}

impl FormDocument {
    /// Create an empty form with the given tag attributes.
    pub fn new(attributes: Attributes) -> Self {
        Self {
            attributes,
            elements: Vec::new(),
        }
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append an element.
    pub fn element(mut self, element: FormElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Render the opening tag, every element, then the closing tag.
    ///
    /// Stops at the first element that fails to render.
    pub fn render(&self, registry: &CustomTypeRegistry) -> FormResult<String> {
        let mut html = builders::open(&self.attributes);
        for element in &self.elements {
            html.push_str(&element.render(registry)?);
        }
        html.push_str(&builders::close());
        Ok(html)
    }
}

/// Parameters for a custom element: a plain list, or a map whose values are
/// used in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomParams {
    List(Vec<String>),
    Map(Attributes),
}

impl Default for CustomParams {
    fn default() -> Self {
        CustomParams::List(Vec::new())
    }
}

impl CustomArgs for &CustomParams {
    fn into_args(self) -> Vec<String> {
        match self {
            CustomParams::List(values) => values.clone(),
            CustomParams::Map(attributes) => attributes.into_args(),
        }
    }
}

/// A single element of a form document, one variant per builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormElement {
    Input {
        name: String,
        #[serde(default = "default_input_type")]
        input_type: String,
        #[serde(default)]
        value: String,
        #[serde(default)]
        attributes: Attributes,
    },

    Select {
        name: String,
        #[serde(default)]
        selected: String,
        options: SelectOptions,
        #[serde(default)]
        attributes: Attributes,
    },

    Textarea {
        name: String,
        #[serde(default)]
        value: String,
        #[serde(default)]
        attributes: Attributes,
    },

    Checkbox {
        name: String,
        value: String,
        #[serde(default)]
        checked: bool,
        #[serde(default)]
        attributes: Attributes,
    },

    Radio {
        name: String,
        value: String,
        #[serde(default)]
        checked: bool,
        #[serde(default)]
        attributes: Attributes,
    },

    Button {
        #[serde(default = "default_button_type")]
        button_type: String,
        #[serde(default = "default_button_value")]
        value: String,
        #[serde(default)]
        attributes: Attributes,
    },

    File {
        name: String,
        #[serde(default)]
        attributes: Attributes,
    },

    Password {
        name: String,
        #[serde(default)]
        attributes: Attributes,
    },

    Email {
        name: String,
        #[serde(default)]
        value: String,
        #[serde(default)]
        attributes: Attributes,
    },

    Label {
        #[serde(rename = "for")]
        for_id: String,
        #[serde(default)]
        text: String,
        #[serde(default)]
        attributes: Attributes,
        #[serde(default)]
        required_html: String,
        #[serde(default = "default_true")]
        before_text: bool,
    },

    /// A registered custom type.
    Custom {
        name: String,
        #[serde(default)]
        params: CustomParams,
    },

    /// Literal markup, emitted unchanged.
    Markup { value: String },
}

fn default_input_type() -> String {
    DEFAULT_INPUT_TYPE.to_string()
}

fn default_button_type() -> String {
    DEFAULT_BUTTON_TYPE.to_string()
}

fn default_button_value() -> String {
    DEFAULT_BUTTON_VALUE.to_string()
}

fn default_true() -> bool {
    true
}

impl FormElement {
    /// Get the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            FormElement::Input { .. } => "input",
            FormElement::Select { .. } => "select",
            FormElement::Textarea { .. } => "textarea",
            FormElement::Checkbox { .. } => "checkbox",
            FormElement::Radio { .. } => "radio",
            FormElement::Button { .. } => "button",
            FormElement::File { .. } => "file",
            FormElement::Password { .. } => "password",
            FormElement::Email { .. } => "email",
            FormElement::Label { .. } => "label",
            FormElement::Custom { .. } => "custom",
            FormElement::Markup { .. } => "markup",
        }
    }

    /// Render this element. Only `custom` elements consult the registry.
    pub fn render(&self, registry: &CustomTypeRegistry) -> FormResult<String> {
        let html = match self {
            FormElement::Input {
                name,
                input_type,
                value,
                attributes,
            } => builders::input(name, input_type, value, attributes),
            FormElement::Select {
                name,
                selected,
                options,
                attributes,
            } => builders::select(name, selected, options, attributes),
            FormElement::Textarea {
                name,
                value,
                attributes,
            } => builders::textarea(name, value, attributes),
            FormElement::Checkbox {
                name,
                value,
                checked,
                attributes,
            } => builders::checkbox(name, value, *checked, attributes),
            FormElement::Radio {
                name,
                value,
                checked,
                attributes,
            } => builders::radio(name, value, *checked, attributes),
            FormElement::Button {
                button_type,
                value,
                attributes,
            } => builders::button(button_type, value, attributes),
            FormElement::File { name, attributes } => builders::file(name, attributes),
            FormElement::Password { name, attributes } => builders::password(name, attributes),
            FormElement::Email {
                name,
                value,
                attributes,
            } => builders::email(name, value, attributes),
            FormElement::Label {
                for_id,
                text,
                attributes,
                required_html,
                before_text,
            } => {
                let options = LabelOptions {
                    required_html: required_html.clone(),
                    before_text: *before_text,
                };
                builders::label_with(for_id, text, attributes, &options)
            }
            FormElement::Custom { name, params } => registry.render(name, params)?,
            FormElement::Markup { value } => value.clone(),
        };
        Ok(html)
    }
}
