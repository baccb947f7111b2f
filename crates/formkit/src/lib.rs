//! HTML form markup builders.
//!
//! Renders form tags, inputs, selects and labels as plain strings from
//! ordered attribute and option maps, and dispatches caller-defined custom
//! elements through a [`CustomTypeRegistry`]. Output is never escaped;
//! callers are responsible for sanitizing what they pass in.

pub mod attributes;
pub mod builders;
pub mod config;
pub mod element;
pub mod error;
pub mod options;
mod pairs;
pub mod registry;

pub use attributes::{Attributes, attributes_to_string};
pub use builders::{
    DEFAULT_BUTTON_TYPE, DEFAULT_BUTTON_VALUE, DEFAULT_INPUT_TYPE, LabelOptions, button, checkbox,
    close, custom, email, file, input, label, label_with, open, password, radio,
    register_custom_type, select, submit_button, textarea,
};
pub use config::Config;
pub use element::{CustomParams, FormDocument, FormElement};
pub use error::{FormError, FormResult};
pub use options::{SelectOptions, normalize_option_value, option_matches, options_to_string};
pub use registry::{CustomArgs, CustomRenderer, CustomTypeRegistry};
