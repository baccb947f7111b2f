//! formkit test utilities.
//!
//! Fixtures shared by integration tests: attribute and option maps built
//! from string slices, and a registry pre-loaded with a sample custom type.

use formkit::{Attributes, CustomTypeRegistry, SelectOptions};

/// Build an attribute map from `(name, value)` pairs.
pub fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs.iter().copied().collect()
}

/// Build an option map from `(value, text)` pairs.
pub fn options(pairs: &[(&str, &str)]) -> SelectOptions {
    pairs.iter().copied().collect()
}

/// The `male`/`female` option set used throughout the select tests.
pub fn gender_options() -> SelectOptions {
    options(&[("male", "Male"), ("female", "Female")])
}

/// Renders `<input type='text' name='{0}' value='{1}' placeholder='{2}'>`.
///
/// Fails when fewer than three arguments are given.
pub fn custom_input_renderer(args: &[String]) -> anyhow::Result<String> {
    let [name, value, placeholder, ..] = args else {
        anyhow::bail!(
            "custom_input expects name, value and placeholder, got {} argument(s)",
            args.len()
        );
    };
    Ok(format!(
        "<input type='text' name='{name}' value='{value}' placeholder='{placeholder}'>"
    ))
}

/// Create a registry with `custom_input` registered.
pub fn test_registry() -> CustomTypeRegistry {
    let mut registry = CustomTypeRegistry::new();
    registry.register("custom_input", custom_input_renderer);
    registry
}

