//! Custom type registry.
//!
//! Maps custom type names to caller-supplied renderers. A registry is an
//! ordinary value: build one at startup, register renderers, then pass it
//! (by reference or behind an `Arc`) to whatever renders forms.
//!
//! `register` takes `&mut self` and `render` takes `&self`, so the registry
//! does no locking of its own. Callers that need to register while other
//! threads render must wrap it in their own lock.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::attributes::Attributes;
use crate::error::{FormError, FormResult};

/// A renderer for a custom type.
///
/// Receives the caller's parameters as positional string arguments.
/// Arity is not checked by the registry; a renderer that needs more
/// arguments than it got should return an error.
pub trait CustomRenderer: Send + Sync {
    fn render(&self, args: &[String]) -> anyhow::Result<String>;
}

impl<F> CustomRenderer for F
where
    F: Fn(&[String]) -> anyhow::Result<String> + Send + Sync,
{
    fn render(&self, args: &[String]) -> anyhow::Result<String> {
        self(args)
    }
}

/// Conversion of caller parameters into positional renderer arguments.
///
/// Sequences pass through in order; attribute maps contribute their values
/// in insertion order and their names are discarded.
pub trait CustomArgs {
    fn into_args(self) -> Vec<String>;
}

impl CustomArgs for Vec<String> {
    fn into_args(self) -> Vec<String> {
        self
    }
}

impl CustomArgs for Vec<&str> {
    fn into_args(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl CustomArgs for &[String] {
    fn into_args(self) -> Vec<String> {
        self.to_vec()
    }
}

impl CustomArgs for &[&str] {
    fn into_args(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> CustomArgs for [&str; N] {
    fn into_args(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl CustomArgs for Attributes {
    fn into_args(self) -> Vec<String> {
        self.into_values().collect()
    }
}

impl CustomArgs for &Attributes {
    fn into_args(self) -> Vec<String> {
        self.iter().map(|(_, v)| v.to_string()).collect()
    }
}

impl CustomArgs for () {
    fn into_args(self) -> Vec<String> {
        Vec::new()
    }
}

/// Registry of custom type renderers, keyed by exact (case-sensitive) name.
#[derive(Clone, Default)]
pub struct CustomTypeRegistry {
    types: HashMap<String, Arc<dyn CustomRenderer>>,
}

impl CustomTypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer function, replacing any existing one of the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, renderer: F)
    where
        F: Fn(&[String]) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.register_renderer(name, renderer);
    }

    /// Register any [`CustomRenderer`] implementation.
    pub fn register_renderer<R>(&mut self, name: impl Into<String>, renderer: R)
    where
        R: CustomRenderer + 'static,
    {
        let name = name.into();
        let replaced = self
            .types
            .insert(name.clone(), Arc::new(renderer))
            .is_some();
        debug!(custom_type = %name, replaced, "registered custom type");
    }

    /// Render a registered custom type.
    ///
    /// Parameter values are handed to the renderer positionally. Fails with
    /// [`FormError::UnregisteredType`] for unknown names; renderer failures
    /// come back unchanged as [`FormError::Renderer`].
    pub fn render(&self, name: &str, params: impl CustomArgs) -> FormResult<String> {
        let Some(renderer) = self.types.get(name) else {
            warn!(custom_type = %name, "custom type not registered");
            return Err(FormError::UnregisteredType {
                name: name.to_string(),
            });
        };

        let args = params.into_args();
        debug!(custom_type = %name, args = args.len(), "rendering custom type");
        renderer.render(&args).map_err(FormError::Renderer)
    }

    /// Check whether a custom type is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Return the number of registered custom types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl fmt::Debug for CustomTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomTypeRegistry")
            .field("types", &self.types.len())
            .finish()
    }
}
