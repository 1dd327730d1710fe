//! Entry point binding a metadata source to an assertion configuration.

use crate::assertions::{TypeAssertions, TypeShould};
use crate::config::AssertionConfig;
use crate::selector::{MethodSelector, PropertySelector};
use typeshape_types::{MetadataSource, ReflectError, ReflectResult, TypeDescriptor, TypeName};

/// Creates selectors and type facades that share one configuration.
pub struct TypeInspector<'s, S: MetadataSource + ?Sized> {
    source: &'s S,
    config: AssertionConfig,
}

impl<'s, S: MetadataSource + ?Sized> TypeInspector<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self::with_config(source, AssertionConfig::default())
    }

    pub fn with_config(source: &'s S, config: AssertionConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &AssertionConfig {
        &self.config
    }

    pub fn methods(&self, ty: &TypeName) -> ReflectResult<MethodSelector> {
        Ok(MethodSelector::from_type(self.source, ty, &self.config.scope)?
            .with_format(self.config.format.clone()))
    }

    pub fn properties(&self, ty: &TypeName) -> ReflectResult<PropertySelector> {
        Ok(PropertySelector::from_type(self.source, ty, &self.config.scope)?
            .with_format(self.config.format.clone()))
    }

    pub fn type_descriptor(&self, ty: &TypeName) -> ReflectResult<TypeDescriptor> {
        if ty.is_blank() {
            return Err(ReflectError::invalid_usage("cannot describe a blank type name"));
        }
        self.source.type_descriptor(ty)
    }

    /// Type facade for `ty`, formatted with this inspector's settings.
    pub fn type_should(&self, ty: &TypeName) -> ReflectResult<TypeAssertions> {
        Ok(self
            .type_descriptor(ty)?
            .should_with(self.config.format.clone()))
    }
}

impl<S: MetadataSource + ?Sized> Clone for TypeInspector<'_, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            config: self.config.clone(),
        }
    }
}

impl<S: MetadataSource + ?Sized> std::fmt::Debug for TypeInspector<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeInspector")
            .field("source", &self.source.name())
            .field("config", &self.config)
            .finish()
    }
}
