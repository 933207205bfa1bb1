use std::sync::Arc;

use log::debug;

use crate::constants::defaults::default_constants;
use crate::constants::errors::ConstantError;
use crate::value::DimensionedValue;

/// A named dimensioned value, immutable once registered
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    name: String,
    value: DimensionedValue,
    is_default: bool,
}

impl Constant {
    /// A user-supplied constant
    pub fn new(name: impl Into<String>, value: DimensionedValue) -> Self {
        Self {
            name: name.into(),
            value,
            is_default: false,
        }
    }

    /// One of the built-in constants
    pub fn builtin(name: impl Into<String>, value: DimensionedValue) -> Self {
        Self {
            name: name.into(),
            value,
            is_default: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &DimensionedValue {
        &self.value
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// Ordered collection of constants with unique names
#[derive(Debug, Clone, Default)]
pub struct ConstantRegistry {
    constants: Vec<Arc<Constant>>,
}

impl ConstantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in constant, computed at `precision` digits
    pub fn with_defaults(precision: usize) -> Self {
        Self {
            constants: default_constants(precision)
                .into_iter()
                .map(Arc::new)
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConstantError::DuplicateConstantName`] if any two constants share a name.
    pub fn from_constants(
        constants: impl IntoIterator<Item = Constant>,
    ) -> Result<Self, ConstantError> {
        let mut registry = Self::new();
        for constant in constants {
            registry.register(constant)?;
        }
        Ok(registry)
    }

    /// # Errors
    ///
    /// Returns [`ConstantError::DuplicateConstantName`] if the name is already registered.
    pub fn register(&mut self, constant: Constant) -> Result<(), ConstantError> {
        if self.get(constant.name()).is_some() {
            return Err(ConstantError::DuplicateConstantName(
                constant.name().to_string(),
            ));
        }
        debug!("Registered constant {} = {}", constant.name(), constant.value());
        self.constants.push(Arc::new(constant));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Constant>> {
        self.constants.iter().find(|c| c.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Constant>> {
        self.constants.iter()
    }

    pub fn as_slice(&self) -> &[Arc<Constant>] {
        &self.constants
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
