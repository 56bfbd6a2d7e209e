//! Parameters that control how a calculation is performed.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use meridian_core::Currency;

/// A single calculation parameter.
///
/// A parameter set holds at most one parameter of each type, so the type
/// itself acts as the key.
pub trait CalculationParameter: Any + fmt::Debug + Send + Sync {
    /// The parameter as [`Any`], for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// The currency results are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportingCurrency(pub Currency);

impl CalculationParameter for ReportingCurrency {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A set of calculation parameters keyed by their type.
#[derive(Debug, Clone, Default)]
pub struct CalculationParameters {
    parameters: HashMap<TypeId, Arc<dyn CalculationParameter>>,
}

impl CalculationParameters {
    /// An empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A set holding one parameter.
    pub fn of<P: CalculationParameter>(parameter: P) -> Self {
        Self::empty().with(parameter)
    }

    /// This set with `parameter` added, replacing any parameter of the same
    /// type.
    #[must_use]
    pub fn with<P: CalculationParameter>(mut self, parameter: P) -> Self {
        self.parameters.insert(TypeId::of::<P>(), Arc::new(parameter));
        self
    }

    /// This set with parameters from `other` added where this set has none of
    /// that type.
    #[must_use]
    pub fn combined_with(mut self, other: &CalculationParameters) -> Self {
        for (type_id, parameter) in &other.parameters {
            self.parameters
                .entry(*type_id)
                .or_insert_with(|| Arc::clone(parameter));
        }
        self
    }

    /// The parameter of type `P`, if present.
    pub fn find<P: CalculationParameter>(&self) -> Option<&P> {
        self.parameters
            .get(&TypeId::of::<P>())
            .and_then(|parameter| parameter.as_any().downcast_ref::<P>())
    }

    /// True if a parameter of type `P` is present.
    pub fn contains<P: CalculationParameter>(&self) -> bool {
        self.parameters.contains_key(&TypeId::of::<P>())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// True if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
