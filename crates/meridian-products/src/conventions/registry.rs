//! Registry of named overnight future conventions.
//!
//! # Example
//!
//! ```rust
//! use meridian_products::conventions::{ConventionRegistry, OvernightFutureConventions};
//!
//! let registry = ConventionRegistry::global();
//! let convention = registry.lookup("GBP-SONIA-Quarterly-IMM").unwrap();
//! assert!(std::ptr::eq(convention, OvernightFutureConventions::gbp_sonia_quarterly_imm()));
//! ```

use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::definition::ConventionDefinition;
use super::{standard, OvernightFutureConvention};
use crate::error::{ProductError, ProductResult};

/// Conventions keyed by their unique name.
///
/// The global registry holds the standard conventions, is built on first
/// access and never changes afterwards. Further registries can be built
/// from [`ConventionRegistry::standard`] and extended with JSON definitions.
#[derive(Debug, Clone)]
pub struct ConventionRegistry {
    conventions: HashMap<String, OvernightFutureConvention>,
}

static GLOBAL_REGISTRY: OnceLock<ConventionRegistry> = OnceLock::new();

impl ConventionRegistry {
    /// The process-wide registry of standard conventions.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::standard)
    }

    /// A new registry holding the standard conventions.
    #[must_use]
    pub fn standard() -> Self {
        let conventions: HashMap<_, _> = standard::conventions()
            .into_iter()
            .map(|convention| (convention.name().to_string(), convention))
            .collect();
        debug!("registered {} overnight future conventions", conventions.len());
        Self { conventions }
    }

    /// Adds conventions described by a JSON array of definitions.
    ///
    /// ```rust
    /// use meridian_products::conventions::ConventionRegistry;
    ///
    /// let registry = ConventionRegistry::standard()
    ///     .with_definitions_json(
    ///         r#"[{"index": "EUR-ESTR", "date_sequence": "Quarterly-IMM", "accrual_method": "Compounded"}]"#,
    ///     )
    ///     .unwrap();
    /// assert!(registry.get("EUR-ESTR-Quarterly-IMM").is_some());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the JSON is malformed, a definition names an unknown index,
    /// sequence or accrual method, or a name is already registered.
    pub fn with_definitions_json(mut self, json: &str) -> ProductResult<Self> {
        let definitions: Vec<ConventionDefinition> = serde_json::from_str(json)
            .map_err(|e| ProductError::definition(format!("invalid convention JSON: {e}")))?;
        for definition in definitions {
            let convention = definition.to_convention()?;
            self.register(convention)?;
        }
        Ok(self)
    }

    /// Adds a single convention.
    ///
    /// # Errors
    ///
    /// [`ProductError::Definition`] if the name is already registered.
    pub fn register(&mut self, convention: OvernightFutureConvention) -> ProductResult<()> {
        if self.conventions.contains_key(convention.name()) {
            return Err(ProductError::definition(format!(
                "convention already registered: {}",
                convention.name()
            )));
        }
        debug!("registered overnight future convention {}", convention.name());
        self.conventions
            .insert(convention.name().to_string(), convention);
        Ok(())
    }

    /// The convention with exactly this name, if registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OvernightFutureConvention> {
        self.conventions.get(name)
    }

    /// Looks up a convention by name, falling back to a case-insensitive
    /// match.
    ///
    /// # Errors
    ///
    /// [`ProductError::NotFound`] for an unknown or blank name.
    pub fn lookup(&self, name: &str) -> ProductResult<&OvernightFutureConvention> {
        let not_found = || ProductError::not_found("OvernightFutureConvention", name);
        if name.trim().is_empty() {
            return Err(not_found());
        }
        self.get(name)
            .or_else(|| {
                self.conventions
                    .values()
                    .find(|convention| convention.name().eq_ignore_ascii_case(name))
            })
            .ok_or_else(not_found)
    }

    /// Every registered convention keyed by name.
    #[must_use]
    pub fn lookup_all(&self) -> &HashMap<String, OvernightFutureConvention> {
        &self.conventions
    }

    /// Number of registered conventions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }
}

/// Named access to the standard conventions in the global registry.
pub struct OvernightFutureConventions;

impl OvernightFutureConventions {
    /// Name of the three-month SONIA future convention.
    pub const GBP_SONIA_QUARTERLY_IMM: &'static str = "GBP-SONIA-Quarterly-IMM";
    /// Name of the three-month SOFR future convention.
    pub const USD_SOFR_QUARTERLY_IMM: &'static str = "USD-SOFR-Quarterly-IMM";
    /// Name of the one-month SOFR future convention.
    pub const USD_SOFR_MONTHLY_1ST: &'static str = "USD-SOFR-Monthly-1st";
    /// Name of the 30-day Fed Funds future convention.
    pub const USD_FED_FUND_MONTHLY_1ST: &'static str = "USD-FED-FUND-Monthly-1st";

    /// Three-month SONIA futures, IMM dates, compounded.
    pub fn gbp_sonia_quarterly_imm() -> &'static OvernightFutureConvention {
        Self::standard(Self::GBP_SONIA_QUARTERLY_IMM)
    }

    /// Three-month SOFR futures, IMM dates, compounded.
    pub fn usd_sofr_quarterly_imm() -> &'static OvernightFutureConvention {
        Self::standard(Self::USD_SOFR_QUARTERLY_IMM)
    }

    /// One-month SOFR futures, calendar months, averaged daily.
    pub fn usd_sofr_monthly_1st() -> &'static OvernightFutureConvention {
        Self::standard(Self::USD_SOFR_MONTHLY_1ST)
    }

    /// 30-day Fed Funds futures, calendar months, averaged daily.
    pub fn usd_fed_fund_monthly_1st() -> &'static OvernightFutureConvention {
        Self::standard(Self::USD_FED_FUND_MONTHLY_1ST)
    }

    fn standard(name: &str) -> &'static OvernightFutureConvention {
        ConventionRegistry::global()
            .get(name)
            .expect("standard conventions are always registered")
    }
}
