//! Trade-level information.

use meridian_core::Date;
use serde::{Deserialize, Serialize};

/// Information attached to a trade that is not part of the product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeInfo {
    /// Trade identifier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Date the trade was agreed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_date: Option<Date>,
}

impl TradeInfo {
    /// Trade information holding only a trade date.
    pub fn of(trade_date: Date) -> Self {
        Self {
            id: None,
            trade_date: Some(trade_date),
        }
    }

    /// Trade information with nothing set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the trade identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        let date = Date::from_ymd(2020, 1, 25).unwrap();
        let info = TradeInfo::of(date);
        assert_eq!(info.trade_date, Some(date));
        assert_eq!(info.id, None);
        assert_eq!(info.with_id("T1").id.as_deref(), Some("T1"));
        assert_eq!(TradeInfo::empty().trade_date, None);
    }
}
