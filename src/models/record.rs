use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::{month_name, Period};

/// One persisted row: the running total remitted in a given month.
///
/// Field order matches the on-disk JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemittanceRecord {
    pub year: i32,
    pub month: i32,
    pub month_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub purpose: String,
}

impl RemittanceRecord {
    pub fn new(year: i32, month: i32, amount: Decimal, purpose: String) -> Self {
        Self {
            year,
            month,
            month_name: month_name(month).to_string(),
            amount,
            purpose,
        }
    }

    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }

    /// Month name derived from `month`, ignoring the stored copy.
    pub fn display_month(&self) -> &'static str {
        month_name(self.month)
    }
}

/// A remittance entered by the user, before it is merged into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRemittance {
    pub year: i32,
    pub month: i32,
    pub amount: Decimal,
    pub purpose: String,
}

impl NewRemittance {
    pub fn new(year: i32, month: i32, amount: Decimal, purpose: impl Into<String>) -> Self {
        Self {
            year,
            month,
            amount,
            purpose: purpose.into(),
        }
    }

    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }

    pub fn into_record(self) -> RemittanceRecord {
        RemittanceRecord::new(self.year, self.month, self.amount, self.purpose)
    }
}
