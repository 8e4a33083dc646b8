//! Expense records and the raw input they are built from.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A recorded expense. Never mutated once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: String,
}

impl Expense {
    /// Build a record stamped with `created_at` in epoch milliseconds.
    pub(crate) fn new(valid: ValidExpense, created_at: DateTime<Utc>) -> Self {
        Self {
            id: created_at.timestamp_millis().to_string(),
            amount: valid.amount,
            description: valid.description,
            category: valid.category,
            date: valid.date,
        }
    }
}

/// Unvalidated expense fields as received from a client.
#[derive(Clone, Debug, Default)]
pub struct ExpenseInput {
    pub amount: Option<Value>,
    pub description: Option<Value>,
    pub category: Option<Value>,
    pub date: Option<Value>,
}

/// Expense fields that passed presence validation.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ValidExpense {
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: String,
}

/// Required expense fields, in reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Amount,
    Description,
    Category,
    Date,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Amount, Field::Description, Field::Category, Field::Date];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Description => "description",
            Self::Category => "category",
            Self::Date => "date",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn id_is_epoch_millis() {
        let created_at = Utc.timestamp_millis_opt(1_704_067_200_123).unwrap();
        let valid = ValidExpense {
            amount: 12.5,
            description: "lunch".to_string(),
            category: "food".to_string(),
            date: "2024-01-01".to_string(),
        };

        let expense = Expense::new(valid, created_at);
        assert_eq!(expense.id, "1704067200123");
        assert_eq!(expense.amount, 12.5);
    }

    #[test]
    fn fields_are_in_reporting_order() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["amount", "description", "category", "date"]);
    }
}
