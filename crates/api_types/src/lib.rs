use serde::{Deserialize, Serialize};

/// Outcome marker carried by every response envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Body of every `"error"` response.
///
/// `fields` is only present for validation failures, `error` only for
/// internal failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: Status,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            fields: None,
            error: None,
        }
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

pub mod expense {
    use super::*;
    use serde_json::Value;

    /// Request body for recording an expense.
    ///
    /// Fields are kept as raw JSON so presence checks can follow the loose
    /// rules of the endpoint instead of failing deserialization.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseNew {
        pub amount: Option<Value>,
        pub description: Option<Value>,
        pub category: Option<Value>,
        pub date: Option<Value>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        /// Creation time in milliseconds since the Unix epoch.
        pub id: String,
        /// Non-finite amounts are serialized as `null`.
        pub amount: f64,
        pub description: String,
        pub category: String,
        pub date: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListResponse {
        pub status: Status,
        pub count: usize,
        pub data: Vec<Expense>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub status: Status,
        pub message: String,
        pub data: Expense,
    }
}
