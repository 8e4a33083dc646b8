//! Storage seam for expenses.

use std::sync::RwLock;

use crate::{EngineError, expense::Expense};

/// Append-only expense storage.
///
/// `list` returns records in insertion order.
pub trait ExpenseStore: Send + Sync {
    fn list(&self) -> Result<Vec<Expense>, EngineError>;

    fn append(&self, expense: Expense) -> Result<(), EngineError>;
}

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    expenses: RwLock<Vec<Expense>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpenseStore for MemoryStore {
    fn list(&self) -> Result<Vec<Expense>, EngineError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|err| EngineError::Storage(err.to_string()))?;
        Ok(expenses.clone())
    }

    fn append(&self, expense: Expense) -> Result<(), EngineError> {
        self.expenses
            .write()
            .map_err(|err| EngineError::Storage(err.to_string()))?
            .push(expense);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str) -> Expense {
        Expense {
            id: id.to_string(),
            amount: 1.0,
            description: "coffee".to_string(),
            category: "food".to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn starts_empty() {
        assert!(MemoryStore::new().list().unwrap().is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let store = MemoryStore::new();
        store.append(expense("2")).unwrap();
        store.append(expense("1")).unwrap();
        store.append(expense("3")).unwrap();

        let ids: Vec<_> = store.list().unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }
}
