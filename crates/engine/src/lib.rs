use chrono::Utc;
use std::sync::Arc;

pub use error::EngineError;
pub use expense::{Expense, ExpenseInput, Field};
pub use store::{ExpenseStore, MemoryStore};
use validation::{ValidationPolicy, validate};

mod error;
mod expense;
mod store;
mod validation;

type ResultEngine<T> = Result<T, EngineError>;

/// Records and lists expenses over an injected [`ExpenseStore`].
#[derive(Clone)]
pub struct Engine {
    store: Arc<dyn ExpenseStore>,
    policy: ValidationPolicy,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// All recorded expenses, oldest first.
    pub fn list_expenses(&self) -> ResultEngine<Vec<Expense>> {
        let expenses = self.store.list()?;
        tracing::debug!(count = expenses.len(), "listing expenses");
        Ok(expenses)
    }

    /// Validate `input`, stamp it with the current time and append it.
    ///
    /// Nothing is stored when validation fails.
    pub fn add_expense(&self, input: ExpenseInput) -> ResultEngine<Expense> {
        let valid = validate(input, self.policy)?;
        let expense = Expense::new(valid, Utc::now());
        self.store.append(expense.clone())?;

        tracing::info!(id = %expense.id, category = %expense.category, "expense added");
        Ok(expense)
    }
}

#[derive(Default)]
pub struct EngineBuilder {
    store: Option<Arc<dyn ExpenseStore>>,
    policy: ValidationPolicy,
}

impl EngineBuilder {
    /// Pass the backing store. Defaults to an empty [`MemoryStore`].
    pub fn store(mut self, store: impl ExpenseStore + 'static) -> EngineBuilder {
        self.store = Some(Arc::new(store));
        self
    }

    /// Whether a numeric zero `amount` is reported as missing.
    pub fn zero_amount_is_missing(mut self, value: bool) -> EngineBuilder {
        self.policy.zero_amount_is_missing = value;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryStore::default())),
            policy: self.policy,
        }
    }
}
