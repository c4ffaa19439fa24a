//! Ledger domain models, validation, and on-demand aggregation.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod money;
pub mod transaction;

pub use category::{CategorySet, DEFAULT_CATEGORIES};
pub use ledger::{Aggregates, Ledger};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
