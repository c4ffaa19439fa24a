pub mod json_backend;

pub use json_backend::{load_transactions, save_transactions};
