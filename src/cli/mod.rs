//! Presentation glue for the command-line shell. Everything here renders
//! ledger state or localizes labels; no ledger rule lives in this module.

pub mod output;
pub mod render;
pub mod text;
