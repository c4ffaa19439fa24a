use thiserror::Error;

/// Error type that captures ledger validation and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Raw amount input did not parse to a positive number. Recovered at the
    /// entry boundary; never reaches persistence.
    #[error("invalid amount `{0}`: expected a positive number")]
    InvalidAmount(String),
    /// Raw date input did not parse as a `YYYY-MM-DD` calendar date.
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Snapshot exists but cannot be read back as a well-formed ledger
    /// document. Callers are expected to surface this and continue with an
    /// empty ledger.
    #[error("corrupt ledger snapshot: {0}")]
    CorruptData(String),
    /// I/O failure while writing a snapshot. The in-memory ledger is
    /// unaffected by a failed write.
    #[error("write failure: {0}")]
    WriteFailure(#[from] std::io::Error),
}
