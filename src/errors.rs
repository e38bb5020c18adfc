use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(WriteError, "Error writing file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    InvalidObligationAmount,
    "Invalid obligation amount: '{value}'.",
    { value: &str }
);

// Settlement-related.
define_client_error!(
    SettlementServerUnreachable,
    "Could not reach settlement server at '{url}'.",
    { url: &str }
);
define_client_error!(
    SettlementServerRejected,
    "Settlement server at '{url}' rejected the request with status {status}.",
    { url: &str, status: u16 }
);

/// User-recoverable failures of the split builder, the ledger and the
/// session workflows built on top of them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitUpError {
    #[error("Person already exists: '{0}'.")]
    Duplicate(String),

    #[error("Name cannot be empty.")]
    Empty,

    #[error("Please enter a valid amount.")]
    InvalidAmount,

    #[error("Please select a creditor.")]
    MissingCreditor,

    #[error("Please select at least one debtor.")]
    NoDebtors,

    #[error("Total percentages cannot exceed 100% (currently {total:.1}%).")]
    OverAllocated { total: f64 },

    #[error("Please set percentages for debtors.")]
    EmptyAllocation,

    #[error("Index {index} is out of range (length {len}).")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("File \"{0}\" is already uploaded.")]
    DuplicateFile(String),

    #[error("No valid transactions found in \"{0}\".")]
    EmptyFile(String),

    #[error("Error reading \"{filename}\". Please check the format ({details}).")]
    ParseError { filename: String, details: String },

    #[error("No transactions to process.")]
    EmptyLedger,

    #[error("Error exporting transactions ({details}).")]
    ExportFailed { details: String },

    #[error("A submission is already in progress.")]
    SubmitInProgress,

    #[error("Error processing transactions. Please try again ({details}).")]
    SubmitFailed { details: String },
}
