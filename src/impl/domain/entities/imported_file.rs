use crate::errors::SplitUpError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFile {
    pub filename: String,
    pub obligation_count: usize,
}

/// Result of importing one obligations file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Accepted { filename: String, count: usize },
    DuplicateFile(String),
    EmptyFile(String),
    ParseError { filename: String, details: String },
}

// --

impl ImportOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ImportOutcome::Accepted { .. })
    }

    pub fn filename(&self) -> &str {
        match self {
            ImportOutcome::Accepted { filename, .. }
            | ImportOutcome::DuplicateFile(filename)
            | ImportOutcome::EmptyFile(filename)
            | ImportOutcome::ParseError { filename, .. } => filename,
        }
    }

    /// Number of accepted obligations, or the error to surface.
    pub fn into_result(self) -> Result<usize, SplitUpError> {
        match self {
            ImportOutcome::Accepted { count, .. } => Ok(count),
            ImportOutcome::DuplicateFile(filename) => Err(SplitUpError::DuplicateFile(filename)),
            ImportOutcome::EmptyFile(filename) => Err(SplitUpError::EmptyFile(filename)),
            ImportOutcome::ParseError { filename, details } => {
                Err(SplitUpError::ParseError { filename, details })
            }
        }
    }
}
