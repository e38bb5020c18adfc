use std::collections::BTreeSet;

use crate::errors::SplitUpError;

/// A participant name. Always trimmed and non-empty; compared by exact string
/// equality (no case folding).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Participant(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Creditor,
    Debtor,
}

#[derive(Debug, Default, Clone)]
pub struct ParticipantRegistry {
    names: BTreeSet<Participant>,
}

// --

impl Participant {
    pub fn parse(raw: &str) -> Result<Self, SplitUpError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SplitUpError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Participant {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new participant, returning the canonical (trimmed) name.
    pub fn add(&mut self, raw: &str) -> Result<Participant, SplitUpError> {
        let participant = Participant::parse(raw)?;
        if self.names.contains(&participant) {
            return Err(SplitUpError::Duplicate(participant.0));
        }
        self.names.insert(participant.clone());
        Ok(participant)
    }

    /// Registers the participant unless already known. Used when names arrive
    /// implicitly through imports or the builder.
    pub(crate) fn ensure(&mut self, participant: &Participant) {
        if !self.names.contains(participant) {
            self.names.insert(participant.clone());
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.names.contains(name.trim())
    }

    /// Sorted lexicographically, case-sensitive.
    pub fn list(&self) -> Vec<Participant> {
        self.names.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
