use crate::{
    domain::logic::{commit_processor::CommitProcessor, debt_graph_aggregator::DebtGraphAggregator},
    entities::{
        DebtGraph, ImportOutcome, ImportedFile, Obligation, ObligationLedger, Participant,
        ParticipantRegistry, Role, Split,
    },
    errors::SplitUpError,
};

/// Everything a user assembles in one sitting: known participants, the
/// obligation ledger, the imported files and the split being built.
///
/// All operations are synchronous and leave the session unchanged when they
/// fail.
#[derive(Debug, Default)]
pub struct Session {
    registry: ParticipantRegistry,
    ledger: ObligationLedger,
    imported_files: Vec<ImportedFile>,
    split: Split,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // Read access.
    // ---

    pub fn participants(&self) -> &ParticipantRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &ObligationLedger {
        &self.ledger
    }

    pub fn obligations(&self) -> &[Obligation] {
        self.ledger.snapshot()
    }

    pub fn split(&self) -> &Split {
        &self.split
    }

    pub fn imported_files(&self) -> &[ImportedFile] {
        &self.imported_files
    }

    pub fn has_imported(&self, filename: &str) -> bool {
        self.imported_files.iter().any(|f| f.filename == filename)
    }

    pub fn debt_graph(&self) -> DebtGraph {
        DebtGraphAggregator::new(self.ledger.snapshot()).process()
    }

    // Participants.
    // ---

    pub fn add_participant(&mut self, name: &str) -> Result<Participant, SplitUpError> {
        let participant = self.registry.add(name)?;
        tracing::debug!(participant = %participant, "participant added");
        Ok(participant)
    }

    /// Adds a new participant and immediately selects them in the split.
    pub fn add_participant_as(
        &mut self,
        name: &str,
        role: Role,
    ) -> Result<Participant, SplitUpError> {
        let participant = self.add_participant(name)?;
        match role {
            Role::Creditor => self.split.choose_creditor(participant.clone()),
            Role::Debtor => {
                self.split.toggle_debtor(participant.clone());
            }
        }
        Ok(participant)
    }

    // Split builder.
    // ---

    pub fn choose_creditor(&mut self, name: &str) -> Result<(), SplitUpError> {
        let participant = Participant::parse(name)?;
        self.registry.ensure(&participant);
        self.split.choose_creditor(participant);
        Ok(())
    }

    /// Returns `false` when the toggle was refused because `name` is the
    /// current creditor.
    pub fn toggle_debtor(&mut self, name: &str) -> Result<bool, SplitUpError> {
        let participant = Participant::parse(name)?;
        if self.split.creditor() == Some(&participant) {
            return Ok(false);
        }
        self.registry.ensure(&participant);
        Ok(self.split.toggle_debtor(participant))
    }

    pub fn set_amount(&mut self, value: f64) -> Result<(), SplitUpError> {
        self.split.set_amount(value)
    }

    /// Parses raw user input (e.g. the contents of an amount field).
    pub fn set_amount_input(&mut self, raw: &str) -> Result<(), SplitUpError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| SplitUpError::InvalidAmount)?;
        self.split.set_amount(value)
    }

    pub fn set_percentage(&mut self, index: usize, value: f64) -> Result<(), SplitUpError> {
        self.split.set_percentage(index, value)
    }

    pub fn bump_percentage(&mut self, index: usize, delta: f64) -> Result<(), SplitUpError> {
        self.split.bump_percentage(index, delta)
    }

    pub fn equal_split(&mut self) {
        self.split.equal_split();
    }

    pub fn remove_debtor(&mut self, name: &str) -> bool {
        self.split.remove_debtor(name.trim())
    }

    pub fn reset_split(&mut self) {
        self.split.reset();
    }

    /// Drains the split into the ledger, returning how many obligations were
    /// appended.
    pub fn commit(&mut self) -> Result<usize, SplitUpError> {
        let obligations = CommitProcessor::new(&self.split).process().map_err(|e| {
            tracing::debug!(error = %e, "split commit rejected");
            e
        })?;
        let count = obligations.len();
        self.ledger.append(obligations);
        self.split.reset();
        tracing::info!(count, total = self.ledger.len(), "split committed");
        Ok(count)
    }

    // Ledger.
    // ---

    pub fn remove_obligation(&mut self, index: usize) -> Result<Obligation, SplitUpError> {
        let len = self.ledger.len();
        self.ledger
            .remove_at(index)
            .ok_or(SplitUpError::IndexOutOfRange { index, len })
    }

    /// Appends the obligations parsed from `filename` in one step. The
    /// duplicate check is repeated here because another import of the same
    /// file may have completed while this one was being read.
    pub fn accept_import(&mut self, filename: &str, obligations: Vec<Obligation>) -> ImportOutcome {
        if self.has_imported(filename) {
            tracing::warn!(filename, "duplicate import rejected");
            return ImportOutcome::DuplicateFile(filename.to_string());
        }
        if obligations.is_empty() {
            tracing::warn!(filename, "import yielded no valid obligations");
            return ImportOutcome::EmptyFile(filename.to_string());
        }

        for o in &obligations {
            self.registry.ensure(&o.creditor);
            self.registry.ensure(&o.debtor);
        }
        let count = obligations.len();
        self.ledger.append(obligations);
        self.imported_files.push(ImportedFile {
            filename: filename.to_string(),
            obligation_count: count,
        });
        tracing::info!(filename, count, "file imported");
        ImportOutcome::Accepted {
            filename: filename.to_string(),
            count,
        }
    }

    /// Removes a file's obligations and forgets the file, so it may be
    /// imported again. Participants stay registered.
    pub fn remove_file(&mut self, filename: &str) -> usize {
        let removed = self.ledger.remove_by_file(filename);
        self.imported_files.retain(|f| f.filename != filename);
        tracing::info!(filename, removed, "file removed");
        removed
    }

    pub fn clear_all(&mut self) {
        self.ledger.clear();
        self.registry.clear();
        self.imported_files.clear();
        self.split.reset();
        tracing::info!("session cleared");
    }
}
