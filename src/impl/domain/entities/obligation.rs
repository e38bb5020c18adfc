use super::participant::Participant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObligationSource {
    File {
        filename: String,
    },
    Manual {
        /// Present when the originating split had two or more debtors, e.g.
        /// `"33.3% of $100.00"`.
        split_info: Option<String>,
    },
}

/// A committed, flattened record: `debtor` owes `amount` to `creditor`.
#[derive(Debug, Clone, PartialEq)]
pub struct Obligation {
    pub creditor: Participant,
    pub debtor: Participant,
    pub amount: f64,
    pub source: ObligationSource,
}

/// Ordered, append-only list of obligations in creation order.
#[derive(Debug, Default, Clone)]
pub struct ObligationLedger {
    obligations: Vec<Obligation>,
}

// --

impl Obligation {
    pub fn filename(&self) -> Option<&str> {
        match &self.source {
            ObligationSource::File { filename } => Some(filename),
            ObligationSource::Manual { .. } => None,
        }
    }

    pub fn split_info(&self) -> Option<&str> {
        match &self.source {
            ObligationSource::Manual { split_info } => split_info.as_deref(),
            ObligationSource::File { .. } => None,
        }
    }
}

impl ObligationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, obligations: impl IntoIterator<Item = Obligation>) {
        self.obligations.extend(obligations);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Obligation> {
        (index < self.obligations.len()).then(|| self.obligations.remove(index))
    }

    /// Removes every obligation imported from `filename`, returning how many
    /// were dropped.
    pub fn remove_by_file(&mut self, filename: &str) -> usize {
        let before = self.obligations.len();
        self.obligations.retain(|o| o.filename() != Some(filename));
        before - self.obligations.len()
    }

    pub fn clear(&mut self) {
        self.obligations.clear();
    }

    pub fn snapshot(&self) -> &[Obligation] {
        &self.obligations
    }

    pub fn len(&self) -> usize {
        self.obligations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obligations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_obligation(creditor: &str, debtor: &str, amount: f64, filename: &str) -> Obligation {
        Obligation {
            creditor: Participant::parse(creditor).unwrap(),
            debtor: Participant::parse(debtor).unwrap(),
            amount,
            source: ObligationSource::File {
                filename: filename.to_string(),
            },
        }
    }

    fn manual_obligation(creditor: &str, debtor: &str, amount: f64) -> Obligation {
        Obligation {
            creditor: Participant::parse(creditor).unwrap(),
            debtor: Participant::parse(debtor).unwrap(),
            amount,
            source: ObligationSource::Manual { split_info: None },
        }
    }

    #[test]
    fn append_preserves_order_without_dedup() {
        let mut ledger = ObligationLedger::new();
        ledger.append(vec![manual_obligation("A", "B", 1.0)]);
        ledger.append(vec![
            manual_obligation("A", "B", 1.0),
            manual_obligation("C", "D", 2.0),
        ]);
        let debtors: Vec<_> = ledger.snapshot().iter().map(|o| o.debtor.as_str()).collect();
        assert_eq!(debtors, vec!["B", "B", "D"]);
    }

    #[test]
    fn remove_at_out_of_range_is_none() {
        let mut ledger = ObligationLedger::new();
        ledger.append(vec![manual_obligation("A", "B", 1.0)]);
        assert!(ledger.remove_at(1).is_none());
        assert_eq!(ledger.remove_at(0).map(|o| o.amount), Some(1.0));
        assert!(ledger.is_empty());
    }

    #[test]
    fn remove_by_file_only_touches_that_file() {
        let mut ledger = ObligationLedger::new();
        ledger.append(vec![
            file_obligation("A", "B", 1.0, "a.csv"),
            manual_obligation("A", "B", 2.0),
            file_obligation("A", "C", 3.0, "b.csv"),
            file_obligation("B", "C", 4.0, "a.csv"),
        ]);
        assert_eq!(ledger.remove_by_file("a.csv"), 2);
        let amounts: Vec<_> = ledger.snapshot().iter().map(|o| o.amount).collect();
        assert_eq!(amounts, vec![2.0, 3.0]);
        assert_eq!(ledger.remove_by_file("missing.csv"), 0);
    }

    #[test]
    fn source_accessors() {
        let file = file_obligation("A", "B", 1.0, "a.csv");
        assert_eq!(file.filename(), Some("a.csv"));
        assert_eq!(file.split_info(), None);
        let manual = Obligation {
            source: ObligationSource::Manual {
                split_info: Some("50.0% of $2.00".to_string()),
            },
            ..manual_obligation("A", "B", 1.0)
        };
        assert_eq!(manual.filename(), None);
        assert_eq!(manual.split_info(), Some("50.0% of $2.00"));
    }
}
