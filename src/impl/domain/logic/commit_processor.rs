use crate::{
    entities::{Obligation, ObligationSource, Split, ALLOCATION_TOLERANCE},
    errors::SplitUpError,
    presentation::utils::split_info,
};

/// Validates a split and expands it into one obligation per debtor with a
/// non-zero share. Does not touch the split or the ledger.
pub(crate) struct CommitProcessor<'a> {
    split: &'a Split,
}

impl<'a> CommitProcessor<'a> {
    pub(crate) fn new(split: &'a Split) -> Self {
        Self { split }
    }

    pub(crate) fn process(self) -> Result<Vec<Obligation>, SplitUpError> {
        let creditor = self
            .split
            .creditor
            .as_ref()
            .ok_or(SplitUpError::MissingCreditor)?;
        let total = match self.split.amount {
            Some(t) if t.is_finite() && t > 0.0 => t,
            _ => return Err(SplitUpError::InvalidAmount),
        };
        if self.split.debtors.is_empty() {
            return Err(SplitUpError::NoDebtors);
        }
        let sum = self.split.sum_percent();
        if sum > 100.0 + ALLOCATION_TOLERANCE {
            return Err(SplitUpError::OverAllocated { total: sum });
        }
        if sum < ALLOCATION_TOLERANCE {
            return Err(SplitUpError::EmptyAllocation);
        }

        let with_split_info = self.split.debtors.len() > 1;
        Ok(self
            .split
            .debtors
            .iter()
            .filter(|d| d.amount > 0.0)
            .map(|d| Obligation {
                creditor: creditor.clone(),
                debtor: d.name.clone(),
                amount: d.amount,
                source: ObligationSource::Manual {
                    split_info: with_split_info.then(|| split_info(d.percentage, total)),
                },
            })
            .collect())
    }
}
