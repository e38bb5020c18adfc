use super::participant::Participant;

/// Commit tolerance on the percentage sum, absorbing float drift from
/// equal splits.
pub const ALLOCATION_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Creditor,
    Debtors,
    Amount,
    Confirm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebtorAllocation {
    pub(crate) name: Participant,
    pub(crate) percentage: f64,
    /// Derived from the split total and `percentage`; never set directly.
    pub(crate) amount: f64,
}

/// The transaction-in-progress: one creditor paying a total on behalf of
/// one or more debtors.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub(crate) creditor: Option<Participant>,
    pub(crate) amount: Option<f64>,
    pub(crate) debtors: Vec<DebtorAllocation>,
    pub(crate) step: Step,
}

// --

impl DebtorAllocation {
    pub fn name(&self) -> &Participant {
        &self.name
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Default for Split {
    fn default() -> Self {
        Self {
            creditor: None,
            amount: None,
            debtors: Vec::new(),
            step: Step::Creditor,
        }
    }
}

impl Split {
    pub fn creditor(&self) -> Option<&Participant> {
        self.creditor.as_ref()
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn debtors(&self) -> &[DebtorAllocation] {
        &self.debtors
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Steps up to and including the current one are shown; the creditor
    /// step always is.
    pub fn is_step_visible(&self, step: Step) -> bool {
        step == Step::Creditor || step <= self.step
    }

    pub fn sum_percent(&self) -> f64 {
        self.debtors.iter().map(|d| d.percentage).sum()
    }

    pub fn has_debtor(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    pub(crate) fn position_of(&self, name: &str) -> Option<usize> {
        self.debtors.iter().position(|d| d.name.as_str() == name)
    }
}
