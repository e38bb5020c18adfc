use crate::{
    entities::{DebtorAllocation, Participant, Split, Step},
    errors::SplitUpError,
};

/// A debtor's share of `total` at `percentage`, to the cent: the product is
/// rounded to a whole number of cents first, then scaled back.
pub(crate) fn debtor_amount(total: f64, percentage: f64) -> f64 {
    (total * percentage).round() / 100.0
}

fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

impl Split {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the creditor. If the name was selected as a debtor it is dropped
    /// from the debtors and the remaining ones are split equally again.
    pub fn choose_creditor(&mut self, name: Participant) {
        if let Some(index) = self.position_of(name.as_str()) {
            self.debtors.remove(index);
            self.equal_split();
        }
        tracing::debug!(creditor = %name, "creditor chosen");
        self.creditor = Some(name);
        self.step = self.step.max(Step::Debtors);
        // Debtors and amount may already be filled in.
        if !self.debtors.is_empty() && self.step == Step::Debtors {
            self.step = Step::Amount;
        }
        if self.amount.is_some() && self.step == Step::Amount {
            self.step = Step::Confirm;
        }
        self.retreat_without_debtors();
    }

    /// Adds or removes a debtor and re-applies the equal split. Returns
    /// `false` (and leaves the split untouched) when `name` is the creditor.
    pub fn toggle_debtor(&mut self, name: Participant) -> bool {
        if self.creditor.as_ref() == Some(&name) {
            tracing::debug!(debtor = %name, "creditor cannot owe themselves; toggle ignored");
            return false;
        }
        match self.position_of(name.as_str()) {
            Some(index) => {
                self.debtors.remove(index);
            }
            None => self.debtors.push(DebtorAllocation {
                name,
                percentage: 0.0,
                amount: 0.0,
            }),
        }
        self.equal_split();
        self.on_debtors_changed();
        true
    }

    pub fn set_amount(&mut self, value: f64) -> Result<(), SplitUpError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SplitUpError::InvalidAmount);
        }
        self.amount = Some(value);
        self.recompute_amounts();
        if self.step == Step::Amount && !self.debtors.is_empty() {
            self.step = Step::Confirm;
        }
        tracing::debug!(amount = value, step = ?self.step, "split amount set");
        Ok(())
    }

    /// Overrides one debtor's percentage (clamped to [0, 100]). The other
    /// debtors keep their percentages.
    pub fn set_percentage(&mut self, index: usize, value: f64) -> Result<(), SplitUpError> {
        let len = self.debtors.len();
        let debtor = self
            .debtors
            .get_mut(index)
            .ok_or(SplitUpError::IndexOutOfRange { index, len })?;
        debtor.percentage = clamp_percentage(value);
        self.recompute_amounts();
        Ok(())
    }

    pub fn bump_percentage(&mut self, index: usize, delta: f64) -> Result<(), SplitUpError> {
        let current = self
            .debtors
            .get(index)
            .map(|d| d.percentage)
            .ok_or(SplitUpError::IndexOutOfRange {
                index,
                len: self.debtors.len(),
            })?;
        self.set_percentage(index, current + delta)
    }

    pub fn equal_split(&mut self) {
        if self.debtors.is_empty() {
            return;
        }
        let share = 100.0 / self.debtors.len() as f64;
        for debtor in &mut self.debtors {
            debtor.percentage = share;
        }
        self.recompute_amounts();
    }

    /// Drops a debtor without re-splitting the others. Returns whether the
    /// name was present.
    pub fn remove_debtor(&mut self, name: &str) -> bool {
        let Some(index) = self.position_of(name) else {
            return false;
        };
        self.debtors.remove(index);
        self.retreat_without_debtors();
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn recompute_amounts(&mut self) {
        let total = self.amount;
        for debtor in &mut self.debtors {
            debtor.amount = total.map_or(0.0, |t| debtor_amount(t, debtor.percentage));
        }
    }

    fn on_debtors_changed(&mut self) {
        if !self.debtors.is_empty() && self.step == Step::Debtors {
            self.step = Step::Amount;
        }
        self.retreat_without_debtors();
        tracing::debug!(debtors = self.debtors.len(), step = ?self.step, "debtors changed");
    }

    // The amount and confirm steps require at least one debtor.
    fn retreat_without_debtors(&mut self) {
        if self.debtors.is_empty() && self.step > Step::Debtors {
            self.step = Step::Debtors;
        }
    }
}
