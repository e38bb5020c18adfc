use crate::entities::{DebtorAllocation, Obligation, ObligationSource};

use super::utils::{fixed, format_amount};

impl std::fmt::Display for Obligation {
    /// `"<creditor> paid $<amount> to <debtor>"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} paid {} to {}",
            self.creditor,
            format_amount(self.amount),
            self.debtor
        )
    }
}

impl Obligation {
    pub fn source_label(&self) -> String {
        match &self.source {
            ObligationSource::File { filename } => format!("file: {}", filename),
            ObligationSource::Manual { .. } => "manual".to_string(),
        }
    }

    /// Full listing entry: the obligation, its split details when present, and
    /// where it came from.
    pub fn describe(&self) -> String {
        match self.split_info() {
            Some(info) => format!(
                "{}\n  Split payment: {}\n  [{}]",
                self,
                info,
                self.source_label()
            ),
            None => format!("{}\n  [{}]", self, self.source_label()),
        }
    }
}

impl std::fmt::Display for DebtorAllocation {
    /// `"<name>  <pct>%  $<amount>"`, as shown next to each selected debtor.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  {}%  {}",
            self.name,
            fixed(self.percentage, 1),
            format_amount(self.amount)
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{Obligation, ObligationSource, Participant, Split};

    fn obligation(source: ObligationSource) -> Obligation {
        Obligation {
            creditor: Participant::parse("Alice").unwrap(),
            debtor: Participant::parse("Bob").unwrap(),
            amount: 1250.5,
            source,
        }
    }

    #[test]
    fn display_reads_as_a_sentence() {
        let o = obligation(ObligationSource::Manual { split_info: None });
        assert_eq!(o.to_string(), "Alice paid $1,250.50 to Bob");
    }

    #[test]
    fn describe_includes_split_and_source() {
        let o = obligation(ObligationSource::Manual {
            split_info: Some("50.0% of $2,501.00".to_string()),
        });
        assert_eq!(
            o.describe(),
            "Alice paid $1,250.50 to Bob\n  Split payment: 50.0% of $2,501.00\n  [manual]"
        );

        let o = obligation(ObligationSource::File {
            filename: "trip.csv".to_string(),
        });
        assert_eq!(o.describe(), "Alice paid $1,250.50 to Bob\n  [file: trip.csv]");
    }

    #[test]
    fn debtor_allocation_line() {
        let mut split = Split::new();
        split.choose_creditor(Participant::parse("A").unwrap());
        split.toggle_debtor(Participant::parse("B").unwrap());
        split.toggle_debtor(Participant::parse("C").unwrap());
        split.set_amount(100.0).unwrap();
        assert_eq!(split.debtors()[0].to_string(), "B  50.0%  $50.00");
    }
}
