use crate::entities::Obligation;

/// JSON body posted to the settlement endpoint.
#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct SettlementRequestModel<'a> {
    pub transactions: Vec<SettlementTransactionModel<'a>>,
}

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct SettlementTransactionModel<'a> {
    pub creditor: &'a str,
    pub debtor: &'a str,
    pub amount: f64,
}

impl<'a> From<&'a [Obligation]> for SettlementRequestModel<'a> {
    fn from(obligations: &'a [Obligation]) -> Self {
        Self {
            transactions: obligations
                .iter()
                .map(|o| SettlementTransactionModel {
                    creditor: o.creditor.as_str(),
                    debtor: o.debtor.as_str(),
                    amount: o.amount,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ObligationSource, Participant};

    #[test]
    fn serializes_only_the_wire_fields() {
        let obligations = vec![Obligation {
            creditor: Participant::parse("A").unwrap(),
            debtor: Participant::parse("B").unwrap(),
            amount: 12.5,
            source: ObligationSource::Manual {
                split_info: Some("50.0% of $25.00".to_string()),
            },
        }];
        let body = serde_json::to_value(SettlementRequestModel::from(obligations.as_slice()))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "transactions": [{ "creditor": "A", "debtor": "B", "amount": 12.5 }]
            })
        );
    }
}
