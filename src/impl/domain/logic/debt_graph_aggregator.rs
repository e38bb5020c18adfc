use std::collections::HashMap;

use crate::entities::{DebtEdge, DebtGraph, Obligation, Participant};

pub(crate) struct DebtGraphAggregator<'a> {
    obligations: &'a [Obligation],
}

impl<'a> DebtGraphAggregator<'a> {
    pub(crate) fn new(obligations: &'a [Obligation]) -> Self {
        Self { obligations }
    }

    pub(crate) fn process(self) -> DebtGraph {
        let mut participants: Vec<Participant> = Vec::new();
        let mut edges: Vec<DebtEdge> = Vec::new();
        let mut edge_index: HashMap<(&str, &str), usize> = HashMap::new();

        for obligation in self.obligations {
            for p in [&obligation.creditor, &obligation.debtor] {
                if !participants.contains(p) {
                    participants.push(p.clone());
                }
            }

            let key = (obligation.debtor.as_str(), obligation.creditor.as_str());
            match edge_index.get(&key) {
                Some(&i) => edges[i].amount += obligation.amount,
                None => {
                    edge_index.insert(key, edges.len());
                    edges.push(DebtEdge {
                        from: obligation.debtor.clone(),
                        to: obligation.creditor.clone(),
                        amount: obligation.amount,
                    });
                }
            }
        }

        DebtGraph {
            participants,
            edges,
        }
    }
}
