use std::collections::{HashMap, VecDeque};

use crate::{
    domain::logic::debt_graph_aggregator::DebtGraphAggregator,
    entities::{DebtGraph, Obligation, Participant},
    presentation::utils::fixed,
};

/// One payment that settles (part of) a debtor's balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub from: Participant,
    pub to: Participant,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettlementPreview {
    /// Net position per participant: positive when owed money.
    pub balances: Vec<(Participant, f64)>,
    pub transfers: Vec<Transfer>,
    pub original_count: usize,
}

/// Replaces the ledger's obligations with the fewest transfers that leave
/// every participant at their net balance. Participants are settled only
/// within the group of people they share obligations with.
#[derive(Debug, Default)]
pub struct SettlementSimplifier;

impl SettlementSimplifier {
    pub fn new() -> Self {
        Self
    }

    pub fn simplify(&self, obligations: &[Obligation]) -> SettlementPreview {
        let graph = DebtGraphAggregator::new(obligations).process();

        // Work in whole cents so that balances cancel exactly.
        let mut cents: HashMap<&str, i64> = HashMap::new();
        for edge in &graph.edges {
            let amount = (edge.amount * 100.0).round() as i64;
            *cents.entry(edge.to.as_str()).or_default() += amount;
            *cents.entry(edge.from.as_str()).or_default() -= amount;
        }

        let mut transfers = Vec::new();
        for group in connected_groups(&graph) {
            let mut creditors: Vec<(&Participant, i64)> = Vec::new();
            let mut debtors: Vec<(&Participant, i64)> = Vec::new();
            for p in group {
                match cents.get(p.as_str()).copied().unwrap_or(0) {
                    b if b > 0 => creditors.push((p, b)),
                    b if b < 0 => debtors.push((p, -b)),
                    _ => {}
                }
            }
            creditors.sort_by(|a, b| b.1.cmp(&a.1));
            debtors.sort_by(|a, b| b.1.cmp(&a.1));
            transfers.extend(match_balances(creditors, debtors));
        }

        let balances = graph
            .participants
            .iter()
            .map(|p| {
                let c = cents.get(p.as_str()).copied().unwrap_or(0);
                (p.clone(), c as f64 / 100.0)
            })
            .collect();

        tracing::debug!(
            original = obligations.len(),
            simplified = transfers.len(),
            "settlement simplified"
        );
        SettlementPreview {
            balances,
            transfers,
            original_count: obligations.len(),
        }
    }
}

impl SettlementPreview {
    pub fn simplified_count(&self) -> usize {
        self.transfers.len()
    }

    /// Share of obligations saved by settling with the simplified transfers,
    /// in percent to one decimal.
    pub fn reduction_percent(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        let saved = self.original_count as f64 - self.simplified_count() as f64;
        (saved / self.original_count as f64 * 1000.0).round() / 10.0
    }
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} must pay ${} to {}", self.from, fixed(self.amount, 2), self.to)
    }
}

/// Participants split into groups linked by at least one obligation, in order
/// of first appearance.
fn connected_groups(graph: &DebtGraph) -> Vec<Vec<&Participant>> {
    let mut neighbours: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in &graph.edges {
        neighbours
            .entry(edge.from.as_str())
            .or_default()
            .push(edge.to.as_str());
        neighbours
            .entry(edge.to.as_str())
            .or_default()
            .push(edge.from.as_str());
    }

    let mut group_of: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&Participant>> = Vec::new();
    for start in &graph.participants {
        if group_of.contains_key(start.as_str()) {
            continue;
        }
        let id = groups.len();
        groups.push(Vec::new());
        group_of.insert(start.as_str(), id);
        let mut queue = VecDeque::from([start.as_str()]);
        while let Some(name) = queue.pop_front() {
            for &next in neighbours.get(name).into_iter().flatten() {
                if !group_of.contains_key(next) {
                    group_of.insert(next, id);
                    queue.push_back(next);
                }
            }
        }
    }
    for p in &graph.participants {
        groups[group_of[p.as_str()]].push(p);
    }
    groups
}

/// Greedily pays the largest creditors first, largest debtors first. Amounts
/// are in cents.
fn match_balances(
    creditors: Vec<(&Participant, i64)>,
    debtors: Vec<(&Participant, i64)>,
) -> Vec<Transfer> {
    let mut transfers = Vec::new();
    let mut creditors = creditors.into_iter();
    let mut current = creditors.next();
    for (debtor, mut owed) in debtors {
        while owed > 0 {
            let Some((creditor, credit)) = current.as_mut() else {
                tracing::warn!(debtor = %debtor, "no creditor left for remaining debt");
                return transfers;
            };
            let paid = owed.min(*credit);
            transfers.push(Transfer {
                from: debtor.clone(),
                to: (*creditor).clone(),
                amount: paid as f64 / 100.0,
            });
            owed -= paid;
            *credit -= paid;
            if *credit == 0 {
                current = creditors.next();
            }
        }
    }
    transfers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ObligationSource;

    fn obligation(creditor: &str, debtor: &str, amount: f64) -> Obligation {
        Obligation {
            creditor: Participant::parse(creditor).unwrap(),
            debtor: Participant::parse(debtor).unwrap(),
            amount,
            source: ObligationSource::Manual { split_info: None },
        }
    }

    fn transfer_triples(preview: &SettlementPreview) -> Vec<(String, String, f64)> {
        preview
            .transfers
            .iter()
            .map(|t| (t.from.to_string(), t.to.to_string(), t.amount))
            .collect()
    }

    #[test]
    fn empty_ledger_needs_no_transfers() {
        let preview = SettlementSimplifier::new().simplify(&[]);
        assert!(preview.transfers.is_empty());
        assert_eq!(preview.reduction_percent(), 0.0);
    }

    #[test]
    fn balanced_pair_cancels_out() {
        let preview = SettlementSimplifier::new()
            .simplify(&[obligation("Alice", "Bob", 10.0), obligation("Bob", "Alice", 10.0)]);
        assert!(preview.transfers.is_empty());
        assert_eq!(preview.reduction_percent(), 100.0);
    }

    #[test]
    fn chain_collapses_to_a_single_transfer() {
        // B owes A 10, C owes B 10: C can pay A directly.
        let preview = SettlementSimplifier::new()
            .simplify(&[obligation("A", "B", 10.0), obligation("B", "C", 10.0)]);
        assert_eq!(
            transfer_triples(&preview),
            vec![("C".to_string(), "A".to_string(), 10.0)]
        );
        assert_eq!(preview.original_count, 2);
        assert_eq!(preview.reduction_percent(), 50.0);
    }

    #[test]
    fn balances_sum_to_zero() {
        let preview = SettlementSimplifier::new().simplify(&[
            obligation("A", "B", 33.33),
            obligation("A", "C", 33.33),
            obligation("C", "B", 5.0),
        ]);
        let total: f64 = preview.balances.iter().map(|(_, b)| b).sum();
        assert!(total.abs() < 1e-9);
        let paid_to_a: f64 = preview
            .transfers
            .iter()
            .filter(|t| t.to.as_str() == "A")
            .map(|t| t.amount)
            .sum();
        assert!((paid_to_a - 66.66).abs() < 1e-9);
    }

    #[test]
    fn separate_groups_settle_independently() {
        let preview = SettlementSimplifier::new()
            .simplify(&[obligation("A", "B", 5.0), obligation("X", "Y", 7.0)]);
        assert_eq!(
            transfer_triples(&preview),
            vec![
                ("B".to_string(), "A".to_string(), 5.0),
                ("Y".to_string(), "X".to_string(), 7.0),
            ]
        );
    }

    #[test]
    fn reduction_is_rounded_to_one_decimal() {
        // Three obligations in a cycle plus a chain settle with one transfer.
        let preview = SettlementSimplifier::new().simplify(&[
            obligation("A", "B", 5.0),
            obligation("B", "C", 5.0),
            obligation("C", "A", 5.0),
            obligation("D", "E", 1.0),
            obligation("E", "F", 1.0),
            obligation("F", "G", 1.0),
        ]);
        assert_eq!(preview.simplified_count(), 1);
        assert_eq!(preview.reduction_percent(), 83.3);
    }

    #[test]
    fn transfer_display() {
        let t = Transfer {
            from: Participant::parse("B").unwrap(),
            to: Participant::parse("A").unwrap(),
            amount: 4.5,
        };
        assert_eq!(t.to_string(), "B must pay $4.50 to A");
    }
}
