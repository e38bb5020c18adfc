use super::participant::Participant;

/// Total owed by `from` (a debtor) to `to` (a creditor).
#[derive(Debug, Clone, PartialEq)]
pub struct DebtEdge {
    pub from: Participant,
    pub to: Participant,
    pub amount: f64,
}

/// Ledger obligations aggregated per (debtor → creditor) pair. Participants
/// and edges are listed in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebtGraph {
    pub participants: Vec<Participant>,
    pub edges: Vec<DebtEdge>,
}

impl DebtGraph {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&DebtEdge> {
        self.edges
            .iter()
            .find(|e| e.from.as_str() == from && e.to.as_str() == to)
    }
}
