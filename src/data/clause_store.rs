use super::{Clause, ClauseId};
use serde::{Serialize, Serializer};

/// Storage for clauses that also assigns unique, monotonically increasing
/// identifiers starting at 0.
#[derive(Default, Debug, Clone)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
}

impl ClauseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, clause: Clause) -> ClauseId {
        let id = ClauseId(self.clauses.len() as u32);
        self.clauses.push(clause);
        id
    }

    pub fn get(&self, id: ClauseId) -> Option<&Clause> {
        self.clauses.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The id the next inserted clause will receive.
    pub fn next_id(&self) -> ClauseId {
        ClauseId(self.clauses.len() as u32)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClauseId, &Clause)> {
        self.clauses
            .iter()
            .enumerate()
            .map(|(idx, clause)| (ClauseId(idx as u32), clause))
    }

    /// Render a clause by id, or `?N` for ids this set never issued.
    pub fn render(&self, id: ClauseId) -> String {
        self.get(id)
            .map(|clause| clause.to_string())
            .unwrap_or_else(|| format!("?{}", id))
    }
}

/// Serialized as the rendered clauses in id order.
impl Serialize for ClauseSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.clauses.iter().map(|clause| clause.to_string()))
    }
}
