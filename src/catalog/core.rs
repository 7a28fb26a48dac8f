use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::{Deserialize, Serialize};

use super::solution::Solution;

/// Quadruple key (`"i j k l"`) to the solutions found for it, in insertion
/// order. Equality is order-sensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleCatalog {
    entries: IndexMap<String, Vec<Solution>>,
}

impl PuzzleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a solution to `key`, creating the entry on first use
    pub fn push_solution(&mut self, key: &str, solution: Solution) {
        match self.entries.get_mut(key) {
            Some(solutions) => solutions.push(solution),
            None => {
                self.entries.insert(key.to_string(), vec![solution]);
            }
        }
    }

    /// Insert a whole entry; a new key goes last, an existing one keeps its place
    pub fn insert(&mut self, key: String, solutions: Vec<Solution>) -> Option<Vec<Solution>> {
        self.entries.insert(key, solutions)
    }

    pub fn get(&self, key: &str) -> Option<&Vec<Solution>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of quadruples with at least one solution
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total solutions across all quadruples
    pub fn solution_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<Solution>> {
        self.entries.iter()
    }

    /// Stable sort: most solutions first, ties keep their current order
    pub fn sort_by_solution_count(&mut self) {
        self.entries
            .sort_by(|_, left, _, right| right.len().cmp(&left.len()));
    }
}

impl PartialEq for PuzzleCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for PuzzleCatalog {}

impl IntoIterator for PuzzleCatalog {
    type Item = (String, Vec<Solution>);
    type IntoIter = IntoIter<String, Vec<Solution>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PuzzleCatalog {
    type Item = (&'a String, &'a Vec<Solution>);
    type IntoIter = Iter<'a, String, Vec<Solution>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, Vec<Solution>)> for PuzzleCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Solution>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
