use rustc_hash::FxHashMap;

use crate::fare::Fare;

/// The fare of every delivery in a dispatch, keyed by delivery identifier.
///
/// Iteration order is unspecified, use [`FareTable::sorted`] for a stable order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FareTable(FxHashMap<String, Fare>);

impl FareTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the fare of a delivery, returning the fare it replaced.
    pub fn insert(&mut self, delivery: impl Into<String>, fare: Fare) -> Option<Fare> {
        self.0.insert(delivery.into(), fare)
    }

    pub fn get(&self, delivery: &str) -> Option<Fare> {
        self.0.get(delivery).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Fare)> {
        self.0.iter().map(|(delivery, fare)| (delivery.as_str(), *fare))
    }

    /// Entries ordered by delivery identifier.
    pub fn sorted(&self) -> Vec<(&str, Fare)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

impl FromIterator<(String, Fare)> for FareTable {
    /// Later entries for the same delivery replace earlier ones.
    fn from_iter<T: IntoIterator<Item = (String, Fare)>>(iter: T) -> Self {
        let mut table = FareTable::new();
        iter.into_iter().for_each(|(delivery, fare)| {
            table.insert(delivery, fare);
        });
        table
    }
}

impl IntoIterator for FareTable {
    type Item = (String, Fare);
    type IntoIter = std::collections::hash_map::IntoIter<String, Fare>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
