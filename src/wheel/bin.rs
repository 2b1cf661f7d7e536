//! The set of winning outcomes for one wheel position.

use alloc::collections::BTreeSet;
use alloc::collections::btree_set;

use crate::outcome::Outcome;

/// The winning outcomes for a single position on the wheel.
///
/// A bin is immutable: [`Bin::with`] returns a new bin holding the union of
/// the old outcomes and the added one. Iteration is ordered by outcome name,
/// then odds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bin {
    outcomes: BTreeSet<Outcome>,
}

impl Bin {
    /// Creates an empty bin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcomes: BTreeSet::new(),
        }
    }

    /// Returns a new bin containing this bin's outcomes plus `outcome`.
    #[must_use]
    pub fn with(&self, outcome: Outcome) -> Self {
        let mut outcomes = self.outcomes.clone();
        outcomes.insert(outcome);
        Self { outcomes }
    }

    /// Returns whether `outcome` pays off on this bin.
    #[must_use]
    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.outcomes.contains(outcome)
    }

    /// Returns an iterator over the outcomes in this bin.
    pub fn iter(&self) -> btree_set::Iter<'_, Outcome> {
        self.outcomes.iter()
    }

    /// Returns the number of outcomes in this bin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns whether the bin has no outcomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl FromIterator<Outcome> for Bin {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Bin {
    type Item = &'a Outcome;
    type IntoIter = btree_set::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
