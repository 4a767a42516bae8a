use std::fmt;

use crate::exports::Export;

const WORDS: usize = (Export::COUNT + 63) / 64;

/// A set of exports, one bit per export.
///
/// Unlike a `HashSet<Export>` this is fixed size and `Copy`, which makes it
/// cheap to hand out snapshots of the binding table.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExportSet {
    words: [u64; WORDS],
}

impl Default for ExportSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    /// Returns a set containing every export.
    #[must_use]
    pub fn all() -> Self {
        Export::ALL.iter().copied().collect()
    }

    /// Adds the export to the set, returning true if it was not already
    /// present.
    pub fn insert(&mut self, export: Export) -> bool {
        let (word, bit) = Self::position(export);
        let was_set = self.words[word] & bit != 0;
        self.words[word] |= bit;
        !was_set
    }

    /// Removes the export from the set, returning true if it was present.
    pub fn remove(&mut self, export: Export) -> bool {
        let (word, bit) = Self::position(export);
        let was_set = self.words[word] & bit != 0;
        self.words[word] &= !bit;
        was_set
    }

    #[must_use]
    pub fn contains(&self, export: Export) -> bool {
        let (word, bit) = Self::position(export);
        self.words[word] & bit != 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Returns the exports in `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut words = self.words;
        for (word, other) in words.iter_mut().zip(other.words.iter()) {
            *word &= !other;
        }
        Self { words }
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & b == 0)
    }

    /// Iterates over the exports in the set in table order.
    pub fn iter(&self) -> impl Iterator<Item = Export> + '_ {
        Export::ALL
            .iter()
            .copied()
            .filter(move |export| self.contains(*export))
    }

    fn position(export: Export) -> (usize, u64) {
        let index = export.index();
        (index / 64, 1 << (index % 64))
    }
}

impl FromIterator<Export> for ExportSet {
    fn from_iter<I: IntoIterator<Item = Export>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Export> for ExportSet {
    fn extend<I: IntoIterator<Item = Export>>(&mut self, iter: I) {
        for export in iter {
            self.insert(export);
        }
    }
}

impl fmt::Debug for ExportSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
