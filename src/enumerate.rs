//! Lazy Cartesian product over per-position member lists.

/// Yields every ordered combination of one member per position, joined
/// into a single string with no delimiter.
///
/// Order is the odometer order: the last position varies fastest, matching
/// nested-loop semantics over the supplied lists. The traversal is a pure
/// function of the lists; restarting means constructing a fresh
/// enumerator. An empty factor yields an empty product.
pub struct CandidateEnumerator<'a> {
    lists: Vec<&'a [String]>,
    odometer: Vec<usize>,
    exhausted: bool,
}

impl<'a> CandidateEnumerator<'a> {
    pub fn new(lists: Vec<&'a [String]>) -> Self {
        let exhausted = lists.is_empty() || lists.iter().any(|list| list.is_empty());
        let odometer = vec![0; lists.len()];
        Self {
            lists,
            odometer,
            exhausted,
        }
    }

    /// Number of candidates a full traversal yields.
    pub fn total(&self) -> u128 {
        if self.lists.is_empty() {
            return 0;
        }
        self.lists.iter().map(|list| list.len() as u128).product()
    }

    fn current(&self) -> String {
        let mut candidate = String::new();
        for (position, list) in self.lists.iter().enumerate() {
            candidate.push_str(&list[self.odometer[position]]);
        }
        candidate
    }

    fn advance(&mut self) {
        for position in (0..self.lists.len()).rev() {
            self.odometer[position] += 1;
            if self.odometer[position] < self.lists[position].len() {
                return;
            }
            self.odometer[position] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CandidateEnumerator<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let candidate = self.current();
        self.advance();
        Some(candidate)
    }
}
