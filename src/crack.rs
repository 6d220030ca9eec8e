//! Timeout- and cancellation-bounded search over a mask's candidate
//! space.
//!
//! Single-threaded by design. The only suspension points are the elapsed
//! check and the cancellation check at the top of each iteration, so a
//! cancel request is honored within one candidate's processing time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;
use sha1::{Digest, Sha1};

use crate::enumerate::CandidateEnumerator;

/// What the search compares digests against: one digest, or membership in
/// a set. Digests are normalized to lowercase hex at construction.
pub enum CrackTarget {
    Single(String),
    Set(FxHashSet<String>),
}

impl CrackTarget {
    pub fn single(digest: &str) -> Self {
        CrackTarget::Single(digest.to_ascii_lowercase())
    }

    pub fn set<I, T>(digests: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        CrackTarget::Set(
            digests
                .into_iter()
                .map(|digest| digest.as_ref().to_ascii_lowercase())
                .collect(),
        )
    }

    fn matches(&self, digest: &str) -> bool {
        match self {
            CrackTarget::Single(want) => want == digest,
            CrackTarget::Set(set) => set.contains(digest),
        }
    }
}

/// Cooperative cancellation handle. Cloning shares the flag; any clone can
/// cancel the search.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Terminal state of a search. Every variant carries whatever accumulated
/// before termination; partial results are never lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrackOutcome {
    /// Single-digest mode hit. The search stops at the first match.
    Found { plaintext: String, elapsed: Duration },
    /// Every candidate was enumerated without early termination.
    Exhausted { matches: u64, elapsed: Duration },
    /// The wall-clock budget ran out mid-traversal.
    TimedOut { matches: u64, elapsed: Duration },
    /// An external cancel request was honored mid-traversal.
    Interrupted { matches: u64, elapsed: Duration },
}

impl CrackOutcome {
    /// Match count accumulated before the terminal state.
    pub fn matches(&self) -> u64 {
        match self {
            CrackOutcome::Found { .. } => 1,
            CrackOutcome::Exhausted { matches, .. }
            | CrackOutcome::TimedOut { matches, .. }
            | CrackOutcome::Interrupted { matches, .. } => *matches,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            CrackOutcome::Found { elapsed, .. }
            | CrackOutcome::Exhausted { elapsed, .. }
            | CrackOutcome::TimedOut { elapsed, .. }
            | CrackOutcome::Interrupted { elapsed, .. } => *elapsed,
        }
    }

    /// Recovered plaintext, present only in the `Found` state.
    pub fn plaintext(&self) -> Option<&str> {
        match self {
            CrackOutcome::Found { plaintext, .. } => Some(plaintext),
            _ => None,
        }
    }
}

/// Lowercase hex SHA-1 of a candidate; the digest convention both sides
/// of every comparison use.
pub fn sha1_hex(candidate: &str) -> String {
    hex::encode(Sha1::digest(candidate.as_bytes()))
}

/// Drives the candidate enumerator against the target.
///
/// `timeout` of zero means unbounded. Both bounds are checked before each
/// candidate is hashed. In single-digest mode the search returns `Found`
/// on the first hit; in set mode every match is counted and the traversal
/// runs to exhaustion.
pub fn search(
    lists: &[&[String]],
    target: &CrackTarget,
    timeout: Duration,
    cancel: &CancelToken,
) -> CrackOutcome {
    let start = Instant::now();
    let mut matched: u64 = 0;

    for candidate in CandidateEnumerator::new(lists.to_vec()) {
        if cancel.is_cancelled() {
            return CrackOutcome::Interrupted {
                matches: matched,
                elapsed: start.elapsed(),
            };
        }
        if !timeout.is_zero() && start.elapsed() >= timeout {
            return CrackOutcome::TimedOut {
                matches: matched,
                elapsed: start.elapsed(),
            };
        }

        let digest = sha1_hex(&candidate);
        if target.matches(&digest) {
            match target {
                CrackTarget::Single(_) => {
                    return CrackOutcome::Found {
                        plaintext: candidate,
                        elapsed: start.elapsed(),
                    };
                }
                CrackTarget::Set(_) => matched += 1,
            }
        }
    }

    CrackOutcome::Exhausted {
        matches: matched,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharClasses;
    use crate::engine::Engine;
    use crate::mask;

    const SHA1_AB: &str = "da23614e02469a0d7c7bd1bdab5c9c474b1904dc";
    const SHA1_CD: &str = "034778198a045c1ed80be271cdd029b76874f6fc";
    const SHA1_Z9: &str = "b8454095abdc0b04b5fc7aeb4b6b93d08b097ce5";

    fn resolved(engine: &mut Engine<CharClasses>, mask_str: &str) -> Vec<Vec<String>> {
        let tokens = mask::parse(mask_str);
        engine
            .resolve_mask(&tokens)
            .unwrap()
            .into_iter()
            .map(<[String]>::to_vec)
            .collect()
    }

    fn as_refs(lists: &[Vec<String>]) -> Vec<&[String]> {
        lists.iter().map(Vec::as_slice).collect()
    }

    #[test]
    fn test_sha1_hex_convention() {
        assert_eq!(sha1_hex("ab"), SHA1_AB);
        assert_eq!(
            sha1_hex("hello"),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn test_single_target_found() {
        let mut engine = Engine::new(CharClasses::new());
        let lists = resolved(&mut engine, "lower digit");
        let target = CrackTarget::single(SHA1_Z9);

        let outcome = search(
            &as_refs(&lists),
            &target,
            Duration::ZERO,
            &CancelToken::new(),
        );
        assert_eq!(outcome.plaintext(), Some("z9"));
        assert_eq!(outcome.matches(), 1);
    }

    #[test]
    fn test_single_target_exhausted_without_match() {
        let mut engine = Engine::new(CharClasses::new());
        let lists = resolved(&mut engine, "digit digit");
        let target = CrackTarget::single(SHA1_AB);

        let outcome = search(
            &as_refs(&lists),
            &target,
            Duration::ZERO,
            &CancelToken::new(),
        );
        assert!(matches!(outcome, CrackOutcome::Exhausted { matches: 0, .. }));
        assert_eq!(outcome.plaintext(), None);
    }

    #[test]
    fn test_set_mode_counts_all_matches() {
        let mut engine = Engine::new(CharClasses::new());
        let lists = resolved(&mut engine, "lower lower");
        let target = CrackTarget::set([SHA1_AB, SHA1_CD]);

        let outcome = search(
            &as_refs(&lists),
            &target,
            Duration::ZERO,
            &CancelToken::new(),
        );
        assert!(matches!(outcome, CrackOutcome::Exhausted { matches: 2, .. }));
    }

    #[test]
    fn test_timeout_returns_partial_count() {
        let mut engine = Engine::new(CharClasses::new());
        let lists = resolved(&mut engine, "lower digit");
        let target = CrackTarget::single(SHA1_Z9);

        // A one-nanosecond budget expires before "z9" is reached late in
        // the traversal; the partial count comes back, not a fault.
        let outcome = search(
            &as_refs(&lists),
            &target,
            Duration::from_nanos(1),
            &CancelToken::new(),
        );
        assert!(matches!(outcome, CrackOutcome::TimedOut { matches: 0, .. }));
    }

    #[test]
    fn test_cancellation_is_graceful() {
        let mut engine = Engine::new(CharClasses::new());
        let lists = resolved(&mut engine, "lower lower");
        let target = CrackTarget::set([SHA1_AB]);

        let cancel = CancelToken::new();
        cancel.cancel();

        let outcome = search(&as_refs(&lists), &target, Duration::ZERO, &cancel);
        assert!(matches!(
            outcome,
            CrackOutcome::Interrupted { matches: 0, .. }
        ));
    }

    #[test]
    fn test_cancel_token_is_shared_across_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_target_normalizes_case() {
        let target = CrackTarget::single(&SHA1_AB.to_ascii_uppercase());
        assert!(target.matches(SHA1_AB));

        let set = CrackTarget::set([SHA1_CD.to_ascii_uppercase()]);
        assert!(set.matches(SHA1_CD));
    }
}
