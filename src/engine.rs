//! Class resolution with per-instance memoization, plus mask-level
//! derived operations: possibility counting and random sampling.

use std::collections::HashMap;

use rand::prelude::IndexedRandom;

use crate::error::{EngineError, Result};

/// A source of ordered class member lists.
///
/// The character registry and the lexical catalog both implement this; the
/// engine is generic over whichever is active rather than specializing per
/// catalog kind.
pub trait ClassSource {
    /// Ordered members of `token`; empty when the token is unknown.
    fn members_of(&self, token: &str) -> Vec<String>;

    /// Generation counter, bumped by every committing mutation. A member
    /// list cached under an older generation must not be trusted.
    fn version(&self) -> u64;
}

/// Owns a class source and a memoization cache over it.
///
/// The cache is tagged with the source generation it was filled under and
/// dropped in full the moment the generation moves. Stale lists would
/// silently produce wrong enumerations, so this is a correctness
/// invariant, not a performance detail.
pub struct Engine<S: ClassSource> {
    source: S,
    memo: HashMap<String, Vec<String>>,
    memo_version: u64,
}

impl<S: ClassSource> Engine<S> {
    pub fn new(source: S) -> Self {
        let memo_version = source.version();
        Self {
            source,
            memo: HashMap::new(),
            memo_version,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable catalog access. A committing mutation bumps the source
    /// version and the memo is discarded on the next resolution.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    fn sync_memo(&mut self) {
        let current = self.source.version();
        if current != self.memo_version {
            self.memo.clear();
            self.memo_version = current;
        }
    }

    /// Ordered member list for `token`, computed once per catalog
    /// generation.
    pub fn resolve(&mut self, token: &str) -> Result<&[String]> {
        self.sync_memo();
        if !self.memo.contains_key(token) {
            let members = self.source.members_of(token);
            if members.is_empty() {
                return Err(EngineError::EmptyPositionClass(token.to_owned()));
            }
            self.memo.insert(token.to_owned(), members);
        }
        Ok(self.memo[token].as_slice())
    }

    /// Product of per-position class sizes across the mask.
    ///
    /// Uses the same cache as candidate generation, so the estimate and
    /// the actual enumeration can never disagree.
    pub fn possibility_count(&mut self, tokens: &[String]) -> Result<u128> {
        let mut possibilities: u128 = 1;
        for token in tokens {
            possibilities *= self.resolve(token)?.len() as u128;
        }
        Ok(possibilities)
    }

    /// Member lists for every mask position, in mask order.
    pub fn resolve_mask(&mut self, tokens: &[String]) -> Result<Vec<&[String]>> {
        for token in tokens {
            self.resolve(token)?;
        }
        Ok(tokens.iter().map(|token| self.memo[token].as_slice()).collect())
    }

    /// One uniformly random member per mask position, concatenated in
    /// order. Produces demo and test samples; the randomness quality is
    /// not a security property here.
    pub fn sample(&mut self, tokens: &[String]) -> Result<String> {
        let mut rng = rand::rng();
        let mut passphrase = String::new();
        for token in tokens {
            let members = self.resolve(token)?;
            if let Some(member) = members.choose(&mut rng) {
                passphrase.push_str(member);
            }
        }
        Ok(passphrase)
    }
}
