//! Fixed character classes: the base alphabet every mask token ultimately
//! draws from.
//!
//! Class order matters twice over. Within `letter`, lowercase precedes
//! uppercase because that is the order the classes were registered; `any`
//! is punctuation, then digits, then letters. Enumeration order downstream
//! follows these lists verbatim.

use crate::engine::ClassSource;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Immutable registry of the fixed character classes.
///
/// Construction is total; there are no error paths. Each member is stored
/// as a single-character `String` so character and word classes present a
/// uniform shape to the resolver.
pub struct CharClasses {
    classes: Vec<(&'static str, Vec<String>)>,
}

fn units(chars: &str) -> Vec<String> {
    chars.chars().map(String::from).collect()
}

impl CharClasses {
    pub fn new() -> Self {
        let lower = units(LOWERCASE);
        let upper = units(UPPERCASE);
        let punc = units(PUNCTUATION);
        let digit = units(DIGITS);

        let mut letter = lower.clone();
        letter.extend(upper.iter().cloned());

        let mut any = punc.clone();
        any.extend(digit.iter().cloned());
        any.extend(letter.iter().cloned());

        Self {
            classes: vec![
                ("lower", lower),
                ("upper", upper),
                ("punc", punc),
                ("digit", digit),
                ("letter", letter),
                ("any", any),
            ],
        }
    }

    /// Ordered members of `token`, or `None` for an unknown class.
    pub fn members(&self, token: &str) -> Option<&[String]> {
        self.classes
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, members)| members.as_slice())
    }

    /// Base classes in registration order, excluding the `letter`/`any`
    /// unions. This is the order the lexicon seeds single-character
    /// entries in.
    pub fn base_classes(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.classes
            .iter()
            .filter(|(name, _)| *name != "letter" && *name != "any")
            .map(|(name, members)| (*name, members.as_slice()))
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassSource for CharClasses {
    fn members_of(&self, token: &str) -> Vec<String> {
        self.members(token).map(<[String]>::to_vec).unwrap_or_default()
    }

    // The registry is immutable after construction.
    fn version(&self) -> u64 {
        0
    }
}
