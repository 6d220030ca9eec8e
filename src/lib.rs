pub mod charset;
pub mod crack;
pub mod engine;
pub mod entropy;
pub mod enumerate;
pub mod error;
pub mod lexicon;
pub mod loader;
pub mod mask;

pub use charset::CharClasses;
pub use crack::{CancelToken, CrackOutcome, CrackTarget, search, sha1_hex};
pub use engine::{ClassSource, Engine};
pub use entropy::{HASH_RATE, bits_of_entropy, crack_time};
pub use enumerate::CandidateEnumerator;
pub use error::{EngineError, Result};
pub use lexicon::Lexicon;
pub use loader::{load_digests, load_lexicon};
pub use mask::{from_template, parse};
