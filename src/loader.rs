//! Loaders for the two persisted resources the engine consumes: a
//! word/part-of-speech dictionary and a target digest set.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::Result;
use crate::lexicon::Lexicon;

#[derive(Deserialize)]
struct DictEntry {
    definitions: Vec<Definition>,
}

#[derive(Deserialize)]
struct Definition {
    part_of_speech: String,
}

/// Loads a JSON dictionary mapping each word to its definitions.
///
/// File order becomes catalog order, and catalog order is enumeration
/// order, so the map is parsed order-preserving rather than sorted.
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let file = File::open(path)?;
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_reader(BufReader::new(file))?;

    let mut lexicon = Lexicon::new();
    for (word, value) in raw {
        let entry: DictEntry = serde_json::from_value(value)?;
        let categories = entry
            .definitions
            .into_iter()
            .map(|definition| definition.part_of_speech);
        lexicon.insert(&word, categories);
    }
    Ok(lexicon)
}

/// Loads a JSON array of hex digests into the set the search consumes,
/// normalized to lowercase.
pub fn load_digests(path: &Path) -> Result<FxHashSet<String>> {
    let file = File::open(path)?;
    let digests: Vec<String> = serde_json::from_reader(BufReader::new(file))?;
    Ok(digests
        .into_iter()
        .map(|digest| digest.to_ascii_lowercase())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("passmask_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_lexicon_preserves_file_order() {
        let path = write_fixture(
            "dict.json",
            r#"{
                "zebra": {"definitions": [{"part_of_speech": "noun"}]},
                "amble": {"definitions": [{"part_of_speech": "verb"}, {"part_of_speech": "noun"}]},
                "misty": {"definitions": [{"part_of_speech": "adjective"}]}
            }"#,
        );

        let lexicon = load_lexicon(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lexicon.len(), 3);
        // Not alphabetical: file order is load-bearing.
        assert_eq!(lexicon.members_of("any"), ["zebra", "amble", "misty"]);
        assert_eq!(lexicon.categories_of("amble").unwrap(), ["verb", "noun"]);
    }

    #[test]
    fn test_load_lexicon_missing_file() {
        let result = load_lexicon(Path::new("/nonexistent/passmask/dict.json"));
        assert!(matches!(result, Err(crate::error::EngineError::Io(_))));
    }

    #[test]
    fn test_load_lexicon_malformed_json() {
        let path = write_fixture("bad.json", "{not json");
        let result = load_lexicon(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(crate::error::EngineError::Json(_))));
    }

    #[test]
    fn test_load_digests_normalizes_case() {
        let path = write_fixture(
            "digests.json",
            r#"["DA23614E02469A0D7C7BD1BDAB5C9C474B1904DC",
                "034778198a045c1ed80be271cdd029b76874f6fc"]"#,
        );

        let digests = load_digests(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(digests.len(), 2);
        assert!(digests.contains("da23614e02469a0d7c7bd1bdab5c9c474b1904dc"));
        assert!(digests.contains("034778198a045c1ed80be271cdd029b76874f6fc"));
    }
}
