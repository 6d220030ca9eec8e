//! Mask grammar: a mask is a whitespace-delimited sequence of class
//! tokens, one per output position.

/// Splits a mask into its ordered tokens.
///
/// Splits on single spaces only and performs no legality checks; an
/// unknown token surfaces later, at resolution.
pub fn parse(mask: &str) -> Vec<String> {
    mask.split(' ').map(str::to_owned).collect()
}

/// Translates an external `?`-prefixed template (`?u?l?d?s` style) into
/// this grammar.
///
/// `u`, `l`, `d` and `s` map to `upper`, `lower`, `digit` and `punc`; any
/// other code maps to `anyc`. A literal prefix before the first `?` is
/// discarded, matching the external tool's fixed-text semantics.
pub fn from_template(template: &str) -> String {
    let tokens: Vec<&str> = template
        .split('?')
        .skip(1)
        .map(|code| match code {
            "u" => "upper",
            "l" => "lower",
            "d" => "digit",
            "s" => "punc",
            _ => "anyc",
        })
        .collect();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_spaces() {
        assert_eq!(parse("digit digit digit"), ["digit", "digit", "digit"]);
        assert_eq!(parse("noun"), ["noun"]);
    }

    #[test]
    fn test_parse_does_not_validate() {
        assert_eq!(parse("bogus digit"), ["bogus", "digit"]);
    }

    #[test]
    fn test_template_translation() {
        assert_eq!(from_template("?l?l?d?d"), "lower lower digit digit");
        assert_eq!(from_template("?u?s"), "upper punc");
    }

    #[test]
    fn test_template_unknown_code_is_anyc() {
        assert_eq!(from_template("?u?x"), "upper anyc");
        assert_eq!(from_template("?a?b"), "anyc anyc");
    }

    #[test]
    fn test_template_leading_literal_discarded() {
        assert_eq!(from_template("pass?d?d"), "digit digit");
    }

    #[test]
    fn test_template_empty() {
        assert_eq!(from_template(""), "");
    }
}
