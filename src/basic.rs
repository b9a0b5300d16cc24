//! Regex-driven atom-level splitting.

use crate::Tokenize;
use regex::Regex;

/// SMILES tokenization pattern after Schwaller et al.
///
/// Alternatives in matching priority order:
/// - bracket atoms: `[C@@H]`, `[nH]`, `[O-]`, ...
/// - two-letter halogens `Br`/`Cl` before single-letter `B`/`C`
/// - organic-subset atoms `B C N O S P F I` and aromatic `b c n o s p`
/// - branches `(` `)`, disconnection `.`, bonds `= # - : ~`
/// - charge `+`, stereo `\ / @`, wildcard `?`, reaction `>>`/`>`, `*`, `$`
/// - ring bonds: `%NN` before a single digit
pub const SMILES_REGEX_PATTERN: &str = r"(\[[^\]]+]|Br?|Cl?|N|O|S|P|F|I|b|c|n|o|s|p|\(|\)|\.|=|#|-|\+|\\|/|:|~|@|\?|>>?|\*|\$|%[0-9]{2}|[0-9])";

/// Splits a SMILES string into atom/bond substrings with one fixed regex.
///
/// Characters not matched by any alternative are silently dropped; this is
/// the pattern's implicit behavior and downstream vocabularies rely on it.
#[derive(Debug)]
pub struct BasicSmilesTokenizer {
    pattern: Regex,
}

impl BasicSmilesTokenizer {
    pub fn new() -> Self {
        Self {
            // the built-in pattern is known valid
            pattern: Regex::new(SMILES_REGEX_PATTERN).unwrap(),
        }
    }

    /// Build with a dialect pattern instead of the built-in one.
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for BasicSmilesTokenizer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenize for BasicSmilesTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        BasicSmilesTokenizer::new().tokenize(text)
    }

    #[test]
    fn splits_reference_smiles() {
        assert_eq!(
            tokenize("CCC(CC)COC(=O)[C@H](C)N"),
            [
                "C", "C", "C", "(", "C", "C", ")", "C", "O", "C", "(", "=", "O", ")", "[C@H]",
                "(", "C", ")", "N"
            ]
        );
    }

    #[test]
    fn halogens_match_before_single_letters() {
        assert_eq!(tokenize("BrCCl"), ["Br", "C", "Cl"]);
        // lone B and C still match through the optional second letter
        assert_eq!(tokenize("BC"), ["B", "C"]);
    }

    #[test]
    fn aromatic_ring() {
        assert_eq!(tokenize("c1ccccc1"), ["c", "1", "c", "c", "c", "c", "c", "1"]);
    }

    #[test]
    fn percent_ring_bond_beats_single_digit() {
        assert_eq!(tokenize("C%12CC%12"), ["C", "%12", "C", "C", "%12"]);
    }

    #[test]
    fn reaction_arrow_is_one_token() {
        assert_eq!(tokenize("C>>O"), ["C", ">>", "O"]);
        assert_eq!(tokenize("C>O"), ["C", ">", "O"]);
    }

    #[test]
    fn covered_input_concatenates_back() {
        for smiles in [
            "CCC(CC)COC(=O)[C@H](C)N",
            "c1ccccc1.[NH4+]",
            "C/C=C\\C#N",
            "C%99CC%99",
            "[13CH4]",
            "CC(=O)O~[Na]",
        ] {
            let joined = tokenize(smiles).concat();
            assert_eq!(joined, smiles, "pattern skipped characters of {smiles}");
        }
    }

    #[test]
    fn uncovered_characters_are_dropped() {
        // 'x' and whitespace have no alternative and vanish silently
        assert_eq!(tokenize("C xC"), ["C", "C"]);
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn dialect_pattern_is_injectable() {
        let tok = BasicSmilesTokenizer::with_pattern(r"[A-Z]").unwrap();
        assert_eq!(tok.tokenize("BrC"), ["B", "C"]);
        assert!(BasicSmilesTokenizer::with_pattern(r"[").is_err());
    }
}
