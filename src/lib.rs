//! Atom-level SMILES tokenization for transformer pipelines.
//!
//! [`BasicSmilesTokenizer`] splits a SMILES string into chemically meaningful
//! substrings with a single regex; [`SmilesTokenizer`] maps those substrings
//! to integer ids through a line-oriented [`Vocab`] and assembles model-ready
//! sequences (special-token wrapping, padding).

mod basic;
mod error;
mod smiles;
mod vocab;

pub use basic::{BasicSmilesTokenizer, SMILES_REGEX_PATTERN};
pub use error::{LengthError, VocabError};
pub use smiles::{SmilesTokenizer, SpecialTokens};
pub use vocab::Vocab;

/// `utok` for token id.
#[allow(non_camel_case_types)]
pub type utok = u32;

/// Splitting a raw string into token substrings, without vocabulary awareness.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Vec<String>;
}
