//! Vocabulary-aware tokenizer: regex splitting + id mapping + sequence assembly.

use crate::{
    BasicSmilesTokenizer, Tokenize, Vocab, utok,
    error::{LengthError, VocabError},
};
use std::{io, path::Path};

/// Reserved sentinel strings; the BERT-style defaults match the vocabulary
/// files shipped with rxnfp-derived models.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialTokens {
    pub unk: String,
    pub pad: String,
    pub cls: String,
    pub sep: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            unk: "[UNK]".to_string(),
            pad: "[PAD]".to_string(),
            cls: "[CLS]".to_string(),
            sep: "[SEP]".to_string(),
        }
    }
}

/// Turns a SMILES string into model-ready token ids and back.
///
/// Owns an immutable [`Vocab`] and delegates text splitting to a
/// [`BasicSmilesTokenizer`]; special-token ids are resolved once at
/// construction. Every operation is a pure read, so a constructed
/// tokenizer can be shared across threads freely.
#[derive(Debug)]
pub struct SmilesTokenizer {
    vocab: Vocab,
    basic: BasicSmilesTokenizer,
    special: SpecialTokens,
    unk: utok,
    pad: utok,
    cls: utok,
    sep: utok,
}

impl SmilesTokenizer {
    /// Fails with [`VocabError::MissingSpecial`] when the vocabulary lacks
    /// one of the configured sentinels.
    pub fn new(vocab: Vocab, special: SpecialTokens) -> Result<Self, VocabError> {
        let resolve = |token: &str| {
            vocab
                .token_to_id(token)
                .ok_or_else(|| VocabError::MissingSpecial(token.to_string()))
        };
        let unk = resolve(&special.unk)?;
        let pad = resolve(&special.pad)?;
        let cls = resolve(&special.cls)?;
        let sep = resolve(&special.sep)?;
        Ok(Self {
            vocab,
            basic: BasicSmilesTokenizer::new(),
            special,
            unk,
            pad,
            cls,
            sep,
        })
    }

    #[inline]
    pub fn from_vocab(vocab: Vocab) -> Result<Self, VocabError> {
        Self::new(vocab, SpecialTokens::default())
    }

    #[inline]
    pub fn from_txt_file(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        Self::from_vocab(Vocab::from_txt_file(path)?)
    }

    /// Swap in a dialect splitter; the vocabulary is untouched.
    pub fn with_basic_tokenizer(mut self, basic: BasicSmilesTokenizer) -> Self {
        self.basic = basic;
        self
    }

    /// Maps a token to its id, falling back to the unknown id. Never fails.
    #[inline]
    pub fn token_to_id(&self, token: &str) -> utok {
        self.vocab.token_to_id(token).unwrap_or(self.unk)
    }

    /// Maps an id to its token, falling back to the unknown token. Never fails.
    #[inline]
    pub fn id_to_token(&self, id: utok) -> &str {
        self.vocab.id_to_token(id).unwrap_or(&self.special.unk)
    }

    pub fn convert_tokens_to_ids<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<utok> {
        tokens
            .iter()
            .map(|token| self.token_to_id(token.as_ref()))
            .collect()
    }

    /// Tokenize + map; `add_special_tokens` wraps the result as `[CLS] … [SEP]`.
    pub fn encode(&self, text: &str, add_special_tokens: bool) -> Vec<utok> {
        let ids = self.convert_tokens_to_ids(&self.tokenize(text));
        if add_special_tokens {
            self.add_special_token_ids(&ids)
        } else {
            ids
        }
    }

    /// Inverse mapping plus [`tokens_to_string`](Self::tokens_to_string).
    pub fn decode(&self, ids: &[utok]) -> String {
        let tokens = ids.iter().map(|&id| self.id_to_token(id)).collect::<Vec<_>>();
        self.tokens_to_string(&tokens)
    }

    /// Joins tokens with single spaces, then removes the WordPiece
    /// continuation marker `" ##"`, then trims. Joining before stripping is
    /// what glues a `##`-prefixed piece onto its predecessor.
    pub fn tokens_to_string<T: AsRef<str>>(&self, tokens: &[T]) -> String {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
            .replace(" ##", "")
            .trim()
            .to_string()
    }

    /// `[CLS] A [SEP]` over ids.
    pub fn add_special_token_ids(&self, ids: &[utok]) -> Vec<utok> {
        let mut out = Vec::with_capacity(ids.len() + 2);
        out.push(self.cls);
        out.extend_from_slice(ids);
        out.push(self.sep);
        out
    }

    /// `[CLS] A [SEP] B [SEP]` over ids.
    pub fn add_special_token_ids_pair(&self, first: &[utok], second: &[utok]) -> Vec<utok> {
        let mut out = Vec::with_capacity(first.len() + second.len() + 3);
        out.push(self.cls);
        out.extend_from_slice(first);
        out.push(self.sep);
        out.extend_from_slice(second);
        out.push(self.sep);
        out
    }

    /// `[CLS] A [SEP]` over token strings.
    pub fn add_special_tokens(&self, tokens: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(tokens.len() + 2);
        out.push(self.special.cls.clone());
        out.extend_from_slice(tokens);
        out.push(self.special.sep.clone());
        out
    }

    /// Pads with the pad id up to `target_len`, to the right by default.
    pub fn pad(
        &self,
        ids: &[utok],
        target_len: usize,
        pad_right: bool,
    ) -> Result<Vec<utok>, LengthError> {
        if target_len < ids.len() {
            return Err(LengthError {
                len: ids.len(),
                target: target_len,
            });
        }
        let mut out = Vec::with_capacity(target_len);
        if pad_right {
            out.extend_from_slice(ids);
            out.resize(target_len, self.pad);
        } else {
            out.resize(target_len - ids.len(), self.pad);
            out.extend_from_slice(ids);
        }
        Ok(out)
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocab.size()
    }

    /// Tokens in ascending id order.
    pub fn vocab_list(&self) -> Vec<&str> {
        self.vocab.tokens().collect()
    }

    #[inline]
    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    #[inline]
    pub fn save_vocabulary(&self, path: impl AsRef<Path>) -> io::Result<()> {
        self.vocab.save_txt_file(path)
    }

    /// Highest id whose token is an `[unused…]` placeholder, if any; BERT
    /// vocabularies reserve these slots for downstream task tokens.
    pub fn highest_unused_index(&self) -> Option<utok> {
        self.vocab
            .iter()
            .filter(|(_, token)| token.starts_with("[unused"))
            .map(|(id, _)| id)
            .max()
    }

    #[inline]
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special
    }
    #[inline]
    pub fn unk_token_id(&self) -> utok {
        self.unk
    }
    #[inline]
    pub fn pad_token_id(&self) -> utok {
        self.pad
    }
    #[inline]
    pub fn cls_token_id(&self) -> utok {
        self.cls
    }
    #[inline]
    pub fn sep_token_id(&self) -> utok {
        self.sep
    }
}

impl Default for SmilesTokenizer {
    fn default() -> Self {
        // the built-in vocabulary always carries the default sentinels
        Self::from_vocab(Vocab::default_smiles()).unwrap()
    }
}

impl Tokenize for SmilesTokenizer {
    /// Delegates to the basic tokenizer; no further splitting.
    #[inline]
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.basic.tokenize(text)
    }
}
