//! Line-oriented token vocabulary: one token per line, line index = id.

use crate::{error::VocabError, utok};
use memmap2::Mmap;
use patricia_tree::PatriciaMap;
use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, Write},
    path::Path,
};

/// An immutable token ↔ id mapping.
///
/// The forward map lives in a prefix trie, the reverse map in an id-ordered
/// tree; the two are kept consistent by every constructor.
#[derive(Debug)]
pub struct Vocab {
    /// token -> id
    trie: PatriciaMap<utok>,
    /// id -> token, ordered by id
    words: BTreeMap<utok, String>,
}

impl Vocab {
    /// Loads a vocabulary file. Each line (trailing newline stripped) becomes
    /// one entry, the zero-based line index its id. Duplicate tokens are
    /// rejected: letting a later line overwrite an earlier one would leave
    /// the reverse map pointing at an id the forward map no longer returns.
    pub fn from_txt_file(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(VocabError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Self {
                trie: PatriciaMap::new(),
                words: BTreeMap::new(),
            });
        }
        let mmap = unsafe { Mmap::map(&file) }?;
        let text = std::str::from_utf8(&mmap)?;

        let mut trie = PatriciaMap::new();
        let mut words = BTreeMap::new();
        for (i, token) in text.lines().enumerate() {
            let id = i as utok;
            if trie.insert(token, id).is_some() {
                return Err(VocabError::Duplicate {
                    token: token.to_string(),
                    line: i,
                });
            }
            words.insert(id, token.to_string());
        }

        log::info!(
            "loaded vocabulary of {} tokens from {}",
            words.len(),
            path.display()
        );
        Ok(Self { trie, words })
    }

    /// Builds from explicit (token, id) pairs; ids need not be contiguous.
    /// A repeated token or id replaces the earlier pair, with both maps
    /// updated together.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, utok)>) -> Self {
        let mut trie = PatriciaMap::new();
        let mut words = BTreeMap::new();
        for (token, id) in pairs {
            if let Some(prev_id) = trie.insert(&token, id) {
                if prev_id != id {
                    words.remove(&prev_id);
                }
            }
            if let Some(prev_token) = words.insert(id, token.clone()) {
                if prev_token != token {
                    trie.remove(&prev_token);
                }
            }
        }
        Self { trie, words }
    }

    /// A built-in vocabulary covering the closed token set of the default
    /// pattern plus the `[UNK] [PAD] [CLS] [SEP]` sentinels.
    pub fn default_smiles() -> Self {
        Self::from_pairs(
            DEFAULT_SMILES_VOCAB
                .iter()
                .enumerate()
                .map(|(i, &token)| (token.to_string(), i as utok)),
        )
    }

    /// Writes one token per line in ascending id order. Non-contiguous ids
    /// are logged as a warning and the save proceeds; the written file
    /// re-assigns ids by line index.
    pub fn save_txt_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        let mut expected = 0;
        for (&id, token) in &self.words {
            if id != expected {
                log::warn!(
                    "saving vocabulary to {}: ids are not consecutive at {id}, \
                     line order will not match ids",
                    path.display()
                );
                expected = id;
            }
            writeln!(file, "{token}")?;
            expected += 1;
        }
        Ok(())
    }

    #[inline]
    pub fn token_to_id(&self, token: &str) -> Option<utok> {
        self.trie.get(token).copied()
    }

    #[inline]
    pub fn id_to_token(&self, id: utok) -> Option<&str> {
        self.words.get(&id).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.trie.get(token).is_some()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// Tokens in ascending id order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.words.values().map(String::as_str)
    }

    /// (id, token) pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (utok, &str)> {
        self.words.iter().map(|(&id, token)| (id, token.as_str()))
    }
}

/// Sentinels first, then the single tokens the default pattern can emit and
/// a handful of bracket atoms common in drug-like molecules.
const DEFAULT_SMILES_VOCAB: &[&str] = &[
    "[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]",
    // organic subset
    "B", "C", "N", "O", "S", "P", "F", "I", "Br", "Cl",
    // aromatic forms
    "b", "c", "n", "o", "s", "p",
    // bonds, branches, stereo, reaction
    "(", ")", ".", "=", "#", "-", "+", "\\", "/", ":", "~", "@", "?", ">", ">>", "*", "$", "%",
    // ring-bond digits
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    // common bracket atoms
    "[C@H]", "[C@@H]", "[C@]", "[C@@]", "[CH]", "[CH2]", "[nH]", "[NH]", "[N+]", "[NH+]",
    "[NH2+]", "[NH3+]", "[N-]", "[O-]", "[OH-]", "[S+]", "[S-]", "[s+]", "[n+]", "[nH+]",
    "[Na+]", "[K+]", "[Cl-]", "[Br-]", "[I-]", "[H]", "[2H]", "[13C]", "[13CH]", "[Si]",
    "[Se]", "[se]", "[B-]", "[P+]",
];
