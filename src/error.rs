use std::{fmt, io, path::PathBuf, str::Utf8Error};

/// Failure while loading a vocabulary file.
#[derive(Debug)]
pub enum VocabError {
    /// The given path does not reference a readable file.
    NotFound(PathBuf),
    Io(io::Error),
    Utf8(Utf8Error),
    /// A token appeared on two lines; line is zero-based.
    Duplicate { token: String, line: usize },
    /// A configured special token is absent from the vocabulary.
    MissingSpecial(String),
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "can't find a vocab file at path '{}'", path.display())
            }
            Self::Io(e) => write!(f, "vocab file i/o error: {e}"),
            Self::Utf8(e) => write!(f, "vocab file is not valid utf-8: {e}"),
            Self::Duplicate { token, line } => {
                write!(f, "duplicate token '{token}' at line {line}")
            }
            Self::MissingSpecial(token) => {
                write!(f, "special token '{token}' is missing from the vocabulary")
            }
        }
    }
}

impl std::error::Error for VocabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for VocabError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<Utf8Error> for VocabError {
    fn from(e: Utf8Error) -> Self {
        Self::Utf8(e)
    }
}

/// Padding was requested to a target shorter than the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthError {
    pub len: usize,
    pub target: usize,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "can't pad {} tokens to target length {}",
            self.len, self.target
        )
    }
}

impl std::error::Error for LengthError {}
