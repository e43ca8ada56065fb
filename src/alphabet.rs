//! Symbol Alphabet
//!
//! The fixed, ordered set of symbols the classifier can emit. The alphabet is
//! configuration, not logic: the default matches the reference model's class
//! ordering (digits `1`-`9` followed by uppercase `A`-`Z`), but any ordered
//! set of distinct characters is valid as long as it matches the classifier's
//! training labels.

use serde::{Deserialize, Serialize};

/// One classified output unit (a digit or letter) from the fixed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub char);

impl Symbol {
    /// The underlying character
    #[inline]
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered alphabet mapping classifier class indices to symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build from an ordered character set. Fails on an empty set or
    /// duplicate characters, since class indices must map one-to-one.
    pub fn from_charset(charset: &str) -> crate::Result<Self> {
        let symbols: Vec<Symbol> = charset.chars().map(Symbol).collect();
        if symbols.is_empty() {
            return Err(crate::Error::Config("alphabet must not be empty".to_string()));
        }
        for (i, sym) in symbols.iter().enumerate() {
            if symbols[..i].contains(sym) {
                return Err(crate::Error::Config(format!(
                    "alphabet contains duplicate symbol '{}'",
                    sym
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// Symbol for a classifier class index
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.symbols.get(index).copied()
    }

    /// Class index of a symbol
    pub fn position(&self, symbol: Symbol) -> Option<usize> {
        self.symbols.iter().position(|s| *s == symbol)
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the alphabet has no symbols (unreachable after construction)
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate symbols in class order
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// The default charset string: digits 1-9 then A-Z (35 classes)
    pub fn default_charset() -> String {
        let mut charset: String = ('1'..='9').collect();
        charset.extend('A'..='Z');
        charset
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        // default_charset is non-empty and duplicate-free
        Self::from_charset(&Self::default_charset()).unwrap()
    }
}
