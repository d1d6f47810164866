use crate::error::{ConfigError, SearchError};
use crate::hash::HASH_BITS;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The minimum number of leading zero bits a digest must have.
///
/// Always within `0..=256`, so every difficulty is satisfiable by some digest.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Difficulty(u32);

impl Difficulty {
    pub const MAX: u32 = HASH_BITS;

    pub fn new(bits: u32) -> Result<Self, SearchError> {
        Self::from_wide(bits as u64)
    }

    /// Like [`Difficulty::new`] for values that may not even fit a `u32`.
    pub fn from_wide(bits: u64) -> Result<Self, SearchError> {
        if bits > Self::MAX as u64 {
            return Err(SearchError::DifficultyOutOfRange {
                requested: bits,
                max: Self::MAX,
            });
        }
        Ok(Difficulty(bits as u32))
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses the leading base-10 integer of `text`, or 0 if there is none.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the first
/// non-digit. Negative numbers map to 0 since any digest has at least zero leading
/// zero bits. Values wider than `u64` saturate.
pub fn parse_lenient(text: &str) -> u64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add((d - b'0') as u64)
        });
    if negative {
        0
    } else {
        value
    }
}

/// Parses `text` as a whole base-10 integer, rejecting anything else.
pub fn parse_strict(text: &str) -> Result<u64, ConfigError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidDifficulty(text.to_string()));
    }
    text.parse()
        .map_err(|_| ConfigError::InvalidDifficulty(text.to_string()))
}
