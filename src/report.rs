use crate::difficulty::Difficulty;
use crate::hash::B58Encode;
use crate::searcher::{NonceSearcher, Solution};
use serde::Serialize;

/// The `--json` output line.
#[derive(Serialize, Debug)]
pub struct Report {
    /// Lossy UTF-8 rendering of the prefix bytes.
    pub prefix: String,
    pub difficulty: Difficulty,
    /// Decimal, since nonces may exceed what JSON numbers hold exactly.
    pub nonce: String,
    pub attempts: String,
    /// Base58 encoded digest.
    pub digest: String,
}

impl Report {
    pub fn new(searcher: &NonceSearcher, solution: &Solution) -> Self {
        Report {
            prefix: String::from_utf8_lossy(searcher.prefix()).into_owned(),
            difficulty: searcher.difficulty(),
            nonce: solution.nonce.to_string(),
            attempts: solution.attempts.to_string(),
            digest: solution.digest.encode(),
        }
    }
}

/// The result line: the bare decimal nonce, or a JSON [`Report`] if `json` is set.
pub fn render(
    searcher: &NonceSearcher,
    solution: &Solution,
    json: bool,
) -> serde_json::Result<String> {
    if !json {
        return Ok(solution.nonce.to_string());
    }
    serde_json::to_string(&Report::new(searcher, solution))
}
