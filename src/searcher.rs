use crate::cancel::CancelToken;
use crate::difficulty::Difficulty;
use crate::error::SearchError;
use crate::hash::{has_leading_zeros, hash, to_bin_string, B58Encode, Hash};
use crate::nonce::{Candidate, Nonce};
use log::{debug, trace};
use std::fmt::{Debug, Formatter};

/// How often (in attempts) a running search reports progress.
const PROGRESS_INTERVAL: Nonce = 1 << 20;

/// A nonce satisfying the difficulty, together with its digest.
#[derive(Clone, Eq, PartialEq)]
pub struct Solution {
    pub nonce: Nonce,
    pub digest: Hash,
    /// Number of candidates hashed, including the winning one.
    pub attempts: u128,
}

impl Solution {
    /// A solution found after trying every nonce from 0 up to `nonce`.
    pub fn new(nonce: Nonce, digest: Hash) -> Self {
        Solution {
            nonce,
            digest,
            // saturates for the very last nonce, which is the only one that would overflow
            attempts: nonce.saturating_add(1),
        }
    }

    /// The digest as a big-endian string of 256 `0`/`1` characters.
    pub fn binary_digest(&self) -> String {
        to_bin_string(&self.digest)
    }
}

impl Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Solution {{ nonce: {}, digest: {}, attempts: {} }}",
            self.nonce,
            self.digest.encode(),
            self.attempts
        )
    }
}

/// Searches for the smallest nonce such that `sha256(prefix ++ decimal(nonce))`
/// has at least `difficulty` leading zero bits.
pub struct NonceSearcher {
    prefix: Vec<u8>,
    difficulty: Difficulty,
}

impl NonceSearcher {
    pub fn new(prefix: impl Into<Vec<u8>>, difficulty: Difficulty) -> Self {
        NonceSearcher {
            prefix: prefix.into(),
            difficulty,
        }
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Tries nonces 0, 1, 2, ... and returns the first one whose digest meets the
    /// difficulty. `cancel` is checked before every candidate.
    pub fn find(&self, cancel: &CancelToken) -> Result<Solution, SearchError> {
        debug!(
            "Searching {:?} for {} leading zero bits",
            String::from_utf8_lossy(&self.prefix),
            self.difficulty
        );
        let mut candidate = Candidate::new(&self.prefix);
        let mut nonce: Nonce = 0;
        loop {
            if cancel.is_cancelled() {
                debug!("Search cancelled at nonce {}", nonce);
                return Err(SearchError::Cancelled { attempts: nonce });
            }
            let digest = hash(candidate.set(nonce));
            if has_leading_zeros(&digest, self.difficulty.bits()) {
                let solution = Solution::new(nonce, digest);
                debug!("Found {:?}", solution);
                return Ok(solution);
            }
            nonce = nonce
                .checked_add(1)
                .ok_or(SearchError::NonceSpaceExhausted)?;
            if nonce % PROGRESS_INTERVAL == 0 {
                trace!("{} attempts without a solution", nonce);
            }
        }
    }
}

/// Returns the smallest nonce for `prefix` meeting `difficulty` leading zero bits.
///
/// Fails fast if `difficulty` exceeds the digest length instead of searching forever.
pub fn find(prefix: &[u8], difficulty: u32) -> Result<Nonce, SearchError> {
    let searcher = NonceSearcher::new(prefix, Difficulty::new(difficulty)?);
    searcher.find(&CancelToken::new()).map(|s| s.nonce)
}

/// Checks a proposed answer: whether `sha256(prefix ++ answer)` meets `difficulty`.
pub fn verify(prefix: &[u8], answer: &[u8], difficulty: Difficulty) -> bool {
    let digest = hash(&[prefix, answer].concat());
    has_leading_zeros(&digest, difficulty.bits())
}
