pub use crate::cancel::CancelToken;
pub use crate::difficulty::Difficulty;
pub use crate::error::{ConfigError, SearchError};
pub use crate::hash::{has_leading_zeros, leading_zero_bits, B58Encode, Hash, HASH_BITS};
pub use crate::nonce::Nonce;
pub use crate::report::{render, Report};
pub use crate::searcher::{find, verify, NonceSearcher, Solution};

pub mod config;
pub mod difficulty;
pub mod hash;
pub mod nonce;
pub mod report;

mod cancel;
mod error;
mod searcher;
