use bs58::encode;
use sha2::{Digest, Sha256};

/// The length of a `Hash` (in bytes).
pub const HASH_LENGTH: usize = 32;
/// The length of a `Hash` (in bits).
pub const HASH_BITS: u32 = (HASH_LENGTH * 8) as u32;
pub type Hash = [u8; HASH_LENGTH];

pub fn hash(bytes: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

pub trait B58Encode {
    fn encode(&self) -> String;
}

impl B58Encode for Hash {
    fn encode(&self) -> String {
        encode(self).into_string()
    }
}

/// Counts the zero bits of `hash` read most-significant bit first, byte after byte,
/// up to the first set bit. An all-zero digest yields [`HASH_BITS`].
pub fn leading_zero_bits(hash: &[u8]) -> u32 {
    let mut zeros = 0;
    for byte in hash {
        zeros += byte.leading_zeros();
        if *byte != 0 {
            break;
        }
    }
    zeros
}

/// Whether `hash` starts with at least `leading` zero bits.
pub fn has_leading_zeros(hash: &[u8], leading: u32) -> bool {
    leading_zero_bits(hash) >= leading
}

/// Renders the digest as its big-endian bit string, e.g. for diagnostics.
pub fn to_bin_string(hash: &[u8]) -> String {
    hash.iter().map(|b| format!("{:08b}", b)).collect()
}
