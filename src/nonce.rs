use std::io::Write;

/// The search counter. Wide enough that no feasible search can exhaust it.
pub type Nonce = u128;

/// The bytes hashed for one candidate: the prefix followed by the decimal
/// text of the nonce.
///
/// The prefix is written once, every [`Candidate::set`] only rewrites the
/// nonce digits behind it.
pub struct Candidate {
    bytes: Vec<u8>,
    prefix_len: usize,
}

impl Candidate {
    pub fn new(prefix: &[u8]) -> Self {
        // u128::MAX has 39 decimal digits
        let mut bytes = Vec::with_capacity(prefix.len() + 39);
        bytes.extend_from_slice(prefix);
        Candidate {
            bytes,
            prefix_len: prefix.len(),
        }
    }

    /// Replaces the nonce part with the canonical decimal form of `nonce`.
    pub fn set(&mut self, nonce: Nonce) -> &[u8] {
        self.bytes.truncate(self.prefix_len);
        write!(self.bytes, "{}", nonce).expect("writing to a Vec never fails");
        &self.bytes
    }
}

#[cfg(test)]
mod test {
    use crate::nonce::Candidate;

    #[test]
    fn decimal_text() {
        let mut candidate = Candidate::new(b"abc");
        assert_eq!(candidate.set(0), b"abc0");
        assert_eq!(candidate.set(42), b"abc42");
        assert_eq!(candidate.set(7), b"abc7");
        assert_eq!(
            candidate.set(u128::MAX),
            format!("abc{}", u128::MAX).as_bytes()
        );
    }

    #[test]
    fn empty_prefix() {
        let mut candidate = Candidate::new(b"");
        assert_eq!(candidate.set(0), b"0");
        assert_eq!(candidate.set(1000), b"1000");
    }
}
