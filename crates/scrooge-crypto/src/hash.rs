//! Keccak-256 digests

use scrooge_primitives::H256;
use sha3::{Digest, Keccak256};

/// Keccak-256 of `data`
pub fn keccak256(data: &[u8]) -> H256 {
    H256::from_bytes(Keccak256::digest(data).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        let vectors: [(&[u8], &str); 3] = [
            (&b""[..], "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"),
            (&b"hello"[..], "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"),
            (&[0xc0u8][..], "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347"),
        ];
        for (input, expected) in vectors {
            assert_eq!(keccak256(input).to_hex(), expected);
        }
    }

    #[test]
    fn test_block_boundary_inputs_differ() {
        // 136 bytes is the Keccak-256 rate
        let a = keccak256(&[0xab; 136]);
        let b = keccak256(&[0xab; 137]);
        assert_ne!(a, b);
        assert!(!a.is_zero());
    }
}
