//! 256-bit hash type used for transaction hashes

use crate::bytes::fixed_bytes;

fixed_bytes! {
    /// 256-bit hash.
    ///
    /// Equality, ordering and hashing are by value, so two hashes built from
    /// the same bytes are interchangeable as map keys.
    H256, 32
}

/// Hash of a finalized transaction
pub type TxHash = H256;

impl H256 {
    /// Abbreviated form for log lines (`0x1234…abcd`)
    pub fn short(&self) -> String {
        let full = hex::encode(self.0);
        format!("0x{}…{}", &full[..4], &full[60..])
    }
}
