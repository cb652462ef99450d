//! Recipient identity

use crate::bytes::fixed_bytes;

fixed_bytes! {
    /// 20-byte address identifying the owner of an output
    Address, 20
}
