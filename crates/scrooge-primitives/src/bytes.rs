//! Fixed-width byte identifiers
//!
//! [`H256`](crate::H256) and [`Address`](crate::Address) are both plain byte
//! arrays compared by value, printed as lowercase `0x` hex and parsed from
//! hex with or without the prefix. `fixed_bytes!` generates that surface
//! once for both.

use thiserror::Error;

/// Error parsing a fixed-width identifier
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBytesError {
    /// Not a hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Wrong number of bytes
    #[error("expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Width of the identifier
        expected: usize,
        /// Bytes supplied
        got: usize,
    },
}

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Width in bytes
            pub const LEN: usize = $len;

            /// All zero bytes
            pub const ZERO: Self = Self([0u8; $len]);

            /// Wrap raw bytes
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Copy from a slice of exactly `LEN` bytes
            pub fn from_slice(slice: &[u8]) -> Result<Self, $crate::ParseBytesError> {
                <[u8; $len]>::try_from(slice).map(Self).map_err(|_| {
                    $crate::ParseBytesError::InvalidLength {
                        expected: $len,
                        got: slice.len(),
                    }
                })
            }

            /// Parse hex, `0x` prefix optional
            pub fn from_hex(s: &str) -> Result<Self, $crate::ParseBytesError> {
                let digits = s.strip_prefix("0x").unwrap_or(s);
                let bytes = ::hex::decode(digits)
                    .map_err(|e| $crate::ParseBytesError::InvalidHex(e.to_string()))?;
                Self::from_slice(&bytes)
            }

            /// Raw bytes
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Check if every byte is zero
            pub fn is_zero(&self) -> bool {
                *self == Self::ZERO
            }

            /// Lowercase hex with `0x` prefix
            pub fn to_hex(&self) -> String {
                format!("0x{}", ::hex::encode(self.0))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ParseBytesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        #[cfg(feature = "rlp")]
        impl ::rlp::Encodable for $name {
            fn rlp_append(&self, s: &mut ::rlp::RlpStream) {
                s.encoder().encode_value(&self.0);
            }
        }

        #[cfg(feature = "rlp")]
        impl ::rlp::Decodable for $name {
            fn decode(rlp: &::rlp::Rlp) -> Result<Self, ::rlp::DecoderError> {
                rlp.decoder().decode_value(|bytes| {
                    Self::from_slice(bytes).map_err(|_| ::rlp::DecoderError::RlpInvalidLength)
                })
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use fixed_bytes;
