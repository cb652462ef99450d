//! Genesis and batch files for the scrooge node

use scrooge_primitives::{Address, Amount, OutputIndex, TxHash};
use scrooge_types::{codec, OutPoint, Transaction, TxError, TxOutput};
use scrooge_utxo::UtxoPool;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// File is not valid JSON for its format
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// Two genesis entries share an outpoint
    #[error("duplicate genesis utxo {0}")]
    DuplicateUtxo(OutPoint),
    /// Genesis entry with a negative value
    #[error("genesis utxo {outpoint} has negative value {value}")]
    NegativeValue {
        /// Offending entry
        outpoint: OutPoint,
        /// Its value
        value: Amount,
    },
    /// Batch entry that does not decode
    #[error("batch entry {position} is not a valid transaction: {source}")]
    InvalidTransaction {
        /// Position in the batch
        position: usize,
        /// Decoding error
        #[source]
        source: TxError,
    },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Genesis configuration: the starting UTXO pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Initial unspent outputs
    #[serde(default)]
    pub utxos: Vec<GenesisUtxo>,
}

/// One unspent output in a genesis file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisUtxo {
    /// Hash of the (notional) creating transaction
    pub tx_hash: TxHash,
    /// Output index
    #[serde(default)]
    pub index: OutputIndex,
    /// Owner allowed to spend it
    pub owner: Address,
    /// Value in minor units
    pub value: Amount,
}

impl GenesisUtxo {
    fn outpoint(&self) -> OutPoint {
        OutPoint::new(self.tx_hash, self.index)
    }
}

impl GenesisConfig {
    /// Build the pool, rejecting duplicate outpoints and negative values
    pub fn to_pool(&self) -> ConfigResult<UtxoPool> {
        let mut pool = UtxoPool::new();
        for utxo in &self.utxos {
            let outpoint = utxo.outpoint();
            if utxo.value < 0 {
                return Err(ConfigError::NegativeValue {
                    outpoint,
                    value: utxo.value,
                });
            }
            if pool.contains(&outpoint) {
                return Err(ConfigError::DuplicateUtxo(outpoint));
            }
            pool.insert(outpoint, TxOutput::new(utxo.value, utxo.owner));
        }
        Ok(pool)
    }

    /// Snapshot a pool in genesis format, sorted by outpoint
    pub fn from_pool(pool: &UtxoPool) -> Self {
        let utxos = pool
            .outpoints()
            .into_iter()
            .filter_map(|outpoint| {
                pool.get(&outpoint).map(|output| GenesisUtxo {
                    tx_hash: outpoint.tx_hash,
                    index: outpoint.index,
                    owner: output.recipient,
                    value: output.value,
                })
            })
            .collect();
        Self { utxos }
    }
}

fn read_file(path: &Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load genesis configuration from file
pub fn load_genesis_file(path: &Path) -> ConfigResult<GenesisConfig> {
    tracing::info!("Loading genesis from {:?}", path);
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a batch of hex-encoded transactions from file, keeping file order
pub fn load_batch_file(path: &Path) -> ConfigResult<Vec<Transaction>> {
    tracing::info!("Loading batch from {:?}", path);
    let content = read_file(path)?;
    let encoded: Vec<String> = serde_json::from_str(&content)?;
    encoded
        .iter()
        .enumerate()
        .map(|(position, hex)| {
            codec::decode_hex(hex)
                .map_err(|source| ConfigError::InvalidTransaction { position, source })
        })
        .collect()
}
