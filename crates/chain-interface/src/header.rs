//! This module contains [`BlockHeader`] and the ancestor window constant.
use alloy_primitives::{Address, B256, U256};

/// Number of ancestor blocks whose hashes remain reachable from a single
/// BLOCKHASH resolution.
pub const BLOCK_HASH_HISTORY: u64 = 256;

/// The header of one ledger block.
///
/// Headers are owned by chain storage; the interpreter only ever reads them.
/// A header is immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockHeader {
    /// The number of ancestor blocks of this block (block height)
    pub number: u64,
    /// Hash of the parent block.
    ///
    /// The all-zero hash marks the genesis block, which has no parent.
    pub parent_hash: B256,
    /// Beneficiary (coinbase or miner) is the address that has signed the block
    ///
    /// This is the receiver address of all the gas spent in the block.
    pub beneficiary: Address,
    /// The timestamp of the block in seconds since the UNIX epoch
    pub timestamp: u64,
    /// The difficulty of the block
    pub difficulty: U256,
    /// The gas limit of the block
    pub gas_limit: u64,
}

impl BlockHeader {
    /// Whether this header is the genesis header, i.e. has no parent.
    #[inline]
    pub fn is_genesis(&self) -> bool {
        self.parent_hash == B256::ZERO
    }
}

impl Default for BlockHeader {
    fn default() -> Self {
        Self {
            number: 0,
            parent_hash: B256::ZERO,
            beneficiary: Address::ZERO,
            timestamp: 1,
            difficulty: U256::ZERO,
            gas_limit: u64::MAX,
        }
    }
}
