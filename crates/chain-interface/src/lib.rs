//! # blockvm-chain-interface
//!
//! Chain-facing query interface consumed by the blockvm interpreter.
//!
//! This crate owns the vocabulary shared between the interpreter and the
//! chain storage backing it: the [`BlockHeader`] read by the
//! block-information instructions and the narrow [`ChainQuery`] capability
//! those instructions resolve ancestor hashes through.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod header;
mod query;

pub use header::{BlockHeader, BLOCK_HASH_HISTORY};
pub use query::{ChainQuery, EmptyChain};
