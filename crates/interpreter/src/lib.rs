//! # blockvm-interpreter
//!
//! Block-information instructions of the blockvm interpreter: the bounded
//! ancestor-hash resolution behind `BLOCKHASH` and the read-only accessors
//! for the enclosing block's beneficiary, timestamp, number, difficulty and
//! gas limit.
//!
//! The instruction dispatch loop, memory model and gas metering live in the
//! outer VM; this crate carries the operand [`Stack`] and the minimal
//! [`InstructionContext`] plumbing the handlers run against.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

extern crate alloc;

#[macro_use]
mod macros;

mod instruction_context;
mod instruction_result;
pub mod instructions;
mod interpreter;

// Reexport the chain-facing types.
pub use chain_interface::{BlockHeader, ChainQuery, EmptyChain, BLOCK_HASH_HISTORY};
pub use instruction_context::InstructionContext;
pub use instruction_result::InstructionResult;
pub use interpreter::{Interpreter, Stack, STACK_LIMIT};
