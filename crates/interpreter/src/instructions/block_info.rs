//! Instructions answering queries about the enclosing block.
use crate::{instructions::utility::IntoU256, InstructionContext};
use alloy_primitives::{B256, U256};
use chain_interface::{ChainQuery, BLOCK_HASH_HISTORY};

/// Implements the BLOCKHASH instruction.
///
/// Gets the hash of one of the 256 most recent complete blocks. Every
/// unresolvable target answers with zero; the instruction itself cannot fail.
pub fn blockhash<H: ChainQuery + ?Sized>(context: InstructionContext<'_, H>) {
    popn_top!([], number, context.interpreter);
    *number = ancestor_hash(context.host, *number).into_u256();
}

/// Resolves the hash of the ancestor block with number `target`.
///
/// Walks the parent-hash links starting at the current block's parent, for at
/// most [`BLOCK_HASH_HISTORY`] steps. Returns [`B256::ZERO`] whenever the
/// target is unreachable: numbered at or ahead of the current block, older
/// than the window, behind a header the chain no longer knows, or past
/// genesis. The walk therefore terminates on any chain, including a broken
/// one.
pub fn ancestor_hash<H: ChainQuery + ?Sized>(host: &H, target: U256) -> B256 {
    let mut cursor_hash = host.current_header().parent_hash;
    for _ in 0..BLOCK_HASH_HISTORY {
        // Zero marks the end of the chain: genesis has no parent.
        if cursor_hash == B256::ZERO {
            return B256::ZERO;
        }
        let Some(cursor) = host.header_by_hash(cursor_hash) else {
            return B256::ZERO;
        };
        let number = U256::from(cursor.number);
        if target > number {
            return B256::ZERO;
        }
        if target == number {
            // The hash the cursor was looked up by, not its parent hash.
            return cursor_hash;
        }
        cursor_hash = cursor.parent_hash;
    }
    B256::ZERO
}

/// Implements the COINBASE instruction.
///
/// Gets the beneficiary address of the enclosing block.
pub fn coinbase<H: ChainQuery + ?Sized>(context: InstructionContext<'_, H>) {
    push!(
        context.interpreter,
        context.host.current_header().beneficiary.into_u256()
    );
}

/// Implements the TIMESTAMP instruction.
pub fn timestamp<H: ChainQuery + ?Sized>(context: InstructionContext<'_, H>) {
    push!(
        context.interpreter,
        U256::from(context.host.current_header().timestamp)
    );
}

/// Implements the NUMBER instruction.
pub fn block_number<H: ChainQuery + ?Sized>(context: InstructionContext<'_, H>) {
    push!(
        context.interpreter,
        U256::from(context.host.current_header().number)
    );
}

/// Implements the DIFFICULTY instruction.
pub fn difficulty<H: ChainQuery + ?Sized>(context: InstructionContext<'_, H>) {
    push!(
        context.interpreter,
        context.host.current_header().difficulty
    );
}

/// Implements the GASLIMIT instruction.
pub fn gaslimit<H: ChainQuery + ?Sized>(context: InstructionContext<'_, H>) {
    push!(
        context.interpreter,
        U256::from(context.host.current_header().gas_limit)
    );
}
