use crate::block::Block;

/// A specific integrity violation detected during chain validation.
///
/// Validation reports the first failing block and stops; it never repairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChainFault {
    /// The chain is empty, or block 0 is not a well-formed genesis block
    /// (wrong sentinel, certificate payload, or fingerprint mismatch).
    #[error("genesis block is missing or malformed")]
    InvalidGenesis,

    /// A block's stored index disagrees with its position in the sequence.
    #[error("block {index} is out of order")]
    OutOfOrder { index: u64 },

    /// A block's `previous_hash` does not match the prior block's hash.
    #[error("broken link at block {index}: previous hash does not match")]
    BrokenLink { index: u64 },

    /// Recomputing a block's fingerprint over its stored fields does not
    /// reproduce the stored hash.
    #[error("hash mismatch at block {index}: stored hash differs from recomputed")]
    HashMismatch { index: u64 },
}

/// Walk a block sequence and verify the full chain.
///
/// Checks, in order:
/// 1. Block 0 is a genesis block: zero `previous_hash` sentinel, genesis
///    payload, and a fingerprint that matches recomputation.
/// 2. For every later block: stored index matches its position, the
///    `previous_hash` links to the prior block's hash, and the stored
///    fingerprint matches recomputation.
///
/// Returns the first violation found. Position agreement is checked
/// explicitly because the stored index is covered by the fingerprint: a
/// forged tail that restarts numbering could otherwise carry
/// self-consistent hashes.
pub fn verify_blocks(blocks: &[Block]) -> Result<(), ChainFault> {
    let Some(genesis) = blocks.first() else {
        return Err(ChainFault::InvalidGenesis);
    };

    if genesis.index() != 0
        || !genesis.previous_hash().is_zero()
        || !genesis.payload().is_genesis()
        || !genesis.verify_hash()
    {
        return Err(ChainFault::InvalidGenesis);
    }

    for (position, pair) in blocks.windows(2).enumerate() {
        let (previous, block) = (&pair[0], &pair[1]);
        let index = (position + 1) as u64;

        if block.index() != index {
            return Err(ChainFault::OutOfOrder { index });
        }
        if block.previous_hash() != previous.hash() {
            return Err(ChainFault::BrokenLink { index });
        }
        if !block.verify_hash() {
            return Err(ChainFault::HashMismatch { index });
        }
    }

    Ok(())
}
