// Copyright 2024-2025 Irreducible Inc.

use std::fmt::Debug;

use digest::{consts::U64, generic_array::GenericArray};

/// Size in bytes of the message blocks consumed by every compression function in this crate.
pub const BLOCK_SIZE: usize = 64;

/// One message block.
pub type Block = GenericArray<u8, U64>;

/// A Merkle–Damgård compression function over a state of `WORDS` 32-bit words.
///
/// Implementations must be pure: the same state and block always produce the same new state,
/// regardless of which implementation (portable or accelerated) executes. The accumulator holds
/// one value of this type for its whole lifetime, so any capability dispatch happens when the
/// value is chosen, not per block.
pub trait BlockCompression<const WORDS: usize>: Copy + Debug + Send + Sync {
	/// Absorb one block into `state`.
	fn compress(&self, state: &mut [u32; WORDS], block: &Block);

	/// Absorb a run of blocks into `state`, in order.
	fn compress_blocks(&self, state: &mut [u32; WORDS], blocks: &[Block]) {
		for block in blocks {
			self.compress(state, block);
		}
	}
}
