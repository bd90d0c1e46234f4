// Copyright 2024-2025 Irreducible Inc.

//! Checkpointing of unfinished digests.
//!
//! A marshaled state is laid out as:
//!
//! | field        | size                | encoding                         |
//! |--------------|---------------------|----------------------------------|
//! | magic        | 4                   | algorithm and variant identifier |
//! | state words  | 4 × words           | big-endian `u32` each            |
//! | block buffer | 64                  | pending bytes, zero filled       |
//! | length       | 8                   | big-endian `u64` byte count      |
//!
//! The state words are big-endian for every algorithm, MD5 included. The number of pending bytes
//! is not stored; it is recovered as `length % 64`. An MD5 state is therefore 92 bytes and a
//! SHA-224 or SHA-256 state 108 bytes.

use bytes::{Buf, BufMut};

use crate::{
	accumulator::Accumulator,
	compression::{BlockCompression, BLOCK_SIZE},
	padding::BlockBuffer,
};

/// Length of the algorithm identifier at the start of a marshaled state.
pub const MAGIC_LEN: usize = 4;

/// Size of a marshaled state for a digest with `words` state words.
pub const fn marshaled_size(words: usize) -> usize {
	MAGIC_LEN + 4 * words + BLOCK_SIZE + 8
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
	#[error("invalid hash state identifier")]
	InvalidStateIdentifier,
	#[error("invalid hash state size (expected {expected} bytes, got {actual} bytes)")]
	InvalidStateSize { expected: usize, actual: usize },
}

impl<C: BlockCompression<WORDS>, const WORDS: usize> Accumulator<C, WORDS> {
	/// Serialize the accumulator, prefixed with `magic`.
	pub fn marshal(&self, magic: &[u8; MAGIC_LEN]) -> Vec<u8> {
		let pending = self.buffer.get_data();

		let mut out = Vec::with_capacity(marshaled_size(WORDS));
		out.put_slice(magic);
		for &word in &self.state {
			out.put_u32(word);
		}
		out.put_slice(pending);
		out.put_bytes(0, BLOCK_SIZE - pending.len());
		out.put_u64(self.total_len);

		debug_assert_eq!(out.len(), marshaled_size(WORDS));
		out
	}

	/// Restore a state produced by [`Accumulator::marshal`] with the same `magic`.
	///
	/// The accumulator is left untouched on error.
	pub fn unmarshal(&mut self, magic: &[u8; MAGIC_LEN], mut data: &[u8]) -> Result<(), StateError> {
		if data.len() < MAGIC_LEN || data[..MAGIC_LEN] != magic[..] {
			return Err(StateError::InvalidStateIdentifier);
		}
		if data.len() != marshaled_size(WORDS) {
			return Err(StateError::InvalidStateSize {
				expected: marshaled_size(WORDS),
				actual: data.len(),
			});
		}

		data.advance(MAGIC_LEN);
		let mut state = [0u32; WORDS];
		for word in state.iter_mut() {
			*word = data.get_u32();
		}
		let mut block = [0u8; BLOCK_SIZE];
		data.copy_to_slice(&mut block);
		let total_len = data.get_u64();

		let filled = (total_len % BLOCK_SIZE as u64) as usize;
		self.buffer =
			BlockBuffer::try_new(&block[..filled]).expect("fewer than BLOCK_SIZE pending bytes");
		self.state = state;
		self.total_len = total_len;

		Ok(())
	}
}
