// Copyright 2025 Irreducible Inc.

use crate::{
	compression::{Block, BlockCompression},
	padding::{pad_message, BlockBuffer, ByteOrder},
};

/// Block buffer and running state shared by every digest in this crate.
///
/// The accumulator owns the chaining state, the partially filled input block and the count of
/// bytes absorbed so far. It is `Clone`, and finalization consumes a clone, so a live
/// accumulator can always keep absorbing input after a digest has been taken.
#[derive(Debug, Clone)]
pub struct Accumulator<C, const WORDS: usize> {
	pub(crate) state: [u32; WORDS],
	/// Invariant: holds exactly `total_len % BLOCK_SIZE` bytes between calls.
	pub(crate) buffer: BlockBuffer,
	pub(crate) total_len: u64,
	compression: C,
}

impl<C: BlockCompression<WORDS>, const WORDS: usize> Accumulator<C, WORDS> {
	pub fn new(initial_state: [u32; WORDS], compression: C) -> Self {
		Self {
			state: initial_state,
			buffer: BlockBuffer::default(),
			total_len: 0,
			compression,
		}
	}

	/// Return to `initial_state` with an empty buffer. The compression strategy is kept.
	pub fn reset(&mut self, initial_state: [u32; WORDS]) {
		self.state = initial_state;
		self.buffer.reset();
		self.total_len = 0;
	}

	/// Absorb `data`, compressing every block it completes. Always consumes the whole input and
	/// returns its length.
	pub fn write(&mut self, data: &[u8]) -> usize {
		self.total_len = self.total_len.wrapping_add(data.len() as u64);

		let Self {
			state,
			buffer,
			compression,
			..
		} = self;
		buffer.digest_blocks(data, |blocks| compression.compress_blocks(state, blocks));

		data.len()
	}

	/// Pad the message and return the final chaining state.
	///
	/// `length_order` selects the byte order of the trailing bit-length field. Takes `self` by
	/// value; callers that need to keep writing finalize a clone.
	pub fn finalize(mut self, length_order: ByteOrder) -> [u32; WORDS] {
		let Self {
			state,
			buffer,
			compression,
			total_len,
		} = &mut self;
		pad_message(buffer, *total_len, length_order, |block: &Block| {
			compression.compress(state, block)
		});

		assert_eq!(self.buffer.get_pos(), 0, "padding left {} bytes unprocessed", self.buffer.get_pos());

		self.state
	}

	#[cfg(test)]
	pub fn state(&self) -> &[u32; WORDS] {
		&self.state
	}

	/// The buffered bytes not yet compressed.
	#[cfg(test)]
	pub fn pending(&self) -> &[u8] {
		self.buffer.get_data()
	}

	#[cfg(test)]
	pub fn total_len(&self) -> u64 {
		self.total_len
	}

	pub fn compression(&self) -> C {
		self.compression
	}
}
