// Copyright 2025 Irreducible Inc.

//! Merkle–Damgård length padding shared by MD5 and the SHA-2 family.
//!
//! The padded message is: message :: `0x80` :: 0–63 zero bytes :: 8-byte bit length. The zero
//! run is sized so the length field ends exactly on a block boundary, which takes a second block
//! whenever fewer than nine bytes are left in the current one.

use digest::{block_buffer::Eager, consts::U64};

use crate::compression::Block;

/// Block buffer holding the unprocessed tail of the message. Never holds a full block.
pub type BlockBuffer = digest::block_buffer::BlockBuffer<U64, Eager>;

/// Byte order used when encoding words and the message-length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
	Little,
	Big,
}

impl ByteOrder {
	pub fn u32_to_bytes(self, x: u32) -> [u8; 4] {
		match self {
			Self::Little => x.to_le_bytes(),
			Self::Big => x.to_be_bytes(),
		}
	}
}

/// Pad the buffered tail of a `message_len`-byte message and feed the final one or two blocks
/// to `compress`. The buffer is empty afterwards.
pub fn pad_message(
	buffer: &mut BlockBuffer,
	message_len: u64,
	order: ByteOrder,
	compress: impl FnMut(&Block),
) {
	let bit_len = message_len.wrapping_mul(8);
	match order {
		ByteOrder::Little => buffer.len64_padding_le(bit_len, compress),
		ByteOrder::Big => buffer.len64_padding_be(bit_len, compress),
	}
}

/// Serialize `words` into `N` bytes, dropping any words that do not fit.
pub fn words_to_bytes<const N: usize>(words: &[u32], order: ByteOrder) -> [u8; N] {
	debug_assert_eq!(N % 4, 0);
	debug_assert!(N <= words.len() * 4);

	let mut out = [0u8; N];
	for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
		chunk.copy_from_slice(&order.u32_to_bytes(*word));
	}
	out
}
