// Copyright 2025 Irreducible Inc.

//! MD5 as defined in RFC 1321.
//!
//! MD5 is cryptographically broken and should not be used for secure applications.

mod portable;

use digest::consts::U16;

use crate::{
	accumulator::Accumulator,
	compression::{self, Block, BlockCompression},
	hasher::impl_hasher,
	padding::{words_to_bytes, ByteOrder},
	registry::Algorithm,
	state::{marshaled_size, StateError, MAGIC_LEN},
};

/// Size of an MD5 checksum in bytes.
pub const SIZE: usize = 16;

/// Block size of MD5 in bytes.
pub const BLOCK_SIZE: usize = compression::BLOCK_SIZE;

/// Size of an exported MD5 state in bytes.
pub const MARSHALED_SIZE: usize = marshaled_size(4);

const MAGIC: &[u8; MAGIC_LEN] = b"md5\x01";

const IV: [u32; 4] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Md5Compression;

impl BlockCompression<4> for Md5Compression {
	#[inline]
	fn compress(&self, state: &mut [u32; 4], block: &Block) {
		portable::compress(state, block)
	}
}

/// Streaming MD5.
///
/// Taking a checksum with [`Md5::sum`] does not disturb the running state.
#[derive(Debug, Clone)]
pub struct Md5 {
	acc: Accumulator<Md5Compression, 4>,
}

impl Md5 {
	pub fn new() -> Self {
		Self {
			acc: Accumulator::new(IV, Md5Compression),
		}
	}

	pub fn size(&self) -> usize {
		SIZE
	}

	pub fn block_size(&self) -> usize {
		BLOCK_SIZE
	}

	pub fn write(&mut self, data: impl AsRef<[u8]>) -> usize {
		self.acc.write(data.as_ref())
	}

	pub fn sum(&self) -> [u8; SIZE] {
		let state = self.acc.clone().finalize(ByteOrder::Little);
		words_to_bytes(&state, ByteOrder::Little)
	}

	pub fn reset(&mut self) {
		self.acc.reset(IV);
	}

	pub fn export_state(&self) -> Vec<u8> {
		self.acc.marshal(MAGIC)
	}

	pub fn import_state(&mut self, data: &[u8]) -> Result<(), StateError> {
		self.acc
			.unmarshal(MAGIC, data)
			.inspect_err(|err| tracing::debug!(%err, "rejected MD5 state"))
	}
}

impl_hasher!(Md5, Algorithm::Md5, SIZE, U16);

/// MD5 checksum of `data`.
pub fn sum(data: impl AsRef<[u8]>) -> [u8; SIZE] {
	let mut hasher = Md5::new();
	hasher.write(data);
	hasher.sum()
}
