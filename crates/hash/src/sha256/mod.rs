// Copyright 2025 Irreducible Inc.

//! SHA-224 and SHA-256 as defined in FIPS 180-4.

mod arch;
mod backend;
mod portable;

use std::slice;

pub use backend::{default_backend, Backend, FORCE_PORTABLE_ENV};
use digest::consts::{U28, U32};

use crate::{
	accumulator::Accumulator,
	compression::{self, Block, BlockCompression},
	hasher::impl_hasher,
	padding::{words_to_bytes, ByteOrder},
	registry::Algorithm,
	state::{marshaled_size, StateError, MAGIC_LEN},
};

/// Size of a SHA-256 checksum in bytes.
pub const SIZE: usize = 32;

/// Size of a SHA-224 checksum in bytes.
pub const SIZE224: usize = 28;

/// Block size of SHA-224 and SHA-256 in bytes.
pub const BLOCK_SIZE: usize = compression::BLOCK_SIZE;

/// Size of an exported SHA-224 or SHA-256 state in bytes.
pub const MARSHALED_SIZE: usize = marshaled_size(8);

const MAGIC224: &[u8; MAGIC_LEN] = b"sha\x02";
const MAGIC256: &[u8; MAGIC_LEN] = b"sha\x03";

const IV256: [u32; 8] = [
	0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

const IV224: [u32; 8] = [
	0xC1059ED8, 0x367CD507, 0x3070DD17, 0xF70E5939, 0xFFC00B31, 0x68581511, 0x64F98FA7, 0xBEFA4FA4,
];

/// SHA-256 compression function bound to a [`Backend`] for the lifetime of a hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha256Compression {
	backend: Backend,
}

impl Sha256Compression {
	pub const fn new(backend: Backend) -> Self {
		Self { backend }
	}

	pub const fn backend(&self) -> Backend {
		self.backend
	}
}

impl BlockCompression<8> for Sha256Compression {
	fn compress(&self, state: &mut [u32; 8], block: &Block) {
		self.compress_blocks(state, slice::from_ref(block));
	}

	fn compress_blocks(&self, state: &mut [u32; 8], blocks: &[Block]) {
		match self.backend {
			Backend::Portable => portable::compress_blocks(state, blocks),
			Backend::Accelerated => arch::compress_blocks(state, blocks),
		}
	}
}

/// Which member of the family a hasher computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
	Sha224,
	Sha256,
}

impl Variant {
	const fn initial_state(self) -> [u32; 8] {
		match self {
			Self::Sha224 => IV224,
			Self::Sha256 => IV256,
		}
	}

	const fn magic(self) -> &'static [u8; MAGIC_LEN] {
		match self {
			Self::Sha224 => MAGIC224,
			Self::Sha256 => MAGIC256,
		}
	}

	pub const fn size(self) -> usize {
		match self {
			Self::Sha224 => SIZE224,
			Self::Sha256 => SIZE,
		}
	}
}

/// State shared by both variants; they differ only in initial state, magic and output length.
#[derive(Debug, Clone)]
struct Sha256Core {
	acc: Accumulator<Sha256Compression, 8>,
	variant: Variant,
}

impl Sha256Core {
	fn new(variant: Variant, backend: Backend) -> Self {
		Self {
			acc: Accumulator::new(variant.initial_state(), Sha256Compression::new(backend)),
			variant,
		}
	}

	fn checksum<const N: usize>(&self) -> [u8; N] {
		let state = self.acc.clone().finalize(ByteOrder::Big);
		words_to_bytes(&state, ByteOrder::Big)
	}

	fn reset(&mut self) {
		self.acc.reset(self.variant.initial_state());
	}

	fn export_state(&self) -> Vec<u8> {
		self.acc.marshal(self.variant.magic())
	}

	fn import_state(&mut self, data: &[u8]) -> Result<(), StateError> {
		self.acc
			.unmarshal(self.variant.magic(), data)
			.inspect_err(|err| tracing::debug!(variant = ?self.variant, %err, "rejected SHA-2 state"))
	}
}

/// Streaming SHA-256.
///
/// [`Sha256::sum`] works on a copy of the state, so writing may continue after a checksum has
/// been taken. The unfinished state can be checkpointed with [`Sha256::export_state`] and
/// resumed with [`Sha256::import_state`].
#[derive(Debug, Clone)]
pub struct Sha256 {
	core: Sha256Core,
}

impl Sha256 {
	/// A hasher using the process-wide [`default_backend`].
	pub fn new() -> Self {
		Self::with_backend(default_backend())
	}

	pub fn with_backend(backend: Backend) -> Self {
		Self {
			core: Sha256Core::new(Variant::Sha256, backend),
		}
	}

	pub fn backend(&self) -> Backend {
		self.core.acc.compression().backend()
	}

	pub fn size(&self) -> usize {
		SIZE
	}

	pub fn block_size(&self) -> usize {
		BLOCK_SIZE
	}

	pub fn write(&mut self, data: impl AsRef<[u8]>) -> usize {
		self.core.acc.write(data.as_ref())
	}

	pub fn sum(&self) -> [u8; SIZE] {
		self.core.checksum()
	}

	pub fn reset(&mut self) {
		self.core.reset()
	}

	pub fn export_state(&self) -> Vec<u8> {
		self.core.export_state()
	}

	pub fn import_state(&mut self, data: &[u8]) -> Result<(), StateError> {
		self.core.import_state(data)
	}
}

impl_hasher!(Sha256, Algorithm::Sha256, SIZE, U32);

/// Streaming SHA-224: SHA-256 with its own initial state, truncated to seven words.
#[derive(Debug, Clone)]
pub struct Sha224 {
	core: Sha256Core,
}

impl Sha224 {
	/// A hasher using the process-wide [`default_backend`].
	pub fn new() -> Self {
		Self::with_backend(default_backend())
	}

	pub fn with_backend(backend: Backend) -> Self {
		Self {
			core: Sha256Core::new(Variant::Sha224, backend),
		}
	}

	pub fn backend(&self) -> Backend {
		self.core.acc.compression().backend()
	}

	pub fn size(&self) -> usize {
		SIZE224
	}

	pub fn block_size(&self) -> usize {
		BLOCK_SIZE
	}

	pub fn write(&mut self, data: impl AsRef<[u8]>) -> usize {
		self.core.acc.write(data.as_ref())
	}

	pub fn sum(&self) -> [u8; SIZE224] {
		self.core.checksum()
	}

	pub fn reset(&mut self) {
		self.core.reset()
	}

	pub fn export_state(&self) -> Vec<u8> {
		self.core.export_state()
	}

	pub fn import_state(&mut self, data: &[u8]) -> Result<(), StateError> {
		self.core.import_state(data)
	}
}

impl_hasher!(Sha224, Algorithm::Sha224, SIZE224, U28);

/// SHA-256 checksum of `data`.
pub fn sum256(data: impl AsRef<[u8]>) -> [u8; SIZE] {
	let mut hasher = Sha256::new();
	hasher.write(data);
	hasher.sum()
}

/// SHA-224 checksum of `data`.
pub fn sum224(data: impl AsRef<[u8]>) -> [u8; SIZE224] {
	let mut hasher = Sha224::new();
	hasher.write(data);
	hasher.sum()
}
