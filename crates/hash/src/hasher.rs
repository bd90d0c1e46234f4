// Copyright 2023-2025 Irreducible Inc.

use std::fmt::Debug;

use crate::{registry::Algorithm, state::StateError};

/// Trait representing a resumable streaming checksum.
///
/// This interface is similar to the [`digest::Digest`] trait, except that taking the checksum
/// never consumes or resets the hasher, and the full internal state can be exported and imported
/// to pause and resume a computation.
pub trait Hasher: Clone + Debug + Send + Sync + 'static {
	/// The checksum output type.
	type Digest: AsRef<[u8]> + Copy + Eq + Debug;

	const ALGORITHM: Algorithm;
	/// Checksum size in bytes.
	const SIZE: usize;
	/// Size in bytes of the blocks fed to the compression function.
	const BLOCK_SIZE: usize;

	fn new() -> Self;

	/// Absorb `data`. The whole input is always consumed; returns its length.
	fn write(&mut self, data: impl AsRef<[u8]>) -> usize;

	#[must_use]
	fn chain_write(mut self, data: impl AsRef<[u8]>) -> Self {
		self.write(data);
		self
	}

	/// Checksum of everything written so far. The hasher is left unchanged.
	fn sum(&self) -> Self::Digest;

	/// Append the checksum to `out`.
	fn append_sum(&self, out: &mut Vec<u8>) {
		out.extend_from_slice(self.sum().as_ref());
	}

	fn reset(&mut self);

	/// Serialize the unfinished state.
	fn export_state(&self) -> Vec<u8>;

	/// Replace the state with one produced by [`Hasher::export_state`] on the same algorithm.
	fn import_state(&mut self, data: &[u8]) -> Result<(), StateError>;
}

/// One-shot checksum of `data`.
pub fn hash<H: Hasher>(data: impl AsRef<[u8]>) -> H::Digest {
	H::new().chain_write(data).sum()
}

/// Implements [`Hasher`], `Default`, [`std::io::Write`] and the RustCrypto `digest` traits for a
/// type with inherent `new`, `write`, `sum`, `reset`, `export_state` and `import_state` methods.
macro_rules! impl_hasher {
	($name:ident, $algorithm:expr, $size:expr, $output_size:ty) => {
		impl $crate::hasher::Hasher for $name {
			type Digest = [u8; $size];

			const ALGORITHM: $crate::registry::Algorithm = $algorithm;
			const SIZE: usize = $size;
			const BLOCK_SIZE: usize = $crate::compression::BLOCK_SIZE;

			fn new() -> Self {
				$name::new()
			}

			fn write(&mut self, data: impl AsRef<[u8]>) -> usize {
				$name::write(self, data)
			}

			fn sum(&self) -> Self::Digest {
				$name::sum(self)
			}

			fn reset(&mut self) {
				$name::reset(self)
			}

			fn export_state(&self) -> Vec<u8> {
				$name::export_state(self)
			}

			fn import_state(&mut self, data: &[u8]) -> Result<(), $crate::state::StateError> {
				$name::import_state(self, data)
			}
		}

		impl Default for $name {
			fn default() -> Self {
				$name::new()
			}
		}

		impl std::io::Write for $name {
			fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
				Ok($name::write(self, buf))
			}

			fn flush(&mut self) -> std::io::Result<()> {
				Ok(())
			}
		}

		impl digest::HashMarker for $name {}

		impl digest::OutputSizeUser for $name {
			type OutputSize = $output_size;
		}

		impl digest::Update for $name {
			fn update(&mut self, data: &[u8]) {
				$name::write(self, data);
			}
		}

		impl digest::FixedOutput for $name {
			fn finalize_into(self, out: &mut digest::Output<Self>) {
				out.copy_from_slice(&$name::sum(&self));
			}
		}

		impl digest::Reset for $name {
			fn reset(&mut self) {
				$name::reset(self)
			}
		}

		impl digest::FixedOutputReset for $name {
			fn finalize_into_reset(&mut self, out: &mut digest::Output<Self>) {
				out.copy_from_slice(&$name::sum(self));
				$name::reset(self);
			}
		}
	};
}

pub(crate) use impl_hasher;
