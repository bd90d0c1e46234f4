// Copyright 2025 Irreducible Inc.

use std::fmt;

use cksum_utils::env::boolean_env_flag_set;
use lazy_static::lazy_static;

use super::arch;

/// Environment variable that, when truthy, forces the portable backend.
pub const FORCE_PORTABLE_ENV: &str = "CKSUM_FORCE_PORTABLE";

/// Implementation of the SHA-256 compression function.
///
/// Both backends compute the same function; they differ only in speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
	/// Plain Rust rounds, available everywhere.
	Portable,
	/// The SHA instruction-set extensions where the CPU has them.
	Accelerated,
}

impl Backend {
	/// The fastest backend usable by this process, honouring [`FORCE_PORTABLE_ENV`].
	pub fn detect() -> Self {
		if boolean_env_flag_set(FORCE_PORTABLE_ENV) {
			return Self::Portable;
		}

		if arch::accelerated_available() {
			Self::Accelerated
		} else {
			Self::Portable
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Self::Portable => "portable",
			Self::Accelerated => "accelerated",
		}
	}
}

impl fmt::Display for Backend {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

lazy_static! {
	static ref DEFAULT_BACKEND: Backend = {
		let backend = Backend::detect();
		tracing::debug!(%backend, "selected SHA-256 compression backend");
		backend
	};
}

/// The process-wide backend used by [`super::Sha256::new`] and [`super::Sha224::new`].
///
/// Detected once, on first use.
pub fn default_backend() -> Backend {
	*DEFAULT_BACKEND
}
