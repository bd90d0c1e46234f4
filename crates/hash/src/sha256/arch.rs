// Copyright 2024-2025 Irreducible Inc.

use cfg_if::cfg_if;

use crate::compression::Block;

cfg_if! {
	if #[cfg(all(
		feature = "accelerated",
		any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
	))] {
		/// Whether the CPU has SHA-256 instructions.
		#[cfg(target_arch = "aarch64")]
		pub fn accelerated_available() -> bool {
			std::arch::is_aarch64_feature_detected!("sha2")
		}

		/// Whether the CPU has SHA-256 instructions.
		#[cfg(not(target_arch = "aarch64"))]
		pub fn accelerated_available() -> bool {
			std::is_x86_feature_detected!("sha")
				&& std::is_x86_feature_detected!("sse2")
				&& std::is_x86_feature_detected!("ssse3")
				&& std::is_x86_feature_detected!("sse4.1")
		}

		/// Compress blocks with the `sha2` crate's kernel, which uses the SHA extensions when
		/// present and its own software rounds otherwise.
		pub fn compress_blocks(state: &mut [u32; 8], blocks: &[Block]) {
			sha2::compress256(state, blocks);
		}
	} else {
		pub fn accelerated_available() -> bool {
			false
		}

		pub fn compress_blocks(state: &mut [u32; 8], blocks: &[Block]) {
			super::portable::compress_blocks(state, blocks);
		}
	}
}
