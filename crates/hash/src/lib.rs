// Copyright 2025 Irreducible Inc.

//! Resumable streaming checksums: MD5, SHA-224 and SHA-256.
//!
//! Every hasher absorbs input incrementally, produces its checksum without disturbing the running
//! state, and can export its unfinished state to a byte blob that a fresh hasher of the same
//! algorithm imports to continue where the first left off.

mod accumulator;
mod compression;
pub mod hasher;
pub mod md5;
mod padding;
pub mod registry;
pub mod sha256;
pub mod state;

pub use digest;
pub use hasher::{hash, Hasher};
pub use md5::Md5;
pub use registry::{Algorithm, DynHasher, Registry, RegistryError};
pub use sha256::{Backend, Sha224, Sha256};
pub use state::StateError;
