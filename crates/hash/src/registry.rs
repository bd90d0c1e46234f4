// Copyright 2025 Irreducible Inc.

//! Explicit lookup of hashers by algorithm.
//!
//! Nothing is registered implicitly: a [`Registry`] starts empty (or with the built-in
//! algorithms via [`Registry::with_defaults`]) and is owned by the caller.

use std::{collections::HashMap, fmt, str::FromStr};

use crate::{hasher::Hasher, md5::Md5, sha256::Sha224, sha256::Sha256, state::StateError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
	Md5,
	Sha224,
	Sha256,
}

impl Algorithm {
	pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha224, Algorithm::Sha256];

	pub const fn name(self) -> &'static str {
		match self {
			Self::Md5 => "MD5",
			Self::Sha224 => "SHA-224",
			Self::Sha256 => "SHA-256",
		}
	}

	/// Checksum size in bytes.
	pub const fn size(self) -> usize {
		match self {
			Self::Md5 => crate::md5::SIZE,
			Self::Sha224 => crate::sha256::SIZE224,
			Self::Sha256 => crate::sha256::SIZE,
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error("unknown hash algorithm {0:?}")]
	UnknownAlgorithm(String),
	#[error("hash algorithm {0} is not registered")]
	NotRegistered(Algorithm),
}

impl FromStr for Algorithm {
	type Err = RegistryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
		match normalized.as_str() {
			"md5" => Ok(Self::Md5),
			"sha224" => Ok(Self::Sha224),
			"sha256" => Ok(Self::Sha256),
			_ => Err(RegistryError::UnknownAlgorithm(s.to_string())),
		}
	}
}

/// Object-safe view of a [`Hasher`].
pub trait DynHasher: fmt::Debug + Send + Sync {
	fn algorithm(&self) -> Algorithm;
	fn size(&self) -> usize;
	fn block_size(&self) -> usize;
	fn write(&mut self, data: &[u8]) -> usize;
	fn append_sum(&self, out: &mut Vec<u8>);
	fn sum_to_vec(&self) -> Vec<u8>;
	fn reset(&mut self);
	fn export_state(&self) -> Vec<u8>;
	fn import_state(&mut self, data: &[u8]) -> Result<(), StateError>;
	fn box_clone(&self) -> Box<dyn DynHasher>;
}

impl<H: Hasher> DynHasher for H {
	fn algorithm(&self) -> Algorithm {
		H::ALGORITHM
	}

	fn size(&self) -> usize {
		H::SIZE
	}

	fn block_size(&self) -> usize {
		H::BLOCK_SIZE
	}

	fn write(&mut self, data: &[u8]) -> usize {
		Hasher::write(self, data)
	}

	fn append_sum(&self, out: &mut Vec<u8>) {
		Hasher::append_sum(self, out)
	}

	fn sum_to_vec(&self) -> Vec<u8> {
		Hasher::sum(self).as_ref().to_vec()
	}

	fn reset(&mut self) {
		Hasher::reset(self)
	}

	fn export_state(&self) -> Vec<u8> {
		Hasher::export_state(self)
	}

	fn import_state(&mut self, data: &[u8]) -> Result<(), StateError> {
		Hasher::import_state(self, data)
	}

	fn box_clone(&self) -> Box<dyn DynHasher> {
		Box::new(self.clone())
	}
}

impl Clone for Box<dyn DynHasher> {
	fn clone(&self) -> Self {
		self.box_clone()
	}
}

pub type Constructor = fn() -> Box<dyn DynHasher>;

fn construct<H: Hasher>() -> Box<dyn DynHasher> {
	Box::new(H::new())
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
	constructors: HashMap<Algorithm, Constructor>,
}

impl Registry {
	/// An empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// A registry holding MD5, SHA-224 and SHA-256.
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry.register(Algorithm::Md5, construct::<Md5>);
		registry.register(Algorithm::Sha224, construct::<Sha224>);
		registry.register(Algorithm::Sha256, construct::<Sha256>);
		registry
	}

	/// Register `constructor` for `algorithm`, replacing any previous one.
	pub fn register(&mut self, algorithm: Algorithm, constructor: Constructor) {
		tracing::trace!(%algorithm, "registering hash constructor");
		self.constructors.insert(algorithm, constructor);
	}

	pub fn is_available(&self, algorithm: Algorithm) -> bool {
		self.constructors.contains_key(&algorithm)
	}

	/// Registered algorithms in ascending order.
	pub fn algorithms(&self) -> Vec<Algorithm> {
		let mut algorithms = self.constructors.keys().copied().collect::<Vec<_>>();
		algorithms.sort_unstable();
		algorithms
	}

	/// A fresh hasher for `algorithm`, if registered.
	pub fn get(&self, algorithm: Algorithm) -> Option<Box<dyn DynHasher>> {
		self.constructors.get(&algorithm).map(|constructor| constructor())
	}

	pub fn get_by_name(&self, name: &str) -> Result<Box<dyn DynHasher>, RegistryError> {
		let algorithm = name.parse::<Algorithm>()?;
		self.get(algorithm)
			.ok_or(RegistryError::NotRegistered(algorithm))
	}
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_parse_algorithm() {
		assert_eq!("md5".parse::<Algorithm>(), Ok(Algorithm::Md5));
		assert_eq!("SHA-224".parse::<Algorithm>(), Ok(Algorithm::Sha224));
		assert_eq!("sha_256".parse::<Algorithm>(), Ok(Algorithm::Sha256));
		assert_eq!(
			"sha1".parse::<Algorithm>(),
			Err(RegistryError::UnknownAlgorithm("sha1".to_string()))
		);
		for algorithm in Algorithm::ALL {
			assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
		}
	}

	#[test]
	fn test_empty_registry() {
		let registry = Registry::new();
		assert!(registry.algorithms().is_empty());
		assert!(registry.get(Algorithm::Md5).is_none());
		assert_eq!(
			registry.get_by_name("md5").unwrap_err(),
			RegistryError::NotRegistered(Algorithm::Md5)
		);
	}

	#[test]
	fn test_default_registry() {
		let registry = Registry::with_defaults();
		assert_eq!(registry.algorithms(), Algorithm::ALL.to_vec());

		let expected: [(Algorithm, &[u8]); 3] = [
			(Algorithm::Md5, &hex!("900150983cd24fb0d6963f7d28e17f72")),
			(Algorithm::Sha224, &hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")),
			(
				Algorithm::Sha256,
				&hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
			),
		];
		for (algorithm, digest) in expected {
			let mut hasher = registry.get(algorithm).unwrap();
			assert_eq!(hasher.algorithm(), algorithm);
			assert_eq!(hasher.size(), algorithm.size());
			assert_eq!(hasher.block_size(), 64);
			assert_eq!(hasher.write(b"abc"), 3);
			assert_eq!(hasher.sum_to_vec(), digest);

			let mut out = b"prefix".to_vec();
			hasher.append_sum(&mut out);
			assert_eq!(&out[..6], b"prefix");
			assert_eq!(&out[6..], digest);
		}
	}

	#[test]
	fn test_dyn_hasher_resume() {
		let registry = Registry::with_defaults();
		let mut hasher = registry.get_by_name("sha-256").unwrap();
		hasher.write(b"ab");
		let snapshot = hasher.box_clone();

		let mut resumed = registry.get(Algorithm::Sha256).unwrap();
		resumed.import_state(&hasher.export_state()).unwrap();
		resumed.write(b"c");
		hasher.write(b"c");
		assert_eq!(resumed.sum_to_vec(), hasher.sum_to_vec());
		assert_ne!(snapshot.sum_to_vec(), hasher.sum_to_vec());

		let mut md5 = registry.get(Algorithm::Md5).unwrap();
		assert_eq!(
			md5.import_state(&hasher.export_state()),
			Err(StateError::InvalidStateIdentifier)
		);
	}
}
