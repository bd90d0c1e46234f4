// Copyright 2025 Irreducible Inc.

use std::io;

use cksum_hash::{
	hash, md5, sha256, Algorithm, Backend, Hasher, Md5, Registry, Sha224, Sha256, StateError,
};
use hex_literal::hex;
use proptest::prelude::*;

const QUICK_BROWN_FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";
const NIST_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const NIST_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

#[test]
fn test_md5_rfc1321_suite() {
	let cases: [(&[u8], [u8; 16]); 9] = [
		(b"", hex!("d41d8cd98f00b204e9800998ecf8427e")),
		(b"a", hex!("0cc175b9c0f1b6a831c399e269772661")),
		(b"abc", hex!("900150983cd24fb0d6963f7d28e17f72")),
		(b"message digest", hex!("f96b697d7cb7938d525a2f31aaf161d0")),
		(b"abcdefghijklmnopqrstuvwxyz", hex!("c3fcd3d76192e4007dfb496cca67e13b")),
		(
			b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
			hex!("d174ab98d277d9f5a5611c2c9f419d9f"),
		),
		(
			b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
			hex!("57edf4a22be3c955ac49da2e2107b67a"),
		),
		(QUICK_BROWN_FOX, hex!("9e107d9d372bb6826bd81d3542a419d6")),
		(NIST_448, hex!("8215ef0796a20bcaaae116d3876c664a")),
	];

	for (input, expected) in cases {
		assert_eq!(md5::sum(input), expected, "input = {:?}", String::from_utf8_lossy(input));
		assert_eq!(hash::<Md5>(input), expected);
	}
}

#[test]
fn test_sha256_known_answers() {
	let cases: [(&[u8], [u8; 32]); 5] = [
		(b"", hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")),
		(b"abc", hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")),
		(NIST_448, hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")),
		(NIST_896, hex!("cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1")),
		(
			QUICK_BROWN_FOX,
			hex!("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"),
		),
	];

	for backend in [Backend::Portable, Backend::Accelerated] {
		for (input, expected) in cases {
			let mut hasher = Sha256::with_backend(backend);
			hasher.write(input);
			assert_eq!(hasher.sum(), expected, "backend = {backend}");
		}
	}
}

#[test]
fn test_sha224_known_answers() {
	let cases: [(&[u8], [u8; 28]); 4] = [
		(b"", hex!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f")),
		(b"abc", hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")),
		(NIST_448, hex!("75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525")),
		(NIST_896, hex!("c97ca9a559850ce97a04a96def6d99a9e0e0e2ab14e6b8df265fc0b3")),
	];

	for backend in [Backend::Portable, Backend::Accelerated] {
		for (input, expected) in cases {
			let mut hasher = Sha224::with_backend(backend);
			hasher.write(input);
			assert_eq!(hasher.sum(), expected, "backend = {backend}");
		}
	}
}

#[test]
fn test_million_a() {
	// Fed in uneven chunks so both the buffered and the direct block paths are exercised
	let chunk = [b'a'; 1000];
	let mut sha256 = Sha256::new();
	let mut sha224 = Sha224::new();
	let mut written = 0;
	for len in [1usize, 63, 64, 65, 807].into_iter().cycle() {
		if written == 1_000_000 {
			break;
		}
		let len = len.min(1_000_000 - written);
		sha256.write(&chunk[..len]);
		sha224.write(&chunk[..len]);
		written += len;
	}

	assert_eq!(
		sha256.sum(),
		hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
	);
	assert_eq!(sha224.sum(), hex!("20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67"));
}

#[test]
fn test_padding_boundaries_vs_reference() {
	use sha2::Digest as _;

	for len in [0, 1, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128] {
		let data = vec![0x5a; len];
		let md5_expected: [u8; 16] = md5_crypto::Md5::digest(&data).into();
		let sha224_expected: [u8; 28] = sha2::Sha224::digest(&data).into();
		let sha256_expected: [u8; 32] = sha2::Sha256::digest(&data).into();

		assert_eq!(md5::sum(&data), md5_expected, "len = {len}");
		assert_eq!(sha256::sum224(&data), sha224_expected, "len = {len}");
		assert_eq!(sha256::sum256(&data), sha256_expected, "len = {len}");
	}
}

#[test]
fn test_sum_does_not_disturb_state() {
	let mut hasher = Sha256::new();
	hasher.write(b"ab");
	let partial = hasher.sum();
	assert_eq!(hasher.sum(), partial);

	hasher.write(b"c");
	assert_eq!(hasher.sum(), sha256::sum256(b"abc"));

	let mut out = vec![0xff];
	hasher.append_sum(&mut out);
	assert_eq!(out[0], 0xff);
	assert_eq!(&out[1..], &sha256::sum256(b"abc"));
}

#[test]
fn test_reset() {
	let mut hasher = Md5::new();
	hasher.write(b"some data that is thrown away");
	hasher.reset();
	assert_eq!(hasher.sum(), md5::sum(b""));
	assert_eq!(hasher.export_state(), Md5::new().export_state());
}

#[test]
fn test_resume_across_algorithms() {
	let registry = Registry::with_defaults();
	for algorithm in Algorithm::ALL {
		let mut first = registry.get(algorithm).unwrap();
		first.write(&QUICK_BROWN_FOX[..20]);
		let blob = first.export_state();

		let mut resumed = registry.get(algorithm).unwrap();
		resumed.write(b"overwritten by the import");
		resumed.import_state(&blob).unwrap();
		resumed.write(&QUICK_BROWN_FOX[20..]);

		let mut whole = registry.get(algorithm).unwrap();
		whole.write(QUICK_BROWN_FOX);
		assert_eq!(resumed.sum_to_vec(), whole.sum_to_vec(), "algorithm = {algorithm}");
	}
}

#[test]
fn test_import_errors() {
	let sha256_blob = Sha256::new().export_state();
	let md5_blob = Md5::new().export_state();
	assert_eq!(sha256_blob.len(), sha256::MARSHALED_SIZE);
	assert_eq!(md5_blob.len(), md5::MARSHALED_SIZE);

	let mut md5 = Md5::new();
	assert_eq!(md5.import_state(&sha256_blob), Err(StateError::InvalidStateIdentifier));
	assert_eq!(md5.import_state(&[]), Err(StateError::InvalidStateIdentifier));

	let mut sha256 = Sha256::new();
	assert_eq!(
		sha256.import_state(&sha256_blob[..100]),
		Err(StateError::InvalidStateSize {
			expected: 108,
			actual: 100
		})
	);
	assert_eq!(
		StateError::InvalidStateSize {
			expected: 108,
			actual: 100
		}
		.to_string(),
		"invalid hash state size (expected 108 bytes, got 100 bytes)"
	);
}

#[test]
fn test_io_write() {
	let mut hasher = Sha224::new();
	let copied = io::copy(&mut &QUICK_BROWN_FOX[..], &mut hasher).unwrap();
	assert_eq!(copied, QUICK_BROWN_FOX.len() as u64);
	assert_eq!(hasher.sum(), sha256::sum224(QUICK_BROWN_FOX));
}

#[test]
fn test_digest_interop() {
	use digest::Digest;

	let out: [u8; 32] = <Sha256 as Digest>::digest(QUICK_BROWN_FOX).into();
	assert_eq!(out, sha256::sum256(QUICK_BROWN_FOX));

	let mut hasher = <Md5 as Digest>::new();
	Digest::update(&mut hasher, b"message ");
	Digest::update(&mut hasher, b"digest");
	let out: [u8; 16] = Digest::finalize_reset(&mut hasher).into();
	assert_eq!(out, hex!("f96b697d7cb7938d525a2f31aaf161d0"));
	assert_eq!(Hasher::sum(&hasher), md5::sum(b""));
}

proptest! {
	#[test]
	fn test_chunking_invariance(
		data in prop::collection::vec(any::<u8>(), 0..=1024),
		chunk in 1usize..=130,
	) {
		let mut hasher = Sha256::new();
		let mut md5 = Md5::new();
		for piece in data.chunks(chunk) {
			prop_assert_eq!(hasher.write(piece), piece.len());
			md5.write(piece);
		}
		prop_assert_eq!(hasher.sum(), sha256::sum256(&data));
		prop_assert_eq!(md5.sum(), md5::sum(&data));
	}

	#[test]
	fn test_export_import_resume(
		data in prop::collection::vec(any::<u8>(), 0..=512),
		split in 0usize..=512,
	) {
		let split = split.min(data.len());

		let mut first = Sha224::new();
		first.write(&data[..split]);
		let mut second = Sha224::new();
		second.import_state(&first.export_state()).unwrap();
		prop_assert_eq!(second.export_state(), first.export_state());

		second.write(&data[split..]);
		prop_assert_eq!(second.sum(), sha256::sum224(&data));
	}

	#[test]
	fn test_portable_and_accelerated_states_interchange(
		data in prop::collection::vec(any::<u8>(), 0..=512),
		split in 0usize..=512,
	) {
		let split = split.min(data.len());

		let mut portable = Sha256::with_backend(Backend::Portable);
		portable.write(&data[..split]);
		let mut accelerated = Sha256::with_backend(Backend::Accelerated);
		accelerated.import_state(&portable.export_state()).unwrap();
		accelerated.write(&data[split..]);

		prop_assert_eq!(accelerated.backend(), Backend::Accelerated);
		prop_assert_eq!(accelerated.sum(), sha256::sum256(&data));
	}
}
