// Copyright 2025 Irreducible Inc.

use std::{
	fs::{self, File},
	io::{self, Write},
	path::PathBuf,
};

use anyhow::{Context, Result};
use bytesize::ByteSize;
use cksum_hash::{Algorithm, DynHasher, Registry};
use cksum_utils::tracing::init_tracing;
use clap::Parser;

/// Print the checksum of each file, or of standard input when no file is given.
#[derive(Debug, Parser)]
struct Args {
	/// Hash algorithm: md5, sha224 or sha256.
	#[arg(short, long, default_value_t = Algorithm::Sha256)]
	algorithm: Algorithm,
	/// Write the unfinished state to this path once all input has been absorbed.
	#[arg(long)]
	save_state: Option<PathBuf>,
	/// Import a previously saved state before absorbing any input.
	#[arg(long)]
	resume: Option<PathBuf>,
	/// Files to hash. All files are absorbed into a single checksum.
	files: Vec<PathBuf>,
}

/// `io::Write` adapter over a boxed hasher.
struct HashWriter<'a>(&'a mut dyn DynHasher);

impl Write for HashWriter<'_> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		Ok(DynHasher::write(&mut *self.0, buf))
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// One output line: the hex checksum, two spaces, the algorithm name.
fn checksum_line(checksum: &[u8], algorithm: Algorithm) -> String {
	format!("{}  {algorithm}", hex::encode(checksum))
}

fn main() -> Result<()> {
	init_tracing().context("installing tracing subscriber")?;

	let args = Args::parse();

	let registry = Registry::with_defaults();
	let mut hasher = registry
		.get(args.algorithm)
		.with_context(|| format!("{} is not available", args.algorithm))?;

	if let Some(path) = &args.resume {
		let state = fs::read(path).with_context(|| format!("reading state {}", path.display()))?;
		hasher
			.import_state(&state)
			.with_context(|| format!("importing state {}", path.display()))?;
		tracing::info!(path = %path.display(), "resumed {} state", args.algorithm);
	}

	let mut total = 0u64;
	let mut writer = HashWriter(hasher.as_mut());
	if args.files.is_empty() {
		total += io::copy(&mut io::stdin().lock(), &mut writer).context("reading stdin")?;
	} else {
		for path in &args.files {
			let mut file =
				File::open(path).with_context(|| format!("opening {}", path.display()))?;
			total += io::copy(&mut file, &mut writer)
				.with_context(|| format!("reading {}", path.display()))?;
		}
	}
	tracing::info!(algorithm = %args.algorithm, "absorbed {}", ByteSize::b(total));

	if let Some(path) = &args.save_state {
		fs::write(path, hasher.export_state())
			.with_context(|| format!("writing state {}", path.display()))?;
	}

	println!("{}", checksum_line(&hasher.sum_to_vec(), args.algorithm));

	Ok(())
}
