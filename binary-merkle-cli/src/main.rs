// Copyright 2026 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `merkle`: roots, inclusion proofs and proof checks from the command line.

mod cli;

use std::io::{self, Write};
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use binary_merkle::{hash_leaf, verify_raw_proof, MerkleTree, Proof};
use clap::Parser;
use keccak_hasher::KeccakHasher;
use log::{debug, info};
use merkle_hasher::Hasher;
use rustc_hex::{FromHex, ToHex};
use sha256_hasher::Sha256Hasher;

use crate::cli::{Cli, Command, HasherKind};

const DEMO_ITEMS: [&str; 3] = ["marco@example.com", "jenna@example.com", "tanay@example.com"];

fn init_logger(verbose: u8) {
	let max_level = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(max_level));
}

fn main() {
	let cli = Cli::parse();
	init_logger(cli.verbose);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	let outcome = match cli.hasher {
		HasherKind::Sha256 => run::<Sha256Hasher, _>(&cli.command, &mut out),
		HasherKind::Keccak => run::<KeccakHasher, _>(&cli.command, &mut out),
	};
	match outcome {
		Ok(true) => {},
		Ok(false) => process::exit(1),
		Err(err) => {
			eprintln!("error: {:#}", err);
			process::exit(2);
		},
	}
}

/// Execute `command`, writing results to `out`.
///
/// `Ok(false)` means the command ran but the checked proof does not hold.
fn run<H: Hasher, W: Write>(command: &Command, out: &mut W) -> Result<bool> {
	match command {
		Command::Root { items } => {
			let tree = build::<H>(items)?;
			writeln!(out, "{}", hex(tree.root()))?;
			Ok(true)
		},
		Command::Prove { item, items } => {
			let tree = build::<H>(items)?;
			let proof = tree
				.proof_for(&hash_leaf::<H>(item))
				.ok_or_else(|| anyhow!("item not found: {}", item))?;
			write_proof(&proof, out)?;
			Ok(true)
		},
		Command::Verify { item, root, steps } => {
			let root = parse_digest::<H>(root).context("invalid --root")?;
			let decoded = steps
				.iter()
				.map(|step| parse_step(step))
				.collect::<Result<Vec<_>>>()?;
			let raw: Vec<(&[u8], &[u8])> =
				decoded.iter().map(|(side, hash)| (&hash[..], side.as_bytes())).collect();
			let valid = verify_raw_proof::<H>(&hash_leaf::<H>(item), &raw, &root)
				.context("invalid proof")?;
			writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
			Ok(valid)
		},
		Command::Demo => demo::<H, W>(out),
	}
}

fn build<H: Hasher>(items: &[String]) -> Result<MerkleTree<H>> {
	let tree = MerkleTree::<H>::from_items(items).context("cannot build tree")?;
	info!("built tree over {} items, height {}", tree.len(), tree.height());
	Ok(tree)
}

fn demo<H: Hasher, W: Write>(out: &mut W) -> Result<bool> {
	let tree = MerkleTree::<H>::from_items(DEMO_ITEMS.iter())?;
	let root = tree.root();
	writeln!(out, "items: {}", DEMO_ITEMS.join(", "))?;
	writeln!(out, "root: {}", hex(root))?;

	let target = hash_leaf::<H>(DEMO_ITEMS[0]);
	let proof = tree
		.proof_for(&target)
		.ok_or_else(|| anyhow!("item not found: {}", DEMO_ITEMS[0]))?;
	writeln!(out, "proof for {}:", DEMO_ITEMS[0])?;
	write_proof(&proof, out)?;

	let valid = binary_merkle::verify_proof::<H, _>(&target, &proof, &root);
	writeln!(out, "against root: {}", if valid { "valid" } else { "invalid" })?;

	let unrelated = H::hash(b"unrelated");
	let forged = binary_merkle::verify_proof::<H, _>(&target, &proof, &unrelated);
	writeln!(out, "against unrelated root: {}", if forged { "valid" } else { "invalid" })?;

	Ok(valid && !forged)
}

fn write_proof<HO: AsRef<[u8]>, W: Write>(proof: &Proof<HO>, out: &mut W) -> Result<()> {
	debug!("proof of {} steps", proof.len());
	for step in proof.iter() {
		writeln!(out, "{}:{}", step.side, hex(&step.hash))?;
	}
	Ok(())
}

fn hex<B: AsRef<[u8]>>(bytes: B) -> String {
	bytes.as_ref().to_hex()
}

fn parse_digest<H: Hasher>(input: &str) -> Result<H::Out> {
	let bytes: Vec<u8> = input.from_hex().map_err(|e| anyhow!("{}", e))?;
	match H::digest_from_slice(&bytes) {
		Some(digest) => Ok(digest),
		None => bail!("expected {} bytes, found {}", H::LENGTH, bytes.len()),
	}
}

/// Split a `side:hex` argument. The side tag is checked later by the verifier.
fn parse_step(input: &str) -> Result<(String, Vec<u8>)> {
	let (side, hash) = input
		.split_once(':')
		.ok_or_else(|| anyhow!("proof step {:?} is not of the form side:hex", input))?;
	let hash: Vec<u8> = hash
		.from_hex()
		.map_err(|e| anyhow!("proof step {:?}: {}", input, e))?;
	Ok((side.to_string(), hash))
}
