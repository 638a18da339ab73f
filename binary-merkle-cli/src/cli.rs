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

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Build binary Merkle trees over a list of items, produce and check inclusion proofs.
///
/// Items are taken in the order given; each item's UTF-8 bytes are hashed into a leaf.
#[derive(Parser, Debug)]
#[command(name = "merkle", version)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,

	/// Digest function for leaves and internal nodes.
	#[arg(long, value_enum, default_value_t = HasherKind::Sha256, global = true)]
	pub hasher: HasherKind,

	/// Raise log verbosity, once for debug and twice for trace. `RUST_LOG` takes precedence.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Print the root of the tree over ITEMS.
	Root {
		#[arg(required = true)]
		items: Vec<String>,
	},
	/// Print the inclusion proof of ITEM, one `side:hex` line per level, leaf level first.
	Prove {
		#[arg(long)]
		item: String,
		#[arg(required = true)]
		items: Vec<String>,
	},
	/// Check a proof for ITEM against ROOT. Exits with status 1 when the proof does not hold.
	Verify {
		#[arg(long)]
		item: String,
		/// Expected root, hex encoded.
		#[arg(long)]
		root: String,
		/// Proof step as `left:<hex>` or `right:<hex>`, leaf level first.
		#[arg(long = "step")]
		steps: Vec<String>,
	},
	/// Build a tree over three addresses, prove one and verify it.
	Demo,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
	Sha256,
	Keccak,
}
