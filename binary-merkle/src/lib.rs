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
#![cfg_attr(not(feature = "std"), no_std)]

//! Binary Merkle tree over an ordered sequence of leaf digests.
//!
//! The tree commits to every leaf and to the leaf order. Each level is derived
//! from the previous one by hashing consecutive pairs `(2i, 2i + 1)` as
//! `hash(left ++ right)`; an odd tail is paired with itself. A one-leaf tree has
//! the leaf itself as root.
//!
//! Inclusion proofs list, from the leaf level up, the sibling digest at each
//! level together with the side it takes in the combination. They are
//! logarithmic in the number of leaves and reveal no other member.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
mod rstd {
	pub use std::{borrow, convert, fmt, marker, result, slice, vec};
}

#[cfg(not(feature = "std"))]
mod rstd {
	pub use alloc::{borrow, vec};
	pub use core::{convert, fmt, marker, result, slice};
}

use self::rstd::vec::Vec;
#[cfg(feature = "std")]
use self::rstd::fmt;

pub mod leaf;
pub mod level;
pub mod proof;
pub mod tree;

pub use self::{
	leaf::{hash_leaf, hash_leaves},
	level::next_level,
	proof::{
		compute_root, generate_proof, generate_proof_at, verify_proof, verify_raw_proof, Proof,
		ProofStep, Side,
	},
	tree::{merkle_root, MerkleTree},
};
pub use merkle_hasher::Hasher;

/// Errors raised on malformed input.
///
/// A proof that simply does not replay to the expected root is not an error,
/// `verify_proof` returns `false` for it. Likewise a target that is not part of
/// the leaves is reported as `None` by the proof generator.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Error {
	/// A root was requested for an empty leaf sequence.
	EmptyLeaves,
	/// A proof step carried a side tag other than left or right.
	InvalidSide(Vec<u8>),
	/// A proof step digest does not have the hasher output length.
	InvalidDigestLength {
		/// Output length of the hasher.
		expected: usize,
		/// Length of the supplied bytes.
		found: usize,
	},
}

impl Error {
	/// Whether this error describes a malformed proof, as opposed to invalid tree input.
	pub fn is_invalid_proof(&self) -> bool {
		match self {
			Error::EmptyLeaves => false,
			Error::InvalidSide(_) | Error::InvalidDigestLength { .. } => true,
		}
	}
}

#[cfg(feature = "std")]
impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Error::EmptyLeaves => write!(f, "Cannot build a Merkle tree without leaves"),
			Error::InvalidSide(ref tag) =>
				write!(f, "Invalid proof step side tag: {:?}", String::from_utf8_lossy(tag)),
			Error::InvalidDigestLength { expected, found } => write!(
				f,
				"Invalid proof step digest length: expected {} bytes, found {}",
				expected, found,
			),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Merkle result type.
pub type Result<T> = crate::rstd::result::Result<T, Error>;

/// Hex formatting of digests in log output.
pub(crate) struct ToHex<'a>(pub(crate) &'a [u8]);

impl<'a> rstd::fmt::Debug for ToHex<'a> {
	#[cfg(feature = "std")]
	fn fmt(&self, fmt: &mut rstd::fmt::Formatter) -> rstd::fmt::Result {
		let hex = rustc_hex::ToHexIter::new(self.0.iter());
		for b in hex {
			write!(fmt, "{}", b)?;
		}
		Ok(())
	}

	#[cfg(not(feature = "std"))]
	fn fmt(&self, fmt: &mut rstd::fmt::Formatter) -> rstd::fmt::Result {
		for b in self.0 {
			write!(fmt, "{:02x}", b)?;
		}
		Ok(())
	}
}
