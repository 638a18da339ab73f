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

//! Generation and verification of inclusion proofs.
//!
//! A proof for a leaf is the list of digests the leaf is combined with on its
//! way to the root, one per level, leaf level first. Each entry records on which
//! side the sibling sits in that combination: a `Left` sibling is hashed as
//! `hash(sibling ++ current)`, a `Right` one as `hash(current ++ sibling)`.
//!
//! Generation does not check its output against any root. Callers that need that
//! guarantee run the proof through [`verify_proof`] themselves.

use crate::rstd::{convert::TryFrom, fmt, slice, vec::Vec};
use crate::{Error, Result, ToHex};
use merkle_hasher::Hasher;

pub use self::generate::{generate_proof, generate_proof_at};
pub use self::verify::{compute_root, verify_proof, verify_raw_proof};

mod generate;
mod verify;

/// Position of a sibling digest in the combination that produces its parent.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Side {
	/// The sibling is the left operand.
	Left,
	/// The sibling is the right operand.
	Right,
}

impl Side {
	/// Parse a textual side tag, `left` or `right`.
	pub fn from_tag(tag: &[u8]) -> Result<Side> {
		match tag {
			b"left" => Ok(Side::Left),
			b"right" => Ok(Side::Right),
			_ => Err(Error::InvalidSide(tag.to_vec())),
		}
	}

	/// Textual tag of this side.
	pub fn as_str(&self) -> &'static str {
		match self {
			Side::Left => "left",
			Side::Right => "right",
		}
	}
}

/// Byte tag, `0` for left and `1` for right.
impl TryFrom<u8> for Side {
	type Error = Error;

	fn try_from(tag: u8) -> Result<Side> {
		match tag {
			0 => Ok(Side::Left),
			1 => Ok(Side::Right),
			_ => Err(Error::InvalidSide([tag].to_vec())),
		}
	}
}

impl From<Side> for u8 {
	fn from(side: Side) -> u8 {
		match side {
			Side::Left => 0,
			Side::Right => 1,
		}
	}
}

impl fmt::Display for Side {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(feature = "std")]
impl std::str::FromStr for Side {
	type Err = Error;

	fn from_str(s: &str) -> Result<Side> {
		Side::from_tag(s.as_bytes())
	}
}

/// One level of a proof: the sibling digest and its side.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct ProofStep<HO> {
	pub hash: HO,
	pub side: Side,
}

impl<HO> ProofStep<HO> {
	pub fn new(hash: HO, side: Side) -> Self {
		ProofStep { hash, side }
	}
}

impl<HO: AsRef<[u8]> + AsMut<[u8]> + Default> ProofStep<HO> {
	/// Decode a step supplied as untyped bytes.
	///
	/// Fails if the side tag is unknown or the digest length does not match the
	/// hasher output.
	pub fn from_raw<H: Hasher<Out = HO>>(hash: &[u8], side_tag: &[u8]) -> Result<Self> {
		let side = Side::from_tag(side_tag)?;
		let hash = H::digest_from_slice(hash)
			.ok_or(Error::InvalidDigestLength { expected: H::LENGTH, found: hash.len() })?;
		Ok(ProofStep { hash, side })
	}
}

impl<HO: AsRef<[u8]>> fmt::Debug for ProofStep<HO> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:{:?}", self.side, ToHex(self.hash.as_ref()))
	}
}

/// Inclusion proof, leaf level first.
///
/// An empty proof is valid only for a single-leaf tree, where the leaf is the root.
#[derive(PartialEq, Eq, Clone, Default)]
pub struct Proof<HO> {
	steps: Vec<ProofStep<HO>>,
}

impl<HO> Proof<HO> {
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	pub fn steps(&self) -> &[ProofStep<HO>] {
		&self.steps
	}

	pub fn iter(&self) -> slice::Iter<ProofStep<HO>> {
		self.steps.iter()
	}

	pub fn into_steps(self) -> Vec<ProofStep<HO>> {
		self.steps
	}
}

impl<HO: AsRef<[u8]>> fmt::Debug for Proof<HO> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(self.steps.iter()).finish()
	}
}

impl<HO> From<Vec<ProofStep<HO>>> for Proof<HO> {
	fn from(steps: Vec<ProofStep<HO>>) -> Self {
		Proof { steps }
	}
}

impl<HO> IntoIterator for Proof<HO> {
	type Item = ProofStep<HO>;
	type IntoIter = crate::rstd::vec::IntoIter<ProofStep<HO>>;

	fn into_iter(self) -> Self::IntoIter {
		self.steps.into_iter()
	}
}

impl<'a, HO> IntoIterator for &'a Proof<HO> {
	type Item = &'a ProofStep<HO>;
	type IntoIter = slice::Iter<'a, ProofStep<HO>>;

	fn into_iter(self) -> Self::IntoIter {
		self.steps.iter()
	}
}
