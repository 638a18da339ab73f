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

//! Tree construction.

use crate::rstd::{fmt, marker::PhantomData, vec::Vec};
use crate::{
	leaf::hash_leaves,
	level::{next_level, sibling_index},
	proof::{Proof, ProofStep, Side},
	Error, Result, ToHex,
};
use log::trace;
use merkle_hasher::Hasher;

/// Root digest of `leaves`, discarding the intermediate levels.
///
/// A single leaf is its own root, no hashing happens. An empty sequence has no
/// root and is rejected.
pub fn merkle_root<H: Hasher>(leaves: &[H::Out]) -> Result<H::Out> {
	if leaves.is_empty() {
		return Err(Error::EmptyLeaves);
	}
	if leaves.len() == 1 {
		return Ok(leaves[0]);
	}

	let mut level = next_level::<H>(leaves);
	while level.len() > 1 {
		trace!(target: "merkle", "folding level of {} digests", level.len());
		level = next_level::<H>(&level);
	}
	trace!(target: "merkle", "root of {} leaves: {:?}", leaves.len(), ToHex(level[0].as_ref()));
	Ok(level[0])
}

/// A fully built tree, every level retained.
///
/// Keeping the levels lets any number of proofs be read off without hashing
/// again. The tree is never modified after construction; a changed leaf set
/// means building a new tree.
pub struct MerkleTree<H: Hasher> {
	/// Level 0 holds the leaves, the last level holds only the root.
	levels: Vec<Vec<H::Out>>,
	_marker: PhantomData<H>,
}

impl<H: Hasher> MerkleTree<H> {
	/// Build the tree over `leaves`.
	pub fn new(leaves: Vec<H::Out>) -> Result<Self> {
		if leaves.is_empty() {
			return Err(Error::EmptyLeaves);
		}

		let mut levels = Vec::new();
		let mut current = leaves;
		while current.len() > 1 {
			let next = next_level::<H>(&current);
			trace!(target: "merkle", "level {}: {} -> {} digests", levels.len(), current.len(), next.len());
			levels.push(current);
			current = next;
		}
		trace!(target: "merkle", "root: {:?}", ToHex(current[0].as_ref()));
		levels.push(current);

		Ok(MerkleTree { levels, _marker: PhantomData })
	}

	/// Hash `items` into leaves and build the tree over them.
	pub fn from_items<I, A>(items: I) -> Result<Self>
	where
		I: IntoIterator<Item = A>,
		A: AsRef<[u8]>,
	{
		Self::new(hash_leaves::<H, _, _>(items))
	}

	/// The root digest.
	pub fn root(&self) -> H::Out {
		let top = &self.levels[self.levels.len() - 1];
		top[0]
	}

	pub fn leaves(&self) -> &[H::Out] {
		&self.levels[0]
	}

	/// All levels, leaves first and root last.
	pub fn levels(&self) -> &[Vec<H::Out>] {
		&self.levels
	}

	/// Number of leaves.
	pub fn len(&self) -> usize {
		self.levels[0].len()
	}

	/// Always false, a tree cannot be built without leaves.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Number of levels above the leaves. This is the length of every proof.
	pub fn height(&self) -> usize {
		self.levels.len() - 1
	}

	/// Position of the first leaf equal to `digest`.
	///
	/// When a digest occurs several times only the lowest index is ever reported,
	/// so proofs for duplicated leaves always point at the first occurrence.
	pub fn position(&self, digest: &H::Out) -> Option<usize> {
		self.leaves().iter().position(|leaf| leaf == digest)
	}

	/// Inclusion proof for the leaf at `index`, `None` if out of range.
	pub fn proof(&self, index: usize) -> Option<Proof<H::Out>> {
		if index >= self.len() {
			return None;
		}

		let mut index = index;
		let mut steps = Vec::with_capacity(self.height());
		for level in &self.levels[..self.height()] {
			let sibling = sibling_index(index, level.len());
			steps.push(ProofStep::new(level[sibling], Side::of_sibling(index, sibling)));
			index /= 2;
		}
		Some(Proof::from(steps))
	}

	/// Inclusion proof for the first leaf equal to `digest`.
	pub fn proof_for(&self, digest: &H::Out) -> Option<Proof<H::Out>> {
		self.position(digest).and_then(|index| self.proof(index))
	}
}

impl<H: Hasher> Clone for MerkleTree<H> {
	fn clone(&self) -> Self {
		MerkleTree { levels: self.levels.clone(), _marker: PhantomData }
	}
}

impl<H: Hasher> PartialEq for MerkleTree<H> {
	fn eq(&self, other: &Self) -> bool {
		self.levels == other.levels
	}
}

impl<H: Hasher> Eq for MerkleTree<H> {}

impl<H: Hasher> fmt::Debug for MerkleTree<H> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("MerkleTree")
			.field("leaves", &self.len())
			.field("height", &self.height())
			.field("root", &ToHex(self.root().as_ref()))
			.finish()
	}
}
