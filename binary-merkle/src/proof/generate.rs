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

//! Generation of inclusion proofs from a leaf sequence.

use crate::rstd::{borrow::Cow, vec::Vec};
use crate::level::{next_level, sibling_index};
use crate::proof::{Proof, ProofStep, Side};
use log::trace;
use merkle_hasher::Hasher;

/// Generate the inclusion proof for `target` over `leaves`.
///
/// The target is located by scanning for the first leaf equal to it, so with
/// duplicated leaves the proof is always for the lowest index. Returns `None`
/// when no leaf matches, including for an empty sequence.
///
/// Each level is derived with the same fold the tree builder uses. The proof is
/// not checked against a root here.
pub fn generate_proof<H: Hasher>(target: &H::Out, leaves: &[H::Out]) -> Option<Proof<H::Out>> {
	let index = match leaves.iter().position(|leaf| leaf == target) {
		Some(index) => index,
		None => {
			trace!(target: "merkle", "target not among {} leaves", leaves.len());
			return None;
		},
	};
	generate_proof_at::<H>(index, leaves)
}

/// Generate the inclusion proof for the leaf at `index`, `None` if out of range.
pub fn generate_proof_at<H: Hasher>(index: usize, leaves: &[H::Out]) -> Option<Proof<H::Out>> {
	if index >= leaves.len() {
		return None;
	}

	let mut index = index;
	let mut level: Cow<[H::Out]> = Cow::Borrowed(leaves);
	let mut steps = Vec::new();
	while level.len() > 1 {
		let sibling = sibling_index(index, level.len());
		let side = Side::of_sibling(index, sibling);
		trace!(target: "merkle", "level of {}: index {} sibling {} ({})", level.len(), index, sibling, side);
		steps.push(ProofStep::new(level[sibling], side));

		index /= 2;
		level = Cow::Owned(next_level::<H>(&level));
	}
	Some(Proof::from(steps))
}
