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

//! Verification of inclusion proofs.

use crate::rstd::vec::Vec;
use crate::proof::{ProofStep, Side};
use crate::{Result, ToHex};
use log::debug;
use merkle_hasher::Hasher;

/// Replay `steps` from `item` up to the root they imply.
pub fn compute_root<'a, H, I>(item: &H::Out, steps: I) -> H::Out
where
	H: Hasher,
	H::Out: 'a,
	I: IntoIterator<Item = &'a ProofStep<H::Out>>,
{
	steps.into_iter().fold(*item, |computed, step| match step.side {
		Side::Left => H::hash_pair(&step.hash, &computed),
		Side::Right => H::hash_pair(&computed, &step.hash),
	})
}

/// Check that `proof` links `item` to `root`.
///
/// A proof that replays to a different root yields `false`. An empty proof
/// holds exactly when `item` is the root.
pub fn verify_proof<'a, H, I>(item: &H::Out, proof: I, root: &H::Out) -> bool
where
	H: Hasher,
	H::Out: 'a,
	I: IntoIterator<Item = &'a ProofStep<H::Out>>,
{
	let computed = compute_root::<H, _>(item, proof);
	if &computed != root {
		debug!(
			target: "merkle",
			"proof mismatch: computed {:?}, expected {:?}",
			ToHex(computed.as_ref()),
			ToHex(root.as_ref()),
		);
		return false;
	}
	true
}

/// Verify a proof given as untyped `(digest, side tag)` pairs.
///
/// Malformed steps are an error; a well formed proof for the wrong root is
/// `Ok(false)`.
pub fn verify_raw_proof<H: Hasher>(
	item: &H::Out,
	steps: &[(&[u8], &[u8])],
	root: &H::Out,
) -> Result<bool> {
	let steps = steps
		.iter()
		.map(|(hash, side)| ProofStep::from_raw::<H>(hash, side))
		.collect::<Result<Vec<_>>>()?;
	Ok(verify_proof::<H, _>(item, &steps, root))
}
