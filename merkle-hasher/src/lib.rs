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

//! Hash function abstraction for binary Merkle trees.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
use std::fmt::Debug;
#[cfg(feature = "std")]
use std::hash;
#[cfg(not(feature = "std"))]
use core::hash;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
pub trait MaybeDebug: Debug {}
#[cfg(feature = "std")]
impl<T: Debug> MaybeDebug for T {}
#[cfg(not(feature = "std"))]
pub trait MaybeDebug {}
#[cfg(not(feature = "std"))]
impl<T> MaybeDebug for T {}

/// Trait describing an object that can hash a slice of bytes. Used to abstract
/// the tree builder, proof generator and verifier over the digest algorithm.
///
/// The same `Hasher` must be used for leaf hashing and for every internal node
/// of one tree, otherwise proofs will not replay to the root.
pub trait Hasher: Sync + Send {
	/// The output type of the `Hasher`, a fixed length digest.
	type Out: AsRef<[u8]> + AsMut<[u8]> + Default + MaybeDebug + PartialEq + Eq
		+ hash::Hash + Send + Sync + Clone + Copy;
	/// The length in bytes of the `Hasher` output.
	const LENGTH: usize;

	/// Compute the hash of the provided slice of bytes returning the `Out` type of the `Hasher`.
	fn hash(x: &[u8]) -> Self::Out;

	/// Digest of an internal node: `hash(left ++ right)`.
	///
	/// Operand order is significant. Implementations may override this to feed
	/// both halves into a running state, but the output must stay identical to
	/// hashing the concatenation.
	fn hash_pair(left: &Self::Out, right: &Self::Out) -> Self::Out {
		let mut buf = Vec::with_capacity(Self::LENGTH * 2);
		buf.extend_from_slice(left.as_ref());
		buf.extend_from_slice(right.as_ref());
		Self::hash(&buf)
	}

	/// Copy `bytes` into a digest, `None` if the length does not match.
	fn digest_from_slice(bytes: &[u8]) -> Option<Self::Out> {
		if bytes.len() != Self::LENGTH {
			return None;
		}
		let mut out = Self::Out::default();
		out.as_mut().copy_from_slice(bytes);
		Some(out)
	}
}

/// Test function to use on any `Hasher` that overrides `hash_pair`.
#[cfg(feature = "std")]
pub fn test_hash_pair<H: Hasher>() {
	let mut left = H::Out::default();
	let mut right = H::Out::default();
	left.as_mut()[0] = 1;
	right.as_mut()[H::LENGTH - 1] = 2;

	let mut concat = left.as_ref().to_vec();
	concat.extend_from_slice(right.as_ref());
	assert_eq!(H::hash_pair(&left, &right), H::hash(&concat));
	assert_ne!(H::hash_pair(&left, &right), H::hash_pair(&right, &left));
}
