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

//! Hasher implementation for the Keccak-256 hash

#![cfg_attr(not(feature = "std"), no_std)]

use merkle_hasher::Hasher;
use tiny_keccak::{Hasher as _, Keccak};

/// Concrete `Hasher` impl for the Keccak-256 hash
#[derive(Default, Debug, Clone, PartialEq)]
pub struct KeccakHasher;

impl Hasher for KeccakHasher {
	type Out = [u8; 32];

	const LENGTH: usize = 32;

	fn hash(x: &[u8]) -> Self::Out {
		let mut keccak = Keccak::v256();
		keccak.update(x);
		let mut out = [0u8; 32];
		keccak.finalize(&mut out);
		out
	}

	fn hash_pair(left: &Self::Out, right: &Self::Out) -> Self::Out {
		let mut keccak = Keccak::v256();
		keccak.update(left);
		keccak.update(right);
		let mut out = [0u8; 32];
		keccak.finalize(&mut out);
		out
	}
}
