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

//! The level fold shared by tree construction and proof generation.
//!
//! Entries of a level are taken in consecutive pairs `(2i, 2i + 1)` and each pair
//! becomes `H::hash_pair(left, right)` in the next level. When the level has odd
//! length the last entry is paired with itself.

use crate::rstd::vec::Vec;
use crate::proof::Side;
use merkle_hasher::Hasher;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum level length before pairs are hashed on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 1024;

/// Parent digest of one chunk of at most two entries.
#[inline]
fn parent<H: Hasher>(pair: &[H::Out]) -> H::Out {
	match pair {
		[left, right] => H::hash_pair(left, right),
		[single] => H::hash_pair(single, single),
		_ => unreachable!("chunks(2) yields one or two entries; qed"),
	}
}

/// Derive the next level up from `level`.
///
/// The result has `ceil(level.len() / 2)` entries. Callers stop folding once a
/// level of length one is reached, that entry being the root.
#[cfg(not(feature = "parallel"))]
pub fn next_level<H: Hasher>(level: &[H::Out]) -> Vec<H::Out> {
	level.chunks(2).map(parent::<H>).collect()
}

/// Derive the next level up from `level`.
///
/// The result has `ceil(level.len() / 2)` entries. Large levels are hashed on the
/// rayon pool; the whole level completes before the caller can fold the next one.
#[cfg(feature = "parallel")]
pub fn next_level<H: Hasher>(level: &[H::Out]) -> Vec<H::Out> {
	if level.len() < PARALLEL_THRESHOLD {
		return level.chunks(2).map(parent::<H>).collect();
	}
	level.par_chunks(2).map(parent::<H>).collect()
}

/// Index of the entry `index` is combined with in a level of `level_len` entries.
///
/// The unpaired tail of an odd-length level is its own sibling.
pub fn sibling_index(index: usize, level_len: usize) -> usize {
	let sibling = if index % 2 == 0 { index + 1 } else { index - 1 };
	if sibling >= level_len {
		index
	} else {
		sibling
	}
}

impl Side {
	/// Side taken by the entry at `sibling` when combined with the entry at `index`.
	///
	/// A self-paired tail resolves to `Left`. Both operands are the same digest so
	/// replaying it as the left operand yields the parent computed by the fold.
	pub fn of_sibling(index: usize, sibling: usize) -> Side {
		if sibling > index {
			Side::Right
		} else {
			Side::Left
		}
	}
}
