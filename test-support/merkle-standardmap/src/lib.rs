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

//! Deterministic item lists for building test trees.

use keccak_hasher::KeccakHasher;
use merkle_hasher::Hasher;

type H256 = <KeccakHasher as Hasher>::Out;

/// Alphabet to use when creating items.
pub enum Alphabet {
	/// All values are allowed in each byte of the item.
	All,
	/// Only 6 values ('a' - 'f') are chosen to compose the item.
	Low,
	/// Quite a few values (around 32) are chosen to compose the item.
	Mid,
	/// A set of bytes given is used to compose the item.
	Custom(Vec<u8>),
}

/// Standard list of items for profiling trees.
pub struct StandardItems {
	/// The alphabet to use for items.
	pub alphabet: Alphabet,
	/// Minimum size of an item.
	pub min_len: usize,
	/// Delta size of an item.
	pub journal_len: usize,
	/// Suffix appended to every item, e.g. a mail domain.
	pub suffix: Option<Vec<u8>>,
	/// Number of items.
	pub count: u32,
	/// Drop items equal to an earlier one.
	pub distinct: bool,
}

impl StandardItems {
	/// Get a bunch of random bytes, at least `min_count` bytes, at most `min_count` +
	/// `journal_count` bytes. `seed` is mutated pseudoramdonly and used.
	fn random_bytes(min_count: usize, journal_count: usize, seed: &mut H256) -> Vec<u8> {
		assert!(min_count + journal_count <= 32);
		*seed = KeccakHasher::hash(&seed[..]);
		let r = min_count + (seed[31] as usize % (journal_count + 1));
		seed[0..r].to_vec()
	}

	/// Get a random word of, at least `min_count` bytes, at most `min_count` + `journal_count`
	/// bytes. Each byte is an item from `alphabet`. `seed` is mutated pseudoramdonly and used.
	fn random_word(
		alphabet: &[u8],
		min_count: usize,
		journal_count: usize,
		seed: &mut H256,
	) -> Vec<u8> {
		assert!(min_count + journal_count <= 32);
		*seed = KeccakHasher::hash(&seed[..]);
		let r = min_count + (seed[31] as usize % (journal_count + 1));
		let mut ret: Vec<u8> = Vec::with_capacity(r);
		for i in 0..r {
			ret.push(alphabet[seed[i] as usize % alphabet.len()]);
		}
		ret
	}

	/// Mail-address shaped items, `<word>@example.com`.
	pub fn emails(count: u32) -> Self {
		StandardItems {
			alphabet: Alphabet::Low,
			min_len: 5,
			journal_len: 10,
			suffix: Some(b"@example.com".to_vec()),
			count,
			distinct: true,
		}
	}

	/// Create the item list for the object's fields.
	pub fn make(&self) -> Vec<Vec<u8>> {
		self.make_with(&mut H256::default())
	}

	/// Create the item list for the object's fields, using the given seed.
	///
	/// With `distinct` set, fewer than `count` items may be returned when the
	/// alphabet and lengths leave little room.
	pub fn make_with(&self, seed: &mut H256) -> Vec<Vec<u8>> {
		let low = b"abcdef";
		let mid = b"@QWERTYUIOPASDFGHJKLZXCVBNM[/]^_";

		let mut d: Vec<Vec<u8>> = Vec::new();
		for _ in 0..self.count {
			let mut item = match self.alphabet {
				Alphabet::All => Self::random_bytes(self.min_len, self.journal_len, seed),
				Alphabet::Low => Self::random_word(low, self.min_len, self.journal_len, seed),
				Alphabet::Mid => Self::random_word(mid, self.min_len, self.journal_len, seed),
				Alphabet::Custom(ref a) =>
					Self::random_word(a, self.min_len, self.journal_len, seed),
			};
			if let Some(ref suffix) = self.suffix {
				item.extend_from_slice(suffix);
			}
			if self.distinct && d.contains(&item) {
				continue;
			}
			d.push(item)
		}
		d
	}
}
