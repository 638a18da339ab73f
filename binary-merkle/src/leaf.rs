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

//! Leaf digests: the raw bytes of each item hashed once.

use crate::rstd::vec::Vec;
use merkle_hasher::Hasher;

/// Digest of a single item. The item bytes are hashed as is, strings by their
/// UTF-8 encoding.
pub fn hash_leaf<H: Hasher>(item: impl AsRef<[u8]>) -> H::Out {
	H::hash(item.as_ref())
}

/// Leaf digests of `items`, in input order.
pub fn hash_leaves<H, I, A>(items: I) -> Vec<H::Out>
where
	H: Hasher,
	I: IntoIterator<Item = A>,
	A: AsRef<[u8]>,
{
	items.into_iter().map(|item| hash_leaf::<H>(item)).collect()
}
