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

use binary_merkle::{
	compute_root, generate_proof, generate_proof_at, hash_leaf, hash_leaves, verify_proof,
	verify_raw_proof, MerkleTree, ProofStep, Side,
};
use merkle_hasher::Hasher;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{build_tree, distinct_items, email_items, expected_height, flip_bit};

test_hashers!(round_trip, round_trip_internal);
fn round_trip_internal<H: Hasher>() {
	for n in 1..=33 {
		let items = distinct_items(n);
		let (leaves, tree) = build_tree::<H>(&items);
		let root = tree.root();
		for item in items.iter() {
			let digest = hash_leaf::<H>(item);
			let proof = generate_proof::<H>(&digest, &leaves).expect("item is a leaf; qed");
			assert!(verify_proof::<H, _>(&digest, &proof, &root));
		}
	}
}

test_hashers!(round_trip_random_sizes, round_trip_random_sizes_internal);
fn round_trip_random_sizes_internal<H: Hasher>() {
	let mut rng = SmallRng::seed_from_u64(7);
	for _ in 0..10 {
		let n = rng.gen_range(1..500usize);
		let items: Vec<Vec<u8>> = (0..n as u32).map(|i| i.to_be_bytes().to_vec()).collect();
		let (leaves, tree) = build_tree::<H>(&items);
		for _ in 0..8 {
			let index = rng.gen_range(0..n);
			let proof = generate_proof::<H>(&leaves[index], &leaves).unwrap();
			assert_eq!(proof.len(), expected_height(n));
			assert!(verify_proof::<H, _>(&leaves[index], &proof, &tree.root()));
		}
	}
}

test_hashers!(tamper_sensitivity, tamper_sensitivity_internal);
fn tamper_sensitivity_internal<H: Hasher>() {
	let items = distinct_items(11);
	let (leaves, tree) = build_tree::<H>(&items);
	let root = tree.root();
	let bits = H::LENGTH * 8;

	for index in [0, 5, leaves.len() - 1] {
		let item = &leaves[index];
		let proof = generate_proof::<H>(item, &leaves).unwrap();
		assert!(verify_proof::<H, _>(item, &proof, &root));

		let mut altered = items[index].clone();
		altered[0] ^= 0x01;
		assert!(!verify_proof::<H, _>(&hash_leaf::<H>(&altered), &proof, &root));

		for bit in (0..bits).step_by(13) {
			assert!(!verify_proof::<H, _>(&flip_bit(item, bit), &proof, &root));
			assert!(!verify_proof::<H, _>(item, &proof, &flip_bit(&root, bit)));
			for step in 0..proof.len() {
				let mut steps = proof.clone().into_steps();
				steps[step].hash = flip_bit(&steps[step].hash, bit);
				assert!(!verify_proof::<H, _>(item, &steps, &root));
			}
		}
	}
}

test_hashers!(side_swap_fails, side_swap_fails_internal);
fn side_swap_fails_internal<H: Hasher>() {
	let items = distinct_items(8);
	let (leaves, tree) = build_tree::<H>(&items);
	let proof = generate_proof::<H>(&leaves[3], &leaves).unwrap();
	for step in 0..proof.len() {
		let mut steps = proof.clone().into_steps();
		steps[step].side = match steps[step].side {
			Side::Left => Side::Right,
			Side::Right => Side::Left,
		};
		assert!(!verify_proof::<H, _>(&leaves[3], &steps, &tree.root()));
	}
}

test_hashers!(non_membership, non_membership_internal);
fn non_membership_internal<H: Hasher>() {
	let absent = hash_leaf::<H>("nobody@example.com");
	for n in 1..=16 {
		let items = distinct_items(n);
		let (leaves, tree) = build_tree::<H>(&items);
		assert!(generate_proof::<H>(&absent, &leaves).is_none());
		assert!(tree.proof_for(&absent).is_none());
	}
	assert!(generate_proof::<H>(&absent, &[]).is_none());
}

test_hashers!(proof_length_bound, proof_length_bound_internal);
fn proof_length_bound_internal<H: Hasher>() {
	for n in 1..=70usize {
		let items: Vec<Vec<u8>> = (0..n as u32).map(|i| i.to_le_bytes().to_vec()).collect();
		let (leaves, _) = build_tree::<H>(&items);
		for index in 0..n {
			let proof = generate_proof_at::<H>(index, &leaves).unwrap();
			assert_eq!(proof.len(), expected_height(n), "n={} index={}", n, index);
		}
	}
}

test_hashers!(odd_tail_proof, odd_tail_proof_internal);
fn odd_tail_proof_internal<H: Hasher>() {
	let (a, b, c) = (H::hash(b"A"), H::hash(b"B"), H::hash(b"C"));
	let leaves = vec![a, b, c];
	let ab = H::hash_pair(&a, &b);
	let root = H::hash_pair(&ab, &H::hash_pair(&c, &c));

	let proof = generate_proof::<H>(&c, &leaves).unwrap();
	assert_eq!(proof.steps(), &[ProofStep::new(c, Side::Left), ProofStep::new(ab, Side::Left)][..]);
	assert_eq!(compute_root::<H, _>(&c, &proof), root);
	assert!(verify_proof::<H, _>(&c, &proof, &root));
}

test_hashers!(duplicate_leaves_first_wins, duplicate_leaves_first_wins_internal);
fn duplicate_leaves_first_wins_internal<H: Hasher>() {
	let items = vec!["dup", "other", "dup", "last"];
	let leaves = hash_leaves::<H, _, _>(&items);
	let tree = MerkleTree::<H>::new(leaves.clone()).unwrap();

	let proof = generate_proof::<H>(&leaves[0], &leaves).unwrap();
	assert_eq!(Some(proof.clone()), generate_proof_at::<H>(0, &leaves));
	assert_ne!(Some(proof.clone()), generate_proof_at::<H>(2, &leaves));
	assert_eq!(tree.position(&leaves[2]), Some(0));
	// both positions commit to the same root
	assert!(verify_proof::<H, _>(&leaves[0], &proof, &tree.root()));
	assert!(verify_proof::<H, _>(&leaves[2], &generate_proof_at::<H>(2, &leaves).unwrap(), &tree.root()));
}

test_hashers!(proof_bound_to_its_tree, proof_bound_to_its_tree_internal);
fn proof_bound_to_its_tree_internal<H: Hasher>() {
	let (leaves, _) = build_tree::<H>(&distinct_items(6));
	let (_, other) = build_tree::<H>(&distinct_items(7));
	let proof = generate_proof::<H>(&leaves[1], &leaves).unwrap();
	assert!(!verify_proof::<H, _>(&leaves[1], &proof, &other.root()));
}

test_hashers!(retained_tree_proofs, retained_tree_proofs_internal);
fn retained_tree_proofs_internal<H: Hasher>() {
	let (leaves, tree) = build_tree::<H>(&distinct_items(21));
	for (index, leaf) in leaves.iter().enumerate() {
		let proof = tree.proof(index).unwrap();
		assert_eq!(Some(proof.clone()), generate_proof::<H>(leaf, &leaves));
		assert!(verify_proof::<H, _>(leaf, &proof, &tree.root()));
	}
	assert!(tree.proof(leaves.len()).is_none());
}

test_hashers!(raw_proof_input, raw_proof_input_internal);
fn raw_proof_input_internal<H: Hasher>() {
	let (leaves, tree) = build_tree::<H>(&distinct_items(5));
	let proof = tree.proof(4).unwrap();

	let tags: Vec<(Vec<u8>, &[u8])> = proof
		.iter()
		.map(|step| (step.hash.as_ref().to_vec(), step.side.as_str().as_bytes()))
		.collect();
	let raw: Vec<(&[u8], &[u8])> = tags.iter().map(|(h, s)| (&h[..], *s)).collect();
	assert_eq!(verify_raw_proof::<H>(&leaves[4], &raw, &tree.root()), Ok(true));
	assert_eq!(verify_raw_proof::<H>(&leaves[3], &raw, &tree.root()), Ok(false));

	let mut bad = raw.clone();
	bad[0].1 = b"above";
	let err = verify_raw_proof::<H>(&leaves[4], &bad, &tree.root()).unwrap_err();
	assert!(err.is_invalid_proof());
}

test_hashers!(end_to_end_scenario, end_to_end_scenario_internal);
fn end_to_end_scenario_internal<H: Hasher>() {
	let items = email_items();
	let leaves = hash_leaves::<H, _, _>(&items);
	assert_eq!(leaves.len(), 3);

	let tree = MerkleTree::<H>::new(leaves.clone()).unwrap();
	let shape: Vec<usize> = tree.levels().iter().map(|level| level.len()).collect();
	assert_eq!(shape, vec![3, 2, 1]);
	let root = tree.root();

	let marco = hash_leaf::<H>("marco@example.com");
	let proof = generate_proof::<H>(&marco, &leaves).unwrap();
	assert_eq!(proof.len(), 2);
	assert!(verify_proof::<H, _>(&marco, &proof, &root));

	let unrelated = H::hash(b"some unrelated root");
	assert!(!verify_proof::<H, _>(&marco, &proof, &unrelated));
}
