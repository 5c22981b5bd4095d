#![cfg(test)]

// Property tests for both tables kept inside the crate so the constant
// hasher from `index_hasher::tests` can be shared.

use crate::error::TableError;
use crate::index_hasher::tests::ConstBuildHasher;
use crate::table::{CollisionTable, PutOutcome};
use crate::{ChainingTable, ProbingTable};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Lookup(usize),
    Remove(usize),
    Contains(String),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=8, proptest::collection::vec("[a-z]{0,4}", 1..=12)).prop_flat_map(
        |(capacity, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let contains_pool = proptest::sample::select(pool.clone());
            let op = prop_oneof![
                3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
                2 => idx.clone().prop_map(OpI::Lookup),
                2 => idx.clone().prop_map(OpI::Remove),
                1 => prop_oneof![contains_pool, "[a-z]{0,4}"].prop_map(OpI::Contains),
                1 => Just(OpI::Iterate),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        },
    )
}

/// Replays `ops` against `sut` and a `HashMap` model.
///
/// `bounded` is true for tables that reject new keys once `len == capacity`.
fn check_against_model<T: CollisionTable>(
    sut: &mut T,
    bounded: bool,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = &pool[i];
                let already = model.contains_key(k);
                match sut.put(k, v) {
                    Ok(PutOutcome::Updated { .. }) => {
                        prop_assert!(already, "update reported for a new key");
                        model.insert(k.clone(), v);
                    }
                    Ok(PutOutcome::Inserted { .. }) => {
                        prop_assert!(!already, "insert reported for an existing key");
                        model.insert(k.clone(), v);
                    }
                    Err(TableError::TableFull { key, capacity }) => {
                        prop_assert!(bounded, "unbounded table rejected a put");
                        prop_assert!(!already, "update must not be rejected");
                        prop_assert_eq!(&key, k);
                        prop_assert_eq!(capacity, sut.capacity());
                        prop_assert_eq!(model.len(), capacity);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
                }
            }
            OpI::Lookup(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.lookup(k), model.get(k).copied());
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                let before = sut.len();
                let removed = sut.remove(k);
                prop_assert_eq!(removed, model.remove(k).is_some());
                if !removed {
                    prop_assert_eq!(sut.len(), before);
                }
                prop_assert!(sut.lookup(k).is_none());
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Iterate => {
                let keys: BTreeSet<&String> = model.keys().collect();
                for k in keys {
                    prop_assert!(sut.contains_key(k));
                }
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        if bounded {
            prop_assert!(sut.len() <= sut.capacity());
        }
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Insert vs update is reported correctly; keys stay unique.
// - Lookups agree with the model, including after removals.
// - Removing an absent key returns false and leaves len unchanged.
// - Probing rejects new keys only when exactly `capacity` keys are live,
//   and never rejects updates.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_chaining_matches_model((capacity, pool, ops) in arb_scenario()) {
        let mut sut = ChainingTable::with_capacity(capacity);
        check_against_model(&mut sut, false, &pool, ops)?;
        prop_assert_eq!(sut.iter().count(), sut.len());
    }

    #[test]
    fn prop_probing_matches_model((capacity, pool, ops) in arb_scenario()) {
        let mut sut = ProbingTable::with_capacity(capacity);
        check_against_model(&mut sut, true, &pool, ops)?;
        prop_assert_eq!(sut.iter().count(), sut.len());
        prop_assert!(sut.len() + sut.tombstones() <= sut.capacity());
    }
}

// Property: same invariants under worst-case collisions (constant hasher).
// Every key shares one chain or one probe sequence, which stresses chain
// splicing and tombstone skipping.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_chaining_matches_model_with_collisions((capacity, pool, ops) in arb_scenario()) {
        let mut sut = ChainingTable::with_capacity_and_hasher(capacity, ConstBuildHasher);
        check_against_model(&mut sut, false, &pool, ops)?;
        let snap = sut.display();
        prop_assert_eq!(snap.buckets[0].len(), sut.len());
    }

    #[test]
    fn prop_probing_matches_model_with_collisions((capacity, pool, ops) in arb_scenario()) {
        let mut sut = ProbingTable::with_capacity_and_hasher(capacity, ConstBuildHasher);
        check_against_model(&mut sut, true, &pool, ops)?;
    }
}
