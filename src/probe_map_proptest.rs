#![cfg(test)]

// Property tests for ProbeMap kept inside the crate so they can assert
// internal invariants (live count vs occupied slots, permutation shape,
// load factor bound) after every operation, not just observable behavior.

use crate::ProbeMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Ops: 0 insert, 1 remove, 2 get, 3 value_mut += delta, 4 explicit resize.
proptest! {
    #[test]
    fn prop_table_matches_model_and_invariants_hold(
        keys in 1usize..=8,
        ops in proptest::collection::vec((0u8..=4u8, 0usize..64usize, 0u64..1000u64), 1..200)
    ) {
        let mut m = ProbeMap::new();
        let mut model: HashMap<String, u64> = HashMap::new();

        for (op, raw_k, arg) in ops {
            let key = format!("k{}", raw_k % keys);
            match op {
                // Insert: succeeds iff the model lacks the key, and a
                // rejected duplicate leaves the stored value alone.
                0 => {
                    let inserted = m.insert(key.clone(), arg);
                    prop_assert_eq!(inserted, !model.contains_key(&key));
                    if inserted {
                        model.insert(key.clone(), arg);
                    }
                }
                // Remove: succeeds iff the model had the key.
                1 => {
                    let removed = m.remove(&key);
                    prop_assert_eq!(removed, model.remove(&key).is_some());
                }
                // Lookup parity with the model.
                2 => {
                    prop_assert_eq!(m.get(&key), model.get(&key).copied());
                    prop_assert_eq!(m.contains(&key), model.contains_key(&key));
                }
                // value_mut inserts 0 when absent, then mutates in place.
                3 => {
                    let v = m.value_mut(&key);
                    *v = v.wrapping_add(arg);
                    let entry = model.entry(key.clone()).or_insert(0);
                    *entry = entry.wrapping_add(arg);
                }
                // Explicit resize must be behavior-preserving.
                4 => {
                    let target = (m.len() * 2 + 1).max(8) + (arg as usize % 16);
                    m.resize(target);
                }
                _ => unreachable!(),
            }

            m.check_invariants();
            prop_assert_eq!(m.get(&key), model.get(&key).copied());
            prop_assert_eq!(m.len(), model.len());
        }

        // Final sweep: full content parity, both directions.
        for (k, v) in &model {
            prop_assert_eq!(m.get(k), Some(*v));
        }
        let mut live: Vec<&str> = m.keys();
        live.sort_unstable();
        let mut expected: Vec<&str> = model.keys().map(String::as_str).collect();
        expected.sort_unstable();
        prop_assert_eq!(live, expected);
    }
}
