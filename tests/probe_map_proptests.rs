// ProbeMap property tests (public API).
//
// Property 1: insert-only sequences.
//  - Model: a std HashMap built from the same pairs (first write wins,
//    matching the duplicate-rejection policy).
//  - Invariants: load factor stays strictly below 0.5 after every
//    insert; every model pair is retrievable afterwards; len matches.
//
// Property 2: remove-heavy interleavings.
//  - Model: a std HashMap mutated alongside the table.
//  - Invariants: get/contains parity at every step, keys() equals the
//    model key set at the end, removals of absent keys return false.
use probemap::ProbeMap;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

proptest! {
    // Property 1: arbitrary keys, insert-only.
    #[test]
    fn prop_insert_only_round_trips(
        pairs in proptest::collection::vec(("[a-z]{0,12}", any::<u64>()), 0..300)
    ) {
        let mut m = ProbeMap::new();
        let mut model: HashMap<String, u64> = HashMap::new();

        for (k, v) in pairs {
            let inserted = m.insert(k.clone(), v);
            prop_assert_eq!(inserted, !model.contains_key(&k));
            model.entry(k).or_insert(v);
            prop_assert!(m.load_factor() < 0.5);
        }

        prop_assert_eq!(m.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(m.get(k), Some(*v));
        }
    }
}

proptest! {
    // Property 2: interleaved inserts and removes over a small key space
    // (small on purpose, to force collisions and tombstone traffic).
    #[test]
    fn prop_interleaved_removes_match_model(
        ops in proptest::collection::vec((any::<bool>(), 0usize..12usize, any::<u64>()), 1..300)
    ) {
        let mut m = ProbeMap::new();
        let mut model: HashMap<String, u64> = HashMap::new();

        for (is_insert, raw_k, v) in ops {
            let key = format!("k{}", raw_k);
            if is_insert {
                let inserted = m.insert(key.clone(), v);
                prop_assert_eq!(inserted, !model.contains_key(&key));
                model.entry(key.clone()).or_insert(v);
            } else {
                let removed = m.remove(&key);
                prop_assert_eq!(removed, model.remove(&key).is_some());
            }
            prop_assert_eq!(m.contains(&key), model.contains_key(&key));
            prop_assert_eq!(m.get(&key), model.get(&key).copied());
        }

        let live: BTreeSet<&str> = m.keys().into_iter().collect();
        let expected: BTreeSet<&str> = model.keys().map(String::as_str).collect();
        prop_assert_eq!(live, expected);
        prop_assert_eq!(m.len(), model.len());
    }
}
