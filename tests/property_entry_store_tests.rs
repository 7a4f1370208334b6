use chartedit::core::{ChartPoint, EntryStore, NewEntry};
use proptest::prelude::*;

fn draft(name: &str) -> NewEntry {
    NewEntry {
        name: name.to_owned(),
        color: "#808080".to_owned(),
        coords: ChartPoint::ORIGIN,
    }
}

proptest! {
    #[test]
    fn ids_stay_strictly_increasing_under_interleaved_removal(
        removals in proptest::collection::vec(any::<bool>(), 1..64)
    ) {
        let mut store = EntryStore::new();
        let mut assigned = Vec::new();

        for remove in removals {
            let id = store.add(draft("p"));
            assigned.push(id);
            if remove {
                prop_assert!(store.remove(id));
            }
        }

        // Every assigned id is strictly larger than the previous one,
        // regardless of which entries were removed in between.
        for pair in assigned.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn insertion_order_survives_arbitrary_removals(
        count in 1usize..32,
        remove_index in 0usize..32
    ) {
        let mut store = EntryStore::new();
        for i in 0..count {
            store.add(draft(&format!("entry-{i}")));
        }

        if remove_index < count {
            let id = store.entries()[remove_index].id;
            prop_assert!(store.remove(id));
        }

        let ids: Vec<_> = store.entries().iter().map(|entry| entry.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        prop_assert_eq!(ids, sorted);
    }

    #[test]
    fn revision_only_moves_on_applied_mutations(
        count in 1usize..16
    ) {
        let mut store = EntryStore::new();
        for _ in 0..count {
            store.add(draft("p"));
        }
        let revision = store.revision();

        // Mutating an id that was never assigned is a silent no-op.
        let ghost = chartedit::core::EntryId::new(u64::MAX);
        prop_assert!(!store.remove(ghost));
        prop_assert_eq!(store.revision(), revision);
    }
}
