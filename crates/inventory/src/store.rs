use std::collections::HashSet;

use stocklist_core::{Entity, RecordId};

use crate::record::{InventoryRecord, RecordDraft};

/// Authoritative in-memory collection of records, in insertion order.
///
/// Records are only handed out as shared references; the sole way to change
/// one is [`RecordStore::update`].
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<InventoryRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records that already carry ids.
    ///
    /// A record whose id repeats an earlier one is dropped, keeping ids unique.
    pub fn with_records(records: impl IntoIterator<Item = InventoryRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut store = Self::new();

        for record in records {
            if !seen.insert(record.record_id()) {
                tracing::warn!(record_id = %record.record_id(), "dropping record with duplicate id");
                continue;
            }
            store.records.push(record);
        }

        store
    }

    /// Demo data the editor starts with.
    pub fn seeded() -> Self {
        Self::with_records([
            InventoryRecord::new(
                RecordId::new(),
                RecordDraft::new(
                    "Laptop",
                    "Electronics",
                    5,
                    999.99,
                    "High-performance laptop with latest specifications",
                ),
            ),
            InventoryRecord::new(
                RecordId::new(),
                RecordDraft::new("Desk Chair", "Furniture", 15, 199.99, "office chair"),
            ),
        ])
    }

    /// Append a record under a fresh id, distinct from every id in the store.
    pub fn add(&mut self, draft: RecordDraft) -> &InventoryRecord {
        let mut id = RecordId::new();
        while self.get(&id).is_some() {
            id = RecordId::new();
        }

        tracing::debug!(record_id = %id, "record added");

        let index = self.records.len();
        self.records.push(InventoryRecord::new(id, draft));
        &self.records[index]
    }

    /// Replace every field but the id. Unknown ids are a no-op.
    ///
    /// Returns whether a record was replaced.
    pub fn update(&mut self, id: &RecordId, draft: RecordDraft) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.replace(draft);
                tracing::debug!(record_id = %id, "record updated");
                true
            }
            None => {
                tracing::debug!(record_id = %id, "update ignored: unknown id");
                false
            }
        }
    }

    /// Remove the record with this id. Unknown ids are a no-op.
    ///
    /// Returns whether a record was removed.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = self.records.len() != before;

        if removed {
            tracing::debug!(record_id = %id, "record removed");
        } else {
            tracing::debug!(record_id = %id, "remove ignored: unknown id");
        }

        removed
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&InventoryRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Price, Quantity};

    fn draft(name: &str, category: &str, quantity: i64) -> RecordDraft {
        RecordDraft::new(name, category, quantity, 10.0, "")
    }

    fn ids(store: &RecordStore) -> Vec<RecordId> {
        store.list().iter().map(|r| r.record_id()).collect()
    }

    #[test]
    fn add_on_empty_store_holds_exactly_the_given_fields() {
        let mut store = RecordStore::new();
        let monitor = RecordDraft::new("Monitor", "Electronics", 3, 249.99, "");

        let id = store.add(monitor.clone()).record_id();

        assert_eq!(store.len(), 1);
        let record = &store.list()[0];
        assert_eq!(record.record_id(), id);
        assert_eq!(record.name(), "Monitor");
        assert_eq!(record.category(), "Electronics");
        assert_eq!(record.quantity(), Quantity::new(3));
        assert_eq!(record.price(), Price::new(249.99));
        assert_eq!(record.draft(), &monitor);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = RecordStore::new();
        store.add(draft("a", "x", 3));
        store.add(draft("b", "x", 1));
        store.add(draft("c", "x", 2));

        let names: Vec<_> = store.list().iter().map(|r| r.name()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn update_replaces_fields_in_place_and_keeps_id() {
        let mut store = RecordStore::new();
        let first = store.add(draft("a", "x", 1)).record_id();
        let second = store.add(draft("b", "x", 2)).record_id();
        let third = store.add(draft("c", "x", 3)).record_id();

        let replacement = RecordDraft::new("B", "y", 20, 1.5, "changed");
        assert!(store.update(&second, replacement.clone()));

        assert_eq!(ids(&store), vec![first, second, third]);
        let updated = store.get(&second).unwrap();
        assert_eq!(updated.draft(), &replacement);
        assert_eq!(updated.record_id(), second);
    }

    #[test]
    fn update_unknown_id_leaves_store_unchanged() {
        let mut store = RecordStore::seeded();
        let before = store.list().to_vec();

        assert!(!store.update(&RecordId::new(), draft("ghost", "x", 1)));

        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn remove_drops_record_and_is_noop_when_absent() {
        let mut store = RecordStore::new();
        let keep = store.add(draft("keep", "x", 1)).record_id();
        let gone = store.add(draft("gone", "x", 2)).record_id();

        assert!(store.remove(&gone));
        assert_eq!(ids(&store), vec![keep]);

        let before = store.list().to_vec();
        assert!(!store.remove(&gone));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn with_records_drops_duplicate_ids() {
        let id = RecordId::new();
        let store = RecordStore::with_records([
            InventoryRecord::new(id, draft("first", "x", 1)),
            InventoryRecord::new(id, draft("second", "x", 2)),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name(), "first");
    }

    #[test]
    fn seeded_store_holds_demo_records() {
        let store = RecordStore::seeded();
        let names: Vec<_> = store.list().iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Laptop", "Desk Chair"]);
        assert_eq!(store.list()[1].quantity(), Quantity::new(15));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(i64),
            Remove(usize),
            Update(usize, i64),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0i64..100).prop_map(Op::Add),
                any::<usize>().prop_map(Op::Remove),
                (any::<usize>(), 0i64..100).prop_map(|(i, q)| Op::Update(i, q)),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: ids handed out by `add` are never reused, even after removals.
            #[test]
            fn add_ids_are_unique_over_lifetime(ops in prop::collection::vec(op(), 0..60)) {
                let mut store = RecordStore::new();
                let mut issued = HashSet::new();

                for op in ops {
                    match op {
                        Op::Add(q) => {
                            let id = store.add(draft("item", "cat", q)).record_id();
                            prop_assert!(issued.insert(id));
                        }
                        Op::Remove(i) if !store.is_empty() => {
                            let id = store.list()[i % store.len()].record_id();
                            store.remove(&id);
                        }
                        Op::Update(i, q) if !store.is_empty() => {
                            let id = store.list()[i % store.len()].record_id();
                            store.update(&id, draft("edited", "cat", q));
                        }
                        _ => {}
                    }
                }

                let current: HashSet<_> = ids(&store).into_iter().collect();
                prop_assert_eq!(current.len(), store.len());
            }

            /// Property: after `remove(id)`, the id is gone and every other record keeps its order.
            #[test]
            fn remove_keeps_relative_order(
                quantities in prop::collection::vec(0i64..50, 1..20),
                pick in any::<usize>()
            ) {
                let mut store = RecordStore::new();
                for q in &quantities {
                    store.add(draft("item", "cat", *q));
                }

                let before = ids(&store);
                let target = before[pick % before.len()];
                store.remove(&target);

                let expected: Vec<_> = before.into_iter().filter(|id| *id != target).collect();
                prop_assert_eq!(ids(&store), expected);
                prop_assert!(store.get(&target).is_none());
            }
        }
    }
}
