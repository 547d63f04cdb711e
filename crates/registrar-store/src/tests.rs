use std::sync::Arc;

use proptest::prelude::*;
use registrar_schema::RowElement;
use registrar_types::RowId;
use test_case::test_case;

use super::*;

fn salva() -> RowElement {
    RowElement::new("Guillaume", "Salva")
}

// ============================================================================
// MemoryRowStore
// ============================================================================

#[test]
fn insert_assigns_sequential_ids() {
    let store = MemoryRowStore::new();

    let first = store.insert_row(&salva()).unwrap();
    let second = store.insert_row(&RowElement::new("Ada", "Lovelace")).unwrap();

    assert_eq!(first, RowId::new(DEFAULT_FIRST_ROW_ID));
    assert_eq!(second, RowId::new(DEFAULT_FIRST_ROW_ID + 1));
    assert_eq!(store.len().unwrap(), 2);
}

#[test_case(0; "from zero")]
#[test_case(100; "from hundred")]
fn first_id_is_configurable(first_id: u64) {
    let store = MemoryRowStore::with_first_id(first_id);
    assert_eq!(store.insert_row(&salva()).unwrap(), RowId::new(first_id));
}

#[test]
fn crud_walkthrough() {
    let store = MemoryRowStore::new();

    let id = store.insert_row(&salva()).unwrap();
    assert_eq!(store.get(id).unwrap(), Some(salva()));

    let updated = salva().with_age(23);
    let same = store.update_row(id, &updated).unwrap();
    assert_eq!(same, id);
    assert_eq!(store.get(id).unwrap().and_then(|row| row.age), Some(23));

    store.delete_row(id).unwrap();
    assert_eq!(store.get(id).unwrap(), None);
    assert!(store.is_empty().unwrap());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let store = MemoryRowStore::new();

    let first = store.insert_row(&salva()).unwrap();
    store.delete_row(first).unwrap();
    let second = store.insert_row(&salva()).unwrap();

    assert_ne!(first, second);
}

#[test]
fn update_unknown_row_fails() {
    let store = MemoryRowStore::new();
    let err = store.update_row(RowId::new(42), &salva()).unwrap_err();
    assert_eq!(err, StoreError::RowNotFound(RowId::new(42)));
}

#[test]
fn delete_unknown_row_fails() {
    let store = MemoryRowStore::new();
    let err = store.delete_row(RowId::new(7)).unwrap_err();
    assert_eq!(err, StoreError::RowNotFound(RowId::new(7)));
    assert_eq!(err.to_string(), "row 7 not found");
}

#[test]
fn id_space_exhaustion_is_reported() {
    let store = MemoryRowStore::with_first_id(u64::MAX);

    assert_eq!(store.insert_row(&salva()).unwrap(), RowId::new(u64::MAX));
    assert_eq!(store.insert_row(&salva()), Err(StoreError::IdsExhausted));
}

#[test]
fn clones_share_rows() {
    let store = MemoryRowStore::new();
    let clone = store.clone();

    let id = store.insert_row(&salva()).unwrap();
    assert_eq!(clone.get(id).unwrap(), Some(salva()));
}

#[test]
fn rows_are_listed_in_id_order() {
    let store = MemoryRowStore::new();
    let a = store.insert_row(&RowElement::new("A", "One")).unwrap();
    let b = store.insert_row(&RowElement::new("B", "Two")).unwrap();

    let ids: Vec<RowId> = store.rows().unwrap().into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn shared_store_through_trait_object() {
    let store: Arc<dyn RowStore> = Arc::new(MemoryRowStore::new());
    let id = store.insert_row(&salva()).unwrap();
    store.delete_row(id).unwrap();
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Property: every inserted row can be read back under its id, and ids
    /// are distinct.
    #[test]
    fn prop_inserted_rows_are_retrievable(
        rows in proptest::collection::vec(("[a-z]{1,8}", "[a-z]{1,8}", proptest::option::of(0i64..120)), 0..20)
    ) {
        let store = MemoryRowStore::new();
        let mut ids = Vec::new();

        for (first, last, age) in &rows {
            let mut row = RowElement::new(first.clone(), last.clone());
            row.age = *age;
            let id = store.insert_row(&row).unwrap();
            prop_assert_eq!(store.get(id).unwrap(), Some(row));
            ids.push(id);
        }

        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), rows.len());
        prop_assert_eq!(store.len().unwrap(), rows.len());
    }
}
