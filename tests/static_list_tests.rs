use static_chain::{
    InsertError, SlotRole, StaticLinkedList, StaticListError, StructureDump, MAX_CAPACITY,
};

fn titles(list: &StaticLinkedList<String>) -> Vec<&str> {
    list.iter().map(String::as_str).collect()
}

#[test]
fn test_catalog_scenario() {
    let mut list = StaticLinkedList::new(8).unwrap();
    for title in ["A", "B", "C", "D", "E"] {
        assert!(list.insert_at_head(title.to_string()).is_ok());
    }

    assert_eq!(titles(&list), ["E", "D", "C", "B", "A"]);
    assert_eq!(list.search("C"), Some(2));
    assert_eq!(list.search("Z"), None);
    assert_eq!(list.len(), 5);

    let freed = list.head_slot();
    assert_eq!(list.delete_at_head().as_deref(), Some("E"));
    assert_eq!(titles(&list), ["D", "C", "B", "A"]);
    assert_eq!(list.len(), 4);
    assert_eq!(list.free_head_slot(), freed);
    assert_eq!(list.free_slots().next(), freed);
    list.validate().unwrap();
}

#[test]
fn test_capacity_bounds() {
    assert_eq!(
        StaticLinkedList::<u64>::new(0).unwrap_err(),
        StaticListError::InvalidCapacity { requested: 0, max: MAX_CAPACITY }
    );
    assert_eq!(StaticLinkedList::<u64>::new(1).unwrap().capacity(), 1);
}

#[test]
fn test_single_slot_phases() {
    let mut list = StaticLinkedList::new(1).unwrap();
    assert!(list.is_empty() && !list.is_full());

    list.insert_at_head(42).unwrap();
    assert!(!list.is_empty() && list.is_full());
    assert_eq!(list.insert_at_head(43).unwrap_err().into_inner(), 43);

    assert_eq!(list.delete_at_head(), Some(42));
    assert!(list.is_empty() && !list.is_full());
    assert_eq!(list.delete_at_head(), None);
    list.validate().unwrap();
}

#[test]
fn test_fill_drain_fill() {
    let capacity = 16;
    let mut list = StaticLinkedList::new(capacity).unwrap();

    for round in 0..2 {
        for v in 0..capacity {
            list.insert_at_head((round, v)).unwrap();
        }
        assert!(list.is_full());
        assert!(matches!(list.insert_at_head((round, capacity)), Err(InsertError::Full(_))));
        assert_eq!(list.len(), capacity);

        for v in (0..capacity).rev() {
            assert_eq!(list.delete_at_head(), Some((round, v)));
        }
        assert!(list.is_empty());
        list.validate().unwrap();
    }
}

#[test]
fn test_partition_holds_through_mixed_ops() {
    let mut list = StaticLinkedList::new(10).unwrap();
    for v in 0..7 {
        list.insert_at_head(v).unwrap();
    }
    list.remove(&3);
    list.delete_at_head();
    list.insert_at(2, 100).unwrap();
    list.remove(&0);
    list.insert_at(list.len(), 200).unwrap();

    let dump = list.dump_structure();
    assert_eq!(dump.count(SlotRole::Data), list.len());
    assert_eq!(dump.count(SlotRole::Data) + dump.count(SlotRole::Free), list.capacity());
    assert_eq!(dump.count(SlotRole::Unlinked), 0);
    for report in &dump.slots {
        assert_eq!(report.data.is_some(), report.role == SlotRole::Data);
    }
    assert_eq!(list.traverse(), vec![5, 4, 100, 2, 1, 200]);
    list.validate().unwrap();
}

#[test]
fn test_dump_json_roundtrip() {
    let mut list = StaticLinkedList::new(3).unwrap();
    list.insert_at_head("A".to_string()).unwrap();

    let dump = list.dump_structure();
    let json = serde_json::to_value(&dump).unwrap();
    assert_eq!(json["head"], 0);
    assert_eq!(json["free_head"], 1);
    assert_eq!(json["slots"][0]["role"], "data");
    assert_eq!(json["slots"][0]["data"], "A");
    assert_eq!(json["slots"][2]["role"], "free");
    assert!(json["slots"][2]["next"].is_null());

    let back: StructureDump<String> = serde_json::from_value(json).unwrap();
    assert_eq!(back, dump);
}

#[test]
fn test_errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(StaticListError::InvalidCapacity {
        requested: 0,
        max: MAX_CAPACITY,
    });
    assert!(err.to_string().starts_with("invalid capacity 0"));

    let mut list = StaticLinkedList::new(1).unwrap();
    list.insert_at_head(1).unwrap();
    let full = list.insert_at_head(2).unwrap_err();
    let err: anyhow::Error = full.into();
    assert_eq!(err.to_string(), "static list is full");
}
