use proptest::prelude::*;
use static_chain::{InsertError, SlotRole, StaticLinkedList};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    InsertHead(u8),
    InsertAt(usize, u8),
    DeleteHead,
    Remove(u8),
    Search(u8),
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<u8>().prop_map(Operation::InsertHead),
        2 => (0..20usize, any::<u8>()).prop_map(|(i, v)| Operation::InsertAt(i, v)),
        3 => Just(Operation::DeleteHead),
        2 => (0..8u8).prop_map(Operation::Remove),
        2 => (0..8u8).prop_map(Operation::Search),
        1 => Just(Operation::Clear),
    ]
}

proptest! {
    #[test]
    fn test_static_list_matches_deque(
        capacity in 1..16usize,
        ops in proptest::collection::vec(operation(), 1..200),
    ) {
        let mut list = StaticLinkedList::new(capacity).unwrap();
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                Operation::InsertHead(v) => {
                    let res = list.insert_at_head(v);
                    if model.len() < capacity {
                        prop_assert!(res.is_ok());
                        model.push_front(v);
                    } else {
                        prop_assert_eq!(res, Err(InsertError::Full(v)));
                    }
                }
                Operation::InsertAt(i, v) => {
                    let res = list.insert_at(i, v);
                    if i > model.len() {
                        prop_assert_eq!(
                            res,
                            Err(InsertError::OutOfBounds { index: i, len: model.len(), value: v })
                        );
                    } else if model.len() == capacity {
                        prop_assert_eq!(res, Err(InsertError::Full(v)));
                    } else {
                        prop_assert!(res.is_ok());
                        model.insert(i, v);
                    }
                }
                Operation::DeleteHead => {
                    prop_assert_eq!(list.delete_at_head(), model.pop_front());
                }
                Operation::Remove(v) => {
                    let expected = model.iter().position(|x| *x == v).and_then(|i| model.remove(i));
                    prop_assert_eq!(list.remove(&v), expected);
                }
                Operation::Search(v) => {
                    prop_assert_eq!(list.search(&v), model.iter().position(|x| *x == v));
                }
                Operation::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(list.validate(), Ok(()));
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
            prop_assert_eq!(list.is_full(), model.len() == capacity);
        }

        prop_assert_eq!(list.traverse(), Vec::from(model));
        let dump = list.dump_structure();
        prop_assert_eq!(dump.count(SlotRole::Data) + dump.count(SlotRole::Free), capacity);
        prop_assert_eq!(dump.count(SlotRole::Unlinked), 0);
    }

    #[test]
    fn test_lifo_round_trip(values in proptest::collection::vec(any::<i32>(), 1..64)) {
        let mut list = StaticLinkedList::new(values.len()).unwrap();
        for v in &values {
            list.insert_at_head(*v).unwrap();
        }
        prop_assert!(list.is_full());

        let mut drained = Vec::new();
        while let Some(v) = list.delete_at_head() {
            drained.push(v);
        }
        drained.reverse();
        prop_assert_eq!(drained, values);
        prop_assert_eq!(list.free_slots().count(), list.capacity());
    }
}
