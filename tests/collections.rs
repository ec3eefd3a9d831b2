use percolation::{CollectionError, Deque, RandomizedQueue};
use std::collections::HashSet;

#[test]
fn deque_orders_items_front_to_back() {
    let mut deque = Deque::new();
    deque.add_first(1);
    deque.add_last(2);
    deque.add_first(0);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);

    assert_eq!(deque.remove_first(), Ok(0));
    assert_eq!(deque.len(), 2);
    assert_eq!(deque.peek_first(), Some(&1));
    assert_eq!(deque.peek_last(), Some(&2));
}

#[test]
fn deque_removal_from_empty_fails() {
    let mut deque: Deque<u8> = Deque::new();
    assert!(deque.is_empty());
    assert_eq!(deque.remove_first(), Err(CollectionError::Empty("deque")));
    assert_eq!(deque.remove_last(), Err(CollectionError::Empty("deque")));
}

#[test]
fn deque_drains_from_both_ends() {
    let mut deque: Deque<i32> = (1..=5).collect();
    assert_eq!(deque.remove_last(), Ok(5));
    assert_eq!(deque.remove_first(), Ok(1));
    assert_eq!(deque.remove_last(), Ok(4));
    assert_eq!(deque.remove_last(), Ok(3));
    assert_eq!(deque.remove_last(), Ok(2));
    assert!(deque.is_empty());
    assert_eq!(deque.peek_first(), None);
    assert_eq!(deque.peek_last(), None);

    deque.add_last(9);
    assert_eq!(deque.remove_first(), Ok(9));
    assert!(deque.is_empty());
}

#[test]
fn deque_iterators_walk_both_ways() {
    let deque: Deque<&str> = ["a", "b", "c"].into_iter().collect();
    assert_eq!(deque.iter().len(), 3);
    assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), vec!["c", "b", "a"]);

    let mut seen = Vec::new();
    for item in &deque {
        seen.push(*item);
    }
    assert_eq!(seen, vec!["a", "b", "c"]);
    assert_eq!(format!("{deque:?}"), r#"["a", "b", "c"]"#);
    assert_eq!(deque.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn deque_mirrors_std_vecdeque() {
    use std::collections::VecDeque;
    let mut ours = Deque::new();
    let mut reference = VecDeque::new();
    for i in 0..200u32 {
        match i % 5 {
            0 | 1 => {
                ours.add_first(i);
                reference.push_front(i);
            }
            2 => {
                ours.add_last(i);
                reference.push_back(i);
            }
            3 => assert_eq!(ours.remove_first().ok(), reference.pop_front()),
            _ => assert_eq!(ours.remove_last().ok(), reference.pop_back()),
        }
        assert_eq!(ours.len(), reference.len());
    }
    assert!(ours.iter().eq(reference.iter()));
}

#[test]
fn randomized_queue_empty_operations_fail() {
    let mut queue: RandomizedQueue<i32> = RandomizedQueue::with_seed(0);
    let empty = CollectionError::Empty("randomized queue");
    assert_eq!(queue.dequeue(), Err(empty.clone()));
    assert_eq!(queue.sample(), Err(empty));
}

#[test]
fn randomized_queue_drains_every_item_once() {
    let mut queue = RandomizedQueue::with_seed(7);
    let n = 100;
    queue.extend(0..n);
    assert_eq!(queue.len(), n);

    let mut seen = HashSet::new();
    for _ in 0..n {
        assert!(seen.insert(queue.dequeue().unwrap()));
    }
    assert_eq!(seen.len(), n);
    assert!(queue.is_empty());
    assert!(queue.dequeue().is_err());
}

#[test]
fn randomized_queue_sample_does_not_remove() {
    let mut queue = RandomizedQueue::with_seed(3);
    queue.enqueue("x");
    queue.enqueue("y");
    for _ in 0..20 {
        let item = *queue.sample().unwrap();
        assert!(item == "x" || item == "y");
    }
    assert_eq!(queue.len(), 2);
}

#[test]
fn randomized_queue_iteration_is_non_destructive() {
    let mut queue = RandomizedQueue::with_seed(9);
    queue.extend(0..50);

    let first: Vec<i32> = queue.iter().copied().collect();
    let second: Vec<i32> = queue.iter().copied().collect();
    assert_eq!(queue.len(), 50);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    // each iterator draws its own order
    assert_ne!(first, second);
}

#[test]
fn randomized_queue_into_iter_yields_everything() {
    let queue: RandomizedQueue<u32> = (0..30).collect();
    let mut drained: Vec<u32> = queue.into_iter().collect();
    drained.sort();
    assert_eq!(drained, (0..30).collect::<Vec<_>>());
}

#[test]
fn randomized_queue_dequeues_roughly_uniformly() {
    let mut counts = [0usize; 4];
    let mut queue = RandomizedQueue::with_seed(1234);
    for _ in 0..4000 {
        queue.extend(0..4);
        counts[queue.dequeue().unwrap()] += 1;
        while queue.dequeue().is_ok() {}
    }
    for count in counts {
        assert!((800..1200).contains(&count), "{counts:?}");
    }
}
