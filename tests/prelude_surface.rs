// ==============================================
// PRELUDE SURFACE TESTS (integration)
// ==============================================
//
// Verifies that the whole public surface is reachable through the prelude
// and that the structures compose only at the "library an application links
// against" level: no structure needs another to work.

use structkit::prelude::*;

#[test]
fn every_structure_is_usable_from_the_prelude() {
    let mut cache: LruCache<u32, &str> = LruCache::new(2);
    cache.insert(1, "one");
    assert_eq!(cache.get(&1), Some(&"one"));

    let mut trie = WildcardTrie::new();
    trie.insert("hat");
    assert!(trie.search(format!("{WILDCARD}at").as_str()));

    let mut min_stack = MinStack::new();
    min_stack.push(4);
    min_stack.push(2);
    assert_eq!(min_stack.min(), Ok(&2));

    let mut span_stack = SpanStack::new();
    assert_eq!(span_stack.push(10), 1);
    assert_eq!(span_stack.push(20), 2);

    let mut tree = BinaryTree::new();
    let root = tree.set_root(2);
    tree.add_left(root, 1);
    tree.add_right(root, 3);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    let mut counter = RecentCounter::new();
    assert_eq!(counter.ping(1), Ok(1));
    assert_eq!(counter.ping(WINDOW + 2), Ok(1));

    let mut set = RandomizedSet::new();
    assert!(set.insert('x'));
    assert_eq!(set.get_random(), Some(&'x'));
}

#[test]
fn error_types_are_distinct_and_inspectable() {
    let config = LruCache::<u8, u8>::try_new(0).unwrap_err();
    assert!(config.message().contains("capacity"));

    let mut stack: MinStack<i32> = MinStack::new();
    assert_eq!(stack.pop(), Err(EmptyError));

    let mut counter = RecentCounter::new();
    counter.ping(10).unwrap();
    let out_of_order = counter.ping(5).unwrap_err();
    assert_eq!(out_of_order.last, 10);
    assert_eq!(out_of_order.attempted, 5);
}
