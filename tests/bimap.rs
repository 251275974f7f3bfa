use std::cmp::Ordering;
use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use treap_bimap::bimap;
use treap_bimap::{BiMap, Error, LeftCursor, Natural, Reverse, TotalOrder};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Keys drawn from a range small enough to collide often on both sides.
fn key_strategy() -> impl Strategy<Value = i64> {
    -500i64..500i64
}

/// A reference model: one `BTreeMap` per direction.
#[derive(Default)]
struct Model {
    by_left: BTreeMap<i64, i64>,
    by_right: BTreeMap<i64, i64>,
}

impl Model {
    fn insert(&mut self, l: i64, r: i64) -> bool {
        if self.by_left.contains_key(&l) || self.by_right.contains_key(&r) {
            return false;
        }
        self.by_left.insert(l, r);
        self.by_right.insert(r, l);
        true
    }

    fn remove_left(&mut self, l: i64) -> Option<(i64, i64)> {
        let r = self.by_left.remove(&l)?;
        self.by_right.remove(&r);
        Some((l, r))
    }

    fn remove_right(&mut self, r: i64) -> Option<(i64, i64)> {
        let l = self.by_right.remove(&r)?;
        self.by_left.remove(&l);
        Some((l, r))
    }

    fn left_pairs(&self) -> Vec<(i64, i64)> {
        self.by_left.iter().map(|(&l, &r)| (l, r)).collect()
    }

    fn right_pairs(&self) -> Vec<(i64, i64)> {
        self.by_right.iter().map(|(&r, &l)| (l, r)).collect()
    }
}

fn left_pairs<CL, CR>(map: &BiMap<i64, i64, CL, CR>) -> Vec<(i64, i64)> {
    map.iter_left().map(|(&l, &r)| (l, r)).collect()
}

fn right_pairs<CL, CR>(map: &BiMap<i64, i64, CL, CR>) -> Vec<(i64, i64)> {
    map.iter_right().map(|(&l, &r)| (l, r)).collect()
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    RemoveLeft(i64),
    RemoveRight(i64),
    EraseLeftCursor(i64),
    EraseRightCursor(i64),
    AtLeft(i64),
    AtRight(i64),
    LowerBoundLeft(i64),
    UpperBoundRight(i64),
    AtLeftOrDefault(i64),
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (key_strategy(), key_strategy()).prop_map(|(l, r)| MapOp::Insert(l, r)),
        2 => key_strategy().prop_map(MapOp::RemoveLeft),
        2 => key_strategy().prop_map(MapOp::RemoveRight),
        1 => key_strategy().prop_map(MapOp::EraseLeftCursor),
        1 => key_strategy().prop_map(MapOp::EraseRightCursor),
        2 => key_strategy().prop_map(MapOp::AtLeft),
        2 => key_strategy().prop_map(MapOp::AtRight),
        1 => key_strategy().prop_map(MapOp::LowerBoundLeft),
        1 => key_strategy().prop_map(MapOp::UpperBoundRight),
        1 => key_strategy().prop_map(MapOp::AtLeftOrDefault),
    ]
}

// ─── Core operations against the model ───────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both `BiMap` and a pair of
    /// `BTreeMap`s and asserts identical results at every step.
    #[test]
    fn bimap_ops_match_model(seed in any::<u64>(), ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut map: BiMap<i64, i64> = BiMap::with_seed(seed);
        let mut model = Model::default();

        for op in &ops {
            match *op {
                MapOp::Insert(l, r) => {
                    let cursor = map.insert(l, r);
                    let inserted = model.insert(l, r);
                    prop_assert_eq!(!cursor.is_end(), inserted, "insert({}, {})", l, r);
                    if inserted {
                        prop_assert_eq!(map.left_key(cursor), Some(&l));
                        prop_assert_eq!(map.right_key(cursor.flip()), Some(&r));
                    }
                }
                MapOp::RemoveLeft(l) => {
                    prop_assert_eq!(map.remove_left(&l), model.remove_left(l), "remove_left({})", l);
                }
                MapOp::RemoveRight(r) => {
                    prop_assert_eq!(map.remove_right(&r), model.remove_right(r), "remove_right({})", r);
                }
                MapOp::EraseLeftCursor(l) => {
                    let expected_next = model.by_left.range(l + 1..).next().map(|(&k, _)| k);
                    let found = map.find_left(&l);
                    let after = map.erase_left(found);
                    if model.remove_left(l).is_some() {
                        prop_assert_eq!(map.left_key(after).copied(), expected_next, "erase_left at {}", l);
                    } else {
                        prop_assert!(after.is_end());
                    }
                }
                MapOp::EraseRightCursor(r) => {
                    let expected_next = model.by_right.range(r + 1..).next().map(|(&k, _)| k);
                    let found = map.find_right(&r);
                    let after = map.erase_right(found);
                    if model.remove_right(r).is_some() {
                        prop_assert_eq!(map.right_key(after).copied(), expected_next, "erase_right at {}", r);
                    } else {
                        prop_assert!(after.is_end());
                    }
                }
                MapOp::AtLeft(l) => {
                    let expected = model.by_left.get(&l).ok_or(Error::LeftNotFound);
                    prop_assert_eq!(map.at_left(&l), expected, "at_left({})", l);
                }
                MapOp::AtRight(r) => {
                    let expected = model.by_right.get(&r).ok_or(Error::RightNotFound);
                    prop_assert_eq!(map.at_right(&r), expected, "at_right({})", r);
                }
                MapOp::LowerBoundLeft(l) => {
                    let expected = model.by_left.range(l..).next().map(|(k, _)| k);
                    prop_assert_eq!(map.left_key(map.lower_bound_left(&l)), expected);
                }
                MapOp::UpperBoundRight(r) => {
                    let expected = model.by_right.range(r + 1..).next().map(|(k, _)| k);
                    prop_assert_eq!(map.right_key(map.upper_bound_right(&r)), expected);
                }
                MapOp::AtLeftOrDefault(l) => {
                    let expected = match model.by_left.get(&l) {
                        Some(&r) => r,
                        None => {
                            model.remove_right(0);
                            model.insert(l, 0);
                            0
                        }
                    };
                    prop_assert_eq!(*map.at_left_or_default(l), expected, "at_left_or_default({})", l);
                }
            }
            prop_assert_eq!(map.len(), model.by_left.len());
        }

        prop_assert_eq!(left_pairs(&map), model.left_pairs());
        prop_assert_eq!(right_pairs(&map), model.right_pairs());
    }

    /// Walking forward and backward with cursors visits the same pairs as the iterators.
    #[test]
    fn cursor_walks_match_iterators(seed in any::<u64>(), pairs in proptest::collection::vec((key_strategy(), key_strategy()), 0..300)) {
        let mut map: BiMap<i64, i64> = BiMap::with_seed(seed);
        map.extend(pairs);

        let mut forward = Vec::new();
        let mut cursor = map.begin_right();
        while let Some(&r) = map.right_key(cursor) {
            forward.push((*map.left_key(cursor.flip()).unwrap(), r));
            cursor = map.next_right(cursor);
        }
        prop_assert_eq!(&forward, &right_pairs(&map));

        let mut backward = Vec::new();
        let mut cursor = map.prev_left(map.end_left());
        while let Some(&l) = map.left_key(cursor) {
            backward.push((l, *map.right_key(cursor.flip()).unwrap()));
            cursor = map.prev_left(cursor);
        }
        backward.reverse();
        prop_assert_eq!(backward, left_pairs(&map));

        let reversed: Vec<_> = map.iter_left().rev().map(|(&l, &r)| (l, r)).collect();
        prop_assert_eq!(reversed.len(), map.len());
        prop_assert_eq!(map.iter_right().len(), map.len());
    }

    /// Equality depends only on the set of pairs, not on insertion order or seed.
    #[test]
    fn equality_ignores_history(
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
        pairs in proptest::collection::vec((key_strategy(), key_strategy()), 0..200),
    ) {
        let mut a: BiMap<i64, i64> = BiMap::with_seed(seed_a);
        a.extend(pairs.iter().copied());

        let mut b: BiMap<i64, i64> = BiMap::with_seed(seed_b);
        b.extend(left_pairs(&a).into_iter().rev());

        prop_assert!(a == b);
        if let Some((&l, _)) = a.iter_left().next() {
            b.remove_left(&l);
            prop_assert!(a != b);
        }
    }
}

// ─── Focused behavior ────────────────────────────────────────────────────────

#[test]
fn each_value_occurs_once_per_side() {
    let mut map = BiMap::with_seed(1);
    assert!(!map.insert(1, 'a').is_end());
    assert!(map.insert(1, 'b').is_end());
    assert!(map.insert(2, 'a').is_end());
    assert!(!map.insert(2, 'b').is_end());

    assert_eq!(map.len(), 2);
    assert_eq!(map.get_by_left(&1), Some(&'a'));
    assert_eq!(map.get_by_right(&'b'), Some(&2));
    assert!(map.contains_left(&2));
    assert!(!map.contains_right(&'c'));
}

#[test]
fn empty_map_positions() {
    let map: BiMap<u8, u8> = BiMap::with_seed(0);
    assert!(map.is_empty());
    assert_eq!(map.begin_left(), map.end_left());
    assert_eq!(map.begin_right(), map.end_right());
    assert_eq!(map.next_left(map.end_left()), map.end_left());
    assert_eq!(map.prev_right(map.end_right()), map.end_right());
    assert_eq!(map.left_key(map.end_left()), None);
    assert_eq!(map.iter_left().next(), None);
}

#[test]
fn walking_wraps_through_the_end() {
    let map = BiMap::from([(1, 10), (2, 20), (3, 30)]);
    let begin = map.begin_left();
    let last = map.prev_left(map.end_left());

    assert_eq!(map.left_key(last), Some(&3));
    assert!(map.next_left(last).is_end());
    assert_eq!(map.next_left(map.end_left()), begin);
    assert!(map.prev_left(begin).is_end());
}

#[test]
fn flip_keeps_the_pair() {
    let map = BiMap::from([("b", 1), ("a", 2), ("c", 3)]);
    let mut cursor = map.begin_left();
    while !cursor.is_end() {
        let flipped = cursor.flip();
        assert_eq!(map.get_by_left(map.left_key(cursor).unwrap()), map.right_key(flipped));
        assert_eq!(flipped.flip(), cursor);
        cursor = map.next_left(cursor);
    }
    assert!(map.end_left().flip().is_end());
}

#[test]
fn at_reports_missing_keys() {
    let map = BiMap::from([(1, "one")]);
    assert_eq!(map.at_left(&1), Ok(&"one"));
    assert_eq!(map.at_left(&2), Err(Error::LeftNotFound));
    assert_eq!(map.at_right(&"two"), Err(Error::RightNotFound));
    assert_eq!(Error::LeftNotFound.to_string(), "left key not found");
}

#[test]
fn default_value_evicts_its_owner() {
    let mut map = BiMap::with_seed(4);
    map.insert(1, String::from("a"));
    map.insert(2, String::new());

    assert_eq!(map.at_left_or_default(3), "");
    assert_eq!(map.len(), 2);
    assert!(map.find_left(&2).is_end());
    assert_eq!(map.at_right(&String::new()), Ok(&3));
    assert_eq!(map.at_left_or_default(1), "a");
    assert_eq!(map.len(), 2);
}

#[test]
fn default_value_on_the_left() {
    let mut map: BiMap<i32, char> = BiMap::with_seed(4);
    map.insert(0, 'x');

    assert_eq!(*map.at_right_or_default('y'), 0);
    assert_eq!(map.len(), 1);
    assert!(!map.contains_right(&'x'));
    assert_eq!(*map.at_right_or_default('y'), 0);
}

#[test]
fn erase_at_end_is_a_no_op() {
    let mut map = BiMap::from([(1, 1)]);
    assert!(map.erase_left(map.end_left()).is_end());
    assert!(map.erase_right(map.end_right()).is_end());
    assert_eq!(map.len(), 1);
}

#[test]
fn erase_removes_from_both_sides() {
    let mut map = BiMap::from([(1, 30), (2, 10), (3, 20)]);

    let after = map.erase_right(map.find_right(&10));
    assert_eq!(map.right_key(after), Some(&20));
    assert!(map.find_left(&2).is_end());

    assert!(map.erase_left_key(&3));
    assert!(!map.erase_left_key(&3));
    assert!(map.find_right(&20).is_end());
    assert!(!map.erase_right_key(&20));
    assert!(map.erase_right_key(&30));
    assert!(map.is_empty());
}

#[test]
fn range_erase() {
    let mut map: BiMap<i32, i32> = (0..10).map(|i| (i, 100 - i)).collect();

    // Right values 93, 94, 95, 96 belong to left values 7, 6, 5, 4.
    let first = map.find_right(&93);
    let last = map.find_right(&97);
    let returned = map.erase_right_range(first, last);
    assert_eq!(map.right_key(returned), Some(&97));
    assert_eq!(map.len(), 6);
    let left: Vec<i32> = map.iter_left().map(|(&l, _)| l).collect();
    assert_eq!(left, [0, 1, 2, 3, 8, 9]);

    // Erasing up to the end empties the tail.
    let first = map.find_left(&3);
    let end = map.end_left();
    assert!(map.erase_left_range(first, end).is_end());
    let left: Vec<i32> = map.iter_left().map(|(&l, _)| l).collect();
    assert_eq!(left, [0, 1, 2]);

    // An empty range removes nothing.
    let here = map.find_left(&1);
    assert_eq!(map.erase_left_range(here, here), here);
    assert_eq!(map.len(), 3);
}

#[test]
fn insert_then_erase_round_trips() {
    let mut map = BiMap::with_seed(12);
    let cursor = map.insert(7, 'q');
    assert!(!cursor.is_end());

    assert!(map.erase_left(cursor).is_end());
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.find_left(&7).is_end());
    assert!(map.find_right(&'q').is_end());
}

/// Orders keys by their remainder modulo the stored divisor.
#[derive(Clone, Copy, Debug)]
struct Modulo(u32);

impl TotalOrder<u32> for Modulo {
    fn cmp(&self, a: &u32, b: &u32) -> Ordering {
        (a % self.0).cmp(&(b % self.0))
    }
}

#[test]
fn clone_from_takes_the_source_orders() {
    let mut source: BiMap<u32, char, Modulo> = BiMap::with_orders_and_seed(Modulo(100), Natural, 1);
    source.insert(1, 'a');
    source.insert(11, 'b');

    // 1 and 11 collide modulo 10.
    let mut target: BiMap<u32, char, Modulo> = BiMap::with_orders_and_seed(Modulo(10), Natural, 2);
    target.insert(5, 'z');
    target.clone_from(&source);

    assert_eq!(target.len(), 2);
    assert_eq!(target.at_right(&'b'), Ok(&11));
    assert!(target.find_right(&'z').is_end());
    assert!(!target.insert(21, 'c').is_end());
    assert_eq!(target.len(), source.len() + 1);
    assert_eq!(source.len(), 2);
}

#[test]
fn clone_is_independent() {
    let original = BiMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.remove_left(&2);
    copy.insert(4, 'd');
    assert_eq!(original.len(), 3);
    assert_eq!(original.get_by_left(&2), Some(&'b'));
    assert!(!original.contains_left(&4));
    assert_ne!(copy, original);
}

#[test]
fn take_leaves_an_empty_map() {
    let mut map = BiMap::from([(1, 'a'), (2, 'b')]);
    let moved = std::mem::take(&mut map);
    assert!(map.is_empty());
    assert_eq!(moved.len(), 2);
    assert_eq!(moved.at_right(&'b'), Ok(&2));
}

#[test]
fn clear_empties_both_sides() {
    let mut map = BiMap::from([(1, 'a'), (2, 'b')]);
    map.clear();
    assert!(map.is_empty());
    assert!(map.begin_left().is_end());
    assert!(map.begin_right().is_end());
    map.insert(1, 'b');
    assert_eq!(map.at_left(&1), Ok(&'b'));
}

#[test]
fn custom_orders() {
    let mut map = BiMap::with_orders_and_seed(Reverse, |a: &&str, b: &&str| a.len().cmp(&b.len()), 3);
    map.insert(1, "ccc");
    map.insert(2, "a");
    map.insert(3, "bb");
    // Same length as "a" under the right order.
    assert!(map.insert(4, "z").is_end());

    let lefts: Vec<i32> = map.iter_left().map(|(&l, _)| l).collect();
    assert_eq!(lefts, [3, 2, 1]);
    let rights: Vec<&str> = map.iter_right().map(|(_, &r)| r).collect();
    assert_eq!(rights, ["a", "bb", "ccc"]);

    assert_eq!(map.at_right(&"xx"), Ok(&3));
    assert_eq!(map.left_key(map.lower_bound_left(&5)), Some(&3));
    assert_eq!(map.left_key(map.upper_bound_left(&2)), Some(&1));
}

#[test]
fn seeded_maps_are_reproducible() {
    let build = || {
        let mut map: BiMap<u32, u32> = BiMap::with_orders_and_seed(Natural, Natural, 99);
        for i in 0..100 {
            map.insert(i * 7 % 101, i);
        }
        map
    };
    let (a, b) = (build(), build());
    assert_eq!(a, b);
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
}

#[test]
fn iterators_and_conversions() {
    let map = BiMap::from([(3, 'a'), (1, 'c'), (2, 'b')]);

    let mut iter = map.iter_left();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some((&1, &'c')));
    assert_eq!(iter.next_back(), Some((&3, &'a')));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some((&2, &'b')));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let borrowed: Vec<_> = (&map).into_iter().collect();
    assert_eq!(borrowed, [(&1, &'c'), (&2, &'b'), (&3, &'a')]);

    assert_eq!(format!("{map:?}"), "{1: 'c', 2: 'b', 3: 'a'}");

    let owned: bimap::IntoIter<i32, char> = map.into_iter();
    assert_eq!(owned.rev().collect::<Vec<_>>(), [(3, 'a'), (2, 'b'), (1, 'c')]);
}

#[test]
fn extend_skips_duplicates() {
    let mut map: BiMap<i32, i32> = BiMap::with_seed(2);
    map.extend([(1, 1), (1, 2), (2, 1), (2, 2)]);
    assert_eq!(left_pairs_i32(&map), [(1, 1), (2, 2)]);

    let source = [(3, 3), (4, 3)];
    map.extend(source.iter().map(|(l, r)| (l, r)));
    assert_eq!(left_pairs_i32(&map), [(1, 1), (2, 2), (3, 3)]);
}

fn left_pairs_i32(map: &BiMap<i32, i32>) -> Vec<(i32, i32)> {
    map.iter_left().map(|(&l, &r)| (l, r)).collect()
}

#[test]
fn capacity_is_reused() {
    let mut map: BiMap<u32, u32> = BiMap::with_capacity(8);
    assert!(map.capacity() >= 8);
    for i in 0..8 {
        map.insert(i, i);
    }
    let capacity = map.capacity();
    map.remove_left(&0);
    map.insert(100, 100);
    assert_eq!(map.capacity(), capacity);

    map.reserve(64);
    assert!(map.capacity() >= map.len() + 64);
}

#[test]
fn cursors_are_plain_values() {
    let mut map = BiMap::from([(1, 'a'), (2, 'b')]);
    let cursor: LeftCursor = map.find_left(&2);
    map.insert(3, 'c');
    assert_eq!(map.left_key(cursor), Some(&2));
    let after = map.erase_left(cursor);
    assert_eq!(map.left_key(after), Some(&3));
}
