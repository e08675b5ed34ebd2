extern crate rand;
extern crate sorted_skiplist;

use self::rand::Rng;
use sorted_skiplist::{Error, Options, SequenceSource, SkipList, XorShiftSource};
use std::vec::Vec;

#[test]
fn int_test_skiplist() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut list = SkipList::new();
    list.set_comparator(|a: &u32, b: &u32| a.cmp(b)).unwrap();

    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let val = rng.gen::<u32>();

        list.insert(val).unwrap();
        expected.push(val);
    }

    expected.sort();

    assert_eq!(list.len(), expected.len());
    assert_eq!(list.to_vec(), expected);
}

#[test]
fn int_test_skiplist_duplicate_keys() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut list = SkipList::with_source(XorShiftSource::from_seed([3, 3, 3, 3]));
    list.set_comparator(|l: &(u32, usize), r: &(u32, usize)| l.0.cmp(&r.0)).unwrap();

    let mut expected = Vec::new();
    for i in 0..10_000 {
        let key = rng.gen_range(0, 100);

        list.insert((key, i)).unwrap();
        expected.push((key, i));
    }

    // equal keys end up in reverse insertion order
    expected.reverse();
    expected.sort_by(|l, r| l.0.cmp(&r.0));

    assert_eq!(list.to_vec(), expected);
}

#[test]
fn int_test_skiplist_without_promotion() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut list = SkipList::with_options(
        Options { chunk_size: 7 },
        SequenceSource::new(vec![0.5]),
    );
    list.set_comparator(|a: &i64, b: &i64| a.cmp(b)).unwrap();

    let mut expected = Vec::new();
    for _ in 0..1_000 {
        let val = rng.gen_range(-1_000, 1_000);

        list.insert(val).unwrap();
        expected.push(val);
    }

    expected.sort();
    assert_eq!(list.iter().cloned().collect::<Vec<i64>>(), expected);
}

#[test]
fn int_test_skiplist_iterates_repeatedly() {
    let mut list = SkipList::new();
    list.set_comparator(|a: &String, b: &String| a.cmp(b)).unwrap();
    for word in &["delta", "alpha", "charlie", "bravo"] {
        list.insert(word.to_string()).unwrap();
    }

    let first: Vec<&String> = list.iter().collect();
    let second: Vec<&String> = (&list).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(list.to_vec(), vec!["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn int_test_skiplist_configuration_errors() {
    let mut list = SkipList::new();
    list.insert(1).unwrap();

    assert_eq!(list.insert(2), Err(Error::UninitializedComparator));
    assert_eq!(
        list.set_comparator(|a: &u32, b: &u32| a.cmp(b)),
        Err(Error::ImmutableComparator),
    );
    assert_eq!(list.to_vec(), vec![1]);
}

#[test]
fn int_test_skiplist_empty() {
    let list: SkipList<u32> = SkipList::default();
    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);
    assert_eq!(list.iter().count(), 0);
}
