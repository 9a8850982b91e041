use std::mem::forget;

use super::*;

#[test]
fn iter() {
    let mut values = vec![1, 7, 8, 9, 10, 6, 5, 2, 3, 4, 0, 11];
    let mut map = SortedMap::with_capacity(values.len());
    for x in values.iter().copied() {
        map.insert(x, x * 10);
    }
    print_tree(&map);
    values.sort_unstable();
    {
        let iter = map.forward_iter();
        assert_eq!(iter.len(), values.len());
        let result = iter.map( |(k, v)| (*k, *v) ).collect::<Vec<_>>();
        let expected = values.iter().map( |&k| (k, k * 10) ).collect::<Vec<_>>();
        assert_eq!(result, expected);
    }
    validate_rb_tree(&map);
    values.reverse();
    assert_eq!(keys_rev(&mut map), values);
    validate_rb_tree(&map);
}
#[test]
fn iter_empty() {
    let mut map: SortedMap<i32, i32> = SortedMap::new();
    assert_eq!(map.forward_iter().count(), 0);
    assert_eq!(map.backward_iter().next(), None);
    validate_rb_tree(&map);
}
#[test]
fn backward_is_reverse_of_forward() {
    let mut map = (0..100).map( |i| ((i * 37) % 101, i) ).collect::<SortedMap<_, _>>();
    let forward = keys(&mut map);
    let mut backward = keys_rev(&mut map);
    assert_eq!(forward.len(), map.len());
    assert!(forward.windows(2).all( |w| w[0] < w[1] ), "keys have to be strictly ascending");
    backward.reverse();
    assert_eq!(forward, backward);
}
#[test]
fn early_stop_restores_links() {
    init_logging();
    let mut map = (0..50).map( |i| (i, i) ).collect::<SortedMap<_, _>>();
    let before = map.display().to_string();
    let first = map.forward_iter().take(3).map( |(k, _)| *k ).collect::<Vec<_>>();
    assert_eq!(first, vec![0, 1, 2]);
    validate_rb_tree(&map);
    assert_eq!(map.display().to_string(), before);

    let last = map.backward_iter().nth(4).map( |(k, _)| *k );
    assert_eq!(last, Some(45));
    validate_rb_tree(&map);
    assert_eq!(map.display().to_string(), before);
    assert_eq!(keys(&mut map), (0..50).collect::<Vec<_>>());
}
#[test]
fn size_hint_counts_down() {
    let mut map = (0..5).map( |i| (i, ()) ).collect::<SortedMap<_, _>>();
    let mut iter = map.backward_iter();
    assert_eq!(iter.size_hint(), (5, Some(5)));
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.by_ref().count(), 3);
    assert_eq!(iter.next(), None);
}
#[test]
fn leaked_iter_is_repaired() {
    init_logging();
    let mut map = (0..64).map( |i| (i, i * 2) ).collect::<SortedMap<_, _>>();
    {
        let mut iter = map.forward_iter();
        for _ in 0..10 {
            iter.next();
        }
        forget(iter);
    }
    assert_eq!(map.validate(), Err(Violation::Threaded));
    for i in 0..64 {
        assert_eq!(map.get(&i), Some(&(i * 2)), "lookups have to ignore threads");
    }
    assert_eq!(map.first_key_value(), Some((&0, &0)));
    assert_eq!(map.last_key_value(), Some((&63, &126)));
    assert_eq!(map.insert(64, 128), None);
    validate_rb_tree(&map);
    assert_eq!(keys(&mut map), (0..=64).collect::<Vec<_>>());
}
#[test]
fn leaked_backward_iter_is_repaired() {
    init_logging();
    let mut map = (0..64).map( |i| (i, i * 3) ).collect::<SortedMap<_, _>>();
    {
        let mut iter = map.backward_iter();
        let seen = iter.by_ref().take(10).map( |(k, _)| *k ).collect::<Vec<_>>();
        assert_eq!(seen, (54..64).rev().collect::<Vec<_>>());
        forget(iter);
    }
    assert_eq!(map.validate(), Err(Violation::Threaded));
    for i in 0..64 {
        assert_eq!(map.get(&i), Some(&(i * 3)), "lookups have to ignore left threads");
    }
    assert!(!map.contains_key(&64));
    assert_eq!(map.first_key_value(), Some((&0, &0)));
    assert_eq!(map.last_key_value(), Some((&63, &189)));
    let untouched = (0..64).map( |i| (i, ()) ).collect::<SortedMap<_, _>>();
    assert_eq!(map.height(), untouched.height());
    assert_eq!(map.remove(&31), Some(93));
    validate_rb_tree(&map);
    assert_eq!(map.len(), 63);
    assert_eq!(keys_rev(&mut map), (0..64).rev().filter( |&i| i != 31 ).collect::<Vec<_>>());
    validate_rb_tree(&map);
}
#[test]
fn iter_through_mut_ref() {
    let mut map = SortedMap::new();
    for word in ["pear", "apple", "fig", "kiwi"] {
        map.insert(word, word.len());
    }
    let mut seen = Vec::new();
    for (word, len) in &mut map {
        assert_eq!(word.len(), *len);
        seen.push(*word);
    }
    assert_eq!(seen, vec!["apple", "fig", "kiwi", "pear"]);
}
#[test]
fn into_iter_drains_both_ends() {
    let map = (0..6).map( |i| (i, i.to_string()) ).collect::<SortedMap<_, _>>();
    let mut iter = map.into_iter();
    assert_eq!(iter.len(), 6);
    assert_eq!(iter.next(), Some((0, "0".to_string())));
    assert_eq!(iter.next_back(), Some((5, "5".to_string())));
    assert_eq!(iter.map( |(k, _)| k ).collect::<Vec<_>>(), vec![1, 2, 3, 4]);

    let map = (0..6).map( |i| (i, ()) ).collect::<SortedMap<_, _>>();
    assert_eq!(map.into_iter().rev().map( |(k, _)| k ).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1, 0]);
}
