use std::thread;

use super::*;

#[test]
fn writers_from_many_threads() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 250;
    let map = SharedSortedMap::with_capacity(THREADS * PER_THREAD);
    let handles = (0..THREADS)
        .map( |t| {
            let map = map.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let key = i * THREADS + t;
                    assert_eq!(map.insert(key, t), None);
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }
    assert_eq!(map.len(), THREADS * PER_THREAD);
    validate_rb_tree(&*map.read());
    let pairs = map.to_vec();
    assert_eq!(pairs.len(), THREADS * PER_THREAD);
    for (key, owner) in pairs.iter().enumerate() {
        assert_eq!(*owner, (key, key % THREADS));
    }
}
#[test]
fn readers_share_the_lock() {
    let map = SharedSortedMap::new();
    map.insert("a", 1);
    map.insert("b", 2);
    {
        let first = map.read();
        let second = map.read();
        assert_eq!(first.get(&"a"), Some(&1));
        assert_eq!(second.len(), 2);
    }
    assert!(map.contains_key(&"b"));
    assert_eq!(map.get_cloned(&"b"), Some(2));
    assert_eq!(map.remove(&"a"), Some(1));
    assert_eq!(map.write().backward_iter().map( |(k, _)| *k ).collect::<Vec<_>>(), vec!["b"]);
    assert!(!map.is_empty());
}
