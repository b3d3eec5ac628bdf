use balanced_collections::red_black_tree::{RedBlackMap, RedBlackSet};
use rand::{Rng, SeedableRng, XorShiftRng};

#[test]
fn test_random_round_trip() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    let mut expected = Vec::new();

    for _ in 0..100_000 {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        if map.insert(key, val).is_none() {
            expected.push((key, val));
        } else {
            if let Some(pair) = expected.iter_mut().find(|pair| pair.0 == key) {
                pair.1 = val;
            }
        }
    }

    assert_eq!(map.len(), expected.len());
    for (key, val) in &expected {
        assert!(map.contains_key(key));
        assert_eq!(map.get(key), Some(val));
    }
}

#[test]
fn test_absent_keys() {
    let mut set = RedBlackSet::new();
    for key in 0..1000u32 {
        set.insert(key * 2);
    }

    for key in 0..1000u32 {
        assert!(set.contains(&(key * 2)));
        assert!(!set.contains(&(key * 2 + 1)));
        assert_eq!(set.remove(&(key * 2 + 1)), None);
    }
    assert_eq!(set.len(), 1000);
}

#[test]
fn test_deletion_completeness() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([3, 3, 3, 3]);
    let mut set = RedBlackSet::new();
    let mut keys = Vec::new();

    for _ in 0..10_000 {
        let key = rng.gen::<u32>();
        if set.insert(key).is_none() {
            keys.push(key);
        }
    }

    rng.shuffle(&mut keys);
    for key in &keys {
        assert_eq!(set.remove(key), Some(*key));
    }

    assert!(set.is_empty());
    for key in &keys {
        assert!(!set.contains(key));
    }
}

#[test]
fn test_size_consistency() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([4, 4, 4, 4]);
    let mut map = RedBlackMap::new();
    let mut inserts = 0usize;
    let mut removes = 0usize;

    for _ in 0..50_000 {
        // skewed key range to force collisions, duplicate inserts, and absent removes
        let key = rng.gen::<u32>() % 4096;
        if rng.gen::<bool>() {
            if map.insert(key, ()).is_none() {
                inserts += 1;
            }
        } else if map.remove(&key).is_some() {
            removes += 1;
        }
        assert_eq!(map.len(), inserts - removes);
    }
}

#[test]
fn test_insert_idempotence() {
    let mut set = RedBlackSet::new();
    for key in 0..100u32 {
        assert_eq!(set.insert(key), None);
    }
    for key in 0..100u32 {
        assert_eq!(set.insert(key), Some(key));
    }
    assert_eq!(set.len(), 100);
    for key in 0..100u32 {
        assert!(set.contains(&key));
    }
}

#[test]
fn test_borrowed_key_lookup() {
    let mut map = RedBlackMap::new();
    map.insert(String::from("a"), 1);
    map.insert(String::from("b"), 2);

    assert!(map.contains_key("a"));
    assert_eq!(map.get("b"), Some(&2));
    assert_eq!(map.remove("a"), Some((String::from("a"), 1)));
    assert_eq!(map.get("a"), None);
}
