#[cfg(test)]
use crate::bitstring::BitString;

#[cfg(test)]
fn key(bytes: &[u8], len: usize) -> BitString<4> {
    BitString::from_bytes(bytes, len).unwrap()
}

#[test]
fn insert_then_exact_returns_same_node() {
    use crate::trie::PatriciaTrie;

    let mut trie: PatriciaTrie<4, i32> = PatriciaTrie::new();
    let k = key(&[10, 0, 0, 0], 8);
    *trie.insert_or_get(k) = 100;
    assert_eq!(trie.get_exact(&k), Ok(&100));
    assert_eq!(trie.len(), 1);
}

#[test]
fn reinsert_is_idempotent_and_overwrites_via_assignment() {
    use crate::trie::PatriciaTrie;

    let mut trie: PatriciaTrie<4, i32> = PatriciaTrie::new();
    let k = key(&[10, 0, 0, 0], 8);
    *trie.insert_or_get(k) = 100;
    *trie.insert_or_get(k) = 111;
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.get_exact(&k), Ok(&111));
}

#[test]
fn longest_prefix_wins() {
    use crate::error::NotFound;
    use crate::trie::PatriciaTrie;

    let mut trie: PatriciaTrie<4, i32> = PatriciaTrie::new();
    *trie.insert_or_get(key(&[10, 0, 0, 0], 8)) = 100;
    *trie.insert_or_get(key(&[10, 1, 0, 0], 16)) = 101;
    *trie.insert_or_get(key(&[10, 1, 2, 0], 24)) = 102;

    assert_eq!(trie.best_match(&key(&[10, 1, 2, 3], 32)), Ok(&102));
    assert_eq!(trie.best_match(&key(&[10, 1, 3, 4], 32)), Ok(&101));
    assert_eq!(trie.best_match(&key(&[10, 2, 0, 1], 32)), Ok(&100));
    assert_eq!(trie.best_match(&key(&[11, 0, 0, 1], 32)), Err(NotFound));
}

#[test]
fn best_match_is_monotone_under_extension() {
    use crate::trie::PatriciaTrie;

    let mut trie: PatriciaTrie<4, i32> = PatriciaTrie::new();
    *trie.insert_or_get(key(&[10, 0, 0, 0], 8)) = 1;
    *trie.insert_or_get(key(&[10, 0, 0, 0], 16)) = 2;
    assert_eq!(trie.best_match(&key(&[10, 0, 5, 5], 32)), Ok(&2));
}

#[test]
fn insert_erase_inverse_empties_the_trie() {
    use crate::trie::PatriciaTrie;

    let mut trie: PatriciaTrie<4, i32> = PatriciaTrie::new();
    let keys = [
        key(&[10, 0, 0, 0], 8),
        key(&[10, 1, 0, 0], 16),
        key(&[10, 1, 2, 0], 24),
        key(&[192, 168, 0, 0], 16),
    ];
    for (i, k) in keys.iter().enumerate() {
        *trie.insert_or_get(*k) = i as i32;
    }
    assert_eq!(trie.len(), keys.len());

    for k in keys.iter().rev() {
        trie.erase(k).unwrap();
    }
    assert_eq!(trie.len(), 0);
    assert!(trie.root.is_none());
}

#[test]
fn erase_of_two_child_node_demotes_to_glue_not_removed() {
    use crate::error::NotFound;
    use crate::trie::PatriciaTrie;

    let mut trie: PatriciaTrie<4, i32> = PatriciaTrie::new();
    *trie.insert_or_get(key(&[10, 0, 0, 0], 8)) = 1;
    *trie.insert_or_get(key(&[10, 0, 0, 0], 16)) = 2;
    *trie.insert_or_get(key(&[10, 128, 0, 0], 16)) = 3;

    trie.erase(&key(&[10, 0, 0, 0], 8)).unwrap();
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.get_exact(&key(&[10, 0, 0, 0], 8)), Err(NotFound));
    // Both more-specifics must still resolve through the demoted glue.
    assert_eq!(trie.best_match(&key(&[10, 0, 5, 5], 32)), Ok(&2));
    assert_eq!(trie.best_match(&key(&[10, 129, 0, 0], 32)), Ok(&3));
}

#[test]
fn erase_collapses_glue_left_with_one_child() {
    use crate::error::NotFound;
    use crate::trie::PatriciaTrie;

    let mut trie: PatriciaTrie<4, i32> = PatriciaTrie::new();
    // These two prefixes fork at their first differing bit, creating a
    // glue node above both.
    *trie.insert_or_get(key(&[10, 0, 0, 0], 8)) = 1;
    *trie.insert_or_get(key(&[192, 168, 0, 0], 16)) = 2;
    assert_eq!(trie.len(), 2);

    trie.erase(&key(&[10, 0, 0, 0], 8)).unwrap();
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.get_exact(&key(&[192, 168, 0, 0], 16)), Ok(&2));
    assert_eq!(trie.best_match(&key(&[192, 168, 1, 1], 32)), Ok(&2));
    assert_eq!(trie.best_match(&key(&[10, 0, 0, 1], 32)), Err(NotFound));
}

#[test]
fn replacement_scenario_after_removing_more_specifics() {
    use crate::trie::PatriciaTrie;

    let mut trie: PatriciaTrie<4, i32> = PatriciaTrie::new();
    *trie.insert_or_get(key(&[10, 0, 0, 0], 8)) = 100;
    *trie.insert_or_get(key(&[10, 1, 0, 0], 16)) = 101;
    *trie.insert_or_get(key(&[10, 1, 2, 0], 24)) = 102;

    trie.erase(&key(&[10, 1, 2, 0], 24)).unwrap();
    trie.erase(&key(&[10, 1, 0, 0], 16)).unwrap();
    *trie.insert_or_get(key(&[10, 0, 0, 0], 8)) = 111;

    assert_eq!(trie.best_match(&key(&[10, 1, 2, 3], 32)), Ok(&111));
}
