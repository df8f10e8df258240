//! [`LpmTable`]: the IPv4/IPv6 family dispatcher over two monomorphized
//! [`PatriciaTrie`]s.


use crate::bitstring::BitString;
use crate::error::NotFound;
use crate::trie::PatriciaTrie;

/// A parsed address or subnet, tagged with its family.
///
/// `V4` keys are backed by a 4-byte `BitString` (32-bit capacity, matching
/// the IPv4 family cap); `V6` keys by a 16-byte one (128-bit capacity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKey {
    V4(BitString<4>),
    V6(BitString<16>),
}

/// A pair of tries, one per IP address family, built once and queried
/// read-only thereafter.
pub struct LpmTable<T> {
    v4: PatriciaTrie<4, T>,
    v6: PatriciaTrie<16, T>,
}

impl<T> Default for LpmTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LpmTable<T> {
    pub fn new() -> Self {
        LpmTable {
            v4: PatriciaTrie::new(),
            v6: PatriciaTrie::new(),
        }
    }

    /// Inserts or overwrites the tag for `key`, following the assignment
    /// semantics `trie[key] = tag` spec.md §4.2.1 describes.
    pub fn insert(&mut self, key: AddressKey, tag: T)
    where
        T: Default,
    {
        match key {
            AddressKey::V4(k) => *self.v4.insert_or_get(k) = tag,
            AddressKey::V6(k) => *self.v6.insert_or_get(k) = tag,
        }
    }

    /// Routes `key` to the matching family's trie and returns the tag of
    /// the longest covering prefix.
    pub fn best_match(&self, key: &AddressKey) -> Result<&T, NotFound> {
        match key {
            AddressKey::V4(k) => self.v4.best_match(k),
            AddressKey::V6(k) => self.v6.best_match(k),
        }
    }

    pub fn len_v4(&self) -> usize {
        self.v4.len()
    }

    pub fn len_v6(&self) -> usize {
        self.v6.len()
    }
}
