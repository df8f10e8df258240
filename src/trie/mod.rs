//! A Patricia-style binary trie keyed by fixed-width bit strings.
//!
//! Nodes are held in an arena (`Vec<Node<N, T>>`) and referenced by
//! [`NodeIndex`] rather than by pointer, per spec.md §9's suggested
//! alternative. This removes the manual double-free hazard the original
//! pointer-based implementation's erase path was prone to (spec.md §9 Open
//! Questions), and makes teardown a flat `Vec` drop instead of depth-bounded
//! pointer recursion.

mod node;
mod tests;

use crate::bitstring::BitString;
use crate::error::NotFound;
use node::{Node, NodeIndex, NodeKind};

/// Conservative upper bound on trie depth used to size the stack-allocated
/// search scratch in [`PatriciaTrie::best_match`]. IPv6, the widest address
/// family this crate serves, has 128 bits; `129` covers `N * 8 + 1` for
/// every `N` this crate instantiates. Rust's stable const generics don't
/// yet let an array length be an arithmetic expression over a generic `N`
/// (see DESIGN.md), so this is a library-wide constant rather than a
/// per-`N` one; [`PatriciaTrie::new`] asserts it's sufficient.
const MAX_DEPTH: usize = 129;

/// A binary trie over `BitString<N>` keys whose internal nodes may or may
/// not carry a payload.
pub struct PatriciaTrie<const N: usize, T> {
    nodes: Vec<Node<N, T>>,
    free: Vec<NodeIndex>,
    root: Option<NodeIndex>,
    len: usize,
}

impl<const N: usize, T> Default for PatriciaTrie<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, T> PatriciaTrie<N, T> {
    pub fn new() -> Self {
        debug_assert!(
            BitString::<N>::CAPACITY + 1 <= MAX_DEPTH,
            "PatriciaTrie<{N}> exceeds the supported maximum depth"
        );
        PatriciaTrie {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of distinct inserted prefixes currently live in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn get(&self, idx: NodeIndex) -> &Node<N, T> {
        &self.nodes[idx.0 as usize]
    }

    fn get_mut(&mut self, idx: NodeIndex) -> &mut Node<N, T> {
        &mut self.nodes[idx.0 as usize]
    }

    fn alloc(&mut self, node: Node<N, T>) -> NodeIndex {
        if let Some(idx) = self.free.pop() {
            self.nodes[idx.0 as usize] = node;
            idx
        } else {
            let idx = NodeIndex(self.nodes.len() as u32);
            self.nodes.push(node);
            idx
        }
    }

    fn alloc_data(&mut self, bits: usize, key: BitString<N>, payload: T) -> NodeIndex {
        self.alloc(Node {
            bits,
            kind: NodeKind::Data { key, payload },
            left: None,
            right: None,
            parent: None,
        })
    }

    fn alloc_glue(&mut self, bits: usize) -> NodeIndex {
        self.alloc(Node {
            bits,
            kind: NodeKind::Glue,
            left: None,
            right: None,
            parent: None,
        })
    }

    fn free_node(&mut self, idx: NodeIndex) {
        self.free.push(idx);
    }

    /// Redirects whichever of `parent`'s two children currently points at
    /// `old` to point at `new` instead; if `parent` is `None`, `old` was the
    /// root and `new` becomes the new root.
    fn splice_parent_link(&mut self, parent: Option<NodeIndex>, old: NodeIndex, new: NodeIndex) {
        match parent {
            None => self.root = Some(new),
            Some(p) => {
                let node = self.get_mut(p);
                if node.left == Some(old) {
                    node.left = Some(new);
                } else {
                    debug_assert_eq!(node.right, Some(old));
                    node.right = Some(new);
                }
            }
        }
    }

    fn unlink_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        let node = self.get_mut(parent);
        if node.left == Some(child) {
            node.left = None;
        } else {
            debug_assert_eq!(node.right, Some(child));
            node.right = None;
        }
    }

    /// Descends from the root following the branching bit at each level,
    /// stopping at a data node whose `bits >= key.len()`, or at the node
    /// whose child link in the chosen direction is null. Glue nodes always
    /// have both children populated (see the type invariant in node.rs), so
    /// descent only ever terminates at a data node.
    fn descend(&self, key: &BitString<N>) -> Option<NodeIndex> {
        let mut cur = self.root?;
        loop {
            let node = self.get(cur);
            if node.is_data() && node.bits >= key.len() {
                return Some(cur);
            }
            let next = if key.bit(node.bits) {
                node.right
            } else {
                node.left
            };
            match next {
                Some(n) => cur = n,
                None => return Some(cur),
            }
        }
    }

    /// Ensures a data node exists for `key`, creating path structure as
    /// needed, and returns a mutable reference to its payload. A first
    /// insertion gets a default-initialized payload; a repeat insertion
    /// with the same key returns the existing one unchanged.
    pub fn insert_or_get(&mut self, key: BitString<N>) -> &mut T
    where
        T: Default,
    {
        let Some(term) = self.descend(&key) else {
            let idx = self.alloc_data(key.len(), key, T::default());
            self.root = Some(idx);
            self.len += 1;
            return match &mut self.get_mut(idx).kind {
                NodeKind::Data { payload, .. } => payload,
                NodeKind::Glue => unreachable!(),
            };
        };

        let term_node = self.get(term);
        let diff = key.first_differing_bit(term_node.data_key(), term_node.bits.min(key.len()));

        let mut cur = term;
        while let Some(p) = self.get(cur).parent {
            if self.get(p).bits >= diff {
                cur = p;
            } else {
                break;
            }
        }
        let cur_bits = self.get(cur).bits;

        // Exact hit: promote glue, or return the already-present data node.
        if diff == key.len() && cur_bits == key.len() {
            let is_glue = matches!(self.get(cur).kind, NodeKind::Glue);
            if is_glue {
                self.get_mut(cur).kind = NodeKind::Data {
                    key,
                    payload: T::default(),
                };
                self.len += 1;
            }
            return match &mut self.get_mut(cur).kind {
                NodeKind::Data { payload, .. } => payload,
                NodeKind::Glue => unreachable!(),
            };
        }

        // Extend below: attach a fresh data node as cur's child.
        if cur_bits == diff && diff < key.len() {
            let goes_right = key.bit(cur_bits);
            let new_idx = self.alloc_data(key.len(), key, T::default());
            self.get_mut(new_idx).parent = Some(cur);
            if goes_right {
                self.get_mut(cur).right = Some(new_idx);
            } else {
                self.get_mut(cur).left = Some(new_idx);
            }
            self.len += 1;
            return match &mut self.get_mut(new_idx).kind {
                NodeKind::Data { payload, .. } => payload,
                NodeKind::Glue => unreachable!(),
            };
        }

        // Split above: insert strictly between cur's parent and cur.
        if key.len() == diff && diff < cur_bits {
            let cur_goes_right = self.get(cur).data_key().bit(key.len());
            let parent = self.get(cur).parent;
            let new_idx = self.alloc_data(key.len(), key, T::default());

            self.get_mut(cur).parent = Some(new_idx);
            if cur_goes_right {
                self.get_mut(new_idx).right = Some(cur);
            } else {
                self.get_mut(new_idx).left = Some(cur);
            }
            self.splice_parent_link(parent, cur, new_idx);
            self.get_mut(new_idx).parent = parent;

            self.len += 1;
            return match &mut self.get_mut(new_idx).kind {
                NodeKind::Data { payload, .. } => payload,
                NodeKind::Glue => unreachable!(),
            };
        }

        // Fork with glue: cur and the new key diverge strictly above both
        // cur's depth and key's own length.
        let new_goes_right = key.bit(diff);
        let parent = self.get(cur).parent;
        let new_idx = self.alloc_data(key.len(), key, T::default());
        let glue_idx = self.alloc_glue(diff);

        self.get_mut(cur).parent = Some(glue_idx);
        self.get_mut(new_idx).parent = Some(glue_idx);
        if new_goes_right {
            self.get_mut(glue_idx).right = Some(new_idx);
            self.get_mut(glue_idx).left = Some(cur);
        } else {
            self.get_mut(glue_idx).left = Some(new_idx);
            self.get_mut(glue_idx).right = Some(cur);
        }
        self.splice_parent_link(parent, cur, glue_idx);
        self.get_mut(glue_idx).parent = parent;

        self.len += 1;
        match &mut self.get_mut(new_idx).kind {
            NodeKind::Data { payload, .. } => payload,
            NodeKind::Glue => unreachable!(),
        }
    }

    fn find_exact_index(&self, key: &BitString<N>) -> Result<NodeIndex, NotFound> {
        let mut cur = self.root.ok_or(NotFound)?;
        loop {
            let node = self.get(cur);
            if node.bits >= key.len() {
                break;
            }
            let next = if key.bit(node.bits) {
                node.right
            } else {
                node.left
            };
            cur = next.ok_or(NotFound)?;
        }
        let node = self.get(cur);
        if node.is_data() && node.bits == key.len() && key.compare_bits(node.data_key(), key.len())
        {
            Ok(cur)
        } else {
            Err(NotFound)
        }
    }

    /// Returns the payload iff a data node with exactly this key (same bits,
    /// same length) exists.
    pub fn get_exact(&self, key: &BitString<N>) -> Result<&T, NotFound> {
        let idx = self.find_exact_index(key)?;
        match &self.get(idx).kind {
            NodeKind::Data { payload, .. } => Ok(payload),
            NodeKind::Glue => unreachable!(),
        }
    }

    /// Returns the payload of the data node whose key is the longest
    /// matching prefix of `key`.
    pub fn best_match(&self, key: &BitString<N>) -> Result<&T, NotFound> {
        let mut stack = [None; MAX_DEPTH];
        let mut sp = 0usize;

        let mut cur = match self.root {
            Some(r) => r,
            None => return Err(NotFound),
        };
        loop {
            let node = self.get(cur);
            if node.is_data() && node.bits <= key.len() {
                stack[sp] = Some(cur);
                sp += 1;
            }
            if node.bits >= key.len() {
                break;
            }
            let next = if key.bit(node.bits) {
                node.right
            } else {
                node.left
            };
            match next {
                Some(n) => cur = n,
                None => break,
            }
        }

        while sp > 0 {
            sp -= 1;
            if let Some(idx) = stack[sp] {
                let node = self.get(idx);
                if let NodeKind::Data { key: nk, payload } = &node.kind {
                    if key.compare_bits(nk, node.bits) {
                        return Ok(payload);
                    }
                }
            }
        }
        Err(NotFound)
    }

    /// Removes the data node for `key`, collapsing now-unnecessary glue so
    /// that no glue node is ever left with fewer than two children.
    pub fn erase(&mut self, key: &BitString<N>) -> Result<(), NotFound> {
        let n = self.find_exact_index(key)?;
        let left = self.get(n).left;
        let right = self.get(n).right;
        let parent = self.get(n).parent;

        match (left, right) {
            (Some(_), Some(_)) => {
                self.get_mut(n).kind = NodeKind::Glue;
            }
            (None, None) => match parent {
                None => {
                    self.free_node(n);
                    self.root = None;
                }
                Some(p) => {
                    self.unlink_child(p, n);
                    self.free_node(n);
                    if matches!(self.get(p).kind, NodeKind::Glue) {
                        let remaining = self
                            .get(p)
                            .left
                            .or(self.get(p).right)
                            .expect("glue node had two children before this erase");
                        let grandparent = self.get(p).parent;
                        self.get_mut(remaining).parent = grandparent;
                        self.splice_parent_link(grandparent, p, remaining);
                        self.free_node(p);
                    }
                }
            },
            (Some(child), None) | (None, Some(child)) => {
                match parent {
                    None => {
                        self.root = Some(child);
                        self.get_mut(child).parent = None;
                    }
                    Some(p) => {
                        self.get_mut(child).parent = Some(p);
                        self.splice_parent_link(Some(p), n, child);
                    }
                }
                self.free_node(n);
            }
        }

        self.len -= 1;
        Ok(())
    }
}
