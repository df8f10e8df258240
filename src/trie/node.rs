use crate::bitstring::BitString;

/// A handle into a [`super::PatriciaTrie`]'s node arena.
///
/// Using index handles instead of raw pointers — per spec.md §9's arena
/// alternative — means the trie's `Drop` is a flat `Vec` teardown rather
/// than pointer-chasing recursion, and frees can't double-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeIndex(pub(crate) u32);

/// Either a stored prefix with its payload, or a glue node hosting a branch
/// between two subtrees whose keys first diverge at this depth.
pub(crate) enum NodeKind<const N: usize, T> {
    Data { key: BitString<N>, payload: T },
    Glue,
}

pub(crate) struct Node<const N: usize, T> {
    /// The discriminator depth: the bit position at which this node
    /// branches, and, for data nodes, the length of the stored prefix.
    pub(crate) bits: usize,
    pub(crate) kind: NodeKind<N, T>,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
    pub(crate) parent: Option<NodeIndex>,
}

impl<const N: usize, T> Node<N, T> {
    pub(crate) fn is_data(&self) -> bool {
        matches!(self.kind, NodeKind::Data { .. })
    }

    pub(crate) fn data_key(&self) -> &BitString<N> {
        match &self.kind {
            NodeKind::Data { key, .. } => key,
            NodeKind::Glue => panic!("glue node has no stored key"),
        }
    }
}
