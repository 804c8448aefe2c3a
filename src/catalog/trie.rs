//! Fixed-alphabet prefix tree with exact and single-substitution lookup.
//!
//! Nodes live in an arena and address their children by index, one slot per
//! [`Base`]. Nodes are only ever appended; [`ApproxTrie::clear`] is the only
//! way to drop them.
//!
//! Near lookup never substitutes the first base of a key: a key only reaches
//! values stored under keys that share its first base. Every later position,
//! the last one included, may differ.

use crate::core::base::Base;

type NodeId = u32;

const ROOT: usize = 0;

#[derive(Debug, Clone)]
struct Node<V> {
    children: [Option<NodeId>; Base::COUNT],
    values: Vec<V>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            children: [None; Base::COUNT],
            values: Vec::new(),
        }
    }
}

/// Prefix tree from base strings to multisets of values
#[derive(Debug, Clone)]
pub struct ApproxTrie<V> {
    nodes: Vec<Node<V>>,
}

impl<V> Default for ApproxTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ApproxTrie<V> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Drop every node and start over from an empty root
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::default());
    }

    /// Number of allocated nodes, root included
    #[cfg(test)]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing has been inserted since construction or the last clear
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.nodes[ROOT].values.is_empty()
    }

    /// Append `value` to the multiset stored under `key`.
    ///
    /// Intermediate nodes are created on demand. An empty key is ignored.
    pub fn insert(&mut self, key: &[Base], value: V) {
        if key.is_empty() {
            return;
        }

        let mut node = ROOT;
        for &base in key {
            node = match self.nodes[node].children[base.index()] {
                Some(child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children[base.index()] = Some(to_node_id(child));
                    child
                }
            };
        }

        self.nodes[node].values.push(value);
    }

    fn child(&self, node: usize, base: Base) -> Option<usize> {
        self.nodes[node].children[base.index()].map(|id| id as usize)
    }

    /// Walk `key` from `node` without substitutions
    fn walk_exact(&self, node: usize, key: &[Base]) -> Option<usize> {
        key.iter()
            .try_fold(node, |current, &base| self.child(current, base))
    }
}

impl<V: Clone> ApproxTrie<V> {
    /// Values stored under `key`, or under any key differing from it in
    /// exactly one position after the first when `exact_only` is false.
    ///
    /// Values inserted more than once are returned once per insertion.
    pub fn find(&self, key: &[Base], exact_only: bool) -> Vec<V> {
        let Some((&first, rest)) = key.split_first() else {
            return Vec::new();
        };

        let Some(start) = self.child(ROOT, first) else {
            return Vec::new();
        };

        let mut found = Vec::new();
        if exact_only || rest.is_empty() {
            if let Some(node) = self.walk_exact(start, rest) {
                found.extend_from_slice(&self.nodes[node].values);
            }
        } else {
            self.collect_near(start, rest, &mut found);
        }
        found
    }

    /// Gather values below `node` for `key` with one substitution still
    /// available. `key` is never empty here.
    fn collect_near(&self, node: usize, key: &[Base], found: &mut Vec<V>) {
        let (&base, rest) = match key.split_first() {
            Some(split) => split,
            None => return,
        };

        for slot in Base::ALL {
            let Some(child) = self.child(node, slot) else {
                continue;
            };

            if rest.is_empty() {
                // Last position: any child is within one substitution
                found.extend_from_slice(&self.nodes[child].values);
            } else if slot == base {
                self.collect_near(child, rest, found);
            } else if let Some(end) = self.walk_exact(child, rest) {
                found.extend_from_slice(&self.nodes[end].values);
            }
        }
    }
}

fn to_node_id(index: usize) -> NodeId {
    NodeId::try_from(index).unwrap_or_else(|_| panic!("trie node arena exceeded {} nodes", NodeId::MAX))
}
