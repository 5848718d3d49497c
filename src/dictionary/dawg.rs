//! DAWG (Directed Acyclic Word Graph) dictionary implementation.
//!
//! A DAWG is a minimized trie that shares both prefixes and suffixes. It is
//! built incrementally from sorted input (Daciuk, Mihov, Watson & Watson,
//! "Incremental construction of minimal acyclic finite-state automata"):
//! after each insertion, every node that can no longer gain children is
//! compared against a register of canonical nodes and merged into its
//! equivalent if one exists.

use super::node::{GraphNode, NodeId, Signature};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

/// A minimal acyclic automaton accepting a fixed set of words.
///
/// Once built the automaton is immutable; clones share the node arena, so a
/// `Dawg` can be handed to any number of threads.
///
/// # Example
///
/// ```rust
/// use levdawg::dictionary::dawg::Dawg;
///
/// let dawg = Dawg::from_words(["tap", "taps", "top", "tops"]);
/// assert!(dawg.accepts("tops"));
/// assert!(!dawg.accepts("to"));
/// assert_eq!(dawg.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Dawg {
    nodes: Arc<Vec<GraphNode>>,
    word_count: usize,
    max_word_length: usize,
}

impl Dawg {
    /// Build from words already in non-decreasing order.
    ///
    /// Duplicates are tolerated. Out-of-order input is a precondition
    /// violation: debug builds panic on it, release builds produce an
    /// automaton for a different language.
    pub fn from_sorted<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = DawgBuilder::new();
        for word in words {
            builder.insert(word.as_ref());
        }
        builder.finish()
    }

    /// Build from words in any order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_owned()).collect();
        words.sort_unstable();
        words.dedup();
        Self::from_sorted(&words)
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &GraphNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// Look up a node by id.
    ///
    /// Ids are only meaningful for the automaton that produced them.
    #[inline]
    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id.index()]
    }

    /// Check whether `word` is in the accepted language.
    pub fn accepts(&self, word: &str) -> bool {
        let mut node = self.root();
        for label in word.chars() {
            match node.transition(label) {
                Some(next) => node = self.node(next),
                None => return false,
            }
        }
        node.is_final()
    }

    /// Number of accepted words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// True if no word is accepted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Length in characters of the longest accepted word.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes, in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.nodes.iter()
    }

    /// Number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(GraphNode::edge_count).sum()
    }

    /// Iterate over the accepted words in lexicographic order.
    pub fn iter(&self) -> Words<'_> {
        Words {
            dawg: self,
            stack: vec![(NodeId::ROOT, String::new())],
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dawg {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dawg::from_words(iter)
    }
}

impl<'a> IntoIterator for &'a Dawg {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the words of a [`Dawg`], see [`Dawg::iter`].
#[derive(Debug)]
pub struct Words<'a> {
    dawg: &'a Dawg,
    stack: Vec<(NodeId, String)>,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((id, prefix)) = self.stack.pop() {
            let node = self.dawg.node(id);
            // Reverse so the smallest label is popped first.
            for &(label, child) in node.edges().iter().rev() {
                let mut word = prefix.clone();
                word.push(label);
                self.stack.push((child, word));
            }
            if node.is_final() {
                return Some(prefix);
            }
        }
        None
    }
}

/// Incremental builder for [`Dawg`].
///
/// Words must be inserted in non-decreasing order. The builder keeps the
/// edges of the most recent word on an "unchecked" stack; inserting a new
/// word first minimizes every unchecked edge below the common prefix, since
/// those nodes can no longer gain children.
#[derive(Debug)]
pub struct DawgBuilder {
    nodes: Vec<GraphNode>,
    previous: Vec<char>,
    unchecked: Vec<(NodeId, char, NodeId)>,
    minimized: FxHashMap<Signature, NodeId>,
    word_count: usize,
    max_word_length: usize,
}

impl DawgBuilder {
    /// Create an empty builder holding only the root.
    pub fn new() -> Self {
        DawgBuilder {
            nodes: vec![GraphNode::new(NodeId::ROOT)],
            previous: Vec::new(),
            unchecked: Vec::new(),
            minimized: FxHashMap::default(),
            word_count: 0,
            max_word_length: 0,
        }
    }

    /// Append `word`, which must not sort before the previous word.
    ///
    /// # Panics
    ///
    /// In debug builds, if `word` sorts before the previous word.
    pub fn insert(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        debug_assert!(
            self.previous <= chars,
            "words must be inserted in sorted order"
        );

        let common_prefix = self
            .previous
            .iter()
            .zip(&chars)
            .take_while(|(a, b)| a == b)
            .count();

        self.minimize(common_prefix);

        let mut node = self
            .unchecked
            .last()
            .map_or(NodeId::ROOT, |&(_, _, child)| child);

        for &label in &chars[common_prefix..] {
            let next = self.push_node();
            self.nodes[node.index()].set_edge(label, next);
            self.unchecked.push((node, label, next));
            node = next;
        }

        let last = &mut self.nodes[node.index()];
        if !last.is_final() {
            last.set_final(true);
            self.word_count += 1;
        }

        self.max_word_length = self.max_word_length.max(chars.len());
        self.previous = chars;
    }

    /// Fold every unchecked edge deeper than `lower_bound` into the register.
    fn minimize(&mut self, lower_bound: usize) {
        while self.unchecked.len() > lower_bound {
            let Some((parent, label, child)) = self.unchecked.pop() else {
                break;
            };
            let signature = self.nodes[child.index()].signature();
            match self.minimized.get(&signature) {
                Some(&canonical) => {
                    self.nodes[parent.index()].set_edge(label, canonical);
                }
                None => {
                    self.minimized.insert(signature, child);
                }
            }
        }
    }

    fn push_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(GraphNode::new(id));
        id
    }

    /// Number of words inserted so far, duplicates excluded.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Minimize the remaining edges and freeze the automaton.
    ///
    /// Duplicates discovered during minimization are dropped from the arena
    /// and the surviving nodes are renumbered in depth-first order.
    pub fn finish(mut self) -> Dawg {
        self.minimize(0);

        let created = self.nodes.len();
        let nodes = compact(self.nodes);
        debug!(
            words = self.word_count,
            nodes = nodes.len(),
            discarded = created - nodes.len(),
            "built dictionary automaton"
        );

        Dawg {
            nodes: Arc::new(nodes),
            word_count: self.word_count,
            max_word_length: self.max_word_length,
        }
    }
}

impl Default for DawgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep only the nodes reachable from the root, renumbered densely.
fn compact(nodes: Vec<GraphNode>) -> Vec<GraphNode> {
    let mut remap: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut order = vec![NodeId::ROOT];
    let mut stack = vec![NodeId::ROOT];
    remap.insert(NodeId::ROOT, NodeId::ROOT);

    while let Some(id) = stack.pop() {
        for &(_, child) in nodes[id.index()].edges() {
            if !remap.contains_key(&child) {
                remap.insert(child, NodeId(order.len()));
                order.push(child);
                stack.push(child);
            }
        }
    }

    order
        .into_iter()
        .map(|old| {
            let node = &nodes[old.index()];
            let edges = node
                .edges()
                .iter()
                .map(|&(label, child)| (label, remap[&child]))
                .collect();
            GraphNode::with_parts(remap[&old], node.is_final(), edges)
        })
        .collect()
}
