//! Graph nodes of the dictionary automaton.
//!
//! Nodes live in an arena owned by [`Dawg`](super::dawg::Dawg) (or by the
//! [`DawgBuilder`](super::dawg::DawgBuilder) while it is running) and refer to
//! each other through [`NodeId`] indices. A node never owns its children;
//! after minimization a child may be shared by any number of parents.

use smallvec::SmallVec;
use std::fmt;

/// Index of a node inside its automaton's arena.
///
/// The root is always [`NodeId::ROOT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Identity of the root node.
    pub const ROOT: NodeId = NodeId(0);

    /// Arena slot of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outgoing edges, sorted by label.
///
/// Most nodes of a natural-language dictionary have very few children, so the
/// first four edges are stored inline.
pub(crate) type Edges = SmallVec<[(char, NodeId); 4]>;

/// A single state of the dictionary automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    id: NodeId,
    is_final: bool,
    edges: Edges,
}

impl GraphNode {
    pub(crate) fn new(id: NodeId) -> Self {
        GraphNode {
            id,
            is_final: false,
            edges: Edges::new(),
        }
    }

    pub(crate) fn with_parts(id: NodeId, is_final: bool, edges: Edges) -> Self {
        GraphNode {
            id,
            is_final,
            edges,
        }
    }

    /// Arena identity of this node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// True if the path from the root to this node spells an accepted word.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub(crate) fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }

    /// Outgoing `(label, child)` edges in ascending label order.
    #[inline]
    pub fn edges(&self) -> &[(char, NodeId)] {
        &self.edges
    }

    /// Number of outgoing edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Follow the edge labelled `label`.
    #[inline]
    pub fn transition(&self, label: char) -> Option<NodeId> {
        self.edges
            .binary_search_by_key(&label, |&(c, _)| c)
            .ok()
            .map(|idx| self.edges[idx].1)
    }

    /// Add an edge, or redirect the existing edge with the same label.
    pub(crate) fn set_edge(&mut self, label: char, target: NodeId) {
        match self.edges.binary_search_by_key(&label, |&(c, _)| c) {
            Ok(idx) => self.edges[idx].1 = target,
            Err(idx) => self.edges.insert(idx, (label, target)),
        }
    }

    /// Structural key used to find equivalent nodes during minimization.
    ///
    /// Two nodes with equal signatures accept the same right language, as
    /// long as their children are already canonical.
    pub fn signature(&self) -> Signature {
        Signature {
            is_final: self.is_final,
            edges: self.edges.clone(),
        }
    }
}

/// Finality plus sorted edges of a node.
///
/// Renders as `1a3b7`: the final flag, then each label followed by the
/// child's id. The rendered form is for diagnostics only; hashing uses the
/// structured value, so labels that are digits cannot collide with ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    is_final: bool,
    edges: Edges,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_final { "1" } else { "0" })?;
        for (label, child) in &self.edges {
            write!(f, "{}{}", label, child)?;
        }
        Ok(())
    }
}
