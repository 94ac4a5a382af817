//! The syntax tree arena.
//!
//! Nodes live in parallel vectors indexed by [`NodeId`]. Child links are
//! owned by each node's [`NodeKind`]; parent links are plain indices kept
//! alongside, so ancestor walks are O(depth) without reference cycles.
//!
//! Mutation happens only through [`SyntaxTree::replace_in_tree`], which
//! swaps one child slot and detaches the old subtree. Detached nodes keep
//! their slots, so handles collected before a mutation stay meaningful.

use std::vec;

use crate::error::TreeError;
use crate::kind::{NodeKind, NodeTag};
use crate::literal::ConstValue;
use crate::stack::ensure_sufficient_stack;
use crate::ty::Type;
use crate::{NodeId, Span};

/// Handle of the root `Module`; always the first node allocated.
const ROOT: NodeId = NodeId::new(0);

/// Convert a node count to `u32`, panicking on overflow.
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("syntax tree exceeds u32::MAX nodes"))
}

/// Whether `tag` passes a variant-set filter. An empty set matches all.
fn tag_matches(tags: &[NodeTag], tag: NodeTag) -> bool {
    tags.is_empty() || tags.contains(&tag)
}

/// A syntax tree rooted at a `Module` node.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    kinds: Vec<NodeKind>,
    spans: Vec<Span>,
    /// `NodeId::INVALID` for the root and for detached subtree roots.
    parents: Vec<NodeId>,
    /// Type metadata slot, populated by the type system or the folder.
    types: Vec<Option<Type>>,
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxTree {
    /// Create a tree holding an empty `Module`.
    pub fn new() -> Self {
        let mut tree = SyntaxTree {
            kinds: Vec::new(),
            spans: Vec::new(),
            parents: Vec::new(),
            types: Vec::new(),
        };
        tree.alloc(NodeKind::Module { body: Vec::new() }, Span::DUMMY);
        tree
    }

    #[inline]
    pub const fn root(&self) -> NodeId {
        ROOT
    }

    /// Allocate a node and link its children to it.
    ///
    /// Callers must pass only parentless children: freshly allocated nodes,
    /// or the root of a subtree detached by [`SyntaxTree::replace_in_tree`].
    /// A node has at most one parent, and the tree does not re-check this in
    /// release builds.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if a child already has a parent or is the
    /// module root.
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId::new(to_u32(self.kinds.len()));
        for child in kind.children() {
            debug_assert!(
                !self.parents[child.index()].is_valid() && child != ROOT,
                "{child:?} already has a parent"
            );
            self.parents[child.index()] = id;
        }
        self.kinds.push(kind);
        self.spans.push(span);
        self.parents.push(NodeId::INVALID);
        self.types.push(None);
        id
    }

    /// Append a top-level statement to the module body.
    pub fn push_stmt(&mut self, stmt: NodeId) -> Result<(), TreeError> {
        if stmt == ROOT || self.parents[stmt.index()].is_valid() {
            return Err(TreeError::AlreadyAttached { node: stmt });
        }
        if let NodeKind::Module { body } = &mut self.kinds[ROOT.index()] {
            body.push(stmt);
        }
        self.parents[stmt.index()] = ROOT;
        Ok(())
    }

    // Accessors

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.kinds[id.index()]
    }

    #[inline]
    pub fn tag(&self, id: NodeId) -> NodeTag {
        self.kinds[id.index()].tag()
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.spans[id.index()]
    }

    /// Parent of a node; `None` for the root and for detached nodes.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parents[id.index()];
        parent.is_valid().then_some(parent)
    }

    #[inline]
    pub fn ty(&self, id: NodeId) -> Option<&Type> {
        self.types[id.index()].as_ref()
    }

    pub fn set_ty(&mut self, id: NodeId, ty: Type) {
        self.types[id.index()] = Some(ty);
    }

    /// Direct children in document order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.kinds[id.index()].children()
    }

    // Traversal

    /// Direct children whose variant is in `tags` (all children if empty).
    pub fn get_children(&self, id: NodeId, tags: &[NodeTag]) -> Vec<NodeId> {
        self.children(id)
            .into_iter()
            .filter(|&child| tag_matches(tags, self.tag(child)))
            .collect()
    }

    /// Descendants of `id` (excluding `id`) whose variant is in `tags`.
    ///
    /// The result is a snapshot taken before iteration starts, in pre-order
    /// document order or, with `reverse`, the exact reverse of it. Reverse
    /// order visits every node before its ancestors and its left siblings,
    /// so a caller may replace the node it is visiting without disturbing
    /// the entries still to come.
    pub fn get_descendants(&self, id: NodeId, tags: &[NodeTag], reverse: bool) -> Descendants {
        self.get_descendants_where(id, tags, reverse, |_, _| true)
    }

    /// Like [`get_descendants`](Self::get_descendants), additionally
    /// filtered by a predicate over the node.
    pub fn get_descendants_where(
        &self,
        id: NodeId,
        tags: &[NodeTag],
        reverse: bool,
        predicate: impl Fn(NodeId, &NodeKind) -> bool,
    ) -> Descendants {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            let kind = self.kind(node);
            if tag_matches(tags, kind.tag()) && predicate(node, kind) {
                found.push(node);
            }
            stack.extend(kind.children().into_iter().rev());
        }
        if reverse {
            found.reverse();
        }
        Descendants {
            inner: found.into_iter(),
        }
    }

    /// Nearest proper ancestor whose variant is in `tags` (the direct
    /// parent if empty).
    pub fn get_ancestor(&self, id: NodeId, tags: &[NodeTag]) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if tag_matches(tags, self.tag(node)) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Whether `id` is `ancestor` or lies inside its subtree.
    pub fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Whether the parent chain of `id` reaches the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.is_within(id, ROOT)
    }

    // Mutation

    /// Put `new` in the child slot currently holding `old`.
    ///
    /// `old` and its subtree are detached but stay allocated. `new` must be
    /// parentless.
    pub fn replace_in_tree(&mut self, old: NodeId, new: NodeId) -> Result<(), TreeError> {
        if old == ROOT {
            return Err(TreeError::ReplaceRoot);
        }
        if !self.is_attached(old) {
            return Err(TreeError::Detached { node: old });
        }
        if new == ROOT || self.parent(new).is_some() {
            return Err(TreeError::AlreadyAttached { node: new });
        }
        let parent = self.parents[old.index()];
        if !self.kinds[parent.index()].replace_child(old, new) {
            return Err(TreeError::NotAChild { parent, node: old });
        }
        self.parents[new.index()] = parent;
        self.parents[old.index()] = NodeId::INVALID;
        Ok(())
    }

    /// Allocate a parentless node carrying `template`'s source position.
    pub fn from_node(&mut self, template: NodeId, kind: NodeKind) -> NodeId {
        let span = self.span(template);
        self.alloc(kind, span)
    }

    /// Clone the subtree rooted at `node` into fresh, parentless nodes that
    /// all carry `template`'s source position. Type slots are copied.
    pub fn copy_subtree(&mut self, template: NodeId, node: NodeId) -> NodeId {
        ensure_sufficient_stack(|| {
            let mut kind = self.kind(node).clone();
            for child in kind.children() {
                let copy = self.copy_subtree(template, child);
                kind.replace_child(child, copy);
            }
            let copy = self.from_node(template, kind);
            self.types[copy.index()] = self.types[node.index()].clone();
            copy
        })
    }

    // Literal values

    /// The statically known value of `id`: a literal, or a list whose
    /// elements are (recursively) literal lists or literals.
    pub fn const_value(&self, id: NodeId) -> Option<ConstValue> {
        ensure_sufficient_stack(|| match self.kind(id) {
            NodeKind::Literal(lit) => Some(ConstValue::Literal(lit.clone())),
            NodeKind::List { elements } => elements
                .iter()
                .map(|&element| self.const_value(element))
                .collect::<Option<Vec<_>>>()
                .map(ConstValue::List),
            _ => None,
        })
    }

    /// Materialize `value` as parentless nodes carrying `template`'s source
    /// position. Type slots are left empty.
    pub fn alloc_const(&mut self, template: NodeId, value: &ConstValue) -> NodeId {
        ensure_sufficient_stack(|| match value {
            ConstValue::Literal(lit) => self.from_node(template, NodeKind::Literal(lit.clone())),
            ConstValue::List(items) => {
                let elements = items
                    .iter()
                    .map(|item| self.alloc_const(template, item))
                    .collect();
                self.from_node(template, NodeKind::List { elements })
            }
        })
    }
}

/// Snapshot of node handles produced by
/// [`SyntaxTree::get_descendants`]. Cloning restarts from the current
/// position.
#[derive(Clone, Debug)]
pub struct Descendants {
    inner: vec::IntoIter<NodeId>,
}

impl Iterator for Descendants {
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Descendants {
    #[inline]
    fn next_back(&mut self) -> Option<NodeId> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Descendants {}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
