//=========================================================================
// Catalog Tree
//=========================================================================
//
// Arena-backed category hierarchy built once per catalog snapshot.
//
// Architecture:
//   Vec<RawCategory> → build() → nodes: Vec<CatalogNode>
//                                  ├─ parent: Option<NodeIndex>
//                                  └─ children: Vec<NodeIndex>
//
// The shape never changes after build(). Only the visibility and active
// flags are mutable, and the active flag is owned by the activation
// controller.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, VecDeque};
use std::fmt;

//=== Identifiers =========================================================

/// Server-side category (page) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position of a node inside its tree's arena.
///
/// Only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex(usize);

//=== RawCategory =========================================================

/// One entry of the category snapshot supplied by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCategory {
    pub id: CategoryId,
    /// `None` marks the root.
    pub parent_id: Option<CategoryId>,
    pub label: String,
    pub is_branch: bool,
    pub is_visible: bool,
}

impl RawCategory {
    pub fn new(id: u32, parent_id: Option<u32>, label: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            parent_id: parent_id.map(CategoryId),
            label: label.into(),
            is_branch: false,
            is_visible: true,
        }
    }

    pub fn branch(mut self) -> Self {
        self.is_branch = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }
}

//=== BuildError ==========================================================

/// Malformed category snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No entry without a parent.
    MissingRoot,

    /// More than one entry without a parent.
    MultipleRoots(CategoryId, CategoryId),

    /// The same identifier appears twice.
    DuplicateId(CategoryId),

    /// A parent identifier that is not part of the snapshot.
    DanglingParent { id: CategoryId, parent: CategoryId },

    /// Entry whose parent chain never reaches the root.
    Cycle(CategoryId),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRoot => write!(f, "Category snapshot has no root"),
            Self::MultipleRoots(a, b) => {
                write!(f, "Category snapshot has several roots ({} and {})", a, b)
            }
            Self::DuplicateId(id) => write!(f, "Category {} appears more than once", id),
            Self::DanglingParent { id, parent } => {
                write!(f, "Category {} references unknown parent {}", id, parent)
            }
            Self::Cycle(id) => write!(f, "Category {} is part of a parent cycle", id),
        }
    }
}

impl std::error::Error for BuildError {}

//=== CatalogNode =========================================================

/// A category in the tree.
#[derive(Debug, Clone)]
pub struct CatalogNode {
    id: CategoryId,
    parent_id: Option<CategoryId>,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
    label: String,
    is_branch: bool,
    is_visible: bool,
    is_active: bool,
}

impl CatalogNode {
    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn parent_id(&self) -> Option<CategoryId> {
        self.parent_id
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Children in snapshot order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Raw label as supplied by the server.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_branch(&self) -> bool {
        self.is_branch
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

//=== CatalogTree =========================================================

/// Immutable-shape category hierarchy.
#[derive(Debug, Clone, Default)]
pub struct CatalogTree {
    nodes: Vec<CatalogNode>,
    lookup: HashMap<CategoryId, NodeIndex>,
    root: Option<NodeIndex>,
}

impl CatalogTree {
    //--- Construction -----------------------------------------------------

    /// Creates a tree with no nodes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a tree from a category snapshot.
    ///
    /// Children keep the order in which they appear in `raw`. An empty
    /// snapshot yields an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] for duplicate identifiers, a missing or
    /// repeated root, unknown parents and parent cycles.
    pub fn build(raw: Vec<RawCategory>) -> Result<Self, BuildError> {
        if raw.is_empty() {
            return Ok(Self::empty());
        }

        let mut lookup = HashMap::with_capacity(raw.len());
        let mut root = None;

        for (position, entry) in raw.iter().enumerate() {
            if lookup.insert(entry.id, NodeIndex(position)).is_some() {
                return Err(BuildError::DuplicateId(entry.id));
            }
            if entry.parent_id.is_none() {
                if let Some(NodeIndex(first)) = root {
                    return Err(BuildError::MultipleRoots(raw[first].id, entry.id));
                }
                root = Some(NodeIndex(position));
            }
        }

        let root = root.ok_or(BuildError::MissingRoot)?;

        let mut nodes: Vec<CatalogNode> = raw
            .into_iter()
            .map(|entry| CatalogNode {
                id: entry.id,
                parent_id: entry.parent_id,
                parent: None,
                children: Vec::new(),
                label: entry.label,
                is_branch: entry.is_branch,
                is_visible: entry.is_visible,
                is_active: false,
            })
            .collect();

        // Link parents and children
        for position in 0..nodes.len() {
            let Some(parent_id) = nodes[position].parent_id else {
                continue;
            };
            let parent = *lookup.get(&parent_id).ok_or(BuildError::DanglingParent {
                id: nodes[position].id,
                parent: parent_id,
            })?;

            nodes[position].parent = Some(parent);
            nodes[parent.0].children.push(NodeIndex(position));
        }

        // Every node must hang off the root; the rest loop among themselves
        let mut reached = vec![false; nodes.len()];
        let mut pending = VecDeque::from([root]);
        while let Some(NodeIndex(position)) = pending.pop_front() {
            if std::mem::replace(&mut reached[position], true) {
                continue;
            }
            pending.extend(nodes[position].children.iter().copied());
        }

        if let Some(position) = reached.iter().position(|&r| !r) {
            return Err(BuildError::Cycle(nodes[position].id));
        }

        Ok(Self {
            nodes,
            lookup,
            root: Some(root),
        })
    }

    //--- Queries ----------------------------------------------------------

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: NodeIndex) -> Option<&CatalogNode> {
        self.nodes.get(index.0)
    }

    /// Resolves a server identifier to its node index.
    pub fn find(&self, id: CategoryId) -> Option<NodeIndex> {
        self.lookup.get(&id).copied()
    }

    pub fn node(&self, id: CategoryId) -> Option<&CatalogNode> {
        self.find(id).and_then(|index| self.get(index))
    }

    /// Iterates all nodes in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &CatalogNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (NodeIndex(position), node))
    }

    /// Returns the nodes from the root down to `index`, root first.
    ///
    /// Empty if `index` does not belong to this tree.
    pub fn path_to(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut path = Vec::new();
        let mut cursor = self.get(index).map(|_| index);

        while let Some(current) = cursor {
            path.push(current);
            cursor = self.nodes[current.0].parent;
        }

        path.reverse();
        path
    }

    //--- Mutable Flags ----------------------------------------------------

    /// Changes the visibility flag of a category.
    ///
    /// Returns `false` if the category is unknown.
    pub fn set_visible(&mut self, id: CategoryId, visible: bool) -> bool {
        match self.find(id) {
            Some(NodeIndex(position)) => {
                self.nodes[position].is_visible = visible;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_active(&mut self, index: NodeIndex, active: bool) {
        if let Some(node) = self.nodes.get_mut(index.0) {
            node.is_active = active;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
