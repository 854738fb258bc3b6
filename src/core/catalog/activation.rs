//=========================================================================
// Catalog Activation Controller
//=========================================================================
//
// Owns the catalog tree and the single active path through it.
//
// Architecture:
//   activate_node(id) → path_to(node) → clear old flags → set new flags
//                                      ↓
//   visible_subcategories() ← active_path (root first, scanned deepest first)
//
// The active path is kept as an owned sequence and reassigned as a whole
// on every activation, so reads never rescan the tree.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::label::strip_count_suffix;
use super::tree::{CatalogNode, CatalogTree, CategoryId, NodeIndex};

//=== SubcategoryChip =====================================================

/// A visible subcategory offered as a navigation chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryChip {
    pub id: CategoryId,
    pub node: NodeIndex,
    /// Label ready for display.
    pub label: String,
}

//=== CatalogActivationController =========================================

/// Maintains the active root-to-node path and derives chip navigation.
#[derive(Debug, Clone)]
pub struct CatalogActivationController {
    tree: CatalogTree,
    active_path: Vec<NodeIndex>,
    min_chips: usize,
    strip_counts: bool,
}

impl CatalogActivationController {
    /// Fewest visible subcategories worth rendering as chips.
    pub const DEFAULT_MIN_CHIPS: usize = 2;

    //--- Construction -----------------------------------------------------

    pub fn new(tree: CatalogTree) -> Self {
        Self {
            tree,
            active_path: Vec::new(),
            min_chips: Self::DEFAULT_MIN_CHIPS,
            strip_counts: true,
        }
    }

    /// Overrides the chip floor.
    ///
    /// # Panics
    ///
    /// Panics if `min_chips == 0`.
    pub fn with_min_chips(mut self, min_chips: usize) -> Self {
        assert!(min_chips > 0, "Chip floor must be positive");
        self.min_chips = min_chips;
        self
    }

    /// Enables or disables count-suffix stripping on chip labels.
    pub fn with_label_stripping(mut self, strip: bool) -> Self {
        self.strip_counts = strip;
        self
    }

    /// Swaps in a new tree and forgets the previous active path.
    pub fn replace_tree(&mut self, tree: CatalogTree) {
        self.tree = tree;
        self.active_path.clear();
    }

    //--- Activation -------------------------------------------------------

    /// Makes the path from the root to `id` the single active path.
    ///
    /// Returns `false` and leaves every flag untouched if `id` is not in
    /// the current tree.
    pub fn activate_node(&mut self, id: CategoryId) -> bool {
        let Some(target) = self.tree.find(id) else {
            debug!("Ignoring activation of unknown category {}", id);
            return false;
        };

        let path = self.tree.path_to(target);

        for &index in &self.active_path {
            self.tree.set_active(index, false);
        }
        for &index in &path {
            self.tree.set_active(index, true);
        }

        debug!("Activated category {} (depth {})", id, path.len());
        self.active_path = path;
        true
    }

    /// Clears the active path.
    pub fn deactivate(&mut self) {
        for &index in &self.active_path {
            self.tree.set_active(index, false);
        }
        self.active_path.clear();
    }

    //--- Visibility -------------------------------------------------------

    /// Changes a category's visibility flag.
    ///
    /// Chips are derived on read, so the change shows up on the next
    /// [`visible_subcategories`](Self::visible_subcategories) call.
    pub fn set_visible(&mut self, id: CategoryId, visible: bool) -> bool {
        self.tree.set_visible(id, visible)
    }

    /// Returns the chips for the current active path.
    ///
    /// Scans from the deepest active node toward the root and stops at the
    /// first branch with a visible child. Its visible children become the
    /// chips, in tree order; below the chip floor nothing is returned.
    pub fn visible_subcategories(&self) -> Vec<SubcategoryChip> {
        let Some(parent) = self.active_path.iter().rev().copied().find(|&index| {
            self.tree
                .get(index)
                .is_some_and(|node| node.is_branch() && self.has_visible_child(node))
        }) else {
            return Vec::new();
        };

        let chips: Vec<SubcategoryChip> = self
            .visible_children(parent)
            .map(|(index, node)| SubcategoryChip {
                id: node.id(),
                node: index,
                label: self.display_label(node).to_string(),
            })
            .collect();

        if chips.len() < self.min_chips {
            return Vec::new();
        }

        chips
    }

    //--- Queries ----------------------------------------------------------

    pub fn tree(&self) -> &CatalogTree {
        &self.tree
    }

    /// Active nodes, root first.
    pub fn active_path(&self) -> &[NodeIndex] {
        &self.active_path
    }

    /// Deepest active node.
    pub fn selected_node(&self) -> Option<&CatalogNode> {
        self.active_path.last().and_then(|&index| self.tree.get(index))
    }

    /// Display labels along the active path, root first.
    pub fn breadcrumb(&self) -> Vec<String> {
        self.active_path
            .iter()
            .filter_map(|&index| self.tree.get(index))
            .map(|node| self.display_label(node).to_string())
            .collect()
    }

    /// Label as shown to the user.
    pub fn display_label<'a>(&self, node: &'a CatalogNode) -> &'a str {
        if self.strip_counts {
            strip_count_suffix(node.label())
        } else {
            node.label()
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn has_visible_child(&self, node: &CatalogNode) -> bool {
        node.children()
            .iter()
            .filter_map(|&child| self.tree.get(child))
            .any(|child| child.is_visible())
    }

    fn visible_children(
        &self,
        parent: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, &CatalogNode)> {
        self.tree
            .get(parent)
            .map(|node| node.children())
            .unwrap_or(&[])
            .iter()
            .filter_map(|&index| self.tree.get(index).map(|node| (index, node)))
            .filter(|(_, node)| node.is_visible())
    }
}

impl Default for CatalogActivationController {
    fn default() -> Self {
        Self::new(CatalogTree::empty())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
