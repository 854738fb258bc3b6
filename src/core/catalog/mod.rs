//=========================================================================
// Catalog Navigation
//=========================================================================
//
// Category hierarchy and breadcrumb-style navigation.
//
// Architecture:
//   CatalogActivationController
//     ├─ tree: CatalogTree (arena of CatalogNode)
//     └─ active_path: Vec<NodeIndex>
//
// Flow:
//   activate_node() → active flags → visible_subcategories() → chips
//
//=========================================================================

//=== Module Declarations =================================================

mod activation;
mod label;
mod tree;

//=== Public API ==========================================================

pub use activation::{CatalogActivationController, SubcategoryChip};
pub use label::strip_count_suffix;
pub use tree::{BuildError, CatalogNode, CatalogTree, CategoryId, NodeIndex, RawCategory};
