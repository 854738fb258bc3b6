//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use catalog_navigator::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Session
pub use crate::{CatalogSession, CatalogSessionBuilder, SessionConfig, SessionError};

// Collaborators
pub use crate::core::bridge::{
    CollaboratorEvent, CommerceCollaborator, CommitRequest, PurchaseOutcome, WorldCollaborator,
};

// Catalog
pub use crate::core::catalog::{CategoryId, RawCategory, SubcategoryChip};

// Purchase
pub use crate::core::purchase::{OfferId, OfferPrice, ProductInfo, PurchaseError, PurchaseOffer};

// Placement
pub use crate::core::placement::PlacementState;

// Notifications
pub use crate::core::notification::SessionNotification;
