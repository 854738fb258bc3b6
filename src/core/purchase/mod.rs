//=========================================================================
// Purchase Selection
//=========================================================================
//
// Offer selection and purchase options for one purchase interaction.
//
// Flow:
//   select_offer() / set_*() → PurchaseOptions
//                                 ↓
//   commit_purchase() → CommitRequest → commerce collaborator
//
//=========================================================================

//=== Module Declarations =================================================

mod error;
mod offer;
mod options;
mod selection;

//=== Public API ==========================================================

pub use error::{PurchaseError, ValidationError};
pub use offer::{OfferId, OfferPrice, ProductInfo, PurchaseOffer};
pub use options::{PreviewData, PurchaseOptions};
pub use selection::PurchaseSelectionManager;
