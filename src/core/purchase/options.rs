//=========================================================================
// Purchase Options
//=========================================================================
//
// Per-interaction purchase state. Created empty, filled while the user
// picks offers and options, discarded on commit or cancel.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::offer::{OfferId, OfferPrice, PurchaseOffer};
use crate::core::id_set::IdSet;

//=== PreviewData =========================================================

/// Customization shown in the product preview (colour, variant).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewData {
    pub variant: Option<String>,
    pub color: Option<u32>,
}

//=== PurchaseOptions =====================================================

/// Options collected for the purchase currently being prepared.
#[derive(Debug, Clone)]
pub struct PurchaseOptions {
    pub(super) quantity: u32,
    pub(super) extra_data: Option<String>,
    pub(super) extra_param_required: bool,
    pub(super) preview_data: Option<PreviewData>,
    pub(super) selected: IdSet<OfferId>,
    pub(super) offers: HashMap<OfferId, PurchaseOffer>,
    pub(super) multi_select_mode: bool,
}

impl PurchaseOptions {
    pub fn new() -> Self {
        Self {
            quantity: 1,
            extra_data: None,
            extra_param_required: false,
            preview_data: None,
            selected: IdSet::new(),
            offers: HashMap::new(),
            multi_select_mode: false,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn extra_data(&self) -> Option<&str> {
        self.extra_data.as_deref()
    }

    pub fn extra_param_required(&self) -> bool {
        self.extra_param_required
    }

    pub fn preview_data(&self) -> Option<&PreviewData> {
        self.preview_data.as_ref()
    }

    pub fn multi_select_mode(&self) -> bool {
        self.multi_select_mode
    }

    /// Selected offer identifiers, in the order they were picked.
    pub fn selected(&self) -> &IdSet<OfferId> {
        &self.selected
    }

    pub fn is_selected(&self, id: OfferId) -> bool {
        self.selected.contains(id)
    }

    /// Selected offers, in the order they were picked.
    pub fn selected_offers(&self) -> impl Iterator<Item = &PurchaseOffer> {
        self.selected.iter().filter_map(|id| self.offers.get(&id))
    }

    /// Largest quantity the current selection allows.
    pub fn max_quantity(&self) -> u32 {
        self.selected_offers()
            .map(|offer| offer.max_quantity)
            .min()
            .unwrap_or(u32::MAX)
            .max(1)
    }

    /// Display total: every selected offer times the quantity.
    pub fn total_price(&self) -> OfferPrice {
        self.selected_offers()
            .map(|offer| offer.price * self.quantity)
            .fold(OfferPrice::FREE, |total, price| total + price)
    }

    /// True when the extra-data gate would let a commit through.
    pub fn has_required_extra_data(&self) -> bool {
        !self.extra_param_required
            || self
                .extra_data
                .as_deref()
                .is_some_and(|data| !data.trim().is_empty())
    }
}

impl Default for PurchaseOptions {
    fn default() -> Self {
        Self::new()
    }
}
