//=========================================================================
// Purchase Selection Manager
//=========================================================================
//
// Tracks which offers are selected and the options of the purchase
// being prepared.
//
// Selection modes:
//   single → selection replaced by {offer}
//   multi  → offer toggled in/out of the selection
//
// Derived state (extra-data gate, quantity range) is recomputed after
// every selection change.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::error::{PurchaseError, ValidationError};
use super::offer::{OfferPrice, PurchaseOffer};
use super::options::{PreviewData, PurchaseOptions};
use crate::core::bridge::{CommerceCollaborator, CommitRequest};
use crate::core::id_set::IdSet;

//=== PurchaseSelectionManager ============================================

/// Selection and option bookkeeping for one purchase at a time.
#[derive(Debug, Default)]
pub struct PurchaseSelectionManager {
    options: PurchaseOptions,
    force_extra_param: bool,
}

impl PurchaseSelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Selection --------------------------------------------------------

    /// Selects an offer.
    ///
    /// In single-select mode the selection becomes exactly `{offer}`. In
    /// multi-select mode the offer is toggled. Returns whether the offer
    /// is selected afterwards.
    pub fn select_offer(&mut self, offer: PurchaseOffer, multi_select_mode: bool) -> bool {
        let id = offer.id;
        let options = &mut self.options;
        options.multi_select_mode = multi_select_mode;

        let selected = if !multi_select_mode {
            options.selected = IdSet::singleton(id);
            options.offers.clear();
            options.offers.insert(id, offer);
            true
        } else if options.selected.contains(id) {
            options.selected = options.selected.without(id);
            options.offers.remove(&id);
            false
        } else {
            options.selected = options.selected.with(id);
            options.offers.insert(id, offer);
            true
        };

        debug!(
            "{} {} ({} selected)",
            if selected { "Selected" } else { "Deselected" },
            id,
            self.options.selected.len()
        );

        self.refresh_derived();
        selected
    }

    //--- Options ----------------------------------------------------------

    pub fn set_extra_data(&mut self, value: impl Into<String>) {
        self.options.extra_data = Some(value.into());
    }

    /// Forces the extra-data gate on top of what the selection requires.
    pub fn set_extra_param_required(&mut self, required: bool) {
        self.force_extra_param = required;
        self.refresh_derived();
    }

    pub fn set_preview_data(&mut self, preview: Option<PreviewData>) {
        self.options.preview_data = preview;
    }

    /// Sets the quantity.
    ///
    /// # Errors
    ///
    /// [`ValidationError::QuantityOutOfRange`] if `quantity` is zero or
    /// above the limit of any selected offer. The previous quantity stays.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), PurchaseError> {
        let max = self.options.max_quantity();
        if quantity == 0 || quantity > max {
            return Err(ValidationError::QuantityOutOfRange {
                requested: quantity,
                max,
            }
            .into());
        }
        self.options.quantity = quantity;
        Ok(())
    }

    //--- Commit / Cancel --------------------------------------------------

    /// Sends the prepared purchase to the commerce collaborator.
    ///
    /// On success the options are discarded and the request that was sent
    /// is returned. Currency and inventory are not touched locally.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptySelection`] or
    /// [`ValidationError::MissingExtraData`]; nothing is sent and the
    /// options are kept.
    pub fn commit_purchase(
        &mut self,
        commerce: &mut dyn CommerceCollaborator,
    ) -> Result<CommitRequest, PurchaseError> {
        self.validate()?;

        let options = std::mem::take(&mut self.options);
        self.force_extra_param = false;

        let request = CommitRequest {
            offer_ids: options.selected.to_vec(),
            quantity: options.quantity,
            extra_data: options.extra_data,
            preview_data: options.preview_data,
        };

        info!(
            "Committing purchase of {} offer(s) x{}",
            request.offer_ids.len(),
            request.quantity
        );
        commerce.submit(request.clone());

        Ok(request)
    }

    /// Discards the current options.
    pub fn cancel(&mut self) {
        if !self.options.selected.is_empty() {
            debug!("Purchase cancelled, dropping {} selected", self.options.selected.len());
        }
        self.options = PurchaseOptions::new();
        self.force_extra_param = false;
    }

    //--- Queries ----------------------------------------------------------

    pub fn options(&self) -> &PurchaseOptions {
        &self.options
    }

    pub fn selected_offers(&self) -> impl Iterator<Item = &PurchaseOffer> {
        self.options.selected_offers()
    }

    pub fn total_price(&self) -> OfferPrice {
        self.options.total_price()
    }

    //--- Internal Helpers -------------------------------------------------

    fn validate(&self) -> Result<(), ValidationError> {
        if self.options.selected.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        if !self.options.has_required_extra_data() {
            return Err(ValidationError::MissingExtraData);
        }
        Ok(())
    }

    fn refresh_derived(&mut self) {
        let options = &mut self.options;

        options.extra_param_required = self.force_extra_param
            || options.selected_offers().any(|offer| offer.requires_extra_data());

        let max = options.max_quantity();
        options.quantity = options.quantity.clamp(1, max);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::purchase::{OfferId, ProductInfo};

    //--- Test Helpers -----------------------------------------------------

    #[derive(Default)]
    struct RecordingCommerce {
        sent: Vec<CommitRequest>,
    }

    impl CommerceCollaborator for RecordingCommerce {
        fn submit(&mut self, request: CommitRequest) {
            self.sent.push(request);
        }
    }

    fn offer(id: u32) -> PurchaseOffer {
        PurchaseOffer::new(
            id,
            ProductInfo::new(format!("item_{}", id), format!("Item {}", id)),
            OfferPrice::credits(u64::from(id)),
        )
        .with_max_quantity(10)
    }

    fn trophy(id: u32) -> PurchaseOffer {
        let mut offer = offer(id);
        offer.product.requires_extra_data = true;
        offer
    }

    fn selected_ids(manager: &PurchaseSelectionManager) -> Vec<u32> {
        manager.selected_offers().map(|o| o.id.0).collect()
    }

    //--- Selection --------------------------------------------------------

    #[test]
    fn single_select_replaces_selection() {
        let mut manager = PurchaseSelectionManager::new();

        assert!(manager.select_offer(offer(1), false));
        assert!(manager.select_offer(offer(2), false));
        assert_eq!(selected_ids(&manager), vec![2]);

        // Re-selecting in single mode keeps it selected
        assert!(manager.select_offer(offer(2), false));
        assert_eq!(selected_ids(&manager), vec![2]);
    }

    #[test]
    fn multi_select_toggles_and_keeps_order() {
        let mut manager = PurchaseSelectionManager::new();

        manager.select_offer(offer(3), true);
        manager.select_offer(offer(1), true);
        manager.select_offer(offer(2), true);
        assert_eq!(selected_ids(&manager), vec![3, 1, 2]);

        assert!(!manager.select_offer(offer(1), true));
        assert_eq!(selected_ids(&manager), vec![3, 2]);
        assert!(manager.options().multi_select_mode());
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut manager = PurchaseSelectionManager::new();
        manager.select_offer(offer(1), true);
        manager.select_offer(offer(2), true);
        let before = manager.options().selected().clone();

        manager.select_offer(offer(7), true);
        manager.select_offer(offer(7), true);
        assert_eq!(manager.options().selected(), &before);

        manager.select_offer(offer(1), true);
        manager.select_offer(offer(1), true);
        assert_eq!(manager.options().selected(), &before);
    }

    #[test]
    fn single_select_after_multi_collapses_to_one() {
        let mut manager = PurchaseSelectionManager::new();
        manager.select_offer(offer(1), true);
        manager.select_offer(offer(2), true);

        manager.select_offer(offer(5), false);
        assert_eq!(selected_ids(&manager), vec![5]);
        assert!(!manager.options().multi_select_mode());
    }

    //--- Options ----------------------------------------------------------

    #[test]
    fn extra_param_follows_selection() {
        let mut manager = PurchaseSelectionManager::new();

        manager.select_offer(trophy(1), true);
        assert!(manager.options().extra_param_required());

        manager.select_offer(trophy(1), true);
        assert!(!manager.options().extra_param_required());

        manager.set_extra_param_required(true);
        assert!(manager.options().extra_param_required());
    }

    #[test]
    fn quantity_respects_offer_limit() {
        let mut manager = PurchaseSelectionManager::new();
        manager.select_offer(offer(1), false);

        assert!(manager.set_quantity(10).is_ok());
        assert_eq!(manager.options().quantity(), 10);

        let err = manager.set_quantity(11).unwrap_err();
        assert_eq!(
            err,
            PurchaseError::Validation(ValidationError::QuantityOutOfRange {
                requested: 11,
                max: 10
            })
        );
        assert_eq!(manager.options().quantity(), 10);

        assert!(manager.set_quantity(0).is_err());
    }

    #[test]
    fn quantity_is_clamped_when_selection_narrows_limit() {
        let mut manager = PurchaseSelectionManager::new();
        manager.select_offer(offer(1), true);
        manager.set_quantity(8).unwrap();

        manager.select_offer(offer(2).with_max_quantity(3), true);
        assert_eq!(manager.options().quantity(), 3);
    }

    #[test]
    fn total_price_multiplies_by_quantity() {
        let mut manager = PurchaseSelectionManager::new();
        manager.select_offer(offer(2), true);
        manager.select_offer(offer(5), true);
        manager.set_quantity(3).unwrap();

        assert_eq!(manager.total_price().credits, 21);
    }

    //--- Commit -----------------------------------------------------------

    #[test]
    fn commit_sends_request_and_discards_options() {
        let mut manager = PurchaseSelectionManager::new();
        let mut commerce = RecordingCommerce::default();

        manager.select_offer(offer(4), true);
        manager.select_offer(offer(9), true);
        manager.set_quantity(2).unwrap();
        manager.set_preview_data(Some(PreviewData {
            variant: None,
            color: Some(0xff0000),
        }));

        let request = manager.commit_purchase(&mut commerce).unwrap();

        assert_eq!(request.offer_ids, vec![OfferId(4), OfferId(9)]);
        assert_eq!(request.quantity, 2);
        assert_eq!(request.preview_data.unwrap().color, Some(0xff0000));
        assert_eq!(commerce.sent.len(), 1);
        assert!(manager.options().selected().is_empty());
        assert_eq!(manager.options().quantity(), 1);
    }

    #[test]
    fn commit_without_selection_is_rejected() {
        let mut manager = PurchaseSelectionManager::new();
        let mut commerce = RecordingCommerce::default();

        let err = manager.commit_purchase(&mut commerce).unwrap_err();
        assert_eq!(err, PurchaseError::Validation(ValidationError::EmptySelection));
        assert!(commerce.sent.is_empty());
    }

    #[test]
    fn commit_requires_extra_data_when_gated() {
        let mut manager = PurchaseSelectionManager::new();
        let mut commerce = RecordingCommerce::default();
        manager.select_offer(trophy(1), false);

        let err = manager.commit_purchase(&mut commerce).unwrap_err();
        assert_eq!(err, PurchaseError::Validation(ValidationError::MissingExtraData));

        manager.set_extra_data("   ");
        assert!(manager.commit_purchase(&mut commerce).is_err());

        // Failed commits leave the options in place
        assert_eq!(selected_ids(&manager), vec![1]);
        assert!(commerce.sent.is_empty());

        manager.set_extra_data("Best builder 2026");
        let request = manager.commit_purchase(&mut commerce).unwrap();
        assert_eq!(request.extra_data.as_deref(), Some("Best builder 2026"));
    }

    #[test]
    fn cancel_discards_options() {
        let mut manager = PurchaseSelectionManager::new();
        manager.select_offer(offer(1), true);
        manager.set_extra_data("note");
        manager.set_extra_param_required(true);

        manager.cancel();

        assert!(manager.options().selected().is_empty());
        assert!(manager.options().extra_data().is_none());
        assert!(!manager.options().extra_param_required());
    }
}
