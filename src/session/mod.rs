//=========================================================================
// Catalog Session
//
// Single logical owner of catalog navigation, offer selection and
// multi-place for one open catalog.
//
// Architecture:
// ```text
//     CatalogSessionBuilder ──build()──> CatalogSession
//         │                                 ├─ CatalogActivationController
//         ├─ with_config()                  ├─ PurchaseSelectionManager
//         ├─ with_channel_capacity()        ├─ PlacementQueueController
//         └─ with_min_subcategory_chips()   ├─ EventCollector ←── collaborators
//                                           └─ NotificationQueue ──→ presentation
// ```
//
// Every command and every collaborator event is handled synchronously
// and completely before the next one, so no locking is involved.
//
//=========================================================================

//=== Module Declarations =================================================

mod config;

//=== External Dependencies ===============================================

use std::fmt;

use crossbeam_channel::Sender;
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::bridge::{
    CollaboratorEvent, CommerceCollaborator, CommitRequest, EventCollector, PurchaseOutcome,
    WorldCollaborator,
};
use crate::core::catalog::{
    BuildError, CatalogActivationController, CatalogTree, CategoryId, RawCategory,
    SubcategoryChip,
};
use crate::core::notification::{NotificationQueue, SessionNotification};
use crate::core::placement::{MoverCommand, PlacementError, PlacementQueueController};
use crate::core::purchase::{PreviewData, PurchaseError, PurchaseOffer, PurchaseSelectionManager};

//=== Public API ==========================================================

pub use config::{ConfigError, ConfigKey, SessionConfig};

//=== SessionError ========================================================

/// Errors surfaced by session commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Purchase(PurchaseError),
    Placement(PlacementError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Purchase(e) => write!(f, "{}", e),
            Self::Placement(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Purchase(e) => Some(e),
            Self::Placement(e) => Some(e),
        }
    }
}

impl From<PurchaseError> for SessionError {
    fn from(e: PurchaseError) -> Self {
        Self::Purchase(e)
    }
}

impl From<PlacementError> for SessionError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}

//=== CatalogSessionBuilder ===============================================

/// Builder for a [`CatalogSession`].
///
/// See [`SessionConfig`] for the defaults.
#[derive(Debug, Clone, Default)]
pub struct CatalogSessionBuilder {
    config: SessionConfig,
}

impl CatalogSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the collaborator channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    /// Sets how many collaborator events one [`CatalogSession::pump`]
    /// handles at most.
    ///
    /// # Panics
    ///
    /// Panics if `limit == 0`.
    pub fn with_max_events_per_pump(mut self, limit: usize) -> Self {
        assert!(limit > 0, "Pump limit must be positive");
        self.config.max_events_per_pump = limit;
        self
    }

    /// Sets the fewest visible subcategories shown as chips.
    ///
    /// # Panics
    ///
    /// Panics if `min == 0`.
    pub fn with_min_subcategory_chips(mut self, min: usize) -> Self {
        assert!(min > 0, "Chip floor must be positive");
        self.config.min_subcategory_chips = min;
        self
    }

    /// Builds the session around its two collaborators.
    ///
    /// The session starts with an empty catalog; call
    /// [`CatalogSession::open_catalog`] with a snapshot.
    pub fn build<C, W>(self, commerce: C, world: W) -> CatalogSession
    where
        C: CommerceCollaborator + 'static,
        W: WorldCollaborator + 'static,
    {
        let config = self.config;
        info!(
            "Building catalog session (channel: {}, pump limit: {})",
            config.channel_capacity, config.max_events_per_pump
        );

        CatalogSession {
            catalog: Self::catalog_controller(&config, CatalogTree::empty()),
            selection: PurchaseSelectionManager::new(),
            placement: PlacementQueueController::new(),
            collector: EventCollector::new(
                config.channel_capacity.max(1),
                config.max_events_per_pump.max(1),
            ),
            notifications: NotificationQueue::new(),
            outstanding_commits: 0,
            commerce: Box::new(commerce),
            world: Box::new(world),
            config,
        }
    }

    fn catalog_controller(config: &SessionConfig, tree: CatalogTree) -> CatalogActivationController {
        CatalogActivationController::new(tree)
            .with_min_chips(config.min_subcategory_chips.max(1))
            .with_label_stripping(config.strip_label_counts)
    }
}

//=== CatalogSession ======================================================

/// Catalog navigation, purchase selection and multi-place for one client.
///
/// Presentation issues commands directly; collaborators report outcomes
/// through [`event_sender`](Self::event_sender) and the session applies
/// them on [`pump`](Self::pump).
pub struct CatalogSession {
    config: SessionConfig,
    catalog: CatalogActivationController,
    selection: PurchaseSelectionManager,
    placement: PlacementQueueController,
    collector: EventCollector,
    notifications: NotificationQueue,
    outstanding_commits: u32,
    commerce: Box<dyn CommerceCollaborator>,
    world: Box<dyn WorldCollaborator>,
}

impl CatalogSession {
    //--- Event Intake -----------------------------------------------------

    /// Sender to hand to collaborators for outcome events.
    pub fn event_sender(&self) -> Sender<CollaboratorEvent> {
        self.collector.sender()
    }

    /// Applies pending collaborator events in arrival order.
    ///
    /// Handles at most `max_events_per_pump` events and returns how many
    /// were handled. Purchase failures are reported as
    /// [`SessionNotification::PurchaseFailed`].
    pub fn pump(&mut self) -> usize {
        let handled = self.collector.collect();

        for event in self.collector.take_batch() {
            self.dispatch(event);
        }

        handled
    }

    /// Collaborator events still waiting for a pump.
    pub fn pending_events(&self) -> usize {
        self.collector.pending()
    }

    //--- Catalog ----------------------------------------------------------

    /// Loads a category snapshot, replacing the current tree.
    ///
    /// Returns the node count.
    ///
    /// # Errors
    ///
    /// Returns the [`BuildError`] for a malformed snapshot. The session
    /// keeps running with an empty catalog in that case.
    pub fn open_catalog(&mut self, raw: Vec<RawCategory>) -> Result<usize, BuildError> {
        let (tree, result) = match CatalogTree::build(raw) {
            Ok(tree) => {
                let count = tree.len();
                (tree, Ok(count))
            }
            Err(e) => {
                error!("Catalog snapshot rejected, using empty catalog: {}", e);
                (CatalogTree::empty(), Err(e))
            }
        };

        info!("Catalog opened with {} categories", tree.len());
        self.notifications.push(SessionNotification::CatalogOpened {
            node_count: tree.len(),
        });
        self.catalog.replace_tree(tree);

        result
    }

    /// Activates a category; unknown ids are ignored.
    pub fn activate_node(&mut self, id: CategoryId) -> bool {
        let activated = self.catalog.activate_node(id);
        if activated {
            self.notifications
                .push(SessionNotification::ActivePathChanged(id));
        }
        activated
    }

    /// Clears the active path; no-op when nothing is active.
    pub fn deactivate_catalog(&mut self) {
        if self.catalog.active_path().is_empty() {
            return;
        }
        self.catalog.deactivate();
        self.notifications
            .push(SessionNotification::ActivePathCleared);
    }

    pub fn set_category_visible(&mut self, id: CategoryId, visible: bool) -> bool {
        self.catalog.set_visible(id, visible)
    }

    /// Chips for the current active path.
    pub fn visible_subcategories(&self) -> Vec<SubcategoryChip> {
        self.catalog.visible_subcategories()
    }

    pub fn catalog(&self) -> &CatalogActivationController {
        &self.catalog
    }

    //--- Purchase ---------------------------------------------------------

    /// Selects (single mode) or toggles (multi mode) an offer.
    pub fn select_offer(&mut self, offer: PurchaseOffer, multi_select_mode: bool) -> bool {
        let selected = self.selection.select_offer(offer, multi_select_mode);
        self.notifications.push(SessionNotification::SelectionChanged(
            self.selection.options().selected().to_vec(),
        ));
        selected
    }

    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), SessionError> {
        self.selection.set_quantity(quantity)?;
        Ok(())
    }

    pub fn set_extra_data(&mut self, value: impl Into<String>) {
        self.selection.set_extra_data(value);
    }

    pub fn set_extra_param_required(&mut self, required: bool) {
        self.selection.set_extra_param_required(required);
    }

    pub fn set_preview_data(&mut self, preview: Option<PreviewData>) {
        self.selection.set_preview_data(preview);
    }

    /// Sends the prepared purchase to commerce.
    ///
    /// The outcome arrives later as a collaborator event.
    pub fn commit_purchase(&mut self) -> Result<CommitRequest, SessionError> {
        let request = self.selection.commit_purchase(self.commerce.as_mut())?;
        self.outstanding_commits = self.outstanding_commits.saturating_add(1);
        self.notifications
            .push(SessionNotification::PurchaseSubmitted(request.offer_ids.clone()));
        Ok(request)
    }

    /// Discards the purchase being prepared.
    pub fn cancel_purchase(&mut self) {
        self.selection.cancel();
        self.notifications
            .push(SessionNotification::SelectionChanged(Vec::new()));
    }

    /// Applies a commerce outcome.
    ///
    /// Success with a positive placeable count arms multi-place; a count
    /// of zero or less just completes the purchase. Outcomes with no
    /// commit awaiting one are ignored.
    ///
    /// # Errors
    ///
    /// A commerce failure is returned unchanged as
    /// [`SessionError::Purchase`] and no placement is armed.
    pub fn on_purchase_outcome(&mut self, outcome: PurchaseOutcome) -> Result<(), SessionError> {
        if self.outstanding_commits == 0 {
            warn!("Ignoring purchase outcome with no commit pending: {:?}", outcome);
            return Ok(());
        }
        self.outstanding_commits -= 1;

        let placeable_count = match outcome.into_result() {
            Ok(count) => count,
            Err(e) => {
                info!("{}", e);
                self.notifications
                    .push(SessionNotification::PurchaseFailed(e.clone()));
                return Err(e.into());
            }
        };

        if placeable_count <= 0 {
            debug!("Purchase completed with nothing to place");
            return Ok(());
        }

        self.arm_placement(placeable_count)
    }

    /// Commits still waiting for a commerce outcome.
    pub fn pending_commits(&self) -> u32 {
        self.outstanding_commits
    }

    pub fn selection(&self) -> &PurchaseSelectionManager {
        &self.selection
    }

    //--- Placement --------------------------------------------------------

    /// Starts multi-place for `count` items.
    ///
    /// Ignored while already placing.
    pub fn arm_placement(&mut self, count: i64) -> Result<(), SessionError> {
        let command = self.placement.arm(count)?;
        if command.is_some() {
            self.notifications.push(SessionNotification::PlacementStarted {
                remaining: self.placement.remaining(),
            });
        }
        self.forward(command);
        Ok(())
    }

    /// World confirmed one placement; ignored while idle.
    pub fn on_item_placed(&mut self) {
        if !self.placement.is_armed() {
            self.placement.item_placed();
            return;
        }

        let command = self.placement.item_placed();
        let notification = match command {
            Some(_) => SessionNotification::PlacementFinished,
            None => SessionNotification::PlacementProgressed {
                remaining: self.placement.remaining(),
            },
        };
        self.notifications.push(notification);
        self.forward(command);
    }

    /// Abandons multi-place; no-op while idle.
    pub fn cancel_placement(&mut self) {
        let command = self.placement.cancel();
        if command.is_some() {
            self.notifications
                .push(SessionNotification::PlacementCancelled);
        }
        self.forward(command);
    }

    pub fn on_pointer_moved(&mut self, x: f32, y: f32) {
        self.placement.track_pointer(x, y);
    }

    pub fn placement(&self) -> &PlacementQueueController {
        &self.placement
    }

    //--- Presentation -----------------------------------------------------

    /// Takes every notification produced since the last call.
    pub fn take_notifications(&mut self) -> Vec<SessionNotification> {
        self.notifications.take()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    //--- Internal Helpers -------------------------------------------------

    fn dispatch(&mut self, event: CollaboratorEvent) {
        match event {
            CollaboratorEvent::Purchase(outcome) => {
                // Failures are already queued as notifications
                let _ = self.on_purchase_outcome(outcome);
            }
            CollaboratorEvent::ItemPlaced => self.on_item_placed(),
            CollaboratorEvent::PointerMoved { x, y } => self.on_pointer_moved(x, y),
        }
    }

    fn forward(&mut self, command: Option<MoverCommand>) {
        match command {
            Some(MoverCommand::EnterPlacementMode) => self.world.enter_placement_mode(),
            Some(MoverCommand::ExitPlacementMode) => self.world.exit_placement_mode(),
            None => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::core::placement::PlacementState;
    use crate::core::purchase::{OfferId, OfferPrice, ProductInfo, ValidationError};

    //--- Test Helpers -----------------------------------------------------

    #[derive(Clone, Default)]
    struct Commerce {
        sent: Arc<Mutex<Vec<CommitRequest>>>,
    }

    impl CommerceCollaborator for Commerce {
        fn submit(&mut self, request: CommitRequest) {
            self.sent.lock().unwrap().push(request);
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum WorldCall {
        Enter,
        Exit,
    }

    #[derive(Clone, Default)]
    struct World {
        calls: Arc<Mutex<Vec<WorldCall>>>,
    }

    impl WorldCollaborator for World {
        fn enter_placement_mode(&mut self) {
            self.calls.lock().unwrap().push(WorldCall::Enter);
        }

        fn exit_placement_mode(&mut self) {
            self.calls.lock().unwrap().push(WorldCall::Exit);
        }
    }

    fn session() -> (CatalogSession, Commerce, World) {
        let commerce = Commerce::default();
        let world = World::default();
        let session = CatalogSessionBuilder::new().build(commerce.clone(), world.clone());
        (session, commerce, world)
    }

    fn offer(id: u32) -> PurchaseOffer {
        PurchaseOffer::new(id, ProductInfo::new("chair", "Chair"), OfferPrice::credits(3))
    }

    fn commit_one(session: &mut CatalogSession) {
        session.select_offer(offer(10), false);
        session.commit_purchase().unwrap();
    }

    fn succeeded(placeable_count: i64) -> CollaboratorEvent {
        CollaboratorEvent::Purchase(PurchaseOutcome::Succeeded { placeable_count })
    }

    fn furniture_snapshot() -> Vec<RawCategory> {
        vec![
            RawCategory::new(1, None, "Root").branch(),
            RawCategory::new(2, Some(1), "Furniture").branch(),
            RawCategory::new(3, Some(2), "A"),
            RawCategory::new(4, Some(2), "B"),
            RawCategory::new(5, Some(2), "C").hidden(),
        ]
    }

    //--- Catalog ----------------------------------------------------------

    #[test]
    fn furniture_scenario_lists_visible_children() {
        let (mut session, _, _) = session();
        assert_eq!(session.open_catalog(furniture_snapshot()), Ok(5));

        assert!(session.activate_node(CategoryId(2)));

        let labels: Vec<_> = session
            .visible_subcategories()
            .into_iter()
            .map(|chip| chip.label)
            .collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn malformed_snapshot_falls_back_to_empty_catalog() {
        let (mut session, _, _) = session();
        session.open_catalog(furniture_snapshot()).unwrap();
        session.activate_node(CategoryId(2));

        let result = session.open_catalog(vec![
            RawCategory::new(1, None, "Root"),
            RawCategory::new(2, None, "Another root"),
        ]);

        assert!(result.is_err());
        assert!(session.catalog().tree().is_empty());
        assert!(session.catalog().active_path().is_empty());
        assert!(!session.activate_node(CategoryId(2)));
        assert!(session.take_notifications().contains(&SessionNotification::CatalogOpened {
            node_count: 0
        }));
    }

    #[test]
    fn deactivate_clears_active_path_once() {
        let (mut session, _, _) = session();
        session.open_catalog(furniture_snapshot()).unwrap();
        session.activate_node(CategoryId(2));
        session.take_notifications();

        session.deactivate_catalog();
        assert!(session.catalog().active_path().is_empty());
        assert!(session.visible_subcategories().is_empty());

        session.deactivate_catalog();
        assert_eq!(
            session.take_notifications(),
            vec![SessionNotification::ActivePathCleared]
        );
    }

    #[test]
    fn configured_chip_floor_is_applied() {
        let commerce = Commerce::default();
        let world = World::default();
        let mut session = CatalogSessionBuilder::new()
            .with_min_subcategory_chips(3)
            .build(commerce, world);

        session.open_catalog(furniture_snapshot()).unwrap();
        session.activate_node(CategoryId(2));
        assert!(session.visible_subcategories().is_empty());
    }

    //--- Purchase → Placement ---------------------------------------------

    #[test]
    fn multi_select_purchase_drains_through_placement() {
        let (mut session, commerce, world) = session();

        session.select_offer(offer(10), true);
        session.select_offer(offer(11), true);
        let request = session.commit_purchase().unwrap();
        assert_eq!(request.offer_ids, vec![OfferId(10), OfferId(11)]);
        assert_eq!(commerce.sent.lock().unwrap().len(), 1);

        let tx = session.event_sender();
        tx.send(CollaboratorEvent::Purchase(PurchaseOutcome::Succeeded {
            placeable_count: 2,
        }))
        .unwrap();
        session.pump();

        assert_eq!(session.placement().state(), PlacementState::Armed { remaining: 2 });
        assert_eq!(*world.calls.lock().unwrap(), vec![WorldCall::Enter]);

        tx.send(CollaboratorEvent::ItemPlaced).unwrap();
        tx.send(CollaboratorEvent::ItemPlaced).unwrap();
        assert_eq!(session.pump(), 2);

        assert_eq!(session.placement().state(), PlacementState::Idle);
        assert!(!session.placement().mover_requested());
        assert_eq!(
            *world.calls.lock().unwrap(),
            vec![WorldCall::Enter, WorldCall::Exit]
        );

        let notifications = session.take_notifications();
        assert!(notifications.contains(&SessionNotification::PlacementStarted { remaining: 2 }));
        assert!(notifications.contains(&SessionNotification::PlacementProgressed { remaining: 1 }));
        assert_eq!(notifications.last(), Some(&SessionNotification::PlacementFinished));
    }

    #[test]
    fn failed_purchase_never_arms_placement() {
        let (mut session, _, world) = session();
        commit_one(&mut session);

        let result = session.on_purchase_outcome(PurchaseOutcome::Failed {
            reason: "sold_out".to_string(),
        });

        assert_eq!(
            result,
            Err(SessionError::Purchase(PurchaseError::Rejected {
                reason: "sold_out".to_string()
            }))
        );
        assert_eq!(session.placement().state(), PlacementState::Idle);
        assert!(world.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn failed_purchase_via_channel_is_notified() {
        let (mut session, _, _) = session();
        commit_one(&mut session);
        session.take_notifications();
        session
            .event_sender()
            .send(CollaboratorEvent::Purchase(PurchaseOutcome::Failed {
                reason: "sold_out".to_string(),
            }))
            .unwrap();

        session.pump();

        assert_eq!(
            session.take_notifications(),
            vec![SessionNotification::PurchaseFailed(PurchaseError::Rejected {
                reason: "sold_out".to_string()
            })]
        );
    }

    #[test]
    fn zero_placeable_count_does_not_arm() {
        let (mut session, _, world) = session();
        commit_one(&mut session);

        assert!(session
            .on_purchase_outcome(PurchaseOutcome::Succeeded { placeable_count: 0 })
            .is_ok());
        assert!(!session.placement().is_armed());
        assert_eq!(session.pending_commits(), 0);
        assert!(world.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn commit_validation_error_is_surfaced() {
        let (mut session, commerce, _) = session();

        let err = session.commit_purchase().unwrap_err();
        assert_eq!(
            err,
            SessionError::Purchase(PurchaseError::Validation(ValidationError::EmptySelection))
        );
        assert!(commerce.sent.lock().unwrap().is_empty());
        assert_eq!(session.pending_commits(), 0);
    }

    //--- Placement Races --------------------------------------------------

    #[test]
    fn late_item_placed_after_cancel_is_ignored() {
        let (mut session, _, world) = session();
        session.arm_placement(3).unwrap();
        session.cancel_placement();
        session.take_notifications();

        session.event_sender().send(CollaboratorEvent::ItemPlaced).unwrap();
        session.pump();

        assert_eq!(session.placement().state(), PlacementState::Idle);
        assert!(session.take_notifications().is_empty());
        assert_eq!(
            *world.calls.lock().unwrap(),
            vec![WorldCall::Enter, WorldCall::Exit]
        );
    }

    #[test]
    fn second_purchase_while_placing_is_ignored() {
        let (mut session, _, world) = session();
        session.arm_placement(2).unwrap();
        commit_one(&mut session);

        session
            .on_purchase_outcome(PurchaseOutcome::Succeeded { placeable_count: 5 })
            .unwrap();

        assert_eq!(session.placement().remaining(), 2);
        assert_eq!(*world.calls.lock().unwrap(), vec![WorldCall::Enter]);
    }

    #[test]
    fn success_without_commit_is_ignored() {
        let (mut session, _, world) = session();

        session.event_sender().send(succeeded(4)).unwrap();
        session.pump();

        assert_eq!(session.placement().state(), PlacementState::Idle);
        assert!(world.calls.lock().unwrap().is_empty());
        assert!(session.take_notifications().is_empty());
    }

    #[test]
    fn duplicate_success_after_cancel_does_not_rearm() {
        let (mut session, _, world) = session();
        commit_one(&mut session);

        let tx = session.event_sender();
        tx.send(succeeded(4)).unwrap();
        session.pump();
        assert_eq!(session.placement().remaining(), 4);

        session.cancel_placement();
        tx.send(succeeded(4)).unwrap();
        session.pump();

        assert_eq!(session.placement().state(), PlacementState::Idle);
        assert_eq!(
            *world.calls.lock().unwrap(),
            vec![WorldCall::Enter, WorldCall::Exit]
        );
    }

    #[test]
    fn each_commit_accepts_one_outcome() {
        let (mut session, _, _) = session();
        commit_one(&mut session);
        commit_one(&mut session);
        assert_eq!(session.pending_commits(), 2);

        let tx = session.event_sender();
        tx.send(succeeded(0)).unwrap();
        tx.send(succeeded(0)).unwrap();
        tx.send(succeeded(3)).unwrap();
        session.pump();

        assert_eq!(session.pending_commits(), 0);
        assert!(!session.placement().is_armed());
    }

    #[test]
    fn oversized_placeable_count_is_surfaced() {
        let (mut session, _, world) = session();
        commit_one(&mut session);

        assert_eq!(
            session.on_purchase_outcome(PurchaseOutcome::Succeeded {
                placeable_count: 5_000_000_000
            }),
            Err(SessionError::Placement(PlacementError::CountTooLarge {
                count: 5_000_000_000
            }))
        );
        assert!(!session.placement().is_armed());
        assert!(world.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn invalid_arm_is_surfaced() {
        let (mut session, _, world) = session();

        assert_eq!(
            session.arm_placement(0),
            Err(SessionError::Placement(PlacementError::InvalidArgument { count: 0 }))
        );
        assert!(world.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn pointer_events_feed_mover_feedback() {
        let (mut session, _, _) = session();
        session.arm_placement(1).unwrap();

        let tx = session.event_sender();
        tx.send(CollaboratorEvent::PointerMoved { x: 4.0, y: 2.0 }).unwrap();
        tx.send(CollaboratorEvent::PointerMoved { x: 6.0, y: 3.0 }).unwrap();
        session.pump();

        assert_eq!(session.placement().pointer().position(), Some((6.0, 3.0)));
        assert_eq!(session.placement().pointer().delta(), (2.0, 1.0));
    }

    #[test]
    fn pump_respects_configured_limit() {
        let mut session = CatalogSessionBuilder::new()
            .with_max_events_per_pump(1)
            .build(Commerce::default(), World::default());
        session.arm_placement(3).unwrap();

        let tx = session.event_sender();
        tx.send(CollaboratorEvent::ItemPlaced).unwrap();
        tx.send(CollaboratorEvent::ItemPlaced).unwrap();

        assert_eq!(session.pump(), 1);
        assert_eq!(session.placement().remaining(), 2);
        assert_eq!(session.pending_events(), 1);
        assert_eq!(session.pump(), 1);
        assert_eq!(session.placement().remaining(), 1);
    }
}
