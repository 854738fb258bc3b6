//=========================================================================
// Notification Queue
//=========================================================================
//
// Queue of state changes for the presentation layer.
//
// The session pushes notifications while it processes commands and
// collaborator events. Presentation drains them whenever it redraws.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::catalog::CategoryId;
use crate::core::purchase::{OfferId, PurchaseError};

//=== SessionNotification =================================================

/// A state change presentation may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionNotification {
    /// A new catalog snapshot was loaded (`node_count == 0` after fallback).
    CatalogOpened { node_count: usize },

    /// The active path now ends at this category.
    ActivePathChanged(CategoryId),

    /// No category is active any more.
    ActivePathCleared,

    /// Selected offers, in selection order.
    SelectionChanged(Vec<OfferId>),

    /// A purchase request was handed to commerce.
    PurchaseSubmitted(Vec<OfferId>),

    /// Commerce refused a purchase.
    PurchaseFailed(PurchaseError),

    /// Placement mode opened with this many items.
    PlacementStarted { remaining: u32 },

    /// One item placed, more to go.
    PlacementProgressed { remaining: u32 },

    /// Last item placed.
    PlacementFinished,

    /// User abandoned the remaining placements.
    PlacementCancelled,
}

//=== NotificationQueue ===================================================

/// FIFO queue of [`SessionNotification`]s.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    queue: Vec<SessionNotification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, notification: SessionNotification) {
        self.queue.push(notification);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SessionNotification> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all notifications, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SessionNotification> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
