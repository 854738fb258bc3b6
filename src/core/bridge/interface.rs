//=========================================================================
// Collaborator Interface
//=========================================================================
//
// Contract between the core and its external collaborators.
//
//   core ──submit(CommitRequest)──────────────→ commerce
//   core ──enter/exit_placement_mode()────────→ world
//   core ←──CollaboratorEvent (channel)──────── commerce, world
//
// Outgoing calls are fire-and-forget. Outcomes come back later as
// independent events in no guaranteed order.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::purchase::{OfferId, PreviewData, PurchaseError};

//=== CommitRequest =======================================================

/// Purchase request handed to the commerce collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    /// Offers in selection order.
    pub offer_ids: Vec<OfferId>,
    pub quantity: u32,
    pub extra_data: Option<String>,
    pub preview_data: Option<PreviewData>,
}

//=== PurchaseOutcome =====================================================

/// Result reported by the commerce collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Succeeded { placeable_count: i64 },
    Failed { reason: String },
}

impl PurchaseOutcome {
    /// Converts into the placeable count or the verbatim failure.
    pub fn into_result(self) -> Result<i64, PurchaseError> {
        match self {
            Self::Succeeded { placeable_count } => Ok(placeable_count),
            Self::Failed { reason } => Err(PurchaseError::Rejected { reason }),
        }
    }
}

//=== CollaboratorEvent ===================================================

/// Events delivered to the core by its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum CollaboratorEvent {
    /// Commerce finished processing a commit.
    Purchase(PurchaseOutcome),

    /// World confirmed that one item was placed.
    ItemPlaced,

    /// Pointer moved while the object mover is shown.
    PointerMoved { x: f32, y: f32 },
}

//=== Collaborator Traits =================================================

/// Remote commerce authority.
pub trait CommerceCollaborator: Send {
    /// Sends a purchase request. The outcome arrives as a
    /// [`CollaboratorEvent::Purchase`].
    fn submit(&mut self, request: CommitRequest);
}

/// World/room side that performs the actual object placement.
pub trait WorldCollaborator: Send {
    /// Switch the room into object-mover placement mode.
    fn enter_placement_mode(&mut self);

    /// Leave placement mode.
    fn exit_placement_mode(&mut self);
}

//=========================================================================
// Unit Tests
//=========================================================================
