//=========================================================================
// Collaborator Bridge
//=========================================================================
//
// Connects the core with the commerce and world collaborators.
//
// Components:
// - `interface`: requests, outcome events and collaborator traits
// - `event_collector`: core-side channel intake and bounded draining
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::EventCollector;
pub use interface::{
    CollaboratorEvent, CommerceCollaborator, CommitRequest, PurchaseOutcome, WorldCollaborator,
};
