//=========================================================================
// Multi-Place
//=========================================================================
//
// Sequential placement of purchased items via the object mover.
//
// Architecture:
//   PlacementQueueController
//     ├─ state: PlacementState (Idle | Armed { remaining })
//     └─ pointer: MoverPointer (presentation feedback only)
//
//=========================================================================

//=== Module Declarations =================================================

mod pointer;
mod queue;

//=== Public API ==========================================================

pub use pointer::MoverPointer;
pub use queue::{MoverCommand, PlacementError, PlacementQueueController, PlacementState};
