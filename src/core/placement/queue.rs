//=========================================================================
// Placement Queue Controller
//=========================================================================
//
// Multi-place state machine for putting purchased items into the room
// one at a time.
//
// States:
//   Idle ──arm(N>0)──────────────→ Armed(N)        [EnterPlacementMode]
//   Armed(k) ──item_placed()─────→ Armed(k-1)      (k > 1)
//   Armed(1) ──item_placed()─────→ Idle            [ExitPlacementMode]
//   Armed(k) ──cancel()──────────→ Idle            [ExitPlacementMode]
//   Idle ──item_placed()/cancel()→ Idle            (ignored)
//   Armed(k) ──arm(N>0)──────────→ Armed(k)        (ignored)
//   any ──arm(N≤0)───────────────→ InvalidArgument
//   any ──arm(N>u32::MAX)────────→ CountTooLarge
//
// Transitions return the command the world collaborator must receive,
// keeping the controller free of side effects.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::pointer::MoverPointer;

//=== PlacementState ======================================================

/// Current multi-place state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementState {
    #[default]
    Idle,

    /// Items still to place (always at least 1).
    Armed { remaining: u32 },
}

//=== MoverCommand ========================================================

/// Request for the world collaborator produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverCommand {
    EnterPlacementMode,
    ExitPlacementMode,
}

//=== PlacementError ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Arm count was zero or negative.
    InvalidArgument { count: i64 },

    /// Arm count does not fit the queue's item counter.
    CountTooLarge { count: i64 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { count } => {
                write!(f, "Cannot arm placement with non-positive count {}", count)
            }
            Self::CountTooLarge { count } => {
                write!(f, "Cannot arm placement with {} items (max {})", count, u32::MAX)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

//=== PlacementQueueController ============================================

/// Sequential placement of several purchased items.
#[derive(Debug, Clone, Default)]
pub struct PlacementQueueController {
    state: PlacementState,
    pointer: MoverPointer,
}

impl PlacementQueueController {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Transitions ------------------------------------------------------

    /// Readies the queue with `count` items.
    ///
    /// Returns [`MoverCommand::EnterPlacementMode`] when leaving `Idle`.
    /// Arming while already armed is ignored and returns `None`.
    ///
    /// # Errors
    ///
    /// [`PlacementError::InvalidArgument`] if `count <= 0` and
    /// [`PlacementError::CountTooLarge`] above `u32::MAX`; state unchanged.
    pub fn arm(&mut self, count: i64) -> Result<Option<MoverCommand>, PlacementError> {
        if count <= 0 {
            return Err(PlacementError::InvalidArgument { count });
        }
        let remaining =
            u32::try_from(count).map_err(|_| PlacementError::CountTooLarge { count })?;

        if let PlacementState::Armed { remaining } = self.state {
            warn!(
                "Placement already armed with {} remaining, ignoring arm({})",
                remaining, count
            );
            return Ok(None);
        }

        info!("Placement armed with {} item(s)", remaining);
        self.state = PlacementState::Armed { remaining };
        self.pointer.clear();

        Ok(Some(MoverCommand::EnterPlacementMode))
    }

    /// Consumes one placement confirmation.
    ///
    /// Returns [`MoverCommand::ExitPlacementMode`] when the last item is
    /// placed. Confirmations while idle are ignored.
    pub fn item_placed(&mut self) -> Option<MoverCommand> {
        match self.state {
            PlacementState::Idle => {
                debug!("Ignoring placement confirmation while idle");
                None
            }
            PlacementState::Armed { remaining } if remaining > 1 => {
                self.state = PlacementState::Armed {
                    remaining: remaining - 1,
                };
                debug!("Item placed, {} remaining", remaining - 1);
                None
            }
            PlacementState::Armed { .. } => {
                info!("Last item placed, leaving placement mode");
                Some(self.reset())
            }
        }
    }

    /// Abandons the remaining placements.
    ///
    /// Idempotent: returns `None` when already idle.
    pub fn cancel(&mut self) -> Option<MoverCommand> {
        match self.state {
            PlacementState::Idle => None,
            PlacementState::Armed { remaining } => {
                info!("Placement cancelled with {} remaining", remaining);
                Some(self.reset())
            }
        }
    }

    //--- Pointer Feedback -------------------------------------------------

    /// Records the pointer for mover feedback; ignored while idle.
    pub fn track_pointer(&mut self, x: f32, y: f32) {
        if self.is_armed() {
            self.pointer.move_to(x, y);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, PlacementState::Armed { .. })
    }

    /// Items left to place (0 when idle).
    pub fn remaining(&self) -> u32 {
        match self.state {
            PlacementState::Idle => 0,
            PlacementState::Armed { remaining } => remaining,
        }
    }

    /// Whether the world should currently be in placement mode.
    pub fn mover_requested(&self) -> bool {
        self.is_armed()
    }

    pub fn pointer(&self) -> &MoverPointer {
        &self.pointer
    }

    //--- Internal Helpers -------------------------------------------------

    fn reset(&mut self) -> MoverCommand {
        self.state = PlacementState::Idle;
        self.pointer.clear();
        MoverCommand::ExitPlacementMode
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
