//=========================================================================
// Mover Pointer
//=========================================================================
//
// Ephemeral pointer tracking for object-mover feedback.
//
// Frame lifecycle mirrors input tracking: move() updates the position,
// delta() reports movement since the previous move. Cleared whenever the
// mover closes; never consulted by placement transitions.
//
//=========================================================================

/// Last known pointer position while the object mover is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoverPointer {
    position: Option<(f32, f32)>,
    delta: (f32, f32),
}

impl MoverPointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new position and the movement since the last one.
    pub(super) fn move_to(&mut self, x: f32, y: f32) {
        self.delta = match self.position {
            Some((last_x, last_y)) => (x - last_x, y - last_y),
            None => (0.0, 0.0),
        };
        self.position = Some((x, y));
    }

    pub(super) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Screen position (pixels, top-left origin), if the pointer moved
    /// since the mover opened.
    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }

    /// Movement between the last two positions (0,0 after the first).
    pub fn delta(&self) -> (f32, f32) {
        self.delta
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_has_no_delta() {
        let mut pointer = MoverPointer::new();
        pointer.move_to(10.0, 20.0);

        assert_eq!(pointer.position(), Some((10.0, 20.0)));
        assert_eq!(pointer.delta(), (0.0, 0.0));
    }

    #[test]
    fn delta_tracks_consecutive_moves() {
        let mut pointer = MoverPointer::new();
        pointer.move_to(10.0, 20.0);
        pointer.move_to(15.0, 18.0);

        assert_eq!(pointer.delta(), (5.0, -2.0));
    }

    #[test]
    fn clear_forgets_position() {
        let mut pointer = MoverPointer::new();
        pointer.move_to(1.0, 1.0);
        pointer.clear();

        assert_eq!(pointer.position(), None);
    }
}
