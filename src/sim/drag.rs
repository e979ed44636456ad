//! Drag input for the player circle
//!
//! A drag only starts on the player itself. While it lasts, every move
//! puts the player's center under the pointer. There is no clamping, so the
//! player can be dragged off the field.

use super::geometry::{Circle, Position};

/// Pointer gesture, in field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    Start(Position),
    Move(Position),
    End,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    pub active: bool,
}

impl DragState {
    /// Apply one gesture. Returns the player's new circle when it moved.
    pub fn apply(&mut self, player: &Circle, input: DragInput) -> Option<Circle> {
        match input {
            DragInput::Start(p) => {
                self.active = player.contains(p);
                None
            }
            DragInput::Move(p) if self.active => Some(player.moved_to(p)),
            DragInput::Move(_) => None,
            DragInput::End => {
                self.active = false;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_drag_requires_grab_on_player() {
        let player = Circle::new(350.0, 225.0, 10.0);
        let mut drag = DragState::default();

        assert_eq!(drag.apply(&player, DragInput::Move(Vec2::new(0.0, 0.0))), None);

        drag.apply(&player, DragInput::Start(Vec2::new(100.0, 100.0)));
        assert!(!drag.active);
        assert_eq!(drag.apply(&player, DragInput::Move(Vec2::new(0.0, 0.0))), None);

        drag.apply(&player, DragInput::Start(Vec2::new(355.0, 228.0)));
        assert!(drag.active);
        let moved = drag.apply(&player, DragInput::Move(Vec2::new(-30.0, 600.0)));
        assert_eq!(moved, Some(Circle::new(-30.0, 600.0, 10.0)));

        drag.apply(&player, DragInput::End);
        assert!(!drag.active);
    }
}
