//! Closing rules shared by popup widgets

use crate::event::{Event, KeyCode};
use crate::layout::Bounds;

/// Decides whether an open popup should close for a given event.
pub struct OverlayCloseHelper;

impl OverlayCloseHelper {
    /// A press outside `capture` closes the popup.
    #[inline]
    pub fn should_close_on_global_press(position: (f32, f32), capture: Bounds) -> bool {
        !capture.contains(position.0, position.1)
    }

    /// Escape, focus loss, or a press outside `capture`.
    pub fn should_close(event: &Event, capture: Bounds) -> bool {
        match event {
            Event::GlobalMousePress { position, .. } => {
                Self::should_close_on_global_press(*position, capture)
            }
            Event::KeyPress {
                key: KeyCode::Escape,
                ..
            }
            | Event::FocusLost => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyModifiers, MouseButton};

    fn global_press(x: f32, y: f32) -> Event {
        Event::GlobalMousePress {
            button: MouseButton::Left,
            position: (x, y),
        }
    }

    #[test]
    fn test_press_outside_closes() {
        let capture = Bounds::new(100.0, 100.0, 50.0, 50.0);
        assert!(OverlayCloseHelper::should_close(&global_press(50.0, 50.0), capture));
        assert!(!OverlayCloseHelper::should_close(&global_press(125.0, 125.0), capture));
    }

    #[test]
    fn test_escape_and_focus_lost_close() {
        let capture = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let escape = Event::KeyPress {
            key: KeyCode::Escape,
            modifiers: KeyModifiers::default(),
        };
        assert!(OverlayCloseHelper::should_close(&escape, capture));
        assert!(OverlayCloseHelper::should_close(&Event::FocusLost, capture));
    }

    #[test]
    fn test_other_events_keep_open() {
        let capture = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let enter = Event::KeyPress {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::default(),
        };
        assert!(!OverlayCloseHelper::should_close(&enter, capture));
        assert!(!OverlayCloseHelper::should_close(&Event::CursorLeft, capture));
    }
}
