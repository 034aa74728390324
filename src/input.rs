use raylib::prelude::*;

use crate::controller::CarouselEvent;
use crate::layout::Layout;

/// Per-frame translation of raw window input into carousel events.
///
/// Owns the pointer-inside edge state, so enter/leave fire once per crossing
/// rather than every frame the pointer sits in the region.
pub struct CarouselInput {
    pointer_inside: bool,
}

impl CarouselInput {
    pub fn new() -> Self {
        Self {
            pointer_inside: false,
        }
    }

    pub fn poll(&mut self, rl: &RaylibHandle, layout: &Layout) -> Vec<CarouselEvent> {
        let mut events = Vec::new();

        // Arrow keys navigate regardless of where the pointer is.
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            events.push(CarouselEvent::Previous);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            events.push(CarouselEvent::Next);
        }

        let pointer = rl.get_mouse_position();
        let inside = layout.contains(pointer);
        if inside != self.pointer_inside {
            self.pointer_inside = inside;
            events.push(if inside {
                CarouselEvent::PointerEntered
            } else {
                CarouselEvent::PointerLeft
            });
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if layout.in_prev_button(pointer) {
                events.push(CarouselEvent::Previous);
            } else if layout.in_next_button(pointer) {
                events.push(CarouselEvent::Next);
            } else if let Some(index) = layout.dot_at(pointer) {
                events.push(CarouselEvent::SelectIndicator(index));
            }
        }

        events
    }
}
