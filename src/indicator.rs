use raylib::prelude::*;

use crate::constants::DOT_RADIUS;
use crate::controller::Current;

/// Position-aligned marker for one slide; its only state is whether that
/// slide is the current one.
#[derive(Default)]
pub struct Dot {
    current: bool,
}

impl Dot {
    pub fn draw(&self, d: &mut RaylibDrawHandle, center: Vector2) {
        if self.current {
            d.draw_circle_v(center, DOT_RADIUS, Color::RAYWHITE);
        } else {
            d.draw_circle_lines(center.x as i32, center.y as i32, DOT_RADIUS, Color::GRAY);
        }
    }
}

impl Current for Dot {
    fn set_current(&mut self, current: bool) {
        self.current = current;
    }

    fn is_current(&self) -> bool {
        self.current
    }
}
