use raylib::prelude::*;

use crate::constants::*;
use crate::controller::Current;

/// One carousel panel: a texture plus the current marking the controller
/// manages. Becoming current restarts a short fade-in; losing the marking
/// hides the slide immediately.
pub struct Slide {
    texture: Texture2D,
    current: bool,
    alpha: f32,
}

impl Slide {
    pub fn new(texture: Texture2D) -> Self {
        Self {
            texture,
            current: false,
            alpha: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.current && self.alpha < 1.0 {
            self.alpha = (self.alpha + dt / FADE_DURATION).min(1.0);
        }
    }

    /// Draw scaled to fit `area`, centered, tinted by the fade alpha.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if !self.current {
            return;
        }

        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        let scale = (area.width / tex_width).min(area.height / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            area.x + (area.width - scaled_width) * 0.5,
            area.y + (area.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        let tint = Color::new(255, 255, 255, (self.alpha * 255.0) as u8);
        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::zero(),
            0.0,
            tint,
        );
    }
}

impl Current for Slide {
    fn set_current(&mut self, current: bool) {
        // Only a fresh activation restarts the fade; re-marking the slide
        // that is already current has no visible effect.
        if current && !self.current {
            self.alpha = 0.0;
        }
        self.current = current;
    }

    fn is_current(&self) -> bool {
        self.current
    }
}
