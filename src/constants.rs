pub const WINDOW_WIDTH: i32 = 1280;           // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_ADVANCE_SECS: f32 = 5.0;       // Period between automatic advances (seconds)
pub const FADE_DURATION: f32 = 0.5;           // Fade-in when a slide becomes current (seconds)

pub const REGION_MARGIN: f32 = 60.0;          // Carousel region inset from the window edges
pub const BUTTON_WIDTH: f32 = 48.0;           // Previous/next button width
pub const BUTTON_HEIGHT: f32 = 96.0;          // Previous/next button height
pub const DOT_RADIUS: f32 = 8.0;              // Indicator dot radius
pub const DOT_SPACING: f32 = 28.0;            // Center-to-center distance between dots
pub const DOT_ROW_HEIGHT: f32 = 40.0;         // Strip at the bottom of the region reserved for dots
