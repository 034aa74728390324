use raylib::prelude::*;

use crate::constants::*;

/// Placement of the carousel for one window size: the hover region, the
/// slide area, the previous/next buttons and the indicator dot row.
/// Recomputed every frame so window resizes just work.
pub struct Layout {
    region: Rectangle,
    slide_area: Rectangle,
    prev_button: Rectangle,
    next_button: Rectangle,
    dot_count: usize,
    dots_center_y: f32,
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32, dot_count: usize) -> Self {
        let region = Rectangle::new(
            REGION_MARGIN,
            REGION_MARGIN,
            screen_width - 2.0 * REGION_MARGIN,
            screen_height - 2.0 * REGION_MARGIN,
        );

        let button_y = region.y + (region.height - BUTTON_HEIGHT) * 0.5;
        let prev_button = Rectangle::new(region.x, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next_button = Rectangle::new(
            region.x + region.width - BUTTON_WIDTH,
            button_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        // Slides sit between the buttons, above the dot row.
        let slide_area = Rectangle::new(
            region.x + BUTTON_WIDTH,
            region.y,
            region.width - 2.0 * BUTTON_WIDTH,
            region.height - DOT_ROW_HEIGHT,
        );

        let dots_center_y = region.y + region.height - DOT_ROW_HEIGHT * 0.5;

        Self {
            region,
            slide_area,
            prev_button,
            next_button,
            dot_count,
            dots_center_y,
        }
    }

    pub fn region(&self) -> Rectangle {
        self.region
    }

    pub fn slide_area(&self) -> Rectangle {
        self.slide_area
    }

    pub fn prev_button(&self) -> Rectangle {
        self.prev_button
    }

    pub fn next_button(&self) -> Rectangle {
        self.next_button
    }

    /// Center of the dot at `index`; the row is centered under the slides.
    pub fn dot_center(&self, index: usize) -> Vector2 {
        let row_width = self.dot_count.saturating_sub(1) as f32 * DOT_SPACING;
        let first_x = self.region.x + (self.region.width - row_width) * 0.5;
        Vector2::new(first_x + index as f32 * DOT_SPACING, self.dots_center_y)
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point_in_rect(self.region(), point)
    }

    pub fn in_prev_button(&self, point: Vector2) -> bool {
        point_in_rect(self.prev_button, point)
    }

    pub fn in_next_button(&self, point: Vector2) -> bool {
        point_in_rect(self.next_button, point)
    }

    /// Which dot (if any) a click at `point` lands on. The hit circle is a
    /// little larger than the drawn dot.
    pub fn dot_at(&self, point: Vector2) -> Option<usize> {
        let hit_radius = DOT_RADIUS * 2.0;
        (0..self.dot_count).find(|&index| {
            let center = self.dot_center(index);
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            dx * dx + dy * dy <= hit_radius * hit_radius
        })
    }
}

fn point_in_rect(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(1280.0, 720.0, 3)
    }

    #[test]
    fn buttons_sit_on_the_region_edges() {
        let layout = layout();
        let region = layout.region();
        assert_eq!(layout.prev_button().x, region.x);
        assert_eq!(
            layout.next_button().x + layout.next_button().width,
            region.x + region.width
        );
    }

    #[test]
    fn dots_are_evenly_spaced_and_centered() {
        let layout = layout();
        let left = layout.dot_center(0);
        let mid = layout.dot_center(1);
        let right = layout.dot_center(2);
        assert_eq!(mid.x - left.x, DOT_SPACING);
        assert_eq!(right.x - mid.x, DOT_SPACING);

        let region = layout.region();
        assert_eq!(mid.x, region.x + region.width * 0.5);
    }

    #[test]
    fn dot_hit_testing_resolves_clicks() {
        let layout = layout();
        assert_eq!(layout.dot_at(layout.dot_center(2)), Some(2));

        let near = Vector2::new(layout.dot_center(0).x + DOT_RADIUS, layout.dot_center(0).y);
        assert_eq!(layout.dot_at(near), Some(0));

        let far = Vector2::new(layout.region().x, layout.region().y);
        assert_eq!(layout.dot_at(far), None);
    }

    #[test]
    fn region_containment_tracks_the_margins() {
        let layout = layout();
        assert!(layout.contains(Vector2::new(640.0, 360.0)));
        assert!(!layout.contains(Vector2::new(10.0, 360.0)));
        assert!(!layout.contains(Vector2::new(640.0, 719.0)));
    }
}
