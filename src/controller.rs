use tracing::{debug, info};

use crate::timer::AutoAdvance;

/// Binary "current" marking shared by slides and indicator dots.
///
/// The controller only decides which pair carries the marking; what it looks
/// like on screen is entirely up to the implementor.
pub trait Current {
    fn set_current(&mut self, current: bool);
    fn is_current(&self) -> bool;
}

/// Everything the outside world can do to a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Next button or right arrow.
    Next,
    /// Previous button or left arrow.
    Previous,
    /// Click on the indicator dot at this position.
    SelectIndicator(usize),
    /// Pointer moved into the carousel region.
    PointerEntered,
    /// Pointer moved out of the carousel region.
    PointerLeft,
}

/// Carousel controller. Construction with no slides yields the `Inactive`
/// variant, on which every operation is a no-op, so call sites never have to
/// re-check whether the feature is present.
pub enum Carousel<S: Current, I: Current> {
    Inactive,
    Active(Active<S, I>),
}

pub struct Active<S: Current, I: Current> {
    slides: Vec<S>,
    indicators: Vec<I>,
    current: usize,
    auto: AutoAdvance,
}

impl<S: Current, I: Current> Carousel<S, I> {
    /// Build a controller over position-aligned slides and indicators.
    ///
    /// With at least one slide the first slide/indicator pair is marked
    /// current immediately and auto-advance starts with the given period.
    pub fn new(slides: Vec<S>, indicators: Vec<I>, period: f32) -> Self {
        if slides.is_empty() {
            info!("no slides found, carousel inactive");
            return Carousel::Inactive;
        }
        info!("carousel initialized with {} slides", slides.len());

        let mut active = Active {
            slides,
            indicators,
            current: 0,
            auto: AutoAdvance::new(period),
        };
        active.show_slide(0);
        active.auto.start();
        Carousel::Active(active)
    }

    pub fn handle_event(&mut self, event: CarouselEvent) {
        if let Carousel::Active(active) = self {
            active.handle_event(event);
        }
    }

    /// Advance timers by one frame delta, firing at most one automatic
    /// `next()`.
    pub fn update(&mut self, dt: f32) {
        if let Carousel::Active(active) = self {
            if active.auto.tick(dt) {
                active.next();
            }
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            Carousel::Inactive => None,
            Carousel::Active(active) => Some(active.current),
        }
    }

    pub fn slide_count(&self) -> usize {
        match self {
            Carousel::Inactive => 0,
            Carousel::Active(active) => active.slides.len(),
        }
    }

    pub fn slides(&self) -> &[S] {
        match self {
            Carousel::Inactive => &[],
            Carousel::Active(active) => &active.slides,
        }
    }

    pub fn slides_mut(&mut self) -> &mut [S] {
        match self {
            Carousel::Inactive => &mut [],
            Carousel::Active(active) => &mut active.slides,
        }
    }

    pub fn indicators(&self) -> &[I] {
        match self {
            Carousel::Inactive => &[],
            Carousel::Active(active) => &active.indicators,
        }
    }
}

impl<S: Current, I: Current> Active<S, I> {
    fn handle_event(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Next => {
                self.auto.reset();
                self.next();
            }
            CarouselEvent::Previous => {
                self.auto.reset();
                self.previous();
            }
            CarouselEvent::SelectIndicator(index) => {
                self.auto.reset();
                self.show_slide(index as i64);
            }
            CarouselEvent::PointerEntered => {
                self.auto.cancel();
            }
            CarouselEvent::PointerLeft => {
                self.auto.start();
            }
        }
    }

    /// Mark the slide at `target` (wrapped circularly) and its indicator as
    /// current, everything else as not current. Never touches the timer.
    fn show_slide(&mut self, target: i64) {
        let count = self.slides.len() as i64;
        let index = target.rem_euclid(count) as usize;

        // Leaving the target slide's own flag untouched keeps re-showing the
        // current slide free of side effects (its fade does not restart).
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_current(i == index);
        }
        for (i, dot) in self.indicators.iter_mut().enumerate() {
            dot.set_current(i == index);
        }

        self.current = index;
        debug!("showing slide {}", index + 1);
    }

    fn next(&mut self) {
        self.show_slide(self.current as i64 + 1);
    }

    fn previous(&mut self) {
        self.show_slide(self.current as i64 - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Mark {
        current: bool,
        activations: u32,
    }

    impl Current for Mark {
        fn set_current(&mut self, current: bool) {
            if current && !self.current {
                self.activations += 1;
            }
            self.current = current;
        }

        fn is_current(&self) -> bool {
            self.current
        }
    }

    fn carousel(slides: usize, indicators: usize) -> Carousel<Mark, Mark> {
        let slides = (0..slides).map(|_| Mark::default()).collect();
        let indicators = (0..indicators).map(|_| Mark::default()).collect();
        Carousel::new(slides, indicators, 5.0)
    }

    fn current_slides(carousel: &Carousel<Mark, Mark>) -> Vec<usize> {
        carousel
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_current())
            .map(|(i, _)| i)
            .collect()
    }

    fn current_indicators(carousel: &Carousel<Mark, Mark>) -> Vec<usize> {
        carousel
            .indicators()
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_current())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn construction_marks_first_pair_current() {
        let carousel = carousel(3, 3);
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(current_slides(&carousel), vec![0]);
        assert_eq!(current_indicators(&carousel), vec![0]);
    }

    #[test]
    fn indicator_selection_wraps_like_the_formula() {
        // show_slide(i) must land on ((i % n) + n) % n for any integer i.
        for n in 1..=5usize {
            for i in -13i64..13 {
                let mut carousel = carousel(n, n);
                if let Carousel::Active(active) = &mut carousel {
                    active.show_slide(i);
                }
                let expected = i.rem_euclid(n as i64) as usize;
                assert_eq!(carousel.current_index(), Some(expected), "n={n} i={i}");
            }
        }
    }

    #[test]
    fn exactly_one_pair_current_after_any_sequence() {
        let mut carousel = carousel(4, 4);
        let sequence = [
            CarouselEvent::Next,
            CarouselEvent::Next,
            CarouselEvent::Previous,
            CarouselEvent::SelectIndicator(3),
            CarouselEvent::Previous,
            CarouselEvent::Next,
        ];
        for event in sequence {
            carousel.handle_event(event);
            assert_eq!(current_slides(&carousel).len(), 1);
            assert_eq!(current_indicators(&carousel).len(), 1);
            assert_eq!(
                current_slides(&carousel),
                current_indicators(&carousel),
                "slide and indicator markings must stay aligned"
            );
        }
    }

    #[test]
    fn wraps_circularly_in_both_directions() {
        // 3 slides: 0 -> previous -> 2 -> next -> 0 -> next -> 1.
        let mut carousel = carousel(3, 3);
        carousel.handle_event(CarouselEvent::Previous);
        assert_eq!(carousel.current_index(), Some(2));
        carousel.handle_event(CarouselEvent::Next);
        assert_eq!(carousel.current_index(), Some(0));
        carousel.handle_event(CarouselEvent::Next);
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn auto_advance_fires_forward_each_period() {
        let mut carousel = carousel(3, 3);
        carousel.update(5.0);
        assert_eq!(carousel.current_index(), Some(1));
        carousel.update(5.0);
        assert_eq!(carousel.current_index(), Some(2));
        carousel.update(5.0);
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn manual_navigation_defers_the_next_automatic_advance() {
        let mut carousel = carousel(3, 3);
        carousel.update(4.9);
        carousel.handle_event(CarouselEvent::Next);
        assert_eq!(carousel.current_index(), Some(1));

        // One full period after the reset: exactly one automatic advance.
        carousel.update(4.9);
        assert_eq!(carousel.current_index(), Some(1));
        carousel.update(0.1);
        assert_eq!(carousel.current_index(), Some(2));
        carousel.update(0.1);
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn hover_pauses_and_leave_restarts_a_full_period() {
        let mut carousel = carousel(3, 3);
        carousel.update(4.9);
        carousel.handle_event(CarouselEvent::PointerEntered);

        // Arbitrarily long hover: zero firings.
        for _ in 0..100 {
            carousel.update(10.0);
        }
        assert_eq!(carousel.current_index(), Some(0));

        carousel.handle_event(CarouselEvent::PointerLeft);
        carousel.update(4.9);
        assert_eq!(carousel.current_index(), Some(0));
        carousel.update(0.1);
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn auto_advance_resumes_forward_after_manual_previous() {
        let mut carousel = carousel(3, 3);
        carousel.handle_event(CarouselEvent::Previous);
        assert_eq!(carousel.current_index(), Some(2));
        carousel.update(5.0);
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn missing_indicators_beyond_bound_are_skipped() {
        let mut carousel = carousel(4, 2);
        carousel.handle_event(CarouselEvent::SelectIndicator(3));
        assert_eq!(carousel.current_index(), Some(3));
        assert_eq!(current_slides(&carousel), vec![3]);
        assert!(current_indicators(&carousel).is_empty());

        carousel.handle_event(CarouselEvent::SelectIndicator(1));
        assert_eq!(current_indicators(&carousel), vec![1]);
    }

    #[test]
    fn reshowing_the_current_slide_is_idempotent() {
        let mut carousel = carousel(3, 3);
        carousel.handle_event(CarouselEvent::SelectIndicator(1));
        let before = carousel.slides()[1].activations;
        carousel.handle_event(CarouselEvent::SelectIndicator(1));
        assert_eq!(carousel.current_index(), Some(1));
        assert_eq!(carousel.slides()[1].activations, before);
    }

    #[test]
    fn zero_slides_degrades_to_inactive_noop() {
        let mut carousel = carousel(0, 0);
        assert!(matches!(carousel, Carousel::Inactive));
        assert_eq!(carousel.current_index(), None);
        assert_eq!(carousel.slide_count(), 0);

        // Nothing to observe, nothing to panic over.
        carousel.handle_event(CarouselEvent::Next);
        carousel.handle_event(CarouselEvent::SelectIndicator(7));
        carousel.update(60.0);
        assert_eq!(carousel.current_index(), None);
    }
}
