use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod constants;
mod controller;
mod indicator;
mod input;
mod layout;
mod slide;
mod texture_loader;
mod timer;

use crate::constants::*;
use crate::controller::Carousel;
use crate::indicator::Dot;
use crate::input::CarouselInput;
use crate::layout::Layout;
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

/// Present a directory of images as an auto-advancing carousel.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory of images to present as slides
    directory: PathBuf,

    /// Seconds between automatic advances
    #[arg(long, default_value_t = AUTO_ADVANCE_SECS)]
    interval: f32,

    /// Randomize the slide order at startup
    #[arg(long)]
    shuffle: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let mut image_paths = load_sorted_image_paths(&cli.directory)?;
    if cli.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Image Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides: Vec<Slide> = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }

    // An empty directory is not fatal: the carousel goes inactive and the
    // window stays up with a notice.
    let dots: Vec<Dot> = slides.iter().map(|_| Dot::default()).collect();
    let mut carousel = Carousel::new(slides, dots, cli.interval);
    let mut input = CarouselInput::new();

    let empty_notice = format!("No images found in {}", cli.directory.display());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let layout = Layout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            carousel.slide_count(),
        );

        // --- Update Logic ---
        for event in input.poll(&rl, &layout) {
            carousel.handle_event(event);
        }
        carousel.update(dt);
        for slide in carousel.slides_mut() {
            slide.update(dt);
        }

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        if carousel.current_index().is_none() {
            d.draw_text(&empty_notice, 20, 20, 20, Color::GRAY);
            continue;
        }

        for slide in carousel.slides() {
            // Only the current slide draws itself.
            slide.draw(&mut d, layout.slide_area());
        }

        draw_nav_button(&mut d, layout.prev_button(), "<");
        draw_nav_button(&mut d, layout.next_button(), ">");

        for (index, dot) in carousel.indicators().iter().enumerate() {
            dot.draw(&mut d, layout.dot_center(index));
        }
    }

    Ok(())
}

fn draw_nav_button(d: &mut RaylibDrawHandle, rect: Rectangle, glyph: &str) {
    const GLYPH_SIZE: i32 = 40;

    d.draw_rectangle_rec(rect, Color::new(255, 255, 255, 30));
    let glyph_width = measure_text(glyph, GLYPH_SIZE);
    d.draw_text(
        glyph,
        (rect.x + (rect.width - glyph_width as f32) * 0.5) as i32,
        (rect.y + (rect.height - GLYPH_SIZE as f32) * 0.5) as i32,
        GLYPH_SIZE,
        Color::RAYWHITE,
    );
}
