use clap::Parser;
use log::info;
use sdl2::render::Canvas;
use sdl2::video::{Window, WindowPos};
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod config;
mod game;
mod gui;
mod input_system;
mod save;
mod strings;
mod text;
mod timer;
mod ui;

use config::GameConfig;
use game::{Orientation, TapScreen};
use input_system::{GameAction, InputSystem};
use save::InstanceState;

const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Tap the button as many times as you can before the minute is up
#[derive(Parser, Debug)]
#[command(name = "tap-counter", version)]
struct Args {
    /// Game config JSON (defaults to the user config dir, then assets/config/game.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in landscape instead of portrait
    #[arg(long)]
    landscape: bool,
}

/// Calculate the best window scale for a logical size based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, width: u32, height: u32) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / width as i32;
            let max_scale_h = usable_h / height as i32;

            max_scale_w.min(max_scale_h).clamp(1, 4) as u32
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

/// Resizes the window and logical canvas for `orientation`
fn apply_orientation(
    canvas: &mut Canvas<Window>,
    video_subsystem: &sdl2::VideoSubsystem,
    orientation: Orientation,
    config: &GameConfig,
) -> Result<(), String> {
    let (width, height) = orientation.dimensions(config);
    let scale = calculate_window_scale(video_subsystem, width, height);

    let window = canvas.window_mut();
    window
        .set_size(width * scale, height * scale)
        .map_err(|e| e.to_string())?;
    window.set_position(WindowPos::Centered, WindowPos::Centered);

    canvas
        .set_logical_size(width, height)
        .map_err(|e| e.to_string())?;

    info!("Window: {}x{} at {}x ({:?})", width, height, scale, orientation);
    Ok(())
}

/// Tears the screen down and rebuilds it in the other orientation.
///
/// Only the saved bundle, flattened to JSON, crosses from the old screen to
/// the new one.
fn rotate(
    mut screen: TapScreen,
    config: &GameConfig,
    canvas: &mut Canvas<Window>,
    video_subsystem: &sdl2::VideoSubsystem,
) -> Result<TapScreen, String> {
    let state = screen.save_instance_state().map_err(|e| e.to_string())?;
    let parcel = state.to_json().map_err(|e| e.to_string())?;
    let orientation = screen.orientation().rotated();
    screen.destroy();

    apply_orientation(canvas, video_subsystem, orientation, config)?;

    let state = InstanceState::from_json(&parcel).map_err(|e| e.to_string())?;
    let screen = TapScreen::create(config, orientation, Some(&state));
    info!(
        "Rotated to {:?}: score {}, {}s left",
        screen.orientation(),
        screen.score(),
        screen.time_left().as_secs()
    );
    Ok(screen)
}

fn main() -> Result<(), String> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = GameConfig::resolve(args.config.as_deref()).map_err(|e| e.to_string())?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let orientation = if args.landscape {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    };
    let (width, height) = orientation.dimensions(&config);
    let scale = calculate_window_scale(&video_subsystem, width, height);

    let window = video_subsystem
        .window(strings::APP_NAME, width * scale, height * scale)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps layout and mouse coordinates resolution-independent
    canvas
        .set_logical_size(width, height)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let mut input = InputSystem::new();
    let mut screen = TapScreen::create(&config, orientation, None);

    info!("Controls:");
    info!("  Click button / Space / Enter - Tap");
    info!("  F1 / M - Menu (About)");
    info!("  R / F11 - Rotate window");
    info!("  ESC - Quit");

    let mut last_frame = Instant::now();

    'running: loop {
        input.update_context(screen.input_context());

        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Rotate => {
                    screen = rotate(screen, &config, &mut canvas, &video_subsystem)?;
                }
                other => screen.handle_action(&other),
            }
        }

        let now = Instant::now();
        screen.update(now - last_frame);
        last_frame = now;

        screen.render(&mut canvas)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(FRAME_TIME);
    }

    screen.destroy();
    Ok(())
}
