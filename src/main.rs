use anyhow::Result;
use glam::Vec2;
use log::{debug, info};
use winit::{
    event::{Event, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use game::characters::CharacterProfile;
use game::scene::{character_sheets, Scene};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

/// Zoom change per mouse-wheel line
const ZOOM_STEP: f32 = 0.1;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Sprite Walkers...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Sprite Walkers")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let size = window.inner_size();
    let mut scene = Scene::new(
        character_sheets()?,
        Vec2::new(size.width as f32, size.height as f32),
    );
    let ruler = scene.spawn(CharacterProfile::ruler()?, Vec2::new(100.0, 100.0))?;
    scene.spawn(CharacterProfile::peasant()?, Vec2::new(300.0, 100.0))?;

    info!("Scene ready with {} characters", scene.characters().count());

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    log_summary(&game_loop);
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    info!("Window resized to {:?}", physical_size);
                    scene
                        .camera_mut()
                        .resize(physical_size.width as f32, physical_size.height as f32);
                }
                WindowEvent::Focused(false) => input.reset(),
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.set_cursor_position(position);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let lines = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                    };
                    let camera = scene.camera_mut();
                    let zoom = camera.zoom + lines * ZOOM_STEP;
                    camera.set_zoom(zoom);
                }
                WindowEvent::RedrawRequested => {
                    if input.just_pressed(Action::Menu) {
                        info!("Menu requested, shutting down...");
                        log_summary(&game_loop);
                        elwt.exit();
                        return;
                    }
                    if input.just_pressed(Action::Pause) {
                        game_loop.toggle_pause();
                    }

                    if let Some(now) = game_loop.begin_frame() {
                        scene.tick(&input, input.cursor(), now);
                    }

                    let sprite_count = scene.render().len();
                    if game_loop.frame_count() % 300 == 0 {
                        debug!(
                            "Frame {}: {} sprites, {:.1} FPS",
                            game_loop.frame_count(),
                            sprite_count,
                            game_loop.fps()
                        );
                        if let Some(character) = scene.characters().get(ruler) {
                            debug!(
                                "{} at {} facing {:?}, moving: {}, frame {}",
                                character.name(),
                                character.world_position(),
                                character.direction(),
                                character.is_moving(),
                                character.current_atlas_index()
                            );
                        }
                        for character in scene.characters().selected() {
                            debug!(
                                "Hovering {} (outline {:?})",
                                character.name(),
                                character.highlight_atlas_index()
                            );
                        }
                    }

                    input.update();
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

fn log_summary(game_loop: &GameLoop) {
    info!(
        "Ran {} frames ({} ticks) in {:.1?}",
        game_loop.frame_count(),
        game_loop.tick_count(),
        game_loop.elapsed()
    );
}
