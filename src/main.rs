//! Too Many Asteroids entry point
//!
//! Headless native shell: owns the loop, populates per-frame input
//! snapshots, and discards draw lists. A windowed shell would own a real
//! backend and feed real key events through the same `FrameInput` seam.

use std::path::Path;

use too_many_asteroids::consts::MAX_FIXED_STEPS;
use too_many_asteroids::{
    fixed, frame, render, AssetError, CatalogAssets, FrameInput, Game, Settings, Signal,
};

fn main() -> Result<(), AssetError> {
    env_logger::init();

    let settings = Settings::load(Path::new("settings.json"));
    log::info!(
        "Too Many Asteroids starting ({}x{}, fixed {} Hz, {} fps cap)",
        settings.window_width,
        settings.window_height,
        settings.fixed_hz,
        settings.fps_limit
    );

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    log::info!("session seed {seed}");

    let mut assets = CatalogAssets::new();
    let mut game = Game::new(&mut assets, seed)?;

    // Headless demo: line up the Timed Mode label, select it by shot, then
    // cruise and fire for ten seconds of frames
    let dt = settings.fixed_dt();
    let mut accumulator = 0.0f32;
    for frame_no in 0u32..600 {
        let input = scripted_input(frame_no);

        if frame(&mut game, &input, dt) == Signal::Quit {
            log::info!("quit signal received");
            break;
        }

        accumulator += dt;
        let mut steps = 0;
        while accumulator >= dt && steps < MAX_FIXED_STEPS {
            fixed(&mut game, dt);
            accumulator -= dt;
            steps += 1;
        }

        // Read-only pass, strictly after both update passes
        let draws = render::draw_list(&game);
        log::trace!("frame {frame_no}: {} draw requests", draws.len());
    }

    log::info!(
        "demo finished on {:?} with score {}",
        game.session.screen,
        game.session.score
    );
    Ok(())
}

/// Demo keystrokes: two turns aim the ship at the Timed Mode label, one
/// shot selects it, then thrust with a shot every 45 frames
fn scripted_input(frame_no: u32) -> FrameInput {
    let mut input = FrameInput::default();
    match frame_no {
        0 | 1 => input.turn = 1,
        2 => input.fire = true,
        _ => {
            input.thrust = 1;
            if frame_no % 45 == 0 {
                input.fire = true;
            }
        }
    }
    input
}
