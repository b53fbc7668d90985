//! Per-frame and fixed-rate update passes
//!
//! The variable-rate [`frame`] pass runs once per rendered frame: input
//! consumption, movement, collisions, spawning, and menu hit-testing. The
//! [`fixed`] pass runs at a constant simulated rate and owns every timer.
//! Quit is a signal returned up the chain, never a process exit here.

use glam::Vec2;

use super::collision::{overlaps, overlaps_text};
use super::entity::screen_wrap;
use super::state::{Game, Mode, PauseOption, Screen};
use crate::consts::*;
use crate::degrees_between;

/// Input snapshot for one frame, populated by the shell before the pass
///
/// Axes are held state (-1, 0, 1); the rest are one-shot flags the shell
/// clears after each frame. The sim never sees raw events, so mid-frame
/// input changes land on the next frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Turn axis: -1 left, 1 right
    pub turn: i32,
    /// Thrust axis: 1 accelerate, -1 decelerate
    pub thrust: i32,
    pub fire: bool,
    /// Pause while running; select while paused
    pub confirm: bool,
    pub menu_up: bool,
    pub menu_down: bool,
    pub quit: bool,
}

/// Outcome of an update pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    /// The loop owner should shut down
    Quit,
}

/// Variable-rate update: one call per rendered frame
///
/// `dt` is the fixed timestep used for projectile lifetime accumulation
/// (the only dt-scaled quantity in this pass).
pub fn frame(game: &mut Game, input: &FrameInput, dt: f32) -> Signal {
    if input.quit {
        return Signal::Quit;
    }

    if game.session.is_game_running {
        if input.fire {
            game.projectiles
                .fire(game.player.sprite.pos, game.player.current_angle);
        }
        if input.confirm && game.session.screen == Screen::Gameplay {
            game.set_pause_option(PauseOption::Continue);
            game.session.is_game_running = false;
            return Signal::Continue;
        }
    } else {
        // Pause menu: navigation plus confirm, nothing else advances
        if input.menu_up {
            game.set_pause_option(PauseOption::Continue);
        }
        if input.menu_down {
            game.set_pause_option(PauseOption::BackToTitle);
        }
        if input.confirm {
            game.session.is_game_running = true;
            if game.pause_option == PauseOption::BackToTitle {
                game.respawn(true);
                game.session.screen = Screen::MainMenu;
            }
        }
        return Signal::Continue;
    }

    // Ship movement: thrust or coast, advance, wrap, then turn
    match input.thrust {
        t if t > 0 => game.player.accelerate(),
        t if t < 0 => game.player.decelerate(),
        _ => game.player.coast(),
    }
    game.player.advance();
    screen_wrap(&mut game.player.collision, game.bounds);
    game.player.turn(input.turn);

    // Asteroid sweep; a cleared field is reseeded wholesale instead
    if game.asteroids.all_destroyed() {
        game.respawn(false);
    } else if game.session.screen == Screen::Gameplay {
        // Index loop on purpose: splits append children that still get
        // moved and collision-checked this same frame
        let mut i = 0;
        while i < game.asteroids.asteroids.len() {
            if game.asteroids.asteroids[i].destroyed {
                i += 1;
                continue;
            }

            screen_wrap(&mut game.asteroids.asteroids[i].sprite, game.bounds);
            game.asteroids.asteroids[i].advance();

            // Ship contact: damage plus the usual split
            if overlaps(
                &game.player.sprite,
                &game.asteroids.asteroids[i].sprite,
                0.0,
            ) {
                let hazard = game.asteroids.asteroids[i].sprite.pos;
                player_hurt(game, hazard);
                let ship_pos = game.player.sprite.pos;
                game.asteroids.split(i, ship_pos, game.bounds, &mut game.rng);
            }

            if !game.asteroids.asteroids[i].destroyed {
                let target = game.asteroids.asteroids[i].sprite;
                let mut hit = false;
                for projectile in game.projectiles.iter_shot_mut() {
                    if overlaps(&target, &projectile.sprite, PROJECTILE_HIT_MARGIN) {
                        projectile.collide();
                        hit = true;
                        break;
                    }
                }
                if hit {
                    game.session.add_score(game.asteroids.asteroids[i].score());
                    let ship_pos = game.player.sprite.pos;
                    game.asteroids.split(i, ship_pos, game.bounds, &mut game.rng);
                }
            }

            i += 1;
        }
    }

    // Ship-vs-alien contact damage
    if game.session.screen == Screen::Gameplay
        && overlaps(&game.player.sprite, &game.alien.sprite, 0.0)
    {
        let hazard = game.alien.sprite.pos;
        player_hurt(game, hazard);
    }

    // Projectile interactions with menus and the alien
    match game.session.screen {
        Screen::MainMenu => {
            let mut chosen: Option<Mode> = None;
            let mut quit = false;
            let hud = &game.hud;
            for projectile in game.projectiles.iter_shot_mut() {
                if overlaps_text(&projectile.sprite, &hud.endless_mode.region) {
                    projectile.collide();
                    chosen = Some(Mode::Endless);
                }
                if overlaps_text(&projectile.sprite, &hud.timed_mode.region) {
                    projectile.collide();
                    chosen = Some(Mode::Timed);
                }
                if overlaps_text(&projectile.sprite, &hud.quit.region) {
                    quit = true;
                }
            }
            if quit {
                return Signal::Quit;
            }
            if let Some(mode) = chosen {
                game.session.mode = mode;
                game.start_game();
                log::info!("starting {mode:?} session");
            }
        }
        Screen::WinMenu | Screen::LoseMenu => {
            let mut retry = false;
            let mut back = false;
            let hud = &game.hud;
            for projectile in game.projectiles.iter_shot_mut() {
                if overlaps_text(&projectile.sprite, &hud.retry.region) {
                    projectile.collide();
                    retry = true;
                }
                if overlaps_text(&projectile.sprite, &hud.back_to_title.region) {
                    projectile.collide();
                    back = true;
                }
            }
            if retry {
                game.session.screen = Screen::Gameplay;
                game.respawn(true);
            }
            if back {
                game.session.screen = Screen::MainMenu;
                game.respawn(true);
            }
        }
        Screen::Gameplay => {
            let target = game.alien.sprite;
            let mut alien_hit = false;
            for projectile in game.projectiles.iter_shot_mut() {
                if overlaps(&target, &projectile.sprite, PROJECTILE_HIT_MARGIN) {
                    projectile.collide();
                    alien_hit = true;
                }
            }
            if alien_hit {
                game.session.add_score(ALIEN_DEATH_SCORE);
                game.alien.respawn(game.bounds, &mut game.rng);
                game.alien.reset_timer(&mut game.rng);
            }
        }
    }

    // Move live projectiles after hit checks, as positions are sampled
    // pre-movement
    game.projectiles.tick(game.bounds, dt);

    // Alien movement, redirect, and its projectile
    if game.session.screen == Screen::Gameplay {
        if game.alien.is_active {
            game.alien.advance();
            game.alien.maybe_redirect(game.player.sprite.pos);

            if game.alien.out_of_bounds(game.bounds) {
                game.alien.respawn(game.bounds, &mut game.rng);
                game.alien.reset_timer(&mut game.rng);
            }
        }

        game.alien_projectiles.tick(game.bounds, dt);
        let player = game.player.sprite;
        let mut hit_pos: Option<Vec2> = None;
        for projectile in game.alien_projectiles.iter_shot_mut() {
            if overlaps(&player, &projectile.sprite, PROJECTILE_HIT_MARGIN) {
                hit_pos = Some(projectile.sprite.pos);
                projectile.collide();
            }
        }
        if let Some(pos) = hit_pos {
            player_hurt(game, pos);
        }
    }

    Signal::Continue
}

/// Damage gate: invincibility ignores the hit, a lethal hit goes straight
/// to the lose screen without showing zero health
fn player_hurt(game: &mut Game, hazard_pos: Vec2) {
    if game.player.is_invincible() {
        return;
    }
    if game.player.current_health > 1 {
        game.player.hurt(hazard_pos);
    } else {
        game.session.lose_by_time = false;
        game.session.screen = Screen::LoseMenu;
        log::info!("out of health at score {}", game.session.score);
    }
}

/// Fixed-rate update: timers only, gated off entirely while paused or
/// outside gameplay
pub fn fixed(game: &mut Game, dt: f32) {
    if game.session.screen != Screen::Gameplay || !game.session.is_game_running {
        return;
    }

    game.player.tick_invincibility(dt);
    game.alien.tick_spawn_timer(dt);

    // One alien shot at a time; the refire timer only runs while the
    // previous shot is gone
    if !game.alien_projectiles.any_shot() && game.alien.is_active && game.alien.tick_refire(dt) {
        game.alien.rearm_refire();
        let origin = game.alien.sprite.pos;
        let angle = degrees_between(origin, game.player.sprite.pos);
        game.alien_projectiles.fire(origin, angle);
    }

    if game.session.mode == Mode::Timed {
        game.session.time -= dt;
        if game.session.time <= 0.0 {
            if game.session.score >= game.session.max_score {
                game.session.screen = Screen::WinMenu;
                log::info!("time up at {} points: win", game.session.score);
            } else {
                game.session.lose_by_time = true;
                game.session.screen = Screen::LoseMenu;
                log::info!("time up at {} points: lose", game.session.score);
            }
            game.respawn(true);
        }
    }
}
