//! Draw-request emission
//!
//! A read-only pass over simulation state producing an ordered list of
//! [`DrawCmd`]s per frame. The core never learns how pixels reach a screen;
//! a shell replays the list against whatever backend it owns.

use glam::Vec2;

use crate::assets::{FontHandle, TextureHandle};
use crate::sim::state::Label;
use crate::sim::{Game, Mode, Screen, Sprite};

/// Text colors used by the HUD and menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    DarkGrey,
    CadetBlue,
    Red,
    Green,
}

/// Horizontal anchoring for text draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// One draw request; the shell resolves handles and alignment
#[derive(Debug, Clone)]
pub enum DrawCmd {
    Sprite {
        texture: TextureHandle,
        pos: Vec2,
        rotation: f32,
        scale: f32,
        opacity: f32,
        z_order: i32,
    },
    Text {
        font: FontHandle,
        text: String,
        pos: Vec2,
        color: Color,
        align: Align,
    },
}

fn sprite(out: &mut Vec<DrawCmd>, s: &Sprite) {
    out.push(DrawCmd::Sprite {
        texture: s.texture,
        pos: s.pos,
        rotation: s.rotation,
        scale: s.scale,
        opacity: if s.visible { 1.0 } else { 0.0 },
        z_order: s.z_order,
    });
}

fn label(out: &mut Vec<DrawCmd>, l: &Label) {
    out.push(DrawCmd::Text {
        font: l.region.font,
        text: l.text.clone(),
        pos: l.region.pos,
        color: l.color,
        align: Align::Left,
    });
}

/// Build the frame's draw list; strictly after both update passes
pub fn draw_list(game: &Game) -> Vec<DrawCmd> {
    let mut out = Vec::new();

    sprite(&mut out, &game.player.sprite);
    for s in game.projectiles.sprites() {
        sprite(&mut out, s);
    }

    match game.session.screen {
        Screen::MainMenu => {
            label(&mut out, &game.hud.title);
            label(&mut out, &game.hud.endless_mode);
            label(&mut out, &game.hud.timed_mode);
            label(&mut out, &game.hud.quit);
        }
        Screen::Gameplay => {
            if game.session.is_game_running {
                for asteroid in game.asteroids.asteroids.iter().filter(|a| !a.destroyed) {
                    sprite(&mut out, &asteroid.sprite);
                }
                sprite(&mut out, &game.alien.sprite);
                for s in game.alien_projectiles.sprites() {
                    sprite(&mut out, s);
                }
            } else {
                label(&mut out, &game.hud.pause_title);
                label(&mut out, &game.hud.pause_continue);
                label(&mut out, &game.hud.pause_back);
            }

            sprite(&mut out, &game.background);

            // Scoreboard is right-aligned into its corner
            out.push(DrawCmd::Text {
                font: game.hud.fonts.score,
                text: game.session.score.to_string(),
                pos: Vec2::new(1510.0, 110.0),
                color: Color::White,
                align: Align::Right,
            });
            if game.session.mode == Mode::Timed {
                out.push(DrawCmd::Text {
                    font: game.hud.fonts.timer,
                    text: game.session.timer_label(),
                    pos: Vec2::new(70.0, 90.0),
                    color: Color::White,
                    align: Align::Left,
                });
            }
            for icon in &game.health_icons[..game.player.current_health.max(0) as usize] {
                sprite(&mut out, &icon.sprite);
            }
        }
        Screen::WinMenu => {
            label(&mut out, &game.hud.win_text);
            out.push(DrawCmd::Text {
                font: game.hud.fonts.message,
                text: format!("Your final score is {}.", game.session.score),
                pos: Vec2::new(game.bounds.x / 2.0, 390.0),
                color: Color::White,
                align: Align::Center,
            });
            label(&mut out, &game.hud.retry);
            label(&mut out, &game.hud.back_to_title);
        }
        Screen::LoseMenu => {
            let message = if game.session.lose_by_time {
                "Game Over! You have run out of time."
            } else {
                "Game Over! You have run out of health."
            };
            out.push(DrawCmd::Text {
                font: game.hud.fonts.message,
                text: message.to_string(),
                pos: Vec2::new(250.0, 380.0),
                color: Color::Red,
                align: Align::Left,
            });
            out.push(DrawCmd::Text {
                font: game.hud.fonts.message,
                text: format!("Your final score is {}!", game.session.score),
                pos: Vec2::new(500.0, 460.0),
                color: Color::White,
                align: Align::Left,
            });
            label(&mut out, &game.hud.retry);
            label(&mut out, &game.hud.back_to_title);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::CatalogAssets;

    fn game() -> Game {
        Game::new(&mut CatalogAssets::new(), 42).unwrap()
    }

    fn texts(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_main_menu_draws_mode_labels() {
        let game = game();
        let cmds = draw_list(&game);
        let texts = texts(&cmds);
        assert!(texts.contains(&"Too Many Asteroids"));
        assert!(texts.contains(&"Endless Mode"));
        assert!(texts.contains(&"Timed Mode"));
        assert!(texts.contains(&"Quit"));
    }

    #[test]
    fn test_gameplay_draws_rocks_and_score() {
        let mut game = game();
        game.start_game();
        let cmds = draw_list(&game);

        let sprites = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Sprite { .. }))
            .count();
        // Ship + 3 pooled projectile slots + 3 asteroids + alien + 1 alien
        // slot + background + 5 health icons
        assert_eq!(sprites, 15);
        assert!(texts(&cmds).contains(&"0"));
    }

    #[test]
    fn test_timer_shown_only_in_timed_mode() {
        let mut game = game();
        game.start_game();
        assert!(!texts(&draw_list(&game)).iter().any(|t| t.starts_with("Time:")));

        game.session.mode = Mode::Timed;
        assert!(texts(&draw_list(&game)).iter().any(|t| t.starts_with("Time:")));
    }

    #[test]
    fn test_pause_swaps_world_for_menu() {
        let mut game = game();
        game.start_game();
        game.session.is_game_running = false;
        let cmds = draw_list(&game);
        let texts = texts(&cmds);
        assert!(texts.contains(&"Game Paused"));
        assert!(texts.contains(&"Continue"));
    }

    #[test]
    fn test_health_icons_track_current_health() {
        let mut game = game();
        game.start_game();
        game.player.current_health = 2;
        let cmds = draw_list(&game);
        let sprites = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Sprite { .. }))
            .count();
        // Three fewer icons than at full health
        assert_eq!(sprites, 12);
    }

    #[test]
    fn test_lose_message_names_the_reason() {
        let mut game = game();
        game.session.screen = Screen::LoseMenu;
        game.session.lose_by_time = true;
        assert!(texts(&draw_list(&game))
            .iter()
            .any(|t| t.contains("run out of time")));

        game.session.lose_by_time = false;
        assert!(texts(&draw_list(&game))
            .iter()
            .any(|t| t.contains("run out of health")));
    }

    #[test]
    fn test_draw_pass_does_not_mutate() {
        let game = game();
        let before = game.session.score;
        let _ = draw_list(&game);
        assert_eq!(game.session.score, before);
    }
}
