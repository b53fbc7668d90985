//! Game state and session context
//!
//! The top-level state machine, the shared session blackboard, and the
//! aggregate [`Game`] that owns every entity population. All spawn
//! randomness flows through one seeded RNG owned here, so a given seed
//! replays identically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::alien::Alien;
use super::asteroids::AsteroidField;
use super::collision::TextRegion;
use super::entity::{HealthIcon, Ship, Sprite};
use super::pool::ProjectilePool;
use crate::assets::{AssetError, AssetServer, FontHandle};
use crate::consts::*;
use crate::render::Color;

/// Top-level game screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Gameplay,
    WinMenu,
    LoseMenu,
}

/// Session mode, chosen on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Endless,
    Timed,
}

/// Pause-menu cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOption {
    Continue,
    BackToTitle,
}

/// Shared session blackboard
///
/// Created once, reset on full restart only; read by every update pass.
#[derive(Debug, Clone)]
pub struct Session {
    pub score: u32,
    pub time: f32,
    pub max_score: u32,
    pub max_time: f32,
    /// False while the pause menu is up
    pub is_game_running: bool,
    pub mode: Mode,
    pub screen: Screen,
    /// Which lose message to show (out of time vs out of health)
    pub lose_by_time: bool,
}

impl Session {
    fn new() -> Self {
        Self {
            score: 0,
            time: MAX_TIME,
            max_score: MAX_SCORE,
            max_time: MAX_TIME,
            is_game_running: true,
            mode: Mode::Endless,
            screen: Screen::MainMenu,
            lose_by_time: false,
        }
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score += amount;
    }

    /// Countdown display, minutes:seconds with zero-padded seconds
    pub fn timer_label(&self) -> String {
        let total = self.time.max(0.0);
        let minutes = (total / 60.0).floor() as u32;
        let seconds = (total % 60.0).floor() as u32;
        format!("Time: {minutes}:{seconds:02}")
    }
}

/// A positioned text label with a hit-testable region
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub region: TextRegion,
    pub color: Color,
}

impl Label {
    fn new(
        assets: &dyn AssetServer,
        font: FontHandle,
        text: &str,
        x: f32,
        y: f32,
        color: Color,
    ) -> Self {
        let (w, h) = assets.text_size(font, text);
        Self {
            text: text.to_string(),
            region: TextRegion {
                pos: Vec2::new(x, y),
                size: Vec2::new(w, h),
                font,
            },
            color,
        }
    }
}

/// Font handles for text the renderer composes on the fly
#[derive(Debug, Clone, Copy)]
pub struct HudFonts {
    pub score: FontHandle,
    pub timer: FontHandle,
    pub message: FontHandle,
}

/// Menu and HUD labels; the interactive ones double as input targets
#[derive(Debug, Clone)]
pub struct Hud {
    pub title: Label,
    pub endless_mode: Label,
    pub timed_mode: Label,
    pub retry: Label,
    pub back_to_title: Label,
    pub quit: Label,
    pub pause_title: Label,
    pub pause_continue: Label,
    pub pause_back: Label,
    pub win_text: Label,
    pub fonts: HudFonts,
}

const FONT_PATH: &str = "fonts/KGHAPPY.ttf";

impl Hud {
    fn load(assets: &mut dyn AssetServer) -> Result<Self, AssetError> {
        let main = assets.load_font(FONT_PATH, 80)?;
        let sub = assets.load_font(FONT_PATH, 48)?;
        let score = assets.load_font(FONT_PATH, 60)?;
        let timer = assets.load_font(FONT_PATH, 40)?;
        let pause = assets.load_font(FONT_PATH, 60)?;
        let pause_button = assets.load_font(FONT_PATH, 45)?;
        let message = assets.load_font(FONT_PATH, 46)?;
        let win = assets.load_font(FONT_PATH, 60)?;

        Ok(Self {
            title: Label::new(
                assets,
                main,
                "Too Many Asteroids",
                310.0,
                200.0,
                Color::CadetBlue,
            ),
            endless_mode: Label::new(assets, sub, "Endless Mode", 250.0, 500.0, Color::White),
            timed_mode: Label::new(assets, sub, "Timed Mode", 1000.0, 500.0, Color::White),
            retry: Label::new(assets, sub, "Retry", 250.0, 600.0, Color::White),
            back_to_title: Label::new(assets, sub, "Back to Title", 1000.0, 600.0, Color::White),
            quit: Label::new(assets, sub, "Quit", 725.0, 850.0, Color::White),
            pause_title: Label::new(assets, pause, "Game Paused", 550.0, 240.0, Color::White),
            pause_continue: Label::new(assets, pause_button, "Continue", 680.0, 500.0, Color::White),
            pause_back: Label::new(
                assets,
                pause_button,
                "Back to Title",
                630.0,
                580.0,
                Color::DarkGrey,
            ),
            win_text: Label::new(assets, win, "You win!", 645.0, 300.0, Color::Green),
            fonts: HudFonts {
                score,
                timer,
                message,
            },
        })
    }
}

/// The whole simulation: session context plus every entity population
#[derive(Debug, Clone)]
pub struct Game {
    pub session: Session,
    pub bounds: Vec2,
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Ship,
    pub asteroids: AsteroidField,
    pub projectiles: ProjectilePool,
    pub alien: Alien,
    pub alien_projectiles: ProjectilePool,
    pub health_icons: Vec<HealthIcon>,
    pub background: Sprite,
    pub hud: Hud,
    pub pause_option: PauseOption,
}

impl Game {
    /// Load every asset and build the initial state
    ///
    /// Any failed load aborts setup; no entity activates with an unset
    /// visual.
    pub fn new(assets: &mut dyn AssetServer, seed: u64) -> Result<Self, AssetError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Vec2::new(GAME_WIDTH, GAME_HEIGHT);

        let mut background =
            Sprite::new(assets.load_texture("images/custom/spaceBackground.png")?);
        background.z_order = -15;

        let ship_texture = assets.load_texture("images/simple-space/ship_G.png")?;
        let mut player = Ship::new(ship_texture);
        player.sprite.pos = bounds / 2.0 - Vec2::new(ship_texture.width, ship_texture.height) / 2.0;
        player.collision.pos = player.sprite.pos;

        let mut asteroids = AsteroidField::load(assets)?;
        asteroids.reseed(player.sprite.pos, bounds, &mut rng);

        let projectiles = ProjectilePool::new(
            assets.load_texture("images/simple-space/star_small.png")?,
            PROJECTILE_LIFESPAN,
            PROJECTILE_POOL_SIZE,
        );
        // Single-slot pool: at most one alien shot is ever live
        let alien_projectiles = ProjectilePool::new(
            assets.load_texture("images/simple-space/star_tiny.png")?,
            ALIEN_PROJECTILE_LIFESPAN,
            1,
        );

        let mut alien = Alien::load(assets)?;
        alien.respawn(bounds, &mut rng);
        alien.reset_timer(&mut rng);

        let health_icons = (0..SHIP_HEALTH as usize)
            .map(|i| HealthIcon::new(ship_texture, i))
            .collect();

        let hud = Hud::load(assets)?;

        Ok(Self {
            session: Session::new(),
            bounds,
            seed,
            rng,
            player,
            asteroids,
            projectiles,
            alien,
            alien_projectiles,
            health_icons,
            background,
            hud,
            pause_option: PauseOption::Continue,
        })
    }

    /// Enter gameplay from the main menu: recenter the collision position
    ///
    /// The rendered sprite catches up on the next move.
    pub fn start_game(&mut self) {
        let size = Vec2::new(
            self.player.sprite.texture.width,
            self.player.sprite.texture.height,
        );
        self.player.collision.pos = self.bounds / 2.0 - size / 2.0;
        self.session.screen = Screen::Gameplay;
    }

    /// Reseed the asteroid field; with `full_restart`, also reset health,
    /// score, timers, and every projectile and the alien
    pub fn respawn(&mut self, full_restart: bool) {
        let ship_pos = self.player.sprite.pos;
        self.asteroids.reseed(ship_pos, self.bounds, &mut self.rng);

        if full_restart {
            self.player.current_health = self.player.health;

            self.projectiles.clear();
            self.alien_projectiles.clear();

            self.alien.respawn(self.bounds, &mut self.rng);
            self.alien.reset_timer(&mut self.rng);

            self.session.time = self.session.max_time;
            self.session.score = 0;
        }
    }

    /// Move the pause cursor and update the label highlight
    pub fn set_pause_option(&mut self, option: PauseOption) {
        self.pause_option = option;
        let on_continue = option == PauseOption::Continue;
        self.hud.pause_continue.color = if on_continue {
            Color::White
        } else {
            Color::DarkGrey
        };
        self.hud.pause_back.color = if on_continue {
            Color::DarkGrey
        } else {
            Color::White
        };
    }
}
