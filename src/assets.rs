//! Asset provisioning seam
//!
//! The core never touches files or GPU textures. At setup it requests
//! textures and fonts by path through [`AssetServer`] and keeps the opaque
//! handles; a handle carries the source dimensions so collision boxes and
//! screen wrap work without reading anything back from a renderer.

use thiserror::Error;

/// Asset loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("texture not found: {0}")]
    TextureNotFound(String),
    #[error("font not found: {0}")]
    FontNotFound(String),
}

/// Opaque texture handle with source dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureHandle {
    pub id: u32,
    pub width: f32,
    pub height: f32,
}

/// Opaque font handle (path + point size resolved by the shell)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontHandle {
    pub id: u32,
    pub size: u32,
}

/// Provider of textures, fonts, and text metrics
///
/// Load failures must surface here; the core refuses to activate an entity
/// whose required asset failed to load.
pub trait AssetServer {
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError>;
    fn load_font(&mut self, path: &str, size: u32) -> Result<FontHandle, AssetError>;
    /// Rendered size of `text` in the given font, (width, height)
    fn text_size(&self, font: FontHandle, text: &str) -> (f32, f32);
}

/// In-memory asset server backed by a catalog of known sprite dimensions
///
/// Used by the headless binary and the test suite; a real shell would wrap
/// its texture loader in the same trait.
#[derive(Debug, Default)]
pub struct CatalogAssets {
    next_id: u32,
}

/// Known source dimensions for the shipped sprite set
const CATALOG: &[(&str, f32, f32)] = &[
    ("images/custom/spaceBackground.png", 1600.0, 900.0),
    ("images/simple-space/ship_G.png", 96.0, 64.0),
    ("images/simple-space/enemy_E.png", 88.0, 60.0),
    ("images/simple-space/star_small.png", 28.0, 28.0),
    ("images/simple-space/star_tiny.png", 18.0, 18.0),
    ("images/simple-space/meteor_detailedLarge.png", 120.0, 98.0),
    ("images/simple-space/meteor_large.png", 102.0, 84.0),
    ("images/simple-space/meteor_squareDetailedLarge.png", 106.0, 104.0),
    ("images/simple-space/meteor_squareLarge.png", 96.0, 96.0),
];

const FONT_PATH: &str = "fonts/KGHAPPY.ttf";

impl CatalogAssets {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl AssetServer for CatalogAssets {
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError> {
        match CATALOG.iter().find(|(p, _, _)| *p == path) {
            Some(&(_, width, height)) => Ok(TextureHandle {
                id: self.alloc_id(),
                width,
                height,
            }),
            None => {
                log::warn!("texture not in catalog: {path}");
                Err(AssetError::TextureNotFound(path.to_string()))
            }
        }
    }

    fn load_font(&mut self, path: &str, size: u32) -> Result<FontHandle, AssetError> {
        if path == FONT_PATH {
            Ok(FontHandle {
                id: self.alloc_id(),
                size,
            })
        } else {
            Err(AssetError::FontNotFound(path.to_string()))
        }
    }

    fn text_size(&self, font: FontHandle, text: &str) -> (f32, f32) {
        // Flat-width approximation; a real shell measures glyphs
        let width = text.chars().count() as f32 * font.size as f32 * 0.6;
        (width, font.size as f32)
    }
}
