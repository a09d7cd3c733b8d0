//=========================================================================
// Assets
//=========================================================================
//
// Loads the three sprites and the text font once at startup.
//
// Sprites are scaled to their logical size at load time so the renderer
// only ever copies pixels. Missing or unreadable files are fatal.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{debug, info};
use rusttype::Font;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;

//=== File Names ==========================================================

const BACKGROUND_FILE: &str = "background.png";
const BIRD_FILE: &str = "bird1.png";
const PIPE_FILE: &str = "pipe.png";
const FONT_FILE: &str = "font.ttf";

/// Fallback fonts, tried in order after the asset directory.
const SYSTEM_FONTS: &[&str] = &[
    // Arial
    "C:\\Windows\\Fonts\\arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    // DejaVu Sans
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    // Liberation Sans
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    // Helvetica
    "/System/Library/Fonts/Helvetica.ttc",
];

//=== AssetError ==========================================================

/// Startup failures while loading images or the font.
#[derive(Debug, Error)]
pub enum AssetError {
    /// An image could not be opened or decoded.
    #[error("Failed to load image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A font file exists but could not be read.
    #[error("Failed to read font {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A font file was read but is not a usable TrueType/OpenType font.
    #[error("Invalid font data in {0}")]
    FontParse(PathBuf),

    /// None of the font locations exist.
    #[error("No font found, searched: {}", display_paths(.searched))]
    FontNotFound { searched: Vec<PathBuf> },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

//=== Sprite ==============================================================

/// A pre-scaled image in `0xAARRGGBB` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    opaque: bool,
}

impl Sprite {
    /// Scales `image` to `width`×`height` with nearest-neighbour sampling.
    ///
    /// Opaque sprites drop their alpha channel and are copied without
    /// blending.
    pub(crate) fn from_rgba(image: &RgbaImage, width: u32, height: u32, opaque: bool) -> Self {
        let scaled = imageops::resize(image, width, height, FilterType::Nearest);
        let pixels = scaled
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                let a = if opaque { 0xFF } else { a };
                u32::from_be_bytes([a, r, g, b])
            })
            .collect();

        Self {
            width,
            height,
            pixels,
            opaque,
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub(crate) fn is_opaque(&self) -> bool {
        self.opaque
    }
}

//=== Assets ==============================================================

/// Everything the renderer draws with.
pub(crate) struct Assets {
    pub(crate) background: Sprite,
    pub(crate) bird: Sprite,
    pub(crate) pipe: Sprite,
    pub(crate) font: Font<'static>,
}

impl Assets {
    /// Loads every asset from `dir`, scaled for `config`.
    pub(crate) fn load(dir: &Path, config: &GameConfig) -> Result<Self, AssetError> {
        let background = load_sprite(
            &dir.join(BACKGROUND_FILE),
            config.screen_width,
            config.screen_height,
            true,
        )?;
        let bird = load_sprite(&dir.join(BIRD_FILE), config.bird_size, config.bird_size, false)?;
        let pipe = load_sprite(
            &dir.join(PIPE_FILE),
            config.obstacle_width,
            config.screen_height,
            true,
        )?;
        let font = load_font(dir)?;

        info!(target: "render", "Assets loaded from {}", dir.display());
        Ok(Self {
            background,
            bird,
            pipe,
            font,
        })
    }
}

//=== Loaders =============================================================

fn load_sprite(path: &Path, width: u32, height: u32, opaque: bool) -> Result<Sprite, AssetError> {
    let image = image::open(path)
        .map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    debug!(
        target: "render",
        "Loaded {} ({}x{} → {}x{})",
        path.display(),
        image.width(),
        image.height(),
        width,
        height
    );
    Ok(Sprite::from_rgba(&image, width, height, opaque))
}

/// First existing font wins: the asset directory, then the system list.
fn load_font(dir: &Path) -> Result<Font<'static>, AssetError> {
    let candidates = std::iter::once(dir.join(FONT_FILE))
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

    let mut searched = Vec::new();
    for path in candidates {
        if !path.is_file() {
            searched.push(path);
            continue;
        }

        let bytes = fs::read(&path).map_err(|source| AssetError::FontRead {
            path: path.clone(),
            source,
        })?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| AssetError::FontParse(path.clone()))?;

        info!(target: "render", "Using font {}", path.display());
        return Ok(font);
    }

    Err(AssetError::FontNotFound { searched })
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn sprite_is_scaled_to_requested_size() {
        let image = RgbaImage::from_pixel(2, 3, Rgba([10, 20, 30, 255]));

        let sprite = Sprite::from_rgba(&image, 8, 6, true);

        assert_eq!((sprite.width(), sprite.height()), (8, 6));
        assert_eq!(sprite.pixels().len(), 48);
        assert!(sprite.pixels().iter().all(|&p| p == 0xFF0A141E));
    }

    #[test]
    fn opaque_sprite_drops_alpha() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 0]));

        let opaque = Sprite::from_rgba(&image, 1, 1, true);
        let keyed = Sprite::from_rgba(&image, 1, 1, false);

        assert_eq!(opaque.pixels(), &[0xFF010203]);
        assert_eq!(keyed.pixels(), &[0x00010203]);
        assert!(opaque.is_opaque() && !keyed.is_opaque());
    }

    #[test]
    fn nearest_neighbour_keeps_hard_edges() {
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

        let sprite = Sprite::from_rgba(&image, 4, 1, true);

        assert_eq!(sprite.pixels(), &[0xFF000000, 0xFF000000, 0xFFFFFFFF, 0xFFFFFFFF]);
    }

    #[test]
    fn missing_image_reports_its_path() {
        let dir = Path::new("/nonexistent-asset-dir");

        let err = match Assets::load(dir, &GameConfig::default()) {
            Err(err) => err,
            Ok(_) => panic!("loading from a missing directory should fail"),
        };

        match err {
            AssetError::Image { path, .. } => assert_eq!(path, dir.join(BACKGROUND_FILE)),
            other => panic!("Expected Image error, got {:?}", other),
        }
    }

    #[test]
    fn font_not_found_lists_every_path() {
        let err = AssetError::FontNotFound {
            searched: vec![PathBuf::from("a/font.ttf"), PathBuf::from("/b.ttf")],
        };
        assert_eq!(err.to_string(), "No font found, searched: a/font.ttf, /b.ttf");
    }
}
