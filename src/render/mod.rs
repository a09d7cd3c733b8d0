//=========================================================================
// Renderer
//
// Turns a read-only view of the game into pixels.
//
// Responsibilities:
// - Own the loaded assets and the logical-resolution canvas
// - Compose the screen for the active game state
// - Hand the finished canvas to the platform's surface buffer
//
// Notes:
// Nothing here mutates the simulation. The renderer may run at any rate;
// it only ever shows the latest state. The game-over overlay sits on the
// frame before the crash, never on the overlapping one.
//
//=========================================================================

//=== Submodules ==========================================================

mod assets;
mod canvas;

//=== Public API ==========================================================

pub use assets::AssetError;

pub(crate) use assets::Assets;

//=== Internal Imports ====================================================

use canvas::{text_width, Canvas};

use crate::core::config::GameConfig;
use crate::core::scene::GameState;
use crate::core::world::{Snapshot, World};

//=== Text Styles =========================================================

const BODY_SIZE: f32 = 30.0;
const HEADING_SIZE: f32 = 40.0;
const TEXT_COLOR: u32 = 0x0000_0000;

//=== Renderer ============================================================

pub(crate) struct Renderer {
    assets: Assets,
    canvas: Canvas,
}

impl Renderer {
    pub(crate) fn new(assets: Assets, config: &GameConfig) -> Self {
        Self {
            assets,
            canvas: Canvas::new(config.screen_width, config.screen_height),
        }
    }

    //--- Composition ------------------------------------------------------

    /// Redraws the whole canvas for `state`.
    pub(crate) fn draw(&mut self, state: GameState, world: &World) {
        self.canvas.blit(&self.assets.background, 0, 0);

        match state {
            GameState::Start => {
                self.centred_text("Flappy Bird", HEADING_SIZE, 150.0);
                self.centred_text("Press Space to start", BODY_SIZE, 250.0);
            }
            GameState::Playing => {
                self.draw_playfield(world.config(), &world.snapshot());
            }
            GameState::GameOver => {
                self.draw_playfield(world.config(), &world.previous());
                self.centred_text("Game Over", HEADING_SIZE, 150.0);
                let high = format!("High Score: {}", world.score.high);
                self.centred_text(&high, BODY_SIZE, 250.0);
                self.centred_text("Press Space to play again", BODY_SIZE, 350.0);
            }
        }
    }

    fn draw_playfield(&mut self, config: &GameConfig, frame: &Snapshot) {
        let layout = Layout::of(config, frame);

        self.canvas.blit(&self.assets.pipe, layout.top_pipe.0, layout.top_pipe.1);
        self.canvas
            .blit(&self.assets.pipe, layout.bottom_pipe.0, layout.bottom_pipe.1);
        self.canvas.blit(&self.assets.bird, layout.bird.0, layout.bird.1);

        let score = format!("Score: {}", frame.score);
        self.canvas
            .draw_text(&self.assets.font, &score, BODY_SIZE, 10.0, 10.0, TEXT_COLOR);
    }

    fn centred_text(&mut self, text: &str, size: f32, top: f32) {
        let width = text_width(&self.assets.font, text, size);
        let x = (self.canvas.width() as f32 - width) / 2.0;
        self.canvas
            .draw_text(&self.assets.font, text, size, x, top, TEXT_COLOR);
    }

    //--- Presentation -----------------------------------------------------

    /// Copies the last drawn frame into a surface buffer of the given size.
    pub(crate) fn present(&self, target: &mut [u32], width: u32, height: u32) {
        self.canvas.present_scaled(target, width, height);
    }

    pub(crate) fn logical_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }
}

//=== Layout ==============================================================

/// Top-left sprite positions for the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    top_pipe: (i32, i32),
    bottom_pipe: (i32, i32),
    bird: (i32, i32),
}

impl Layout {
    fn of(config: &GameConfig, frame: &Snapshot) -> Self {
        let x = frame.obstacle.x.floor() as i32;
        let gap = frame.obstacle.gap_offset;
        let half = f64::from(config.bird_size) / 2.0;

        Self {
            top_pipe: (x, gap - config.screen_height as i32),
            bottom_pipe: (x, gap + config.gap_height),
            bird: (
                (config.bird_x() - half).floor() as i32,
                (frame.bird.y - half).floor() as i32,
            ),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
