//=========================================================================
// Flappy Bird Engine
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ validates config
//         ├─ with_channel_capacity() ├─ loads assets
//         ├─ with_asset_dir()        ├─ wires core + renderer
//         └─ with_config()           └─ runs platform (blocks until exit)
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::config::{ConfigError, GameConfig};
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::GameCore;
use crate::platform::Platform;
use crate::render::{AssetError, Assets, Renderer};

//=== EngineError =========================================================

/// Anything that stops the game from starting or keeps it from running.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 30.0 (simulation ticks per second)
/// - **Channel capacity**: 128 events
/// - **Asset directory**: the working directory
/// - **Config**: [`GameConfig::default()`]
///
/// # Examples
///
/// ```no_run
/// use flappy_bird::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_asset_dir("assets")
///     .build()
///     .run()?;
/// # Ok::<(), flappy_bird::EngineError>(())
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    channel_capacity: usize,
    asset_dir: PathBuf,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            channel_capacity: 128,
            asset_dir: PathBuf::from("."),
        }
    }

    /// Sets the simulation rate while playing.
    ///
    /// Physics is frame-coupled, so this changes game speed as well.
    ///
    /// Default: 30.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.config.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the directory holding the images (and optionally `font.ttf`).
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Replaces the gameplay constants. Validated in [`Engine::run`].
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {}, assets: {})",
            self.config.tps,
            self.channel_capacity,
            self.asset_dir.display()
        );

        Engine {
            config: self.config,
            channel_capacity: self.channel_capacity,
            asset_dir: self.asset_dir,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime. Create via [`EngineBuilder`].
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   └─► Platform (Winit event loop)
///         ├─► GameCore  (ticks at TPS while playing)
///         └─► Renderer  (softbuffer presentation)
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
pub struct Engine {
    config: GameConfig,
    channel_capacity: usize,
    asset_dir: PathBuf,
}

impl Engine {
    /// Starts the game and blocks until the player quits.
    ///
    /// # Lifecycle
    ///
    /// 1. Validates the configuration
    /// 2. Loads sprites and the font (fatal if missing)
    /// 3. Creates the platform → core channel
    /// 4. Runs the platform event loop (blocks here)
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] for an invalid config, missing assets, or a
    /// window/surface that cannot be created.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime (TPS: {})", self.config.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("Event channel created (capacity: {})", self.channel_capacity);

        //--- 2. Build the core (validates configuration) -----------------
        let title = self.config.title.clone();
        let core = GameCore::new(self.config.clone(), rx, StdRng::from_entropy())?;

        //--- 3. Load assets ------------------------------------------------
        let assets = Assets::load(&self.asset_dir, &self.config)?;
        let renderer = Renderer::new(assets, &self.config);

        //--- 4. Launch the platform --------------------------------------
        let platform = Platform::new(title, tx, core, renderer);

        info!("Platform initialized, entering event loop");
        platform.run()?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
