//=========================================================================
// Gameplay Integration Tests
//=========================================================================
//
// Drives `GameCore` through its public API the way the platform does:
// key batches over a crossbeam channel, ticks at synthetic instants.
//
//=========================================================================

use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Sender};
use flappy_bird::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

//=== Harness =============================================================

struct Harness {
    core: GameCore<ChaCha8Rng>,
    tx: Sender<PlatformEvent>,
    clock: Instant,
    frame: Duration,
}

impl Harness {
    fn new(config: GameConfig, seed: u64) -> Self {
        let (tx, rx) = unbounded();
        let frame = config.frame_duration();
        Self {
            core: GameCore::new(config, rx, ChaCha8Rng::seed_from_u64(seed)).unwrap(),
            tx,
            clock: Instant::now(),
            frame,
        }
    }

    fn press(&self, key: KeyCode) {
        self.tx
            .send(PlatformEvent::Inputs(vec![
                InputEvent::KeyDown { key },
                InputEvent::KeyUp { key },
            ]))
            .unwrap();
    }

    fn tick(&mut self) -> TickControl {
        self.core.tick(self.clock)
    }

    fn advance(&mut self, by: Duration) -> TickControl {
        self.clock += by;
        self.tick()
    }

    /// Ticks `n` times on the frame grid, stopping early on exit.
    fn frames(&mut self, n: u32) -> TickControl {
        for _ in 0..n {
            if self.advance(self.frame) == TickControl::Exit {
                return TickControl::Exit;
            }
        }
        TickControl::Continue
    }

    fn begin(&mut self) {
        self.press(KeyCode::Space);
        assert_eq!(self.tick(), TickControl::Continue);
        assert_eq!(self.core.state(), GameState::Playing);
    }
}

/// No gravity and a fixed gap around the bird: the bird hovers safely
/// until it jumps.
fn hover_config() -> GameConfig {
    GameConfig {
        gravity: 0.0,
        gap_margin: 200,
        opening_gap_range: 200..=200,
        restart_gap_range: 200..=200,
        ..GameConfig::default()
    }
}

//=== Start Screen ========================================================

#[test]
fn start_screen_ignores_time_and_other_keys() {
    let mut game = Harness::new(GameConfig::default(), 1);

    game.press(KeyCode::Unidentified);
    game.advance(Duration::from_secs(10));

    assert_eq!(game.core.state(), GameState::Start);
    assert_eq!(game.core.wakeup(), Wakeup::OnInput);
    assert_eq!(game.core.world().bird.y, 300.0);
}

#[test]
fn space_starts_the_game() {
    let mut game = Harness::new(GameConfig::default(), 1);
    let start = game.clock;

    game.begin();

    assert_eq!(game.core.wakeup(), Wakeup::At(start + game.frame));
    assert_eq!(game.core.world().obstacle.x, 400.0);
}

//=== Playing =============================================================

#[test]
fn forty_frames_of_free_fall() {
    let mut game = Harness::new(GameConfig::default(), 7);
    game.begin();

    game.frames(40);

    let bird = game.core.world().bird;
    assert_eq!(bird.y, 505.0);
    assert_eq!(bird.velocity, 10.0);
    assert_eq!(game.core.state(), GameState::Playing);
}

#[test]
fn free_fall_crashes_on_frame_47() {
    let mut game = Harness::new(GameConfig::default(), 7);
    game.begin();

    game.frames(46);
    assert_eq!(game.core.state(), GameState::Playing);

    game.frames(1);
    assert_eq!(game.core.state(), GameState::GameOver);
    assert_eq!(game.core.world().score.high, 0);

    // The frame shown under the overlay is frame 46: 300 + 0.125 * 46 * 47
    assert_eq!(game.core.world().previous().bird.y, 570.25);
    assert!(game.core.world().bird.y > 575.0);
}

#[test]
fn identical_seeds_and_inputs_replay_identically() {
    let run = |seed| {
        let mut game = Harness::new(GameConfig::default(), seed);
        game.begin();
        let mut trace = Vec::new();
        for frame in 0..120 {
            if frame % 9 == 0 {
                game.press(KeyCode::Space);
            }
            game.frames(1);
            let world = game.core.world();
            trace.push((game.core.state(), world.bird, world.obstacle));
        }
        trace
    };

    assert_eq!(run(42), run(42));
}

//=== Game Over & Restart =================================================

#[test]
fn full_round_trip_keeps_high_score() {
    let mut game = Harness::new(hover_config(), 3);
    game.begin();

    // 480 px at 2 px per frame, plus one to go strictly past the edge
    game.frames(241);
    assert_eq!(game.core.world().score.current, 1);
    assert_eq!(game.core.world().obstacle.x, 400.0);

    // Fly into the ceiling: top = 275 - 5k goes negative on k = 56
    game.press(KeyCode::Space);
    game.frames(55);
    assert_eq!(game.core.state(), GameState::Playing);
    game.frames(1);
    assert_eq!(game.core.state(), GameState::GameOver);

    let crashed_at = game.clock;
    assert_eq!(game.core.world().score.high, 1);
    assert_eq!(game.core.wakeup(), Wakeup::At(crashed_at + Duration::from_secs(2)));

    // Locked out: the press waits for the delay to end
    game.press(KeyCode::Space);
    game.advance(Duration::from_secs(1));
    assert_eq!(game.core.state(), GameState::GameOver);

    game.advance(Duration::from_secs(1));
    assert_eq!(game.core.state(), GameState::Playing);

    let world = game.core.world();
    assert_eq!(world.score, Scoreboard { current: 0, high: 1 });
    assert_eq!(world.bird.y, 300.0);
    assert_eq!(world.bird.velocity, 0.0);
    assert_eq!(world.obstacle.x, 400.0);
    assert_eq!(world.obstacle.gap_offset, 200);
    assert_eq!(world.difficulty.obstacle_speed, 2.0);
}

#[test]
fn press_during_delay_restarts_when_delay_ends() {
    let mut game = Harness::new(GameConfig::default(), 1);
    game.begin();
    game.frames(47);
    assert_eq!(game.core.state(), GameState::GameOver);

    game.press(KeyCode::Space);
    game.advance(Duration::from_secs(1));
    assert_eq!(game.core.state(), GameState::GameOver);

    game.advance(Duration::from_secs(1));
    assert_eq!(game.core.state(), GameState::Playing);
    assert_eq!(game.core.world().bird.y, 300.0);
}

#[test]
fn late_first_tick_after_delay_still_restarts() {
    let mut game = Harness::new(GameConfig::default(), 1);
    game.begin();
    game.frames(47);
    assert_eq!(game.core.state(), GameState::GameOver);

    game.press(KeyCode::Space);
    game.advance(Duration::from_millis(2050));

    assert_eq!(game.core.state(), GameState::Playing);
}

#[test]
fn game_over_without_input_waits_past_the_delay() {
    let mut game = Harness::new(GameConfig::default(), 1);
    game.begin();
    game.frames(47);

    game.advance(Duration::from_secs(5));

    assert_eq!(game.core.state(), GameState::GameOver);
    assert_eq!(game.core.wakeup(), Wakeup::OnInput);

    game.press(KeyCode::Space);
    game.advance(Duration::from_millis(10));
    assert_eq!(game.core.state(), GameState::Playing);
}

//=== Quitting ============================================================

#[test]
fn escape_quits_during_play() {
    let mut game = Harness::new(GameConfig::default(), 1);
    game.begin();

    game.press(KeyCode::Escape);
    assert_eq!(game.frames(1), TickControl::Exit);
}

#[test]
fn escape_quits_during_game_over_lockout() {
    let mut game = Harness::new(GameConfig::default(), 1);
    game.begin();
    game.frames(47);
    assert_eq!(game.core.state(), GameState::GameOver);

    game.press(KeyCode::Escape);
    assert_eq!(game.advance(Duration::from_millis(100)), TickControl::Exit);
}

#[test]
fn window_close_quits() {
    let mut game = Harness::new(GameConfig::default(), 1);
    game.tx.send(PlatformEvent::WindowClosed).unwrap();
    assert_eq!(game.tick(), TickControl::Exit);
}

#[test]
fn dropped_platform_quits() {
    let (tx, rx) = unbounded::<PlatformEvent>();
    let mut core = GameCore::new(GameConfig::default(), rx, ChaCha8Rng::seed_from_u64(0)).unwrap();
    drop(tx);

    assert_eq!(core.tick(Instant::now()), TickControl::Exit);
}
