//=========================================================================
// Flappy Bird — Binary Entry Point
//
// Installs the log sink and runs the game with default settings.
// Assets are read from the working directory. `RUST_LOG` overrides the
// default `info` filter.
//
//=========================================================================

use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = flappy_bird::EngineBuilder::new().build().run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
