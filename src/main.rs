//! Terminal Snail Trail runner (default binary).
//!
//! One key press is one turn. Inputs come from the keyboard or from a replayed
//! key log; the screen, and optionally an event log, observe every turn.

use anyhow::Result;
use env_logger::Env;
use log::info;

use snail_trail::config::{Config, USAGE};
use snail_trail::core::GameEnd;
use snail_trail::engine::{play_session, InputProvider};
use snail_trail::input::KeyboardInput;
use snail_trail::record::{EventRecorder, KeyLog, RecordingInput, ReplayInput};
use snail_trail::term::{GameView, TerminalScreen};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load(&args)?;
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Read the key log before touching the terminal so a bad path fails cleanly.
    let replay = config.replay_keys.as_ref().map(KeyLog::load).transpose()?;
    let mut events = config.event_log.as_ref().map(EventRecorder::create).transpose()?;

    let (seed, source): (u32, Box<dyn InputProvider>) = match replay {
        Some(log) => (log.seed, Box::new(ReplayInput::new(log))),
        None => (config.seed_or_clock(), Box::new(KeyboardInput::new())),
    };
    let mut input = RecordingInput::new(source, seed);

    let mut screen = TerminalScreen::new(GameView::new().with_pellets_shown(config.show_pellets));
    screen.enter()?;

    let result = play_session(seed, &mut input, &mut (&mut screen, &mut events));

    // Always try to restore terminal state.
    let _ = screen.exit();

    if let Some(path) = &config.record_keys {
        input.log().save(path)?;
    }

    let ends = result?;
    let won = ends.iter().filter(|&&e| e == GameEnd::Won).count();
    let died = ends.iter().filter(|&&e| e == GameEnd::Died).count();
    info!(
        "played {} games from seed {}: {} won, {} lost",
        ends.len(),
        seed,
        won,
        died
    );
    if let Some(fps) = screen.stats().average_fps() {
        info!("average frame rate {:.3}", fps);
    }
    Ok(())
}
