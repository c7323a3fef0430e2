use std::fs::File;
use std::io::{stdout, BufWriter};

use anyhow::Context;
use crossterm::{cursor, terminal, ExecutableCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super_jumper::assets::{SoundBank, Sprites};
use super_jumper::audio::TerminalBell;
use super_jumper::clock::FixedRateClock;
use super_jumper::display::TerminalCanvas;
use super_jumper::game_loop::{game_loop, Collaborators, SessionSummary};
use super_jumper::input::TerminalInput;
use super_jumper::Settings;

// ── Logging ───────────────────────────────────────────────────────────────────

/// stdout is the game screen, so logs go to a file or nowhere.
fn init_logging(settings: &Settings) {
    let Some(path) = &settings.log_file else { return };
    match File::create(path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(err) => eprintln!("cannot open log file {}: {err}", path.display()),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let settings_path = Settings::default_path();
    let loaded = Settings::load(&settings_path);
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => Settings::default(),
    };
    init_logging(&settings);
    match loaded {
        Ok(Some(_)) => log::info!("Loaded settings from {}", settings_path.display()),
        Ok(None) => log::info!("No settings at {}, using defaults", settings_path.display()),
        Err(err) => log::warn!("{err}; using default settings"),
    }

    let sprites = Sprites::load(&settings.asset_dir);
    let sounds = SoundBank::probe(&settings.asset_dir);
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("failed to switch the terminal to raw mode")?;
    let setup = out
        .execute(terminal::EnterAlternateScreen)
        .and_then(|out| out.execute(cursor::Hide))
        .map(|_| ())
        .and_then(|_| terminal::size());

    let result = match setup {
        Ok((cols, rows)) => {
            let mut io = Collaborators {
                canvas: TerminalCanvas::new(out, cols, rows),
                input: TerminalInput,
                audio: TerminalBell::new(stdout(), sounds, settings.sound),
                clock: FixedRateClock::new(settings.frame_interval()),
            };
            game_loop(&mut io, &sprites, &mut rng).context("game loop failed")
        }
        Err(err) => Err(err).context("failed to initialise the terminal"),
    };

    // Always restore the terminal
    let mut restore = stdout();
    let _ = restore.execute(cursor::Show);
    let _ = restore.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match result {
        Ok(SessionSummary { best_score, .. }) => {
            println!("Thanks for playing! Best score this session: {best_score}");
            Ok(())
        }
        Err(err) => {
            log::error!("{err:#}");
            Err(err)
        }
    }
}
