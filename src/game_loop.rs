//! The main loop: input → simulation → render → pace, one frame at a time.

use rand::Rng;

use crate::assets::Sprites;
use crate::audio::{sound_for, AudioSink};
use crate::clock::FrameClock;
use crate::compute::{init_state, jump, reset, tick};
use crate::display::{render, Canvas};
use crate::entities::{GameEvent, GameState, GameStatus};
use crate::error::GameError;
use crate::input::{InputEvent, InputSource};

/// The four things the loop talks to besides the game state.
pub struct Collaborators<C, I, A, K> {
    pub canvas: C,
    pub input: I,
    pub audio: A,
    pub clock: K,
}

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Loop iterations, including frames spent in `GameOver`.
    pub frames: u64,
    /// Score of the run in progress (or just finished) when the player quit.
    pub last_score: u32,
    /// Best score of the session, counting the unfinished run.
    pub best_score: u32,
}

/// Result of applying one input event.
#[derive(Debug)]
pub struct Handled {
    pub state: GameState,
    pub events: Vec<GameEvent>,
    pub quit: bool,
}

/// Apply a single input event to the game state.
pub fn handle_input(state: &GameState, input: InputEvent) -> Handled {
    match input {
        InputEvent::Quit => Handled {
            state: state.clone(),
            events: Vec::new(),
            quit: true,
        },
        InputEvent::Jump => {
            let (state, events) = jump(state);
            Handled {
                state,
                events,
                quit: false,
            }
        }
        InputEvent::Reset => {
            if state.status == GameStatus::GameOver {
                log::info!(
                    "Reset after scoring {} (high score {})",
                    state.score,
                    state.high_score.max(state.score)
                );
            }
            Handled {
                state: reset(state),
                events: Vec::new(),
                quit: false,
            }
        }
        // Surface changes are the canvas's business.
        InputEvent::Resize(..) => Handled {
            state: state.clone(),
            events: Vec::new(),
            quit: false,
        },
    }
}

fn play_all<A: AudioSink>(audio: &mut A, events: &[GameEvent]) {
    for sound in events.iter().copied().filter_map(sound_for) {
        audio.play(sound);
    }
}

/// Run frames until a quit request. The frame in which quit arrives is
/// still simulated and presented.
pub fn game_loop<C, I, A, K, R>(
    io: &mut Collaborators<C, I, A, K>,
    sprites: &Sprites,
    rng: &mut R,
) -> Result<SessionSummary, GameError>
where
    C: Canvas,
    I: InputSource,
    A: AudioSink,
    K: FrameClock,
    R: Rng,
{
    let mut state = init_state(0);
    let mut frames: u64 = 0;

    loop {
        frames += 1;
        let mut quit = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        for input in io.input.poll()? {
            if let InputEvent::Resize(cols, rows) = input {
                io.canvas.resize(cols, rows);
            }
            let handled = handle_input(&state, input);
            play_all(&mut io.audio, &handled.events);
            state = handled.state;
            quit |= handled.quit;
        }

        // ── Simulate ──────────────────────────────────────────────────────────
        if state.status == GameStatus::Playing {
            let (next, events) = tick(&state, rng);
            if next.status == GameStatus::GameOver {
                log::info!("Game over at frame {} with score {}", next.frame, next.score);
            }
            play_all(&mut io.audio, &events);
            state = next;
        }

        render(&mut io.canvas, &state, sprites)?;

        if quit {
            break;
        }
        io.clock.tick();
    }

    let summary = SessionSummary {
        frames,
        last_score: state.score,
        best_score: state.high_score.max(state.score),
    };
    log::info!("Session ended: {:?}", summary);
    Ok(summary)
}
