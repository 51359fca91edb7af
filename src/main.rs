mod display;

use std::collections::HashMap;
use std::io::{self, stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};
use rand::thread_rng;

use wave_shooter::clock::{Clock, SystemClock};
use wave_shooter::compute::{apply_input, init_state, tick};
use wave_shooter::config;
use wave_shooter::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use wave_shooter::entities::EntireGameStateInfo;
use wave_shooter::input::InputSnapshot;
use wave_shooter::render::draw_objects;

use display::TerminalSurface;

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms at
/// 60 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

fn snapshot(key_frame: &HashMap<KeyCode, u64>, frame: u64, quit: bool) -> InputSnapshot {
    InputSnapshot {
        left: any_held(
            key_frame,
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        ),
        right: any_held(
            key_frame,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        ),
        fire: is_held(key_frame, &KeyCode::Char(' '), frame),
        restart: any_held(key_frame, &[KeyCode::Char('r'), KeyCode::Char('R')], frame),
        quit,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  One iteration is one tick:
/// input → update → draw, paced to the fixed frame interval.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key, so several keys can be held at once.
/// Keyboard-enhancement terminals also send `Release`, which drops the key
/// immediately; classic terminals let it expire after `HOLD_WINDOW`.
fn game_loop<W: Write>(
    surface: &mut TerminalSurface<W>,
    state: &mut EntireGameStateInfo,
    rx: &mpsc::Receiver<Event>,
) -> io::Result<()> {
    let clock = SystemClock::new();
    let mut rng = thread_rng();
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let now = clock.now_ms();
        let mut quit = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => quit = true,
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                quit = true
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                _ => {}
            }
        }

        let input = snapshot(&key_frame, frame, quit);
        if input.quit {
            info!("Quit requested at frame {}", frame);
            return Ok(());
        }

        *state = apply_input(state, &input, now);
        *state = tick(state, now, &mut rng);
        draw_objects(surface, state, now)?;

        let elapsed = frame_start.elapsed();
        if elapsed < config::FRAME_INTERVAL {
            thread::sleep(config::FRAME_INTERVAL - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    simple_logging::log_to_file(config::log_file(), config::log_level())?;
    info!("Starting wave_shooter.");

    let mut state = init_state(&config::player_name(), SCREEN_WIDTH, SCREEN_HEIGHT).map_err(|e| {
        error!("Cannot start session: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().map_err(|e| {
        error!("Failed to enable raw mode: {}", e);
        e
    })?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = TerminalSurface::new(&mut out, SCREEN_WIDTH, SCREEN_HEIGHT)
        .and_then(|mut surface| game_loop(&mut surface, &mut state, &rx));
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("Exiting with score {}", state.score);
    result
}
