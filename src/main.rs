mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use display::Viewport;
use swarm_shooter::compute::{apply_input, init_state, tick};
use swarm_shooter::config::Config;
use swarm_shooter::entities::GameState;
use swarm_shooter::input::InputState;
use swarm_shooter::snapshot::build_snapshot;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  One `tick` per rendered frame, paced to
/// `config.frame_ms`.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let frame_time = Duration::from_millis(state.config.frame_ms);
    let mut input = InputState::new(state.player.x);

    loop {
        let frame_start = Instant::now();
        let frame = state.clock.current();

        let (width, height) = terminal::size()?;
        let view = Viewport { width, height };

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                    if kind == KeyEventKind::Press {
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            _ => {}
                        }
                    }
                    input.on_key(code, kind, frame);
                }
                Event::Mouse(mouse) => input.on_mouse(mouse, &state.config, view.width),
                _ => {}
            }
        }

        let tick_input = input.sample(frame, &state.config);
        apply_input(state, &tick_input);
        tick(state, rng);

        display::render(out, &build_snapshot(state), &state.config, view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    info!("starting with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = init_state(config, &mut rng);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
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
            Err(e) => {
                warn!("input thread stopped: {}", e);
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut state, &mut rng, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("stopped at frame {}", state.clock.current());
    result.map_err(Into::into)
}
