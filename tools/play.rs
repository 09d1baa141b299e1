/// Play: run the story in a terminal, in real time.
///
/// Usage: play [--config <path>] [--speed <n>]
///
/// Keys go straight to the game. While the text box is up, typing fills it
/// and Enter submits. Number keys pick offered choices. Esc or Ctrl-C quits.
/// Set RUST_LOG to see engine logs on stderr.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use bad_instructions::core::confetti::{self, Particle};
use bad_instructions::core::engine::Engine;
use bad_instructions::core::markup;
use bad_instructions::core::presenter::Screen;
use bad_instructions::schema::input::{Input, Key};

/// Redraw cadence while confetti is flying.
const FRAME: Duration = Duration::from_millis(33);
/// Poll timeout when nothing is scheduled.
const IDLE: Duration = Duration::from_millis(250);
/// Approximate pixel size of one terminal cell, for confetti travel.
const CELL_PX: (f32, f32) = (8.0, 16.0);

struct Burst {
    started_ms: u64,
    duration_ms: u64,
    particles: Vec<Particle>,
}

enum Command {
    Quit,
    Send(Input),
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut config_path = None;
    let mut speed = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--speed" if i + 1 < args.len() => {
                i += 1;
                match args[i].parse::<f64>() {
                    Ok(value) => speed = Some(value),
                    Err(_) => {
                        eprintln!("Invalid speed: {}", args[i]);
                        std::process::exit(1);
                    }
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut builder = Engine::builder();
    if let Some(ref path) = config_path {
        builder = builder.config_file(path);
    }
    if let Some(speed) = speed {
        builder = builder.text_speed(speed);
    }
    let mut engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout();
    let result = terminal::enable_raw_mode()
        .and_then(|_| execute!(stdout, EnterAlternateScreen, cursor::Hide))
        .and_then(|_| run(&mut engine, &mut stdout));

    // Restore the terminal even if the loop failed.
    let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: play [--config <path>] [--speed <n>]");
    println!();
    println!("  --config <path>  engine config (RON), e.g. data/engine.ron");
    println!("  --speed <n>      narration delay multiplier (higher is slower)");
}

fn run(engine: &mut Engine, out: &mut impl Write) -> io::Result<()> {
    let mut screen = Screen::new();
    let mut typed = String::new();
    let mut bursts: Vec<Burst> = Vec::new();
    let mut rng = StdRng::from_entropy();
    let clock = Instant::now();

    engine.start();

    loop {
        engine.present_to(&mut screen);
        for celebration in screen.celebrations.drain(..) {
            bursts.push(Burst {
                started_ms: engine.now(),
                duration_ms: celebration.duration_ms,
                particles: confetti::burst(&mut rng, celebration.particles),
            });
        }
        bursts.retain(|b| engine.now() < b.started_ms + b.duration_ms);

        draw(out, &screen, &typed, &bursts, engine.now())?;

        let mut timeout = engine
            .next_due_in()
            .map(Duration::from_millis)
            .unwrap_or(IDLE);
        if !bursts.is_empty() {
            timeout = timeout.min(FRAME);
        }

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match command(key, &screen, &mut typed) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::Send(input)) => {
                            engine.dispatch(input);
                        }
                        None => {}
                    }
                }
            }
        }

        let wall_ms = clock.elapsed().as_millis() as u64;
        engine.advance(wall_ms.saturating_sub(engine.now()));
    }
}

/// Map a key press to game input. Edits `typed` while the text box is up.
fn command(key: KeyEvent, screen: &Screen, typed: &mut String) -> Option<Command> {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return Some(Command::Quit);
    }

    if screen.text_input.is_some() {
        return match key.code {
            KeyCode::Char(c) => {
                typed.push(c);
                None
            }
            KeyCode::Backspace => {
                typed.pop();
                None
            }
            KeyCode::Enter => Some(Command::Send(Input::Text(std::mem::take(typed)))),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Command::Send(Input::Key(Key::Enter))),
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let index = c.to_digit(10)? as usize - 1;
            let choice = screen.choices.get(index)?;
            Some(Command::Send(Input::Choice(choice.id)))
        }
        KeyCode::Char(c) => Some(Command::Send(Input::key(c))),
        _ => None,
    }
}

fn draw(
    out: &mut impl Write,
    screen: &Screen,
    typed: &str,
    bursts: &[Burst],
    now_ms: u64,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let width = cols.saturating_sub(4).max(10) as usize;

    queue!(out, Clear(ClearType::All))?;
    let mut row: u16 = 1;

    if let Some(glyph) = screen.visual {
        queue!(out, MoveTo(2, row), Print(glyph.symbol()))?;
        row += 2;
    }
    if !screen.tokens.is_empty() {
        let strip: String = screen.tokens.iter().map(|g| g.symbol()).collect();
        queue!(out, MoveTo(2, row), Print(strip))?;
        row += 2;
    }

    let colour = if screen.emphasized {
        Color::Red
    } else {
        Color::White
    };
    for line in &screen.narration {
        for wrapped in wrap(&markup::spans(line), width) {
            queue!(out, MoveTo(2, row), SetForegroundColor(colour))?;
            for span in wrapped {
                if span.italic {
                    queue!(out, SetAttribute(Attribute::Italic))?;
                }
                queue!(out, Print(&span.text), SetAttribute(Attribute::NoItalic))?;
            }
            row += 1;
        }
    }
    queue!(out, ResetColor)?;
    row += 1;

    if let Some(placeholder) = &screen.text_input {
        let shown = if typed.is_empty() {
            format!("> {}", placeholder)
        } else {
            format!("> {}_", typed)
        };
        queue!(out, MoveTo(2, row), Print(shown))?;
        row += 2;
    }

    for (i, choice) in screen.choices.iter().enumerate() {
        let colour = if choice.disabled {
            Color::DarkGrey
        } else {
            Color::Cyan
        };
        queue!(
            out,
            MoveTo(2, row),
            SetForegroundColor(colour),
            Print(format!("[{}] {}", i + 1, choice.label)),
            ResetColor
        )?;
        row += 1;
    }

    if let Some(hint) = &screen.hint {
        queue!(
            out,
            MoveTo(2, rows.saturating_sub(2)),
            SetForegroundColor(Color::DarkGrey),
            Print(hint),
            ResetColor
        )?;
    }

    for burst in bursts {
        let elapsed = now_ms.saturating_sub(burst.started_ms);
        for particle in &burst.particles {
            let Some((dx, dy)) = particle.offset_at(elapsed) else {
                continue;
            };
            let x = particle.origin.0 * cols as f32 + dx / CELL_PX.0;
            let y = particle.origin.1 * rows as f32 + dy / CELL_PX.1;
            if x < 0.0 || y < 0.0 || x >= cols as f32 || y >= rows as f32 {
                continue;
            }
            queue!(
                out,
                MoveTo(x as u16, y as u16),
                SetForegroundColor(hue_colour(particle.hue)),
                Print('*'),
                ResetColor
            )?;
        }
    }

    out.flush()
}

fn hue_colour(hue: u16) -> Color {
    match hue / 60 {
        0 => Color::Red,
        1 => Color::Yellow,
        2 => Color::Green,
        3 => Color::Cyan,
        4 => Color::Blue,
        _ => Color::Magenta,
    }
}

/// Word-wrap styled spans into rows no wider than `width` characters.
fn wrap(spans: &[markup::Span], width: usize) -> Vec<Vec<markup::Span>> {
    let mut rows: Vec<Vec<markup::Span>> = vec![Vec::new()];
    let mut used = 0;

    for span in spans {
        for word in span.text.split_inclusive(' ') {
            let len = word.chars().count();
            if used + len > width && used > 0 {
                rows.push(Vec::new());
                used = 0;
            }
            used += len;
            if let Some(row) = rows.last_mut() {
                match row.last_mut() {
                    Some(last) if last.italic == span.italic => last.text.push_str(word),
                    _ => row.push(markup::Span {
                        text: word.to_string(),
                        italic: span.italic,
                    }),
                }
            }
        }
    }
    rows
}
