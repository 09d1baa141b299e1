/// Walkthrough: plays one full route through the story headlessly and
/// prints every line, hint and choice as it appears.
///
/// Run with: cargo run --example walkthrough

use bad_instructions::core::engine::{Engine, Outcome};
use bad_instructions::core::markup;
use bad_instructions::core::presenter::{Presenter, Screen};
use bad_instructions::schema::directive::Directive;
use bad_instructions::schema::input::{Input, Key};

enum Move {
    Key(Key),
    Text(&'static str),
    Choose(&'static str),
}

const ROUTE: &[Move] = &[
    Move::Key(Key::Enter),
    Move::Key(Key::Space),
    Move::Key(Key::Enter),
    Move::Key(Key::Char('j')),
    Move::Choose("Talking about life"),
    Move::Key(Key::Space),
    Move::Choose("Fine"),
    Move::Text("Ada"),
    Move::Key(Key::Char('a')),
    Move::Key(Key::Char('a')),
    Move::Key(Key::Char('a')),
    Move::Key(Key::Char('a')),
    Move::Choose("make an orange"),
    Move::Key(Key::Char('o')),
    Move::Choose("yeah, it kinda is"),
    Move::Choose("You are Ada."),
    Move::Key(Key::Space),
    Move::Key(Key::Space),
    Move::Key(Key::Space),
    Move::Key(Key::Space),
    Move::Key(Key::Space),
    Move::Choose("yes"),
    Move::Key(Key::Enter),
];

fn main() {
    let mut engine = match Engine::builder().build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let mut screen = Screen::new();

    engine.start();
    settle(&mut engine, &mut screen);

    for step in ROUTE {
        let input = match step {
            Move::Key(key) => {
                println!("\n> key {:?}", key);
                Input::Key(*key)
            }
            Move::Text(text) => {
                println!("\n> type {:?}", text);
                Input::text(*text)
            }
            Move::Choose(label) => {
                println!("\n> choose {:?}", label);
                match screen.choice(label) {
                    Some(id) => Input::Choice(id),
                    None => {
                        eprintln!("Choice {:?} is not on offer", label);
                        std::process::exit(1);
                    }
                }
            }
        };

        let outcome = engine.dispatch(input);
        if outcome != Outcome::Handled && outcome != Outcome::Restarted {
            eprintln!("Input was not taken: {:?} at {:?}", outcome, engine.token());
            std::process::exit(1);
        }
        settle(&mut engine, &mut screen);
    }

    println!(
        "\nFinished at {:?} after {}ms of story time.",
        engine.token(),
        engine.now()
    );
}

/// Run the clock until nothing is pending, echoing what a player would see.
fn settle(engine: &mut Engine, screen: &mut Screen) {
    engine.run_until_idle();
    for directive in engine.drain() {
        match &directive {
            Directive::RenderLine(text) | Directive::ShowNarration(text) => {
                println!("  {}", markup::plain(text));
            }
            Directive::RenderSpacer => println!(),
            Directive::SetHint(hint) => println!("  {}", hint),
            Directive::SetVisual(glyph) | Directive::AppendToken(glyph) => {
                println!("  {}", glyph.symbol());
            }
            Directive::AddChoice {
                label, disabled, ..
            } => {
                let mark = if *disabled { " (disabled)" } else { "" };
                println!("  [{}]{}", label, mark);
            }
            Directive::Confetti { duration_ms, .. } => {
                println!("  *** confetti for {}ms ***", duration_ms);
            }
            _ => {}
        }
        screen.present(&directive);
    }
}
