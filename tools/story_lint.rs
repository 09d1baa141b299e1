/// Story Lint: checks that every scene leaves the player a way forward.
///
/// Usage: story_lint [--config <path>]
///
/// Each scene is entered on a fresh engine and the clock is run until
/// nothing is pending. The scene passes if the token it settles on is
/// terminal, accepts a key or text submission, or has an enabled choice.

use bad_instructions::core::engine::Engine;
use bad_instructions::core::presenter::Screen;
use bad_instructions::core::router;
use bad_instructions::schema::ids::{SceneId, StateToken};
use std::process;
use tracing_subscriber::EnvFilter;

struct Report {
    scene: SceneId,
    token: StateToken,
    listens: bool,
    choices: usize,
    text_input: bool,
    settled_ms: u64,
}

impl Report {
    fn is_dead_end(&self) -> bool {
        !self.token.is_terminal() && !self.listens && self.choices == 0
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut config_path = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("Usage: story_lint [--config <path>]");
                process::exit(0);
            }
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            other => {
                eprintln!("ERROR: Unknown argument '{}'", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut reports = Vec::new();
    for scene in SceneId::ALL {
        match lint_scene(scene, config_path.as_deref()) {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("ERROR: Failed to build engine: {}", e);
                process::exit(1);
            }
        }
    }

    println!("\n=== Story Lint Report ===\n");

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for report in &reports {
        println!(
            "{:<18} -> {:<20} keys:{:<5} choices:{} input:{:<5} settled at {}ms",
            report.scene.name(),
            format!("{:?}", report.token),
            report.listens,
            report.choices,
            report.text_input,
            report.settled_ms
        );
        if report.is_dead_end() {
            errors.push(format!(
                "scene '{}' settles on {:?} with no way forward",
                report.scene.name(),
                report.token
            ));
        }
        if report.text_input && !report.listens {
            warnings.push(format!(
                "scene '{}' shows a text box nobody reads",
                report.scene.name()
            ));
        }
    }

    println!();
    for warning in &warnings {
        println!("WARNING: {}", warning);
    }
    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} scenes, {} errors, {} warnings",
        reports.len(),
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_scene(
    scene: SceneId,
    config_path: Option<&str>,
) -> Result<Report, bad_instructions::core::engine::EngineError> {
    let mut builder = Engine::builder();
    if let Some(path) = config_path {
        builder = builder.config_file(path);
    }
    let mut engine = builder.build()?;
    let mut screen = Screen::new();

    engine.enter(scene, true);
    let settled_ms = engine.run_until_idle();
    engine.present_to(&mut screen);

    let token = engine.token();
    Ok(Report {
        scene,
        token,
        listens: router::listens(token),
        choices: screen.choices.iter().filter(|c| !c.disabled).count(),
        text_input: screen.text_input.is_some(),
        settled_ms,
    })
}
