//! WASM bindings for bad-instructions: drives the story from a browser page.
//!
//! The host feeds keys, text submissions, choice clicks and elapsed time,
//! then drains directives as JSON and renders them itself.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use bad_instructions::core::confetti;
use bad_instructions::core::config::EngineConfig;
use bad_instructions::core::engine::{Engine, Outcome};
use bad_instructions::core::markup;
use bad_instructions::schema::directive::ChoiceId;
use bad_instructions::schema::input::{Input, Key};

// ---------------------------------------------------------------------------
// Embedded defaults, compiled into the WASM binary
// ---------------------------------------------------------------------------
const DEFAULT_CONFIG: &str = include_str!("../../data/engine.ron");

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct SpanInfo {
    text: String,
    italic: bool,
}

#[derive(serde::Serialize)]
struct ParticleInfo {
    origin_x: f32,
    origin_y: f32,
    travel_x: f32,
    travel_y: f32,
    hue: u16,
    delay_ms: u64,
    flight_ms: u64,
}

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Ignored => "ignored",
        Outcome::Blocked => "blocked",
        Outcome::Restarted => "restarted",
        Outcome::WentBack => "went_back",
        Outcome::Handled => "handled",
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// Game: the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct Game {
    engine: Engine,
}

#[wasm_bindgen]
impl Game {
    /// Create a game from a RON config, or the bundled defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_ron: Option<String>) -> Result<Game, JsError> {
        let source = config_ron.as_deref().unwrap_or(DEFAULT_CONFIG);
        let config = EngineConfig::parse_ron(source)
            .map_err(|e| JsError::new(&format!("Config parse error: {e}")))?;

        let engine = Engine::builder()
            .config(config)
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;

        Ok(Game { engine })
    }

    /// Enter the title scene.
    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Route a key by its browser name (`KeyboardEvent.key`). Returns the
    /// outcome: "handled", "ignored", "blocked", "went_back" or "restarted".
    /// Unknown key names are ignored.
    pub fn key(&mut self, name: &str) -> String {
        let outcome = match Key::parse(name) {
            Some(key) => self.engine.dispatch(Input::Key(key)),
            None => Outcome::Ignored,
        };
        outcome_name(outcome).to_string()
    }

    /// Submit the contents of the text box.
    pub fn submit_text(&mut self, value: &str) -> String {
        outcome_name(self.engine.dispatch(Input::text(value))).to_string()
    }

    /// Select an offered choice by the id from its `add_choice` directive.
    pub fn choose(&mut self, id: u32) -> String {
        outcome_name(self.engine.dispatch(Input::Choice(ChoiceId(id)))).to_string()
    }

    /// Advance story time by `elapsed_ms` of wall time.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.engine.advance(u64::from(elapsed_ms));
    }

    /// Milliseconds until something is due, for scheduling the next
    /// `advance`. `undefined` when nothing is pending.
    pub fn next_due_in(&self) -> Option<u32> {
        self.engine
            .next_due_in()
            .map(|ms| u32::try_from(ms).unwrap_or(u32::MAX))
    }

    pub fn is_busy(&self) -> bool {
        self.engine.is_busy()
    }

    /// Current state token, e.g. "AwaitBegin".
    pub fn token(&self) -> String {
        format!("{:?}", self.engine.token())
    }

    /// Directives emitted since the last call, as a JSON array of
    /// `{"kind": ..., "value": ...}` objects.
    pub fn drain(&mut self) -> Result<String, JsError> {
        to_json(&self.engine.drain())
    }

    /// Split a narration line into styled spans. Returns a JSON array of
    /// `{"text", "italic"}` objects.
    pub fn spans(line: &str) -> Result<String, JsError> {
        let spans: Vec<SpanInfo> = markup::spans(line)
            .into_iter()
            .map(|span| SpanInfo {
                text: span.text,
                italic: span.italic,
            })
            .collect();
        to_json(&spans)
    }

    /// Lay out a confetti burst. Positions are fractions of the viewport;
    /// travel is in pixels.
    pub fn confetti(count: u32, seed: u64) -> Result<String, JsError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles: Vec<ParticleInfo> = confetti::burst(&mut rng, count)
            .into_iter()
            .map(|p| ParticleInfo {
                origin_x: p.origin.0,
                origin_y: p.origin.1,
                travel_x: p.travel.0,
                travel_y: p.travel.1,
                hue: p.hue,
                delay_ms: p.delay_ms,
                flight_ms: p.flight_ms,
            })
            .collect();
        to_json(&particles)
    }
}
