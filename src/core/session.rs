/// Session state shared by the router and every scene procedure.
use crate::core::gate::CompletionGate;
use crate::core::navigation::NavigationStack;
use crate::schema::ids::StateToken;
use crate::schema::script::TriviaAnswer;

/// An ephemeral per-scene counter, reset when its owning scene is entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(u32);

impl Counter {
    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Increment up to `limit`. Returns the new value, or `None` once the
    /// limit was already reached.
    pub fn bump_to(&mut self, limit: u32) -> Option<u32> {
        if self.0 >= limit {
            return None;
        }
        self.0 += 1;
        Some(self.0)
    }
}

/// Everything a run mutates. Owned by the engine and lent to scene
/// procedures and progress handlers; never persisted.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: StateToken,
    pub history: NavigationStack,
    player_name: String,
    default_name: String,
    /// Neutral "continue" presses within a branch.
    pub presses: Counter,
    /// Guesses made in the number game.
    pub guesses: Counter,
    pub trivia: CompletionGate<TriviaAnswer>,
    /// One-shot guard for the purpose crisis.
    pub crisis_started: bool,
}

impl Session {
    pub fn new(default_name: impl Into<String>) -> Self {
        let default_name = default_name.into();
        Self {
            token: StateToken::AwaitBegin,
            history: NavigationStack::new(),
            player_name: default_name.clone(),
            default_name,
            presses: Counter::default(),
            guesses: Counter::default(),
            trivia: CompletionGate::new(&TriviaAnswer::ALL),
            crisis_started: false,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Store a submitted name. Blank submissions keep the current name.
    pub fn set_player_name(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.player_name = trimmed.to_string();
        true
    }

    /// Full restart: history, guards, counters and name back to defaults.
    pub fn reset(&mut self) {
        *self = Session::new(std::mem::take(&mut self.default_name));
    }
}
