/// Scene descriptions: what a scene wants done, interpreted by the engine.
///
/// Scene procedures never touch a presenter directly. They return a
/// `Script`: an ordered list of steps (directives, token changes, timed
/// reveals, deferred continuations, scene entries, offered choices).
use serde::{Deserialize, Serialize};

use super::directive::{Directive, Glyph};
use super::ids::{SceneId, StateToken};

/// How a reveal treats narration already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevealMode {
    /// Discard previous narration before the first line.
    #[default]
    Clear,
    /// Keep previous narration and add to it.
    Append,
}

/// One sequencer job: lines revealed one per tick, then a continuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reveal {
    pub lines: Vec<String>,
    /// Base delay between lines, before the global speed multiplier.
    pub delay_ms: u64,
    /// Line indices that fire the emphasis pulse as they render.
    pub emphasize: Vec<usize>,
    pub mode: RevealMode,
    /// Runs once, synchronously with the last rendered line.
    pub then: Script,
}

impl Reveal {
    pub const DEFAULT_DELAY_MS: u64 = 1900;

    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            delay_ms: Self::DEFAULT_DELAY_MS,
            emphasize: Vec::new(),
            mode: RevealMode::Clear,
            then: Script::new(),
        }
    }

    pub fn delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn emphasize(mut self, indices: &[usize]) -> Self {
        self.emphasize = indices.to_vec();
        self
    }

    pub fn append(mut self) -> Self {
        self.mode = RevealMode::Append;
        self
    }

    pub fn then(mut self, script: Script) -> Self {
        self.then = script;
        self
    }
}

/// The three wrong answers of the broken trivia question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriviaAnswer {
    Five,
    TwentyTwo,
    Potato,
}

impl TriviaAnswer {
    pub const ALL: [TriviaAnswer; 3] = [Self::Five, Self::TwentyTwo, Self::Potato];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Five => "5",
            Self::TwentyTwo => "22",
            Self::Potato => "Potato",
        }
    }
}

/// The callback bound to an offered choice when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Enter a scene, recording it in the navigation history.
    Enter(SceneId),
    /// Run a scene procedure without recording it.
    Invoke(SceneId),
    /// Any of the three wishes the narrator cannot grant.
    ImpossibleWish,
    MakeOrange,
    Answer(TriviaAnswer),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Step {
    Present(Directive),
    SetToken(StateToken),
    Reveal(Reveal),
    /// Run `then` after `delay_ms` on the scheduler clock (not speed-scaled).
    After { delay_ms: u64, then: Script },
    /// Like `After`, but the delay follows the text speed.
    Pause { delay_ms: u64, then: Script },
    Enter { scene: SceneId, record: bool },
    /// Offer a labelled option. `None` renders it permanently disabled.
    Offer { label: String, action: Option<Action> },
    /// Disable the currently offered option bound to this action.
    Withdraw(Action),
    ClearChoices,
    /// Celebration sized by the engine's configured particle count.
    Confetti { duration_ms: u64 },
}

/// An ordered list of steps with a chaining builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append every step of `other`.
    pub fn chain(mut self, other: Script) -> Self {
        self.steps.extend(other.steps);
        self
    }

    pub fn present(self, directive: Directive) -> Self {
        self.step(Step::Present(directive))
    }

    pub fn token(self, token: StateToken) -> Self {
        self.step(Step::SetToken(token))
    }

    pub fn reveal(self, reveal: Reveal) -> Self {
        self.step(Step::Reveal(reveal))
    }

    pub fn after(self, delay_ms: u64, then: Script) -> Self {
        self.step(Step::After { delay_ms, then })
    }

    /// Hold what is on screen for a reading pause, then run `then`.
    pub fn pause(self, delay_ms: u64, then: Script) -> Self {
        self.step(Step::Pause { delay_ms, then })
    }

    pub fn enter(self, scene: SceneId) -> Self {
        self.step(Step::Enter {
            scene,
            record: true,
        })
    }

    pub fn invoke(self, scene: SceneId) -> Self {
        self.step(Step::Enter {
            scene,
            record: false,
        })
    }

    pub fn offer(self, label: impl Into<String>, action: Action) -> Self {
        self.step(Step::Offer {
            label: label.into(),
            action: Some(action),
        })
    }

    pub fn offer_disabled(self, label: impl Into<String>) -> Self {
        self.step(Step::Offer {
            label: label.into(),
            action: None,
        })
    }

    pub fn withdraw(self, action: Action) -> Self {
        self.step(Step::Withdraw(action))
    }

    pub fn clear_choices(self) -> Self {
        self.step(Step::ClearChoices)
    }

    pub fn confetti(self, duration_ms: u64) -> Self {
        self.step(Step::Confetti { duration_ms })
    }

    pub fn narrate(self, text: impl Into<String>) -> Self {
        self.present(Directive::ShowNarration(text.into()))
    }

    pub fn hint(self, text: impl Into<String>) -> Self {
        self.present(Directive::SetHint(text.into()))
    }

    pub fn clear_hint(self) -> Self {
        self.present(Directive::ClearHint)
    }

    pub fn visual(self, glyph: Glyph) -> Self {
        self.present(Directive::SetVisual(glyph))
    }

    pub fn clear_visual(self) -> Self {
        self.present(Directive::ClearVisual)
    }

    pub fn show_input(self, placeholder: impl Into<String>) -> Self {
        self.present(Directive::ShowTextInput {
            placeholder: placeholder.into(),
        })
    }

    pub fn hide_input(self) -> Self {
        self.present(Directive::HideTextInput)
    }

    /// Clear choices, visual, text input and hint: the usual scene prelude.
    pub fn reset_stage(self) -> Self {
        self.clear_choices().clear_visual().hide_input().clear_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_defaults() {
        let reveal = Reveal::new(["a", "b"]);
        assert_eq!(reveal.lines, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(reveal.delay_ms, Reveal::DEFAULT_DELAY_MS);
        assert_eq!(reveal.mode, RevealMode::Clear);
        assert!(reveal.emphasize.is_empty());
        assert!(reveal.then.is_empty());
    }

    #[test]
    fn reset_stage_clears_four_surfaces() {
        let script = Script::new().reset_stage();
        assert_eq!(
            script.steps,
            vec![
                Step::ClearChoices,
                Step::Present(Directive::ClearVisual),
                Step::Present(Directive::HideTextInput),
                Step::Present(Directive::ClearHint),
            ]
        );
    }
}
