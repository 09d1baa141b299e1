/// Presenter directives: the opaque effects the engine asks a renderer
/// to perform.
use serde::{Deserialize, Serialize};

/// Identifier of an offered choice, unique within an engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceId(pub u32);

/// A full-screen visual glyph or an item in the token strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    RedCircle,
    BlueCircle,
    WhiteSquare,
    BlueSquare,
    Hourglass,
    Apple,
}

impl Glyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::RedCircle => "🔴",
            Self::BlueCircle => "🔵",
            Self::WhiteSquare => "⬜",
            Self::BlueSquare => "🟦",
            Self::Hourglass => "⏳",
            Self::Apple => "🍎",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Directive {
    /// Discard all rendered narration.
    ClearNarration,
    /// Replace narration with a single unsequenced message.
    ShowNarration(String),
    /// Append one narration line. May contain `*italic*` markup.
    RenderLine(String),
    /// Append a blank spacer line.
    RenderSpacer,
    /// Start the transient emphasis pulse on the narration area.
    Emphasize,
    EndEmphasis,
    ShowTextInput {
        placeholder: String,
    },
    HideTextInput,
    AddChoice {
        id: ChoiceId,
        label: String,
        disabled: bool,
    },
    DisableChoice(ChoiceId),
    ClearChoices,
    SetHint(String),
    ClearHint,
    SetVisual(Glyph),
    ClearVisual,
    /// Append a persistent glyph to the accumulating token strip.
    AppendToken(Glyph),
    /// Short-lived celebratory particle effect.
    Confetti {
        duration_ms: u64,
        particles: u32,
    },
}
