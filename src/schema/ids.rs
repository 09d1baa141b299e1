use serde::{Deserialize, Serialize};

/// Identifier of a registered scene.
///
/// The catalogue is closed: every scene the story can enter has a variant
/// here, and the registry holds exactly one procedure per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    Title,
    NoIdea,
    BadInstructions,
    WrongKey,
    StillWrong,
    FakeWin,
    GameOrLife,
    AreYouSure,
    FineOrNot,
    AskName,
    GlitchedName,
    FirstApple,
    SecondApple,
    ThirdApple,
    Anything,
    OrangeFail,
    PurposeCrisis,
    YouAreName,
    Win,
    AppleSpam,
    YouAreComputer,
    GuessNumber,
    HideAndSeek,
    HideSeekYes,
    HideSeekNo,
    HideSeekWhat,
    Trivia,
}

impl SceneId {
    pub const ALL: [SceneId; 27] = [
        Self::Title,
        Self::NoIdea,
        Self::BadInstructions,
        Self::WrongKey,
        Self::StillWrong,
        Self::FakeWin,
        Self::GameOrLife,
        Self::AreYouSure,
        Self::FineOrNot,
        Self::AskName,
        Self::GlitchedName,
        Self::FirstApple,
        Self::SecondApple,
        Self::ThirdApple,
        Self::Anything,
        Self::OrangeFail,
        Self::PurposeCrisis,
        Self::YouAreName,
        Self::Win,
        Self::AppleSpam,
        Self::YouAreComputer,
        Self::GuessNumber,
        Self::HideAndSeek,
        Self::HideSeekYes,
        Self::HideSeekNo,
        Self::HideSeekWhat,
        Self::Trivia,
    ];

    /// Returns the snake_case name used in logs and tooling output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::NoIdea => "no_idea",
            Self::BadInstructions => "bad_instructions",
            Self::WrongKey => "wrong_key",
            Self::StillWrong => "still_wrong",
            Self::FakeWin => "fake_win",
            Self::GameOrLife => "game_or_life",
            Self::AreYouSure => "are_you_sure",
            Self::FineOrNot => "fine_or_not",
            Self::AskName => "ask_name",
            Self::GlitchedName => "glitched_name",
            Self::FirstApple => "first_apple",
            Self::SecondApple => "second_apple",
            Self::ThirdApple => "third_apple",
            Self::Anything => "anything",
            Self::OrangeFail => "orange_fail",
            Self::PurposeCrisis => "purpose_crisis",
            Self::YouAreName => "you_are_name",
            Self::Win => "win",
            Self::AppleSpam => "apple_spam",
            Self::YouAreComputer => "you_are_computer",
            Self::GuessNumber => "guess_number",
            Self::HideAndSeek => "hide_and_seek",
            Self::HideSeekYes => "hide_seek_yes",
            Self::HideSeekNo => "hide_seek_no",
            Self::HideSeekWhat => "hide_seek_what",
            Self::Trivia => "trivia",
        }
    }

    /// Parse a scene from its snake_case name.
    pub fn from_name(name: &str) -> Option<SceneId> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }
}

/// The single active gate deciding which inputs the router honours.
///
/// A scene may move through several tokens without changing scene
/// (e.g. narrating, then waiting for a key once narration is done).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateToken {
    AwaitBegin,
    Rambling,
    AwaitSpace,
    AwaitEnter,
    AwaitJ,
    FakeWin,
    GameOrLife,
    AwaitSure,
    FeelingCheck,
    NameIntro,
    NameInput,
    Glitching,
    AwaitFirstA,
    FirstAppleLoading,
    AwaitSecondA,
    SecondAppleLoading,
    AwaitThirdA,
    ThirdAppleLoading,
    AwaitFinalA,
    Wishing,
    AwaitO,
    Embarrassed,
    Identity,
    AffirmName,
    AffirmComputer,
    EndWin,
    AppleSpam,
    EndStall,
    GuessIntro,
    Guessing,
    HideSeek,
    Trivia,
}

impl StateToken {
    pub const ALL: [StateToken; 32] = [
        Self::AwaitBegin,
        Self::Rambling,
        Self::AwaitSpace,
        Self::AwaitEnter,
        Self::AwaitJ,
        Self::FakeWin,
        Self::GameOrLife,
        Self::AwaitSure,
        Self::FeelingCheck,
        Self::NameIntro,
        Self::NameInput,
        Self::Glitching,
        Self::AwaitFirstA,
        Self::FirstAppleLoading,
        Self::AwaitSecondA,
        Self::SecondAppleLoading,
        Self::AwaitThirdA,
        Self::ThirdAppleLoading,
        Self::AwaitFinalA,
        Self::Wishing,
        Self::AwaitO,
        Self::Embarrassed,
        Self::Identity,
        Self::AffirmName,
        Self::AffirmComputer,
        Self::EndWin,
        Self::AppleSpam,
        Self::EndStall,
        Self::GuessIntro,
        Self::Guessing,
        Self::HideSeek,
        Self::Trivia,
    ];

    /// Terminal tokens end a run. They accept the restart override, even
    /// mid-narration, and never honour back navigation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::EndWin | Self::EndStall)
    }
}
