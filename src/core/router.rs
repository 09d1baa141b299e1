/// Input router: the per-token transition table and the two global
/// overrides (restart and back).
///
/// Keys and text submissions are looked up by `(token, input)`. Choice
/// selections never appear in the table: each offered option carries its
/// own bound action (see `Engine::dispatch`).
use crate::schema::ids::{SceneId, StateToken};
use crate::schema::input::{Input, Key};

pub const BACK_KEY: Key = Key::Char('b');
pub const RESTART_KEY: Key = Key::Enter;

/// A within-scene progress handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Space in the identity-affirming branch.
    AffirmName,
    /// Space in the computer-affirming branch.
    AffirmComputer,
    SubmitName(String),
    Guess(String),
    AddApple,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Enter(SceneId),
    Progress(Progress),
}

/// Restart is honoured from terminal tokens, even mid-narration.
pub fn is_restart(token: StateToken, input: &Input) -> bool {
    token.is_terminal() && *input == Input::Key(RESTART_KEY)
}

/// Back is honoured from every non-terminal token.
pub fn is_back(token: StateToken, input: &Input) -> bool {
    !token.is_terminal() && *input == Input::Key(BACK_KEY)
}

/// The transition legal for `input` under `token`, if any.
pub fn route(token: StateToken, input: &Input) -> Option<Transition> {
    use StateToken as T;

    let key = match input {
        Input::Key(key) => Some(*key),
        _ => None,
    };
    let text = match input {
        Input::Text(text) => Some(text.as_str()),
        _ => None,
    };
    let enter = |scene| Some(Transition::Enter(scene));
    let progress = |p| Some(Transition::Progress(p));

    match token {
        T::AwaitBegin if key == Some(Key::Enter) => enter(SceneId::NoIdea),
        T::AwaitSpace if key == Some(Key::Space) => enter(SceneId::WrongKey),
        T::AwaitEnter if key == Some(Key::Enter) => enter(SceneId::StillWrong),
        T::AwaitJ if key == Some(Key::Char('j')) => enter(SceneId::FakeWin),
        T::AwaitSure if key == Some(Key::Space) => enter(SceneId::FineOrNot),
        T::AwaitFirstA if key == Some(Key::Char('a')) => enter(SceneId::FirstApple),
        T::AwaitSecondA if key == Some(Key::Char('a')) => enter(SceneId::SecondApple),
        T::AwaitThirdA if key == Some(Key::Char('a')) => enter(SceneId::ThirdApple),
        T::AwaitFinalA if key == Some(Key::Char('a')) => enter(SceneId::Anything),
        T::AwaitO if key == Some(Key::Char('o')) => enter(SceneId::OrangeFail),
        T::AffirmName if key == Some(Key::Space) => progress(Progress::AffirmName),
        T::AffirmComputer if key == Some(Key::Space) => progress(Progress::AffirmComputer),
        T::AppleSpam if key == Some(Key::Char('a')) => progress(Progress::AddApple),
        T::NameInput => text.map(|t| Transition::Progress(Progress::SubmitName(t.to_string()))),
        T::Guessing => text.map(|t| Transition::Progress(Progress::Guess(t.to_string()))),

        // Wrong input for the tokens above, and tokens that only wait on
        // timers, choices or an override.
        T::AwaitBegin
        | T::Rambling
        | T::AwaitSpace
        | T::AwaitEnter
        | T::AwaitJ
        | T::FakeWin
        | T::GameOrLife
        | T::AwaitSure
        | T::FeelingCheck
        | T::NameIntro
        | T::Glitching
        | T::AwaitFirstA
        | T::FirstAppleLoading
        | T::AwaitSecondA
        | T::SecondAppleLoading
        | T::AwaitThirdA
        | T::ThirdAppleLoading
        | T::AwaitFinalA
        | T::Wishing
        | T::AwaitO
        | T::Embarrassed
        | T::Identity
        | T::AffirmName
        | T::AffirmComputer
        | T::EndWin
        | T::AppleSpam
        | T::EndStall
        | T::GuessIntro
        | T::HideSeek
        | T::Trivia => None,
    }
}

/// Whether any key or text input is routable under `token`.
pub fn listens(token: StateToken) -> bool {
    let candidates = [Key::Enter, Key::Space]
        .into_iter()
        .chain(('a'..='z').map(Key::Char))
        .map(Input::Key)
        .chain(std::iter::once(Input::text("1")));
    candidates.into_iter().any(|input| route(token, &input).is_some())
}
