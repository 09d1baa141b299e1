/// The story: every scene procedure, the within-scene progress handlers,
/// and the actions bound to offered choices.
pub mod apples;
pub mod attempts;
pub mod crisis;
pub mod opening;
pub mod smalltalk;

use crate::core::registry::{RegistryError, SceneRegistry};
use crate::core::router::Progress;
use crate::core::session::Session;
use crate::schema::ids::SceneId;
use crate::schema::script::{Action, Script};

/// Register every scene of the story.
pub fn register(registry: &mut SceneRegistry) -> Result<(), RegistryError> {
    use SceneId as S;

    registry.register(S::Title, opening::title)?;
    registry.register(S::NoIdea, opening::no_idea)?;
    registry.register(S::BadInstructions, opening::bad_instructions)?;
    registry.register(S::WrongKey, opening::wrong_key)?;
    registry.register(S::StillWrong, opening::still_wrong)?;
    registry.register(S::FakeWin, opening::fake_win)?;

    registry.register(S::GameOrLife, smalltalk::game_or_life)?;
    registry.register(S::AreYouSure, smalltalk::are_you_sure)?;
    registry.register(S::FineOrNot, smalltalk::fine_or_not)?;
    registry.register(S::AskName, smalltalk::ask_name)?;
    registry.register(S::GlitchedName, smalltalk::glitched_name)?;

    registry.register(S::FirstApple, apples::first_apple)?;
    registry.register(S::SecondApple, apples::second_apple)?;
    registry.register(S::ThirdApple, apples::third_apple)?;
    registry.register(S::Anything, apples::anything)?;
    registry.register(S::OrangeFail, apples::orange_fail)?;

    registry.register(S::PurposeCrisis, crisis::purpose_crisis)?;
    registry.register(S::YouAreName, crisis::you_are_name)?;
    registry.register(S::Win, crisis::win)?;
    registry.register(S::AppleSpam, crisis::apple_spam)?;
    registry.register(S::YouAreComputer, crisis::you_are_computer)?;

    registry.register(S::GuessNumber, attempts::guess_number)?;
    registry.register(S::HideAndSeek, attempts::hide_and_seek)?;
    registry.register(S::HideSeekYes, attempts::hide_seek_yes)?;
    registry.register(S::HideSeekNo, attempts::hide_seek_no)?;
    registry.register(S::HideSeekWhat, attempts::hide_seek_what)?;
    registry.register(S::Trivia, attempts::trivia)?;

    Ok(())
}

/// Run the action bound to a chosen option.
pub fn perform(action: Action, session: &mut Session) -> Script {
    match action {
        Action::Enter(scene) => Script::new().enter(scene),
        Action::Invoke(scene) => Script::new().invoke(scene),
        Action::ImpossibleWish => apples::impossible_wish(session),
        Action::MakeOrange => apples::make_orange(session),
        Action::Answer(answer) => attempts::answer(session, answer),
    }
}

/// Run a within-scene progress handler.
pub fn progress(progress: Progress, session: &mut Session) -> Script {
    match progress {
        Progress::AffirmName => crisis::affirm_name(session),
        Progress::AffirmComputer => crisis::affirm_computer(session),
        Progress::SubmitName(raw) => smalltalk::submit_name(session, &raw),
        Progress::Guess(raw) => attempts::guess(session, &raw),
        Progress::AddApple => crisis::add_apple(session),
    }
}
