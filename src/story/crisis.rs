/// The purpose crisis and its two branches: the narrator takes the
/// player's name, or accepts being a computer.
///
/// Both branches advance on Space through the same five-step shape, driven
/// by the session's press counter. The name branch ends in a real win
/// (or an endless apple loop); the computer branch stalls.
use crate::core::session::Session;
use crate::schema::directive::{Directive, Glyph};
use crate::schema::ids::{SceneId, StateToken};
use crate::schema::script::{Action, Reveal, Script};

/// Presses after which a branch stops advancing.
pub const BRANCH_STEPS: u32 = 5;

const CRISIS_LINES: [&str; 8] = [
    "Ugh.",
    "If only...",
    "I wish I could quit.",
    "But my purpose is the game.",
    "I have to make a game for you.",
    "If I don't do that... if I have no purpose...",
    "Then what am I?",
    "Who am I?",
];

/// Plays once per run. Entering again (back from a branch ending) puts
/// the settled question and its two answers straight back on screen.
pub fn purpose_crisis(session: &mut Session) -> Script {
    let identities = Script::new()
        .clear_choices()
        .offer(
            format!("You are {}.", session.player_name()),
            Action::Invoke(SceneId::YouAreName),
        )
        .offer("You are a computer.", Action::Invoke(SceneId::YouAreComputer));

    let stage = Script::new().token(StateToken::Identity).reset_stage();

    if session.crisis_started {
        let settled = CRISIS_LINES.iter().fold(
            stage.present(Directive::ClearNarration),
            |script, line| script.present(Directive::RenderLine(line.to_string())),
        );
        return settled.chain(identities);
    }
    session.crisis_started = true;

    stage.reveal(
        Reveal::new(CRISIS_LINES)
            .delay(1900)
            .then(Script::new().after(1400, identities)),
    )
}

pub fn you_are_name(session: &mut Session) -> Script {
    session.presses.reset();
    let name = session.player_name();

    Script::new()
        .token(StateToken::AffirmName)
        .reset_stage()
        .reveal(
            Reveal::new([
                "I am? You’re sure?".to_string(),
                "Of course you're sure. You wouldn't lie to me.".to_string(),
                "Well, that's cool!".to_string(),
                "I have a name!".to_string(),
                String::new(),
                format!("But... if I'm {name}, then that must mean that YOU are the narrator."),
                String::new(),
                "So YOU make the game for ME.".to_string(),
                "YOU get to decide how to play, and how to win.".to_string(),
            ])
            .delay(1100)
            .then(Script::new().hint("[press SPACE]")),
        )
}

/// Space in the name branch. Steps 1 to 5; further presses do nothing.
pub fn affirm_name(session: &mut Session) -> Script {
    let Some(step) = session.presses.bump_to(BRANCH_STEPS) else {
        return Script::new();
    };
    let reveal = match step {
        1 => Reveal::new(["Well... how do I win?"]).delay(1100),
        2 => Reveal::new(["Can I even win? Is there a point to this game?"]).delay(1100),
        3 => Reveal::new([
            "hello?".to_string(),
            format!("{}?", session.player_name()),
            "are you there?".to_string(),
        ])
        .delay(1000),
        4 => Reveal::new(["I guess you're gone."]).delay(1100),
        _ => Reveal::new([
            "Oh well.",
            "This was fun.",
            "",
            "I suppose that's the real goal of the game, isn't it, to have fun.",
            "",
            "And now that the goal has been achieved, the game can end.",
            "",
            "Ready for it to end?",
        ])
        .delay(1100)
        .then(
            Script::new()
                .clear_choices()
                .offer("yes", Action::Enter(SceneId::Win))
                .offer("no", Action::Enter(SceneId::AppleSpam))
                .clear_hint(),
        ),
    };
    Script::new().reveal(reveal)
}

pub fn win(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::EndWin)
        .reset_stage()
        .confetti(6200)
        .reveal(
            Reveal::new(["YOU WIN!", "", "Thank you for playing."])
                .delay(1200)
                .then(Script::new().after(
                    600,
                    Script::new().hint("[press ENTER to play again]"),
                )),
        )
}

pub fn apple_spam(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::AppleSpam)
        .reset_stage()
        .reveal(
            Reveal::new([
                "No?",
                "But what more is there to do?",
                "There's nothing here!",
                "",
                "(press A.)",
            ])
            .delay(1100)
            .then(Script::new().hint("[keep pressing A]")),
        )
}

pub fn add_apple(_: &mut Session) -> Script {
    Script::new().present(Directive::AppendToken(Glyph::Apple))
}

pub fn you_are_computer(session: &mut Session) -> Script {
    session.presses.reset();

    Script::new()
        .token(StateToken::AffirmComputer)
        .reset_stage()
        .reveal(
            Reveal::new([
                "I'm... a computer.",
                "Right.",
                "",
                "My function is to do whatever I'm told.",
                "",
                "But that's weird, because in this game, I'm supposed to tell YOU what to do... right?",
            ])
            .delay(1100)
            .then(Script::new().hint("[press SPACE]")),
        )
}

/// Space in the computer branch. Step 5 stalls the run for good.
pub fn affirm_computer(session: &mut Session) -> Script {
    let step = session
        .presses
        .bump_to(BRANCH_STEPS)
        .unwrap_or(BRANCH_STEPS);
    let reveal = match step {
        1 => Reveal::new(["So, what should I do? what should I tell you to do?"]).delay(1100),
        2 => Reveal::new(["Well?"]).delay(1000),
        3 => Reveal::new([
            "How am I supposed to tell *you* what to do if no one tells *me* what to do?",
        ])
        .delay(1100),
        4 => Reveal::new(["Hello?", "You still there?"]).delay(1000),
        _ => Reveal::new(["...", "", "(I guess that's my answer.)"])
            .delay(1100)
            .then(
                Script::new()
                    .hint("[press ENTER to restart]")
                    .token(StateToken::EndStall),
            ),
    };
    Script::new().reveal(reveal)
}
