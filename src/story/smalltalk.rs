/// Small talk: game or life, how are you, the player's name, and the
/// narrator failing to say its own.
use crate::core::session::Session;
use crate::schema::ids::{SceneId, StateToken};
use crate::schema::script::{Action, Reveal, Script};

/// Offers sit under the fake-win confession, which stays on screen.
pub fn game_or_life(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::GameOrLife)
        .reset_stage()
        .offer_disabled("Playing a Game")
        .offer("Talking about life", Action::Enter(SceneId::AreYouSure))
}

pub fn are_you_sure(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::AwaitSure)
        .reset_stage()
        .reveal(
            Reveal::new(["We were? Are you sure?"])
                .delay(1100)
                .then(Script::new().after(400, Script::new().hint("[press SPACEBAR]"))),
        )
}

pub fn fine_or_not(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::FeelingCheck)
        .reset_stage()
        .reveal(
            Reveal::new([
                "Oh, okay then.",
                "Well. I'm doing fine. Great!",
                "",
                "How are you?",
            ])
            .delay(1100)
            .then(
                Script::new()
                    .offer("Fine", Action::Enter(SceneId::AskName))
                    .offer_disabled("Not Fine"),
            ),
        )
}

pub fn ask_name(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::NameIntro)
        .reset_stage()
        .reveal(
            Reveal::new([
                "Great! We're all fine here!",
                "Great. Good...",
                "",
                "…Were we playing a game?",
                "We were, weren't we? You tricked me!",
                "So, *the game,* what should we do?",
                "Wait, *I* was supposed to tell *you* what to do.",
                "How about you type your name?",
            ])
            .delay(1900)
            .then(
                Script::new()
                    .show_input("type your name")
                    .hint("[type your name and press OK]")
                    .token(StateToken::NameInput),
            ),
        )
}

/// Text submitted while the name box is up. Blank keeps the placeholder.
pub fn submit_name(session: &mut Session, raw: &str) -> Script {
    session.set_player_name(raw);
    Script::new().enter(SceneId::GlitchedName)
}

pub fn glitched_name(session: &mut Session) -> Script {
    let boast = Reveal::new([
        "Okay, I guess I don't have one. Or maybe I’m not allowed to say?",
        "This game has weird rules.",
        "",
        "WHICH I MADE! I'm definitely in charge here. No one else is here, not at all. I can do everything on my own.",
        "I'm the master of this world and everything happens the way I want it to.",
        "...What? You don't believe me?",
        "Watch this – press A on your keyboard.",
    ])
    .delay(1100)
    .then(
        Script::new()
            .token(StateToken::AwaitFirstA)
            .hint("[press A]"),
    );

    Script::new()
        .token(StateToken::Glitching)
        .reset_stage()
        .reveal(
            Reveal::new([
                format!("Nice to meet you, {}. my name is—", session.player_name()),
                "Uh…".to_string(),
                "My name is—".to_string(),
            ])
            .delay(950)
            .emphasize(&[2])
            .then(Script::new().after(500, Script::new().reveal(boast))),
        )
}
