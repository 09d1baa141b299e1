/// Opening: title, the rambling non-rules, the bad instructions, and the
/// fake win.
use crate::core::session::Session;
use crate::schema::ids::{SceneId, StateToken};
use crate::schema::script::{Reveal, Script};

pub fn title(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::AwaitBegin)
        .reset_stage()
        .reveal(
            Reveal::new([
                "The goal of every game is to win,",
                "and how to win is usually made quite clear,",
                "by the narrator of the game.",
                "",
                "You'll find *no* such thing here.",
            ])
            .delay(900)
            .then(Script::new().after(500, Script::new().hint("[press ENTER to begin]"))),
        )
}

pub fn no_idea(_: &mut Session) -> Script {
    // Fake loading screen, then on to the instructions.
    let loading = Script::new()
        .narrate("loading...")
        .after(1800, Script::new().enter(SceneId::BadInstructions));

    Script::new()
        .token(StateToken::Rambling)
        .reset_stage()
        .reveal(
            Reveal::new([
                "Here, the goal is just to not lose.",
                "How do you lose?",
                "By not winning.",
                "How do you win?",
                "By not... losing..",
                "Uh. Wait.",
                "*(papers rustling...)*",
                "That doesn't make sense. Hold on - ",
            ])
            .delay(1200)
            .then(Script::new().after(800, loading)),
        )
}

pub fn bad_instructions(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::AwaitSpace)
        .reset_stage()
        .reveal(
            Reveal::new([
                "Sorry about that.",
                "Apparently, you win by following my instructions.",
                "So. I guess... just do as I say. Got that?",
                "You just gotta listen to me, and we'll both get through this, together.",
                "Press SPACEBAR.",
            ])
            .delay(1100)
            .then(Script::new().hint("[press SPACEBAR]")),
        )
}

pub fn wrong_key(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::AwaitEnter)
        .reset_stage()
        .reveal(
            Reveal::new(["", "", "Crap, wait.", "Sorry about that.", "I meant press Enter."])
                .delay(1200)
                .then(Script::new().after(400, Script::new().hint("[press ENTER]"))),
        )
}

pub fn still_wrong(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::AwaitJ)
        .reset_stage()
        .reveal(
            Reveal::new([
                "",
                "",
                "The hell...?",
                "That should've worked. Wait, let me...",
                "*(paper rustles)*",
                "Damn it. I got nothing. I guess try pressing G?",
                "WAIT - NO - ",
                "It says – I mean, *I* say, *me,* I say press J.",
            ])
            .delay(1100)
            .then(Script::new().after(400, Script::new().hint("[press J]"))),
        )
}

pub fn fake_win(_: &mut Session) -> Script {
    let confession = Reveal::new([
        "WAIT! Wait! Wait!!! No! Sorry.",
        "",
        "You don't win. That was just the tutorial.",
        "Yikes, these instructions are really unclear…",
        "*(papers getting thrown away)*",
        "Nevermind all that.",
        "*I'm* in charge here. Forget the papers.",
        "...",
        "Uh. What were we doing?",
    ])
    .delay(1300)
    .then(Script::new().after(1500, Script::new().enter(SceneId::GameOrLife)));

    Script::new()
        .token(StateToken::FakeWin)
        .reset_stage()
        .confetti(2600)
        .reveal(
            Reveal::new(["Yay, you did it! You win!"])
                .delay(1100)
                .then(Script::new().after(2900, Script::new().reveal(confession))),
        )
}
