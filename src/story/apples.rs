/// Apples that are not apples, wishes that cannot be granted, and an
/// orange that comes out blue.
use crate::core::session::Session;
use crate::schema::directive::Glyph;
use crate::schema::ids::{SceneId, StateToken};
use crate::schema::script::{Action, Reveal, Script};

/// Simulated render time before the narrator notices the wrong glyph.
const APPLE_LOADING_MS: u64 = 3000;

fn failed_apple(
    loading: StateToken,
    glyph: Glyph,
    lines: [&str; 3],
    next: StateToken,
) -> Script {
    let excuse = Reveal::new(lines)
        .delay(1100)
        .then(Script::new().hint("[press A]").token(next));

    Script::new()
        .token(loading)
        .reset_stage()
        .visual(glyph)
        .after(APPLE_LOADING_MS, Script::new().reveal(excuse))
}

pub fn first_apple(_: &mut Session) -> Script {
    failed_apple(
        StateToken::FirstAppleLoading,
        Glyph::RedCircle,
        [
            "Uh, that's supposed to be an apple. Hold on.",
            "*loading...*",
            "Try again. Press A.",
        ],
        StateToken::AwaitSecondA,
    )
}

pub fn second_apple(_: &mut Session) -> Script {
    failed_apple(
        StateToken::SecondAppleLoading,
        Glyph::BlueCircle,
        ["What the - no!", "*loading...*", "Okay, try again. Press A."],
        StateToken::AwaitThirdA,
    )
}

pub fn third_apple(_: &mut Session) -> Script {
    let back_online = Script::new().clear_visual().reveal(
        Reveal::new(["Alright. I'm back.", "NOW, press A."])
            .delay(1100)
            .then(Script::new().hint("[press A]").token(StateToken::AwaitFinalA)),
    );
    let technical_difficulties = Script::new()
        .visual(Glyph::Hourglass)
        .narrate("*Please hold for technical difficulties.*")
        .after(2000, back_online);
    let meltdown = Reveal::new(["...", "What the f–"])
        .delay(1100)
        .then(Script::new().after(700, technical_difficulties));

    Script::new()
        .token(StateToken::ThirdAppleLoading)
        .reset_stage()
        .visual(Glyph::WhiteSquare)
        .after(APPLE_LOADING_MS, Script::new().reveal(meltdown))
}

pub fn anything(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::Wishing)
        .reset_stage()
        .visual(Glyph::Apple)
        .reveal(
            Reveal::new(["SEE! See!? I can do anything.", "", "What should I do next?"])
                .delay(1100)
                .then(
                    Script::new()
                        .offer("end world hunger", Action::ImpossibleWish)
                        .offer("do a backflip", Action::ImpossibleWish)
                        .offer("find true love", Action::ImpossibleWish)
                        .offer("make an orange", Action::MakeOrange),
                ),
        )
}

pub fn impossible_wish(_: &mut Session) -> Script {
    Script::new().clear_choices().reveal(
        Reveal::new([
            "Okay... maybe not ANYTHING.",
            "That's a pretty huge ask. I'm just a computer.",
            "Uh... hold on.",
            "...",
            "I should just make you a game. That was the point, wasn't it?",
        ])
        .delay(1100)
        .then(Script::new().after(900, Script::new().enter(SceneId::GuessNumber))),
    )
}

pub fn make_orange(_: &mut Session) -> Script {
    Script::new().clear_choices().reveal(
        Reveal::new(["Certainly! just press O."])
            .delay(1100)
            .then(Script::new().hint("[press O]").token(StateToken::AwaitO)),
    )
}

pub fn orange_fail(_: &mut Session) -> Script {
    // Both answers lead into the same crisis.
    let embarrassed = Reveal::new(["This is embarrassing."])
        .delay(1100)
        .append()
        .then(
            Script::new()
                .clear_choices()
                .offer("yeah, it kinda is", Action::Enter(SceneId::PurposeCrisis))
                .offer("you should quit", Action::Enter(SceneId::PurposeCrisis)),
        );

    Script::new()
        .token(StateToken::Embarrassed)
        .reset_stage()
        .visual(Glyph::BlueSquare)
        .reveal(
            Reveal::new(["Um..."])
                .delay(1200)
                .then(Script::new().after(900, Script::new().reveal(embarrassed))),
        )
}
