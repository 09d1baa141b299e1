/// Game attempts: guess a number, hide and seek, and a trivia quiz with no
/// right answer.
use crate::core::gate::Mark;
use crate::core::session::Session;
use crate::schema::ids::{SceneId, StateToken};
use crate::schema::script::{Action, Reveal, Script, TriviaAnswer};

/// Guesses before the narrator gives up on the number game.
pub const GUESS_LIMIT: u32 = 4;

pub fn guess_number(session: &mut Session) -> Script {
    session.guesses.reset();

    Script::new()
        .token(StateToken::GuessIntro)
        .reset_stage()
        .reveal(
            Reveal::new(["Pick a number between 1 and 100."])
                .delay(1900)
                .then(
                    Script::new()
                        .show_input("1 - 100")
                        .hint("[type a number and press OK]")
                        .token(StateToken::Guessing),
                ),
        )
}

/// A submitted guess. Every guess is wrong; blank ones are not counted.
pub fn guess(session: &mut Session, raw: &str) -> Script {
    if raw.trim().is_empty() {
        return Script::new();
    }
    let Some(count) = session.guesses.bump_to(GUESS_LIMIT) else {
        return Script::new();
    };

    match count {
        1 => Script::new().reveal(Reveal::new(["Nope! Try again."]).delay(1500)),
        2 => Script::new().reveal(Reveal::new(["Not even CLOSE! Try again."]).delay(1500)),
        3 => Script::new().reveal(Reveal::new(["(This is fun, isn't it?)"]).delay(1700)),
        _ => {
            let bored = Reveal::new(["You clearly suck at this.", "And I'm starting to get bored."])
                .delay(1800)
                .then(Script::new().after(1100, Script::new().enter(SceneId::HideAndSeek)));
            Script::new().hide_input().reveal(
                Reveal::new(["Okay, this isn’t working."])
                    .delay(1800)
                    .then(Script::new().pause(1800, Script::new().reveal(bored))),
            )
        }
    }
}

pub fn hide_and_seek(_: &mut Session) -> Script {
    Script::new()
        .token(StateToken::HideSeek)
        .reset_stage()
        .reveal(
            Reveal::new([
                "What's a popular game... Oh! I know!",
                "I'm gonna count to 10, and you hide.",
                "Ready?",
            ])
            .delay(1100)
            .then(
                Script::new()
                    .clear_choices()
                    .offer("Yes", Action::Enter(SceneId::HideSeekYes))
                    .offer("No", Action::Enter(SceneId::HideSeekNo))
                    .offer(
                        "What? That's not possible",
                        Action::Enter(SceneId::HideSeekWhat),
                    ),
            ),
        )
}

fn on_to_trivia(lines: Vec<String>, pause_ms: u64) -> Script {
    Script::new().reset_stage().reveal(
        Reveal::new(lines)
            .delay(1000)
            .then(Script::new().after(pause_ms, Script::new().enter(SceneId::Trivia))),
    )
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

pub fn hide_seek_yes(_: &mut Session) -> Script {
    on_to_trivia(
        owned(&[
            "Okay! 1... 2... 3...",
            "Wait a minute...",
            "loading...",
            "I just remembered I'm a computer.",
            "So this isn't a very good idea.",
        ]),
        1200,
    )
}

pub fn hide_seek_no(_: &mut Session) -> Script {
    on_to_trivia(
        owned(&[
            "No? Oh come on. Why not?",
            "...Oh.",
            "I'm a computer.",
            "Right.",
            "Give me a minute.",
        ]),
        1500,
    )
}

pub fn hide_seek_what(session: &mut Session) -> Script {
    let mut lines = owned(&[
        "Why not?",
        "Because I don't have EYES? Or LEGS?",
        "That's pretty rude of you.",
    ]);
    lines.push(format!(
        "And I was just starting to like you, {}.",
        session.player_name()
    ));
    lines.extend(owned(&["Oh, fine. I guess you're right.", "Well... let me see..."]));
    on_to_trivia(lines, 1500)
}

pub fn trivia(session: &mut Session) -> Script {
    session.trivia.reset();

    let answers = TriviaAnswer::ALL
        .iter()
        .fold(Script::new().clear_choices(), |script, answer| {
            script.offer(answer.label(), Action::Answer(*answer))
        });

    Script::new()
        .token(StateToken::Trivia)
        .reset_stage()
        .reveal(
            Reveal::new(["Fine. Let's do trivia.", "", "Question 1:", "What is 2 + 2?"])
                .delay(1900)
                .then(answers),
        )
}

/// One wrong answer. Each answer counts once; after all three the quiz
/// gives up and the crisis begins.
pub fn answer(session: &mut Session, answer: TriviaAnswer) -> Script {
    let mark = session.trivia.mark(answer);
    if mark == Mark::Ignored {
        return Script::new();
    }

    let line = match answer {
        TriviaAnswer::Five => "\"5\"? No.",
        TriviaAnswer::TwentyTwo => "\"22\"? Seriously?",
        TriviaAnswer::Potato => "\"Potato\"? Are you crazy?",
    };
    let mut reply = Reveal::new([line]).delay(1700);

    if mark == Mark::Completed {
        let give_up = Reveal::new([
            "Okay, this quiz is broken.",
            "None of these games work.",
            "Maybe the problem is me.",
        ])
        .delay(1900)
        .then(Script::new().after(1200, Script::new().enter(SceneId::PurposeCrisis)));
        reply = reply.then(Script::new().after(900, Script::new().reveal(give_up)));
    }

    Script::new()
        .withdraw(Action::Answer(answer))
        .reveal(reply)
}
