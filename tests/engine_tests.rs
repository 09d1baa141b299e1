/// Engine integration tests: dispatch order, pacing, history and restart
/// against the built-in story.

use bad_instructions::core::engine::{Engine, Outcome};
use bad_instructions::core::presenter::Screen;
use bad_instructions::schema::directive::{Directive, Glyph};
use bad_instructions::schema::ids::{SceneId, StateToken};
use bad_instructions::schema::input::{Input, Key};

struct Play {
    engine: Engine,
    screen: Screen,
    log: Vec<Directive>,
}

/// What the player sees, without choice ids or finished celebrations.
#[derive(Debug, PartialEq)]
struct View {
    token: StateToken,
    narration: Vec<String>,
    hint: Option<String>,
    visual: Option<Glyph>,
    tokens: Vec<Glyph>,
    choices: Vec<(String, bool)>,
    text_input: Option<String>,
    emphasized: bool,
}

impl Play {
    fn start() -> Self {
        let mut engine = Engine::builder().build().unwrap();
        engine.start();
        let mut play = Play {
            engine,
            screen: Screen::new(),
            log: Vec::new(),
        };
        play.sync();
        play
    }

    fn sync(&mut self) {
        let directives = self.engine.drain();
        self.screen.apply_all(&directives);
        self.log.extend(directives);
    }

    fn settle(&mut self) {
        self.engine.run_until_idle();
        self.sync();
    }

    fn send(&mut self, input: Input) -> Outcome {
        let outcome = self.engine.dispatch(input);
        self.sync();
        outcome
    }

    fn enter_key(&mut self) -> Outcome {
        self.send(Input::Key(Key::Enter))
    }

    fn press(&mut self, c: char) -> Outcome {
        self.send(Input::key(c))
    }

    fn choose(&mut self, label: &str) -> Outcome {
        let id = self
            .screen
            .choice(label)
            .unwrap_or_else(|| panic!("no choice labelled {label:?}"));
        self.send(Input::Choice(id))
    }

    fn jump(&mut self, scene: SceneId) {
        self.engine.enter(scene, true);
        self.settle();
    }

    fn view(&self) -> View {
        View {
            token: self.engine.token(),
            narration: self.screen.narration.clone(),
            hint: self.screen.hint.clone(),
            visual: self.screen.visual,
            tokens: self.screen.tokens.clone(),
            choices: self
                .screen
                .choice_labels()
                .into_iter()
                .map(|(label, disabled)| (label.to_string(), disabled))
                .collect(),
            text_input: self.screen.text_input.clone(),
            emphasized: self.screen.emphasized,
        }
    }

    fn confetti_count(&self) -> usize {
        self.log
            .iter()
            .filter(|d| matches!(d, Directive::Confetti { .. }))
            .count()
    }
}

#[test]
fn opening_keys_reach_fake_win() {
    let mut play = Play::start();
    play.settle();
    assert_eq!(play.engine.token(), StateToken::AwaitBegin);
    assert_eq!(play.screen.hint.as_deref(), Some("[press ENTER to begin]"));

    assert_eq!(play.enter_key(), Outcome::Handled);
    play.settle();
    // The loading screen hands over to the instructions on its own.
    assert_eq!(play.engine.token(), StateToken::AwaitSpace);
    assert_eq!(play.screen.narration.last().map(String::as_str), Some("Press SPACEBAR."));

    assert_eq!(play.press(' '), Outcome::Handled);
    play.settle();
    assert_eq!(play.engine.token(), StateToken::AwaitEnter);

    assert_eq!(play.enter_key(), Outcome::Handled);
    play.settle();
    assert_eq!(play.engine.token(), StateToken::AwaitJ);

    assert_eq!(play.press('J'), Outcome::Handled);
    assert_eq!(play.engine.token(), StateToken::FakeWin);
    play.settle();

    assert_eq!(play.confetti_count(), 1);
    assert_eq!(play.engine.token(), StateToken::GameOrLife);
    assert_eq!(
        play.engine.history().entries(),
        &[
            SceneId::Title,
            SceneId::NoIdea,
            SceneId::BadInstructions,
            SceneId::WrongKey,
            SceneId::StillWrong,
            SceneId::FakeWin,
            SceneId::GameOrLife,
        ]
    );
    assert_eq!(
        play.screen.choice_labels(),
        vec![("Playing a Game", true), ("Talking about life", false)]
    );
}

#[test]
fn wrong_keys_are_ignored() {
    let mut play = Play::start();
    play.settle();
    assert_eq!(play.press(' '), Outcome::Ignored);
    assert_eq!(play.press('j'), Outcome::Ignored);
    assert_eq!(play.engine.token(), StateToken::AwaitBegin);
    assert_eq!(play.engine.history().len(), 1);
}

#[test]
fn input_is_blocked_while_narrating() {
    let mut play = Play::start();
    assert!(play.engine.is_busy());
    assert_eq!(play.enter_key(), Outcome::Blocked);
    assert_eq!(play.press('b'), Outcome::Blocked);
    assert_eq!(play.engine.history().len(), 1);

    play.settle();
    assert_eq!(play.enter_key(), Outcome::Handled);
    assert_eq!(play.engine.token(), StateToken::Rambling);
    assert!(play.engine.is_busy());
    assert_eq!(play.press(' '), Outcome::Blocked);
}

#[test]
fn first_line_is_immediate_and_the_rest_are_paced() {
    let mut play = Play::start();
    assert_eq!(
        play.screen.narration,
        vec!["The goal of every game is to win,"]
    );

    // 900ms base delay at the default 1.7 speed.
    play.engine.advance(1529);
    play.sync();
    assert_eq!(play.screen.narration.len(), 1);
    play.engine.advance(1);
    play.sync();
    assert_eq!(play.screen.narration.len(), 2);
}

#[test]
fn back_reruns_previous_scene() {
    let mut play = Play::start();
    play.settle();
    play.enter_key();
    play.settle();
    play.press(' ');
    play.settle();
    assert_eq!(play.engine.token(), StateToken::AwaitEnter);
    assert_eq!(play.engine.history().top(), Some(SceneId::WrongKey));

    assert_eq!(play.press('b'), Outcome::WentBack);
    play.settle();

    assert_eq!(play.engine.token(), StateToken::AwaitSpace);
    assert_eq!(play.engine.history().top(), Some(SceneId::BadInstructions));
    assert_eq!(play.engine.history().len(), 3);
    assert_eq!(play.screen.narration.first().map(String::as_str), Some("Sorry about that."));
    assert_eq!(play.screen.hint.as_deref(), Some("[press SPACEBAR]"));

    // The restored scene listens again.
    assert_eq!(play.press(' '), Outcome::Handled);
}

/// Settle at `scene`, enter `next`, go back, settle again and compare.
fn assert_back_restores(scene: SceneId, next: SceneId, settle_next: bool) {
    let mut play = Play::start();
    play.settle();
    play.jump(scene);
    let settled_at = play.engine.history().top();
    let mut before = play.view();

    play.engine.enter(next, true);
    if settle_next {
        play.settle();
    }
    play.engine.back();
    play.settle();
    let mut after = play.view();

    // Its offers sit under narration the fake win left behind.
    if settled_at == Some(SceneId::GameOrLife) {
        before.narration.clear();
        after.narration.clear();
    }
    let context = format!("{} -> {}", scene.name(), next.name());
    assert_eq!(after, before, "{context}");
    assert_eq!(play.engine.history().top(), settled_at, "{context}");
}

#[test]
fn enter_then_back_restores_every_scene() {
    for scene in SceneId::ALL {
        for next in SceneId::ALL {
            if next != scene {
                assert_back_restores(scene, next, false);
            }
        }
    }
}

#[test]
fn back_from_a_settled_successor_restores_the_scene() {
    let edges = [
        (SceneId::BadInstructions, SceneId::WrongKey),
        (SceneId::WrongKey, SceneId::StillWrong),
        (SceneId::GameOrLife, SceneId::AreYouSure),
        (SceneId::FineOrNot, SceneId::AskName),
        (SceneId::AskName, SceneId::GlitchedName),
        (SceneId::ThirdApple, SceneId::Anything),
        (SceneId::Anything, SceneId::OrangeFail),
        (SceneId::GuessNumber, SceneId::HideAndSeek),
        (SceneId::Trivia, SceneId::PurposeCrisis),
        (SceneId::PurposeCrisis, SceneId::AppleSpam),
        (SceneId::PurposeCrisis, SceneId::Win),
    ];
    for (scene, next) in edges {
        assert_back_restores(scene, next, true);
    }
}

#[test]
fn back_withdraws_the_abandoned_choices() {
    let mut play = Play::start();
    play.settle();
    play.jump(SceneId::StillWrong);
    play.press('j');
    play.settle();
    assert_eq!(play.engine.token(), StateToken::GameOrLife);
    let talk = play.screen.choice("Talking about life").unwrap();

    // Back from the offers re-runs them; back again leaves the fake win.
    play.engine.enter(SceneId::AreYouSure, true);
    play.settle();
    assert_eq!(play.press('b'), Outcome::WentBack);
    assert_eq!(play.press('b'), Outcome::WentBack);
    assert_eq!(play.engine.token(), StateToken::FakeWin);
    assert!(play.screen.choices.is_empty());
    assert_eq!(play.send(Input::Choice(talk)), Outcome::Ignored);
}

#[test]
fn back_at_title_changes_nothing() {
    let mut play = Play::start();
    play.settle();
    let before = play.screen.clone();

    assert_eq!(play.press('b'), Outcome::WentBack);
    play.settle();

    assert_eq!(play.engine.history().len(), 1);
    assert_eq!(play.engine.token(), StateToken::AwaitBegin);
    assert_eq!(play.screen, before);
}

#[test]
fn restart_from_win_resets_the_run() {
    let mut play = Play::start();
    play.settle();
    play.jump(SceneId::AskName);
    play.send(Input::text("Ada"));
    play.settle();
    play.jump(SceneId::PurposeCrisis);
    play.choose("You are Ada.");
    play.settle();
    for _ in 0..5 {
        play.press(' ');
        play.settle();
    }
    play.choose("yes");
    play.settle();
    assert_eq!(play.engine.token(), StateToken::EndWin);
    assert_eq!(play.screen.hint.as_deref(), Some("[press ENTER to play again]"));

    assert_eq!(play.enter_key(), Outcome::Restarted);
    play.settle();

    let session = play.engine.session();
    assert_eq!(session.token, StateToken::AwaitBegin);
    assert_eq!(session.history.entries(), &[SceneId::Title]);
    assert_eq!(session.player_name(), "Name");
    assert_eq!(session.presses.get(), 0);
    assert!(!session.crisis_started);
    assert!(play.screen.choices.is_empty());
    assert_eq!(play.screen.hint.as_deref(), Some("[press ENTER to begin]"));
}

#[test]
fn restart_is_honored_while_narrating() {
    let mut play = Play::start();
    play.settle();
    play.jump(SceneId::PurposeCrisis);
    play.choose("You are Name.");
    play.settle();
    for _ in 0..5 {
        play.press(' ');
        play.settle();
    }
    play.choose("yes");
    assert!(play.engine.is_busy());
    assert_eq!(play.engine.token(), StateToken::EndWin);

    assert_eq!(play.enter_key(), Outcome::Restarted);
    play.settle();

    // Nothing from the aborted win narration lands on the new run.
    assert!(!play.screen.narration.iter().any(|line| line == "Thank you for playing."));
    assert_eq!(play.screen.hint.as_deref(), Some("[press ENTER to begin]"));
    assert_eq!(play.engine.history().len(), 1);
}

#[test]
fn back_is_not_offered_at_the_end() {
    let mut play = Play::start();
    play.settle();
    play.jump(SceneId::Win);
    assert_eq!(play.press('b'), Outcome::Ignored);
    assert_eq!(play.engine.token(), StateToken::EndWin);
}

#[test]
fn config_file_sets_pacing() {
    let mut engine = Engine::builder()
        .config_file("data/engine.ron")
        .text_speed(1.0)
        .build()
        .unwrap();
    assert_eq!(engine.config().default_player_name, "Name");
    engine.start();
    engine.advance(900);
    let lines = engine
        .drain()
        .into_iter()
        .filter(|d| matches!(d, Directive::RenderLine(_)))
        .count();
    assert_eq!(lines, 2);
}
