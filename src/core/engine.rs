/// The engine: owns the session, registry, sequencer and scheduler, routes
/// input, and interprets scene scripts into presenter directives.
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::core::config::{ConfigError, EngineConfig};
use crate::core::navigation::NavigationStack;
use crate::core::presenter::Presenter;
use crate::core::registry::{RegistryError, SceneRegistry};
use crate::core::router::{self, Transition};
use crate::core::scheduler::Scheduler;
use crate::core::sequencer::{scaled_delay, Cue, JobId, Sequencer, Started};
use crate::core::session::Session;
use crate::schema::directive::{ChoiceId, Directive};
use crate::schema::ids::{SceneId, StateToken};
use crate::schema::input::Input;
use crate::schema::script::{Action, Reveal, RevealMode, Script, Step};
use crate::story;

/// Upper bound on tasks run by `run_until_idle`.
const IDLE_TASK_LIMIT: usize = 100_000;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// What `dispatch` did with an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No transition is legal for this input under the current token.
    Ignored,
    /// Narration in flight; input discarded.
    Blocked,
    Restarted,
    WentBack,
    Handled,
}

#[derive(Debug)]
enum Task {
    Tick(JobId),
    Run(Script),
    EndEmphasis,
}

#[derive(Debug, Clone)]
struct Offer {
    id: ChoiceId,
    action: Option<Action>,
    disabled: bool,
}

pub struct Engine {
    config: EngineConfig,
    registry: SceneRegistry,
    session: Session,
    sequencer: Sequencer,
    scheduler: Scheduler<Task>,
    offers: Vec<Offer>,
    next_choice: u32,
    outbox: Vec<Directive>,
}

/// Builder for constructing an `Engine`.
pub struct EngineBuilder {
    config: Option<EngineConfig>,
    config_path: Option<String>,
    text_speed: Option<f64>,
    /// Directly provided registry (for testing without the story).
    registry: Option<SceneRegistry>,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder {
            config: None,
            config_path: None,
            text_speed: None,
            registry: None,
        }
    }

    /// Enter the first scene.
    pub fn start(&mut self) {
        self.enter(SceneId::Title, true);
    }

    /// Route one input event.
    ///
    /// Order: restart override (terminal tokens, even while busy), busy
    /// check, back override (non-terminal tokens), then the transition
    /// table or the bound action of an offered choice.
    pub fn dispatch(&mut self, input: Input) -> Outcome {
        let token = self.session.token;

        if router::is_restart(token, &input) {
            self.restart();
            return Outcome::Restarted;
        }
        if self.sequencer.is_busy() {
            trace!(?input, ?token, "input blocked while narrating");
            return Outcome::Blocked;
        }
        if router::is_back(token, &input) {
            self.back();
            return Outcome::WentBack;
        }

        match input {
            Input::Choice(id) => self.choose(id),
            other => match router::route(token, &other) {
                Some(transition) => {
                    self.apply(transition);
                    Outcome::Handled
                }
                None => {
                    trace!(input = ?other, ?token, "input ignored");
                    Outcome::Ignored
                }
            },
        }
    }

    /// Look up and run a scene, recording it in history iff `record`.
    /// Unknown ids are a silent no-op.
    pub fn enter(&mut self, scene: SceneId, record: bool) {
        let Some(procedure) = self.registry.get(scene) else {
            warn!(scene = scene.name(), "no such scene registered");
            return;
        };
        if record {
            self.session.history.push(scene);
        }
        debug!(scene = scene.name(), record, "entering scene");
        let script = procedure(&mut self.session);
        self.run(script);
    }

    /// Pop the current scene and re-run the one beneath it without
    /// re-recording it. No-op with one history entry or fewer.
    pub fn back(&mut self) {
        match self.session.history.back() {
            Some(previous) => {
                debug!(scene = previous.name(), "going back");
                self.cancel_pending();
                self.enter(previous, false);
            }
            None => trace!("nothing to go back to"),
        }
    }

    /// Reinitialise the session and enter the first scene.
    pub fn restart(&mut self) {
        info!("restarting");
        self.session.reset();
        self.cancel_pending();
        self.enter(SceneId::Title, true);
    }

    /// Start a sequencer job, superseding any job in flight.
    pub fn reveal(&mut self, reveal: Reveal) {
        if reveal.mode == RevealMode::Clear {
            self.outbox.push(Directive::ClearNarration);
        }
        match self.sequencer.begin(reveal, self.config.text_speed) {
            Started::Job { id, superseded } => {
                if let Some(tick) = superseded {
                    self.scheduler.cancel(tick);
                }
                self.tick(id);
            }
            Started::Empty { then, superseded } => {
                if let Some(tick) = superseded {
                    self.scheduler.cancel(tick);
                }
                self.run(then);
            }
        }
    }

    /// Advance the virtual clock, running every task that falls due,
    /// including tasks scheduled along the way.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
        }
        self.scheduler.set_now(until);
    }

    /// Run pending tasks until none remain. Returns the virtual time reached.
    pub fn run_until_idle(&mut self) -> u64 {
        for _ in 0..IDLE_TASK_LIMIT {
            let Some(due) = self.scheduler.next_due() else {
                break;
            };
            let elapsed = due.saturating_sub(self.scheduler.now());
            self.advance(elapsed);
        }
        self.scheduler.now()
    }

    /// Milliseconds until the next pending task, if any.
    pub fn next_due_in(&self) -> Option<u64> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.scheduler.now()))
    }

    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn token(&self) -> StateToken {
        self.session.token
    }

    pub fn is_busy(&self) -> bool {
        self.sequencer.is_busy()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &NavigationStack {
        &self.session.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Directives emitted since the last drain.
    pub fn pending(&self) -> &[Directive] {
        &self.outbox
    }

    pub fn drain(&mut self) -> Vec<Directive> {
        std::mem::take(&mut self.outbox)
    }

    /// Drain every pending directive into `presenter`, in order.
    pub fn present_to<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for directive in self.drain() {
            presenter.present(&directive);
        }
    }

    /// Abort narration in flight, drop every deferred task of the scene
    /// being left and withdraw its choices. A pulse still showing ends now.
    fn cancel_pending(&mut self) {
        if let Some(tick) = self.sequencer.abort() {
            self.scheduler.cancel(tick);
        }
        let mut pulsing = false;
        self.scheduler.retain(|task| {
            pulsing |= matches!(task, Task::EndEmphasis);
            false
        });
        if pulsing {
            self.outbox.push(Directive::EndEmphasis);
        }
        self.offers.clear();
        self.outbox.push(Directive::ClearChoices);
    }

    fn choose(&mut self, id: ChoiceId) -> Outcome {
        let action = self
            .offers
            .iter()
            .find(|offer| offer.id == id && !offer.disabled)
            .and_then(|offer| offer.action);
        let Some(action) = action else {
            trace!(?id, "choice not on offer");
            return Outcome::Ignored;
        };
        debug!(?action, "choice taken");
        let script = story::perform(action, &mut self.session);
        self.run(script);
        Outcome::Handled
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Enter(scene) => self.enter(scene, true),
            Transition::Progress(progress) => {
                let script = story::progress(progress, &mut self.session);
                self.run(script);
            }
        }
    }

    fn run(&mut self, script: Script) {
        for step in script.steps {
            self.step(step);
        }
    }

    fn step(&mut self, step: Step) {
        match step {
            Step::Present(directive) => self.outbox.push(directive),
            Step::SetToken(token) => {
                trace!(?token, "token set");
                self.session.token = token;
            }
            Step::Reveal(reveal) => self.reveal(reveal),
            Step::After { delay_ms, then } => {
                self.scheduler.schedule(delay_ms, Task::Run(then));
            }
            Step::Pause { delay_ms, then } => {
                let delay = scaled_delay(delay_ms, self.config.text_speed);
                self.scheduler.schedule(delay, Task::Run(then));
            }
            Step::Enter { scene, record } => self.enter(scene, record),
            Step::Offer { label, action } => {
                let id = ChoiceId(self.next_choice);
                self.next_choice += 1;
                let disabled = action.is_none();
                self.offers.push(Offer {
                    id,
                    action,
                    disabled,
                });
                self.outbox.push(Directive::AddChoice {
                    id,
                    label,
                    disabled,
                });
            }
            Step::Withdraw(action) => {
                let offered = self
                    .offers
                    .iter_mut()
                    .find(|offer| offer.action == Some(action) && !offer.disabled);
                if let Some(offer) = offered {
                    offer.disabled = true;
                    self.outbox.push(Directive::DisableChoice(offer.id));
                }
            }
            Step::ClearChoices => {
                self.offers.clear();
                self.outbox.push(Directive::ClearChoices);
            }
            Step::Confetti { duration_ms } => self.outbox.push(Directive::Confetti {
                duration_ms,
                particles: self.config.confetti_particles,
            }),
        }
    }

    fn tick(&mut self, job: JobId) {
        let Some(cue) = self.sequencer.cue(job) else {
            return;
        };
        match cue {
            Cue::Line {
                text,
                emphasize,
                next_in_ms,
            } => {
                self.render(text, emphasize);
                let tick = self.scheduler.schedule(next_in_ms, Task::Tick(job));
                self.sequencer.set_pending(job, tick);
            }
            Cue::Last {
                text,
                emphasize,
                then,
            } => {
                self.render(text, emphasize);
                self.run(then);
            }
        }
    }

    fn render(&mut self, text: String, emphasize: bool) {
        if text.is_empty() {
            self.outbox.push(Directive::RenderSpacer);
        } else {
            self.outbox.push(Directive::RenderLine(text));
        }
        if emphasize {
            self.outbox.push(Directive::Emphasize);
            self.scheduler
                .schedule(self.config.emphasis_ms, Task::EndEmphasis);
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Tick(job) => self.tick(job),
            Task::Run(script) => self.run(script),
            Task::EndEmphasis => self.outbox.push(Directive::EndEmphasis),
        }
    }
}

impl EngineBuilder {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn config_file(mut self, path: &str) -> Self {
        self.config_path = Some(path.to_string());
        self
    }

    /// Override the configured text speed.
    pub fn text_speed(mut self, speed: f64) -> Self {
        self.text_speed = Some(speed);
        self
    }

    /// Provide a registry directly instead of the built-in story.
    pub fn with_registry(mut self, registry: SceneRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> Result<Engine, EngineError> {
        let mut config = match (self.config, self.config_path) {
            (Some(config), _) => config,
            (None, Some(path)) => EngineConfig::load_from_ron(Path::new(&path))?,
            (None, None) => EngineConfig::default(),
        };
        if let Some(speed) = self.text_speed {
            config.text_speed = speed;
        }
        config.validate()?;

        let registry = match self.registry {
            Some(registry) => registry,
            None => {
                let mut registry = SceneRegistry::new();
                story::register(&mut registry)?;
                registry
            }
        };

        Ok(Engine {
            session: Session::new(config.default_player_name.clone()),
            config,
            registry,
            sequencer: Sequencer::new(),
            scheduler: Scheduler::new(),
            offers: Vec::new(),
            next_choice: 0,
            outbox: Vec::new(),
        })
    }
}
