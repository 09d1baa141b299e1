/// Text sequencer: reveals narration one line per tick and reports busy
/// while a job is in flight.
///
/// The sequencer owns job bookkeeping only. The engine renders each `Cue`
/// and schedules the next tick on its scheduler, so pacing is measured from
/// the moment a line renders.
use crate::core::scheduler::TaskId;
use crate::schema::script::{Reveal, Script};

/// Identity of one reveal job. Ticks carrying a stale id are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(u64);

/// The next thing to render for a job.
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    Line {
        text: String,
        emphasize: bool,
        next_in_ms: u64,
    },
    /// Final line; the job is already finished and busy is cleared.
    Last {
        text: String,
        emphasize: bool,
        then: Script,
    },
}

/// Result of starting a reveal.
#[derive(Debug)]
pub enum Started {
    Job {
        id: JobId,
        /// Pending tick of the job this one superseded.
        superseded: Option<TaskId>,
    },
    /// No lines: nothing to pace, the continuation runs immediately.
    Empty {
        then: Script,
        superseded: Option<TaskId>,
    },
}

#[derive(Debug)]
struct ActiveJob {
    id: JobId,
    lines: Vec<String>,
    cursor: usize,
    emphasize: Vec<usize>,
    interval_ms: u64,
    then: Script,
    pending: Option<TaskId>,
}

#[derive(Debug, Default)]
pub struct Sequencer {
    next_id: u64,
    active: Option<ActiveJob>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    /// Start a job, superseding any job in flight. `speed` scales the
    /// per-line delay.
    pub fn begin(&mut self, reveal: Reveal, speed: f64) -> Started {
        let superseded = self.active.take().and_then(|job| job.pending);
        let Reveal {
            lines,
            delay_ms,
            emphasize,
            then,
            ..
        } = reveal;

        if lines.is_empty() {
            return Started::Empty { then, superseded };
        }

        let id = JobId(self.next_id);
        self.next_id += 1;
        self.active = Some(ActiveJob {
            id,
            lines,
            cursor: 0,
            emphasize,
            interval_ms: scaled_delay(delay_ms, speed),
            then,
            pending: None,
        });
        Started::Job { id, superseded }
    }

    /// Take the next line of `job`. Returns `None` if the job was
    /// superseded or already finished.
    pub fn cue(&mut self, job: JobId) -> Option<Cue> {
        let active = self.active.as_mut().filter(|active| active.id == job)?;
        active.pending = None;

        let index = active.cursor;
        let text = std::mem::take(active.lines.get_mut(index)?);
        let emphasize = active.emphasize.contains(&index);
        active.cursor += 1;

        if active.cursor < active.lines.len() {
            return Some(Cue::Line {
                text,
                emphasize,
                next_in_ms: active.interval_ms,
            });
        }

        let finished = self.active.take()?;
        Some(Cue::Last {
            text,
            emphasize,
            then: finished.then,
        })
    }

    /// Record the scheduled tick for `job` so a superseding job can cancel it.
    pub fn set_pending(&mut self, job: JobId, tick: TaskId) {
        if let Some(active) = self.active.as_mut().filter(|active| active.id == job) {
            active.pending = Some(tick);
        }
    }

    /// Abandon the job in flight without running its continuation.
    pub fn abort(&mut self) -> Option<TaskId> {
        self.active.take().and_then(|job| job.pending)
    }
}

/// Per-line delay after the global speed multiplier.
pub fn scaled_delay(delay_ms: u64, speed: f64) -> u64 {
    let scaled = delay_ms as f64 * speed.max(0.0);
    scaled.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_id(started: Started) -> JobId {
        match started {
            Started::Job { id, .. } => id,
            Started::Empty { .. } => panic!("expected a job"),
        }
    }

    #[test]
    fn lines_cue_in_order_and_last_finishes() {
        let mut seq = Sequencer::new();
        let id = job_id(seq.begin(Reveal::new(["one", "", "three"]).delay(100), 1.5));
        assert!(seq.is_busy());

        assert_eq!(
            seq.cue(id),
            Some(Cue::Line {
                text: "one".to_string(),
                emphasize: false,
                next_in_ms: 150,
            })
        );
        assert!(matches!(seq.cue(id), Some(Cue::Line { ref text, .. }) if text.is_empty()));
        assert!(matches!(seq.cue(id), Some(Cue::Last { ref text, .. }) if text == "three"));
        assert!(!seq.is_busy());
        assert_eq!(seq.cue(id), None);
    }

    #[test]
    fn emphasis_follows_line_index() {
        let mut seq = Sequencer::new();
        let id = job_id(seq.begin(Reveal::new(["a", "b"]).emphasize(&[1]), 1.0));
        assert!(matches!(seq.cue(id), Some(Cue::Line { emphasize: false, .. })));
        assert!(matches!(seq.cue(id), Some(Cue::Last { emphasize: true, .. })));
    }

    #[test]
    fn new_job_supersedes_old() {
        let mut seq = Sequencer::new();
        let first = job_id(seq.begin(Reveal::new(["a", "b", "c"]), 1.0));
        assert!(seq.cue(first).is_some());

        let second = job_id(seq.begin(Reveal::new(["x"]), 1.0));
        assert_eq!(seq.cue(first), None);
        assert!(matches!(seq.cue(second), Some(Cue::Last { .. })));
    }

    #[test]
    fn empty_reveal_is_never_busy() {
        let mut seq = Sequencer::new();
        let started = seq.begin(Reveal::new(Vec::<String>::new()), 1.0);
        assert!(matches!(started, Started::Empty { .. }));
        assert!(!seq.is_busy());
    }

    #[test]
    fn speed_scales_delay() {
        assert_eq!(scaled_delay(1100, 1.7), 1870);
        assert_eq!(scaled_delay(900, 0.0), 0);
        assert_eq!(scaled_delay(900, -2.0), 0);
    }
}
