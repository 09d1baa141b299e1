//! Bad Instructions: scene and state navigation engine for a branching
//! interactive-fiction script.
//!
//! Scenes are pure descriptions (`schema::script::Script`) interpreted by a
//! single `core::engine::Engine`, which owns the session, the navigation
//! history, a line-by-line text sequencer and a virtual-clock scheduler.
//! Rendering is left to a `core::presenter::Presenter`.

pub mod core;
pub mod schema;
pub mod story;
