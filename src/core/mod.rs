pub mod config;
pub mod confetti;
pub mod engine;
pub mod gate;
pub mod markup;
pub mod navigation;
pub mod presenter;
pub mod registry;
pub mod router;
pub mod scheduler;
pub mod sequencer;
pub mod session;
