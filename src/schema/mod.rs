pub mod directive;
pub mod ids;
pub mod input;
pub mod script;
