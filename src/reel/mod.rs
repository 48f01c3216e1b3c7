pub mod engine;
pub mod panel;
pub mod track;

pub use engine::ReelEngine;
