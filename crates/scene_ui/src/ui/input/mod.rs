//! UI input handling module

pub mod drag;

pub use drag::drag_position;
