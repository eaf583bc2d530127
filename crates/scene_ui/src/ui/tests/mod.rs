//! Widget tree integration tests
//!
//! Exercise `UIManager` end to end: focus hand-off, dragging and quad output.

mod textured_quad;
