//! Modal overlays drawn above the main screen.

pub mod help;
