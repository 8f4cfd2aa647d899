// HeadlineScope - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: util, directories crate.
// Must NOT depend on: core, app, ui.

pub mod config;
