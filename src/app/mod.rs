// HeadlineScope - app/mod.rs
//
// Application layer: fetching, caching, pipeline orchestration, refresh
// lifecycle and dashboard state.
// Dependencies: core layer, util.
// Must NOT depend on: ui, platform specifics.

pub mod cache;
pub mod fetch;
pub mod pipeline;
pub mod refresh;
pub mod state;
