// HeadlineScope - core/mod.rs
//
// Core business logic layer: extraction, tokenisation, sentiment, aggregation.
// Operates on strings already in memory; never performs network or file I/O.
// Must NOT depend on: ui, platform, or app.

pub mod aggregate;
pub mod analysis;
pub mod export;
pub mod extract;
pub mod lexicon;
pub mod model;
pub mod report;
pub mod sentiment;
pub mod tokenize;
