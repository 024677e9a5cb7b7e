//! bloomscore-core — Bloom's Taxonomy catalog, sample quiz generation, and
//! weighted scoring.
//!
//! This crate defines the level catalog, the seed-stable sample-data
//! generator, and the score aggregator that the rest of the bloomscore
//! system builds on.

pub mod error;
pub mod generator;
pub mod model;
pub mod report;
pub mod roster;
pub mod scoring;
pub mod taxonomy;
