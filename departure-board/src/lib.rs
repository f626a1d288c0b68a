//! Next-departures board for a transit stop.
//!
//! Answers: "what are the next distinct trains from my stop on this line,
//! and where does each of them go?"

pub mod board;
pub mod cache;
pub mod domain;
pub mod provider;
pub mod spatial;
pub mod web;
