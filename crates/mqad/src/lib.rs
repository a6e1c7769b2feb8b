//! mqad - Member QA daemon library.
//!
//! Heuristic question answering over member messages: intent and target
//! name detection, member filtering, lexical ranking, and an ordered
//! chain of extraction strategies, served over HTTP.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod dates;
pub mod intent;
pub mod member;
pub mod metrics;
pub mod name;
pub mod pipeline;
pub mod rank;
pub mod retriever;
pub mod routes;
pub mod server;
pub mod similarity;
pub mod strategies;
