//! Travel enquiry server.
//!
//! Answers free-text questions about buses and trains: route lookups against
//! local schedule datasets, live running status by train number, and a
//! language-model assistant for everything else.

pub mod config;
pub mod conversation;
pub mod dispatch;
pub mod domain;
pub mod llm;
pub mod schedule;
pub mod status;
pub mod web;
