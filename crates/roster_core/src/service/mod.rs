//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and record store calls into shell-level actions.
//! - Keep the presentation shell decoupled from storage details.

pub mod roster_service;
