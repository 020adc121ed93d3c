//! Core types and definitions for the VERDANT lane-defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, configuration, snapshots, events, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod stats;
pub mod types;
