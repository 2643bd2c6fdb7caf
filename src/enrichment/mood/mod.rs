//! Mood-to-playlist service integration
//!
//! Turns a free-text mood into a playlist via a text-generation proxy.

pub mod adapter;
pub mod dto;
mod client;

pub use client::{MoodClient, build_prompt};
