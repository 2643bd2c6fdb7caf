//! Album artwork lookup
//!
//! Resolves cover image URLs from artist/album names.
//! No API key required.

pub mod dto;
mod client;

pub use client::{ArtworkClient, first_artwork};
