//! Shared building blocks for the lexitree prefix-completion engine.
//!
//! This crate has no knowledge of the prefix tree itself. It provides the
//! small leaf types the engine, its layout pass and the presentation shells
//! agree on.
//!
//! - [`character`] -- character classification for dictionary words and typed input
//! - [`word`] -- lowercase folding and word validation ([`word::WordError`])
//! - [`input`] -- bounded single-line text input mirroring a search box
//! - [`geometry`] -- integer pixel coordinates and horizontal spans

pub mod character;
pub mod geometry;
pub mod input;
pub mod word;
