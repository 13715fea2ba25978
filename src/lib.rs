//! banner-forge library crate.
//!
//! Renders text as multi-row block-letter art using fixed-stride font banks.
//! The binary is a thin command-line front end over [`banner::Engine`].

pub mod banner;
pub mod config;

pub use banner::{render, Engine, EngineOptions, RenderError};
