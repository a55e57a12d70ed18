//! Tiny HTTP remote control for the video shown on a single display surface.

pub mod cli;
pub mod command;
pub mod config;
pub mod display;
pub mod http;
pub mod ready;
pub mod remote;
pub mod server;
