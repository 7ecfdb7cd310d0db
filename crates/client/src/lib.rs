//! Headless arena client.
//!
//! The composition root for the arena: it reads configuration, installs
//! logging, loads content, and plays a full run through the runtime with an
//! auto-pilot standing in for the keyboard.

pub mod autopilot;
pub mod config;
pub mod logging;
pub mod series;

pub use config::ClientConfig;
