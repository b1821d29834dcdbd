//! Deck Remote: an egui control panel for presentation devices reachable
//! over HTTP.
//!
//! The user registers device addresses, a background task polls each
//! device's health on a fixed timer, and previous/next controls broadcast
//! a slide key-press command to every registered device.

pub mod app;
pub mod logic;
pub mod model;
