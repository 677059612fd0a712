//! qr-form library crate.
//!
//! A terminal form that normalizes and validates 12-character codes and
//! renders them as QR codes. The binary wires these modules to a ratatui
//! screen; they are exposed here for integration testing.

pub mod cli;
pub mod code;
pub mod config;
pub mod encoder;
pub mod event_loop;
pub mod export;
pub mod form;
pub mod input;
pub mod session;
pub mod terminal;
pub mod validation;
pub mod view;
