pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod inputs;
pub mod manifest;
pub mod session;
pub mod verify;
