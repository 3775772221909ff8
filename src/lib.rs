pub mod args;
pub mod config;
pub mod encoder;
pub mod error;
pub mod frames;
pub mod logging;
pub mod playlist;
pub mod render;
