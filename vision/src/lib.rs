//! Background subtraction for the motion game
//!
//! Keeps a rolling mean of recent grayscale frames at a reduced working
//! resolution and marks the pixels that drift away from it as motion.

pub mod background;
pub mod config;
pub mod error;
pub mod ops;

pub use background::*;
pub use config::*;
pub use error::*;
pub use ops::{FloatImage, MOTION};
