pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod overlay;
pub mod render;
pub mod sources;
pub mod traits;

pub use config::*;
pub use error::*;
pub use game::*;
pub use input::*;
pub use overlay::*;
pub use render::*;
pub use sources::*;
pub use traits::*;
