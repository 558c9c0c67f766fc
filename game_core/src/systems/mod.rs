pub mod collision;
pub mod compositing;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use compositing::*;
pub use movement::*;
pub use scoring::*;
