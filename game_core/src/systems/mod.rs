pub mod clones;
pub mod collision;
pub mod input;
pub mod movement;
pub mod particles;

pub use clones::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use particles::*;
