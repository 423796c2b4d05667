pub mod clock;
pub mod color;
pub mod constants;
pub mod error;
pub mod frame_loop;
pub mod grid;
pub mod painter;
pub mod particles;
pub mod renderer;
pub mod variant;

pub use clock::*;
pub use color::*;
pub use constants::*;
pub use error::ConfigError;
pub use frame_loop::*;
pub use grid::*;
pub use painter::*;
pub use particles::*;
pub use renderer::*;
pub use variant::*;
