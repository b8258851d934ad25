mod error;
mod player;
mod pocket;

pub use error::*;
pub use player::*;
pub use pocket::*;
