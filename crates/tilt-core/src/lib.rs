pub mod card;
pub mod config;
pub mod constants;
pub mod engine;
pub mod params;

pub use card::*;
pub use config::*;
pub use engine::*;
pub use params::TiltParams;
