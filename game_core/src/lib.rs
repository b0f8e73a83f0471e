//! Simulation core for a multi-ball Pong variant with power-ups and particle
//! effects. The host drives [`Pong::tick`] at a fixed rate and draws whatever
//! the [`Registry`] holds.

pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod game;
pub mod menu;
pub mod params;
pub mod registry;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use game::*;
pub use menu::*;
pub use params::*;
pub use registry::*;
pub use resources::*;
