pub mod collision;
pub mod effects;
pub mod explosion;
pub mod pickups;
pub mod scoring;

pub use collision::*;
pub use effects::*;
pub use explosion::*;
pub use pickups::*;
pub use scoring::*;
