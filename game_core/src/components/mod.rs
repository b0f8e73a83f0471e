pub mod ball;
pub mod paddle;
pub mod particle;
pub mod powerup;
pub mod trail;

pub use ball::*;
pub use paddle::*;
pub use particle::*;
pub use powerup::*;
pub use trail::*;

/// Sign of `v` as -1, 0 or 1. Unlike `f32::signum`, zero maps to zero.
pub(crate) fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
