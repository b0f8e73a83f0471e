use crate::components::{Ball, PowerUp};
use crate::resources::GameRng;
use hecs::Entity;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Something the game-over sequence will blow up, identified by its sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionTarget {
    Ball(Entity),
    PowerUp(Entity),
}

/// Shuffled order in which balls and power-ups explode, one per tick.
///
/// Targets are recorded when the queue is built (balls first, then
/// power-ups), so an index keeps naming the same object even if the
/// collections change in the meantime.
#[derive(Debug, Clone, Default)]
pub struct ExplosionQueue {
    targets: Vec<ExplosionTarget>,
    order: VecDeque<usize>,
}

impl ExplosionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(balls: &[Ball], powerups: &[PowerUp], rng: &mut GameRng) -> Self {
        let targets: Vec<ExplosionTarget> = balls
            .iter()
            .map(|b| ExplosionTarget::Ball(b.sprite()))
            .chain(powerups.iter().map(|p| ExplosionTarget::PowerUp(p.sprite())))
            .collect();

        let mut order: Vec<usize> = (0..targets.len()).collect();
        order.shuffle(&mut rng.0);

        Self {
            targets,
            order: order.into(),
        }
    }

    /// Next target in explosion order
    pub fn pop(&mut self) -> Option<ExplosionTarget> {
        let index = self.order.pop_front()?;
        self.targets.get(index).copied()
    }

    /// Remaining indices into the recorded target list, in explosion order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.targets.clear();
        self.order.clear();
    }
}
