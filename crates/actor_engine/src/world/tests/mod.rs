//! Cross-module lifecycle tests for the world, actors and draw list

mod lifecycle;

use crate::assets::{Texture, TextureHandle};
use crate::world::{Actor, ActorId, Behavior, World};
use std::cell::Cell;
use std::rc::Rc;

/// Shared update counter
pub(super) type Counter = Rc<Cell<u32>>;

pub(super) fn counter() -> Counter {
    Rc::new(Cell::new(0))
}

/// Counts its actor's updates
pub(super) struct Counting {
    pub updates: Counter,
}

impl Behavior for Counting {
    fn update(&mut self, _actor: &mut Actor, _world: &mut World, _delta_time: f32) {
        self.updates.set(self.updates.get() + 1);
    }
}

pub(super) fn counting_actor(updates: &Counter) -> Actor {
    Actor::new().with_behavior(Counting {
        updates: Rc::clone(updates),
    })
}

/// Kills its actor on the first update
pub(super) struct SelfDestruct {
    pub updates: Counter,
}

impl Behavior for SelfDestruct {
    fn update(&mut self, actor: &mut Actor, _world: &mut World, _delta_time: f32) {
        self.updates.set(self.updates.get() + 1);
        actor.kill();
    }
}

/// Spawns one child actor on its first update
pub(super) struct Spawner {
    pub child: Option<Actor>,
    pub spawned: Rc<Cell<Option<ActorId>>>,
}

impl Behavior for Spawner {
    fn update(&mut self, _actor: &mut Actor, world: &mut World, _delta_time: f32) {
        if let Some(child) = self.child.take() {
            self.spawned.set(Some(world.add_actor(child)));
        }
    }
}

/// Texture whose width identifies it in recorded draw calls
pub(super) fn tagged_texture(tag: u32) -> Option<Texture> {
    Some(Texture {
        handle: TextureHandle::default(),
        width: tag,
        height: 1,
    })
}
