//! Actor registry
//!
//! The world owns every actor in a slot map and tracks two id lists: `live`
//! actors take part in the update sweep, `pending` actors were added while a
//! sweep was running and are promoted once it finishes. Dead actors are purged
//! in the same reconciliation step, never in the middle of a sweep.
//!
//! While an actor is being updated it is moved out of its slot, which stays
//! reserved (`None`) until the actor is put back. Lookups of an in-flight actor
//! therefore return `None`.

use super::actor::{Actor, ActorId};
use super::component::{Component, ComponentId};
use crate::input::KeyboardState;
use crate::render::{DrawOrderList, RenderContext};
use log::{debug, error, trace, warn};
use slotmap::SlotMap;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Draw-list key: one renderable component of one actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    /// Owning actor
    pub actor: ActorId,

    /// Component within that actor
    pub component: ComponentId,
}

/// Owner of all actors and of the draw-order list
pub struct World {
    actors: SlotMap<ActorId, Option<Actor>>,
    live: Vec<ActorId>,
    pending: Vec<ActorId>,
    updating: bool,
    sprites: DrawOrderList<SpriteKey>,
    isolate_panics: bool,
    frame_count: u64,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            actors: SlotMap::with_key(),
            live: Vec::new(),
            pending: Vec::new(),
            updating: false,
            sprites: DrawOrderList::new(),
            isolate_panics: true,
            frame_count: 0,
        }
    }

    /// Take ownership of `actor` and return its id
    ///
    /// During an update sweep the actor is staged as pending and first updated
    /// on the next frame. Its renderable components join the draw list right
    /// away.
    pub fn add_actor(&mut self, mut actor: Actor) -> ActorId {
        let id = self.actors.insert(None);
        actor.set_id(id);
        self.register_renderables(id, &mut actor);

        if self.updating {
            self.pending.push(id);
        } else {
            self.live.push(id);
        }
        debug!(
            "Added actor '{}' ({:?}){}",
            actor.name(),
            id,
            if self.updating { " as pending" } else { "" }
        );

        if let Some(slot) = self.actors.get_mut(id) {
            *slot = Some(actor);
        }
        id
    }

    /// Destroy an actor and unregister its renderables
    ///
    /// Looks in the pending list, then the live list, and swap-removes the id.
    /// Returns false, and changes nothing, when the actor is unknown or was
    /// already removed. Removing an actor whose update is in progress is
    /// allowed; it is torn down as soon as its update returns.
    pub fn remove_actor(&mut self, id: ActorId) -> bool {
        if !swap_remove_id(&mut self.pending, id) {
            swap_remove_id(&mut self.live, id);
        }

        match self.actors.remove(id) {
            Some(Some(actor)) => {
                self.unregister_renderables(id, &actor);
                debug!("Removed actor '{}' ({:?})", actor.name(), id);
                true
            }
            Some(None) => {
                debug!("Removed in-flight actor {:?}", id);
                true
            }
            None => false,
        }
    }

    /// Run one update sweep followed by reconciliation
    ///
    /// Only actors live when the sweep starts are updated. Afterwards pending
    /// actors become live and every dead actor is destroyed. Calls made while a
    /// sweep is already running are ignored.
    pub fn update_frame(&mut self, delta_time: f32) {
        if self.updating {
            warn!("update_frame called during an update sweep; ignoring");
            return;
        }

        self.updating = true;
        let snapshot = self.live.clone();
        for id in snapshot {
            self.with_actor(id, |actor, world| actor.update(world, delta_time));
        }
        self.updating = false;

        self.live.append(&mut self.pending);

        let dead: Vec<ActorId> = self
            .live
            .iter()
            .copied()
            .filter(|id| self.actor(*id).is_some_and(Actor::is_dead))
            .collect();
        for id in dead {
            self.remove_actor(id);
        }

        self.frame_count += 1;
        trace!("Frame {} updated {} actors", self.frame_count, self.live.len());
    }

    /// Forward a keyboard snapshot to every live actor
    pub fn process_input(&mut self, keys: &KeyboardState) {
        let snapshot = self.live.clone();
        for id in snapshot {
            self.with_actor(id, |actor, _| actor.process_input(keys));
        }
    }

    /// Draw every registered renderable, lowest draw order first
    pub fn render(&self, renderer: &mut dyn RenderContext) {
        self.sprites.render_all(|key| {
            if let Some(actor) = self.actor(key.actor) {
                actor.draw_component(key.component, renderer);
            }
        });
    }

    /// Attach a component to an actor already in the world
    ///
    /// Renderable components are registered in the draw list immediately.
    /// Returns `None` when the actor is unknown or is currently being updated;
    /// an actor that attaches to itself during its own update should call
    /// [`Actor::add_component`], which the world picks up when the update ends.
    pub fn attach_component(&mut self, id: ActorId, component: impl Component) -> Option<ComponentId> {
        let mut actor = self.actors.get_mut(id)?.take()?;
        let component_id = actor.add_component(component);
        self.restore(id, actor);
        Some(component_id)
    }

    /// Destroy every actor, live and pending
    pub fn clear(&mut self) {
        if !self.actors.is_empty() {
            debug!("Clearing {} actors", self.actors.len());
        }
        self.live.clear();
        self.pending.clear();
        self.actors.clear();
        self.sprites.clear();
    }

    /// Actor by id; `None` if unknown or currently being updated
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id).and_then(Option::as_ref)
    }

    /// Mutable actor by id; `None` if unknown or currently being updated
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id).and_then(Option::as_mut)
    }

    /// Whether the id refers to an actor the world still owns
    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(id)
    }

    /// Live actor ids, in sweep order
    pub fn live_ids(&self) -> &[ActorId] {
        &self.live
    }

    /// Actors staged during the current or last sweep
    pub fn pending_ids(&self) -> &[ActorId] {
        &self.pending
    }

    /// Live and pending actors that are not currently being updated
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> + '_ {
        self.live
            .iter()
            .chain(self.pending.iter())
            .filter_map(|id| self.actor(*id).map(|actor| (*id, actor)))
    }

    /// Whether an update sweep is in progress
    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Number of live and pending actors
    pub fn len(&self) -> usize {
        self.live.len() + self.pending.len()
    }

    /// Whether the world holds no actors
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renderables in draw order
    pub fn draw_list(&self) -> &DrawOrderList<SpriteKey> {
        &self.sprites
    }

    /// Number of completed update sweeps
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Whether a panicking actor update is caught and the actor killed
    pub fn isolate_panics(&self) -> bool {
        self.isolate_panics
    }

    /// Catch panics from actor updates (default) or let them propagate
    pub fn set_isolate_panics(&mut self, isolate: bool) {
        self.isolate_panics = isolate;
    }

    /// Move an actor out of its slot, run `f`, then put it back
    fn with_actor<F>(&mut self, id: ActorId, f: F)
    where
        F: FnOnce(&mut Actor, &mut World),
    {
        let Some(mut actor) = self.actors.get_mut(id).and_then(Option::take) else {
            return;
        };

        if self.isolate_panics {
            let result = panic::catch_unwind(AssertUnwindSafe(|| f(&mut actor, self)));
            if let Err(payload) = result {
                error!(
                    "Actor '{}' ({:?}) panicked: {}; marking it dead",
                    actor.name(),
                    id,
                    panic_message(&*payload)
                );
                actor.kill();
            }
        } else {
            f(&mut actor, self);
        }

        self.restore(id, actor);
    }

    /// Return an actor to its slot, or tear it down if it was removed meanwhile
    fn restore(&mut self, id: ActorId, mut actor: Actor) {
        if !self.actors.contains_key(id) {
            self.unregister_renderables(id, &actor);
            debug!("Destroyed actor '{}' ({:?}) after its update", actor.name(), id);
            return;
        }

        self.register_renderables(id, &mut actor);
        if let Some(slot) = self.actors.get_mut(id) {
            *slot = Some(actor);
        }
    }

    fn register_renderables(&mut self, id: ActorId, actor: &mut Actor) {
        for (component, draw_order) in actor.take_unregistered_renderables() {
            self.sprites.register(SpriteKey { actor: id, component }, draw_order);
        }
    }

    fn unregister_renderables(&mut self, id: ActorId, actor: &Actor) {
        for component in actor.registered_renderables() {
            self.sprites.unregister(&SpriteKey { actor: id, component });
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn swap_remove_id(ids: &mut Vec<ActorId>, id: ActorId) -> bool {
    match ids.iter().position(|existing| *existing == id) {
        Some(index) => {
            ids.swap_remove(index);
            true
        }
        None => false,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
