//! Actors: transform, lifecycle state and an ordered set of components
//!
//! Each frame an active actor first updates its components in ascending
//! update order, then runs its [`Behavior`] hook. Every actor follows this
//! order; behaviors can rely on components (movement, animation) having already
//! advanced the transform for the frame.

use super::component::{AttachedComponent, Capabilities, Component, ComponentId};
use super::World;
use crate::foundation::math::{Transform2D, Vec2};
use crate::input::KeyboardState;
use crate::render::RenderContext;

slotmap::new_key_type! {
    /// Stable, generation-checked actor identifier
    pub struct ActorId;
}

/// Actor lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorState {
    /// Receives input and updates
    #[default]
    Active,
    /// Kept alive and drawn, but neither updated nor fed input
    Paused,
    /// Skipped from now on and removed during the next reconciliation
    Dead,
}

/// Actor-specific logic that runs after the actor's components
///
/// The world is passed in so behaviors can spawn actors, which are staged as
/// pending while the update sweep runs, or look at other actors. The actor
/// currently being updated is not reachable through `world` during its own
/// hook; use the `actor` argument instead.
pub trait Behavior: 'static {
    /// Per-frame hook, called after all components have updated
    fn update(&mut self, actor: &mut Actor, world: &mut World, delta_time: f32) {
        let _ = (actor, world, delta_time);
    }

    /// Keyboard hook, called after input-handling components
    fn process_input(&mut self, actor: &mut Actor, keys: &KeyboardState) {
        let _ = (actor, keys);
    }
}

/// Game-world entity
pub struct Actor {
    id: Option<ActorId>,
    name: String,
    state: ActorState,
    transform: Transform2D,
    components: Vec<AttachedComponent>,
    next_component_id: u32,
    behavior: Option<Box<dyn Behavior>>,
}

impl Actor {
    /// Create an active actor at the origin with no components
    pub fn new() -> Self {
        Self {
            id: None,
            name: "actor".to_string(),
            state: ActorState::Active,
            transform: Transform2D::default(),
            components: Vec::new(),
            next_component_id: 0,
            behavior: None,
        }
    }

    /// Builder pattern: Set the name used in logs and lookups
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder pattern: Set the behavior hook
    pub fn with_behavior(mut self, behavior: impl Behavior) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Builder pattern: Set position
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.transform.position = position;
        self
    }

    /// Builder pattern: Set rotation in radians
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.transform.rotation = rotation;
        self
    }

    /// Builder pattern: Set uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.transform.scale = scale;
        self
    }

    /// Builder pattern: Attach a component
    pub fn with_component(mut self, component: impl Component) -> Self {
        self.add_component(component);
        self
    }

    /// Identifier assigned by the world, `None` until the actor is added
    pub fn id(&self) -> Option<ActorId> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ActorId) {
        self.id = Some(id);
    }

    /// Name used in logs and lookups
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current lifecycle state
    pub fn state(&self) -> ActorState {
        self.state
    }

    /// Change lifecycle state
    ///
    /// Setting [`ActorState::Dead`] only flags the actor; the world removes it
    /// during its next reconciliation.
    pub fn set_state(&mut self, state: ActorState) {
        self.state = state;
    }

    /// Shorthand for `set_state(ActorState::Dead)`
    pub fn kill(&mut self) {
        self.state = ActorState::Dead;
    }

    /// Whether the actor is flagged dead
    pub fn is_dead(&self) -> bool {
        self.state == ActorState::Dead
    }

    /// World transform
    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    /// Mutable world transform
    pub fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    /// World position
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Set world position
    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.transform.rotation
    }

    /// Set rotation in radians
    pub fn set_rotation(&mut self, rotation: f32) {
        self.transform.rotation = rotation;
    }

    /// Uniform scale
    pub fn scale(&self) -> f32 {
        self.transform.scale
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.transform.scale = scale;
    }

    /// Facing direction
    pub fn forward(&self) -> Vec2 {
        self.transform.forward()
    }

    /// Attach a component, keeping components sorted by update order
    ///
    /// Components with equal update order keep their attachment order.
    /// Renderable components are picked up by the world's draw list the next
    /// time it synchronises this actor.
    pub fn add_component(&mut self, component: impl Component) -> ComponentId {
        self.attach_boxed(Box::new(component))
    }

    /// Attach an already boxed component
    pub fn attach_boxed(&mut self, component: Box<dyn Component>) -> ComponentId {
        let id = ComponentId(self.next_component_id);
        self.next_component_id += 1;

        let attached = AttachedComponent::new(id, component);
        let index = self
            .components
            .iter()
            .position(|existing| attached.update_order < existing.update_order)
            .unwrap_or(self.components.len());
        self.components.insert(index, attached);
        id
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Component ids in update order
    pub fn component_ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.components.iter().map(|attached| attached.id)
    }

    /// First component of type `T`
    pub fn component<T: Component>(&self) -> Option<&T> {
        self.components.iter().find_map(|attached| attached.get::<T>())
    }

    /// First component of type `T`, mutably
    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components.iter_mut().find_map(|attached| attached.get_mut::<T>())
    }

    /// Component with the given id, if it is of type `T`
    pub fn component_by_id<T: Component>(&self, id: ComponentId) -> Option<&T> {
        self.slot(id).and_then(|attached| attached.get::<T>())
    }

    /// Component with the given id, mutably, if it is of type `T`
    pub fn component_by_id_mut<T: Component>(&mut self, id: ComponentId) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find(|attached| attached.id == id)
            .and_then(|attached| attached.get_mut::<T>())
    }

    /// Enable or disable a component; returns false when `id` is unknown
    ///
    /// Disabled components are skipped for update, input and drawing.
    pub fn set_component_enabled(&mut self, id: ComponentId, enabled: bool) -> bool {
        match self.components.iter_mut().find(|attached| attached.id == id) {
            Some(attached) => {
                attached.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Whether a component is enabled; `None` when `id` is unknown
    pub fn is_component_enabled(&self, id: ComponentId) -> Option<bool> {
        self.slot(id).map(|attached| attached.enabled)
    }

    /// Run one frame: components in update order, then the behavior hook
    ///
    /// Does nothing unless the actor is [`ActorState::Active`].
    pub fn update(&mut self, world: &mut World, delta_time: f32) {
        if self.state != ActorState::Active {
            return;
        }

        self.update_components(delta_time);

        if let Some(mut behavior) = self.behavior.take() {
            behavior.update(self, world, delta_time);
            // A behavior may install a replacement for itself
            if self.behavior.is_none() {
                self.behavior = Some(behavior);
            }
        }
    }

    /// Update every enabled component that takes updates, in update order
    pub fn update_components(&mut self, delta_time: f32) {
        let transform = &mut self.transform;
        for attached in &mut self.components {
            if attached.enabled && attached.capabilities.contains(Capabilities::UPDATE) {
                attached.component.update(transform, delta_time);
            }
        }
    }

    /// Deliver the keyboard snapshot to input components, then the behavior
    ///
    /// Does nothing unless the actor is [`ActorState::Active`].
    pub fn process_input(&mut self, keys: &KeyboardState) {
        if self.state != ActorState::Active {
            return;
        }

        let transform = &mut self.transform;
        for attached in &mut self.components {
            if attached.enabled && attached.capabilities.contains(Capabilities::INPUT) {
                attached.component.process_input(transform, keys);
            }
        }

        if let Some(mut behavior) = self.behavior.take() {
            behavior.process_input(self, keys);
            if self.behavior.is_none() {
                self.behavior = Some(behavior);
            }
        }
    }

    /// Replace the behavior hook
    pub fn set_behavior(&mut self, behavior: impl Behavior) {
        self.behavior = Some(Box::new(behavior));
    }

    /// Draw one component if it is enabled and renderable
    pub(crate) fn draw_component(&self, id: ComponentId, renderer: &mut dyn RenderContext) {
        if let Some(attached) = self.slot(id) {
            if attached.enabled && attached.is_renderable() {
                attached.component.draw(&self.transform, renderer);
            }
        }
    }

    /// Renderable components not yet in a draw list; marks them registered
    pub(crate) fn take_unregistered_renderables(&mut self) -> Vec<(ComponentId, i32)> {
        self.components
            .iter_mut()
            .filter(|attached| attached.is_renderable() && !attached.registered)
            .map(|attached| {
                attached.registered = true;
                (attached.id, attached.draw_order)
            })
            .collect()
    }

    /// Renderable components currently in a draw list
    pub(crate) fn registered_renderables(&self) -> Vec<ComponentId> {
        self.components
            .iter()
            .filter(|attached| attached.registered)
            .map(|attached| attached.id)
            .collect()
    }

    fn slot(&self, id: ComponentId) -> Option<&AttachedComponent> {
        self.components.iter().find(|attached| attached.id == id)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("state", &self.state)
            .field("transform", &self.transform)
            .field("components", &self.components.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Tracer {
        label: &'static str,
        order: i32,
        log: Log,
    }

    impl Component for Tracer {
        fn update_order(&self) -> i32 {
            self.order
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::UPDATE | Capabilities::INPUT
        }

        fn update(&mut self, owner: &mut Transform2D, _delta_time: f32) {
            owner.position.x += 1.0;
            self.log.borrow_mut().push(format!("update {}", self.label));
        }

        fn process_input(&mut self, _owner: &mut Transform2D, _keys: &KeyboardState) {
            self.log.borrow_mut().push(format!("input {}", self.label));
        }
    }

    struct UpdateOnly {
        log: Log,
    }

    impl Component for UpdateOnly {
        fn process_input(&mut self, _owner: &mut Transform2D, _keys: &KeyboardState) {
            self.log.borrow_mut().push("input update-only".to_string());
        }
    }

    struct RecordingBehavior {
        log: Log,
    }

    impl Behavior for RecordingBehavior {
        fn update(&mut self, actor: &mut Actor, _world: &mut World, _delta_time: f32) {
            self.log
                .borrow_mut()
                .push(format!("behavior sees x={}", actor.position().x));
        }

        fn process_input(&mut self, _actor: &mut Actor, _keys: &KeyboardState) {
            self.log.borrow_mut().push("behavior input".to_string());
        }
    }

    fn tracer(label: &'static str, order: i32, log: &Log) -> Tracer {
        Tracer {
            label,
            order,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn test_components_update_in_priority_order_before_behavior() {
        let log: Log = Rc::default();
        let mut world = World::new();
        let mut actor = Actor::new()
            .with_component(tracer("late", 200, &log))
            .with_component(tracer("early", 10, &log))
            .with_component(tracer("middle", 100, &log))
            .with_behavior(RecordingBehavior { log: Rc::clone(&log) });

        actor.update(&mut world, 0.016);

        assert_eq!(
            *log.borrow(),
            vec!["update early", "update middle", "update late", "behavior sees x=3"]
        );
    }

    #[test]
    fn test_equal_update_order_keeps_attach_order() {
        let log: Log = Rc::default();
        let mut world = World::new();
        let mut actor = Actor::new()
            .with_component(tracer("a", 50, &log))
            .with_component(tracer("b", 50, &log));

        actor.update(&mut world, 0.016);

        assert_eq!(*log.borrow(), vec!["update a", "update b"]);
    }

    #[test]
    fn test_inactive_actor_does_not_update() {
        let log: Log = Rc::default();
        let mut world = World::new();
        let mut actor = Actor::new().with_component(tracer("c", 1, &log));

        actor.set_state(ActorState::Paused);
        actor.update(&mut world, 0.016);
        actor.process_input(&KeyboardState::new());
        actor.kill();
        actor.update(&mut world, 0.016);

        assert!(log.borrow().is_empty());
        assert_eq!(actor.position(), Vec2::zeros());
    }

    #[test]
    fn test_input_only_reaches_input_components() {
        let log: Log = Rc::default();
        let mut actor = Actor::new()
            .with_component(UpdateOnly { log: Rc::clone(&log) })
            .with_component(tracer("p", 1, &log))
            .with_behavior(RecordingBehavior { log: Rc::clone(&log) });

        actor.process_input(&KeyboardState::new());

        assert_eq!(*log.borrow(), vec!["input p", "behavior input"]);
    }

    #[test]
    fn test_disabled_component_is_skipped() {
        let log: Log = Rc::default();
        let mut world = World::new();
        let mut actor = Actor::new();
        let id = actor.add_component(tracer("off", 1, &log));

        assert!(actor.set_component_enabled(id, false));
        assert_eq!(actor.is_component_enabled(id), Some(false));
        actor.update(&mut world, 0.016);

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_component_lookup_by_type_and_id() {
        let log: Log = Rc::default();
        let mut actor = Actor::new();
        let first = actor.add_component(tracer("first", 5, &log));
        let second = actor.add_component(UpdateOnly { log: Rc::clone(&log) });

        assert_eq!(actor.component_count(), 2);
        assert_eq!(actor.component::<Tracer>().map(|p| p.label), Some("first"));
        assert!(actor.component_by_id::<UpdateOnly>(second).is_some());
        assert!(actor.component_by_id::<UpdateOnly>(first).is_none());
        actor.component_mut::<Tracer>().unwrap().label = "renamed";
        assert_eq!(actor.component_by_id::<Tracer>(first).map(|p| p.label), Some("renamed"));
        assert!(!actor.set_component_enabled(ComponentId(99), false));
    }

    #[test]
    fn test_builder_sets_transform() {
        let actor = Actor::new()
            .named("ship")
            .with_position(Vec2::new(1.0, 2.0))
            .with_rotation(0.5)
            .with_scale(1.5);

        assert_eq!(actor.name(), "ship");
        assert_eq!(actor.position(), Vec2::new(1.0, 2.0));
        assert_eq!(actor.rotation(), 0.5);
        assert_eq!(actor.scale(), 1.5);
        assert_eq!(actor.state(), ActorState::Active);
        assert!(actor.id().is_none());
    }
}
