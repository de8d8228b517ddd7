//! Component trait and capability flags
//!
//! A component is a unit of behavior attached to exactly one actor. It never
//! holds a reference to its owner: the owning actor passes its transform into
//! every call instead.

use crate::foundation::math::Transform2D;
use crate::input::KeyboardState;
use crate::render::RenderContext;
use bitflags::bitflags;
use std::any::Any;
use thiserror::Error;

/// Update order used when a component does not pick one
pub const DEFAULT_UPDATE_ORDER: i32 = 100;

/// Draw order used when a renderable component does not pick one
pub const DEFAULT_DRAW_ORDER: i32 = 100;

bitflags! {
    /// Roles a component takes part in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Receives per-frame `update` calls
        const UPDATE = 1 << 0;
        /// Receives the keyboard snapshot before updates
        const INPUT = 1 << 1;
        /// Registered in the world's draw-order list
        const RENDER = 1 << 2;
    }
}

/// Per-actor component identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub(crate) u32);

impl ComponentId {
    /// Raw numeric value
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Invalid component configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    /// Mass must be strictly positive and finite
    #[error("Invalid mass {0}: mass must be greater than zero")]
    InvalidMass(f32),
}

/// Downcasting support for boxed components
pub trait AsAny {
    /// Borrow as [`Any`]
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as [`Any`]
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Behavior unit attached to an actor
///
/// `update_order` and `draw_order` are read once, when the component is
/// attached, and must not change afterwards.
pub trait Component: AsAny + 'static {
    /// Lower values update first
    fn update_order(&self) -> i32 {
        DEFAULT_UPDATE_ORDER
    }

    /// Roles this component takes part in
    fn capabilities(&self) -> Capabilities {
        Capabilities::UPDATE
    }

    /// Per-frame update
    fn update(&mut self, owner: &mut Transform2D, delta_time: f32) {
        let _ = (owner, delta_time);
    }

    /// Keyboard snapshot, delivered before `update` when [`Capabilities::INPUT`] is set
    fn process_input(&mut self, owner: &mut Transform2D, keys: &KeyboardState) {
        let _ = (owner, keys);
    }

    /// Lower values draw first (further back); used when [`Capabilities::RENDER`] is set
    fn draw_order(&self) -> i32 {
        DEFAULT_DRAW_ORDER
    }

    /// Issue draw calls for this component
    fn draw(&self, owner: &Transform2D, renderer: &mut dyn RenderContext) {
        let _ = (owner, renderer);
    }
}

/// A component as stored inside its actor
pub(crate) struct AttachedComponent {
    pub(crate) id: ComponentId,
    pub(crate) update_order: i32,
    pub(crate) draw_order: i32,
    pub(crate) capabilities: Capabilities,
    pub(crate) enabled: bool,
    pub(crate) registered: bool,
    pub(crate) component: Box<dyn Component>,
}

impl AttachedComponent {
    pub(crate) fn new(id: ComponentId, component: Box<dyn Component>) -> Self {
        Self {
            id,
            update_order: component.update_order(),
            draw_order: component.draw_order(),
            capabilities: component.capabilities(),
            enabled: true,
            registered: false,
            component,
        }
    }

    pub(crate) fn is_renderable(&self) -> bool {
        self.capabilities.contains(Capabilities::RENDER)
    }

    pub(crate) fn get<T: Component>(&self) -> Option<&T> {
        let component: &dyn Component = &*self.component;
        component.as_any().downcast_ref::<T>()
    }

    pub(crate) fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        let component: &mut dyn Component = &mut *self.component;
        component.as_any_mut().downcast_mut::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;
    impl Component for Plain {}

    struct Drawable;
    impl Component for Drawable {
        fn capabilities(&self) -> Capabilities {
            Capabilities::UPDATE | Capabilities::RENDER
        }

        fn draw_order(&self) -> i32 {
            7
        }
    }

    #[test]
    fn test_defaults() {
        let attached = AttachedComponent::new(ComponentId(0), Box::new(Plain));
        assert_eq!(attached.update_order, DEFAULT_UPDATE_ORDER);
        assert_eq!(attached.capabilities, Capabilities::UPDATE);
        assert!(attached.enabled);
        assert!(!attached.is_renderable());
    }

    #[test]
    fn test_orders_are_captured_at_attach_time() {
        let attached = AttachedComponent::new(ComponentId(3), Box::new(Drawable));
        assert!(attached.is_renderable());
        assert_eq!(attached.draw_order, 7);
        assert_eq!(attached.id.raw(), 3);
    }

    #[test]
    fn test_downcast() {
        let mut attached = AttachedComponent::new(ComponentId(0), Box::new(Plain));
        assert!(attached.get::<Plain>().is_some());
        assert!(attached.get::<Drawable>().is_none());
        assert!(attached.get_mut::<Plain>().is_some());
    }
}
