//! Actor factories and behaviors

use crate::assets::GameTextures;
use crate::components::WrapAround;
use crate::config::GameplayConfig;
use actor_engine::prelude::*;
use actor_engine::world::components::BACKGROUND_DRAW_ORDER;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Name shared by every asteroid actor
pub const ASTEROID_NAME: &str = "asteroid";

/// Name shared by every laser actor
pub const LASER_NAME: &str = "laser";

/// Name of the player ship actor
pub const SHIP_NAME: &str = "ship";

/// Ships and lasers draw above the backgrounds and asteroids
const SHIP_DRAW_ORDER: i32 = 150;

const LASER_RADIUS: f32 = 11.0;
const SHIP_RADIUS: f32 = 32.0;

/// Counters updated by behaviors while the game runs
#[derive(Debug, Default)]
pub struct GameStats {
    /// Lasers fired
    pub shots_fired: Cell<u32>,
    /// Asteroids destroyed by lasers
    pub asteroids_destroyed: Cell<u32>,
}

impl GameStats {
    fn record_shot(&self) {
        self.shots_fired.set(self.shots_fired.get() + 1);
    }

    fn record_kill(&self) {
        self.asteroids_destroyed.set(self.asteroids_destroyed.get() + 1);
    }
}

/// Fires lasers while the fire key is held, limited by a cooldown
pub struct ShipBehavior {
    laser_texture: Option<Texture>,
    laser_speed: f32,
    laser_lifetime: f32,
    fire_cooldown: f32,
    cooldown: f32,
    fire_held: bool,
    stats: Rc<GameStats>,
}

impl Behavior for ShipBehavior {
    fn update(&mut self, actor: &mut Actor, world: &mut World, delta_time: f32) {
        self.cooldown = (self.cooldown - delta_time).max(0.0);
        if !self.fire_held || self.cooldown > 0.0 {
            return;
        }

        world.add_actor(laser(
            actor.position(),
            actor.rotation(),
            self.laser_texture,
            self.laser_speed,
            self.laser_lifetime,
            Rc::clone(&self.stats),
        ));
        self.cooldown = self.fire_cooldown;
        self.stats.record_shot();
    }

    fn process_input(&mut self, _actor: &mut Actor, keys: &KeyboardState) {
        self.fire_held = keys.is_down(KeyCode::Space);
    }
}

/// Expires after its lifetime and destroys the first asteroid it touches
pub struct LaserBehavior {
    remaining: f32,
    stats: Rc<GameStats>,
}

impl Behavior for LaserBehavior {
    fn update(&mut self, actor: &mut Actor, world: &mut World, delta_time: f32) {
        self.remaining -= delta_time;
        if self.remaining <= 0.0 {
            actor.kill();
            return;
        }

        let hit = world
            .iter()
            .find(|(_, other)| other.name() == ASTEROID_NAME && !other.is_dead() && intersect(actor, other))
            .map(|(id, _)| id);

        if let Some(asteroid) = hit.and_then(|id| world.actor_mut(id)) {
            log::debug!("Laser hit asteroid at ({:.0}, {:.0})", asteroid.position().x, asteroid.position().y);
            asteroid.kill();
            actor.kill();
            self.stats.record_kill();
        }
    }
}

/// Player ship steered with W/S/A/D and firing with Space
pub fn ship(playfield: Vec2, textures: &GameTextures, gameplay: &GameplayConfig, stats: Rc<GameStats>) -> Actor {
    Actor::new()
        .named(SHIP_NAME)
        .with_position(playfield / 2.0)
        .with_component(SpriteComponent::with_draw_order(SHIP_DRAW_ORDER).with_texture(textures.ship))
        .with_component(InputComponent::new(gameplay.ship_max_speed, gameplay.ship_rotation_speed))
        .with_component(CircleComponent::new(SHIP_RADIUS))
        .with_component(WrapAround::new(playfield))
        .with_behavior(ShipBehavior {
            laser_texture: textures.laser,
            laser_speed: gameplay.laser_speed,
            laser_lifetime: gameplay.laser_lifetime,
            fire_cooldown: gameplay.fire_cooldown,
            cooldown: 0.0,
            fire_held: false,
            stats,
        })
}

/// Laser bolt travelling along `rotation`
pub fn laser(
    position: Vec2,
    rotation: f32,
    texture: Option<Texture>,
    speed: f32,
    lifetime: f32,
    stats: Rc<GameStats>,
) -> Actor {
    Actor::new()
        .named(LASER_NAME)
        .with_position(position)
        .with_rotation(rotation)
        .with_component(SpriteComponent::with_draw_order(SHIP_DRAW_ORDER).with_texture(texture))
        .with_component(MoveComponent::new().with_forward_speed(speed))
        .with_component(CircleComponent::new(LASER_RADIUS))
        .with_behavior(LaserBehavior {
            remaining: lifetime,
            stats,
        })
}

/// Asteroid drifting in a random direction from a random point
pub fn asteroid<R: Rng>(rng: &mut R, playfield: Vec2, texture: Option<Texture>, gameplay: &GameplayConfig) -> Actor {
    let position = Vec2::new(rng.gen_range(0.0..playfield.x), rng.gen_range(0.0..playfield.y));
    let rotation = rng.gen_range(0.0..std::f32::consts::TAU);

    Actor::new()
        .named(ASTEROID_NAME)
        .with_position(position)
        .with_rotation(rotation)
        .with_component(SpriteComponent::new().with_texture(texture))
        .with_component(MoveComponent::new().with_forward_speed(gameplay.asteroid_speed))
        .with_component(CircleComponent::new(gameplay.asteroid_radius))
        .with_component(WrapAround::new(playfield))
}

/// Two-layer parallax background centred on the playfield
pub fn background(playfield: Vec2, far: &[Texture], near: &[Texture]) -> Actor {
    Actor::new()
        .named("background")
        .with_position(playfield / 2.0)
        .with_component(
            BackgroundSpriteComponent::new(playfield)
                .with_textures(far)
                .with_scroll_speed(-100.0),
        )
        .with_component(
            BackgroundSpriteComponent::with_draw_order(playfield, BACKGROUND_DRAW_ORDER + 5)
                .with_textures(near)
                .with_scroll_speed(-200.0),
        )
}

/// Number of asteroids still in the world
pub fn asteroids_remaining(world: &World) -> usize {
    world
        .iter()
        .filter(|(_, actor)| actor.name() == ASTEROID_NAME)
        .count()
}
