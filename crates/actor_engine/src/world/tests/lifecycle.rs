//! Staging, deferred destruction and removal

use super::*;
use crate::world::ActorState;

#[test]
fn test_actor_spawned_mid_sweep_waits_one_frame() {
    let child_updates = counter();
    let spawned = Rc::new(Cell::new(None));
    let mut world = World::new();
    world.add_actor(Actor::new().with_behavior(Spawner {
        child: Some(counting_actor(&child_updates)),
        spawned: Rc::clone(&spawned),
    }));

    world.update_frame(0.016);

    let child = spawned.get().unwrap();
    assert_eq!(child_updates.get(), 0);
    assert!(world.live_ids().contains(&child));
    assert!(world.pending_ids().is_empty());

    world.update_frame(0.016);
    assert_eq!(child_updates.get(), 1);

    world.update_frame(0.016);
    assert_eq!(child_updates.get(), 2);
}

#[test]
fn test_spawned_actor_is_pending_during_sweep() {
    struct Watcher {
        seen: Rc<Cell<(bool, usize)>>,
    }

    impl Behavior for Watcher {
        fn update(&mut self, _actor: &mut Actor, world: &mut World, _delta_time: f32) {
            world.add_actor(Actor::new());
            self.seen.set((world.is_updating(), world.pending_ids().len()));
        }
    }

    let seen = Rc::new(Cell::new((false, 0)));
    let mut world = World::new();
    world.add_actor(Actor::new().with_behavior(Watcher { seen: Rc::clone(&seen) }));

    world.update_frame(0.016);

    assert_eq!(seen.get(), (true, 1));
    assert!(!world.is_updating());
    assert_eq!(world.live_ids().len(), 2);
}

#[test]
fn test_nested_update_frame_is_ignored() {
    struct Reentrant {
        victim: ActorId,
        seen: Rc<Cell<(bool, bool)>>,
    }

    impl Behavior for Reentrant {
        fn update(&mut self, _actor: &mut Actor, world: &mut World, delta_time: f32) {
            if let Some(victim) = world.actor_mut(self.victim) {
                victim.kill();
            }
            world.update_frame(delta_time);
            self.seen.set((world.contains(self.victim), world.is_updating()));
        }
    }

    let other_updates = counter();
    let seen = Rc::new(Cell::new((false, false)));
    let mut world = World::new();
    let victim = world.add_actor(Actor::new());
    world.add_actor(Actor::new().with_behavior(Reentrant {
        victim,
        seen: Rc::clone(&seen),
    }));
    world.add_actor(counting_actor(&other_updates));

    world.update_frame(0.016);

    assert_eq!(seen.get(), (true, true));
    assert_eq!(other_updates.get(), 1);
    assert_eq!(world.frame_count(), 1);
    assert!(!world.contains(victim));
    assert!(!world.is_updating());
}

#[test]
fn test_self_killed_actor_finishes_frame_and_is_purged() {
    let doomed_updates = counter();
    let other_updates = counter();
    let mut world = World::new();
    let doomed = world.add_actor(Actor::new().with_behavior(SelfDestruct {
        updates: Rc::clone(&doomed_updates),
    }));
    let other = world.add_actor(counting_actor(&other_updates));

    world.update_frame(0.016);

    assert_eq!(doomed_updates.get(), 1);
    assert_eq!(other_updates.get(), 1);
    assert!(!world.contains(doomed));
    assert_eq!(world.live_ids(), &[other]);

    world.update_frame(0.016);
    assert_eq!(doomed_updates.get(), 1);
    assert_eq!(other_updates.get(), 2);
}

#[test]
fn test_actor_killed_by_another_is_not_updated() {
    struct Killer {
        target: ActorId,
    }

    impl Behavior for Killer {
        fn update(&mut self, _actor: &mut Actor, world: &mut World, _delta_time: f32) {
            if let Some(target) = world.actor_mut(self.target) {
                target.kill();
            }
        }
    }

    let victim_updates = counter();
    let mut world = World::new();
    let killer = world.add_actor(Actor::new());
    let victim = world.add_actor(counting_actor(&victim_updates));
    world.actor_mut(killer).unwrap().set_behavior(Killer { target: victim });

    world.update_frame(0.016);

    assert_eq!(victim_updates.get(), 0);
    assert!(!world.contains(victim));
    assert!(world.contains(killer));
}

#[test]
fn test_dead_actor_added_mid_sweep_is_purged_with_promotion() {
    let spawned = Rc::new(Cell::new(None));
    let mut dead_child = Actor::new();
    dead_child.kill();
    let mut world = World::new();
    world.add_actor(Actor::new().with_behavior(Spawner {
        child: Some(dead_child),
        spawned: Rc::clone(&spawned),
    }));

    world.update_frame(0.016);

    let child = spawned.get().unwrap();
    assert!(!world.contains(child));
    assert_eq!(world.len(), 1);
}

#[test]
fn test_remove_is_idempotent() {
    let updates = counter();
    let mut world = World::new();
    let removed = world.add_actor(Actor::new());
    let kept = world.add_actor(counting_actor(&updates));

    assert!(world.remove_actor(removed));
    assert!(!world.remove_actor(removed));
    assert!(!world.remove_actor(ActorId::default()));

    world.update_frame(0.016);
    assert_eq!(world.live_ids(), &[kept]);
    assert_eq!(updates.get(), 1);
}

#[test]
fn test_remove_pending_actor() {
    struct SpawnAndCancel;

    impl Behavior for SpawnAndCancel {
        fn update(&mut self, _actor: &mut Actor, world: &mut World, _delta_time: f32) {
            let id = world.add_actor(Actor::new());
            assert!(world.remove_actor(id));
            assert!(world.pending_ids().is_empty());
        }
    }

    let mut world = World::new();
    world.add_actor(Actor::new().with_behavior(SpawnAndCancel));

    world.update_frame(0.016);

    assert_eq!(world.len(), 1);
}

#[test]
fn test_actor_removing_itself_mid_update() {
    struct RemoveSelf;

    impl Behavior for RemoveSelf {
        fn update(&mut self, actor: &mut Actor, world: &mut World, _delta_time: f32) {
            if let Some(id) = actor.id() {
                assert!(world.remove_actor(id));
            }
        }
    }

    let other_updates = counter();
    let mut world = World::new();
    let leaver = world.add_actor(Actor::new().with_behavior(RemoveSelf));
    world.add_actor(counting_actor(&other_updates));

    world.update_frame(0.016);

    assert!(!world.contains(leaver));
    assert_eq!(world.len(), 1);
    assert_eq!(other_updates.get(), 1);
}

#[test]
fn test_paused_actor_skips_update_and_resumes() {
    let updates = counter();
    let mut world = World::new();
    let id = world.add_actor(counting_actor(&updates));
    world.actor_mut(id).unwrap().set_state(ActorState::Paused);

    world.update_frame(0.016);
    assert_eq!(updates.get(), 0);
    assert!(world.contains(id));

    world.actor_mut(id).unwrap().set_state(ActorState::Active);
    world.update_frame(0.016);
    assert_eq!(updates.get(), 1);
}

#[test]
fn test_panicking_actor_is_killed_and_frame_continues() {
    struct Explodes;

    impl Behavior for Explodes {
        fn update(&mut self, _actor: &mut Actor, _world: &mut World, _delta_time: f32) {
            panic!("actor exploded");
        }
    }

    let updates = counter();
    let mut world = World::new();
    let bad = world.add_actor(Actor::new().named("bad").with_behavior(Explodes));
    let good = world.add_actor(counting_actor(&updates));

    world.update_frame(0.016);

    assert!(!world.contains(bad));
    assert_eq!(world.live_ids(), &[good]);
    assert_eq!(updates.get(), 1);
    assert!(!world.is_updating());
}

#[test]
#[should_panic(expected = "actor exploded")]
fn test_panics_propagate_when_isolation_is_off() {
    struct Explodes;

    impl Behavior for Explodes {
        fn update(&mut self, _actor: &mut Actor, _world: &mut World, _delta_time: f32) {
            panic!("actor exploded");
        }
    }

    let mut world = World::new();
    world.set_isolate_panics(false);
    world.add_actor(Actor::new().with_behavior(Explodes));

    world.update_frame(0.016);
}
