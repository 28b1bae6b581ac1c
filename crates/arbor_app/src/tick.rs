//! Engine tick loop.
//!
//! The loop owns the single [`ComponentStore`] and [`EntityManager`] and
//! hands both to game logic once per fixed-timestep tick. It is strictly
//! single-threaded and synchronous: each tick is one pass of game logic,
//! and all world-transform updates happen eagerly inside the component
//! calls the logic makes, never deferred.

#![allow(dead_code)]

use arbor_entity::{ComponentStore, EntityManager};
use tracing::trace;

/// Configuration for the tick loop.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Simulated ticks per second.
    pub tick_rate: f64,
    /// Maximum number of ticks to run (0 = unlimited).
    pub max_ticks: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            max_ticks: 0,
        }
    }
}

/// Everything game logic may touch during one tick.
#[derive(Debug)]
pub struct TickContext<'a> {
    /// The current tick counter, starting at 1.
    pub tick_id: u64,
    /// Total simulated time in seconds.
    pub sim_time: f64,
    /// Fixed delta time of this tick, in seconds.
    pub dt: f64,
    /// Entity allocation and validity.
    pub entities: &'a mut EntityManager,
    /// All component managers.
    pub store: &'a mut ComponentStore,
}

/// The engine driving loop.
#[derive(Debug, Default)]
pub struct TickLoop {
    tick_id: u64,
    sim_time: f64,
    config: TickConfig,
    entities: EntityManager,
    store: ComponentStore,
}

impl TickLoop {
    /// Create a tick loop with the given configuration.
    #[must_use]
    pub fn new(config: TickConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the current tick counter.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Returns the total simulated time in seconds.
    #[must_use]
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Returns a reference to the entity manager.
    #[must_use]
    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    /// Returns a mutable reference to the entity manager.
    pub fn entities_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }

    /// Returns a reference to the component store.
    #[must_use]
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    /// Returns a mutable reference to the component store.
    pub fn store_mut(&mut self) -> &mut ComponentStore {
        &mut self.store
    }

    /// Borrow the entity manager and component store together, for setup
    /// work outside the tick cycle (scene loading, for example).
    pub fn world_mut(&mut self) -> (&mut EntityManager, &mut ComponentStore) {
        (&mut self.entities, &mut self.store)
    }

    /// Advance one tick, running `logic` with the tick's context.
    pub fn step<F>(&mut self, logic: F)
    where
        F: FnOnce(&mut TickContext<'_>),
    {
        let dt = 1.0 / self.config.tick_rate;
        self.tick_id += 1;
        self.sim_time += dt;
        trace!(tick_id = self.tick_id, sim_time = self.sim_time, "tick");

        let mut ctx = TickContext {
            tick_id: self.tick_id,
            sim_time: self.sim_time,
            dt,
            entities: &mut self.entities,
            store: &mut self.store,
        };
        logic(&mut ctx);
    }

    /// Run ticks until `max_ticks` is reached (forever when it is 0).
    pub fn run<F>(&mut self, mut logic: F)
    where
        F: FnMut(&mut TickContext<'_>),
    {
        while self.config.max_ticks == 0 || self.tick_id < self.config.max_ticks {
            self.step(&mut logic);
        }
    }
}
