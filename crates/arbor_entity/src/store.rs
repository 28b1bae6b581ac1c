//! Type-erased registry of component managers.
//!
//! Every system in the engine is handed one [`ComponentStore`]; the store
//! owns exactly one manager per manager type, created lazily on first
//! access and kept for the lifetime of the store. Managers are erased
//! behind [`ErasedComponentManager`] so heterogeneous types can share one
//! map, and recovered by downcasting on the compile-time type token.
//!
//! The store is deliberately single-threaded: the engine's update sweep is
//! one synchronous pass, so there is no interior locking.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::entity::Entity;
use crate::instance::Instance;
use crate::manager::{Component, ComponentManager};

/// The type-erased surface every component manager exposes.
///
/// This is the contract the store and generic engine plumbing work
/// against; concrete managers add their own typed operations on top.
pub trait ErasedComponentManager: Any {
    /// Number of component instances currently stored.
    fn num_instances(&self) -> usize;

    /// Create a default component for `entity`, returning its instance.
    fn create_component_for_entity(&mut self, entity: Entity) -> Instance;

    /// The instance belonging to `entity`, or [`Instance::INVALID`].
    fn instance_for_entity(&self, entity: Entity) -> Instance;

    /// The entity owning `instance`, or `None` when out of range.
    fn entity_for_instance(&self, instance: Instance) -> Option<Entity>;

    /// Swap-remove an instance. `false` when out of range.
    fn remove_instance(&mut self, instance: Instance) -> bool;

    /// Upcast for downcasting to the concrete manager type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete manager type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedComponentManager for ComponentManager<T> {
    fn num_instances(&self) -> usize {
        ComponentManager::num_instances(self)
    }

    fn create_component_for_entity(&mut self, entity: Entity) -> Instance {
        ComponentManager::create_component_for_entity(self, entity)
    }

    fn instance_for_entity(&self, entity: Entity) -> Instance {
        ComponentManager::instance_for_entity(self, entity)
    }

    fn entity_for_instance(&self, instance: Instance) -> Option<Entity> {
        ComponentManager::entity_for_instance(self, instance)
    }

    fn remove_instance(&mut self, instance: Instance) -> bool {
        ComponentManager::remove_instance(self, instance)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Owns one component manager per manager type.
///
/// Keyed by the manager type itself rather than the component type, so a
/// specialised manager (e.g. the scene's transform manager) and a plain
/// `ComponentManager<T>` can coexist without ambiguity.
#[derive(Default)]
pub struct ComponentStore {
    managers: HashMap<TypeId, Box<dyn ErasedComponentManager>>,
}

impl ComponentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the manager of type `M`, constructing it on first access.
    pub fn manager_mut<M: ErasedComponentManager + Default>(&mut self) -> &mut M {
        self.managers
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(M::default()))
            .as_any_mut()
            .downcast_mut::<M>()
            .expect("manager stored under the TypeId of another type")
    }

    /// Returns the manager of type `M` if it has been constructed.
    ///
    /// The read-only half of the accessor pair: it never constructs, so a
    /// shared store reference stays side-effect free.
    #[must_use]
    pub fn manager<M: ErasedComponentManager>(&self) -> Option<&M> {
        self.managers
            .get(&TypeId::of::<M>())
            .and_then(|manager| manager.as_any().downcast_ref::<M>())
    }

    /// Number of managers constructed so far.
    #[must_use]
    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }
}

impl std::fmt::Debug for ComponentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentStore")
            .field("manager_count", &self.managers.len())
            .finish()
    }
}
