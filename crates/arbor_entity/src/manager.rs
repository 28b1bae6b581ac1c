//! Generic packed component storage.
//!
//! A [`ComponentManager`] owns every component of one type, across all
//! entities, in a pair of dense parallel arrays plus a hash index from
//! entity id to row. Insertion and lookup are O(1); deletion is O(1) by
//! swapping the last row into the hole (swap-and-pop), which keeps the
//! arrays tightly packed for cache-friendly iteration.
//!
//! Swap-and-pop moves data, so row addresses ([`Instance`] values) are not
//! stable. Component types that embed instances referring to other rows in
//! the same manager implement [`Component::on_address_change`] to repair
//! those references; the manager calls it **before** any data moves, so the
//! hook can still read the doomed row's fields.

use std::collections::HashMap;

use crate::entity::Entity;
use crate::instance::Instance;

/// Data stored in a [`ComponentManager`].
///
/// The relocation hook is the extension point of the compaction protocol.
/// Most component types leave the default empty body; a type whose fields
/// include [`Instance`] references into the same manager (tree links, for
/// example) must override it to keep those references intact.
pub trait Component: std::fmt::Debug + Default + 'static {
    /// A human-readable name for this component type, for diagnostics.
    fn type_name() -> &'static str;

    /// Called when the row at `old_address` is about to move or die.
    ///
    /// Invoked before any data moves, so `rows[old_address.index()]` still
    /// holds the old state. The contract:
    ///
    /// - `new_address` valid: the row is moving; every reference equal to
    ///   `old_address` must be rewritten to `new_address`.
    /// - `new_address` invalid: the row is being removed; every reference
    ///   equal to `old_address` must be dropped, typically by re-linking
    ///   around the hole.
    fn on_address_change(_rows: &mut [Self], _old_address: Instance, _new_address: Instance) {}
}

/// Packed storage for all components of type `T`.
///
/// Invariants, upheld by every method:
///
/// - `entities.len() == components.len() == num_instances()`;
/// - every map entry `(id, row)` satisfies `entities[row].id() == id`;
/// - every valid [`Instance`] handed to a caller is in range at that moment.
#[derive(Debug)]
pub struct ComponentManager<T: Component> {
    /// Owning entity of each row, parallel to `components`.
    entities: Vec<Entity>,
    /// Dense component data.
    components: Vec<T>,
    /// Raw entity id to row position.
    map: HashMap<u32, usize>,
}

impl<T: Component> Default for ComponentManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> ComponentManager<T> {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            components: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Returns the number of component instances currently stored.
    #[must_use]
    pub fn num_instances(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if no components are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Create a default-constructed component for `entity` and return its
    /// instance.
    ///
    /// If the entity already has a component of this type, the existing
    /// instance is returned instead of creating a second, map-unreachable
    /// row.
    pub fn create_component_for_entity(&mut self, entity: Entity) -> Instance {
        if let Some(&row) = self.map.get(&entity.id()) {
            return Instance::from_index(row);
        }

        let row = self.entities.len();
        self.entities.push(entity);
        self.components.push(T::default());
        self.map.insert(entity.id(), row);
        Instance::from_index(row)
    }

    /// Look up the instance belonging to `entity`.
    ///
    /// Returns [`Instance::INVALID`] if the entity has no component of this
    /// type.
    #[must_use]
    pub fn instance_for_entity(&self, entity: Entity) -> Instance {
        self.map
            .get(&entity.id())
            .map_or(Instance::INVALID, |&row| Instance::from_index(row))
    }

    /// Returns the entity owning the given instance, or `None` if the
    /// instance is out of range.
    #[must_use]
    pub fn entity_for_instance(&self, instance: Instance) -> Option<Entity> {
        if !instance.is_valid() {
            return None;
        }
        self.entities.get(instance.index()).copied()
    }

    /// Returns the component at the given instance, or `None` if the
    /// instance is out of range.
    #[must_use]
    pub fn get(&self, instance: Instance) -> Option<&T> {
        if !instance.is_valid() {
            return None;
        }
        self.components.get(instance.index())
    }

    /// Mutable variant of [`get`](ComponentManager::get).
    #[must_use]
    pub fn get_mut(&mut self, instance: Instance) -> Option<&mut T> {
        if !instance.is_valid() {
            return None;
        }
        self.components.get_mut(instance.index())
    }

    /// The dense component rows, indexed by instance.
    #[must_use]
    pub fn components(&self) -> &[T] {
        &self.components
    }

    /// Mutable access to the dense component rows.
    ///
    /// Row order and the entity-to-row map are owned by the manager;
    /// callers may mutate component values in place but must go through
    /// [`remove_instance`](ComponentManager::remove_instance) for any
    /// structural change.
    #[must_use]
    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }

    /// The owning entity of each row, parallel to
    /// [`components`](ComponentManager::components).
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Remove a component instance, keeping the arrays packed.
    ///
    /// The current last row is swapped into the freed slot, which
    /// invalidates the instances of both the removed row and the old last
    /// row. [`Component::on_address_change`] fires twice before any data
    /// moves: once for the dying row (`new_address` invalid) and once for
    /// the relocating last row.
    ///
    /// Returns `false`, leaving all state untouched, if `instance` is out
    /// of range.
    pub fn remove_instance(&mut self, instance: Instance) -> bool {
        if !instance.is_valid() || instance.index() >= self.entities.len() {
            return false;
        }

        let row = instance.index();
        let last = self.entities.len() - 1;
        let removed_entity = self.entities[row];
        let last_entity = self.entities[last];

        // Notify in two steps: the removed row's references are dropped,
        // then references to the last row are redirected to its new slot.
        T::on_address_change(&mut self.components, instance, Instance::INVALID);
        T::on_address_change(&mut self.components, Instance::from_index(last), instance);

        self.entities.swap_remove(row);
        self.components.swap_remove(row);

        // Insertion before removal so that removing the last row itself
        // (moved entity == removed entity) still ends with no map entry.
        self.map.insert(last_entity.id(), row);
        self.map.remove(&removed_entity.id());

        true
    }
}
