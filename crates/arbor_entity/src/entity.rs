//! Entity identifiers and the entity manager.
//!
//! An [`Entity`] is a 32-bit weak reference to a logical game object. The
//! low bits are an index into the manager's generation table, the high bits
//! are a generation counter. Each time an index is recycled its generation
//! is bumped, so stale handles held by game code can be detected with
//! [`EntityManager::is_valid`] instead of silently aliasing a new object.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Number of bits in an [`Entity`] holding the slot index.
pub const ENTITY_INDEX_BITS: u32 = 22;

/// Mask covering the index bits of an [`Entity`].
pub const ENTITY_INDEX_MASK: u32 = (1 << ENTITY_INDEX_BITS) - 1;

/// Number of bits in an [`Entity`] holding the generation counter.
pub const ENTITY_GENERATION_BITS: u32 = 8;

/// Mask covering the generation bits of an [`Entity`] (after shifting).
pub const ENTITY_GENERATION_MASK: u32 = (1 << ENTITY_GENERATION_BITS) - 1;

/// Minimum number of freed indices that must be pending before the entity
/// manager starts recycling them.
///
/// Recycling too eagerly raises the odds that a still-reachable stale handle
/// aliases a live entity after only a few generation wraps; delaying reuse
/// widens the safety margin.
pub const MINIMUM_FREE_QUEUE_DEPTH: usize = 1024;

/// A unique entity identifier: `(generation << ENTITY_INDEX_BITS) | index`.
///
/// Entities are pure identifiers — they carry no data of their own.
/// Components are attached to entities to give them meaning. Equality is
/// bitwise, so a stale handle compares unequal to the entity currently
/// occupying the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub u32);

impl Entity {
    /// Pack an index and generation into an entity identifier.
    ///
    /// # Panics
    ///
    /// Panics if either value overflows its bit field. Constructing such an
    /// entity is a programmer error, never a runtime condition to recover
    /// from.
    #[must_use]
    pub fn pack(index: u32, generation: u32) -> Self {
        assert!(
            index <= ENTITY_INDEX_MASK,
            "entity index {index} overflows its {ENTITY_INDEX_BITS}-bit field"
        );
        assert!(
            generation <= ENTITY_GENERATION_MASK,
            "entity generation {generation} overflows its {ENTITY_GENERATION_BITS}-bit field"
        );
        Self((generation << ENTITY_INDEX_BITS) | index)
    }

    /// Returns the raw packed identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns the index part of the identifier.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0 & ENTITY_INDEX_MASK
    }

    /// Returns the generation part of the identifier.
    #[must_use]
    pub const fn generation(self) -> u32 {
        (self.0 >> ENTITY_INDEX_BITS) & ENTITY_GENERATION_MASK
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({}:{})", self.index(), self.generation())
    }
}

/// Issues entity identifiers and validates them against the current
/// generation of their slot.
///
/// Freed indices go onto a FIFO queue and are only handed out again once at
/// least [`MINIMUM_FREE_QUEUE_DEPTH`] frees are pending, so a recycled index
/// re-enters circulation as late as possible.
#[derive(Debug, Default)]
pub struct EntityManager {
    /// Current generation of every index ever allocated.
    generations: Vec<u8>,
    /// Freed indices awaiting reuse, oldest first.
    free_indices: VecDeque<u32>,
}

impl EntityManager {
    /// Create an empty entity manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity.
    ///
    /// Allocates a brand-new index (generation 0) until the free queue has
    /// reached [`MINIMUM_FREE_QUEUE_DEPTH`]; after that the oldest freed
    /// index is recycled at its current generation.
    pub fn create(&mut self) -> Entity {
        let recycled = if self.free_indices.len() < MINIMUM_FREE_QUEUE_DEPTH {
            None
        } else {
            self.free_indices.pop_front()
        };

        match recycled {
            Some(index) => {
                // Generation was already bumped when the index was freed.
                let generation = u32::from(self.generations[index as usize]);
                Entity::pack(index, generation)
            }
            None => {
                self.generations.push(0);
                let index = (self.generations.len() - 1) as u32;
                Entity::pack(index, 0)
            }
        }
    }

    /// Destroy an entity, invalidating every copy of its handle.
    ///
    /// A stale or never-issued handle is ignored, so destroying twice is
    /// harmless.
    pub fn destroy(&mut self, e: Entity) {
        if !self.is_valid(e) {
            return;
        }

        let index = e.index();
        self.free_indices.push_back(index);
        // Invalidate outstanding handles. The counter wraps silently at the
        // 8-bit field width; the deep free queue is the only guard against
        // a stale handle surviving a full wrap.
        let slot = &mut self.generations[index as usize];
        *slot = slot.wrapping_add(1);
    }

    /// Returns `true` if `e` refers to a live entity.
    ///
    /// A handle is live when its index has been allocated and its generation
    /// matches the slot's current generation.
    #[must_use]
    pub fn is_valid(&self, e: Entity) -> bool {
        self.generations
            .get(e.index() as usize)
            .is_some_and(|&generation| u32::from(generation) == e.generation())
    }

    /// Returns the number of index slots ever allocated (live or freed).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.generations.len()
    }
}
