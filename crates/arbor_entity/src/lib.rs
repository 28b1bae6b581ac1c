//! # arbor_entity
//!
//! The entity/component core of the arbor engine: generation-counted
//! entity handles, packed per-type component storage with O(1)
//! swap-and-pop deletion, and a type-erased registry of component
//! managers.
//!
//! This crate provides:
//!
//! - [`Entity`] — 32-bit index + generation identifiers.
//! - [`EntityManager`] — allocation, FIFO-delayed recycling, and stale
//!   handle detection.
//! - [`Instance`] — manager-local row handles, invalid at `-1`.
//! - [`Component`] / [`ComponentManager`] — dense parallel-array storage
//!   with the pre-move address-change protocol for intrusive
//!   cross-references.
//! - [`ComponentStore`] — one lazily-constructed manager per manager
//!   type, erased behind [`ErasedComponentManager`].
//!
//! Everything here is single-threaded by design: operations are plain
//! in-memory mutations with no locking and no deferral, driven by an
//! external frame loop.

pub mod entity;
pub mod instance;
pub mod manager;
pub mod store;

pub use entity::{Entity, EntityManager, MINIMUM_FREE_QUEUE_DEPTH};
pub use instance::Instance;
pub use manager::{Component, ComponentManager};
pub use store::{ComponentStore, ErasedComponentManager};
