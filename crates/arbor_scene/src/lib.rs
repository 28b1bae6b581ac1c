//! # arbor_scene
//!
//! The scenegraph layer of the arbor engine.
//!
//! This crate provides:
//!
//! - [`TransformComponent`] — local/world TRS channels plus intrusive
//!   parent/child/sibling links stored in the same packed row.
//! - [`TransformComponentManager`] — a specialised component manager that
//!   keeps the link forest and the cached world channels consistent,
//!   including across swap-and-pop compaction of the underlying arrays.
//! - [`SceneDescriptor`] / [`TransformDescriptor`] — JSON authoring format
//!   for populating a manager at scene-load time.
//!
//! World updates are eager: a `set_local_*` or `set_parent` call returns
//! only after every affected descendant's world channels are current.

pub mod component;
pub mod descriptor;
pub mod manager;

pub use component::TransformComponent;
pub use descriptor::{SceneDescriptor, SceneError, SceneObject, TransformDescriptor};
pub use manager::TransformComponentManager;
