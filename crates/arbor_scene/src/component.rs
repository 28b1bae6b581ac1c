//! The transform component payload.
//!
//! Each row stores its local TRS channels, cached world channels, and four
//! intrusive tree links forming the scenegraph. The links are [`Instance`]
//! values — rows of the *same* manager, not entities — so they take part in
//! the address-change protocol when the packed array is compacted.

use arbor_entity::{Component, Instance};
use glam::{Quat, Vec3};

/// Per-entity transform data plus scenegraph links.
///
/// Children of a node form a doubly-linked sibling list anchored at
/// `first_child`; `parent` points back up the tree. A default component is
/// an unparented identity transform.
#[derive(Debug, Clone, Copy)]
pub struct TransformComponent {
    /// Translation relative to the parent (world translation for roots).
    pub local_translation: Vec3,
    /// Scale relative to the parent.
    pub local_scale: Vec3,
    /// Orientation relative to the parent.
    pub local_orientation: Quat,
    /// Cached world translation, kept current by the manager's setters.
    pub world_translation: Vec3,
    /// Cached world scale.
    pub world_scale: Vec3,
    /// Cached world orientation.
    pub world_orientation: Quat,
    /// Row of the parent transform, invalid for roots.
    pub parent: Instance,
    /// Row of the first child, invalid for leaves.
    pub first_child: Instance,
    /// Next row in the parent's child list.
    pub next_sibling: Instance,
    /// Previous row in the parent's child list.
    pub prev_sibling: Instance,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            local_translation: Vec3::ZERO,
            local_scale: Vec3::ONE,
            local_orientation: Quat::IDENTITY,
            world_translation: Vec3::ZERO,
            world_scale: Vec3::ONE,
            world_orientation: Quat::IDENTITY,
            parent: Instance::INVALID,
            first_child: Instance::INVALID,
            next_sibling: Instance::INVALID,
            prev_sibling: Instance::INVALID,
        }
    }
}

impl Component for TransformComponent {
    fn type_name() -> &'static str {
        "Transform"
    }

    /// Keep tree links valid across swap-and-pop compaction.
    ///
    /// Runs before any data moves, so the row at `old_address` can still be
    /// read. When the row is relocating (`new_address` valid) every link
    /// equal to `old_address` is redirected. When it is being removed,
    /// links to it are spliced around the hole: `first_child` and
    /// `next_sibling` inherit the removed row's `next_sibling`, and
    /// `prev_sibling` inherits its `prev_sibling`, closing the sibling
    /// list in both directions.
    fn on_address_change(rows: &mut [Self], old_address: Instance, new_address: Instance) {
        let removed = !new_address.is_valid();
        // The doomed row's own links, read before the scan rewrites
        // anything.
        let old_next = rows[old_address.index()].next_sibling;
        let old_prev = rows[old_address.index()].prev_sibling;

        for row in rows.iter_mut() {
            if row.parent == old_address {
                row.parent = new_address;
            }
            if row.first_child == old_address {
                row.first_child = if removed { old_next } else { new_address };
            }
            if row.next_sibling == old_address {
                row.next_sibling = if removed { old_next } else { new_address };
            }
            if row.prev_sibling == old_address {
                row.prev_sibling = if removed { old_prev } else { new_address };
            }
        }
    }
}
