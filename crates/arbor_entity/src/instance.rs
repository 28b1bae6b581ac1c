//! Component instance handles.
//!
//! An entity's index does not map directly into a component manager's
//! arrays; an [`Instance`] is the extra level of indirection. It names one
//! row of one specific manager's dense storage and is **not** stable across
//! structural changes: any [`remove_instance`] call on the same manager may
//! relocate rows. Code that needs to hold a reference across deletions must
//! either re-resolve through `instance_for_entity` or take part in the
//! address-change protocol (see [`Component::on_address_change`]).
//!
//! [`remove_instance`]: crate::manager::ComponentManager::remove_instance
//! [`Component::on_address_change`]: crate::manager::Component::on_address_change

use serde::{Deserialize, Serialize};

/// A handle to one row of a component manager's dense storage.
///
/// `-1` is the invalid sentinel, mirroring the miss results of lookups that
/// are expected to fail on hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instance(pub i32);

impl Instance {
    /// The invalid instance sentinel.
    pub const INVALID: Instance = Instance(-1);

    /// Create an instance from a row index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as i32)
    }

    /// Returns `true` if this handle names a row at all.
    ///
    /// A valid instance may still be out of range for a given manager;
    /// bounds are checked at the point of use.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 0
    }

    /// Returns the row index. Only meaningful when [`is_valid`] is `true`.
    ///
    /// [`is_valid`]: Instance::is_valid
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::INVALID
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}
