//! The transform component manager.
//!
//! A specialisation of [`ComponentManager`] that layers a forest of
//! parent/child/sibling links over the packed transform rows and keeps the
//! cached world channels consistent: every setter recomputes the world
//! channels of the touched row and its whole subtree before returning,
//! eagerly and synchronously. Nothing is deferred to a later tick.
//!
//! World channels compose channel-wise, as in the engine this models:
//! world translation is local plus parent world, world scale is the
//! component-wise product, world orientation is parent ∗ local. The parent
//! channels do not rotate or scale a child's translation offset.

use arbor_entity::{ComponentManager, Entity, ErasedComponentManager, Instance};
use arbor_math::Transform3D;
use glam::{Mat4, Quat, Vec3};

use crate::component::TransformComponent;

/// Stores the transforms of objects in the world and the scenegraph that
/// relates them.
///
/// Beyond the generic storage contract this manager guarantees: after any
/// `set_local_*` or [`set_parent`](TransformComponentManager::set_parent)
/// call returns, the world channels of every row reachable from the
/// touched row are current.
#[derive(Debug, Default)]
pub struct TransformComponentManager {
    base: ComponentManager<TransformComponent>,
}

impl TransformComponentManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of transform instances currently stored.
    #[must_use]
    pub fn num_instances(&self) -> usize {
        self.base.num_instances()
    }

    /// Returns `true` if no transforms are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Create an identity transform for `entity` (or return the existing
    /// instance).
    pub fn create_component_for_entity(&mut self, entity: Entity) -> Instance {
        self.base.create_component_for_entity(entity)
    }

    /// The transform instance belonging to `entity`, or
    /// [`Instance::INVALID`].
    #[must_use]
    pub fn instance_for_entity(&self, entity: Entity) -> Instance {
        self.base.instance_for_entity(entity)
    }

    /// The entity owning `instance`, or `None` when out of range.
    #[must_use]
    pub fn entity_for_instance(&self, instance: Instance) -> Option<Entity> {
        self.base.entity_for_instance(instance)
    }

    /// Swap-remove a transform, splicing it out of the scenegraph.
    ///
    /// The component's address-change hook repairs every tree link before
    /// the compaction moves data, so the remaining forest stays
    /// consistent. Returns `false` when `instance` is out of range.
    pub fn remove_instance(&mut self, instance: Instance) -> bool {
        self.base.remove_instance(instance)
    }

    /// Bounds-check an instance for a transform operation.
    ///
    /// Out-of-range instances here are contract violations, not expected
    /// misses, so this asserts rather than returning a sentinel.
    fn row(&self, i: Instance, op: &str) -> usize {
        assert!(
            i.is_valid() && i.index() < self.base.num_instances(),
            "TransformComponentManager::{op}: out-of-range instance {i}"
        );
        i.index()
    }

    // -- Local channel setters --

    /// Set the local translation and refresh world translations of the
    /// whole subtree.
    pub fn set_local_translation(&mut self, i: Instance, translation: Vec3) {
        let row = self.row(i, "set_local_translation");
        let rows = self.base.components_mut();
        rows[row].local_translation = translation;

        let parent = rows[row].parent;
        let parent_translation = if parent.is_valid() {
            rows[parent.index()].world_translation
        } else {
            Vec3::ZERO
        };
        Self::update_world_translation(rows, row, parent_translation);
    }

    /// Set the local scale and refresh world scales of the whole subtree.
    pub fn set_local_scale(&mut self, i: Instance, scale: Vec3) {
        let row = self.row(i, "set_local_scale");
        let rows = self.base.components_mut();
        rows[row].local_scale = scale;

        let parent = rows[row].parent;
        let parent_scale = if parent.is_valid() {
            rows[parent.index()].world_scale
        } else {
            Vec3::ONE
        };
        Self::update_world_scale(rows, row, parent_scale);
    }

    /// Set the local orientation and refresh world orientations of the
    /// whole subtree.
    pub fn set_local_orientation(&mut self, i: Instance, orientation: Quat) {
        let row = self.row(i, "set_local_orientation");
        let rows = self.base.components_mut();
        rows[row].local_orientation = orientation;

        let parent = rows[row].parent;
        let parent_orientation = if parent.is_valid() {
            rows[parent.index()].world_orientation
        } else {
            Quat::IDENTITY
        };
        Self::update_world_orientation(rows, row, parent_orientation);
    }

    /// Set all three local channels at once, with a single subtree sweep.
    pub fn set_local_transform(&mut self, i: Instance, transform: Transform3D) {
        let row = self.row(i, "set_local_transform");
        let rows = self.base.components_mut();
        rows[row].local_translation = transform.translation;
        rows[row].local_orientation = transform.orientation;
        rows[row].local_scale = transform.scale;

        let parent = rows[row].parent;
        let (translation, orientation, scale) = if parent.is_valid() {
            let p = &rows[parent.index()];
            (p.world_translation, p.world_orientation, p.world_scale)
        } else {
            (Vec3::ZERO, Quat::IDENTITY, Vec3::ONE)
        };
        Self::update_world(rows, row, translation, orientation, scale);
    }

    // -- Subtree propagation, pre-order depth-first --

    fn update_world_translation(
        rows: &mut [TransformComponent],
        row: usize,
        parent_translation: Vec3,
    ) {
        rows[row].world_translation = rows[row].local_translation + parent_translation;

        let mut child = rows[row].first_child;
        while child.is_valid() {
            let world = rows[row].world_translation;
            Self::update_world_translation(rows, child.index(), world);
            child = rows[child.index()].next_sibling;
        }
    }

    fn update_world_scale(rows: &mut [TransformComponent], row: usize, parent_scale: Vec3) {
        rows[row].world_scale = rows[row].local_scale * parent_scale;

        let mut child = rows[row].first_child;
        while child.is_valid() {
            let world = rows[row].world_scale;
            Self::update_world_scale(rows, child.index(), world);
            child = rows[child.index()].next_sibling;
        }
    }

    fn update_world_orientation(
        rows: &mut [TransformComponent],
        row: usize,
        parent_orientation: Quat,
    ) {
        rows[row].world_orientation = parent_orientation * rows[row].local_orientation;

        let mut child = rows[row].first_child;
        while child.is_valid() {
            let world = rows[row].world_orientation;
            Self::update_world_orientation(rows, child.index(), world);
            child = rows[child.index()].next_sibling;
        }
    }

    fn update_world(
        rows: &mut [TransformComponent],
        row: usize,
        parent_translation: Vec3,
        parent_orientation: Quat,
        parent_scale: Vec3,
    ) {
        rows[row].world_translation = rows[row].local_translation + parent_translation;
        rows[row].world_orientation = parent_orientation * rows[row].local_orientation;
        rows[row].world_scale = rows[row].local_scale * parent_scale;

        let mut child = rows[row].first_child;
        while child.is_valid() {
            let (translation, orientation, scale) = {
                let r = &rows[row];
                (r.world_translation, r.world_orientation, r.world_scale)
            };
            Self::update_world(rows, child.index(), translation, orientation, scale);
            child = rows[child.index()].next_sibling;
        }
    }

    // -- Channel getters --

    /// Local translation of the given instance.
    #[must_use]
    pub fn local_translation(&self, i: Instance) -> Vec3 {
        self.base.components()[self.row(i, "local_translation")].local_translation
    }

    /// Local scale of the given instance.
    #[must_use]
    pub fn local_scale(&self, i: Instance) -> Vec3 {
        self.base.components()[self.row(i, "local_scale")].local_scale
    }

    /// Local orientation of the given instance.
    #[must_use]
    pub fn local_orientation(&self, i: Instance) -> Quat {
        self.base.components()[self.row(i, "local_orientation")].local_orientation
    }

    /// Cached world translation of the given instance.
    #[must_use]
    pub fn world_translation(&self, i: Instance) -> Vec3 {
        self.base.components()[self.row(i, "world_translation")].world_translation
    }

    /// Cached world scale of the given instance.
    #[must_use]
    pub fn world_scale(&self, i: Instance) -> Vec3 {
        self.base.components()[self.row(i, "world_scale")].world_scale
    }

    /// Cached world orientation of the given instance.
    #[must_use]
    pub fn world_orientation(&self, i: Instance) -> Quat {
        self.base.components()[self.row(i, "world_orientation")].world_orientation
    }

    /// All three local channels as a [`Transform3D`].
    ///
    /// Channels are returned exactly as set — no renormalisation, bitwise
    /// round-trip with
    /// [`set_local_transform`](TransformComponentManager::set_local_transform).
    #[must_use]
    pub fn local_transform(&self, i: Instance) -> Transform3D {
        let t = &self.base.components()[self.row(i, "local_transform")];
        Transform3D::new(t.local_translation, t.local_orientation, t.local_scale)
    }

    /// All three cached world channels as a [`Transform3D`].
    #[must_use]
    pub fn world_transform(&self, i: Instance) -> Transform3D {
        let t = &self.base.components()[self.row(i, "world_transform")];
        Transform3D::new(t.world_translation, t.world_orientation, t.world_scale)
    }

    /// The local transform as a T·R·S matrix.
    #[must_use]
    pub fn local_matrix(&self, i: Instance) -> Mat4 {
        self.local_transform(i).to_matrix()
    }

    /// The world transform as a T·R·S matrix.
    #[must_use]
    pub fn world_matrix(&self, i: Instance) -> Mat4 {
        self.world_transform(i).to_matrix()
    }

    // -- Tree links --

    /// Parent of the given instance, invalid for roots.
    #[must_use]
    pub fn parent(&self, i: Instance) -> Instance {
        self.base.components()[self.row(i, "parent")].parent
    }

    /// First child of the given instance, invalid for leaves. Iterate the
    /// remaining children via
    /// [`next_sibling`](TransformComponentManager::next_sibling).
    #[must_use]
    pub fn first_child(&self, i: Instance) -> Instance {
        self.base.components()[self.row(i, "first_child")].first_child
    }

    /// Next sibling in the parent's child list, invalid at the tail.
    #[must_use]
    pub fn next_sibling(&self, i: Instance) -> Instance {
        self.base.components()[self.row(i, "next_sibling")].next_sibling
    }

    /// Previous sibling in the parent's child list, invalid at the head.
    #[must_use]
    pub fn prev_sibling(&self, i: Instance) -> Instance {
        self.base.components()[self.row(i, "prev_sibling")].prev_sibling
    }

    /// Re-parent `i`, preserving its world channels.
    ///
    /// `i` is first unlinked from any previous parent's child list, then
    /// its local channels are rewritten relative to the new parent's world
    /// channels and it is appended at the tail of the new parent's child
    /// list with both sibling links maintained. Passing an invalid
    /// `parent` detaches `i` into a root, whose locals become its world
    /// channels. The world channels of `i` and its subtree are unchanged
    /// throughout, so no propagation runs.
    pub fn set_parent(&mut self, i: Instance, parent: Instance) {
        let row = self.row(i, "set_parent");
        if parent.is_valid() {
            self.row(parent, "set_parent");
            assert!(parent != i, "TransformComponentManager::set_parent: cannot parent {i} to itself");
        }

        self.unlink(row);

        let rows = self.base.components_mut();
        rows[row].parent = parent;
        if parent.is_valid() {
            let p = parent.index();
            // World channels stay fixed; locals absorb the difference.
            rows[row].local_translation =
                rows[row].world_translation - rows[p].world_translation;
            rows[row].local_orientation =
                rows[p].world_orientation.inverse() * rows[row].world_orientation;
            rows[row].local_scale = rows[row].world_scale / rows[p].world_scale;

            let first_child = rows[p].first_child;
            if !first_child.is_valid() {
                rows[p].first_child = i;
            } else {
                let mut tail = first_child;
                while rows[tail.index()].next_sibling.is_valid() {
                    tail = rows[tail.index()].next_sibling;
                }
                rows[tail.index()].next_sibling = i;
                rows[row].prev_sibling = tail;
            }
        } else {
            rows[row].local_translation = rows[row].world_translation;
            rows[row].local_orientation = rows[row].world_orientation;
            rows[row].local_scale = rows[row].world_scale;
        }
    }

    /// Remove `row` from its parent's child list and clear its up/side
    /// links. Descendant links are untouched.
    fn unlink(&mut self, row: usize) {
        let rows = self.base.components_mut();
        let this = Instance::from_index(row);
        let old_parent = rows[row].parent;
        let prev = rows[row].prev_sibling;
        let next = rows[row].next_sibling;

        if old_parent.is_valid() && rows[old_parent.index()].first_child == this {
            rows[old_parent.index()].first_child = next;
        }
        if prev.is_valid() {
            rows[prev.index()].next_sibling = next;
        }
        if next.is_valid() {
            rows[next.index()].prev_sibling = prev;
        }

        rows[row].parent = Instance::INVALID;
        rows[row].prev_sibling = Instance::INVALID;
        rows[row].next_sibling = Instance::INVALID;
    }
}

impl ErasedComponentManager for TransformComponentManager {
    fn num_instances(&self) -> usize {
        TransformComponentManager::num_instances(self)
    }

    fn create_component_for_entity(&mut self, entity: Entity) -> Instance {
        TransformComponentManager::create_component_for_entity(self, entity)
    }

    fn instance_for_entity(&self, entity: Entity) -> Instance {
        TransformComponentManager::instance_for_entity(self, entity)
    }

    fn entity_for_instance(&self, instance: Instance) -> Option<Entity> {
        TransformComponentManager::entity_for_instance(self, instance)
    }

    fn remove_instance(&mut self, instance: Instance) -> bool {
        TransformComponentManager::remove_instance(self, instance)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_entity::EntityManager;

    const EPS: f32 = 1e-5;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    struct Fixture {
        entities: EntityManager,
        transforms: TransformComponentManager,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                entities: EntityManager::new(),
                transforms: TransformComponentManager::new(),
            }
        }

        fn spawn(&mut self) -> Instance {
            let e = self.entities.create();
            self.transforms.create_component_for_entity(e)
        }

        /// Collect the children of `parent` by walking the sibling list.
        fn children(&self, parent: Instance) -> Vec<Instance> {
            let mut out = Vec::new();
            let mut child = self.transforms.first_child(parent);
            while child.is_valid() {
                out.push(child);
                child = self.transforms.next_sibling(child);
            }
            out
        }
    }

    #[test]
    fn test_local_transform_roundtrip_is_bitwise() {
        let mut f = Fixture::new();
        let i = f.spawn();

        let t = Transform3D::new(
            Vec3::new(0.1, -2.5, 3.75),
            Quat::from_xyzw(0.1, 0.2, 0.3, 0.9),
            Vec3::new(1.5, 0.25, 2.0),
        );
        f.transforms.set_local_transform(i, t);
        let back = f.transforms.local_transform(i);
        assert_eq!(back.translation, t.translation);
        assert_eq!(back.orientation, t.orientation);
        assert_eq!(back.scale, t.scale);
    }

    #[test]
    fn test_root_world_equals_local() {
        let mut f = Fixture::new();
        let i = f.spawn();
        f.transforms.set_local_translation(i, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(f.transforms.world_translation(i), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_world_translation_propagates_down_chain() {
        let mut f = Fixture::new();
        let root = f.spawn();
        let a = f.spawn();
        let b = f.spawn();
        let c = f.spawn();
        f.transforms.set_parent(a, root);
        f.transforms.set_parent(b, a);
        f.transforms.set_parent(c, b);

        f.transforms.set_local_translation(root, Vec3::new(10.0, 0.0, 0.0));
        f.transforms.set_local_translation(a, Vec3::new(1.0, 0.0, 0.0));
        f.transforms.set_local_translation(b, Vec3::new(0.0, 2.0, 0.0));
        f.transforms.set_local_translation(c, Vec3::new(0.0, 0.0, 3.0));

        assert!(close(f.transforms.world_translation(a), Vec3::new(11.0, 0.0, 0.0)));
        assert!(close(f.transforms.world_translation(b), Vec3::new(11.0, 2.0, 0.0)));
        assert!(close(f.transforms.world_translation(c), Vec3::new(11.0, 2.0, 3.0)));

        // Moving A cascades through B and C even though their locals never
        // changed.
        f.transforms.set_local_translation(a, Vec3::new(5.0, 0.0, 0.0));
        assert!(close(f.transforms.world_translation(a), Vec3::new(15.0, 0.0, 0.0)));
        assert!(close(f.transforms.world_translation(b), Vec3::new(15.0, 2.0, 0.0)));
        assert!(close(f.transforms.world_translation(c), Vec3::new(15.0, 2.0, 3.0)));
    }

    #[test]
    fn test_world_scale_and_orientation_propagate() {
        let mut f = Fixture::new();
        let root = f.spawn();
        let child = f.spawn();
        f.transforms.set_parent(child, root);

        f.transforms.set_local_scale(root, Vec3::splat(2.0));
        f.transforms.set_local_scale(child, Vec3::new(1.0, 3.0, 1.0));
        assert!(close(f.transforms.world_scale(child), Vec3::new(2.0, 6.0, 2.0)));

        let quarter = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        f.transforms.set_local_orientation(root, quarter);
        f.transforms.set_local_orientation(child, quarter);
        let expected = quarter * quarter;
        let got = f.transforms.world_orientation(child);
        assert!(got.angle_between(expected) < EPS);
    }

    #[test]
    fn test_set_local_transform_updates_whole_subtree() {
        let mut f = Fixture::new();
        let root = f.spawn();
        let child = f.spawn();
        f.transforms.set_parent(child, root);
        f.transforms.set_local_translation(child, Vec3::X);

        f.transforms.set_local_transform(
            root,
            Transform3D::new(Vec3::new(0.0, 4.0, 0.0), Quat::IDENTITY, Vec3::splat(2.0)),
        );
        assert!(close(f.transforms.world_translation(child), Vec3::new(1.0, 4.0, 0.0)));
        assert!(close(f.transforms.world_scale(child), Vec3::splat(2.0)));
    }

    #[test]
    fn test_set_parent_builds_child_list_in_order() {
        let mut f = Fixture::new();
        let root = f.spawn();
        let x = f.spawn();
        let y = f.spawn();
        let z = f.spawn();
        f.transforms.set_parent(x, root);
        f.transforms.set_parent(y, root);
        f.transforms.set_parent(z, root);

        assert_eq!(f.children(root), vec![x, y, z]);
        assert_eq!(f.transforms.parent(x), root);
        assert_eq!(f.transforms.prev_sibling(x), Instance::INVALID);
        assert_eq!(f.transforms.prev_sibling(y), x);
        assert_eq!(f.transforms.prev_sibling(z), y);
    }

    #[test]
    fn test_set_parent_preserves_world_transform() {
        let mut f = Fixture::new();
        let root = f.spawn();
        let node = f.spawn();
        f.transforms.set_local_translation(root, Vec3::new(10.0, 0.0, 0.0));
        f.transforms.set_local_scale(root, Vec3::splat(2.0));
        f.transforms.set_local_translation(node, Vec3::new(3.0, 4.0, 0.0));

        let before = f.transforms.world_translation(node);
        f.transforms.set_parent(node, root);
        assert!(close(f.transforms.world_translation(node), before));
        assert!(close(f.transforms.world_scale(node), Vec3::ONE));
        // The local absorbed the parent offset.
        assert!(close(f.transforms.local_translation(node), Vec3::new(-7.0, 4.0, 0.0)));
    }

    #[test]
    fn test_reparent_unlinks_from_previous_parent() {
        let mut f = Fixture::new();
        let p1 = f.spawn();
        let p2 = f.spawn();
        let a = f.spawn();
        let b = f.spawn();
        f.transforms.set_parent(a, p1);
        f.transforms.set_parent(b, p1);

        f.transforms.set_parent(a, p2);

        assert_eq!(f.children(p1), vec![b]);
        assert_eq!(f.children(p2), vec![a]);
        assert_eq!(f.transforms.prev_sibling(b), Instance::INVALID);
        assert_eq!(f.transforms.parent(a), p2);
    }

    #[test]
    fn test_detach_to_root() {
        let mut f = Fixture::new();
        let root = f.spawn();
        let node = f.spawn();
        f.transforms.set_local_translation(root, Vec3::new(1.0, 1.0, 1.0));
        f.transforms.set_parent(node, root);
        f.transforms.set_local_translation(node, Vec3::X);

        let world = f.transforms.world_translation(node);
        f.transforms.set_parent(node, Instance::INVALID);

        assert_eq!(f.transforms.parent(node), Instance::INVALID);
        assert_eq!(f.children(root), Vec::<Instance>::new());
        assert!(close(f.transforms.world_translation(node), world));
        assert!(close(f.transforms.local_translation(node), world));
    }

    #[test]
    fn test_remove_middle_child_splices_sibling_list() {
        for victim_position in 0..3 {
            let mut f = Fixture::new();
            let root = f.spawn();
            let kids = [f.spawn(), f.spawn(), f.spawn()];
            for k in kids {
                f.transforms.set_parent(k, root);
            }

            let root_entity = f.transforms.entity_for_instance(root).unwrap();
            let survivor_entities: Vec<_> = (0..3)
                .filter(|&n| n != victim_position)
                .map(|n| f.transforms.entity_for_instance(kids[n]).unwrap())
                .collect();

            assert!(f.transforms.remove_instance(kids[victim_position]));

            // Instances may have been shuffled by the swap; re-resolve
            // through entities and walk the child list.
            let root = f.transforms.instance_for_entity(root_entity);
            let walked: Vec<_> = f
                .children(root)
                .iter()
                .map(|&c| f.transforms.entity_for_instance(c).unwrap())
                .collect();
            assert_eq!(walked, survivor_entities, "victim at position {victim_position}");

            // And the reverse direction agrees.
            let last = *f.children(root).last().unwrap();
            let mut reversed = Vec::new();
            let mut cursor = last;
            while cursor.is_valid() {
                reversed.push(f.transforms.entity_for_instance(cursor).unwrap());
                cursor = f.transforms.prev_sibling(cursor);
            }
            reversed.reverse();
            assert_eq!(reversed, survivor_entities);
        }
    }

    #[test]
    fn test_remove_parent_orphans_children() {
        let mut f = Fixture::new();
        let root = f.spawn();
        let child = f.spawn();
        f.transforms.set_parent(child, root);

        let child_entity = f.transforms.entity_for_instance(child).unwrap();
        assert!(f.transforms.remove_instance(root));

        let child = f.transforms.instance_for_entity(child_entity);
        assert_eq!(f.transforms.parent(child), Instance::INVALID);
    }

    #[test]
    fn test_remove_keeps_links_valid_after_swap() {
        // The last row is a child; removing an unrelated row relocates it
        // and every link pointing at it must follow.
        let mut f = Fixture::new();
        let root = f.spawn(); // row 0
        let filler = f.spawn(); // row 1
        let child = f.spawn(); // row 2, the last
        f.transforms.set_parent(child, root);
        f.transforms.set_local_translation(child, Vec3::X);

        let child_entity = f.transforms.entity_for_instance(child).unwrap();
        assert!(f.transforms.remove_instance(filler));

        let child = f.transforms.instance_for_entity(child_entity);
        assert_eq!(child, Instance::from_index(1));
        assert_eq!(f.transforms.first_child(root), child);
        assert_eq!(f.transforms.parent(child), root);

        // Propagation still follows the relocated links.
        f.transforms.set_local_translation(root, Vec3::new(0.0, 5.0, 0.0));
        assert!(close(f.transforms.world_translation(child), Vec3::new(1.0, 5.0, 0.0)));
    }

    #[test]
    #[should_panic(expected = "out-of-range instance")]
    fn test_accessor_panics_on_invalid_instance() {
        let f = Fixture::new();
        let _ = f.transforms.local_translation(Instance::INVALID);
    }

    #[test]
    fn test_world_matrix_composes_channels() {
        let mut f = Fixture::new();
        let i = f.spawn();
        f.transforms.set_local_transform(
            i,
            Transform3D::new(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY, Vec3::splat(2.0)),
        );
        let m = f.transforms.world_matrix(i);
        let p = m.transform_point3(Vec3::X);
        assert!(close(p, Vec3::new(3.0, 2.0, 3.0)));
    }
}
