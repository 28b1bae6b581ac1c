//! JSON scene descriptors.
//!
//! A scene descriptor is the data-driven way to populate a transform
//! manager: a flat list of objects, each with a TRS description and an
//! optional parent referring to an earlier object in the list. This is the
//! loading path game code uses at scene load; direct
//! [`TransformComponentManager`] calls remain available for runtime edits.

use arbor_entity::{Entity, EntityManager, Instance};
use arbor_math::Transform3D;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::manager::TransformComponentManager;

/// Errors from parsing or instantiating a scene descriptor.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The descriptor was not valid JSON of the expected shape.
    #[error("malformed scene descriptor: {0}")]
    Parse(#[from] serde_json::Error),
    /// An object referenced a parent that is not an earlier list entry.
    #[error("object {index} refers to parent {parent}, which is not an earlier object")]
    BadParent {
        /// Position of the offending object.
        index: usize,
        /// The out-of-order or out-of-range parent it named.
        parent: usize,
    },
}

/// TRS channels of one object, as authored.
///
/// The orientation is `[x, y, z, w]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformDescriptor {
    /// Local translation.
    pub position: [f32; 3],
    /// Local orientation quaternion, `[x, y, z, w]`.
    pub orientation: [f32; 4],
    /// Local per-axis scale.
    pub scale: [f32; 3],
}

impl TransformDescriptor {
    /// Convert to the engine's transform value type.
    #[must_use]
    pub fn to_transform(&self) -> Transform3D {
        Transform3D::new(
            Vec3::from_array(self.position),
            Quat::from_xyzw(
                self.orientation[0],
                self.orientation[1],
                self.orientation[2],
                self.orientation[3],
            ),
            Vec3::from_array(self.scale),
        )
    }
}

/// One object in a scene descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    /// Authoring name, for diagnostics only.
    pub name: String,
    /// The object's local transform.
    pub transform: TransformDescriptor,
    /// Index of the parent object, which must appear earlier in the list.
    #[serde(default)]
    pub parent: Option<usize>,
}

/// A flat, parent-after-child-forbidden list of scene objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// Scene objects in creation order.
    pub objects: Vec<SceneObject>,
}

impl SceneDescriptor {
    /// Parse a descriptor from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create an entity and transform component for every object.
    ///
    /// Objects are processed in order; parents are resolved against the
    /// entities created so far, so a forward or out-of-range parent
    /// reference fails with [`SceneError::BadParent`] before any linking
    /// happens for that object. Returns the created entities, parallel to
    /// [`objects`](SceneDescriptor::objects).
    pub fn instantiate(
        &self,
        entities: &mut EntityManager,
        transforms: &mut TransformComponentManager,
    ) -> Result<Vec<Entity>, SceneError> {
        // Validate up front so a bad descriptor creates nothing.
        for (index, object) in self.objects.iter().enumerate() {
            if let Some(parent) = object.parent {
                if parent >= index {
                    return Err(SceneError::BadParent { index, parent });
                }
            }
        }

        let mut created = Vec::with_capacity(self.objects.len());
        for object in &self.objects {
            let entity = entities.create();
            let instance = transforms.create_from_descriptor(entity, &object.transform);
            if let Some(parent) = object.parent {
                let parent_instance = transforms.instance_for_entity(created[parent]);
                transforms.set_parent(instance, parent_instance);
                // Re-apply the authored locals: set_parent rewrote them to
                // preserve the pre-parenting world channels.
                transforms.set_local_transform(instance, object.transform.to_transform());
            }
            debug!(name = %object.name, entity = %entity, "instantiated scene object");
            created.push(entity);
        }
        Ok(created)
    }
}

impl TransformComponentManager {
    /// Create a transform for `entity` seeded from a descriptor.
    ///
    /// If the entity already has a transform the existing instance is
    /// returned untouched, mirroring the guarded config-driven creation
    /// path of the scene loader.
    pub fn create_from_descriptor(
        &mut self,
        entity: Entity,
        descriptor: &TransformDescriptor,
    ) -> Instance {
        let existing = self.instance_for_entity(entity);
        if existing.is_valid() {
            return existing;
        }
        let instance = self.create_component_for_entity(entity);
        self.set_local_transform(instance, descriptor.to_transform());
        instance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_descriptor(position: [f32; 3]) -> TransformDescriptor {
        TransformDescriptor {
            position,
            orientation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    #[test]
    fn test_parse_scene_json() {
        let json = r#"{
            "objects": [
                {
                    "name": "root",
                    "transform": {
                        "position": [0.0, 1.0, 0.0],
                        "orientation": [0.0, 0.0, 0.0, 1.0],
                        "scale": [1.0, 1.0, 1.0]
                    }
                },
                {
                    "name": "child",
                    "transform": {
                        "position": [2.0, 0.0, 0.0],
                        "orientation": [0.0, 0.0, 0.0, 1.0],
                        "scale": [1.0, 1.0, 1.0]
                    },
                    "parent": 0
                }
            ]
        }"#;
        let scene = SceneDescriptor::from_json(json).unwrap();
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.objects[1].parent, Some(0));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = SceneDescriptor::from_json("{\"objects\": [{}]}").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_instantiate_builds_hierarchy() {
        let mut entities = EntityManager::new();
        let mut transforms = TransformComponentManager::new();
        let scene = SceneDescriptor {
            objects: vec![
                SceneObject {
                    name: "root".into(),
                    transform: identity_descriptor([0.0, 1.0, 0.0]),
                    parent: None,
                },
                SceneObject {
                    name: "child".into(),
                    transform: identity_descriptor([2.0, 0.0, 0.0]),
                    parent: Some(0),
                },
            ],
        };

        let created = scene.instantiate(&mut entities, &mut transforms).unwrap();
        assert_eq!(created.len(), 2);

        let root = transforms.instance_for_entity(created[0]);
        let child = transforms.instance_for_entity(created[1]);
        assert_eq!(transforms.parent(child), root);
        assert_eq!(transforms.first_child(root), child);
        assert_eq!(transforms.world_translation(child), Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_instantiate_rejects_forward_parent() {
        let mut entities = EntityManager::new();
        let mut transforms = TransformComponentManager::new();
        let scene = SceneDescriptor {
            objects: vec![SceneObject {
                name: "orphan".into(),
                transform: identity_descriptor([0.0, 0.0, 0.0]),
                parent: Some(3),
            }],
        };

        let err = scene.instantiate(&mut entities, &mut transforms).unwrap_err();
        assert!(matches!(err, SceneError::BadParent { index: 0, parent: 3 }));
        // Validation runs before creation, so nothing leaked.
        assert_eq!(transforms.num_instances(), 0);
    }

    #[test]
    fn test_create_from_descriptor_is_guarded() {
        let mut entities = EntityManager::new();
        let mut transforms = TransformComponentManager::new();
        let e = entities.create();

        let first = transforms.create_from_descriptor(e, &identity_descriptor([1.0, 0.0, 0.0]));
        let second = transforms.create_from_descriptor(e, &identity_descriptor([9.0, 9.0, 9.0]));
        assert_eq!(first, second);
        assert_eq!(transforms.num_instances(), 1);
        // The second descriptor did not overwrite the first.
        assert_eq!(transforms.local_translation(first), Vec3::new(1.0, 0.0, 0.0));
    }
}
