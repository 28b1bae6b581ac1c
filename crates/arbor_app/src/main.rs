//! # arbor_app
//!
//! Demo driver for the arbor engine core: loads a small scene descriptor,
//! spins the fixed-timestep loop, and animates the scene root so the
//! world-transform propagation is visible in the logs.

mod tick;

use anyhow::{Context, Result};
use arbor_scene::{SceneDescriptor, TransformComponentManager};
use glam::Vec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tick::{TickConfig, TickLoop};

/// A root with two children, one of them carrying a grandchild.
const DEMO_SCENE: &str = r#"{
    "objects": [
        {
            "name": "root",
            "transform": {
                "position": [0.0, 0.0, 0.0],
                "orientation": [0.0, 0.0, 0.0, 1.0],
                "scale": [1.0, 1.0, 1.0]
            }
        },
        {
            "name": "left",
            "transform": {
                "position": [-2.0, 0.0, 0.0],
                "orientation": [0.0, 0.0, 0.0, 1.0],
                "scale": [1.0, 1.0, 1.0]
            },
            "parent": 0
        },
        {
            "name": "right",
            "transform": {
                "position": [2.0, 0.0, 0.0],
                "orientation": [0.0, 0.0, 0.0, 1.0],
                "scale": [1.0, 1.0, 1.0]
            },
            "parent": 0
        },
        {
            "name": "lantern",
            "transform": {
                "position": [0.0, 1.0, 0.0],
                "orientation": [0.0, 0.0, 0.0, 1.0],
                "scale": [0.5, 0.5, 0.5]
            },
            "parent": 2
        }
    ]
}"#;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("arbor_app=info".parse()?))
        .init();

    info!("arbor engine starting");

    let mut tick_loop = TickLoop::new(TickConfig {
        tick_rate: 60.0,
        max_ticks: 120,
    });

    let scene = SceneDescriptor::from_json(DEMO_SCENE).context("parsing demo scene")?;
    let created = {
        let (entities, store) = tick_loop.world_mut();
        let transforms = store.manager_mut::<TransformComponentManager>();
        scene
            .instantiate(entities, transforms)
            .context("instantiating demo scene")?
    };
    info!(object_count = created.len(), "scene loaded");

    let root_entity = created[0];
    let lantern_entity = created[3];

    tick_loop.run(|ctx| {
        let transforms = ctx.store.manager_mut::<TransformComponentManager>();
        let root = transforms.instance_for_entity(root_entity);

        // Bob the whole hierarchy up and down; children follow without
        // their locals changing.
        let height = ctx.sim_time.sin() as f32;
        transforms.set_local_translation(root, Vec3::new(0.0, height, 0.0));

        if ctx.tick_id % 30 == 0 {
            let lantern = transforms.instance_for_entity(lantern_entity);
            let world = transforms.world_translation(lantern);
            info!(
                tick_id = ctx.tick_id,
                x = world.x,
                y = world.y,
                z = world.z,
                "lantern world position"
            );
        }
    });

    info!(
        ticks = tick_loop.tick_id(),
        sim_time = tick_loop.sim_time(),
        "arbor engine shut down"
    );
    Ok(())
}
