use super::{near_camera, surface, BODY_COLOR};
use crate::config::{MaterialConfig, RenderableConfig, SceneConfig, Shading, StyleConfig};
use crate::graph::Shape;

/// Per-frame rotation step for the single-cube presets, radians.
pub(crate) const SPIN_STEP: f32 = 0.05;

pub(crate) const AXES_SIZE: f32 = 5.0;

pub(crate) fn unit_cube(shading: Shading) -> RenderableConfig {
    RenderableConfig {
        shape: Shape::Box {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        },
        style: StyleConfig::Mesh(MaterialConfig {
            color: BODY_COLOR,
            shading,
        }),
        position: [0.0; 3],
        rotation: [0.0; 3],
        spin: [0.0; 3],
    }
}

/// One flat-color cube and nothing else: the smallest complete scene.
pub fn create_minimal_sample() -> SceneConfig {
    SceneConfig {
        name: "minimal".into(),
        camera: near_camera(),
        surface: surface(),
        renderables: vec![unit_cube(Shading::Flat)],
        lights: Vec::new(),
        axes_helper: None,
        handle_resize: false,
    }
}

/// Adds the axis marker so the world orientation is visible.
pub fn create_axes_sample() -> SceneConfig {
    SceneConfig {
        name: "axes".into(),
        axes_helper: Some(AXES_SIZE),
        ..create_minimal_sample()
    }
}

/// The cube spins around Y while the activate key is held.
pub fn create_spin_sample() -> SceneConfig {
    let mut config = create_axes_sample();
    config.name = "spin".into();
    config.renderables[0].spin = [0.0, SPIN_STEP, 0.0];
    config
}
