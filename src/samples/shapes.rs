use std::f32::consts::FRAC_PI_2;

use super::basic::AXES_SIZE;
use super::lighting::{ambient_light, directional_light};
use super::{far_camera, surface, BODY_COLOR, HIGHLIGHT_COLOR};
use crate::config::{MaterialConfig, RenderableConfig, SceneConfig, Shading, StyleConfig};
use crate::graph::Shape;

/// Rotation step shared by the four spinning shapes, radians per frame.
pub(crate) const SPIN_STEP: f32 = 0.02;

pub(crate) fn phong() -> StyleConfig {
    StyleConfig::Mesh(MaterialConfig {
        color: BODY_COLOR,
        shading: Shading::Phong {
            specular: HIGHLIGHT_COLOR,
        },
    })
}

/// A shape placed on the floor grid, spinning around Y and Z.
pub(crate) fn spinning(shape: Shape, position: [f32; 3]) -> RenderableConfig {
    RenderableConfig {
        shape,
        style: phong(),
        position,
        rotation: [0.0; 3],
        spin: [0.0, SPIN_STEP, SPIN_STEP],
    }
}

/// Floor plane under the shapes, rotated flat. It does not spin.
pub(crate) fn floor() -> RenderableConfig {
    RenderableConfig {
        shape: Shape::Plane {
            width: 20.0,
            height: 20.0,
        },
        style: phong(),
        position: [0.0, -2.0, 0.0],
        rotation: [-FRAC_PI_2, 0.0, 0.0],
        spin: [0.0; 3],
    }
}

pub(crate) fn quadrant_shapes() -> [RenderableConfig; 4] {
    [
        spinning(
            Shape::Box {
                width: 1.0,
                height: 2.0,
                depth: 3.0,
            },
            [2.0, 0.0, -2.0],
        ),
        spinning(
            Shape::Sphere {
                radius: 1.0,
                width_segments: 16,
                height_segments: 16,
            },
            [2.0, 0.0, 2.0],
        ),
        spinning(
            Shape::Cone {
                radius: 1.0,
                height: 1.5,
                radial_segments: 32,
            },
            [-2.0, 0.0, 2.0],
        ),
        spinning(
            Shape::Torus {
                radius: 1.0,
                tube: 0.4,
                radial_segments: 32,
                tubular_segments: 32,
            },
            [-2.0, 0.0, -2.0],
        ),
    ]
}

/// Every mesh shape at once: one per floor quadrant over a ground plane,
/// under both lights, seen from the pulled-back camera.
pub fn create_shapes_sample() -> SceneConfig {
    let mut renderables: Vec<RenderableConfig> = quadrant_shapes().to_vec();
    renderables.push(floor());

    SceneConfig {
        name: "shapes".into(),
        camera: far_camera(),
        surface: surface(),
        renderables,
        lights: vec![directional_light(), ambient_light()],
        axes_helper: Some(AXES_SIZE),
        handle_resize: false,
    }
}
