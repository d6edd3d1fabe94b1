use super::shapes::{create_shapes_sample, phong};
use crate::config::{SceneConfig, StyleConfig};
use crate::graph::Shape;

const POINT_COLOR: u32 = 0xffff00;
const POINT_SIZE: f32 = 0.1;

/// The shapes scene with mixed primitives: the sphere becomes a point
/// cloud and the torus a line. The only preset that follows window
/// resizes, so the aspect ratio stays correct while dragging.
pub fn create_mixed_sample() -> SceneConfig {
    let mut config = create_shapes_sample();
    config.name = "mixed".into();
    config.handle_resize = true;

    for renderable in &mut config.renderables {
        match renderable.shape {
            Shape::Sphere { .. } => {
                renderable.style = StyleConfig::Points {
                    color: POINT_COLOR,
                    size: POINT_SIZE,
                };
            }
            Shape::Torus { .. } => {
                renderable.style = StyleConfig::Line(phong());
            }
            _ => {}
        }
    }

    config
}
