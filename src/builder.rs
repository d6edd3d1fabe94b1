use glam::Vec3;

use crate::camera::Camera;
use crate::config::{
    ConfigError, LightConfig, MaterialConfig, RenderableConfig, SceneConfig, Shading, StyleConfig,
};
use crate::graph::{Appearance, Light, Node, NodeKind, SceneGraph, Transform};
use crate::math::hex_to_rgb;
use crate::render::RenderTarget;

/// A scene graph and camera ready for the frame driver. One of each per
/// running instance; the builder is the only place they are created.
pub struct BuiltScene {
    pub graph: SceneGraph,
    pub camera: Camera,
}

/// Validate `config`, configure the render output, and assemble the scene
/// graph. Runs exactly once per process, before the loop starts;
/// configuration problems are fatal here and nothing recovers from them.
pub fn build(config: &SceneConfig, target: &mut dyn RenderTarget) -> Result<BuiltScene, ConfigError> {
    config.validate()?;

    let surface = &config.surface;
    target.configure(
        (surface.width, surface.height),
        hex_to_rgb(surface.clear_color),
    );

    let aspect = surface.width as f32 / surface.height as f32;
    let camera = Camera::new(&config.camera, aspect);

    let mut graph = SceneGraph::new();
    for renderable in &config.renderables {
        graph.add(renderable_node(renderable));
    }
    for light in &config.lights {
        graph.add(light_node(light));
    }
    if let Some(size) = config.axes_helper {
        graph.add(Node::axes(size));
    }

    log::info!(
        "scene '{}' built: {} renderables, {} lights, {} helpers",
        config.name,
        graph.renderable_count(),
        graph.light_count(),
        graph.helper_count()
    );

    Ok(BuiltScene { graph, camera })
}

fn renderable_node(config: &RenderableConfig) -> Node {
    let kind = match &config.style {
        StyleConfig::Mesh(material) => NodeKind::Mesh {
            shape: config.shape,
            appearance: appearance(material),
        },
        StyleConfig::Points { color, size } => NodeKind::Points {
            shape: config.shape,
            color: hex_to_rgb(*color),
            size: *size,
        },
        StyleConfig::Line(material) => NodeKind::Line {
            shape: config.shape,
            appearance: appearance(material),
        },
    };

    Node::new(kind)
        .with_transform(Transform {
            position: Vec3::from_array(config.position),
            rotation: Vec3::from_array(config.rotation),
        })
        .with_spin(Vec3::from_array(config.spin))
}

fn appearance(material: &MaterialConfig) -> Appearance {
    let color = hex_to_rgb(material.color);
    match material.shading {
        Shading::Flat => Appearance::Flat { color },
        Shading::Lambert => Appearance::Lambert { color },
        Shading::Phong { specular } => Appearance::Phong {
            color,
            specular: hex_to_rgb(specular),
        },
    }
}

fn light_node(config: &LightConfig) -> Node {
    let light = match *config {
        LightConfig::Directional {
            color,
            intensity,
            direction,
        } => Light::Directional {
            color: hex_to_rgb(color),
            intensity,
            direction: Vec3::from_array(direction),
        },
        LightConfig::Ambient { color, intensity } => Light::Ambient {
            color: hex_to_rgb(color),
            intensity,
        },
    };
    Node::new(NodeKind::Light(light))
}
