use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::Shape;

/// Problems detected while validating sample configuration. All of them
/// are fatal at startup; nothing downstream recovers from a bad record.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("camera fovy must be between 0 and 180 degrees exclusive, got {0}")]
    FovyRange(f32),

    #[error("camera near plane ({near}) must be closer than far plane ({far})")]
    ClipOrder { near: f32, far: f32 },

    #[error("surface must have a nonzero area, got {width}x{height}")]
    ZeroArea { width: u32, height: u32 },

    #[error("{field} must be a packed 0xRRGGBB color, got {value:#x}")]
    ColorRange { field: &'static str, value: u32 },

    #[error("unknown sample '{0}'")]
    UnknownSample(String),
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn finite_vector(field: &'static str, value: [f32; 3]) -> Result<(), ConfigError> {
    for component in value {
        finite(field, component)?;
    }
    Ok(())
}

fn color(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value <= 0xffffff {
        Ok(())
    } else {
        Err(ConfigError::ColorRange { field, value })
    }
}

/// Perspective camera parameters. Field of view is vertical, in degrees;
/// the aspect ratio is derived from the surface at build time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraConfig {
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub look_at: [f32; 3],
}

impl CameraConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        finite("camera.fovy", self.fovy)?;
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(ConfigError::FovyRange(self.fovy));
        }
        positive("camera.near", self.near)?;
        finite("camera.far", self.far)?;
        if self.near >= self.far {
            return Err(ConfigError::ClipOrder {
                near: self.near,
                far: self.far,
            });
        }
        finite_vector("camera.position", self.position)?;
        finite_vector("camera.look_at", self.look_at)
    }
}

/// Render output parameters: background color and initial dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub clear_color: u32,
    pub width: u32,
    pub height: u32,
}

impl SurfaceConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        color("surface.clear_color", self.clear_color)?;
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// How a mesh or line reacts to light.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Shading {
    Flat,
    Lambert,
    Phong { specular: u32 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialConfig {
    pub color: u32,
    pub shading: Shading,
}

impl MaterialConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        color("material.color", self.color)?;
        if let Shading::Phong { specular } = self.shading {
            color("material.specular", specular)?;
        }
        Ok(())
    }
}

/// Primitive the shape is rendered as: solid mesh, point cloud, or line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum StyleConfig {
    Mesh(MaterialConfig),
    Points { color: u32, size: f32 },
    Line(MaterialConfig),
}

impl StyleConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            StyleConfig::Mesh(material) | StyleConfig::Line(material) => material.validate(),
            StyleConfig::Points { color: c, size } => {
                color("points.color", *c)?;
                positive("points.size", *size)
            }
        }
    }
}

/// One renderable entry: a shape, how to draw it, where it sits, and the
/// per-frame rotation step applied while the activate key is held.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RenderableConfig {
    pub shape: Shape,
    pub style: StyleConfig,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub spin: [f32; 3],
}

impl RenderableConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_shape(&self.shape)?;
        self.style.validate()?;
        finite_vector("renderable.position", self.position)?;
        finite_vector("renderable.rotation", self.rotation)?;
        finite_vector("renderable.spin", self.spin)
    }
}

fn validate_shape(shape: &Shape) -> Result<(), ConfigError> {
    match *shape {
        Shape::Box {
            width,
            height,
            depth,
        } => {
            positive("box.width", width)?;
            positive("box.height", height)?;
            positive("box.depth", depth)
        }
        Shape::Sphere { radius, .. } => positive("sphere.radius", radius),
        Shape::Cone { radius, height, .. } => {
            positive("cone.radius", radius)?;
            positive("cone.height", height)
        }
        Shape::Torus { radius, tube, .. } => {
            positive("torus.radius", radius)?;
            positive("torus.tube", tube)
        }
        Shape::Plane { width, height } => {
            positive("plane.width", width)?;
            positive("plane.height", height)
        }
    }
}

/// Light source parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum LightConfig {
    Directional {
        color: u32,
        intensity: f32,
        direction: [f32; 3],
    },
    Ambient {
        color: u32,
        intensity: f32,
    },
}

impl LightConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            LightConfig::Directional {
                color: c,
                intensity,
                direction,
            } => {
                color("light.color", c)?;
                non_negative("light.intensity", intensity)?;
                finite_vector("light.direction", direction)
            }
            LightConfig::Ambient {
                color: c,
                intensity,
            } => {
                color("light.color", c)?;
                non_negative("light.intensity", intensity)
            }
        }
    }
}

/// Complete description of one sample: everything the builder needs to
/// assemble a scene, plus the feature flags distinguishing the presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    pub camera: CameraConfig,
    pub surface: SurfaceConfig,
    pub renderables: Vec<RenderableConfig>,
    pub lights: Vec<LightConfig>,
    /// Axis-marker size, when the sample shows one.
    pub axes_helper: Option<f32>,
    /// Whether window resizes propagate to the camera and render output.
    pub handle_resize: bool,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        self.surface.validate()?;
        for renderable in &self.renderables {
            renderable.validate()?;
        }
        for light in &self.lights {
            light.validate()?;
        }
        if let Some(size) = self.axes_helper {
            positive("axes_helper.size", size)?;
        }
        Ok(())
    }
}
