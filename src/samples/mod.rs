//! Named sample presets. Each preset recreates one step of the graded
//! demo sequence as declarative configuration consumed by the builder;
//! later presets layer one feature onto the previous one.

mod basic;
mod lighting;
mod mixed;
mod shapes;

pub use basic::{create_axes_sample, create_minimal_sample, create_spin_sample};
pub use lighting::{create_ambient_sample, create_lambert_sample, create_specular_sample};
pub use mixed::create_mixed_sample;
pub use shapes::create_shapes_sample;

use crate::config::{CameraConfig, SceneConfig, SurfaceConfig};

/// Every preset name, in teaching order.
pub const SAMPLE_NAMES: &[&str] = &[
    "minimal", "axes", "spin", "lambert", "ambient", "specular", "shapes", "mixed",
];

/// Look up a preset by name.
pub fn by_name(name: &str) -> Option<SceneConfig> {
    match name {
        "minimal" => Some(create_minimal_sample()),
        "axes" => Some(create_axes_sample()),
        "spin" => Some(create_spin_sample()),
        "lambert" => Some(create_lambert_sample()),
        "ambient" => Some(create_ambient_sample()),
        "specular" => Some(create_specular_sample()),
        "shapes" => Some(create_shapes_sample()),
        "mixed" => Some(create_mixed_sample()),
        _ => None,
    }
}

// Parameters shared by every preset.
pub(crate) const CLEAR_COLOR: u32 = 0x666666;
pub(crate) const BODY_COLOR: u32 = 0x3399ff;
pub(crate) const HIGHLIGHT_COLOR: u32 = 0xffffff;

pub(crate) fn surface() -> SurfaceConfig {
    SurfaceConfig {
        clear_color: CLEAR_COLOR,
        width: 800,
        height: 600,
    }
}

/// Close-up camera used by the single-object presets.
pub(crate) fn near_camera() -> CameraConfig {
    CameraConfig {
        fovy: 60.0,
        near: 0.1,
        far: 10.0,
        position: [0.0, 2.0, 5.0],
        look_at: [0.0, 0.0, 0.0],
    }
}

/// Pulled-back camera used once the presets fill the floor plane.
pub(crate) fn far_camera() -> CameraConfig {
    CameraConfig {
        fovy: 60.0,
        near: 0.1,
        far: 30.0,
        position: [0.0, 5.0, 10.0],
        look_at: [0.0, 0.0, 0.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in SAMPLE_NAMES {
            let config = by_name(name).expect("preset should exist");
            assert_eq!(&config.name, name);
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(by_name("voxels").is_none());
    }

    #[test]
    fn test_every_preset_validates() {
        for name in SAMPLE_NAMES {
            let config = by_name(name).unwrap();
            assert!(config.validate().is_ok(), "preset '{name}' should validate");
        }
    }
}
