use super::basic::create_spin_sample;
use super::{BODY_COLOR, HIGHLIGHT_COLOR};
use crate::config::{LightConfig, MaterialConfig, SceneConfig, Shading, StyleConfig};

pub(crate) fn directional_light() -> LightConfig {
    LightConfig::Directional {
        color: HIGHLIGHT_COLOR,
        intensity: 1.0,
        direction: [1.0, 1.0, 1.0],
    }
}

pub(crate) fn ambient_light() -> LightConfig {
    LightConfig::Ambient {
        color: HIGHLIGHT_COLOR,
        intensity: 0.2,
    }
}

fn with_shading(mut config: SceneConfig, shading: Shading) -> SceneConfig {
    config.renderables[0].style = StyleConfig::Mesh(MaterialConfig {
        color: BODY_COLOR,
        shading,
    });
    config
}

/// Swaps the cube to a light-reactive material and aims a directional
/// light at it. Faces away from the light go black: no ambient term yet.
pub fn create_lambert_sample() -> SceneConfig {
    let mut config = with_shading(create_spin_sample(), Shading::Lambert);
    config.name = "lambert".into();
    config.lights.push(directional_light());
    config
}

/// Adds a weak ambient light so shadowed faces stay readable.
pub fn create_ambient_sample() -> SceneConfig {
    let mut config = create_lambert_sample();
    config.name = "ambient".into();
    config.lights.push(ambient_light());
    config
}

/// Upgrades the material to phong with a white specular highlight.
pub fn create_specular_sample() -> SceneConfig {
    let mut config = with_shading(
        create_ambient_sample(),
        Shading::Phong {
            specular: HIGHLIGHT_COLOR,
        },
    );
    config.name = "specular".into();
    config
}
