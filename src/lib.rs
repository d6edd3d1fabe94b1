pub mod builder;
pub mod camera;
pub mod cli;
pub mod config;
pub mod driver;
pub mod graph;
pub mod input;
pub mod math;
pub mod render;
pub mod samples;

// Re-export sample constructors for one-line scene setup
pub use samples::{
    create_ambient_sample, create_axes_sample, create_lambert_sample, create_minimal_sample,
    create_mixed_sample, create_shapes_sample, create_specular_sample, create_spin_sample,
};
