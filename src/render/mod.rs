pub mod surface;

pub use surface::GpuSurface;

use crate::camera::Camera;
use crate::graph::SceneGraph;

/// Handle to a host-provided display output. Acquired once at startup and
/// held for the life of the process; the scene graph and camera are
/// composed against it every frame.
pub trait RenderTarget {
    /// Apply the initial output dimensions and background color.
    fn configure(&mut self, size: (u32, u32), background: [f32; 3]);

    /// Change the output dimensions, keeping the configured background.
    fn resize(&mut self, size: (u32, u32));

    /// Compose and present one frame of the scene.
    fn submit(
        &mut self,
        graph: &SceneGraph,
        camera: &Camera,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Current output dimensions in physical pixels.
    fn size(&self) -> (u32, u32);
}
