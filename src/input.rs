use winit::keyboard::KeyCode;

use crate::camera::Camera;
use crate::driver::RunState;
use crate::render::RenderTarget;

/// Keys the dispatcher distinguishes. Everything else folds into `Other`
/// and is ignored on key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Cancels the animation loop.
    Escape,
    /// Held to drive the per-frame spin mutation.
    Space,
    /// Any key without a binding.
    Other,
}

impl Key {
    pub fn from_keycode(code: KeyCode) -> Self {
        match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,
            _ => Key::Other,
        }
    }
}

/// Routes host input events into run-state changes and viewport updates.
/// Handlers run to completion on the event-loop thread between frames, so
/// everything they touch is settled before the next frame is composed.
#[derive(Debug, Clone, Copy)]
pub struct InputDispatcher {
    resize_enabled: bool,
}

impl InputDispatcher {
    pub fn new(resize_enabled: bool) -> Self {
        Self { resize_enabled }
    }

    pub fn key_down(&self, key: Key, state: &mut RunState) {
        match key {
            Key::Escape => state.cancel(),
            Key::Space => state.set_active(true),
            Key::Other => {}
        }
    }

    /// Releasing *any* key clears the activate flag, not just the key that
    /// set it. Deliberate simplification; there is no per-key bookkeeping.
    pub fn key_up(&self, _key: Key, state: &mut RunState) {
        state.set_active(false);
    }

    /// Propagate new viewport dimensions to the render output and the
    /// camera. The projection is recomputed before returning so the next
    /// frame never sees a stale aspect ratio. Samples without resize
    /// handling leave this as a no-op, as do zero-area (minimized) sizes.
    pub fn resize(&self, size: (u32, u32), camera: &mut Camera, target: &mut dyn RenderTarget) {
        if !self.resize_enabled {
            return;
        }
        let (width, height) = size;
        if width == 0 || height == 0 {
            return;
        }

        target.resize(size);
        camera.set_aspect(width as f32 / height as f32);
        camera.recompute_projection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(Key::from_keycode(KeyCode::Escape), Key::Escape);
        assert_eq!(Key::from_keycode(KeyCode::Space), Key::Space);
        assert_eq!(Key::from_keycode(KeyCode::KeyW), Key::Other);
        assert_eq!(Key::from_keycode(KeyCode::Enter), Key::Other);
    }
}
