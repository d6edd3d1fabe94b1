use scene_primer::camera::Camera;
use scene_primer::config::CameraConfig;
use scene_primer::driver::RunState;
use scene_primer::graph::SceneGraph;
use scene_primer::input::{InputDispatcher, Key};
use scene_primer::render::RenderTarget;

/// Render output that only tracks its size.
struct SizeTarget {
    size: (u32, u32),
}

impl RenderTarget for SizeTarget {
    fn configure(&mut self, size: (u32, u32), _background: [f32; 3]) {
        self.size = size;
    }

    fn resize(&mut self, size: (u32, u32)) {
        self.size = size;
    }

    fn submit(
        &mut self,
        _graph: &SceneGraph,
        _camera: &Camera,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}

fn camera() -> Camera {
    Camera::new(
        &CameraConfig {
            fovy: 60.0,
            near: 0.1,
            far: 10.0,
            position: [0.0, 2.0, 5.0],
            look_at: [0.0, 0.0, 0.0],
        },
        800.0 / 600.0,
    )
}

// ============================================================================
// Key handling
// ============================================================================

#[test]
fn test_activate_key_sets_flag() {
    let dispatcher = InputDispatcher::new(false);
    let mut state = RunState::new();

    dispatcher.key_down(Key::Space, &mut state);
    assert!(state.is_active());
    assert!(state.is_looping());
}

#[test]
fn test_key_up_clears_active_for_any_key() {
    let dispatcher = InputDispatcher::new(false);

    for released in [Key::Space, Key::Escape, Key::Other] {
        let mut state = RunState::new();
        dispatcher.key_down(Key::Space, &mut state);
        assert!(state.is_active());

        dispatcher.key_up(released, &mut state);
        assert!(
            !state.is_active(),
            "releasing {released:?} should clear the activate flag"
        );
    }
}

#[test]
fn test_unbound_key_down_is_ignored() {
    let dispatcher = InputDispatcher::new(false);
    let mut state = RunState::new();

    dispatcher.key_down(Key::Other, &mut state);
    assert!(state.is_looping());
    assert!(!state.is_active());
}

#[test]
fn test_cancel_key_is_idempotent() {
    let dispatcher = InputDispatcher::new(false);
    let mut state = RunState::new();

    dispatcher.key_down(Key::Escape, &mut state);
    dispatcher.key_down(Key::Escape, &mut state);
    assert!(!state.is_looping());
}

#[test]
fn test_activate_still_works_after_cancel() {
    // Cancellation stops rescheduling; it does not latch the activate
    // flag, which stays driven by key events.
    let dispatcher = InputDispatcher::new(false);
    let mut state = RunState::new();

    dispatcher.key_down(Key::Escape, &mut state);
    dispatcher.key_down(Key::Space, &mut state);
    assert!(state.is_active());
    assert!(!state.is_looping());
}

// ============================================================================
// Resize propagation
// ============================================================================

#[test]
fn test_resize_updates_camera_and_target() {
    let dispatcher = InputDispatcher::new(true);
    let mut camera = camera();
    let mut target = SizeTarget { size: (800, 600) };
    let stale_projection = camera.projection_matrix();

    dispatcher.resize((1280, 720), &mut camera, &mut target);

    assert_eq!(target.size(), (1280, 720));
    assert!((camera.aspect() - 1280.0 / 720.0).abs() < 1e-6);
    // The projection was recomputed inside the handler, not deferred.
    assert_ne!(camera.projection_matrix(), stale_projection);
}

#[test]
fn test_resize_is_idempotent() {
    let dispatcher = InputDispatcher::new(true);
    let mut camera = camera();
    let mut target = SizeTarget { size: (800, 600) };

    dispatcher.resize((1024, 768), &mut camera, &mut target);
    let aspect = camera.aspect();
    let projection = camera.projection_matrix();
    let size = target.size();

    dispatcher.resize((1024, 768), &mut camera, &mut target);

    assert_eq!(camera.aspect(), aspect);
    assert_eq!(camera.projection_matrix(), projection);
    assert_eq!(target.size(), size);
}

#[test]
fn test_resize_disabled_is_noop() {
    let dispatcher = InputDispatcher::new(false);
    let mut camera = camera();
    let mut target = SizeTarget { size: (800, 600) };

    dispatcher.resize((1024, 768), &mut camera, &mut target);

    assert_eq!(target.size(), (800, 600));
    assert!((camera.aspect() - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn test_zero_area_resize_is_ignored() {
    let dispatcher = InputDispatcher::new(true);
    let mut camera = camera();
    let mut target = SizeTarget { size: (800, 600) };

    dispatcher.resize((0, 600), &mut camera, &mut target);
    dispatcher.resize((800, 0), &mut camera, &mut target);

    assert_eq!(target.size(), (800, 600));
    assert!((camera.aspect() - 800.0 / 600.0).abs() < 1e-6);
}
