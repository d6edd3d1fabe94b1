use scene_primer::builder::{self, BuiltScene};
use scene_primer::camera::Camera;
use scene_primer::driver::{FrameDriver, Phase, RunState, Tick};
use scene_primer::graph::SceneGraph;
use scene_primer::input::{InputDispatcher, Key};
use scene_primer::render::RenderTarget;
use scene_primer::samples;

/// Render output that only counts submissions.
struct CountingTarget {
    size: (u32, u32),
    submissions: u32,
}

impl CountingTarget {
    fn new() -> Self {
        Self {
            size: (0, 0),
            submissions: 0,
        }
    }
}

impl RenderTarget for CountingTarget {
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
        self.submissions += 1;
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}

fn spin_scene(target: &mut CountingTarget) -> BuiltScene {
    builder::build(&samples::create_spin_sample(), target).unwrap()
}

fn cube_rotation_y(scene: &BuiltScene) -> f32 {
    scene
        .graph
        .nodes()
        .iter()
        .find(|n| n.is_renderable())
        .unwrap()
        .transform
        .rotation
        .y
}

#[test]
fn test_idle_frames_do_not_mutate() {
    let mut target = CountingTarget::new();
    let mut scene = spin_scene(&mut target);
    let state = RunState::new();
    let mut driver = FrameDriver::new();

    for _ in 0..5 {
        let tick = driver.tick(&state, &mut scene.graph, &scene.camera, &mut target);
        assert_eq!(tick, Tick::Continue);
    }

    assert_eq!(cube_rotation_y(&scene), 0.0);
    assert_eq!(target.submissions, 5);
}

#[test]
fn test_active_frames_accumulate_spin() {
    let mut target = CountingTarget::new();
    let mut scene = spin_scene(&mut target);
    let mut state = RunState::new();
    let mut driver = FrameDriver::new();

    state.set_active(true);
    for _ in 0..10 {
        driver.tick(&state, &mut scene.graph, &scene.camera, &mut target);
    }

    // Ten frames at 0.05 per frame.
    assert!((cube_rotation_y(&scene) - 0.5).abs() < 1e-4);
}

#[test]
fn test_mutation_stops_when_released() {
    let mut target = CountingTarget::new();
    let mut scene = spin_scene(&mut target);
    let mut state = RunState::new();
    let mut driver = FrameDriver::new();

    state.set_active(true);
    for _ in 0..4 {
        driver.tick(&state, &mut scene.graph, &scene.camera, &mut target);
    }
    state.set_active(false);
    for _ in 0..4 {
        driver.tick(&state, &mut scene.graph, &scene.camera, &mut target);
    }

    assert!((cube_rotation_y(&scene) - 0.2).abs() < 1e-5);
}

#[test]
fn test_exactly_one_frame_after_cancellation() {
    let mut target = CountingTarget::new();
    let mut scene = spin_scene(&mut target);
    let mut state = RunState::new();
    let mut driver = FrameDriver::new();

    for _ in 0..3 {
        assert_eq!(
            driver.tick(&state, &mut scene.graph, &scene.camera, &mut target),
            Tick::Continue
        );
    }

    state.cancel();

    // The cancelling event lands between frames; the next tick still
    // submits, then the driver stops for good.
    assert_eq!(
        driver.tick(&state, &mut scene.graph, &scene.camera, &mut target),
        Tick::Finished
    );
    assert_eq!(target.submissions, 4);
    assert_eq!(driver.phase(), Phase::Stopped);

    assert_eq!(
        driver.tick(&state, &mut scene.graph, &scene.camera, &mut target),
        Tick::Idle
    );
    assert_eq!(target.submissions, 4);
}

#[test]
fn test_cancellation_is_monotonic() {
    let mut state = RunState::new();
    let dispatcher = InputDispatcher::new(false);

    dispatcher.key_down(Key::Escape, &mut state);
    assert!(!state.is_looping());

    // No later event brings the loop back.
    dispatcher.key_down(Key::Escape, &mut state);
    dispatcher.key_down(Key::Space, &mut state);
    dispatcher.key_up(Key::Space, &mut state);
    dispatcher.key_down(Key::Other, &mut state);
    assert!(!state.is_looping());
}

#[test]
fn test_spec_scenario_spinning_cube() {
    // One cube spinning at 0.05, activate held for ten frames, then the
    // cancellation key: one more frame renders, the cumulative rotation
    // is ~0.5 rad and the loop never resumes.
    let mut target = CountingTarget::new();
    let mut scene = spin_scene(&mut target);
    let mut state = RunState::new();
    let mut driver = FrameDriver::new();
    let dispatcher = InputDispatcher::new(false);

    dispatcher.key_down(Key::Space, &mut state);
    for _ in 0..10 {
        assert_eq!(
            driver.tick(&state, &mut scene.graph, &scene.camera, &mut target),
            Tick::Continue
        );
    }

    dispatcher.key_up(Key::Space, &mut state);
    dispatcher.key_down(Key::Escape, &mut state);

    assert_eq!(
        driver.tick(&state, &mut scene.graph, &scene.camera, &mut target),
        Tick::Finished
    );

    assert_eq!(target.submissions, 11);
    assert!((cube_rotation_y(&scene) - 0.5).abs() < 1e-4);
    assert!(!state.is_looping());

    assert_eq!(
        driver.tick(&state, &mut scene.graph, &scene.camera, &mut target),
        Tick::Idle
    );
    assert_eq!(target.submissions, 11);
}
