use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use scene_primer::builder::{self, BuiltScene};
use scene_primer::cli::Cli;
use scene_primer::config::{ConfigError, SceneConfig};
use scene_primer::driver::{FrameDriver, RunState, Tick};
use scene_primer::input::{InputDispatcher, Key};
use scene_primer::render::GpuSurface;
use scene_primer::samples;

/// Everything that exists once the window is up and the scene is built.
struct Stage {
    window: Arc<Window>,
    target: GpuSurface,
    scene: BuiltScene,
    state: RunState,
    driver: FrameDriver,
    dispatcher: InputDispatcher,
}

struct App {
    config: SceneConfig,
    stage: Option<Stage>,
}

impl App {
    fn new(config: SceneConfig) -> Self {
        Self {
            config,
            stage: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.stage.is_some() {
            return;
        }

        let surface = &self.config.surface;
        let attributes = Window::default_attributes()
            .with_title(format!("scene-primer: {}", self.config.name))
            .with_inner_size(winit::dpi::LogicalSize::new(surface.width, surface.height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let mut target = match pollster::block_on(GpuSurface::new(window.clone())) {
            Ok(target) => target,
            Err(err) => {
                log::error!("failed to acquire render surface: {err}");
                event_loop.exit();
                return;
            }
        };

        let scene = match builder::build(&self.config, &mut target) {
            Ok(scene) => scene,
            Err(err) => {
                log::error!("invalid configuration: {err}");
                event_loop.exit();
                return;
            }
        };

        let dispatcher = InputDispatcher::new(self.config.handle_resize);

        // Kick off the frame loop; each tick reschedules the next one.
        window.request_redraw();

        self.stage = Some(Stage {
            window,
            target,
            scene,
            state: RunState::new(),
            driver: FrameDriver::new(),
            dispatcher,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(stage) = self.stage.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                let key = Key::from_keycode(code);
                match state {
                    ElementState::Pressed => stage.dispatcher.key_down(key, &mut stage.state),
                    ElementState::Released => stage.dispatcher.key_up(key, &mut stage.state),
                }
            }
            WindowEvent::Resized(size) => {
                stage.dispatcher.resize(
                    (size.width, size.height),
                    &mut stage.scene.camera,
                    &mut stage.target,
                );
            }
            WindowEvent::RedrawRequested => {
                let tick = stage.driver.tick(
                    &stage.state,
                    &mut stage.scene.graph,
                    &stage.scene.camera,
                    &mut stage.target,
                );
                match tick {
                    Tick::Continue => stage.window.request_redraw(),
                    Tick::Finished => {
                        log::info!(
                            "loop cancelled after {} frames",
                            stage.driver.frames_submitted()
                        );
                        event_loop.exit();
                    }
                    Tick::Idle => {}
                }
            }
            _ => {}
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<SceneConfig, ConfigError> {
    let mut config = samples::by_name(&cli.sample)
        .ok_or_else(|| ConfigError::UnknownSample(cli.sample.clone()))?;
    if let Some(width) = cli.width {
        config.surface.width = width;
    }
    if let Some(height) = cli.height {
        config.surface.height = height;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        for name in samples::SAMPLE_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let config = resolve_config(&cli).context("invalid sample configuration")?;

    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!(
        "{} - Controls: hold Space to spin, Escape to quit",
        config.name
    );

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app).context("event loop failed")?;

    Ok(())
}
