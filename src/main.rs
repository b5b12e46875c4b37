use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use camera_rig::camera::{Camera, ClickCallback, Viewport};
use camera_rig::cli::Cli;
use camera_rig::core::WinitAdapter;
use camera_rig::renderer::Renderer;
use camera_rig::scene::{default_scene, Scene};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    cli: Cli,
    scene: Scene,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Option<Camera>,
    adapter: Option<WinitAdapter>,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli, scene: Scene) -> Self {
        Self {
            cli,
            scene,
            window: None,
            renderer: None,
            camera: None,
            adapter: None,
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Camera Rig")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(window.clone(), &self.scene)) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            let (view_slot, projection_slot) = renderer.uniform_slots();
            let mut camera = Camera::new(
                view_slot,
                projection_slot,
                Viewport::new(size.width as f32, size.height as f32),
            );
            camera.reset();

            let on_click: ClickCallback =
                Box::new(|x, y| println!("Picked point at ({:.2}, {:.2})", x, y));
            if let Err(e) = camera.init_controls(vec![on_click]) {
                eprintln!("Failed to activate camera controls: {}", e);
            }

            self.adapter = Some(WinitAdapter::new(size.width, size.height));
            self.window = Some(window);
            self.renderer = Some(renderer);
            self.camera = Some(camera);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return; // egui consumed the event
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                if let Some(adapter) = &mut self.adapter {
                    adapter.set_viewport(size.width, size.height);
                }
                if size.height > 0 {
                    if let Some(camera) = &mut self.camera {
                        camera.resize(Viewport::new(size.width as f32, size.height as f32));
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                self.update_fps(delta);

                if let Some(camera) = &mut self.camera {
                    if let Err(e) = camera.control() {
                        eprintln!("Camera update error: {}", e);
                    }
                    camera.upload_view();
                }

                if let (Some(renderer), Some(camera), Some(window)) =
                    (&mut self.renderer, &self.camera, &self.window)
                {
                    if let Err(e) = renderer.render(camera, window, self.fps) {
                        eprintln!("Render error: {}", e);
                    }
                }
            }
            event => {
                if let (Some(adapter), Some(camera)) = (&self.adapter, &mut self.camera) {
                    if let Some(camera_event) = adapter.map(&event) {
                        camera.handle_event(camera_event);
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scene = match &cli.scene {
        Some(path) => Scene::from_json_file(path)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => default_scene(),
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, scene);

    println!("Camera Rig - Controls: right-drag orbit, wheel dolly, left-click pick, R reset, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
