use anyhow::{Context, Result};
use clap::Parser;
use cubegrid_camera::OrbitFlyCamera;
use cubegrid_input::{Action, Bindings, HeldKeys};
use cubegrid_render::FrameMatrices;
use cubegrid_render_wgpu::WgpuRenderer;
use cubegrid_scene::{CubeGroup, SceneConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "cubegrid-desktop", about = "Fly-camera viewer for a grid of cubes")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene layout file (YAML); the built-in staircase layout when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Draw cubes as wireframes
    #[arg(long)]
    wireframe: bool,
}

/// Per-frame application state: the camera and cube group are owned here and
/// threaded through the frame explicitly, never stored globally.
struct AppState {
    group: CubeGroup,
    camera: OrbitFlyCamera,
    bindings: Bindings,
    held: HeldKeys,
    aspect: f32,
    last_frame: Instant,
}

impl AppState {
    fn new(config: SceneConfig) -> Result<Self> {
        let group = CubeGroup::new(config).context("invalid scene layout")?;
        Ok(Self {
            group,
            camera: OrbitFlyCamera::default(),
            bindings: Bindings::default(),
            held: HeldKeys::new(),
            aspect: 16.0 / 9.0,
            last_frame: Instant::now(),
        })
    }

    /// Apply all held-key actions for this frame. Runs before matrices are
    /// composed so the frame reflects the input that produced it.
    fn update(&mut self, dt: f32) {
        use cubegrid_camera::MoveDirection;

        for action in self.held.actions(&self.bindings) {
            match action {
                Action::MoveForward => self.camera.process_keyboard(MoveDirection::Forward, dt),
                Action::MoveBackward => self.camera.process_keyboard(MoveDirection::Backward, dt),
                Action::MoveLeft => self.camera.process_keyboard(MoveDirection::Left, dt),
                Action::MoveRight => self.camera.process_keyboard(MoveDirection::Right, dt),
                Action::ScaleUp => self.group.scale_up(dt),
                Action::ScaleDown => self.group.scale_down(dt),
                Action::Quit => {}
            }
        }
    }
}

struct GpuApp {
    state: AppState,
    wireframe: bool,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
}

impl GpuApp {
    fn new(state: AppState, wireframe: bool) -> Self {
        Self {
            state,
            wireframe,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("cubegrid")
            .with_inner_size(PhysicalSize::new(800u32, 600));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        // Capture the mouse for continuous look; fall back to confinement on
        // platforms without locked grab.
        window.set_cursor_visible(false);
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        {
            tracing::warn!("cursor grab unavailable: {e}");
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let required_features = if self.wireframe {
            wgpu::Features::POLYGON_MODE_LINE
        } else {
            wgpu::Features::empty()
        };

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cubegrid_device"),
                required_features,
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.aspect = size.width as f32 / size.height.max(1) as f32;

        let renderer = WgpuRenderer::new(
            &device,
            surface_format,
            size.width,
            size.height,
            self.wireframe,
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    // A fresh projection matrix follows from the new aspect.
                    self.state.aspect = config.width as f32 / config.height.max(1) as f32;
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                self.state.held.set_pressed(key, pressed);
                if pressed && self.state.bindings.action_for(key) == Some(Action::Quit) {
                    event_loop.exit();
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
                };
                self.state.camera.process_mouse_scroll(lines);
            }
            WindowEvent::RedrawRequested => {
                // dt is measured once and reused for every movement and scale
                // call this frame; the cap keeps a long stall from teleporting
                // the camera.
                let now = Instant::now();
                let dt = (now - self.state.last_frame).as_secs_f32().min(0.1);
                self.state.last_frame = now;
                self.state.update(dt);

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let frame = match FrameMatrices::compose(
                    &self.state.camera,
                    &self.state.group,
                    self.state.aspect,
                ) {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::error!("frame composition failed: {e}");
                        return;
                    }
                };

                if let Some(renderer) = &self.renderer {
                    renderer.render(device, queue, &view, &frame);
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state
                .camera
                .process_mouse_movement(delta.0 as f32, delta.1 as f32, true);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_scene(path: Option<&PathBuf>) -> Result<SceneConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading scene layout {}", path.display()))?;
            let config: SceneConfig = serde_yaml::from_str(&text)
                .with_context(|| format!("parsing scene layout {}", path.display()))?;
            tracing::info!(instances = config.offsets.len(), "scene layout loaded");
            Ok(config)
        }
        None => Ok(SceneConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("cubegrid-desktop starting");

    let config = load_scene(cli.scene.as_ref())?;
    let state = AppState::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(state, cli.wireframe);
    event_loop.run_app(&mut app)?;

    Ok(())
}
