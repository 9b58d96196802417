use anyhow::{Context, Result};
use clap::Parser;
use dungeon_hud::HudState;
use dungeon_mesh::{MeshOptions, WorldMesh, build_world_mesh};
use dungeon_render_wgpu::{FollowCamera, WgpuRenderer};
use egui::Context as EguiContext;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "dungeon-desktop", about = "Dungeon crawler rendering starter")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// ASCII map to load
    #[arg(long, default_value = "assets/maps/level1.map")]
    map: PathBuf,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Window title
    #[arg(long, default_value = "Dungeon Starter")]
    title: String,

    /// Drop wall faces hidden between adjacent wall cells
    #[arg(long)]
    cull: bool,
}

/// Startup configuration.
struct AppConfig {
    width: u32,
    height: u32,
    title: String,
    map: PathBuf,
    mesh: MeshOptions,
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            width: cli.width.max(1),
            height: cli.height.max(1),
            title: cli.title.clone(),
            map: cli.map.clone(),
            mesh: MeshOptions {
                cull_shared_faces: cli.cull,
                ..MeshOptions::default()
            },
        }
    }
}

/// CPU-side state: the level mesh, camera and HUD.
struct AppState {
    mesh: WorldMesh,
    camera: FollowCamera,
    hud: HudState,
    last_frame: Instant,
}

impl AppState {
    fn new(config: &AppConfig) -> Result<Self> {
        let level = dungeon_level::load_map_ascii(&config.map)?;
        let mesh = build_world_mesh(&level, &config.mesh);

        let stats = mesh.stats();
        tracing::info!(
            "level {}x{} loaded, player at ({}, {}), {} floor / {} wall triangles",
            level.width(),
            level.height(),
            level.player().x,
            level.player().y,
            stats.floor_triangles,
            stats.wall_triangles
        );

        let mut camera = FollowCamera::over_cell(level.player());
        camera.set_viewport(config.width, config.height);

        let map_name = config
            .map
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.map.display().to_string());

        Ok(Self {
            mesh,
            camera,
            hud: HudState::starter(&map_name),
            last_frame: Instant::now(),
        })
    }

    fn update(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.hud.frame_time_ms = Some(dt.as_secs_f32() * 1000.0);
    }

    fn draw_ui(&self, ctx: &EguiContext) {
        dungeon_hud::draw_hud(ctx, &self.hud);
    }
}

/// Everything that exists only once a window is up.
struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

struct GpuApp {
    config: AppConfig,
    state: AppState,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
    /// Fatal initialization error, returned from `main` after the loop exits.
    error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(config: AppConfig, state: AppState) -> Self {
        Self {
            config,
            state,
            window: None,
            gpu: None,
            egui_ctx: EguiContext::default(),
            error: None,
        }
    }

    fn init_gpu(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("window creation failed")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("surface creation failed")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("dungeon_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("device creation failed")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.set_viewport(config.width, config.height);

        let renderer = WgpuRenderer::new(
            &device,
            surface_format,
            config.width,
            config.height,
            &self.state.mesh,
        )?;

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        self.window = Some(window);
        self.gpu = Some(Gpu {
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        });
        Ok(())
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.config.width = new_size.width.max(1);
        gpu.config.height = new_size.height.max(1);
        gpu.surface.configure(&gpu.device, &gpu.config);
        gpu.renderer
            .resize(&gpu.device, gpu.config.width, gpu.config.height);
        self.state
            .camera
            .set_viewport(gpu.config.width, gpu.config.height);
    }

    fn render_frame(&mut self) {
        self.state.update();

        let (Some(gpu), Some(window)) = (self.gpu.as_mut(), self.window.as_ref()) else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
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

        gpu.renderer
            .render(&gpu.device, &gpu.queue, &view, &self.state.camera);

        let raw_input = gpu.egui_winit.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            self.state.draw_ui(ctx);
        });
        gpu.egui_winit
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            gpu.egui_renderer
                .update_texture(&gpu.device, &gpu.queue, *id, image_delta);
        }
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        gpu.egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gpu.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(id);
        }

        output.present();
        window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_gpu(event_loop) {
            tracing::error!("initialization failed: {e:#}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(gpu), Some(window)) = (self.gpu.as_mut(), self.window.as_ref()) {
            let response = gpu.egui_winit.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => self.resize(new_size),
            WindowEvent::RedrawRequested => self.render_frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    tracing::info!("dungeon-desktop starting");

    let config = AppConfig::from(&cli);
    let state = AppState::new(&config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config, state);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.error.take() {
        return Err(err);
    }
    Ok(())
}
