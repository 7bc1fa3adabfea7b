use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;
use std::time::Instant;

use thiserror::Error;

use winit::dpi::{PhysicalPosition, PhysicalSize, Size};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use superbible::backend::GlBackend;
use superbible::Renderable;

pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "OpenGL Window".to_string(),
            width: 800,
            height: 800,
            min_width: 100,
            min_height: 100,
        }
    }
}

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
}

impl App {
    pub fn new(settings: &WindowSettings) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(
                settings.width,
                settings.height,
            )))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(
                settings.min_width,
                settings.min_height,
            )))
            .with_title(&settings.title);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| {
                // find_configs already fails with BadConfig when nothing matches the template
                configs.next().expect("display offers no GL configs")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;
        center_on_monitor(&window);
        let handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 5))))
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(name) => gl_display.get_proc_address(name.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        log::info!(
            "Created OpenGL 4.5 context for a {}x{} window",
            settings.width,
            settings.height
        );

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
        })
    }

    /// Repaints as fast as the event loop allows until the window is closed.
    pub fn run<R>(self, mut renderable: R) -> !
    where
        R: Renderable<GlBackend> + 'static,
    {
        let mut backend = GlBackend::new();

        if let Err(e) = renderable.initialize(&mut backend) {
            log::error!("Could not initialize renderer: {e}");
            std::process::exit(1);
        }

        let start = Instant::now();
        let mut running = true;

        self.event_loop
            .run(move |event, _window_target, control_flow| {
                control_flow.set_poll();
                match event {
                    Event::MainEventsCleared => {
                        if running {
                            self.gl_window.window.request_redraw();
                        }
                    }
                    Event::RedrawRequested(_) if running => {
                        let elapsed = start.elapsed().as_secs_f64();

                        if let Err(e) = renderable.render_frame(&mut backend, elapsed) {
                            log::error!("Frame failed: {e}");
                            running = false;
                            control_flow.set_exit_with_code(1);
                            return;
                        }

                        if let Err(e) = self.gl_window.surface.swap_buffers(&self.gl_context) {
                            log::error!("Could not swap buffers: {e}");
                        }
                    }
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::Resized(size) => {
                            if let (Some(width), Some(height)) =
                                (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                            {
                                self.gl_window
                                    .surface
                                    .resize(&self.gl_context, width, height);
                                backend.resize(size.width, size.height);
                                log::debug!("Resized to {}x{}", size.width, size.height);
                            }
                        }
                        WindowEvent::CloseRequested => {
                            if running {
                                running = false;
                                if let Err(e) = renderable.destroy(&mut backend) {
                                    log::warn!("{e}");
                                }
                            }
                            control_flow.set_exit();
                        }
                        _ => (),
                    },
                    _ => (),
                }
            })
    }
}

fn center_on_monitor(window: &Window) {
    if let Some(monitor) = window.current_monitor() {
        let position =
            centered_position(monitor.position(), monitor.size(), window.outer_size());
        window.set_outer_position(position);
    }
}

fn centered_position(
    monitor_pos: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |screen: u32, window: u32| (screen as i32 - window as i32) / 2;

    PhysicalPosition::new(
        monitor_pos.x + offset(monitor_size.width, window_size.width),
        monitor_pos.y + offset(monitor_size.height, window_size.height),
    )
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::ZeroSize)?,
            NonZeroU32::new(height).ok_or(AppError::ZeroSize)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no usable display: {0}")]
    Display(String),
    #[error("display builder returned no window")]
    NoWindow,
    #[error("window has zero size")]
    ZeroSize,
    #[error(transparent)]
    Context(#[from] glutin::error::Error),
}
