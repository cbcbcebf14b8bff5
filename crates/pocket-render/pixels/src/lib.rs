//! Windowed renderer backend: a winit window presenting a software
//! rasterised frame through `pixels`.

mod font;
mod pipeline;
mod raster;
mod scene;

pub use font::FONT_ENV;
pub use scene::{DrawShape, HitRegion, Scene, TextDraw};

use std::panic;
use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use pocket_core::{BackendError, BackendUnavailable, Error};
use pocket_platform_desktop_winit::DesktopWinitPlatform;
use pocket_render_common::{
    run_iteration, Backend, ConstructBackend, FrameDriver, HitTarget, InputEvent, LoopControl,
    SurfaceOptions,
};
use pocket_ui::LayoutTree;
use pocket_ui_graphics::{Point, Size};
use rusttype::Font;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

use crate::raster::Frame;

const NAME: &str = "windowed";

pub struct WindowedBackend {
    // Field order is drop order: the surface must go before its window.
    pixels: Pixels,
    window: Window,
    event_loop: Option<EventLoop<()>>,
    platform: DesktopWinitPlatform,
    scene: Scene,
    font: Option<Font<'static>>,
    cursor: Option<Point>,
    buffer_size: (u32, u32),
    viewport: Size,
    frame_interval: Duration,
    pending: Vec<InputEvent>,
    frames: u64,
}

impl WindowedBackend {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    fn handle_window_event(&mut self, event: WindowEvent<'_>) -> Result<(), BackendError> {
        match event {
            WindowEvent::Resized(size) => self.resize_surface(size)?,
            WindowEvent::ScaleFactorChanged {
                scale_factor,
                new_inner_size,
            } => {
                self.platform.set_scale_factor(scale_factor);
                self.resize_surface(*new_inner_size)?;
            }
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            other => {
                if let Some(input) = self.platform.translate(&other) {
                    self.pending.push(input);
                }
            }
        }
        Ok(())
    }

    fn resize_surface(&mut self, size: PhysicalSize<u32>) -> Result<(), BackendError> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        self.pixels
            .resize_surface(size.width, size.height)
            .map_err(|err| BackendError::new(NAME, format!("failed to resize surface: {err}")))?;
        self.pixels
            .resize_buffer(size.width, size.height)
            .map_err(|err| BackendError::new(NAME, format!("failed to resize buffer: {err}")))?;
        self.buffer_size = (size.width, size.height);
        self.viewport = self.platform.logical_size(size);
        self.pending.push(InputEvent::Resized {
            size: self.viewport,
        });
        Ok(())
    }
}

impl ConstructBackend for WindowedBackend {
    fn construct(options: &SurfaceOptions) -> Result<Self, BackendUnavailable> {
        probe_display()?;
        let event_loop = panic::catch_unwind(EventLoop::new)
            .map_err(|_| BackendUnavailable::new(NAME, "event loop could not be created"))?;
        let window = WindowBuilder::new()
            .with_title(&options.title)
            .with_inner_size(LogicalSize::new(
                f64::from(options.width),
                f64::from(options.height),
            ))
            .build(&event_loop)
            .map_err(|err| BackendUnavailable::new(NAME, format!("window creation failed: {err}")))?;
        let physical = window.inner_size();
        let surface = SurfaceTexture::new(physical.width, physical.height, &window);
        let pixels = Pixels::new(physical.width, physical.height, surface).map_err(|err| {
            BackendUnavailable::new(NAME, format!("surface creation failed: {err}"))
        })?;
        let platform = DesktopWinitPlatform::new(window.scale_factor());
        let viewport = platform.logical_size(physical);
        log::info!(
            "opened \"{}\" at {}x{} (scale {})",
            options.title,
            physical.width,
            physical.height,
            platform.scale_factor()
        );
        Ok(Self {
            pixels,
            window,
            event_loop: Some(event_loop),
            platform,
            scene: Scene::new(),
            font: font::load_font(options.font_path.as_deref()),
            cursor: None,
            buffer_size: (physical.width, physical.height),
            viewport,
            frame_interval: options.frame_interval(),
            pending: Vec::new(),
            frames: 0,
        })
    }
}

impl Backend for WindowedBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn run(&mut self, driver: &mut dyn FrameDriver) -> Result<(), Error> {
        let Some(mut event_loop) = self.event_loop.take() else {
            return Err(BackendError::new(NAME, "the event loop already ran").into());
        };
        log::info!("{NAME} backend running, {:?} per frame", self.frame_interval);
        let window_id = self.window.id();
        let mut outcome: Result<(), Error> = Ok(());
        let mut next_frame = Instant::now();
        event_loop.run_return(|event, _, control_flow| match event {
            Event::WindowEvent {
                window_id: id,
                event,
            } if id == window_id => {
                if let Err(err) = self.handle_window_event(event) {
                    log::error!("{err}");
                    outcome = Err(err.into());
                    control_flow.set_exit();
                }
            }
            Event::MainEventsCleared => {
                if driver.stop_requested() {
                    control_flow.set_exit();
                    return;
                }
                let now = Instant::now();
                if now < next_frame {
                    control_flow.set_wait_until(next_frame);
                    return;
                }
                let events = std::mem::take(&mut self.pending);
                match run_iteration(&mut *self, &mut *driver, events) {
                    Ok(LoopControl::Continue) => {
                        next_frame = now + self.frame_interval;
                        control_flow.set_wait_until(next_frame);
                    }
                    Ok(LoopControl::Exit) => control_flow.set_exit(),
                    Err(err) => {
                        log::error!("frame failed: {err}");
                        outcome = Err(err);
                        control_flow.set_exit();
                    }
                }
            }
            _ => {}
        });
        self.event_loop = Some(event_loop);
        log::info!("{NAME} backend stopped after {} frames", self.frames);
        outcome
    }

    fn draw(&mut self, tree: &LayoutTree) -> Result<(), BackendError> {
        pipeline::render_layout_tree(tree, self.cursor, &mut self.scene);
        let (width, height) = self.buffer_size;
        let mut frame = Frame {
            pixels: self.pixels.frame_mut(),
            width,
            height,
            scale: self.platform.scale_factor() as f32,
        };
        raster::draw_scene(&mut frame, &self.scene, self.font.as_ref());
        self.pixels
            .render()
            .map_err(|err| BackendError::new(NAME, format!("present failed: {err}")))?;
        self.frames += 1;
        Ok(())
    }

    fn hit_test(&self, x: f32, y: f32, _tree: &LayoutTree) -> Option<HitTarget> {
        self.scene.hit_test(x, y)
    }

    fn pointer_moved(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    fn resized(&mut self, size: Size) {
        log::debug!("viewport resized to {}x{}", size.width, size.height);
    }
}

#[cfg(all(unix, not(target_os = "macos"), not(target_os = "android")))]
fn probe_display() -> Result<(), BackendUnavailable> {
    let has_display = ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()));
    if has_display {
        Ok(())
    } else {
        Err(BackendUnavailable::new(
            NAME,
            "neither DISPLAY nor WAYLAND_DISPLAY is set",
        ))
    }
}

#[cfg(not(all(unix, not(target_os = "macos"), not(target_os = "android"))))]
fn probe_display() -> Result<(), BackendUnavailable> {
    Ok(())
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod pipeline_tests;
