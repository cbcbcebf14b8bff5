//! Common rendering contracts shared between renderer backends.
//!
//! A [`Backend`] owns a surface and an input source. The app shell drives it
//! through a [`FrameDriver`], and every backend runs the same per-frame
//! sequence via [`run_iteration`]: dispatch input, rebuild if needed, draw.

use std::path::PathBuf;
use std::time::Duration;

use pocket_core::{BackendError, BackendUnavailable, Error, WidgetId};
use pocket_ui::{LayoutBox, LayoutTree, PressHandler};
use pocket_ui_graphics::{Point, Rect, Size};

pub const DEFAULT_FPS: u32 = 60;

/// Input delivered to [`run_iteration`], in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved { position: Point },
    PointerPressed { position: Point },
    PointerReleased { position: Point },
    Resized { size: Size },
    CloseRequested,
}

/// Display parameters a backend is constructed from.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub font_path: Option<PathBuf>,
}

impl SurfaceOptions {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            fps: DEFAULT_FPS,
            font_path: None,
        }
    }

    pub fn viewport(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self::new("Pocket UI", 800, 600)
    }
}

/// An interactive widget found under the pointer.
#[derive(Clone, Debug)]
pub struct HitTarget {
    pub widget_id: WidgetId,
    pub rect: Rect,
    handler: PressHandler,
}

impl HitTarget {
    pub fn new(widget_id: WidgetId, rect: Rect, handler: PressHandler) -> Self {
        Self {
            widget_id,
            rect,
            handler,
        }
    }

    /// `None` unless the box accepts presses.
    pub fn from_box(node: &LayoutBox) -> Option<Self> {
        node.press_handler()
            .map(|handler| Self::new(node.node_id, node.rect, handler.clone()))
    }

    pub fn press(&self) -> Result<(), Error> {
        log::debug!("press {} at {:?}", self.widget_id, self.rect);
        self.handler.invoke()
    }
}

/// The app side of the loop: owns the view root and hands out trees.
pub trait FrameDriver {
    /// Tree drawn by the previous iteration, used for hit testing.
    fn last_tree(&self) -> Option<&LayoutTree>;

    /// Current tree for `viewport`, rebuilt only when the root was queued,
    /// nothing was built yet, or the viewport changed.
    fn frame(&mut self, viewport: Size) -> Result<&LayoutTree, Error>;

    fn stop_requested(&self) -> bool;

    fn request_stop(&mut self);
}

/// Abstraction implemented by concrete renderer backends.
pub trait Backend {
    fn name(&self) -> &'static str;

    /// Logical surface size.
    fn viewport(&self) -> Size;

    /// Blocks until the driver asks to stop, the surface closes or an
    /// iteration fails.
    fn run(&mut self, driver: &mut dyn FrameDriver) -> Result<(), Error>;

    /// Draws and presents `tree`, keeping whatever geometry
    /// [`hit_test`](Self::hit_test) needs for the next iteration.
    fn draw(&mut self, tree: &LayoutTree) -> Result<(), BackendError>;

    fn hit_test(&self, x: f32, y: f32, tree: &LayoutTree) -> Option<HitTarget> {
        tree.hit_test(x, y).and_then(HitTarget::from_box)
    }

    fn pointer_moved(&mut self, _position: Point) {}

    fn resized(&mut self, _size: Size) {}
}

/// Backends that can be built from [`SurfaceOptions`] alone.
pub trait ConstructBackend: Backend + Sized {
    fn construct(options: &SurfaceOptions) -> Result<Self, BackendUnavailable>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// One loop iteration: dispatch `events`, obtain the current tree and draw
/// it.
///
/// A failing press callback ends the iteration before anything is drawn. A
/// stop requested during the iteration still lets this frame draw; the
/// caller sees [`LoopControl::Exit`] afterwards.
pub fn run_iteration<I>(
    backend: &mut dyn Backend,
    driver: &mut dyn FrameDriver,
    events: I,
) -> Result<LoopControl, Error>
where
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        match event {
            InputEvent::PointerPressed { position } => {
                let target = driver
                    .last_tree()
                    .and_then(|tree| backend.hit_test(position.x, position.y, tree));
                match target {
                    Some(target) => target.press()?,
                    None => log::trace!("press at ({}, {}) hit nothing", position.x, position.y),
                }
            }
            InputEvent::PointerMoved { position } => backend.pointer_moved(position),
            InputEvent::PointerReleased { .. } => {}
            InputEvent::Resized { size } => backend.resized(size),
            InputEvent::CloseRequested => {
                log::info!("{} surface closed", backend.name());
                driver.request_stop();
                return Ok(LoopControl::Exit);
            }
        }
    }
    let viewport = backend.viewport();
    let tree = driver.frame(viewport)?;
    backend.draw(tree)?;
    if driver.stop_requested() {
        Ok(LoopControl::Exit)
    } else {
        Ok(LoopControl::Continue)
    }
}

#[cfg(test)]
#[path = "tests/iteration_tests.rs"]
mod tests;
