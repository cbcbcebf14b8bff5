//! Headless backend that writes each frame's layout tree as text.
//!
//! Used when no window can be opened. It draws one frame, then asks the
//! loop to stop, so an app completes its whole lifecycle without a display.

use std::fmt;
use std::io::{self, Write};

use pocket_core::{BackendError, BackendUnavailable, Error};
use pocket_render_common::{run_iteration, Backend, ConstructBackend, FrameDriver, SurfaceOptions};
use pocket_ui::{format_layout_tree, LayoutTree};
use pocket_ui_graphics::Size;

const NAME: &str = "console";

pub struct ConsoleBackend {
    options: SurfaceOptions,
    out: Box<dyn Write>,
    frames: u64,
}

impl ConsoleBackend {
    /// Writes to standard output.
    pub fn new(options: &SurfaceOptions) -> Self {
        Self::with_writer(options, Box::new(io::stdout()))
    }

    pub fn with_writer(options: &SurfaceOptions, out: Box<dyn Write>) -> Self {
        Self {
            options: options.clone(),
            out,
            frames: 0,
        }
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    fn write_frame(&mut self, tree: &LayoutTree) -> io::Result<()> {
        writeln!(
            self.out,
            "== {} frame {} ({}x{}) ==",
            self.options.title, self.frames, self.options.width, self.options.height
        )?;
        self.out.write_all(format_layout_tree(tree).as_bytes())?;
        self.out.flush()
    }
}

impl fmt::Debug for ConsoleBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleBackend")
            .field("options", &self.options)
            .field("frames", &self.frames)
            .finish()
    }
}

impl ConstructBackend for ConsoleBackend {
    fn construct(options: &SurfaceOptions) -> Result<Self, BackendUnavailable> {
        Ok(Self::new(options))
    }
}

impl Backend for ConsoleBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn viewport(&self) -> Size {
        self.options.viewport()
    }

    fn run(&mut self, driver: &mut dyn FrameDriver) -> Result<(), Error> {
        log::info!("{NAME} backend running \"{}\"", self.options.title);
        if !driver.stop_requested() {
            run_iteration(self, driver, std::iter::empty())?;
            driver.request_stop();
        }
        log::info!("{NAME} backend stopped after {} frame(s)", self.frames);
        Ok(())
    }

    fn draw(&mut self, tree: &LayoutTree) -> Result<(), BackendError> {
        self.frames += 1;
        self.write_frame(tree)
            .map_err(|err| BackendError::new(NAME, format!("write failed: {err}")))
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
