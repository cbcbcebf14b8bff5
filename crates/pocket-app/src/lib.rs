#![deny(missing_docs)]

//! High level entry point for running Pocket UI applications.
//!
//! An [`App`] owns one root [`View`] and one backend. [`App::run`] opens the
//! backend chosen by its [`BackendSelector`], falling back to the console
//! backend when a window cannot be created, and blocks until the loop stops.

mod selector;

pub use selector::{BackendFactory, BackendSelector, UnknownBackend, BACKEND_ENV};

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use pocket_app_shell::AppShell;
use pocket_core::{BackendUnavailable, Error, InvalidStateError, StopHandle};
use pocket_render_common::{Backend, SurfaceOptions, DEFAULT_FPS};
use pocket_render_console::ConsoleBackend;
use pocket_ui::View;

/// Options used to configure an [`App`].
pub struct AppOptions {
    title: String,
    initial_size: (u32, u32),
    fps: u32,
    backend: BackendSelector,
    font_path: Option<PathBuf>,
    console_output: Option<Box<dyn Write>>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            title: "Pocket UI".to_string(),
            initial_size: (800, 600),
            fps: DEFAULT_FPS,
            backend: BackendSelector::Auto,
            font_path: None,
            console_output: None,
        }
    }
}

impl AppOptions {
    /// Default options: an 800x600 window titled "Pocket UI" at 60 fps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial surface size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = (width, height);
        self
    }

    /// Sets the target frame rate of the windowed backend.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Chooses the backend.
    pub fn with_backend(mut self, backend: BackendSelector) -> Self {
        self.backend = backend;
        self
    }

    /// TrueType font used by the windowed backend for text.
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Where the console backend writes its trace instead of stdout.
    pub fn with_console_output(mut self, out: impl Write + 'static) -> Self {
        self.console_output = Some(Box::new(out));
        self
    }

    /// Display parameters handed to backend constructors.
    pub fn surface_options(&self) -> SurfaceOptions {
        let (width, height) = self.initial_size;
        SurfaceOptions {
            title: self.title.clone(),
            width,
            height,
            fps: self.fps,
            font_path: self.font_path.clone(),
        }
    }
}

impl fmt::Debug for AppOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppOptions")
            .field("title", &self.title)
            .field("initial_size", &self.initial_size)
            .field("fps", &self.fps)
            .field("backend", &self.backend)
            .field("font_path", &self.font_path)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Finished,
}

/// A single application: one root view, one backend, one run.
pub struct App {
    options: AppOptions,
    view: Option<Box<dyn View>>,
    stop: StopHandle,
    phase: Phase,
    backend_name: Option<&'static str>,
    frames: u64,
}

impl App {
    /// Creates an app with a `width` x `height` surface titled `title`.
    pub fn new(title: impl Into<String>, width: u32, height: u32, backend: BackendSelector) -> Self {
        Self::with_options(
            AppOptions::new()
                .with_title(title)
                .with_size(width, height)
                .with_backend(backend),
        )
    }

    /// Creates an app from prepared options.
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            options,
            view: None,
            stop: StopHandle::new(),
            phase: Phase::Idle,
            backend_name: None,
            frames: 0,
        }
    }

    /// Installs a default-constructed `V` as the root view.
    pub fn set_view<V: View + Default>(&mut self) -> Result<(), InvalidStateError> {
        self.set_view_instance(V::default())
    }

    /// Installs `view` as the root view, replacing any view installed
    /// earlier. Fails once the app has started running.
    pub fn set_view_instance(&mut self, mut view: impl View) -> Result<(), InvalidStateError> {
        match self.phase {
            Phase::Idle => {}
            Phase::Running => return Err(InvalidStateError::AlreadyRunning),
            Phase::Finished => return Err(InvalidStateError::AlreadyFinished),
        }
        view.attached(self.stop.clone());
        if self.view.replace(Box::new(view)).is_some() {
            log::debug!("replaced the root view");
        }
        Ok(())
    }

    /// Opens the backend and runs the loop until it stops.
    ///
    /// Returns the first error raised by a press callback, a rebuild or the
    /// surface. An app runs at most once.
    pub fn run(&mut self) -> Result<(), Error> {
        match self.phase {
            Phase::Idle => {}
            Phase::Running => return Err(InvalidStateError::AlreadyRunning.into()),
            Phase::Finished => return Err(InvalidStateError::AlreadyFinished.into()),
        }
        let view = self.view.take().ok_or(InvalidStateError::NoView)?;
        self.phase = Phase::Running;
        let mut backend = self.open_backend();
        self.backend_name = Some(backend.name());
        let mut shell = AppShell::new(view, self.stop.clone());
        let result = shell.run(backend.as_mut());
        shell.log_debug_info();
        shell.teardown();
        self.frames = shell.frames();
        self.phase = Phase::Finished;
        result
    }

    /// Asks the loop to finish after the current iteration. Safe to call
    /// from a press callback through [`stop_handle`](Self::stop_handle).
    pub fn stop(&self) {
        self.stop.request();
    }

    /// Shared stop flag for callbacks.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Name of the backend the last run used, after fallback.
    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend_name
    }

    /// Frames drawn by the last run.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// True once [`run`](Self::run) has returned.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn open_backend(&mut self) -> Box<dyn Backend> {
        let surface = self.options.surface_options();
        let mut selector = std::mem::take(&mut self.options.backend);
        if matches!(selector, BackendSelector::Auto) {
            if let Some(from_env) = BackendSelector::from_env() {
                log::debug!("{BACKEND_ENV} selects the {} backend", from_env.name());
                selector = from_env;
            }
        }
        let opened = match selector {
            BackendSelector::Console => return self.console(&surface),
            BackendSelector::Auto | BackendSelector::Windowed => windowed(&surface),
            BackendSelector::Custom(factory) => factory(&surface),
        };
        match opened {
            Ok(backend) => backend,
            Err(err) => {
                log::warn!("{err}; falling back to the console backend");
                self.console(&surface)
            }
        }
    }

    fn console(&mut self, surface: &SurfaceOptions) -> Box<dyn Backend> {
        match self.options.console_output.take() {
            Some(out) => Box::new(ConsoleBackend::with_writer(surface, out)),
            None => Box::new(ConsoleBackend::new(surface)),
        }
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("options", &self.options)
            .field("has_view", &self.view.is_some())
            .field("phase", &self.phase)
            .field("backend", &self.backend_name)
            .finish()
    }
}

#[cfg(feature = "desktop")]
fn windowed(surface: &SurfaceOptions) -> Result<Box<dyn Backend>, BackendUnavailable> {
    use pocket_render_common::ConstructBackend;
    use pocket_render_pixels::WindowedBackend;

    WindowedBackend::construct(surface).map(|backend| Box::new(backend) as Box<dyn Backend>)
}

#[cfg(not(feature = "desktop"))]
fn windowed(_surface: &SurfaceOptions) -> Result<Box<dyn Backend>, BackendUnavailable> {
    Err(BackendUnavailable::new(
        "windowed",
        "built without the `desktop` feature",
    ))
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
