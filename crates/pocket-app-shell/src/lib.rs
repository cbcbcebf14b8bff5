//! Ties a view root to a backend: owns the rebuild queue and the stop flag
//! and serves layout trees to the backend loop.

use std::time::Instant;

use pocket_core::{Error, StopHandle};
use pocket_render_common::{Backend, FrameDriver};
use pocket_ui::{format_layout_tree, log_layout_tree, BuiltNode, LayoutEngine, LayoutTree, View, ViewRoot};
use pocket_ui_graphics::Size;

pub struct AppShell {
    root: ViewRoot,
    stop: StopHandle,
    built: Option<BuiltNode>,
    last_tree: Option<LayoutTree>,
    viewport: Option<Size>,
    frames: u64,
    start_time: Instant,
}

impl AppShell {
    pub fn new(view: Box<dyn View>, stop: StopHandle) -> Self {
        Self {
            root: ViewRoot::new(view, Default::default()),
            stop,
            built: None,
            last_tree: None,
            viewport: None,
            frames: 0,
            start_time: Instant::now(),
        }
    }

    pub fn with_view(view: impl View) -> Self {
        Self::new(Box::new(view), StopHandle::new())
    }

    pub fn root(&self) -> &ViewRoot {
        &self.root
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Frames served to the backend so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn rebuilds(&self) -> u64 {
        self.root.rebuild_count()
    }

    /// Whether the next frame for `viewport` needs new geometry.
    pub fn should_layout(&self, viewport: Size) -> bool {
        self.last_tree.is_none() || self.root.needs_rebuild() || self.viewport != Some(viewport)
    }

    /// Hands control to `backend` until it returns.
    pub fn run(&mut self, backend: &mut dyn Backend) -> Result<(), Error> {
        log::info!("running on the {} backend", backend.name());
        let result = backend.run(self);
        let elapsed = self.start_time.elapsed();
        match &result {
            Ok(()) => log::info!(
                "run finished: {} frames, {} rebuilds in {:.2?}",
                self.frames,
                self.rebuilds(),
                elapsed
            ),
            Err(err) => log::error!("run failed after {} frames: {err}", self.frames),
        }
        result
    }

    /// Unmounts the current tree so no listener outlives the run.
    pub fn teardown(&mut self) {
        self.root.teardown();
        self.built = None;
        self.last_tree = None;
        self.viewport = None;
    }

    pub fn log_debug_info(&self) {
        match &self.last_tree {
            Some(tree) => log::debug!("current screen:\n{}", format_layout_tree(tree)),
            None => log::debug!("no layout available"),
        }
    }

    fn layout(&mut self, viewport: Size) -> Result<LayoutTree, Error> {
        let built = match self.built.take() {
            Some(built) if !self.root.needs_rebuild() => built,
            previous => match self.root.rebuild() {
                Ok(built) => built,
                Err(err) => {
                    self.built = previous;
                    return Err(err);
                }
            },
        };
        let tree = LayoutEngine::new(viewport).layout(&built);
        log_layout_tree(&tree);
        self.built = Some(built);
        self.viewport = Some(viewport);
        Ok(tree)
    }
}

impl FrameDriver for AppShell {
    fn last_tree(&self) -> Option<&LayoutTree> {
        self.last_tree.as_ref()
    }

    fn frame(&mut self, viewport: Size) -> Result<&LayoutTree, Error> {
        let stale = self.should_layout(viewport);
        let tree = match self.last_tree.take() {
            Some(tree) if !stale => tree,
            previous => match self.layout(viewport) {
                Ok(tree) => tree,
                Err(err) => {
                    self.last_tree = previous;
                    return Err(err);
                }
            },
        };
        self.frames += 1;
        Ok(self.last_tree.insert(tree))
    }

    fn stop_requested(&self) -> bool {
        self.stop.is_requested()
    }

    fn request_stop(&mut self) {
        self.stop.request();
    }
}
