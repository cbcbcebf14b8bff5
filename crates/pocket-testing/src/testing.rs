use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;

use pocket_core::{BackendError, Error};
use pocket_render_common::{run_iteration, Backend, FrameDriver, InputEvent, LoopControl};
use pocket_ui::LayoutTree;
use pocket_ui_graphics::{Point, Size};

/// In-memory writer whose contents stay readable after it is handed off.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Every tree a [`ScriptedBackend`] drew, in order.
#[derive(Clone, Default)]
pub struct FrameLog {
    frames: Rc<RefCell<Vec<LayoutTree>>>,
}

impl FrameLog {
    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }

    pub fn frames(&self) -> Ref<'_, Vec<LayoutTree>> {
        self.frames.borrow()
    }

    pub fn last(&self) -> Option<LayoutTree> {
        self.frames.borrow().last().cloned()
    }

    /// Texts of frame `index` in paint order.
    pub fn texts(&self, index: usize) -> Vec<String> {
        self.frames
            .borrow()
            .get(index)
            .map(|tree| tree.texts().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn push(&self, tree: LayoutTree) {
        self.frames.borrow_mut().push(tree);
    }
}

/// One loop iteration of a scripted run.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptStep {
    /// An iteration without input.
    Frame,
    /// Press at a logical position.
    Press(Point),
    /// Press at the centre of the first box showing `text` in the last frame.
    PressText(String),
    Move(Point),
    Resize(Size),
    Close,
}

impl ScriptStep {
    pub fn press(x: f32, y: f32) -> Self {
        ScriptStep::Press(Point::new(x, y))
    }

    pub fn press_text(text: impl Into<String>) -> Self {
        ScriptStep::PressText(text.into())
    }

    fn into_events(self, last_tree: Option<&LayoutTree>) -> Vec<InputEvent> {
        match self {
            ScriptStep::Frame => Vec::new(),
            ScriptStep::Press(position) => vec![InputEvent::PointerPressed { position }],
            ScriptStep::PressText(text) => {
                let target = last_tree
                    .and_then(|tree| tree.find_by_text(&text))
                    .map(|node| node.rect.center());
                match target {
                    Some(position) => vec![
                        InputEvent::PointerPressed { position },
                        InputEvent::PointerReleased { position },
                    ],
                    None => {
                        log::warn!("no box shows {text:?}; pressing nothing");
                        Vec::new()
                    }
                }
            }
            ScriptStep::Move(position) => vec![InputEvent::PointerMoved { position }],
            ScriptStep::Resize(size) => vec![InputEvent::Resized { size }],
            ScriptStep::Close => vec![InputEvent::CloseRequested],
        }
    }
}

/// Headless backend that replays a fixed script, one step per iteration,
/// and records every drawn tree. The run ends when the script is exhausted
/// or the loop is asked to stop.
pub struct ScriptedBackend {
    viewport: Size,
    script: VecDeque<ScriptStep>,
    log: FrameLog,
    fail_draw_after: Option<usize>,
}

impl ScriptedBackend {
    pub fn new(viewport: Size, script: impl IntoIterator<Item = ScriptStep>) -> (Self, FrameLog) {
        let log = FrameLog::default();
        let backend = Self {
            viewport,
            script: script.into_iter().collect(),
            log: log.clone(),
            fail_draw_after: None,
        };
        (backend, log)
    }

    /// Makes every draw after the first `frames` fail with a [`BackendError`].
    pub fn failing_after(mut self, frames: usize) -> Self {
        self.fail_draw_after = Some(frames);
        self
    }
}

impl Backend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn run(&mut self, driver: &mut dyn FrameDriver) -> Result<(), Error> {
        while !driver.stop_requested() {
            let Some(step) = self.script.pop_front() else {
                break;
            };
            let events = step.into_events(driver.last_tree());
            if run_iteration(self, driver, events)? == LoopControl::Exit {
                break;
            }
        }
        Ok(())
    }

    fn draw(&mut self, tree: &LayoutTree) -> Result<(), BackendError> {
        if self
            .fail_draw_after
            .is_some_and(|limit| self.log.len() >= limit)
        {
            return Err(BackendError::new("scripted", "surface lost"));
        }
        self.log.push(tree.clone());
        Ok(())
    }

    fn resized(&mut self, size: Size) {
        self.viewport = size;
    }
}
