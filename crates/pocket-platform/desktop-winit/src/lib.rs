//! Translates winit window events into Pocket UI input events.

use pocket_render_common::InputEvent;
use pocket_ui_graphics::{Point, Size};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Tracks the scale factor and last cursor position of one window.
pub struct DesktopWinitPlatform {
    scale_factor: f64,
    cursor: Point,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: Point::ZERO,
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    pub fn logical_size(&self, size: PhysicalSize<u32>) -> Size {
        Size::new(
            (f64::from(size.width) / self.scale_factor) as f32,
            (f64::from(size.height) / self.scale_factor) as f32,
        )
    }

    /// Pointer and close events; surface changes are left to the caller.
    pub fn translate(&mut self, event: &WindowEvent<'_>) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.pointer_position(*position);
                Some(InputEvent::PointerMoved {
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::PointerPressed {
                    position: self.cursor,
                },
                ElementState::Released => InputEvent::PointerReleased {
                    position: self.cursor,
                },
            }),
            _ => None,
        }
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}
