//! A canvas that records draw calls instead of drawing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use arena_core::types::{ImageHandle, Rect};

use crate::canvas::{Canvas, Color, LifeBar};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    Clear { width: i32, height: i32 },
    Image { image: Option<ImageHandle>, dest: Rect },
    LifeBar { bar: LifeBar, color: Color },
    StatusPanel { x: i32, y: i32 },
    Screen { image: ImageHandle, dest: Rect },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    image_sizes: HashMap<ImageHandle, (i32, i32)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the natural size of an image for overlay placement.
    pub fn with_image_size(mut self, image: ImageHandle, width: i32, height: i32) -> Self {
        self.image_sizes.insert(image, (width, height));
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded frame, leaving the canvas empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn clear_screen(&mut self, width: i32, height: i32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn draw_image(&mut self, image: Option<&ImageHandle>, dest: Rect) {
        self.commands.push(DrawCommand::Image {
            image: image.cloned(),
            dest,
        });
    }

    fn draw_life_bar(&mut self, bar: &LifeBar, color: Color) {
        self.commands.push(DrawCommand::LifeBar { bar: *bar, color });
    }

    fn draw_status_panel(&mut self, x: i32, y: i32) {
        self.commands.push(DrawCommand::StatusPanel { x, y });
    }

    fn draw_screen(&mut self, image: &ImageHandle, dest: Rect) {
        self.commands.push(DrawCommand::Screen {
            image: image.clone(),
            dest,
        });
    }

    fn image_size(&self, image: &ImageHandle) -> Option<(i32, i32)> {
        self.image_sizes.get(image).copied()
    }
}
