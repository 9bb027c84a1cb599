//! Canvas that records draw commands instead of painting.

use super::{LabelStyle, RulerCanvas, ViewClip};
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

/// A single recorded drawing command, in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill { rect: Rect, color: Color32 },
    Line { from: Pos2, to: Pos2, stroke: Stroke },
    Text { pos: Pos2, text: String, style: LabelStyle },
}

/// Records every command issued against it.
///
/// Useful for headless hosts (snapshotting, export) and for inspecting what a
/// paint would have drawn.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: Vec2,
    clip: Option<ViewClip>,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Unclipped canvas of the given control size.
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            clip: None,
            commands: Vec::new(),
        }
    }

    /// Canvas with an active clip.
    pub fn with_clip(size: Vec2, clip: ViewClip) -> Self {
        Self {
            size,
            clip: Some(clip),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drops recorded commands, keeping size and clip.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded lines as `(from, to, stroke)`, in draw order.
    pub fn lines(&self) -> Vec<(Pos2, Pos2, Stroke)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
                _ => None,
            })
            .collect()
    }

    /// Recorded labels as `(pos, text)`, in draw order.
    pub fn texts(&self) -> Vec<(Pos2, &str)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { pos, text, .. } => Some((*pos, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Recorded fills as `(rect, color)`, in draw order.
    pub fn fills(&self) -> Vec<(Rect, Color32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Fill { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl RulerCanvas for RecordingCanvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clip(&self) -> Option<ViewClip> {
        self.clip
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn text(&mut self, pos: Pos2, text: &str, style: &LabelStyle) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            style: style.clone(),
        });
    }
}
