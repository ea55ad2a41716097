//! An in-memory surface that records every call.
//!
//! [`RecordingSurface`] is the reference implementation of [`Surface`]: it
//! tracks draw state exactly like an output surface would and appends one
//! [`DrawCommand`] per call. Two renders of the same input produce equal
//! command streams, which makes it the natural target for determinism checks
//! and geometry assertions.

use log::trace;

use crate::{
    color::Color,
    draw::{DrawState, Font, Paint, Path, Surface, SurfaceError},
    geometry::Point,
};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f32),
    SetFont(Font),
    Line {
        from: Point,
        to: Point,
    },
    Rect {
        origin: Point,
        width: f32,
        height: f32,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
    Ellipse {
        corner1: Point,
        corner2: Point,
        paint: Paint,
    },
    Path {
        path: Path,
        paint: Paint,
    },
    Text {
        at: Point,
        text: String,
        centred: bool,
    },
    NewPage,
    Finalize,
}

impl DrawCommand {
    /// Returns true for calls that put marks on the page.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Line { .. }
                | Self::Rect { .. }
                | Self::Circle { .. }
                | Self::Ellipse { .. }
                | Self::Path { .. }
                | Self::Text { .. }
        )
    }

    /// Returns the text of a `Text` command.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// A [`Surface`] that records calls instead of producing output.
#[derive(Debug)]
pub struct RecordingSurface {
    state: DrawState,
    commands: Vec<DrawCommand>,
    pages: usize,
    finalized: bool,
}

impl RecordingSurface {
    /// Creates a surface with one empty page and default draw state.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded commands that put marks on the page.
    pub fn primitives(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|command| command.is_primitive())
    }

    /// Number of pages, counting the one open at creation.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Splits the recorded commands into per-page slices.
    pub fn pages(&self) -> Vec<&[DrawCommand]> {
        self.commands
            .split(|command| matches!(command, DrawCommand::NewPage | DrawCommand::Finalize))
            .take(self.pages)
            .collect()
    }

    /// Discards recorded commands, keeping the current state.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn record(&mut self, command: DrawCommand) {
        trace!(command:?; "Recording draw command");
        self.commands.push(command);
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            state: DrawState::default(),
            commands: Vec::new(),
            pages: 1,
            finalized: false,
        }
    }
}

impl Surface for RecordingSurface {
    fn state(&self) -> DrawState {
        self.state
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
        self.record(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
        self.record(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
        self.record(DrawCommand::SetLineWidth(width));
    }

    fn set_font(&mut self, font: Font) {
        self.state.font = font;
        self.record(DrawCommand::SetFont(font));
    }

    fn line(&mut self, from: Point, to: Point) {
        self.record(DrawCommand::Line { from, to });
    }

    fn rect(&mut self, origin: Point, width: f32, height: f32, paint: Paint) {
        self.record(DrawCommand::Rect {
            origin,
            width,
            height,
            paint,
        });
    }

    fn circle(&mut self, center: Point, radius: f32, paint: Paint) {
        self.record(DrawCommand::Circle {
            center,
            radius,
            paint,
        });
    }

    fn ellipse(&mut self, corner1: Point, corner2: Point, paint: Paint) {
        self.record(DrawCommand::Ellipse {
            corner1,
            corner2,
            paint,
        });
    }

    fn draw_path(&mut self, path: &Path, paint: Paint) {
        self.record(DrawCommand::Path {
            path: path.clone(),
            paint,
        });
    }

    fn draw_string(&mut self, at: Point, text: &str) {
        self.record(DrawCommand::Text {
            at,
            text: text.to_string(),
            centred: false,
        });
    }

    fn draw_centred_string(&mut self, at: Point, text: &str) {
        self.record(DrawCommand::Text {
            at,
            text: text.to_string(),
            centred: true,
        });
    }

    fn new_page(&mut self) {
        self.pages += 1;
        self.record(DrawCommand::NewPage);
    }

    fn finalize(&mut self) -> Result<(), SurfaceError> {
        if self.finalized {
            return Err(SurfaceError::AlreadyFinalized);
        }
        self.finalized = true;
        self.record(DrawCommand::Finalize);
        Ok(())
    }
}
