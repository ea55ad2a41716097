//! A paginated SVG surface.
//!
//! Pages are buffered in memory and stacked vertically in one document, each
//! as a `<g class="page">` group over a white page rectangle. Page
//! coordinates (origin bottom-left, y up) are flipped into SVG's y-down
//! space per page. Nothing touches the target path until
//! [`Surface::finalize`], which writes through a temporary file in the
//! target's directory and persists it over the target only on success.

use std::{
    io::Write as _,
    path::{Path as FsPath, PathBuf},
};

use log::{debug, error, info};
use svg::{
    Document, Node,
    node::element::{self as svg_element},
};
use tempfile::NamedTempFile;

use primer_core::{
    color::Color,
    draw::{DrawState, Font, Paint, Path, PathSegment, Surface, SurfaceError},
    geometry::Point,
};

type SvgNode = Box<dyn Node>;

/// Writes pages to an SVG file on finalize.
#[derive(Debug)]
pub struct SvgSurface {
    target: PathBuf,
    width: f32,
    height: f32,
    state: DrawState,
    pages: Vec<Vec<SvgNode>>,
    finalized: bool,
}

impl SvgSurface {
    /// Creates a surface with one empty page of the given size in points.
    pub fn new(target: impl Into<PathBuf>, width: f32, height: f32) -> Self {
        Self {
            target: target.into(),
            width,
            height,
            state: DrawState::default(),
            pages: vec![Vec::new()],
            finalized: false,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Builds the document for the pages drawn so far.
    pub fn document(&self) -> Document {
        let total_height = self.height * self.pages.len() as f32;
        let mut document = Document::new()
            .set("width", self.width)
            .set("height", total_height)
            .set("viewBox", format!("0 0 {} {}", self.width, total_height));

        for (index, nodes) in self.pages.iter().enumerate() {
            let background = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", self.width)
                .set("height", self.height)
                .set("fill", "white");

            let mut page = svg_element::Group::new()
                .set("class", "page")
                .set(
                    "transform",
                    format!("translate(0 {})", index as f32 * self.height),
                )
                .add(background);
            for node in nodes {
                page = page.add(node.clone());
            }
            document = document.add(page);
        }

        document
    }

    fn flip(&self, point: Point) -> (f32, f32) {
        (point.x(), self.height - point.y())
    }

    fn push(&mut self, node: impl Into<SvgNode>) {
        // A surface always has at least one page.
        if let Some(page) = self.pages.last_mut() {
            page.push(node.into());
        }
    }

    fn fill_value(&self, paint: Paint) -> String {
        if paint.fills() {
            self.state.fill.to_string()
        } else {
            "none".to_string()
        }
    }

    fn stroke_value(&self, paint: Paint) -> String {
        if paint.strokes() {
            self.state.stroke.to_string()
        } else {
            "none".to_string()
        }
    }

    fn painted<T: Node>(&self, mut element: T, paint: Paint) -> T {
        element.assign("fill", self.fill_value(paint));
        element.assign("stroke", self.stroke_value(paint));
        if paint.strokes() {
            element.assign("stroke-width", self.state.line_width);
        }
        if paint.fills() && self.state.fill.alpha() < 1.0 {
            element.assign("fill-opacity", self.state.fill.alpha());
        }
        element
    }

    fn path_data(&self, path: &Path) -> String {
        path.segments()
            .iter()
            .map(|segment| match *segment {
                PathSegment::MoveTo(point) => {
                    let (x, y) = self.flip(point);
                    format!("M {x} {y}")
                }
                PathSegment::LineTo(point) => {
                    let (x, y) = self.flip(point);
                    format!("L {x} {y}")
                }
                PathSegment::CurveTo {
                    control1,
                    control2,
                    end,
                } => {
                    let (x1, y1) = self.flip(control1);
                    let (x2, y2) = self.flip(control2);
                    let (x, y) = self.flip(end);
                    format!("C {x1} {y1}, {x2} {y2}, {x} {y}")
                }
                PathSegment::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn text(&mut self, at: Point, text: &str, centred: bool) {
        let (x, y) = self.flip(at);
        let font: Font = self.state.font;

        let mut element = svg_element::Text::new(text)
            .set("x", x)
            .set("y", y)
            .set("font-family", font.face().family())
            .set("font-size", font.size())
            .set("fill", self.state.fill.to_string());
        if font.face().is_bold() {
            element = element.set("font-weight", "bold");
        }
        if font.face().is_oblique() {
            element = element.set("font-style", "italic");
        }
        if centred {
            element = element.set("text-anchor", "middle");
        }

        self.push(element);
    }

    fn write_document(&self) -> Result<(), SurfaceError> {
        let document = self.document();
        let directory = self
            .target
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(FsPath::new("."));

        info!(path = self.target.display().to_string(), pages = self.pages.len(); "Writing SVG document");

        let mut file = NamedTempFile::new_in(directory).inspect_err(|err| {
            error!(path = self.target.display().to_string(), err:% = err; "Failed to create temporary file");
        })?;
        write!(file, "{document}")?;
        file.flush()?;
        file.persist(&self.target).map_err(|err| {
            error!(path = self.target.display().to_string(), err:% = err; "Failed to persist SVG file");
            err.error
        })?;

        debug!("SVG document written");
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn state(&self) -> DrawState {
        self.state
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn set_font(&mut self, font: Font) {
        self.state.font = font;
    }

    fn line(&mut self, from: Point, to: Point) {
        let (x1, y1) = self.flip(from);
        let (x2, y2) = self.flip(to);
        let element = svg_element::Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
            .set("stroke", self.state.stroke.to_string())
            .set("stroke-width", self.state.line_width);
        self.push(element);
    }

    fn rect(&mut self, origin: Point, width: f32, height: f32, paint: Paint) {
        let (x, y) = self.flip(origin.offset(0.0, height));
        let element = svg_element::Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", width)
            .set("height", height);
        let element = self.painted(element, paint);
        self.push(element);
    }

    fn circle(&mut self, center: Point, radius: f32, paint: Paint) {
        let (cx, cy) = self.flip(center);
        let element = svg_element::Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", radius);
        let element = self.painted(element, paint);
        self.push(element);
    }

    fn ellipse(&mut self, corner1: Point, corner2: Point, paint: Paint) {
        let (cx, cy) = self.flip(corner1.midpoint(corner2));
        let element = svg_element::Ellipse::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("rx", (corner2.x() - corner1.x()).abs() / 2.0)
            .set("ry", (corner2.y() - corner1.y()).abs() / 2.0);
        let element = self.painted(element, paint);
        self.push(element);
    }

    fn draw_path(&mut self, path: &Path, paint: Paint) {
        if path.is_empty() {
            return;
        }
        let element = svg_element::Path::new().set("d", self.path_data(path));
        let element = self.painted(element, paint);
        self.push(element);
    }

    fn draw_string(&mut self, at: Point, text: &str) {
        self.text(at, text, false);
    }

    fn draw_centred_string(&mut self, at: Point, text: &str) {
        self.text(at, text, true);
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
        debug!(page = self.pages.len(); "Started SVG page");
    }

    fn finalize(&mut self) -> Result<(), SurfaceError> {
        if self.finalized {
            return Err(SurfaceError::AlreadyFinalized);
        }
        self.write_document()?;
        self.finalized = true;
        Ok(())
    }
}
