//! Worksheets: problems plus the operations that render them.

use std::path::Path;

use log::{debug, info};

use primer_core::draw::Surface;

use crate::{
    PrimerError,
    compose::{AnswerKeyLayout, Composer, Heading, WorksheetLayout},
    config::AppConfig,
    export::SvgSurface,
    icons::{DirectoryIconStore, IconStore},
    layout::LayoutEngine,
    resolver::Resolver,
    visual::VisualSpec,
};

/// One numbered question with its answer and optional visual.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    number: usize,
    question: String,
    answer: String,
    visual: Option<VisualSpec>,
}

impl Problem {
    pub(crate) fn new(
        number: usize,
        question: impl Into<String>,
        answer: impl Into<String>,
        visual: Option<VisualSpec>,
    ) -> Self {
        Self {
            number,
            question: question.into(),
            answer: answer.into(),
            visual,
        }
    }

    /// 1-based position in the worksheet.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn visual(&self) -> Option<&VisualSpec> {
        self.visual.as_ref()
    }
}

/// A worksheet under construction.
///
/// Problems are appended in order and never change afterwards. Rendering
/// borrows the worksheet immutably, so the worksheet and its answer key
/// always describe the same problems.
///
/// # Examples
///
/// ```rust,no_run
/// use primer::{Worksheet, visual::VisualSpec};
///
/// let mut sheet = Worksheet::new("Food Fun", "1", "Addition within 10", "food");
/// sheet.add_problem("Count all the apples:", "7 apples", Some(VisualSpec::countable("apple", 7)));
/// sheet.add_problem("What is 3 + 4?", "7", None);
///
/// sheet.generate("food.svg").expect("worksheet written");
/// sheet.generate_answer_key("food_answers.svg").expect("answer key written");
/// ```
#[derive(Debug)]
pub struct Worksheet {
    heading: Heading,
    theme: String,
    config: AppConfig,
    icons: Option<Box<dyn IconStore>>,
    problems: Vec<Problem>,
}

impl Worksheet {
    /// Creates an empty worksheet with default configuration and no icon
    /// store.
    pub fn new(
        title: impl Into<String>,
        grade: impl Into<String>,
        topic: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            heading: Heading::new(title, grade, topic),
            theme: theme.into(),
            config: AppConfig::default(),
            icons: None,
            problems: Vec::new(),
        }
    }

    /// Replaces the configuration. A configured icon directory attaches a
    /// [`DirectoryIconStore`] over it.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        if let Some(directory) = config.icons().directory() {
            self.icons = Some(Box::new(DirectoryIconStore::new(directory)));
        }
        self.config = config;
        self
    }

    /// Attaches an icon store consulted before the shape library.
    pub fn with_icon_store(mut self, store: impl IconStore + 'static) -> Self {
        self.icons = Some(Box::new(store));
        self
    }

    /// Appends a problem and returns its number.
    pub fn add_problem(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        visual: Option<VisualSpec>,
    ) -> usize {
        let number = self.problems.len() + 1;
        let problem = Problem::new(number, question, answer, visual);
        debug!(
            number,
            visual = problem.visual().map_or("none", VisualSpec::kind);
            "Added problem"
        );
        self.problems.push(problem);
        number
    }

    pub fn heading(&self) -> &Heading {
        &self.heading
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Whether an attached icon store is usable.
    pub fn icons_enabled(&self) -> bool {
        self.icons.as_ref().is_some_and(|store| store.enabled())
    }

    /// Draws the worksheet onto `surface` without finalizing it.
    pub fn render_worksheet(&self, surface: &mut dyn Surface) -> WorksheetLayout {
        self.composer()
            .compose_worksheet(surface, &self.heading, &self.problems, self.icons_enabled())
    }

    /// Draws the answer key onto `surface` without finalizing it.
    pub fn render_answer_key(&self, surface: &mut dyn Surface) -> AnswerKeyLayout {
        self.composer()
            .compose_answer_key(surface, &self.heading, &self.problems)
    }

    /// Renders the worksheet to an SVG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PrimerError::Export`] if the file cannot be written. The
    /// target is left untouched on failure.
    pub fn generate(&self, path: impl AsRef<Path>) -> Result<WorksheetLayout, PrimerError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(), theme = self.theme; "Generating worksheet");

        let mut surface = self.svg_surface(path);
        let layout = self.render_worksheet(&mut surface);
        surface.finalize()?;

        info!(pages = layout.page_count(); "Worksheet generated");
        Ok(layout)
    }

    /// Renders the answer key to an SVG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PrimerError::Export`] if the file cannot be written.
    pub fn generate_answer_key(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<AnswerKeyLayout, PrimerError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Generating answer key");

        let mut surface = self.svg_surface(path);
        let layout = self.render_answer_key(&mut surface);
        surface.finalize()?;

        info!(pages = layout.page_count(); "Answer key generated");
        Ok(layout)
    }

    fn composer(&self) -> Composer<'_> {
        let resolver = Resolver::new(self.icons.as_deref());
        let engine = LayoutEngine::new(self.config.layout(), resolver);
        Composer::new(self.config.page(), engine)
    }

    fn svg_surface(&self, path: &Path) -> SvgSurface {
        let page = self.config.page();
        SvgSurface::new(path, page.width(), page.height())
    }
}
