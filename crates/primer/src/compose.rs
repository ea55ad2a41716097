//! Page assembly for worksheets and answer keys.
//!
//! The composer owns all page-level geometry: the header block, the problem
//! flow with its fixed page breaks, the footer, and the two-column answer
//! key. Visuals are delegated to the [`LayoutEngine`]; the composer only
//! threads the cursor it returns.

use log::{debug, info};

use primer_core::{
    draw::{Font, StyleGuard, Surface},
    geometry::Point,
};

use crate::{config::PageConfig, layout::LayoutEngine, worksheet::Problem};

const TITLE_SIZE: f32 = 20.0;
const SUBTITLE_SIZE: f32 = 12.0;
const SUBTITLE_DROP: f32 = 25.0;
const NAME_DATE_SIZE: f32 = 10.0;
const NAME_DATE_DROP: f32 = 45.0;
/// Distance of the date field's left edge from the right margin.
const DATE_INSET: f32 = 120.0;
const WORKSHEET_DIVIDER_DROP: f32 = 60.0;
const FIRST_PROBLEM_DROP: f32 = 100.0;

const NUMBER_SIZE: f32 = 12.0;
const QUESTION_SIZE: f32 = 11.0;
/// Indent of question text, visuals, and answer blanks.
const QUESTION_INDENT: f32 = 30.0;
const VISUAL_DROP: f32 = 30.0;
const ANSWER_DROP: f32 = 20.0;
const PROBLEM_GAP: f32 = 50.0;

const FOOTER_SIZE: f32 = 8.0;
const FOOTER_DROP: f32 = 20.0;
const FOOTER_TEXT: &str = "Great job! You're doing awesome!";
const ICON_CREDIT: &str = " • Icons by OpenMoji (CC BY-SA 4.0)";

const KEY_DIVIDER_DROP: f32 = 40.0;
const KEY_FIRST_ROW_DROP: f32 = 70.0;
const KEY_ROW_PITCH: f32 = 25.0;
const KEY_TEXT_SIZE: f32 = 11.0;

const NAME_FIELD: &str = "Name: _________________";
const DATE_FIELD: &str = "Date: _________________";
const ANSWER_FIELD: &str = "Answer: _________________";

/// The text shown at the top of both documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    title: String,
    grade: String,
    topic: String,
}

impl Heading {
    pub fn new(
        title: impl Into<String>,
        grade: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            grade: grade.into(),
            topic: topic.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// `Grade {grade} | {topic}`
    pub fn subtitle(&self) -> String {
        format!("Grade {} | {}", self.grade, self.topic)
    }
}

/// Where one problem landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProblemPlacement {
    /// 1-based problem number.
    pub number: usize,
    /// 0-based page index.
    pub page: usize,
    /// Baseline of the problem number and question.
    pub top: f32,
    /// Baseline of the answer blank.
    pub bottom: f32,
}

/// The result of composing a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetLayout {
    placements: Vec<ProblemPlacement>,
    pages: usize,
}

impl WorksheetLayout {
    pub fn placements(&self) -> &[ProblemPlacement] {
        &self.placements
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }
}

/// Where one answer landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerPlacement {
    pub number: usize,
    pub page: usize,
    /// 0 for the left column, 1 for the right.
    pub column: usize,
    pub at: Point,
}

/// The result of composing an answer key.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerKeyLayout {
    placements: Vec<AnswerPlacement>,
    pages: usize,
}

impl AnswerKeyLayout {
    pub fn placements(&self) -> &[AnswerPlacement] {
        &self.placements
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }
}

/// Lays out pages on a surface.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    page: &'a PageConfig,
    engine: LayoutEngine<'a>,
}

impl<'a> Composer<'a> {
    pub fn new(page: &'a PageConfig, engine: LayoutEngine<'a>) -> Self {
        Self { page, engine }
    }

    /// Draws the worksheet: header, every problem in order, and the footer
    /// on the last page. `icon_credit` appends the icon attribution.
    pub fn compose_worksheet(
        &self,
        surface: &mut dyn Surface,
        heading: &Heading,
        problems: &[Problem],
        icon_credit: bool,
    ) -> WorksheetLayout {
        info!(title = heading.title(), problems = problems.len(); "Composing worksheet");

        let mut guard = StyleGuard::new(surface);
        let surface: &mut dyn Surface = &mut *guard;

        let page = self.page;
        let top = page.top();
        let margin = page.margin();
        let per_page = page.problems_per_page().get();
        let text_x = margin + QUESTION_INDENT;

        self.draw_heading(surface, heading.title(), &heading.subtitle());

        surface.set_font(Font::regular(NAME_DATE_SIZE));
        surface.draw_string(Point::new(margin, top - NAME_DATE_DROP), NAME_FIELD);
        surface.draw_string(
            Point::new(page.width() - margin - DATE_INSET, top - NAME_DATE_DROP),
            DATE_FIELD,
        );
        self.draw_divider(surface, top - WORKSHEET_DIVIDER_DROP);

        let mut cursor = top - FIRST_PROBLEM_DROP;
        let mut page_index = 0;
        let mut placements = Vec::with_capacity(problems.len());

        for (i, problem) in problems.iter().enumerate() {
            if i > 0 && i % per_page == 0 {
                surface.new_page();
                page_index += 1;
                cursor = top;
                debug!(page = page_index; "Started worksheet page");
            }

            surface.set_font(Font::bold(NUMBER_SIZE));
            surface.draw_string(Point::new(margin, cursor), &format!("{}.", problem.number()));

            surface.set_font(Font::regular(QUESTION_SIZE));
            surface.draw_string(Point::new(text_x, cursor), problem.question());

            let visual_y = self.engine.place(
                surface,
                problem.visual(),
                Point::new(text_x, cursor - VISUAL_DROP),
            );

            let answer_y = visual_y - ANSWER_DROP;
            surface.set_font(Font::regular(QUESTION_SIZE));
            surface.draw_string(Point::new(text_x, answer_y), ANSWER_FIELD);

            debug!(
                number = problem.number(),
                page = page_index,
                top = cursor,
                bottom = answer_y;
                "Placed problem"
            );
            placements.push(ProblemPlacement {
                number: problem.number(),
                page: page_index,
                top: cursor,
                bottom: answer_y,
            });

            cursor = answer_y - PROBLEM_GAP;
        }

        let footer = if icon_credit {
            format!("{FOOTER_TEXT}{ICON_CREDIT}")
        } else {
            FOOTER_TEXT.to_string()
        };
        surface.set_font(Font::oblique(FOOTER_SIZE));
        surface.draw_centred_string(Point::new(page.centre_x(), margin - FOOTER_DROP), &footer);

        WorksheetLayout {
            placements,
            pages: page_index + 1,
        }
    }

    /// Draws the answer key in two columns per page.
    pub fn compose_answer_key(
        &self,
        surface: &mut dyn Surface,
        heading: &Heading,
        problems: &[Problem],
    ) -> AnswerKeyLayout {
        info!(title = heading.title(), answers = problems.len(); "Composing answer key");

        let mut guard = StyleGuard::new(surface);
        let surface: &mut dyn Surface = &mut *guard;

        let page = self.page;
        let top = page.top();
        let margin = page.margin();
        let per_column = page.answers_per_column().get();
        let column_width = (page.width() - 2.0 * margin) / 2.0;

        self.draw_heading(
            surface,
            &format!("{} - ANSWER KEY", heading.title()),
            &heading.subtitle(),
        );
        self.draw_divider(surface, top - KEY_DIVIDER_DROP);

        let mut origin = top - KEY_FIRST_ROW_DROP;
        let mut page_index = 0;
        let mut placements = Vec::with_capacity(problems.len());

        surface.set_font(Font::regular(KEY_TEXT_SIZE));
        for (i, problem) in problems.iter().enumerate() {
            if i > 0 && i % (2 * per_column) == 0 {
                surface.new_page();
                page_index += 1;
                origin = top;
                debug!(page = page_index; "Started answer key page");
            }

            let column = (i / per_column) % 2;
            let row = i % per_column;
            let at = Point::new(
                margin + column as f32 * column_width,
                origin - row as f32 * KEY_ROW_PITCH,
            );
            surface.draw_string(at, &format!("{}. {}", problem.number(), problem.answer()));

            placements.push(AnswerPlacement {
                number: problem.number(),
                page: page_index,
                column,
                at,
            });
        }

        AnswerKeyLayout {
            placements,
            pages: page_index + 1,
        }
    }

    fn draw_heading(&self, surface: &mut dyn Surface, title: &str, subtitle: &str) {
        let centre_x = self.page.centre_x();
        let top = self.page.top();

        surface.set_font(Font::bold(TITLE_SIZE));
        surface.draw_centred_string(Point::new(centre_x, top), title);

        surface.set_font(Font::regular(SUBTITLE_SIZE));
        surface.draw_centred_string(Point::new(centre_x, top - SUBTITLE_DROP), subtitle);
    }

    fn draw_divider(&self, surface: &mut dyn Surface, y: f32) {
        let margin = self.page.margin();
        surface.set_line_width(1.0);
        surface.line(
            Point::new(margin, y),
            Point::new(self.page.width() - margin, y),
        );
    }
}

#[cfg(test)]
mod tests {
    use primer_core::draw::{DrawCommand, RecordingSurface};

    use super::*;
    use crate::{config::AppConfig, resolver::Resolver, visual::VisualSpec};

    fn problems(count: usize) -> Vec<Problem> {
        (1..=count)
            .map(|number| Problem::new(number, format!("Question {number}"), format!("{number}"), None))
            .collect()
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands.iter().filter_map(DrawCommand::text).collect()
    }

    fn heading() -> Heading {
        Heading::new("Counting", "1", "Numbers to 10")
    }

    #[test]
    fn test_header_positions() {
        let config = AppConfig::default();
        let engine = LayoutEngine::new(config.layout(), Resolver::default());
        let composer = Composer::new(config.page(), engine);
        let mut surface = RecordingSurface::new();

        composer.compose_worksheet(&mut surface, &heading(), &[], false);

        let commands = surface.commands();
        assert!(commands.contains(&DrawCommand::Text {
            at: Point::new(306.0, 738.0),
            text: "Counting".to_string(),
            centred: true,
        }));
        assert!(commands.contains(&DrawCommand::Text {
            at: Point::new(306.0, 713.0),
            text: "Grade 1 | Numbers to 10".to_string(),
            centred: true,
        }));
        assert!(commands.contains(&DrawCommand::Text {
            at: Point::new(438.0, 693.0),
            text: DATE_FIELD.to_string(),
            centred: false,
        }));
        assert!(commands.contains(&DrawCommand::Line {
            from: Point::new(54.0, 678.0),
            to: Point::new(558.0, 678.0),
        }));
    }

    #[test]
    fn test_problem_without_visual_spacing() {
        let config = AppConfig::default();
        let engine = LayoutEngine::new(config.layout(), Resolver::default());
        let composer = Composer::new(config.page(), engine);
        let mut surface = RecordingSurface::new();

        let layout = composer.compose_worksheet(&mut surface, &heading(), &problems(2), false);

        let placements = layout.placements();
        assert_eq!(placements[0].top, 638.0);
        assert_eq!(placements[0].bottom, 638.0 - 30.0 - 20.0);
        assert_eq!(placements[1].top, 588.0 - 50.0);
    }

    #[test]
    fn test_problem_with_visual_uses_engine_cursor() {
        let config = AppConfig::default();
        let engine = LayoutEngine::new(config.layout(), Resolver::default());
        let composer = Composer::new(config.page(), engine);
        let mut surface = RecordingSurface::new();
        let problem = Problem::new(
            1,
            "How many?",
            "12",
            Some(VisualSpec::array("star", 3, 4).unwrap()),
        );

        let layout = composer.compose_worksheet(&mut surface, &heading(), &[problem], false);

        // Visual at 608, array returns 608 - 105 - 20.
        assert_eq!(layout.placements()[0].bottom, 483.0 - 20.0);
    }

    #[test]
    fn test_sixth_problem_starts_page_two() {
        let config = AppConfig::default();
        let engine = LayoutEngine::new(config.layout(), Resolver::default());
        let composer = Composer::new(config.page(), engine);
        let mut surface = RecordingSurface::new();

        let layout = composer.compose_worksheet(&mut surface, &heading(), &problems(7), false);

        assert_eq!(layout.page_count(), 2);
        let pages: Vec<_> = layout.placements().iter().map(|p| p.page).collect();
        assert_eq!(pages, vec![0, 0, 0, 0, 0, 1, 1]);
        assert_eq!(layout.placements()[5].top, 738.0);
        assert_eq!(surface.page_count(), 2);

        let second_page = texts(surface.pages()[1]);
        assert_eq!(second_page.first(), Some(&"6."));
    }

    #[test]
    fn test_footer_only_on_last_page_with_optional_credit() {
        let config = AppConfig::default();
        let engine = LayoutEngine::new(config.layout(), Resolver::default());
        let composer = Composer::new(config.page(), engine);

        let mut plain = RecordingSurface::new();
        composer.compose_worksheet(&mut plain, &heading(), &problems(6), false);
        let pages = plain.pages();
        assert!(!texts(pages[0]).contains(&FOOTER_TEXT));
        assert_eq!(texts(pages[1]).last(), Some(&FOOTER_TEXT));
        assert!(plain.commands().contains(&DrawCommand::Text {
            at: Point::new(306.0, 34.0),
            text: FOOTER_TEXT.to_string(),
            centred: true,
        }));

        let mut credited = RecordingSurface::new();
        composer.compose_worksheet(&mut credited, &heading(), &problems(1), true);
        let last = texts(credited.commands()).last().map(|text| text.to_string());
        assert_eq!(
            last.as_deref(),
            Some("Great job! You're doing awesome! • Icons by OpenMoji (CC BY-SA 4.0)")
        );
    }

    #[test]
    fn test_answer_key_columns_and_pages() {
        let config = AppConfig::default();
        let engine = LayoutEngine::new(config.layout(), Resolver::default());
        let composer = Composer::new(config.page(), engine);
        let mut surface = RecordingSurface::new();

        let layout = composer.compose_answer_key(&mut surface, &heading(), &problems(45));

        assert_eq!(layout.page_count(), 2);
        assert_eq!(surface.page_count(), 2);

        let placements = layout.placements();
        assert_eq!(placements[0].at, Point::new(54.0, 668.0));
        assert_eq!(placements[19].at, Point::new(54.0, 668.0 - 19.0 * 25.0));
        // Right column shares the page origin.
        assert_eq!(placements[20].column, 1);
        assert_eq!(placements[20].at, Point::new(306.0, 668.0));
        // Third column block starts page two at the top margin.
        assert_eq!(placements[40].page, 1);
        assert_eq!(placements[40].column, 0);
        assert_eq!(placements[40].at, Point::new(54.0, 738.0));

        let first_page = texts(surface.pages()[0]);
        assert_eq!(first_page[0], "Counting - ANSWER KEY");
        assert!(first_page.contains(&"1. 1"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let config = AppConfig::default();
        let engine = LayoutEngine::new(config.layout(), Resolver::default());
        let composer = Composer::new(config.page(), engine);
        let problems = vec![
            Problem::new(1, "Count", "7", Some(VisualSpec::countable("apple", 7))),
            Problem::new(2, "Add", "5", Some(VisualSpec::grouped("cat", [3, 2]).unwrap())),
            Problem::new(3, "Shade", "1/4", Some(VisualSpec::fraction_circle(4, 1).unwrap())),
        ];

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        let first_layout = composer.compose_worksheet(&mut first, &heading(), &problems, false);
        let second_layout = composer.compose_worksheet(&mut second, &heading(), &problems, false);

        assert_eq!(first.commands(), second.commands());
        assert_eq!(first_layout, second_layout);
    }
}
