use coachgg_schema::{BlockStyle, ReportBlock};

use crate::config::PageConfig;

pub const EXPORT_SUFFIX: &str = "_esports_profile";

/// Average glyph width as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.5;

/// Something that can place styled lines on pages (a PDF writer, a text buffer...).
pub trait PageSurface {
    fn begin_page(&mut self, number: usize);

    /// Draws `line` with its top at `cursor_y` and returns the cursor for the next line.
    fn draw_line(&mut self, cursor_y: f32, line: &str, style: &BlockStyle) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
}

impl From<&PageConfig> for PageGeometry {
    fn from(page: &PageConfig) -> Self {
        Self {
            width_pt: page.width_pt,
            height_pt: page.height_pt,
            margin_pt: page.margin_pt,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width_pt - self.margin_pt * 2.0
    }

    /// Lowest y a line may reach before it moves to a fresh page.
    pub fn bottom(&self) -> f32 {
        self.height_pt - self.margin_pt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutSummary {
    pub pages: usize,
    pub lines: usize,
}

/// Greedy word wrap. Words wider than a whole line are split.
pub fn wrap_text(text: &str, font_size_pt: f32, max_width_pt: f32) -> Vec<String> {
    let glyph = (font_size_pt * GLYPH_WIDTH_RATIO).max(f32::EPSILON);
    let max_chars = ((max_width_pt / glyph).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(max_chars);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let needed = if current_len == 0 { chars.len() } else { current_len + 1 + chars.len() };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars.iter());
        current_len += chars.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

pub fn layout<S: PageSurface + ?Sized>(
    blocks: &[ReportBlock],
    geometry: &PageGeometry,
    surface: &mut S,
) -> LayoutSummary {
    let top = geometry.margin_pt;
    let bottom = geometry.bottom();
    let width = geometry.content_width();

    let mut summary = LayoutSummary { pages: 1, lines: 0 };
    surface.begin_page(1);
    let mut y = top;

    for block in blocks {
        let style = &block.style;
        if y > top {
            y += style.space_before_pt;
        }
        for line in wrap_text(&block.text, style.font_size_pt, width) {
            // A line taller than the page still goes on an empty page.
            if y + style.leading_pt > bottom && y > top {
                summary.pages += 1;
                surface.begin_page(summary.pages);
                y = top;
            }
            y = surface.draw_line(y, &line, style);
            summary.lines += 1;
        }
    }

    summary
}

/// Plain-text page surface with a separator line per page.
#[derive(Debug, Default)]
pub struct TextSurface {
    out: String,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl PageSurface for TextSurface {
    fn begin_page(&mut self, number: usize) {
        if number > 1 {
            self.out.push('\n');
        }
        self.out.push_str(&format!("--- Page {number} ---\n"));
    }

    fn draw_line(&mut self, cursor_y: f32, line: &str, style: &BlockStyle) -> f32 {
        self.out.push_str(line);
        self.out.push('\n');
        cursor_y + style.leading_pt
    }
}

pub fn export_file_name(username: &str) -> String {
    export_file_name_with_extension(username, "pdf")
}

/// `{username}_esports_profile.{extension}`, with path separators and other
/// characters that are invalid in file names replaced by `_`.
pub fn export_file_name_with_extension(username: &str, extension: &str) -> String {
    let stem: String = username
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{stem}{EXPORT_SUFFIX}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use coachgg_schema::{BlockKind, FontWeight, Rgb};

    fn style(leading_pt: f32, space_before_pt: f32) -> BlockStyle {
        BlockStyle {
            font_size_pt: 10.0,
            color: Rgb(0, 0, 0),
            weight: FontWeight::Normal,
            leading_pt,
            space_before_pt,
        }
    }

    fn block(text: &str, style: BlockStyle) -> ReportBlock {
        ReportBlock {
            kind: BlockKind::Field,
            text: text.to_string(),
            style,
        }
    }

    #[derive(Default)]
    struct Recorder {
        pages: Vec<usize>,
        draws: Vec<(usize, f32, String)>,
    }

    impl PageSurface for Recorder {
        fn begin_page(&mut self, number: usize) {
            self.pages.push(number);
        }

        fn draw_line(&mut self, cursor_y: f32, line: &str, style: &BlockStyle) -> f32 {
            let page = *self.pages.last().unwrap();
            self.draws.push((page, cursor_y, line.to_string()));
            cursor_y + style.leading_pt
        }
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        // 10pt font -> 5pt glyphs -> 10 chars in 50pt.
        let lines = wrap_text("alpha beta gamma delta", 10.0, 50.0);
        assert_eq!(lines, vec!["alpha beta", "gamma", "delta"]);
    }

    #[test]
    fn wrap_splits_overlong_words() {
        let lines = wrap_text("ab abcdefghijkl", 10.0, 25.0);
        assert_eq!(lines, vec!["ab", "abcde", "fghij", "kl"]);
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_text("   ", 10.0, 100.0).is_empty());
    }

    #[test]
    fn page_break_when_cursor_passes_bottom() {
        // Content area runs from y=10 to y=50; 10pt lines fit four per page.
        let geometry = PageGeometry {
            width_pt: 200.0,
            height_pt: 60.0,
            margin_pt: 10.0,
        };
        let blocks: Vec<ReportBlock> = (0..6).map(|i| block(&format!("line {i}"), style(10.0, 0.0))).collect();

        let mut surface = Recorder::default();
        let summary = layout(&blocks, &geometry, &mut surface);

        assert_eq!(summary, LayoutSummary { pages: 2, lines: 6 });
        assert_eq!(surface.pages, vec![1, 2]);
        assert_eq!(surface.draws[3], (1, 40.0, "line 3".to_string()));
        assert_eq!(surface.draws[4], (2, 10.0, "line 4".to_string()));
    }

    #[test]
    fn space_before_is_skipped_at_page_top() {
        let geometry = PageGeometry {
            width_pt: 200.0,
            height_pt: 200.0,
            margin_pt: 10.0,
        };
        let blocks = vec![block("first", style(10.0, 30.0)), block("second", style(10.0, 30.0))];

        let mut surface = Recorder::default();
        layout(&blocks, &geometry, &mut surface);

        assert_eq!(surface.draws[0].1, 10.0);
        assert_eq!(surface.draws[1].1, 50.0);
    }

    #[test]
    fn text_surface_marks_pages() {
        let geometry = PageGeometry {
            width_pt: 200.0,
            height_pt: 40.0,
            margin_pt: 10.0,
        };
        let blocks = vec![block("one", style(10.0, 0.0)), block("two", style(10.0, 0.0)), block("three", style(10.0, 0.0))];

        let mut surface = TextSurface::new();
        layout(&blocks, &geometry, &mut surface);

        assert_eq!(
            surface.into_string(),
            "--- Page 1 ---\none\ntwo\n\n--- Page 2 ---\nthree\n"
        );
    }

    #[test]
    fn export_names_follow_username() {
        assert_eq!(export_file_name("ace"), "ace_esports_profile.pdf");
        assert_eq!(
            export_file_name_with_extension("team/ace", "txt"),
            "team_ace_esports_profile.txt"
        );
    }
}
