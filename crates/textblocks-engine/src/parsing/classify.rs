use regex::Regex;
use std::sync::OnceLock;

fn leading_digits() -> &'static Regex {
    static LEADING_DIGITS: OnceLock<Regex> = OnceLock::new();
    LEADING_DIGITS.get_or_init(|| Regex::new(r"^\d+").expect("Invalid leading digits regex"))
}

/// Decides which lines of a document are titles.
///
/// A title is a line starting with digits that is set apart by blank lines.
/// Lines are held in trimmed form so blank checks and the digit test work on
/// content only.
pub struct TitleClassifier<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TitleClassifier<'a> {
    pub fn new(lines: &[&'a str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.trim()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Trimmed text of the line at `index`
    pub fn line(&self, index: usize) -> &'a str {
        self.lines[index]
    }

    pub fn is_blank(&self, index: usize) -> bool {
        self.lines[index].is_empty()
    }

    /// Number of consecutive blank lines directly above `index`
    pub fn blank_lines_before(&self, index: usize) -> usize {
        self.lines[..index]
            .iter()
            .rev()
            .take_while(|line| line.is_empty())
            .count()
    }

    /// Number of consecutive blank lines directly below `index`
    pub fn blank_lines_after(&self, index: usize) -> usize {
        self.lines[index + 1..]
            .iter()
            .take_while(|line| line.is_empty())
            .count()
    }

    /// Apply the title rule to the line at `index`.
    ///
    /// The first line only needs a blank line after it and the last line only
    /// needs one before it; interior lines need both. The first-line check
    /// wins for a single-line document, so a lone line is never a title.
    pub fn is_title(&self, index: usize) -> bool {
        let line = self.lines[index];
        if line.is_empty() || !leading_digits().is_match(line) {
            return false;
        }

        let before = self.blank_lines_before(index);
        let after = self.blank_lines_after(index);

        if index == 0 {
            after >= 1
        } else if index == self.lines.len() - 1 {
            before >= 1
        } else {
            before >= 1 && after >= 1
        }
    }
}
