//! Locates titled report sections that are followed by a bordered table.
//!
//! Sections look like this, with or without the blank line between the
//! underline and the table:
//!
//! ```text
//! 3.1 Section Title
//! -----------------
//!
//! +-----------+-----------+
//! | col1_name | col2_name |
//! +-----------+-----------+
//! | col1_val1 | col2_val1 |
//! +-----------+-----------+
//! ```

/// A section title and the raw text of the table that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSection<'a> {
    /// Heading with its numeric prefix and surrounding whitespace removed.
    pub title: &'a str,
    /// Table text from the first `+` through the end of its last line.
    pub block: &'a str,
}

/// Scans `text` lazily for sections with tables, in document order.
pub fn scan_sections(text: &str) -> SectionScanner<'_> {
    SectionScanner::new(text)
}

/// Iterator over the table-bearing sections of a report.
///
/// A clone resumes from the same position, and scanning the same text again
/// always yields the same sections.
#[derive(Debug, Clone)]
pub struct SectionScanner<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> SectionScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    fn line_at(&self, start: usize) -> Option<Line<'a>> {
        if start >= self.text.len() {
            return None;
        }

        let rest = &self.text[start..];
        let (raw, next) = match rest.find('\n') {
            Some(offset) => (&rest[..offset], start + offset + 1),
            None => (rest, self.text.len()),
        };
        let content = raw.strip_suffix('\r').unwrap_or(raw);

        Some(Line {
            start,
            end: start + content.len(),
            next,
            content,
        })
    }

    /// Reads a whole section introduced by `heading`, returning it with the
    /// offset of the first line after its table.
    fn section_at(&self, heading: &Line<'a>) -> Option<(RawSection<'a>, usize)> {
        let title = heading_title(heading.content)?;

        let underline = self.line_at(heading.next)?;
        if !is_underline(underline.content) {
            return None;
        }

        let mut cursor = self.line_at(underline.next)?;
        while cursor.content.trim().is_empty() {
            cursor = self.line_at(cursor.next)?;
        }
        if !cursor.content.starts_with('+') {
            return None;
        }

        let block_start = cursor.start;
        let mut block_end = cursor.trimmed_end();
        let mut resume = cursor.next;
        while let Some(line) = self.line_at(resume) {
            if !line.content.starts_with(['+', '|']) {
                break;
            }
            block_end = line.trimmed_end();
            resume = line.next;
        }

        let section = RawSection {
            title,
            block: &self.text[block_start..block_end],
        };
        Some((section, resume))
    }
}

impl<'a> Iterator for SectionScanner<'a> {
    type Item = RawSection<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.line_at(self.position) {
            if let Some((section, resume)) = self.section_at(&line) {
                self.position = resume;
                return Some(section);
            }
            self.position = line.next;
        }

        None
    }
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    start: usize,
    end: usize,
    next: usize,
    content: &'a str,
}

impl Line<'_> {
    /// End offset with trailing spaces and tabs cut off.
    fn trimmed_end(&self) -> usize {
        self.start + self.content.trim_end().len()
    }
}

fn is_underline(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch == '-')
}

/// Strips a leading section number such as `3.1` or `1.` from a heading line.
fn heading_title(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_underline(trimmed) || trimmed.starts_with(['+', '|']) {
        return None;
    }

    let unnumbered = trimmed.trim_start_matches(|ch: char| ch.is_ascii_digit() || ch == '.');
    let title = if unnumbered.len() < trimmed.len() && unnumbered.starts_with(char::is_whitespace)
    {
        unnumbered.trim_start()
    } else if unnumbered.is_empty() {
        return None;
    } else {
        trimmed
    };

    Some(title)
}
