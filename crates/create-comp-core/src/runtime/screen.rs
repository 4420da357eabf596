//! Frames and the screens that display them

use console::{measure_text_width, strip_ansi_codes, Term};
use std::io;

/// Caret position inside a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// One complete render of a prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
    cursor: Option<Cursor>,
}

impl Frame {
    /// Split styled text into lines
    pub fn new(text: impl AsRef<str>) -> Self {
        Self::from_lines(text.as_ref().split('\n').map(str::to_string).collect())
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            cursor: None,
        }
    }

    /// Place the caret; the screen shows it there instead of below the frame
    pub fn with_cursor(mut self, row: usize, col: usize) -> Self {
        self.cursor = Some(Cursor { row, col });
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Text with colour and style codes stripped
    pub fn plain(&self) -> String {
        strip_ansi_codes(&self.text()).into_owned()
    }
}

/// Where prompts draw
pub trait Screen {
    /// Replace whatever frame was drawn last with `frame`
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;

    fn hide_cursor(&mut self) -> io::Result<()>;

    fn show_cursor(&mut self) -> io::Result<()>;

    /// Keep the last frame on screen and move below it
    fn finish(&mut self) -> io::Result<()>;
}

/// A [`Screen`] on a real terminal
#[derive(Debug)]
pub struct TermScreen {
    term: Term,
    /// Physical rows taken by the last frame
    height: usize,
    /// Rows between the caret and the line below the frame
    caret_up: usize,
}

impl TermScreen {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            height: 0,
            caret_up: 0,
        }
    }

    pub fn stderr() -> Self {
        Self::new(Term::stderr())
    }

    fn rows(&self, line: &str) -> usize {
        let cols = usize::from(self.term.size().1).max(1);
        measure_text_width(line).div_ceil(cols).max(1)
    }

    fn return_to_bottom(&mut self) -> io::Result<()> {
        if self.caret_up > 0 {
            self.term.move_cursor_down(self.caret_up)?;
            self.caret_up = 0;
        }
        self.term.write_str("\r")
    }
}

impl Screen for TermScreen {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.return_to_bottom()?;
        if self.height > 0 {
            self.term.clear_last_lines(self.height)?;
        }

        // CR LF keeps lines aligned even while the tty is in raw mode
        for line in frame.lines() {
            self.term.write_str(line)?;
            self.term.write_str("\r\n")?;
        }
        self.height = frame.lines().iter().map(|line| self.rows(line)).sum();

        if let Some(cursor) = frame.cursor() {
            let up: usize = frame.lines()[cursor.row.min(frame.lines().len().saturating_sub(1))..]
                .iter()
                .map(|line| self.rows(line))
                .sum();
            if up > 0 {
                self.term.move_cursor_up(up)?;
            }
            if cursor.col > 0 {
                self.term.move_cursor_right(cursor.col)?;
            }
            self.caret_up = up;
        }

        self.term.flush()
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.term.hide_cursor()
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.term.show_cursor()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.return_to_bottom()?;
        self.height = 0;
        self.term.flush()
    }
}

/// A [`Screen`] that records frames, for tests and headless hosts
#[derive(Debug, Default)]
pub struct MemoryScreen {
    pub frames: Vec<Frame>,
    pub cursor_hidden: bool,
    pub finished: usize,
}

impl MemoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Plain text of the most recent frame
    pub fn last_plain(&self) -> String {
        self.last().map(Frame::plain).unwrap_or_default()
    }
}

impl Screen for MemoryScreen {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.cursor_hidden = true;
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.cursor_hidden = false;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_splits_lines() {
        let frame = Frame::new("one\ntwo\n");
        assert_eq!(frame.lines(), &["one", "two", ""]);
        assert_eq!(frame.text(), "one\ntwo\n");
        assert!(frame.cursor().is_none());
    }

    #[test]
    fn test_plain_strips_styles() {
        let frame = Frame::new("\u{1b}[32mgreen\u{1b}[0m text");
        assert_eq!(frame.plain(), "green text");
    }

    #[test]
    fn test_cursor_is_kept() {
        let frame = Frame::new("name: bob").with_cursor(0, 9);
        assert_eq!(frame.cursor(), Some(Cursor { row: 0, col: 9 }));
    }

    #[test]
    fn test_memory_screen_records() {
        let mut screen = MemoryScreen::new();
        screen.hide_cursor().unwrap();
        screen.draw(&Frame::new("a")).unwrap();
        screen.draw(&Frame::new("b")).unwrap();
        screen.finish().unwrap();
        screen.show_cursor().unwrap();

        assert_eq!(screen.frames.len(), 2);
        assert_eq!(screen.last_plain(), "b");
        assert!(!screen.cursor_hidden);
        assert_eq!(screen.finished, 1);
    }
}
