//! TerminalRenderer: puts framebuffers on a real terminal.
//!
//! Keeps a copy of the last presented frame and rewrites only the rows that
//! changed since then. A size change or [`TerminalRenderer::invalidate`]
//! forces a full repaint.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    out: io::Stdout,
    shown: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            scratch: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.scratch.clear();
        self.scratch.queue(terminal::EnterAlternateScreen)?;
        self.scratch.queue(cursor::Hide)?;
        self.scratch.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch.queue(ResetColor)?;
        self.scratch.queue(SetAttribute(Attribute::Reset))?;
        self.scratch.queue(terminal::EnableLineWrap)?;
        self.scratch.queue(cursor::Show)?;
        self.scratch.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next [`TerminalRenderer::present`].
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `frame`, writing only what differs from the previous frame.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.scratch.clear();
        let rows = encode_frame(self.shown.as_ref(), frame, &mut self.scratch)?;
        if rows > 0 {
            self.flush()?;
        }
        match &mut self.shown {
            Some(shown) => shown.clone_from(frame),
            None => self.shown = Some(frame.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Rows of `next` that must be rewritten to turn `prev` into `next`.
///
/// Every row when there is no previous frame or its size differs.
pub fn changed_rows<'a>(
    prev: Option<&'a FrameBuffer>,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = u16> + 'a {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    (0..next.height()).filter(move |&y| prev.map_or(true, |p| p.row(y) != next.row(y)))
}

/// Queue the commands that turn `prev` into `next` onto `out`.
///
/// Returns the number of rows written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<usize> {
    let full = prev.map_or(true, |p| p.width() != next.width() || p.height() != next.height());
    if full {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<Style> = None;
    let mut rows = 0;
    for y in changed_rows(prev, next) {
        out.queue(cursor::MoveTo(0, y))?;
        for glyph in next.row(y) {
            if style != Some(glyph.style) {
                queue_style(out, glyph.style)?;
                style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
        rows += 1;
    }

    if rows > 0 {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(rows)
}

fn queue_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[&str]) -> FrameBuffer {
        let width = rows.first().map_or(0, |r| r.chars().count()) as u16;
        let mut fb = FrameBuffer::new(width, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            fb.put_str(0, y as u16, row, Style::PLAIN);
        }
        fb
    }

    #[test]
    fn first_frame_writes_every_row() {
        let next = frame(&["ab", "cd", "ef"]);
        assert_eq!(changed_rows(None, &next).collect::<Vec<_>>(), vec![0, 1, 2]);

        let mut out = Vec::new();
        assert_eq!(encode_frame(None, &next, &mut out).unwrap(), 3);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ab") && text.contains("ef"));
    }

    #[test]
    fn only_changed_rows_are_written() {
        let prev = frame(&["ab", "cd", "ef"]);
        let next = frame(&["ab", "cX", "ef"]);
        assert_eq!(changed_rows(Some(&prev), &next).collect::<Vec<_>>(), vec![1]);

        let mut out = Vec::new();
        assert_eq!(encode_frame(Some(&prev), &next, &mut out).unwrap(), 1);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("cX"));
        assert!(!text.contains("ab"));
    }

    #[test]
    fn style_change_counts_as_change() {
        let prev = frame(&["ab"]);
        let mut next = prev.clone();
        next.put(0, 0, 'a', Style::PLAIN.bold());
        assert_eq!(changed_rows(Some(&prev), &next).count(), 1);
    }

    #[test]
    fn identical_frame_writes_nothing() {
        let prev = frame(&["ab", "cd"]);
        let mut out = Vec::new();
        assert_eq!(encode_frame(Some(&prev), &prev.clone(), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn size_change_repaints_everything() {
        let prev = frame(&["ab", "cd"]);
        let next = frame(&["abc", "cde"]);
        assert_eq!(changed_rows(Some(&prev), &next).count(), 2);
    }
}
