use std::{io::{self, Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyEvent, KeyEventKind, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    current_msg: Option<Vec<String>>,
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout(), current_msg: None })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn read_key_blocking(&self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                if ev.kind != KeyEventKind::Release {
                    return Ok(ev);
                }
            }
        }
    }

    /// Waits up to `timeout` for a key press.
    pub fn poll_key(&self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !poll(timeout)? {
            return Ok(None);
        }
        match read()? {
            Event::Key(ev) if ev.kind != KeyEventKind::Release => Ok(Some(ev)),
            _ => Ok(None),
        }
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    /// Draws a `width` x `height` frame at `top_left`, on `bg`.
    pub fn draw_borders(&mut self, top_left: Coords, width: TermInt, height: TermInt, bg: Color) -> io::Result<()> {
        let (x0, y0) = top_left;
        let end_x = x0 + width - 1;
        let end_y = y0 + height - 1;

        let horizontal: String = (0..width)
            .map(|x| if x == 0 || x == width - 1 { '+' } else { '-' })
            .collect();
        self.print_at((x0, y0), &horizontal, None, Some(bg))?;
        self.print_at((x0, end_y), &horizontal, None, Some(bg))?;

        for y in y0 + 1..end_y {
            self.print_at((x0, y), "|", None, Some(bg))?;
            self.print_at((end_x, y), "|", None, Some(bg))?;
        }

        Ok(())
    }

    /// Shows a centred panel; it stays up across redraws until hidden.
    pub fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        self.current_msg = Some(lines.iter().map(|l| l.to_string()).collect());
        self.draw_message()?;
        self.flush()
    }

    pub fn hide_message(&mut self) {
        self.current_msg = None;
    }

    /// Redraws the current message, if any, over whatever is on screen.
    pub fn draw_message(&mut self) -> io::Result<()> {
        let lines = match &self.current_msg {
            Some(lines) => lines.clone(),
            None => return Ok(()),
        };

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let top_left = (
            (self.width / 2).saturating_sub(msg_width / 2),
            (self.height / 2).saturating_sub(msg_height / 2),
        );

        let blank = " ".repeat(msg_width as usize);
        self.print_at(top_left, &blank, Some(Color::White), Some(Color::Black))?;
        self.print_at((top_left.0, top_left.1 + msg_height - 1), &blank, Some(Color::White), Some(Color::Black))?;

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            self.print_at((top_left.0, y), &padded_line, Some(Color::White), Some(Color::Black))?;
        }

        Ok(())
    }

    pub fn print_at(&mut self, pos: Coords, text: &str, fg: Option<Color>, bg: Option<Color>) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(fg.unwrap_or(Color::Reset)),
            style::SetBackgroundColor(bg.unwrap_or(Color::Reset)),
            style::Print(text),
            style::ResetColor
        )
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
