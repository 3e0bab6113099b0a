//! Keyboard input handling and interactive loop.
//!
//! This module maps keyboard events to tree actions and runs the
//! interactive terminal loop. The picker draws on stderr so stdout stays
//! free for the confirmed labels.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::terminal::{truncate_to_width, TerminalCapabilities};
use crate::ui::theme::{colors, glyph, icons, icons_ascii, named_color, paint};

use super::menu::{TreeAction, TreeMenu};

/// Redraw interval while no search is pending
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent, searching: bool) -> Option<TreeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(TreeAction::Quit);
    }

    if searching {
        return match key.code {
            KeyCode::Up => Some(TreeAction::Up),
            KeyCode::Down => Some(TreeAction::Down),
            KeyCode::Enter => Some(TreeAction::EndSearch),
            KeyCode::Esc => Some(TreeAction::ClearSearch),
            KeyCode::Backspace => Some(TreeAction::SearchBackspace),
            KeyCode::Char(c) => Some(TreeAction::SearchInput(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('/') => Some(TreeAction::StartSearch),
        KeyCode::Char('c') => Some(TreeAction::ClearSelection),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Run the tree menu interactively.
///
/// Returns the projected labels if confirmed, None if quit.
pub fn run_interactive(
    menu: &mut TreeMenu,
    caps: &TerminalCapabilities,
    title: &str,
) -> io::Result<Option<Vec<String>>> {
    use crossterm::{cursor, execute, terminal};

    terminal::enable_raw_mode()?;
    let mut out = io::stderr();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(menu, caps, title, &mut out);

    // Restore the terminal even when the loop failed
    let restored = execute!(out, cursor::Show, terminal::LeaveAlternateScreen)
        .and_then(|_| terminal::disable_raw_mode());

    let result = result?;
    restored?;
    Ok(result)
}

fn event_loop(
    menu: &mut TreeMenu,
    caps: &TerminalCapabilities,
    title: &str,
    out: &mut impl Write,
) -> io::Result<Option<Vec<String>>> {
    use crossterm::event::{self, Event, KeyEventKind};

    render_ui(out, menu, caps, title)?;

    loop {
        let timeout = menu
            .next_deadline()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if !event::poll(timeout)? {
            if menu.tick(Instant::now()) {
                render_ui(out, menu, caps, title)?;
            }
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = key_to_action(key, menu.is_searching()) else {
                    continue;
                };
                match action {
                    TreeAction::Confirm => return Ok(Some(menu.selected_labels())),
                    TreeAction::Quit => return Ok(None),
                    _ => {
                        menu.handle_action_at(action, Instant::now());
                        render_ui(out, menu, caps, title)?;
                    }
                }
            }
            Event::Resize(_, _) => render_ui(out, menu, caps, title)?,
            _ => {}
        }
    }
}

fn render_ui(
    out: &mut impl Write,
    menu: &TreeMenu,
    caps: &TerminalCapabilities,
    title: &str,
) -> io::Result<()> {
    use crossterm::{cursor, queue, terminal};

    let (width, height) = crossterm::terminal::size().unwrap_or((caps.width, caps.height));
    let width = usize::from(width);
    let unicode = caps.supports_unicode;
    let color = caps.supports_color;

    queue!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

    write!(out, "{}\r\n", truncate_to_width(title, width))?;
    if menu.is_searching() || !menu.query().is_empty() {
        let prompt = format!(
            "{} {}{}",
            glyph(unicode, icons::SEARCH, icons_ascii::SEARCH),
            menu.query(),
            if menu.is_searching() { "_" } else { "" }
        );
        write!(out, "{}\r\n", truncate_to_width(&prompt, width))?;
    } else {
        write!(out, "\r\n")?;
    }

    // Keep the cursor row on screen; header and footer take 8 lines
    let room = usize::from(height).saturating_sub(8).max(1);
    let start = menu.cursor_position().saturating_sub(room - 1);
    let rendered = menu.render(unicode);

    if menu.rows().is_empty() {
        write!(out, "{}\r\n", paint("(no matching items)", colors::DIM, color))?;
    }
    for (i, line) in rendered.lines().enumerate().skip(start).take(room) {
        let line = truncate_to_width(line, width);
        let Some(row) = menu.rows().get(i) else { break };
        let painted = if i == menu.cursor_position() {
            paint(&line, colors::ACTIVE, color)
        } else if row.disabled {
            paint(&line, colors::DIM, color)
        } else if row.highlighted {
            paint(&line, colors::HIGHLIGHT, color)
        } else if let Some(item_color) = row
            .styles
            .as_ref()
            .and_then(|s| s.color.as_deref())
            .and_then(named_color)
        {
            paint(&line, item_color, color)
        } else {
            line
        };
        write!(out, "{}\r\n", painted)?;
    }

    let separator = glyph(unicode, icons::SEPARATOR, icons_ascii::SEPARATOR).repeat(width.min(64));
    write!(out, "{}\r\n", separator)?;

    for line in menu.render_status_bar(unicode).lines() {
        write!(out, "{}\r\n", truncate_to_width(line, width))?;
    }
    write!(out, "\r\n")?;
    for line in menu.render_help_bar().lines() {
        write!(out, "{}\r\n", paint(&truncate_to_width(line, width), colors::DIM, color))?;
    }

    out.flush()
}
