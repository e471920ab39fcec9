use card_form::CardSession;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    action::Action,
    components::{Component, centered_rect_fixed},
    tui::{EventResponse, Frame},
};

pub const TITLE: &str = "Thank you!";
pub const MESSAGE: &str = "We've added your card details";

/// "Thank you" view shown after the details were accepted:
/// - Enter / Space: continue with an empty form (emit Action::Continue)
/// - Esc: quit
pub struct ConfirmationComponent {
    width: u16,
    height: u16,
}

impl Default for ConfirmationComponent {
    fn default() -> Self {
        Self {
            width: 44,
            height: 11,
        }
    }
}

impl ConfirmationComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Draw a rounded, bordered dialog shell with a title at `area`.
fn draw_dialog_frame(frame: &mut Frame<'_>, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

impl Component for ConfirmationComponent {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        _session: &mut CardSession,
    ) -> Result<Option<EventResponse<Action>>> {
        let r = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(EventResponse::Stop(Action::Continue)),
            KeyCode::Esc => Some(EventResponse::Stop(Action::Quit)),
            _ => None,
        };
        Ok(r)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _session: &CardSession) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }
        let dialog = centered_rect_fixed(area, self.width, self.height);
        let inner = draw_dialog_frame(f, dialog, "Card added");

        let text = Text::from(vec![
            Line::raw(""),
            Line::from("✓").bold().fg(Color::Green),
            Line::raw(""),
            Line::from(TITLE).bold().fg(Color::White),
            Line::from(MESSAGE).fg(Color::Gray),
            Line::raw(""),
            Line::from(" Continue ").bold().fg(Color::White).bg(Color::Magenta),
            Line::raw(""),
            Line::from("Enter: Continue   Esc: Quit").fg(Color::DarkGray),
        ]);
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
        Ok(())
    }
}
