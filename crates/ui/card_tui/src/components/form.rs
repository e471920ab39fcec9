use card_form::{CardField, CardSession, format_card_number};
use color_eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use tracing::debug;
use tui_input::{Input, InputRequest, backend::crossterm::EventHandler};

use crate::{
    action::Action,
    components::Component,
    tui::{EventResponse, Frame},
};

/// label + bordered input + error line
const ROW_HEIGHT: u16 = 5;
const PART_WIDTH: u16 = 6;

/// Editor for the five card fields.
///
/// Only the focused field has a live `Input` (value + cursor); every other
/// field is drawn straight from the session. After each edit the input is
/// re-seeded from the stored value, so the number field shows the grouped
/// form while typing.
pub struct CardFormComponent {
    focused: CardField,
    input: Input,
}

impl Default for CardFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFormComponent {
    pub fn new() -> Self {
        Self {
            focused: CardField::Name,
            input: Input::default(),
        }
    }

    pub fn focused(&self) -> CardField {
        self.focused
    }

    pub fn focus(&mut self, field: CardField, session: &CardSession) {
        self.focused = field;
        self.input = Input::new(session.fields().get(field).to_string());
    }

    /// Whether `value`, as the store would keep it, is within the field's cap.
    fn fits(&self, value: &str) -> bool {
        let Some(max) = self.focused.max_len() else {
            return true;
        };
        let stored_len = match self.focused {
            CardField::Number => format_card_number(value).chars().count(),
            _ => value.chars().count(),
        };
        stored_len <= max
    }

    /// Hand an edited copy of the input to the session.
    ///
    /// Session changes redraw through the session observer, so only
    /// cursor-only edits ask for a render here.
    fn commit(&mut self, edited: Input, session: &mut CardSession) -> Option<EventResponse<Action>> {
        if edited.value() == self.input.value() {
            self.input = edited;
            return Some(EventResponse::Stop(Action::Update));
        }
        // the cap only stops growth; deleting is always allowed
        let grows = edited.value().chars().count() > self.input.value().chars().count();
        if grows && !self.fits(edited.value()) {
            debug!(field = self.focused.key(), "input at max length");
            return Some(EventResponse::Stop(Action::Update));
        }
        session.update(self.focused, edited.value());
        let stored = session.fields().get(self.focused);
        self.input = if stored == edited.value() {
            edited
        } else {
            Input::new(stored.to_string())
        };
        None
    }

    fn draw_input(&self, f: &mut Frame<'_>, area: Rect, field: CardField, session: &CardSession) {
        let focused = field == self.focused;
        let border = if session.errors().contains(field) {
            Color::Red
        } else if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);

        let value = if focused {
            self.input.value()
        } else {
            session.fields().get(field)
        };
        let scroll = if focused {
            self.input.visual_scroll(inner.width.max(1) as usize)
        } else {
            0
        };
        let para = if value.is_empty() {
            Paragraph::new(field.placeholder()).fg(Color::DarkGray)
        } else {
            Paragraph::new(value).scroll((0, scroll as u16))
        };
        f.render_widget(para.block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            let x = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + x.min(inner.width - 1), inner.y));
        }
    }

    fn draw_label(&self, f: &mut Frame<'_>, area: Rect, label: &str, focused: bool) {
        let mut style = Style::default().fg(Color::White);
        if focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        f.render_widget(Paragraph::new(Span::styled(label.to_string(), style)), area);
    }

    fn draw_error(f: &mut Frame<'_>, area: Rect, message: Option<&str>) {
        if let Some(msg) = message {
            f.render_widget(Paragraph::new(msg.to_string()).fg(Color::Red), area);
        }
    }

    fn draw_field(&self, f: &mut Frame<'_>, area: Rect, field: CardField, session: &CardSession) {
        let [label, input, error] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);
        self.draw_label(f, label, field.label(), field == self.focused);
        self.draw_input(f, input, field, session);
        Self::draw_error(f, error, session.errors().get(field));
    }

    /// MM and YY side by side under one label and one error line.
    fn draw_expiry(&self, f: &mut Frame<'_>, area: Rect, session: &CardSession) {
        let [label, inputs, error] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);
        let focused = matches!(self.focused, CardField::ExpMonth | CardField::ExpYear);
        self.draw_label(f, label, "EXP. DATE (MM/YY)", focused);
        let [month, _, year] = Layout::horizontal([
            Constraint::Length(PART_WIDTH),
            Constraint::Length(1),
            Constraint::Length(PART_WIDTH),
        ])
        .areas(inputs);
        self.draw_input(f, month, CardField::ExpMonth, session);
        self.draw_input(f, year, CardField::ExpYear, session);
        Self::draw_error(f, error, session.errors().expiry_message());
    }
}

impl Component for CardFormComponent {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        session: &mut CardSession,
    ) -> Result<Option<EventResponse<Action>>> {
        let response = match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus(self.focused.next(), session);
                Some(EventResponse::Stop(Action::Update))
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus(self.focused.prev(), session);
                Some(EventResponse::Stop(Action::Update))
            }
            KeyCode::Enter => Some(EventResponse::Stop(Action::Submit)),
            KeyCode::Esc => Some(EventResponse::Stop(Action::Quit)),
            _ => {
                let mut edited = self.input.clone();
                if edited.handle_event(&CrosstermEvent::Key(key)).is_none() {
                    return Ok(None);
                }
                self.commit(edited, session)
            }
        };
        Ok(response)
    }

    /// Insert at the cursor, dropping whatever does not fit the field.
    fn handle_paste(
        &mut self,
        text: &str,
        session: &mut CardSession,
    ) -> Result<Option<EventResponse<Action>>> {
        let mut edited = self.input.clone();
        for c in text.chars().filter(|c| !c.is_control()) {
            let mut next = edited.clone();
            next.handle(InputRequest::InsertChar(c));
            if !self.fits(next.value()) {
                break;
            }
            edited = next;
        }
        Ok(self.commit(edited, session))
    }

    fn update(&mut self, action: &Action, session: &CardSession) -> Result<Option<Action>> {
        match action {
            Action::Continue => self.focus(CardField::Name, session),
            Action::Submit => {
                if let Some((field, _)) = session.errors().iter().next() {
                    self.focus(field, session);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, session: &CardSession) -> Result<()> {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Card details ")
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [name, number, bottom, button, _, footer] = Layout::vertical([
            Constraint::Length(ROW_HEIGHT),
            Constraint::Length(ROW_HEIGHT),
            Constraint::Length(ROW_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.draw_field(f, name, CardField::Name, session);
        self.draw_field(f, number, CardField::Number, session);

        let [expiry, cvc] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(bottom);
        self.draw_expiry(f, expiry, session);
        self.draw_field(f, cvc, CardField::Cvc, session);

        f.render_widget(
            Paragraph::new(Line::from(" Confirm ").bold().fg(Color::White).bg(Color::Magenta))
                .alignment(Alignment::Center),
            button,
        );

        let hints = Line::from(vec![
            Span::styled("Tab/Shift+Tab", Style::default().fg(Color::White)),
            Span::raw(": Navigate   "),
            Span::styled("Enter", Style::default().fg(Color::White)),
            Span::raw(": Confirm   "),
            Span::styled("Esc", Style::default().fg(Color::White)),
            Span::raw(": Quit"),
        ])
        .fg(Color::DarkGray);
        f.render_widget(Paragraph::new(hints), footer);
        Ok(())
    }
}
