use card_form::{CardPreview, CardSession};
use color_eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::{components::Component, tui::Frame};

const CARD_WIDTH: u16 = 36;
const FRONT_HEIGHT: u16 = 8;
const BACK_HEIGHT: u16 = 5;

/// Live front/back rendering of the card being entered. Read-only.
#[derive(Debug, Default)]
pub struct CardPreviewComponent {
    mask_cvc: bool,
}

impl CardPreviewComponent {
    pub fn new(mask_cvc: bool) -> Self {
        Self { mask_cvc }
    }

    fn cvc_text(&self, preview: &CardPreview, session: &CardSession) -> String {
        if self.mask_cvc && !session.fields().cvc.is_empty() {
            "•".repeat(preview.cvc.chars().count())
        } else {
            preview.cvc.clone()
        }
    }

    fn draw_front(f: &mut Frame<'_>, area: Rect, preview: &CardPreview) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);

        // name left, expiry right on the bottom line
        let gap = (inner.width as usize)
            .saturating_sub(preview.name.chars().count() + preview.expiry.chars().count())
            .max(1);
        let lines = vec![
            Line::from(vec![
                Span::styled("●", Style::default().fg(Color::White)),
                Span::raw(" "),
                Span::styled("○", Style::default().fg(Color::Gray)),
            ]),
            Line::raw(""),
            Line::raw(""),
            Line::from(preview.number.as_str()).bold().fg(Color::White),
            Line::raw(""),
            Line::from(vec![
                Span::raw(preview.name.as_str()),
                Span::raw(" ".repeat(gap)),
                Span::raw(preview.expiry.as_str()),
            ])
            .fg(Color::Gray),
        ];
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_back(&self, f: &mut Frame<'_>, area: Rect, preview: &CardPreview, session: &CardSession) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        let stripe = "█".repeat(inner.width as usize);
        let lines = vec![
            Line::from(stripe).fg(Color::DarkGray),
            Line::raw(""),
            Line::from(self.cvc_text(preview, session))
                .fg(Color::White)
                .alignment(Alignment::Right),
        ];
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for CardPreviewComponent {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, session: &CardSession) -> Result<()> {
        let preview = CardPreview::from_fields(session.fields());
        let width = CARD_WIDTH.min(area.width);

        let [_, front, _, back, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(FRONT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BACK_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);
        let front = Rect { width, ..front };
        // back card sits slightly to the right of the front
        let back = Rect {
            x: back.x + area.width.saturating_sub(width) / 2,
            width,
            ..back
        };

        Self::draw_front(f, front, &preview);
        self.draw_back(f, back, &preview, session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_form::CardField;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(preview: &mut CardPreviewComponent, session: &CardSession) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).expect("terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                preview.draw(f, area, session).expect("draw");
            })
            .expect("frame");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_session_shows_placeholders() {
        let session = CardSession::new();
        let screen = render(&mut CardPreviewComponent::default(), &session);
        assert!(screen.contains("0000 0000 0000 0000"));
        assert!(screen.contains("JANE APPLESEED"));
        assert!(screen.contains("00/00"));
        assert!(screen.contains("000"));
    }

    #[test]
    fn typed_values_replace_placeholders() {
        let mut session = CardSession::new();
        session.update(CardField::Name, "Jane Appleseed");
        session.update(CardField::Number, "4111222233334444");
        session.update(CardField::ExpMonth, "09");
        session.update(CardField::Cvc, "321");
        let screen = render(&mut CardPreviewComponent::default(), &session);
        assert!(screen.contains("4111 2222 3333 4444"));
        assert!(screen.contains("09/00"));
        assert!(screen.contains("321"));
    }

    #[test]
    fn name_is_shown_as_typed() {
        let mut session = CardSession::new();
        session.update(CardField::Name, "Jane Appleseed");
        let screen = render(&mut CardPreviewComponent::default(), &session);
        assert!(screen.contains("Jane Appleseed"));
        assert!(!screen.contains("JANE APPLESEED"));
    }

    #[test]
    fn masked_cvc_hides_digits() {
        let mut session = CardSession::new();
        session.update(CardField::Cvc, "321");
        let screen = render(&mut CardPreviewComponent::new(true), &session);
        assert!(!screen.contains("321"));
        assert!(screen.contains("•••"));
    }
}
