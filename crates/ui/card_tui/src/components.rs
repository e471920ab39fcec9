use card_form::CardSession;
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::{
    action::Action,
    tui::{Event, EventResponse, Frame},
};

pub mod form;
pub mod card_preview;
pub mod confirmation;

/// `Component` is a visual and interactive element of the card form UI.
///
/// Components never own form data: they read it from the `CardSession` when
/// drawing and write to it while handling input. Anything that changes the
/// submission state is returned as an `Action` and applied by the app loop.
pub trait Component {
    fn handle_events(
        &mut self,
        event: Event,
        session: &mut CardSession,
    ) -> Result<Option<EventResponse<Action>>> {
        let r = match event {
            Event::Key(key_event) => self.handle_key_events(key_event, session)?,
            Event::Paste(text) => self.handle_paste(&text, session)?,
            _ => None,
        };
        Ok(r)
    }

    fn handle_key_events(
        &mut self,
        _key: KeyEvent,
        _session: &mut CardSession,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    fn handle_paste(
        &mut self,
        _text: &str,
        _session: &mut CardSession,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    /// React to an action after the app loop applied it to the session.
    fn update(&mut self, _action: &Action, _session: &CardSession) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, session: &CardSession) -> Result<()>;
}

/// Compute a centered rectangle with a fixed width/height clamped to `area`.
pub fn centered_rect_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);

    let x = area.x.saturating_add((area.width.saturating_sub(w)) / 2);
    let y = area.y.saturating_add((area.height.saturating_sub(h)) / 2);

    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}
