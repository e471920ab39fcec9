use card_form::{CardSession, Outcome, SessionSnapshot, SubmissionState};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::{
    action::Action,
    components::{
        Component, card_preview::CardPreviewComponent, confirmation::ConfirmationComponent,
        form::CardFormComponent,
    },
    config::Config,
    tui::{Event, EventResponse, Frame, Tui},
};

/// Owns the card session and routes terminal events to whichever view the
/// submission state selects.
pub struct App {
    config: Config,
    session: CardSession,
    form: CardFormComponent,
    preview: CardPreviewComponent,
    confirmation: ConfirmationComponent,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
    pub should_quit: bool,
    pub should_suspend: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
        // every session mutation redraws
        let redraw = action_tx.clone();
        let session = CardSession::new().with_observer(move |_: &SessionSnapshot<'_>| {
            redraw.send(Action::Render).ok();
        });
        Self {
            preview: CardPreviewComponent::new(config.ui.mask_cvc),
            config,
            session,
            form: CardFormComponent::new(),
            confirmation: ConfirmationComponent::new(),
            action_tx,
            action_rx,
            should_quit: false,
            should_suspend: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?.tick_rate(self.config.ui.tick_rate);
        tui.enter()?;
        info!(tick_rate = self.config.ui.tick_rate, "card form started");

        loop {
            if let Some(e) = tui.next().await {
                self.handle_event(e)?;
            }

            while let Ok(action) = self.action_rx.try_recv() {
                match action {
                    Action::Tick | Action::Render => {}
                    _ => debug!("{action}"),
                }
                match action {
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        self.draw(&mut tui)?;
                    }
                    Action::Render => self.draw(&mut tui)?,
                    other => {
                        if let Some(next) = self.update(other)? {
                            self.action_tx.send(next).ok();
                        }
                    }
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                self.action_tx.send(Action::Resume).ok();
                self.action_tx.send(Action::Render).ok();
                tui.resume()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        info!("card form closed");
        Ok(())
    }

    /// Translate one terminal event into actions on the queue.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let action_tx = self.action_tx.clone();
        match event {
            Event::Init => {
                action_tx.send(Action::Render).ok();
                return Ok(());
            }
            Event::Tick => {
                action_tx.send(Action::Tick).ok();
                return Ok(());
            }
            Event::Resize(x, y) => {
                action_tx.send(Action::Resize(x, y)).ok();
                return Ok(());
            }
            Event::Closed => {
                action_tx.send(Action::Quit).ok();
                return Ok(());
            }
            Event::Error => {
                action_tx
                    .send(Action::Error("terminal event stream failed".into()))
                    .ok();
                return Ok(());
            }
            Event::Key(key) if self.handle_global_key(key) => return Ok(()),
            _ => {}
        }

        let response = match self.session.state() {
            SubmissionState::Editing => self.form.handle_events(event, &mut self.session)?,
            SubmissionState::Submitted => {
                self.confirmation.handle_events(event, &mut self.session)?
            }
        };
        match response {
            Some(EventResponse::Continue(action)) | Some(EventResponse::Stop(action)) => {
                action_tx.send(action).ok();
            }
            None => {}
        }
        Ok(())
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        let action = match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('z') => Action::Suspend,
            _ => return false,
        };
        self.action_tx.send(action).ok();
        true
    }

    /// Apply an action that does not need the terminal.
    pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => return Ok(None),
            Action::Quit => self.should_quit = true,
            Action::Suspend => self.should_suspend = true,
            Action::Resume => self.should_suspend = false,
            Action::Error(ref msg) => error!("{msg}"),
            Action::Submit => match self.session.submit() {
                Outcome::Accepted => info!("showing confirmation"),
                Outcome::Rejected { errors } => debug!(errors, "form stays open"),
                _ => {}
            },
            Action::Continue => {
                self.session.reset();
            }
            Action::Update => return Ok(Some(Action::Render)),
            Action::Render | Action::Resize(..) => {}
        }
        self.form.update(&action, &self.session)
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        let mut result = Ok(());
        tui.draw(|f| result = self.render(f))?;
        result
    }

    pub(crate) fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let area = frame.area();
        let main = if self.config.ui.show_preview {
            let [preview, main] =
                Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                    .areas(area);
            self.preview.draw(frame, preview, &self.session)?;
            main
        } else {
            area
        };

        match self.session.state() {
            SubmissionState::Editing => self.form.draw(frame, main, &self.session),
            SubmissionState::Submitted => self.confirmation.draw(frame, main, &self.session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_form::CardField;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// Run queued actions the way the loop does; returns how many renders were requested.
    fn pump(app: &mut App) -> usize {
        let mut renders = 0;
        while let Ok(action) = app.action_rx.try_recv() {
            match action {
                Action::Render | Action::Resize(..) => renders += 1,
                other => {
                    if let Some(next) = app.update(other).expect("update") {
                        app.action_tx.send(next).expect("send");
                    }
                }
            }
        }
        renders
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(key(KeyCode::Char(c))).expect("event");
        }
    }

    fn fill_valid(app: &mut App) {
        type_str(app, "Jane Appleseed");
        app.handle_event(key(KeyCode::Tab)).expect("tab");
        type_str(app, "4111222233334444");
        app.handle_event(key(KeyCode::Tab)).expect("tab");
        type_str(app, "12");
        app.handle_event(key(KeyCode::Tab)).expect("tab");
        type_str(app, "29");
        app.handle_event(key(KeyCode::Tab)).expect("tab");
        type_str(app, "123");
        pump(app);
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 28)).expect("terminal");
        terminal
            .draw(|f| app.render(f).expect("render"))
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
    fn init_requests_a_render() {
        let mut app = App::new(Config::default());
        app.handle_event(Event::Init).expect("init");
        assert_eq!(pump(&mut app), 1);
    }

    #[test]
    fn each_keystroke_redraws() {
        let mut app = App::new(Config::default());
        type_str(&mut app, "Jo");
        assert_eq!(pump(&mut app), 2);
        assert_eq!(app.session.fields().name, "Jo");
    }

    #[test]
    fn enter_with_valid_details_shows_confirmation() {
        let mut app = App::new(Config::default());
        fill_valid(&mut app);
        app.handle_event(key(KeyCode::Enter)).expect("enter");
        pump(&mut app);
        assert_eq!(app.session.state(), SubmissionState::Submitted);
        let text = screen(&mut app);
        assert!(text.contains("Thank you!"));
        assert!(text.contains("4111 2222 3333 4444"));
    }

    #[test]
    fn enter_with_missing_cvc_stays_on_form() {
        let mut app = App::new(Config::default());
        fill_valid(&mut app);
        app.handle_event(key(KeyCode::Backspace)).expect("backspace");
        app.handle_event(key(KeyCode::Enter)).expect("enter");
        pump(&mut app);
        assert_eq!(app.session.state(), SubmissionState::Editing);
        assert_eq!(
            app.session.errors().get(CardField::Cvc),
            Some("CVC must be 3 digits")
        );
        assert!(screen(&mut app).contains("CVC must be 3 digits"));
    }

    #[test]
    fn continue_goes_back_to_an_empty_form() {
        let mut app = App::new(Config::default());
        fill_valid(&mut app);
        app.handle_event(key(KeyCode::Enter)).expect("enter");
        pump(&mut app);
        app.handle_event(key(KeyCode::Enter)).expect("continue");
        pump(&mut app);
        assert_eq!(app.session.state(), SubmissionState::Editing);
        assert!(app.session.fields().is_empty());
        let text = screen(&mut app);
        assert!(text.contains("e.g. Jane Appleseed"));
        assert!(text.contains("0000 0000 0000 0000"));

        // focus is back on the name field
        type_str(&mut app, "J");
        assert_eq!(app.session.fields().name, "J");
    }

    #[test]
    fn keys_are_ignored_by_the_form_after_submission() {
        let mut app = App::new(Config::default());
        fill_valid(&mut app);
        app.handle_event(key(KeyCode::Enter)).expect("enter");
        pump(&mut app);
        type_str(&mut app, "x");
        assert_eq!(app.session.fields().cvc, "123");
    }

    #[test]
    fn ctrl_c_quits_and_ctrl_z_suspends() {
        let mut app = App::new(Config::default());
        app.handle_event(ctrl('z')).expect("ctrl-z");
        pump(&mut app);
        assert!(app.should_suspend);
        app.handle_event(ctrl('c')).expect("ctrl-c");
        pump(&mut app);
        assert!(app.should_quit);
        assert!(app.session.fields().is_empty());
    }

    #[test]
    fn esc_quits_from_the_form() {
        let mut app = App::new(Config::default());
        app.handle_event(key(KeyCode::Esc)).expect("esc");
        pump(&mut app);
        assert!(app.should_quit);
    }

    #[test]
    fn preview_can_be_hidden() {
        let mut config = Config::default();
        config.ui.show_preview = false;
        let mut app = App::new(config);
        let text = screen(&mut app);
        assert!(!text.contains("JANE APPLESEED"));
        assert!(text.contains("CARDHOLDER NAME"));
    }
}
