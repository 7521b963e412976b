//! The application loop: ties the terminal event stream, the components and
//! the reducer together.
//!
//! Each terminal event is offered to the components in order (stop semantics:
//! the first `EventResponse::Stop` ends propagation), then any unconsumed
//! runtime event is mapped to its action. Queued actions are drained one at a
//! time: the reducer applies domain actions to the model, resulting effects
//! are interpreted here, and every action is then forwarded to the components
//! so they can react (e.g. the form reloading its edit buffer after a focus
//! change).

use color_eyre::Result;
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::debug;

use crate::{
    action::Action,
    cli::Cli,
    components::{footer::Footer, form::ContactForm, summary::SummaryCard, Component},
    config::Config,
    core::{
        reducer::{reduce, Effect},
        state::FormModel,
    },
    tui::{Event, EventResponse, Frame, Tui},
};

pub struct App {
    #[allow(dead_code)]
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    model: FormModel,
    components: Vec<Box<dyn Component>>,
    should_quit: bool,
    should_suspend: bool,
}

impl App {
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = Config::new()?;
        let tick_rate = cli.tick_rate.unwrap_or(config.config.tick_rate);
        let frame_rate = cli.frame_rate.unwrap_or(config.config.frame_rate);

        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            model: FormModel::new(),
            components: vec![
                Box::new(ContactForm::new()),
                Box::new(SummaryCard::new()),
                Box::new(Footer::new()),
            ],
            should_quit: false,
            should_suspend: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.init(&self.model)?;
        }

        loop {
            if let Some(event) = tui.next().await {
                let mut consumed = false;
                for component in self.components.iter_mut() {
                    match component.handle_events(event.clone(), &self.model)? {
                        Some(EventResponse::Continue(action)) => {
                            action_tx.send(action).ok();
                        }
                        Some(EventResponse::Stop(action)) => {
                            action_tx.send(action).ok();
                            consumed = true;
                            break;
                        }
                        None => {}
                    }
                }
                if !consumed {
                    match event {
                        Event::Quit => {
                            action_tx.send(Action::Quit).ok();
                        }
                        Event::Tick => {
                            action_tx.send(Action::Tick).ok();
                        }
                        Event::Render => {
                            action_tx.send(Action::Render).ok();
                        }
                        Event::Resize(w, h) => {
                            action_tx.send(Action::Resize(w, h)).ok();
                        }
                        _ => {}
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if !matches!(action, Action::Tick | Action::Render) {
                    debug!("{action}");
                }
                match &action {
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Error(msg) => tracing::error!("{msg}"),
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        self.draw(&mut tui, &action_tx)?;
                    }
                    Action::Render => {
                        self.draw(&mut tui, &action_tx)?;
                    }
                    _ => {}
                }

                for effect in reduce(&mut self.model, action.clone()) {
                    self.handle_effect(effect, &action_tx);
                }

                for component in self.components.iter_mut() {
                    if let Some(next) = component.update(&action, &self.model)? {
                        action_tx.send(next).ok();
                    }
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume).ok();
                tui = Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    fn handle_effect(&self, effect: Effect, action_tx: &UnboundedSender<Action>) {
        match effect {
            Effect::SubmissionAccepted => {
                if let Some(submission) = &self.model.submission {
                    match serde_json::to_string(submission) {
                        Ok(json) => debug!(submission = %json, "submission accepted"),
                        Err(err) => {
                            action_tx
                                .send(Action::Error(format!(
                                    "Failed to encode submission: {err}"
                                )))
                                .ok();
                        }
                    }
                }
            }
        }
    }

    fn draw(&mut self, tui: &mut Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        tui.draw(|f| {
            self.render(f).unwrap_or_else(|err| {
                action_tx
                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                    .ok();
            })
        })?;
        Ok(())
    }

    fn render(&mut self, f: &mut Frame<'_>) -> Result<()> {
        let constraints: Vec<Constraint> = self
            .components
            .iter()
            .map(|c| c.height_constraint(&self.model))
            .collect();
        let areas = Layout::vertical(constraints).split(f.area());

        let model = &self.model;
        for (component, area) in self.components.iter_mut().zip(areas.iter()) {
            component.draw(f, *area, model)?;
        }
        Ok(())
    }
}
