use std::{io, marker::PhantomData};

use crossterm::event::Event;
use futures_util::{Stream, StreamExt};
use tokio::{
    sync::mpsc::UnboundedReceiver,
    time::{sleep_until, Instant},
};

use crate::{
    client::{
        composer::widget::{ScriptWidget, SketchWidget, StatusWidget},
        Canvas, Client, Redraw,
    },
    session::Session,
};

pub struct App<C, E> {
    client: Client<C>,
    session: Session,
    log_rx: UnboundedReceiver<String>,
    next_step: Option<Instant>,
    e: PhantomData<E>,
}

impl<C: Canvas, E: Stream<Item = Result<Event, io::Error>> + Unpin> App<C, E> {
    pub fn new(client: Client<C>, session: Session, log_rx: UnboundedReceiver<String>) -> Self {
        Self {
            client,
            session,
            log_rx,
            next_step: None,
            e: PhantomData,
        }
    }

    pub async fn run(&mut self, term_events: &mut E) -> anyhow::Result<()> {
        let composer = self.client.composer_mut();
        composer.push_widget(StatusWidget::default());
        composer.push_widget(SketchWidget::default());
        composer.push_widget(ScriptWidget::default());

        self.render()?;

        loop {
            let Redraw(should_redraw) = tokio::select! {
                Some(ev) = term_events.next() => {
                    self.on_term_event(ev?)
                },
                Some(log) = self.log_rx.recv() => {
                    self.session.on_log(log)
                },
                _ = Self::step_timer(self.next_step), if self.next_step.is_some() => {
                    self.on_step()
                },
            };

            self.arm_step_timer();

            let exit = self.session.should_exit();

            if should_redraw && !exit {
                self.render()?;
            }

            if exit {
                break;
            }
        }

        Ok(())
    }

    // select! evaluates this expression even when the branch is disabled
    async fn step_timer(deadline: Option<Instant>) {
        sleep_until(deadline.unwrap_or_else(Instant::now)).await;
    }

    fn on_term_event(&mut self, event: Event) -> Redraw {
        log::trace!("event: {event:?}");

        self.client.handle_event(event, &mut self.session)
    }

    fn on_step(&mut self) -> Redraw {
        self.next_step = None;
        self.session.drawer.step_program();

        Redraw(true)
    }

    /// A step deadline exists exactly while a program is running.
    fn arm_step_timer(&mut self) {
        if self.session.drawer.mode().is_running() {
            if self.next_step.is_none() {
                self.next_step = Some(Instant::now() + self.session.drawer.step_delay());
            }
        } else {
            self.next_step = None;
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        self.client.render(&mut self.session)
    }
}
