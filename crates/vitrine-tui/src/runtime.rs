//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Async results arrive through an inbox channel: spawned tasks send
//! `UiEvent`s to `inbox_tx` and the runtime drains `inbox_rx` each frame.

use std::future::Future;
use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use vitrine_core::session;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll duration while async work is in flight (spinner cadence).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Poll duration when idle. Longer timeout reduces CPU usage when
/// nothing is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(250);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on exit and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime, entering the alternate screen.
    pub fn new(state: AppState) -> Result<Self> {
        // Panic hook must be installed before entering the alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop until the reducer sets the quit flag.
    pub fn run(&mut self) -> Result<()> {
        let startup = update::startup_effects(&mut self.state.tui);
        self.execute_effects(startup);

        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                let effects = update::update(&mut self.state, event);
                dirty = true;
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the terminal and the inbox.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling only while work is in flight (spinner animation).
        let tick_interval = if self.state.tui.tasks.is_any_running() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());

        // Block until the next tick is due unless events are already
        // waiting, in which case don't delay processing them.
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted
    /// lifecycle. The closure receives the cancellation token (if the
    /// task is cancelable) and resolves to the result event.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// Executes a single effect.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            UiEffect::FetchProducts { task } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.state.tui.client.clone();
                self.spawn_task(TaskKind::ProductList, task, true, move |cancel| async move {
                    let fetch = client.list_products();
                    match cancel {
                        Some(token) => tokio::select! {
                            () = token.cancelled() => UiEvent::TaskCancelled,
                            result = fetch => UiEvent::ProductsLoaded(result),
                        },
                        None => UiEvent::ProductsLoaded(fetch.await),
                    }
                });
            }

            UiEffect::DeleteProduct { task, id } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.state.tui.client.clone();
                self.spawn_task(TaskKind::ProductDelete, task, false, move |_| async move {
                    UiEvent::ProductDeleted(client.delete_product(&id).await)
                });
            }

            UiEffect::SubmitProduct { task, product } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.state.tui.client.clone();
                self.spawn_task(TaskKind::ProductCreate, task, false, move |_| async move {
                    UiEvent::ProductCreated(client.create_product(&product).await)
                });
            }

            UiEffect::SubmitLogin {
                task,
                username,
                password,
            } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.state.tui.client.clone();
                self.spawn_task(TaskKind::Login, task, false, move |_| async move {
                    let result = client.login(&username, &password).await;
                    UiEvent::LoginResult { username, result }
                });
            }

            UiEffect::SubmitRegister {
                task,
                username,
                password,
            } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.state.tui.client.clone();
                self.spawn_task(TaskKind::Register, task, false, move |_| async move {
                    UiEvent::RegisterResult(client.register(&username, &password).await)
                });
            }

            UiEffect::SaveSession { username } => {
                if let Err(err) = session::save(&username) {
                    tracing::error!(error = %err, "failed to persist session");
                }
            }

            UiEffect::ClearSession => {
                if let Err(err) = session::clear() {
                    tracing::error!(error = %err, "failed to clear session");
                }
            }

            UiEffect::CancelTask { token, .. } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }
        }
    }
}
