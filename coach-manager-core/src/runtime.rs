//! Async event loop
//!
//! Owns the `PageController` on a single task, the way a browser's UI thread
//! owns the document: host events arrive over a channel and timers are
//! honoured by sleeping until the next deadline. Nothing blocks and nothing
//! runs in parallel with the controller.
//!
//! Dropping every `PageHandle` is page unload: the loop tears the controller
//! down and returns it.

use std::future;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant};

use crate::error::{CoreError, CoreResult};
use crate::services::PageController;
use crate::traits::Document;
use crate::types::{DispatchOutcome, HostEvent};

type Inspector<D> = Box<dyn FnOnce(&PageController<D>) + Send>;
type Mutator<D> = Box<dyn FnOnce(&mut D) + Send>;

enum Command<D: Document> {
    Dispatch {
        event: HostEvent,
        reply: Option<oneshot::Sender<DispatchOutcome>>,
    },
    Inspect(Inspector<D>),
    UpdateDocument(Mutator<D>),
}

/// Sending side of a running page
pub struct PageHandle<D: Document> {
    commands: mpsc::UnboundedSender<Command<D>>,
}

impl<D: Document> Clone for PageHandle<D> {
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
        }
    }
}

impl<D: Document> PageHandle<D> {
    /// Queues an event without waiting for its outcome
    pub fn send(&self, event: HostEvent) -> CoreResult<()> {
        self.commands
            .send(Command::Dispatch { event, reply: None })
            .map_err(|_| CoreError::EventLoopClosed)
    }

    /// Dispatches an event and waits for the outcome (e.g. whether a submit
    /// must be cancelled)
    pub async fn dispatch(&self, event: HostEvent) -> CoreResult<DispatchOutcome> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(Command::Dispatch {
                event,
                reply: Some(tx),
            })
            .map_err(|_| CoreError::EventLoopClosed)?;
        rx.await.map_err(|_| CoreError::EventLoopClosed)
    }

    /// Runs a read-only closure against the controller
    pub async fn inspect<R, F>(&self, f: F) -> CoreResult<R>
    where
        R: Send + 'static,
        F: FnOnce(&PageController<D>) -> R + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let inspector: Inspector<D> = Box::new(move |controller| {
            let _ = tx.send(f(controller));
        });
        self.commands
            .send(Command::Inspect(inspector))
            .map_err(|_| CoreError::EventLoopClosed)?;
        rx.await.map_err(|_| CoreError::EventLoopClosed)
    }

    /// Host-side document change (viewport resize, user typing); queued in
    /// order with events
    pub fn update_document<F>(&self, f: F) -> CoreResult<()>
    where
        F: FnOnce(&mut D) + Send + 'static,
    {
        self.commands
            .send(Command::UpdateDocument(Box::new(f)))
            .map_err(|_| CoreError::EventLoopClosed)
    }
}

/// Single-task driver for a `PageController`
pub struct EventLoop<D: Document> {
    controller: PageController<D>,
    commands: mpsc::UnboundedReceiver<Command<D>>,
    started: Instant,
}

impl<D: Document> EventLoop<D> {
    /// The controller's page time zero is taken as "now"
    pub fn new(controller: PageController<D>) -> (Self, PageHandle<D>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_loop = Self {
            controller,
            commands: rx,
            started: Instant::now(),
        };
        (event_loop, PageHandle { commands: tx })
    }

    fn page_time(&self) -> Duration {
        self.started.elapsed()
    }

    /// Runs until every handle is dropped
    pub async fn run(mut self) -> PageController<D> {
        loop {
            let deadline = self.controller.next_deadline().map(|d| self.started + d);
            let wake = async move {
                match deadline {
                    Some(at) => time::sleep_until(at).await,
                    None => future::pending::<()>().await,
                }
            };

            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                () = wake => {
                    let now = self.page_time();
                    self.controller.advance(now);
                }
            }
        }

        log::debug!("Page handles dropped, stopping event loop");
        self.controller.teardown();
        self.controller
    }

    fn handle(&mut self, command: Command<D>) {
        match command {
            Command::Dispatch { event, reply } => {
                let now = self.page_time();
                let outcome = self.controller.dispatch(event, now);
                if let Some(reply) = reply {
                    let _ = reply.send(outcome);
                }
            }
            Command::Inspect(inspector) => inspector(&self.controller),
            Command::UpdateDocument(mutator) => mutator(self.controller.document_mut()),
        }
    }
}

/// Spawns the loop on the current runtime
pub fn spawn<D>(controller: PageController<D>) -> (PageHandle<D>, JoinHandle<PageController<D>>)
where
    D: Document + Send + 'static,
{
    let (event_loop, handle) = EventLoop::new(controller);
    (handle, tokio::spawn(event_loop.run()))
}
