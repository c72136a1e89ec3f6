//! Price stream generator and event broadcasting.
//!
//! The `PriceGenerator` runs a background thread that ticks a `PriceBoard` at a
//! fixed interval and broadcasts the full mapping to all subscribed client
//! streams using `crossbeam_channel`. New subscribers immediately receive the
//! current snapshot so they never wait a whole interval for their first update.
//!
//! Event model:
//! - `PriceEvent::Update(PriceMapping)` — a full replacement mapping.
//! - `PriceEvent::Shutdown` — signal for consumers to terminate gracefully.
//!
//! Broadcast is best-effort: every subscriber owns a queue of at most
//! [`SUBSCRIBER_BACKLOG`] events. A subscriber whose queue is full (it stopped
//! draining) or closed is dropped, which disconnects its receiver.
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded, select, tick, unbounded};
use log::{debug, info, warn};
use price_common::{PriceError, PriceMapping, Result};

use crate::model::price_board::PriceBoard;

/// Events queued per subscriber before it is considered stuck.
pub const SUBSCRIBER_BACKLOG: usize = 16;

/// Message sent by the generator to its subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceEvent {
    /// New full price mapping.
    Update(PriceMapping),
    /// Global shutdown notification for all consumers.
    Shutdown,
}

/// Background price generator that broadcasts to subscribers.
pub struct PriceGenerator {
    subscribe_tx: Sender<Sender<PriceEvent>>,
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl PriceGenerator {
    /// Start the generator thread ticking `board` every `interval`.
    pub fn start(mut board: PriceBoard, interval: Duration) -> Self {
        let (subscribe_tx, subscribe_rx) = unbounded::<Sender<PriceEvent>>();
        let (stop_tx, stop_rx) = unbounded::<()>();

        let handle = thread::spawn(move || {
            let ticker = tick(interval);
            let mut clients: Vec<Sender<PriceEvent>> = Vec::new();
            info!("Price generator started (interval {:?})", interval);

            loop {
                select! {
                    recv(subscribe_rx) -> msg => match msg {
                        Ok(client_tx) => {
                            if client_tx.try_send(PriceEvent::Update(board.snapshot().clone())).is_ok() {
                                clients.push(client_tx);
                            }
                            debug!("Generator: new subscriber. Total: {}", clients.len());
                        }
                        Err(_) => break,
                    },
                    recv(ticker) -> _ => {
                        let event = PriceEvent::Update(board.tick().clone());
                        clients.retain(|client_tx| match client_tx.try_send(event.clone()) {
                            Ok(()) => true,
                            Err(TrySendError::Full(_)) => {
                                warn!("Generator: dropping subscriber with {} queued events", SUBSCRIBER_BACKLOG);
                                false
                            }
                            Err(TrySendError::Disconnected(_)) => false,
                        });
                    },
                    recv(stop_rx) -> _ => break,
                }
            }

            for client_tx in &clients {
                let _ = client_tx.try_send(PriceEvent::Shutdown);
            }
            info!("Price generator stopping...");
        });

        Self {
            subscribe_tx,
            stop_tx,
            handle,
        }
    }

    /// Register a new subscriber and return its event stream. The stream
    /// disconnects if it falls [`SUBSCRIBER_BACKLOG`] events behind.
    pub fn subscribe(&self) -> Result<Receiver<PriceEvent>> {
        let (client_tx, client_rx) = bounded::<PriceEvent>(SUBSCRIBER_BACKLOG);
        self.subscribe_tx
            .send(client_tx)
            .map_err(|e| PriceError::ChannelSend(e.to_string()))?;
        Ok(client_rx)
    }

    /// Stop ticking, notify subscribers with `PriceEvent::Shutdown` and wait
    /// for the thread to finish.
    pub fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.handle.join();
    }
}
