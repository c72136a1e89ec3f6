//! Live update subscription.
//!
//! `Subscription::connect` opens the TCP connection to the price server, asks
//! for `priceUpdate` events and spawns a reader thread that forwards every
//! pushed mapping into the application's event channel. Dropping the
//! `Subscription` shuts the socket down and joins the reader, so the channel
//! is released on every exit path.
use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use log::{debug, info, warn};
use price_common::wire::{self, Frame, Subscribe, Update};
use price_common::{PriceError, Result};

use crate::app::AppEvent;

/// An open live update channel.
pub struct Subscription {
    addr: String,
    stream: TcpStream,
    closing: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
}

impl Subscription {
    /// Connect to `addr`, subscribe to price updates and start forwarding
    /// them to `events` as `AppEvent::PriceUpdate`.
    pub fn connect(addr: &str, events: Sender<AppEvent>) -> Result<Self> {
        let mut stream = TcpStream::connect(addr)?;
        stream.write_all(&wire::encode_line(&Subscribe::price_updates())?)?;
        info!("Subscribed to live updates at {}", addr);

        let read_half = stream.try_clone()?;
        let closing = Arc::new(AtomicBool::new(false));
        let reader = {
            let closing = closing.clone();
            thread::spawn(move || {
                if let Err(e) = read_frames(read_half, &events) {
                    if !closing.load(Ordering::Relaxed) {
                        warn!("Live update reader stopped: {}", e);
                    }
                }
                if !closing.load(Ordering::Relaxed) {
                    let _ = events.send(AppEvent::UpdatesClosed);
                }
            })
        };

        Ok(Self {
            addr: addr.to_string(),
            stream,
            closing,
            reader: Some(reader),
        })
    }

    /// Address this subscription is connected to.
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.closing.store(true, Ordering::SeqCst);
        if let Err(e) = self.stream.shutdown(Shutdown::Both) {
            debug!("Socket shutdown for {}: {}", self.addr, e);
        }
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
        info!("Disconnected from live updates at {}", self.addr);
    }
}

/// Read newline-delimited frames until the peer closes the connection.
/// Lines that are not UTF-8 or not a valid frame are skipped.
fn read_frames(stream: TcpStream, events: &Sender<AppEvent>) -> Result<()> {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Skipping non UTF-8 frame: {}", e);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match wire::decode_line::<Frame>(line).and_then(Frame::into_update) {
            Ok(Update::Prices(mapping)) => events
                .send(AppEvent::PriceUpdate(mapping))
                .map_err(|e| PriceError::ChannelSend(e.to_string()))?,
            Ok(Update::Ignored(event)) => debug!("Ignoring '{}' event", event),
            Err(e) => warn!("Skipping malformed frame: {}", e),
        }
    }
}
