//! Per-client stream task.
use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use crossbeam_channel::Receiver;
use log::{debug, info};
use price_common::wire::{self, Frame, PRICE_UPDATE, Subscribe};
use price_common::Result;

use crate::model::price_generator::PriceEvent;

/// How long a new client may take to send its subscription line.
pub const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(5);
/// How long a single frame write may block on a client that stopped reading.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Read the client's `Subscribe` line.
pub fn read_subscription(stream: &TcpStream) -> Result<Subscribe> {
    stream.set_read_timeout(Some(HANDSHAKE_TIMEOUT))?;
    let mut line = String::new();
    BufReader::new(stream).read_line(&mut line)?;
    stream.set_read_timeout(None)?;
    wire::decode_line(&line)
}

/// Stream task for a single client.
///
/// Waits for the subscription line, then forwards every `PriceEvent::Update`
/// from `data_rx` as a `priceUpdate` frame. The task terminates when either:
/// - the client did not ask for `priceUpdate`,
/// - a `PriceEvent::Shutdown` is received from the generator,
/// - the client disconnects or stalls (write fails or times out),
/// - the generator dropped this client for falling behind.
///
/// Handshake errors are returned so the caller can log them per client.
pub fn handle_client_stream(mut stream: TcpStream, data_rx: Receiver<PriceEvent>) -> Result<()> {
    let peer = stream.peer_addr()?;
    let subscribe = read_subscription(&stream)?;
    if !subscribe.wants(PRICE_UPDATE) {
        info!("Client {} subscribed to {:?}; nothing to send", peer, subscribe.events);
        return Ok(());
    }
    info!("Streaming price updates to {}", peer);
    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;

    loop {
        match data_rx.recv() {
            Ok(PriceEvent::Update(mapping)) => {
                let bytes = wire::encode_line(&Frame::price_update(&mapping)?)?;
                if let Err(e) = stream.write_all(&bytes) {
                    info!("Client {} disconnected: {}", peer, e);
                    break;
                }
            }
            Ok(PriceEvent::Shutdown) => break,
            Err(_) => {
                info!("Client {} dropped by the generator", peer);
                break;
            }
        }
    }

    if let Err(e) = stream.shutdown(Shutdown::Both) {
        debug!("Socket shutdown for {}: {}", peer, e);
    }
    Ok(())
}
