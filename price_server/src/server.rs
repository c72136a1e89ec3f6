//! Server main loop: accepted connections become client stream threads.
use std::net::{SocketAddr, TcpStream};
use std::thread;

use crossbeam_channel::{Receiver, select, unbounded};
use log::{error, info};
use price_common::Result;

use crate::listener::UpdateListener;
use crate::model::price_generator::PriceGenerator;
use crate::stream::handle_client_stream;

/// Accept subscribers on `listener` and stream `generator`'s updates to each of
/// them until a message arrives on `shutdown_rx`.
pub fn serve(
    listener: UpdateListener,
    generator: &PriceGenerator,
    shutdown_rx: Receiver<()>,
) -> Result<()> {
    let (conn_tx, conn_rx) = unbounded::<(TcpStream, SocketAddr)>();
    thread::spawn(move || {
        if let Err(e) = listener.accept_loop(conn_tx) {
            error!("Accept loop failed: {}", e);
        }
    });

    loop {
        select! {
            recv(conn_rx) -> msg => match msg {
                Ok((stream, peer)) => {
                    let data_rx = match generator.subscribe() {
                        Ok(rx) => rx,
                        Err(e) => {
                            error!("Failed to subscribe client {}: {}", peer, e);
                            continue;
                        }
                    };
                    thread::spawn(move || {
                        if let Err(e) = handle_client_stream(stream, data_rx) {
                            error!("Client stream {} error: {}", peer, e);
                        }
                    });
                    info!("A stream has been created for client {}", peer);
                }
                Err(_) => break,
            },
            recv(shutdown_rx) -> _ => break,
        }
    }
    info!("Server loop stopping...");
    Ok(())
}
