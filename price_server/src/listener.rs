use std::net::{SocketAddr, TcpListener, TcpStream};

use crossbeam_channel::Sender;
use log::{debug, error, info};
use price_common::{PriceError, Result};

/// TCP listener accepting live update subscribers.
///
/// Every accepted connection is forwarded, together with the peer address,
/// into a channel; the subscription handshake happens on the client's own
/// stream thread so a slow or broken client never stalls the accept loop.
pub struct UpdateListener {
    /// The underlying TCP listening socket.
    pub(crate) socket: TcpListener,
}

impl UpdateListener {
    /// Bind a new listener to `bind_addr` (e.g., `0.0.0.0:3001`).
    pub fn bind(bind_addr: &str) -> Result<Self> {
        let socket = TcpListener::bind(bind_addr)?;
        Ok(Self { socket })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Blocking loop that accepts connections and forwards them to `tx`.
    /// Returns once the receiving side of `tx` is gone.
    pub fn accept_loop(self, tx: Sender<(TcpStream, SocketAddr)>) -> Result<()> {
        info!("Live update server is started on {}", self.socket.local_addr()?);

        for stream in self.socket.incoming() {
            match stream {
                Ok(stream) => {
                    let peer = match stream.peer_addr() {
                        Ok(peer) => peer,
                        Err(e) => {
                            error!("Cannot read peer address: {}", e);
                            continue;
                        }
                    };
                    debug!("Accepted connection from {}", peer);
                    tx.send((stream, peer))
                        .map_err(|e| PriceError::ChannelSend(e.to_string()))?;
                }
                Err(e) => error!("TCP connection error: {}", e),
            }
        }
        Ok(())
    }
}
