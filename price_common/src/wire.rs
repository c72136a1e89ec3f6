//! Live-update frames exchanged between the price server and its clients.
//!
//! The channel is a plain TCP stream carrying newline-delimited JSON. A client
//! opens it with a [`Subscribe`] line naming the events it wants, then the
//! server pushes [`Frame`]s shaped as `{"event": "<name>", "data": <payload>}`.
//! The only event currently emitted is [`PRICE_UPDATE`], whose payload is a
//! full [`PriceMapping`].
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PriceError;
use crate::prices::PriceMapping;
use crate::result::Result;

/// Event name of a full price mapping replacement.
pub const PRICE_UPDATE: &str = "priceUpdate";

/// Subscription request sent by a client right after connecting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscribe {
    /// Event names the client wants to receive.
    pub events: Vec<String>,
}

impl Subscribe {
    /// Subscription to price updates only.
    pub fn price_updates() -> Self {
        Self {
            events: vec![PRICE_UPDATE.to_string()],
        }
    }

    /// Whether the client asked for `event`.
    pub fn wants(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }
}

/// A single pushed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Event name, e.g. `priceUpdate`.
    pub event: String,
    /// Event payload; its shape depends on `event`.
    #[serde(default)]
    pub data: Value,
}

/// Frame content as understood by the client.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// A replacement price mapping.
    Prices(PriceMapping),
    /// An event this build does not handle; carries the event name.
    Ignored(String),
}

impl Frame {
    /// Build a `priceUpdate` frame.
    pub fn price_update(mapping: &PriceMapping) -> Result<Self> {
        Ok(Frame {
            event: PRICE_UPDATE.to_string(),
            data: serde_json::to_value(mapping)?,
        })
    }

    /// Interpret the payload according to the event name.
    pub fn into_update(self) -> Result<Update> {
        if self.event != PRICE_UPDATE {
            return Ok(Update::Ignored(self.event));
        }
        let mapping: PriceMapping = serde_json::from_value(self.data)
            .map_err(|e| PriceError::Frame(format!("invalid {} payload: {}", PRICE_UPDATE, e)))?;
        Ok(Update::Prices(mapping))
    }
}

/// Encode any wire message as a single JSON line terminated by `\n`.
pub fn encode_line<T: Serialize>(message: &T) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec(message)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decode one line (with or without the trailing newline) into a wire message.
pub fn decode_line<T: DeserializeOwned>(line: &str) -> Result<T> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(PriceError::Frame("empty line".to_string()));
    }
    Ok(serde_json::from_str(trimmed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prices::PriceRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn price_update_line_decodes_to_mapping() {
        let mut mapping = PriceMapping::new();
        mapping.insert("bitcoin".to_string(), PriceRecord::new(50000.0, 40000.0));

        let bytes = encode_line(&Frame::price_update(&mapping).unwrap()).unwrap();
        assert_eq!(bytes.last(), Some(&b'\n'));

        let line = String::from_utf8(bytes).unwrap();
        let frame: Frame = decode_line(&line).unwrap();
        assert_eq!(frame.into_update().unwrap(), Update::Prices(mapping));
    }

    #[test]
    fn unknown_event_is_ignored_not_rejected() {
        let frame: Frame = decode_line(r#"{"event":"connect"}"#).unwrap();
        assert_eq!(
            frame.into_update().unwrap(),
            Update::Ignored("connect".to_string())
        );
    }

    #[test]
    fn malformed_price_payload_is_a_frame_error() {
        let frame: Frame = decode_line(r#"{"event":"priceUpdate","data":[1,2]}"#).unwrap();
        assert!(matches!(frame.into_update(), Err(PriceError::Frame(_))));
    }

    #[test]
    fn blank_and_garbage_lines_fail_to_decode() {
        assert!(matches!(decode_line::<Frame>("  \n"), Err(PriceError::Frame(_))));
        assert!(matches!(decode_line::<Frame>("not json"), Err(PriceError::SerdeJson(_))));
    }

    #[test]
    fn subscribe_lists_requested_events() {
        let sub: Subscribe = decode_line(r#"{"events":["priceUpdate"]}"#).unwrap();
        assert_eq!(sub, Subscribe::price_updates());
        assert!(sub.wants(PRICE_UPDATE));
        assert!(!sub.wants("tick"));
    }
}
