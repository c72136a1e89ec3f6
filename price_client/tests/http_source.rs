//! `HttpPriceSource` against a one-shot loopback HTTP responder.
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pretty_assertions::assert_eq;
use price_client::{HttpPriceSource, PriceSource};
use price_common::{PriceError, PriceRecord};

/// Serve a single request with `status` and `body`; returns the request head.
fn respond_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/api/v3/simple/price", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let size = stream.read(&mut buf).unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&buf[..size]).to_string()
    });
    (url, handle)
}

fn source(url: &str) -> HttpPriceSource {
    HttpPriceSource::new(
        url,
        vec!["bitcoin".to_string(), "ethereum".to_string(), "litecoin".to_string()],
        Duration::from_secs(5),
    )
    .unwrap()
}

#[test]
fn success_decodes_mapping_and_sends_query() {
    let (url, server) = respond_once(
        "200 OK",
        r#"{"bitcoin":{"usd":50000,"eur":40000},"ethereum":{"usd":3000,"eur":2500}}"#,
    );

    let mapping = source(&url).fetch_prices().unwrap();
    let request = server.join().unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping["ethereum"], PriceRecord::new(3000.0, 2500.0));
    assert!(request.starts_with("GET /api/v3/simple/price?"));
    assert!(request.contains("ids=bitcoin%2Cethereum%2Clitecoin"));
    assert!(request.contains("vs_currencies=usd%2Ceur"));
}

#[test]
fn non_success_status_is_a_failure() {
    let (url, server) = respond_once("500 Internal Server Error", "{}");

    let result = source(&url).fetch_prices();
    server.join().unwrap();

    assert!(matches!(result, Err(PriceError::Status(500))));
}

#[test]
fn malformed_body_is_a_failure() {
    let (url, server) = respond_once("200 OK", r#"{"bitcoin":"cheap"}"#);

    let result = source(&url).fetch_prices();
    server.join().unwrap();

    assert!(matches!(result, Err(PriceError::Http(_))));
}
