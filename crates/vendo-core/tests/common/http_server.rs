//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body for every GET (any path) and counts the
//! requests it answers. Can be told to answer with an error status.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct TestServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    /// Number of requests answered so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body` with 200 OK.
/// Returns the base URL (e.g. "http://127.0.0.1:12345/"). The server runs
/// until the process exits.
pub fn start(body: Vec<u8>) -> TestServer {
    start_with_status(body, 200)
}

/// Like `start` but always responds with `status`.
pub fn start_with_status(body: Vec<u8>, status: u16) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let body = Arc::new(body);

    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &body, status, &hits));
        }
    });

    TestServer {
        url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], status: u16, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    hits.fetch_add(1, Ordering::SeqCst);

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
