//! Loopback HTTP server answering a single request with a canned response.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

pub(crate) struct TestServer {
    addr: String,
    requests: Receiver<String>,
}

impl TestServer {
    /// Serve one connection, replying with `status` and `body`.
    pub(crate) fn respond(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let (tx, requests) = mpsc::channel();
        let body = body.to_string();

        thread::spawn(move || {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            // Drain headers
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
            }

            let mut stream = stream;
            let response = format!(
                "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
            let _ = tx.send(request_line.trim_end().to_string());
        });

        Self { addr, requests }
    }

    pub(crate) fn url(&self) -> String {
        format!("http://{}/api/v1/query_range", self.addr)
    }

    /// The request line of the request that was served.
    pub(crate) fn request_line(&self) -> String {
        self.requests.recv_timeout(Duration::from_secs(5)).unwrap()
    }
}
