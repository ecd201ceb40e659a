//! A throwaway local HTTP server for testing the client without the live site.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub struct CannedResponse {
    status: u16,
    content_type: String,
    body: Vec<u8>
}

impl CannedResponse {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        CannedResponse {
            status,
            content_type: "text/html".into(),
            body: body.as_bytes().to_vec()
        }
    }

    /// A 200 response with a raw body in whatever encoding `content_type`
    /// declares.
    pub fn encoded(content_type: &str, body: Vec<u8>) -> Self {
        CannedResponse {
            status: 200,
            content_type: content_type.into(),
            body
        }
    }
}

/// Serves the given responses in order, one per connection, and records the
/// raw text of every request it receives.
pub struct TestServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>
}

impl TestServer {
    pub fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(vec![]));
        let recorded = requests.clone();

        thread::spawn(move || {
            for resp in responses {
                let mut stream = match listener.accept() {
                    Ok((stream, _)) => stream,
                    Err(_) => return
                };

                let req = read_request(&mut stream);
                recorded.lock().unwrap().push(req);

                let head = format!("HTTP/1.1 {} Canned\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                                   resp.status,
                                   resp.content_type,
                                   resp.body.len());
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(&resp.body);
                let _ = stream.flush();
            }
        });

        TestServer {
            addr,
            requests
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut data = vec![];
    let mut buf = [0u8; 4096];

    let head_end = loop {
        if let Some(pos) = find(&data, b"\r\n\r\n") {
            break pos + 4;
        }

        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return String::from_utf8_lossy(&data).into(),
            Ok(n) => data.extend_from_slice(&buf[..n])
        }
    };

    let head = String::from_utf8_lossy(&data[..head_end]).to_lowercase();
    let body_len = head.lines()
        .filter_map(|line| line.strip_prefix("content-length:"))
        .filter_map(|len| len.trim().parse::<usize>().ok())
        .next()
        .unwrap_or(0);

    while data.len() < head_end + body_len {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n])
        }
    }

    String::from_utf8_lossy(&data).into()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
