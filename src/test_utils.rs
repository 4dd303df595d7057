// SPDX-License-Identifier: MIT

//! A throwaway HTTP catalog for tests.
//!
//! It answers each connection once and closes it. Template routes require the raw media type
//! (406 otherwise), every route requires a `User-Agent` (403 otherwise, as GitHub does).

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use crate::config::catalog::RAW_MEDIA_TYPE;

const TEMPLATES_PATH: &str = "/gitignore/templates";

/// A canned catalog response.
#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    status: u16,
    body: String,
    raw_only: bool,
}

impl Route {
    /// The template listing.
    pub fn listing(body: &str) -> Self {
        Self {
            path: TEMPLATES_PATH.to_owned(),
            status: 200,
            body: body.to_owned(),
            raw_only: false,
        }
    }

    /// A single template.
    pub fn template(name: &str, status: u16, body: &str) -> Self {
        Self {
            path: format!("{}/{}", TEMPLATES_PATH, name),
            status,
            body: body.to_owned(),
            raw_only: true,
        }
    }
}

/// Serves `routes` on a local port, returning the catalog's base URL. Unknown paths get a 404.
pub fn spawn_catalog(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub catalog");
    let addr = listener.local_addr().expect("failed to read stub catalog address");

    thread::spawn(move || {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => respond(stream, &routes),
                Err(_) => break,
            }
        }
    });

    format!("http://{}", addr)
}

/// Returns a base URL nothing listens on.
pub fn closed_catalog_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind probe listener");
    let addr = listener.local_addr().expect("failed to read probe address");
    drop(listener);

    format!("http://{}", addr)
}

fn respond(mut stream: TcpStream, routes: &[Route]) {
    let reader = match stream.try_clone() {
        Ok(clone) => clone,
        Err(_) => return,
    };
    let mut reader = BufReader::new(reader);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_owned();

    let mut accept = String::new();
    let mut user_agent = String::new();
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if line.trim().is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("accept") {
                accept = value.trim().to_owned();
            } else if name.eq_ignore_ascii_case("user-agent") {
                user_agent = value.trim().to_owned();
            }
        }
    }

    let (status, body) = match routes.iter().find(|route| route.path == path) {
        _ if user_agent.is_empty() => (403, "missing user agent"),
        Some(route) if route.raw_only && accept != RAW_MEDIA_TYPE => (406, "not acceptable"),
        Some(route) => (route.status, route.body.as_str()),
        None => (404, r#"{"message":"Not Found"}"#),
    };

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
