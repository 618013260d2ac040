//! Static file server for the mini-app bundle
//!
//! Serves the trunk output from the dist/ directory on port 8080 so the
//! widget can be loaded during local development.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("PayLink mini-app server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");

    // Query strings are irrelevant for static files.
    let path = full_path.split_once('?').map_or(full_path, |(p, _)| p);

    let file_path = resolve_path(path);
    let content_type = content_type_for(&file_path);

    let (status, body) = match fs::read(&file_path) {
        Ok(contents) => ("HTTP/1.1 200 OK", contents),
        Err(_) => (
            "HTTP/1.1 404 NOT FOUND",
            b"404 - File Not Found".to_vec(),
        ),
    };

    let header = format!(
        "{status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );

    if stream.write_all(header.as_bytes()).is_ok() {
        if let Err(e) = stream.write_all(&body) {
            eprintln!("Failed to write response body: {}", e);
        }
    }
}

/// Map a request path to a file under dist/, falling back to index.html
/// for unknown paths so the page shell always loads.
fn resolve_path(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from("dist/index.html");
    }

    let mut dist_path = PathBuf::from("dist");
    dist_path.push(path.strip_prefix('/').unwrap_or(path));

    if dist_path.is_dir() || !dist_path.exists() {
        PathBuf::from("dist/index.html")
    } else {
        dist_path
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root() {
        assert_eq!(resolve_path("/"), PathBuf::from("dist/index.html"));
        assert_eq!(resolve_path(""), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_resolve_missing_falls_back_to_index() {
        assert_eq!(
            resolve_path("/no-such-file.xyz"),
            PathBuf::from("dist/index.html")
        );
    }

    #[test]
    fn test_content_types() {
        assert_eq!(
            content_type_for(&PathBuf::from("dist/index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            content_type_for(&PathBuf::from("dist/app.wasm")),
            "application/wasm"
        );
        assert_eq!(
            content_type_for(&PathBuf::from("dist/app_bg")),
            "application/octet-stream"
        );
    }
}
