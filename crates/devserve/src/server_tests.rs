// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::fmt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::oneshot;

struct Running {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<()>,
}

async fn start(dir: &Path) -> Running {
    let server = DevServer::bind(&ServeConfig {
        port: 0,
        directory: dir.to_path_buf(),
    })
    .await
    .unwrap();
    let addr = server.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.run_until(async {
        let _ = stopped.await;
    }));
    Running { addr, stop, handle }
}

async fn get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).into_owned()
}

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>seeds</h1>").unwrap();
    std::fs::write(dir.path().join("data.txt"), "ANTE 1").unwrap();
    dir
}

#[tokio::test]
async fn serves_files_from_the_directory() {
    let dir = site();
    let running = start(dir.path()).await;

    let response = get(running.addr, "/data.txt").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.ends_with("ANTE 1"));

    running.stop.send(()).unwrap();
    running.handle.await.unwrap();
}

#[tokio::test]
async fn directory_serves_index() {
    let dir = site();
    let running = start(dir.path()).await;

    let response = get(running.addr, "/").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.contains("<h1>seeds</h1>"));
}

#[tokio::test]
async fn directory_without_index_is_not_listed() {
    let dir = site();
    std::fs::create_dir(dir.path().join("fixtures")).unwrap();
    std::fs::write(dir.path().join("fixtures").join("seed.txt"), "ANTE 2").unwrap();
    let running = start(dir.path()).await;

    let response = get(running.addr, "/fixtures/").await;
    assert!(response.starts_with("HTTP/1.1 404"), "{response}");
    assert!(!response.contains("seed.txt"));
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = site();
    let running = start(dir.path()).await;

    let response = get(running.addr, "/nope.txt").await;
    assert!(response.starts_with("HTTP/1.1 404"), "{response}");
}

#[tokio::test]
async fn parent_paths_do_not_escape_the_root() {
    let outer = tempfile::tempdir().unwrap();
    std::fs::write(outer.path().join("secret.txt"), "hidden").unwrap();
    let served = outer.path().join("public");
    std::fs::create_dir(&served).unwrap();
    let running = start(&served).await;

    let response = get(running.addr, "/../secret.txt").await;
    assert!(!response.contains("hidden"), "{response}");
}

#[tokio::test]
async fn shutdown_closes_the_listener() {
    let dir = site();
    let running = start(dir.path()).await;
    running.stop.send(()).unwrap();
    running.handle.await.unwrap();

    assert!(TcpStream::connect(running.addr).await.is_err());
}

#[tokio::test]
async fn binds_loopback_only() {
    let dir = site();
    let server = DevServer::bind(&ServeConfig {
        port: 0,
        directory: dir.path().to_path_buf(),
    })
    .await
    .unwrap();
    assert!(server.local_addr().unwrap().ip().is_loopback());
    assert!(server.root().is_absolute());
}

#[tokio::test]
async fn missing_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = DevServer::bind(&ServeConfig {
        port: 0,
        directory: dir.path().join("missing"),
    })
    .await
    .unwrap_err();
    assert!(matches!(err, ServeError::Directory { .. }), "{err:?}");
}

#[tokio::test]
async fn file_is_not_a_directory() {
    let dir = site();
    let err = DevServer::bind(&ServeConfig {
        port: 0,
        directory: dir.path().join("data.txt"),
    })
    .await
    .unwrap_err();
    assert!(matches!(err, ServeError::NotADirectory(_)), "{err:?}");
}

#[derive(Debug)]
struct Wrapped(io::Error);

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "write failed")
    }
}

impl StdError for Wrapped {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn broken_pipe_is_found_in_source_chain() {
    let direct = io::Error::from(io::ErrorKind::BrokenPipe);
    assert!(is_broken_pipe(&direct));

    let wrapped = Wrapped(io::Error::from(io::ErrorKind::BrokenPipe));
    assert!(is_broken_pipe(&wrapped));
}

#[test]
fn other_io_errors_are_not_broken_pipes() {
    assert!(!is_broken_pipe(&io::Error::from(io::ErrorKind::ConnectionReset)));
    assert!(!is_broken_pipe(&Wrapped(io::Error::other("disk full"))));
}
