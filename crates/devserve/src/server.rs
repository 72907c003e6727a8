// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Accept loop and per-connection file serving.

use std::convert::Infallible;
use std::error::Error as StdError;
use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tower::ServiceExt;
use tower_http::services::ServeDir;

pub const DEFAULT_PORT: u16 = 4173;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServeConfig {
    /// Port on 127.0.0.1; 0 picks a free one.
    pub port: u16,
    pub directory: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("cannot serve {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// A bound server that has not started accepting yet.
#[derive(Debug)]
pub struct DevServer {
    listener: TcpListener,
    root: PathBuf,
}

impl DevServer {
    pub async fn bind(config: &ServeConfig) -> Result<Self, ServeError> {
        let directory_err = |source| ServeError::Directory {
            path: config.directory.clone(),
            source,
        };
        let root = std::path::absolute(&config.directory).map_err(directory_err)?;
        if !std::fs::metadata(&root).map_err(directory_err)?.is_dir() {
            return Err(ServeError::NotADirectory(root));
        }

        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, config.port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind { addr, source })?;
        Ok(Self { listener, root })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Absolute path of the served directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Accept connections until `shutdown` resolves, then close the listener.
    /// Connections already accepted finish on their own tasks.
    ///
    /// Directories are served through their `index.html` only; there is no
    /// directory listing.
    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let files = ServeDir::new(&self.root);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => break,
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            tokio::spawn(serve_connection(stream, peer, files.clone()));
                        }
                        Err(err) => tracing::warn!(error = %err, "accept failed"),
                    }
                }
            }
        }
        tracing::debug!(root = %self.root.display(), "listener closed");
    }
}

async fn serve_connection(stream: TcpStream, peer: SocketAddr, files: ServeDir) {
    let service = service_fn(move |req: Request<Incoming>| {
        let files = files.clone();
        async move {
            let method = req.method().clone();
            let path = req.uri().path().to_string();
            let response = files.oneshot(req).await?;
            tracing::info!(
                %peer,
                %method,
                path = %path,
                status = response.status().as_u16(),
                "request"
            );
            Ok::<_, Infallible>(response)
        }
    });

    if let Err(err) = http1::Builder::new()
        .serve_connection(TokioIo::new(stream), service)
        .await
    {
        if !is_broken_pipe(&err) {
            tracing::warn!(%peer, error = %err, "connection error");
        }
    }
}

/// True if `err` or anything in its source chain is a broken pipe.
pub fn is_broken_pipe(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if err
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
        {
            return true;
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
