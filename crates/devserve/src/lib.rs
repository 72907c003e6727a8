// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loopback static file server for local development.
//!
//! Serves one directory over HTTP/1 on `127.0.0.1`, one task per
//! connection. Clients that hang up mid-response are not an error.
//!
//! A request for a directory is answered with its `index.html`. There are no
//! generated directory listings: a directory without an index is a 404.

pub mod cli;
pub mod server;

pub use server::{is_broken_pipe, DevServer, ServeConfig, ServeError, DEFAULT_PORT};
