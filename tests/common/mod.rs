//! Shared fixtures for the integration test suite.
#![allow(dead_code)]

use once_cell::sync::Lazy;
use small_utils::User;
use std::collections::HashMap;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

pub fn sample_map() -> HashMap<String, i64> {
    HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)])
}

/// Builds `User` records and remembers everything it handed out, so a test
/// can assert against the full creation history.
#[derive(Default)]
pub struct UserFactory {
    created: Vec<User>,
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> User {
        let user = User::new(name);
        self.created.push(user.clone());
        user
    }

    pub fn created(&self) -> &[User] {
        &self.created
    }
}

static MODULE_RESOURCE: Lazy<(TempDir, PathBuf)> = Lazy::new(|| {
    let dir = TempDir::new().expect("create module resource dir");
    let file = dir.path().join("resource.txt");
    std::fs::write(&file, "module resource").expect("write module resource");
    (dir, file)
});

/// Lazily created temp file shared by every test in the binary. Initialized
/// on first use, never re-created.
pub fn module_resource() -> &'static Path {
    &MODULE_RESOURCE.1
}

/// Sets environment variables for the duration of a test and removes them on
/// drop. Combine with `#[serial]` so env-mutating tests never interleave.
pub struct EnvGuard {
    vars: Vec<String>,
}

impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { vars: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.vars.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            env::remove_var(var);
        }
    }
}

/// Setup/teardown demo: the connection is live while the value exists and the
/// shared flag flips to false when it drops.
pub struct Connection {
    connected: Arc<AtomicBool>,
}

impl Connection {
    pub fn open() -> Self {
        Self {
            connected: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn status_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.connected)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.connected.store(false, Ordering::SeqCst);
    }
}

/// `MakeWriter` that collects formatted log output into a shared buffer, so a
/// test can assert on what a scoped subscriber wrote.
#[derive(Clone, Default)]
pub struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
