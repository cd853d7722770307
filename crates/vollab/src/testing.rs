//! Service doubles for unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{Error, Result};
use crate::model::{Identity, Lab, LabStatus, NewLab};
use crate::service::{LabService, LoginRequest, MockService, SignupProfile};

/// A service that fails every call.
#[derive(Debug, Default)]
pub(crate) struct OfflineService;

#[async_trait]
impl LabService for OfflineService {
    async fn login(&self, _request: &LoginRequest) -> Result<Identity> {
        Err(Error::internal("offline"))
    }

    async fn signup(&self, _profile: SignupProfile) -> Result<Identity> {
        Err(Error::internal("offline"))
    }

    async fn get_labs(&self) -> Result<Vec<Lab>> {
        Err(Error::internal("offline"))
    }

    async fn add_lab(&self, _lab: NewLab) -> Result<Lab> {
        Err(Error::internal("offline"))
    }

    async fn update_lab(&self, _lab: Lab) -> Result<Lab> {
        Err(Error::internal("offline"))
    }

    async fn delete_lab(&self, _id: &str) -> Result<()> {
        Err(Error::internal("offline"))
    }

    async fn update_lab_status(&self, _id: &str, _status: LabStatus) -> Result<()> {
        Err(Error::internal("offline"))
    }
}

/// A working mock whose status updates fail.
#[derive(Debug)]
pub(crate) struct StatusFailureService {
    pub(crate) inner: MockService,
}

impl StatusFailureService {
    pub(crate) fn new() -> Self {
        Self {
            inner: MockService::instant(),
        }
    }
}

#[async_trait]
impl LabService for StatusFailureService {
    async fn login(&self, request: &LoginRequest) -> Result<Identity> {
        self.inner.login(request).await
    }

    async fn signup(&self, profile: SignupProfile) -> Result<Identity> {
        self.inner.signup(profile).await
    }

    async fn get_labs(&self) -> Result<Vec<Lab>> {
        self.inner.get_labs().await
    }

    async fn add_lab(&self, lab: NewLab) -> Result<Lab> {
        self.inner.add_lab(lab).await
    }

    async fn update_lab(&self, lab: Lab) -> Result<Lab> {
        self.inner.update_lab(lab).await
    }

    async fn delete_lab(&self, id: &str) -> Result<()> {
        self.inner.delete_lab(id).await
    }

    async fn update_lab_status(&self, _id: &str, _status: LabStatus) -> Result<()> {
        Err(Error::internal("status service unavailable"))
    }
}

/// In-memory sink for formatted log lines.
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a debug-level subscriber and return what it logged.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(buffer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
