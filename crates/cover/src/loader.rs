use crate::resolver::CoverDescriptor;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Seam for the network collaborator that actually downloads cover bytes.
/// The core imposes no timeout and no retry; both belong to the implementor.
#[async_trait]
pub trait CoverFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}

/// Cover bytes as delivered by a finished load. Base64 text stays encoded;
/// decoding is downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverPayload {
    Raw(Vec<u8>),
    Base64(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCover {
    pub mime_type: String,
    pub payload: CoverPayload,
}

/// Handle of one background cover load.
///
/// Cancellation is a flag, not an interrupt: the underlying fetch may still
/// run to completion, but a task that finds the flag set yields nothing, so
/// a load finishing after its target is gone is a silent no-op.
pub struct CoverLoadTask {
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<Option<LoadedCover>>,
}

/// Spawns the load for a classified cover reference. Remote covers go
/// through `fetcher` off the calling context; inline covers complete
/// immediately with their still-encoded payload; `None` completes empty.
pub fn spawn_load(fetcher: Arc<dyn CoverFetcher>, descriptor: CoverDescriptor) -> CoverLoadTask {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);
    let handle = tokio::spawn(async move {
        let loaded = match descriptor {
            CoverDescriptor::None => None,
            CoverDescriptor::InlineBase64 { mime_type, payload } => Some(LoadedCover {
                mime_type,
                payload: CoverPayload::Base64(payload),
            }),
            CoverDescriptor::Remote { url, mime_type } => match fetcher.fetch(&url).await {
                Ok(bytes) => Some(LoadedCover {
                    mime_type,
                    payload: CoverPayload::Raw(bytes),
                }),
                Err(err) => {
                    log::warn!("cover fetch failed for {url}: {err:#}");
                    None
                }
            },
        };
        if flag.load(Ordering::SeqCst) {
            None
        } else {
            loaded
        }
    });
    CoverLoadTask { cancelled, handle }
}

impl CoverLoadTask {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Waits for the load. Yields `None` for cancelled loads, fetch
    /// failures, and references that classified as no cover.
    pub async fn join(self) -> Option<LoadedCover> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) => {
                log::warn!("cover load task failed to join: {err}");
                None
            }
        }
    }
}
