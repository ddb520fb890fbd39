//! Background index construction and the one-shot handoff.
//!
//! The build runs on a dedicated thread while the interactive session is
//! starting up. The session must never observe a partially built structure:
//! the building thread exclusively owns both the store and the index until
//! it publishes them, exactly once, through a bounded channel. The channel
//! receive is the memory-visibility boundary; after it, the published
//! [`SearchIndex`] is immutable and freely shared via `Arc` with no further
//! synchronization.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::dictionary::WordSource;
use crate::error::WordscanError;
use crate::index::SearchIndex;

/// Phase of the index build lifecycle.
///
/// Transitions are one-shot and one-directional:
/// `NotStarted → Building → Ready`. There is no rebuild and no invalidation
/// for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    /// The builder exists but no thread has been spawned yet.
    NotStarted,
    /// The build thread is running; the structures must not be read.
    Building,
    /// The index has been published and is immutable.
    Ready,
}

/// Result of polling a running build.
#[derive(Debug, Clone)]
pub enum BuildProgress {
    /// Not published yet; the caller must not issue queries.
    Building,
    /// The published, immutable index.
    Ready(Arc<SearchIndex>),
}

/// Configures and starts the background index build.
#[derive(Debug)]
pub struct IndexBuilder {
    source: WordSource,
}

impl IndexBuilder {
    /// Create a builder for the given word source. Phase: `NotStarted`.
    pub fn new(source: WordSource) -> Self {
        Self { source }
    }

    /// Spawn the build thread. Phase: `Building`.
    ///
    /// Loading and indexing happen entirely on the spawned thread; the
    /// returned task is the only way to reach the result.
    pub fn spawn(self) -> IndexTask {
        let (tx, rx) = mpsc::sync_channel(1);
        let source = self.source;
        let handle = thread::spawn(move || {
            let result = source.load().map(|store| Arc::new(SearchIndex::build(store)));
            // A dropped receiver means the session gave up; nothing to do.
            let _ = tx.send(result);
        });
        IndexTask {
            rx,
            handle: Some(handle),
            published: None,
        }
    }
}

/// Handle to a running (or finished) index build.
///
/// Consumers either block on [`wait`](IndexTask::wait) before their first
/// query or poll [`try_ready`](IndexTask::try_ready) to render a loading
/// placeholder in the meantime. Either way, no query can be issued against
/// an index that has not been published.
#[derive(Debug)]
pub struct IndexTask {
    rx: Receiver<Result<Arc<SearchIndex>, WordscanError>>,
    handle: Option<JoinHandle<()>>,
    published: Option<Arc<SearchIndex>>,
}

impl IndexTask {
    /// Current phase of the build.
    pub fn phase(&self) -> BuildPhase {
        if self.published.is_some() {
            BuildPhase::Ready
        } else {
            BuildPhase::Building
        }
    }

    /// Poll for the published index without blocking.
    ///
    /// A fatal load error (source unavailable) surfaces here once and
    /// terminates the task.
    pub fn try_ready(&mut self) -> Result<BuildProgress, WordscanError> {
        if let Some(index) = &self.published {
            return Ok(BuildProgress::Ready(Arc::clone(index)));
        }
        match self.rx.try_recv() {
            Ok(Ok(index)) => {
                self.join_build_thread();
                self.published = Some(Arc::clone(&index));
                Ok(BuildProgress::Ready(index))
            }
            Ok(Err(err)) => {
                self.join_build_thread();
                Err(err)
            }
            Err(TryRecvError::Empty) => Ok(BuildProgress::Building),
            Err(TryRecvError::Disconnected) => Err(WordscanError::BuildInterrupted),
        }
    }

    /// Block until the index is published, consuming the task.
    pub fn wait(mut self) -> Result<Arc<SearchIndex>, WordscanError> {
        if let Some(index) = self.published.take() {
            return Ok(index);
        }
        let result = self
            .rx
            .recv()
            .map_err(|_| WordscanError::BuildInterrupted)?;
        self.join_build_thread();
        result
    }

    fn join_build_thread(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
