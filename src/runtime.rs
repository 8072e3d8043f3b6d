//! Runtime for executing chat sessions
//!
//! Each open widget gets its own event loop. Handlers talk to it through
//! an mpsc channel and watch it through a broadcast channel (SSE) plus a
//! watch channel holding the latest state snapshot.

mod executor;
pub mod traits;


pub use executor::SessionRuntime;
pub use traits::*;

use crate::resolver::AnswerResolver;
use crate::state_machine::{Event, Message, SessionContext, SessionState};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, watch, RwLock};

/// Resolver shared by every session, with the LLM client behind a trait object
pub type SharedResolver = Arc<AnswerResolver<Arc<dyn LlmClient>>>;

/// Type alias for production runtime
pub type ProductionRuntime = SessionRuntime<Arc<dyn LlmClient>>;

/// Errors from session lookup and dispatch
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Session runtime has stopped: {0}")]
    Stopped(String),
}

/// Handle to interact with a running session
#[derive(Clone)]
pub struct SessionHandle {
    pub event_tx: mpsc::Sender<Event>,
    pub broadcast_tx: broadcast::Sender<SseEvent>,
    pub state_rx: watch::Receiver<SessionState>,
}

/// Events sent to SSE clients
#[derive(Debug, Clone)]
pub enum SseEvent {
    Init { session_id: String, state: SessionState },
    Message { message: Message },
    StateChange { state: SessionState },
    Error { message: String },
}

type SessionMap = Arc<RwLock<HashMap<String, SessionHandle>>>;

/// Manager for all session runtimes
pub struct SessionManager {
    resolver: SharedResolver,
    preset_delay: Duration,
    idle_timeout: Duration,
    /// Shared with each runtime task, which deregisters itself on exit
    sessions: SessionMap,
}

impl SessionManager {
    pub fn new(resolver: SharedResolver, preset_delay: Duration, idle_timeout: Duration) -> Self {
        Self {
            resolver,
            preset_delay,
            idle_timeout,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Open a new session and start its runtime. Returns the id and the initial state.
    pub async fn create(&self) -> (String, SessionState) {
        let session_id = uuid::Uuid::new_v4().to_string();
        let context = SessionContext::new(&session_id, self.preset_delay);

        let (event_tx, event_rx) = mpsc::channel(32);
        let (broadcast_tx, _) = broadcast::channel(128);
        let (state_tx, state_rx) = watch::channel(SessionState::new());

        let runtime: ProductionRuntime = SessionRuntime::new(
            context,
            self.resolver.clone(),
            event_rx,
            event_tx.clone(),
            broadcast_tx.clone(),
            state_tx,
            self.idle_timeout,
        );

        // Insert before spawning; the task removes the entry when the runtime exits
        self.sessions.write().await.insert(
            session_id.clone(),
            SessionHandle {
                event_tx,
                broadcast_tx,
                state_rx,
            },
        );

        // Start runtime in background
        let id = session_id.clone();
        let sessions = Arc::clone(&self.sessions);
        tokio::spawn(async move {
            runtime.run().await;
            sessions.write().await.remove(&id);
            tracing::info!(session_id = %id, "Session runtime finished");
        });

        tracing::info!(session_id = %session_id, "Session created");
        (session_id, SessionState::new())
    }

    /// Get the handle of a live session
    pub async fn get(&self, session_id: &str) -> Result<SessionHandle, SessionError> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }

    /// Send an event to a session
    pub async fn send_event(&self, session_id: &str, event: Event) -> Result<(), SessionError> {
        let handle = self.get(session_id).await?;
        handle
            .event_tx
            .send(event)
            .await
            .map_err(|_| SessionError::Stopped(session_id.to_string()))
    }

    /// Latest state of a session
    pub async fn snapshot(&self, session_id: &str) -> Result<SessionState, SessionError> {
        let handle = self.get(session_id).await?;
        let state = handle.state_rx.borrow().clone();
        Ok(state)
    }

    /// Subscribe to session updates, together with the state to start from
    pub async fn subscribe(
        &self,
        session_id: &str,
    ) -> Result<(SessionState, broadcast::Receiver<SseEvent>), SessionError> {
        let handle = self.get(session_id).await?;
        // Subscribe first so nothing between snapshot and stream is missed
        let rx = handle.broadcast_tx.subscribe();
        let state = handle.state_rx.borrow().clone();
        Ok((state, rx))
    }

    /// Close a session: cancels pending work, stops the runtime, forgets the handle.
    /// Sessions nobody closes are closed by their runtime once idle.
    pub async fn close(&self, session_id: &str) -> Result<(), SessionError> {
        let handle = self
            .sessions
            .write()
            .await
            .remove(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;

        if handle.event_tx.send(Event::Close).await.is_err() {
            tracing::debug!(session_id = %session_id, "Runtime already stopped before close");
        }
        tracing::info!(session_id = %session_id, "Session closed");
        Ok(())
    }

    #[allow(dead_code)] // Used by tests
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
