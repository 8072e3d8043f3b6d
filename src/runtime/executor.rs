//! Chat session runtime executor

use super::traits::LlmClient;
use super::SseEvent;

use crate::resolver::AnswerResolver;
use crate::state_machine::{
    transition, Effect, Event, SessionContext, SessionState, TransitionError,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Session runtime, generic over the LLM client so tests can inject mocks
pub struct SessionRuntime<L>
where
    L: LlmClient + 'static,
{
    context: SessionContext,
    state: SessionState,
    resolver: Arc<AnswerResolver<L>>,
    event_rx: mpsc::Receiver<Event>,
    event_tx: mpsc::Sender<Event>,
    broadcast_tx: broadcast::Sender<SseEvent>,
    state_tx: watch::Sender<SessionState>,
    /// Token to cancel the outstanding preset delay or model call
    pending_cancel_token: Option<CancellationToken>,
    /// Close the session after this long with no events and no SSE subscriber
    idle_timeout: Duration,
    stopped: bool,
}

impl<L> SessionRuntime<L>
where
    L: LlmClient + 'static,
{
    pub fn new(
        context: SessionContext,
        resolver: Arc<AnswerResolver<L>>,
        event_rx: mpsc::Receiver<Event>,
        event_tx: mpsc::Sender<Event>,
        broadcast_tx: broadcast::Sender<SseEvent>,
        state_tx: watch::Sender<SessionState>,
        idle_timeout: Duration,
    ) -> Self {
        let state = state_tx.borrow().clone();
        Self {
            context,
            state,
            resolver,
            event_rx,
            event_tx,
            broadcast_tx,
            state_tx,
            pending_cancel_token: None,
            idle_timeout,
            stopped: false,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(session_id = %self.context.session_id, "Starting session runtime");

        let idle = tokio::time::sleep(self.idle_timeout);
        tokio::pin!(idle);

        // Process events in a loop - no recursion
        while !self.stopped {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    idle.as_mut().reset(Instant::now() + self.idle_timeout);
                    let name = event.name();
                    if let Err(e) = self.process_event(event) {
                        self.report_rejection(name, &e);
                    }
                }
                () = &mut idle => {
                    idle.as_mut().reset(Instant::now() + self.idle_timeout);
                    self.close_if_abandoned();
                }
                else => break,
            }
        }

        if let Some(token) = self.pending_cancel_token.take() {
            token.cancel();
        }
        tracing::info!(session_id = %self.context.session_id, "Session runtime stopped");
    }

    /// Close the session unless an SSE client is attached or an answer is pending
    fn close_if_abandoned(&mut self) {
        let subscribers = self.broadcast_tx.receiver_count();
        if subscribers > 0 || self.state.is_pending() {
            tracing::debug!(
                session_id = %self.context.session_id,
                subscribers,
                "Idle session still in use"
            );
            return;
        }

        tracing::info!(
            session_id = %self.context.session_id,
            idle_secs = self.idle_timeout.as_secs(),
            "Closing abandoned session"
        );
        if let Err(e) = self.process_event(Event::Close) {
            self.report_rejection(Event::Close.name(), &e);
        }
    }

    fn process_event(&mut self, event: Event) -> Result<(), TransitionError> {
        let result = transition(&self.state, &self.context, event, Utc::now())?;

        self.state = result.new_state;
        debug_assert!(self.state.is_consistent(), "mode and language disagree");
        self.state_tx.send_replace(self.state.clone());

        for effect in result.effects {
            self.execute_effect(effect);
        }
        Ok(())
    }

    /// Rejected events never change state. Stale completions and blank
    /// input are routine; anything else is worth telling the client about.
    fn report_rejection(&self, event_name: &str, error: &TransitionError) {
        match error {
            TransitionError::StaleCompletion(epoch) => {
                tracing::debug!(
                    session_id = %self.context.session_id,
                    event = event_name,
                    stale_epoch = epoch,
                    current_epoch = self.state.epoch,
                    "Dropping stale completion"
                );
            }
            TransitionError::EmptyInput => {
                tracing::debug!(session_id = %self.context.session_id, "Ignoring blank submission");
            }
            TransitionError::Busy
            | TransitionError::NoMatch(_)
            | TransitionError::InvalidTransition(_) => {
                tracing::warn!(
                    session_id = %self.context.session_id,
                    event = event_name,
                    error = %error,
                    "Event rejected"
                );
                let _ = self.broadcast_tx.send(SseEvent::Error {
                    message: error.to_string(),
                });
            }
        }
    }

    /// Fresh token for a new pending resolution
    fn arm_cancel_token(&mut self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending_cancel_token.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Execute an effect. Long-running work is spawned and reports back
    /// through the event channel.
    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartPresetDelay { delay, epoch } => {
                let cancel_token = self.arm_cancel_token();
                let event_tx = self.event_tx.clone();

                tokio::spawn(async move {
                    tokio::select! {
                        biased;

                        () = cancel_token.cancelled() => {
                            tracing::debug!(epoch, "Preset delay cancelled");
                        }

                        () = tokio::time::sleep(delay) => {
                            let _ = event_tx.send(Event::PresetDelayElapsed { epoch }).await;
                        }
                    }
                });
            }

            Effect::RequestAnswer {
                epoch,
                query,
                language,
            } => {
                let cancel_token = self.arm_cancel_token();
                let resolver = self.resolver.clone();
                let event_tx = self.event_tx.clone();

                tokio::spawn(async move {
                    tracing::info!(%language, "Requesting free-text answer (background)");

                    // Inner task so a panic in the client surfaces as a JoinError
                    let work = tokio::spawn(async move {
                        resolver.answer_or_apology(&query, language).await
                    });
                    let abort = work.abort_handle();

                    // Race the model call against cancellation
                    tokio::select! {
                        biased;

                        () = cancel_token.cancelled() => {
                            abort.abort();
                            tracing::info!(epoch, "Free-text request cancelled");
                        }

                        joined = work => {
                            let event = match joined {
                                Ok(text) => Event::ExternalAnswer { epoch, text },
                                Err(e) => {
                                    tracing::error!(error = %e, "Free-text task failed");
                                    Event::ExternalFailed { epoch, message: e.to_string() }
                                }
                            };
                            let _ = event_tx.send(event).await;
                        }
                    }
                });
            }

            Effect::CancelPending => {
                tracing::info!(
                    session_id = %self.context.session_id,
                    "Cancelling pending resolution"
                );
                if let Some(token) = self.pending_cancel_token.take() {
                    token.cancel();
                }
            }

            Effect::NotifyMessage { message } => {
                let _ = self.broadcast_tx.send(SseEvent::Message { message });
            }

            Effect::NotifyState => {
                let _ = self.broadcast_tx.send(SseEvent::StateChange {
                    state: self.state.clone(),
                });
            }

            Effect::Shutdown => {
                self.stopped = true;
            }
        }
    }
}
