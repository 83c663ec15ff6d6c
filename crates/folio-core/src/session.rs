// ABOUTME: Agent chat session and the simulated dispatch loop
// ABOUTME: One transcript per session, at most one exchange in flight

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::catalog::AgentDescriptor;
use crate::responder::ResponderRegistry;
use crate::types::{ChatMessage, TaskResult};

/// Half-open range the artificial response delay is drawn from, standing in
/// for real network/model latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self {
            min_ms: 2000,
            max_ms: 4000,
        }
    }
}

impl LatencyRange {
    /// Fixed delay, useful for deterministic demos and tests.
    pub fn fixed(ms: u64) -> Self {
        Self {
            min_ms: ms,
            max_ms: ms,
        }
    }

    fn draw(self) -> Duration {
        let ms = if self.max_ms > self.min_ms {
            rand::thread_rng().gen_range(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        };
        Duration::from_millis(ms)
    }
}

/// A resolved exchange, sent back over the session channel. Tagged with the
/// originating session so deliveries for an abandoned session can be dropped.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub session_id: Uuid,
    pub content: String,
    pub result: TaskResult,
}

/// One live chat session with a selected agent. Owns the transcript and the
/// pending exchange, if any. Dropping or closing the session aborts the
/// pending exchange; a delivery that races past the close is rejected by
/// [`Session::accept`].
pub struct Session {
    id: Uuid,
    agent: AgentDescriptor,
    transcript: Vec<ChatMessage>,
    pending: Option<JoinHandle<()>>,
    latency: LatencyRange,
    registry: Arc<ResponderRegistry>,
    tx: mpsc::UnboundedSender<Delivery>,
    closed: bool,
}

impl Session {
    /// Open a session and seed the transcript with the agent's greeting.
    pub fn open(
        agent: AgentDescriptor,
        user_name: &str,
        registry: Arc<ResponderRegistry>,
        latency: LatencyRange,
        tx: mpsc::UnboundedSender<Delivery>,
    ) -> Self {
        let greeting = format!(
            "Hello {}! I'm {}. I'm here to help you with {} What would you like me to help you with today?",
            user_name,
            agent.name,
            agent.description.to_lowercase(),
        );
        let mut session = Self {
            id: Uuid::new_v4(),
            agent,
            transcript: Vec::new(),
            pending: None,
            latency,
            registry,
            tx,
            closed: false,
        };
        session.transcript.push(ChatMessage::agent(greeting, None));
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn agent(&self) -> &AgentDescriptor {
        &self.agent
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Whether an exchange is in flight. Input is disabled while pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit user text. Returns false (and leaves the transcript unchanged)
    /// if the text is blank or a prior exchange is still pending.
    pub fn submit(&mut self, user_text: &str) -> bool {
        let trimmed = user_text.trim();
        if trimmed.is_empty() || self.closed {
            return false;
        }
        if self.pending.is_some() {
            tracing::debug!(agent = self.agent.id, "submission ignored while pending");
            return false;
        }

        self.transcript.push(ChatMessage::user(trimmed.to_string()));

        let session_id = self.id;
        let agent_id = self.agent.id;
        let registry = Arc::clone(&self.registry);
        let delay = self.latency.draw();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let delivery = Delivery {
                session_id,
                content: registry.pick_line(agent_id).to_string(),
                result: registry.build_result(agent_id),
            };
            let _ = tx.send(delivery);
        });
        self.pending = Some(handle);
        true
    }

    /// Apply a delivery from the channel. Returns true if it belonged to
    /// this session and was appended; deliveries for another session or a
    /// closed one are dropped.
    pub fn accept(&mut self, delivery: Delivery) -> bool {
        if self.closed || delivery.session_id != self.id {
            tracing::debug!(agent = self.agent.id, "dropping stale delivery");
            return false;
        }
        self.transcript
            .push(ChatMessage::agent(delivery.content, Some(delivery.result)));
        self.pending = None;
        true
    }

    /// Abort the pending exchange, if any, and refuse further traffic.
    /// Called when the user navigates away from the agent view.
    pub fn close(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.closed = true;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::{MessageStatus, Role};

    fn open_session(
        agent_id: &str,
        latency: LatencyRange,
    ) -> (Session, mpsc::UnboundedReceiver<Delivery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let agent = *catalog::find(agent_id).expect("agent in catalog");
        let session = Session::open(
            agent,
            "a",
            Arc::new(ResponderRegistry::builtin()),
            latency,
            tx,
        );
        (session, rx)
    }

    #[tokio::test]
    async fn test_open_seeds_greeting_from_agent() {
        let (session, _rx) = open_session("data-analyst", LatencyRange::fixed(1));
        let first = &session.transcript()[0];
        assert_eq!(first.role, Role::Agent);
        assert_eq!(first.status, Some(MessageStatus::Completed));
        assert!(first.content.contains("Data Analyst Pro"));
        assert!(first.content.contains("Hello a!"));
    }

    #[tokio::test]
    async fn test_blank_input_is_refused() {
        let (mut session, _rx) = open_session("data-analyst", LatencyRange::fixed(1));
        assert!(!session.submit(""));
        assert!(!session.submit("   \n\t"));
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_submit_appends_user_message_and_goes_pending() {
        let (mut session, _rx) = open_session("data-analyst", LatencyRange::fixed(50));
        assert!(session.submit("  hello  "));
        assert!(session.is_pending());
        let last = session.transcript().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "hello");
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_ignored() {
        let (mut session, _rx) = open_session("data-analyst", LatencyRange::fixed(5000));
        assert!(session.submit("first"));
        let before = session.transcript().to_vec();
        assert!(!session.submit("second"));
        assert_eq!(session.transcript(), before.as_slice());
    }

    #[tokio::test]
    async fn test_full_exchange_for_data_analyst() {
        let (mut session, mut rx) = open_session("data-analyst", LatencyRange::fixed(1));
        assert!(session.submit("hello"));
        let delivery = rx.recv().await.expect("delivery");
        assert!(session.accept(delivery));
        assert!(!session.is_pending());

        let last = session.transcript().last().unwrap();
        assert_eq!(last.role, Role::Agent);
        assert_eq!(last.status, Some(MessageStatus::Completed));
        match last.result.as_ref().expect("result payload") {
            TaskResult::Analysis { insights, .. } => assert_eq!(insights.len(), 3),
            other => panic!("expected analysis result, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exchange_resolves_then_accepts_new_input() {
        let (mut session, mut rx) = open_session("content-creator", LatencyRange::fixed(1));
        assert!(session.submit("draft a post"));
        let delivery = rx.recv().await.unwrap();
        session.accept(delivery);
        assert!(session.submit("another"));
        assert_eq!(session.transcript().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_aborts_pending_exchange() {
        let (mut session, mut rx) = open_session("data-analyst", LatencyRange::fixed(3000));
        assert!(session.submit("hello"));
        session.close();
        // Give the (aborted) task every chance to have run.
        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert!(rx.try_recv().is_err());
        assert!(!session.submit("after close"));
    }

    #[tokio::test]
    async fn test_closed_session_rejects_late_delivery() {
        let (mut session, _rx) = open_session("data-analyst", LatencyRange::fixed(1));
        let late = Delivery {
            session_id: session.id(),
            content: "too late".to_string(),
            result: ResponderRegistry::builtin().build_result("data-analyst"),
        };
        let before = session.transcript().len();
        session.close();
        assert!(!session.accept(late));
        assert_eq!(session.transcript().len(), before);
    }

    #[tokio::test]
    async fn test_delivery_for_other_session_is_dropped() {
        let (mut session, _rx) = open_session("data-analyst", LatencyRange::fixed(1));
        let foreign = Delivery {
            session_id: Uuid::new_v4(),
            content: "wrong session".to_string(),
            result: ResponderRegistry::builtin().build_result("data-analyst"),
        };
        assert!(!session.accept(foreign));
        assert_eq!(session.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_latency_draw_stays_in_range() {
        let range = LatencyRange {
            min_ms: 10,
            max_ms: 20,
        };
        for _ in 0..50 {
            let d = range.draw();
            assert!(d >= Duration::from_millis(10));
            assert!(d < Duration::from_millis(20));
        }
        assert_eq!(
            LatencyRange::fixed(7).draw(),
            Duration::from_millis(7)
        );
    }
}
