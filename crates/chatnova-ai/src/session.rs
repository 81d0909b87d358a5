//! Conversation session: the append-only turn history.
//!
//! A `Session` owns the history and mediates every exchange with a
//! `ChatClient`. History grows by two turns on a successful exchange
//! and by one on a failed one: the user turn is appended before the
//! call and deliberately kept when the call fails, so the next turn
//! still carries the user's intent. The failed reply is never recorded.

use crate::{ChatClient, ChatError, Message};

/// A conversation session. Created empty, never persisted.
#[derive(Debug, Default)]
pub struct Session {
    messages: Vec<Message>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn, ask the backend for a reply with the full
    /// history, and on success append the model turn.
    ///
    /// Callers are expected to hand in non-empty, trimmed text; blank
    /// input is filtered out before a session is involved.
    pub async fn submit(
        &mut self,
        client: &dyn ChatClient,
        text: impl Into<String>,
    ) -> Result<String, ChatError> {
        self.messages.push(Message::user(text));

        let reply = client.generate(&self.messages).await?;

        self.messages.push(Message::model(reply.clone()));
        Ok(reply)
    }

    /// Drop the whole history.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn turns(&self) -> &[Message] {
        &self.messages
    }

    pub fn turn_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::Role;

    /// Scripted backend: replays canned results and records what it saw.
    struct ScriptedClient {
        script: Mutex<Vec<Result<String, ChatError>>>,
        fallback: Option<String>,
        calls: AtomicUsize,
        last_history_len: AtomicUsize,
    }

    impl ScriptedClient {
        fn new(script: Vec<Result<String, ChatError>>) -> Self {
            Self {
                script: Mutex::new(script),
                fallback: None,
                calls: AtomicUsize::new(0),
                last_history_len: AtomicUsize::new(0),
            }
        }

        /// Answer every call with the same reply.
        fn always(reply: &str) -> Self {
            Self {
                fallback: Some(reply.to_string()),
                ..Self::new(Vec::new())
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatClient for ScriptedClient {
        async fn generate(&self, history: &[Message]) -> Result<String, ChatError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.last_history_len.store(history.len(), Ordering::SeqCst);
            let mut script = self.script.lock().unwrap();
            if script.is_empty() {
                match &self.fallback {
                    Some(reply) => Ok(reply.clone()),
                    None => panic!("scripted client exhausted"),
                }
            } else {
                script.remove(0)
            }
        }
    }

    #[tokio::test]
    async fn successful_submit_appends_both_turns() {
        let client = ScriptedClient::always("hi");
        let mut session = Session::new();

        let reply = session.submit(&client, "hello").await.unwrap();

        assert_eq!(reply, "hi");
        assert_eq!(session.turn_count(), 2);
        assert_eq!(
            session.turns(),
            &[Message::user("hello"), Message::model("hi")]
        );
    }

    #[tokio::test]
    async fn submit_sends_history_including_new_user_turn() {
        let client = ScriptedClient::always("ok");
        let mut session = Session::new();

        session.submit(&client, "one").await.unwrap();
        session.submit(&client, "two").await.unwrap();

        // Second call saw user+model+user.
        assert_eq!(client.last_history_len.load(Ordering::SeqCst), 3);
        assert_eq!(session.turn_count(), 4);
    }

    #[tokio::test]
    async fn failed_submit_keeps_dangling_user_turn() {
        let client = ScriptedClient::new(vec![Err(ChatError::Api("rate limited".into()))]);
        let mut session = Session::new();

        let err = session.submit(&client, "hello").await.unwrap_err();

        assert!(err.to_string().contains("rate limited"));
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.turns()[0].role, Role::User);
        assert_eq!(session.turns()[0].text, "hello");
    }

    #[tokio::test]
    async fn network_failure_also_keeps_user_turn() {
        let client =
            ScriptedClient::new(vec![Err(ChatError::Network("connection refused".into()))]);
        let mut session = Session::new();

        session.submit(&client, "hello").await.unwrap_err();

        assert_eq!(session.turns(), &[Message::user("hello")]);
    }

    #[tokio::test]
    async fn recovery_after_failure_resends_dangling_turn() {
        let client = ScriptedClient::new(vec![
            Err(ChatError::Network("timeout".into())),
            Ok("better now".to_string()),
        ]);
        let mut session = Session::new();

        session.submit(&client, "first").await.unwrap_err();
        session.submit(&client, "second").await.unwrap();

        // The dangling turn from the failed call is still in context.
        assert_eq!(client.last_history_len.load(Ordering::SeqCst), 2);
        assert_eq!(
            session.turns(),
            &[
                Message::user("first"),
                Message::user("second"),
                Message::model("better now"),
            ]
        );
    }

    #[tokio::test]
    async fn clear_empties_history() {
        let client = ScriptedClient::always("hi");
        let mut session = Session::new();

        session.submit(&client, "hello").await.unwrap();
        assert_eq!(session.turn_count(), 2);

        session.clear();
        assert!(session.is_empty());

        // Clearing an already-empty session is a no-op.
        session.clear();
        assert_eq!(session.turn_count(), 0);
    }

    #[tokio::test]
    async fn each_submit_makes_exactly_one_call() {
        let client = ScriptedClient::always("hi");
        let mut session = Session::new();

        session.submit(&client, "a").await.unwrap();
        session.submit(&client, "b").await.unwrap();

        assert_eq!(client.calls(), 2);
    }
}
