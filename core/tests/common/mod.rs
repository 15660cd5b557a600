//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use folio_core::llm::{ContentGenerator, GenerateContentRequest, GenerateContentResponse};
use folio_core::{FolioError, Result};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Generator that replays scripted replies in order and records every request
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<GenerateContentResponse>>>,
    pub requests: Mutex<Vec<GenerateContentRequest>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.push(Ok(GenerateContentResponse::from_text(text)))
    }

    pub fn fail(self, err: FolioError) -> Self {
        self.push(Err(err))
    }

    fn push(self, r: Result<GenerateContentResponse>) -> Self {
        self.replies.lock().unwrap().push_back(r);
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<GenerateContentRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FolioError::Transport("script exhausted".into())))
    }
}

/// Layer that counts ERROR-level events
#[derive(Clone, Default)]
pub struct ErrorCounter(pub Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
