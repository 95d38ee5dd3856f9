//! In-memory provider for unit tests.

use crate::error::CraftError;
use crate::provider::Provider;
use crate::types::*;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Replays queued replies and records every request it receives.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, CraftError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
    delay: Option<Duration>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn fail(self, err: CraftError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        Arc::new(ProviderInfo {
            id: "scripted".to_string(),
            name: "Scripted".to_string(),
            default_model: "scripted-model".to_string(),
        })
    }

    async fn generate_content(
        &self,
        req: GenerateRequest,
    ) -> Result<GenerateResponse, CraftError> {
        let model = req.model.clone();
        self.requests.lock().unwrap().push(req);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CraftError::other("no scripted reply left")));

        next.map(|text| GenerateResponse {
            text,
            model,
            finish_reason: FinishReason::Stop,
            usage: Usage::default(),
        })
    }
}
