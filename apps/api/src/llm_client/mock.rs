//! In-memory `CompletionService` for tests: records every prompt, returns a canned reply.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionService, LlmError};

pub struct MockCompletion {
    reply: Result<String, (u16, String)>,
    prompts: Mutex<Vec<String>>,
}

impl MockCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Err((status, message.to_string())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
