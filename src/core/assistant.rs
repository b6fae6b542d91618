use crate::domain::ports::CompletionService;
use crate::utils::error::{NutriError, Result};
use std::sync::Arc;

/// Forwards nutrition questions to the completion backend.
///
/// Backend failures never reach the caller as errors: they come back as an
/// `Error: ...` string in place of the answer. Only an empty prompt is an error,
/// and it is rejected before any request is made.
#[derive(Clone)]
pub struct Assistant {
    backend: Arc<dyn CompletionService>,
}

impl Assistant {
    pub fn new(backend: Arc<dyn CompletionService>) -> Self {
        Self { backend }
    }

    pub async fn ask(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(NutriError::ValidationError {
                message: "Please enter a question.".to_string(),
            });
        }

        match self.backend.complete(prompt).await {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::error!("Completion request failed: {}", e);
                Ok(format!("Error: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedBackend {
        reply: std::result::Result<String, String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionService for ScriptedBackend {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(format!("{} <- {}", text, prompt)),
                Err(message) => Err(NutriError::AssistantError {
                    message: message.clone(),
                }),
            }
        }
    }

    fn backend(reply: std::result::Result<&str, &str>) -> Arc<ScriptedBackend> {
        Arc::new(ScriptedBackend {
            reply: reply.map(str::to_string).map_err(str::to_string),
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_empty_prompt_is_rejected_without_call() {
        let backend = backend(Ok("answer"));
        let assistant = Assistant::new(backend.clone());

        assert!(matches!(
            assistant.ask("").await,
            Err(NutriError::ValidationError { .. })
        ));
        assert!(assistant.ask("   \n").await.is_err());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_prompt_is_forwarded_verbatim() {
        let backend = backend(Ok("answer"));
        let assistant = Assistant::new(backend.clone());

        let reply = assistant.ask("  Is rice keto?  ").await.unwrap();
        assert_eq!(reply, "answer <-   Is rice keto?  ");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_becomes_error_string() {
        let assistant = Assistant::new(backend(Err("quota exceeded")));

        let reply = assistant.ask("What is a macro?").await.unwrap();
        assert!(reply.starts_with("Error: "));
        assert!(reply.contains("quota exceeded"));
    }
}
