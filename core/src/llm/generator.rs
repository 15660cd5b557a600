use async_trait::async_trait;

use super::client::GenerateContentResponse;
use super::request::GenerateContentRequest;
use crate::Result;

/// Anything that can answer a generate-content request.
///
/// `GenAiClient` is the production implementation; the gateway only sees this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}
