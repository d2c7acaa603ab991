use crate::errors::Result;
use async_trait::async_trait;

/// Contract for the external image-generation/analysis service.
///
/// The service is a remote collaborator with an opaque request/response
/// shape; the core never depends on its internals and treats every failure
/// as a generic remote error. No implementation ships in this repository.
#[async_trait]
pub trait ImageStudioProvider: Send + Sync {
    /// Describes the uploaded image according to the given instruction.
    async fn analyze_image(&self, image: &[u8], instruction: &str) -> Result<String>;

    /// Renders an image from the given prompt.
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>>;
}
