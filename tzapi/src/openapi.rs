//! OpenAPI documentation for the public API surface.
//!
//! The rendered docs are served at `/docs` when the server is running.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tenderizz Upload API",
        description = "Image intake and health endpoints for the Tenderizz processing pipeline."
    ),
    servers((url = "/api/v1", description = "Public API")),
    paths(api::handlers::images::process_all_images, api::handlers::status::ping),
    tags(
        (name = "images", description = "Image upload intake"),
        (name = "status", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_both_operations() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("OpenAPI document should serialize");

        let paths = doc.get("paths").and_then(|p| p.as_object()).expect("document should have paths");
        assert!(paths.contains_key("/process-all-images"));
        assert!(paths.contains_key("/ping"));
    }
}
