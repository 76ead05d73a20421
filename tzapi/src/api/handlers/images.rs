//! Multipart intake for the image-processing pipeline.

use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::errors::{Error, Result};

/// Accept a multipart upload and acknowledge the received file.
///
/// The processing pipeline behind this endpoint sits in a separate service;
/// this handler acknowledges the file named in the `file` part without
/// reading or storing its content.
#[utoipa::path(
    post,
    path = "/process-all-images",
    tag = "images",
    summary = "Submit images for processing",
    description = "Accepts a multipart form with a `file` part and acknowledges it by name. \
                   The file content is not inspected or stored.",
    request_body(
        content_type = "multipart/form-data",
        description = "Multipart form with the upload under a part named `file`"
    ),
    responses(
        (status = 200, description = "File received", body = String),
        (status = 400, description = "Missing `file` part or malformed multipart body")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn process_all_images(mut multipart: Multipart) -> Result<String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        // A body over the configured size limit surfaces here as well; keep its status
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::PayloadTooLarge {
                message: "Upload body exceeds the configured size limit".to_string(),
            }
        } else {
            Error::BadRequest {
                message: format!("Failed to parse multipart data: {}", e),
            }
        }
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                // A part without a filename attribute is reported as an empty name
                let filename = field.file_name().unwrap_or_default().to_string();

                tracing::info!(filename = %filename, "Received upload");

                return Ok(format!("Received file: {}", filename));
            }
            _ => {
                // Ignore unknown fields (forward compatibility)
            }
        }
    }

    Err(Error::BadRequest {
        message: "Missing required field: 'file'".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::test_utils::create_test_server;
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};

    #[test_log::test(tokio::test)]
    async fn test_upload_echoes_filename() {
        let server = create_test_server(Config::default());

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"fake image bytes".as_slice())
                .file_name("kitchen.png")
                .mime_type("image/png"),
        );

        let response = server.post("/api/v1/process-all-images").multipart(form).await;

        response.assert_status(StatusCode::OK);
        response.assert_text("Received file: kitchen.png");
    }

    #[tokio::test]
    async fn test_upload_with_empty_filename() {
        let server = create_test_server(Config::default());

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"bytes".as_slice()).file_name("").mime_type("image/jpeg"),
        );

        let response = server.post("/api/v1/process-all-images").multipart(form).await;

        response.assert_status(StatusCode::OK);
        response.assert_text("Received file: ");
    }

    #[tokio::test]
    async fn test_upload_without_filename_attribute() {
        let server = create_test_server(Config::default());

        let form = MultipartForm::new().add_part("file", Part::bytes(b"bytes".as_slice()));

        let response = server.post("/api/v1/process-all-images").multipart(form).await;

        response.assert_status(StatusCode::OK);
        response.assert_text("Received file: ");
    }

    #[test_log::test(tokio::test)]
    async fn test_upload_missing_file_field() {
        let server = create_test_server(Config::default());

        let form = MultipartForm::new().add_text("note", "no file here");

        let response = server.post("/api/v1/process-all-images").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("file"));
    }

    #[tokio::test]
    async fn test_upload_skips_unknown_fields() {
        let server = create_test_server(Config::default());

        let form = MultipartForm::new()
            .add_text("purpose", "gallery")
            .add_part(
                "file",
                Part::bytes(b"bytes".as_slice())
                    .file_name("steak.jpg")
                    .mime_type("image/jpeg"),
            );

        let response = server.post("/api/v1/process-all-images").multipart(form).await;

        response.assert_status(StatusCode::OK);
        response.assert_text("Received file: steak.jpg");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_multipart_body() {
        let server = create_test_server(Config::default());

        let response = server.post("/api/v1/process-all-images").text("not a multipart body").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_over_configured_limit_is_rejected() {
        let mut config = Config::default();
        config.limits.max_upload_bytes = Some(64);
        let server = create_test_server(config);

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(vec![0u8; 4096]).file_name("big.png").mime_type("image/png"),
        );

        let response = server.post("/api/v1/process-all-images").multipart(form).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    }
}
