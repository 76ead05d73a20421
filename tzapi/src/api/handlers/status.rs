//! Liveness check handler.

#[utoipa::path(
    get,
    path = "/ping",
    tag = "status",
    summary = "Ping",
    description = "Liveness check. Always answers `pong`.",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn ping() -> &'static str {
    "pong"
}
