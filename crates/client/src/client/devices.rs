//! Device API operations.

use super::{InventarioClient, Record};
use crate::error::Result;

/// Endpoint listing devices.
pub const DEVICES_PATH: &str = "/api/dispositivos";

impl InventarioClient {
    /// List all devices.
    pub async fn list_devices(&self) -> Result<Vec<Record>> {
        self.list_items(DEVICES_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use inventario_core::http::HttpErrorKind;
    use inventario_core::Locale;
    use serde_json::json;

    use super::*;
    use crate::test_support::serve;

    #[tokio::test]
    async fn test_list_devices_empty() {
        let router = Router::new().route(
            DEVICES_PATH,
            get(|| async { Json(json!({ "items": [], "total": 0 })) }),
        );
        let client = InventarioClient::new(serve(router).await);

        let devices = client.list_devices().await.unwrap();

        assert!(devices.is_empty());
    }

    #[tokio::test]
    async fn test_list_devices_server_error() {
        let router = Router::new().route(
            DEVICES_PATH,
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = InventarioClient::new(serve(router).await);

        let error = client.list_devices().await.unwrap_err();

        let http = error.as_http().unwrap();
        assert_eq!(http.kind(), HttpErrorKind::ServerError);
        assert_eq!(http.status(), Some(500));
        assert_eq!(
            error.user_message(Locale::Es),
            "El servidor presentó un problema (HTTP 5xx). Intenta más tarde."
        );
    }

    #[tokio::test]
    async fn test_list_devices_uses_client_deadline() {
        let router = Router::new().route(
            DEVICES_PATH,
            get(|| async {
                tokio::time::sleep(Duration::from_millis(400)).await;
                Json(json!({ "items": [] }))
            }),
        );
        let client = InventarioClient::new(serve(router).await).with_timeout_ms(30);

        let error = client.list_devices().await.unwrap_err();

        let http = error.as_http().unwrap();
        assert_eq!(http.kind(), HttpErrorKind::Timeout);
        assert_eq!(http.ctx(), Some(DEVICES_PATH));
    }
}
