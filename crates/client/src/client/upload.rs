//! CSV upload operations.

use reqwest::header::{HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::Method;

use super::InventarioClient;
use crate::error::{ClientError, Result};
use crate::fetch::RequestInit;

/// Endpoint accepting CSV imports.
pub const UPLOAD_PATH: &str = "/api/carga";

impl InventarioClient {
    /// Upload a CSV document and return the server's JSON summary.
    pub async fn upload_csv(
        &self,
        file_name: &str,
        contents: impl Into<Vec<u8>>,
    ) -> Result<serde_json::Value> {
        let contents = contents.into();
        if contents.is_empty() {
            return Err(ClientError::InvalidInput(format!("{file_name} is empty")));
        }

        let disposition = HeaderValue::try_from(format!("attachment; filename=\"{file_name}\""))
            .map_err(|_| ClientError::InvalidInput(format!("invalid file name: {file_name}")))?;

        let init = RequestInit::method(Method::POST)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/csv"))
            .with_header(CONTENT_DISPOSITION, disposition)
            .with_body(contents);

        self.request_json(UPLOAD_PATH, init).await
    }

    /// Read a CSV file from disk and upload it.
    pub async fn upload_csv_file(&self, path: &std::path::Path) -> Result<serde_json::Value> {
        let contents = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ClientError::InvalidInput(format!("invalid path: {}", path.display())))?;
        self.upload_csv(file_name, contents).await
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use inventario_core::http::HttpErrorKind;
    use serde_json::json;

    use super::*;
    use crate::test_support::serve;

    fn router() -> Router {
        Router::new().route(
            UPLOAD_PATH,
            post(|headers: HeaderMap, body: String| async move {
                if headers.get("content-type").and_then(|v| v.to_str().ok()) != Some("text/csv") {
                    return Err(StatusCode::UNSUPPORTED_MEDIA_TYPE);
                }
                let rows = body.lines().skip(1).count();
                Ok(Json(json!({ "imported": rows })))
            }),
        )
    }

    #[tokio::test]
    async fn test_upload_csv() {
        let client = InventarioClient::new(serve(router()).await);

        let summary = client
            .upload_csv("usuarios.csv", "id,nombre\n1,Ana\n2,Luis\n")
            .await
            .unwrap();

        assert_eq!(summary, json!({ "imported": 2 }));
    }

    #[tokio::test]
    async fn test_upload_empty_csv_is_rejected_locally() {
        let client = InventarioClient::new("http://127.0.0.1:9");

        let error = client.upload_csv("empty.csv", Vec::new()).await.unwrap_err();

        assert!(matches!(error, ClientError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_upload_missing_file_is_io_error() {
        let client = InventarioClient::new("http://127.0.0.1:9");

        let error = client
            .upload_csv_file(std::path::Path::new("/definitely/not/here.csv"))
            .await
            .unwrap_err();

        assert!(matches!(error, ClientError::Io(_)));
    }

    #[tokio::test]
    async fn test_upload_to_missing_endpoint() {
        let client = InventarioClient::new(serve(Router::new()).await);

        let error = client.upload_csv("a.csv", "id\n1\n").await.unwrap_err();

        let http = error.as_http().unwrap();
        assert_eq!(http.kind(), HttpErrorKind::ClientError);
        assert_eq!(http.status(), Some(404));
        assert_eq!(http.ctx(), Some(UPLOAD_PATH));
    }
}
