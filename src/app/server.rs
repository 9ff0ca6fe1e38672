use crate::core::engine::NumberClassifier;
use crate::core::{ClassifyResponse, FactSource};
use axum::{
    extract::{rejection::PathRejection, Path, RawQuery, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use url::form_urlencoded;

pub const CLASSIFY_PATH: &str = "/api/classify-number";

impl IntoResponse for ClassifyResponse {
    fn into_response(self) -> Response {
        let status = if self.is_success() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };
        (status, Json(self)).into_response()
    }
}

/// 允許所有來源、標頭並帶憑證
///
/// 帶憑證時 CORS 不允許 `*`，所以來源與標頭改為回映請求內容。
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router<S: FactSource + 'static>(classifier: Arc<NumberClassifier<S>>) -> Router {
    Router::new()
        .route(CLASSIFY_PATH, get(classify_by_query::<S>))
        .route(
            &format!("{}/{{number}}", CLASSIFY_PATH),
            get(classify_by_path::<S>),
        )
        .route("/health", get(health))
        .layer(cors_layer())
        .with_state(classifier)
}

async fn classify_by_query<S: FactSource + 'static>(
    State(classifier): State<Arc<NumberClassifier<S>>>,
    RawQuery(query): RawQuery,
) -> ClassifyResponse {
    let raw = number_param(query.as_deref());
    classifier.classify(&raw).await
}

async fn classify_by_path<S: FactSource + 'static>(
    State(classifier): State<Arc<NumberClassifier<S>>>,
    uri: Uri,
    number: Result<Path<String>, PathRejection>,
) -> ClassifyResponse {
    let raw = match number {
        Ok(Path(number)) => number,
        Err(rejection) => {
            // 無法解碼的片段原樣回傳 (仍為百分比編碼)
            tracing::debug!("Path segment rejected: {}", rejection);
            uri.path().rsplit('/').next().unwrap_or_default().to_string()
        }
    };
    classifier.classify(&raw).await
}

/// 取出 `number` 參數
///
/// 缺少時為空字串；重複出現時以逗號串接；解碼後不是合法 UTF-8 的值
/// 保留原本的百分比編碼。所有情況都交給驗證器決定 200 或 400。
fn number_param(query: Option<&str>) -> String {
    let Some(query) = query else {
        return String::new();
    };

    let values: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = form_urlencoded::parse(pair.as_bytes()).next()?;
            if key != "number" {
                return None;
            }
            if value.contains(char::REPLACEMENT_CHARACTER) {
                let raw = pair.split_once('=').map(|(_, raw)| raw).unwrap_or_default();
                Some(raw.to_string())
            } else {
                Some(value.into_owned())
            }
        })
        .collect();

    values.join(",")
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn serve(
    listener: tokio::net::TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🚀 Listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
