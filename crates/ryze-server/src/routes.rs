//! HTTP routes
//!
//! Every route is mounted twice: at the root and under `/api/generator`.
//! Core calls run on the blocking pool so a panicking request becomes a
//! 500 instead of taking a runtime worker down.

use crate::config::ServerConfig;
use ryze_core::{GenerateRequest, ModifyRequest, PackageRequest, Packager, RyzeError, UiGenerator};
use serde::Serialize;
use std::convert::Infallible;
use tokio::task::JoinError;
use warp::filters::BoxedFilter;
use warp::http::{header, StatusCode};
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

/// Shared request state
#[derive(Debug, Clone)]
pub struct AppState {
    generator: UiGenerator,
    packager: Packager,
}

impl AppState {
    /// State over a generator and a packager
    #[must_use]
    pub fn new(generator: UiGenerator, packager: Packager) -> Self {
        Self {
            generator,
            packager,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UiGenerator::default(), Packager::default())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// The complete application: routes, error mapping, CORS and request spans
#[must_use]
pub fn app(state: AppState, config: &ServerConfig) -> BoxedFilter<(Box<dyn Reply>,)> {
    let cors = warp::cors()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"]);
    let cors = if config.allowed_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        cors.allow_origins(config.allowed_origins.iter().map(String::as_str))
    };

    routes(state, config.max_body_bytes)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "request",
                id = %ulid::Ulid::new(),
                method = %info.method(),
                path = %info.path(),
            )
        }))
        .map(|reply| Box::new(reply) as Box<dyn Reply>)
        .boxed()
}

/// All routes, without error mapping
pub fn routes(
    state: AppState,
    max_body_bytes: u64,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let with_state = warp::any().map(move || state.clone());

    let health = warp::path!("health").and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "running",
            "engine": "Symbolic NLP",
        }))
        .into_response()
    });

    // Paths are matched before methods so unknown paths stay 404.
    let generate = warp::path!("generate")
        .or(warp::path!("api" / "generator" / "generate"))
        .unify()
        .and(warp::post())
        .and(json_body::<GenerateRequest>(max_body_bytes))
        .and(with_state.clone())
        .and_then(handle_generate);

    let modify = warp::path!("modify")
        .or(warp::path!("api" / "generator" / "modify"))
        .unify()
        .and(warp::post())
        .and(json_body::<ModifyRequest>(max_body_bytes))
        .and(with_state.clone())
        .and_then(handle_modify);

    let deploy = warp::path!("deploy")
        .or(warp::path!("api" / "generator" / "deploy"))
        .unify()
        .and(warp::post())
        .and(json_body::<PackageRequest>(max_body_bytes))
        .and(with_state.clone())
        .and_then(handle_deploy);

    let view = warp::path!("view" / String)
        .or(warp::path!("api" / "generator" / "view" / String))
        .unify()
        .and(warp::get())
        .and(with_state.clone())
        .and_then(handle_view);

    let download = warp::path!("download" / String)
        .or(warp::path!("api" / "generator" / "download" / String))
        .unify()
        .and(warp::get())
        .and(with_state)
        .and_then(handle_download);

    health
        .or(generate)
        .unify()
        .or(modify)
        .unify()
        .or(deploy)
        .unify()
        .or(view)
        .unify()
        .or(download)
        .unify()
}

fn json_body<T>(limit: u64) -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: serde::de::DeserializeOwned + Send,
{
    warp::body::content_length_limit(limit).and(warp::body::json())
}

async fn handle_generate(
    request: GenerateRequest,
    state: AppState,
) -> Result<Response, Infallible> {
    let generator = state.generator;
    let joined = tokio::task::spawn_blocking(move || generator.generate(&request.prompt)).await;
    Ok(match flatten(joined) {
        Ok(resp) => json_reply(&resp, StatusCode::OK),
        Err(err) => error_reply(&err),
    })
}

async fn handle_modify(request: ModifyRequest, state: AppState) -> Result<Response, Infallible> {
    let generator = state.generator;
    let joined = tokio::task::spawn_blocking(move || {
        generator.modify(&request.prompt, &request.current_code)
    })
    .await;
    Ok(match flatten(joined) {
        Ok(resp) => json_reply(&resp, StatusCode::OK),
        Err(err) => error_reply(&err),
    })
}

async fn handle_deploy(request: PackageRequest, state: AppState) -> Result<Response, Infallible> {
    Ok(match state.packager.package(request).await {
        Ok(resp) => json_reply(&resp, StatusCode::CREATED),
        Err(err) => error_reply(&err),
    })
}

async fn handle_view(id: String, state: AppState) -> Result<Response, Infallible> {
    Ok(match state.packager.deployment(&id).await {
        Ok(deployment) => warp::reply::html(deployment.html).into_response(),
        Err(err) => error_reply(&err),
    })
}

async fn handle_download(id: String, state: AppState) -> Result<Response, Infallible> {
    Ok(match state.packager.deployment(&id).await {
        Ok(deployment) => {
            let disposition = format!("attachment; filename=\"ryze-{}.html\"", deployment.id);
            let reply = warp::reply::with_header(
                deployment.html,
                header::CONTENT_TYPE,
                "text/html; charset=utf-8",
            );
            warp::reply::with_header(reply, header::CONTENT_DISPOSITION, disposition)
                .into_response()
        }
        Err(err) => error_reply(&err),
    })
}

fn flatten<T>(joined: Result<Result<T, RyzeError>, JoinError>) -> Result<T, RyzeError> {
    match joined {
        Ok(result) => result,
        Err(err) => Err(RyzeError::Internal(format!("worker failed: {err}"))),
    }
}

fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

fn error_json(message: &str, status: StatusCode) -> Response {
    json_reply(&ErrorBody { error: message }, status)
}

/// Map a core error to its HTTP response
///
/// Server-side failures are logged and answered without detail.
pub fn error_reply(err: &RyzeError) -> Response {
    match err {
        RyzeError::InvalidInput(message) => error_json(message, StatusCode::BAD_REQUEST),
        RyzeError::NotFound(_) => error_json("Deployment not found", StatusCode::NOT_FOUND),
        RyzeError::Packaging(_) | RyzeError::Internal(_) => {
            tracing::error!(error = %err, "request failed");
            error_json("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    let (message, status) = if rejection.is_not_found() {
        ("Not Found", StatusCode::NOT_FOUND)
    } else if rejection
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        ("Invalid JSON body", StatusCode::BAD_REQUEST)
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        ("Payload Too Large", StatusCode::PAYLOAD_TOO_LARGE)
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        ("Length Required", StatusCode::LENGTH_REQUIRED)
    } else if rejection
        .find::<warp::reject::UnsupportedMediaType>()
        .is_some()
    {
        ("Unsupported Media Type", StatusCode::UNSUPPORTED_MEDIA_TYPE)
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        ("Method Not Allowed", StatusCode::METHOD_NOT_ALLOWED)
    } else {
        tracing::error!(?rejection, "unhandled rejection");
        ("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR)
    };
    Ok(error_json(message, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ryze_test_utils::MAIN_LAYOUT;
    use serde_json::{json, Value};

    fn test_app() -> BoxedFilter<(Box<dyn Reply>,)> {
        app(AppState::default(), &ServerConfig::default())
    }

    fn body_json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn health() {
        let resp = warp::test::request()
            .path("/health")
            .reply(&test_app())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp.body()),
            json!({"status": "running", "engine": "Symbolic NLP"})
        );
    }

    #[tokio::test]
    async fn generate_on_both_paths() {
        let app = test_app();
        for path in ["/generate", "/api/generator/generate"] {
            let resp = warp::test::request()
                .method("POST")
                .path(path)
                .json(&json!({"prompt": "Create a red dashboard called Nova"}))
                .reply(&app)
                .await;
            assert_eq!(resp.status(), StatusCode::OK, "path: {path}");
            let body = body_json(resp.body());
            assert_eq!(body["meta"]["intent"], "dashboard");
            assert!(body["code"].as_str().unwrap().contains("bg-red-500"));
            assert!(body["meta"]["processing_time_ms"].as_f64().unwrap() >= 0.0);
        }
    }

    #[tokio::test]
    async fn blank_prompt_is_bad_request() {
        let resp = warp::test::request()
            .method("POST")
            .path("/generate")
            .json(&json!({"prompt": "  "}))
            .reply(&test_app())
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp.body()), json!({"error": "prompt is required"}));
    }

    #[tokio::test]
    async fn modify_reads_current_code() {
        let resp = warp::test::request()
            .method("POST")
            .path("/api/generator/modify")
            .json(&json!({"prompt": "add a footer", "currentCode": MAIN_LAYOUT}))
            .reply(&test_app())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp.body());
        assert!(body["code"].as_str().unwrap().contains("<footer"));
        assert!(body["plan"].as_str().unwrap().starts_with("1. Detected"));
    }

    #[tokio::test]
    async fn modify_without_code_is_bad_request() {
        let resp = warp::test::request()
            .method("POST")
            .path("/modify")
            .json(&json!({"prompt": "add a footer"}))
            .reply(&test_app())
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp.body()),
            json!({"error": "prompt and artifact required"})
        );
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let resp = warp::test::request()
            .method("POST")
            .path("/generate")
            .header("content-type", "application/json")
            .body("{not json")
            .reply(&test_app())
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp.body()), json!({"error": "Invalid JSON body"}));
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let state = AppState::default();
        let config = ServerConfig {
            max_body_bytes: 16,
            ..ServerConfig::default()
        };
        let resp = warp::test::request()
            .method("POST")
            .path("/generate")
            .json(&json!({"prompt": "a very long prompt for a dashboard"}))
            .reply(&app(state, &config))
            .await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn deploy_view_download() {
        let app = test_app();
        let resp = warp::test::request()
            .method("POST")
            .path("/deploy")
            .json(&json!({"code": MAIN_LAYOUT, "prompt": "simple page"}))
            .reply(&app)
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp.body());
        assert_eq!(body["success"], true);
        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(
            body["downloadUrl"],
            format!("http://localhost:3000/download/{id}")
        );

        let resp = warp::test::request()
            .path(&format!("/view/{id}"))
            .reply(&app)
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = String::from_utf8(resp.body().to_vec()).unwrap();
        assert!(html.contains("<title>simple page</title>"));

        let resp = warp::test::request()
            .path(&format!("/api/generator/download/{id}"))
            .reply(&app)
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            format!("attachment; filename=\"ryze-{id}.html\"")
        );
    }

    #[tokio::test]
    async fn deploy_without_code_is_bad_request() {
        let resp = warp::test::request()
            .method("POST")
            .path("/deploy")
            .json(&json!({"code": ""}))
            .reply(&test_app())
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp.body()), json!({"error": "code is required"}));
    }

    #[tokio::test]
    async fn unknown_deployment_is_not_found() {
        let resp = warp::test::request()
            .path("/view/doesnotexist")
            .reply(&test_app())
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let resp = warp::test::request()
            .path("/nope")
            .reply(&test_app())
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let resp = warp::test::request()
            .path("/health")
            .header("origin", "https://elsewhere.example")
            .reply(&test_app())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[test]
    fn server_errors_hide_detail() {
        let resp = error_reply(&RyzeError::Internal("secret detail".into()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
