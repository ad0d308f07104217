use axum::{http::StatusCode, routing::get, Router};
use loader::{load_words, source_for, DEFAULT_HTTP_TIMEOUT};
use shared::{ErrorCode, WordError};
use tokio::net::TcpListener;

const DOCUMENT: &str = "words:\n  - word: Zen\n    definition: Calm\n    date: 2024-01-01\n";

async fn spawn_word_server() -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new()
        .route("/words.yaml", get(|| async { DOCUMENT }))
        .route(
            "/gone.yaml",
            get(|| async { (StatusCode::NOT_FOUND, "missing") }),
        );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn loads_words_over_http() {
    let base = spawn_word_server().await;
    let source = source_for(&format!("{base}/words.yaml"), DEFAULT_HTTP_TIMEOUT).expect("source");

    let collection = load_words(source.as_ref()).await.expect("load");
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.records()[0].word, "Zen");
}

#[tokio::test]
async fn http_error_status_is_a_load_failure() {
    let base = spawn_word_server().await;
    let source = source_for(&format!("{base}/gone.yaml"), DEFAULT_HTTP_TIMEOUT).expect("source");

    let err = load_words(source.as_ref()).await.expect_err("404");
    assert!(matches!(err, WordError::Load { .. }));
    assert_eq!(err.code(), ErrorCode::LoadFailure);
}
