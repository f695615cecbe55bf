//! Testes de integração da API
//!
//! As requisições passam pelo router completo via `oneshot`. Os testes de
//! ligação de triplas sobem um índice de busca falso em `127.0.0.1:0`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    routing::post,
    Json, Router,
};
use infoext_core::nel::DEFAULT_TIMEOUT;
use infoext_core::{BuiltinLoader, KnowledgeBase, ModelCache, SearchIndexResolver};
use infoext_web::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_state() -> AppState {
    let cache = ModelCache::new(BuiltinLoader);
    cache.preload(["en", "de"]).unwrap();
    AppState::new(cache)
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

/// Índice de busca falso respondendo a partir da amostra do Wikidata.
async fn search_index(Json(body): Json<Value>) -> Json<Value> {
    let query = body["query"]["match"]["labelsGroup"]["query"]
        .as_str()
        .unwrap_or_default();
    let kb = KnowledgeBase::wikidata_sample();
    Json(match kb.lookup(query) {
        Some(id) => json!({"hits": {"total": {"value": 1, "relation": "eq"}, "hits": [{"_id": id}]}}),
        None => json!({"hits": {"total": {"value": 0, "relation": "eq"}, "hits": []}}),
    })
}

async fn broken_index() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn spawn_index(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/_search")
}

// =============================================================================
// Dependências
// =============================================================================

#[tokio::test]
async fn test_dep_collapses_by_default() {
    let app = create_router(test_state());
    let response = app
        .oneshot(json_request("/dep", json!({"text": "The quick fox jumps."})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "arcs": [{"dir": "left", "end": 1, "label": "nsubj", "start": 0}],
            "words": [{"tag": "NN", "text": "The quick fox"}, {"tag": "VBZ", "text": "jumps."}]
        })
    );
}

#[tokio::test]
async fn test_dep_without_collapsing() {
    let app = create_router(test_state());
    let (status, json) = call(
        app,
        json_request(
            "/dep",
            json!({"text": "The quick fox jumps.", "collapse_punctuation": false, "collapse_phrases": false}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["words"].as_array().unwrap().len(), 5);
    let arcs = json["arcs"].as_array().unwrap();
    assert_eq!(arcs.len(), 4);
    for arc in arcs {
        assert!(arc["start"].as_u64().unwrap() < arc["end"].as_u64().unwrap());
    }
}

#[tokio::test]
async fn test_dep_german_model() {
    let app = create_router(test_state());
    let (status, json) = call(
        app,
        json_request("/dep", json!({"text": "Er hat den Ball gespielt.", "model": "de"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let words = json["words"].as_array().unwrap();
    let arcs = json["arcs"].as_array().unwrap();
    assert_eq!(arcs.len(), words.len() - 1);
}

// =============================================================================
// Entidades, palavras-chave e conceitos
// =============================================================================

#[tokio::test]
async fn test_ent_offsets_match_mentions() {
    let app = create_router(test_state());
    let text = "Barack Obama visited New York in May 2014.";
    let (status, json) = call(app, json_request("/ent", json!({"text": text}))).await;

    assert_eq!(status, StatusCode::OK);
    let ents = json.as_array().unwrap();
    assert!(!ents.is_empty());
    let chars: Vec<char> = text.chars().collect();
    let mut last_end = 0;
    for ent in ents {
        let start = ent["start"].as_u64().unwrap() as usize;
        let end = ent["end"].as_u64().unwrap() as usize;
        assert!(start < end && start >= last_end);
        assert!(!ent["type"].as_str().unwrap().is_empty());
        last_end = end;
    }
    let person = ents.iter().find(|e| e["type"] == "PER").unwrap();
    let start = person["start"].as_u64().unwrap() as usize;
    let end = person["end"].as_u64().unwrap() as usize;
    assert_eq!(chars[start..end].iter().collect::<String>(), "Barack Obama");
}

#[tokio::test]
async fn test_keywords_and_concepts() {
    let app = create_router(test_state());
    let text = "The quick fox saw a dog.";

    let (status, keywords) = call(app.clone(), json_request("/keywords", json!({"text": text}))).await;
    assert_eq!(status, StatusCode::OK);
    let keywords = keywords.as_array().unwrap();
    assert!(!keywords.is_empty() && keywords.len() <= 10);
    assert!(keywords.iter().all(|k| k["score"].is_number() && k["text"].is_string()));

    let (status, concepts) = call(app, json_request("/concepts", json!({"text": text}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        concepts,
        json!([
            {"end": 13, "start": 4, "text": "quick fox"},
            {"end": 23, "start": 20, "text": "dog"}
        ])
    );
}

#[tokio::test]
async fn test_empty_text_returns_empty_lists() {
    let app = create_router(test_state());
    for uri in ["/ent", "/triples", "/keywords", "/concepts"] {
        let (status, json) = call(app.clone(), json_request(uri, json!({"text": ""}))).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json, json!([]), "{uri}");
    }
}

// =============================================================================
// Triplas
// =============================================================================

#[tokio::test]
async fn test_triples_without_resolver() {
    let app = create_router(test_state());
    let (status, json) = call(app, json_request("/triples", json!({"text": "Apple acquired Beats."}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([{
            "o_end": 20, "o_start": 15, "object": "Beats",
            "predicate": "acquired",
            "s_end": 5, "s_start": 0, "subject": "Apple"
        }])
    );
}

#[tokio::test]
async fn test_triples_linked_through_search_index() {
    let url = spawn_index(Router::new().route("/_search", post(search_index))).await;
    let resolver = SearchIndexResolver::new(url, "labelsGroup", DEFAULT_TIMEOUT).unwrap();
    let app = create_router(test_state().with_resolver(Arc::new(resolver)));

    let (status, json) = call(app, json_request("/triples", json!({"text": "Apple acquired Beats."}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["subject_uri"], "Q312");
    assert_eq!(json[0]["object_uri"], "Q2901520");
}

#[tokio::test]
async fn test_triples_degrade_when_index_fails() {
    let url = spawn_index(Router::new().route("/_search", post(broken_index))).await;
    let resolver = SearchIndexResolver::new(url, "labelsGroup", DEFAULT_TIMEOUT).unwrap();
    let app = create_router(test_state().with_resolver(Arc::new(resolver)));

    let (status, json) = call(app, json_request("/triples", json!({"text": "Apple acquired Beats."}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["subject"], "Apple");
    assert_eq!(json[0]["subject_uri"], "");
    assert_eq!(json[0]["object_uri"], "");
}

// =============================================================================
// Introspecção
// =============================================================================

#[tokio::test]
async fn test_models_lists_preloaded() {
    let app = create_router(test_state());
    let (status, json) = call(app, get_request("/models")).await;

    assert_eq!(status, StatusCode::OK);
    let models: Vec<&str> = json.as_array().unwrap().iter().map(|m| m.as_str().unwrap()).collect();
    assert!(models.contains(&"en"));
    assert!(models.contains(&"de"));
}

#[tokio::test]
async fn test_schema() {
    let app = create_router(test_state());
    let (status, json) = call(app.clone(), get_request("/en/schema")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ent_types"], json!(["DATE", "LOC", "MISC", "ORG", "PER"]));
    let deps: Vec<&str> = json["dep_types"].as_array().unwrap().iter().map(|d| d.as_str().unwrap()).collect();
    assert!(deps.contains(&"nsubj"));
    let mut sorted = deps.clone();
    sorted.sort();
    assert_eq!(deps, sorted);
    assert!(json["pos_types"].as_array().unwrap().iter().any(|t| t == "NNP"));

    let (status, json) = call(app, get_request("/xx/schema")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

// =============================================================================
// Erros
// =============================================================================

#[tokio::test]
async fn test_malformed_input_is_bad_request() {
    let app = create_router(test_state());

    let invalid = Request::builder()
        .method("POST")
        .uri("/ent")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = call(app.clone(), invalid).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");

    let (status, _) = call(app.clone(), json_request("/dep", json!({"model": "en"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(app.clone(), json_request("/keywords", json!({"text": 42}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let no_content_type = Request::builder()
        .method("POST")
        .uri("/triples")
        .body(Body::from(r#"{"text": "hello"}"#))
        .unwrap();
    let (status, _) = call(app, no_content_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_model_is_internal_error() {
    let app = create_router(test_state());
    let (status, json) = call(app, json_request("/ent", json!({"text": "Hello", "model": "xx"}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"code": "INTERNAL_ERROR", "message": "internal server error"}));
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = create_router(test_state());
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/dep")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
