//! Handlers HTTP: um por visão, mais os de introspecção de modelos.
//!
//! O trabalho do motor (carregar modelo, analisar texto) roda no pool
//! bloqueante do tokio. Toda resposta de sucesso leva
//! `Access-Control-Allow-Origin: *`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use infoext_core::views::{self, ParseOptions};
use infoext_core::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

pub const DEFAULT_MODEL: &str = "en";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

/// Corpo de `/ent`, `/triples`, `/keywords` e `/concepts`.
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
    #[serde(default = "default_model")]
    pub model: String,
}

/// Corpo de `/dep`.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_true")]
    pub collapse_punctuation: bool,
    #[serde(default = "default_true")]
    pub collapse_phrases: bool,
}

fn allow_all<T: Serialize>(body: T) -> Response {
    ([(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")], Json(body)).into_response()
}

/// Resolve o modelo e roda `view` no pool bloqueante.
async fn run_view<T, F>(state: &AppState, model: String, view: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&dyn Engine) -> infoext_core::Result<T> + Send + 'static,
{
    let cache = state.cache.clone();
    let out = tokio::task::spawn_blocking(move || {
        let engine = cache.get(&model)?;
        view(engine.as_ref())
    })
    .await??;
    Ok(out)
}

pub async fn dependency_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let options = ParseOptions {
        collapse_punctuation: req.collapse_punctuation,
        collapse_phrases: req.collapse_phrases,
    };
    let text = req.text;
    let parse = run_view(&state, req.model, move |engine| {
        views::dependency_parse(engine, &text, options)
    })
    .await?;
    debug!(words = parse.words.len(), arcs = parse.arcs.len(), "dep");
    Ok(allow_all(parse))
}

pub async fn entities_handler(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let text = req.text;
    let ents = run_view(&state, req.model, move |engine| views::entities(engine, &text)).await?;
    debug!(entities = ents.len(), "ent");
    Ok(allow_all(ents))
}

pub async fn triples_handler(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let text = req.text;
    let mut triples = run_view(&state, req.model, move |engine| views::triples(engine, &text)).await?;
    if let Some(resolver) = &state.resolver {
        views::link_triples(&mut triples, resolver.as_ref()).await;
    }
    debug!(triples = triples.len(), linked = state.resolver.is_some(), "triples");
    Ok(allow_all(triples))
}

pub async fn keywords_handler(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let text = req.text;
    let keywords = run_view(&state, req.model, move |engine| views::keywords(engine, &text)).await?;
    debug!(keywords = keywords.len(), "keywords");
    Ok(allow_all(keywords))
}

pub async fn concepts_handler(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let text = req.text;
    let concepts = run_view(&state, req.model, move |engine| views::concepts(engine, &text)).await?;
    debug!(concepts = concepts.len(), "concepts");
    Ok(allow_all(concepts))
}

pub async fn schema_handler(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> Result<Response, AppError> {
    let schema = run_view(&state, model, |engine| Ok(engine.schema())).await?;
    Ok(allow_all(schema))
}

pub async fn models_handler(State(state): State<AppState>) -> Response {
    allow_all(state.cache.available())
}
