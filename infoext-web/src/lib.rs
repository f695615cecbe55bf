//! # infoext-web
//!
//! Servidor Axum que expõe as visões de anotação do `infoext-core`:
//!
//! | Rota                  | Visão                          |
//! |-----------------------|--------------------------------|
//! | `POST /dep`           | palavras e arcos de dependência |
//! | `POST /ent`           | entidades                      |
//! | `POST /triples`       | triplas SVO                    |
//! | `POST /keywords`      | palavras-chave                 |
//! | `POST /concepts`      | conceitos                      |
//! | `GET /{model}/schema` | rótulos do modelo              |
//! | `GET /models`         | modelos disponíveis            |

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/dep", post(handlers::dependency_handler))
        .route("/ent", post(handlers::entities_handler))
        .route("/triples", post(handlers::triples_handler))
        .route("/keywords", post(handlers::keywords_handler))
        .route("/concepts", post(handlers::concepts_handler))
        .route("/models", get(handlers::models_handler))
        .route("/:model/schema", get(handlers::schema_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
