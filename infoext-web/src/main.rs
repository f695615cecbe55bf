//! Servidor HTTP de extração de informação

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use infoext_core::{BuiltinLoader, ModelCache, SearchIndexResolver};
use infoext_web::{create_router, AppState, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("infoext_web=info,infoext_core=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();

    let cache = ModelCache::new(BuiltinLoader);
    let models: Vec<String> = config.preload_models().map(str::to_string).collect();
    let preload = tokio::task::spawn_blocking(move || cache.preload(&models).map(|_| cache)).await;
    let cache = match preload {
        Ok(Ok(cache)) => cache,
        Ok(Err(e)) => {
            error!(error = %e, "falha no pré-carregamento de modelos");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!(error = %e, "pré-carregamento interrompido");
            return ExitCode::FAILURE;
        }
    };

    let mut state = AppState::new(cache);
    if let Some(url) = &config.kb_url {
        match SearchIndexResolver::new(url.as_str(), config.kb_field.as_str(), config.kb_timeout()) {
            Ok(resolver) => {
                info!(url = %url, field = %config.kb_field, "ligação de triplas habilitada");
                state = state.with_resolver(Arc::new(resolver));
            }
            Err(e) => {
                error!(error = %e, "falha ao configurar a base de conhecimento");
                return ExitCode::FAILURE;
            }
        }
    }

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %addr, error = %e, "falha ao abrir a porta");
            return ExitCode::FAILURE;
        }
    };
    info!("🚀 Servidor de extração iniciado em http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "servidor encerrado com erro");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
