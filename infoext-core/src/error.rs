//! # Erros do núcleo
//!
//! Todos os estágios do motor e das visões devolvem [`NlpError`]. A camada
//! HTTP decide como cada variante vira um status.

use thiserror::Error;

/// Erro produzido pelo motor de linguagem, pelo cache ou pela resolução de menções.
#[derive(Debug, Error)]
pub enum NlpError {
    /// O identificador de modelo não corresponde a nenhum modelo conhecido.
    #[error("modelo desconhecido: {0}")]
    UnknownModel(String),

    /// Falha interna durante a anotação.
    #[error("falha do motor: {0}")]
    Engine(String),

    /// Falha na consulta à base de conhecimento externa.
    #[error("falha na base de conhecimento: {0}")]
    KnowledgeBase(String),
}

pub type Result<T> = std::result::Result<T, NlpError>;
