//! # infoext-core — Extração de Informação a partir de Texto
//!
//! Este crate reúne tudo o que o serviço HTTP precisa para anotar um texto,
//! sem nenhum código de servidor:
//!
//! 1.  **Motor de linguagem** ([`engine`], [`pipeline`]): transforma texto bruto
//!     num [`Doc`] com tokens, tags, lemas, dependências, entidades e sintagmas.
//!     O motor embutido é determinístico e baseado em regras, com perfis para
//!     inglês, alemão e português ([`lexicon`]).
//! 2.  **Cache de modelos** ([`cache`]): um motor por identificador de modelo,
//!     construído uma única vez mesmo sob acesso concorrente.
//! 3.  **Fusão de tokens** ([`merge`]): junta pontuação e sintagmas nominais em
//!     unidades de exibição, sem alterar o documento.
//! 4.  **Visões** ([`views`]): dependências, entidades, triplas, palavras-chave
//!     e conceitos, prontos para serializar.
//! 5.  **Resolução de menções** ([`nel`]): liga sujeitos e objetos de triplas a
//!     identificadores de uma base de conhecimento.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use infoext_core::{BuiltinLoader, ModelCache};
//! use infoext_core::views::{dependency_parse, ParseOptions};
//!
//! let cache = ModelCache::new(BuiltinLoader);
//! let engine = cache.get("en").unwrap();
//!
//! let parse = dependency_parse(engine.as_ref(), "The quick fox jumps.", ParseOptions::default()).unwrap();
//! for word in &parse.words {
//!     println!("{} ({})", word.text, word.tag);
//! }
//! ```
//!
//! ## Estágios do Motor
//!
//! - [`tokenizer`]: segmentação em tokens e sentenças, preservando offsets.
//! - [`pos`]: classes gramaticais e lemas.
//! - [`rule_based`] e [`tagger`]: entidades por gazetteers, padrões e regex.
//! - [`parser`]: árvore de dependências e sintagmas nominais.
//! - [`extract`] e [`keyterms`]: triplas SVO, conceitos e termos-chave.

pub mod cache;
pub mod document;
pub mod engine;
pub mod error;
pub mod extract;
pub mod keyterms;
pub mod lexicon;
pub mod merge;
pub mod nel;
pub mod parser;
pub mod pipeline;
pub mod pos;
pub mod rule_based;
pub mod tagger;
pub mod tokenizer;
pub mod views;

pub use cache::ModelCache;
pub use document::{Chunk, Doc, DocToken};
pub use engine::{BuiltinLoader, Engine, LabelSchema, ModelLoader};
pub use error::{NlpError, Result};
pub use nel::{KnowledgeBase, MentionResolver, SearchIndexResolver};
pub use pipeline::RulePipeline;
pub use tagger::{EntityCategory, EntitySpan, Tag, TaggedToken};
pub use tokenizer::Token;
