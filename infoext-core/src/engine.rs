//! # Motor de Linguagem
//!
//! O [`Engine`] transforma texto bruto num [`Doc`] e oferece as rotinas de
//! extração que as visões consomem. O [`ModelLoader`] sabe construir motores
//! a partir de um identificador de modelo; o cache de modelos só conhece
//! esses dois traits.

use std::sync::Arc;

use serde::Serialize;

use crate::document::{Chunk, Doc};
use crate::error::{NlpError, Result};
use crate::extract::{svo_triples, SvoTriple};
use crate::keyterms::sgrank;
use crate::lexicon::{LanguageProfile, PROFILES};
use crate::pipeline::RulePipeline;

/// Conjuntos de rótulos que um modelo pode emitir, cada um em ordem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSchema {
    pub dep_types: Vec<String>,
    pub ent_types: Vec<String>,
    pub pos_types: Vec<String>,
}

impl LabelSchema {
    /// Monta o esquema ordenando e removendo duplicatas de cada lista.
    pub fn new<D, E, P>(dep_types: D, ent_types: E, pos_types: P) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        fn sorted<I>(items: I) -> Vec<String>
        where
            I: IntoIterator,
            I::Item: Into<String>,
        {
            let mut out: Vec<String> = items.into_iter().map(Into::into).collect();
            out.sort();
            out.dedup();
            out
        }
        Self {
            dep_types: sorted(dep_types),
            ent_types: sorted(ent_types),
            pos_types: sorted(pos_types),
        }
    }
}

/// Um modelo de linguagem carregado.
///
/// As implementações são compartilhadas entre requisições como
/// `Arc<dyn Engine>` e chamadas a partir de threads do pool bloqueante.
pub trait Engine: Send + Sync {
    /// Identificador do modelo (ex: "en").
    fn name(&self) -> &str;

    /// Analisa um texto. Texto vazio produz um documento vazio.
    fn parse(&self, text: &str) -> Result<Doc>;

    fn schema(&self) -> LabelSchema;

    /// Sintagmas nominais em ordem de documento.
    fn noun_chunks(&self, doc: &Doc) -> Vec<Chunk> {
        doc.noun_chunks.clone()
    }

    /// Triplas sujeito-verbo-objeto na ordem em que aparecem.
    fn svo_triples(&self, doc: &Doc) -> Vec<SvoTriple> {
        svo_triples(doc)
    }

    /// Termos-chave com pontuação, em ordem decrescente de relevância.
    fn keyterms(&self, doc: &Doc, top_n: usize) -> Vec<(String, f64)> {
        sgrank(doc, top_n)
    }
}

/// Constrói motores a partir do identificador do modelo.
pub trait ModelLoader: Send + Sync {
    /// Identificadores que `load` sabe construir.
    fn available(&self) -> Vec<String>;

    /// Constrói o motor. Pode ser caro; o cache garante uma única chamada por modelo.
    fn load(&self, model: &str) -> Result<Arc<dyn Engine>>;
}

/// Carregador dos modelos embutidos (`en`, `de`, `pt`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLoader;

impl ModelLoader for BuiltinLoader {
    fn available(&self) -> Vec<String> {
        PROFILES.iter().map(|p| p.code.to_string()).collect()
    }

    fn load(&self, model: &str) -> Result<Arc<dyn Engine>> {
        let profile = LanguageProfile::by_code(model)
            .ok_or_else(|| NlpError::UnknownModel(model.to_string()))?;
        Ok(Arc::new(RulePipeline::new(profile)))
    }
}
