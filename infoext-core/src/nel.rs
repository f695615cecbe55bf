//! # Resolução de Menções (Entity Linking)
//!
//! Liga a superfície textual de uma menção ("Barack Obama") a um
//! identificador estável numa Base de Conhecimento ("Q76").
//!
//! Há duas implementações de [`MentionResolver`]:
//!
//! - [`SearchIndexResolver`]: consulta um índice de busca externo por HTTP
//!   (`match` com `operator: and` sobre o campo de rótulos).
//! - [`KnowledgeBase`]: tabela em memória com a mesma semântica, para
//!   implantações sem índice e para testes.
//!
//! Falhas de consulta nunca derrubam uma resposta: [`resolve_or_empty`]
//! registra o erro e devolve identificador vazio.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::{NlpError, Result};

/// Campo de rótulos consultado por padrão no índice de busca.
pub const DEFAULT_LABEL_FIELD: &str = "labelsGroup";

/// Tempo limite padrão de uma consulta ao índice.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolve uma menção para um identificador da base de conhecimento.
#[async_trait]
pub trait MentionResolver: Send + Sync {
    /// `Ok(None)` quando nenhum rótulo corresponde à menção.
    async fn resolve(&self, mention: &str) -> Result<Option<String>>;
}

/// Resolve a menção e degrada qualquer ausência ou falha para `""`.
pub async fn resolve_or_empty(resolver: &dyn MentionResolver, mention: &str) -> String {
    match resolver.resolve(mention).await {
        Ok(Some(id)) => id,
        Ok(None) => String::new(),
        Err(e) => {
            warn!(mention, error = %e, "falha ao resolver menção; usando identificador vazio");
            String::new()
        }
    }
}

// ============================================================================
// Índice de busca externo
// ============================================================================

/// Cliente do índice de busca.
pub struct SearchIndexResolver {
    client: reqwest::Client,
    url: String,
    field: String,
}

impl SearchIndexResolver {
    /// `url` é o endpoint de busca completo (ex: `http://kb:9200/labels/_search`).
    pub fn new(url: impl Into<String>, field: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NlpError::KnowledgeBase(format!("cliente HTTP: {e}")))?;
        Ok(Self { client, url: url.into(), field: field.into() })
    }

    fn query(&self, mention: &str) -> Value {
        let mut matcher = serde_json::Map::new();
        matcher.insert(self.field.clone(), json!({ "query": mention, "operator": "and" }));
        json!({ "size": 1, "query": { "match": matcher } })
    }
}

#[async_trait]
impl MentionResolver for SearchIndexResolver {
    async fn resolve(&self, mention: &str) -> Result<Option<String>> {
        let response = self
            .client
            .post(&self.url)
            .json(&self.query(mention))
            .send()
            .await
            .map_err(|e| NlpError::KnowledgeBase(e.to_string()))?
            .error_for_status()
            .map_err(|e| NlpError::KnowledgeBase(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| NlpError::KnowledgeBase(format!("resposta inválida: {e}")))?;

        let id = first_hit(&body)?;
        debug!(mention, id = ?id, "menção resolvida");
        Ok(id)
    }
}

/// Lê `hits.total` (número ou `{value: n}`) e `hits.hits[0]._id`.
fn first_hit(body: &Value) -> Result<Option<String>> {
    let malformed = |what: &str| NlpError::KnowledgeBase(format!("resposta sem {what}"));

    let hits = body.get("hits").ok_or_else(|| malformed("hits"))?;
    let total = match hits.get("total") {
        Some(Value::Object(total)) => total.get("value").and_then(Value::as_u64),
        Some(total) => total.as_u64(),
        None => None,
    }
    .ok_or_else(|| malformed("hits.total"))?;

    if total == 0 {
        return Ok(None);
    }
    hits.get("hits")
        .and_then(|h| h.get(0))
        .and_then(|h| h.get("_id"))
        .and_then(Value::as_str)
        .map(|id| Some(id.to_string()))
        .ok_or_else(|| malformed("hits.hits[0]._id"))
}

// ============================================================================
// Base em memória
// ============================================================================

#[derive(Debug, Clone)]
struct KbRecord {
    id: String,
    terms: Vec<String>,
}

/// Tabela rótulo → identificador.
///
/// Uma menção corresponde a um rótulo quando todos os seus termos aparecem
/// no rótulo. Entre vários rótulos, vence o de menos termos; depois, o
/// inserido primeiro.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    records: Vec<KbRecord>,
}

fn terms(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pequena amostra de rótulos do Wikidata.
    pub fn wikidata_sample() -> Self {
        let mut kb = Self::new();
        for (label, id) in [
            ("Barack Obama", "Q76"),
            ("Luiz Inácio Lula da Silva Lula", "Q36098"),
            ("Brasil Brazil", "Q155"),
            ("Paris", "Q90"),
            ("Paris Hilton", "Q47454"),
            ("Apple Inc. Apple", "Q312"),
            ("Beats Electronics Beats", "Q2901520"),
            ("Angela Merkel", "Q567"),
            ("Berlin Berlim", "Q64"),
        ] {
            kb.insert(label, id);
        }
        kb
    }

    pub fn insert(&mut self, label: &str, id: impl Into<String>) {
        self.records.push(KbRecord { id: id.into(), terms: terms(label) });
    }

    pub fn lookup(&self, mention: &str) -> Option<&str> {
        let wanted = terms(mention);
        if wanted.is_empty() {
            return None;
        }
        self.records
            .iter()
            .filter(|r| wanted.iter().all(|w| r.terms.contains(w)))
            .min_by_key(|r| r.terms.len())
            .map(|r| r.id.as_str())
    }
}

#[async_trait]
impl MentionResolver for KnowledgeBase {
    async fn resolve(&self, mention: &str) -> Result<Option<String>> {
        Ok(self.lookup(mention).map(str::to_string))
    }
}
