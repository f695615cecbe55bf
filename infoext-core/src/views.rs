//! # Visões de Anotação
//!
//! Cada visão roda o motor sobre um texto e reorganiza o [`Doc`] num
//! formato serializável:
//!
//! | Visão                 | Saída                                   |
//! |-----------------------|-----------------------------------------|
//! | [`dependency_parse`]  | palavras + arcos de dependência         |
//! | [`entities`]          | intervalos de entidades                 |
//! | [`triples`]           | triplas sujeito-predicado-objeto        |
//! | [`keywords`]          | termos-chave com pontuação              |
//! | [`concepts`]          | sintagmas nominais                      |
//!
//! Todos os offsets expostos são em caracteres. Os campos de cada registro
//! são declarados em ordem alfabética, e é essa a ordem das chaves no JSON.

use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::document::Doc;
use crate::engine::Engine;
use crate::error::Result;
use crate::extract::concept_chunks;
use crate::merge::{collapse_phrases, collapse_punctuation, remap_chunks};
use crate::nel::{resolve_or_empty, MentionResolver};

/// Quantidade de termos devolvida pela visão de palavras-chave.
pub const KEYWORD_LIMIT: usize = 10;

/// Consultas simultâneas à base de conhecimento por resposta.
pub const LINK_CONCURRENCY: usize = 8;

// ============================================================================
// Dependências
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub collapse_punctuation: bool,
    pub collapse_phrases: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { collapse_punctuation: true, collapse_phrases: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub tag: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arc {
    pub dir: &'static str,
    pub end: usize,
    pub label: String,
    pub start: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyParse {
    pub arcs: Vec<Arc>,
    pub words: Vec<Word>,
}

/// Palavras e arcos, com as fusões pedidas em `options`.
///
/// Os sintagmas são lidos do documento antes de qualquer fusão e
/// reindexados depois da fusão de pontuação.
pub fn dependency_parse(engine: &dyn Engine, text: &str, options: ParseOptions) -> Result<DependencyParse> {
    let doc = engine.parse(text)?;
    let mut chunks = engine.noun_chunks(&doc);
    let mut units = doc.tokens;

    if options.collapse_punctuation {
        let merged = collapse_punctuation(&units, &doc.text);
        chunks = remap_chunks(&chunks, &merged.mapping);
        units = merged.units;
    }
    if options.collapse_phrases {
        units = collapse_phrases(&units, &doc.text, &chunks).units;
    }

    let words = units
        .iter()
        .map(|u| Word { tag: u.tag.to_string(), text: u.text.clone() })
        .collect();

    let arcs = units
        .iter()
        .filter(|u| u.head != u.index)
        .map(|u| Arc {
            dir: if u.index < u.head { "left" } else { "right" },
            end: u.index.max(u.head),
            label: u.dep.to_string(),
            start: u.index.min(u.head),
        })
        .collect();

    Ok(DependencyParse { arcs, words })
}

// ============================================================================
// Entidades
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRecord {
    pub end: usize,
    pub start: usize,
    #[serde(rename = "type")]
    pub kind: String,
}

pub fn entities(engine: &dyn Engine, text: &str) -> Result<Vec<EntityRecord>> {
    let doc = engine.parse(text)?;
    Ok(doc
        .ents
        .iter()
        .map(|e| EntityRecord {
            end: doc.char_offset(e.end),
            start: doc.char_offset(e.start),
            kind: e.category.name().to_string(),
        })
        .collect())
}

// ============================================================================
// Triplas
// ============================================================================

/// Uma tripla. `subject_uri`/`object_uri` só aparecem quando há resolução
/// de menções configurada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripleRecord {
    pub o_end: usize,
    pub o_start: usize,
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_uri: Option<String>,
    pub predicate: String,
    pub s_end: usize,
    pub s_start: usize,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_uri: Option<String>,
}

pub fn triples(engine: &dyn Engine, text: &str) -> Result<Vec<TripleRecord>> {
    let doc = engine.parse(text)?;
    Ok(engine
        .svo_triples(&doc)
        .iter()
        .map(|t| {
            let (s_start, s_end) = char_range(&doc, t.subject.start, t.subject.end);
            let (o_start, o_end) = char_range(&doc, t.object.start, t.object.end);
            TripleRecord {
                o_end,
                o_start,
                object: doc.span_text(t.object.start, t.object.end).to_string(),
                object_uri: None,
                predicate: t.predicate_text(&doc),
                s_end,
                s_start,
                subject: doc.span_text(t.subject.start, t.subject.end).to_string(),
                subject_uri: None,
            }
        })
        .collect())
}

/// Preenche `subject_uri` e `object_uri`, com no máximo
/// [`LINK_CONCURRENCY`] consultas em andamento. Menções sem correspondência
/// recebem `""`.
pub async fn link_triples(records: &mut [TripleRecord], resolver: &dyn MentionResolver) {
    let lookups: Vec<_> = records
        .iter()
        .flat_map(|r| [r.subject.as_str(), r.object.as_str()])
        .map(|mention| resolve_or_empty(resolver, mention))
        .collect();
    let ids: Vec<String> = stream::iter(lookups)
        .buffered(LINK_CONCURRENCY)
        .collect()
        .await;

    for (record, pair) in records.iter_mut().zip(ids.chunks(2)) {
        record.subject_uri = pair.first().cloned();
        record.object_uri = pair.get(1).cloned();
    }
}

fn char_range(doc: &Doc, start: usize, end: usize) -> (usize, usize) {
    if start >= end || end > doc.tokens.len() {
        return (0, 0);
    }
    (doc.char_offset(doc.tokens[start].start), doc.char_offset(doc.tokens[end - 1].end))
}

// ============================================================================
// Palavras-chave e conceitos
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordRecord {
    pub score: f64,
    pub text: String,
}

pub fn keywords(engine: &dyn Engine, text: &str) -> Result<Vec<KeywordRecord>> {
    let doc = engine.parse(text)?;
    Ok(engine
        .keyterms(&doc, KEYWORD_LIMIT)
        .into_iter()
        .map(|(text, score)| KeywordRecord { score, text })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptRecord {
    pub end: usize,
    pub start: usize,
    pub text: String,
}

pub fn concepts(engine: &dyn Engine, text: &str) -> Result<Vec<ConceptRecord>> {
    let doc = engine.parse(text)?;
    let chunks = engine.noun_chunks(&doc);
    Ok(concept_chunks(&doc, &chunks)
        .iter()
        .map(|c| {
            let (start, end) = char_range(&doc, c.start, c.end);
            ConceptRecord { end, start, text: doc.span_text(c.start, c.end).to_string() }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{ENGLISH, PORTUGUESE};
    use crate::nel::KnowledgeBase;
    use crate::pipeline::RulePipeline;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn engine() -> RulePipeline {
        RulePipeline::new(&ENGLISH)
    }

    fn words(parse: &DependencyParse) -> Vec<&str> {
        parse.words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_dependency_parse_merges() {
        let text = "The quick fox jumps.";
        let only_punct = ParseOptions { collapse_punctuation: true, collapse_phrases: false };
        let parse = dependency_parse(&engine(), text, only_punct).expect("visão");
        assert_eq!(words(&parse), vec!["The", "quick", "fox", "jumps."]);
        assert_eq!(parse.words[3].tag, "VBZ");
        assert_eq!(parse.arcs.len(), 3);

        let parse = dependency_parse(&engine(), text, ParseOptions::default()).expect("visão");
        assert_eq!(words(&parse), vec!["The quick fox", "jumps."]);
        assert_eq!(
            parse.arcs,
            vec![Arc { dir: "left", end: 1, label: "nsubj".into(), start: 0 }]
        );

        let raw = ParseOptions { collapse_punctuation: false, collapse_phrases: false };
        let parse = dependency_parse(&engine(), text, raw).expect("visão");
        assert_eq!(parse.words.len(), 5);
        assert_eq!(parse.arcs.len(), 4);
    }

    #[test]
    fn test_arcs_cover_every_non_root_unit() {
        let text = "Apple acquired Beats in 2014. The deal was announced in May.";
        for options in [
            ParseOptions::default(),
            ParseOptions { collapse_punctuation: false, collapse_phrases: false },
        ] {
            let parse = dependency_parse(&engine(), text, options).expect("visão");
            // Uma raiz por sentença
            assert_eq!(parse.arcs.len(), parse.words.len() - 2);
            for arc in &parse.arcs {
                assert!(arc.start < arc.end);
            }
        }
    }

    #[test]
    fn test_arc_direction_follows_head() {
        let text = "Apple acquired Beats in 2014. The deal was announced in May.";
        let raw = ParseOptions { collapse_punctuation: false, collapse_phrases: false };
        let parse = dependency_parse(&engine(), text, raw).expect("visão");
        let doc = engine().parse(text).expect("análise");

        let expected: Vec<Arc> = doc
            .tokens
            .iter()
            .filter(|t| t.head != t.index)
            .map(|t| Arc {
                dir: if t.index < t.head { "left" } else { "right" },
                end: t.index.max(t.head),
                label: t.dep.to_string(),
                start: t.index.min(t.head),
            })
            .collect();
        assert_eq!(parse.arcs, expected);
        assert!(parse.arcs.iter().any(|a| a.dir == "left"));
        assert!(parse.arcs.iter().any(|a| a.dir == "right"));
    }

    #[test]
    fn test_phrases_without_punctuation_merge() {
        let options = ParseOptions { collapse_punctuation: false, collapse_phrases: true };
        let parse = dependency_parse(&engine(), "The quick fox jumps.", options).expect("visão");
        assert_eq!(words(&parse), vec!["The quick fox", "jumps", "."]);
        assert_eq!(parse.words[0].tag, "NN");
        assert_eq!(
            parse.arcs,
            vec![
                Arc { dir: "left", end: 1, label: "nsubj".into(), start: 0 },
                Arc { dir: "right", end: 2, label: "punct".into(), start: 1 },
            ]
        );
    }

    #[test]
    fn test_entities_use_char_offsets() {
        let text = "José visitou São Paulo em 2014.";
        let ents = entities(&RulePipeline::new(&PORTUGUESE), text).expect("visão");
        assert!(!ents.is_empty());
        let chars: Vec<char> = text.chars().collect();
        for window in ents.windows(2) {
            assert!(window[0].end <= window[1].start);
        }
        let sao = ents.iter().find(|e| e.kind == "LOC").expect("LOC");
        let mention: String = chars[sao.start..sao.end].iter().collect();
        assert_eq!(mention, "São Paulo");
    }

    #[test]
    fn test_triples_and_linking() {
        let text = "Apple acquired Beats.";
        let mut records = triples(&engine(), text).expect("visão");
        assert_eq!(records.len(), 1);
        let triple = &records[0];
        assert_eq!(
            (triple.subject.as_str(), triple.s_start, triple.s_end),
            ("Apple", 0, 5)
        );
        assert_eq!(triple.predicate, "acquired");
        assert_eq!((triple.object.as_str(), triple.o_start, triple.o_end), ("Beats", 15, 20));

        let json = serde_json::to_value(&records[0]).expect("json");
        assert!(json.get("subject_uri").is_none());

        let mut kb = KnowledgeBase::new();
        kb.insert("Apple Inc. Apple", "Q312");
        futures::executor::block_on(link_triples(&mut records, &kb));
        assert_eq!(records[0].subject_uri.as_deref(), Some("Q312"));
        assert_eq!(records[0].object_uri.as_deref(), Some(""));
    }

    /// Resolve tudo para "Q1", registrando o pico de consultas simultâneas.
    struct SlowResolver {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl MentionResolver for SlowResolver {
        async fn resolve(&self, _mention: &str) -> crate::error::Result<Option<String>> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(Some("Q1".to_string()))
        }
    }

    #[tokio::test]
    async fn test_linking_is_bounded() {
        let mut records: Vec<TripleRecord> = (0..20)
            .map(|i| TripleRecord {
                o_end: 0,
                o_start: 0,
                object: format!("object {i}"),
                object_uri: None,
                predicate: "is".into(),
                s_end: 0,
                s_start: 0,
                subject: format!("subject {i}"),
                subject_uri: None,
            })
            .collect();
        let resolver = SlowResolver { in_flight: AtomicUsize::new(0), peak: AtomicUsize::new(0) };

        link_triples(&mut records, &resolver).await;

        let peak = resolver.peak.load(Ordering::SeqCst);
        assert!(peak > 1 && peak <= LINK_CONCURRENCY, "pico de {peak}");
        assert!(records
            .iter()
            .all(|r| r.subject_uri.as_deref() == Some("Q1") && r.object_uri.as_deref() == Some("Q1")));
    }

    #[test]
    fn test_keywords_and_concepts() {
        let text = "The quick fox saw a dog.";
        let kws = keywords(&engine(), text).expect("visão");
        assert!(kws.len() <= KEYWORD_LIMIT);
        assert!(kws.iter().any(|k| k.text == "quick fox"));

        let concepts = concepts(&engine(), text).expect("visão");
        assert_eq!(
            concepts,
            vec![
                ConceptRecord { end: 13, start: 4, text: "quick fox".into() },
                ConceptRecord { end: 23, start: 20, text: "dog".into() },
            ]
        );
    }

    #[test]
    fn test_empty_text_yields_empty_views() {
        let engine = engine();
        let parse = dependency_parse(&engine, "", ParseOptions::default()).expect("visão");
        assert!(parse.words.is_empty() && parse.arcs.is_empty());
        assert!(entities(&engine, "").expect("visão").is_empty());
        assert!(triples(&engine, "").expect("visão").is_empty());
        assert!(keywords(&engine, "").expect("visão").is_empty());
        assert!(concepts(&engine, "").expect("visão").is_empty());
    }

    #[test]
    fn test_json_keys_are_sorted() {
        let parse = dependency_parse(&engine(), "The quick fox jumps.", ParseOptions::default()).expect("visão");
        let json = serde_json::to_string(&parse).expect("json");
        assert!(json.starts_with("{\"arcs\":[{\"dir\":"));
        assert!(json.contains("{\"tag\":"));
    }
}
