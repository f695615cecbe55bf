//! # Extração de Triplas e Conceitos
//!
//! Rotinas de leitura sobre um [`Doc`] já analisado:
//!
//! - [`svo_triples`]: relações sujeito-verbo-objeto a partir das dependências.
//! - [`concept_chunks`]: sintagmas nominais sem o artigo inicial.

use crate::document::{Chunk, Doc};
use crate::pos::WordClass;

/// Intervalo de tokens `[start, end)` de um documento.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

/// Uma relação extraída de uma sentença.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvoTriple {
    pub subject: TokenSpan,
    /// Auxiliares, negação e verbo, em ordem.
    pub predicate: Vec<usize>,
    pub object: TokenSpan,
}

impl SvoTriple {
    pub fn predicate_text(&self, doc: &Doc) -> String {
        self.predicate
            .iter()
            .map(|&i| doc.tokens[i].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const SUBJECT_DEPS: &[&str] = &["nsubj", "nsubjpass"];
const OBJECT_DEPS: &[&str] = &["dobj", "attr"];
const PREDICATE_DEPS: &[&str] = &["aux", "auxpass", "neg"];

/// Extrai triplas sujeito-verbo-objeto.
///
/// Para cada verbo com sujeito nominal e objeto (`dobj`/`attr`), gera uma
/// tripla por combinação de sujeito e objeto, incluindo os coordenados
/// ("John and Mary" gera duas triplas). Um verbo coordenado sem sujeito
/// próprio herda o sujeito do verbo anterior.
pub fn svo_triples(doc: &Doc) -> Vec<SvoTriple> {
    let mut triples = Vec::new();

    for verb in &doc.tokens {
        if !verb.class.is_verbal() || PREDICATE_DEPS.contains(&verb.dep) {
            continue;
        }
        let mut subjects = arguments(doc, verb.index, SUBJECT_DEPS);
        if subjects.is_empty() && verb.dep == "conj" && verb.head != verb.index {
            subjects = arguments(doc, verb.head, SUBJECT_DEPS);
        }
        let objects = arguments(doc, verb.index, OBJECT_DEPS);
        if subjects.is_empty() || objects.is_empty() {
            continue;
        }

        let mut predicate: Vec<usize> = doc
            .children(verb.index)
            .filter(|&c| PREDICATE_DEPS.contains(&doc.tokens[c].dep))
            .collect();
        predicate.push(verb.index);
        predicate.sort_unstable();

        for &subject in &subjects {
            for &object in &objects {
                triples.push(SvoTriple {
                    subject: argument_span(doc, subject),
                    predicate: predicate.clone(),
                    object: argument_span(doc, object),
                });
            }
        }
    }
    triples
}

/// Filhos de `head` com uma das relações, mais os seus coordenados.
fn arguments(doc: &Doc, head: usize, deps: &[&str]) -> Vec<usize> {
    let mut out = Vec::new();
    for child in doc.children(head) {
        if deps.contains(&doc.tokens[child].dep) {
            out.push(child);
            let mut frontier = vec![child];
            while let Some(current) = frontier.pop() {
                for conj in doc.children(current).filter(|&c| doc.tokens[c].dep == "conj") {
                    out.push(conj);
                    frontier.push(conj);
                }
            }
        }
    }
    out.sort_unstable();
    out
}

/// O sintagma nominal que contém o token, ou o próprio token.
fn argument_span(doc: &Doc, index: usize) -> TokenSpan {
    doc.noun_chunks
        .iter()
        .find(|c| c.contains(index))
        .map(|c| TokenSpan { start: c.start, end: c.end })
        .unwrap_or(TokenSpan { start: index, end: index + 1 })
}

/// Sintagmas nominais para a visão de conceitos.
///
/// Artigos iniciais são removidos ("the quick fox" → "quick fox"); um
/// sintagma que fica vazio é descartado.
pub fn concept_chunks(doc: &Doc, chunks: &[Chunk]) -> Vec<Chunk> {
    chunks
        .iter()
        .filter_map(|chunk| {
            let mut start = chunk.start;
            while start < chunk.end && doc.tokens[start].class == WordClass::Determiner {
                start += 1;
            }
            (start < chunk.end).then_some(Chunk { start, end: chunk.end, root: chunk.root })
        })
        .collect()
}
