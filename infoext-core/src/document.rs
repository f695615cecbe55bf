//! # Documento Anotado
//!
//! [`Doc`] é a análise completa de um texto produzida por um [`Engine`]:
//! tokens com tag, lema, tipo de entidade e relação de dependência, mais as
//! sentenças, as entidades e os sintagmas nominais.
//!
//! Um `Doc` é imutável depois de construído. As transformações de fusão da
//! visão de dependências trabalham sobre cópias de [`DocToken`].
//!
//! [`Engine`]: crate::engine::Engine

use std::ops::Range;

use serde::Serialize;

use crate::pos::WordClass;
use crate::tagger::EntitySpan;

/// Um token do documento com todas as suas anotações.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocToken {
    pub text: String,
    /// Offset de byte inicial no texto original.
    pub start: usize,
    /// Offset de byte final (exclusivo).
    pub end: usize,
    pub index: usize,
    /// Tag fina (ex: "NNP").
    pub tag: &'static str,
    pub lemma: String,
    pub class: WordClass,
    /// Rótulo da entidade que cobre o token, ou "" fora de entidades.
    pub ent_type: &'static str,
    /// Relação com o núcleo (ex: "nsubj"); "ROOT" na raiz da sentença.
    pub dep: &'static str,
    /// Índice do núcleo; a raiz aponta para si mesma.
    pub head: usize,
    pub is_punct: bool,
}

/// Intervalo de tokens `[start, end)` com o índice do seu núcleo sintático.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
    pub root: usize,
}

impl Chunk {
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Doc {
    pub text: String,
    pub tokens: Vec<DocToken>,
    pub sents: Vec<Range<usize>>,
    /// Entidades em ordem de documento, sem sobreposição.
    pub ents: Vec<EntitySpan>,
    /// Sintagmas nominais em ordem de documento, sem sobreposição.
    pub noun_chunks: Vec<Chunk>,
}

impl Doc {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Texto original coberto pelos tokens `[start, end)`.
    pub fn span_text(&self, start: usize, end: usize) -> &str {
        if start >= end || end > self.tokens.len() {
            return "";
        }
        &self.text[self.tokens[start].start..self.tokens[end - 1].end]
    }

    /// Converte um offset de byte em offset de caractere.
    ///
    /// As visões expõem offsets em caracteres Unicode, como os clientes
    /// costumam indexar strings.
    pub fn char_offset(&self, byte: usize) -> usize {
        let byte = byte.min(self.text.len());
        self.text
            .char_indices()
            .take_while(|(i, _)| *i < byte)
            .count()
    }

    /// Índices dos dependentes diretos de `head`, em ordem.
    pub fn children(&self, head: usize) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .filter(move |t| t.head == head && t.index != head)
            .map(|t| t.index)
    }
}
