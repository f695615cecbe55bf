//! # Fusão de Tokens
//!
//! A visão de dependências pode exibir sequências de tokens como uma única
//! unidade: uma palavra com a pontuação que a segue ("jumps.") e sintagmas
//! nominais inteiros ("The quick fox").
//!
//! As funções aqui recebem uma fatia de unidades e devolvem uma nova
//! sequência; nada é alterado no lugar. Em cada passo os intervalos a fundir
//! são calculados primeiro, sobre a sequência de entrada, e aplicados todos
//! de uma vez depois.
//!
//! Uma unidade fundida recebe:
//! - o texto original entre o início do primeiro e o fim do último token;
//! - tag, lema, classe e tipo de entidade do token designado (o primeiro
//!   token numa sequência de pontuação, o núcleo num sintagma);
//! - relação e núcleo da raiz do intervalo, isto é, do token cujo núcleo
//!   fica fora do intervalo (empate: o mais próximo da raiz da sentença).
//!
//! Núcleos de outras unidades que apontavam para dentro do intervalo passam
//! a apontar para a unidade fundida. Uma raiz de sentença continua
//! apontando para si mesma.

use std::ops::Range;

use crate::document::{Chunk, DocToken};

/// Resultado de uma fusão: as novas unidades e, para cada unidade de
/// entrada, o índice da unidade de saída que a contém.
#[derive(Debug, Clone)]
pub struct Merged {
    pub units: Vec<DocToken>,
    pub mapping: Vec<usize>,
}

/// Primeiro passo da fusão de pontuação: os intervalos a fundir.
///
/// Cada intervalo começa numa unidade que não é pontuação e cobre toda a
/// sequência de pontuação que vem logo depois. A última unidade nunca
/// inicia um intervalo.
pub fn punctuation_spans(units: &[DocToken]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    for i in 0..units.len().saturating_sub(1) {
        if units[i].is_punct || !units[i + 1].is_punct {
            continue;
        }
        let mut end = i + 1;
        while end < units.len() && units[end].is_punct {
            end += 1;
        }
        spans.push(i..end);
    }
    spans
}

/// Funde cada palavra com a pontuação que a segue.
pub fn collapse_punctuation(units: &[DocToken], text: &str) -> Merged {
    let spans: Vec<(Range<usize>, usize)> = punctuation_spans(units)
        .into_iter()
        .map(|span| {
            let lead = span.start;
            (span, lead)
        })
        .collect();
    merge_spans(units, text, &spans)
}

/// Funde cada sintagma em uma unidade, com os dados do seu núcleo.
///
/// `chunks` deve estar em índices de `units`; use [`remap_chunks`] depois
/// de uma fusão de pontuação.
pub fn collapse_phrases(units: &[DocToken], text: &str, chunks: &[Chunk]) -> Merged {
    let spans: Vec<(Range<usize>, usize)> =
        chunks.iter().map(|c| (c.start..c.end, c.root)).collect();
    merge_spans(units, text, &spans)
}

/// Traduz sintagmas para os índices de uma sequência já fundida.
pub fn remap_chunks(chunks: &[Chunk], mapping: &[usize]) -> Vec<Chunk> {
    chunks
        .iter()
        .filter(|c| !c.is_empty() && c.end <= mapping.len() && c.root < mapping.len())
        .map(|c| Chunk {
            start: mapping[c.start],
            end: mapping[c.end - 1] + 1,
            root: mapping[c.root],
        })
        .collect()
}

/// Aplica de uma vez todos os intervalos (com o índice do token designado).
///
/// Intervalos vazios, fora dos limites, com designado fora do intervalo ou
/// sobrepostos a um intervalo anterior são ignorados.
fn merge_spans(units: &[DocToken], text: &str, spans: &[(Range<usize>, usize)]) -> Merged {
    let n = units.len();

    let mut accepted: Vec<(Range<usize>, usize)> = spans
        .iter()
        .filter(|(range, lead)| range.start < range.end && range.end <= n && range.contains(lead))
        .cloned()
        .collect();
    accepted.sort_by_key(|(range, _)| range.start);
    let mut last_end = 0;
    accepted.retain(|(range, _)| {
        let keep = range.start >= last_end;
        if keep {
            last_end = range.end;
        }
        keep
    });

    // Mapeamento índice antigo -> índice novo
    let mut mapping = vec![0; n];
    let mut groups: Vec<(Range<usize>, Option<usize>)> = Vec::new();
    let mut pending = accepted.into_iter().peekable();
    let mut i = 0;
    while i < n {
        let group = match pending.peek() {
            Some((range, _)) if range.start == i => {
                let (range, lead) = pending.next().unwrap_or((i..i + 1, i));
                (range, Some(lead))
            }
            _ => (i..i + 1, None),
        };
        for k in group.0.clone() {
            mapping[k] = groups.len();
        }
        i = group.0.end;
        groups.push(group);
    }

    let out: Vec<DocToken> = groups
        .iter()
        .enumerate()
        .map(|(new_index, (range, lead))| match lead {
            None => {
                let unit = &units[range.start];
                let head = if unit.head == unit.index { new_index } else { mapping[unit.head] };
                DocToken { index: new_index, head, ..unit.clone() }
            }
            Some(lead) => {
                let first = &units[range.start];
                let last = &units[range.end - 1];
                let designated = &units[*lead];
                let root = &units[span_root(units, range.clone())];
                let head = if root.head == root.index || range.contains(&root.head) {
                    new_index
                } else {
                    mapping[root.head]
                };
                DocToken {
                    text: text
                        .get(first.start..last.end)
                        .map(str::to_string)
                        .unwrap_or_else(|| units[range.clone()].iter().map(|u| u.text.as_str()).collect()),
                    start: first.start,
                    end: last.end,
                    index: new_index,
                    tag: designated.tag,
                    lemma: designated.lemma.clone(),
                    class: designated.class,
                    ent_type: designated.ent_type,
                    dep: if head == new_index { "ROOT" } else { root.dep },
                    head,
                    is_punct: units[range.clone()].iter().all(|u| u.is_punct),
                }
            }
        })
        .collect();

    Merged { units: out, mapping }
}

/// Token do intervalo cujo núcleo fica fora dele (ou que é raiz da
/// sentença); entre vários, o de menor profundidade.
fn span_root(units: &[DocToken], range: Range<usize>) -> usize {
    range
        .clone()
        .filter(|&k| {
            let head = units[k].head;
            head == k || !range.contains(&head)
        })
        .min_by_key(|&k| depth(units, k))
        .unwrap_or(range.start)
}

/// Distância até a raiz da sentença, seguindo os núcleos.
fn depth(units: &[DocToken], mut k: usize) -> usize {
    let mut steps = 0;
    while units[k].head != k && units[k].head < units.len() && steps <= units.len() {
        k = units[k].head;
        steps += 1;
    }
    steps
}
