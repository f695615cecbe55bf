//! # Termos-Chave (SGRank)
//!
//! Ranqueamento em dois estágios, no estilo do SGRank:
//!
//! 1. **Estatístico**: cada candidato (n-grama de 1 a 6 tokens formado por
//!    substantivos, nomes próprios e adjetivos, terminado em substantivo)
//!    recebe `tf × comprimento × ln(3000 / (primeira_posição + 1))`. A
//!    frequência desconta as ocorrências cobertas por candidatos maiores.
//!    Candidatos vistos pela primeira vez a partir do token 2999 ficam de
//!    fora, como no corte de posição do SGRank.
//! 2. **Grafo**: PageRank personalizado sobre o grafo de coocorrência dos
//!    candidatos (janela de 10 tokens, peso `1 / distância`, amortecimento
//!    0.85), usando as notas do estágio 1 como vetor de personalização.
//!
//! O grafo é esparso: só recebem aresta pares de ocorrências dentro da
//! janela, então o custo cresce com o número de ocorrências e não com o
//! quadrado do número de candidatos.
//!
//! As notas finais somam 1. O texto de cada termo é a sequência de lemas em
//! minúsculas.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::document::Doc;
use crate::pos::WordClass;

const MAX_NGRAM: usize = 6;
const WINDOW: usize = 10;
const DAMPING: f64 = 0.85;
const POSITION_CUTOFF: usize = 3000;
const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
struct Candidate {
    words: Vec<String>,
    positions: Vec<usize>,
}

impl Candidate {
    fn key(&self) -> String {
        self.words.join(" ")
    }

    fn first(&self) -> usize {
        self.positions.first().copied().unwrap_or(0)
    }
}

fn is_term_word(class: WordClass) -> bool {
    matches!(class, WordClass::Noun | WordClass::ProperNoun | WordClass::Adjective)
}

/// Ranqueia os termos-chave de um documento e devolve os `top_n` melhores.
pub fn sgrank(doc: &Doc, top_n: usize) -> Vec<(String, f64)> {
    let candidates = collect_candidates(doc);
    if candidates.is_empty() || top_n == 0 {
        return Vec::new();
    }

    // === Estágio 1: frequência ajustada, comprimento e posição ===
    let frequencies = adjusted_frequencies(&candidates);
    let mut nodes: Vec<&Candidate> = Vec::new();
    let mut stage1: Vec<f64> = Vec::new();
    for (candidate, tf) in candidates.iter().zip(frequencies) {
        let first = candidate.first() + 1;
        if tf == 0 || first >= POSITION_CUTOFF {
            continue;
        }
        let position = (POSITION_CUTOFF as f64 / first as f64).ln();
        nodes.push(candidate);
        stage1.push(tf as f64 * candidate.words.len() as f64 * position);
    }
    if nodes.is_empty() {
        return Vec::new();
    }

    // === Estágio 2: PageRank personalizado ===
    let total: f64 = stage1.iter().sum();
    let personalization: Vec<f64> = stage1.iter().map(|s| s / total).collect();
    let rank = personalized_pagerank(&cooccurrence(&nodes), &personalization);

    let sum: f64 = rank.iter().sum();
    let mut scored: Vec<(String, f64, usize)> = nodes
        .iter()
        .zip(&rank)
        .map(|(candidate, r)| (candidate.key(), r / sum, candidate.first()))
        .collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.2.cmp(&b.2))
    });
    scored.truncate(top_n);
    scored.into_iter().map(|(text, score, _)| (text, score)).collect()
}

/// Frequência de cada candidato menos as ocorrências dos candidatos maiores
/// que o contêm. Cada candidato maior desconta uma vez por sub-n-grama,
/// mesmo que o contenha repetido.
fn adjusted_frequencies(candidates: &[Candidate]) -> Vec<usize> {
    let index: HashMap<&[String], usize> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (c.words.as_slice(), i))
        .collect();

    let mut subsumed = vec![0usize; candidates.len()];
    for other in candidates {
        let mut seen: HashSet<usize> = HashSet::new();
        for len in 1..other.words.len() {
            for window in other.words.windows(len) {
                if let Some(&i) = index.get(window) {
                    if seen.insert(i) {
                        subsumed[i] += other.positions.len();
                    }
                }
            }
        }
    }

    candidates
        .iter()
        .zip(subsumed)
        .map(|(c, s)| c.positions.len().saturating_sub(s))
        .collect()
}

/// Lista de adjacência simétrica: peso `1 / distância` somado sobre todos
/// os pares de ocorrências de nós diferentes dentro da janela.
fn cooccurrence(nodes: &[&Candidate]) -> Vec<Vec<(usize, f64)>> {
    let mut occurrences: Vec<(usize, usize)> = nodes
        .iter()
        .enumerate()
        .flat_map(|(node, c)| c.positions.iter().map(move |&p| (p, node)))
        .collect();
    occurrences.sort_unstable();

    let mut edges: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); nodes.len()];
    for (k, &(pa, a)) in occurrences.iter().enumerate() {
        for &(pb, b) in &occurrences[k + 1..] {
            let distance = pb - pa;
            if distance >= WINDOW {
                break;
            }
            if distance == 0 || a == b {
                continue;
            }
            let weight = 1.0 / distance as f64;
            *edges[a].entry(b).or_insert(0.0) += weight;
            *edges[b].entry(a).or_insert(0.0) += weight;
        }
    }
    edges.into_iter().map(|e| e.into_iter().collect()).collect()
}

fn personalized_pagerank(edges: &[Vec<(usize, f64)>], personalization: &[f64]) -> Vec<f64> {
    let n = edges.len();
    let out_weight: Vec<f64> = edges.iter().map(|e| e.iter().map(|(_, w)| w).sum()).collect();

    let mut rank = personalization.to_vec();
    for _ in 0..MAX_ITERATIONS {
        // Nós sem arestas devolvem sua massa pelo vetor de personalização
        let dangling: f64 = (0..n).filter(|&j| out_weight[j] == 0.0).map(|j| rank[j]).sum();
        let mut incoming = vec![0.0f64; n];
        for (j, neighbours) in edges.iter().enumerate() {
            if out_weight[j] == 0.0 {
                continue;
            }
            let share = rank[j] / out_weight[j];
            for &(i, w) in neighbours {
                incoming[i] += w * share;
            }
        }
        let next: Vec<f64> = (0..n)
            .map(|i| {
                (1.0 - DAMPING) * personalization[i]
                    + DAMPING * (incoming[i] + dangling * personalization[i])
            })
            .collect();
        let delta: f64 = next.iter().zip(&rank).map(|(a, b)| (a - b).abs()).sum();
        rank = next;
        if delta < TOLERANCE {
            break;
        }
    }
    rank
}

/// Candidatos em ordem de primeira ocorrência.
fn collect_candidates(doc: &Doc) -> Vec<Candidate> {
    let mut index: HashMap<Vec<String>, usize> = HashMap::new();
    let mut candidates: Vec<Candidate> = Vec::new();
    let lemmas: Vec<String> = doc.tokens.iter().map(|t| t.lemma.to_lowercase()).collect();

    for sentence in &doc.sents {
        for start in sentence.clone() {
            if !is_term_word(doc.tokens[start].class) {
                continue;
            }
            for len in 1..=MAX_NGRAM {
                let end = start + len;
                if end > sentence.end || !is_term_word(doc.tokens[end - 1].class) {
                    break;
                }
                if !matches!(doc.tokens[end - 1].class, WordClass::Noun | WordClass::ProperNoun) {
                    continue;
                }
                let words = lemmas[start..end].to_vec();
                match index.get(&words) {
                    Some(&i) => candidates[i].positions.push(start),
                    None => {
                        index.insert(words.clone(), candidates.len());
                        candidates.push(Candidate { words, positions: vec![start] });
                    }
                }
            }
        }
    }
    candidates
}
