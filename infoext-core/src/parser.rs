//! # Analisador de Dependências
//!
//! Atribui a cada token um núcleo e uma relação, sentença por sentença, a
//! partir das classes gramaticais:
//!
//! 1. **Sintagmas nominais**: sequências de artigo, possessivo, numeral,
//!    adjetivo e substantivo terminadas num substantivo ("the quick fox").
//!    O núcleo é o último substantivo; os demais tokens viram `det`, `poss`,
//!    `nummod`, `amod` ou `compound`. "John 's dog" forma um único sintagma
//!    (`poss` + `case`).
//! 2. **Grupos verbais**: auxiliares, modais e negações presos ao verbo
//!    principal ("does n't bark"). Em alemão, o auxiliar em segunda posição
//!    se junta ao particípio/infinitivo no fim da oração.
//! 3. **Raiz**: o primeiro verbo principal; sem verbo, o primeiro núcleo
//!    nominal.
//! 4. **Orações**: verbos seguintes viram `conj`, `xcomp` ou `ccomp` do
//!    verbo anterior.
//! 5. **Preposições e coordenação**: `prep`/`pobj`, `cc`/`conj`.
//! 6. **Argumentos**: sujeito antes do verbo (`nsubj`/`nsubjpass`), objeto
//!    depois (`dobj`, ou `attr` com verbo de ligação).
//! 7. O que sobrar é preso ao verbo mais próximo ou à raiz.
//!
//! Todo núcleo aponta para um token da mesma sentença e cada sentença tem
//! exatamente uma raiz, que aponta para si mesma. Não há ciclos: verbos só
//! apontam para verbos anteriores ou para a raiz, e os demais tokens
//! terminam sempre num verbo ou na raiz.

use std::ops::Range;

use crate::document::Chunk;
use crate::lexicon::{LanguageProfile, Morphology};
use crate::pos::{PosTag, WordClass};

/// Todas as relações que o analisador pode emitir, em ordem alfabética.
pub const DEP_LABELS: &[&str] = &[
    "ROOT", "acomp", "advmod", "amod", "attr", "aux", "auxpass", "case", "cc", "ccomp",
    "compound", "conj", "dep", "det", "dobj", "mark", "neg", "npadvmod", "nsubj", "nsubjpass",
    "nummod", "pobj", "poss", "prep", "punct", "xcomp",
];

/// Lemas de auxiliar que formam a voz passiva com particípio.
const PASSIVE_AUXILIARIES: &[&str] = &["be", "werden", "ser"];

/// Resultado da análise de um documento.
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
    pub heads: Vec<usize>,
    pub deps: Vec<&'static str>,
    /// Sintagmas nominais (núcleo substantivo ou pronome), em ordem.
    pub noun_chunks: Vec<Chunk>,
}

/// Analisa todas as sentenças de um documento já etiquetado.
pub fn parse(profile: &LanguageProfile, pos: &[PosTag], sentences: &[Range<usize>]) -> Parse {
    let mut arcs: Vec<Option<(usize, &'static str)>> = vec![None; pos.len()];
    let mut noun_chunks = Vec::new();

    for sentence in sentences {
        let mut parser = SentenceParser::new(profile, pos, sentence.clone(), &mut arcs);
        parser.run();
        noun_chunks.extend(parser.nominals.iter().copied().filter(|c| {
            matches!(
                pos[c.root].class,
                WordClass::Noun | WordClass::ProperNoun | WordClass::Pronoun
            )
        }));
    }

    let (heads, deps) = arcs
        .iter()
        .enumerate()
        .map(|(i, arc)| arc.unwrap_or((i, "ROOT")))
        .unzip();
    Parse { heads, deps, noun_chunks }
}

#[derive(Debug, Clone)]
struct VerbGroup {
    /// Primeiro token do grupo.
    start: usize,
    /// Fim da parte contígua do grupo; os objetos começam aqui.
    contiguous_end: usize,
    /// Fim (exclusivo) do grupo inteiro, incluindo a parte final em alemão.
    end: usize,
    main: usize,
    members: Vec<usize>,
    passive: bool,
    copula: bool,
}

struct SentenceParser<'a> {
    profile: &'a LanguageProfile,
    pos: &'a [PosTag],
    range: Range<usize>,
    arcs: &'a mut [Option<(usize, &'static str)>],
    nominals: Vec<Chunk>,
    groups: Vec<VerbGroup>,
    root: usize,
}

impl<'a> SentenceParser<'a> {
    fn new(
        profile: &'a LanguageProfile,
        pos: &'a [PosTag],
        range: Range<usize>,
        arcs: &'a mut [Option<(usize, &'static str)>],
    ) -> Self {
        let root = range.start;
        Self { profile, pos, range, arcs, nominals: Vec::new(), groups: Vec::new(), root }
    }

    fn run(&mut self) {
        if self.range.is_empty() {
            return;
        }
        self.chunk_nominals();
        self.group_verbs();
        self.choose_root();
        self.link_clauses();
        self.link_prepositions();
        self.link_coordination();
        self.link_arguments();
        self.link_remaining();
    }

    fn class(&self, i: usize) -> WordClass {
        self.pos[i].class
    }

    /// Só atribui tokens ainda livres; a raiz nunca é reatribuída.
    fn attach(&mut self, i: usize, head: usize, label: &'static str) {
        if i != head && self.arcs[i].is_none() {
            self.arcs[i] = Some((head, label));
        }
    }

    fn is_free(&self, i: usize) -> bool {
        self.arcs[i].is_none()
    }

    fn label(&self, i: usize) -> Option<&'static str> {
        self.arcs[i].map(|(_, label)| label)
    }

    fn chunk_member(&self, i: usize) -> bool {
        let tag = &self.pos[i];
        match tag.class {
            WordClass::Possessive => tag.tag != "POS",
            WordClass::Determiner
            | WordClass::Number
            | WordClass::Adjective
            | WordClass::Noun
            | WordClass::ProperNoun => true,
            _ => false,
        }
    }

    fn chunk_nominals(&mut self) {
        let end = self.range.end;
        let mut i = self.range.start;
        // Sintagma possuidor seguido de "'s", à espera do possuído
        let mut owner: Option<(Chunk, usize)> = None;

        while i < end {
            if self.class(i) == WordClass::Pronoun {
                self.nominals.push(Chunk { start: i, end: i + 1, root: i });
                owner = None;
                i += 1;
                continue;
            }
            if !self.chunk_member(i) {
                owner = None;
                i += 1;
                continue;
            }

            let start = i;
            let mut j = i;
            let mut seen_noun = false;
            while j < end && self.chunk_member(j) {
                let class = self.class(j);
                if seen_noun && matches!(class, WordClass::Determiner | WordClass::Possessive) {
                    break;
                }
                if seen_noun && class == WordClass::Adjective && !self.profile.adjectives_follow_noun {
                    break;
                }
                if matches!(class, WordClass::Noun | WordClass::ProperNoun) {
                    seen_noun = true;
                }
                j += 1;
            }

            let root = (start..j)
                .rev()
                .find(|&k| matches!(self.class(k), WordClass::Noun | WordClass::ProperNoun))
                .or_else(|| (start..j).rev().find(|&k| self.class(k) == WordClass::Number))
                .or_else(|| {
                    (j == start + 1 && self.class(start) == WordClass::Determiner).then_some(start)
                });
            let Some(root) = root else {
                owner = None;
                i = j;
                continue;
            };

            let mut chunk = Chunk { start, end: j, root };
            if let Some((possessor, case)) = owner.take() {
                if case + 1 == start {
                    self.attach(possessor.root, root, "poss");
                    self.attach(case, possessor.root, "case");
                    chunk.start = possessor.start;
                    self.nominals.retain(|c| *c != possessor);
                }
            }
            for k in start..j {
                if k == root {
                    continue;
                }
                let label = match self.class(k) {
                    WordClass::Determiner => "det",
                    WordClass::Possessive => "poss",
                    WordClass::Number => "nummod",
                    WordClass::Noun | WordClass::ProperNoun if k < root => "compound",
                    _ => "amod",
                };
                self.attach(k, root, label);
            }
            self.nominals.push(chunk);

            if j < end && self.pos[j].tag == "POS" {
                owner = Some((chunk, j));
                i = j + 1;
            } else {
                i = j;
            }
        }
    }

    fn group_verbs(&mut self) {
        let end = self.range.end;
        let mut i = self.range.start;

        while i < end {
            if !matches!(self.class(i), WordClass::Verb | WordClass::Auxiliary | WordClass::Modal) {
                i += 1;
                continue;
            }
            let start = i;
            let mut j = i;
            let mut main_verb = None;
            while j < end {
                match self.class(j) {
                    WordClass::Verb if main_verb.is_none() => main_verb = Some(j),
                    WordClass::Auxiliary | WordClass::Modal if main_verb.is_none() => {}
                    WordClass::Negation => {}
                    WordClass::Adverb
                        if main_verb.is_none()
                            && j + 1 < end
                            && matches!(
                                self.class(j + 1),
                                WordClass::Verb
                                    | WordClass::Auxiliary
                                    | WordClass::Modal
                                    | WordClass::Negation
                            ) => {}
                    _ => break,
                }
                j += 1;
            }
            let main = main_verb.unwrap_or_else(|| {
                (start..j)
                    .rev()
                    .find(|&k| matches!(self.class(k), WordClass::Auxiliary | WordClass::Modal))
                    .unwrap_or(start)
            });
            self.groups.push(VerbGroup {
                start,
                contiguous_end: j,
                end: j,
                main,
                members: (start..j).collect(),
                passive: false,
                copula: false,
            });
            i = j;
        }

        if self.profile.morphology == Morphology::German {
            self.close_clause_brackets();
        }

        for g in 0..self.groups.len() {
            let main = self.groups[g].main;
            let passive = self.pos[main].class == WordClass::Verb
                && self.pos[main].tag == "VBN"
                && self.groups[g].members.iter().any(|&k| {
                    self.class(k) == WordClass::Auxiliary
                        && PASSIVE_AUXILIARIES.contains(&self.pos[k].lemma.as_str())
                });
            let copula = self.profile.copulas.contains(&self.pos[main].lemma.as_str());
            self.groups[g].passive = passive;
            self.groups[g].copula = copula;

            let members = self.groups[g].members.clone();
            for k in members {
                let label = match self.class(k) {
                    WordClass::Auxiliary
                        if passive && PASSIVE_AUXILIARIES.contains(&self.pos[k].lemma.as_str()) =>
                    {
                        "auxpass"
                    }
                    WordClass::Auxiliary | WordClass::Modal => "aux",
                    WordClass::Negation => "neg",
                    WordClass::Adverb => "advmod",
                    _ => "dep",
                };
                self.attach(k, main, label);
            }
        }
    }

    /// Satzklammer: "Er hat den Ball gespielt" liga "hat" a "gespielt".
    fn close_clause_brackets(&mut self) {
        let mut g = 0;
        while g + 1 < self.groups.len() {
            let aux_only = self.class(self.groups[g].main) != WordClass::Verb;
            let next = &self.groups[g + 1];
            let next_is_nonfinite = next.members.len() == 1
                && self.class(next.main) == WordClass::Verb
                && matches!(self.pos[next.main].tag, "VB" | "VBN");
            let same_clause = (self.groups[g].end..next.start).all(|k| {
                !matches!(
                    self.class(k),
                    WordClass::Conjunction | WordClass::Subordinator | WordClass::WhWord
                ) && self.pos[k].tag != ","
            });
            if aux_only && next_is_nonfinite && same_clause {
                let next = self.groups.remove(g + 1);
                let group = &mut self.groups[g];
                group.main = next.main;
                group.end = next.end;
                group.members.extend(next.members);
            }
            g += 1;
        }
    }

    fn choose_root(&mut self) {
        let range = self.range.clone();
        self.root = self
            .groups
            .first()
            .map(|g| g.main)
            .or_else(|| self.nominals.first().map(|c| c.root))
            .or_else(|| range.clone().find(|&k| self.class(k) != WordClass::Punctuation))
            .unwrap_or(range.start);
        self.arcs[self.root] = Some((self.root, "ROOT"));
    }

    fn link_clauses(&mut self) {
        for g in 1..self.groups.len() {
            let prev = self.groups[g - 1].main;
            let prev_end = self.groups[g - 1].end;
            let group = self.groups[g].clone();

            if group.start > prev_end && self.class(group.start - 1) == WordClass::Particle {
                self.attach(group.main, prev, "xcomp");
                self.attach(group.start - 1, group.main, "aux");
                continue;
            }

            let coordinator = (prev_end..group.start).find(|&c| {
                self.class(c) == WordClass::Conjunction
                    && (c + 1 == group.start
                        || self
                            .nominals
                            .iter()
                            .any(|n| n.start == c + 1 && n.end == group.start))
            });
            match coordinator {
                Some(c) => {
                    self.attach(group.main, prev, "conj");
                    self.attach(c, prev, "cc");
                }
                None => self.attach(group.main, prev, "ccomp"),
            }
        }
    }

    fn link_prepositions(&mut self) {
        for p in self.range.clone() {
            if self.class(p) != WordClass::Preposition || !self.is_free(p) {
                continue;
            }
            if let Some(object) = self.nominals.iter().find(|n| n.start == p + 1).map(|n| n.root) {
                self.attach(object, p, "pobj");
            }
            let target = self
                .groups
                .iter()
                .rev()
                .find(|g| g.main < p)
                .map(|g| g.main)
                .or_else(|| self.nominals.iter().find(|n| n.end == p).map(|n| n.root))
                .or_else(|| self.groups.iter().find(|g| g.main > p).map(|g| g.main))
                .unwrap_or(self.root);
            self.attach(p, target, "prep");
        }
    }

    fn link_coordination(&mut self) {
        for c in self.range.clone() {
            if self.class(c) != WordClass::Conjunction || !self.is_free(c) {
                continue;
            }
            let right = self.nominals.iter().find(|n| n.start == c + 1).map(|n| n.root);
            let left = self
                .nominals
                .iter()
                .rev()
                .find(|n| {
                    n.end == c || (n.end + 1 == c && self.pos[c - 1].tag == ",")
                })
                .map(|n| n.root);
            if let (Some(left), Some(right)) = (left, right) {
                self.attach(right, left, "conj");
                self.attach(c, left, "cc");
            }
        }
    }

    fn link_arguments(&mut self) {
        // Sujeitos primeiro: em "I know John left", John é sujeito de "left"
        for g in 0..self.groups.len() {
            let group = self.groups[g].clone();
            if self.label(group.main) == Some("xcomp") {
                continue;
            }
            let region_start = if g == 0 { self.range.start } else { self.groups[g - 1].end };
            let subject = self
                .nominals
                .iter()
                .rev()
                .find(|n| n.root >= region_start && n.root < group.start && self.arcs[n.root].is_none())
                .map(|n| n.root);
            if let Some(subject) = subject {
                let label = if group.passive { "nsubjpass" } else { "nsubj" };
                self.attach(subject, group.main, label);
            }
        }

        for g in 0..self.groups.len() {
            let group = self.groups[g].clone();
            let region_end = self.groups.get(g + 1).map(|n| n.start).unwrap_or(self.range.end);
            let objects: Vec<usize> = self
                .nominals
                .iter()
                .filter(|n| n.root >= group.contiguous_end && n.root < region_end)
                .map(|n| n.root)
                .filter(|&root| self.is_free(root))
                .collect();
            for (k, object) in objects.into_iter().enumerate() {
                let label = match (k, group.copula) {
                    (0, true) => "attr",
                    (0, false) => "dobj",
                    _ => "npadvmod",
                };
                self.attach(object, group.main, label);
            }
        }
    }

    fn nearest_verb(&self, i: usize) -> Option<usize> {
        self.groups
            .iter()
            .map(|g| g.main)
            .min_by_key(|&main| main.abs_diff(i))
    }

    fn link_remaining(&mut self) {
        for k in self.range.clone() {
            if !self.is_free(k) {
                continue;
            }
            let next_verb = self.groups.iter().find(|g| g.main > k).map(|g| g.main);
            let prev_group = self.groups.iter().rev().find(|g| g.main < k);
            let (head, label) = match self.class(k) {
                WordClass::Punctuation => (self.root, "punct"),
                WordClass::Negation => (self.nearest_verb(k).unwrap_or(self.root), "neg"),
                WordClass::Adverb => (self.nearest_verb(k).unwrap_or(self.root), "advmod"),
                WordClass::Adjective => match prev_group {
                    Some(g) => (g.main, "acomp"),
                    None => match self.nominals.iter().find(|n| n.root > k) {
                        Some(n) => (n.root, "amod"),
                        None => (self.root, "dep"),
                    },
                },
                WordClass::Particle => (next_verb.unwrap_or(self.root), "aux"),
                WordClass::Subordinator | WordClass::WhWord => (next_verb.unwrap_or(self.root), "mark"),
                WordClass::Conjunction => (self.nearest_verb(k).unwrap_or(self.root), "cc"),
                WordClass::Noun
                | WordClass::ProperNoun
                | WordClass::Pronoun
                | WordClass::Number
                | WordClass::Determiner => match self.nearest_verb(k) {
                    Some(verb) => (verb, "npadvmod"),
                    None => (self.root, "dep"),
                },
                _ => (self.root, "dep"),
            };
            if head == k {
                self.attach(k, self.root, "dep");
            } else {
                self.attach(k, head, label);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{ENGLISH, GERMAN};
    use crate::pos::tag_tokens;
    use crate::tokenizer::{split_sentences, tokenize};

    fn analyze(profile: &LanguageProfile, text: &str) -> (Vec<String>, Parse, Vec<Range<usize>>) {
        let tokens = tokenize(text, profile.abbreviations);
        let sentences = split_sentences(&tokens);
        let pos = tag_tokens(profile, &tokens, &sentences);
        let parse = parse(profile, &pos, &sentences);
        (tokens.into_iter().map(|t| t.text).collect(), parse, sentences)
    }

    fn arc(parse: &Parse, i: usize) -> (usize, &'static str) {
        (parse.heads[i], parse.deps[i])
    }

    #[test]
    fn test_simple_sentence() {
        let (_, parse, _) = analyze(&ENGLISH, "The quick fox jumps.");
        assert_eq!(arc(&parse, 0), (2, "det"));
        assert_eq!(arc(&parse, 1), (2, "amod"));
        assert_eq!(arc(&parse, 2), (3, "nsubj"));
        assert_eq!(arc(&parse, 3), (3, "ROOT"));
        assert_eq!(arc(&parse, 4), (3, "punct"));
        assert_eq!(parse.noun_chunks, vec![Chunk { start: 0, end: 3, root: 2 }]);
    }

    #[test]
    fn test_object_and_prepositional_phrase() {
        let (_, parse, _) = analyze(&ENGLISH, "Apple acquired Beats in 2014.");
        assert_eq!(arc(&parse, 0), (1, "nsubj"));
        assert_eq!(arc(&parse, 1), (1, "ROOT"));
        assert_eq!(arc(&parse, 2), (1, "dobj"));
        assert_eq!(arc(&parse, 3), (1, "prep"));
        assert_eq!(arc(&parse, 4), (3, "pobj"));
    }

    #[test]
    fn test_passive_voice() {
        let (_, parse, _) = analyze(&ENGLISH, "The house was built by John.");
        assert_eq!(arc(&parse, 1), (3, "nsubjpass"));
        assert_eq!(arc(&parse, 2), (3, "auxpass"));
        assert_eq!(arc(&parse, 3), (3, "ROOT"));
        assert_eq!(arc(&parse, 5), (4, "pobj"));
    }

    #[test]
    fn test_possessive_and_negation() {
        let (tokens, parse, _) = analyze(&ENGLISH, "John's dog doesn't bark.");
        assert_eq!(tokens, vec!["John", "'s", "dog", "does", "n't", "bark", "."]);
        assert_eq!(arc(&parse, 0), (2, "poss"));
        assert_eq!(arc(&parse, 1), (0, "case"));
        assert_eq!(arc(&parse, 2), (5, "nsubj"));
        assert_eq!(arc(&parse, 3), (5, "aux"));
        assert_eq!(arc(&parse, 4), (5, "neg"));
        assert_eq!(parse.noun_chunks, vec![Chunk { start: 0, end: 3, root: 2 }]);
    }

    #[test]
    fn test_copula_takes_attribute() {
        let (_, parse, _) = analyze(&ENGLISH, "Paris is a city.");
        assert_eq!(arc(&parse, 0), (1, "nsubj"));
        assert_eq!(arc(&parse, 1), (1, "ROOT"));
        assert_eq!(arc(&parse, 3), (1, "attr"));
    }

    #[test]
    fn test_german_clause_bracket() {
        let (_, parse, _) = analyze(&GERMAN, "Er hat den Ball gespielt.");
        assert_eq!(arc(&parse, 4), (4, "ROOT"));
        assert_eq!(arc(&parse, 1), (4, "aux"));
        assert_eq!(arc(&parse, 0), (4, "nsubj"));
        assert_eq!(arc(&parse, 3), (4, "dobj"));
    }

    #[test]
    fn test_one_root_per_sentence_and_no_cycles() {
        let text = "John and Mary went to Paris, but they didn't like it. \
                    She wants to eat apples and oranges! The old man in the car is not happy";
        let (_, parse, sentences) = analyze(&ENGLISH, text);
        assert_eq!(sentences.len(), 3);

        for sentence in &sentences {
            let roots: Vec<usize> = sentence.clone().filter(|&i| parse.heads[i] == i).collect();
            assert_eq!(roots.len(), 1, "sentença {:?}", sentence);
            assert_eq!(parse.deps[roots[0]], "ROOT");

            for i in sentence.clone() {
                assert!(sentence.contains(&parse.heads[i]));
                assert!(DEP_LABELS.contains(&parse.deps[i]), "{}", parse.deps[i]);
                // Subindo pelos núcleos chega-se à raiz
                let mut current = i;
                for _ in 0..=sentence.len() {
                    current = parse.heads[current];
                }
                assert_eq!(current, roots[0]);
            }
        }
    }

    #[test]
    fn test_labels_are_sorted() {
        let mut sorted = DEP_LABELS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, DEP_LABELS);
    }
}
