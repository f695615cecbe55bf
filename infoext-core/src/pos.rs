//! # Etiquetador Morfossintático (POS) e Lematizador
//!
//! Atribui a cada token uma classe gramatical ([`WordClass`]), uma tag fina no
//! estilo Penn Treebank (`NN`, `VBZ`, `DT`...) e um lema.
//!
//! ## Estratégia
//!
//! 1. **Pontuação, símbolos e números** são reconhecidos pela forma.
//! 2. **Classes fechadas** (artigos, pronomes, preposições, auxiliares...) vêm
//!    direto do [`LanguageProfile`].
//! 3. **Maiúsculas** fora do início da sentença indicam nome próprio (ou
//!    substantivo comum, em alemão).
//! 4. **Classes abertas** são decididas por sufixo e pelo contexto à esquerda:
//!    "jumps" depois de um substantivo, numa oração ainda sem verbo, é `VBZ`;
//!    depois de um artigo, seria `NNS`.
//!
//! O resultado não tem pretensão de qualidade; o objetivo é ser estável.

use serde::{Deserialize, Serialize};

use crate::lexicon::{LanguageProfile, Morphology};
use crate::tokenizer::{is_punct, Token};

/// Classe gramatical grossa, usada pelo analisador de dependências.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    Determiner,
    Possessive,
    Pronoun,
    WhWord,
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Auxiliary,
    Modal,
    Negation,
    Adverb,
    Preposition,
    /// Marcador de infinitivo ("to").
    Particle,
    Conjunction,
    Subordinator,
    Number,
    Punctuation,
    Symbol,
}

impl WordClass {
    /// Pode ser núcleo de um sintagma nominal.
    pub fn is_nominal(self) -> bool {
        matches!(self, WordClass::Noun | WordClass::ProperNoun | WordClass::Pronoun | WordClass::Number)
    }

    /// Verbo pleno ou auxiliar/modal.
    pub fn is_verbal(self) -> bool {
        matches!(self, WordClass::Verb | WordClass::Auxiliary | WordClass::Modal)
    }
}

/// Resultado do etiquetador para um token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosTag {
    pub class: WordClass,
    /// Tag fina (ex: "NNP", "VBD", ",").
    pub tag: &'static str,
    pub lemma: String,
}

impl PosTag {
    fn new(class: WordClass, tag: &'static str, lemma: impl Into<String>) -> Self {
        Self { class, tag, lemma: lemma.into() }
    }
}

/// Todas as tags finas que o etiquetador pode emitir, em ordem alfabética.
pub const ALL_TAGS: &[&str] = &[
    "$", "''", ",", "-LRB-", "-RRB-", ".", ":", "CC", "CD", "DT", "HYPH", "IN", "JJ", "MD",
    "NN", "NNP", "NNS", "POS", "PRP", "PRP$", "RB", "SYM", "TO", "VB", "VBD", "VBG", "VBN", "VBP",
    "VBZ", "WDT", "WP", "WP$", "WRB", "``",
];

/// Etiqueta todos os tokens de um documento, sentença por sentença.
pub fn tag_tokens(
    profile: &LanguageProfile,
    tokens: &[Token],
    sentences: &[std::ops::Range<usize>],
) -> Vec<PosTag> {
    let mut tags = Vec::with_capacity(tokens.len());
    for sentence in sentences {
        tags.extend(tag_sentence(profile, &tokens[sentence.clone()]));
    }
    tags
}

/// Etiqueta uma sentença isolada.
pub fn tag_sentence(profile: &LanguageProfile, tokens: &[Token]) -> Vec<PosTag> {
    let mut out: Vec<PosTag> = Vec::with_capacity(tokens.len());
    let mut clause_has_verb = false;

    for i in 0..tokens.len() {
        let sentence_initial = out.iter().all(|t| t.class == WordClass::Punctuation);
        let ctx = Context {
            prev: out.last(),
            prev_skipping_adverbs: out
                .iter()
                .rev()
                .find(|t| !matches!(t.class, WordClass::Negation | WordClass::Adverb)),
            next: tokens.get(i + 1).map(|t| t.text.as_str()),
            sentence_initial,
            clause_has_verb,
        };
        let tag = classify(profile, &tokens[i].text, &ctx);

        match tag.class {
            WordClass::Verb | WordClass::Auxiliary | WordClass::Modal => clause_has_verb = true,
            WordClass::Conjunction | WordClass::Subordinator | WordClass::WhWord => clause_has_verb = false,
            _ => {}
        }
        out.push(tag);
    }
    out
}

struct Context<'a> {
    prev: Option<&'a PosTag>,
    /// Último token anterior que não é advérbio nem negação ("does not go").
    prev_skipping_adverbs: Option<&'a PosTag>,
    next: Option<&'a str>,
    sentence_initial: bool,
    clause_has_verb: bool,
}

impl Context<'_> {
    fn prev_is(&self, classes: &[WordClass]) -> bool {
        self.prev.map(|p| classes.contains(&p.class)).unwrap_or(false)
    }

    /// Logo depois de artigo, possessivo, adjetivo ou numeral: posição nominal.
    fn after_determiner(&self) -> bool {
        self.prev_is(&[
            WordClass::Determiner,
            WordClass::Possessive,
            WordClass::Adjective,
            WordClass::Number,
        ])
    }

    /// Depois de "to", modal ou do-support: posição de infinitivo.
    fn expects_infinitive(&self) -> bool {
        self.prev_skipping_adverbs
            .map(|p| {
                matches!(p.class, WordClass::Particle | WordClass::Modal)
                    || (p.class == WordClass::Auxiliary && p.lemma == "do")
            })
            .unwrap_or(false)
    }

    fn after_auxiliary(&self) -> bool {
        self.prev_skipping_adverbs
            .map(|p| p.class == WordClass::Auxiliary)
            .unwrap_or(false)
    }

    fn next_is_capitalized(&self) -> bool {
        self.next.map(starts_uppercase).unwrap_or(false)
    }
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().map(char::is_uppercase).unwrap_or(false)
}

fn is_all_caps(text: &str) -> bool {
    text.chars().filter(|c| c.is_alphabetic()).count() >= 2
        && text.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

fn classify(profile: &LanguageProfile, text: &str, ctx: &Context) -> PosTag {
    if is_punct(text) {
        return PosTag::new(WordClass::Punctuation, punct_tag(text), text);
    }
    if !text.chars().any(char::is_alphanumeric) {
        let tag = if text.chars().any(|c| matches!(c, '$' | '€' | '£' | '¥')) { "$" } else { "SYM" };
        return PosTag::new(WordClass::Symbol, tag, text);
    }
    if text.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
        return PosTag::new(WordClass::Number, "CD", text);
    }

    let lower = text.to_lowercase();
    if let Some(tag) = closed_class(profile, &lower, ctx) {
        return tag;
    }

    if starts_uppercase(text) {
        let known_name = is_known_name(profile, &lower);
        if is_all_caps(text) || known_name {
            return PosTag::new(WordClass::ProperNoun, "NNP", text);
        }
        if profile.capitalized_nouns {
            return PosTag::new(WordClass::Noun, "NN", text);
        }
        if !ctx.sentence_initial || ctx.next_is_capitalized() {
            return PosTag::new(WordClass::ProperNoun, "NNP", text);
        }
    }

    match profile.morphology {
        Morphology::English => guess_english(profile, &lower, ctx),
        Morphology::German => guess_german(profile, &lower, ctx),
        Morphology::Portuguese => guess_portuguese(profile, &lower, ctx),
    }
}

/// Palavra (em minúsculas) aparece nos gazetteers ou na lista de prenomes.
fn is_known_name(profile: &LanguageProfile, lower: &str) -> bool {
    profile.given_names.contains(&lower)
        || [profile.persons, profile.locations, profile.organizations]
            .iter()
            .any(|list| list.iter().any(|entry| entry.split(' ').next() == Some(lower)))
}

fn punct_tag(text: &str) -> &'static str {
    if text.chars().all(|c| matches!(c, '.' | '!' | '?' | '…')) {
        return ".";
    }
    match text {
        "," => ",",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "-" => "HYPH",
        "\"" | "'" | "”" | "’" | "»" => "''",
        "“" | "‘" | "«" | "„" | "‚" => "``",
        _ => ":",
    }
}

fn closed_class(profile: &LanguageProfile, lower: &str, ctx: &Context) -> Option<PosTag> {
    let next_lower = ctx.next.map(str::to_lowercase);
    let next_is_nominal = ctx
        .next
        .map(|n| !is_punct(n) && !profile.is_stop_word(&n.to_lowercase()))
        .unwrap_or(false);

    if lower == "'s" || lower == "\u{2019}s" {
        let next_is_predicate = next_lower
            .as_deref()
            .map(|n| {
                profile.determiners.contains(&n)
                    || profile.adverbs.contains(&n)
                    || profile.negations.contains(&n)
                    || profile.adjectives.contains(&n)
                    || n.ends_with("ing")
            })
            .unwrap_or(false);
        return Some(if next_is_predicate {
            PosTag::new(WordClass::Auxiliary, "VBZ", "be")
        } else {
            PosTag::new(WordClass::Possessive, "POS", "'s")
        });
    }
    if profile.possessives.contains(&lower) && (!profile.pronouns.contains(&lower) || next_is_nominal) {
        return Some(PosTag::new(WordClass::Possessive, "PRP$", lower));
    }
    if profile.determiners.contains(&lower) {
        return Some(PosTag::new(WordClass::Determiner, "DT", lower));
    }
    if profile.pronouns.contains(&lower) {
        return Some(PosTag::new(WordClass::Pronoun, "PRP", lower));
    }
    if let Some((_, tag)) = profile.wh_words.iter().find(|(w, _)| *w == lower) {
        return Some(PosTag::new(WordClass::WhWord, *tag, lower));
    }
    if profile.infinitive_markers.contains(&lower) {
        let before_verb = next_lower
            .as_deref()
            .map(|n| {
                profile.verbs.contains(&n)
                    || profile.auxiliaries.iter().any(|(w, _, _)| *w == n)
                    || (!profile.is_stop_word(n) && !ctx.next.map(starts_uppercase).unwrap_or(true)
                        && !n.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(true)
                        && profile.morphology != Morphology::English)
            })
            .unwrap_or(false);
        return Some(if before_verb {
            PosTag::new(WordClass::Particle, "TO", lower)
        } else {
            PosTag::new(WordClass::Preposition, "IN", lower)
        });
    }
    if profile.modals.contains(&lower) {
        return Some(PosTag::new(WordClass::Modal, "MD", lower));
    }
    if let Some((_, lemma, tag)) = profile.auxiliaries.iter().find(|(w, _, _)| *w == lower) {
        return Some(PosTag::new(WordClass::Auxiliary, *tag, *lemma));
    }
    if profile.negations.contains(&lower) {
        let lemma = if lower == "n't" { "not" } else { lower };
        return Some(PosTag::new(WordClass::Negation, "RB", lemma));
    }
    if profile.prepositions.contains(&lower) {
        return Some(PosTag::new(WordClass::Preposition, "IN", lower));
    }
    if profile.conjunctions.contains(&lower) {
        return Some(PosTag::new(WordClass::Conjunction, "CC", lower));
    }
    if profile.subordinators.contains(&lower) {
        return Some(PosTag::new(WordClass::Subordinator, "IN", lower));
    }
    if profile.adverbs.contains(&lower) {
        return Some(PosTag::new(WordClass::Adverb, "RB", lower));
    }
    if profile.number_words.contains(&lower) {
        return Some(PosTag::new(WordClass::Number, "CD", lower));
    }
    if let Some((_, lemma, tag)) = profile.irregular_verbs.iter().find(|(w, _, _)| *w == lower) {
        let tag = if *tag == "VBD" && ctx.after_auxiliary() { "VBN" } else { *tag };
        return Some(PosTag::new(WordClass::Verb, tag, *lemma));
    }
    if profile.adjectives.contains(&lower) {
        return Some(PosTag::new(WordClass::Adjective, "JJ", lower));
    }
    None
}

/// Flexão reconhecida de um verbo conhecido.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inflection {
    Base,
    ThirdSingular,
    Past,
    Gerund,
}

fn english_inflection(profile: &LanguageProfile, lower: &str) -> Option<(String, Inflection)> {
    let known = |stem: &str| profile.verbs.contains(&stem);

    if known(lower) {
        return Some((lower.to_string(), Inflection::Base));
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        let base = format!("{stem}y");
        if known(&base) {
            return Some((base, Inflection::ThirdSingular));
        }
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if known(stem) {
            return Some((stem.to_string(), Inflection::ThirdSingular));
        }
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if known(stem) {
            return Some((stem.to_string(), Inflection::ThirdSingular));
        }
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        let base = format!("{stem}y");
        if known(&base) {
            return Some((base, Inflection::Past));
        }
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        if let Some(base) = english_stem_candidates(stem).into_iter().find(|s| known(s)) {
            return Some((base, Inflection::Past));
        }
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        if let Some(base) = english_stem_candidates(stem).into_iter().find(|s| known(s)) {
            return Some((base, Inflection::Gerund));
        }
    }
    None
}

/// "lov" → "lov", "love"; "stopp" → "stopp", "stope", "stop".
fn english_stem_candidates(stem: &str) -> Vec<String> {
    let mut candidates = vec![stem.to_string(), format!("{stem}e")];
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
        candidates.push(chars[..chars.len() - 1].iter().collect());
    }
    candidates
}

fn singularize_english(lower: &str) -> String {
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    lower.strip_suffix('s').unwrap_or(lower).to_string()
}

const ENGLISH_ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "ary", "ic", "est",
];

fn guess_english(profile: &LanguageProfile, lower: &str, ctx: &Context) -> PosTag {
    if let Some((lemma, inflection)) = english_inflection(profile, lower) {
        return match inflection {
            Inflection::Base => {
                if ctx.expects_infinitive() {
                    PosTag::new(WordClass::Verb, "VB", lemma)
                } else if ctx.after_determiner() {
                    PosTag::new(WordClass::Noun, "NN", lemma)
                } else if !ctx.clause_has_verb
                    && ctx.prev_is(&[
                        WordClass::Pronoun,
                        WordClass::Noun,
                        WordClass::ProperNoun,
                        WordClass::WhWord,
                        WordClass::Adverb,
                    ])
                {
                    PosTag::new(WordClass::Verb, "VBP", lemma)
                } else if ctx.sentence_initial {
                    PosTag::new(WordClass::Verb, "VB", lemma)
                } else {
                    PosTag::new(WordClass::Noun, "NN", lemma)
                }
            }
            Inflection::ThirdSingular => {
                if ctx.after_determiner() || ctx.clause_has_verb {
                    PosTag::new(WordClass::Noun, "NNS", lemma)
                } else {
                    PosTag::new(WordClass::Verb, "VBZ", lemma)
                }
            }
            Inflection::Past => past_participle_or_past(lemma, ctx),
            Inflection::Gerund => {
                if ctx.after_determiner() {
                    PosTag::new(WordClass::Noun, "NN", lower)
                } else {
                    PosTag::new(WordClass::Verb, "VBG", lemma)
                }
            }
        };
    }

    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        return PosTag::new(WordClass::Adverb, "RB", lower);
    }
    if len > 5 && lower.ends_with("ing") {
        if ctx.after_determiner() {
            return PosTag::new(WordClass::Noun, "NN", lower);
        }
        return PosTag::new(WordClass::Verb, "VBG", &lower[..lower.len() - 3]);
    }
    if len > 4 && lower.ends_with("ed") {
        return past_participle_or_past(lower[..lower.len() - 2].to_string(), ctx);
    }
    if len > 4 && ENGLISH_ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::new(WordClass::Adjective, "JJ", lower);
    }
    if ctx.expects_infinitive() {
        return PosTag::new(WordClass::Verb, "VB", lower);
    }
    if len > 3 && lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s)) {
        if !ctx.clause_has_verb
            && ctx.prev_is(&[WordClass::Noun, WordClass::ProperNoun, WordClass::Pronoun])
        {
            return PosTag::new(WordClass::Verb, "VBZ", &lower[..lower.len() - 1]);
        }
        return PosTag::new(WordClass::Noun, "NNS", singularize_english(lower));
    }
    PosTag::new(WordClass::Noun, "NN", lower)
}

fn past_participle_or_past(lemma: String, ctx: &Context) -> PosTag {
    if ctx.after_determiner() {
        PosTag::new(WordClass::Adjective, "JJ", lemma)
    } else if ctx.after_auxiliary() || ctx.clause_has_verb {
        PosTag::new(WordClass::Verb, "VBN", lemma)
    } else {
        PosTag::new(WordClass::Verb, "VBD", lemma)
    }
}

fn guess_german(profile: &LanguageProfile, lower: &str, ctx: &Context) -> PosTag {
    let to_infinitive = |stem: &str| format!("{}en", stem.trim_end_matches('e'));

    if profile.verbs.contains(&lower) {
        let tag = if ctx.expects_infinitive() || ctx.clause_has_verb { "VB" } else { "VBP" };
        return PosTag::new(WordClass::Verb, tag, lower);
    }
    // Minúscula antes de substantivo (sempre com maiúscula): adjetivo atributivo
    if ctx.next_is_capitalized() {
        return PosTag::new(WordClass::Adjective, "JJ", lower);
    }
    if ["lich", "ig", "isch", "bar", "sam", "los"].iter().any(|s| lower.ends_with(s)) {
        return PosTag::new(WordClass::Adjective, "JJ", lower);
    }
    if lower.starts_with("ge") && lower.chars().count() > 5 && (lower.ends_with('t') || lower.ends_with("en")) {
        if ctx.clause_has_verb {
            let stem = lower.trim_start_matches("ge");
            let stem = stem.strip_suffix('t').unwrap_or(stem);
            return PosTag::new(WordClass::Verb, "VBN", to_infinitive(stem));
        }
    }
    if ctx.expects_infinitive() && lower.ends_with("en") {
        return PosTag::new(WordClass::Verb, "VB", lower);
    }
    if let Some(stem) = lower.strip_suffix("ten").or_else(|| lower.strip_suffix("te")) {
        if !ctx.clause_has_verb {
            return PosTag::new(WordClass::Verb, "VBD", to_infinitive(stem));
        }
    }
    if let Some(stem) = lower.strip_suffix('t') {
        if !ctx.clause_has_verb {
            return PosTag::new(WordClass::Verb, "VBZ", to_infinitive(stem));
        }
    }
    if lower.ends_with("en") {
        let tag = if ctx.clause_has_verb { "VB" } else { "VBP" };
        return PosTag::new(WordClass::Verb, tag, lower);
    }
    if ctx.after_determiner() {
        return PosTag::new(WordClass::Adjective, "JJ", lower);
    }
    PosTag::new(WordClass::Adverb, "RB", lower)
}

fn guess_portuguese(profile: &LanguageProfile, lower: &str, ctx: &Context) -> PosTag {
    let known = |stem: &str| profile.verbs.contains(&stem);

    if lower.chars().count() > 6 && lower.ends_with("mente") {
        return PosTag::new(WordClass::Adverb, "RB", lower);
    }
    if known(lower) {
        return PosTag::new(WordClass::Verb, "VB", lower);
    }
    for (suffix, infinitive) in [("ando", "ar"), ("endo", "er"), ("indo", "ir")] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            return PosTag::new(WordClass::Verb, "VBG", format!("{stem}{infinitive}"));
        }
    }
    for (suffix, infinitive) in [
        ("ados", "ar"), ("adas", "ar"), ("ado", "ar"), ("ada", "ar"),
        ("idos", "er"), ("idas", "er"), ("ido", "er"), ("ida", "er"),
    ] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if stem.chars().count() < 2 {
                continue;
            }
            if ctx.after_auxiliary() {
                return PosTag::new(WordClass::Verb, "VBN", format!("{stem}{infinitive}"));
            }
            return PosTag::new(WordClass::Adjective, "JJ", lower);
        }
    }
    if !ctx.clause_has_verb {
        for (suffix, infinitive, tag) in [
            ("aram", "ar", "VBD"), ("eram", "er", "VBD"), ("iram", "ir", "VBD"),
            ("ou", "ar", "VBD"), ("eu", "er", "VBD"), ("iu", "ir", "VBD"),
        ] {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.chars().count() >= 2 {
                    return PosTag::new(WordClass::Verb, tag, format!("{stem}{infinitive}"));
                }
            }
        }
        for (suffix, tag) in [("am", "VBP"), ("em", "VBP"), ("a", "VBZ"), ("e", "VBZ")] {
            if let Some(stem) = lower.strip_suffix(suffix) {
                let vowel = if suffix.starts_with('a') { "ar" } else { "er" };
                let candidate = format!("{stem}{vowel}");
                if known(&candidate) || known(&format!("{stem}ir")) {
                    let lemma = if known(&candidate) { candidate } else { format!("{stem}ir") };
                    return PosTag::new(WordClass::Verb, tag, lemma);
                }
            }
        }
    }
    if ctx.expects_infinitive() && ["ar", "er", "ir"].iter().any(|s| lower.ends_with(s)) {
        return PosTag::new(WordClass::Verb, "VB", lower);
    }
    if ["oso", "osa", "vel", "ico", "ica", "al", "ivo", "iva", "ense"]
        .iter()
        .any(|s| lower.ends_with(s))
    {
        return PosTag::new(WordClass::Adjective, "JJ", lower);
    }
    if lower.chars().count() > 3 && lower.ends_with('s') {
        return PosTag::new(WordClass::Noun, "NNS", lower.strip_suffix('s').unwrap_or(lower));
    }
    PosTag::new(WordClass::Noun, "NN", lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{ENGLISH, GERMAN, PORTUGUESE};
    use crate::tokenizer::tokenize;

    fn tags(profile: &LanguageProfile, text: &str) -> Vec<&'static str> {
        let tokens = tokenize(text, profile.abbreviations);
        tag_sentence(profile, &tokens).iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_simple_english_sentence() {
        assert_eq!(tags(&ENGLISH, "The quick fox jumps."), vec!["DT", "JJ", "NN", "VBZ", "."]);
    }

    #[test]
    fn test_plural_after_determiner_is_noun() {
        let out = tags(&ENGLISH, "She likes the jumps");
        assert_eq!(out, vec!["PRP", "VBZ", "DT", "NNS"]);
    }

    #[test]
    fn test_proper_nouns_and_past_tense() {
        let tokens = tokenize("Apple acquired Beats in 2014.", ENGLISH.abbreviations);
        let out = tag_sentence(&ENGLISH, &tokens);
        assert_eq!(out[0].tag, "NNP");
        assert_eq!(out[1].tag, "VBD");
        assert_eq!(out[1].lemma, "acquire");
        assert_eq!(out[2].tag, "NNP");
        assert_eq!(out[3].tag, "IN");
        assert_eq!(out[4].tag, "CD");
    }

    #[test]
    fn test_auxiliary_and_participle() {
        let tokens = tokenize("The house was built by John", ENGLISH.abbreviations);
        let out = tag_sentence(&ENGLISH, &tokens);
        assert_eq!(out[2].class, WordClass::Auxiliary);
        assert_eq!(out[3].tag, "VBN");
        assert_eq!(out[3].lemma, "build");
    }

    #[test]
    fn test_infinitive_marker() {
        let out = tags(&ENGLISH, "They want to buy it");
        assert_eq!(out[2], "TO");
        assert_eq!(out[3], "VB");
        let out = tags(&ENGLISH, "They went to Paris");
        assert_eq!(out[2], "IN");
    }

    #[test]
    fn test_german_nouns_are_common_nouns() {
        let tokens = tokenize("Der schnelle Fuchs springt.", GERMAN.abbreviations);
        let out = tag_sentence(&GERMAN, &tokens);
        assert_eq!(out[0].tag, "DT");
        assert_eq!(out[1].tag, "JJ");
        assert_eq!(out[2].tag, "NN");
        assert_eq!(out[3].class, WordClass::Verb);
    }

    #[test]
    fn test_portuguese_past_tense() {
        let tokens = tokenize("A Petrobras anunciou lucros.", PORTUGUESE.abbreviations);
        let out = tag_sentence(&PORTUGUESE, &tokens);
        assert_eq!(out[1].tag, "NNP");
        assert_eq!(out[2].tag, "VBD");
        assert_eq!(out[2].lemma, "anunciar");
        assert_eq!(out[3].tag, "NNS");
    }

    #[test]
    fn test_every_emitted_tag_is_declared() {
        for text in ["The quick fox jumps.", "Did he say \"no\"? (Yes) - $5 & more…"] {
            for tag in tags(&ENGLISH, text) {
                assert!(ALL_TAGS.contains(&tag), "{tag}");
            }
        }
    }
}
