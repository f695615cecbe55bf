//! # Motor de Regras: Gazetteers e Padrões
//!
//! O reconhecimento de entidades do motor embutido é inteiramente baseado em
//! conhecimento explícito, montado a partir do [`LanguageProfile`] do idioma:
//!
//! 1. **Gazetteers** (n-gramas, o mais longo vence): pessoas, locais,
//!    organizações e miscelânea.
//! 2. **Datas**: "May 5, 2014", "5 de maio de 2014", "März 2020", "1999".
//! 3. **Títulos**: "Presidente X", "Mr. X" → X é PER.
//! 4. **Prenomes**: "John Smith" → PER quando o primeiro nome é conhecido.
//! 5. **Sufixos de organização**: "Acme Corp.", "Foo GmbH" → ORG.
//! 6. **Sequências de nomes próprios** não cobertas acima → MISC.
//!
//! Cada regra só marca tokens ainda livres, então a ordem acima é também a
//! ordem de prioridade.

use once_cell::sync::Lazy;
use regex::Regex;
use crate::lexicon::LanguageProfile;
use crate::pos::{PosTag, WordClass};
use crate::tagger::{tokens_to_spans, EntityCategory, EntitySpan, Tag, TaggedToken};
use crate::tokenizer::{tokenize, Token};

/// Dia do mês: "5", "05", "21st", "1º"
static DAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0?[1-9]|[12][0-9]|3[01])(st|nd|rd|th|º)?$").expect("padrão de dia"));

/// Ano plausível: "1999", "2014", "1990s"
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(1[5-9][0-9]{2}|20[0-9]{2})s?$").expect("padrão de ano"));

/// Entrada de gazetteer já tokenizada (minúsculas)
#[derive(Debug, Clone)]
struct GazetteerEntry {
    parts: Vec<String>,
    category: EntityCategory,
}

/// Motor de regras com gazetteers e padrões
#[derive(Debug, Clone)]
pub struct RuleEngine {
    /// Ordenado do n-grama mais longo para o mais curto
    gazetteer: Vec<GazetteerEntry>,
    abbreviations: Vec<&'static str>,
    /// Títulos que precedem nomes de pessoas
    person_titles: Vec<String>,
    /// Palavras que fecham um nome de organização
    org_suffixes: Vec<String>,
    given_names: Vec<String>,
    months: Vec<String>,
}

impl RuleEngine {
    /// Motor sem nenhum gazetteer; só os padrões de data numéricos.
    pub fn new() -> Self {
        Self {
            gazetteer: Vec::new(),
            abbreviations: Vec::new(),
            person_titles: Vec::new(),
            org_suffixes: Vec::new(),
            given_names: Vec::new(),
            months: Vec::new(),
        }
    }

    /// Monta o motor a partir das listas de um perfil de idioma.
    pub fn for_profile(profile: &LanguageProfile) -> Self {
        let mut engine = Self::new();
        engine.abbreviations = profile.abbreviations.to_vec();
        engine.person_titles = profile.person_titles.iter().map(|s| s.to_string()).collect();
        engine.org_suffixes = profile.org_suffixes.iter().map(|s| s.to_string()).collect();
        engine.given_names = profile.given_names.iter().map(|s| s.to_string()).collect();
        engine.months = profile.months.iter().map(|s| s.to_string()).collect();

        for name in profile.persons {
            engine.add_person(name);
        }
        for name in profile.locations {
            engine.add_location(name);
        }
        for name in profile.organizations {
            engine.add_org(name);
        }
        for name in profile.misc {
            engine.add_misc(name);
        }
        engine
    }

    pub fn add_person(&mut self, name: &str) {
        self.add_entry(name, EntityCategory::Per);
    }

    pub fn add_location(&mut self, name: &str) {
        self.add_entry(name, EntityCategory::Loc);
    }

    pub fn add_org(&mut self, name: &str) {
        self.add_entry(name, EntityCategory::Org);
    }

    pub fn add_misc(&mut self, name: &str) {
        self.add_entry(name, EntityCategory::Misc);
    }

    fn add_entry(&mut self, name: &str, category: EntityCategory) {
        // Tokenizado com o mesmo tokenizador do texto, para casar "covid-19" ou "s.a."
        let parts: Vec<String> = tokenize(name, &self.abbreviations)
            .into_iter()
            .map(|t| t.text.to_lowercase())
            .collect();
        if parts.is_empty() {
            return;
        }
        let pos = self
            .gazetteer
            .iter()
            .position(|e| e.parts.len() < parts.len())
            .unwrap_or(self.gazetteer.len());
        self.gazetteer.insert(pos, GazetteerEntry { parts, category });
    }

    /// Aplica todas as regras à sequência de tokens
    ///
    /// `pos` deve ter o mesmo comprimento de `tokens`. Retorna a tag BIO de
    /// cada token; tokens que nenhuma regra marcou ficam com `O`.
    pub fn apply(&self, tokens: &[Token], pos: &[PosTag]) -> Vec<Tag> {
        let mut result: Vec<Tag> = vec![Tag::Outside; tokens.len()];
        let lower: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();

        // 1. Gazetteers (n-gramas, o mais longo primeiro)
        let mut i = 0;
        while i < tokens.len() {
            let hit = self.gazetteer.iter().find(|entry| {
                i + entry.parts.len() <= tokens.len()
                    && starts_uppercase(&tokens[i].text)
                    && entry.parts.iter().enumerate().all(|(j, part)| lower[i + j] == *part)
            });
            match hit {
                Some(entry) => {
                    let end = i + entry.parts.len();
                    mark(&mut result, i..end, entry.category);
                    i = end;
                }
                None => i += 1,
            }
        }

        // 2. Datas
        let mut i = 0;
        while i < tokens.len() {
            match self.date_span(tokens, pos, i) {
                Some(end) if is_free(&result, i..end) => {
                    mark(&mut result, i..end, EntityCategory::Date);
                    i = end;
                }
                _ => i += 1,
            }
        }

        // 3. Regra de título: "Presidente X" → X é PER
        for i in 0..tokens.len().saturating_sub(1) {
            if !self.person_titles.contains(&lower[i]) {
                continue;
            }
            let end = name_run_end(tokens, pos, &result, i + 1);
            if end > i + 1 {
                mark(&mut result, i + 1..end, EntityCategory::Per);
            }
        }

        // 4. Prenome conhecido seguido de sobrenome: "John Smith"
        for i in 0..tokens.len() {
            if result[i] != Tag::Outside
                || !starts_uppercase(&tokens[i].text)
                || !self.given_names.contains(&lower[i])
            {
                continue;
            }
            let end = name_run_end(tokens, pos, &result, i + 1);
            if end > i + 1 {
                mark(&mut result, i..end, EntityCategory::Per);
            }
        }

        // 5. Indicadores de organização: "X S.A.", "X GmbH" → ORG
        for i in 1..tokens.len() {
            if result[i] != Tag::Outside || !self.org_suffixes.contains(&lower[i]) {
                continue;
            }
            let suffix = tokens[i].text.as_str();
            if !(starts_uppercase(suffix) || suffix.contains('.') || suffix.contains('/')) {
                continue;
            }
            let mut start = i;
            while start > 0
                && result[start - 1] == Tag::Outside
                && starts_uppercase(&tokens[start - 1].text)
                && matches!(pos[start - 1].class, WordClass::ProperNoun | WordClass::Noun)
            {
                start -= 1;
            }
            if start < i {
                mark(&mut result, start..i + 1, EntityCategory::Org);
            }
        }

        // 6. Demais sequências de nomes próprios
        let mut i = 0;
        while i < tokens.len() {
            if self.person_titles.contains(&lower[i]) {
                i += 1;
                continue;
            }
            let end = name_run_end(tokens, pos, &result, i);
            if end > i {
                mark(&mut result, i..end, EntityCategory::Misc);
                i = end;
            } else {
                i += 1;
            }
        }

        result
    }

    /// Junta cada token à tag que as regras lhe deram.
    pub fn tag(&self, tokens: &[Token], pos: &[PosTag]) -> Vec<TaggedToken> {
        self.apply(tokens, pos)
            .into_iter()
            .zip(tokens)
            .map(|(tag, token)| TaggedToken { token: token.clone(), tag })
            .collect()
    }

    /// Reconhece as entidades de um texto já tokenizado e etiquetado.
    pub fn recognize(&self, text: &str, tokens: &[Token], pos: &[PosTag]) -> Vec<EntitySpan> {
        tokens_to_spans(&self.tag(tokens, pos), text)
    }

    fn is_month(&self, text: &str) -> bool {
        self.months.iter().any(|m| *m == text.to_lowercase())
    }

    /// Fim (exclusivo) de uma data que começa em `i`, se houver.
    ///
    /// Formas aceitas: `5 May [2014]`, `5. Mai [2020]`, `5 de maio [de 2014]`,
    /// `May [5] [,] [2014]` e um ano isolado.
    fn date_span(&self, tokens: &[Token], pos: &[PosTag], i: usize) -> Option<usize> {
        let text = |k: usize| tokens.get(k).map(|t| t.text.as_str());
        let is_day = |k: usize| text(k).map(|t| DAY_PATTERN.is_match(t)).unwrap_or(false);
        let is_year = |k: usize| text(k).map(|t| YEAR_PATTERN.is_match(t)).unwrap_or(false);
        let is_month = |k: usize| text(k).map(|t| self.is_month(t)).unwrap_or(false);

        let mut end;
        if is_day(i) {
            let mut k = i + 1;
            if matches!(text(k), Some(".") | Some("de")) {
                k += 1;
            }
            if !is_month(k) {
                return if is_year(i) { Some(i + 1) } else { None };
            }
            end = k + 1;
        } else if is_month(i) {
            end = i + 1;
            if is_day(end) {
                end += 1;
            }
            let followed_by_number = end > i + 1 || is_year(end) || is_year(end + 1);
            let standalone = starts_uppercase(&tokens[i].text) && pos[i].class != WordClass::Modal;
            if !followed_by_number && !standalone {
                return None;
            }
        } else if is_year(i) {
            return Some(i + 1);
        } else {
            return None;
        }

        let mut k = end;
        if matches!(text(k), Some(",") | Some("de")) {
            k += 1;
        }
        if is_year(k) {
            end = k + 1;
        }
        Some(end)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().map(char::is_uppercase).unwrap_or(false)
}

fn is_free(result: &[Tag], range: std::ops::Range<usize>) -> bool {
    result[range].iter().all(|t| *t == Tag::Outside)
}

/// Fim (exclusivo) da sequência de nomes próprios livres que começa em `start`.
fn name_run_end(
    tokens: &[Token],
    pos: &[PosTag],
    result: &[Tag],
    start: usize,
) -> usize {
    let mut end = start;
    while end < tokens.len()
        && result[end] == Tag::Outside
        && pos[end].class == WordClass::ProperNoun
        && starts_uppercase(&tokens[end].text)
    {
        end += 1;
    }
    end
}

/// Marca `range` como B-/I- da categoria, se todos os tokens estiverem livres.
fn mark(result: &mut [Tag], range: std::ops::Range<usize>, category: EntityCategory) {
    if range.is_empty() || !is_free(result, range.clone()) {
        return;
    }
    let first = range.start;
    for i in range {
        result[i] = if i == first { Tag::Begin(category) } else { Tag::Inside(category) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{ENGLISH, GERMAN, PORTUGUESE};
    use crate::pos::tag_tokens;
    use crate::tokenizer::split_sentences;

    fn entities(profile: &LanguageProfile, text: &str) -> Vec<(String, &'static str)> {
        let tokens = tokenize(text, profile.abbreviations);
        let pos = tag_tokens(profile, &tokens, &split_sentences(&tokens));
        RuleEngine::for_profile(profile)
            .recognize(text, &tokens, &pos)
            .into_iter()
            .map(|s| (s.text, s.category.name()))
            .collect()
    }

    #[test]
    fn test_gazetteers_and_dates() {
        let ents = entities(&ENGLISH, "Barack Obama visited New York in May 2014.");
        assert_eq!(
            ents,
            vec![
                ("Barack Obama".to_string(), "PER"),
                ("New York".to_string(), "LOC"),
                ("May 2014".to_string(), "DATE"),
            ]
        );
    }

    #[test]
    fn test_title_and_org_suffix() {
        let ents = entities(&ENGLISH, "Mr. Smith joined Acme Corp. in 1999.");
        assert!(ents.contains(&("Smith".to_string(), "PER")));
        assert!(ents.contains(&("Acme Corp.".to_string(), "ORG")));
        assert!(ents.contains(&("1999".to_string(), "DATE")));
    }

    #[test]
    fn test_lowercase_word_is_not_gazetteer_hit() {
        let ents = entities(&ENGLISH, "She ate an apple.");
        assert!(ents.is_empty());
    }

    #[test]
    fn test_german_entities() {
        let ents = entities(&GERMAN, "Angela Merkel besuchte Berlin im März 2020.");
        assert!(ents.contains(&("Angela Merkel".to_string(), "PER")));
        assert!(ents.contains(&("Berlin".to_string(), "LOC")));
        assert!(ents.contains(&("März 2020".to_string(), "DATE")));
    }

    #[test]
    fn test_portuguese_date_with_de() {
        let ents = entities(&PORTUGUESE, "O presidente Lula visitou São Paulo em 5 de maio de 2014.");
        assert!(ents.contains(&("Lula".to_string(), "PER")));
        assert!(ents.contains(&("São Paulo".to_string(), "LOC")));
        assert!(ents.contains(&("5 de maio de 2014".to_string(), "DATE")));
    }

    #[test]
    fn test_title_itself_stays_outside() {
        let text = "Mr. Smith left.";
        let tokens = tokenize(text, ENGLISH.abbreviations);
        let pos = tag_tokens(&ENGLISH, &tokens, &split_sentences(&tokens));
        let tags = RuleEngine::for_profile(&ENGLISH).apply(&tokens, &pos);
        assert_eq!(tags[0], Tag::Outside);
        assert_eq!(tags[1], Tag::Begin(EntityCategory::Per));
        assert_eq!(tags[2], Tag::Outside);
    }
}
