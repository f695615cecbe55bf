//! # Tokenizador
//!
//! Divide o texto bruto em tokens (palavras, números, pontuações) preservando
//! a posição original de cada um (offset em bytes). Os offsets são o que
//! permite à visão de dependências reconstruir o texto de unidades fundidas
//! e à visão de entidades devolver `start`/`end` exatos.
//!
//! ## Esquema
//!
//! A segmentação segue as fronteiras de palavra do Unicode (UAX #29), via
//! `unicode-segmentation`. Em cima disso aplicamos duas correções:
//!
//! - Espaços em branco nunca viram tokens.
//! - Clíticos com apóstrofo viram tokens próprios ("don't" → "do", "n't";
//!   "John's" → "John", "'s").
//! - Um ponto logo após uma abreviação conhecida ("Dr", "Mr", "etc") ou
//!   após uma sigla com pontos internos ("U.S", "e.g") é reanexado ao token
//!   anterior, para não ser confundido com fim de sentença.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use infoext_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("Dr. Smith arrived.", &["Dr"]);
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Dr.", "Smith", "arrived", "."]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
///
/// Mantém a referência exata de sua posição no texto (`start` e `end`), o que
/// permite fatiar o texto original ao fundir tokens vizinhos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "fox", ",", "jumps").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Clíticos separados do token anterior, com apóstrofo reto ou tipográfico.
const CLITICS: &[&str] = &[
    "n't", "'s", "'re", "'ll", "'ve", "'d", "'m", "n’t", "’s", "’re", "’ll", "’ve", "’d", "’m",
];

/// Caracteres tratados como pontuação.
///
/// Símbolos como `$`, `%` e `+` ficam de fora: não são pontuação para fins
/// de fusão na visão de dependências.
pub fn is_punct_char(ch: char) -> bool {
    matches!(
        ch,
        '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' | '(' | ')' | '[' | ']' | '{' | '}'
            | '-' | '/' | '\\' | '…' | '–' | '—' | '«' | '»' | '“' | '”' | '‘' | '’'
            | '¿' | '¡' | '„' | '‚'
    )
}

/// Um token é pontuação quando todos os seus caracteres são pontuação.
pub fn is_punct(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_punct_char)
}

/// Tokeniza um texto, reanexando pontos às abreviações informadas.
///
/// A comparação com `abbreviations` ignora maiúsculas/minúsculas.
pub fn tokenize(text: &str, abbreviations: &[&str]) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for (start, segment) in text.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }

        if segment == "." {
            if let Some(prev) = tokens.last_mut() {
                if prev.end == start && takes_period(&prev.text, abbreviations) {
                    prev.text.push('.');
                    prev.end = start + 1;
                    continue;
                }
            }
        }

        match split_clitic(segment) {
            Some(split) => {
                push_token(&mut tokens, &segment[..split], start);
                push_token(&mut tokens, &segment[split..], start + split);
            }
            None => push_token(&mut tokens, segment, start),
        }
    }

    // Re-indexa os tokens
    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

/// Posição (em bytes) onde um clítico final começa, se houver.
fn split_clitic(segment: &str) -> Option<usize> {
    let lower = segment.to_lowercase();
    CLITICS
        .iter()
        .find(|c| lower.len() > c.len() && lower.ends_with(*c))
        .map(|c| segment.len() - c.len())
        .filter(|&split| segment.is_char_boundary(split))
}

/// Adiciona um token; o índice é atribuído depois
fn push_token(tokens: &mut Vec<Token>, text: &str, start: usize) {
    tokens.push(Token {
        text: text.to_string(),
        start,
        end: start + text.len(),
        index: 0,
    });
}

/// Decide se o ponto seguinte pertence ao token (abreviação ou sigla).
fn takes_period(word: &str, abbreviations: &[&str]) -> bool {
    if word.ends_with('.') || !word.chars().any(char::is_alphabetic) {
        return false;
    }
    // Siglas com pontos internos: "U.S", "e.g", "S.A"
    if word.contains('.') {
        return true;
    }
    abbreviations.iter().any(|a| a.eq_ignore_ascii_case(word))
}

/// Agrupa tokens em sentenças.
///
/// Uma sentença termina após um token formado só por `.`, `!` ou `?`
/// (seguido opcionalmente de aspas ou parênteses de fechamento). Devolve
/// intervalos `[início, fim)` de índices de token; a união cobre todos os
/// tokens.
pub fn split_sentences(tokens: &[Token]) -> Vec<std::ops::Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        let text = tokens[i].text.as_str();
        if !text.is_empty() && text.chars().all(|c| matches!(c, '.' | '!' | '?' | '…')) {
            let mut end = i + 1;
            while end < tokens.len()
                && matches!(tokens[end].text.as_str(), "\"" | "'" | ")" | "]" | "”" | "’" | "»")
            {
                end += 1;
            }
            sentences.push(start..end);
            start = end;
            i = end;
            continue;
        }
        i += 1;
    }

    if start < tokens.len() {
        sentences.push(start..tokens.len());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("The quick fox jumps.", &[]);
        assert_eq!(texts(&tokens), vec!["The", "quick", "fox", "jumps", "."]);
        assert_eq!(tokens[4].start, 19);
        assert_eq!(tokens[4].end, 20);
        assert_eq!(tokens[3].index, 3);
    }

    #[test]
    fn test_abbreviation_keeps_period() {
        let tokens = tokenize("Mr. Brown left.", &["Mr"]);
        assert_eq!(texts(&tokens), vec!["Mr.", "Brown", "left", "."]);
        assert_eq!(tokens[0].end, 3);
    }

    #[test]
    fn test_acronym_keeps_period() {
        let tokens = tokenize("He moved to the U.S. in May", &[]);
        assert!(texts(&tokens).contains(&"U.S."));
    }

    #[test]
    fn test_clitics_are_split() {
        let tokens = tokenize("John's dog doesn't bark", &[]);
        assert_eq!(texts(&tokens), vec!["John", "'s", "dog", "does", "n't", "bark"]);
        assert_eq!(tokens[1].start, 4);
    }

    #[test]
    fn test_offsets_slice_original_text() {
        let text = "Olá, São Paulo!";
        for token in tokenize(text, &[]) {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_punctuation_runs_are_separate_tokens() {
        let tokens = tokenize("Wait...what?!", &[]);
        assert!(tokens.iter().filter(|t| is_punct(&t.text)).count() >= 2);
        assert!(!is_punct("$"));
        assert!(is_punct("?!"));
    }

    #[test]
    fn test_split_sentences() {
        let tokens = tokenize("It rained. We stayed home! Fine", &[]);
        let sents = split_sentences(&tokens);
        assert_eq!(sents, vec![0..3, 3..7, 7..8]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("   ", &[]).is_empty());
        assert!(split_sentences(&[]).is_empty());
    }
}
