//! # Pipeline Baseado em Regras
//!
//! O motor embutido encadeia os estágios abaixo, todos determinísticos:
//!
//! 1. Tokenização ([`tokenizer`](crate::tokenizer)), preservando offsets.
//! 2. Segmentação em sentenças.
//! 3. Etiquetagem morfossintática e lematização ([`pos`](crate::pos)).
//! 4. Reconhecimento de entidades por regras ([`rule_based`](crate::rule_based)).
//! 5. Análise de dependências e sintagmas nominais ([`parser`](crate::parser)).
//!
//! O resultado é um [`Doc`] completo, consumido pelas visões.

use std::time::Instant;

use tracing::debug;

use crate::document::{Doc, DocToken};
use crate::engine::{Engine, LabelSchema};
use crate::error::{NlpError, Result};
use crate::lexicon::LanguageProfile;
use crate::parser::{parse, DEP_LABELS};
use crate::pos::{tag_tokens, ALL_TAGS};
use crate::rule_based::RuleEngine;
use crate::tagger::EntityCategory;
use crate::tokenizer::{is_punct, split_sentences, tokenize};

/// Motor de linguagem de um idioma, montado a partir do seu perfil.
pub struct RulePipeline {
    profile: &'static LanguageProfile,
    rules: RuleEngine,
}

impl RulePipeline {
    pub fn new(profile: &'static LanguageProfile) -> Self {
        Self { profile, rules: RuleEngine::for_profile(profile) }
    }
}

impl Engine for RulePipeline {
    fn name(&self) -> &str {
        self.profile.code
    }

    fn parse(&self, text: &str) -> Result<Doc> {
        let start = Instant::now();

        // === Passo 1: Tokenização e sentenças ===
        let tokens = tokenize(text, self.profile.abbreviations);
        let sents = split_sentences(&tokens);

        // === Passo 2: Classes gramaticais ===
        let pos = tag_tokens(self.profile, &tokens, &sents);
        if pos.len() != tokens.len() {
            return Err(NlpError::Engine(format!(
                "{} tags para {} tokens",
                pos.len(),
                tokens.len()
            )));
        }

        // === Passo 3: Entidades ===
        let ents = self.rules.recognize(text, &tokens, &pos);
        let mut ent_types = vec![""; tokens.len()];
        for ent in &ents {
            for slot in &mut ent_types[ent.start_token..ent.end_token] {
                *slot = ent.category.name();
            }
        }

        // === Passo 4: Dependências ===
        let parsed = parse(self.profile, &pos, &sents);

        let doc_tokens: Vec<DocToken> = tokens
            .into_iter()
            .zip(pos)
            .enumerate()
            .map(|(i, (token, tag))| DocToken {
                is_punct: is_punct(&token.text),
                text: token.text,
                start: token.start,
                end: token.end,
                index: i,
                tag: tag.tag,
                lemma: tag.lemma,
                class: tag.class,
                ent_type: ent_types[i],
                dep: parsed.deps[i],
                head: parsed.heads[i],
            })
            .collect();

        debug!(
            model = self.profile.code,
            tokens = doc_tokens.len(),
            sentences = sents.len(),
            entities = ents.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "documento analisado"
        );

        Ok(Doc {
            text: text.to_string(),
            tokens: doc_tokens,
            sents,
            ents,
            noun_chunks: parsed.noun_chunks,
        })
    }

    fn schema(&self) -> LabelSchema {
        LabelSchema::new(
            DEP_LABELS.iter().copied(),
            EntityCategory::ALL.iter().map(|c| c.name()),
            ALL_TAGS.iter().copied(),
        )
    }
}
