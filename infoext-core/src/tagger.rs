//! # Rótulos de Entidade
//!
//! O reconhecedor marca cada token com uma tag BIO (`B-X` inicia uma
//! entidade da categoria X, `I-X` a continua, `O` fica de fora) e depois
//! dobra as tags em intervalos contínuos.
//!
//! | Rótulo | Categoria    | Exemplos                        |
//! |--------|--------------|---------------------------------|
//! | PER    | Pessoa       | Barack Obama, Angela Merkel     |
//! | ORG    | Organização  | Apple, Petrobras, Acme Corp.    |
//! | LOC    | Local        | London, São Paulo, Deutschland  |
//! | MISC   | Outros nomes | Christmas, World Cup            |
//! | DATE   | Data         | May 5, 2014, März 2020          |

use serde::{Deserialize, Serialize};

use crate::tokenizer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    Per,
    Org,
    Loc,
    Misc,
    Date,
}

impl EntityCategory {
    /// Todas as categorias, em ordem alfabética de rótulo.
    pub const ALL: [EntityCategory; 5] = [
        EntityCategory::Date,
        EntityCategory::Loc,
        EntityCategory::Misc,
        EntityCategory::Org,
        EntityCategory::Per,
    ];

    /// Rótulo exposto no campo `type` da visão de entidades.
    pub fn name(&self) -> &'static str {
        match self {
            EntityCategory::Per => "PER",
            EntityCategory::Org => "ORG",
            EntityCategory::Loc => "LOC",
            EntityCategory::Misc => "MISC",
            EntityCategory::Date => "DATE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    Begin(EntityCategory),
    Inside(EntityCategory),
    Outside,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: Tag,
}

/// Entidade reconhecida, cobrindo os tokens `[start_token, end_token)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub category: EntityCategory,
    pub start_token: usize,
    pub end_token: usize,
    /// Offset de byte inicial.
    pub start: usize,
    /// Offset de byte final (exclusivo).
    pub end: usize,
}

/// Dobra as tags BIO em intervalos.
///
/// Um `I-X` só estende uma entidade aberta da mesma categoria; fora disso
/// é descartado. Os intervalos saem em ordem e sem sobreposição.
pub fn tokens_to_spans(tagged: &[TaggedToken], text: &str) -> Vec<EntitySpan> {
    let mut spans: Vec<EntitySpan> = Vec::new();
    // Há uma entidade aberta no fim de `spans`
    let mut open = false;

    for t in tagged {
        match t.tag {
            Tag::Inside(cat) if open && spans.last().map(|s| s.category) == Some(cat) => {
                if let Some(span) = spans.last_mut() {
                    span.end_token = t.token.index + 1;
                    span.end = t.token.end;
                }
            }
            Tag::Begin(cat) => {
                close(&mut spans, open, text);
                spans.push(EntitySpan {
                    text: String::new(),
                    category: cat,
                    start_token: t.token.index,
                    end_token: t.token.index + 1,
                    start: t.token.start,
                    end: t.token.end,
                });
                open = true;
            }
            _ => {
                close(&mut spans, open, text);
                open = false;
            }
        }
    }
    close(&mut spans, open, text);
    spans
}

/// Fecha a entidade aberta, recortando o texto final.
fn close(spans: &mut [EntitySpan], open: bool, text: &str) {
    if let (true, Some(span)) = (open, spans.last_mut()) {
        span.text = text.get(span.start..span.end).unwrap_or_default().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn tagged(text: &str, tags: &[Tag]) -> Vec<TaggedToken> {
        tokenize(text, &[])
            .into_iter()
            .zip(tags.iter().copied())
            .map(|(token, tag)| TaggedToken { token, tag })
            .collect()
    }

    #[test]
    fn test_spans_from_bio() {
        use EntityCategory::*;
        let text = "Barack Obama visited New York";
        let tags = [Tag::Begin(Per), Tag::Inside(Per), Tag::Outside, Tag::Begin(Loc), Tag::Inside(Loc)];

        let spans = tokens_to_spans(&tagged(text, &tags), text);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "Barack Obama");
        assert_eq!((spans[0].start_token, spans[0].end_token), (0, 2));
        assert_eq!(spans[1].text, "New York");
        assert_eq!(&text[spans[1].start..spans[1].end], "New York");
    }

    #[test]
    fn test_adjacent_begins_split() {
        use EntityCategory::*;
        let text = "Apple Google";
        let spans = tokens_to_spans(&tagged(text, &[Tag::Begin(Org), Tag::Begin(Org)]), text);
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Apple", "Google"]);
    }

    #[test]
    fn test_stray_inside_is_dropped() {
        use EntityCategory::*;
        let text = "visited York today Paris";
        let tags = [Tag::Outside, Tag::Inside(Loc), Tag::Begin(Per), Tag::Inside(Loc)];
        let spans = tokens_to_spans(&tagged(text, &tags), text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "today");
    }

    #[test]
    fn test_labels_are_sorted() {
        let names: Vec<&str> = EntityCategory::ALL.iter().map(|c| c.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
