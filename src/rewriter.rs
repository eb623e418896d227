/// Field rewriting within a single record block
///
/// Each of the three field kinds is located by its own line-anchored pattern
/// and replaced by a `_th`/`_en` pair carrying the original indentation. The
/// indentation requirement is the only guard against same-named keys nested
/// inside sub-structures (a color variant's `name:` never sits at line start
/// after only whitespace in this source, so it never matches). A nested key
/// at identical indentation would still be caught; the source format does
/// not produce that shape.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::tables::TranslationTables;

static NAME_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^(\s+)name: "([^"]+)""#).expect("valid name field regex")
});

static DESCRIPTION_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^(\s+)description: "([^"]+)""#).expect("valid description field regex")
});

static CATEGORY_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^(\s+)category: "([^"]+)""#).expect("valid category field regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Description,
    Category,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [Self::Name, Self::Description, Self::Category];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Category => "category",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Name => &NAME_FIELD_REGEX,
            Self::Description => &DESCRIPTION_FIELD_REGEX,
            Self::Category => &CATEGORY_FIELD_REGEX,
        }
    }
}

/// Result of rewriting one record block.
#[derive(Debug, Clone)]
pub struct RewrittenBlock {
    pub text: String,
    /// How many of the three field kinds were found and rewritten.
    pub fields_rewritten: usize,
}

#[derive(Debug, Clone)]
pub struct FieldRewriter {
    tables: TranslationTables,
}

impl FieldRewriter {
    pub fn new(tables: TranslationTables) -> Self {
        Self { tables }
    }

    /// Rewrite the three field kinds in one block; everything else is
    /// returned unchanged. A kind with no occurrence is skipped silently.
    pub fn rewrite_block(&self, block: &str) -> RewrittenBlock {
        let mut fields_rewritten = 0;
        let mut text = block.to_string();
        for kind in FieldKind::ALL {
            text = self.rewrite_field(&text, kind, &mut fields_rewritten);
        }
        RewrittenBlock {
            text,
            fields_rewritten,
        }
    }

    /// Replace the first `key: "value"` line of the given kind with a
    /// `key_th`/`key_en` pair. The second line ends where the original did,
    /// so trailing commas and any other punctuation stay in place.
    fn rewrite_field(&self, text: &str, kind: FieldKind, rewritten: &mut usize) -> String {
        let mut matched = false;
        let out = kind.regex().replacen(text, 1, |caps: &Captures| {
            matched = true;
            let indent = &caps[1];
            let value = &caps[2];
            let thai = match kind {
                FieldKind::Name => self.tables.resolve_name(value),
                FieldKind::Category => self.tables.resolve_category(value),
                // Descriptions carry the same text in both locales.
                FieldKind::Description => value,
            };
            format!(
                "{indent}{key}_th: \"{thai}\",\n{indent}{key}_en: \"{value}\"",
                key = kind.key()
            )
        });
        if matched {
            *rewritten += 1;
        }
        out.into_owned()
    }
}
