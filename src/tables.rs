/// Static English -> Thai lookup tables for catalog field values
///
/// Name lookup is ordered substring matching: source names often carry size
/// or variant suffixes ("Oversized Black Tee - Size M"), so a table entry
/// matches if its English phrase appears anywhere in the value. Category
/// values are exact enumerated strings and use strict lookup. Both fall back
/// to the English value when no entry matches.
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TranslationTables {
    /// Ordered (english, thai) pairs; resolution takes the first entry whose
    /// english phrase is contained in the value.
    pub name: Vec<(String, String)>,
    /// Exact-match category lookup.
    pub category: HashMap<String, String>,
}

impl TranslationTables {
    /// Tables for the streetwear catalog migration.
    pub fn streetwear() -> Self {
        let name = vec![
            ("Oversized Black Tee", "เสื้อยืดโอเวอร์ไซส์สีดำ"),
            ("Vintage Graphic Tee", "เสื้อยืดกราฟิกวินเทจ"),
            ("Striped Long Sleeve", "เสื้อแขนยาวลายทาง"),
        ]
        .into_iter()
        .map(|(en, th)| (en.to_string(), th.to_string()))
        .collect();

        let category = [
            ("T-Shirts & Tops", "เสื้อยืดและเสื้อท็อป"),
            ("Hoodies & Sweatshirts", "เสื้อฮู้ดและสเวตเตอร์"),
            ("Pants & Bottoms", "กางเกงและกางเกงขาสั้น"),
            ("Outerwear", "เสื้อนอก"),
            ("Accessories", "เครื่องประดับ"),
        ]
        .into_iter()
        .map(|(en, th)| (en.to_string(), th.to_string()))
        .collect();

        Self { name, category }
    }

    /// Empty tables; every lookup falls back to the English value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve a product name, first table entry contained in `value` wins.
    pub fn resolve_name<'a>(&'a self, value: &'a str) -> &'a str {
        for (en, th) in &self.name {
            if value.contains(en.as_str()) {
                return th;
            }
        }
        value
    }

    /// Resolve a category by exact lookup.
    pub fn resolve_category<'a>(&'a self, value: &'a str) -> &'a str {
        self.category.get(value).map(String::as_str).unwrap_or(value)
    }
}
