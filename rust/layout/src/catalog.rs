// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Book catalog records

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    /// Cover texture path; a generic cover is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "textureRef")]
    pub texture: Option<String>,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            texture: None,
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    /// Stable identifier: `<title-slug>-by-<author-slug>`
    pub fn id(&self) -> String {
        format!("{}-by-{}", slugify(&self.title), slugify(&self.author))
    }
}

/// Lowercase, collapse every run of characters outside `[a-z0-9]` into a
/// single `-`, and trim dashes from both ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Parse a JSON array of book records
pub fn load_catalog(json: &str) -> Result<Vec<BookRecord>, CatalogError> {
    let records: Vec<BookRecord> = serde_json::from_str(json)?;
    if let Some(index) = records.iter().position(|r| r.title.trim().is_empty()) {
        return Err(CatalogError::EmptyTitle { index });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Parable Of The Sower"), "parable-of-the-sower");
        assert_eq!(slugify("The Subtle Art of Not Giving a F*ck"), "the-subtle-art-of-not-giving-a-f-ck");
        assert_eq!(slugify("  H.G. Wells  "), "h-g-wells");
        assert_eq!(slugify("Terry Pratchett & Neil Gaiman"), "terry-pratchett-neil-gaiman");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_book_id() {
        let book = BookRecord::new("Project Hail Mary", "Andy Weir");
        assert_eq!(book.id(), "project-hail-mary-by-andy-weir");
    }

    #[test]
    fn test_load_catalog() {
        let json = r#"[
            {"title": "I am Legend", "author": "Richard Matheson", "texture": "/IAmLegendSkin.png"},
            {"title": "Dune", "author": "Frank Herbert"},
            {"title": "The Martian", "author": "Andy Weir", "textureRef": "/TheMartianSkin.png"}
        ]"#;
        let books = load_catalog(json).unwrap();
        assert_eq!(books.len(), 3);
        assert_eq!(books[0].texture.as_deref(), Some("/IAmLegendSkin.png"));
        assert_eq!(books[1].texture, None);
        assert_eq!(books[2].texture.as_deref(), Some("/TheMartianSkin.png"));
    }

    #[test]
    fn test_load_catalog_rejects_blank_title() {
        let json = r#"[{"title": "Dune", "author": "Frank Herbert"}, {"title": " ", "author": "x"}]"#;
        assert!(matches!(load_catalog(json), Err(CatalogError::EmptyTitle { index: 1 })));
    }

    #[test]
    fn test_load_catalog_rejects_malformed_json() {
        assert!(matches!(load_catalog("{"), Err(CatalogError::Parse(_))));
    }
}
