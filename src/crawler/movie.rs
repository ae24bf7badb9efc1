//! Movie record produced for every chart entry

use serde::Serialize;
use std::collections::BTreeMap;

/// A scraped chart entry
///
/// `title` and `imdb_rating` come from the chart row, `description` from the
/// entry's detail page. Values are kept exactly as they appear in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub title: String,
    pub imdb_rating: String,
    pub description: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        imdb_rating: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            imdb_rating: imdb_rating.into(),
            description: description.into(),
        }
    }

    /// Returns the record as a plain field-name to value mapping
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("title", self.title.clone()),
            ("imdb_rating", self.imdb_rating.clone()),
            ("description", self.description.clone()),
        ])
    }
}
