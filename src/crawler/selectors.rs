//! Field extraction rules for chart and detail pages
//!
//! Every field is described by a selector path and an extraction rule. A path
//! is a chain of CSS selectors: each step is applied to the first match of the
//! previous one, so `[".titleColumn", "a"]` means "the first `a` inside the
//! first `.titleColumn`".

use crate::ExtractionError;
use scraper::{ElementRef, Selector};

/// Selector for the repeated rows of the chart table
pub const LISTING_ROW: &str = ".lister-list tr";

/// How a value is read from the matched element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// Concatenated text of the element and its descendants, untrimmed
    Text,
    /// Value of the named attribute
    Attr(&'static str),
}

/// A declarative field rule
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub path: &'static [&'static str],
    pub extract: Extract,
}

pub const TITLE: FieldRule = FieldRule {
    field: "title",
    path: &[".titleColumn"],
    extract: Extract::Text,
};

pub const RATING: FieldRule = FieldRule {
    field: "imdb_rating",
    path: &[".imdbRating"],
    extract: Extract::Text,
};

pub const DETAILS_LINK: FieldRule = FieldRule {
    field: "details_url",
    path: &[".titleColumn", "a"],
    extract: Extract::Attr("href"),
};

pub const DESCRIPTION: FieldRule = FieldRule {
    field: "description",
    path: &[
        ".GenresAndPlot__ContentParent-cum89p-8 p",
        "span:nth-of-type(1)",
    ],
    extract: Extract::Text,
};

/// A [`FieldRule`] with its selectors parsed
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: FieldRule,
    steps: Vec<Selector>,
}

impl CompiledRule {
    pub fn compile(rule: FieldRule) -> Result<Self, ExtractionError> {
        let steps = rule
            .path
            .iter()
            .map(|step| parse_selector(step))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rule, steps })
    }

    pub fn field(&self) -> &'static str {
        self.rule.field
    }

    /// Follows the selector path from `scope` and reads the field value
    ///
    /// `page_url` is only used to make errors point at the offending page.
    pub fn select_field(
        &self,
        scope: ElementRef<'_>,
        page_url: &str,
    ) -> Result<String, ExtractionError> {
        let mut current = scope;
        for (selector, raw) in self.steps.iter().zip(self.rule.path) {
            current = current
                .select(selector)
                .next()
                .ok_or_else(|| ExtractionError::MissingElement {
                    field: self.rule.field,
                    selector: raw.to_string(),
                    url: page_url.to_string(),
                })?;
        }

        match self.rule.extract {
            Extract::Text => Ok(current.text().collect()),
            Extract::Attr(name) => current
                .value()
                .attr(name)
                .map(str::to_string)
                .ok_or_else(|| ExtractionError::MissingAttribute {
                    field: self.rule.field,
                    attribute: name,
                    url: page_url.to_string(),
                }),
        }
    }
}

/// All selectors used by one extraction run
#[derive(Debug, Clone)]
pub struct ChartRules {
    pub row: Selector,
    pub title: CompiledRule,
    pub rating: CompiledRule,
    pub details_link: CompiledRule,
    pub description: CompiledRule,
}

impl ChartRules {
    pub fn compile() -> Result<Self, ExtractionError> {
        Ok(Self {
            row: parse_selector(LISTING_ROW)?,
            title: CompiledRule::compile(TITLE)?,
            rating: CompiledRule::compile(RATING)?,
            details_link: CompiledRule::compile(DETAILS_LINK)?,
            description: CompiledRule::compile(DESCRIPTION)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}
