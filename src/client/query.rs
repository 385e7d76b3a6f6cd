//! Search request descriptors and their JSON query DSL.
//!
//! The descriptors are plain structs: every recognized option is a named field
//! and `source()` renders the request body the search service expects.

use serde_json::{json, Value};

/// How a multi-match query combines the fields it searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchType {
    /// Score on the best matching field.
    #[default]
    BestFields,
    /// Treat all fields as one combined field.
    CrossFields,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BestFields => "best_fields",
            Self::CrossFields => "cross_fields",
        }
    }
}

/// How query terms combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// Any term may match.
    #[default]
    Or,
    /// Every term must match.
    And,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
        }
    }
}

/// A full-text query run against several fields at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiMatchQuery {
    pub query: String,
    pub fields: Vec<String>,
    pub match_type: MatchType,
    pub operator: Operator,
}

impl MultiMatchQuery {
    /// Cross-field, all-terms query over `fields`, which are de-duplicated in order.
    pub fn cross_fields<I, S>(query: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !unique.contains(&field) {
                unique.push(field);
            }
        }

        Self {
            query: query.into(),
            fields: unique,
            match_type: MatchType::CrossFields,
            operator: Operator::And,
        }
    }

    /// The `multi_match` clause.
    pub fn source(&self) -> Value {
        json!({
            "multi_match": {
                "query": self.query,
                "fields": self.fields,
                "type": self.match_type.as_str(),
                "operator": self.operator.as_str(),
            }
        })
    }
}

/// One search call: query, sort order and output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: MultiMatchQuery,
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
    /// Ask the service for indented JSON
    pub pretty: bool,
}

impl SearchRequest {
    pub fn new(query: MultiMatchQuery) -> Self {
        Self {
            query,
            sort_field: None,
            sort_ascending: true,
            pretty: false,
        }
    }

    /// The request body sent to `_search`.
    pub fn source(&self) -> Value {
        let mut body = json!({ "query": self.query.source() });

        if let Some(field) = &self.sort_field {
            let order = if self.sort_ascending { "asc" } else { "desc" };
            body["sort"] = json!([{ field.as_str(): { "order": order } }]);
        }

        body
    }
}
