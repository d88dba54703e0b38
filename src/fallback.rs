//! Best-effort series extraction from raw query text.
//!
//! When a query does not parse there is no tree to walk. This module scans
//! the text for identifier-shaped words that sit where a metric name could
//! sit: right before `{`, `(`, `[`, `)`, `,`, `@`, an arithmetic or
//! comparison operator, whitespace, or the end of the text. Names quoted in
//! `{__name__="x"}` or `{"x"}` are picked up as well. Keywords and the most
//! common function and aggregation names are dropped.
//!
//! The answer is less precise than [`extract_series`](crate::extract_series):
//! label names in grouping lists or before `!=`, words inside string
//! literals and function names missing from the exclusion list all come
//! through. Use
//! [`is_known_function`] to filter out the latter.
//!
//! ```rust
//! use promql_series::extract_series_fallback;
//!
//! assert_eq!(
//!     extract_series_fallback("rate(http_requests_total[5m]"),
//!     vec!["http_requests_total"]
//! );
//! ```

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::lexer::identifier::is_metric_char;

pub use crate::parser::function::is_known_function;

lazy_static! {
    static ref CANDIDATE_RE: Regex =
        Regex::new(r"([a-zA-Z_:][a-zA-Z0-9_:]*)\s*(?:[{(\[),+\-*/%^<>@]|==|!=|\s|$)").unwrap();
    static ref QUOTED_NAME_RE: Regex =
        Regex::new(r#"(?:__name__\s*=\s*|\{\s*)["'`]([a-zA-Z_:][a-zA-Z0-9_:]*)["'`]"#).unwrap();
}

/// Words never reported, compared case-insensitively.
pub static EXCLUDED_WORDS: &[&str] = &[
    // modifiers
    "by",
    "without",
    "group_left",
    "group_right",
    "on",
    "ignoring",
    "offset",
    "bool",
    // set and keyword operators
    "and",
    "or",
    "unless",
    "atan2",
    // aggregations
    "sum",
    "min",
    "max",
    "avg",
    "count",
    "stddev",
    "stdvar",
    "count_values",
    "group",
    "topk",
    "bottomk",
    "quantile",
    // functions
    "rate",
    "irate",
    "increase",
    "delta",
    "idelta",
    "sort",
    "sort_desc",
    "histogram_quantile",
    "label_replace",
    "label_join",
    "time",
    "vector",
    "scalar",
    // literals
    "inf",
    "nan",
    // labels
    "__name__",
];

fn is_excluded(word: &str) -> bool {
    EXCLUDED_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

/// Sorted, deduplicated metric-name candidates found in `query`.
///
/// Never fails; text without candidates yields an empty list.
pub fn extract_series_fallback(query: &str) -> Vec<String> {
    let mut series = BTreeSet::new();

    for caps in CANDIDATE_RE.captures_iter(query) {
        let Some(word) = caps.get(1) else {
            continue;
        };
        // A match starting mid-word is the tail of a number or duration.
        if query[..word.start()].chars().next_back().is_some_and(is_metric_char) {
            continue;
        }
        if is_excluded(word.as_str()) {
            continue;
        }
        series.insert(word.as_str().to_string());
    }
    for caps in QUOTED_NAME_RE.captures_iter(query) {
        if let Some(name) = caps.get(1) {
            series.insert(name.as_str().to_string());
        }
    }

    debug!(matches = series.len(), "fallback extraction finished");
    series.into_iter().collect()
}
