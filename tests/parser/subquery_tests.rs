// Subquery cases: `<expr>[<range>:<step>]` on every kind of inner
// expression, with and without modifiers.

/// Valid subqueries
/// Format: (input, range in milliseconds, step in milliseconds)
pub const VALID_SUBQUERIES: &[(&str, i64, Option<i64>)] = &[
    ("some_metric[5m:1m]", 300_000, Some(60_000)),
    ("some_metric[1h:]", 3_600_000, None),
    ("some_metric[1w:1d]", 604_800_000, Some(86_400_000)),
    ("some_metric[1h30m:90s]", 5_400_000, Some(90_000)),
    (r#"some_metric{job="foo"}[5m:1m]"#, 300_000, Some(60_000)),
    ("rate(some_metric[5m])[30m:1m]", 1_800_000, Some(60_000)),
    ("sum(some_metric)[5m:]", 300_000, None),
    ("sum by (job) (rate(x[1m]))[1h:5m]", 3_600_000, Some(300_000)),
    ("(a + b)[10m:1m]", 600_000, Some(60_000)),
    ("(-a)[10m:]", 600_000, None),
    ("some_metric[ 5m : 1m ]", 300_000, Some(60_000)),
];

/// Subqueries nested in function arguments
/// Format: (input, depth of subquery nesting)
pub const NESTED_SUBQUERIES: &[(&str, usize)] = &[
    ("max_over_time(rate(x[5m])[1h:1m])", 1),
    ("min_over_time(rate(x[5m])[30m:1m])[4h:5m]", 2),
    ("avg_over_time(sum_over_time(rate(x[5m])[1h:])[1d:1h])", 2),
    ("x[5m:][10m:][20m:]", 3),
];

/// Subqueries with modifiers
/// Format: (input, offset in milliseconds, whether an @ modifier is present)
pub const SUBQUERY_MODIFIERS: &[(&str, Option<i64>, bool)] = &[
    ("x[5m:1m] offset 10m", Some(600_000), false),
    ("x[5m:1m] offset -10m", Some(-600_000), false),
    ("x[5m:1m] @ 1609459200", None, true),
    ("x[5m:1m] @ start()", None, true),
    ("x[5m:1m] offset 1m @ end()", Some(60_000), true),
    ("x[5m:1m] @ end() offset 1m", Some(60_000), true),
];

/// Invalid subqueries
/// Format: (input, fragment of the error message)
pub const INVALID_SUBQUERIES: &[(&str, &str)] = &[
    ("some_metric[5m:1m", "expected \"]\""),
    ("some_metric[:1m]", "expected duration"),
    ("some_metric[5m:1]", "expected \"]\""),
    ("sum(x)[5m]", "expected \":\""),
    ("rate(x[5m])[5m]", "expected \":\""),
    ("x[5m:1m:1m]", "expected \"]\""),
    ("x[5m:1m] offset 1m offset 2m", "expected a single offset modifier"),
    ("1[5m:1m", "expected \"]\""),
];
