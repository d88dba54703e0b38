// Aggregation cases: every operator, grouping before and after the
// argument list, parametric operators, and error cases.

/// All aggregation operators
pub const AGGREGATION_OPERATORS: &[&str] = &[
    "sum",
    "avg",
    "count",
    "min",
    "max",
    "group",
    "stddev",
    "stdvar",
    "topk",
    "bottomk",
    "quantile",
    "count_values",
];

/// Valid aggregations
/// Format: (input, operator, grouping ("by", "without" or ""), grouping labels)
pub const VALID_AGGREGATIONS: &[(&str, &str, &str, &[&str])] = &[
    ("sum(some_metric)", "sum", "", &[]),
    ("avg(rate(some_metric[5m]))", "avg", "", &[]),
    ("count(some_metric > 0)", "count", "", &[]),
    ("group(some_metric)", "group", "", &[]),
    ("SUM(some_metric)", "sum", "", &[]),
    // grouping first
    ("sum by (job) (some_metric)", "sum", "by", &["job"]),
    ("max by (job, instance) (some_metric)", "max", "by", &["job", "instance"]),
    ("min without (instance) (some_metric)", "min", "without", &["instance"]),
    ("sum BY (job) (some_metric)", "sum", "by", &["job"]),
    // grouping last
    ("sum(some_metric) by (job)", "sum", "by", &["job"]),
    ("stddev(some_metric) without (a, b)", "stddev", "without", &["a", "b"]),
    ("sum(some_metric) by(job)", "sum", "by", &["job"]),
    // empty and trailing-comma label lists
    ("sum by () (some_metric)", "sum", "by", &[]),
    ("sum by (job,) (some_metric)", "sum", "by", &["job"]),
    // keyword-like label names
    ("sum by (and, by, offset) (some_metric)", "sum", "by", &["and", "by", "offset"]),
    // parametric
    ("topk(5, some_metric)", "topk", "", &[]),
    ("bottomk by (job) (3, some_metric)", "bottomk", "by", &["job"]),
    ("quantile(0.99, some_metric) without (pod)", "quantile", "without", &["pod"]),
    (r#"count_values("version", build_info)"#, "count_values", "", &[]),
    ("topk(scalar(limit), some_metric)", "topk", "", &[]),
];

/// Parametric aggregations and the parameter they carry
/// Format: (input, parameter as printed)
pub const PARAMETRIC_AGGREGATIONS: &[(&str, &str)] = &[
    ("topk(5, x)", "5"),
    ("bottomk(10, x)", "10"),
    ("quantile(0.5, x)", "0.5"),
    (r#"count_values("v", x)"#, r#""v""#),
    ("topk(2 * 3, x)", "2 * 3"),
];

/// Aggregation keywords used as metric names
pub const AGGREGATION_KEYWORDS_AS_METRICS: &[&str] = &[
    "sum",
    "sum + 1",
    r#"sum{job="a"}"#,
    "sum[5m]",
    "avg offset 5m",
    "rate(count[5m])",
];

/// Invalid aggregations
/// Format: (input, fragment of the error message)
pub const INVALID_AGGREGATIONS: &[(&str, &str)] = &[
    ("sum(", "expected expression"),
    ("sum()", "expected expression"),
    ("sum(x", "expected \")\""),
    ("sum(x, y)", "expected \")\""),
    ("topk(x)", "expected \",\""),
    ("sum by job (x)", "expected \"(\""),
    ("sum by (job (x)", "expected \")\""),
    ("sum by (job) x", "expected \"(\""),
    ("sum by (\"job\") (x)", "expected label name"),
    ("sum by (job) (x) by (env)", "expected end of input"),
    ("sum without", "expected \"(\""),
];
