// Whole queries paired with the series they read.
//
// The queries are the kind found in dashboards, alerting rules and
// recording rules. Expected lists are sorted and free of duplicates.

/// Small queries covering one construct each
pub const BASIC_QUERIES: &[(&str, &[&str])] = &[
    ("cpu_usage_percent", &["cpu_usage_percent"]),
    (
        r#"http_requests_total{method="GET"}"#,
        &["http_requests_total"],
    ),
    ("rate(http_requests_total[5m])", &["http_requests_total"]),
    (
        "sum(rate(cpu_usage_seconds_total[5m])) by (mode)",
        &["cpu_usage_seconds_total"],
    ),
    ("rate(a[5m]) / rate(b[5m])", &["a", "b"]),
    (
        "histogram_quantile(0.95, sum(rate(x_bucket[5m])) by (le))",
        &["x_bucket"],
    ),
];

/// Dashboard queries
pub const DASHBOARD_QUERIES: &[(&str, &[&str])] = &[
    ("rate(http_requests_total[5m])", &["http_requests_total"]),
    (
        r#"sum(rate(http_requests_total[5m])) by (service)"#,
        &["http_requests_total"],
    ),
    (
        r#"sum(rate(http_requests_total{status=~"5.."}[5m])) / sum(rate(http_requests_total[5m])) * 100"#,
        &["http_requests_total"],
    ),
    (
        r#"histogram_quantile(0.99, sum(rate(http_request_duration_seconds_bucket[5m])) by (le, service))"#,
        &["http_request_duration_seconds_bucket"],
    ),
    (
        r#"(node_memory_MemTotal_bytes - node_memory_MemAvailable_bytes) / node_memory_MemTotal_bytes * 100"#,
        &["node_memory_MemAvailable_bytes", "node_memory_MemTotal_bytes"],
    ),
    (
        r#"100 - (avg by (instance) (irate(node_cpu_seconds_total{mode="idle"}[5m])) * 100)"#,
        &["node_cpu_seconds_total"],
    ),
    (
        "topk(10, container_memory_usage_bytes)",
        &["container_memory_usage_bytes"],
    ),
    (
        r#"http_requests_total / on(instance) group_left(job) http_requests_errors"#,
        &["http_requests_errors", "http_requests_total"],
    ),
    (
        r#"label_replace(up, "host", "$1", "instance", "(.*):.*")"#,
        &["up"],
    ),
    (
        "avg_over_time(rate(http_requests_total[5m])[30m:1m])",
        &["http_requests_total"],
    ),
    (
        "rate(http_requests_total[5m] offset -5m @ 1609459200)",
        &["http_requests_total"],
    ),
    (
        "quantile(0.9, rate(request_latency_seconds_sum[5m]) / rate(request_latency_seconds_count[5m]))",
        &["request_latency_seconds_count", "request_latency_seconds_sum"],
    ),
];

/// Alerting rule expressions
pub const ALERT_QUERIES: &[(&str, &[&str])] = &[
    ("up == 0", &["up"]),
    (
        r#"(node_filesystem_avail_bytes / node_filesystem_size_bytes) < 0.1"#,
        &["node_filesystem_avail_bytes", "node_filesystem_size_bytes"],
    ),
    (
        r#"deriv(rate(http_requests_total[5m])[30m:1m]) > bool 10"#,
        &["http_requests_total"],
    ),
    (
        r#"absent(up{job="critical-service"})"#,
        &["up"],
    ),
    (
        "changes(config_hash[1h]) > 0 unless ignoring(instance) maintenance_mode == 1",
        &["config_hash", "maintenance_mode"],
    ),
    (
        r#"count_values("version", build_info) > 1"#,
        &["build_info"],
    ),
];

/// Recording rule expressions, some reading other recording rules
pub const RECORDING_RULE_QUERIES: &[(&str, &[&str])] = &[
    (
        "sum without (instance) (job:http_requests:rate5m)",
        &["job:http_requests:rate5m"],
    ),
    (
        ":node_cpu:ratio * on (node) group_right kube_node_info",
        &[":node_cpu:ratio", "kube_node_info"],
    ),
    (
        "count(up) by (job) or vector(0)",
        &["up"],
    ),
];

/// Queries that reference no series at all
pub const SERIES_FREE_QUERIES: &[&str] = &[
    "1",
    "1 + 2 * 3",
    r#""a string""#,
    "time()",
    "vector(1) > bool 0",
    "-Inf",
    "NaN",
    "scalar(vector(time()))",
    r#"{job="api"}"#,
];

/// Syntactically broken queries
pub const INVALID_QUERIES: &[&str] = &[
    "",
    "sum(",
    "rate(x[5m]",
    "foo{",
    r#"foo{job="a""#,
    "foo[5m",
    "foo +",
    "(foo",
    "foo)",
    "sum by job (foo)",
    "foo bar",
    "foo[5]",
    "5x",
    r#"foo{job="unterminated}"#,
    "foo @ bar",
    "foo offset",
];

/// Formatting variations of one query
pub const WHITESPACE_VARIATIONS: &[&str] = &[
    "sum(rate(http_requests_total[5m]))by(job)",
    "sum  (  rate  (  http_requests_total  [  5m  ]  )  )  by  (  job  )",
    "sum(\n  rate(\n    http_requests_total[5m]\n  )\n) by (job)",
    "sum(\trate(\thttp_requests_total[5m]\t)\t) by (job)",
    "sum(rate(http_requests_total[5m])) # request rate\nby (job)",
];
