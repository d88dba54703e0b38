// Vector and matrix selector cases.
//
// Cover metric names, label matchers, quoted names, range selectors and
// the offset and @ modifiers.

/// Valid vector selectors
/// Format: (input, expected name, number of remaining label matchers)
pub const VALID_VECTOR_SELECTORS: &[(&str, Option<&str>, usize)] = &[
    ("foo", Some("foo"), 0),
    ("http_requests_total", Some("http_requests_total"), 0),
    ("_private", Some("_private"), 0),
    // recording rule names
    ("job:http_requests:rate5m", Some("job:http_requests:rate5m"), 0),
    (":leading_colon", Some(":leading_colon"), 0),
    // keywords are metric names outside their context
    ("min", Some("min"), 0),
    ("offset", Some("offset"), 0),
    ("group_left", Some("group_left"), 0),
    // matchers
    (r#"foo{a="b"}"#, Some("foo"), 1),
    (r#"foo{a="b", c!="d", e=~"f.*", g!~"h"}"#, Some("foo"), 4),
    (r#"foo{a="b",}"#, Some("foo"), 1),
    ("foo{}", Some("foo"), 0),
    (r#"foo{a='single'}"#, Some("foo"), 1),
    ("foo{a=`raw\\d`}", Some("foo"), 1),
    (r#"foo{bar='}'}"#, Some("foo"), 1),
    // keyword-like label names
    (r#"foo{and="x", or="y", by="z", offset="w"}"#, Some("foo"), 4),
    // name inside the braces
    (r#"{"foo"}"#, Some("foo"), 0),
    (r#"{"foo", a="b"}"#, Some("foo"), 1),
    (r#"{a="b", "foo"}"#, Some("foo"), 1),
    (r#"{__name__="foo"}"#, Some("foo"), 0),
    (r#"{__name__="foo", job="api"}"#, Some("foo"), 1),
    // name matchers that do not pin a single metric
    (r#"{__name__=~"foo|bar"}"#, None, 1),
    (r#"{__name__!="foo", job="x"}"#, None, 2),
    (r#"{"not.a.metric"}"#, None, 1),
    // nameless
    (r#"{job="api"}"#, None, 1),
    (r#"{job=~".+"}"#, None, 1),
    (r#"{job="api", env=""}"#, None, 2),
];

/// Valid matrix selectors
/// Format: (input, expected range in milliseconds)
pub const VALID_MATRIX_SELECTORS: &[(&str, i64)] = &[
    ("foo[5m]", 300_000),
    ("foo[1ms]", 1),
    ("foo[30s]", 30_000),
    ("foo[1h30m]", 5_400_000),
    ("foo[2d]", 172_800_000),
    ("foo[1w]", 604_800_000),
    ("foo[1y]", 31_536_000_000),
    (r#"foo{job="api"}[10m]"#, 600_000),
    (r#"{__name__="foo"}[1m]"#, 60_000),
    ("foo[ 5m ]", 300_000),
];

/// Offset modifiers on selectors
/// Format: (input, expected offset in milliseconds)
pub const OFFSET_MODIFIERS: &[(&str, i64)] = &[
    ("foo offset 5m", 300_000),
    ("foo offset -1h", -3_600_000),
    ("foo offset +30s", 30_000),
    ("foo OFFSET 1d", 86_400_000),
    (r#"foo{job="a"} offset 1w"#, 604_800_000),
    ("foo[5m] offset 1h", 3_600_000),
    ("foo @ 100 offset 2m", 120_000),
    ("foo offset 2m @ 100", 120_000),
];

/// @ modifiers with a fixed timestamp
/// Format: (input, expected timestamp in milliseconds)
pub const AT_TIMESTAMPS: &[(&str, i64)] = &[
    ("foo @ 1609459200", 1_609_459_200_000),
    ("foo @ 1609459200.5", 1_609_459_200_500),
    ("foo @ -100", -100_000),
    ("foo @ +100", 100_000),
    ("foo @ 0x10", 16_000),
    ("foo @ 1e3", 1_000_000),
    ("foo[5m] @ 100", 100_000),
];

/// Invalid selectors
/// Format: (input, fragment of the error message)
pub const INVALID_SELECTORS: &[(&str, &str)] = &[
    ("{}", "a selector matching every series"),
    (r#"{a=""}"#, "a selector matching every series"),
    (r#"{a=~".*"}"#, "a selector matching every series"),
    (r#"foo{a="b""#, r#"expected "," or "}""#),
    (r#"foo{a}"#, "expected label matching operator"),
    (r#"foo{a=b}"#, "expected string"),
    (r#"foo{a=1}"#, "expected string"),
    (r#"foo{"bar"}"#, "metric name given twice"),
    (r#"foo{__name__="bar"}"#, "metric name given twice"),
    ("foo offset", "expected duration"),
    ("foo offset 5m offset 1m", "expected a single offset modifier"),
    ("foo @ 1 @ 2", "expected a single @ modifier"),
    ("foo @ start", "expected timestamp, start() or end()"),
    ("foo @ Inf", "expected timestamp, start() or end()"),
    ("foo[5m", "expected \":\""),
    ("foo[5m:", "expected \"]\""),
    ("foo[]", "expected duration"),
];
