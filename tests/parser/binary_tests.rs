// Binary and unary operator cases.
//
// Precedence (lowest to highest):
//   or < and, unless < comparisons < + - < * / % atan2 < ^
// `^` is right-associative. Unary signs bind looser than `^` and tighter
// than everything else.

/// Every binary operator
/// Format: (input, operator as printed, bool modifier present)
pub const BINARY_OPERATORS: &[(&str, &str, bool)] = &[
    ("a + b", "+", false),
    ("a - b", "-", false),
    ("a * b", "*", false),
    ("a / b", "/", false),
    ("a % b", "%", false),
    ("a ^ b", "^", false),
    ("a atan2 b", "atan2", false),
    ("a == b", "==", false),
    ("a != b", "!=", false),
    ("a > b", ">", false),
    ("a < b", "<", false),
    ("a >= b", ">=", false),
    ("a <= b", "<=", false),
    ("a > bool b", ">", true),
    ("a == BOOL 1", "==", true),
    ("a and b", "and", false),
    ("a or b", "or", false),
    ("a unless b", "unless", false),
    ("a AND b", "and", false),
    ("a Unless b", "unless", false),
    ("a ATAN2 b", "atan2", false),
    ("a+b", "+", false),
    ("a>=b", ">=", false),
];

/// Precedence and associativity
/// Format: (input, fully parenthesized structure)
pub const PRECEDENCE_TESTS: &[(&str, &str)] = &[
    ("1 + 2 * 3", "(1 + (2 * 3))"),
    ("1 * 2 + 3", "((1 * 2) + 3)"),
    ("a - b - c", "((a - b) - c)"),
    ("a / b * c % d", "(((a / b) * c) % d)"),
    ("2 ^ 3 ^ 2", "(2 ^ (3 ^ 2))"),
    ("a atan2 b * c", "((a atan2 b) * c)"),
    ("a + b > c - d", "((a + b) > (c - d))"),
    ("a > b == c", "((a > b) == c)"),
    ("a > bool b + 1", "(a > (b + 1))"),
    ("a == b and c", "((a == b) and c)"),
    ("a and b or c and d", "((a and b) or (c and d))"),
    ("a or b unless c", "(a or (b unless c))"),
    ("a unless b and c", "((a unless b) and c)"),
    ("(a + b) * c", "((a + b) * c)"),
    ("a * (b + c)", "(a * (b + c))"),
    ("a AND b OR c", "((a and b) or c)"),
];

/// Unary signs
/// Format: (input, fully parenthesized structure)
pub const UNARY_TESTS: &[(&str, &str)] = &[
    ("-a", "-a"),
    ("+a", "+a"),
    ("- -a", "--a"),
    ("-1 ^ 2", "-(1 ^ 2)"),
    ("-1 * 2", "(-1 * 2)"),
    ("-a + b", "(-a + b)"),
    ("+a * -b", "(+a * -b)"),
    ("1 ^ -2", "(1 ^ -2)"),
    ("2 ^ -3 ^ 2", "(2 ^ -(3 ^ 2))"),
    ("-rate(x[5m])", "-rate(x[5m])"),
    ("-x[5m:]", "-x[5m:]"),
];

/// Vector matching
/// Format: (input, "on" or "ignoring", matching labels, group side or "", group labels)
pub const VECTOR_MATCHING_TESTS: &[(&str, &str, &[&str], &str, &[&str])] = &[
    ("a * on(job) b", "on", &["job"], "", &[]),
    ("a * on (job, instance) b", "on", &["job", "instance"], "", &[]),
    ("a and on() b", "on", &[], "", &[]),
    ("a unless ignoring(env) b", "ignoring", &["env"], "", &[]),
    ("a / ignoring(job,) b", "ignoring", &["job"], "", &[]),
    ("a * on(job) group_left b", "on", &["job"], "group_left", &[]),
    ("a * on(job) group_left(team) b", "on", &["job"], "group_left", &["team"]),
    ("a - ignoring(x) group_right(y, z) b", "ignoring", &["x"], "group_right", &["y", "z"]),
    ("a > bool on(job) b", "on", &["job"], "", &[]),
    ("a * ON(job) GROUP_LEFT(team) b", "on", &["job"], "group_left", &["team"]),
];

/// Invalid binary and unary expressions
/// Format: (input, fragment of the error message)
pub const INVALID_BINARY_OPS: &[(&str, &str)] = &[
    ("a +", "expected expression"),
    ("-", "expected expression"),
    ("a == == b", "expected expression"),
    ("a + bool b", "expected expression after \"+\""),
    ("a and bool b", "expected expression after \"and\""),
    ("a and on(job) group_left b", "expected expression after \"and\""),
    ("a * on(job b", "expected \")\""),
    ("a * on(\"job\") b", "expected label name"),
    ("(a + b", "expected \")\""),
    ("a + b)", "expected end of input"),
    ("()", "expected expression"),
    ("a ! b", "unexpected character '!'"),
];
