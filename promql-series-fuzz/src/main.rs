use afl::fuzz;
use promql_series::{extract_series, extract_series_fallback, parse};

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data) {
            match parse(s) {
                Ok(expr) => {
                    let series = extract_series(&expr);
                    assert!(series.windows(2).all(|w| w[0] < w[1]));
                    let reprinted = expr.to_string();
                    assert!(parse(&reprinted).is_ok(), "printed form does not parse: {}", reprinted);
                }
                Err(_) => {
                    let _ = extract_series_fallback(s);
                }
            }
        }
    });
}
