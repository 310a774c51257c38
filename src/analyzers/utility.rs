/// Renders an average with exactly two decimal places. Non-finite values
/// come out as `nan`, `inf` or `-inf`.
pub fn format_avg(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{value:.2}")
    }
}
