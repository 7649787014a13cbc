/// Round to `places` decimals, half to even, judged on the exact decimal
/// expansion of `value` rather than on a scaled copy of it.
pub(crate) fn round_decimal(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
