//! Small numeric helpers shared by the normalizer, scorer and exit calculator

/// Round half away from zero to `decimals` places.
///
/// Values too large to scale stay as they are.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Split a comma list, dropping blank items
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| item.to_string())
        .collect()
}

/// Parse a comma list of numbers, e.g. `2,5,10`
pub fn parse_number_list(raw: &str) -> Result<Vec<f64>, String> {
    split_list(raw)
        .iter()
        .map(|item| {
            item.parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", item))
        })
        .collect()
}
