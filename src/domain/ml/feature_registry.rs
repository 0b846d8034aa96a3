/// Ordered list of regression features.
/// Coefficient order in `LinearModel` and the column order of every design
/// matrix built for a solver follow this list.
pub const FEATURE_NAMES: &[&str] = &["open", "close"];

/// Builds one design-matrix row from an (open, close) pair.
pub fn features_to_f64_vector(open: f64, close: f64) -> Vec<f64> {
    vec![open, close]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_matches_registry() {
        let row = features_to_f64_vector(1.5, 2.5);
        assert_eq!(row.len(), FEATURE_NAMES.len());
        assert_eq!(row, vec![1.5, 2.5]);
    }
}
