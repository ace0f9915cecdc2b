/// Round to 2 decimal places
///
/// Operates on the binary `f64` value: `value * 100.0` is rounded half away
/// from zero, so a literal like `1.005` (stored just below) gives `1.0`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(2.675_1), 2.68);
        assert_eq!(round2(-7.005_1), -7.01);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(100_000.0), 100_000.0);
    }

    #[test]
    fn test_round2_uses_binary_value() {
        // 1.005 is stored as 1.00499999...
        assert_eq!(round2(1.005), 1.0);
        assert_eq!(round2(0.125), 0.13);
    }
}
