use crate::types::FrequencyLevel;

/// Reference count from which a word is considered high frequency
pub const HIGH_FREQUENCY_THRESHOLD: u64 = 500;
/// Reference count from which a word is considered medium frequency
pub const MEDIUM_FREQUENCY_THRESHOLD: u64 = 100;

/// Frequency level of a reference-corpus count
pub fn classify(count: u64) -> FrequencyLevel {
    match count {
        c if c >= HIGH_FREQUENCY_THRESHOLD => FrequencyLevel::High,
        c if c >= MEDIUM_FREQUENCY_THRESHOLD => FrequencyLevel::Medium,
        _ => FrequencyLevel::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        assert_eq!(classify(0), FrequencyLevel::Low);
        assert_eq!(classify(99), FrequencyLevel::Low);
        assert_eq!(classify(100), FrequencyLevel::Medium);
        assert_eq!(classify(499), FrequencyLevel::Medium);
        assert_eq!(classify(500), FrequencyLevel::High);
        assert_eq!(classify(69_971), FrequencyLevel::High);
    }
}
