//! Tests for USD amount formatting

use core_kernel::format_usd;
use core_kernel::money::format_grouped;
use proptest::prelude::*;

mod grouping {
    use super::*;

    #[test]
    fn test_no_separator_below_one_thousand() {
        assert_eq!(format_usd(999.99), "$999.99");
    }

    #[test]
    fn test_separator_at_each_thousand() {
        assert_eq!(format_usd(1000.0), "$1,000.00");
        assert_eq!(format_usd(100000.0), "$100,000.00");
        assert_eq!(format_usd(12345678.9), "$12,345,678.90");
    }

    #[test]
    fn test_other_precisions() {
        assert_eq!(format_grouped(1234.5678, 0), "1,235");
        assert_eq!(format_grouped(1234.5678, 3), "1,234.568");
    }
}

proptest! {
    #[test]
    fn prop_formatted_digits_match_plain_formatting(cents in 0u64..10_000_000_000u64) {
        let amount = cents as f64 / 100.0;
        let formatted = format_usd(amount);
        prop_assert!(formatted.starts_with('$'));
        let stripped: String = formatted.chars().filter(|c| *c != '$' && *c != ',').collect();
        prop_assert_eq!(stripped, format!("{:.2}", amount));
    }
}
