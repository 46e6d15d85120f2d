use crate::consts::{APT_DECIMALS, OCTAS_PER_APT};
use crate::error::{Error, Result};

/// Convert a decimal APT string into octas using integer arithmetic only.
///
/// Fractional digits past the eighth are truncated toward zero.
pub fn parse_display_amount(display: &str) -> Result<u64> {
    let s = display.trim();
    let invalid = || Error::InvalidAmount(format!("'{display}' is not a decimal amount"));

    let (whole, frac) = match s.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (s, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };

    let decimals = APT_DECIMALS as usize;
    let kept = &frac[..frac.len().min(decimals)];
    let frac: u64 = if kept.is_empty() {
        0
    } else {
        format!("{kept:0<decimals$}").parse().map_err(|_| invalid())?
    };

    whole
        .checked_mul(OCTAS_PER_APT)
        .and_then(|octas| octas.checked_add(frac))
        .ok_or_else(|| Error::InvalidAmount(format!("'{display}' overflows u64 octas")))
}

/// Convert a floating display amount into octas.
///
/// The float is rendered in its shortest round-trip decimal form first, so `1.005` converts as
/// the literal the user typed rather than as `1.00499999...`.
pub fn display_to_octas(display: f64) -> Result<u64> {
    if !display.is_finite() || display < 0.0 {
        return Err(Error::InvalidAmount(format!("{display} is not a valid amount")));
    }
    parse_display_amount(&display.to_string())
}

/// Render octas as an APT decimal string without trailing zeros.
pub fn format_octas(octas: u64) -> String {
    let whole = octas / OCTAS_PER_APT;
    let frac = octas % OCTAS_PER_APT;
    if frac == 0 {
        return whole.to_string();
    }
    let decimals = APT_DECIMALS as usize;
    let frac = format!("{frac:0>decimals$}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_whole_and_fractional_amounts() {
        assert_eq!(parse_display_amount("1").unwrap(), 100_000_000);
        assert_eq!(parse_display_amount("1.0").unwrap(), 100_000_000);
        assert_eq!(parse_display_amount("0.01").unwrap(), 1_000_000);
        assert_eq!(parse_display_amount(".5").unwrap(), 50_000_000);
        assert_eq!(parse_display_amount("2.").unwrap(), 200_000_000);
        assert_eq!(parse_display_amount(" 3 ").unwrap(), 300_000_000);
    }

    #[test]
    fn no_floating_point_drift() {
        assert_eq!(parse_display_amount("1.005").unwrap(), 100_500_000);
        assert_eq!(display_to_octas(1.005).unwrap(), 100_500_000);
        assert_eq!(display_to_octas(0.29).unwrap(), 29_000_000);
        assert_eq!(display_to_octas(1.0).unwrap(), 100_000_000);
    }

    #[test]
    fn truncates_beyond_eight_decimals() {
        assert_eq!(parse_display_amount("0.123456789").unwrap(), 12_345_678);
        assert_eq!(parse_display_amount("0.000000009").unwrap(), 0);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", ".", "-1", "+1", "1.2.3", "abc", "1e8", "1,5"] {
            assert!(parse_display_amount(bad).is_err(), "{bad} should be rejected");
        }
        assert!(display_to_octas(-1.0).is_err());
        assert!(display_to_octas(f64::NAN).is_err());
        assert!(display_to_octas(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_overflow() {
        assert!(matches!(
            parse_display_amount("184467440738"),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn formats_octas() {
        assert_eq!(format_octas(0), "0");
        assert_eq!(format_octas(100_000_000), "1");
        assert_eq!(format_octas(150_000_000), "1.5");
        assert_eq!(format_octas(1), "0.00000001");
    }

    proptest! {
        #[test]
        fn format_then_parse_is_exact(octas in 0u64..=u64::MAX / 2) {
            prop_assert_eq!(parse_display_amount(&format_octas(octas)).unwrap(), octas);
        }
    }
}
