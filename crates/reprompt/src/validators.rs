//! Ready-made converters.
//!
//! Each function here is a [`Converter`](crate::Converter) (or builds one) and
//! nothing more. The retry behaviour lives in
//! [`Console::read_validated`](crate::Console::read_validated); the matching
//! `Console::read_*` methods only plug these in.
//!
//! | Converter | Accepts | Produces |
//! |---|---|---|
//! | [`integer`] | base-10 `i32` | `i32` |
//! | [`long`] | base-10 `i64` | `i64` |
//! | [`double`] | float literal | `f64` |
//! | [`number_range`] | float in `[min, max)` | `f64` |
//! | [`matching`] | text the predicate accepts | text verbatim |
//! | [`one_of`] | text in a fixed set | text verbatim |
//! | [`one_of_set`] | text in a borrowed set | text verbatim |
//! | [`iso_date`] | `yyyy-mm-dd` | [`NaiveDate`] |
//! | [`iso_date_range`] | `yyyy-mm-dd` in `[from, to]` | [`NaiveDate`] |

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::Rejection;

/// Reason given when input does not parse as an `i32`.
pub const NOT_AN_INTEGER: &str = "Your input is not an integer";
/// Reason given when input does not parse as an `i64`.
pub const NOT_A_LONG: &str = "Your input is not a long";
/// Reason given when input does not parse as an `f64`.
pub const NOT_A_DOUBLE: &str = "Your input is not a double";
/// Reason given when ranged-number input does not parse at all.
pub const NOT_A_NUMBER: &str = "Your input is not a number";
/// Reason given when a predicate refuses the input.
pub const NO_PREDICATE_MATCH: &str = "Your input does not match the predicate";
/// Reason given when the input is not one of the allowed options.
pub const NO_OPTION_MATCH: &str = "Your input does not match the options";
/// Reason given when input is not an ISO-8601 calendar date.
pub const NOT_ISO_DATE: &str = "Date format does not match ISO requirements";

/// Accept a base-10 signed integer that fits in 32 bits.
pub fn integer(raw: &str) -> Result<i32, Rejection> {
    raw.parse().map_err(|_| Rejection::new(NOT_AN_INTEGER))
}

/// Accept a base-10 signed integer that fits in 64 bits.
pub fn long(raw: &str) -> Result<i64, Rejection> {
    raw.parse().map_err(|_| Rejection::new(NOT_A_LONG))
}

/// Accept a decimal or scientific floating-point literal.
pub fn double(raw: &str) -> Result<f64, Rejection> {
    raw.parse().map_err(|_| Rejection::new(NOT_A_DOUBLE))
}

/// Accept a number in the half-open range `[min, max)`.
///
/// The lower bound is inclusive and the upper bound exclusive: with
/// `number_range(0.0, 10.0)`, `"0"` is accepted and `"10"` is not. `NaN` is
/// never in range.
pub fn number_range(min: f64, max: f64) -> impl Fn(&str) -> Result<f64, Rejection> {
    move |raw: &str| {
        let number: f64 = raw.parse().map_err(|_| Rejection::new(NOT_A_NUMBER))?;
        if min <= number && number < max {
            Ok(number)
        } else {
            Err(Rejection::new(format!(
                "Your number is not in range [{}, {})",
                min, max
            )))
        }
    }
}

/// Accept any text the predicate approves of, returned unchanged.
pub fn matching<P>(predicate: P) -> impl Fn(&str) -> Result<String, Rejection>
where
    P: Fn(&str) -> bool,
{
    move |raw: &str| {
        if predicate(raw) {
            Ok(raw.to_string())
        } else {
            Err(Rejection::new(NO_PREDICATE_MATCH))
        }
    }
}

/// Accept text that is exactly one of `options`, returned unchanged.
///
/// Membership is plain string equality: no trimming, no case folding.
pub fn one_of<I, S>(options: I) -> impl Fn(&str) -> Result<String, Rejection>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options: HashSet<String> = options.into_iter().map(Into::into).collect();
    move |raw: &str| {
        if options.contains(raw) {
            Ok(raw.to_string())
        } else {
            Err(Rejection::new(NO_OPTION_MATCH))
        }
    }
}

/// Like [`one_of`], but borrows an existing set instead of copying it.
pub fn one_of_set(options: &HashSet<String>) -> impl Fn(&str) -> Result<String, Rejection> + '_ {
    move |raw: &str| {
        if options.contains(raw) {
            Ok(raw.to_string())
        } else {
            Err(Rejection::new(NO_OPTION_MATCH))
        }
    }
}

/// Accept an ISO-8601 calendar date written as `yyyy-mm-dd`.
pub fn iso_date(raw: &str) -> Result<NaiveDate, Rejection> {
    if !has_iso_shape(raw) {
        return Err(Rejection::new(NOT_ISO_DATE));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| Rejection::new(NOT_ISO_DATE))
}

/// Accept an ISO date in the closed range `[from, to]`.
pub fn iso_date_range(
    from: NaiveDate,
    to: NaiveDate,
) -> impl Fn(&str) -> Result<NaiveDate, Rejection> {
    move |raw: &str| {
        let date = iso_date(raw)?;
        if date < from || date > to {
            return Err(Rejection::new(format!(
                "Date is not in range [{}, {}]",
                from, to
            )));
        }
        Ok(date)
    }
}

// chrono's %Y/%m/%d are lenient about width and sign; ISO input is not.
fn has_iso_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // === integer / long / double ===

    #[test]
    fn integer_parses_decimal() {
        assert_eq!(integer("42"), Ok(42));
        assert_eq!(integer("-7"), Ok(-7));
        assert_eq!(integer("+7"), Ok(7));
    }

    #[test]
    fn integer_rejects_non_integers() {
        for raw in ["4.2", "", "abc", " 42", "42 ", "2147483648"] {
            assert_eq!(
                integer(raw),
                Err(Rejection::new(NOT_AN_INTEGER)),
                "input {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn integer_accepts_bounds() {
        assert_eq!(integer("2147483647"), Ok(i32::MAX));
        assert_eq!(integer("-2147483648"), Ok(i32::MIN));
    }

    #[test]
    fn long_accepts_beyond_i32() {
        assert_eq!(long("2147483648"), Ok(2_147_483_648));
        assert_eq!(long("9223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn long_rejects_overflow_and_fractions() {
        assert_eq!(
            long("9223372036854775808"),
            Err(Rejection::new(NOT_A_LONG))
        );
        assert_eq!(long("1.5"), Err(Rejection::new(NOT_A_LONG)));
    }

    #[test]
    fn double_parses_literals() {
        assert_eq!(double("3.5"), Ok(3.5));
        assert_eq!(double("1e3"), Ok(1000.0));
        assert_eq!(double("-0.25"), Ok(-0.25));
        assert_eq!(double("7"), Ok(7.0));
    }

    #[test]
    fn double_rejects_garbage() {
        assert_eq!(double("1,5"), Err(Rejection::new(NOT_A_DOUBLE)));
        assert_eq!(double(""), Err(Rejection::new(NOT_A_DOUBLE)));
    }

    // === number_range ===

    #[test]
    fn number_range_lower_bound_inclusive() {
        let convert = number_range(0.0, 10.0);
        assert_eq!(convert("0"), Ok(0.0));
    }

    #[test]
    fn number_range_upper_bound_exclusive() {
        let convert = number_range(0.0, 10.0);
        let err = convert("10").unwrap_err();
        assert_eq!(err.reason(), "Your number is not in range [0, 10)");
        assert_eq!(convert("9.999"), Ok(9.999));
    }

    #[test]
    fn number_range_distinguishes_parse_failure() {
        let convert = number_range(0.0, 10.0);
        assert_eq!(convert("ten"), Err(Rejection::new(NOT_A_NUMBER)));
        assert!(convert("-0.001").unwrap_err().reason().contains("not in range"));
    }

    #[test]
    fn number_range_rejects_nan() {
        let convert = number_range(f64::NEG_INFINITY, f64::INFINITY);
        assert!(convert("NaN").is_err());
        assert_eq!(convert("1e300"), Ok(1e300));
    }

    // === matching / one_of ===

    #[test]
    fn matching_echoes_raw_text() {
        let convert = matching(|s| s.starts_with(' '));
        assert_eq!(convert("  padded "), Ok("  padded ".to_string()));
        assert_eq!(convert("x"), Err(Rejection::new(NO_PREDICATE_MATCH)));
    }

    #[test]
    fn one_of_is_exact() {
        let convert = one_of(["red", "green", "blue"]);
        assert_eq!(convert("green"), Ok("green".to_string()));
        assert_eq!(convert("Green"), Err(Rejection::new(NO_OPTION_MATCH)));
        assert_eq!(convert(" green"), Err(Rejection::new(NO_OPTION_MATCH)));
    }

    #[test]
    fn one_of_accepts_owned_strings() {
        let options = vec!["Y".to_string(), "N".to_string()];
        let convert = one_of(options);
        assert_eq!(convert("Y"), Ok("Y".to_string()));
        assert!(convert("y").is_err());
    }

    #[test]
    fn one_of_set_borrows_caller_set() {
        let options: HashSet<String> = ["Y", "N"].into_iter().map(String::from).collect();
        let convert = one_of_set(&options);
        assert_eq!(convert("N"), Ok("N".to_string()));
        assert_eq!(convert("n"), Err(Rejection::new(NO_OPTION_MATCH)));
    }

    // === iso_date / iso_date_range ===

    #[test]
    fn iso_date_parses_calendar_dates() {
        assert_eq!(iso_date("2020-02-29"), Ok(date(2020, 2, 29)));
        assert_eq!(iso_date("0001-01-01"), Ok(date(1, 1, 1)));
    }

    #[test]
    fn iso_date_rejects_malformed_text() {
        for raw in [
            "2021-02-29",
            "2020-13-01",
            "2020-1-5",
            "20-01-01",
            "2020/01/01",
            "+2020-01-01",
            "2020-01-01T00:00",
            "",
        ] {
            assert_eq!(
                iso_date(raw),
                Err(Rejection::new(NOT_ISO_DATE)),
                "input {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn iso_date_range_is_inclusive() {
        let convert = iso_date_range(date(2020, 1, 1), date(2020, 12, 31));
        assert_eq!(convert("2020-01-01"), Ok(date(2020, 1, 1)));
        assert_eq!(convert("2020-12-31"), Ok(date(2020, 12, 31)));
    }

    #[test]
    fn iso_date_range_rejects_outside() {
        let convert = iso_date_range(date(2020, 1, 1), date(2020, 12, 31));
        let expected = "Date is not in range [2020-01-01, 2020-12-31]";
        assert_eq!(convert("2019-12-31").unwrap_err().reason(), expected);
        assert_eq!(convert("2021-01-01").unwrap_err().reason(), expected);
    }

    #[test]
    fn iso_date_range_reuses_format_reason() {
        let convert = iso_date_range(date(2020, 1, 1), date(2020, 12, 31));
        assert_eq!(convert("June 1st"), Err(Rejection::new(NOT_ISO_DATE)));
    }
}
