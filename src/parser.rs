use crate::error::ParseError;

/// Maximum number of colon-separated fields in a duration string.
pub const MAXFIELDS: usize = 3;

/// Parses the duration argument and returns the total number of seconds to wait.
///
/// The unit of the first field depends on how many fields follow it:
///
/// - `A` is minutes.
/// - `A:B` is minutes and seconds.
/// - `A:B:C` is hours, minutes and seconds.
///
/// So `3.5:0` is three and a half minutes while `3.5:0:0` is three and a half hours.
///
/// Returns `Err(ParseError::Usage)` when there is no argument at all, and
/// `Err(ParseError::BadInput)` when the first field is not a number or the
/// total is negative or infinite. Fields after the first are optional; a
/// malformed one ends the scan and it and everything after it count as absent.
pub fn parse_duration(arg: Option<&str>) -> Result<f64, ParseError> {
    let arg = arg.ok_or(ParseError::Usage)?;
    let bad_input = || ParseError::BadInput(arg.to_string());

    let [minutes, seconds, extra] = scan_fields(arg);
    let minutes = match minutes {
        Some(v) if !v.is_nan() => v,
        _ => return Err(bad_input()),
    };

    let mut total = minutes * 60.0;
    if let Some(secs) = seconds {
        total += secs;
    }
    // A third field re-bases the first two as hours and minutes.
    if let Some(secs) = extra {
        total = total * 60.0 + secs;
    }

    if total.is_finite() && total >= 0.0 {
        Ok(total)
    } else {
        Err(bad_input())
    }
}

/// Splits the input into at most three numeric fields separated by ':'.
///
/// Scanning stops at the first field that does not start with a number, or at
/// the first character after a field that is not ':'. Fields that were never
/// reached are `None`, as are later fields that read as NaN.
fn scan_fields(input: &str) -> [Option<f64>; MAXFIELDS] {
    let mut fields = [None; MAXFIELDS];
    let mut rest = input;
    for (i, field) in fields.iter_mut().enumerate() {
        let Some((value, tail)) = scan_float(rest) else {
            break;
        };
        *field = if i > 0 && value.is_nan() {
            None
        } else {
            Some(value)
        };
        match tail.strip_prefix(':') {
            Some(next) => rest = next,
            None => break,
        }
    }
    fields
}

/// Reads the longest floating-point prefix of `input` after skipping leading
/// whitespace. Handles:
///
/// - An optional sign
/// - Decimal digits with an optional '.' and fraction
/// - An exponent, only when at least one digit follows the 'e'
/// - The words "inf", "infinity" and "nan" in any case
///
/// Returns the value together with the unconsumed remainder.
fn scan_float(input: &str) -> Option<(f64, &str)> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            end += 1;
            true
        }
        Some(b'+') => {
            end += 1;
            false
        }
        _ => false,
    };

    for word in ["infinity", "inf", "nan"] {
        let matched = s
            .get(end..end + word.len())
            .map_or(false, |w| w.eq_ignore_ascii_case(word));
        if matched {
            let value = match word {
                "nan" => f64::NAN,
                _ if negative => f64::NEG_INFINITY,
                _ => f64::INFINITY,
            };
            return Some((value, &s[end + word.len()..]));
        }
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let value = s[..end].parse::<f64>().ok()?;
    Some((value, &s[end..]))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
