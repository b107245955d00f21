// Numeric text helpers shared by the resolver and the stepper

/// Parse the leading decimal number of `text`, ignoring anything after it.
///
/// Accepts optional leading whitespace, an optional sign, digits and at most
/// one decimal point (`"12abc"` -> 12, `"1."` -> 1, `".5"` -> 0.5).
/// At least one digit is required. Exponents are not recognized, and values
/// too large to be finite count as unparseable.
pub fn parse_number(text: &str) -> Option<f64> {
    let mut chars = text.trim_start().chars().peekable();

    let mut negative = false;
    if let Some(&sign) = chars.peek() {
        if sign == '-' || sign == '+' {
            negative = sign == '-';
            chars.next();
        }
    }

    let mut int_part = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        int_part.push(c);
        chars.next();
    }

    let mut frac_part = String::new();
    if chars.peek() == Some(&'.') {
        chars.next();
        while let Some(&c) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            frac_part.push(c);
            chars.next();
        }
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let literal = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_part.is_empty() { "0" } else { int_part.as_str() },
        if frac_part.is_empty() { "0" } else { frac_part.as_str() },
    );

    literal.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse `text`, treating anything unparseable as zero
pub fn parse_or_zero(text: &str) -> f64 {
    parse_number(text).unwrap_or(0.0)
}

/// Shortest decimal text that round-trips to `value`.
/// Never uses exponent notation; negative zero renders as "0".
pub fn canonicalize(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
