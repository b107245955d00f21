use log::trace;

/// Reduce arbitrary input to a decimal-literal prefix.
///
/// Commas become decimal points, everything before the first `-`, digit or
/// `.` is dropped, and the literal runs until the first character that is not
/// a digit or a point (a minus only counts as the first character). Extra
/// points are folded into the fractional part, so the result always matches
/// `-?[0-9]*\.?[0-9]*`. It may be empty, `"-"` or `"."`.
pub fn sanitize(input: &str) -> String {
    let normalized = input.replace(',', ".");

    let start = match normalized.find(|c: char| c == '-' || c == '.' || c.is_ascii_digit()) {
        Some(index) => index,
        None => {
            trace!("sanitize({:?}) found no numeric start", input);
            return String::new();
        }
    };

    let mut literal = String::new();
    for (offset, c) in normalized[start..].char_indices() {
        match c {
            '-' if offset == 0 => literal.push(c),
            '.' => literal.push(c),
            c if c.is_ascii_digit() => literal.push(c),
            _ => break,
        }
    }

    let result = collapse_points(&literal);
    trace!("sanitize({:?}) -> {:?}", input, result);
    result
}

// Keep the first point, concatenate the remaining segments
fn collapse_points(literal: &str) -> String {
    let mut parts = literal.split('.');
    let head = parts.next().unwrap_or_default();
    let tail: Vec<&str> = parts.collect();

    if tail.len() <= 1 {
        return literal.to_string();
    }

    format!("{}.{}", head, tail.concat())
}
