//! Small scanners for free-text attributes.

/// Extracts signed integer and decimal tokens in order of appearance.
///
/// Accepts the forms `3`, `-2`, `+1.5` and `.25`. Exponents are not
/// part of the grammar monitor_nD uses for `xylimits`.
#[must_use]
pub fn numeric_tokens(text: &str) -> Vec<f64> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match scan_token(&bytes[i..]) {
            Some(len) => {
                if let Ok(value) = text[i..i + len].parse::<f64>() {
                    tokens.push(value);
                }
                i += len;
            }
            None => i += 1,
        }
    }
    tokens
}

/// Length of a numeric token starting at the front of `bytes`, if any.
fn scan_token(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_digits = digit_run(&bytes[i..]);
    i += int_digits;
    if bytes.get(i) == Some(&b'.') {
        let frac_digits = digit_run(&bytes[i + 1..]);
        if frac_digits > 0 {
            return Some(i + 1 + frac_digits);
        }
    }
    if int_digits > 0 {
        Some(i)
    } else {
        None
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Replaces every non-alphabetic character with an underscore.
///
/// McStas mangles axis labels this way when naming the axis datasets
/// inside BINS, so lookups must apply the same mangling.
#[must_use]
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { '_' })
        .collect()
}
