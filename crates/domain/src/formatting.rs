//! Number formatting for Persian cards

/// Replace ASCII digits with Persian (Extended Arabic-Indic) digits
#[must_use]
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| char::from_u32(0x06F0 + d))
                .unwrap_or(c)
        })
        .collect()
}

/// Insert `,` between every group of three digits (`7153309` -> `7,153,309`)
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}
