/// Read a quantity from free text.
///
/// Leading whitespace and an optional sign are accepted, followed by the longest run of ASCII
/// digits; anything after the digits is ignored (`"12 pcs"` reads as 12). Text without leading
/// digits reads as 0. Values beyond the `i64` range saturate.
pub fn parse_quantity(input: &str) -> i64 {
    let trimmed = input.trim_start();

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let magnitude = unsigned
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit))
        });

    if negative { -magnitude } else { magnitude }
}
