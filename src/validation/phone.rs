//! Australian phone number formatting as the user types

/// Subscriber digits kept after the trunk/country prefix is dropped
const SUBSCRIBER_DIGITS: usize = 9;

/// Display groups of the formatted number: `0XXX XXX XXX`
const GROUPS: [usize; 3] = [4, 3, 3];

/// Strip everything that is not an ASCII digit
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize raw tel input into the national display form.
///
/// A leading `61` country code or `0` trunk digit is dropped, a single `0`
/// is put back, and the digits are grouped 4-3-3. Partial input only gets
/// the spaces it has digits for, so `0412` stays `0412`.
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);

    let subscriber = if let Some(rest) = digits.strip_prefix("61") {
        rest
    } else if let Some(rest) = digits.strip_prefix('0') {
        rest
    } else {
        digits.as_str()
    };

    if subscriber.is_empty() {
        return String::new();
    }

    let national: String = std::iter::once('0')
        .chain(subscriber.chars().take(SUBSCRIBER_DIGITS))
        .collect();

    let mut formatted = String::with_capacity(national.len() + 2);
    let mut rest = national.as_str();
    for size in GROUPS {
        if rest.is_empty() {
            break;
        }
        if !formatted.is_empty() {
            formatted.push(' ');
        }
        let take = size.min(rest.len());
        formatted.push_str(&rest[..take]);
        rest = &rest[take..];
    }
    formatted
}
