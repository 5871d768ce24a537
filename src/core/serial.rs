use crate::domain::model::SplitSerial;

/// Splits a serial into a prefix and a fixed two-character emphasis suffix.
/// Serials shorter than two characters become all suffix with an empty
/// prefix. The serial is opaque text; nothing numeric is assumed.
pub fn split(serial: &str) -> SplitSerial {
    let cut = serial
        .char_indices()
        .rev()
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(0);

    SplitSerial {
        prefix: serial[..cut].to_string(),
        suffix: serial[cut..].to_string(),
    }
}
