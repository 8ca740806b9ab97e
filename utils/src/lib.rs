//! Leverage common functionality across the radix primitives.

/// Converts bytes to a hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Converts a hexadecimal string to bytes.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 || !hex.is_ascii() {
        return None;
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}

/// Returns the length of the run of `value` at the start of `items`.
///
/// The codec uses this to count leading zero bytes (when encoding) and leading
/// zero symbols (when decoding).
pub fn leading<T: PartialEq>(items: &[T], value: &T) -> usize {
    items.iter().take_while(|item| *item == value).count()
}
