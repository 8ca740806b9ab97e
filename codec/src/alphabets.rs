//! Predefined alphabets addressable by numeric id.
//!
//! The table is pinned: changing the symbols behind an id changes every value
//! previously encoded with that id. Variants of an existing charset must be
//! added under a new id (and the [VERSION] bumped) rather than replacing an
//! entry.
//!
//! Ids name the radix of their charset, except id 66: its charset has 67 symbols
//! and stays under 66 for compatibility with values already encoded with it.

/// Revision of the predefined table.
pub const VERSION: u32 = 1;

/// Predefined alphabets, ordered by id.
pub const PREDEFINED: &[(u32, &str)] = &[
    (2, "01"),
    (8, "01234567"),
    (11, "0123456789a"),
    (16, "0123456789abcdef"),
    (32, "0123456789ABCDEFGHJKMNPQRSTVWXYZ"),
    (36, "0123456789abcdefghijklmnopqrstuvwxyz"),
    (58, "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"),
    (62, "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"),
    (64, "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"),
    (66, "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.!~"),
];

/// Returns the symbols registered under `id`.
///
/// Id 66 resolves to a 67-symbol charset, pinned for compatibility.
pub fn lookup(id: u32) -> Option<&'static str> {
    PREDEFINED
        .binary_search_by_key(&id, |(id, _)| *id)
        .ok()
        .map(|index| PREDEFINED[index].1)
}

/// Returns all predefined ids in ascending order.
pub fn ids() -> impl Iterator<Item = u32> {
    PREDEFINED.iter().map(|(id, _)| *id)
}
