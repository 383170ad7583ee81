/// Storage key holding the serialized collection of shopping lists.
///
/// Fixed at compile time; the lists never move to another key.
pub const STORAGE_KEY: &str = "shopping_lists";
