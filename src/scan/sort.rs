use super::extract::KeySet;

/// Orders the keys of a set ascending by byte value.
///
/// The result depends only on the set's contents, never on insertion order.
pub fn sort_keys(keys: &KeySet) -> Vec<String> {
    let mut sorted: Vec<String> = keys.keys().cloned().collect();
    sorted.sort_unstable();
    sorted
}
