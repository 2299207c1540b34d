use crate::common::constants::APP_EXTENSION;

/// Picks the first free document file name for `prefix`.
///
/// Tries `<prefix>.ptk` first, then `<prefix> 1. ptk`, `<prefix> 2. ptk`, ... until
/// `is_taken` reports the name as free. The numbered form keeps the exact spacing
/// of existing libraries.
pub fn unique_file_name(prefix: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let mut file_name = format!("{}.{}", prefix, APP_EXTENSION);
    let mut count: u64 = 1;
    while is_taken(&file_name) {
        file_name = format!("{} {}. {}", prefix, count, APP_EXTENSION);
        count += 1;
    }
    file_name
}
