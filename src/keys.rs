//! src/keys.rs
//!
//! Key-naming convention shared by all three stages. Every key is a pure
//! function of namespace and index; no stage keeps naming state of its own.

/// The single fixed key the reducer writes its aggregate to.
pub const FINAL_KEY: &str = "final/result.json";

/// Namespace prefix for chunk objects written by the splitter.
pub const CHUNK_NAMESPACE: &str = "chunks/";

/// Namespace prefix for map outputs written by the mapper.
pub const MAP_NAMESPACE: &str = "maps/";

/// Rewrites a key from one namespace and extension into another.
///
/// A prefix that doesn't match is left alone, as is an extension that
/// doesn't match; the rewrite never touches the middle of the key.
pub fn derive_key(key: &str, ns_from: &str, ns_to: &str, ext_from: &str, ext_to: &str) -> String {
    let renamed = match key.strip_prefix(ns_from) {
        Some(rest) => format!("{ns_to}{rest}"),
        None => key.to_string(),
    };
    match renamed.strip_suffix(ext_from) {
        Some(stem) => format!("{stem}{ext_to}"),
        None => renamed,
    }
}

/// Store key of the chunk at `index`: `chunks/chunk{index}.txt`.
pub fn chunk_key(index: usize) -> String {
    format!("{CHUNK_NAMESPACE}chunk{index}.txt")
}

/// Store key of the map output for `chunk_key`: `maps/chunk{index}.json`.
pub fn map_output_key(chunk_key: &str) -> String {
    derive_key(chunk_key, CHUNK_NAMESPACE, MAP_NAMESPACE, ".txt", ".json")
}
