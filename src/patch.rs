use std::fs;

use crate::utils::clip;

/// One exact-match substitution: the literal bytes expected in the target
/// file and the literal bytes that replace them.
#[derive(Clone, Debug)]
pub struct PatchPair {
    pub label: &'static str,
    pub expected: &'static str,
    pub replacement: &'static str,
}

/// Applies every pair in order against an in-memory buffer.
///
/// Matching is plain substring search, no regex. Only the first occurrence
/// of each expected block is replaced; a missing block fails the whole run
/// with an error naming it.
pub fn apply_pairs(buffer: &str, pairs: &[PatchPair]) -> Result<String, String> {
    let mut text = buffer.to_string();
    for pair in pairs {
        if !text.contains(pair.expected) {
            return Err(format!(
                "expected {} not found (looked for: {})",
                pair.label,
                clip(pair.expected, 60)
            ));
        }
        text = text.replacen(pair.expected, pair.replacement, 1);
    }
    Ok(text)
}

/// Patches a file in place by applying an ordered list of substitutions.
///
/// # Arguments
///
/// * `path` - The path to the file to patch.
/// * `pairs` - The substitutions, applied in order.
///
/// The write happens only after every pair has matched, so a failed lookup
/// leaves the file on disk untouched.
pub fn patch_file(path: &str, pairs: &[PatchPair]) -> Result<String, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let patched = apply_pairs(&content, pairs)?;

    fs::write(path, patched).map_err(|e| format!("Failed to write file: {}", e))?;

    Ok(format!(
        "Successfully patched {} ({} substitutions)",
        path,
        pairs.len()
    ))
}
