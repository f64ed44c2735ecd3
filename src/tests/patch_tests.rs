use crate::patch::{PatchPair, apply_pairs, patch_file};
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(
        label: &'static str,
        expected: &'static str,
        replacement: &'static str,
    ) -> PatchPair {
        PatchPair {
            label,
            expected,
            replacement,
        }
    }

    #[test]
    fn test_apply_pairs_basic_substitution() {
        let input = "Line 1\nLine to replace\nLine 3";
        let result =
            apply_pairs(input, &[pair("middle line", "Line to replace", "Replaced line")]).unwrap();
        assert_eq!(result, "Line 1\nReplaced line\nLine 3");
    }

    #[test]
    fn test_apply_pairs_first_occurrence_only() {
        let input = "alpha beta alpha";
        let result = apply_pairs(input, &[pair("alpha", "alpha", "gamma")]).unwrap();
        assert_eq!(result, "gamma beta alpha");
    }

    #[test]
    fn test_apply_pairs_sequential_order() {
        let input = "one two three";
        let pairs = [pair("first word", "one", "1"), pair("last word", "three", "3")];
        let result = apply_pairs(input, &pairs).unwrap();
        assert_eq!(result, "1 two 3");
    }

    #[test]
    fn test_apply_pairs_missing_block_names_it() {
        let input = "nothing of interest";
        let result = apply_pairs(input, &[pair("constants block", "const TYPES", "x")]);
        let err = result.unwrap_err();
        assert!(err.contains("constants block"));
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_apply_pairs_stops_at_first_missing() {
        let input = "alpha";
        let pairs = [
            pair("present block", "alpha", "beta"),
            pair("absent block", "zzz", "yyy"),
            pair("trailing block", "beta", "gamma"),
        ];
        let err = apply_pairs(input, &pairs).unwrap_err();
        assert!(err.contains("absent block"));
    }

    #[test]
    fn test_apply_pairs_line_endings_are_significant() {
        // A CRLF needle must not match an LF buffer.
        let err = apply_pairs("a\nb", &[pair("crlf block", "a\r\nb", "c")]).unwrap_err();
        assert!(err.contains("crlf block"));

        let result = apply_pairs("a\r\nb", &[pair("crlf block", "a\r\nb", "c")]).unwrap();
        assert_eq!(result, "c");
    }

    #[test]
    fn test_apply_pairs_empty_pair_list_is_identity() {
        let input = "unchanged";
        assert_eq!(apply_pairs(input, &[]).unwrap(), input);
    }

    #[test]
    fn test_patch_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("target.txt");
        fs::write(&file_path, "foo bar baz").unwrap();

        let result = patch_file(
            file_path.to_str().unwrap(),
            &[pair("middle word", "bar", "qux")],
        );
        assert!(result.unwrap().contains("Successfully patched"));

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "foo qux baz");
    }

    #[test]
    fn test_patch_file_missing_block_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("target.txt");
        let original = "foo bar baz";
        fs::write(&file_path, original).unwrap();

        // First pair matches, second does not; the successful in-memory
        // substitution must not reach the disk.
        let pairs = [
            pair("present block", "bar", "qux"),
            pair("absent block", "missing", "anything"),
        ];
        let result = patch_file(file_path.to_str().unwrap(), &pairs);
        assert!(result.unwrap_err().contains("absent block"));

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, original);
    }

    #[test]
    fn test_patch_file_nonexistent_path() {
        let result = patch_file("/nonexistent/dir/target.txt", &[]);
        assert!(result.unwrap_err().contains("Failed to read file"));
    }
}
