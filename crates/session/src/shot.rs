//! Screenshot artifact naming.
//!
//! Files are named `{seq:03}-{label}.png`, sequence strictly increasing and
//! gapless within a session. Labels pass through [`sanitize_label`]; pieces
//! of a label that come from caller input (selectors, queries) are expected
//! to be pre-sanitized with the stricter [`sanitize_fragment`] so the
//! template's own hyphens survive.

use std::path::{Path, PathBuf};

/// Sanitizes a complete screenshot label: keeps ASCII alphanumerics, `-`
/// and `_`; everything else becomes `_`.
pub(crate) fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Sanitizes caller input embedded into a label (selector, search query):
/// keeps ASCII alphanumerics only, everything else becomes `_`.
pub(crate) fn sanitize_fragment(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Builds the artifact path for sequence number `seq` and `label`.
pub(crate) fn shot_path(dir: &Path, seq: u32, label: &str) -> PathBuf {
    dir.join(format!("{:03}-{}.png", seq, sanitize_label(label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_keeps_hyphens_and_replaces_the_rest() {
        assert_eq!(sanitize_label("click-#submit"), "click-_submit");
        assert_eq!(sanitize_label("scroll-bottom"), "scroll-bottom");
        assert_eq!(sanitize_label("fill input[name=q]"), "fill_input_name_q_");
    }

    #[test]
    fn fragment_replaces_everything_but_alphanumerics() {
        assert_eq!(sanitize_fragment("#searchInput"), "_searchInput");
        assert_eq!(sanitize_fragment("button[type=\"submit\"]"), "button_type__submit__");
        assert_eq!(sanitize_fragment("Artificial Intelligence"), "Artificial_Intelligence");
    }

    #[test]
    fn path_is_zero_padded() {
        let path = shot_path(Path::new("/tmp/shots"), 7, "navigate");
        assert_eq!(path, PathBuf::from("/tmp/shots/007-navigate.png"));
    }

    #[test]
    fn path_survives_three_digit_sequences() {
        let path = shot_path(Path::new("/tmp/shots"), 123, "navigate");
        assert_eq!(path, PathBuf::from("/tmp/shots/123-navigate.png"));
    }
}
