//! Package Rendering
//!
//! Text layout of the packaged document: a fixed preamble followed by one
//! banner-wrapped section per found document.

use crate::constants::render::{
    BANNER_CHAR, BANNER_WIDTH, PREAMBLE_BODY, PREAMBLE_HEADING, SECTION_SEPARATOR,
};
use crate::types::DocumentSpec;

/// The `=` rule placed above and below each title
pub fn banner() -> String {
    BANNER_CHAR.to_string().repeat(BANNER_WIDTH)
}

/// Render one document as a section.
///
/// Content is embedded verbatim and always followed by two newlines.
pub fn render_section(spec: &DocumentSpec, content: &str) -> String {
    let rule = banner();
    format!("{rule}\n# {}\n{rule}\n\n{content}\n\n", spec.title)
}

/// Preamble that opens every package
pub fn preamble() -> String {
    format!("{PREAMBLE_HEADING}{PREAMBLE_BODY}")
}

/// Join rendered sections under the preamble
pub fn render_package<S: AsRef<str>>(sections: &[S]) -> String {
    let body = sections
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR);
    preamble() + &body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PRD_DOCUMENTS;

    #[test]
    fn test_banner_width() {
        let rule = banner();
        assert_eq!(rule.len(), 60);
        assert!(rule.chars().all(|c| c == '='));
    }

    #[test]
    fn test_render_section_layout() {
        let section = render_section(&PRD_DOCUMENTS[0], "Hello");
        let rule = "=".repeat(60);
        assert_eq!(
            section,
            format!("{rule}\n# MASTERPLAN\n{rule}\n\nHello\n\n")
        );
    }

    #[test]
    fn test_render_section_keeps_content_verbatim() {
        let content = "line one\n\n  indented\n";
        let section = render_section(&PRD_DOCUMENTS[3], content);
        assert!(section.contains("# APP FLOW, PAGES & ROLES\n"));
        assert!(section.ends_with("  indented\n\n\n"));
    }

    #[test]
    fn test_preamble_text() {
        assert_eq!(
            preamble(),
            "# Complete PRD Package\n\n\
             This file combines all PRD documents for easy reference.\n\
             For Lovable.dev, use the individual files or the Knowledge Base summary.\n\n"
        );
    }

    #[test]
    fn test_render_package_joins_with_newline() {
        let package = render_package(&["A\n\n", "B\n\n"]);
        assert_eq!(package, format!("{}A\n\n\nB\n\n", preamble()));
    }
}
