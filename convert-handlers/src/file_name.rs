//! Sanitizing the sender-declared file name before it is shown or used as an upload name.

use doc_convert::Conversion;

/// Stem used when the declared name has none left to show (`.pdf`, `../.docx`).
const FALLBACK_STEM: &str = "document";

/// Keeps only the final path component, drops control characters and trims whitespace.
/// Returns `None` when nothing usable is left (`""`, `"."`, `".."`).
pub fn sanitize_file_name(declared: &str) -> Option<String> {
    let last = declared.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(declared);
    let cleaned: String = last.chars().filter(|c| !c.is_control()).collect();
    let cleaned = cleaned.trim();
    match cleaned {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}

/// Name shown for the source document of `conversion`, derived from the declared name.
///
/// The declared name was already routed as is; this only affects display and the upload name.
/// Falls back to `document.<ext>` when sanitizing leaves no stem in front of the suffix.
pub fn display_file_name(declared: &str, conversion: Conversion) -> String {
    let suffix = conversion.source().suffix();
    match sanitize_file_name(declared) {
        Some(name) if name.strip_suffix(suffix).is_some_and(|stem| !stem.is_empty()) => name,
        _ => format!("{}{}", FALLBACK_STEM, suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(sanitize_file_name("report.pdf").as_deref(), Some("report.pdf"));
        assert_eq!(
            sanitize_file_name("Quarterly report (final).docx").as_deref(),
            Some("Quarterly report (final).docx")
        );
    }

    #[test]
    fn test_path_components_are_stripped() {
        assert_eq!(
            sanitize_file_name("../../etc/passwd.pdf").as_deref(),
            Some("passwd.pdf")
        );
        assert_eq!(
            sanitize_file_name("C:\\Users\\me\\letter.docx").as_deref(),
            Some("letter.docx")
        );
        assert_eq!(sanitize_file_name("/abs/report.pdf").as_deref(), Some("report.pdf"));
    }

    #[test]
    fn test_control_characters_removed() {
        assert_eq!(
            sanitize_file_name("re\nport\u{0}.pdf").as_deref(),
            Some("report.pdf")
        );
    }

    #[test]
    fn test_unusable_names() {
        for name in ["", "   ", ".", "..", "dir/", "a/..", "\n"] {
            assert_eq!(sanitize_file_name(name), None, "{name:?}");
        }
    }

    #[test]
    fn test_display_name_keeps_usable_names() {
        assert_eq!(
            display_file_name("../docs/report.pdf", Conversion::PdfToDocx),
            "report.pdf"
        );
        assert_eq!(
            display_file_name("let\u{7}ter.docx", Conversion::DocxToPdf),
            "letter.docx"
        );
    }

    #[test]
    fn test_display_name_falls_back_without_stem() {
        assert_eq!(display_file_name(".pdf", Conversion::PdfToDocx), "document.pdf");
        assert_eq!(display_file_name("dir/.docx", Conversion::DocxToPdf), "document.docx");
        assert_eq!(display_file_name(" \n.pdf", Conversion::PdfToDocx), "document.pdf");
    }
}
