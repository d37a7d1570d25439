//! Saved-analysis artifact: a fixed header banner plus the narrative
//! body, written next to wherever the caller chooses. Both
//! presentation surfaces share this format.

use std::path::Path;

/// Banner line atop every saved analysis.
pub const ARTIFACT_HEADER: &str = "MEDICAL REPORT ANALYSIS";

const RULE_WIDTH: usize = 50;

/// Compose the downloadable/saveable plain-text artifact.
pub fn render_artifact(analysis: &str) -> String {
    format!("{ARTIFACT_HEADER}\n{}\n\n{analysis}", "=".repeat(RULE_WIDTH))
}

/// Derive the artifact filename from the analyzed file's base name,
/// e.g. `scans/lab_2026.pdf` → `analysis_lab_2026.pdf.txt`.
pub fn artifact_filename(input: &Path) -> String {
    let base = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    format!("analysis_{base}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn artifact_has_banner_rule_and_body() {
        let artifact = render_artifact("## Findings\nAll clear.");
        let mut lines = artifact.lines();
        assert_eq!(lines.next(), Some(ARTIFACT_HEADER));
        assert_eq!(lines.next(), Some("=".repeat(50).as_str()));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("## Findings"));
    }

    #[test]
    fn filename_derived_from_base_name() {
        let input = PathBuf::from("/home/pat/scans/lab_2026.pdf");
        assert_eq!(artifact_filename(&input), "analysis_lab_2026.pdf.txt");
    }

    #[test]
    fn filename_without_directory_component() {
        assert_eq!(
            artifact_filename(Path::new("slip.jpeg")),
            "analysis_slip.jpeg.txt"
        );
    }

    #[test]
    fn pathless_input_gets_fallback_name() {
        assert_eq!(artifact_filename(Path::new("/")), "analysis_report.txt");
    }
}
