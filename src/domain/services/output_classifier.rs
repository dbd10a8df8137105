//! Compiler output triage
//!
//! pdflatex reports fatal problems inside its output while sometimes still
//! exiting 0, and buries useful messages under box warnings. This module
//! spots the former and condenses the latter.

use std::fmt;

use serde::Serialize;

/// Output fragments meaning the compiler did not produce a usable PDF
pub const FATAL_MARKERS: &[&str] = &["Fatal error", "no output PDF"];

const HBOX_MARKERS: &[&str] = &["Overfull \\hbox", "Underfull \\hbox"];
const VBOX_MARKERS: &[&str] = &["Overfull \\vbox", "Underfull \\vbox"];
const IMAGE_CLASS_PREFIX: &str = "Class acmart";
const IMAGE_WARNING: &str = "A possible image without description on input line";

/// Whether compiler output signals a failed build regardless of exit code
pub fn has_fatal_error(output: &str) -> bool {
    FATAL_MARKERS.iter().any(|marker| output.contains(marker))
}

/// Compiler output with noisy warnings counted instead of listed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedOutput {
    /// Lines kept verbatim, in original order
    pub lines: Vec<String>,
    pub hbox_warnings: usize,
    pub vbox_warnings: usize,
    pub image_warnings: usize,
}

impl ClassifiedOutput {
    /// Summary of the dropped warnings, present when any box warning was seen
    pub fn summary(&self) -> Option<String> {
        if self.hbox_warnings == 0 && self.vbox_warnings == 0 {
            return None;
        }
        Some(format!(
            "{} under/overfull hboxes; {} under/overfull vboxes; {} images without description",
            self.hbox_warnings, self.vbox_warnings, self.image_warnings
        ))
    }

    /// Kept lines followed by the summary line, if any
    pub fn rendered_lines(&self) -> Vec<String> {
        let mut lines = self.lines.clone();
        lines.extend(self.summary());
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.summary().is_none()
    }
}

impl fmt::Display for ClassifiedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered_lines().join("\n"))
    }
}

/// Drop box and image-description warnings from `text`, counting them.
///
/// Blank input yields an empty result.
pub fn classify(text: &str) -> ClassifiedOutput {
    let mut output = ClassifiedOutput::default();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return output;
    }

    for line in trimmed.split('\n') {
        if starts_with_any(line, HBOX_MARKERS) {
            output.hbox_warnings += 1;
        } else if starts_with_any(line, VBOX_MARKERS) {
            output.vbox_warnings += 1;
        } else if line.starts_with(IMAGE_CLASS_PREFIX) && line.contains(IMAGE_WARNING) {
            output.image_warnings += 1;
        } else {
            output.lines.push(line.to_string());
        }
    }

    output
}

fn starts_with_any(line: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| line.starts_with(prefix))
}
