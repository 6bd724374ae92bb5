//! Test fixtures and constants.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Header written by the tone detector
pub const DETECTOR_HEADER: &str =
    "file,image type,face id,dominant 1,percent 1,dominant 2,percent 2,skin tone,tone label,accuracy(0-100)";

/// Anchor colors from the detector's default palette
pub mod tones {
    /// Anchor 0, Fitzpatrick 6
    pub const DARKEST: &str = "#373028";
    /// Anchor 2, Fitzpatrick 5
    pub const DARK: &str = "#513B2E";
    /// Anchor 5, Fitzpatrick 3
    pub const MEDIUM: &str = "#9D7A54";
    /// Anchor 10, Fitzpatrick 1
    pub const LIGHTEST: &str = "#FBF2F3";
    /// Not in the palette
    pub const UNKNOWN: &str = "#123456";
    /// Not a hex color
    pub const MALFORMED: &str = "#zz0000";
}

/// One detector row without dominant colors
pub fn detector_row(file: &str, tone: &str, accuracy: f64) -> String {
    format!("{file},color,1,,,,,{tone},CA,{accuracy}")
}

/// One detector row with two dominant colors
pub fn detector_row_with_dominants(
    file: &str,
    tone: &str,
    accuracy: f64,
    dominants: [(&str, f64); 2],
) -> String {
    format!(
        "{file},color,1,{},{},{},{},{tone},CA,{accuracy}",
        dominants[0].0, dominants[0].1, dominants[1].0, dominants[1].1
    )
}

/// Full detector CSV from rows
pub fn detector_csv(rows: &[String]) -> String {
    let mut csv = String::from(DETECTOR_HEADER);
    csv.push('\n');
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}

/// A temp directory holding one file with the given content
pub struct TempInput {
    pub dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl TempInput {
    pub fn new(name: &str, content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("Should create input file");
        file.write_all(content.as_bytes())
            .expect("Should write input file");
        Self { dir, path }
    }

    /// A sibling path for output files
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
