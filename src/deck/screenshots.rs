//! Screenshot discovery.
//!
//! A screenshot belongs to a slide when its file stem contains that
//! slide's number as a digit token: `4.png`, `Slide_04.jpg` and
//! `slide_05.png` all match. Entries are visited in file-name order so the
//! first match for a slide is stable across platforms.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions recognized as screenshots, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Mapping from 1-based slide number to screenshot path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenshotSet {
    by_slide: BTreeMap<usize, PathBuf>,
}

impl ScreenshotSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `dir` for screenshots of the given slide numbers.
    ///
    /// A missing or unreadable directory yields an empty set.
    pub fn scan(dir: &Path, eligible: &[usize]) -> Self {
        let mut set = Self::new();

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::info!(
                    "screenshot directory {} not usable ({}), continuing without screenshots",
                    dir.display(),
                    e
                );
                return set;
            },
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_image_extension(path))
            .collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let number = digit_tokens(stem)
                .find(|n| eligible.contains(n) && !set.by_slide.contains_key(n));
            match number {
                Some(number) => {
                    log::info!("slide {}: screenshot {}", number, path.display());
                    set.by_slide.insert(number, path);
                },
                None => log::debug!("ignoring {}", path.display()),
            }
        }

        set
    }

    /// Screenshot for a slide number.
    pub fn get(&self, slide_number: usize) -> Option<&Path> {
        self.by_slide.get(&slide_number).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.by_slide.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slide.is_empty()
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Numbers formed by maximal runs of ASCII digits, leading zeros ignored.
fn digit_tokens(stem: &str) -> impl Iterator<Item = usize> + '_ {
    stem.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| {
            let trimmed = run.trim_start_matches('0');
            if trimmed.is_empty() {
                Some(0)
            } else {
                trimmed.parse().ok()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELIGIBLE: [usize; 5] = [4, 5, 6, 7, 8];

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_digit_tokens() {
        assert_eq!(digit_tokens("Slide_04").collect::<Vec<_>>(), vec![4]);
        assert_eq!(digit_tokens("v2-slide-007").collect::<Vec<_>>(), vec![2, 7]);
        assert_eq!(digit_tokens("00").collect::<Vec<_>>(), vec![0]);
        assert_eq!(digit_tokens("cover").count(), 0);
        assert_eq!(digit_tokens("99999999999999999999999999").count(), 0);
    }

    #[test]
    fn test_scan_matches_tokens_and_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "4.png");
        touch(dir.path(), "slide_05.JPG");
        touch(dir.path(), "Slide_06.webp");
        touch(dir.path(), "notes_7.txt");
        touch(dir.path(), "slide_1.png");
        touch(dir.path(), "slide_14.png");

        let set = ScreenshotSet::scan(dir.path(), &ELIGIBLE);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(4), Some(dir.path().join("4.png").as_path()));
        assert_eq!(set.get(5), Some(dir.path().join("slide_05.JPG").as_path()));
        assert!(set.get(6).is_none());
        assert!(set.get(1).is_none());
    }

    #[test]
    fn test_first_match_in_name_order_wins() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Slide_04.jpg");
        touch(dir.path(), "4.png");

        let set = ScreenshotSet::scan(dir.path(), &ELIGIBLE);
        assert_eq!(set.get(4), Some(dir.path().join("4.png").as_path()));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let set = ScreenshotSet::scan(&dir.path().join("nope"), &ELIGIBLE);
        assert!(set.is_empty());
    }

    #[test]
    fn test_file_instead_of_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "4.png");
        let set = ScreenshotSet::scan(&dir.path().join("4.png"), &ELIGIBLE);
        assert!(set.is_empty());
    }
}
