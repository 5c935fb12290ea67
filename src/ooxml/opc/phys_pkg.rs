//! Physical package writer: the ZIP container under an OPC package.

use crate::ooxml::error::Result;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Physical package writer for creating OPC packages in memory.
///
/// Every entry carries the same fixed timestamp so that identical input
/// produces byte-identical archives.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn options(method: CompressionMethod) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(method)
            .last_modified_time(DateTime::default())
    }

    /// Write a member with Deflate compression.
    ///
    /// # Arguments
    /// * `membername` - ZIP member name (partname without leading slash)
    /// * `blob` - The binary content to write
    pub fn write(&mut self, membername: &str, blob: &[u8]) -> Result<()> {
        self.archive
            .start_file(membername, Self::options(CompressionMethod::Deflated))?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Write a member without compression (stored).
    ///
    /// Used for already-compressed media such as PNG and JPEG screenshots.
    pub fn write_stored(&mut self, membername: &str, blob: &[u8]) -> Result<()> {
        self.archive
            .start_file(membername, Self::options(CompressionMethod::Stored))?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    ///
    /// Consumes the writer and returns the complete ZIP archive.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        writer.write("test.txt", b"Hello, World!").unwrap();
        writer.write_stored("media/raw.bin", &[0x89, 0x50]).unwrap();
        let zip_data = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        archive
            .by_name("test.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[test]
    fn test_output_is_deterministic() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            writer.write("a.xml", b"<a/>").unwrap();
            writer.write("b/c.xml", b"<c/>").unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
