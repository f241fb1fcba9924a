//! Text file helpers: read with encoding fallback, write as UTF-8.
//!
//! Reading tries a fixed list of encodings in order and keeps the first one
//! that decodes the whole file without error. Only decoding failures move on
//! to the next candidate; opening or reading the file fails immediately.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use encoding_rs::{Encoding, GBK, WINDOWS_1252};

use crate::error::{ConsoleIoError, Result};

/// Bytes code page 1252 leaves unassigned.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// One entry of the decoding fallback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// Strict UTF-8
    Utf8,
    /// Simplified Chinese double-byte code page
    Gbk,
    /// Code page 1252, rejecting its unassigned bytes
    Cp1252,
    /// Same strict table as `Cp1252`, tried under its other name
    Windows1252,
    /// ISO-8859-1; every byte is a code point
    Latin1,
}

impl TextEncoding {
    /// Candidates in the order they are tried.
    pub const FALLBACK_ORDER: [TextEncoding; 5] = [
        TextEncoding::Utf8,
        TextEncoding::Gbk,
        TextEncoding::Cp1252,
        TextEncoding::Windows1252,
        TextEncoding::Latin1,
    ];

    /// Conventional lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Gbk => "gbk",
            Self::Cp1252 => "cp1252",
            Self::Windows1252 => "windows-1252",
            Self::Latin1 => "latin-1",
        }
    }

    /// Decode all of `bytes`, or `None` if any byte sequence is invalid.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Self::Gbk => decode_strict(GBK, bytes),
            Self::Cp1252 | Self::Windows1252 => {
                if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    None
                } else {
                    decode_strict(WINDOWS_1252, bytes)
                }
            }
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// File content together with the encoding that decoded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Try every candidate in [`TextEncoding::FALLBACK_ORDER`]; first success wins.
pub fn decode_bytes(bytes: &[u8]) -> Option<Decoded> {
    TextEncoding::FALLBACK_ORDER.iter().find_map(|&encoding| {
        let decoded = encoding.decode(bytes);
        log::trace!(
            target: "consoleio::files",
            "decode attempt with {}: {}",
            encoding,
            if decoded.is_some() { "ok" } else { "failed" }
        );
        decoded.map(|text| Decoded { text, encoding })
    })
}

/// Read a text file, reporting the encoding that worked.
///
/// I/O failures propagate as [`ConsoleIoError::Io`]. If no candidate can
/// decode the content, [`ConsoleIoError::Undecodable`] is returned; an empty
/// file is `Ok` with empty text.
pub fn read_file_with_encoding(path: impl AsRef<Path>) -> Result<Decoded> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    match decode_bytes(&bytes) {
        Some(decoded) => {
            log::debug!(
                target: "consoleio::files",
                "read {} ({} bytes, {})",
                path.display(),
                bytes.len(),
                decoded.encoding
            );
            Ok(decoded)
        }
        None => Err(ConsoleIoError::Undecodable {
            path: path.to_path_buf(),
        }),
    }
}

/// Read a text file, trying each candidate encoding in turn.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    read_file_with_encoding(path).map(|decoded| decoded.text)
}

/// Write `content` as UTF-8, appending unless `overwrite` is set.
///
/// The file is created if missing. Returns the number of characters written.
pub fn write_file(path: impl AsRef<Path>, content: &str, overwrite: bool) -> Result<usize> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(!overwrite)
        .truncate(overwrite)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;

    let written = content.chars().count();
    log::debug!(
        target: "consoleio::files",
        "{} {} chars to {}",
        if overwrite { "wrote" } else { "appended" },
        written,
        path.display()
    );
    Ok(written)
}
