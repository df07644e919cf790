//! Dictionary loading.
//!
//! Word lists are line oriented. Each line contributes the first
//! `word_length` characters as a word, so trailing columns (counts,
//! definitions) are ignored. Lines that begin with the comment prefix are
//! skipped. Files may be plain text or gzip; gzip is recognised by its
//! magic bytes rather than the file extension.

use crate::alphabet::Alphabet;
use crate::error::{LadderError, Result};
use crate::word_set::WordSet;
use flate2::bufread::MultiGzDecoder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// How to turn dictionary lines into words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Number of leading characters of each line that form the word.
    pub word_length: usize,
    /// Lines starting with this character are comments.
    pub comment_prefix: Option<char>,
    /// Lowercase each word before validating it.
    pub lowercase: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            comment_prefix: Some('*'),
            lowercase: false,
        }
    }
}

impl DictionaryConfig {
    /// Default settings for words of the given length.
    pub fn with_length(word_length: usize) -> Self {
        Self {
            word_length,
            ..Self::default()
        }
    }
}

/// The outcome of reading one dictionary.
#[derive(Debug)]
pub struct LoadReport {
    pub words: WordSet,
    /// Lines read, including skipped ones.
    pub lines: usize,
    pub comments: usize,
    /// Lines with fewer characters than the word length.
    pub short_lines: usize,
    /// Lines whose word was already in the set.
    pub duplicates: usize,
}

/// Loads a plain or gzip-compressed dictionary from disk.
pub fn load_dictionary(
    path: impl AsRef<Path>,
    config: &DictionaryConfig,
    alphabet: &Alphabet,
) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LadderError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let compressed = reader
        .fill_buf()
        .map_err(|e| LadderError::io(path, e))?
        .starts_with(&GZIP_MAGIC);
    debug!("Reading {} (gzip: {})", path.display(), compressed);

    let result = if compressed {
        parse_dictionary(BufReader::new(MultiGzDecoder::new(reader)), config, alphabet)
    } else {
        parse_dictionary(reader, config, alphabet)
    };

    let report = result.map_err(|e| match e {
        LadderError::Read(source) => LadderError::io(path, source),
        other => other,
    })?;

    info!(
        "Loaded {} words of length {} from {}",
        report.words.len(),
        config.word_length,
        path.display()
    );
    Ok(report)
}

/// Reads a dictionary from any buffered reader.
pub fn parse_dictionary<R: BufRead>(
    reader: R,
    config: &DictionaryConfig,
    alphabet: &Alphabet,
) -> Result<LoadReport> {
    if config.word_length == 0 {
        return Err(LadderError::ZeroWordLength);
    }

    let mut report = LoadReport {
        words: WordSet::new(alphabet.clone()),
        lines: 0,
        comments: 0,
        short_lines: 0,
        duplicates: 0,
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        report.lines += 1;

        if config
            .comment_prefix
            .is_some_and(|prefix| line.starts_with(prefix))
        {
            report.comments += 1;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let mut word: String = line.chars().take(config.word_length).collect();
        if word.chars().count() < config.word_length {
            report.short_lines += 1;
            continue;
        }
        if config.lowercase {
            word = word.to_lowercase();
        }

        let inserted = report
            .words
            .insert(word)
            .map_err(|e| LadderError::at_line(index + 1, e))?;
        if !inserted {
            report.duplicates += 1;
        }
    }

    debug!(
        "Parsed {} lines: {} words, {} comments, {} short, {} duplicates",
        report.lines,
        report.words.len(),
        report.comments,
        report.short_lines,
        report.duplicates
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};
    use tempfile::tempdir;

    const SAMPLE: &str = "* The Stanford GraphBase word list\n\
                          * comment lines start with a star\n\
                          which 1234\n\
                          there 987\n\
                          their\n\
                          about\n\
                          \n\
                          whic\n\
                          which\n";

    fn parse(text: &str, length: usize) -> Result<LoadReport> {
        parse_dictionary(
            Cursor::new(text),
            &DictionaryConfig::with_length(length),
            &Alphabet::lowercase(),
        )
    }

    #[test]
    fn test_skips_comments_and_truncates() {
        let report = parse(SAMPLE, 5).unwrap();

        assert_eq!(report.words.sorted(), vec!["about", "their", "there", "which"]);
        assert_eq!(report.comments, 2);
        assert_eq!(report.short_lines, 1);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.lines, 9);
    }

    #[test]
    fn test_shorter_word_length_truncates() {
        let report = parse(SAMPLE, 4).unwrap();
        // which/whic collapse, there/their collapse
        assert_eq!(report.words.sorted(), vec!["abou", "thei", "ther", "whic"]);
    }

    #[test]
    fn test_invalid_character_reports_line() {
        let err = parse("cold\nwa-m\n", 4).unwrap_err();
        match err {
            LadderError::InvalidEntry { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, LadderError::InvalidCharacter { ch: '-', .. }));
            }
            other => panic!("expected InvalidEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_lowercase_option() {
        let config = DictionaryConfig {
            word_length: 4,
            lowercase: true,
            ..DictionaryConfig::default()
        };
        let report =
            parse_dictionary(Cursor::new("Cold\nWARM\n"), &config, &Alphabet::lowercase()).unwrap();
        assert_eq!(report.words.sorted(), vec!["cold", "warm"]);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        assert!(matches!(parse("cold\n", 0), Err(LadderError::ZeroWordLength)));
    }

    #[test]
    fn test_crlf_lines() {
        let report = parse("cold\r\nwarm\r\n", 5).unwrap();
        assert!(report.words.is_empty());
        assert_eq!(report.short_lines, 2);

        let report = parse("cold\r\nwarm\r\n", 4).unwrap();
        assert_eq!(report.words.len(), 2);
    }

    #[test]
    fn test_plain_and_gzip_files_match() {
        let dir = tempdir().unwrap();

        let plain_path = dir.path().join("words.txt");
        std::fs::write(&plain_path, SAMPLE).unwrap();

        // Deliberately no .gz extension: detection is by content.
        let gz_path = dir.path().join("words.dat");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        std::fs::write(&gz_path, encoder.finish().unwrap()).unwrap();

        let config = DictionaryConfig::default();
        let alphabet = Alphabet::lowercase();
        let plain = load_dictionary(&plain_path, &config, &alphabet).unwrap();
        let gz = load_dictionary(&gz_path, &config, &alphabet).unwrap();

        assert_eq!(plain.words.sorted(), gz.words.sorted());
        assert_eq!(gz.words.len(), 4);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = load_dictionary(&missing, &DictionaryConfig::default(), &Alphabet::lowercase())
            .unwrap_err();
        match err {
            LadderError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
