use crate::sanitizer::{FILTERED_LINE_MARKERS, QUOTA_MARKERS, SHELL_PROMPT_MARKER};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

// ```lang\n ... ``` with an optional word-character language tag
static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:\w+)?\r?\n(.*?)```").expect("code block pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("Generator quota exceeded or no code generated")]
    QuotaExhausted,
}

/// Sanitized text proposed for execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateCommand(String);

impl CandidateCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CandidateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns free-form generator output into a candidate command
pub struct OutputSanitizer;

impl OutputSanitizer {
    /// Run the full pipeline: quota pre-check, code block extraction, line filtering.
    ///
    /// An empty candidate is a valid result here; the safety gate rejects it.
    pub fn sanitize(raw: &str) -> Result<CandidateCommand, SanitizeError> {
        Self::check_quota(raw)?;

        let extracted = Self::extract_code_block(raw);
        let filtered = Self::filter_lines(extracted);

        tracing::debug!(
            raw_len = raw.len(),
            candidate_len = filtered.len(),
            "sanitized generator output"
        );

        Ok(CandidateCommand::new(filtered))
    }

    /// Fail fast on empty output or quota/billing notices
    pub fn check_quota(raw: &str) -> Result<(), SanitizeError> {
        let lower = raw.trim().to_lowercase();

        if lower.is_empty() || QUOTA_MARKERS.iter().any(|marker| lower.contains(marker)) {
            return Err(SanitizeError::QuotaExhausted);
        }

        Ok(())
    }

    /// Interior of the last fenced code block, or the whole text when there is none.
    ///
    /// The last block wins: assistants tend to restate an explanation first and
    /// put the refined answer at the end.
    pub fn extract_code_block(text: &str) -> &str {
        match CODE_BLOCK.captures_iter(text).last() {
            Some(captures) => captures.get(1).map_or("", |m| m.as_str()).trim(),
            None => text.trim(),
        }
    }

    /// Drop commentary lines and rejoin the rest
    pub fn filter_lines(text: &str) -> String {
        text.lines()
            .filter(|line| Self::keep_line(line))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    fn keep_line(line: &str) -> bool {
        let normalized = line.trim().to_lowercase();

        !normalized.is_empty()
            && !normalized.starts_with(SHELL_PROMPT_MARKER)
            && !FILTERED_LINE_MARKERS
                .iter()
                .any(|marker| normalized.contains(marker))
    }
}
