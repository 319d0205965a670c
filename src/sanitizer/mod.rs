pub mod extractor;

pub use extractor::{CandidateCommand, OutputSanitizer, SanitizeError};

/// Phrases that mean the generator produced no usable answer at all.
///
/// Matched case-insensitively against the whole raw response before any
/// extraction happens.
pub const QUOTA_MARKERS: &[&str] = &["quota exceeded", "upgrade", "total code changes"];

/// Phrases that mark a single line as commentary rather than code
pub const FILTERED_LINE_MARKERS: &[&str] = &[
    // Usage/billing footers
    "quota",
    "upgrade",
    "total code",
    // Conversational filler
    "i will",
    "here is",
];

/// Lines starting with this are echoed shell prompts, not content
pub const SHELL_PROMPT_MARKER: char = '$';
