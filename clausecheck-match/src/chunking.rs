//! Paragraph-boundary document chunking.
//!
//! Contract text is split into bounded-size contiguous segments along
//! paragraph (line) boundaries. The budget is a soft target: a single
//! paragraph longer than `max_chars` becomes its own oversized chunk rather
//! than being split mid-sentence, since downstream embedding truncates
//! internally and callers depend on paragraph integrity.

/// Splits text into chunks of roughly `max_chars` characters along
/// paragraph boundaries.
///
/// Paragraphs are newline-delimited lines with surrounding whitespace
/// trimmed; blank lines are discarded. Consecutive paragraphs are merged
/// into one chunk (joined by a single `\n`) while the combined length stays
/// within the budget.
///
/// # Example
///
/// ```rust,ignore
/// use clausecheck_match::ParagraphChunker;
///
/// let chunker = ParagraphChunker::new(800);
/// let chunks = chunker.chunk("First clause.\n\nSecond clause.");
/// assert_eq!(chunks.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ParagraphChunker {
    max_chars: usize,
}

impl ParagraphChunker {
    /// Create a chunker with the given soft character budget per chunk.
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Return the configured character budget.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Split `text` into ordered chunks.
    ///
    /// Pure function of `(text, max_chars)`: no I/O, no shared state.
    /// Empty or blank-only input yields an empty `Vec`, never an error.
    /// Chunk order follows document order.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut buffer = String::new();

        for paragraph in text.lines().map(str::trim).filter(|p| !p.is_empty()) {
            if buffer.len() + paragraph.len() + 1 > self.max_chars {
                if !buffer.is_empty() {
                    chunks.push(std::mem::take(&mut buffer));
                }
                buffer.push_str(paragraph);
            } else {
                if !buffer.is_empty() {
                    buffer.push('\n');
                }
                buffer.push_str(paragraph);
            }
        }

        if !buffer.is_empty() {
            chunks.push(buffer);
        }

        chunks
    }
}
