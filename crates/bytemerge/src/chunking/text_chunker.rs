//! # Text Chunker

use core::ops::Range;

use crate::{
    chunking::ChunkerConfig,
    errors::BMResult,
    regex::{MatchRanges, RegexWrapper},
};

/// A chunk of text, by byte range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChunkRef {
    /// A range matched by the split pattern.
    Match(Range<usize>),

    /// A range the split pattern did not cover.
    Gap(Range<usize>),
}

impl ChunkRef {
    /// The byte range of the chunk.
    pub fn range(&self) -> Range<usize> {
        match self {
            Self::Match(range) | Self::Gap(range) => range.clone(),
        }
    }

    /// Slice the chunk out of the source text.
    pub fn as_str<'h>(
        &self,
        text: &'h str,
    ) -> &'h str {
        &text[self.range()]
    }
}

impl From<ChunkRef> for Range<usize> {
    fn from(chunk: ChunkRef) -> Self {
        match chunk {
            ChunkRef::Match(range) | ChunkRef::Gap(range) => range,
        }
    }
}

/// Splits text into an ordered, gap-free partition of chunks.
///
/// Ranges the pattern does not match are yielded as [`ChunkRef::Gap`]
/// so the chunks always cover the whole input.
#[derive(Debug, Clone)]
pub struct TextChunker {
    regex: RegexWrapper,
}

impl TextChunker {
    /// Compile a chunker from a configuration.
    pub fn from_config(config: &ChunkerConfig) -> BMResult<Self> {
        let regex = config.pattern().compile()?;
        log::debug!("chunk pattern compiled with {}", regex.engine());
        Ok(Self::init(regex))
    }

    /// Wrap an already compiled regex.
    pub fn init(regex: RegexWrapper) -> Self {
        Self { regex }
    }

    /// Get the split regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }

    /// Lazily iterate the chunks of `text`.
    pub fn chunks<'r, 'h>(
        &'r self,
        text: &'h str,
    ) -> Chunks<'r, 'h> {
        Chunks {
            len: text.len(),
            matches: self.regex.find_iter(text),
            last: 0,
            pending: None,
            done: false,
        }
    }

    /// Split text into chunk references.
    pub fn split_chunks(
        &self,
        text: &str,
    ) -> BMResult<Vec<ChunkRef>> {
        self.chunks(text).collect()
    }

    /// Split text into chunk string slices.
    pub fn split_strs<'h>(
        &self,
        text: &'h str,
    ) -> BMResult<Vec<&'h str>> {
        self.chunks(text)
            .map(|chunk| chunk.map(|c| c.as_str(text)))
            .collect()
    }
}

/// Lazy chunk iterator for [`TextChunker::chunks`].
///
/// Stops after the first pattern error.
pub struct Chunks<'r, 'h> {
    len: usize,
    matches: MatchRanges<'r, 'h>,
    last: usize,
    pending: Option<Range<usize>>,
    done: bool,
}

impl Iterator for Chunks<'_, '_> {
    type Item = BMResult<ChunkRef>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(range) = self.pending.take() {
            self.last = range.end;
            return Some(Ok(ChunkRef::Match(range)));
        }

        while !self.done {
            match self.matches.next() {
                // Empty matches cover nothing.
                Some(Ok(range)) if range.is_empty() => continue,
                Some(Ok(range)) => {
                    if self.last < range.start {
                        let gap = self.last..range.start;
                        log::debug!("chunk pattern left a gap at {gap:?}");
                        self.pending = Some(range);
                        return Some(Ok(ChunkRef::Gap(gap)));
                    }
                    self.last = range.end;
                    return Some(Ok(ChunkRef::Match(range)));
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
                None => {
                    self.done = true;
                    if self.last < self.len {
                        let gap = self.last..self.len;
                        log::debug!("chunk pattern left a trailing gap at {gap:?}");
                        self.last = self.len;
                        return Some(Ok(ChunkRef::Gap(gap)));
                    }
                }
            }
        }
        None
    }
}
