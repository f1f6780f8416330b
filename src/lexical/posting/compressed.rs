//! Bit-compressed posting list.
//!
//! Each posting is stored as two consecutive codes in a single [`BitBuffer`]: the gap
//! to the previous document id (the raw id for the first posting) followed by the
//! term frequency. The buffer does not record how many postings it holds, so the
//! count is kept alongside it.

use log::error;

use crate::codec::CodecKind;
use crate::error::{PilumError, Result};
use crate::lexical::posting::{Posting, PostingList, PostingStream, check_append};
use crate::util::bits::BitBuffer;

/// A posting list whose gaps and frequencies are codec-encoded into a bit buffer.
#[derive(Clone, Debug)]
pub struct CompressedInMemoryPostingList {
    buffer: BitBuffer,
    length: usize,
    last_document_id: Option<u64>,
    gap_codec: CodecKind,
    frequency_codec: CodecKind,
}

impl CompressedInMemoryPostingList {
    /// Create an empty list using variable-byte gaps and oneshot frequencies.
    pub fn new() -> Self {
        Self::with_codecs(CodecKind::VariableByte, CodecKind::Oneshot)
    }

    /// Create an empty list with the given gap and frequency codecs.
    pub fn with_codecs(gap_codec: CodecKind, frequency_codec: CodecKind) -> Self {
        CompressedInMemoryPostingList {
            buffer: BitBuffer::new(),
            length: 0,
            last_document_id: None,
            gap_codec,
            frequency_codec,
        }
    }

    /// The encoded bits.
    pub fn buffer(&self) -> &BitBuffer {
        &self.buffer
    }

    /// Codec used for document-id gaps.
    pub fn gap_codec(&self) -> CodecKind {
        self.gap_codec
    }

    /// Codec used for term frequencies.
    pub fn frequency_codec(&self) -> CodecKind {
        self.frequency_codec
    }

    /// Decode every posting, failing on the first malformed code.
    ///
    /// [`PostingList::get_iterator`] stops at a malformed code instead.
    pub fn decode_all(&self) -> Result<Vec<Posting>> {
        let mut cursor = CompressedPostingIterator::new(self);
        let mut postings = Vec::with_capacity(self.length);
        while cursor.remaining > 0 {
            postings.push(cursor.decode_next()?);
            cursor.remaining -= 1;
        }
        Ok(postings)
    }
}

impl Default for CompressedInMemoryPostingList {
    fn default() -> Self {
        Self::new()
    }
}

impl PostingList for CompressedInMemoryPostingList {
    fn append_posting(&mut self, posting: Posting) -> Result<()> {
        check_append(self.last_document_id, &posting)?;

        let gap = match self.last_document_id {
            Some(last) => posting.document_id - last,
            None => posting.document_id,
        };
        // A rejected posting must leave no partial bits behind.
        if gap < self.gap_codec.min_value() {
            return Err(PilumError::invalid_argument(format!(
                "gap {gap} cannot be encoded with the {} codec",
                self.gap_codec.codec().name()
            )));
        }

        self.gap_codec.codec().encode(gap, &mut self.buffer)?;
        self.frequency_codec
            .codec()
            .encode(posting.term_frequency, &mut self.buffer)?;

        self.last_document_id = Some(posting.document_id);
        self.length += 1;
        Ok(())
    }

    fn get_iterator(&self) -> PostingStream<'_> {
        Box::new(CompressedPostingIterator::new(self))
    }

    fn get_length(&self) -> usize {
        self.length
    }

    fn size_in_bits(&self) -> usize {
        self.buffer.len()
    }
}

/// Decoding cursor over a [`CompressedInMemoryPostingList`].
///
/// Each iterator owns its own offset and running document id; the underlying
/// buffer is only read.
#[derive(Debug)]
pub struct CompressedPostingIterator<'a> {
    list: &'a CompressedInMemoryPostingList,
    offset: usize,
    remaining: usize,
    document_id: u64,
}

impl<'a> CompressedPostingIterator<'a> {
    fn new(list: &'a CompressedInMemoryPostingList) -> Self {
        CompressedPostingIterator {
            list,
            offset: 0,
            remaining: list.length,
            document_id: 0,
        }
    }

    fn decode_next(&mut self) -> Result<Posting> {
        let buffer = &self.list.buffer;

        let (gap, read) = self.list.gap_codec.codec().decode(buffer, self.offset)?;
        self.offset += read;
        let (term_frequency, read) = self
            .list
            .frequency_codec
            .codec()
            .decode(buffer, self.offset)?;
        self.offset += read;

        let is_first = self.remaining == self.list.length;
        self.document_id = if is_first {
            gap
        } else {
            self.document_id
                .checked_add(gap)
                .ok_or_else(|| PilumError::out_of_range("document id overflow"))?
        };

        Ok(Posting::new(self.document_id, term_frequency))
    }
}

impl Iterator for CompressedPostingIterator<'_> {
    type Item = Posting;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        match self.decode_next() {
            Ok(posting) => {
                self.remaining -= 1;
                Some(posting)
            }
            Err(e) => {
                error!("corrupt compressed posting list at bit {}: {e}", self.offset);
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
