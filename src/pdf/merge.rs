//! Merge orchestration: extract keys, sort, read, assemble
//!
//! One merge is a single blocking call with no retained state. The whole
//! operation aborts on the first unreadable input; no partial output is ever
//! returned.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::order::{extract_order_key, sort_entries, OrderedEntry, UnkeyedPlacement};
use crate::pdf::codec::{LopdfCodec, PdfCodec};

/// Options for merging PDFs
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Where files without an ordering key are placed
    pub unkeyed: UnkeyedPlacement,
}

/// One input file: display name plus a resettable byte stream
#[derive(Debug)]
pub struct FileSource<R> {
    /// Display name used for key extraction and error reporting
    pub name: String,
    /// Byte stream; rewound before every read
    pub reader: R,
}

/// Output of a merge: the serialized document plus the resolved file order
#[derive(Debug, Clone)]
pub struct MergeResult {
    /// Serialized merged PDF
    pub bytes: Vec<u8>,
    /// Input entries in merge order, a permutation of the input sequence
    pub order: Vec<OrderedEntry>,
}

/// Merge a batch of file sources into one PDF
///
/// Files are ordered by the key extracted from their names (see
/// [`extract_order_key`]), with ties and keyless files resolved by upload
/// order per [`MergeOptions::unkeyed`]. Each source is rewound before
/// reading, so the same batch can be merged repeatedly.
///
/// Fails on the first input that cannot be parsed as a PDF, naming that
/// input; an empty batch is [`Error::EmptyInput`].
pub fn merge_sources<R, C>(
    codec: &C,
    sources: &mut [FileSource<R>],
    options: &MergeOptions,
) -> Result<MergeResult>
where
    R: Read + Seek,
    C: PdfCodec,
{
    if sources.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut order: Vec<OrderedEntry> = sources
        .iter()
        .enumerate()
        .map(|(original_index, source)| OrderedEntry {
            name: source.name.clone(),
            key: extract_order_key(&source.name),
            original_index,
        })
        .collect();

    sort_entries(&mut order, options.unkeyed);

    let mut documents = Vec::with_capacity(order.len());
    for entry in &order {
        let source = &mut sources[entry.original_index];
        source.reader.seek(SeekFrom::Start(0))?;

        let mut bytes = Vec::new();
        source.reader.read_to_end(&mut bytes)?;

        let document = codec.parse(&bytes).map_err(|e| Error::ParseFailure {
            name: entry.name.clone(),
            source: Box::new(e),
        })?;

        if codec.page_count(&document) == 0 {
            return Err(Error::EmptyPdf(entry.name.clone()));
        }

        documents.push(document);
    }

    let bytes = codec.assemble(documents)?;

    Ok(MergeResult { bytes, order })
}

/// Merge PDF files from disk using the lopdf codec
///
/// Convenience wrapper for path-based callers such as the CLI. The ordering
/// key is extracted from each path's file name.
pub fn merge_files(paths: &[PathBuf], options: &MergeOptions) -> Result<MergeResult> {
    for path in paths {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        sources.push(FileSource {
            name,
            reader: File::open(path)?,
        });
    }

    merge_sources(&LopdfCodec, &mut sources, options)
}
