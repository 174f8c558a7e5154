//! Metadata container assembly
//!
//! Accumulates ROI, overlay and auxiliary records and assembles the two
//! buffers a TIFF writer embeds as private tags: a big-endian byte-count
//! index and the concatenated "IJIJ" metadata stream. Both outputs are
//! recomputed from the queued records on every access.

use log::debug;

use crate::coordinate::Point;
use crate::roi::constants::{container, field_types, tags};
use crate::roi::errors::{RoiError, RoiResult};
use crate::roi::geometry::GeometryKind;
use crate::roi::info::{self, TextEncoding};
use crate::roi::record::{Record, RecordBuilder, RecordOptions};

/// Block type of one queued record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Roi,
    Overlay,
    Labels,
    Info,
    Luts,
    Ranges,
    /// Caller-defined block with its own four byte tag
    Extra([u8; 4]),
}

impl BlockKind {
    /// The four byte tag written in the container's kind headers
    pub fn tag(&self) -> [u8; 4] {
        match self {
            BlockKind::Roi => container::ROI_TAG,
            BlockKind::Overlay => container::OVERLAY_TAG,
            BlockKind::Labels => container::LABELS_TAG,
            BlockKind::Info => container::INFO_TAG,
            BlockKind::Luts => container::LUTS_TAG,
            BlockKind::Ranges => container::RANGES_TAG,
            BlockKind::Extra(tag) => *tag,
        }
    }
}

/// Fixed emission order of the reserved block kinds; extras follow in
/// insertion order
const RESERVED_KIND_ORDER: [BlockKind; 6] = [
    BlockKind::Roi,
    BlockKind::Overlay,
    BlockKind::Labels,
    BlockKind::Info,
    BlockKind::Luts,
    BlockKind::Ranges,
];

/// Reserved kinds that carry a (tag, count) header in the metadata stream.
/// Labels, LUTs and ranges are declared by the format but never populated
/// by this encoder.
const KINDS_WITH_COUNT_HEADER: [BlockKind; 3] =
    [BlockKind::Roi, BlockKind::Overlay, BlockKind::Info];

/// One queued record together with its block kind
#[derive(Debug, Clone)]
struct Block {
    kind: BlockKind,
    record: Record,
}

/// Payload values of one TIFF extra-tag descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagData {
    /// Unsigned 32-bit values
    Longs(Vec<u32>),
    /// Raw bytes
    Bytes(Vec<u8>),
}

/// Extra-tag descriptor for a TIFF writer
///
/// Mirrors the (tag, field type, count, values) shape TIFF directory
/// entries take, so the external writer can consume it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraTag {
    /// TIFF tag identifier
    pub tag: u16,
    /// TIFF field type
    pub field_type: u16,
    /// Number of values
    pub count: u64,
    /// The tag's values
    pub data: TagData,
}

/// Accumulates records and derives the embeddable metadata buffers
///
/// One container serves exactly one encode-and-emit cycle: populate it with
/// `add_*` calls, then read `bytecounts` and `metadata` and hand them to the
/// TIFF writer.
#[derive(Debug, Default)]
pub struct MetadataContainer {
    blocks: Vec<Block>,
}

impl MetadataContainer {
    /// Create an empty container
    pub fn new() -> Self {
        MetadataContainer { blocks: Vec::new() }
    }

    /// Build a ROI record and queue it
    pub fn add_roi(
        &mut self,
        points: &[Point],
        kind: GeometryKind,
        subpixel: bool,
    ) -> RoiResult<()> {
        let record = RecordBuilder::build(
            kind,
            points,
            RecordOptions {
                subpixel,
                stroke_color: false,
            },
        )?;

        debug!("Queued '{}' ROI record: {} bytes", kind.name(), record.len());
        self.blocks.push(Block {
            kind: BlockKind::Roi,
            record,
        });
        Ok(())
    }

    /// Build an overlay record and queue it
    ///
    /// Overlays use the same record format as ROIs plus the fixed white
    /// stroke color.
    pub fn add_overlay(
        &mut self,
        points: &[Point],
        kind: GeometryKind,
        subpixel: bool,
    ) -> RoiResult<()> {
        let record = RecordBuilder::build(
            kind,
            points,
            RecordOptions {
                subpixel,
                stroke_color: true,
            },
        )?;

        debug!(
            "Queued '{}' overlay record: {} bytes",
            kind.name(),
            record.len()
        );
        self.blocks.push(Block {
            kind: BlockKind::Overlay,
            record,
        });
        Ok(())
    }

    /// Encode free text and queue it as an info record
    ///
    /// Empty text is a no-op.
    pub fn add_info(&mut self, text: &str, encoding: TextEncoding) -> RoiResult<()> {
        if text.is_empty() {
            return Ok(());
        }

        let record = Record::from_bytes(info::encode_info_text(text, encoding)?);

        debug!(
            "Queued info record: {} characters, {} encoding, {} bytes",
            text.len(),
            encoding.name(),
            record.len()
        );
        self.blocks.push(Block {
            kind: BlockKind::Info,
            record,
        });
        Ok(())
    }

    /// Labels records are part of the format but not produced by this encoder
    pub fn add_labels(&mut self) -> RoiResult<()> {
        Err(RoiError::NotSupported("label"))
    }

    /// LUT records are part of the format but not produced by this encoder
    pub fn add_luts(&mut self) -> RoiResult<()> {
        Err(RoiError::NotSupported("LUT"))
    }

    /// Range records are part of the format but not produced by this encoder
    pub fn add_ranges(&mut self) -> RoiResult<()> {
        Err(RoiError::NotSupported("display range"))
    }

    /// Queue a caller-defined block under its own four byte tag
    ///
    /// The tag must be exactly 4 bytes and must not collide with a reserved
    /// block tag. An empty payload is a no-op.
    pub fn add_extra_metadata(&mut self, tag: &str, bytes: &[u8]) -> RoiResult<()> {
        if tag.len() != 4 {
            return Err(RoiError::InvalidTagLength(tag.len()));
        }

        let mut tag_bytes = [0u8; 4];
        tag_bytes.copy_from_slice(tag.as_bytes());

        if container::RESERVED_TAGS.contains(&tag_bytes) {
            return Err(RoiError::ReservedTag(tag.to_string()));
        }

        if bytes.is_empty() {
            return Ok(());
        }

        debug!("Queued extra block '{}': {} bytes", tag, bytes.len());
        self.blocks.push(Block {
            kind: BlockKind::Extra(tag_bytes),
            record: Record::from_bytes(bytes.to_vec()),
        });
        Ok(())
    }

    /// Number of queued records of one reserved kind
    pub fn count_of(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.kind == kind).count()
    }

    /// Number of distinct block kinds in the container header
    ///
    /// Each non-empty reserved kind counts once; every extra block counts
    /// individually, even when two extras share a tag.
    pub fn kind_count(&self) -> usize {
        let reserved = RESERVED_KIND_ORDER
            .iter()
            .filter(|kind| self.count_of(**kind) > 0)
            .count();
        reserved + self.extras().count()
    }

    /// Total number of queued records
    pub fn record_count(&self) -> usize {
        self.blocks.len()
    }

    /// The byte-count index: the outer header size followed by the length
    /// of every record, flattened in emission order
    pub fn bytecounts(&self) -> Vec<u32> {
        let mut counts = Vec::with_capacity(self.blocks.len() + 1);
        counts.push((self.kind_count() * 8 + 4) as u32);

        for block in self.blocks_in_emit_order() {
            counts.push(block.record.len() as u32);
        }

        counts
    }

    /// The concatenated metadata stream
    ///
    /// "IJIJ", then a (tag, count) header for each non-empty kind that
    /// supports one, one (tag, 1) header per extra block, then the record
    /// bytes in emission order.
    pub fn metadata(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&container::MAGIC);

        for kind in KINDS_WITH_COUNT_HEADER {
            let count = self.count_of(kind);
            if count > 0 {
                out.extend_from_slice(&kind.tag());
                out.extend_from_slice(&(count as u32).to_be_bytes());
            }
        }

        // Extras are not grouped: two blocks sharing a tag each get their
        // own (tag, 1) header
        for block in self.extras() {
            out.extend_from_slice(&block.kind.tag());
            out.extend_from_slice(&1u32.to_be_bytes());
        }

        for block in self.blocks_in_emit_order() {
            out.extend_from_slice(block.record.bytes());
        }

        out
    }

    /// The two private tag descriptors a TIFF writer embeds
    pub fn tiff_extratags(&self) -> [ExtraTag; 2] {
        let bytecounts = self.bytecounts();
        let metadata = self.metadata();

        [
            ExtraTag {
                tag: tags::IJ_BYTE_COUNTS,
                field_type: field_types::LONG,
                count: bytecounts.len() as u64,
                data: TagData::Longs(bytecounts),
            },
            ExtraTag {
                tag: tags::IJ_METADATA,
                field_type: field_types::BYTE,
                count: metadata.len() as u64,
                data: TagData::Bytes(metadata),
            },
        ]
    }

    /// Queued extra blocks in insertion order
    fn extras(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|b| matches!(b.kind, BlockKind::Extra(_)))
    }

    /// All queued blocks in emission order: the reserved kinds in fixed
    /// order, then extras in insertion order
    fn blocks_in_emit_order(&self) -> impl Iterator<Item = &Block> {
        RESERVED_KIND_ORDER
            .iter()
            .flat_map(move |kind| self.blocks.iter().filter(move |b| b.kind == *kind))
            .chain(self.extras())
    }
}
