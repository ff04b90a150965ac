// Dense blink-count table and its flat binary layout.
//
// Layout: `shape.depths * shape.values` little-endian i64 entries, row-major
// by depth. Entry `(value, depth)` lives at byte offset
// `(depth * shape.values + value) * 8`. No header, no padding.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::LutError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Byte width of one serialized entry.
pub const ENTRY_BYTES: usize = 8;

/// Default value window: stones `0..1000`.
pub const DEFAULT_VALUES: usize = 1000;

/// Default depth range: blinks `0..=75`.
pub const DEFAULT_DEPTHS: usize = 76;

// ---------------------------------------------------------------------------
// TableShape
// ---------------------------------------------------------------------------

/// Dimensions of a blink-count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    /// Number of columns: values `0..values`.
    pub values: usize,
    /// Number of rows: depths `0..depths`.
    pub depths: usize,
}

impl TableShape {
    /// 1000 values by 76 depths.
    pub const DEFAULT: TableShape = TableShape {
        values: DEFAULT_VALUES,
        depths: DEFAULT_DEPTHS,
    };

    pub fn new(values: usize, depths: usize) -> Self {
        Self { values, depths }
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.values * self.depths
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialized size in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * ENTRY_BYTES
    }

    /// Flat index of `(value, depth)`, or `None` outside the table.
    pub fn index(&self, value: u64, depth: usize) -> Option<usize> {
        let value = usize::try_from(value).ok()?;
        if value >= self.values || depth >= self.depths {
            return None;
        }
        Some(depth * self.values + value)
    }
}

impl Default for TableShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// BlinkTable
// ---------------------------------------------------------------------------

/// Precomputed `count(value, depth)` for every value and depth in a [`TableShape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlinkTable {
    shape: TableShape,
    /// Row-major entries, `shape.len()` long.
    data: Vec<i64>,
}

impl BlinkTable {
    /// Wrap already computed entries.
    ///
    /// Returns [`LutError::InvalidTable`] if `data.len() != shape.len()`.
    pub fn from_entries(shape: TableShape, data: Vec<i64>) -> Result<Self, LutError> {
        if data.len() != shape.len() {
            return Err(LutError::InvalidTable(format!(
                "expected {} entries ({}x{}), got {}",
                shape.len(),
                shape.depths,
                shape.values,
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> TableShape {
        self.shape
    }

    /// All entries in row-major order.
    pub fn entries(&self) -> &[i64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Count for `(value, depth)`, or `None` if the pair lies outside the table.
    ///
    /// Values past the window are the caller's job to compute.
    pub fn get(&self, value: u64, depth: usize) -> Option<i64> {
        self.shape.index(value, depth).map(|i| self.data[i])
    }

    /// Like [`get`](Self::get) but reports which coordinate was out of range.
    pub fn lookup(&self, value: u64, depth: usize) -> Result<i64, LutError> {
        if depth >= self.shape.depths {
            return Err(LutError::DepthOutOfRange {
                depth,
                max: self.shape.depths.saturating_sub(1),
            });
        }
        self.get(value, depth).ok_or(LutError::ValueOutOfRange {
            value,
            max: self.shape.values,
        })
    }

    /// One depth level: counts for values `0..shape.values`.
    pub fn row(&self, depth: usize) -> Option<&[i64]> {
        if depth >= self.shape.depths {
            return None;
        }
        let start = depth * self.shape.values;
        Some(&self.data[start..start + self.shape.values])
    }

    // -- Serialization ------------------------------------------------------

    /// Serialize to the flat little-endian layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.shape.byte_len());
        for v in &self.data {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Stream the flat layout into `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<(), LutError> {
        for v in &self.data {
            w.write_all(&v.to_le_bytes())?;
        }
        Ok(())
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LutError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        info!(
            path = %path.display(),
            bytes = self.shape.byte_len(),
            "wrote blink table"
        );
        Ok(())
    }

    // -- Loading ------------------------------------------------------------

    /// Decode a flat blob produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(shape: TableShape, bytes: &[u8]) -> Result<Self, LutError> {
        if bytes.len() != shape.byte_len() {
            return Err(LutError::InvalidTable(format!(
                "expected {} bytes for {}x{} table, got {}",
                shape.byte_len(),
                shape.depths,
                shape.values,
                bytes.len()
            )));
        }
        let mut reader = bytes;
        let mut data = Vec::with_capacity(shape.len());
        for _ in 0..shape.len() {
            data.push(read_i64(&mut reader)?);
        }
        Ok(Self { shape, data })
    }

    /// Open a table file written by [`save`](Self::save).
    ///
    /// The file is memory-mapped and decoded in one pass.
    pub fn open(path: impl AsRef<Path>, shape: TableShape) -> Result<Self, LutError> {
        let path = path.as_ref();
        debug!("opening blink table: {}", path.display());

        let file = File::open(path)?;
        // SAFETY: the mapping lives only for this call and is copied out
        // before returning. Concurrent modification of the file is undefined
        // behaviour, which we accept for a read-once load.
        let mmap = unsafe { memmap2::MmapOptions::new().map(&file)? };
        Self::from_bytes(shape, &mmap)
    }
}

/// Read a little-endian i64.
fn read_i64<R: Read>(r: &mut R) -> Result<i64, LutError> {
    let mut buf = [0u8; ENTRY_BYTES];
    r.read_exact(&mut buf)?;
    Ok(i64::from_le_bytes(buf))
}
