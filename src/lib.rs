//! Reader and writer for the [FlatGeobuf](https://flatgeobuf.org/) binary
//! geospatial format.
//!
//! A FlatGeobuf file is a magic number, a size-prefixed header table, an
//! optional [packed Hilbert R-Tree](packed_r_tree) index, and a run of
//! size-prefixed feature tables. [`FileReader`] and [`FileWriter`] walk
//! those sections as strict state machines; the index can be searched
//! straight off a seekable stream without ever materializing it.
//!
//! ## Writing and reading a file
//!
//! ```
//! use fgbfile::*;
//! use std::io::Cursor;
//!
//! # fn run() -> fgbfile::Result<()> {
//! // Build the header table: one point feature, no index.
//! let mut fbb = flatbuffers::FlatBufferBuilder::new();
//! let name = fbb.create_string("points");
//! let header = Header::create(
//!     &mut fbb,
//!     &HeaderArgs {
//!         name: Some(name),
//!         geometry_type: GeometryType::Point,
//!         features_count: 1,
//!         index_node_size: 0,
//!         ..Default::default()
//!     },
//! );
//! fbb.finish_size_prefixed(header, None);
//! let header = HeaderBuf::new(fbb.finished_data().to_vec())?;
//!
//! // Build one feature table.
//! let mut fbb = flatbuffers::FlatBufferBuilder::new();
//! let xy = fbb.create_vector(&[11.2, 48.1]);
//! let geometry = Geometry::create(
//!     &mut fbb,
//!     &GeometryArgs {
//!         xy: Some(xy),
//!         type_: GeometryType::Point,
//!         ..Default::default()
//!     },
//! );
//! let feature = Feature::create(
//!     &mut fbb,
//!     &FeatureArgs {
//!         geometry: Some(geometry),
//!         ..Default::default()
//!     },
//! );
//! fbb.finish_size_prefixed(feature, None);
//! let feature = FeatureBuf::new(fbb.finished_data().to_vec())?;
//!
//! let mut writer = FileWriter::new(Vec::new());
//! writer.write_header(&header)?;
//! writer.write_data(&feature)?;
//! writer.close()?;
//!
//! let mut reader = FileReader::new_seekable(Cursor::new(writer.into_inner()));
//! let header = reader.header()?;
//! assert_eq!(header.header().features_count(), 1);
//! let features = reader.data_rem()?;
//! assert_eq!(features.len(), 1);
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

mod error;
#[allow(unused_imports, non_snake_case)]
#[cfg_attr(rustfmt, rustfmt_skip)]
mod feature_generated;
mod file_reader;
mod file_writer;
#[allow(unused_imports, non_snake_case)]
#[cfg_attr(rustfmt, rustfmt_skip)]
mod header_generated;
pub mod packed_r_tree;
mod properties;
mod state;
mod table;

pub use error::{Error, Result};
pub use feature_generated::*;
pub use file_reader::*;
pub use file_writer::*;
pub use header_generated::*;
pub use properties::*;
pub use table::*;

use crate::error::err_io;
use std::io::Read;

/// Specification major version written by this crate.
pub const VERSION: u8 = 3;
/// Minimum specification major version this crate can read.
pub const MIN_SPEC_MAJOR_VERSION: u8 = 3;
/// Maximum specification major version this crate can read.
pub const MAX_SPEC_MAJOR_VERSION: u8 = 3;

/// The FlatGeobuf magic number. Byte 3 is the specification major
/// version written by this crate and byte 7 the patch version.
pub const MAGIC_BYTES: [u8; 8] = [b'f', b'g', b'b', VERSION, b'f', b'g', b'b', 1];

/// Ceiling on the header table size. Not imposed by the format itself;
/// it bounds allocations caused by corrupted or malicious length
/// prefixes.
pub(crate) const HEADER_MAX_BUFFER_SIZE: usize = 32 * 1024 * 1024;

/// A version of the FlatGeobuf specification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpecVersion {
    pub major: u8,
    pub patch: u8,
}

/// Reads the 8-byte magic number from a stream and returns the spec
/// version it carries. Only the signature bytes are validated; callers
/// decide which versions they accept. Consumes exactly 8 bytes on
/// success.
pub fn read_magic<R: Read>(reader: &mut R) -> Result<SpecVersion> {
    let mut magic = [0u8; 8];
    reader
        .read_exact(&mut magic)
        .map_err(err_io("failed to read magic number"))?;
    parse_magic(&magic)
}

pub(crate) fn parse_magic(magic: &[u8; 8]) -> Result<SpecVersion> {
    if magic[0..3] == MAGIC_BYTES[0..3] && magic[4..7] == MAGIC_BYTES[4..7] {
        Ok(SpecVersion {
            major: magic[3],
            patch: magic[7],
        })
    } else {
        Err(Error::InvalidMagic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_magic_accepts_any_version_byte() {
        let mut magic = MAGIC_BYTES;
        magic[3] = 2;
        magic[7] = 5;
        let version = read_magic(&mut &magic[..]).unwrap();
        assert_eq!(version, SpecVersion { major: 2, patch: 5 });
    }

    #[test]
    fn read_magic_rejects_bad_signature() {
        let magic = *b"fgx\x03fgb\x00";
        assert!(matches!(
            read_magic(&mut &magic[..]),
            Err(Error::InvalidMagic)
        ));
    }

    #[test]
    fn read_magic_short_stream() {
        let magic = [b'f', b'g'];
        assert!(read_magic(&mut &magic[..]).is_err());
    }
}
