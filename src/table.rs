//! Owned buffers holding size-prefixed FlatBuffers root tables.
//!
//! The file writer consumes these and the file reader produces them. The
//! size-prefixed-at-offset-zero constraint is what makes a table's byte
//! length knowable, so it can be copied to and from a stream verbatim.

use crate::error::Result;
use crate::feature_generated::{
    size_prefixed_root_as_feature, size_prefixed_root_as_feature_unchecked, Feature, Geometry,
};
use crate::header_generated::{
    size_prefixed_root_as_header, size_prefixed_root_as_header_unchecked, Header,
};
use crate::packed_r_tree::Bbox;
use byteorder::{ByteOrder, LittleEndian};

/// Byte length of the `u32` size prefix in front of every table.
pub(crate) const SIZE_PREFIX_LEN: usize = 4;

/// Owned, verified, size-prefixed header table.
#[derive(Clone, Debug)]
pub struct HeaderBuf {
    buf: Vec<u8>,
}

impl HeaderBuf {
    /// Takes ownership of a buffer containing a size-prefixed root header
    /// table at offset 0, verifying it once. All later accesses skip
    /// verification.
    pub fn new(buf: Vec<u8>) -> Result<HeaderBuf> {
        size_prefixed_root_as_header(&buf)?;
        Ok(HeaderBuf { buf })
    }

    /// Schema-level view of the header table.
    pub fn header(&self) -> Header {
        // SAFETY: the buffer was verified in new().
        unsafe { size_prefixed_root_as_header_unchecked(&self.buf) }
    }

    /// The size-prefixed table bytes, exactly as stored in a file.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Byte length of the table payload, excluding the size prefix.
    pub fn payload_len(&self) -> u32 {
        LittleEndian::read_u32(&self.buf[..SIZE_PREFIX_LEN])
    }
}

/// Owned, verified, size-prefixed feature table.
///
/// The `Default` value is an empty placeholder so callers can allocate
/// `&mut [FeatureBuf]` slices for [`crate::FileReader::data`]; accessing
/// the feature of a placeholder panics.
#[derive(Clone, Debug, Default)]
pub struct FeatureBuf {
    buf: Vec<u8>,
}

impl FeatureBuf {
    /// Takes ownership of a buffer containing a size-prefixed root
    /// feature table at offset 0, verifying it once.
    pub fn new(buf: Vec<u8>) -> Result<FeatureBuf> {
        size_prefixed_root_as_feature(&buf)?;
        Ok(FeatureBuf { buf })
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Schema-level view of the feature table.
    pub fn feature(&self) -> Feature {
        assert!(!self.is_empty(), "empty feature buffer");
        // SAFETY: the buffer was verified in new().
        unsafe { size_prefixed_root_as_feature_unchecked(&self.buf) }
    }

    /// The size-prefixed table bytes, exactly as stored in a file.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Byte length of the table payload, excluding the size prefix.
    pub fn payload_len(&self) -> u32 {
        LittleEndian::read_u32(&self.buf[..SIZE_PREFIX_LEN])
    }

    /// Bounding box of the feature geometry, computed over the XY vector
    /// and all nested parts. Features without geometry yield the empty
    /// box.
    pub fn bounds(&self) -> Bbox {
        let mut bbox = Bbox::EMPTY;
        if let Some(geometry) = self.feature().geometry() {
            expand_geometry(&mut bbox, &geometry);
        }
        bbox
    }
}

fn expand_geometry(bbox: &mut Bbox, geometry: &Geometry) {
    if let Some(xy) = geometry.xy() {
        let mut i = 0;
        while i + 1 < xy.len() {
            bbox.expand_xy(xy.get(i), xy.get(i + 1));
            i += 2;
        }
    }
    if let Some(parts) = geometry.parts() {
        for part in parts {
            expand_geometry(bbox, &part);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature_generated::{Feature, FeatureArgs, Geometry, GeometryArgs};
    use crate::header_generated::{GeometryType, Header, HeaderArgs};

    fn build_header(features_count: u64, index_node_size: u16) -> Vec<u8> {
        let mut fbb = flatbuffers::FlatBufferBuilder::new();
        let name = fbb.create_string("test");
        let header = Header::create(
            &mut fbb,
            &HeaderArgs {
                name: Some(name),
                geometry_type: GeometryType::Point,
                features_count,
                index_node_size,
                ..Default::default()
            },
        );
        fbb.finish_size_prefixed(header, None);
        fbb.finished_data().to_vec()
    }

    fn build_point_feature(x: f64, y: f64) -> Vec<u8> {
        let mut fbb = flatbuffers::FlatBufferBuilder::new();
        let xy = fbb.create_vector(&[x, y]);
        let geometry = Geometry::create(
            &mut fbb,
            &GeometryArgs {
                xy: Some(xy),
                type_: GeometryType::Point,
                ..Default::default()
            },
        );
        let feature = Feature::create(
            &mut fbb,
            &FeatureArgs {
                geometry: Some(geometry),
                ..Default::default()
            },
        );
        fbb.finish_size_prefixed(feature, None);
        fbb.finished_data().to_vec()
    }

    #[test]
    fn header_buf_roundtrip() {
        let bytes = build_header(42, 16);
        let buf = HeaderBuf::new(bytes.clone()).unwrap();
        assert_eq!(buf.as_bytes(), &bytes[..]);
        assert_eq!(buf.payload_len() as usize, bytes.len() - SIZE_PREFIX_LEN);
        assert_eq!(buf.header().features_count(), 42);
        assert_eq!(buf.header().index_node_size(), 16);
        assert_eq!(buf.header().name(), Some("test"));
    }

    #[test]
    fn header_buf_rejects_garbage() {
        assert!(HeaderBuf::new(vec![1, 2, 3]).is_err());
        assert!(HeaderBuf::new(vec![0xFF; 64]).is_err());
    }

    #[test]
    fn feature_bounds_from_xy() {
        let buf = FeatureBuf::new(build_point_feature(3.5, -2.0)).unwrap();
        assert_eq!(buf.bounds(), Bbox::new(3.5, -2.0, 3.5, -2.0));
    }

    #[test]
    fn feature_bounds_recurses_into_parts() {
        let mut fbb = flatbuffers::FlatBufferBuilder::new();
        let xy_a = fbb.create_vector(&[0.0, 0.0, 1.0, 1.0]);
        let part_a = Geometry::create(
            &mut fbb,
            &GeometryArgs {
                xy: Some(xy_a),
                type_: GeometryType::LineString,
                ..Default::default()
            },
        );
        let xy_b = fbb.create_vector(&[5.0, -3.0]);
        let part_b = Geometry::create(
            &mut fbb,
            &GeometryArgs {
                xy: Some(xy_b),
                type_: GeometryType::Point,
                ..Default::default()
            },
        );
        let parts = fbb.create_vector(&[part_a, part_b]);
        let geometry = Geometry::create(
            &mut fbb,
            &GeometryArgs {
                parts: Some(parts),
                type_: GeometryType::GeometryCollection,
                ..Default::default()
            },
        );
        let feature = Feature::create(
            &mut fbb,
            &FeatureArgs {
                geometry: Some(geometry),
                ..Default::default()
            },
        );
        fbb.finish_size_prefixed(feature, None);
        let buf = FeatureBuf::new(fbb.finished_data().to_vec()).unwrap();
        assert_eq!(buf.bounds(), Bbox::new(0.0, -3.0, 5.0, 1.0));
    }

    #[test]
    fn feature_without_geometry_has_empty_bounds() {
        let mut fbb = flatbuffers::FlatBufferBuilder::new();
        let feature = Feature::create(&mut fbb, &FeatureArgs::default());
        fbb.finish_size_prefixed(feature, None);
        let buf = FeatureBuf::new(fbb.finished_data().to_vec()).unwrap();
        assert_eq!(buf.bounds(), Bbox::EMPTY);
    }
}
