//! Gating behavior of the reader and writer state machines.

use fgbfile::packed_r_tree::{calc_extent, hilbert_sort, Bbox, NodeItem, PackedRTree};
use fgbfile::*;
use std::io::Cursor;

fn build_header(features_count: u64, index_node_size: u16) -> HeaderBuf {
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
    HeaderBuf::new(fbb.finished_data().to_vec()).unwrap()
}

fn build_point(x: f64, y: f64) -> FeatureBuf {
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
    FeatureBuf::new(fbb.finished_data().to_vec()).unwrap()
}

fn indexed_file() -> Vec<u8> {
    let header = build_header(2, 16);
    let features = vec![build_point(0.0, 0.0), build_point(5.0, 5.0)];
    let mut writer = FileWriter::new(Vec::new());
    writer.write_header(&header).unwrap();
    writer.write_index_data(&features).unwrap();
    writer.close().unwrap();
    writer.into_inner()
}

#[test]
fn reader_rejects_operations_before_header() {
    let bytes = indexed_file();
    let mut reader = FileReader::new_seekable(Cursor::new(&bytes));
    assert!(matches!(reader.index(), Err(Error::State(_))));
    assert!(matches!(
        reader.index_search(&Bbox::new(0.0, 0.0, 1.0, 1.0)),
        Err(Error::State(_))
    ));
    assert!(matches!(reader.data_rem(), Err(Error::State(_))));
    assert!(matches!(reader.rewind(), Err(Error::State(_))));
}

#[test]
fn reader_rejects_header_twice() {
    let bytes = indexed_file();
    let mut reader = FileReader::new_seekable(Cursor::new(&bytes));
    reader.header().unwrap();
    assert!(matches!(reader.header(), Err(Error::State(_))));
}

#[test]
fn reader_rejects_index_after_data() {
    let bytes = indexed_file();
    let mut reader = FileReader::new_seekable(Cursor::new(&bytes));
    reader.header().unwrap();
    reader.data_rem().unwrap();
    assert!(matches!(reader.index(), Err(Error::State(_))));
}

#[test]
fn reader_rewind_requires_seekable_past_header() {
    let bytes = indexed_file();
    let mut reader = FileReader::new(&bytes[..]);
    reader.header().unwrap();
    // Still directly after the header: rewind is a no-op reset.
    reader.rewind().unwrap();
    reader.data_rem().unwrap();
    // Past the header on a non-seekable stream: refused.
    assert!(matches!(reader.rewind(), Err(Error::State(_))));
}

#[test]
fn reader_close_latches() {
    let bytes = indexed_file();
    let mut reader = FileReader::new_seekable(Cursor::new(&bytes));
    reader.header().unwrap();
    reader.close().unwrap();
    assert!(matches!(reader.close(), Err(Error::Closed)));
    assert!(matches!(reader.data_rem(), Err(Error::Closed)));
    assert!(matches!(reader.rewind(), Err(Error::Closed)));
}

#[test]
fn reader_rejects_bad_magic() {
    let mut bytes = indexed_file();
    bytes[1] = b'x';
    let mut reader = FileReader::new_seekable(Cursor::new(&bytes));
    assert!(matches!(reader.header(), Err(Error::InvalidMagic)));
    // The failure latches.
    assert!(matches!(reader.data_rem(), Err(Error::InvalidMagic)));
}

#[test]
fn reader_rejects_unsupported_version() {
    let mut bytes = indexed_file();
    bytes[3] = 2;
    let mut reader = FileReader::new_seekable(Cursor::new(&bytes));
    assert!(matches!(
        reader.header(),
        Err(Error::UnsupportedVersion(2))
    ));
}

#[test]
fn reader_rejects_header_size_out_of_bounds() {
    let mut bytes = indexed_file();
    // Corrupt the header length prefix to an oversized value.
    bytes[8..12].copy_from_slice(&(64 * 1024 * 1024u32).to_le_bytes());
    let mut reader = FileReader::new_seekable(Cursor::new(&bytes));
    assert!(matches!(reader.header(), Err(Error::HeaderSize(_))));
}

#[test]
fn reader_rejects_node_size_one() {
    let header = build_header(1, 1);
    let mut writer = FileWriter::new(Vec::new());
    assert!(matches!(
        writer.write_header(&header),
        Err(Error::NodeSizeOne)
    ));

    // Force such a file into existence to exercise the read side too.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&MAGIC_BYTES);
    bytes.extend_from_slice(header.as_bytes());
    let mut reader = FileReader::new_seekable(Cursor::new(&bytes));
    assert!(matches!(reader.header(), Err(Error::NodeSizeOne)));
}

#[test]
fn writer_rejects_index_with_unknown_feature_count() {
    // An index cannot be sized for an unknown feature count, so the
    // combination is refused up front instead of failing later.
    let header = build_header(0, 16);
    let mut writer = FileWriter::new(Vec::new());
    assert!(matches!(
        writer.write_header(&header),
        Err(Error::Format(_))
    ));
}

#[test]
fn writer_rejects_data_when_index_expected() {
    let header = build_header(2, 16);
    let mut writer = FileWriter::new(Vec::new());
    writer.write_header(&header).unwrap();
    assert!(matches!(
        writer.write_data(&build_point(0.0, 0.0)),
        Err(Error::State(_))
    ));
}

#[test]
fn writer_rejects_mismatched_index_and_recovers() {
    let header = build_header(2, 16);
    let mut writer = FileWriter::new(Vec::new());
    writer.write_header(&header).unwrap();

    // Tree with the wrong ref count.
    let refs = vec![NodeItem::new(0.0, 0.0, 1.0, 1.0)];
    let wrong = PackedRTree::build(&refs, 16).unwrap();
    assert!(matches!(
        writer.write_index(&wrong),
        Err(Error::IndexMismatch(_))
    ));

    // Tree with the wrong node size.
    let refs = vec![
        NodeItem::new(0.0, 0.0, 1.0, 1.0),
        NodeItem::new(2.0, 2.0, 3.0, 3.0),
    ];
    let wrong = PackedRTree::build(&refs, 4).unwrap();
    assert!(matches!(
        writer.write_index(&wrong),
        Err(Error::IndexMismatch(_))
    ));

    // The writer recovered to the post-header state; a matching index
    // is accepted.
    let mut refs = vec![
        NodeItem {
            bbox: Bbox::new(0.0, 0.0, 1.0, 1.0),
            offset: 0,
        },
        NodeItem {
            bbox: Bbox::new(2.0, 2.0, 3.0, 3.0),
            offset: 64,
        },
    ];
    let extent = calc_extent(&refs);
    hilbert_sort(&mut refs, &extent);
    let index = PackedRTree::build(&refs, 16).unwrap();
    writer.write_index(&index).unwrap();
}

#[test]
fn writer_rejects_features_past_declared_count() {
    let header = build_header(1, 0);
    let mut writer = FileWriter::new(Vec::new());
    writer.write_header(&header).unwrap();
    writer.write_data(&build_point(0.0, 0.0)).unwrap();
    assert!(matches!(
        writer.write_data(&build_point(1.0, 1.0)),
        Err(Error::State(_))
    ));
}

#[test]
fn writer_close_reports_truncation() {
    let header = build_header(2, 0);
    let mut writer = FileWriter::new(Vec::new());
    writer.write_header(&header).unwrap();
    writer.write_data(&build_point(0.0, 0.0)).unwrap();
    assert!(matches!(
        writer.close(),
        Err(Error::Truncated {
            written: 1,
            declared: 2
        })
    ));
}

#[test]
fn writer_rejects_header_twice() {
    let header = build_header(0, 0);
    let mut writer = FileWriter::new(Vec::new());
    writer.write_header(&header).unwrap();
    assert!(matches!(writer.write_header(&header), Err(Error::State(_))));
}

#[test]
fn writer_rejects_index_when_none_declared() {
    let header = build_header(1, 0);
    let mut writer = FileWriter::new(Vec::new());
    writer.write_header(&header).unwrap();
    let refs = vec![NodeItem::new(0.0, 0.0, 1.0, 1.0)];
    let index = PackedRTree::build(&refs, 16).unwrap();
    assert!(matches!(writer.write_index(&index), Err(Error::State(_))));
}

#[test]
fn writer_close_latches() {
    let header = build_header(0, 0);
    let mut writer = FileWriter::new(Vec::new());
    writer.write_header(&header).unwrap();
    writer.close().unwrap();
    assert!(matches!(writer.close(), Err(Error::Closed)));
    assert!(matches!(
        writer.write_data(&build_point(0.0, 0.0)),
        Err(Error::Closed)
    ));
}

#[test]
fn file_backed_roundtrip() {
    use std::io::{BufReader, BufWriter, Seek, SeekFrom, Write};

    let header = build_header(2, 16);
    let features = vec![build_point(1.0, 1.0), build_point(9.0, 9.0)];

    let mut file = tempfile::tempfile().unwrap();
    {
        let mut out = BufWriter::new(&mut file);
        {
            let mut writer = FileWriter::new(&mut out);
            writer.write_header(&header).unwrap();
            writer.write_index_data(&features).unwrap();
            writer.close().unwrap();
        }
        out.flush().unwrap();
    }
    file.seek(SeekFrom::Start(0)).unwrap();

    let mut reader = FileReader::new_seekable(BufReader::new(&mut file));
    reader.header().unwrap();
    let found = reader
        .index_search(&Bbox::new(0.0, 0.0, 2.0, 2.0))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].bounds(), Bbox::new(1.0, 1.0, 1.0, 1.0));
}
