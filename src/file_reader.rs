//! Lazy, one-pass FlatGeobuf file reader.
//!
//! [`FileReader`] walks the three file sections (header, optional index,
//! feature data) in order, gating every operation on the current state.
//! On a seekable stream it can additionally search the index without
//! materializing it and rewind to just after the header; on a plain
//! `Read` stream it falls back to draining and caching.

use crate::error::{Error, Result};
use crate::packed_r_tree::{Bbox, PackedRTree, SearchResultItem};
use crate::state::{State, Stateful};
use crate::table::{FeatureBuf, HeaderBuf, SIZE_PREFIX_LEN};
use crate::{parse_magic, SpecVersion};
use crate::{HEADER_MAX_BUFFER_SIZE, MAX_SPEC_MAJOR_VERSION, MIN_SPEC_MAJOR_VERSION};
use log::debug;
use std::io::{self, Read, Seek, SeekFrom};

type SeekFn<R> = fn(&mut R, SeekFrom) -> io::Result<u64>;

/// Adapts a stream known to be seekable back into `Read + Seek` for the
/// streaming index search.
struct SeekProxy<'a, R: Read> {
    inner: &'a mut R,
    seek_fn: SeekFn<R>,
}

impl<R: Read> Read for SeekProxy<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> Seek for SeekProxy<'_, R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        (self.seek_fn)(self.inner, pos)
    }
}

/// FlatGeobuf file reader.
///
/// Construct with [`FileReader::new`] for any `Read` stream, or
/// [`FileReader::new_seekable`] to unlock streaming index search and
/// [`FileReader::rewind`]. The reader owns the stream for its lifetime;
/// dropping the reader drops (and thereby closes) the stream.
pub struct FileReader<R: Read> {
    state: Stateful,
    stream: R,
    seek_fn: Option<SeekFn<R>>,
    version: Option<SpecVersion>,
    /// Feature count declared by the header; 0 means unknown.
    num_features: usize,
    node_size: u16,
    /// Absolute offset of the index section start; meaningful only on
    /// seekable streams.
    index_pos: u64,
    /// Absolute offset of the data section start; meaningful only on
    /// seekable streams.
    data_pos: u64,
    /// Index cached by index() or a forced cache-and-search.
    index: Option<PackedRTree>,
    /// Absolute position to seek to before the next raw stream access.
    /// rewind() is lazy: it only sets this.
    pending_seek: Option<u64>,
    /// Number of features consumed from the data section.
    feature_index: usize,
    /// Byte offset of the read cursor within the data section.
    feature_offset: u64,
}

impl<R: Read> FileReader<R> {
    /// Reader over a non-seekable stream. Index searches force the index
    /// into memory and section skips drain the stream.
    pub fn new(stream: R) -> FileReader<R> {
        FileReader::with_seek(stream, None)
    }

    fn with_seek(stream: R, seek_fn: Option<SeekFn<R>>) -> FileReader<R> {
        FileReader {
            state: Stateful::new(),
            stream,
            seek_fn,
            version: None,
            num_features: 0,
            node_size: 0,
            index_pos: 0,
            data_pos: 0,
            index: None,
            pending_seek: None,
            feature_index: 0,
            feature_offset: 0,
        }
    }

    pub fn seekable(&self) -> bool {
        self.seek_fn.is_some()
    }

    /// Spec version from the magic number, available after
    /// [`FileReader::header`].
    pub fn spec_version(&self) -> Option<SpecVersion> {
        self.version
    }

    /// Feature count declared by the header; 0 means the count is
    /// unknown and the data section runs until end of stream.
    pub fn features_count(&self) -> u64 {
        self.num_features as u64
    }

    /// Index node size declared by the header; 0 means no index section.
    pub fn index_node_size(&self) -> u16 {
        self.node_size
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self.seek_fn {
            Some(seek) => seek(&mut self.stream, pos),
            None => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stream is not seekable",
            )),
        }
    }

    /// Reads the magic number and the header table. Must be the first
    /// operation on the reader.
    pub fn header(&mut self) -> Result<HeaderBuf> {
        self.state.transition(
            State::Uninit,
            State::BeforeMagic,
            "header() has already been called",
        )?;

        let mut magic = [0u8; 8];
        if let Err(e) = self.stream.read_exact(&mut magic) {
            return Err(self.state.fail(Error::io("failed to read magic number", e)));
        }
        let version = match parse_magic(&magic) {
            Ok(version) => version,
            Err(e) => return Err(self.state.fail(e)),
        };
        if version.major < MIN_SPEC_MAJOR_VERSION || version.major > MAX_SPEC_MAJOR_VERSION {
            return Err(self.state.fail(Error::UnsupportedVersion(version.major)));
        }
        self.state.set(State::BeforeHeader);

        let mut size_buf = [0u8; 4];
        if let Err(e) = self.stream.read_exact(&mut size_buf) {
            return Err(self.state.fail(Error::io("failed to read header size", e)));
        }
        let header_size = u32::from_le_bytes(size_buf);
        if (header_size as usize) < 4 || header_size as usize > HEADER_MAX_BUFFER_SIZE {
            return Err(self.state.fail(Error::HeaderSize(header_size)));
        }
        let mut buf = Vec::with_capacity(SIZE_PREFIX_LEN + header_size as usize);
        buf.extend_from_slice(&size_buf);
        buf.resize(SIZE_PREFIX_LEN + header_size as usize, 0);
        if let Err(e) = self.stream.read_exact(&mut buf[SIZE_PREFIX_LEN..]) {
            return Err(self.state.fail(Error::io("failed to read header table", e)));
        }
        let header_buf = match HeaderBuf::new(buf) {
            Ok(header_buf) => header_buf,
            Err(e) => return Err(self.state.fail(e)),
        };

        let (features_count, node_size) = {
            let header = header_buf.header();
            (header.features_count(), header.index_node_size())
        };
        if features_count > isize::MAX as u64 {
            return Err(self.state.fail(Error::FeatureCountOverflow(features_count)));
        }
        if node_size == 1 {
            return Err(self.state.fail(Error::NodeSizeOne));
        }
        self.num_features = features_count as usize;
        self.node_size = node_size;
        self.version = Some(version);

        if self.seekable() {
            let pos = match self.seek(SeekFrom::Current(0)) {
                Ok(pos) => pos,
                Err(e) => {
                    return Err(self
                        .state
                        .fail(Error::io("failed to cache index start offset", e)))
                }
            };
            self.index_pos = pos;
            self.data_pos = if node_size > 0 && self.num_features > 0 {
                let size = match PackedRTree::index_size(self.num_features, node_size) {
                    Ok(size) => size,
                    Err(e) => return Err(self.state.fail(e)),
                };
                match pos.checked_add(size) {
                    Some(data_pos) => data_pos,
                    None => return Err(self.state.fail(Error::Overflow("data section offset"))),
                }
            } else {
                pos
            };
        }

        debug!(
            "read header: version {}.{} features={features_count} node_size={node_size}",
            version.major, version.patch
        );
        self.state.set(State::AfterHeader);
        Ok(header_buf)
    }

    /// Reads and caches the index section, or returns `Ok(None)` when
    /// the header declares no index.
    pub fn index(&mut self) -> Result<Option<&PackedRTree>> {
        self.state.check_err()?;
        match self.state.state() {
            State::Uninit => return Err(Error::State("must call header()")),
            State::AfterHeader => {}
            _ => {
                self.state.sanity_check();
                return Err(Error::State("read position is past index"));
            }
        }
        if self.node_size == 0 {
            self.state.set(State::AfterIndex);
            return Ok(None);
        }
        if self.num_features == 0 {
            return Err(Error::Format(
                "header declares an index but an unknown feature count",
            ));
        }

        if self.index.is_some() {
            // Cached by a pass before rewind(); reposition lazily past
            // the index when the next operation touches the stream.
            if self.seekable() {
                self.pending_seek = Some(self.data_pos);
            }
            self.state.set(State::AfterIndex);
            return Ok(self.index.as_ref());
        }

        self.state.set(State::BeforeIndex);
        if let Some(target) = self.pending_seek.take() {
            if let Err(e) = self.seek(SeekFrom::Start(target)) {
                return Err(self
                    .state
                    .fail(Error::io("failed to seek to index section", e)));
            }
        }
        let tree = match PackedRTree::from_buf(&mut self.stream, self.num_features, self.node_size)
        {
            Ok(tree) => tree,
            Err(e) => return Err(self.state.fail(e)),
        };
        debug!("cached index: {tree}");
        self.index = Some(tree);
        self.state.set(State::AfterIndex);
        Ok(self.index.as_ref())
    }

    /// Searches the index for features intersecting `query` and reads
    /// every match, in ascending data-section offset order. Afterwards
    /// the reader is at end of file; [`FileReader::rewind`] starts over.
    ///
    /// On a seekable stream the serialized index is searched directly
    /// unless a cached copy exists; on a non-seekable stream the index is
    /// read into memory first.
    pub fn index_search(&mut self, query: &Bbox) -> Result<Vec<FeatureBuf>> {
        self.state.check_err()?;
        match self.state.state() {
            State::Uninit => return Err(Error::State("must call header()")),
            State::AfterHeader => {}
            _ => {
                self.state.sanity_check();
                return Err(Error::State(
                    "index_search() must immediately follow header() or rewind()",
                ));
            }
        }
        if self.node_size == 0 {
            return Err(Error::NoIndex);
        }
        if self.num_features == 0 {
            return Err(Error::Format(
                "header declares an index but an unknown feature count",
            ));
        }

        let results: Vec<SearchResultItem> = if let Some(seek_fn) = self.seek_fn {
            if let Some(index) = self.index.as_ref() {
                // Cached tree survives rewind(): search in memory and
                // skip the stream past the index.
                let mut results = match index.search(query) {
                    Ok(results) => results,
                    Err(e) => return Err(self.state.fail(e)),
                };
                results.sort_by_key(|item| item.offset);
                self.pending_seek = Some(self.data_pos);
                results
            } else {
                if let Some(target) = self.pending_seek.take() {
                    if let Err(e) = self.seek(SeekFrom::Start(target)) {
                        return Err(self
                            .state
                            .fail(Error::io("failed to seek to index section", e)));
                    }
                }
                let mut proxy = SeekProxy {
                    inner: &mut self.stream,
                    seek_fn,
                };
                // Already ordered by ascending offset; leaves the stream
                // at the data section start.
                match PackedRTree::stream_search(
                    &mut proxy,
                    self.num_features,
                    self.node_size,
                    query,
                ) {
                    Ok(results) => results,
                    Err(e) => return Err(self.state.fail(e)),
                }
            }
        } else {
            // No streaming fallback without seeking: cache and search.
            let tree =
                match PackedRTree::from_buf(&mut self.stream, self.num_features, self.node_size) {
                    Ok(tree) => tree,
                    Err(e) => return Err(self.state.fail(e)),
                };
            let mut results = match tree.search(query) {
                Ok(results) => results,
                Err(e) => return Err(self.state.fail(e)),
            };
            results.sort_by_key(|item| item.offset);
            self.index = Some(tree);
            results
        };
        debug!("index search matched {} features", results.len());

        self.state.set(State::InData);
        self.feature_index = 0;
        self.feature_offset = 0;
        let mut features = Vec::with_capacity(results.len());
        for item in &results {
            self.advance_to(item.offset as u64)?;
            let feature = self.read_feature_at(features.len())?;
            features.push(feature);
        }
        self.state.set(State::Eof);
        Ok(features)
    }

    /// Moves the data-section cursor to `offset`, seeking when possible
    /// and draining otherwise. Offsets never decrease within one search.
    fn advance_to(&mut self, offset: u64) -> Result<()> {
        if self.seekable() {
            self.pending_seek = None;
            let target = self.data_pos + offset;
            if let Err(e) = self.seek(SeekFrom::Start(target)) {
                return Err(self.state.fail(Error::io(
                    format!("failed to seek to feature at data offset {offset}"),
                    e,
                )));
            }
        } else {
            let delta = offset - self.feature_offset;
            if delta > 0 {
                match io::copy(&mut (&mut self.stream).take(delta), &mut io::sink()) {
                    Ok(n) if n == delta => {}
                    Ok(_) => {
                        return Err(self.state.fail(Error::io(
                            format!("failed to skip to feature at data offset {offset}"),
                            io::ErrorKind::UnexpectedEof.into(),
                        )))
                    }
                    Err(e) => {
                        return Err(self.state.fail(Error::io(
                            format!("failed to skip to feature at data offset {offset}"),
                            e,
                        )))
                    }
                }
            }
        }
        self.feature_offset = offset;
        Ok(())
    }

    fn read_feature_at(&mut self, i: usize) -> Result<FeatureBuf> {
        let mut size_buf = [0u8; 4];
        if let Err(e) = self.stream.read_exact(&mut size_buf) {
            return Err(self
                .state
                .fail(Error::io(format!("failed to read feature {i} length"), e)));
        }
        let len = u32::from_le_bytes(size_buf);
        if (len as usize) < 4 {
            return Err(self.state.fail(Error::FeaturePrefix { index: i, len }));
        }
        let mut buf = Vec::with_capacity(SIZE_PREFIX_LEN + len as usize);
        buf.extend_from_slice(&size_buf);
        buf.resize(SIZE_PREFIX_LEN + len as usize, 0);
        if let Err(e) = self.stream.read_exact(&mut buf[SIZE_PREFIX_LEN..]) {
            return Err(self
                .state
                .fail(Error::io(format!("failed to read feature {i}"), e)));
        }
        self.feature_offset += (SIZE_PREFIX_LEN + len as usize) as u64;
        match FeatureBuf::new(buf) {
            Ok(feature) => Ok(feature),
            Err(e) => Err(self.state.fail(e)),
        }
    }

    /// Reads up to `out.len()` features sequentially from the current
    /// position, returning how many were filled in. The first call after
    /// the header skips the index section. Returns 0 at end of data.
    pub fn data(&mut self, out: &mut [FeatureBuf]) -> Result<usize> {
        self.prepare_data()?;
        if self.state.state() == State::Eof {
            return Ok(0);
        }
        let mut n = 0;
        while n < out.len() {
            match self.next_feature()? {
                Some(feature) => {
                    out[n] = feature;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }

    /// Reads all remaining features.
    pub fn data_rem(&mut self) -> Result<Vec<FeatureBuf>> {
        self.prepare_data()?;
        let mut features = Vec::new();
        if self.state.state() == State::Eof {
            return Ok(features);
        }
        while let Some(feature) = self.next_feature()? {
            features.push(feature);
        }
        Ok(features)
    }

    fn prepare_data(&mut self) -> Result<()> {
        self.state.check_err()?;
        match self.state.state() {
            State::Uninit => return Err(Error::State("must call header()")),
            State::AfterHeader => {
                // First data operation: move past the index section.
                if self.node_size > 0 {
                    if self.num_features == 0 {
                        return Err(Error::Format(
                            "header declares an index but an unknown feature count",
                        ));
                    }
                    if self.seekable() {
                        self.pending_seek = Some(self.data_pos);
                    } else {
                        let size =
                            match PackedRTree::index_size(self.num_features, self.node_size) {
                                Ok(size) => size,
                                Err(e) => return Err(self.state.fail(e)),
                            };
                        match io::copy(&mut (&mut self.stream).take(size), &mut io::sink()) {
                            Ok(n) if n == size => {}
                            Ok(_) => {
                                return Err(self.state.fail(Error::io(
                                    "failed to skip index section",
                                    io::ErrorKind::UnexpectedEof.into(),
                                )))
                            }
                            Err(e) => {
                                return Err(self
                                    .state
                                    .fail(Error::io("failed to skip index section", e)))
                            }
                        }
                    }
                }
                self.state.set(State::InData);
            }
            State::AfterIndex => self.state.set(State::InData),
            State::InData | State::Eof => {}
            _ => {
                self.state.sanity_check();
                return Err(Error::State("data() requires the header to be read first"));
            }
        }
        if let Some(target) = self.pending_seek.take() {
            if let Err(e) = self.seek(SeekFrom::Start(target)) {
                return Err(self
                    .state
                    .fail(Error::io("failed to seek to data section", e)));
            }
        }
        Ok(())
    }

    fn next_feature(&mut self) -> Result<Option<FeatureBuf>> {
        if self.num_features > 0 && self.feature_index >= self.num_features {
            self.state.set(State::Eof);
            return Ok(None);
        }
        let len = match self.read_len_prefix()? {
            Some(len) => len,
            None => {
                if self.num_features > 0 {
                    return Err(self.state.fail(Error::io(
                        format!("failed to read feature {} length", self.feature_index),
                        io::ErrorKind::UnexpectedEof.into(),
                    )));
                }
                // Unknown feature count reads until clean end of stream.
                self.state.set(State::Eof);
                return Ok(None);
            }
        };
        if (len as usize) < 4 {
            return Err(self.state.fail(Error::FeaturePrefix {
                index: self.feature_index,
                len,
            }));
        }
        let mut buf = Vec::with_capacity(SIZE_PREFIX_LEN + len as usize);
        buf.extend_from_slice(&len.to_le_bytes());
        buf.resize(SIZE_PREFIX_LEN + len as usize, 0);
        if let Err(e) = self.stream.read_exact(&mut buf[SIZE_PREFIX_LEN..]) {
            return Err(self.state.fail(Error::io(
                format!("failed to read feature {}", self.feature_index),
                e,
            )));
        }
        let feature = match FeatureBuf::new(buf) {
            Ok(feature) => feature,
            Err(e) => return Err(self.state.fail(e)),
        };
        self.feature_index += 1;
        self.feature_offset += (SIZE_PREFIX_LEN + len as usize) as u64;
        if self.num_features > 0 && self.feature_index == self.num_features {
            self.state.set(State::Eof);
        }
        Ok(Some(feature))
    }

    /// Reads a feature length prefix, or `None` at a clean end of
    /// stream.
    fn read_len_prefix(&mut self) -> Result<Option<u32>> {
        let mut buf = [0u8; 4];
        let mut filled = 0;
        while filled < buf.len() {
            match self.stream.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(self.state.fail(Error::io(
                        format!("failed to read feature {} length", self.feature_index),
                        io::ErrorKind::UnexpectedEof.into(),
                    )))
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(self.state.fail(Error::io(
                        format!("failed to read feature {} length", self.feature_index),
                        e,
                    )))
                }
            }
        }
        Ok(Some(u32::from_le_bytes(buf)))
    }

    /// Resets the reader to just after the header. The reset is lazy: no
    /// seek happens until the next section-reading operation, so a
    /// cached index can be re-searched without touching the stream.
    pub fn rewind(&mut self) -> Result<()> {
        self.state.check_err()?;
        match self.state.state() {
            State::Uninit => return Err(Error::State("must call header()")),
            State::AfterHeader => {}
            State::AfterIndex | State::InData | State::Eof => {
                if !self.seekable() {
                    return Err(Error::State("rewind() requires a seekable stream"));
                }
            }
            _ => {
                self.state.sanity_check();
                return Err(Error::State("rewind() requires the header to be read first"));
            }
        }
        self.state.set(State::AfterHeader);
        self.feature_index = 0;
        self.feature_offset = 0;
        if self.seekable() {
            self.pending_seek = Some(self.index_pos);
        }
        Ok(())
    }

    /// Closes the reader. Every later operation, including a second
    /// close, returns [`Error::Closed`]. The underlying stream is
    /// released when the reader is dropped.
    pub fn close(&mut self) -> Result<()> {
        self.state.close()
    }

    /// Consumes the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.stream
    }
}

impl<R: Read + Seek> FileReader<R> {
    /// Reader over a seekable stream, enabling streaming index search,
    /// section skips by seek, and [`FileReader::rewind`].
    pub fn new_seekable(stream: R) -> FileReader<R> {
        FileReader::with_seek(stream, Some(R::seek))
    }
}
