//! FlatGeobuf file writer.
//!
//! [`FileWriter`] mirrors the reader's state machine: magic and header
//! first, then the index when the header declares one, then exactly the
//! declared number of features.

use crate::error::{Error, Result};
use crate::packed_r_tree::{calc_extent, hilbert_sort, NodeItem, PackedRTree};
use crate::state::{State, Stateful};
use crate::table::{FeatureBuf, HeaderBuf, SIZE_PREFIX_LEN};
use crate::MAGIC_BYTES;
use log::debug;
use std::io::Write;

/// FlatGeobuf file writer. Owns the output stream; dropping the writer
/// drops (and thereby closes) the stream.
pub struct FileWriter<W: Write> {
    state: Stateful,
    stream: W,
    /// Feature count declared by the header; 0 means unknown.
    num_features: usize,
    node_size: u16,
    /// Index of the next feature to write, in `[0, num_features]`.
    feature_index: usize,
}

impl<W: Write> FileWriter<W> {
    pub fn new(stream: W) -> FileWriter<W> {
        FileWriter {
            state: Stateful::new(),
            stream,
            num_features: 0,
            node_size: 0,
            feature_index: 0,
        }
    }

    /// Writes the magic number and the header table. Must be the first
    /// operation on the writer. Returns the number of bytes written.
    pub fn write_header(&mut self, header: &HeaderBuf) -> Result<usize> {
        // Validate header values before any state changes so a rejected
        // header leaves the writer untouched.
        let (features_count, node_size) = {
            let table = header.header();
            (table.features_count(), table.index_node_size())
        };
        if features_count > isize::MAX as u64 {
            return Err(Error::FeatureCountOverflow(features_count));
        }
        if node_size == 1 {
            return Err(Error::NodeSizeOne);
        }
        if node_size > 0 && features_count == 0 {
            return Err(Error::Format("index requested for zero declared features"));
        }

        self.state.transition(
            State::Uninit,
            State::BeforeMagic,
            "write_header() has already been called",
        )?;
        let mut n = 0;
        if let Err(e) = self.stream.write_all(&MAGIC_BYTES) {
            return Err(self.state.fail(Error::io("failed to write magic number", e)));
        }
        n += MAGIC_BYTES.len();

        self.state.set(State::BeforeHeader);
        if let Err(e) = self.stream.write_all(header.as_bytes()) {
            return Err(self.state.fail(Error::io("failed to write header table", e)));
        }
        n += header.as_bytes().len();

        self.num_features = features_count as usize;
        self.node_size = node_size;
        debug!("wrote header: features={features_count} node_size={node_size}");
        self.state.set(State::AfterHeader);
        Ok(n)
    }

    /// Writes a prebuilt index. The tree's reference count and node size
    /// must match the header. Returns the number of bytes written.
    pub fn write_index(&mut self, index: &PackedRTree) -> Result<usize> {
        self.can_write_index()?;
        self.index_inner(index)
    }

    fn index_inner(&mut self, index: &PackedRTree) -> Result<usize> {
        self.state.set(State::BeforeIndex);

        if self.num_features != index.num_refs() {
            self.state.set(State::AfterHeader);
            return Err(Error::IndexMismatch(format!(
                "feature count mismatch (header={}, index={})",
                self.num_features,
                index.num_refs()
            )));
        }
        if self.node_size != index.node_size() {
            self.state.set(State::AfterHeader);
            return Err(Error::IndexMismatch(format!(
                "node size mismatch (header={}, index={})",
                self.node_size,
                index.node_size()
            )));
        }

        let n = match index.stream_write(&mut self.stream) {
            Ok(n) => n,
            Err(e) => return Err(self.state.fail(e)),
        };
        debug!("wrote index: {index}");
        self.state.set(State::AfterIndex);
        Ok(n)
    }

    /// Builds the index from the features themselves, writes it, then
    /// writes the features in Hilbert order. Returns the number of bytes
    /// written.
    ///
    /// Each feature's bounding box is taken from its geometry, the boxes
    /// are Hilbert-sorted, and leaf offsets are assigned from the
    /// features' serialized sizes in sorted order. Panics if `features`
    /// is empty, since an empty tree cannot be built.
    pub fn write_index_data(&mut self, features: &[FeatureBuf]) -> Result<usize> {
        self.can_write_index()?;
        if features.len() != self.num_features {
            return Err(Error::IndexMismatch(format!(
                "feature count mismatch (header={}, data={})",
                self.num_features,
                features.len()
            )));
        }

        // Sort carrying the original feature position in the offset
        // field, then replace it with the real byte offset.
        let mut refs: Vec<NodeItem> = features
            .iter()
            .enumerate()
            .map(|(i, feature)| NodeItem {
                bbox: feature.bounds(),
                offset: i as i64,
            })
            .collect();
        let bounds = calc_extent(&refs);
        hilbert_sort(&mut refs, &bounds);
        let mut order = Vec::with_capacity(refs.len());
        let mut offset = 0i64;
        for node in &mut refs {
            let i = node.offset as usize;
            order.push(i);
            node.offset = offset;
            offset += (SIZE_PREFIX_LEN + features[i].payload_len() as usize) as i64;
        }

        let tree = PackedRTree::build(&refs, self.node_size)?;
        let mut n = self.index_inner(&tree)?;
        for i in order {
            n += self.write_data(&features[i])?;
        }
        Ok(n)
    }

    /// Writes one size-prefixed feature table. Returns the number of
    /// bytes written and moves to end of file once the header-declared
    /// count is reached.
    pub fn write_data(&mut self, feature: &FeatureBuf) -> Result<usize> {
        self.can_write_data()?;
        self.state.set(State::InData);

        if let Err(e) = self.stream.write_all(feature.as_bytes()) {
            return Err(self.state.fail(Error::io(
                format!("failed to write feature {}", self.feature_index),
                e,
            )));
        }
        self.feature_index += 1;

        if self.feature_index == self.num_features && self.num_features > 0 {
            self.state.set(State::Eof);
        }
        Ok(feature.as_bytes().len())
    }

    /// Flushes and closes the writer. Errors if fewer features were
    /// written than the header declared. A second close returns
    /// [`Error::Closed`].
    pub fn close(&mut self) -> Result<()> {
        self.state.close()?;
        if let Err(e) = self.stream.flush() {
            return Err(Error::io("failed to flush output stream", e));
        }
        if self.feature_index < self.num_features {
            return Err(Error::Truncated {
                written: self.feature_index,
                declared: self.num_features,
            });
        }
        Ok(())
    }

    /// Consumes the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.stream
    }

    fn can_write_index(&mut self) -> Result<()> {
        self.state.check_err()?;
        match self.state.state() {
            State::Uninit => Err(Error::State("must call write_header()")),
            State::AfterHeader => {
                if self.node_size == 0 {
                    Err(Error::State("header node size 0 indicates no index"))
                } else {
                    Ok(())
                }
            }
            State::AfterIndex | State::InData | State::Eof => {
                Err(Error::State("write position is past index"))
            }
            _ => {
                self.state.sanity_check();
                Err(Error::State("cannot write index in the current state"))
            }
        }
    }

    fn can_write_data(&mut self) -> Result<()> {
        self.state.check_err()?;
        match self.state.state() {
            State::Uninit => Err(Error::State("must call write_header()")),
            State::AfterHeader => {
                if self.node_size > 0 {
                    Err(Error::State("header requires index but no index written"))
                } else {
                    Ok(())
                }
            }
            State::AfterIndex | State::InData => Ok(()),
            State::Eof => Err(Error::State(
                "all header-declared features already written",
            )),
            _ => {
                self.state.sanity_check();
                Err(Error::State("cannot write data in the current state"))
            }
        }
    }
}
