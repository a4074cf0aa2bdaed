//! Reading and writing feature property records.
//!
//! Properties travel as an opaque byte vector inside each feature table:
//! repeated records of a little-endian `u16` column index followed by a
//! payload whose layout is fixed by the column's type. Numeric types are
//! fixed width; strings, binaries, JSON and datetimes carry a `u32`
//! length prefix.

use crate::error::{err_io, Error, Result};
use crate::feature_generated::Feature;
use crate::header_generated::{Column, ColumnType, Header};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{ErrorKind, Read, Write};

/// Access to a column list, implemented by the header and feature tables.
pub trait Schema {
    fn columns_len(&self) -> usize;
    fn column(&self, i: usize) -> Option<Column>;
}

impl Schema for Header<'_> {
    fn columns_len(&self) -> usize {
        self.columns().map_or(0, |columns| columns.len())
    }

    fn column(&self, i: usize) -> Option<Column> {
        let columns = self.columns()?;
        if i < columns.len() {
            Some(columns.get(i))
        } else {
            None
        }
    }
}

impl Schema for Feature<'_> {
    fn columns_len(&self) -> usize {
        self.columns().map_or(0, |columns| columns.len())
    }

    fn column(&self, i: usize) -> Option<Column> {
        let columns = self.columns()?;
        if i < columns.len() {
            Some(columns.get(i))
        } else {
            None
        }
    }
}

/// One decoded property value.
#[derive(Clone, PartialEq, Debug)]
pub enum ColumnValue {
    Byte(i8),
    UByte(u8),
    Bool(bool),
    Short(i16),
    UShort(u16),
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Float(f32),
    Double(f64),
    String(String),
    Json(String),
    DateTime(String),
    Binary(Vec<u8>),
}

/// A decoded property record: which column it belongs to and its value.
#[derive(Clone, PartialEq, Debug)]
pub struct PropValue {
    pub col_index: u16,
    pub name: String,
    pub value: ColumnValue,
}

/// Reads FlatGeobuf property records from an underlying stream.
pub struct PropReader<R: Read> {
    reader: R,
}

impl<R: Read> PropReader<R> {
    pub fn new(reader: R) -> PropReader<R> {
        PropReader { reader }
    }

    pub fn read_byte(&mut self) -> Result<i8> {
        self.reader
            .read_i8()
            .map_err(err_io("failed to read byte property"))
    }

    pub fn read_ubyte(&mut self) -> Result<u8> {
        self.reader
            .read_u8()
            .map_err(err_io("failed to read ubyte property"))
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        let b = self
            .reader
            .read_u8()
            .map_err(err_io("failed to read bool property"))?;
        Ok(b > 0)
    }

    pub fn read_short(&mut self) -> Result<i16> {
        self.reader
            .read_i16::<LittleEndian>()
            .map_err(err_io("failed to read short property"))
    }

    pub fn read_ushort(&mut self) -> Result<u16> {
        self.reader
            .read_u16::<LittleEndian>()
            .map_err(err_io("failed to read ushort property"))
    }

    pub fn read_int(&mut self) -> Result<i32> {
        self.reader
            .read_i32::<LittleEndian>()
            .map_err(err_io("failed to read int property"))
    }

    pub fn read_uint(&mut self) -> Result<u32> {
        self.reader
            .read_u32::<LittleEndian>()
            .map_err(err_io("failed to read uint property"))
    }

    pub fn read_long(&mut self) -> Result<i64> {
        self.reader
            .read_i64::<LittleEndian>()
            .map_err(err_io("failed to read long property"))
    }

    pub fn read_ulong(&mut self) -> Result<u64> {
        self.reader
            .read_u64::<LittleEndian>()
            .map_err(err_io("failed to read ulong property"))
    }

    pub fn read_float(&mut self) -> Result<f32> {
        self.reader
            .read_f32::<LittleEndian>()
            .map_err(err_io("failed to read float property"))
    }

    pub fn read_double(&mut self) -> Result<f64> {
        self.reader
            .read_f64::<LittleEndian>()
            .map_err(err_io("failed to read double property"))
    }

    /// Reads a length-prefixed UTF-8 string. Datetimes use the same
    /// layout.
    pub fn read_string(&mut self) -> Result<String> {
        let bytes = self.read_binary()?;
        String::from_utf8(bytes).map_err(|_| Error::Format("invalid UTF-8 in property value"))
    }

    /// Reads a length-prefixed byte vector. JSON uses the same layout.
    pub fn read_binary(&mut self) -> Result<Vec<u8>> {
        let len = self
            .reader
            .read_u32::<LittleEndian>()
            .map_err(err_io("failed to read property length"))?;
        if len as u64 > usize::MAX as u64 {
            return Err(Error::PropertyLength(len as u64));
        }
        let mut bytes = vec![0u8; len as usize];
        self.reader
            .read_exact(&mut bytes)
            .map_err(err_io("failed to read property payload"))?;
        Ok(bytes)
    }

    /// Reads the next record's column index, or `None` at a clean end of
    /// stream. A partial index is an error.
    fn read_column_index(&mut self) -> Result<Option<u16>> {
        let mut buf = [0u8; 2];
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(Error::io(
                        "failed to read column index",
                        ErrorKind::UnexpectedEof.into(),
                    ))
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::io("failed to read column index", e)),
            }
        }
        Ok(Some(u16::from_le_bytes(buf)))
    }

    /// Decodes records until end of stream, resolving each column index
    /// and type against `schema`.
    pub fn read_schema(&mut self, schema: &impl Schema) -> Result<Vec<PropValue>> {
        let count = schema.columns_len();
        let mut values = Vec::with_capacity(count);

        while let Some(col_index) = self.read_column_index()? {
            let i = col_index as usize;
            let column = schema.column(i).ok_or(Error::UnknownColumn {
                index: col_index,
                count,
            })?;
            let col_type = column.type_();
            let value = match col_type {
                ColumnType::Byte => ColumnValue::Byte(self.read_byte()?),
                ColumnType::UByte => ColumnValue::UByte(self.read_ubyte()?),
                ColumnType::Bool => ColumnValue::Bool(self.read_bool()?),
                ColumnType::Short => ColumnValue::Short(self.read_short()?),
                ColumnType::UShort => ColumnValue::UShort(self.read_ushort()?),
                ColumnType::Int => ColumnValue::Int(self.read_int()?),
                ColumnType::UInt => ColumnValue::UInt(self.read_uint()?),
                ColumnType::Long => ColumnValue::Long(self.read_long()?),
                ColumnType::ULong => ColumnValue::ULong(self.read_ulong()?),
                ColumnType::Float => ColumnValue::Float(self.read_float()?),
                ColumnType::Double => ColumnValue::Double(self.read_double()?),
                ColumnType::String => ColumnValue::String(self.read_string()?),
                ColumnType::Json => {
                    ColumnValue::Json(String::from_utf8(self.read_binary()?).map_err(|_| {
                        Error::Format("invalid UTF-8 in property value")
                    })?)
                }
                ColumnType::DateTime => ColumnValue::DateTime(self.read_string()?),
                ColumnType::Binary => ColumnValue::Binary(self.read_binary()?),
                other => {
                    return Err(Error::Schema(format!("unknown column type {}", other.0)))
                }
            };
            values.push(PropValue {
                col_index,
                name: column.name().to_string(),
                value,
            });
        }
        Ok(values)
    }
}

/// Writes FlatGeobuf property records to an underlying stream.
pub struct PropWriter<W: Write> {
    writer: W,
}

impl<W: Write> PropWriter<W> {
    pub fn new(writer: W) -> PropWriter<W> {
        PropWriter { writer }
    }

    pub fn write_byte(&mut self, v: i8) -> Result<usize> {
        self.writer
            .write_i8(v)
            .map_err(err_io("failed to write byte property"))?;
        Ok(1)
    }

    pub fn write_ubyte(&mut self, v: u8) -> Result<usize> {
        self.writer
            .write_u8(v)
            .map_err(err_io("failed to write ubyte property"))?;
        Ok(1)
    }

    pub fn write_bool(&mut self, v: bool) -> Result<usize> {
        self.writer
            .write_u8(v as u8)
            .map_err(err_io("failed to write bool property"))?;
        Ok(1)
    }

    pub fn write_short(&mut self, v: i16) -> Result<usize> {
        self.writer
            .write_i16::<LittleEndian>(v)
            .map_err(err_io("failed to write short property"))?;
        Ok(2)
    }

    pub fn write_ushort(&mut self, v: u16) -> Result<usize> {
        self.writer
            .write_u16::<LittleEndian>(v)
            .map_err(err_io("failed to write ushort property"))?;
        Ok(2)
    }

    pub fn write_int(&mut self, v: i32) -> Result<usize> {
        self.writer
            .write_i32::<LittleEndian>(v)
            .map_err(err_io("failed to write int property"))?;
        Ok(4)
    }

    pub fn write_uint(&mut self, v: u32) -> Result<usize> {
        self.writer
            .write_u32::<LittleEndian>(v)
            .map_err(err_io("failed to write uint property"))?;
        Ok(4)
    }

    pub fn write_long(&mut self, v: i64) -> Result<usize> {
        self.writer
            .write_i64::<LittleEndian>(v)
            .map_err(err_io("failed to write long property"))?;
        Ok(8)
    }

    pub fn write_ulong(&mut self, v: u64) -> Result<usize> {
        self.writer
            .write_u64::<LittleEndian>(v)
            .map_err(err_io("failed to write ulong property"))?;
        Ok(8)
    }

    pub fn write_float(&mut self, v: f32) -> Result<usize> {
        self.writer
            .write_f32::<LittleEndian>(v)
            .map_err(err_io("failed to write float property"))?;
        Ok(4)
    }

    pub fn write_double(&mut self, v: f64) -> Result<usize> {
        self.writer
            .write_f64::<LittleEndian>(v)
            .map_err(err_io("failed to write double property"))?;
        Ok(8)
    }

    /// Writes a length-prefixed UTF-8 string. Datetimes use the same
    /// layout.
    pub fn write_string(&mut self, v: &str) -> Result<usize> {
        self.write_binary(v.as_bytes())
    }

    /// Writes a length-prefixed byte vector. JSON uses the same layout.
    pub fn write_binary(&mut self, v: &[u8]) -> Result<usize> {
        if v.len() as u64 > u32::MAX as u64 {
            return Err(Error::PropertyLength(v.len() as u64));
        }
        self.write_uint(v.len() as u32)?;
        self.writer
            .write_all(v)
            .map_err(err_io("failed to write property payload"))?;
        Ok(4 + v.len())
    }

    /// Writes one full record: the column index followed by the value
    /// payload.
    pub fn write_value(&mut self, col_index: u16, value: &ColumnValue) -> Result<usize> {
        let mut n = self.write_ushort(col_index)?;
        n += match value {
            ColumnValue::Byte(v) => self.write_byte(*v)?,
            ColumnValue::UByte(v) => self.write_ubyte(*v)?,
            ColumnValue::Bool(v) => self.write_bool(*v)?,
            ColumnValue::Short(v) => self.write_short(*v)?,
            ColumnValue::UShort(v) => self.write_ushort(*v)?,
            ColumnValue::Int(v) => self.write_int(*v)?,
            ColumnValue::UInt(v) => self.write_uint(*v)?,
            ColumnValue::Long(v) => self.write_long(*v)?,
            ColumnValue::ULong(v) => self.write_ulong(*v)?,
            ColumnValue::Float(v) => self.write_float(*v)?,
            ColumnValue::Double(v) => self.write_double(*v)?,
            ColumnValue::String(v) => self.write_string(v)?,
            ColumnValue::Json(v) => self.write_string(v)?,
            ColumnValue::DateTime(v) => self.write_string(v)?,
            ColumnValue::Binary(v) => self.write_binary(v)?,
        };
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header_generated::{Header, HeaderArgs};
    use crate::table::HeaderBuf;

    fn schema_header(types: &[(&str, ColumnType)]) -> HeaderBuf {
        let mut fbb = flatbuffers::FlatBufferBuilder::new();
        let columns: Vec<_> = types
            .iter()
            .map(|(name, col_type)| {
                let name = fbb.create_string(name);
                Column::create(
                    &mut fbb,
                    &crate::header_generated::ColumnArgs {
                        name: Some(name),
                        type_: *col_type,
                    },
                )
            })
            .collect();
        let columns = fbb.create_vector(&columns);
        let header = Header::create(
            &mut fbb,
            &HeaderArgs {
                columns: Some(columns),
                ..Default::default()
            },
        );
        fbb.finish_size_prefixed(header, None);
        HeaderBuf::new(fbb.finished_data().to_vec()).unwrap()
    }

    #[test]
    fn roundtrip_all_types() {
        let header = schema_header(&[
            ("b", ColumnType::Byte),
            ("ub", ColumnType::UByte),
            ("flag", ColumnType::Bool),
            ("s", ColumnType::Short),
            ("us", ColumnType::UShort),
            ("i", ColumnType::Int),
            ("ui", ColumnType::UInt),
            ("l", ColumnType::Long),
            ("ul", ColumnType::ULong),
            ("f", ColumnType::Float),
            ("d", ColumnType::Double),
            ("name", ColumnType::String),
            ("meta", ColumnType::Json),
            ("when", ColumnType::DateTime),
            ("blob", ColumnType::Binary),
        ]);
        let values = [
            ColumnValue::Byte(-7),
            ColumnValue::UByte(200),
            ColumnValue::Bool(true),
            ColumnValue::Short(-12345),
            ColumnValue::UShort(54321),
            ColumnValue::Int(-1_000_000),
            ColumnValue::UInt(3_000_000_000),
            ColumnValue::Long(-9_000_000_000),
            ColumnValue::ULong(18_000_000_000),
            ColumnValue::Float(1.5),
            ColumnValue::Double(-2.25),
            ColumnValue::String("Cook".to_string()),
            ColumnValue::Json("{\"a\":1}".to_string()),
            ColumnValue::DateTime("2020-01-01T00:00:00Z".to_string()),
            ColumnValue::Binary(vec![0, 1, 2, 255]),
        ];

        let mut bytes = Vec::new();
        let mut writer = PropWriter::new(&mut bytes);
        for (i, value) in values.iter().enumerate() {
            writer.write_value(i as u16, value).unwrap();
        }

        let mut reader = PropReader::new(&bytes[..]);
        let decoded = reader.read_schema(&header.header()).unwrap();
        assert_eq!(decoded.len(), values.len());
        for (i, prop) in decoded.iter().enumerate() {
            assert_eq!(prop.col_index, i as u16);
            assert_eq!(prop.value, values[i]);
        }
        assert_eq!(decoded[11].name, "name");
        assert_eq!(decoded[11].value, ColumnValue::String("Cook".to_string()));
    }

    #[test]
    fn unknown_column_index_is_an_error() {
        let header = schema_header(&[("a", ColumnType::Int)]);
        let mut bytes = Vec::new();
        let mut writer = PropWriter::new(&mut bytes);
        writer.write_value(3, &ColumnValue::Int(1)).unwrap();

        let mut reader = PropReader::new(&bytes[..]);
        let err = reader.read_schema(&header.header()).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownColumn { index: 3, count: 1 }
        ));
    }

    #[test]
    fn truncated_column_index_is_an_error() {
        let header = schema_header(&[("a", ColumnType::Int)]);
        let mut reader = PropReader::new(&[0u8][..]);
        assert!(reader.read_schema(&header.header()).is_err());
    }

    #[test]
    fn empty_properties_decode_to_nothing() {
        let header = schema_header(&[("a", ColumnType::Int)]);
        let mut reader = PropReader::new(&[][..]);
        assert!(reader.read_schema(&header.header()).unwrap().is_empty());
    }

    #[test]
    fn string_prefix_layout() {
        let mut bytes = Vec::new();
        let mut writer = PropWriter::new(&mut bytes);
        let n = writer.write_string("hi").unwrap();
        assert_eq!(n, 6);
        assert_eq!(bytes, vec![2, 0, 0, 0, b'h', b'i']);
    }
}
