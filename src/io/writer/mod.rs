/*!
# Length-delimited Communication writing

Each [crate::concrete::Communication] is encoded as a single Avro datum (see [crate::concrete::SCHEMA])
and prefixed by its length in bytes, as an unsigned LEB128 varint.
The stream is a plain concatenation of such blocks, optionally gzipped.
!*/
mod delimited;
mod writertrait;

pub use delimited::{encode, read_varint, write_delimited, write_varint, DelimitedWriter, OutputStream};
pub use writertrait::WriterTrait;
