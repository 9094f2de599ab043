pub mod buffer;
pub mod limits;
pub mod varint;
