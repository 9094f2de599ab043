//! LEB128 codec for 32-bit integers and length-prefixed UTF-8 strings.
//!
//! An [`Encoder`] appends values to a growable buffer; a [`Decoder`] reads
//! them back from a borrowed slice in the same order.
//!
//! ```
//! use lebcodec::{Decoder, Encoder};
//!
//! let mut encoder = Encoder::new();
//! encoder.append_uint32(300).append_int32(-64);
//! encoder.append_prefixed_string("héllo").unwrap();
//!
//! let mut decoder = Decoder::new(encoder.buffer());
//! assert_eq!(decoder.read_uint32().unwrap(), 300);
//! assert_eq!(decoder.read_int32().unwrap(), -64);
//! assert_eq!(decoder.read_prefixed_string().unwrap(), "héllo");
//! assert!(decoder.done());
//! ```

pub mod config;
pub mod encoding;
pub mod utils;

pub use config::CodecConfig;
pub use encoding::*;
