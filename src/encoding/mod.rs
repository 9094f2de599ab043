pub mod checked;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use checked::*;
pub use decoder::*;
pub use encoder::*;
pub use error::*;
