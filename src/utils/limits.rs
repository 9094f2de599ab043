/// Payload bits carried by each encoded byte
pub const GROUP_BITS: u32 = 7;

/// High bit of an encoded byte: more bytes follow
pub const CONTINUATION_BIT: u8 = 0x80;

/// Low seven bits of an encoded byte
pub const PAYLOAD_MASK: u8 = 0x7F;

/// Bit 6 of a signed group, replicated into all higher bits on decode
pub const SIGN_BIT: u8 = 0x40;

/// Longest encoding of a 32-bit value: ceil(32 / 7)
pub const MAX_VARINT32_LEN: usize = 5;

/// Default ceiling on the byte length of a prefixed string
pub const DEFAULT_MAX_STRING_LEN: u32 = u32::MAX;

/// Default starting capacity of an encoder buffer
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;
