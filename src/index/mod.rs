pub mod identifier;

pub use identifier::{decode_address, encode_address};
