pub mod cell;

pub use cell::AddressCell;
