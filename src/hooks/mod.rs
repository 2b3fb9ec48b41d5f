pub mod use_acknowledgment;

pub use use_acknowledgment::use_acknowledgment;
