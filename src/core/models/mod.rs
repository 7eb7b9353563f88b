pub mod package;
pub mod trusted_key;
