pub mod authenticator;
pub mod package_codec;
pub mod signing;
pub mod trust_store;
pub mod verification;
pub mod version_gate;
