pub mod ed25519_backend;
