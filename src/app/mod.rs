// Application layer: HTTP surface over the core classifier.

pub mod server;
