pub mod derive;
pub mod namespace;
pub mod nodeport;
