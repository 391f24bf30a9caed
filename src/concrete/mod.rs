/*! Concrete communications

Output side of the conversion: a graph of records cross-referenced through [Uuid]s.
A [Communication] owns its sections (and through them sentences and tokenizations),
its entity mentions and its entities. Mentions point to tokenizations and entities point to mentions by identifier.
!*/
mod id;
pub mod metadata;
mod schema;
mod types;
pub mod validate;

pub use id::Uuid;
pub use metadata::MetadataFactory;
pub use schema::SCHEMA;
pub use types::*;
pub use validate::{validate, Inconsistency};
