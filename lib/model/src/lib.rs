//! The data model shared by all crates of the cricket knowledge graph.
//!
//! Contains the vocabulary constants, the derivation of stable identifiers from display names,
//! the coercion of raw CSV cells into typed literals and the performance classifier.

mod identifier;
mod tier;
mod value;
pub mod vocab;

pub use identifier::*;
pub use tier::*;
pub use value::*;

// Re-export some oxrdf types.
pub use oxrdf::dataset::CanonicalizationAlgorithm;
pub use oxrdf::{
    BlankNode, BlankNodeRef, Graph, GraphName, IriParseError, Literal,
    LiteralRef, NamedNode, NamedNodeRef, NamedOrBlankNode, Subject, SubjectRef, Term, TermRef,
    Triple, TripleRef,
};
