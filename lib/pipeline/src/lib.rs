//! Builds the cricket knowledge graph from bowling statistics.
//!
//! The pipeline consists of the following stages:
//! - [`build_ontology`] emits the OWL ontology as a static graph.
//! - [`convert_csv`] turns every row of a CSV file into a player, a team and a statistics record
//!   and adds the provenance record of the dataset.
//! - [`apply_links`] connects players and teams to DBpedia and Wikidata.
//! - [`validate`] reports violated cardinality constraints.

mod convert;
mod error;
mod links;
mod ontology;
mod provenance;
mod validation;

pub use convert::*;
pub use error::*;
pub use links::*;
pub use ontology::*;
pub use provenance::*;
pub use validation::*;
