#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]

pub mod competency;
mod error;
pub mod federated;
pub mod io;
mod queries;
mod results;
mod store;

pub use error::{LoaderError, QueryError, SerializerError};
pub use io::ExportFormat;
pub use queries::{
    BowlerSummary, DashboardSummary, EconomyRow, FiveWicketHaul, ParameterizedQuery,
    TeamStatistics, BEST_ECONOMY, DESCRIBE_PLAYER, DESCRIBE_TEAM, FIVE_WICKET_HAULS,
    SEARCH_PLAYERS, TEAM_STATISTICS, TOP_WICKET_TAKERS, TOTAL_WICKETS,
};
pub use results::{binding_count, binding_number, binding_text, QueryAnswer, Solutions};
pub use sparesults::QueryResultsFormat;
pub use store::{ExternalLinks, KnowledgeGraph};

pub mod model {
    pub use cricket_kg_model::*;
}

pub mod pipeline {
    pub use cricket_kg_pipeline::*;
}
