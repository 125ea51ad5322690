use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "cricket-kg")]
/// Builds, queries and serves the cricket bowling statistics knowledge graph
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the OWL ontology
    Ontology {
        /// Files to write the ontology to
        ///
        /// The format is guessed from the file extension.
        #[arg(
            short,
            long,
            num_args = 1..,
            default_values = ["cricket_ontology_enhanced.ttl", "cricket_ontology_enhanced.owl"],
            value_hint = ValueHint::FilePath
        )]
        output: Vec<PathBuf>,
    },
    /// Convert a bowling statistics CSV file into RDF
    Convert {
        /// The CSV file to read
        #[arg(short, long, default_value = "bowlingAvg_clean.csv", value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// Files to write the graph to
        ///
        /// The format is guessed from the file extension.
        #[arg(
            short,
            long,
            num_args = 1..,
            default_values = ["bowling_stats_enhanced.ttl", "bowling_stats_enhanced.rdf", "bowling_stats_enhanced.jsonld"],
            value_hint = ValueHint::FilePath
        )]
        output: Vec<PathBuf>,
    },
    /// Add links to DBpedia and Wikidata to a converted graph
    Link {
        /// The graph to link
        #[arg(short, long, default_value = "bowling_stats_enhanced.ttl", value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// The file to write the linked graph to
        #[arg(short, long, default_value = "bowling_stats_enhanced_linked.ttl", value_hint = ValueHint::FilePath)]
        output: PathBuf,
        /// A JSON link table to use instead of the bundled one
        #[arg(long, value_hint = ValueHint::FilePath)]
        links: Option<PathBuf>,
    },
    /// Run ontology generation, conversion, linking and validation in one go
    Pipeline {
        /// The CSV file to read
        #[arg(short, long, default_value = "bowlingAvg_clean.csv", value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// The directory the generated files are written to
        #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
        output_dir: PathBuf,
        /// A JSON link table to use instead of the bundled one
        #[arg(long, value_hint = ValueHint::FilePath)]
        links: Option<PathBuf>,
    },
    /// Answer the competency questions and check the cardinality constraints
    Validate {
        /// The graph to validate
        #[arg(short, long, default_value = "bowling_stats_enhanced_linked.ttl", value_hint = ValueHint::FilePath)]
        data: PathBuf,
    },
    /// Evaluate a SPARQL query
    Query {
        /// The graph to query
        #[arg(short, long, default_value = "bowling_stats_enhanced_linked.ttl", value_hint = ValueHint::FilePath)]
        data: PathBuf,
        /// The SPARQL query
        #[arg(short, long, conflicts_with = "query_file")]
        query: Option<String>,
        /// A file containing the SPARQL query
        #[arg(long, conflicts_with = "query", value_hint = ValueHint::FilePath)]
        query_file: Option<PathBuf>,
        /// How SELECT and ASK results are written
        #[arg(long, value_enum, default_value_t = ResultsFormat::Table)]
        results_format: ResultsFormat,
        /// How CONSTRUCT and DESCRIBE results are written, e.g. "ttl" or "nt"
        #[arg(long, default_value = "ttl")]
        graph_format: String,
    },
    /// List the classes of the ontology
    Classes {
        /// An ontology file to inspect instead of the built-in ontology
        #[arg(long, value_hint = ValueHint::FilePath)]
        ontology: Option<PathBuf>,
    },
    /// Write the federated query examples
    FederatedQueries {
        /// The file to write the queries to
        #[arg(short, long, default_value = "federated_queries.sparql", value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },
    /// Serve the graph over HTTP
    Serve {
        /// The graph to serve
        #[arg(short, long, default_value = "bowling_stats_enhanced_linked.ttl", value_hint = ValueHint::FilePath)]
        data: PathBuf,
        /// Host and port to listen to
        #[arg(short, long, default_value = "127.0.0.1:5000", value_hint = ValueHint::Hostname)]
        bind: String,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ResultsFormat {
    /// An aligned text table
    Table,
    Json,
    Xml,
    Csv,
    Tsv,
}
