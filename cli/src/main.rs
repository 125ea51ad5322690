#![expect(clippy::print_stdout, reason = "reports are written to the terminal")]
use crate::cli::{Args, Command, ResultsFormat};
use anyhow::{bail, Context};
use clap::Parser;
use cricket_kg::competency::answer_all;
use cricket_kg::federated::write_federated_queries;
use cricket_kg::io::parse_graph;
use cricket_kg::model::vocab::namespaces;
use cricket_kg::model::{Graph, Term};
use cricket_kg::pipeline::{
    apply_links, build_ontology, convert_csv, ontology_classes, validate, ConversionOptions,
    LinkTable, OntologySummary,
};
use cricket_kg::{ExportFormat, KnowledgeGraph, QueryAnswer, QueryResultsFormat, Solutions};
use cricket_kg_web::ServerConfig;
use prettytable::{Cell, Row, Table};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, stdout, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod cli;

const ONTOLOGY_FILES: [&str; 2] = ["cricket_ontology_enhanced.ttl", "cricket_ontology_enhanced.owl"];
const DATA_FILES: [&str; 3] = [
    "bowling_stats_enhanced.ttl",
    "bowling_stats_enhanced.rdf",
    "bowling_stats_enhanced.jsonld",
];
const LINKED_DATA_FILE: &str = "bowling_stats_enhanced_linked.ttl";

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = Args::parse();
    match matches.command {
        Command::Ontology { output } => {
            let ontology = build_ontology();
            for path in &output {
                write_graph_file(&ontology, path, &namespaces::ONTOLOGY_PREFIXES)?;
            }
            println!("{}", OntologySummary::of(&ontology));
            Ok(())
        }
        Command::Convert { input, output } => {
            let conversion = convert_csv(&input, &ConversionOptions::for_path(&input))?;
            for path in &output {
                write_graph_file(&conversion.graph, path, &namespaces::DATA_PREFIXES)?;
            }
            let report = conversion.report;
            println!(
                "Converted {} records of {} players and {} teams into {} triples",
                report.records, report.players, report.teams, report.triples
            );
            Ok(())
        }
        Command::Link {
            input,
            output,
            links,
        } => {
            let mut graph = read_graph_file(&input)?;
            let report =
                with_link_table(links.as_deref(), |table| apply_links(&mut graph, table))?;
            write_graph_file(&graph, &output, &namespaces::DATA_PREFIXES)?;
            println!(
                "Added {} links to {} entities, skipped {} table entries",
                report.links_added, report.linked_entities, report.skipped
            );
            Ok(())
        }
        Command::Pipeline {
            input,
            output_dir,
            links,
        } => run_pipeline(&input, &output_dir, links.as_deref()),
        Command::Validate { data } => {
            let kg = KnowledgeGraph::load_from_path(&data)?;
            let mut out = stdout().lock();
            for answer in answer_all(&kg)? {
                writeln!(
                    out,
                    "{} [{}] {}\n    {}",
                    answer.question.id,
                    answer.question.category,
                    answer.question.question,
                    answer.answer.as_deref().unwrap_or("no answer")
                )?;
            }
            let violations = validate(kg.graph());
            writeln!(out, "{} constraint violations", violations.len())?;
            for violation in &violations {
                writeln!(out, "    {violation}")?;
            }
            out.flush()?;
            Ok(())
        }
        Command::Query {
            data,
            query,
            query_file,
            results_format,
            graph_format,
        } => {
            let query = match (query, query_file) {
                (Some(query), _) => query,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("Unable to read the query file {}", path.display()))?,
                (None, None) => bail!("Either --query or --query-file must be set"),
            };
            let graph_format = ExportFormat::from_name(&graph_format)
                .with_context(|| format!("The graph format '{graph_format}' is unknown"))?;
            let kg = KnowledgeGraph::load_from_path(&data)?;
            let answer = kg.query(&query)?;
            write_answer(&answer, results_format, graph_format, stdout().lock())?.flush()?;
            Ok(())
        }
        Command::Classes { ontology } => {
            let ontology = match ontology {
                Some(path) => read_graph_file(&path)?,
                None => build_ontology(),
            };
            let classes = ontology_classes(&ontology);
            println!("Found {} classes:", classes.len());
            for class in &classes {
                match &class.label {
                    Some(label) => println!("  - {} ({label})", class.local_name()),
                    None => println!("  - {}", class.local_name()),
                }
            }
            Ok(())
        }
        Command::FederatedQueries { output } => {
            close_file_writer(write_federated_queries(BufWriter::new(
                File::create(&output)
                    .with_context(|| format!("Unable to create {}", output.display()))?,
            ))?)?;
            tracing::info!(path = %output.display(), "Wrote federated queries");
            Ok(())
        }
        Command::Serve { data, bind, cors } => {
            let graph = KnowledgeGraph::load_from_path(&data)?;
            cricket_kg_web::serve(ServerConfig { graph, bind, cors }).await
        }
    }
}

fn run_pipeline(input: &Path, output_dir: &Path, links: Option<&Path>) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Unable to create {}", output_dir.display()))?;
    let in_output_dir = |name: &str| -> PathBuf { output_dir.join(name) };

    let ontology = build_ontology();
    for name in ONTOLOGY_FILES {
        write_graph_file(&ontology, &in_output_dir(name), &namespaces::ONTOLOGY_PREFIXES)?;
    }

    let conversion = convert_csv(input, &ConversionOptions::for_path(input))?;
    for name in DATA_FILES {
        write_graph_file(&conversion.graph, &in_output_dir(name), &namespaces::DATA_PREFIXES)?;
    }

    let mut graph = conversion.graph;
    let link_report = with_link_table(links, |table| apply_links(&mut graph, table))?;
    write_graph_file(
        &graph,
        &in_output_dir(LINKED_DATA_FILE),
        &namespaces::DATA_PREFIXES,
    )?;

    let violations = validate(&graph);
    println!("Ontology: {}", OntologySummary::of(&ontology));
    println!(
        "Data: {} records, {} players, {} teams",
        conversion.report.records, conversion.report.players, conversion.report.teams
    );
    println!(
        "Links: {} added to {} entities",
        link_report.links_added, link_report.linked_entities
    );
    println!("Validation: {} constraint violations", violations.len());
    println!("Total triples: {}", graph.len());
    Ok(())
}

/// Runs `f` with the link table at `path`, or with the bundled table when no path is given.
fn with_link_table<T>(
    path: Option<&Path>,
    f: impl FnOnce(&LinkTable) -> T,
) -> anyhow::Result<T> {
    Ok(match path {
        Some(path) => f(&LinkTable::from_path(path)?),
        None => f(LinkTable::builtin()?),
    })
}

fn export_format_from_path(path: &Path) -> anyhow::Result<ExportFormat> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        ExportFormat::from_extension(ext).with_context(|| {
            format!("Not able to guess the file format from file name extension '{ext}'")
        })
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn read_graph_file(path: &Path) -> anyhow::Result<Graph> {
    let format = export_format_from_path(path)?;
    let Some(rdf_format) = format.rdf_format() else {
        bail!("Reading {format} files is not supported");
    };
    let file = File::open(path).with_context(|| format!("Unable to open {}", path.display()))?;
    parse_graph(rdf_format, BufReader::new(file))
        .with_context(|| format!("Unable to parse {}", path.display()))
}

fn write_graph_file(graph: &Graph, path: &Path, prefixes: &[(&str, &str)]) -> anyhow::Result<()> {
    let format = export_format_from_path(path)?;
    let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    close_file_writer(format.write_graph(graph, prefixes, BufWriter::new(file))?)?;
    tracing::info!(path = %path.display(), %format, triples = graph.len(), "Wrote graph");
    Ok(())
}

fn write_answer<W: Write>(
    answer: &QueryAnswer,
    results_format: ResultsFormat,
    graph_format: ExportFormat,
    writer: W,
) -> anyhow::Result<W> {
    let results_format = match results_format {
        ResultsFormat::Table => {
            return match answer {
                QueryAnswer::Solutions(solutions) => write_table(solutions, writer),
                QueryAnswer::Boolean(value) => {
                    let mut writer = writer;
                    writeln!(writer, "{value}")?;
                    Ok(writer)
                }
                QueryAnswer::Graph(graph) => Ok(graph_format.write_graph(
                    graph,
                    &namespaces::DATA_PREFIXES,
                    writer,
                )?),
            };
        }
        ResultsFormat::Json => QueryResultsFormat::Json,
        ResultsFormat::Xml => QueryResultsFormat::Xml,
        ResultsFormat::Csv => QueryResultsFormat::Csv,
        ResultsFormat::Tsv => QueryResultsFormat::Tsv,
    };
    Ok(match answer {
        QueryAnswer::Graph(graph) => {
            graph_format.write_graph(graph, &namespaces::DATA_PREFIXES, writer)?
        }
        answer => answer.write(results_format, writer)?,
    })
}

fn write_table<W: Write>(solutions: &Solutions, mut writer: W) -> anyhow::Result<W> {
    let mut table = Table::new();
    table.set_titles(Row::new(
        solutions
            .variables()
            .iter()
            .map(|variable| Cell::new(variable.as_str()))
            .collect(),
    ));
    for solution in solutions.iter() {
        table.add_row(Row::new(
            solutions
                .variables()
                .iter()
                .map(|variable| match solution.get(variable) {
                    Some(Term::Literal(literal)) => Cell::new(literal.value()),
                    Some(term) => Cell::new(&term.to_string()),
                    None => Cell::new(""),
                })
                .collect(),
        ));
    }
    table.print(&mut writer)?;
    writeln!(writer, "{} results", solutions.len())?;
    Ok(writer)
}

fn close_file_writer<W: Write>(writer: BufWriter<W>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use clap::CommandFactory;
    use predicates::prelude::*;

    const CSV: &str = "Player,Team Name,Span,Mat,Inns,Overs,Mdns,Runs,Wkts,Ave,Econ,SR,4,5,Ct,St,BBI
Wahab Riaz,Peshawar Zalmi,2016-2023,72,72,262.3,2,1946,113,17.22,7.41,13.9,3,1,20,0,4/17
Shaheen Shah Afridi,Lahore Qalanders,2018-2023,30,30,110,1,792,50,15.84,7.2,13.2,1,1,5,0,6/19
Haris Rauf,Lahore Qalanders,2020-2023,22,22,80,0,690,20,34.5,7.86,24.0,0,0,4,0,3/25
";

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command.arg("run").arg("--bin").arg("cricket-kg");
        command.arg("--");
        command
    }

    fn pipeline_output() -> Result<TempDir> {
        let dir = TempDir::new()?;
        let input = dir.child("bowling.csv");
        input.write_str(CSV)?;
        cli_command()
            .arg("pipeline")
            .arg("--input")
            .arg(input.path())
            .arg("--output-dir")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Links: 10 added to 5 entities"));
        Ok(dir)
    }

    #[test]
    fn clap_debug() {
        Args::command().debug_assert();
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("Usage: cricket-kg"));
    }

    #[test]
    fn cli_pipeline_writes_every_file() -> Result<()> {
        let dir = pipeline_output()?;
        for name in ONTOLOGY_FILES
            .into_iter()
            .chain(DATA_FILES)
            .chain([LINKED_DATA_FILE])
        {
            dir.child(name).assert(predicate::path::is_file());
        }
        dir.child(LINKED_DATA_FILE)
            .assert(predicate::str::contains("owl:sameAs"));
        Ok(())
    }

    #[test]
    fn cli_validate_answers_competency_questions() -> Result<()> {
        let dir = pipeline_output()?;
        cli_command()
            .arg("validate")
            .arg("--data")
            .arg(dir.child(LINKED_DATA_FILE).path())
            .assert()
            .success()
            .stdout(predicate::str::contains("CQ6 [Performance] Who has taken the most wickets?\n    Wahab Riaz (113 wickets)"))
            .stdout(predicate::str::contains("2 constraint violations"));
        Ok(())
    }

    #[test]
    fn cli_query_writes_csv() -> Result<()> {
        let dir = pipeline_output()?;
        cli_command()
            .arg("query")
            .arg("--data")
            .arg(dir.child(LINKED_DATA_FILE).path())
            .arg("--query")
            .arg("SELECT ?name WHERE { ?p a <http://example.org/cricket/ontology#Team> ; <http://www.w3.org/2000/01/rdf-schema#label> ?name } ORDER BY ?name")
            .arg("--results-format")
            .arg("csv")
            .assert()
            .success()
            .stdout("name\r\nLahore Qalanders\r\nPeshawar Zalmi\r\n");
        Ok(())
    }

    #[test]
    fn cli_query_rejects_invalid_syntax() -> Result<()> {
        let dir = pipeline_output()?;
        cli_command()
            .arg("query")
            .arg("--data")
            .arg(dir.child(LINKED_DATA_FILE).path())
            .arg("--query")
            .arg("SELECT WHERE {")
            .assert()
            .failure();
        Ok(())
    }

    #[test]
    fn cli_convert_reports_missing_columns() -> Result<()> {
        let dir = TempDir::new()?;
        let input = dir.child("broken.csv");
        input.write_str("Player,Team Name\nWahab Riaz,Peshawar Zalmi\n")?;
        cli_command()
            .arg("convert")
            .arg("--input")
            .arg(input.path())
            .arg("--output")
            .arg(dir.child("out.ttl").path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("broken.csv"));
        Ok(())
    }

    #[test]
    fn cli_classes_lists_the_ontology() {
        cli_command()
            .arg("classes")
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 28 classes"))
            .stdout(predicate::str::contains("BowlingStatistics"));
    }

    #[test]
    fn cli_writes_federated_queries() -> Result<()> {
        let dir = TempDir::new()?;
        let output = dir.child("federated.sparql");
        cli_command()
            .arg("federated-queries")
            .arg("--output")
            .arg(output.path())
            .assert()
            .success();
        output.assert(predicate::str::contains("SERVICE <http://dbpedia.org/sparql>"));
        Ok(())
    }
}
