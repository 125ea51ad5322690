//! End-to-end checks of the cricket knowledge graph on a sample of the bowling statistics.

use anyhow::Result;
use cricket_kg::model::Graph;
use cricket_kg::pipeline::{
    apply_links, convert_csv, ConversionOptions, ConversionReport, LinkReport, LinkTable,
};
use cricket_kg::KnowledgeGraph;
use std::path::{Path, PathBuf};
use time::macros::datetime;

/// The path of a file in the `data` directory of the test suite.
pub fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// The result of running the conversion and the linking on the sample.
pub struct SampleBuild {
    pub graph: Graph,
    pub conversion: ConversionReport,
    pub links: LinkReport,
}

/// Converts and links `bowling_sample.csv` with a fixed creation timestamp.
pub fn build_sample() -> Result<SampleBuild> {
    let path = data_path("bowling_sample.csv");
    let options =
        ConversionOptions::for_path(&path).with_created(datetime!(2024-03-01 12:00 UTC));
    let conversion = convert_csv(&path, &options)?;
    let mut graph = conversion.graph;
    let links = apply_links(&mut graph, LinkTable::builtin()?);
    Ok(SampleBuild {
        graph,
        conversion: conversion.report,
        links,
    })
}

/// The linked sample ready for querying.
pub fn sample_knowledge_graph() -> Result<KnowledgeGraph> {
    Ok(KnowledgeGraph::from_graph(build_sample()?.graph)?)
}
