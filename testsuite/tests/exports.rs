#![cfg(test)]
#![expect(clippy::panic_in_result_fn, reason = "assertions in tests returning Result")]

use anyhow::{Context, Result};
use cricket_kg::model::vocab::{namespaces, rdf};
use cricket_kg::model::{
    BlankNode, CanonicalizationAlgorithm, Graph, Literal, NamedNode, Subject, Term, Triple,
};
use cricket_kg::{ExportFormat, KnowledgeGraph};
use cricket_kg_testsuite::build_sample;
use serde_json::Value;
use std::collections::HashSet;

fn canonical(graph: &Graph) -> Graph {
    let mut graph = graph.clone();
    graph.canonicalize(CanonicalizationAlgorithm::Unstable);
    graph
}

#[test]
fn rdf_exports_reload_to_the_same_graph() -> Result<()> {
    let graph = build_sample()?.graph;
    for format in [
        ExportFormat::Turtle,
        ExportFormat::RdfXml,
        ExportFormat::NTriples,
    ] {
        let bytes = format.write_graph(&graph, &namespaces::DATA_PREFIXES, Vec::new())?;
        let reloaded = KnowledgeGraph::load_from_reader(format, bytes.as_slice())?;
        assert_eq!(
            canonical(reloaded.graph()),
            canonical(&graph),
            "{format} export differs"
        );
    }
    Ok(())
}

#[test]
fn json_ld_has_one_node_per_subject() -> Result<()> {
    let graph = build_sample()?.graph;
    let bytes = ExportFormat::JsonLd.write_graph(&graph, &[], Vec::new())?;
    let document = serde_json::from_slice::<Value>(&bytes)?;
    let subjects = graph
        .iter()
        .map(|triple| triple.subject.to_string())
        .collect::<HashSet<_>>();
    assert_eq!(document.as_array().map(Vec::len), Some(subjects.len()));
    Ok(())
}

fn resource_subject(id: &str) -> Result<Subject> {
    Ok(match id.strip_prefix("_:") {
        Some(blank) => BlankNode::new(blank)?.into(),
        None => NamedNode::new(id)?.into(),
    })
}

fn resource_term(id: &str) -> Result<Term> {
    Ok(match id.strip_prefix("_:") {
        Some(blank) => BlankNode::new(blank)?.into(),
        None => NamedNode::new(id)?.into(),
    })
}

fn value_term(value: &Value) -> Result<Term> {
    if let Some(id) = value["@id"].as_str() {
        return resource_term(id);
    }
    let lexical = value["@value"]
        .as_str()
        .context("value object without @value")?;
    Ok(match (value["@language"].as_str(), value["@type"].as_str()) {
        (Some(language), _) => Literal::new_language_tagged_literal(lexical, language)?.into(),
        (None, Some(datatype)) => {
            Literal::new_typed_literal(lexical, NamedNode::new(datatype)?).into()
        }
        (None, None) => Literal::new_simple_literal(lexical).into(),
    })
}

/// Reads the facts back out of an expanded JSON-LD document.
fn decode_expanded_json_ld(document: &Value) -> Result<Graph> {
    let mut graph = Graph::new();
    for node in document.as_array().context("expected an array of nodes")? {
        let node = node.as_object().context("expected a node object")?;
        let id = node
            .get("@id")
            .and_then(Value::as_str)
            .context("node without @id")?;
        let subject = resource_subject(id)?;
        for (key, values) in node {
            if key == "@id" {
                continue;
            }
            for value in values.as_array().context("expected an array of values")? {
                let (predicate, object) = if key == "@type" {
                    let class = value.as_str().context("@type is not a string")?;
                    (rdf::TYPE.into_owned(), resource_term(class)?)
                } else {
                    (NamedNode::new(key.as_str())?, value_term(value)?)
                };
                graph.insert(&Triple::new(subject.clone(), predicate, object));
            }
        }
    }
    Ok(graph)
}

#[test]
fn json_ld_export_carries_every_fact() -> Result<()> {
    let graph = build_sample()?.graph;
    let bytes = ExportFormat::JsonLd.write_graph(&graph, &[], Vec::new())?;
    let decoded = decode_expanded_json_ld(&serde_json::from_slice(&bytes)?)?;
    assert_eq!(decoded.len(), graph.len());
    assert_eq!(canonical(&decoded), canonical(&graph));
    Ok(())
}

#[test]
fn knowledge_graph_summary_matches_the_sample() -> Result<()> {
    let kg = KnowledgeGraph::from_graph(build_sample()?.graph)?;
    let summary = kg.summary()?;
    assert_eq!(summary.players, 14);
    assert_eq!(summary.teams, 6);
    assert_eq!(summary.total_wickets, 504);
    assert_eq!(summary.external_links, 38);
    assert_eq!(kg.top_wicket_takers()?.len(), 14);
    assert_eq!(kg.team_statistics()?.len(), 6);
    Ok(())
}
