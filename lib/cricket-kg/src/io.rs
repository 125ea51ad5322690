//! Reading and writing graphs in the supported exchange formats.

use crate::error::{LoaderError, SerializerError};
use cricket_kg_model::vocab::{rdf, xsd};
use cricket_kg_model::{Graph, LiteralRef, SubjectRef, TermRef, Triple, TripleRef};
use oxrdfio::{RdfParser, RdfSerializer};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{Read, Write};

pub use oxrdfio::RdfFormat;

/// The formats a graph can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Turtle,
    RdfXml,
    NTriples,
    /// [JSON-LD](https://www.w3.org/TR/json-ld11/) in expanded document form.
    JsonLd,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Turtle,
        ExportFormat::RdfXml,
        ExportFormat::NTriples,
        ExportFormat::JsonLd,
    ];

    /// The canonical file extension.
    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Turtle => "ttl",
            ExportFormat::RdfXml => "rdf",
            ExportFormat::NTriples => "nt",
            ExportFormat::JsonLd => "jsonld",
        }
    }

    /// The canonical media type.
    pub fn media_type(self) -> &'static str {
        match self {
            ExportFormat::Turtle => "text/turtle",
            ExportFormat::RdfXml => "application/rdf+xml",
            ExportFormat::NTriples => "application/n-triples",
            ExportFormat::JsonLd => "application/ld+json",
        }
    }

    /// Guesses the format from a file extension. `owl` files are RDF/XML.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "ttl" => Some(ExportFormat::Turtle),
            "rdf" | "owl" | "xml" => Some(ExportFormat::RdfXml),
            "nt" => Some(ExportFormat::NTriples),
            "jsonld" | "json" => Some(ExportFormat::JsonLd),
            _ => None,
        }
    }

    /// Looks up the format of a media type. Parameters such as `charset` are ignored.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next()?.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.media_type().eq_ignore_ascii_case(essence))
    }

    /// Parses a user supplied format name, e.g. `turtle` or `json-ld`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "turtle" => Some(ExportFormat::Turtle),
            "rdfxml" | "rdf/xml" => Some(ExportFormat::RdfXml),
            "ntriples" | "n-triples" => Some(ExportFormat::NTriples),
            "json-ld" => Some(ExportFormat::JsonLd),
            other => Self::from_extension(other),
        }
    }

    /// The matching RDF syntax of the parser and serializer. JSON-LD is written by this crate.
    pub fn rdf_format(self) -> Option<RdfFormat> {
        match self {
            ExportFormat::Turtle => Some(RdfFormat::Turtle),
            ExportFormat::RdfXml => Some(RdfFormat::RdfXml),
            ExportFormat::NTriples => Some(RdfFormat::NTriples),
            ExportFormat::JsonLd => None,
        }
    }

    /// Writes `graph` to `writer`.
    ///
    /// Triples are written in a stable order so that equal graphs give equal files. `prefixes`
    /// are declared in the formats that support them.
    pub fn write_graph<W: Write>(
        self,
        graph: &Graph,
        prefixes: &[(&str, &str)],
        writer: W,
    ) -> Result<W, SerializerError> {
        let Some(format) = self.rdf_format() else {
            return write_json_ld(graph, writer);
        };

        let mut serializer = RdfSerializer::from_format(format);
        for (name, iri) in prefixes {
            serializer = serializer.with_prefix(*name, *iri).map_err(|error| {
                SerializerError::InvalidPrefix {
                    prefix: (*name).to_owned(),
                    error,
                }
            })?;
        }
        let mut serializer = serializer.for_writer(writer);
        for triple in sorted_triples(graph) {
            serializer.serialize_triple(triple)?;
        }
        Ok(serializer.finish()?)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Turtle => f.write_str("Turtle"),
            ExportFormat::RdfXml => f.write_str("RDF/XML"),
            ExportFormat::NTriples => f.write_str("N-Triples"),
            ExportFormat::JsonLd => f.write_str("JSON-LD"),
        }
    }
}

/// Reads a graph. Quads of named graphs are merged into the graph.
pub fn parse_graph(format: RdfFormat, reader: impl Read) -> Result<Graph, LoaderError> {
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(format).for_reader(reader) {
        graph.insert(&Triple::from(quad?));
    }
    Ok(graph)
}

fn sorted_triples(graph: &Graph) -> Vec<TripleRef<'_>> {
    let mut triples = graph.iter().collect::<Vec<_>>();
    triples.sort_by_cached_key(ToString::to_string);
    triples
}

fn write_json_ld<W: Write>(graph: &Graph, mut writer: W) -> Result<W, SerializerError> {
    let mut nodes = BTreeMap::<String, Map<String, Value>>::new();
    for triple in sorted_triples(graph) {
        let node = nodes
            .entry(subject_id(triple.subject))
            .or_insert_with_key(|id| {
                let mut node = Map::new();
                node.insert("@id".to_owned(), Value::String(id.clone()));
                node
            });
        let is_type = triple.predicate == rdf::TYPE;
        let (key, value) = match (is_type, triple.object) {
            (true, TermRef::NamedNode(class)) => {
                ("@type".to_owned(), Value::String(class.as_str().to_owned()))
            }
            (true, TermRef::BlankNode(class)) => {
                ("@type".to_owned(), Value::String(format!("_:{}", class.as_str())))
            }
            (_, object) => (triple.predicate.as_str().to_owned(), object_value(object)),
        };
        if let Value::Array(values) = node
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            values.push(value);
        }
    }

    let document = Value::Array(nodes.into_values().map(Value::Object).collect());
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.write_all(b"\n")?;
    Ok(writer)
}

fn subject_id(subject: SubjectRef<'_>) -> String {
    match subject {
        SubjectRef::NamedNode(node) => node.as_str().to_owned(),
        SubjectRef::BlankNode(node) => format!("_:{}", node.as_str()),
        SubjectRef::Triple(triple) => triple.to_string(),
    }
}

fn object_value(object: TermRef<'_>) -> Value {
    match object {
        TermRef::NamedNode(node) => json!({ "@id": node.as_str() }),
        TermRef::BlankNode(node) => json!({ "@id": format!("_:{}", node.as_str()) }),
        TermRef::Literal(literal) => literal_value(literal),
        TermRef::Triple(triple) => json!({ "@value": triple.to_string() }),
    }
}

fn literal_value(literal: LiteralRef<'_>) -> Value {
    if let Some(language) = literal.language() {
        json!({ "@value": literal.value(), "@language": language })
    } else if literal.datatype() == xsd::STRING {
        json!({ "@value": literal.value() })
    } else {
        json!({ "@value": literal.value(), "@type": literal.datatype().as_str() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_kg_model::vocab::{cricket, namespaces, rdfs};
    use cricket_kg_model::{
        english_literal, float_literal, BlankNode, CanonicalizationAlgorithm, NamedNode,
    };

    fn canonical(mut graph: Graph) -> Graph {
        graph.canonicalize(CanonicalizationAlgorithm::Unstable);
        graph
    }

    fn sample() -> Graph {
        let player = NamedNode::new_unchecked(format!("{}Wahab_Riaz", namespaces::PLAYER));
        let team = BlankNode::new_unchecked("team");
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(&player, rdf::TYPE, cricket::PLAYER));
        graph.insert(TripleRef::new(
            &player,
            cricket::WICKETS,
            &float_literal(113.0),
        ));
        graph.insert(TripleRef::new(
            &player,
            rdfs::LABEL,
            &english_literal("Wahab Riaz"),
        ));
        graph.insert(TripleRef::new(&team, rdf::TYPE, cricket::TEAM));
        graph
    }

    #[test]
    fn round_trips_through_every_rdf_syntax() {
        let graph = sample();
        for format in ExportFormat::ALL {
            let Some(rdf_format) = format.rdf_format() else {
                continue;
            };
            let bytes = format
                .write_graph(&graph, &namespaces::DATA_PREFIXES, Vec::new())
                .unwrap();
            let parsed = parse_graph(rdf_format, bytes.as_slice()).unwrap();
            assert_eq!(
                canonical(parsed),
                canonical(graph.clone()),
                "{format} does not round-trip"
            );
        }
    }

    #[test]
    fn writes_prefixed_turtle() {
        let bytes = ExportFormat::Turtle
            .write_graph(&sample(), &namespaces::DATA_PREFIXES, Vec::new())
            .unwrap();
        let turtle = String::from_utf8(bytes).unwrap();
        assert!(turtle.contains("@prefix cricket: <http://example.org/cricket/ontology#>"));
        assert!(turtle.contains("player:Wahab_Riaz"));
    }

    #[test]
    fn equal_graphs_give_equal_output() {
        let write = |graph: &Graph| {
            ExportFormat::NTriples
                .write_graph(graph, &[], Vec::new())
                .unwrap()
        };
        let graph = sample();
        let mut reversed = Graph::new();
        for triple in graph.iter().collect::<Vec<_>>().into_iter().rev() {
            reversed.insert(triple);
        }
        assert_eq!(write(&graph), write(&sample()));
        assert_eq!(write(&graph), write(&reversed));
    }

    #[test]
    fn writes_expanded_json_ld() {
        let bytes = ExportFormat::JsonLd
            .write_graph(&sample(), &[], Vec::new())
            .unwrap();
        let document: Value = serde_json::from_slice(&bytes).unwrap();
        let nodes = document.as_array().unwrap();
        assert_eq!(nodes.len(), 2);

        let player = nodes
            .iter()
            .find(|node| node["@id"] == "http://example.org/cricket/resource/player/Wahab_Riaz")
            .unwrap();
        assert_eq!(player["@type"], json!([cricket::PLAYER.as_str()]));
        assert_eq!(
            player[cricket::WICKETS.as_str()],
            json!([{ "@value": "113.0", "@type": xsd::FLOAT.as_str() }])
        );
        assert_eq!(
            player[rdfs::LABEL.as_str()],
            json!([{ "@value": "Wahab Riaz", "@language": "en" }])
        );
    }

    #[test]
    fn guesses_formats() {
        assert_eq!(ExportFormat::from_extension("owl"), Some(ExportFormat::RdfXml));
        assert_eq!(ExportFormat::from_extension("TTL"), Some(ExportFormat::Turtle));
        assert_eq!(ExportFormat::from_name("json-ld"), Some(ExportFormat::JsonLd));
        assert_eq!(ExportFormat::from_name("nt"), Some(ExportFormat::NTriples));
        assert_eq!(ExportFormat::from_name("csv"), None);
        assert_eq!(
            ExportFormat::from_media_type("text/turtle; charset=utf-8"),
            Some(ExportFormat::Turtle)
        );
        assert_eq!(
            ExportFormat::from_media_type("application/ld+json"),
            Some(ExportFormat::JsonLd)
        );
    }
}
