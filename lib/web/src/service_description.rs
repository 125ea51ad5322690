use crate::error::ServerError;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cricket_kg::model::vocab::rdf;
use cricket_kg::model::{BlankNode, Graph, NamedNodeRef, TripleRef};
use cricket_kg::{ExportFormat, QueryResultsFormat};

mod sd {
    use cricket_kg::model::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/ns/sparql-service-description#";

    pub const SERVICE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/ns/sparql-service-description#Service",
    );

    pub const DEFAULT_ENTAILMENT_REGIME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/ns/sparql-service-description#defaultEntailmentRegime",
    );
    pub const ENDPOINT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/ns/sparql-service-description#endpoint",
    );
    pub const RESULT_FORMAT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/ns/sparql-service-description#resultFormat",
    );
    pub const SUPPORTED_LANGUAGE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/ns/sparql-service-description#supportedLanguage",
    );

    pub const SPARQL_10_QUERY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/ns/sparql-service-description#SPARQL10Query",
    );
    pub const SPARQL_11_QUERY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/ns/sparql-service-description#SPARQL11Query",
    );
}

const SIMPLE_ENTAILMENT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/entailment/Simple");
const JSON_LD: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/formats/JSON-LD");

pub struct ServiceDescription {
    format: ExportFormat,
    description: Vec<u8>,
}

impl IntoResponse for ServiceDescription {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(CONTENT_TYPE, self.format.media_type())],
            self.description,
        )
            .into_response()
    }
}

/// Describes the read-only query endpoint.
pub fn generate_service_description(
    format: ExportFormat,
) -> Result<ServiceDescription, ServerError> {
    let mut graph = Graph::new();
    let root = BlankNode::default();
    graph.insert(TripleRef::new(&root, rdf::TYPE, sd::SERVICE));
    if matches!(format, ExportFormat::Turtle | ExportFormat::RdfXml) {
        // The empty relative IRI resolves to the IRI the description is served from.
        graph.insert(TripleRef::new(
            &root,
            sd::ENDPOINT,
            NamedNodeRef::new_unchecked(""),
        ));
    }
    for language in [sd::SPARQL_10_QUERY, sd::SPARQL_11_QUERY] {
        graph.insert(TripleRef::new(&root, sd::SUPPORTED_LANGUAGE, language));
    }
    for format in [
        QueryResultsFormat::Json,
        QueryResultsFormat::Xml,
        QueryResultsFormat::Csv,
        QueryResultsFormat::Tsv,
    ] {
        graph.insert(TripleRef::new(
            &root,
            sd::RESULT_FORMAT,
            NamedNodeRef::new_unchecked(format.iri()),
        ));
    }
    for format in ExportFormat::ALL {
        let iri = format
            .rdf_format()
            .map_or(JSON_LD, |format| NamedNodeRef::new_unchecked(format.iri()));
        graph.insert(TripleRef::new(&root, sd::RESULT_FORMAT, iri));
    }
    graph.insert(TripleRef::new(
        &root,
        sd::DEFAULT_ENTAILMENT_REGIME,
        SIMPLE_ENTAILMENT,
    ));

    let description = format.write_graph(&graph, &[("sd", sd::NAMESPACE)], Vec::new())?;
    Ok(ServiceDescription {
        format,
        description,
    })
}
