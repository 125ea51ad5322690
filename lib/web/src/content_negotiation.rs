use crate::error::ServerError;
use crate::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use cricket_kg::{ExportFormat, QueryResultsFormat};
use headers::HeaderMapExt;
use headers_accept::Accept;
use mediatype::names::{APPLICATION, CSV, HTML, JSON, N_TRIPLES, PLAIN, TEXT, TURTLE, XML};
use mediatype::{MediaType, Name};

const RDF_XML: MediaType<'static> =
    MediaType::from_parts(APPLICATION, Name::new_unchecked("rdf"), Some(XML), &[]);
const LD_JSON: MediaType<'static> =
    MediaType::from_parts(APPLICATION, Name::new_unchecked("ld"), Some(JSON), &[]);
const SPARQL_RESULTS_JSON: MediaType<'static> =
    MediaType::from_parts(APPLICATION, Name::new_unchecked("sparql-results"), Some(JSON), &[]);
const SPARQL_RESULTS_XML: MediaType<'static> =
    MediaType::from_parts(APPLICATION, Name::new_unchecked("sparql-results"), Some(XML), &[]);

/// Handles the content-negotiation for requests that return RDF data.
impl FromRequestParts<AppState> for ExportFormat {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        static MEDIA_TYPES: [MediaType<'_>; 4] = [
            MediaType::new(TEXT, TURTLE),
            RDF_XML,
            MediaType::new(APPLICATION, N_TRIPLES),
            LD_JSON,
        ];
        static DEFAULT_MEDIA_TYPE: MediaType<'_> = MediaType::new(TEXT, TURTLE);

        let accept = parts.headers.typed_get::<Accept>();
        let media_type = content_negotiation(
            accept,
            &MEDIA_TYPES,
            &DEFAULT_MEDIA_TYPE,
            "text/turtle or application/ld+json",
        )?;
        export_format(&media_type)
    }
}

/// The representation of the whole dataset: a page for browsers or one of the RDF formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRepresentation {
    Html,
    Rdf(ExportFormat),
}

impl FromRequestParts<AppState> for DataRepresentation {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        static MEDIA_TYPES: [MediaType<'_>; 5] = [
            MediaType::new(TEXT, TURTLE),
            RDF_XML,
            MediaType::new(APPLICATION, N_TRIPLES),
            LD_JSON,
            MediaType::new(TEXT, HTML),
        ];
        static DEFAULT_MEDIA_TYPE: MediaType<'_> = MediaType::new(TEXT, TURTLE);

        let accept = parts.headers.typed_get::<Accept>();
        let media_type = content_negotiation(
            accept,
            &MEDIA_TYPES,
            &DEFAULT_MEDIA_TYPE,
            "text/turtle or text/html",
        )?;
        if media_type.ty == TEXT && media_type.subty == HTML {
            return Ok(DataRepresentation::Html);
        }
        export_format(&media_type).map(DataRepresentation::Rdf)
    }
}

/// Handles the content-negotiation for requests that return query results.
impl FromRequestParts<AppState> for QueryResultsFormat {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        static MEDIA_TYPES: [MediaType<'_>; 8] = [
            SPARQL_RESULTS_JSON,
            MediaType::new(APPLICATION, JSON),
            SPARQL_RESULTS_XML,
            MediaType::new(APPLICATION, XML),
            MediaType::new(TEXT, CSV),
            MediaType::new(TEXT, Name::new_unchecked("tab-separated-values")),
            MediaType::new(TEXT, Name::new_unchecked("tsv")),
            MediaType::new(TEXT, PLAIN),
        ];
        static DEFAULT_MEDIA_TYPE: MediaType<'_> = SPARQL_RESULTS_JSON;

        let accept = parts.headers.typed_get::<Accept>();
        let media_type = content_negotiation(
            accept,
            &MEDIA_TYPES,
            &DEFAULT_MEDIA_TYPE,
            "application/sparql-results+json or text/tsv",
        )?;

        let media_type = media_type.to_string();
        let media_type = match media_type.as_str() {
            "text/tsv" | "text/plain" => "text/tab-separated-values",
            other => other,
        };
        QueryResultsFormat::from_media_type(media_type).ok_or(ServerError::BadRequest(format!(
            "Could not convert negotiated media type '{media_type}' to internal representation."
        )))
    }
}

fn export_format(media_type: &MediaType<'_>) -> Result<ExportFormat, ServerError> {
    ExportFormat::from_media_type(&media_type.to_string()).ok_or(ServerError::BadRequest(format!(
        "Could not convert negotiated media type '{media_type}' to internal representation."
    )))
}

fn content_negotiation<'media>(
    accept: Option<Accept>,
    available: &'media [MediaType<'media>],
    default: &'media MediaType<'media>,
    example: &str,
) -> Result<MediaType<'media>, ServerError> {
    let Some(accept) = accept else {
        return Ok(default.clone());
    };

    match accept.negotiate(available) {
        None => Err(ServerError::ContentNegotiation(format!(
            "The accept header does not provide any accepted format like {example}."
        ))),
        Some(result) => Ok(result.clone()),
    }
}
