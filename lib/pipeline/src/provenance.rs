use crate::convert::ConversionOptions;
use crate::error::ConversionError;
use cricket_kg_model::vocab::external::CC_BY_4;
use cricket_kg_model::vocab::{dcterms, rdf, void, xsd};
use cricket_kg_model::{english_literal, Graph, Literal, TripleRef};
use time::format_description::well_known::Rfc3339;

pub const DATASET_TITLE: &str = "Cricket Bowling Statistics Dataset";
pub const DATASET_DESCRIPTION: &str = "PSL bowling statistics using enhanced ontology";
pub const DATASET_CREATOR: &str = "Cricket Statistics Project";

/// Emits the metadata record of the dataset.
///
/// The record describes the dataset as a `void:Dataset` with its title, description, creation
/// timestamp, creator, source file and license.
pub fn emit_provenance(
    graph: &mut Graph,
    options: &ConversionOptions,
) -> Result<(), ConversionError> {
    let dataset = options.dataset.as_ref();
    let created = Literal::new_typed_literal(options.created.format(&Rfc3339)?, xsd::DATE_TIME);

    graph.insert(TripleRef::new(dataset, rdf::TYPE, void::DATASET));
    graph.insert(TripleRef::new(
        dataset,
        dcterms::TITLE,
        &english_literal(DATASET_TITLE),
    ));
    graph.insert(TripleRef::new(
        dataset,
        dcterms::DESCRIPTION,
        &english_literal(DATASET_DESCRIPTION),
    ));
    graph.insert(TripleRef::new(dataset, dcterms::CREATED, &created));
    graph.insert(TripleRef::new(
        dataset,
        dcterms::CREATOR,
        &Literal::new_simple_literal(DATASET_CREATOR),
    ));
    graph.insert(TripleRef::new(
        dataset,
        dcterms::SOURCE,
        &Literal::new_simple_literal(&options.source_name),
    ));
    graph.insert(TripleRef::new(dataset, dcterms::LICENSE, CC_BY_4));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_kg_model::Term;
    use time::macros::datetime;

    #[test]
    fn emits_a_single_dataset_record() {
        let options = ConversionOptions::new("bowlingAvg_clean.csv")
            .with_created(datetime!(2024-03-01 12:30:05 UTC));
        let mut graph = Graph::new();
        emit_provenance(&mut graph, &options).unwrap();
        emit_provenance(&mut graph, &options).unwrap();

        assert_eq!(graph.len(), 7);
        assert_eq!(
            graph
                .subjects_for_predicate_object(rdf::TYPE, void::DATASET)
                .count(),
            1
        );
        let created = graph
            .object_for_subject_predicate(&options.dataset, dcterms::CREATED)
            .map(|o| o.into_owned());
        assert_eq!(
            created,
            Some(Term::from(Literal::new_typed_literal(
                "2024-03-01T12:30:05Z",
                xsd::DATE_TIME
            )))
        );
        assert!(graph.contains(TripleRef::new(
            &options.dataset,
            dcterms::SOURCE,
            &Literal::new_simple_literal("bowlingAvg_clean.csv")
        )));
        assert_eq!(
            options.dataset.as_str(),
            "http://example.org/cricket/dataset/bowling-statistics"
        );
    }
}
