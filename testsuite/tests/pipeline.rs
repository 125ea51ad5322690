#![cfg(test)]
#![expect(clippy::panic_in_result_fn, reason = "assertions in tests returning Result")]

use anyhow::Result;
use cricket_kg::model::vocab::{cricket, rdf};
use cricket_kg::model::{build_identifier, EntityKind, SubjectRef};
use cricket_kg::pipeline::{validate, TierCounts, Violation};
use cricket_kg_testsuite::build_sample;

#[test]
fn converts_every_row() -> Result<()> {
    let report = build_sample()?.conversion;
    assert_eq!(report.records, 15);
    assert_eq!(report.players, 14);
    assert_eq!(report.teams, 6);
    assert_eq!(
        report.tiers,
        TierCounts {
            excellent: 2,
            good: 5,
            average: 3,
            poor: 3,
            untiered: 2,
        }
    );
    Ok(())
}

#[test]
fn links_known_players_and_every_team() -> Result<()> {
    let links = build_sample()?.links;
    assert_eq!(links.linked_entities, 19);
    assert_eq!(links.links_added, 38);
    assert_eq!(links.skipped, 25);
    Ok(())
}

#[test]
fn builds_are_reproducible() -> Result<()> {
    assert_eq!(build_sample()?.graph, build_sample()?.graph);
    Ok(())
}

#[test]
fn every_record_has_one_player_and_one_team() -> Result<()> {
    let graph = build_sample()?.graph;
    let records = graph
        .subjects_for_predicate_object(rdf::TYPE, cricket::BOWLING_STATISTICS)
        .collect::<Vec<_>>();
    assert_eq!(records.len(), 15);
    for record in records {
        assert_eq!(
            graph
                .objects_for_subject_predicate(record, cricket::FOR_PLAYER)
                .count(),
            1,
            "{record}"
        );
        assert_eq!(
            graph
                .objects_for_subject_predicate(record, cricket::FOR_TEAM)
                .count(),
            1,
            "{record}"
        );
    }
    Ok(())
}

#[test]
fn repeated_players_get_one_resource_and_two_records() -> Result<()> {
    let graph = build_sample()?.graph;
    let shadab = build_identifier("Shadab Khan", EntityKind::Player);
    assert_eq!(
        graph
            .subjects_for_predicate_object(rdf::TYPE, cricket::PLAYER)
            .filter(|player| *player == SubjectRef::NamedNode(shadab.as_ref()))
            .count(),
        1
    );
    assert_eq!(
        graph
            .subjects_for_predicate_object(cricket::FOR_PLAYER, &shadab)
            .count(),
        2
    );
    Ok(())
}

#[test]
fn unparsable_cells_are_omitted() -> Result<()> {
    let graph = build_sample()?.graph;
    let usman = build_identifier("Usman Qadir", EntityKind::Player);
    let record = graph
        .subject_for_predicate_object(cricket::FOR_PLAYER, &usman)
        .ok_or_else(|| anyhow::anyhow!("Usman Qadir has no record"))?;
    assert_eq!(
        graph
            .objects_for_subject_predicate(record, cricket::WICKETS)
            .count(),
        0
    );
    assert_eq!(
        graph
            .objects_for_subject_predicate(record, cricket::ECONOMY)
            .count(),
        1
    );
    Ok(())
}

#[test]
fn small_rosters_are_reported() -> Result<()> {
    let violations = validate(&build_sample()?.graph);
    assert_eq!(violations.len(), 6);
    assert!(violations
        .iter()
        .all(|violation| matches!(violation, Violation::TeamRosterTooSmall { .. })));
    Ok(())
}
