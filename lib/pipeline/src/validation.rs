//! Checks the cardinality constraints of the ontology against an instance graph.
//!
//! The ontology states them as OWL restrictions, which an open-world reasoner never reports as
//! violated. This pass checks them under a closed-world reading instead.

use crate::ontology::MIN_SQUAD_SIZE;
use cricket_kg_model::vocab::{cricket, rdf};
use cricket_kg_model::{Graph, NamedNode, NamedNodeRef, SubjectRef};
use std::fmt;

/// A violated cardinality constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A player does not play for exactly one team.
    PlayerTeamCount { player: NamedNode, teams: usize },
    /// A team has fewer than [`MIN_SQUAD_SIZE`] players.
    TeamRosterTooSmall { team: NamedNode, players: usize },
    /// A statistics record does not point to exactly one player.
    RecordPlayerCount { record: NamedNode, players: usize },
    /// A statistics record does not point to exactly one team.
    RecordTeamCount { record: NamedNode, teams: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::PlayerTeamCount { player, teams } => {
                write!(f, "Player {player} plays for {teams} teams instead of 1")
            }
            Violation::TeamRosterTooSmall { team, players } => write!(
                f,
                "Team {team} has {players} players, fewer than {MIN_SQUAD_SIZE}"
            ),
            Violation::RecordPlayerCount { record, players } => {
                write!(f, "Record {record} is for {players} players instead of 1")
            }
            Violation::RecordTeamCount { record, teams } => {
                write!(f, "Record {record} is for {teams} teams instead of 1")
            }
        }
    }
}

/// Reports every violated cardinality constraint of `graph`.
///
/// Violations are logged and returned. They never fail a build.
pub fn validate(graph: &Graph) -> Vec<Violation> {
    let mut violations = Vec::new();

    for player in instances(graph, cricket::PLAYER) {
        let teams = count(graph, &player, cricket::PLAYS_FOR);
        if teams != 1 {
            violations.push(Violation::PlayerTeamCount { player, teams });
        }
    }
    for team in instances(graph, cricket::TEAM) {
        let players = count(graph, &team, cricket::HAS_PLAYER);
        if players < MIN_SQUAD_SIZE {
            violations.push(Violation::TeamRosterTooSmall { team, players });
        }
    }
    for record in instances(graph, cricket::BOWLING_STATISTICS) {
        let players = count(graph, &record, cricket::FOR_PLAYER);
        if players != 1 {
            violations.push(Violation::RecordPlayerCount {
                record: record.clone(),
                players,
            });
        }
        let teams = count(graph, &record, cricket::FOR_TEAM);
        if teams != 1 {
            violations.push(Violation::RecordTeamCount { record, teams });
        }
    }

    for violation in &violations {
        tracing::warn!(%violation, "Cardinality constraint violated");
    }
    tracing::info!(violations = violations.len(), "Validated cardinality constraints");
    violations
}

/// The named instances of `class`, sorted by IRI.
fn instances(graph: &Graph, class: NamedNodeRef<'_>) -> Vec<NamedNode> {
    let mut instances = graph
        .subjects_for_predicate_object(rdf::TYPE, class)
        .filter_map(|subject| match subject {
            SubjectRef::NamedNode(node) => Some(node.into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>();
    instances.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    instances
}

fn count(graph: &Graph, subject: &NamedNode, predicate: NamedNodeRef<'_>) -> usize {
    graph
        .objects_for_subject_predicate(subject, predicate)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{convert_reader, ConversionOptions};
    use cricket_kg_model::{build_identifier, stats_identifier, EntityKind, TripleRef};

    const HEADER: &str = "Player,Team Name,Span,Mat,Inns,Overs,Mdns,Runs,Wkts,Ave,Econ,SR,4,5,Ct,St,BBI\n";

    fn squad(team: &str, size: usize) -> String {
        (0..size)
            .map(|i| format!("Player {i} of {team},{team},2020-2023,10,10,30,0,250,12,20.8,8.3,15.0,0,0,1,0,3/20\n"))
            .collect()
    }

    fn convert(rows: &str) -> Graph {
        convert_reader(
            format!("{HEADER}{rows}").as_bytes(),
            "bowling.csv",
            &ConversionOptions::new("bowling.csv"),
        )
        .unwrap()
        .graph
    }

    #[test]
    fn a_full_squad_is_valid() {
        let graph = convert(&squad("Karachi Kings", MIN_SQUAD_SIZE));
        assert_eq!(validate(&graph), vec![]);
    }

    #[test]
    fn reports_small_rosters() {
        let graph = convert(&squad("Multan Sultans", 3));
        assert_eq!(
            validate(&graph),
            vec![Violation::TeamRosterTooSmall {
                team: build_identifier("Multan Sultans", EntityKind::Team),
                players: 3
            }]
        );
    }

    #[test]
    fn reports_players_of_several_teams() {
        let rows = format!(
            "{}{}Wahab Riaz,Quetta Gladiators,2024,5,5,18,0,150,6,25.0,8.3,18.0,0,0,1,0,2/20\n",
            squad("Peshawar Zalmi", MIN_SQUAD_SIZE),
            squad("Quetta Gladiators", MIN_SQUAD_SIZE),
        );
        let mut graph = convert(&rows);
        let wahab = build_identifier("Wahab Riaz", EntityKind::Player);
        let zalmi = build_identifier("Peshawar Zalmi", EntityKind::Team);
        graph.insert(TripleRef::new(&wahab, cricket::PLAYS_FOR, &zalmi));

        assert_eq!(
            validate(&graph),
            vec![Violation::PlayerTeamCount {
                player: wahab,
                teams: 2
            }]
        );
    }

    #[test]
    fn reports_records_without_a_team() {
        let mut graph = convert(&squad("Lahore Qalanders", MIN_SQUAD_SIZE));
        let record = stats_identifier(0);
        let team = build_identifier("Lahore Qalanders", EntityKind::Team);
        graph.remove(TripleRef::new(&record, cricket::FOR_TEAM, &team));

        let violations = validate(&graph);
        assert_eq!(
            violations,
            vec![Violation::RecordTeamCount { record, teams: 0 }]
        );
        assert!(violations[0].to_string().ends_with("is for 0 teams instead of 1"));
    }
}
