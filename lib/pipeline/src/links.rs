//! Links players and teams to external Linked-Open-Data sources.
//!
//! The link table maps the local name of an entity to its identifiers in DBpedia and Wikidata.
//! A table bundled with the crate covers the PSL teams and well-known players. Applying a table
//! only adds `owl:sameAs` facts for entities that are already part of the graph.

use crate::error::LinkTableError;
use cricket_kg_model::vocab::{namespaces, owl};
use cricket_kg_model::{build_identifier, named_node_in, EntityKind, Graph, NamedNode, TripleRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Result<LinkTable, String>> = LazyLock::new(|| {
    LinkTable::from_json_str(include_str!("../data/external_links.json"))
        .map_err(|error| error.to_string())
});

/// A Linked-Open-Data source that entities can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalSource {
    DBpedia,
    Wikidata,
}

impl ExternalSource {
    pub const ALL: [ExternalSource; 2] = [ExternalSource::DBpedia, ExternalSource::Wikidata];

    /// The namespace that identifiers of this source live in.
    pub fn namespace(self) -> &'static str {
        match self {
            ExternalSource::DBpedia => namespaces::DBPEDIA,
            ExternalSource::Wikidata => namespaces::WIKIDATA,
        }
    }

    /// The IRI of the resource with the given identifier.
    pub fn resource(self, identifier: &str) -> NamedNode {
        named_node_in(self.namespace(), identifier)
    }

    /// Recognizes the source of an external IRI.
    pub fn of_iri(iri: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|source| iri.starts_with(source.namespace()))
    }
}

impl fmt::Display for ExternalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalSource::DBpedia => f.write_str("DBpedia"),
            ExternalSource::Wikidata => f.write_str("Wikidata"),
        }
    }
}

/// The external identifiers of a single entity.
pub type ExternalIds = BTreeMap<ExternalSource, String>;

/// A static mapping from local entity names to external identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkTable {
    #[serde(default)]
    pub players: BTreeMap<String, ExternalIds>,
    #[serde(default)]
    pub teams: BTreeMap<String, ExternalIds>,
}

impl LinkTable {
    /// The table bundled with the crate. It is parsed once per process.
    pub fn builtin() -> Result<&'static LinkTable, LinkTableError> {
        BUILTIN
            .as_ref()
            .map_err(|error| LinkTableError::Builtin(error.clone()))
    }

    /// Parses a table from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, LinkTableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a table from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, LinkTableError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a table from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, LinkTableError> {
        let file = File::open(path).map_err(|source| LinkTableError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        self.players.len() + self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all entries, players first.
    pub fn entries(&self) -> impl Iterator<Item = (EntityKind, &str, &ExternalIds)> + '_ {
        let players = self
            .players
            .iter()
            .map(|(name, ids)| (EntityKind::Player, name.as_str(), ids));
        let teams = self
            .teams
            .iter()
            .map(|(name, ids)| (EntityKind::Team, name.as_str(), ids));
        players.chain(teams)
    }
}

/// Outcome of [`apply_links`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Entries whose entity is part of the graph.
    pub linked_entities: usize,
    /// `owl:sameAs` facts that were not already part of the graph.
    pub links_added: usize,
    /// Entries whose entity is not part of the graph.
    pub skipped: usize,
}

/// Adds `owl:sameAs` links for every table entry whose entity is the subject of at least one
/// fact in `graph`.
///
/// No entity is created by this function. Applying the same table twice adds nothing the second
/// time.
pub fn apply_links(graph: &mut Graph, table: &LinkTable) -> LinkReport {
    let mut report = LinkReport::default();
    for (kind, name, ids) in table.entries() {
        let entity = build_identifier(name, kind);
        if graph.triples_for_subject(&entity).next().is_none() {
            tracing::debug!(%kind, name, "No such entity in the graph, skipping its links");
            report.skipped += 1;
            continue;
        }

        report.linked_entities += 1;
        for (source, identifier) in ids {
            let target = source.resource(identifier);
            if graph.insert(TripleRef::new(&entity, owl::SAME_AS, &target)) {
                report.links_added += 1;
            }
        }
    }

    tracing::info!(
        linked_entities = report.linked_entities,
        links_added = report.links_added,
        skipped = report.skipped,
        "Applied external links"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_kg_model::vocab::{cricket, rdf};

    fn graph_with_player(name: &str) -> Graph {
        let mut graph = Graph::new();
        let player = build_identifier(name, EntityKind::Player);
        graph.insert(TripleRef::new(&player, rdf::TYPE, cricket::PLAYER));
        graph
    }

    #[test]
    fn builtin_table_covers_players_and_teams() {
        let table = LinkTable::builtin().unwrap();
        assert_eq!(table.players.len(), 38);
        assert_eq!(table.teams.len(), 6);
        assert_eq!(
            table.teams["Lahore_Qalanders"][&ExternalSource::DBpedia],
            "Lahore_Qalandars"
        );
    }

    #[test]
    fn links_an_existing_player_to_both_sources() {
        let mut graph = graph_with_player("Shaheen Shah Afridi");
        let report = apply_links(&mut graph, LinkTable::builtin().unwrap());

        assert_eq!(report.links_added, 2);
        assert_eq!(report.linked_entities, 1);
        assert_eq!(report.skipped, LinkTable::builtin().unwrap().len() - 1);
        let player = build_identifier("Shaheen Shah Afridi", EntityKind::Player);
        let mut targets = graph
            .objects_for_subject_predicate(&player, owl::SAME_AS)
            .map(|o| o.to_string())
            .collect::<Vec<_>>();
        targets.sort();
        assert_eq!(
            targets,
            [
                "<http://dbpedia.org/resource/Shaheen_Afridi>",
                "<http://www.wikidata.org/entity/Q28660671>"
            ]
        );
    }

    #[test]
    fn adds_nothing_to_an_empty_graph() {
        let mut graph = Graph::new();
        let report = apply_links(&mut graph, LinkTable::builtin().unwrap());

        assert_eq!(report.links_added, 0);
        assert_eq!(report.linked_entities, 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut graph = graph_with_player("Wahab Riaz");
        let table = LinkTable::builtin().unwrap();
        apply_links(&mut graph, table);
        let len = graph.len();
        let second = apply_links(&mut graph, table);

        assert_eq!(second.links_added, 0);
        assert_eq!(second.linked_entities, 1);
        assert_eq!(graph.len(), len);
    }

    #[test]
    fn parses_custom_tables() {
        let table = LinkTable::from_json_str(
            r#"{"players": {"Zaman_Khan": {"wikidata": "Q1"}}, "teams": {}}"#,
        )
        .unwrap();
        let mut graph = graph_with_player("Zaman Khan");
        let report = apply_links(&mut graph, &table);
        assert_eq!(report.links_added, 1);
    }

    #[test]
    fn rejects_unknown_sources() {
        let error =
            LinkTable::from_json_str(r#"{"players": {"Zaman_Khan": {"cricinfo": "1"}}}"#)
                .unwrap_err();
        assert!(matches!(error, LinkTableError::Parse(_)));
    }

    #[test]
    fn recognizes_sources_of_iris() {
        assert_eq!(
            ExternalSource::of_iri("http://dbpedia.org/resource/Babar_Azam"),
            Some(ExternalSource::DBpedia)
        );
        assert_eq!(
            ExternalSource::of_iri("http://www.wikidata.org/entity/Q1"),
            Some(ExternalSource::Wikidata)
        );
        assert_eq!(ExternalSource::of_iri("http://example.com/"), None);
    }
}
