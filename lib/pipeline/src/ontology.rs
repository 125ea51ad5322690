//! The OWL ontology describing players, teams and bowling statistics.

use cricket_kg_model::vocab::external::{DBPEDIA_CRICKET, WIKIDATA_CRICKET};
use cricket_kg_model::vocab::{cricket, owl, rdf, rdfs, schema, xsd};
use cricket_kg_model::{
    BlankNode, Graph, Literal, NamedNode, NamedNodeRef, SubjectRef, TermRef, TripleRef,
};
use std::fmt;

pub const ONTOLOGY_LABEL: &str = "Cricket Bowling Statistics Ontology";
pub const ONTOLOGY_COMMENT: &str =
    "A comprehensive ontology for cricket bowling statistics with advanced OWL features";
pub const ONTOLOGY_VERSION: &str = "2.0";

/// Minimum squad size of a team.
pub const MIN_SQUAD_SIZE: usize = 11;

type ClassDefinition = (NamedNodeRef<'static>, &'static str, &'static str);

const CLASSES: [ClassDefinition; 23] = [
    (cricket::PLAYER, "Cricket Player", "A person who plays cricket"),
    (cricket::TEAM, "Cricket Team", "A cricket team organization"),
    (
        cricket::BOWLING_STATISTICS,
        "Bowling Statistics",
        "Statistical data about bowling performance",
    ),
    (cricket::BOWLER, "Bowler", "A player who specializes in bowling"),
    (cricket::FAST_BOWLER, "Fast Bowler", "A bowler who bowls at high speed"),
    (cricket::SPIN_BOWLER, "Spin Bowler", "A bowler who uses spin techniques"),
    (cricket::ALL_ROUNDER, "All-Rounder", "A player who both bats and bowls"),
    (cricket::WICKET_KEEPER, "Wicket Keeper", "A player who keeps wickets"),
    (
        cricket::EXCELLENT_PERFORMANCE,
        "Excellent Performance",
        "Outstanding bowling performance",
    ),
    (cricket::GOOD_PERFORMANCE, "Good Performance", "Above average performance"),
    (cricket::AVERAGE_PERFORMANCE, "Average Performance", "Standard performance"),
    (cricket::POOR_PERFORMANCE, "Poor Performance", "Below average performance"),
    (cricket::ACHIEVEMENT, "Achievement", "A notable bowling achievement"),
    (cricket::MATCH, "Match", "A cricket match"),
    (cricket::TOURNAMENT, "Tournament", "A cricket tournament"),
    (cricket::SEASON, "Season", "A cricket season"),
    (cricket::INNINGS_CLASS, "Innings", "An innings in a match"),
    (cricket::OVER, "Over", "A set of 6 deliveries"),
    (cricket::VENUE, "Venue", "A cricket ground or stadium"),
    (cricket::COUNTRY, "Country", "A country"),
    (cricket::COACH, "Coach", "A team coach"),
    (cricket::UMPIRE, "Umpire", "A match umpire"),
    (cricket::AWARD, "Award", "An award or recognition"),
];

const SUB_CLASSES: [(NamedNodeRef<'static>, NamedNodeRef<'static>); 13] = [
    (cricket::PLAYER, schema::PERSON),
    (cricket::TEAM, schema::SPORTS_TEAM),
    (cricket::BOWLER, cricket::PLAYER),
    (cricket::FAST_BOWLER, cricket::BOWLER),
    (cricket::SPIN_BOWLER, cricket::BOWLER),
    (cricket::ALL_ROUNDER, cricket::PLAYER),
    (cricket::WICKET_KEEPER, cricket::PLAYER),
    (cricket::COACH, schema::PERSON),
    (cricket::UMPIRE, schema::PERSON),
    (cricket::EXCELLENT_PERFORMANCE, cricket::BOWLING_STATISTICS),
    (cricket::GOOD_PERFORMANCE, cricket::BOWLING_STATISTICS),
    (cricket::AVERAGE_PERFORMANCE, cricket::BOWLING_STATISTICS),
    (cricket::POOR_PERFORMANCE, cricket::BOWLING_STATISTICS),
];

type ObjectPropertyDefinition = (
    NamedNodeRef<'static>,
    &'static str,
    NamedNodeRef<'static>,
    NamedNodeRef<'static>,
);

const OBJECT_PROPERTIES: [ObjectPropertyDefinition; 10] = [
    (cricket::PLAYS_FOR, "plays for", cricket::PLAYER, cricket::TEAM),
    (cricket::HAS_PLAYER, "has player", cricket::TEAM, cricket::PLAYER),
    (
        cricket::FOR_PLAYER,
        "for player",
        cricket::BOWLING_STATISTICS,
        cricket::PLAYER,
    ),
    (
        cricket::FOR_TEAM,
        "for team",
        cricket::BOWLING_STATISTICS,
        cricket::TEAM,
    ),
    (cricket::PLAYED_IN, "played in", cricket::PLAYER, cricket::MATCH),
    (cricket::HELD_AT, "held at", cricket::MATCH, cricket::VENUE),
    (cricket::PART_OF, "part of", cricket::MATCH, cricket::TOURNAMENT),
    (cricket::COACHES, "coaches", cricket::COACH, cricket::TEAM),
    (cricket::REPRESENTS, "represents", cricket::TEAM, cricket::COUNTRY),
    (
        cricket::ACHIEVED_BY,
        "achieved by",
        cricket::ACHIEVEMENT,
        cricket::PLAYER,
    ),
];

type DatatypePropertyDefinition = (NamedNodeRef<'static>, &'static str, NamedNodeRef<'static>);

const STATISTICS_PROPERTIES: [DatatypePropertyDefinition; 15] = [
    (cricket::MATCHES, "Number of matches played", xsd::INTEGER),
    (cricket::INNINGS, "Number of innings bowled", xsd::FLOAT),
    (cricket::OVERS, "Number of overs bowled", xsd::FLOAT),
    (cricket::MAIDENS, "Number of maiden overs", xsd::FLOAT),
    (cricket::RUNS_CONCEDED, "Total runs conceded", xsd::FLOAT),
    (cricket::WICKETS, "Total wickets taken", xsd::FLOAT),
    (cricket::AVERAGE, "Bowling average", xsd::FLOAT),
    (cricket::ECONOMY, "Economy rate", xsd::FLOAT),
    (cricket::STRIKE_RATE, "Strike rate", xsd::FLOAT),
    (cricket::BEST_BOWLING_INNINGS, "Best bowling figures", xsd::STRING),
    (cricket::SPAN, "Time period of statistics", xsd::STRING),
    (cricket::FOUR_WICKETS, "Number of 4-wicket hauls", xsd::FLOAT),
    (cricket::FIVE_WICKETS, "Number of 5-wicket hauls", xsd::FLOAT),
    (cricket::CATCHES, "Number of catches taken", xsd::INTEGER),
    (cricket::STUMPINGS, "Number of stumpings", xsd::INTEGER),
];

/// Builds the ontology graph.
pub fn build_ontology() -> Graph {
    let mut builder = OntologyBuilder::default();
    builder.header();
    builder.classes();
    builder.team_types();
    builder.cardinality_restrictions();
    builder.tier_restrictions();
    builder.class_expressions();
    builder.object_properties();
    builder.datatype_properties();
    builder.disjointness();
    builder.cricket_concept();

    let summary = OntologySummary::of(&builder.graph);
    tracing::info!(triples = builder.graph.len(), %summary, "Built ontology");
    builder.graph
}

#[derive(Default)]
struct OntologyBuilder {
    graph: Graph,
}

impl OntologyBuilder {
    fn add<'a>(
        &mut self,
        subject: impl Into<SubjectRef<'a>>,
        predicate: NamedNodeRef<'a>,
        object: impl Into<TermRef<'a>>,
    ) {
        self.graph
            .insert(TripleRef::new(subject.into(), predicate, object.into()));
    }

    fn add_label(&mut self, subject: NamedNodeRef<'_>, label: &str) {
        self.add(subject, rdfs::LABEL, &Literal::new_simple_literal(label));
    }

    fn add_comment(&mut self, subject: NamedNodeRef<'_>, comment: &str) {
        self.add(subject, rdfs::COMMENT, &Literal::new_simple_literal(comment));
    }

    /// Writes an RDF collection and returns its head.
    fn add_list(&mut self, members: &[NamedNodeRef<'_>]) -> BlankNode {
        let head = BlankNode::default();
        let mut current = head.clone();
        for (i, member) in members.iter().enumerate() {
            self.add(&current, rdf::FIRST, *member);
            if i + 1 == members.len() {
                self.add(&current, rdf::REST, rdf::NIL);
            } else {
                let next = BlankNode::default();
                self.add(&current, rdf::REST, &next);
                current = next;
            }
        }
        head
    }

    fn add_restriction(
        &mut self,
        class: NamedNodeRef<'_>,
        property: NamedNodeRef<'_>,
        constraint: NamedNodeRef<'_>,
        value: TermRef<'_>,
    ) {
        let restriction = BlankNode::default();
        self.add(&restriction, rdf::TYPE, owl::RESTRICTION);
        self.add(&restriction, owl::ON_PROPERTY, property);
        self.add(&restriction, constraint, value);
        self.add(class, rdfs::SUB_CLASS_OF, &restriction);
    }

    fn header(&mut self) {
        self.add(cricket::ONTOLOGY, rdf::TYPE, owl::ONTOLOGY);
        self.add_label(cricket::ONTOLOGY, ONTOLOGY_LABEL);
        self.add_comment(cricket::ONTOLOGY, ONTOLOGY_COMMENT);
        self.add(
            cricket::ONTOLOGY,
            owl::VERSION_INFO,
            &Literal::new_simple_literal(ONTOLOGY_VERSION),
        );
    }

    fn classes(&mut self) {
        for (class, label, comment) in CLASSES {
            self.add(class, rdf::TYPE, owl::CLASS);
            self.add_label(class, label);
            self.add_comment(class, comment);
        }
        for (class, parent) in SUB_CLASSES {
            self.add(class, rdfs::SUB_CLASS_OF, parent);
        }
    }

    /// `TeamType` is the enumeration of its three individuals.
    fn team_types(&mut self) {
        let members = [
            cricket::PSL_TEAM,
            cricket::INTERNATIONAL_TEAM,
            cricket::DOMESTIC_TEAM,
        ];
        self.add(cricket::TEAM_TYPE, rdf::TYPE, owl::CLASS);
        self.add_label(cricket::TEAM_TYPE, "Team Type");
        let list = self.add_list(&members);
        self.add(cricket::TEAM_TYPE, owl::ONE_OF, &list);
        for member in members {
            self.add(member, rdf::TYPE, cricket::TEAM_TYPE);
        }
    }

    fn cardinality_restrictions(&mut self) {
        let one = Literal::new_typed_literal("1", xsd::NON_NEGATIVE_INTEGER);
        let squad = Literal::new_typed_literal(
            MIN_SQUAD_SIZE.to_string(),
            xsd::NON_NEGATIVE_INTEGER,
        );
        self.add_restriction(
            cricket::PLAYER,
            cricket::PLAYS_FOR,
            owl::CARDINALITY,
            one.as_ref().into(),
        );
        self.add_restriction(
            cricket::TEAM,
            cricket::HAS_PLAYER,
            owl::MIN_CARDINALITY,
            squad.as_ref().into(),
        );
        self.add_restriction(
            cricket::BOWLING_STATISTICS,
            cricket::FOR_PLAYER,
            owl::CARDINALITY,
            one.as_ref().into(),
        );
    }

    fn tier_restrictions(&mut self) {
        for (class, comment) in [
            (
                cricket::EXCELLENT_PERFORMANCE,
                "Performance with 50+ wickets and economy < 7.5",
            ),
            (cricket::GOOD_PERFORMANCE, "Performance with 20+ wickets"),
        ] {
            self.add_restriction(
                class,
                cricket::WICKETS,
                owl::SOME_VALUES_FROM,
                xsd::FLOAT.into(),
            );
            self.add_comment(class, comment);
        }
    }

    fn class_expressions(&mut self) {
        self.add(cricket::ACTIVE_PLAYER, rdf::TYPE, owl::CLASS);
        self.add_label(cricket::ACTIVE_PLAYER, "Active Player");
        let union = self.add_list(&[
            cricket::BOWLER,
            cricket::ALL_ROUNDER,
            cricket::WICKET_KEEPER,
        ]);
        self.add(cricket::ACTIVE_PLAYER, owl::UNION_OF, &union);

        self.add(cricket::ELITE_BOWLER, rdf::TYPE, owl::CLASS);
        self.add_label(cricket::ELITE_BOWLER, "Elite Bowler");
        let intersection = self.add_list(&[cricket::BOWLER, cricket::EXCELLENT_PERFORMANCE]);
        self.add(cricket::ELITE_BOWLER, owl::INTERSECTION_OF, &intersection);

        self.add(cricket::NON_BOWLER, rdf::TYPE, owl::CLASS);
        self.add_label(cricket::NON_BOWLER, "Non-Bowler");
        self.add(cricket::NON_BOWLER, owl::COMPLEMENT_OF, cricket::BOWLER);
    }

    fn object_properties(&mut self) {
        for (property, label, domain, range) in OBJECT_PROPERTIES {
            self.add(property, rdf::TYPE, owl::OBJECT_PROPERTY);
            self.add_label(property, label);
            self.add(property, rdfs::DOMAIN, domain);
            self.add(property, rdfs::RANGE, range);
        }
        self.add(cricket::PLAYS_FOR, owl::INVERSE_OF, cricket::HAS_PLAYER);
        self.add(cricket::HAS_PLAYER, owl::INVERSE_OF, cricket::PLAYS_FOR);
    }

    fn datatype_properties(&mut self) {
        let identifying = [
            (
                cricket::BIRTH_DATE,
                owl::FUNCTIONAL_PROPERTY,
                "birth date",
                cricket::PLAYER,
                xsd::DATE,
            ),
            (
                cricket::JERSEY_NUMBER,
                owl::FUNCTIONAL_PROPERTY,
                "jersey number",
                cricket::PLAYER,
                xsd::INTEGER,
            ),
            (
                cricket::PLAYER_ID,
                owl::INVERSE_FUNCTIONAL_PROPERTY,
                "player ID",
                cricket::PLAYER,
                xsd::STRING,
            ),
            (
                cricket::TEAM_ID,
                owl::INVERSE_FUNCTIONAL_PROPERTY,
                "team ID",
                cricket::TEAM,
                xsd::STRING,
            ),
        ];
        for (property, characteristic, label, domain, range) in identifying {
            self.add(property, rdf::TYPE, owl::DATATYPE_PROPERTY);
            self.add(property, rdf::TYPE, characteristic);
            self.add_label(property, label);
            self.add(property, rdfs::DOMAIN, domain);
            self.add(property, rdfs::RANGE, range);
        }

        for (property, description, range) in STATISTICS_PROPERTIES {
            let name = property
                .as_str()
                .rsplit_once('#')
                .map_or(property.as_str(), |(_, name)| name);
            self.add(property, rdf::TYPE, owl::DATATYPE_PROPERTY);
            self.add_label(property, name);
            self.add_comment(property, description);
            self.add(property, rdfs::DOMAIN, cricket::BOWLING_STATISTICS);
            self.add(property, rdfs::RANGE, range);
        }
    }

    fn disjointness(&mut self) {
        self.add(cricket::FAST_BOWLER, owl::DISJOINT_WITH, cricket::SPIN_BOWLER);
        self.add(
            cricket::EXCELLENT_PERFORMANCE,
            owl::DISJOINT_WITH,
            cricket::POOR_PERFORMANCE,
        );
        self.add(
            cricket::GOOD_PERFORMANCE,
            owl::DISJOINT_WITH,
            cricket::POOR_PERFORMANCE,
        );
    }

    /// The sport itself, linked to both Linked-Open-Data sources.
    fn cricket_concept(&mut self) {
        self.add(cricket::CRICKET, rdf::TYPE, owl::CLASS);
        self.add_label(cricket::CRICKET, "Cricket");
        self.add(cricket::CRICKET, owl::SAME_AS, DBPEDIA_CRICKET);
        self.add(cricket::CRICKET, owl::SAME_AS, WIKIDATA_CRICKET);
    }
}

/// Counts of the terms an ontology declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OntologySummary {
    pub classes: usize,
    pub object_properties: usize,
    pub datatype_properties: usize,
}

impl OntologySummary {
    pub fn of(graph: &Graph) -> Self {
        let count = |class: NamedNodeRef<'static>| graph.subjects_for_predicate_object(rdf::TYPE, class).count();
        Self {
            classes: count(owl::CLASS),
            object_properties: count(owl::OBJECT_PROPERTY),
            datatype_properties: count(owl::DATATYPE_PROPERTY),
        }
    }
}

impl fmt::Display for OntologySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} classes, {} object properties, {} datatype properties",
            self.classes, self.object_properties, self.datatype_properties
        )
    }
}

/// A class declared by an ontology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyClass {
    pub iri: NamedNode,
    pub label: Option<String>,
}

impl OntologyClass {
    /// The part of the IRI after the last `#` or `/`.
    pub fn local_name(&self) -> &str {
        let iri = self.iri.as_str();
        iri.rfind(['#', '/']).map_or(iri, |index| &iri[index + 1..])
    }
}

/// Lists the named classes of an ontology sorted by IRI.
pub fn ontology_classes(graph: &Graph) -> Vec<OntologyClass> {
    let mut classes = graph
        .subjects_for_predicate_object(rdf::TYPE, owl::CLASS)
        .filter_map(|subject| match subject {
            SubjectRef::NamedNode(iri) => Some(iri),
            _ => None,
        })
        .map(|iri| OntologyClass {
            iri: iri.into_owned(),
            label: graph
                .object_for_subject_predicate(iri, rdfs::LABEL)
                .and_then(|label| match label {
                    TermRef::Literal(literal) => Some(literal.value().to_owned()),
                    _ => None,
                }),
        })
        .collect::<Vec<_>>();
    classes.sort_by(|a, b| a.iri.as_str().cmp(b.iri.as_str()));
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_the_expected_terms() {
        let ontology = build_ontology();
        insta::assert_snapshot!(
            OntologySummary::of(&ontology).to_string(),
            @"28 classes, 10 object properties, 19 datatype properties"
        );
    }

    #[test]
    fn declares_cardinality_restrictions() {
        let ontology = build_ontology();
        let restrictions = ontology
            .subjects_for_predicate_object(rdf::TYPE, owl::RESTRICTION)
            .count();
        assert_eq!(restrictions, 5);
        let squad = Literal::new_typed_literal("11", xsd::NON_NEGATIVE_INTEGER);
        assert_eq!(
            ontology
                .subjects_for_predicate_object(owl::MIN_CARDINALITY, &squad)
                .count(),
            1
        );
    }

    #[test]
    fn declares_inverse_properties() {
        let ontology = build_ontology();
        assert!(ontology.contains(TripleRef::new(
            cricket::PLAYS_FOR,
            owl::INVERSE_OF,
            cricket::HAS_PLAYER
        )));
        assert!(ontology.contains(TripleRef::new(
            cricket::HAS_PLAYER,
            owl::INVERSE_OF,
            cricket::PLAYS_FOR
        )));
    }

    #[test]
    fn enumerates_team_types() {
        let ontology = build_ontology();
        let members = ontology
            .subjects_for_predicate_object(rdf::TYPE, cricket::TEAM_TYPE)
            .count();
        assert_eq!(members, 3);
        assert!(ontology
            .object_for_subject_predicate(cricket::TEAM_TYPE, owl::ONE_OF)
            .is_some());
    }

    #[test]
    fn lists_classes_with_labels() {
        let classes = ontology_classes(&build_ontology());
        assert_eq!(classes.len(), 28);
        let player = classes
            .iter()
            .find(|class| class.local_name() == "Player")
            .unwrap();
        assert_eq!(player.label.as_deref(), Some("Cricket Player"));
        let is_sorted = classes
            .windows(2)
            .all(|pair| pair[0].iri.as_str() <= pair[1].iri.as_str());
        assert!(is_sorted);
    }
}
