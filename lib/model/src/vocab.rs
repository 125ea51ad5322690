//! IRIs of the vocabularies used by the cricket knowledge graph.
//!
//! The `rdf`, `rdfs` and `xsd` vocabularies are re-exported from [`oxrdf`]. Everything else is
//! declared here as [`NamedNodeRef`] constants.

pub use oxrdf::vocab::{rdf, rdfs, xsd};

/// Well-known namespace IRIs together with the prefix that serializers bind them to.
pub mod namespaces {
    pub const CRICKET: &str = "http://example.org/cricket/ontology#";
    pub const PLAYER: &str = "http://example.org/cricket/resource/player/";
    pub const TEAM: &str = "http://example.org/cricket/resource/team/";
    pub const STATS: &str = "http://example.org/cricket/resource/stats/";
    pub const DATASET: &str = "http://example.org/cricket/dataset/bowling-statistics";
    pub const ONTOLOGY: &str = "http://example.org/cricket/ontology";
    pub const DBPEDIA: &str = "http://dbpedia.org/resource/";
    pub const WIKIDATA: &str = "http://www.wikidata.org/entity/";
    pub const SCHEMA: &str = "http://schema.org/";
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const VOID: &str = "http://rdfs.org/ns/void#";
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Prefixes bound when serializing instance data.
    pub const DATA_PREFIXES: [(&str, &str); 14] = [
        ("cricket", CRICKET),
        ("player", PLAYER),
        ("team", TEAM),
        ("stats", STATS),
        ("schema", SCHEMA),
        ("foaf", FOAF),
        ("dcterms", DCTERMS),
        ("void", VOID),
        ("owl", OWL),
        ("rdfs", RDFS),
        ("xsd", XSD),
        ("dbpedia", DBPEDIA),
        ("wikidata", WIKIDATA),
        ("rdf", RDF),
    ];

    /// Prefixes bound when serializing the ontology.
    pub const ONTOLOGY_PREFIXES: [(&str, &str); 8] = [
        ("cricket", CRICKET),
        ("owl", OWL),
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("xsd", XSD),
        ("schema", SCHEMA),
        ("dbpedia", DBPEDIA),
        ("wikidata", WIKIDATA),
    ];
}

/// The cricket ontology (`http://example.org/cricket/ontology#`).
pub mod cricket {
    use oxrdf::NamedNodeRef;

    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology");

    // Core classes
    pub const PLAYER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Player");
    pub const TEAM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Team");
    pub const BOWLING_STATISTICS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#BowlingStatistics");

    // Player specialisations
    pub const BOWLER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Bowler");
    pub const FAST_BOWLER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#FastBowler");
    pub const SPIN_BOWLER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#SpinBowler");
    pub const ALL_ROUNDER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#AllRounder");
    pub const WICKET_KEEPER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#WicketKeeper");

    // Performance tiers
    pub const EXCELLENT_PERFORMANCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#ExcellentPerformance");
    pub const GOOD_PERFORMANCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#GoodPerformance");
    pub const AVERAGE_PERFORMANCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#AveragePerformance");
    pub const POOR_PERFORMANCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#PoorPerformance");
    pub const ACHIEVEMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Achievement");

    // Matches and tournaments
    pub const MATCH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Match");
    pub const TOURNAMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Tournament");
    pub const SEASON: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Season");
    pub const INNINGS_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Innings");
    pub const OVER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Over");

    // Other classes
    pub const VENUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Venue");
    pub const COUNTRY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Country");
    pub const COACH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Coach");
    pub const UMPIRE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Umpire");
    pub const AWARD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Award");

    // Constructed classes and individuals
    pub const TEAM_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#TeamType");
    pub const PSL_TEAM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#PSLTeam");
    pub const INTERNATIONAL_TEAM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#InternationalTeam");
    pub const DOMESTIC_TEAM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#DomesticTeam");
    pub const ACTIVE_PLAYER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#ActivePlayer");
    pub const ELITE_BOWLER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#EliteBowler");
    pub const NON_BOWLER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#NonBowler");
    pub const CRICKET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#Cricket");

    // Object properties
    pub const PLAYS_FOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#playsFor");
    pub const HAS_PLAYER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#hasPlayer");
    pub const FOR_PLAYER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#forPlayer");
    pub const FOR_TEAM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#forTeam");
    pub const PLAYED_IN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#playedIn");
    pub const HELD_AT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#heldAt");
    pub const PART_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#partOf");
    pub const COACHES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#coaches");
    pub const REPRESENTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#represents");
    pub const ACHIEVED_BY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#achievedBy");

    // Datatype properties of a statistics record
    pub const MATCHES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#matches");
    pub const INNINGS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#innings");
    pub const OVERS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#overs");
    pub const MAIDENS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#maidens");
    pub const RUNS_CONCEDED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#runsConceded");
    pub const WICKETS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#wickets");
    pub const AVERAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#average");
    pub const ECONOMY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#economy");
    pub const STRIKE_RATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#strikeRate");
    pub const FOUR_WICKETS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#fourWickets");
    pub const FIVE_WICKETS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#fiveWickets");
    pub const CATCHES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#catches");
    pub const STUMPINGS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#stumpings");
    pub const SPAN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#span");
    pub const BEST_BOWLING_INNINGS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#bestBowlingInnings");

    // Datatype properties of players and teams
    pub const BIRTH_DATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#birthDate");
    pub const JERSEY_NUMBER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#jerseyNumber");
    pub const PLAYER_ID: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#playerID");
    pub const TEAM_ID: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/cricket/ontology#teamID");
}

/// [Schema.org](https://schema.org/) terms.
pub mod schema {
    use oxrdf::NamedNodeRef;

    pub const PERSON: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Person");
    pub const SPORTS_TEAM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://schema.org/SportsTeam");
    pub const NAME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/name");
    pub const MEMBER_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://schema.org/memberOf");
    pub const SPORT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/sport");
}

/// [FOAF](http://xmlns.com/foaf/spec/) terms.
pub mod foaf {
    use oxrdf::NamedNodeRef;

    pub const NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name");
}

/// [Dublin Core terms](http://purl.org/dc/terms/).
pub mod dcterms {
    use oxrdf::NamedNodeRef;

    pub const TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/title");
    pub const DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/description");
    pub const CREATED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/created");
    pub const CREATOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/creator");
    pub const SOURCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/source");
    pub const LICENSE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/license");
}

/// [VoID](http://rdfs.org/ns/void#) terms.
pub mod void {
    use oxrdf::NamedNodeRef;

    pub const DATASET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://rdfs.org/ns/void#Dataset");
}

/// [OWL 2](https://www.w3.org/TR/owl2-overview/) terms.
pub mod owl {
    use oxrdf::NamedNodeRef;

    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    pub const FUNCTIONAL_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#FunctionalProperty");
    pub const INVERSE_FUNCTIONAL_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#InverseFunctionalProperty");
    pub const RESTRICTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Restriction");
    pub const ON_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onProperty");
    pub const CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#cardinality");
    pub const MIN_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#minCardinality");
    pub const SOME_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#someValuesFrom");
    pub const ONE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#oneOf");
    pub const UNION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#unionOf");
    pub const INTERSECTION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#intersectionOf");
    pub const COMPLEMENT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#complementOf");
    pub const INVERSE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#inverseOf");
    pub const DISJOINT_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#disjointWith");
    pub const SAME_AS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#sameAs");
    pub const VERSION_INFO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#versionInfo");
}

/// Resources of the two Linked-Open-Data sources the graph links to.
pub mod external {
    use oxrdf::NamedNodeRef;

    pub const DBPEDIA_CRICKET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dbpedia.org/resource/Cricket");
    pub const WIKIDATA_CRICKET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.wikidata.org/entity/Q5375");
    pub const CC_BY_4: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://creativecommons.org/licenses/by/4.0/");
}
