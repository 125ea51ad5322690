use crate::error::ConversionError;
use crate::provenance::emit_provenance;
use cricket_kg_model::vocab::external::DBPEDIA_CRICKET;
use cricket_kg_model::vocab::{cricket, dcterms, foaf, namespaces, rdf, rdfs, schema};
use cricket_kg_model::{
    build_identifier, classify, coerce_numeric, english_literal, stats_identifier,
    string_literal, tier_class, EntityKind, Graph, NamedNode, NamedNodeRef, NumericDatatype,
    PerformanceTier, TripleRef,
};
use csv::StringRecord;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use time::OffsetDateTime;

pub const PLAYER_COLUMN: &str = "Player";
pub const TEAM_COLUMN: &str = "Team Name";
pub const SPAN_COLUMN: &str = "Span";
pub const BEST_BOWLING_COLUMN: &str = "BBI";
pub const WICKETS_COLUMN: &str = "Wkts";
pub const ECONOMY_COLUMN: &str = "Econ";

/// A numeric column of the input file and the property its values are published as.
#[derive(Debug, Clone, Copy)]
pub struct NumericColumn {
    pub header: &'static str,
    pub property: NamedNodeRef<'static>,
    pub datatype: NumericDatatype,
}

const fn column(
    header: &'static str,
    property: NamedNodeRef<'static>,
    datatype: NumericDatatype,
) -> NumericColumn {
    NumericColumn {
        header,
        property,
        datatype,
    }
}

/// The numeric columns in the order they are emitted.
pub const NUMERIC_COLUMNS: [NumericColumn; 13] = [
    column("Mat", cricket::MATCHES, NumericDatatype::Integer),
    column("Inns", cricket::INNINGS, NumericDatatype::Float),
    column("Overs", cricket::OVERS, NumericDatatype::Float),
    column("Mdns", cricket::MAIDENS, NumericDatatype::Float),
    column("Runs", cricket::RUNS_CONCEDED, NumericDatatype::Float),
    column(WICKETS_COLUMN, cricket::WICKETS, NumericDatatype::Float),
    column("Ave", cricket::AVERAGE, NumericDatatype::Float),
    column(ECONOMY_COLUMN, cricket::ECONOMY, NumericDatatype::Float),
    column("SR", cricket::STRIKE_RATE, NumericDatatype::Float),
    column("4", cricket::FOUR_WICKETS, NumericDatatype::Float),
    column("5", cricket::FIVE_WICKETS, NumericDatatype::Float),
    column("Ct", cricket::CATCHES, NumericDatatype::Integer),
    column("St", cricket::STUMPINGS, NumericDatatype::Integer),
];

/// Every column the input file must provide.
pub const REQUIRED_COLUMNS: [&str; 17] = [
    PLAYER_COLUMN,
    TEAM_COLUMN,
    SPAN_COLUMN,
    "Mat",
    "Inns",
    "Overs",
    "Mdns",
    "Runs",
    WICKETS_COLUMN,
    "Ave",
    ECONOMY_COLUMN,
    "SR",
    "4",
    "5",
    "Ct",
    "St",
    BEST_BOWLING_COLUMN,
];

/// Settings of a single conversion run.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// The file name recorded as `dcterms:source` of the dataset.
    pub source_name: String,
    /// The creation timestamp recorded as `dcterms:created` of the dataset.
    pub created: OffsetDateTime,
    /// The dataset resource that every statistics record points to.
    pub dataset: NamedNode,
}

impl ConversionOptions {
    /// Options for a run starting now.
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            created: OffsetDateTime::now_utc(),
            dataset: NamedNode::new_unchecked(namespaces::DATASET),
        }
    }

    /// Uses a fixed creation timestamp, which makes two runs over the same file produce equal
    /// graphs.
    #[must_use]
    pub fn with_created(mut self, created: OffsetDateTime) -> Self {
        self.created = created;
        self
    }

    /// Derives the options from the path of the input file.
    pub fn for_path(path: &Path) -> Self {
        let source_name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Self::new(source_name)
    }
}

/// How often each tier was assigned during a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub poor: usize,
    pub untiered: usize,
}

impl TierCounts {
    fn record(&mut self, tier: Option<PerformanceTier>) {
        *self.slot(tier) += 1;
    }

    fn slot(&mut self, tier: Option<PerformanceTier>) -> &mut usize {
        match tier {
            Some(PerformanceTier::Excellent) => &mut self.excellent,
            Some(PerformanceTier::Good) => &mut self.good,
            Some(PerformanceTier::Average) => &mut self.average,
            Some(PerformanceTier::Poor) => &mut self.poor,
            None => &mut self.untiered,
        }
    }

    /// The number of records with the given tier.
    pub fn get(&self, tier: Option<PerformanceTier>) -> usize {
        match tier {
            Some(PerformanceTier::Excellent) => self.excellent,
            Some(PerformanceTier::Good) => self.good,
            Some(PerformanceTier::Average) => self.average,
            Some(PerformanceTier::Poor) => self.poor,
            None => self.untiered,
        }
    }
}

/// Summary of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of statistics records, one per data row.
    pub records: usize,
    /// Number of distinct players.
    pub players: usize,
    /// Number of distinct teams.
    pub teams: usize,
    /// Number of triples in the resulting graph.
    pub triples: usize,
    pub tiers: TierCounts,
}

/// The graph produced by a conversion run together with its report.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub graph: Graph,
    pub report: ConversionReport,
}

/// The positions of the required columns in a header row.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    player: usize,
    team: usize,
    span: usize,
    best_bowling: usize,
    numeric: [usize; NUMERIC_COLUMNS.len()],
}

impl ColumnLayout {
    /// Locates the required columns. Returns the name of the first missing column on failure.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, &'static str> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}') == column)
                .ok_or(column)
        };

        let player = position(PLAYER_COLUMN)?;
        let team = position(TEAM_COLUMN)?;
        let span = position(SPAN_COLUMN)?;
        let mut numeric = [0; NUMERIC_COLUMNS.len()];
        for (slot, column) in numeric.iter_mut().zip(NUMERIC_COLUMNS.iter()) {
            *slot = position(column.header)?;
        }
        let best_bowling = position(BEST_BOWLING_COLUMN)?;
        Ok(Self {
            player,
            team,
            span,
            best_bowling,
            numeric,
        })
    }

    /// Borrows the cells of a data row.
    pub fn row<'r>(&self, record: &'r StringRecord) -> BowlingRow<'r> {
        let cell = |index: usize| record.get(index).unwrap_or_default();
        BowlingRow {
            player: cell(self.player),
            team: cell(self.team),
            span: cell(self.span),
            best_bowling_innings: cell(self.best_bowling),
            numeric_cells: self.numeric.map(cell),
        }
    }
}

/// The raw cells of one row of the input file.
///
/// `numeric_cells` is aligned with [`NUMERIC_COLUMNS`].
#[derive(Debug, Clone, Copy)]
pub struct BowlingRow<'a> {
    pub player: &'a str,
    pub team: &'a str,
    pub span: &'a str,
    pub best_bowling_innings: &'a str,
    pub numeric_cells: [&'a str; NUMERIC_COLUMNS.len()],
}

impl BowlingRow<'_> {
    /// The coerced value of the numeric column with the given header.
    pub fn numeric(&self, header: &str) -> Option<f64> {
        NUMERIC_COLUMNS
            .iter()
            .position(|column| column.header == header)
            .and_then(|index| coerce_numeric(self.numeric_cells[index]))
    }

    /// The performance tier of this row.
    pub fn tier(&self) -> Option<PerformanceTier> {
        classify(self.numeric(WICKETS_COLUMN), self.numeric(ECONOMY_COLUMN))
    }
}

/// Emits the player, the team and the statistics record of a single row.
///
/// Player and team facts are idempotent: emitting them again for a repeated name adds nothing.
/// The statistics record `bowling_stats_<row_index>` is new for every row. Returns the tier the
/// record was tagged with.
pub fn emit_record(
    graph: &mut Graph,
    row_index: usize,
    row: &BowlingRow<'_>,
    dataset: NamedNodeRef<'_>,
) -> Option<PerformanceTier> {
    let player = build_identifier(row.player, EntityKind::Player);
    let team = build_identifier(row.team, EntityKind::Team);
    let stats = stats_identifier(row_index);
    let tier = row.tier();

    // Player
    graph.insert(TripleRef::new(&player, rdf::TYPE, cricket::PLAYER));
    graph.insert(TripleRef::new(&player, rdf::TYPE, cricket::BOWLER));
    graph.insert(TripleRef::new(&player, rdf::TYPE, schema::PERSON));
    graph.insert(TripleRef::new(&player, foaf::NAME, &string_literal(row.player)));
    graph.insert(TripleRef::new(&player, rdfs::LABEL, &english_literal(row.player)));
    graph.insert(TripleRef::new(&player, cricket::PLAYS_FOR, &team));
    graph.insert(TripleRef::new(&player, schema::MEMBER_OF, &team));

    // Team
    graph.insert(TripleRef::new(&team, rdf::TYPE, cricket::TEAM));
    graph.insert(TripleRef::new(&team, rdf::TYPE, cricket::PSL_TEAM));
    graph.insert(TripleRef::new(&team, rdf::TYPE, schema::SPORTS_TEAM));
    graph.insert(TripleRef::new(&team, schema::NAME, &string_literal(row.team)));
    graph.insert(TripleRef::new(&team, rdfs::LABEL, &english_literal(row.team)));
    graph.insert(TripleRef::new(&team, schema::SPORT, DBPEDIA_CRICKET));
    graph.insert(TripleRef::new(&team, cricket::HAS_PLAYER, &player));

    // Statistics record
    graph.insert(TripleRef::new(&stats, rdf::TYPE, cricket::BOWLING_STATISTICS));
    graph.insert(TripleRef::new(&stats, rdf::TYPE, tier_class(tier)));
    graph.insert(TripleRef::new(&stats, cricket::FOR_PLAYER, &player));
    graph.insert(TripleRef::new(&stats, cricket::FOR_TEAM, &team));
    graph.insert(TripleRef::new(&stats, dcterms::SOURCE, dataset));
    if !row.span.is_empty() {
        graph.insert(TripleRef::new(&stats, cricket::SPAN, &string_literal(row.span)));
    }
    for (column, cell) in NUMERIC_COLUMNS.iter().zip(row.numeric_cells) {
        if let Some(value) = coerce_numeric(cell) {
            let literal = column.datatype.literal(value);
            graph.insert(TripleRef::new(&stats, column.property, &literal));
        }
    }
    if !row.best_bowling_innings.is_empty() {
        graph.insert(TripleRef::new(
            &stats,
            cricket::BEST_BOWLING_INNINGS,
            &string_literal(row.best_bowling_innings),
        ));
    }

    tier
}

/// Converts the CSV file at `path`.
pub fn convert_csv(
    path: &Path,
    options: &ConversionOptions,
) -> Result<Conversion, ConversionError> {
    let file = File::open(path).map_err(|source| ConversionError::Io {
        path: path.to_owned(),
        source,
    })?;
    convert_reader(BufReader::new(file), &path.display().to_string(), options)
}

/// Converts CSV data read from `reader`.
///
/// `file` names the input in error messages.
pub fn convert_reader(
    reader: impl Read,
    file: &str,
    options: &ConversionOptions,
) -> Result<Conversion, ConversionError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|source| ConversionError::Header {
            file: file.to_owned(),
            source,
        })?
        .clone();
    let layout =
        ColumnLayout::from_headers(&headers).map_err(|column| ConversionError::MissingColumn {
            file: file.to_owned(),
            column,
        })?;

    let mut graph = Graph::new();
    emit_provenance(&mut graph, options)?;

    let mut report = ConversionReport::default();
    let mut players = BTreeSet::new();
    let mut teams = BTreeSet::new();
    let mut record = StringRecord::new();
    loop {
        let row_index = report.records;
        let has_record =
            reader
                .read_record(&mut record)
                .map_err(|source| ConversionError::Row {
                    file: file.to_owned(),
                    row: row_index,
                    source,
                })?;
        if !has_record {
            break;
        }

        let row = layout.row(&record);
        let tier = emit_record(&mut graph, row_index, &row, options.dataset.as_ref());
        report.tiers.record(tier);
        players.insert(build_identifier(row.player, EntityKind::Player));
        teams.insert(build_identifier(row.team, EntityKind::Team));
        report.records += 1;
    }

    report.players = players.len();
    report.teams = teams.len();
    report.triples = graph.len();
    tracing::info!(
        file,
        records = report.records,
        players = report.players,
        teams = report.teams,
        triples = report.triples,
        "Converted bowling statistics"
    );
    tracing::info!(
        excellent = report.tiers.excellent,
        good = report.tiers.good,
        average = report.tiers.average,
        poor = report.tiers.poor,
        untiered = report.tiers.untiered,
        "Performance classifications"
    );

    Ok(Conversion { graph, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_kg_model::vocab::{owl, xsd};
    use cricket_kg_model::{Literal, Term};
    use time::macros::datetime;

    const HEADER: &str = "Player,Team Name,Span,Mat,Inns,Overs,Mdns,Runs,Wkts,Ave,Econ,SR,4,5,Ct,St,BBI\n";

    fn options() -> ConversionOptions {
        ConversionOptions::new("bowling.csv").with_created(datetime!(2024-03-01 12:00 UTC))
    }

    fn convert(rows: &str) -> Conversion {
        convert_reader(format!("{HEADER}{rows}").as_bytes(), "bowling.csv", &options()).unwrap()
    }

    fn objects(graph: &Graph, subject: &NamedNode, predicate: NamedNodeRef<'_>) -> Vec<Term> {
        graph
            .objects_for_subject_predicate(subject, predicate)
            .map(|o| o.into_owned())
            .collect()
    }

    #[test]
    fn converts_the_shaheen_row() {
        let rows = "\
Wahab Riaz,Peshawar Zalmi,2016-2023,72,72,262.3,2,1946,113,17.22,7.41,13.9,3,1,20,0,4/17
Hasan Ali,Islamabad United,2016-2023,55,55,196,0,1570,86,18.25,8.0,13.6,2,1,10,0,5/20
Shadab Khan,Islamabad United,2017-2023,70,68,244,1,1895,83,22.83,7.76,17.6,2,0,25,0,4/17
Shaheen Shah Afridi,Lahore Qalanders,2018-2023,30,30,110,1,792,50,15.84,7.2,13.2,1,1,5,0,6/19
";
        let conversion = convert(rows);
        let graph = &conversion.graph;
        let player = build_identifier("Shaheen Shah Afridi", EntityKind::Player);
        let team = build_identifier("Lahore Qalanders", EntityKind::Team);
        let stats = stats_identifier(3);

        assert!(player.as_str().ends_with("/Shaheen_Shah_Afridi"));
        assert!(team.as_str().ends_with("/Lahore_Qalanders"));
        assert!(graph.contains(TripleRef::new(
            &stats,
            rdf::TYPE,
            cricket::EXCELLENT_PERFORMANCE
        )));
        assert_eq!(
            objects(graph, &stats, cricket::WICKETS),
            vec![Literal::new_typed_literal("50.0", xsd::FLOAT).into()]
        );
        assert_eq!(
            objects(graph, &stats, cricket::ECONOMY),
            vec![Literal::new_typed_literal("7.2", xsd::FLOAT).into()]
        );
        assert_eq!(
            objects(graph, &stats, cricket::MATCHES),
            vec![Literal::new_typed_literal("30", xsd::INTEGER).into()]
        );
        assert_eq!(objects(graph, &stats, cricket::FOR_PLAYER), vec![player.into()]);
        assert_eq!(objects(graph, &stats, cricket::FOR_TEAM), vec![team.into()]);
    }

    #[test]
    fn emits_player_and_team_facts() {
        let conversion = convert("Haris Rauf,Lahore Qalanders,2020-2023,22,22,80,0,690,20,34.5,7.86,24.0,0,0,4,0,3/25\n");
        let graph = &conversion.graph;
        let player = build_identifier("Haris Rauf", EntityKind::Player);
        let team = build_identifier("Lahore Qalanders", EntityKind::Team);

        for class in [cricket::PLAYER, cricket::BOWLER, schema::PERSON] {
            assert!(graph.contains(TripleRef::new(&player, rdf::TYPE, class)));
        }
        for class in [cricket::TEAM, cricket::PSL_TEAM, schema::SPORTS_TEAM] {
            assert!(graph.contains(TripleRef::new(&team, rdf::TYPE, class)));
        }
        assert!(graph.contains(TripleRef::new(&player, cricket::PLAYS_FOR, &team)));
        assert!(graph.contains(TripleRef::new(&player, schema::MEMBER_OF, &team)));
        assert!(graph.contains(TripleRef::new(&team, cricket::HAS_PLAYER, &player)));
        assert!(graph.contains(TripleRef::new(&team, schema::SPORT, DBPEDIA_CRICKET)));
        assert!(graph.contains(TripleRef::new(
            &player,
            rdfs::LABEL,
            &english_literal("Haris Rauf")
        )));
        assert!(graph.contains(TripleRef::new(
            &team,
            schema::NAME,
            &string_literal("Lahore Qalanders")
        )));
        assert_eq!(graph.triples_for_predicate(owl::SAME_AS).count(), 0);
    }

    #[test]
    fn empty_economy_omits_the_attribute_and_leaves_the_record_untiered() {
        let conversion = convert("Sohail Khan,Karachi Kings,2016-2019,25,25,90,0,700,30,23.3,,18.0,1,0,3,0,4/30\n");
        let stats = stats_identifier(0);

        assert!(objects(&conversion.graph, &stats, cricket::ECONOMY).is_empty());
        assert!(!objects(&conversion.graph, &stats, cricket::WICKETS).is_empty());
        let types = objects(&conversion.graph, &stats, rdf::TYPE);
        assert_eq!(types, vec![cricket::BOWLING_STATISTICS.into_owned().into()]);
        assert_eq!(conversion.report.tiers.untiered, 1);
    }

    #[test]
    fn empty_text_cells_are_omitted() {
        let conversion = convert("Shadab Khan,Islamabad United,,10,10,38,0,300,11,27.2,7.9,20.7,0,0,3,0,\n");
        let stats = stats_identifier(0);

        assert!(objects(&conversion.graph, &stats, cricket::SPAN).is_empty());
        assert!(objects(&conversion.graph, &stats, cricket::BEST_BOWLING_INNINGS).is_empty());
    }

    #[test]
    fn repeated_players_are_emitted_once() {
        let conversion = convert(
            "\
Shadab Khan,Islamabad United,2017-2023,70,68,244,1,1895,83,22.83,7.76,17.6,2,0,25,0,4/17
Shadab Khan,Islamabad United,,10,10,38,0,300,11,27.2,7.9,20.7,0,0,3,0,
",
        );
        let player = build_identifier("Shadab Khan", EntityKind::Player);

        assert_eq!(conversion.report.records, 2);
        assert_eq!(conversion.report.players, 1);
        assert_eq!(conversion.report.teams, 1);
        assert_eq!(objects(&conversion.graph, &player, rdfs::LABEL).len(), 1);
        assert_eq!(
            conversion
                .graph
                .subjects_for_predicate_object(cricket::FOR_PLAYER, &player)
                .count(),
            2
        );
    }

    #[test]
    fn conversion_is_deterministic() {
        let rows = "Imad Wasim,Karachi Kings,2016-2023,60,58,200,2,1400,9,35.0,7.39,28.0,0,0,15,0,3/20\n";
        assert_eq!(convert(rows).graph, convert(rows).graph);
    }

    #[test]
    fn missing_columns_are_reported() {
        let error = convert_reader(
            "Player,Wkts,Econ\nWahab Riaz,113,7.41\n".as_bytes(),
            "broken.csv",
            &options(),
        )
        .unwrap_err();

        assert!(matches!(
            error,
            ConversionError::MissingColumn {
                column: "Team Name",
                ..
            }
        ));
        assert_eq!(error.to_string(), "The file 'broken.csv' has no 'Team Name' column");
    }

    #[test]
    fn required_columns_are_accepted_in_any_order() {
        let mut shuffled = REQUIRED_COLUMNS;
        shuffled.reverse();
        let headers = StringRecord::from(shuffled.to_vec());
        let layout = ColumnLayout::from_headers(&headers).unwrap();

        let mut cells = REQUIRED_COLUMNS.map(|_| "");
        cells[REQUIRED_COLUMNS.len() - 1] = "Zaman Khan";
        cells[0] = "6/30";
        let record = StringRecord::from(cells.to_vec());
        let row = layout.row(&record);
        assert_eq!(row.player, "Zaman Khan");
        assert_eq!(row.best_bowling_innings, "6/30");
        assert!(NUMERIC_COLUMNS
            .iter()
            .all(|column| REQUIRED_COLUMNS.contains(&column.header)));
    }

    #[test]
    fn malformed_rows_are_reported_with_their_index() {
        let error = convert_reader(
            format!("{HEADER}Wahab Riaz,Peshawar Zalmi,2016-2023,72,72,262.3,2,1946,113,17.22,7.41,13.9,3,1,20,0,4/17\nbroken,row\n").as_bytes(),
            "bowling.csv",
            &options(),
        )
        .unwrap_err();

        assert!(matches!(error, ConversionError::Row { row: 1, .. }));
    }
}
