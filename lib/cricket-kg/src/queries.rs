//! The queries behind the dashboard and the resource pages.

use crate::error::QueryError;
use crate::results::{binding_count, binding_number, binding_text};
use crate::store::{ExternalLinks, KnowledgeGraph};
use cricket_kg_model::vocab::{cricket, owl, rdf};
use cricket_kg_model::{Graph, Literal, Term, TermRef};
use oxigraph::sparql::QuerySolution;
use serde::Serialize;

/// Prepends the prefixes every query of the crate relies on.
macro_rules! sparql {
    ($body:literal) => {
        concat!(
            "PREFIX cricket: <http://example.org/cricket/ontology#>\n",
            "PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>\n",
            "PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>\n",
            "PREFIX owl: <http://www.w3.org/2002/07/owl#>\n",
            $body
        )
    };
}
pub(crate) use sparql;

/// A query whose parameter is bound with a `VALUES` clause.
///
/// The value is written as an RDF term, so it is always escaped and can never change the
/// structure of the query.
#[derive(Debug, Clone, Copy)]
pub struct ParameterizedQuery {
    template: &'static str,
    parameter: &'static str,
}

impl ParameterizedQuery {
    pub const fn new(template: &'static str, parameter: &'static str) -> Self {
        Self {
            template,
            parameter,
        }
    }

    /// The query text with `value` bound to the parameter.
    ///
    /// The binding is placed at the start of the first group pattern so that filters of that
    /// group see it.
    pub fn bind<'a>(&self, value: impl Into<TermRef<'a>>) -> String {
        let values = format!("\n  VALUES ?{} {{ {} }}", self.parameter, value.into());
        match self.template.split_once("WHERE {") {
            Some((head, tail)) => format!("{head}WHERE {{{values}{tail}"),
            None => format!("{}{values}", self.template),
        }
    }
}

pub const TOP_WICKET_TAKERS: &str = sparql!(
    "SELECT ?player ?playerName ?teamName ?wickets ?economy ?average WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:forTeam ?team ;
         cricket:wickets ?wickets .
  ?player rdfs:label ?playerName .
  ?team rdfs:label ?teamName .
  OPTIONAL { ?stats cricket:economy ?economy }
  OPTIONAL { ?stats cricket:average ?average }
}
ORDER BY DESC(?wickets) ?playerName
LIMIT 20"
);

pub const BEST_ECONOMY: &str = sparql!(
    "SELECT ?player ?playerName ?teamName ?economy ?wickets ?overs WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:forTeam ?team ;
         cricket:economy ?economy ;
         cricket:wickets ?wickets .
  ?player rdfs:label ?playerName .
  ?team rdfs:label ?teamName .
  OPTIONAL { ?stats cricket:overs ?overs }
  FILTER(?wickets >= 20)
}
ORDER BY ASC(?economy) ?playerName
LIMIT 20"
);

pub const FIVE_WICKET_HAULS: &str = sparql!(
    "SELECT ?player ?playerName ?teamName ?fiveWickets ?bestBowling ?wickets WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:forTeam ?team ;
         cricket:fiveWickets ?fiveWickets .
  ?player rdfs:label ?playerName .
  ?team rdfs:label ?teamName .
  OPTIONAL { ?stats cricket:bestBowlingInnings ?bestBowling }
  OPTIONAL { ?stats cricket:wickets ?wickets }
  FILTER(?fiveWickets > 0)
}
ORDER BY DESC(?fiveWickets) DESC(?wickets) ?playerName"
);

/// Per team aggregates. Each measure is aggregated over the records that carry it.
pub const TEAM_STATISTICS: &str = sparql!(
    "SELECT ?team ?teamName ?players ?totalWickets ?averageEconomy ?averageStrikeRate WHERE {
  {
    SELECT ?team (COUNT(DISTINCT ?player) AS ?players) WHERE {
      ?stats cricket:forTeam ?team ;
             cricket:forPlayer ?player .
    }
    GROUP BY ?team
  }
  OPTIONAL {
    SELECT ?team (SUM(?wickets) AS ?totalWickets) WHERE {
      ?stats cricket:forTeam ?team ;
             cricket:wickets ?wickets .
    }
    GROUP BY ?team
  }
  OPTIONAL {
    SELECT ?team (AVG(?economy) AS ?averageEconomy) WHERE {
      ?stats cricket:forTeam ?team ;
             cricket:economy ?economy .
    }
    GROUP BY ?team
  }
  OPTIONAL {
    SELECT ?team (AVG(?strikeRate) AS ?averageStrikeRate) WHERE {
      ?stats cricket:forTeam ?team ;
             cricket:strikeRate ?strikeRate .
    }
    GROUP BY ?team
  }
  ?team rdfs:label ?teamName .
}
ORDER BY DESC(?totalWickets) ?teamName"
);

pub const TOTAL_WICKETS: &str = sparql!(
    "SELECT (SUM(?wickets) AS ?total) WHERE {
  ?stats a cricket:BowlingStatistics ;
         cricket:wickets ?wickets .
}"
);

/// Search over player names. An empty needle matches every player.
pub const SEARCH_PLAYERS: ParameterizedQuery = ParameterizedQuery::new(
    sparql!(
        "SELECT ?player ?playerName ?teamName ?wickets ?economy ?average WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:forTeam ?team .
  ?player rdfs:label ?playerName .
  ?team rdfs:label ?teamName .
  OPTIONAL { ?stats cricket:wickets ?wickets }
  OPTIONAL { ?stats cricket:economy ?economy }
  OPTIONAL { ?stats cricket:average ?average }
  FILTER(CONTAINS(LCASE(STR(?playerName)), LCASE(?needle)))
}
ORDER BY DESC(?wickets) ?playerName
LIMIT 50"
    ),
    "needle",
);

/// The facts about the players whose name contains the needle and about their statistics
/// records.
pub const DESCRIBE_PLAYER: ParameterizedQuery = ParameterizedQuery::new(
    sparql!(
        "CONSTRUCT { ?s ?p ?o } WHERE {
  ?player a cricket:Player ;
          rdfs:label ?name .
  FILTER(CONTAINS(LCASE(STR(?name)), LCASE(?needle)))
  { ?player ?p ?o . BIND(?player AS ?s) }
  UNION
  { ?s cricket:forPlayer ?player ; ?p ?o . }
}"
    ),
    "needle",
);

/// The facts about the teams whose name contains the needle and about their players.
pub const DESCRIBE_TEAM: ParameterizedQuery = ParameterizedQuery::new(
    sparql!(
        "CONSTRUCT { ?s ?p ?o } WHERE {
  ?team a cricket:Team ;
        rdfs:label ?name .
  FILTER(CONTAINS(LCASE(STR(?name)), LCASE(?needle)))
  { ?team ?p ?o . BIND(?team AS ?s) }
  UNION
  { ?s cricket:playsFor ?team ; ?p ?o . }
}"
    ),
    "needle",
);

/// Key figures of the whole knowledge graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub players: usize,
    pub teams: usize,
    pub total_wickets: u64,
    pub external_links: usize,
    pub triples: usize,
}

/// A statistics record of a bowler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlerSummary {
    pub player: String,
    pub name: String,
    pub team: String,
    pub wickets: Option<f64>,
    pub economy: Option<f64>,
    pub average: Option<f64>,
    #[serde(flatten)]
    pub links: ExternalLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomyRow {
    pub player: String,
    pub name: String,
    pub team: String,
    pub economy: f64,
    pub wickets: f64,
    pub overs: Option<f64>,
    #[serde(flatten)]
    pub links: ExternalLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiveWicketHaul {
    pub player: String,
    pub name: String,
    pub team: String,
    pub five_wickets: f64,
    pub best_bowling: Option<String>,
    pub wickets: Option<f64>,
    #[serde(flatten)]
    pub links: ExternalLinks,
}

/// Aggregated figures of a team over its statistics records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatistics {
    pub team: String,
    pub name: String,
    pub players: u64,
    pub total_wickets: f64,
    pub average_economy: Option<f64>,
    pub average_strike_rate: Option<f64>,
    #[serde(flatten)]
    pub links: ExternalLinks,
}

impl KnowledgeGraph {
    /// Counts players, teams, wickets and external links.
    pub fn summary(&self) -> Result<DashboardSummary, QueryError> {
        let graph = self.graph();
        let total_wickets = self
            .select(TOTAL_WICKETS)?
            .first()
            .and_then(|solution| binding_count(solution, "total"))
            .unwrap_or_default();
        Ok(DashboardSummary {
            players: graph
                .subjects_for_predicate_object(rdf::TYPE, cricket::PLAYER)
                .count(),
            teams: graph
                .subjects_for_predicate_object(rdf::TYPE, cricket::TEAM)
                .count(),
            total_wickets,
            external_links: graph.triples_for_predicate(owl::SAME_AS).count(),
            triples: graph.len(),
        })
    }

    /// The 20 records with the most wickets.
    pub fn top_wicket_takers(&self) -> Result<Vec<BowlerSummary>, QueryError> {
        self.bowler_summaries(TOP_WICKET_TAKERS)
    }

    /// The 20 lowest economy rates among records with at least 20 wickets.
    pub fn best_economy(&self) -> Result<Vec<EconomyRow>, QueryError> {
        Ok(self
            .select(BEST_ECONOMY)?
            .iter()
            .filter_map(|solution| {
                let (player, name, team, links) = self.identity(solution, "player")?;
                Some(EconomyRow {
                    player,
                    name,
                    team,
                    economy: binding_number(solution, "economy")?,
                    wickets: binding_number(solution, "wickets")?,
                    overs: binding_number(solution, "overs"),
                    links,
                })
            })
            .collect())
    }

    /// The records with at least one five-wicket haul.
    pub fn five_wicket_hauls(&self) -> Result<Vec<FiveWicketHaul>, QueryError> {
        Ok(self
            .select(FIVE_WICKET_HAULS)?
            .iter()
            .filter_map(|solution| {
                let (player, name, team, links) = self.identity(solution, "player")?;
                Some(FiveWicketHaul {
                    player,
                    name,
                    team,
                    five_wickets: binding_number(solution, "fiveWickets")?,
                    best_bowling: binding_text(solution, "bestBowling"),
                    wickets: binding_number(solution, "wickets"),
                    links,
                })
            })
            .collect())
    }

    /// Aggregates of every team, the team with the most wickets first.
    pub fn team_statistics(&self) -> Result<Vec<TeamStatistics>, QueryError> {
        Ok(self
            .select(TEAM_STATISTICS)?
            .iter()
            .filter_map(|solution| {
                let Some(Term::NamedNode(team)) = solution.get("team") else {
                    return None;
                };
                Some(TeamStatistics {
                    team: team.as_str().to_owned(),
                    name: binding_text(solution, "teamName")?,
                    players: binding_count(solution, "players")?,
                    total_wickets: binding_number(solution, "totalWickets").unwrap_or_default(),
                    average_economy: binding_number(solution, "averageEconomy"),
                    average_strike_rate: binding_number(solution, "averageStrikeRate"),
                    links: self.external_links(team.as_ref()),
                })
            })
            .collect())
    }

    /// The records of players whose name contains `needle`, ignoring case.
    pub fn search_players(&self, needle: &str) -> Result<Vec<BowlerSummary>, QueryError> {
        let needle = Literal::new_simple_literal(needle.trim());
        self.bowler_summaries(&SEARCH_PLAYERS.bind(needle.as_ref()))
    }

    /// The facts about the players matching `name` and their statistics records. Underscores
    /// stand for spaces.
    pub fn describe_player(&self, name: &str) -> Result<Graph, QueryError> {
        self.construct(&DESCRIBE_PLAYER.bind(resource_needle(name).as_ref()))
    }

    /// The facts about the teams matching `name` and their players. Underscores stand for
    /// spaces.
    pub fn describe_team(&self, name: &str) -> Result<Graph, QueryError> {
        self.construct(&DESCRIBE_TEAM.bind(resource_needle(name).as_ref()))
    }

    fn bowler_summaries(&self, query: &str) -> Result<Vec<BowlerSummary>, QueryError> {
        Ok(self
            .select(query)?
            .iter()
            .filter_map(|solution| {
                let (player, name, team, links) = self.identity(solution, "player")?;
                Some(BowlerSummary {
                    player,
                    name,
                    team,
                    wickets: binding_number(solution, "wickets"),
                    economy: binding_number(solution, "economy"),
                    average: binding_number(solution, "average"),
                    links,
                })
            })
            .collect())
    }

    /// The IRI, name, team name and links of the player bound to `variable`.
    fn identity(
        &self,
        solution: &QuerySolution,
        variable: &str,
    ) -> Option<(String, String, String, ExternalLinks)> {
        let Some(Term::NamedNode(player)) = solution.get(variable) else {
            return None;
        };
        Some((
            player.as_str().to_owned(),
            binding_text(solution, "playerName")?,
            binding_text(solution, "teamName")?,
            self.external_links(player.as_ref()),
        ))
    }
}

fn resource_needle(name: &str) -> Literal {
    Literal::new_simple_literal(name.replace('_', " ").trim())
}
