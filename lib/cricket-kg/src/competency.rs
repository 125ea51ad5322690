//! Competency questions the knowledge graph is expected to answer.
//!
//! Each question is a SPARQL query together with the way its solutions are turned into a short
//! human readable answer.

use crate::error::QueryError;
use crate::queries::sparql;
use crate::results::{binding_count, binding_number, binding_text, Solutions};
use crate::store::KnowledgeGraph;
use std::fmt;

/// The topic a competency question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Players,
    Teams,
    Performance,
    Fielding,
    Linking,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Players => "Players",
            Category::Teams => "Teams",
            Category::Performance => "Performance",
            Category::Fielding => "Fielding",
            Category::Linking => "Linking",
        })
    }
}

/// How the solutions of a question are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerShape {
    /// A number bound to `?count` in the first solution.
    Count,
    /// A name and a figure of the first solution, e.g. `Wahab Riaz (113 wickets)`.
    Figure {
        name: &'static str,
        value: &'static str,
        unit: &'static str,
        precision: usize,
    },
    /// The names bound in every solution, separated by commas.
    Names(&'static str),
}

impl AnswerShape {
    /// Reads the answer. Returns [`None`] when the query had no usable solution.
    pub fn read(self, solutions: &Solutions) -> Option<String> {
        match self {
            AnswerShape::Count => {
                binding_count(solutions.first()?, "count").map(|count| count.to_string())
            }
            AnswerShape::Figure {
                name,
                value,
                unit,
                precision,
            } => {
                let solution = solutions.first()?;
                let name = binding_text(solution, name)?;
                let value = binding_number(solution, value)?;
                Some(format!("{name} ({value:.precision$} {unit})"))
            }
            AnswerShape::Names(variable) => {
                let names = solutions
                    .iter()
                    .filter_map(|solution| binding_text(solution, variable))
                    .collect::<Vec<_>>();
                (!names.is_empty()).then(|| names.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompetencyQuestion {
    /// Identifier such as `CQ1`.
    pub id: &'static str,
    pub category: Category,
    pub question: &'static str,
    pub query: &'static str,
    pub shape: AnswerShape,
}

impl CompetencyQuestion {
    /// Runs the query of the question against `kg`.
    pub fn answer(&self, kg: &KnowledgeGraph) -> Result<Option<String>, QueryError> {
        let solutions = kg.select(self.query)?;
        Ok(self.shape.read(&solutions))
    }
}

const fn figure(
    name: &'static str,
    value: &'static str,
    unit: &'static str,
    precision: usize,
) -> AnswerShape {
    AnswerShape::Figure {
        name,
        value,
        unit,
        precision,
    }
}

pub static COMPETENCY_QUESTIONS: [CompetencyQuestion; 13] = [
    CompetencyQuestion {
        id: "CQ1",
        category: Category::Players,
        question: "How many players are in the dataset?",
        query: sparql!(
            "SELECT (COUNT(DISTINCT ?player) AS ?count) WHERE {
  ?player a cricket:Player .
}"
        ),
        shape: AnswerShape::Count,
    },
    CompetencyQuestion {
        id: "CQ2",
        category: Category::Players,
        question: "Which team does Shaheen play for?",
        query: sparql!(
            "SELECT DISTINCT ?teamName WHERE {
  ?player a cricket:Player ;
          rdfs:label ?name ;
          cricket:playsFor ?team .
  ?team rdfs:label ?teamName .
  FILTER(CONTAINS(?name, \"Shaheen\"))
}
ORDER BY ?teamName"
        ),
        shape: AnswerShape::Names("teamName"),
    },
    CompetencyQuestion {
        id: "CQ4",
        category: Category::Teams,
        question: "Which team has the most players?",
        query: sparql!(
            "SELECT ?teamName (COUNT(DISTINCT ?player) AS ?players) WHERE {
  ?team a cricket:Team ;
        rdfs:label ?teamName ;
        cricket:hasPlayer ?player .
}
GROUP BY ?teamName
ORDER BY DESC(?players) ?teamName
LIMIT 1"
        ),
        shape: figure("teamName", "players", "players", 0),
    },
    CompetencyQuestion {
        id: "CQ6",
        category: Category::Performance,
        question: "Who has taken the most wickets?",
        query: sparql!(
            "SELECT ?playerName ?wickets WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:wickets ?wickets .
  ?player rdfs:label ?playerName .
}
ORDER BY DESC(?wickets) ?playerName
LIMIT 1"
        ),
        shape: figure("playerName", "wickets", "wickets", 0),
    },
    CompetencyQuestion {
        id: "CQ8",
        category: Category::Performance,
        question: "Who has the best economy rate among bowlers with at least 20 wickets?",
        query: sparql!(
            "SELECT ?playerName ?economy WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:wickets ?wickets ;
         cricket:economy ?economy .
  ?player rdfs:label ?playerName .
  FILTER(?wickets >= 20)
}
ORDER BY ASC(?economy) ?playerName
LIMIT 1"
        ),
        shape: figure("playerName", "economy", "runs per over", 2),
    },
    CompetencyQuestion {
        id: "CQ11",
        category: Category::Performance,
        question: "How many players have taken five wickets in an innings?",
        query: sparql!(
            "SELECT (COUNT(DISTINCT ?player) AS ?count) WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:fiveWickets ?fiveWickets .
  FILTER(?fiveWickets > 0)
}"
        ),
        shape: AnswerShape::Count,
    },
    CompetencyQuestion {
        id: "CQ15",
        category: Category::Teams,
        question: "Which team has taken the most wickets?",
        query: sparql!(
            "SELECT ?teamName (SUM(?wickets) AS ?totalWickets) WHERE {
  ?stats cricket:forTeam ?team ;
         cricket:wickets ?wickets .
  ?team rdfs:label ?teamName .
}
GROUP BY ?teamName
ORDER BY DESC(?totalWickets) ?teamName
LIMIT 1"
        ),
        shape: figure("teamName", "totalWickets", "wickets", 0),
    },
    CompetencyQuestion {
        id: "CQ16",
        category: Category::Teams,
        question: "Which team has the best average economy rate?",
        query: sparql!(
            "SELECT ?teamName (AVG(?economy) AS ?averageEconomy) WHERE {
  ?stats cricket:forTeam ?team ;
         cricket:economy ?economy .
  ?team rdfs:label ?teamName .
}
GROUP BY ?teamName
ORDER BY ASC(?averageEconomy) ?teamName
LIMIT 1"
        ),
        shape: figure("teamName", "averageEconomy", "runs per over", 2),
    },
    CompetencyQuestion {
        id: "CQ22",
        category: Category::Performance,
        question: "How many players have taken more than 50 wickets?",
        query: sparql!(
            "SELECT (COUNT(DISTINCT ?player) AS ?count) WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:wickets ?wickets .
  FILTER(?wickets > 50)
}"
        ),
        shape: AnswerShape::Count,
    },
    CompetencyQuestion {
        id: "CQ23",
        category: Category::Performance,
        question: "Who has bowled the most overs?",
        query: sparql!(
            "SELECT ?playerName ?overs WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:overs ?overs .
  ?player rdfs:label ?playerName .
}
ORDER BY DESC(?overs) ?playerName
LIMIT 1"
        ),
        shape: figure("playerName", "overs", "overs", 1),
    },
    CompetencyQuestion {
        id: "CQ26",
        category: Category::Fielding,
        question: "Who has taken the most catches?",
        query: sparql!(
            "SELECT ?playerName ?catches WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:catches ?catches .
  ?player rdfs:label ?playerName .
}
ORDER BY DESC(?catches) ?playerName
LIMIT 1"
        ),
        shape: figure("playerName", "catches", "catches", 0),
    },
    CompetencyQuestion {
        id: "CQ28",
        category: Category::Performance,
        question: "Which players have taken six wickets in an innings?",
        query: sparql!(
            "SELECT DISTINCT ?playerName WHERE {
  ?stats cricket:forPlayer ?player ;
         cricket:bestBowlingInnings ?best .
  ?player rdfs:label ?playerName .
  FILTER(CONTAINS(?best, \"6/\"))
}
ORDER BY ?playerName
LIMIT 3"
        ),
        shape: AnswerShape::Names("playerName"),
    },
    CompetencyQuestion {
        id: "CQ29",
        category: Category::Linking,
        question: "How many links to external knowledge bases are there?",
        query: sparql!(
            "SELECT (COUNT(*) AS ?count) WHERE {
  ?resource owl:sameAs ?external .
}"
        ),
        shape: AnswerShape::Count,
    },
];

/// A competency question with its answer.
#[derive(Debug, Clone)]
pub struct CompetencyAnswer {
    pub question: &'static CompetencyQuestion,
    pub answer: Option<String>,
}

/// Answers every competency question in catalogue order.
pub fn answer_all(kg: &KnowledgeGraph) -> Result<Vec<CompetencyAnswer>, QueryError> {
    COMPETENCY_QUESTIONS
        .iter()
        .map(|question| {
            let answer = question.answer(kg)?;
            tracing::debug!(id = question.id, ?answer, "Answered competency question");
            Ok(CompetencyAnswer { question, answer })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::sparql::Query;
    use std::collections::HashSet;

    #[test]
    fn every_question_parses() {
        for question in &COMPETENCY_QUESTIONS {
            Query::parse(question.query, None)
                .unwrap_or_else(|error| panic!("{} does not parse: {error}", question.id));
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let ids = COMPETENCY_QUESTIONS
            .iter()
            .map(|question| question.id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), COMPETENCY_QUESTIONS.len());
    }

    #[test]
    fn empty_graphs_have_no_answers_except_counts() {
        let kg = KnowledgeGraph::from_graph(cricket_kg_model::Graph::new()).unwrap();
        for CompetencyAnswer { question, answer } in answer_all(&kg).unwrap() {
            match question.shape {
                AnswerShape::Count => assert_eq!(answer.as_deref(), Some("0"), "{}", question.id),
                _ => assert_eq!(answer, None, "{}", question.id),
            }
        }
    }
}
