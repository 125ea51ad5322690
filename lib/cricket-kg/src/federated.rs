//! Federated queries joining the local statistics with DBpedia and Wikidata.
//!
//! The queries use `SERVICE` blocks and are published as examples. They are not evaluated
//! against the remote endpoints.

use std::io::{self, Write};

/// A titled federated query.
#[derive(Debug, Clone, Copy)]
pub struct FederatedQuery {
    pub title: &'static str,
    pub query: &'static str,
}

pub const FEDERATED_QUERIES: [FederatedQuery; 4] = [
    FederatedQuery {
        title: "Query 1: Local + DBpedia - Player Info",
        query: "PREFIX cricket: <http://example.org/cricket/ontology#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX owl: <http://www.w3.org/2002/07/owl#>
PREFIX dbo: <http://dbpedia.org/ontology/>

SELECT ?playerName ?wickets ?birthDate ?abstract
WHERE {
    ?player a cricket:Player ;
            rdfs:label ?playerName ;
            owl:sameAs ?dbpediaURI .
    ?stats cricket:forPlayer ?player ;
           cricket:wickets ?wickets .
    FILTER(STRSTARTS(STR(?dbpediaURI), \"http://dbpedia.org/\"))

    SERVICE <http://dbpedia.org/sparql> {
        ?dbpediaURI dbo:birthDate ?birthDate ;
                    dbo:abstract ?abstract .
        FILTER(LANG(?abstract) = \"en\")
    }
}
ORDER BY DESC(?wickets)
LIMIT 10",
    },
    FederatedQuery {
        title: "Query 2: Local + Wikidata - Team Info",
        query: "PREFIX cricket: <http://example.org/cricket/ontology#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX owl: <http://www.w3.org/2002/07/owl#>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>

SELECT ?teamName ?totalWickets ?inception ?country
WHERE {
    ?team a cricket:Team ;
          rdfs:label ?teamName ;
          owl:sameAs ?wikidataURI .
    FILTER(STRSTARTS(STR(?wikidataURI), \"http://www.wikidata.org/\"))

    {
        SELECT ?team (SUM(?wickets) AS ?totalWickets)
        WHERE {
            ?stats cricket:forTeam ?team ;
                   cricket:wickets ?wickets .
        }
        GROUP BY ?team
    }

    SERVICE <https://query.wikidata.org/sparql> {
        ?wikidataURI wdt:P571 ?inception ;
                     wdt:P17 ?countryURI .
        ?countryURI rdfs:label ?country .
        FILTER(LANG(?country) = \"en\")
    }
}
ORDER BY DESC(?totalWickets)",
    },
    FederatedQuery {
        title: "Query 3: Compare Local Stats with DBpedia Career Stats",
        query: "PREFIX cricket: <http://example.org/cricket/ontology#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX owl: <http://www.w3.org/2002/07/owl#>
PREFIX dbp: <http://dbpedia.org/property/>

SELECT ?playerName ?localWickets ?careerWickets ?economy
WHERE {
    ?player a cricket:Player ;
            rdfs:label ?playerName ;
            owl:sameAs ?dbpediaURI .
    ?stats cricket:forPlayer ?player ;
           cricket:wickets ?localWickets ;
           cricket:economy ?economy .

    SERVICE <http://dbpedia.org/sparql> {
        ?dbpediaURI dbp:bowling ?careerWickets .
    }

    FILTER(?localWickets > 50)
}
ORDER BY DESC(?localWickets)",
    },
    FederatedQuery {
        title: "Query 4: Multi-source Federation",
        query: "PREFIX cricket: <http://example.org/cricket/ontology#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX owl: <http://www.w3.org/2002/07/owl#>
PREFIX dbo: <http://dbpedia.org/ontology/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>

SELECT ?playerName ?wickets ?dbpediaAbstract ?wikidataImage ?teamName
WHERE {
    ?player a cricket:Player ;
            rdfs:label ?playerName ;
            cricket:playsFor ?team .
    ?team rdfs:label ?teamName .
    ?stats cricket:forPlayer ?player ;
           cricket:wickets ?wickets .

    OPTIONAL {
        ?player owl:sameAs ?dbpediaURI .
        FILTER(STRSTARTS(STR(?dbpediaURI), \"http://dbpedia.org/\"))
        SERVICE <http://dbpedia.org/sparql> {
            ?dbpediaURI dbo:abstract ?dbpediaAbstract .
            FILTER(LANG(?dbpediaAbstract) = \"en\")
        }
    }

    OPTIONAL {
        ?player owl:sameAs ?wikidataURI .
        FILTER(STRSTARTS(STR(?wikidataURI), \"http://www.wikidata.org/\"))
        SERVICE <https://query.wikidata.org/sparql> {
            ?wikidataURI wdt:P18 ?wikidataImage .
        }
    }
}
ORDER BY DESC(?wickets)
LIMIT 20",
    },
];

/// Writes every federated query under a commented title banner.
pub fn write_federated_queries<W: Write>(mut writer: W) -> io::Result<W> {
    for FederatedQuery { title, query } in &FEDERATED_QUERIES {
        writeln!(writer, "# {title}")?;
        writeln!(writer, "# {}", "=".repeat(70))?;
        writeln!(writer)?;
        writeln!(writer, "{query}")?;
        writeln!(writer)?;
        writeln!(writer, "{}", "=".repeat(80))?;
        writeln!(writer)?;
    }
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::sparql::Query;

    #[test]
    fn queries_are_valid_sparql() {
        for FederatedQuery { title, query } in &FEDERATED_QUERIES {
            let parsed = Query::parse(query, None)
                .unwrap_or_else(|error| panic!("{title} does not parse: {error}"));
            assert!(parsed.to_string().contains("SERVICE"), "{title}");
        }
    }

    #[test]
    fn writes_a_banner_per_query() {
        let text = String::from_utf8(write_federated_queries(Vec::new()).unwrap()).unwrap();
        assert_eq!(text.matches("# Query ").count(), 4);
        assert!(text.starts_with("# Query 1: Local + DBpedia - Player Info\n# ====="));
        assert!(text.contains("<http://www.w3.org/2002/07/owl#>"));
    }
}
