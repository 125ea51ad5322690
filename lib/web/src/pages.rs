//! The pages for human readers.

use crate::error::ServerError;
use crate::AppState;
use anyhow::anyhow;
use axum::extract::State;
use axum::response::Html;
use cricket_kg::model::vocab::{dcterms, rdf, void};
use cricket_kg::model::TermRef;
use cricket_kg::{
    BowlerSummary, DashboardSummary, EconomyRow, ExportFormat, ExternalLinks, FiveWicketHaul,
    KnowledgeGraph, TeamStatistics,
};
use std::fmt;

const STYLE: &str = "body { font-family: 'Segoe UI', Tahoma, sans-serif; margin: 0; background: #f4f6fb; color: #1e2a3a; }
header { background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%); color: white; padding: 24px 40px; }
main { max-width: 1200px; margin: 0 auto; padding: 20px 40px; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; }
.card { background: white; border-radius: 10px; padding: 16px; text-align: center; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
.card .number { font-size: 32px; font-weight: bold; color: #1e3c72; }
section { background: white; border-radius: 10px; padding: 16px; margin-top: 24px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid #e0e4ee; }
code, pre { background: #eef1f7; padding: 2px 5px; }";

const SEARCH_SCRIPT: &str = "const form = document.getElementById('search');
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const q = document.getElementById('q').value;
  const response = await fetch('/api/search?q=' + encodeURIComponent(q));
  const rows = await response.json();
  const body = document.getElementById('results');
  body.replaceChildren();
  for (const row of rows) {
    const tr = document.createElement('tr');
    for (const value of [row.name, row.team, row.wickets, row.economy, row.average]) {
      const td = document.createElement('td');
      td.textContent = value === null ? '-' : value;
      tr.appendChild(td);
    }
    body.appendChild(tr);
  }
});";

/// Writes its text with the HTML special characters escaped.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => fmt::Write::write_char(f, c)?,
            }
        }
        Ok(())
    }
}

/// A number with a fixed precision, or a dash when it is absent.
struct Figure(Option<f64>, usize);

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:.precision$}", precision = self.1),
            None => f.write_str("-"),
        }
    }
}

struct Links<'a>(&'a ExternalLinks);

impl fmt::Display for Links<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut empty = true;
        for (label, target) in [("DBpedia", &self.0.dbpedia), ("Wikidata", &self.0.wikidata)] {
            if let Some(target) = target {
                write!(f, "<a href=\"{}\">{label}</a> ", Escaped(target))?;
                empty = false;
            }
        }
        if empty {
            f.write_str("-")?;
        }
        Ok(())
    }
}

fn write_page_start(f: &mut fmt::Formatter<'_>, title: &str, subtitle: &str) -> fmt::Result {
    write!(
        f,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n<header><h1>{}</h1><p>{}</p></header>\n<main>\n",
        Escaped(title),
        Escaped(title),
        Escaped(subtitle)
    )
}

fn write_cards(f: &mut fmt::Formatter<'_>, summary: &DashboardSummary) -> fmt::Result {
    f.write_str("<div class=\"cards\">\n")?;
    for (label, value) in [
        ("Players", summary.players.to_string()),
        ("Teams", summary.teams.to_string()),
        ("Total Wickets", summary.total_wickets.to_string()),
        ("External Links", summary.external_links.to_string()),
        ("RDF Triples", summary.triples.to_string()),
    ] {
        writeln!(
            f,
            "<div class=\"card\"><div class=\"number\">{value}</div><div>{label}</div></div>"
        )?;
    }
    f.write_str("</div>\n")
}

/// The statistics dashboard.
struct Dashboard {
    summary: DashboardSummary,
    top_wicket_takers: Vec<BowlerSummary>,
    best_economy: Vec<EconomyRow>,
    five_wicket_hauls: Vec<FiveWicketHaul>,
    teams: Vec<TeamStatistics>,
}

impl Dashboard {
    fn load(graph: &KnowledgeGraph) -> Result<Self, ServerError> {
        Ok(Self {
            summary: graph.summary()?,
            top_wicket_takers: graph.top_wicket_takers()?,
            best_economy: graph.best_economy()?,
            five_wicket_hauls: graph.five_wicket_hauls()?,
            teams: graph.team_statistics()?,
        })
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_page_start(
            f,
            "PSL Cricket Statistics Dashboard",
            "Bowling statistics as linked data, connected to DBpedia and Wikidata",
        )?;
        write_cards(f, &self.summary)?;

        f.write_str("<section><h2>Top 20 Wicket Takers</h2>\n<table><thead><tr><th>Rank</th><th>Player</th><th>Team</th><th>Wickets</th><th>Economy</th><th>Avg</th><th>External Links</th></tr></thead><tbody>\n")?;
        for (rank, row) in self.top_wicket_takers.iter().enumerate() {
            writeln!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                rank + 1,
                Escaped(&row.name),
                Escaped(&row.team),
                Figure(row.wickets, 0),
                Figure(row.economy, 2),
                Figure(row.average, 2),
                Links(&row.links)
            )?;
        }
        f.write_str("</tbody></table></section>\n")?;

        f.write_str("<section><h2>Best Economy Rates (Min 20 Wickets)</h2>\n<table><thead><tr><th>Rank</th><th>Player</th><th>Team</th><th>Economy</th><th>Wickets</th><th>Overs</th><th>External Links</th></tr></thead><tbody>\n")?;
        for (rank, row) in self.best_economy.iter().enumerate() {
            writeln!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                rank + 1,
                Escaped(&row.name),
                Escaped(&row.team),
                Figure(Some(row.economy), 2),
                Figure(Some(row.wickets), 0),
                Figure(row.overs, 1),
                Links(&row.links)
            )?;
        }
        f.write_str("</tbody></table></section>\n")?;

        f.write_str("<section><h2>Players with 5-Wicket Hauls</h2>\n<table><thead><tr><th>Player</th><th>Team</th><th>5-Wicket Hauls</th><th>Best Figures</th><th>Total Wickets</th><th>External Links</th></tr></thead><tbody>\n")?;
        for row in &self.five_wicket_hauls {
            writeln!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                Escaped(&row.name),
                Escaped(&row.team),
                Figure(Some(row.five_wickets), 0),
                Escaped(row.best_bowling.as_deref().unwrap_or("-")),
                Figure(row.wickets, 0),
                Links(&row.links)
            )?;
        }
        f.write_str("</tbody></table></section>\n")?;

        f.write_str("<section><h2>Team-wise Bowling Statistics</h2>\n<table><thead><tr><th>Team</th><th>Players</th><th>Total Wickets</th><th>Avg Economy</th><th>Avg Strike Rate</th><th>External Links</th></tr></thead><tbody>\n")?;
        for row in &self.teams {
            writeln!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                Escaped(&row.name),
                row.players,
                Figure(Some(row.total_wickets), 0),
                Figure(row.average_economy, 2),
                Figure(row.average_strike_rate, 2),
                Links(&row.links)
            )?;
        }
        f.write_str("</tbody></table></section>\n")?;

        write!(
            f,
            "<section><h2>Search Players</h2>\n<form id=\"search\"><input id=\"q\" name=\"q\" placeholder=\"Player name\"> <button type=\"submit\">Search</button></form>\n<table><thead><tr><th>Player</th><th>Team</th><th>Wickets</th><th>Economy</th><th>Average</th></tr></thead><tbody id=\"results\"></tbody></table></section>\n<p><a href=\"/about\">About this dataset</a> | <a href=\"/sparql\">SPARQL endpoint</a></p>\n</main>\n<script>\n{SEARCH_SCRIPT}\n</script>\n</body>\n</html>\n"
        )
    }
}

/// The metadata of the dataset and the ways to access it.
struct About {
    summary: DashboardSummary,
    metadata: Vec<(&'static str, String)>,
}

impl About {
    fn load(graph: &KnowledgeGraph) -> Result<Self, ServerError> {
        let dataset = graph
            .graph()
            .subject_for_predicate_object(rdf::TYPE, void::DATASET);
        let metadata = [
            ("Title", dcterms::TITLE),
            ("Description", dcterms::DESCRIPTION),
            ("Created", dcterms::CREATED),
            ("Creator", dcterms::CREATOR),
            ("Source", dcterms::SOURCE),
            ("License", dcterms::LICENSE),
        ]
        .into_iter()
        .filter_map(|(label, property)| {
            let value = match graph
                .graph()
                .object_for_subject_predicate(dataset?, property)?
            {
                TermRef::NamedNode(node) => node.as_str().to_owned(),
                TermRef::Literal(literal) => literal.value().to_owned(),
                _ => return None,
            };
            Some((label, value))
        })
        .collect();
        Ok(Self {
            summary: graph.summary()?,
            metadata,
        })
    }
}

impl fmt::Display for About {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_page_start(
            f,
            "Cricket Bowling Statistics - Linked Data",
            "Dataset information and access points",
        )?;
        write_cards(f, &self.summary)?;

        f.write_str("<section><h2>Dataset Information</h2>\n<table><tbody>\n")?;
        for (label, value) in &self.metadata {
            writeln!(f, "<tr><th>{label}</th><td>{}</td></tr>", Escaped(value))?;
        }
        f.write_str("</tbody></table></section>\n")?;

        f.write_str("<section><h2>Available Endpoints</h2>\n<ul>\n<li><code>GET /data</code> - the full dataset</li>\n<li><code>GET /player/{name}</code> - a player and their statistics</li>\n<li><code>GET /team/{name}</code> - a team and its players</li>\n<li><code>GET /sparql?query=</code> and <code>POST /sparql</code> - read-only SPARQL endpoint</li>\n<li><code>GET /api/search?q=</code> - player search as JSON</li>\n</ul></section>\n")?;

        f.write_str("<section><h2>Content Negotiation</h2>\n<p>Use the Accept header to choose a format:</p>\n<ul>\n")?;
        for format in ExportFormat::ALL {
            writeln!(f, "<li><code>{}</code> - {format}</li>", format.media_type())?;
        }
        f.write_str("<li><code>text/html</code> - this page</li>\n</ul></section>\n")?;

        f.write_str("<section><h2>Example Usage</h2>\n<pre>\ncurl -H \"Accept: application/ld+json\" http://localhost:5000/data\n\ncurl -X POST http://localhost:5000/sparql \\\n  -H \"Content-Type: application/sparql-query\" \\\n  -d \"SELECT * WHERE { ?s ?p ?o } LIMIT 10\"\n</pre></section>\n")?;

        f.write_str("<section><h2>Links to External Datasets</h2>\n<ul>\n<li><a href=\"http://dbpedia.org/resource/Cricket\">DBpedia - Cricket</a></li>\n<li><a href=\"http://www.wikidata.org/entity/Q5375\">Wikidata - Cricket</a></li>\n</ul></section>\n</main>\n</body>\n</html>\n")
    }
}

pub async fn handle_dashboard(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let dashboard = tokio::task::spawn_blocking(move || Dashboard::load(&state.graph))
        .await
        .map_err(|e| ServerError::Internal(anyhow!(e)))??;
    Ok(Html(dashboard.to_string()))
}

pub async fn handle_about(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let about = tokio::task::spawn_blocking(move || About::load(&state.graph))
        .await
        .map_err(|e| ServerError::Internal(anyhow!(e)))??;
    Ok(Html(about.to_string()))
}
