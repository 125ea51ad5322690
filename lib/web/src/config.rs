use cricket_kg::KnowledgeGraph;

/// Holds the configuration of the web server.
pub struct ServerConfig {
    /// The knowledge graph that is served. It is never modified.
    pub graph: KnowledgeGraph,
    /// The IP address and port the socket binds to.
    pub bind: String,
    /// Whether CORS is enabled.
    pub cors: bool,
}
