use crate::format::{format_senses, PLACEHOLDER};
use crate::resolver::LexicalResolver;

/// The query pipeline: query string → resolve → format → document.
///
/// Holds no mutable state between calls, so one pipeline can serve any
/// number of concurrent queries against the shared read-only database.
pub struct QueryPipeline {
    resolver: LexicalResolver,
}

impl QueryPipeline {
    pub fn new(resolver: LexicalResolver) -> Self {
        QueryPipeline { resolver }
    }

    /// Produces the display document for the current query string.
    ///
    /// An empty query short-circuits to the fixed placeholder without
    /// touching the resolver or formatter. Everything else resolves and
    /// formats synchronously; an unknown word comes back as the not-found
    /// document, never an error.
    ///
    /// When callers run queries off-thread per keystroke, discarding results
    /// of superseded queries is their responsibility — the pipeline itself
    /// is plain request/response.
    pub fn document_for(&self, query: &str) -> String {
        if query.is_empty() {
            return PLACEHOLDER.to_string();
        }
        let senses = self.resolver.resolve(query);
        format_senses(query, &senses)
    }

    pub fn resolver(&self) -> &LexicalResolver {
        &self.resolver
    }
}
