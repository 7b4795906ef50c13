use super::SelectedChunk;

/// One answer request, after transport-level decoding.
#[derive(Debug, Clone)]
pub struct AnswerRequest {
    pub question: String,
    /// Cap on the number of context chunks to cite. The configured default
    /// applies when omitted.
    pub max_sources: Option<usize>,
}

/// Final outcome of one query: the composed answer text and the chunks
/// backing it, in citation order. Every citation id referenced in the
/// answer's Sources section corresponds to exactly one entry here.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub answer: String,
    pub sources: Vec<SelectedChunk>,
}
