use normalize::{normalize, NormalizeConfig, NormalizeError};

/// A single document under comparison.
///
/// Identified by its file name, which is unique within one corpus run. The
/// normalized text is derived exactly once, at load time; a document is
/// immutable afterwards and every similarity metric reads `normalized` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name (not the full path); row/column label in every report.
    pub name: String,
    /// Raw text as read from disk or produced by a format converter.
    pub raw: String,
    /// Canonical comparable form of `raw`. May be empty for trivial inputs.
    pub normalized: String,
}

impl Document {
    /// Build a document from raw text, normalizing it immediately.
    pub fn new(
        name: impl Into<String>,
        raw: String,
        cfg: &NormalizeConfig,
    ) -> Result<Self, NormalizeError> {
        let normalized = normalize(&raw, cfg)?;
        Ok(Self {
            name: name.into(),
            raw,
            normalized,
        })
    }
}

/// The ordered collection of documents under comparison in one run.
///
/// Order is an invariant: documents are kept sorted lexicographically by
/// file name, which fixes row/column order in every similarity matrix and
/// makes output stable across runs for the same input set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Build a corpus, establishing the lexicographic name order.
    pub fn new(mut documents: Vec<Document>) -> Self {
        documents.sort_by(|a, b| a.name.cmp(&b.name));
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in corpus order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Document names in corpus order.
    pub fn names(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> Document {
        Document::new(name, format!("x = {name}"), &NormalizeConfig::default())
            .expect("document builds")
    }

    #[test]
    fn corpus_sorts_documents_by_name() {
        let corpus = Corpus::new(vec![doc("c.py"), doc("a.py"), doc("b.py")]);
        assert_eq!(corpus.names(), vec!["a.py", "b.py", "c.py"]);
    }

    #[test]
    fn document_normalizes_at_construction() {
        let d = Document::new("a.py", "x = 1 # init".into(), &NormalizeConfig::default())
            .expect("document builds");
        assert_eq!(d.raw, "x = 1 # init");
        assert_eq!(d.normalized, " 1 ");
    }
}
