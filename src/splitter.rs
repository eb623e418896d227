/// Record splitting for the catalog source file
///
/// A top-level record starts on a line that is exactly two spaces and an
/// opening brace. Everything before the first such line is the preamble
/// (imports, the array declaration). The delimiter line stays at the front
/// of each block so recomposition is plain concatenation.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogParts {
    pub preamble: String,
    pub blocks: Vec<String>,
}

impl CatalogParts {
    /// Concatenate preamble and blocks in order, no separator. With
    /// untouched blocks this reproduces the input document exactly.
    pub fn recompose(&self) -> String {
        recompose(&self.preamble, &self.blocks)
    }
}

pub fn recompose(preamble: &str, blocks: &[String]) -> String {
    let total = preamble.len() + blocks.iter().map(String::len).sum::<usize>();
    let mut document = String::with_capacity(total);
    document.push_str(preamble);
    for block in blocks {
        document.push_str(block);
    }
    document
}

/// Split a document into preamble and per-record blocks.
pub fn split_records(document: &str) -> CatalogParts {
    let mut cuts = Vec::new();
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        if is_record_start(line) {
            cuts.push(offset);
        }
        offset += line.len();
    }

    if cuts.is_empty() {
        return CatalogParts {
            preamble: document.to_string(),
            blocks: Vec::new(),
        };
    }

    let preamble = document[..cuts[0]].to_string();
    cuts.push(document.len());
    let blocks = cuts
        .windows(2)
        .map(|span| document[span[0]..span[1]].to_string())
        .collect();

    CatalogParts { preamble, blocks }
}

/// Only the exact two-space indentation counts as a record start; nested
/// object openers sit deeper and fall through.
fn is_record_start(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "  {"
}
