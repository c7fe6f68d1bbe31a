//! Relevance scoring primitives.

use serde::{Deserialize, Serialize};

/// Document-length normalization applied to raw term-frequency sums.
///
/// The raw score of a document is the sum of term frequencies of its
/// matched terms; the final score divides that sum by the factor this
/// normalization yields for the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthNorm {
    /// No normalization: raw term-frequency sum.
    None,
    /// Divide by the square root of the document's token count.
    #[default]
    Sqrt,
    /// Divide by the document's token count relative to the corpus
    /// average, so average-length documents keep their raw score.
    Avg,
}

impl LengthNorm {
    /// The normalization factor for a document of `doc_len` tokens in a
    /// corpus averaging `avg_doc_len` tokens. Always positive.
    pub fn factor(&self, doc_len: u32, avg_doc_len: f32) -> f32 {
        let doc_len = doc_len.max(1) as f32;
        match self {
            LengthNorm::None => 1.0,
            LengthNorm::Sqrt => doc_len.sqrt(),
            LengthNorm::Avg => {
                if avg_doc_len > 0.0 {
                    doc_len / avg_doc_len
                } else {
                    1.0
                }
            }
        }
    }
}
