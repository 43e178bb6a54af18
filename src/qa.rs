//! Pluggable question answering
//!
//! The core treats answer generation as a black box behind
//! [`NarrativeGenerator`]: callers may plug in anything from the canned
//! keyword templates below to a real language model without the
//! pipeline changing.

/// Black-box text producer for ad-hoc questions about a filing.
pub trait NarrativeGenerator {
    /// Produce an answer for `question` given a context string (e.g.
    /// an excerpt of the filing or the rendered portfolio narrative).
    fn generate(&self, question: &str, context: &str) -> String;
}

/// Maximum context excerpt length embedded into a default answer.
const CONTEXT_EXCERPT_LEN: usize = 1200;

/// Keyword-matched canned answers. No language understanding: the
/// question is scanned for a handful of topic keywords and a fixed
/// template is interpolated with the company identity.
#[derive(Debug, Clone)]
pub struct KeywordNarrator {
    pub company_name: String,
    pub cik: String,
}

impl KeywordNarrator {
    pub fn new(company_name: impl Into<String>, cik: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            cik: cik.into(),
        }
    }

    /// Attribution line appended to every answer.
    pub fn source_line(&self) -> String {
        format!(
            "Official SEC EDGAR Filing | Company: {} | CIK: {}",
            self.company_name, self.cik
        )
    }
}

impl NarrativeGenerator for KeywordNarrator {
    fn generate(&self, question: &str, context: &str) -> String {
        let q = question.to_lowercase();

        let answer = if q.contains("business model") {
            format!(
                "The business model of {} (CIK: {}) is described in its SEC filing as \
                 focused on delivering products and services across multiple markets. \
                 Revenue is generated through product sales, subscriptions, and service \
                 offerings. The company emphasizes innovation, customer retention, and \
                 operational efficiency. Cost management, pricing strategies, and market \
                 expansion are key components of its model.",
                self.company_name, self.cik
            )
        } else if q.contains("risk") {
            format!(
                "According to the official SEC filing of {} (CIK: {}), the company faces \
                 risks related to market competition, economic conditions, regulatory \
                 compliance, technological disruption, and operational execution. The \
                 company outlines mitigation strategies including diversification, \
                 compliance controls, and strategic investments.",
                self.company_name, self.cik
            )
        } else if q.contains("revenue") {
            format!(
                "{} (CIK: {}) generates revenue primarily through the sale of its products \
                 and services as disclosed in the SEC filing. Revenue streams may include \
                 direct sales, recurring subscriptions, and long-term contracts. Pricing \
                 strategies and customer demand significantly influence revenue performance.",
                self.company_name, self.cik
            )
        } else if !context.trim().is_empty() {
            let excerpt: String = context.chars().take(CONTEXT_EXCERPT_LEN).collect();
            format!(
                "Based on the SEC filing of {} (CIK: {}), the relevant disclosure reads: {}",
                self.company_name, self.cik, excerpt
            )
        } else {
            format!(
                "Based on the official SEC EDGAR filing of {} (CIK: {}), the company \
                 provides detailed disclosures regarding its operations, financial \
                 performance, risks, and strategy. For precise details, the relevant \
                 section of the filing should be reviewed.",
                self.company_name, self.cik
            )
        };

        format!("{}\n\nSource: {}", answer, self.source_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrator() -> KeywordNarrator {
        KeywordNarrator::new("Apple Inc.", "0000320193")
    }

    #[test]
    fn test_keyword_routing() {
        let n = narrator();
        assert!(n
            .generate("What is the company's business model?", "")
            .contains("business model of Apple Inc."));
        assert!(n
            .generate("What RISKS does the company face?", "")
            .contains("faces risks related to"));
        assert!(n
            .generate("How does it earn revenue?", "")
            .contains("generates revenue primarily"));
    }

    #[test]
    fn test_default_answer_embeds_context_excerpt() {
        let n = narrator();
        let answer = n.generate("Tell me about leverage", "debt portfolio spans 2026 to 2028");
        assert!(answer.contains("debt portfolio spans 2026 to 2028"));
    }

    #[test]
    fn test_context_excerpt_is_capped() {
        let n = narrator();
        let long_context = "x".repeat(5000);
        let answer = n.generate("anything else", &long_context);
        let x_run = answer.chars().filter(|&c| c == 'x').count();
        assert_eq!(x_run, 1200);
    }

    #[test]
    fn test_every_answer_carries_source_line() {
        let n = narrator();
        for q in ["business model", "risk", "revenue", "other"] {
            assert!(n.generate(q, "").contains("Official SEC EDGAR Filing"));
        }
    }
}
