//! Verdict types produced by the scoring engine.

use serde::{Deserialize, Serialize};

/// Which of the positive signals held for a result.
///
/// Wire names follow the reference tables' own naming, which the published
/// verdicts have always used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChecks {
    /// Size within the subcategory's expected bounds.
    #[serde(rename = "tamanho")]
    pub size: bool,
    /// A trusted release-group token matched.
    #[serde(rename = "grupo")]
    pub group: bool,
    /// An expected file extension matched.
    #[serde(rename = "extensao")]
    pub extension: bool,
    /// Healthy seed/leech ratio.
    #[serde(rename = "seeds")]
    pub seeds: bool,
}

impl ScoreChecks {
    pub fn all(&self) -> bool {
        self.size && self.group && self.extension && self.seeds
    }
}

/// The scoring engine's structured output. Recomputed per query, never
/// cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustVerdict {
    /// Confidence score in [0, 100].
    pub score: u8,
    /// Human-readable findings, in evaluation order.
    pub alerts: Vec<String>,
    /// Trusted release group that matched, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_subcategory: Option<String>,
    pub checks: ScoreChecks,
}

impl TrustVerdict {
    pub fn tier(&self) -> RiskTier {
        RiskTier::for_score(self.score)
    }
}

/// Presentation tier for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    /// Tier bounds: [80,100] low, [60,80) moderate, [40,60) high,
    /// [0,40) critical.
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => RiskTier::Low,
            60..=79 => RiskTier::Moderate,
            40..=59 => RiskTier::High,
            _ => RiskTier::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW RISK",
            RiskTier::Moderate => "MODERATE RISK",
            RiskTier::High => "HIGH RISK",
            RiskTier::Critical => "CRITICAL RISK",
        }
    }

    /// Fixed guidance shown verbatim by the presentation layer.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskTier::Low => &[
                "Release shows the usual marks of a clean upload.",
                "Still inspect the file list before opening anything.",
            ],
            RiskTier::Moderate => &[
                "Cross-check the release name on the group's own pages.",
                "Prefer a better-seeded copy from a known group if one exists.",
            ],
            RiskTier::High => &[
                "Do not run executables from this result.",
                "Look for the same content from a trusted release group.",
                "Treat the reported seed counts as unreliable.",
            ],
            RiskTier::Critical => &[
                "Avoid this result entirely.",
                "The name matches known malicious patterns.",
                "Report the upload to the index moderators if possible.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bounds() {
        assert_eq!(RiskTier::for_score(100), RiskTier::Low);
        assert_eq!(RiskTier::for_score(80), RiskTier::Low);
        assert_eq!(RiskTier::for_score(79), RiskTier::Moderate);
        assert_eq!(RiskTier::for_score(60), RiskTier::Moderate);
        assert_eq!(RiskTier::for_score(59), RiskTier::High);
        assert_eq!(RiskTier::for_score(40), RiskTier::High);
        assert_eq!(RiskTier::for_score(39), RiskTier::Critical);
        assert_eq!(RiskTier::for_score(0), RiskTier::Critical);
    }

    #[test]
    fn test_every_tier_has_recommendations() {
        for tier in [
            RiskTier::Low,
            RiskTier::Moderate,
            RiskTier::High,
            RiskTier::Critical,
        ] {
            assert!(!tier.recommendations().is_empty());
        }
    }

    #[test]
    fn test_checks_wire_names() {
        let checks = ScoreChecks {
            size: true,
            group: false,
            extension: true,
            seeds: false,
        };
        let json = serde_json::to_string(&checks).unwrap();
        assert_eq!(
            json,
            r#"{"tamanho":true,"grupo":false,"extensao":true,"seeds":false}"#
        );
    }

    #[test]
    fn test_checks_all() {
        assert!(!ScoreChecks::default().all());
        let full = ScoreChecks {
            size: true,
            group: true,
            extension: true,
            seeds: true,
        };
        assert!(full.all());
    }
}
