//! The scoring algorithm.

use crate::search::TorrentResult;

use super::reference::{
    SubcategorySpec, CATEGORIES, DANGEROUS_EXTENSIONS, MALICIOUS_GROUPS, SUSPICIOUS_PATTERNS,
};
use super::types::{ScoreChecks, TrustVerdict};

const BASE_SCORE: i32 = 70;

/// Scores a search result against the curated reference tables.
///
/// `score` is a pure function of the result and the tables: identical input
/// yields an identical verdict. The evaluation order below is fixed; it
/// determines which alerts and bonuses apply and must not be rearranged.
#[derive(Debug, Default)]
pub struct TrustScoringEngine;

impl TrustScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, result: &TorrentResult) -> TrustVerdict {
        let upper_name = result.name.to_uppercase();
        let tokens: Vec<&str> = upper_name
            .split(|c: char| matches!(c, '-' | '_' | '.') || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let mut score = BASE_SCORE;
        let mut alerts: Vec<String> = Vec::new();
        let mut checks = ScoreChecks::default();

        let mut detected_group = None;
        let mut detected_category = None;
        let mut detected_subcategory = None;

        // Walk the reference tables in declaration order; the first trusted
        // group whose token appears in the name wins and the walk stops.
        //
        // Compatibility quirk: the size and extension checks below run
        // against whichever subcategory the walk examined last. When no
        // group matched, that is simply the final subcategory of the final
        // category, not a neutral state. Long-standing behavior; verdicts
        // depend on it.
        let mut examined: &SubcategorySpec = &CATEGORIES[0].subcategories[0];
        'walk: for category in CATEGORIES {
            for sub in category.subcategories {
                examined = sub;
                for group in sub.trusted_groups {
                    if tokens.iter().any(|t| t == group) {
                        detected_group = Some(group.to_string());
                        detected_category = Some(category.name.to_string());
                        detected_subcategory = Some(sub.name.to_string());
                        score += 20;
                        checks.group = true;
                        break 'walk;
                    }
                }
            }
        }

        if result.size_bytes >= examined.min_size && result.size_bytes <= examined.max_size {
            score += 10;
            checks.size = true;
        }
        if examined
            .extensions
            .iter()
            .any(|ext| upper_name.ends_with(ext))
        {
            score += 10;
            checks.extension = true;
        }

        let ratio = result.seeders as f64 / result.leechers.max(1) as f64;
        if result.seeders > 10 && ratio > 1.0 {
            score += 10;
            checks.seeds = true;
        }
        if result.seeders == 0 {
            score -= 20;
            alerts.push("no active seeds".to_string());
        } else if ratio < 0.5 {
            score -= 10;
            alerts.push("low seed ratio".to_string());
        }

        for group in MALICIOUS_GROUPS {
            if upper_name.contains(group) {
                score -= 50;
                alerts.push(format!("known malicious group: {}", group));
            }
        }

        for pattern in SUSPICIOUS_PATTERNS {
            if upper_name.contains(pattern) {
                score -= 15;
                alerts.push(format!("suspicious pattern: {}", pattern));
            }
        }

        for ext in DANGEROUS_EXTENSIONS {
            if upper_name.ends_with(ext) {
                score -= 30;
                alerts.push(format!("dangerous file extension: {}", ext));
            }
        }

        let mut final_score = score.clamp(0, 100) as u8;
        if final_score > 95 && !checks.all() {
            final_score = 95;
            alerts.push("score capped at 95: not all checks passed".to_string());
        }

        TrustVerdict {
            score: final_score,
            alerts,
            detected_group,
            detected_category,
            detected_subcategory,
            checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::RiskTier;

    fn make_result(name: &str, size_bytes: u64, seeders: u32, leechers: u32) -> TorrentResult {
        TorrentResult {
            name: name.to_string(),
            size_bytes,
            seeders,
            leechers,
            info_hash: "abc123".to_string(),
            added_at: None,
        }
    }

    #[test]
    fn test_trusted_game_release_scores_low_risk() {
        let engine = TrustScoringEngine::new();
        let result = make_result("Game.Setup-CODEX", 45_000_000_000, 50, 5);

        let verdict = engine.score(&result);
        assert_eq!(verdict.detected_group.as_deref(), Some("CODEX"));
        assert_eq!(verdict.detected_category.as_deref(), Some("JOGOS"));
        assert_eq!(verdict.detected_subcategory.as_deref(), Some("PC"));
        assert!(verdict.checks.group);
        assert!(verdict.checks.size);
        assert!(verdict.checks.seeds);
        assert!(!verdict.checks.extension); // no extension in the name

        // 70 + 20 + 10 + 10 clamps to 100, then caps at 95 because the
        // extension check failed.
        assert_eq!(verdict.score, 95);
        assert_eq!(verdict.tier(), RiskTier::Low);
        assert!(verdict
            .alerts
            .iter()
            .any(|a| a.contains("capped at 95")));
    }

    #[test]
    fn test_malicious_name_clamps_to_zero() {
        let engine = TrustScoringEngine::new();
        let result = make_result("FREE-DOWNLOAD-crack.exe.zip", 0, 0, 0);

        let verdict = engine.score(&result);
        // 70 - 20 (no seeds) - 50 (malicious) - 15 (suspicious) - 30
        // (dangerous extension) is well below zero.
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.tier(), RiskTier::Critical);
        assert!(verdict.detected_group.is_none());

        assert!(verdict.alerts.iter().any(|a| a == "no active seeds"));
        assert!(verdict
            .alerts
            .iter()
            .any(|a| a.contains("known malicious group: FREE-DOWNLOAD")));
        assert!(verdict
            .alerts
            .iter()
            .any(|a| a.contains("suspicious pattern: CRACK")));
        assert!(verdict
            .alerts
            .iter()
            .any(|a| a.contains("dangerous file extension: .ZIP")));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let engine = TrustScoringEngine::new();
        let result = make_result("Movie.2023.1080p-SPARKS.mkv", 8_000_000_000, 30, 10);

        let first = engine.score(&result);
        let second = engine.score(&result);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matched_group_uses_its_own_subcategory_specs() {
        let engine = TrustScoringEngine::new();
        // 20 GB is inside the PC game bounds but far outside the bounds of
        // the table's final subcategory, so a pass here proves the matched
        // subcategory's specs were applied.
        let result = make_result("Other.Game-SKIDROW", 20 * 1024 * 1024 * 1024, 20, 2);

        let verdict = engine.score(&result);
        assert_eq!(verdict.detected_subcategory.as_deref(), Some("PC"));
        assert!(verdict.checks.size);
    }

    #[test]
    fn test_unmatched_name_uses_last_examined_subcategory_specs() {
        let engine = TrustScoringEngine::new();
        // No trusted group: the walk ends on the table's final subcategory
        // (music albums) and its specs get applied as-is.
        let result = make_result("Some.Bootleg.Album.FLAC", 100 * 1024 * 1024, 5, 10);

        let verdict = engine.score(&result);
        assert!(verdict.detected_group.is_none());
        assert!(verdict.detected_category.is_none());
        assert!(verdict.checks.size); // within album bounds
        assert!(verdict.checks.extension); // .FLAC expected there
    }

    #[test]
    fn test_seed_heuristics() {
        let engine = TrustScoringEngine::new();

        // Healthy: +10, no alert.
        let healthy = engine.score(&make_result("X", 0, 50, 5));
        assert!(healthy.checks.seeds);
        assert!(healthy.alerts.is_empty());

        // Dead: -20 with alert.
        let dead = engine.score(&make_result("X", 0, 0, 5));
        assert!(!dead.checks.seeds);
        assert!(dead.alerts.iter().any(|a| a == "no active seeds"));

        // Leecher-heavy: -10 with alert.
        let weak = engine.score(&make_result("X", 0, 4, 20));
        assert!(!weak.checks.seeds);
        assert!(weak.alerts.iter().any(|a| a == "low seed ratio"));

        // Few seeders but balanced: no bonus, no penalty.
        let quiet = engine.score(&make_result("X", 0, 3, 3));
        assert!(!quiet.checks.seeds);
        assert!(quiet.alerts.is_empty());
    }

    #[test]
    fn test_malicious_match_is_substring_not_token_bounded() {
        let engine = TrustScoringEngine::new();
        // "FREE-DOWNLOAD" sits inside a longer run of characters; the match
        // is a plain substring scan and still fires.
        let verdict = engine.score(&make_result("XFREE-DOWNLOADER.Pack", 0, 20, 1));
        assert!(verdict
            .alerts
            .iter()
            .any(|a| a.contains("known malicious group: FREE-DOWNLOAD")));
    }

    #[test]
    fn test_multiple_suspicious_patterns_stack() {
        let engine = TrustScoringEngine::new();
        let verdict = engine.score(&make_result("Tool.crack.keygen", 0, 20, 1));
        let suspicious: Vec<_> = verdict
            .alerts
            .iter()
            .filter(|a| a.starts_with("suspicious pattern"))
            .collect();
        assert_eq!(suspicious.len(), 2);
    }

    #[test]
    fn test_full_checks_reach_one_hundred() {
        let engine = TrustScoringEngine::new();
        // Group + size + extension + seeds all pass: 110 clamps to 100 and
        // no cap applies.
        let result = make_result(
            "Game.Disc-CODEX.iso",
            10 * 1024 * 1024 * 1024,
            50,
            5,
        );

        let verdict = engine.score(&result);
        assert!(verdict.checks.all());
        assert_eq!(verdict.score, 100);
        assert_eq!(verdict.tier(), RiskTier::Low);
        assert!(verdict.alerts.is_empty());
    }

    #[test]
    fn test_first_group_match_wins() {
        let engine = TrustScoringEngine::new();
        // CODEX (games/PC) appears before SPARKS (movies) in the tables, so
        // a name carrying both resolves to the game group.
        let verdict = engine.score(&make_result("Cross.Post-SPARKS-CODEX", 0, 20, 1));
        assert_eq!(verdict.detected_group.as_deref(), Some("CODEX"));
        assert_eq!(verdict.detected_category.as_deref(), Some("JOGOS"));
    }

    #[test]
    fn test_group_token_must_match_whole_token() {
        let engine = TrustScoringEngine::new();
        // "CODEXTRA" contains CODEX but is a different token; trusted-group
        // detection is token-bounded (unlike the penalty tables).
        let verdict = engine.score(&make_result("Game-CODEXTRA", 0, 20, 1));
        assert!(verdict.detected_group.is_none());
    }
}
