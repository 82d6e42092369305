//! Scoring and priority ranking.

use tracing::{debug, info_span};

use hcp_model::{HcpRecord, RankedHcp};

/// Scores each record and orders them by descending score.
///
/// The sort is stable: equal scores keep their input order. `priority_rank`
/// is the 1-based position in the returned vector.
pub fn rank_hcps(records: Vec<HcpRecord>) -> Vec<RankedHcp> {
    let span = info_span!("rank", records = records.len());
    let _guard = span.enter();

    // `total_cmp` orders -0.0 below 0.0; adding zero folds it into 0.0.
    let mut scored: Vec<(f64, HcpRecord)> = records
        .into_iter()
        .map(|record| (record.score() + 0.0, record))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let ranked: Vec<RankedHcp> = scored
        .into_iter()
        .enumerate()
        .map(|(idx, (score, record))| RankedHcp {
            record,
            score,
            priority_rank: idx + 1,
        })
        .collect();

    if let (Some(first), Some(last)) = (ranked.first(), ranked.last()) {
        debug!(top_score = first.score, bottom_score = last.score, "ranked providers");
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcp_model::WritingBehavior;

    fn record(id: &str, rx: f64, behavior: WritingBehavior) -> HcpRecord {
        HcpRecord::new(id, "Neurology", rx, "CA", behavior)
    }

    #[test]
    fn orders_by_weighted_score() {
        let ranked = rank_hcps(vec![
            record("a", 100.0, WritingBehavior::Low),
            record("b", 100.0, WritingBehavior::High),
            record("c", 120.0, WritingBehavior::Medium),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.record.npi_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(ranked[0].score, 300.0);
        assert_eq!(ranked[1].score, 240.0);
        assert_eq!(ranked[2].score, 100.0);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.priority_rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_hcps(vec![
            record("first", 200.0, WritingBehavior::Low),
            record("second", 100.0, WritingBehavior::Medium),
            record("third", 200.0, WritingBehavior::Low),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.record.npi_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn signed_zero_scores_tie() {
        let ranked = rank_hcps(vec![
            record("first", -0.0, WritingBehavior::Low),
            record("second", 0.0, WritingBehavior::Low),
            record("third", -0.0, WritingBehavior::High),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.record.npi_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
        assert!(ranked.iter().all(|r| r.score.is_sign_positive()));
    }

    #[test]
    fn empty_input() {
        assert!(rank_hcps(Vec::new()).is_empty());
    }
}
