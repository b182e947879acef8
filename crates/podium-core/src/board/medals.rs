//! Tie-aware medal assignment for the top three distinct scores.

use strum::IntoStaticStr;

use super::ScoreRecord;

/// Medal tier for one of the top three distinct score values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Medal {
    #[strum(serialize = "top1")]
    Gold,
    #[strum(serialize = "top2")]
    Silver,
    #[strum(serialize = "top3")]
    Bronze,
}

impl Medal {
    /// CSS modifier class applied to the rank and score cells.
    pub fn css_class(&self) -> &'static str {
        self.into()
    }

    /// Medal emoji shown next to the rank.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Gold => "\u{1F947}",
            Self::Silver => "\u{1F948}",
            Self::Bronze => "\u{1F949}",
        }
    }

    fn from_slot(slot: usize) -> Option<Self> {
        match slot {
            0 => Some(Self::Gold),
            1 => Some(Self::Silver),
            2 => Some(Self::Bronze),
            _ => None,
        }
    }
}

/// A record joined with its 1-based rank and medal assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRow<'a> {
    pub rank: usize,
    pub medal: Option<Medal>,
    pub record: &'a ScoreRecord,
}

/// Collect up to three distinct score values, scanning from the top and
/// preserving first-occurrence order.
///
/// NaN counts as equal to NaN, so a run of unparseable scores consumes at
/// most one slot.
pub fn top_scores(records: &[ScoreRecord]) -> Vec<f64> {
    let mut top = Vec::with_capacity(3);
    for record in records {
        if top.len() == 3 {
            break;
        }
        let score = record.score.as_f64();
        if !top.iter().any(|&seen| same_value(seen, score)) {
            top.push(score);
        }
    }
    top
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Assign ranks and medals in input order.
///
/// Medal matching uses exact float equality against the top-score slots, so
/// ties share a medal and a NaN score never medals even when it holds a slot.
pub fn rank_rows(records: &[ScoreRecord]) -> Vec<RankedRow<'_>> {
    let top = top_scores(records);

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let score = record.score.as_f64();
            let medal = top
                .iter()
                .position(|&value| value == score)
                .and_then(Medal::from_slot);
            RankedRow {
                rank: i + 1,
                medal,
                record,
            }
        })
        .collect()
}
