//! Mapping of daily contribution counts onto six fixed color tiers.

use serde::{Deserialize, Serialize};

use crate::day_record::{ColoredDay, DayRecord};

/// Intensity tier for a day's contribution count.
///
/// | count   | bucket   |
/// |---------|----------|
/// | 0       | Baseline |
/// | 1..=2   | Tier1    |
/// | 3..=4   | Tier2    |
/// | 5..=8   | Tier3    |
/// | 9..=12  | Tier4    |
/// | 13..    | Tier5    |
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bucket {
    Baseline,
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
}

impl Bucket {
    pub fn for_count(count: u32) -> Bucket {
        match count {
            0 => Bucket::Baseline,
            1..=2 => Bucket::Tier1,
            3..=4 => Bucket::Tier2,
            5..=8 => Bucket::Tier3,
            9..=12 => Bucket::Tier4,
            _ => Bucket::Tier5,
        }
    }

    /// Intensity rank, 0 for `Baseline` up to 5 for `Tier5`.
    pub fn rank(&self) -> usize {
        match self {
            Bucket::Baseline => 0,
            Bucket::Tier1 => 1,
            Bucket::Tier2 => 2,
            Bucket::Tier3 => 3,
            Bucket::Tier4 => 4,
            Bucket::Tier5 => 5,
        }
    }
}

/// Color codes for the baseline and the five tiers.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub baseline: String,
    pub tiers: [String; 5],
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            baseline: String::from("#caedfa"),
            tiers: [
                String::from("#aceafa"),
                String::from("#a0e8fa"),
                String::from("#93e5fa"),
                String::from("#84e2fa"),
                String::from("#abe6f5"),
            ],
        }
    }
}

impl Palette {
    pub fn color(&self, bucket: Bucket) -> &str {
        match bucket {
            Bucket::Baseline => self.baseline.as_str(),
            tier => self.tiers[tier.rank() - 1].as_str(),
        }
    }

    pub fn color_for_count(&self, count: u32) -> &str {
        self.color(Bucket::for_count(count))
    }
}

/// Annotate every record with its bucket and color, preserving order.
pub fn colorize(days: &[DayRecord], palette: &Palette) -> Vec<ColoredDay> {
    days.iter()
        .map(|day| {
            let bucket = Bucket::for_count(day.count);
            ColoredDay {
                date: day.date,
                count: day.count,
                bucket,
                color: palette.color(bucket).to_string(),
            }
        })
        .collect()
}
