//! Historical rate series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;

/// One observation in a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub rate: Decimal,
}

/// A date-ordered series of rates for a currency pair.
///
/// Points keep the order the provider returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub points: Vec<TrendPoint>,
}

/// Caption figures for a trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub first: TrendPoint,
    pub last: TrendPoint,
    pub low: TrendPoint,
    pub high: TrendPoint,
    /// Percentage change from `first` to `last`, rounded to 2 places.
    /// `None` when the first rate is zero.
    pub change_percent: Option<Decimal>,
}

impl Trend {
    /// Returns `None` for an empty series.
    pub fn summary(&self) -> Option<TrendSummary> {
        let first = *self.points.first()?;
        let last = *self.points.last()?;
        let mut low = first;
        let mut high = first;
        for point in &self.points {
            if point.rate < low.rate {
                low = *point;
            }
            if point.rate > high.rate {
                high = *point;
            }
        }

        let change_percent = (last.rate - first.rate)
            .checked_div(first.rate)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|p| p.round_dp(2));

        Some(TrendSummary {
            first,
            last,
            low,
            high,
            change_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn point(day: u32, rate: Decimal) -> TrendPoint {
        TrendPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            rate,
        }
    }

    fn trend(points: Vec<TrendPoint>) -> Trend {
        Trend {
            base: CurrencyCode::new("USD").unwrap(),
            target: CurrencyCode::new("INR").unwrap(),
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            points,
        }
    }

    #[test]
    fn test_summary_empty() {
        assert!(trend(vec![]).summary().is_none());
    }

    #[test]
    fn test_summary_figures() {
        let t = trend(vec![
            point(2, dec!(80)),
            point(3, dec!(79)),
            point(4, dec!(84)),
            point(5, dec!(82)),
        ]);
        let s = t.summary().unwrap();
        assert_eq!(s.first.rate, dec!(80));
        assert_eq!(s.last.rate, dec!(82));
        assert_eq!(s.low, point(3, dec!(79)));
        assert_eq!(s.high, point(4, dec!(84)));
        assert_eq!(s.change_percent, Some(dec!(2.50)));
    }

    #[test]
    fn test_summary_zero_first_rate() {
        let t = trend(vec![point(2, dec!(0)), point(3, dec!(1))]);
        assert_eq!(t.summary().unwrap().change_percent, None);
    }
}
