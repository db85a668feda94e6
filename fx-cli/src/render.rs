//! Plain-text views for the terminal.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use fx_types::{ConversionRecord, CurrencyListing, Trend};

pub fn conversion(record: &ConversionRecord) -> String {
    format!(
        "{} {} = {:.2} {}\n1 {} = {:.4} {} | Updated: {}",
        record.amount().normalize(),
        record.base(),
        record.converted_amount(),
        record.target(),
        record.base(),
        record.rate(),
        record.target(),
        record.date()
    )
}

pub fn history(records: &[ConversionRecord]) -> String {
    if records.is_empty() {
        return "No conversion history yet.".to_string();
    }
    records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{:>2}. {}", i + 1, r))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn currencies(listing: &CurrencyListing) -> String {
    let mut out = String::new();
    if let CurrencyListing::Fallback { reason, .. } = listing {
        out.push_str(&format!(
            "Could not fetch currency list ({reason}); showing built-in list.\n"
        ));
    }
    let lines: Vec<String> = listing
        .currencies()
        .iter()
        .map(|c| {
            let symbol = fx_currencies::symbol_for(c.code.as_str()).unwrap_or("");
            format!("{:<4} {:<4} {}", c.code, symbol.trim_end(), c.name)
        })
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

/// Horizontal bar chart, one row per point, bars scaled between low and high.
pub fn trend_chart(trend: &Trend, width: usize) -> String {
    let Some(summary) = trend.summary() else {
        return "No data available for this date range.".to_string();
    };
    let width = width.max(1);
    let span = summary.high.rate - summary.low.rate;

    let mut lines = vec![format!(
        "{} → {} Exchange Rate Trend ({} to {})",
        trend.base, trend.target, trend.start, trend.end
    )];

    for point in &trend.points {
        let len = if span.is_zero() {
            width
        } else {
            let scaled = (point.rate - summary.low.rate) / span * Decimal::from(width - 1);
            1 + scaled.round().to_usize().unwrap_or(0)
        };
        lines.push(format!("{}  {:>12.4} │{}", point.date, point.rate, "█".repeat(len)));
    }

    let change = match summary.change_percent {
        Some(p) if p >= Decimal::ZERO => format!("+{p}%"),
        Some(p) => format!("{p}%"),
        None => "n/a".to_string(),
    };
    lines.push(format!(
        "Low {:.4} ({}) · High {:.4} ({}) · Change {}",
        summary.low.rate, summary.low.date, summary.high.rate, summary.high.date, change
    ));
    lines.join("\n")
}
