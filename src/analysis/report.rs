//! Report text for token statistics
//!
//! Reports are Telegram HTML. `strip_html` turns them back into plain text
//! for the terminal.

use super::aggregator::TokenLedger;

pub const NO_DATA_MESSAGE: &str = "❌ No token transactions or API error.";
pub const ANALYSIS_FAILED_MESSAGE: &str = "❌ Failed to analyze token transactions.";
pub const REPORT_HEADER: &str = "📊 <b>Token statistics:</b>\n";
pub const VALUATION_UNAVAILABLE_MESSAGE: &str = "❌ Error fetching data from DeBank.";

/// Round half away from zero to 2 decimal places
pub fn round2(x: f64) -> f64 {
    let scaled = x * 100.0;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / 100.0
}

/// Shortest round-trip form of the rounded value (`1.0`, `0.5`, `1234.57`)
pub fn format_amount(x: f64) -> String {
    // + 0.0 folds -0.0 into 0.0
    format!("{:?}", round2(x) + 0.0)
}

/// Escape text for Telegram's HTML parse mode
pub fn html_escape(text: &str) -> String {
    htmlescape::encode_minimal(text)
}

/// Drop tags and undo `html_escape`
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    // A stray '&' leaves the text as-is
    htmlescape::decode_html(&out).unwrap_or(out)
}

pub fn token_line(symbol: &str, inflow: f64, outflow: f64, pnl: f64) -> String {
    format!(
        "<b>{}</b>: 🔽 {} | 🔼 {} | 🧮 PNL: {}",
        html_escape(symbol),
        format_amount(inflow),
        format_amount(outflow),
        format_amount(pnl)
    )
}

/// `💰 <b>DeBank</b>: total portfolio value: $1234.50`
pub fn format_valuation(provider: &str, total_usd: f64) -> String {
    format!(
        "💰 <b>{}</b>: total portfolio value: ${:.2}",
        html_escape(provider),
        total_usd
    )
}

/// Header, then one line per symbol in ledger order
pub fn render_report(ledger: &TokenLedger) -> String {
    let mut report = String::from(REPORT_HEADER);
    for (symbol, stats) in ledger.iter() {
        report.push('\n');
        report.push_str(&token_line(symbol, stats.inflow, stats.outflow, stats.pnl()));
    }

    let skipped = ledger.skipped().len();
    if skipped > 0 {
        report.push_str(&format!(
            "\n\n⚠️ Skipped {} malformed transfer{}",
            skipped,
            if skipped == 1 { "" } else { "s" }
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::Direction;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.0), 1.0);
        assert_eq!(round2(1234.5678), 1234.57);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1.0), "1.0");
        assert_eq!(format_amount(0.5), "0.5");
        assert_eq!(format_amount(-0.5), "-0.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(-0.001), "0.0");
    }

    #[test]
    fn test_html_escape_symbol() {
        assert_eq!(html_escape("<b>&\"X\""), "&lt;b&gt;&amp;&quot;X&quot;");
        assert_eq!(html_escape("USDT"), "USDT");
    }

    #[test]
    fn test_strip_html_restores_text() {
        let html = token_line("A&<B>", 1.0, 2.0, 1.0);
        assert_eq!(strip_html(&html), "A&<B>: 🔽 1.0 | 🔼 2.0 | 🧮 PNL: 1.0");
        assert_eq!(strip_html(REPORT_HEADER), "📊 Token statistics:\n");
    }

    #[test]
    fn test_format_valuation() {
        assert_eq!(
            format_valuation("DeBank", 1234.5),
            "💰 <b>DeBank</b>: total portfolio value: $1234.50"
        );
        assert_eq!(
            format_valuation("DeBank", 0.0),
            "💰 <b>DeBank</b>: total portfolio value: $0.00"
        );
    }

    #[test]
    fn test_render_report_layout() {
        let mut ledger = TokenLedger::new();
        ledger.record("USDT", Direction::In, 1.0);
        ledger.record("USDT", Direction::Out, 0.5);
        ledger.record("DAI", Direction::Out, 3.0);

        let report = render_report(&ledger);
        assert_eq!(
            report,
            "📊 <b>Token statistics:</b>\n\
             \n<b>USDT</b>: 🔽 1.0 | 🔼 0.5 | 🧮 PNL: -0.5\
             \n<b>DAI</b>: 🔽 0.0 | 🔼 3.0 | 🧮 PNL: 3.0"
        );
    }
}
