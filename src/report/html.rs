//! Self-contained HTML ranking page for one pass
use htmlescape::encode_minimal;
use std::fmt::Write as _;

use crate::exits::ExitTargets;
use crate::funnel::ScoredCandidate;

use super::csv::optional_cell;

const TOP_ROW_STYLE: &str = " style=\"background:#fff9d6;\"";

const PAGE_STYLE: &str = "body{font-family:system-ui,Arial;margin:24px}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #eee;padding:6px 8px;font-size:14px}\
th{background:#f7f7f7}";

const LEADING_HEADERS: &[&str] = &[
    "#", "Token", "Chain", "Age(h)", "Score", "Price", "FDV", "LP", "Vol24h", "Traders", "DEX",
    "Trade", "Explorer", "Twitter", "Telegram", "Website", "Stop-Loss",
];

const FIB_HEADERS: &[&str] = &["Fib 0.382↓", "Fib 0.618↓", "Fib 1.618↑", "Fib 2.618↑"];

/// `<a>` for a non-empty URL, otherwise nothing
fn link(url: &str, text: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    format!(
        "<a href=\"{}\" target=\"_blank\">{}</a>",
        encode_minimal(url),
        encode_minimal(text)
    )
}

fn cell(out: &mut String, content: &str) {
    let _ = write!(out, "<td>{}</td>", content);
}

fn text_cell(out: &mut String, text: &str) {
    cell(out, &encode_minimal(text));
}

fn dollars(value: f64) -> String {
    format!("${}", value.trunc() as i64)
}

fn header_row(targets: &ExitTargets) -> String {
    let mut headers: Vec<String> = LEADING_HEADERS.iter().map(|h| h.to_string()).collect();
    headers.extend(
        targets
            .take_profit_multipliers
            .iter()
            .map(|m| format!("TP{}×", m)),
    );
    headers.extend(FIB_HEADERS.iter().map(|h| h.to_string()));
    headers.extend(
        targets
            .valuation_targets
            .iter()
            .map(|t| format!("FDV{}M", t / 1_000_000.0)),
    );

    let mut row = String::from("<tr>");
    for header in headers {
        let _ = write!(row, "<th>{}</th>", encode_minimal(&header));
    }
    row.push_str("</tr>");
    row
}

fn candidate_row(scored: &ScoredCandidate) -> String {
    let c = &scored.candidate;
    let exits = &scored.exits;
    let style = if scored.rank == 1 { TOP_ROW_STYLE } else { "" };

    let mut row = format!("<tr{}>", style);
    cell(&mut row, &scored.rank.to_string());
    text_cell(&mut row, &c.token_symbol);
    text_cell(&mut row, &c.chain);
    cell(&mut row, &optional_cell(c.age_hours));
    cell(&mut row, &scored.score.to_string());
    cell(&mut row, &format!("${}", c.price_usd));
    cell(&mut row, &dollars(c.fdv_usd));
    cell(&mut row, &dollars(c.lp_usd));
    cell(&mut row, &dollars(c.volume_24h_usd));
    cell(&mut row, &c.unique_traders_24h.to_string());
    text_cell(&mut row, &c.dex);
    cell(&mut row, &link(&c.trade_url, "Trade"));
    cell(&mut row, &link(&c.explorer_url, "Explorer"));
    cell(&mut row, &link(&c.twitter_url, "Twitter"));
    cell(&mut row, &link(&c.telegram_url, "Telegram"));
    cell(&mut row, &link(&c.website_url, "Website"));
    cell(&mut row, &exits.stop_loss.to_string());
    for (_, price) in &exits.take_profit {
        cell(&mut row, &optional_cell(*price));
    }
    for level in [
        exits.fib_dn_0382,
        exits.fib_dn_0618,
        exits.fib_up_1618,
        exits.fib_up_2618,
    ] {
        cell(&mut row, &optional_cell(level));
    }
    for (_, price) in &exits.valuation_targets {
        cell(&mut row, &optional_cell(*price));
    }
    row.push_str("</tr>");
    row
}

/// Render the page. `generated_at` is shown verbatim under the title.
pub fn render_html(
    tag: &str,
    ranked: &[ScoredCandidate],
    targets: &ExitTargets,
    generated_at: &str,
) -> String {
    let tag = encode_minimal(tag);
    let mut page = String::new();
    let _ = write!(
        page,
        "<!doctype html><meta charset='utf-8'><title>NewCoin Hunter — {tag}</title>\
         <style>{PAGE_STYLE}</style>\
         <h1>NewCoin Hunter — {tag}</h1>\
         <p>Generated: {}</p>\
         <table>{}",
        encode_minimal(generated_at),
        header_row(targets),
    );
    for scored in ranked {
        page.push_str(&candidate_row(scored));
    }
    page.push_str("</table>");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::Candidate;
    use crate::filtering::GateConfig;
    use crate::funnel::run_pass;

    fn ranked() -> Vec<ScoredCandidate> {
        let pool = vec![
            Candidate {
                token_symbol: "<script>".to_string(),
                chain: "base".to_string(),
                price_usd: 0.25,
                fdv_usd: 1_234_567.9,
                lp_usd: 10_000.0,
                volume_24h_usd: 50_000.0,
                unique_traders_24h: 100,
                trade_url: "https://dexscreener.com/base/0x1?a=1&b=2".to_string(),
                ..Default::default()
            },
            Candidate {
                token_symbol: "SECOND".to_string(),
                chain: "solana".to_string(),
                price_usd: 0.1,
                lp_usd: 10_000.0,
                volume_24h_usd: 2_000.0,
                unique_traders_24h: 10,
                ..Default::default()
            },
        ];
        run_pass(
            &pool,
            &GateConfig::discovery_defaults(),
            10,
            &ExitTargets::default(),
        )
        .ranked
    }

    #[test]
    fn test_top_row_highlighted_once() {
        let html = render_html("discovery", &ranked(), &ExitTargets::default(), "2025-01-01 00:00:00");
        assert_eq!(html.matches("#fff9d6").count(), 1);
        let highlighted = html.find(TOP_ROW_STYLE).unwrap();
        let second = html.find("SECOND").unwrap();
        assert!(highlighted < second);
    }

    #[test]
    fn test_content_is_escaped() {
        let html = render_html("discovery", &ranked(), &ExitTargets::default(), "now");
        assert!(!html.contains("<td><script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a=1&amp;b=2"));
        assert!(html.contains(">Trade</a>"));
        // no link for empty URLs
        assert!(!html.contains(">Twitter</a>"));
    }

    #[test]
    fn test_title_headers_and_values() {
        let html = render_html("refined", &ranked(), &ExitTargets::default(), "2025-01-01 00:00:00");
        assert!(html.contains("<title>NewCoin Hunter — refined</title>"));
        assert!(html.contains("<p>Generated: 2025-01-01 00:00:00</p>"));
        for header in ["<th>TP2×</th>", "<th>TP10×</th>", "<th>FDV25M</th>", "<th>FDV50M</th>"] {
            assert!(html.contains(header), "{}", header);
        }
        assert!(html.contains("<td>$1234567</td>"));
        assert!(html.contains("<td>$0.25</td>"));
    }

    #[test]
    fn test_empty_pass_renders_header_only() {
        let html = render_html("refined", &[], &ExitTargets::default(), "now");
        assert!(html.contains("<th>#</th>"));
        assert!(!html.contains("<td>"));
        assert!(html.ends_with("</table>"));
    }
}
