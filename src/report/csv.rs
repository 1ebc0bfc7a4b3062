use csv::WriterBuilder;
use std::fs::File;
use std::path::Path;

use crate::candidates::Candidate;
use crate::errors::ScreenerResult;
use crate::exits::ExitTargets;
use crate::funnel::{RejectedCandidate, ScoredCandidate};

/// Candidate columns shared by both tables, in output order
pub const CANDIDATE_COLUMNS: &[&str] = &[
    "token_symbol",
    "chain",
    "contract_address",
    "pair_address",
    "price_usd",
    "fdv_usd",
    "lp_usd",
    "volume_24h_usd",
    "unique_traders_24h",
    "buys_24h",
    "sells_24h",
    "chg24_pct",
    "dex",
    "trade_url",
    "explorer_url",
    "twitter_url",
    "telegram_url",
    "website_url",
    "age_hours",
];

pub const FIB_COLUMNS: &[&str] = &["fib_dn_0382", "fib_dn_0618", "fib_up_1618", "fib_up_2618"];

/// Unset values render as an empty cell
pub fn optional_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn candidate_cells(c: &Candidate) -> Vec<String> {
    vec![
        c.token_symbol.clone(),
        c.chain.clone(),
        c.contract_address.clone().unwrap_or_default(),
        c.pair_address.clone().unwrap_or_default(),
        c.price_usd.to_string(),
        c.fdv_usd.to_string(),
        c.lp_usd.to_string(),
        c.volume_24h_usd.to_string(),
        c.unique_traders_24h.to_string(),
        c.buys_24h.to_string(),
        c.sells_24h.to_string(),
        optional_cell(c.chg24_pct),
        c.dex.clone(),
        c.trade_url.clone(),
        c.explorer_url.clone(),
        c.twitter_url.clone(),
        c.telegram_url.clone(),
        c.website_url.clone(),
        optional_cell(c.age_hours),
    ]
}

pub fn ranked_header(targets: &ExitTargets) -> Vec<String> {
    let mut header = vec!["rank".to_string()];
    header.extend(CANDIDATE_COLUMNS.iter().map(|c| c.to_string()));
    header.push("score".to_string());
    header.extend(targets.take_profit_keys());
    header.extend(targets.valuation_keys());
    header.push("stop_loss_price".to_string());
    header.extend(FIB_COLUMNS.iter().map(|c| c.to_string()));
    header
}

fn ranked_row(scored: &ScoredCandidate) -> Vec<String> {
    let exits = &scored.exits;
    let mut row = vec![scored.rank.to_string()];
    row.extend(candidate_cells(&scored.candidate));
    row.push(scored.score.to_string());
    row.extend(exits.take_profit.iter().map(|(_, p)| optional_cell(*p)));
    row.extend(exits.valuation_targets.iter().map(|(_, p)| optional_cell(*p)));
    row.push(exits.stop_loss.to_string());
    row.extend(
        [
            exits.fib_dn_0382,
            exits.fib_dn_0618,
            exits.fib_up_1618,
            exits.fib_up_2618,
        ]
        .into_iter()
        .map(optional_cell),
    );
    row
}

pub fn write_ranked_csv(
    path: &Path,
    ranked: &[ScoredCandidate],
    targets: &ExitTargets,
) -> ScreenerResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create(path)?);

    writer.write_record(ranked_header(targets))?;
    for scored in ranked {
        writer.write_record(ranked_row(scored))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_rejects_csv(path: &Path, rejected: &[RejectedCandidate]) -> ScreenerResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create(path)?);

    let mut header: Vec<&str> = CANDIDATE_COLUMNS.to_vec();
    header.push("reject_reason");
    writer.write_record(&header)?;

    for rejected in rejected {
        let mut row = candidate_cells(&rejected.candidate);
        row.push(rejected.reason());
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::{GateConfig, GateRejection};
    use crate::funnel::run_pass;

    fn sample() -> Candidate {
        Candidate {
            token_symbol: "DOG, INC".to_string(),
            chain: "base".to_string(),
            contract_address: Some("0xabc".to_string()),
            price_usd: 0.5,
            fdv_usd: 5_000_000.0,
            lp_usd: 20_000.0,
            volume_24h_usd: 8_000.0,
            unique_traders_24h: 30,
            buys_24h: 20,
            sells_24h: 10,
            age_hours: Some(3.5),
            ..Default::default()
        }
    }

    fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_ranked_header_layout() {
        let header = ranked_header(&ExitTargets::default());
        assert_eq!(header[0], "rank");
        assert_eq!(header[1], "token_symbol");
        let tail: Vec<&str> = header[CANDIDATE_COLUMNS.len() + 1..]
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(
            tail,
            vec![
                "score",
                "tp2x_price",
                "tp5x_price",
                "tp10x_price",
                "fdv25m_price",
                "fdv50m_price",
                "stop_loss_price",
                "fib_dn_0382",
                "fib_dn_0618",
                "fib_up_1618",
                "fib_up_2618",
            ]
        );
    }

    #[test]
    fn test_write_ranked_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidates_test.csv");
        let targets = ExitTargets::default();
        let outcome = run_pass(&[sample()], &GateConfig::discovery_defaults(), 10, &targets);

        write_ranked_csv(&path, &outcome.ranked, &targets).unwrap();
        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);

        let header = &rows[0];
        let row = &rows[1];
        assert_eq!(header.len(), row.len());
        let cell = |name: &str| {
            let idx = header.iter().position(|h| h == name).unwrap();
            row.get(idx).unwrap().to_string()
        };
        assert_eq!(cell("rank"), "1");
        assert_eq!(cell("token_symbol"), "DOG, INC");
        assert_eq!(cell("pair_address"), "");
        assert_eq!(cell("chg24_pct"), "");
        assert_eq!(cell("age_hours"), "3.5");
        assert_eq!(cell("tp2x_price"), "1");
        assert_eq!(cell("fdv25m_price"), "2.5");
        assert_eq!(cell("fib_up_1618"), "0.5809");
    }

    #[test]
    fn test_zero_price_cells_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidates_zero.csv");
        let targets = ExitTargets::default();
        let mut c = sample();
        c.price_usd = 0.0;
        let outcome = run_pass(&[c], &GateConfig::discovery_defaults(), 10, &targets);

        write_ranked_csv(&path, &outcome.ranked, &targets).unwrap();
        let rows = read_rows(&path);
        let header = &rows[0];
        let row = &rows[1];
        for name in ["tp2x_price", "fdv50m_price", "fib_dn_0382", "fib_up_2618"] {
            let idx = header.iter().position(|h| h == name).unwrap();
            assert_eq!(row.get(idx), Some(""), "{}", name);
        }
        let idx = header.iter().position(|h| h == "stop_loss_price").unwrap();
        assert_eq!(row.get(idx), Some("0"));
    }

    #[test]
    fn test_write_rejects_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rejects_test.csv");
        let rejected = vec![RejectedCandidate {
            candidate: sample(),
            rejection: GateRejection::NoSocials,
        }];

        write_rejects_csv(&path, &rejected).unwrap();
        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(rows[0].len() - 1), Some("reject_reason"));
        assert_eq!(rows[1].get(rows[1].len() - 1), Some("no_socials"));
        assert_eq!(rows[0].len(), CANDIDATE_COLUMNS.len() + 1);
    }

    #[test]
    fn test_empty_tables_have_headers() {
        let dir = tempfile::tempdir().unwrap();
        let ranked = dir.path().join("ranked.csv");
        let rejects = dir.path().join("rejects.csv");

        write_ranked_csv(&ranked, &[], &ExitTargets::default()).unwrap();
        write_rejects_csv(&rejects, &[]).unwrap();

        assert_eq!(read_rows(&ranked).len(), 1);
        assert_eq!(read_rows(&rejects).len(), 1);
    }
}
