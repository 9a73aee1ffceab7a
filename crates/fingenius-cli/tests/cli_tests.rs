//! End-to-end tests for the `fingenius` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PRICES: &str = "\
date,symbol,close
2024-01-02,AAPL,150
2024-01-03,AAPL,152
2024-01-04,AAPL,155
2024-01-02,MSFT,300
2024-01-03,MSFT,305
2024-01-04,MSFT,310
";

const PORTFOLIO: &str = r#"{
  "holdings": [
    {"symbol": "AAPL", "quantity": 10, "purchase_price": 150},
    {"symbol": "msft", "quantity": 5, "purchase_price": 300}
  ]
}"#;

const FUNDAMENTALS: &str = r#"[
  {"symbol": "AAPL", "sector": "Technology", "pe_ratio": 28.5,
   "recommendations": {"strongBuy": 10, "buy": 20, "hold": 5, "sell": 1, "strongSell": 0}},
  {"symbol": "MSFT", "sector": "Technology", "pe_ratio": 34.1}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("prices.csv"), PRICES).unwrap();
        fs::write(dir.path().join("portfolio.json"), PORTFOLIO).unwrap();
        fs::write(dir.path().join("fundamentals.json"), FUNDAMENTALS).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }
}

fn fingenius() -> Command {
    let mut cmd = Command::cargo_bin("fingenius").unwrap();
    cmd.env_remove("FINGENIUS_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_help_lists_commands() {
    fingenius()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("sectors"))
        .stdout(predicate::str::contains("symbol"))
        .stdout(predicate::str::contains("outlook"));
}

#[test]
fn test_analyze_json() {
    let fx = Fixture::new();
    let value = json_stdout(fingenius().args([
        "--format",
        "json",
        "analyze",
        "--portfolio",
        arg(&fx.path("portfolio.json")),
        "--prices",
        arg(&fx.path("prices.csv")),
        "--fundamentals",
        arg(&fx.path("fundamentals.json")),
    ]));

    assert_eq!(value["total_investment"].as_f64().unwrap(), 3000.0);
    assert_eq!(value["current_value"].as_f64().unwrap(), 3100.0);
    assert!((value["roi_percent"].as_f64().unwrap() - 3.3333).abs() < 1e-3);
    assert!(value["volatility"].as_f64().unwrap() >= 0.0);
    assert_eq!(value["sector_breakdown"]["Technology"].as_f64().unwrap(), 100.0);
    assert_eq!(value["holdings"].as_array().unwrap().len(), 2);
    assert_eq!(value["holdings"][1]["symbol"], "MSFT");
    assert!(!value["narrative_advice"].as_str().unwrap().is_empty());
    assert!(value["local_advice"]
        .as_str()
        .unwrap()
        .contains("concentrated in Technology"));
}

#[test]
fn test_analyze_table() {
    let fx = Fixture::new();
    fingenius()
        .args([
            "analyze",
            "--portfolio",
            arg(&fx.path("portfolio.json")),
            "--prices",
            arg(&fx.path("prices.csv")),
        ])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio Summary"))
        .stdout(predicate::str::contains("3100.00"))
        .stdout(predicate::str::contains("Unknown"));
}

#[test]
fn test_analyze_risk_free_override_changes_sharpe() {
    let fx = Fixture::new();
    let portfolio_path = fx.path("portfolio.json");
    let prices_path = fx.path("prices.csv");
    let base = [
        "--format",
        "json",
        "analyze",
        "--portfolio",
        arg(&portfolio_path),
        "--prices",
        arg(&prices_path),
    ];

    let default = json_stdout(fingenius().args(base));
    let zero = json_stdout(fingenius().args(base).args(["--risk-free-rate", "0"]));

    let vol = default["volatility"].as_f64().unwrap();
    if vol > 0.0 {
        assert!(zero["sharpe_ratio"].as_f64().unwrap() > default["sharpe_ratio"].as_f64().unwrap());
    } else {
        assert_eq!(zero["sharpe_ratio"].as_f64().unwrap(), 0.0);
    }
}

#[test]
fn test_analyze_rejects_negative_quantity() {
    let fx = Fixture::new();
    let portfolio = fx.write(
        "bad.json",
        r#"[{"symbol": "AAPL", "quantity": -1, "purchase_price": 150}]"#,
    );
    fingenius()
        .args([
            "analyze",
            "--portfolio",
            arg(&portfolio),
            "--prices",
            arg(&fx.path("prices.csv")),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quantity"));
}

#[test]
fn test_missing_prices_file_fails() {
    let fx = Fixture::new();
    fingenius()
        .args([
            "sectors",
            "--portfolio",
            arg(&fx.path("portfolio.json")),
            "--prices",
            arg(&fx.path("nope.csv")),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_risk_tolerance_is_rejected() {
    let fx = Fixture::new();
    fingenius()
        .args([
            "analyze",
            "--portfolio",
            arg(&fx.path("portfolio.json")),
            "--prices",
            arg(&fx.path("prices.csv")),
            "--risk-tolerance",
            "reckless",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reckless"));
}

#[test]
fn test_sectors_json() {
    let fx = Fixture::new();
    let fundamentals = fx.write(
        "mixed.json",
        r#"[{"symbol": "AAPL", "sector": "Technology"}, {"symbol": "MSFT", "sector": "Software"}]"#,
    );
    let value = json_stdout(fingenius().args([
        "-f",
        "json",
        "sectors",
        "--portfolio",
        arg(&fx.path("portfolio.json")),
        "--prices",
        arg(&fx.path("prices.csv")),
        "--fundamentals",
        arg(&fundamentals),
    ]));

    assert_eq!(value["Technology"].as_f64().unwrap(), 50.0);
    assert_eq!(value["Software"].as_f64().unwrap(), 50.0);
}

#[test]
fn test_symbol_json() {
    let fx = Fixture::new();
    let value = json_stdout(fingenius().args([
        "--format",
        "json",
        "symbol",
        "aapl",
        "--purchase-price",
        "100",
        "--quantity",
        "2",
        "--prices",
        arg(&fx.path("prices.csv")),
        "--fundamentals",
        arg(&fx.path("fundamentals.json")),
    ]));

    assert_eq!(value["symbol"], "AAPL");
    assert_eq!(value["current_price"].as_f64().unwrap(), 155.0);
    assert_eq!(value["roi_percent"].as_f64().unwrap(), 55.0);
    assert_eq!(value["fundamentals"]["sector"], "Technology");
    assert!(value["local_recommendation"]
        .as_str()
        .unwrap()
        .contains("partial profits"));
}

#[test]
fn test_symbol_rejects_bad_number() {
    let fx = Fixture::new();
    fingenius()
        .args([
            "symbol",
            "AAPL",
            "--purchase-price",
            "cheap",
            "--quantity",
            "1",
            "--prices",
            arg(&fx.path("prices.csv")),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("purchase price"));
}

#[test]
fn test_outlook_with_macro_file_and_config() {
    let fx = Fixture::new();
    let macro_file = fx.write(
        "macro.json",
        r#"{"interest_rate": 4.25, "inflation": 2.4, "gdp_growth": 1.9}"#,
    );
    let config = fx.write("fingenius.toml", "advice_unavailable_text = \"offline\"\n");

    let value = json_stdout(fingenius().args([
        "--format",
        "json",
        "--config",
        arg(&config),
        "outlook",
        "--macro-data",
        arg(&macro_file),
    ]));

    assert_eq!(value["macro_data"]["interest_rate"].as_f64().unwrap(), 4.25);
    assert!(!value["commentary"].as_str().unwrap().is_empty());
}

#[test]
fn test_invalid_config_fails() {
    let fx = Fixture::new();
    let config = fx.write("bad.toml", "trading_days_per_year = 0.0\n");
    fingenius()
        .args(["--config", arg(&config), "outlook"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
