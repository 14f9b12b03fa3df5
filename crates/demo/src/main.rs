// File: crates/demo/src/main.rs
// Summary: Demo loads an OHLC series (cached Poloniex JSON or CSV) and renders a candlestick PNG.
// Usage: candle-chart-demo <input.json|input.csv> [output.png] [--theme <name>] [--title <text>]

use anyhow::{Context, Result};
use candle_chart::{theme, Candle, ChartConfig, Color, YLabel};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
    theme: String,
    title: String,
}

fn main() -> Result<()> {
    let _ = candle_chart::telemetry::init_default_tracing();
    let args = parse_args(std::env::args().skip(1))?;

    let candles = load_candles(&args.input)
        .with_context(|| format!("failed to load '{}'", args.input.display()))?;
    info!(count = candles.len(), input = %args.input.display(), "loaded candles");
    if candles.is_empty() {
        anyhow::bail!("no candles loaded; check the file format");
    }

    let output = args.output.unwrap_or_else(|| out_name_for(&args.input));
    let config = ChartConfig {
        width: 800,
        height: 600,
        candle_width: 4,
        rows: 5,
        columns: 7,
        theme: theme::find(&args.theme),
        y_label: YLabel { text: args.title, color: Color::WHITE, size: 18.0 },
        output: output.clone(),
    };
    candle_chart::render(&candles, &config)
        .with_context(|| format!("failed to render '{}'", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut theme = String::from("classic");
    let mut title = String::from("BitShares coin (BTS)");
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--theme" => theme = it.next().context("--theme needs a value")?,
            "--title" => title = it.next().context("--title needs a value")?,
            _ => positional.push(PathBuf::from(arg)),
        }
    }
    let mut positional = positional.into_iter();
    let input = positional.next().unwrap_or_else(|| PathBuf::from("data"));
    Ok(Args { input, output: positional.next(), theme, title })
}

/// `.csv` files go through the CSV loader; anything else is read as a Poloniex JSON array.
fn load_candles(path: &Path) -> Result<Vec<Candle>> {
    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        load_ohlc_csv(path)
    } else {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).context("response type not expected")
    }
}

/// Produce output file name like target/out/chart_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.png"))
}

/// Load a Binance-like OHLC CSV; rows missing a price column are skipped.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"])
        .context("no time column")?;
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "v"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok()) };
        let Some(timestamp) = rec.get(i_time).and_then(parse_epoch_seconds) else {
            warn!(row, "skipping row without a usable timestamp");
            continue;
        };
        if let (Some(open), Some(high), Some(low), Some(close)) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            out.push(Candle::new(timestamp, high, low, open, close, parse(i_volume).unwrap_or(0.0)));
        }
    }
    Ok(out)
}

/// Epoch seconds or milliseconds, normalised to seconds.
fn parse_epoch_seconds(s: &str) -> Option<i64> {
    let n = s.trim().parse::<i64>().ok()?;
    if n > 10_i64.pow(12) { Some(n / 1000) } else { Some(n) }
}
