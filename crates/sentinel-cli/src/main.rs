// File: crates/sentinel-cli/src/main.rs
// Summary: Loads telemetry samples and renders one chart card PNG per requested parameter.

mod cli;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sentinel_chart::theme;
use sentinel_panel::{
    build_chart_config_with, load_samples_path, parse_utc_offset, sort_chronological, CardOptions, ChartCard,
    LabelOptions, Parameter,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut samples = load_samples_path(&args.input)
        .with_context(|| format!("failed to load samples from '{}'", args.input.display()))?;
    info!(count = samples.len(), input = %args.input.display(), "loaded samples");
    if samples.is_empty() {
        warn!("no samples in input; charts will be empty");
    }
    if args.chronological {
        sort_chronological(&mut samples);
    }

    let label_opts = LabelOptions { offset: parse_utc_offset(&args.utc_offset)? };
    let card_opts = CardOptions {
        width: args.width,
        height: args.height,
        theme: theme::find(&args.theme),
        hovered: args.hover,
        max_points: args.max_points,
        draw_labels: !args.no_labels,
    };

    let mut written = HashSet::new();
    for name in requested_parameters(&args.parameter) {
        let config = build_chart_config_with(&name, &samples, &label_opts);
        let out = claim_out_path(&mut written, out_name_with(&args.out_dir, &args.input, &name));

        if args.emit_config {
            let json_path = out.with_extension("json");
            let json = serde_json::to_vec_pretty(&config)?;
            std::fs::create_dir_all(&args.out_dir)
                .with_context(|| format!("creating {}", args.out_dir.display()))?;
            std::fs::write(&json_path, json).with_context(|| format!("writing {}", json_path.display()))?;
            info!(path = %json_path.display(), "wrote chart config");
        }

        ChartCard::new(config)
            .with_options(card_opts.clone())
            .render_png(&out)
            .with_context(|| format!("rendering '{name}'"))?;
        info!(parameter = %name, path = %out.display(), "wrote chart");
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "sentinel_cli=info,sentinel_panel=info,sentinel_chart=warn",
        1 => "sentinel_cli=debug,sentinel_panel=debug,sentinel_chart=debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Canonical display names, first occurrence wins; unknown names pass through and render unstyled.
fn requested_parameters(raw: &[String]) -> Vec<String> {
    if raw.is_empty() {
        return Parameter::ALL.iter().map(|p| p.name().to_string()).collect();
    }
    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    for r in raw {
        let name = match r.parse::<Parameter>() {
            Ok(p) => p.name().to_string(),
            Err(e) => {
                warn!("{e}; rendering without thresholds");
                r.clone()
            }
        };
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Reserve `path`, or `<stem>_2.png`, `<stem>_3.png`, ... when an earlier chart already took it.
fn claim_out_path(taken: &mut HashSet<PathBuf>, path: PathBuf) -> PathBuf {
    if taken.insert(path.clone()) {
        return path;
    }
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
    let unique = (2..)
        .map(|n| path.with_file_name(format!("{stem}_{n}.png")))
        .find(|p| !taken.contains(p))
        .unwrap_or_else(|| path.clone());
    warn!(requested = %path.display(), used = %unique.display(), "output name already used; writing to a new file");
    taken.insert(unique.clone());
    unique
}

/// Produce output file name like <out>/chart_<stem>_<parameter>.png
fn out_name_with(out_dir: &Path, input: &Path, parameter: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("samples");
    let suffix = match parameter.parse::<Parameter>() {
        Ok(p) => p.key().to_string(),
        Err(_) => slug(parameter),
    };
    out_dir.join(format!("chart_{}_{}.png", slug(stem), suffix))
}

fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() { "chart".to_string() } else { trimmed.to_string() }
}
