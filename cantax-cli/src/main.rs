use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cantax_core::BreakdownCalculator;
use cantax_data::{ProvinceTableLoader, merge_profiles, tables_2025};
use clap::Parser;
use rust_decimal::Decimal;

mod config;
mod logging;
mod utils;

use config::Config;

/// Estimate Canadian self-employed income tax and CPP contributions.
///
/// Takes gross income, deductible expenses and a province code, and prints
/// the full year's breakdown: net income, CPP contribution, federal and
/// provincial income tax, take-home pay, and the average and marginal rates.
#[derive(Parser, Debug)]
#[command(name = "cantax")]
#[command(version, about, long_about = None)]
struct Args {
    /// Gross self-employment income for the year (commas allowed)
    #[arg(short = 'g', long, value_parser = parse_money)]
    gross_income: Decimal,

    /// Total deductible business expenses (commas allowed)
    #[arg(short = 'e', long, default_value = "0", value_parser = parse_money)]
    expenses: Decimal,

    /// Two-letter province or territory code (e.g. ON, BC, QC)
    #[arg(short = 'p', long)]
    province: Option<String>,

    /// Bracket-table CSV overriding the built-in 2025 tables
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Path to a cantax.toml settings file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

fn parse_money(s: &str) -> Result<Decimal, String> {
    utils::parse_decimal(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let province = args
        .province
        .or(config.default_province)
        .context("no province given; pass --province or set default_province in cantax.toml")?;

    let mut tables = tables_2025().clone();
    if let Some(path) = args.tables.or(config.tables) {
        let file = File::open(&path)
            .with_context(|| format!("failed to open bracket-table file: {}", path.display()))?;
        let overrides = ProvinceTableLoader::load_profiles(file)
            .with_context(|| format!("failed to load bracket tables: {}", path.display()))?;
        merge_profiles(&mut tables, overrides);
    }

    let calculator = BreakdownCalculator::new(&tables);
    let breakdown = calculator.calculate_for_code(args.gross_income, args.expenses, &province)?;

    let money_rows = [
        ("Gross income", breakdown.gross_income),
        ("Deductible expenses", breakdown.deductible_expenses),
        ("Net income", breakdown.net_income),
        ("CPP contribution", breakdown.pension_contribution),
        ("CPP deduction (50%)", breakdown.pension_deduction),
        ("Taxable income", breakdown.taxable_income),
        ("Federal tax", breakdown.federal_tax),
        ("Provincial tax", breakdown.provincial_tax),
        ("Total income tax", breakdown.total_income_tax),
        ("Total remittance", breakdown.total_remittance),
        ("Take-home pay", breakdown.take_home_pay),
    ];
    for (label, amount) in money_rows {
        println!("{label:<22} {:>15}", utils::format_money(amount));
    }
    println!("{:<22} {:>14}%", "Average tax rate", breakdown.average_tax_rate);
    println!("{:<22} {:>14}%", "Marginal tax rate", breakdown.marginal_tax_rate);

    Ok(())
}
