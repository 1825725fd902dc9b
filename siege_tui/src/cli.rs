//! Command line interface

use crate::error::AppError;
use clap::{Args, Parser, Subcommand};
use siege_core::{SiegeCalculator, SiegeReport, UnitType};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "siege")]
#[command(about = "Estimate how long a siege takes from unit type, commander aptitudes and castle durability")]
pub struct Cli {
    /// Siege rules TOML file (defaults to the shipped rules)
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Without a subcommand the interactive calculator starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate once and print the report
    Calc(CalcArgs),
    /// List unit types and their base siege values
    Units,
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Unit type label (siege, spear, cavalry, archer, shield) or its in-game name
    #[arg(long)]
    pub unit: String,

    /// Aptitude grades of the three commanders, e.g. `--aptitudes S A B`
    #[arg(long, num_args = 3, value_names = ["FIRST", "SECOND", "THIRD"])]
    pub aptitudes: Vec<String>,

    /// Castle durability
    #[arg(long, allow_hyphen_values = true)]
    pub durability: String,

    /// Number of participating units
    #[arg(long, allow_hyphen_values = true)]
    pub units: String,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Run a single calculation and write the report
pub fn run_calc<W: Write>(
    calculator: &SiegeCalculator,
    args: &CalcArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let [first, second, third] = args.aptitudes.as_slice() else {
        return Err(AppError::Usage(format!(
            "expected exactly 3 aptitudes, got {}",
            args.aptitudes.len()
        )));
    };

    let result = calculator.compute_from_text(
        &args.unit,
        [first.as_str(), second.as_str(), third.as_str()],
        &args.durability,
        &args.units,
    )?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", SiegeReport::new(&result))?;
    }
    Ok(())
}

/// Write the unit type table
pub fn list_units<W: Write>(out: &mut W) -> Result<(), AppError> {
    for unit in UnitType::all() {
        writeln!(
            out,
            "{:10} {:4} {:>4}",
            unit.label(),
            unit.game_label(),
            unit.base_attack()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn calc_args(argv: &[&str]) -> CalcArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Some(Commands::Calc(args)) => args,
            _ => panic!("expected calc subcommand"),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_calc_text_report() {
        let args = calc_args(&[
            "siege", "calc", "--unit", "siege", "--aptitudes", "S", "A", "B", "--durability",
            "50000", "--units", "3",
        ]);
        let mut out = Vec::new();
        run_calc(&SiegeCalculator::default(), &args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total siege value: 900"));
        assert!(text.contains("at least 21 participating units"));
    }

    #[test]
    fn test_calc_json() {
        let args = calc_args(&[
            "siege", "calc", "--unit", "槍", "--aptitudes", "s", "s", "s", "--durability",
            "5000", "--units", "5", "--json",
        ]);
        let mut out = Vec::new();
        run_calc(&SiegeCalculator::default(), &args, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["unit_attack"], 144);
        assert_eq!(value["total_attack"], 720);
        assert_eq!(value["within_turn_cap"], true);
        assert!(value["recommended_min_units"].is_null());
        assert_eq!(value["request"]["unit_type"], "spear");
    }

    #[test]
    fn test_calc_rejects_negative_durability() {
        let args = calc_args(&[
            "siege", "calc", "--unit", "archer", "--aptitudes", "A", "A", "A", "--durability",
            "-100", "--units", "2",
        ]);
        let mut out = Vec::new();
        let err = run_calc(&SiegeCalculator::default(), &args, &mut out).unwrap_err();
        assert!(matches!(err, AppError::Siege(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_aptitude_count_enforced_by_parser() {
        let parsed = Cli::try_parse_from([
            "siege", "calc", "--unit", "siege", "--aptitudes", "S", "A", "--durability", "1",
            "--units", "1",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_list_units() {
        let mut out = Vec::new();
        list_units(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), UnitType::all().len());
        assert!(text.lines().next().unwrap().starts_with("siege"));
    }
}
