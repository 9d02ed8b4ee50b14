use crate::cli::OxidationArgs;
use crate::config::AppConfig;
use crate::error::Result;
use std::io::Write;
use tracing::{info, warn};
use valency::workflows::oxidation;

pub fn run(args: &OxidationArgs, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let table = config.load_table()?;
    info!(
        "Assigning oxidation numbers to '{}' using {:?}",
        args.formula, config.solver.strategy
    );
    let report = oxidation::assign(&table, &args.formula, &config.solver)?;
    let result = &report.result;

    writeln!(
        out,
        "{} (net charge {:+})",
        report.compound,
        result.target()
    )?;
    for entry in result.entries() {
        writeln!(
            out,
            "  {:<3} {:>+4}  x{:<3} {}",
            entry.symbol(),
            entry.number,
            entry.multiplicity,
            entry.rule
        )?;
    }
    if let Some(element) = result.unresolved() {
        writeln!(out, "  {:<3} {:>4}  unresolved", element.symbol, "?")?;
    }

    if result.is_balanced() {
        writeln!(out, "Balanced: yes")?;
    } else {
        warn!("Oxidation numbers for '{}' are unbalanced.", args.formula);
        writeln!(
            out,
            "Balanced: no (numbers add up to {:+}, expected {:+})",
            result.weighted_sum(),
            result.target()
        )?;
    }
    Ok(())
}
