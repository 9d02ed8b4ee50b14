use crate::cli::ShellsArgs;
use crate::config::AppConfig;
use crate::error::Result;
use std::io::Write;
use tracing::info;
use valency::workflows::describe;

pub fn run(args: &ShellsArgs, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let table = config.load_table()?;
    info!("Describing {} with charge {}", args.symbol, args.charge);
    let report = describe::describe_atom(&table, &args.symbol, args.charge)?;

    writeln!(
        out,
        "{} ({}), {} electrons",
        report.atom,
        report.atom.element().name,
        report.atom.electrons()
    )?;
    for shell in report.configuration.shells() {
        writeln!(out, "  {shell}")?;
    }
    match report.valence() {
        Some((label, electrons)) => writeln!(out, "Valence shell: {label} ({electrons} electrons)")?,
        None => writeln!(out, "Valence shell: none")?,
    }
    writeln!(
        out,
        "Unpaired electrons: {} ({})",
        report.configuration.unpaired_electron_count(),
        report.magnetism
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use valency::engine::config::SolverConfig;

    fn builtin() -> AppConfig {
        AppConfig {
            elements_path: None,
            solver: SolverConfig::default(),
        }
    }

    fn render(symbol: &str, charge: i32) -> Result<String> {
        let args = ShellsArgs {
            symbol: symbol.to_string(),
            charge,
        };
        let mut out = Vec::new();
        run(&args, &builtin(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_shells_and_magnetism() {
        let output = render("Al", 0).unwrap();
        assert_eq!(
            output,
            "Al (Aluminium), 13 electrons\n\
             \x20 K: 1s2\n\
             \x20 L: 2s2 2p6\n\
             \x20 M: 3s2 3p1\n\
             Valence shell: M (3 electrons)\n\
             Unpaired electrons: 1 (paramagnetic)\n"
        );
    }

    #[test]
    fn prints_ion_charge() {
        let output = render("Cl", -1).unwrap();
        assert!(output.starts_with("Cl^- (Chlorine), 18 electrons"));
        assert!(output.contains("diamagnetic"));
    }

    #[test]
    fn unknown_symbol_fails() {
        assert!(matches!(render("Zz", 0), Err(CliError::Valency(_))));
    }
}
