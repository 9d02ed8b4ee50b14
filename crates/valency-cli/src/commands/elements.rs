use crate::cli::ElementsArgs;
use crate::config::AppConfig;
use crate::error::Result;
use std::io::Write;
use tracing::info;

pub fn run(args: &ElementsArgs, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let table = config.load_table()?;
    let mut listed = 0;
    for element in table.iter().filter(|e| !args.metals_only || e.is_metal()) {
        let group = element
            .group
            .map_or_else(|| "-".to_string(), |g| g.to_string());
        writeln!(
            out,
            "{:>3}  {:<3} {:<14} group {:>2}  period {}  {}",
            element.atomic_number,
            element.symbol,
            element.name,
            group,
            element.period,
            element.category
        )?;
        listed += 1;
    }
    info!("Listed {} of {} elements.", listed, table.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;
    use valency::engine::config::SolverConfig;

    fn render(metals_only: bool, elements_path: Option<std::path::PathBuf>) -> Result<String> {
        let config = AppConfig {
            elements_path,
            solver: SolverConfig::default(),
        };
        let mut out = Vec::new();
        run(&ElementsArgs { metals_only }, &config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_every_builtin_element() {
        let output = render(false, None).unwrap();
        assert_eq!(output.lines().count(), 118);
        assert_eq!(
            output.lines().next(),
            Some("  1  H   Hydrogen       group  1  period 1  reactive-nonmetal")
        );
    }

    #[test]
    fn metals_only_filters_non_metals() {
        let output = render(true, None).unwrap();
        assert!(output.contains(" Na "));
        assert!(!output.contains(" Cl "));
        assert!(output.contains("Cerium         group  -"));
    }

    #[test]
    fn uses_a_custom_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("elements.csv");
        std::fs::write(
            &path,
            "atomic_number,symbol,name,group,period,category,atomic_weight\n\
             1,H,Hydrogen,1,1,nonmetal,1.008\n",
        )
        .unwrap();
        let output = render(false, Some(path)).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn broken_table_is_a_parsing_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("elements.toml");
        File::create(&path).unwrap();
        assert!(matches!(
            render(false, Some(path)),
            Err(crate::error::CliError::FileParsing { .. })
        ));
    }
}
