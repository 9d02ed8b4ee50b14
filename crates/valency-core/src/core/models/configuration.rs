use super::error::ModelError;
use super::shell::{SHELL_LABELS, Shell, Subshell, shell_index_of, theoretical_capacity};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magnetism {
    /// At least one unpaired electron.
    Paramagnetic,
    /// Every electron is paired.
    Diamagnetic,
}

impl fmt::Display for Magnetism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnetism::Paramagnetic => f.write_str("paramagnetic"),
            Magnetism::Diamagnetic => f.write_str("diamagnetic"),
        }
    }
}

/// The populated shells of one atom, innermost first.
///
/// Only shells and subshells that hold electrons are present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellConfiguration {
    shells: Vec<Shell>,
}

impl ShellConfiguration {
    /// Wraps already-populated shells, dropping empty ones.
    pub(crate) fn from_shells(shells: Vec<Shell>) -> Self {
        let mut shells = shells;
        for shell in &mut shells {
            shell.prune();
        }
        shells.retain(|s| !s.is_empty());
        Self { shells }
    }

    /// Builds a configuration from per-shell electron counts, `K` first.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OutOfRange`] if a count exceeds `2(n + 1)^2` or what the
    /// shell's subshells can hold, and [`ModelError::InvalidInput`] for more than
    /// seven shells.
    pub fn from_counts(counts: &[u32]) -> Result<Self, ModelError> {
        if counts.len() > SHELL_LABELS.len() {
            return Err(ModelError::InvalidInput(format!(
                "{} shell counts given, at most {} shells exist",
                counts.len(),
                SHELL_LABELS.len()
            )));
        }
        let shells = counts
            .iter()
            .enumerate()
            .map(|(index, &count)| checked_shell(index, count))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_shells(shells))
    }

    /// Builds a configuration from `(label, count)` pairs such as `('K', 2)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] for an unknown or repeated label and
    /// [`ModelError::OutOfRange`] for a count above the shell's capacity.
    pub fn from_labeled(values: &[(char, u32)]) -> Result<Self, ModelError> {
        let mut by_index: BTreeMap<usize, u32> = BTreeMap::new();
        for &(label, count) in values {
            let index = shell_index_of(label).ok_or_else(|| {
                ModelError::InvalidInput(format!("'{label}' is not a shell label"))
            })?;
            if by_index.insert(index, count).is_some() {
                return Err(ModelError::InvalidInput(format!(
                    "shell '{label}' is listed more than once"
                )));
            }
        }
        let shells = by_index
            .into_iter()
            .map(|(index, count)| checked_shell(index, count))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_shells(shells))
    }

    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    pub fn shell(&self, label: char) -> Option<&Shell> {
        let index = shell_index_of(label)?;
        self.shells.iter().find(|s| s.index() == index)
    }

    /// All populated subshells, shell by shell.
    pub fn subshells(&self) -> impl Iterator<Item = &Subshell> {
        self.shells.iter().flat_map(|s| s.subshells().iter())
    }

    pub fn electron_count(&self) -> u32 {
        self.shells.iter().map(Shell::electron_count).sum()
    }

    pub fn paired_electron_count(&self) -> u32 {
        self.shells.iter().map(Shell::paired_electrons).sum()
    }

    pub fn unpaired_electron_count(&self) -> u32 {
        self.shells.iter().map(Shell::unpaired_electrons).sum()
    }

    pub fn magnetism(&self) -> Magnetism {
        if self.unpaired_electron_count() > 0 {
            Magnetism::Paramagnetic
        } else {
            Magnetism::Diamagnetic
        }
    }

    /// The outermost populated shell, `None` for a configuration without electrons.
    pub fn valence_shell(&self) -> Option<&Shell> {
        self.shells.last()
    }

    pub fn to_map(&self) -> BTreeMap<char, u32> {
        self.shells
            .iter()
            .map(|s| (s.label(), s.electron_count()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }
}

impl fmt::Display for ShellConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for shell in &self.shells {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{shell}")?;
            first = false;
        }
        Ok(())
    }
}

fn checked_shell(index: usize, count: u32) -> Result<Shell, ModelError> {
    let capacity = theoretical_capacity(index);
    if count > capacity {
        return Err(ModelError::out_of_range(
            format!("shell {}", SHELL_LABELS[index]),
            count,
            capacity,
        ));
    }
    Shell::with_electrons(index, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_builds_shells_in_order() {
        let config = ShellConfiguration::from_counts(&[2, 8, 3]).unwrap();
        assert_eq!(config.shells().len(), 3);
        assert_eq!(config.electron_count(), 13);
        let map = config.to_map();
        assert_eq!(map.get(&'K'), Some(&2));
        assert_eq!(map.get(&'L'), Some(&8));
        assert_eq!(map.get(&'M'), Some(&3));
    }

    #[test]
    fn from_counts_validates_theoretical_capacity() {
        let result = ShellConfiguration::from_counts(&[3]);
        assert!(matches!(
            result,
            Err(ModelError::OutOfRange {
                requested: 3,
                capacity: 2,
                ..
            })
        ));
    }

    #[test]
    fn from_counts_rejects_too_many_shells() {
        let result = ShellConfiguration::from_counts(&[2, 8, 18, 32, 32, 18, 8, 1]);
        assert!(matches!(result, Err(ModelError::InvalidInput(_))));
    }

    #[test]
    fn from_counts_drops_empty_shells() {
        let config = ShellConfiguration::from_counts(&[2, 0]).unwrap();
        assert_eq!(config.shells().len(), 1);
        assert_eq!(config.valence_shell().map(Shell::label), Some('K'));
    }

    #[test]
    fn from_labeled_orders_by_shell_index() {
        let config = ShellConfiguration::from_labeled(&[('M', 1), ('K', 2), ('L', 8)]).unwrap();
        let labels: Vec<_> = config.shells().iter().map(Shell::label).collect();
        assert_eq!(labels, vec!['K', 'L', 'M']);
        assert_eq!(config.shell('m').map(Shell::electron_count), Some(1));
    }

    #[test]
    fn from_labeled_rejects_unknown_and_duplicate_labels() {
        assert!(matches!(
            ShellConfiguration::from_labeled(&[('X', 1)]),
            Err(ModelError::InvalidInput(_))
        ));
        assert!(matches!(
            ShellConfiguration::from_labeled(&[('K', 1), ('k', 2)]),
            Err(ModelError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_labeled_validates_capacity() {
        assert!(matches!(
            ShellConfiguration::from_labeled(&[('L', 9)]),
            Err(ModelError::OutOfRange { capacity: 8, .. })
        ));
    }

    #[test]
    fn magnetism_follows_unpaired_electrons() {
        let helium = ShellConfiguration::from_counts(&[2]).unwrap();
        assert_eq!(helium.unpaired_electron_count(), 0);
        assert_eq!(helium.paired_electron_count(), 2);
        assert_eq!(helium.magnetism(), Magnetism::Diamagnetic);

        let hydrogen = ShellConfiguration::from_counts(&[1]).unwrap();
        assert_eq!(hydrogen.unpaired_electron_count(), 1);
        assert_eq!(hydrogen.magnetism(), Magnetism::Paramagnetic);
    }

    #[test]
    fn empty_configuration_has_no_valence_shell() {
        let config = ShellConfiguration::default();
        assert!(config.is_empty());
        assert!(config.valence_shell().is_none());
        assert_eq!(config.magnetism(), Magnetism::Diamagnetic);
    }

    #[test]
    fn display_joins_shells() {
        let config = ShellConfiguration::from_counts(&[2, 5]).unwrap();
        assert_eq!(config.to_string(), "K: 1s2 | L: 2s2 2p3");
    }
}
