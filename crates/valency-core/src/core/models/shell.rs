use super::error::ModelError;
use super::orbital::Orbital;
use std::fmt;

/// Labels of the seven principal shells, innermost first.
pub const SHELL_LABELS: [char; 7] = ['K', 'L', 'M', 'N', 'O', 'P', 'Q'];

/// Number of principal shells the model knows about.
pub const SHELL_COUNT: usize = SHELL_LABELS.len();

/// Angular momentum type of a subshell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubshellKind {
    S,
    P,
    D,
    F,
}

impl SubshellKind {
    pub const ALL: [SubshellKind; 4] = [
        SubshellKind::S,
        SubshellKind::P,
        SubshellKind::D,
        SubshellKind::F,
    ];

    /// The subshell kinds a shell can host: `K` only `s`, `L` adds `p`, `M` adds `d`,
    /// every shell from `N` on hosts all four.
    pub fn available_in(shell_index: usize) -> &'static [SubshellKind] {
        let count = (shell_index + 1).min(Self::ALL.len());
        &Self::ALL[..count]
    }

    /// Azimuthal quantum number `l`.
    pub fn azimuthal(self) -> u8 {
        match self {
            SubshellKind::S => 0,
            SubshellKind::P => 1,
            SubshellKind::D => 2,
            SubshellKind::F => 3,
        }
    }

    pub fn from_azimuthal(l: usize) -> Option<Self> {
        Self::ALL.get(l).copied()
    }

    pub fn capacity(self) -> u32 {
        2 * self.orbital_count()
    }

    pub fn orbital_count(self) -> u32 {
        2 * u32::from(self.azimuthal()) + 1
    }

    pub fn label(self) -> char {
        match self {
            SubshellKind::S => 's',
            SubshellKind::P => 'p',
            SubshellKind::D => 'd',
            SubshellKind::F => 'f',
        }
    }

    pub fn from_label(label: char) -> Option<Self> {
        match label.to_ascii_lowercase() {
            's' => Some(SubshellKind::S),
            'p' => Some(SubshellKind::P),
            'd' => Some(SubshellKind::D),
            'f' => Some(SubshellKind::F),
            _ => None,
        }
    }
}

impl fmt::Display for SubshellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Theoretical electron capacity of a shell, `2(n + 1)^2` for the 0-based index `n`.
pub fn theoretical_capacity(shell_index: usize) -> u32 {
    let n = shell_index as u32 + 1;
    2 * n * n
}

pub fn shell_index_of(label: char) -> Option<usize> {
    let upper = label.to_ascii_uppercase();
    SHELL_LABELS.iter().position(|&l| l == upper)
}

/// The orbitals of one angular momentum type inside a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subshell {
    shell_index: usize,
    kind: SubshellKind,
    orbitals: Vec<Orbital>,
}

impl Subshell {
    pub fn empty(shell_index: usize, kind: SubshellKind) -> Self {
        let l = i8::try_from(kind.azimuthal()).unwrap_or(0);
        Self {
            shell_index,
            kind,
            orbitals: (-l..=l).map(Orbital::new).collect(),
        }
    }

    /// Creates a subshell holding `electrons` electrons distributed by Hund's rule.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OutOfRange`] when `electrons` exceeds the subshell capacity.
    pub fn with_electrons(
        shell_index: usize,
        kind: SubshellKind,
        electrons: u32,
    ) -> Result<Self, ModelError> {
        let mut subshell = Self::empty(shell_index, kind);
        subshell.populate(electrons)?;
        Ok(subshell)
    }

    /// Adds electrons one at a time: every orbital receives a spin-up electron
    /// before any orbital receives its spin-down partner.
    pub(crate) fn populate(&mut self, electrons: u32) -> Result<(), ModelError> {
        if electrons > self.vacancies() {
            return Err(ModelError::out_of_range(
                format!("subshell {}", self.label()),
                self.electron_count() + electrons,
                self.capacity(),
            ));
        }
        for _ in 0..electrons {
            let slot = self
                .orbitals
                .iter()
                .position(Orbital::is_empty)
                .or_else(|| self.orbitals.iter().position(Orbital::is_singly_occupied));
            if let Some(index) = slot {
                self.orbitals[index].push();
            }
        }
        Ok(())
    }

    pub fn shell_index(&self) -> usize {
        self.shell_index
    }

    pub fn kind(&self) -> SubshellKind {
        self.kind
    }

    pub fn orbitals(&self) -> &[Orbital] {
        &self.orbitals
    }

    pub fn capacity(&self) -> u32 {
        self.orbitals.len() as u32 * Orbital::CAPACITY
    }

    pub fn electron_count(&self) -> u32 {
        self.orbitals.iter().map(Orbital::electron_count).sum()
    }

    pub fn vacancies(&self) -> u32 {
        self.capacity() - self.electron_count()
    }

    pub fn is_empty(&self) -> bool {
        self.electron_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.vacancies() == 0
    }

    /// Electrons sitting in doubly occupied orbitals.
    pub fn paired_electrons(&self) -> u32 {
        self.orbitals
            .iter()
            .filter(|o| o.is_full() && o.is_paired())
            .count() as u32
            * Orbital::CAPACITY
    }

    pub fn unpaired_electrons(&self) -> u32 {
        self.orbitals
            .iter()
            .filter(|o| o.is_singly_occupied())
            .count() as u32
    }

    /// Spectroscopic label such as `3d`.
    pub fn label(&self) -> String {
        format!("{}{}", self.shell_index + 1, self.kind.label())
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label(), self.electron_count())
    }
}

/// A principal energy level and the subshells populated within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    index: usize,
    subshells: Vec<Subshell>,
}

impl Shell {
    /// A shell with every subshell it can host, all empty.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] for an index beyond the `Q` shell.
    pub fn empty(index: usize) -> Result<Self, ModelError> {
        if index >= SHELL_COUNT {
            return Err(ModelError::InvalidInput(format!(
                "shell index {index} is beyond the {SHELL_COUNT} known shells"
            )));
        }
        Ok(Self {
            index,
            subshells: SubshellKind::available_in(index)
                .iter()
                .map(|&kind| Subshell::empty(index, kind))
                .collect(),
        })
    }

    /// Creates a shell holding `electrons`, filling `s`, `p`, `d`, `f` in order and
    /// only keeping the subshells needed to hold them.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OutOfRange`] when the shell's subshells cannot hold
    /// `electrons`, and [`ModelError::InvalidInput`] for an unknown index.
    pub fn with_electrons(index: usize, electrons: u32) -> Result<Self, ModelError> {
        let mut shell = Self::empty(index)?;
        if electrons > shell.capacity() {
            return Err(ModelError::out_of_range(
                format!("shell {}", shell.label()),
                electrons,
                shell.capacity(),
            ));
        }
        let mut remaining = electrons;
        for subshell in &mut shell.subshells {
            let take = remaining.min(subshell.capacity());
            subshell.populate(take)?;
            remaining -= take;
        }
        shell.prune();
        Ok(shell)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> char {
        SHELL_LABELS[self.index]
    }

    /// Principal quantum number `n`.
    pub fn energy_level(&self) -> usize {
        self.index + 1
    }

    pub fn subshells(&self) -> &[Subshell] {
        &self.subshells
    }

    pub fn subshell(&self, kind: SubshellKind) -> Option<&Subshell> {
        self.subshells.iter().find(|s| s.kind() == kind)
    }

    pub(crate) fn subshell_mut(&mut self, kind: SubshellKind) -> Option<&mut Subshell> {
        self.subshells.iter_mut().find(|s| s.kind() == kind)
    }

    /// Sum of the capacities of the subshells present in this shell.
    pub fn capacity(&self) -> u32 {
        self.subshells.iter().map(Subshell::capacity).sum()
    }

    pub fn electron_count(&self) -> u32 {
        self.subshells.iter().map(Subshell::electron_count).sum()
    }

    pub fn paired_electrons(&self) -> u32 {
        self.subshells.iter().map(Subshell::paired_electrons).sum()
    }

    pub fn unpaired_electrons(&self) -> u32 {
        self.subshells.iter().map(Subshell::unpaired_electrons).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.electron_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.electron_count() == self.capacity()
    }

    /// Drops subshells that hold no electrons.
    pub(crate) fn prune(&mut self) {
        self.subshells.retain(|s| !s.is_empty());
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.label())?;
        for subshell in &self.subshells {
            write!(f, " {subshell}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subshell_kinds_have_fixed_capacities() {
        assert_eq!(SubshellKind::S.capacity(), 2);
        assert_eq!(SubshellKind::P.capacity(), 6);
        assert_eq!(SubshellKind::D.capacity(), 10);
        assert_eq!(SubshellKind::F.capacity(), 14);
    }

    #[test]
    fn available_kinds_grow_with_shell_index() {
        assert_eq!(SubshellKind::available_in(0), &[SubshellKind::S]);
        assert_eq!(
            SubshellKind::available_in(2),
            &[SubshellKind::S, SubshellKind::P, SubshellKind::D]
        );
        assert_eq!(SubshellKind::available_in(3).len(), 4);
        assert_eq!(SubshellKind::available_in(6).len(), 4);
    }

    #[test]
    fn label_lookup_is_case_insensitive() {
        assert_eq!(SubshellKind::from_label('P'), Some(SubshellKind::P));
        assert_eq!(SubshellKind::from_label('x'), None);
        assert_eq!(shell_index_of('m'), Some(2));
        assert_eq!(shell_index_of('Z'), None);
    }

    #[test]
    fn theoretical_capacity_follows_two_n_squared() {
        assert_eq!(theoretical_capacity(0), 2);
        assert_eq!(theoretical_capacity(1), 8);
        assert_eq!(theoretical_capacity(2), 18);
        assert_eq!(theoretical_capacity(3), 32);
    }

    #[test]
    fn subshell_orbitals_span_magnetic_quantum_numbers() {
        let d = Subshell::empty(2, SubshellKind::D);
        let values: Vec<_> = d
            .orbitals()
            .iter()
            .map(Orbital::magnetic_quantum_number)
            .collect();
        assert_eq!(values, vec![-2, -1, 0, 1, 2]);
        assert_eq!(d.capacity(), 10);
    }

    #[test]
    fn subshell_fills_singly_before_pairing() {
        let p = Subshell::with_electrons(1, SubshellKind::P, 4).unwrap();
        let counts: Vec<_> = p.orbitals().iter().map(Orbital::electron_count).collect();
        assert_eq!(counts, vec![2, 1, 1]);
        assert_eq!(p.unpaired_electrons(), 2);
        assert_eq!(p.paired_electrons(), 2);
    }

    #[test]
    fn half_filled_d_subshell_has_five_unpaired_electrons() {
        let d = Subshell::with_electrons(2, SubshellKind::D, 5).unwrap();
        assert_eq!(d.unpaired_electrons(), 5);
        assert_eq!(d.paired_electrons(), 0);
    }

    #[test]
    fn s_subshell_fills_both_slots_of_its_orbital() {
        let s = Subshell::with_electrons(0, SubshellKind::S, 2).unwrap();
        assert!(s.is_full());
        assert_eq!(s.paired_electrons(), 2);
        assert_eq!(s.unpaired_electrons(), 0);
    }

    #[test]
    fn subshell_rejects_electrons_beyond_capacity() {
        let result = Subshell::with_electrons(1, SubshellKind::P, 7);
        assert!(matches!(
            result,
            Err(ModelError::OutOfRange {
                requested: 7,
                capacity: 6,
                ..
            })
        ));
    }

    #[test]
    fn shell_adds_subshells_lazily() {
        let shell = Shell::with_electrons(2, 9).unwrap();
        let kinds: Vec<_> = shell.subshells().iter().map(Subshell::kind).collect();
        assert_eq!(kinds, vec![SubshellKind::S, SubshellKind::P, SubshellKind::D]);
        assert_eq!(shell.electron_count(), 9);
        assert_eq!(shell.capacity(), 18);

        let small = Shell::with_electrons(2, 2).unwrap();
        assert_eq!(small.subshells().len(), 1);
        assert_eq!(small.capacity(), 2);
    }

    #[test]
    fn shell_rejects_electrons_beyond_capacity() {
        assert!(matches!(
            Shell::with_electrons(1, 9),
            Err(ModelError::OutOfRange { capacity: 8, .. })
        ));
        // Shells past N only host s, p, d, f.
        assert!(matches!(
            Shell::with_electrons(4, 33),
            Err(ModelError::OutOfRange { capacity: 32, .. })
        ));
    }

    #[test]
    fn shell_beyond_q_is_invalid() {
        assert!(matches!(Shell::empty(7), Err(ModelError::InvalidInput(_))));
    }

    #[test]
    fn shell_display_lists_subshells() {
        let shell = Shell::with_electrons(1, 8).unwrap();
        assert_eq!(shell.to_string(), "L: 2s2 2p6");
        assert!(shell.is_full());
        assert_eq!(shell.energy_level(), 2);
    }
}
