use super::error::EngineError;
use crate::core::models::atom::Atom;
use crate::core::models::configuration::{Magnetism, ShellConfiguration};
use crate::core::models::error::ModelError;
use crate::core::models::shell::{SHELL_COUNT, Shell, SubshellKind};
use tracing::{instrument, trace};

/// Electrons held by shells `K` to `Q` when every available subshell is full.
pub const MAX_ELECTRONS: u32 = 156;

/// Shells `K` to `N` also feed the diagonal that starts at each of their subshells.
const DIAGONAL_SHELLS: usize = 4;

/// Distributes electrons over shells using a diagonal filling order.
///
/// Shells are visited from `K` outwards and each of their subshells in `s`, `p`,
/// `d`, `f` order. After a subshell of one of the inner four shells is filled,
/// the diagonal below it is filled too: visiting `2p` also fills `3s`, visiting
/// `3d` fills `4p` and then `5s`. Subshells that already hold electrons are
/// never topped up.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellFiller;

impl ShellFiller {
    /// Builds the configuration of `electron_count` electrons.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for a negative count and
    /// [`EngineError::OutOfRange`] above [`MAX_ELECTRONS`].
    #[instrument(level = "debug", name = "shell_filler")]
    pub fn populate(electron_count: i64) -> Result<ShellConfiguration, EngineError> {
        if electron_count < 0 {
            return Err(EngineError::InvalidInput(format!(
                "electron count must not be negative, got {electron_count}"
            )));
        }
        let mut remaining = u32::try_from(electron_count)
            .ok()
            .filter(|&count| count <= MAX_ELECTRONS)
            .ok_or(EngineError::OutOfRange {
                requested: electron_count,
                capacity: MAX_ELECTRONS,
            })?;

        let mut shells = (0..SHELL_COUNT)
            .map(Shell::empty)
            .collect::<Result<Vec<_>, _>>()?;

        for index in 0..SHELL_COUNT {
            for (position, &kind) in SubshellKind::available_in(index).iter().enumerate() {
                fill(&mut shells, index, kind, &mut remaining)?;
                if index >= DIAGONAL_SHELLS {
                    continue;
                }
                for step in 1..=position {
                    if let Some(diagonal) = SubshellKind::from_azimuthal(position - step) {
                        fill(&mut shells, index + step, diagonal, &mut remaining)?;
                    }
                }
            }
        }

        Ok(ShellConfiguration::from_shells(shells))
    }

    /// The configuration of the atom's electrons, charge included.
    pub fn configure(atom: &Atom<'_>) -> Result<ShellConfiguration, EngineError> {
        Self::populate(i64::from(atom.electrons()))
    }

    pub fn magnetism(atom: &Atom<'_>) -> Result<Magnetism, EngineError> {
        Ok(Self::configure(atom)?.magnetism())
    }
}

fn fill(
    shells: &mut [Shell],
    index: usize,
    kind: SubshellKind,
    remaining: &mut u32,
) -> Result<(), ModelError> {
    if *remaining == 0 {
        return Ok(());
    }
    let Some(subshell) = shells
        .get_mut(index)
        .and_then(|shell| shell.subshell_mut(kind))
    else {
        return Ok(());
    };
    if !subshell.is_empty() {
        return Ok(());
    }

    let take = (*remaining).min(subshell.capacity());
    subshell.populate(take)?;
    *remaining -= take;
    trace!(
        subshell = %subshell.label(),
        electrons = take,
        remaining = *remaining,
        "Filled subshell."
    );
    Ok(())
}
