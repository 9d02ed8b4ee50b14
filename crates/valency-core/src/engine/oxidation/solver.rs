use super::result::{OxidationEntry, OxidationResult};
use super::rules::{Classification, OxidationRule, RuleContext, classify};
use crate::core::models::atom::Atom;
use crate::core::models::compound::{AtomicUnit, Compound};
use crate::engine::config::{SolveStrategy, SolverConfig};
use crate::engine::error::EngineError;
use tracing::{debug, instrument, warn};

struct Deferred<'t> {
    /// Position in the entry list the solved entry is inserted at.
    slot: usize,
    stack_index: usize,
    atom: Atom<'t>,
    quantity: u32,
}

/// Assigns oxidation numbers so that they add up to a compound's net charge.
///
/// Every atom is first matched against the fixed rules in [`classify`]. At most
/// one stack per compound level may remain; its number is then derived from the
/// charge left over. Nested compounds are solved against their own charge first.
#[derive(Debug, Clone, Default)]
pub struct OxidationSolver {
    config: SolverConfig,
}

impl OxidationSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// # Errors
    ///
    /// Returns [`EngineError::UnresolvedAmbiguity`] if more than one stack of a
    /// compound level matches no fixed rule.
    #[instrument(skip_all, name = "oxidation_solver", fields(compound = %compound))]
    pub fn solve<'t>(&self, compound: &Compound<'t>) -> Result<OxidationResult<'t>, EngineError> {
        let target = compound.net_charge();
        let context = RuleContext::of(compound);

        let mut entries: Vec<OxidationEntry<'t>> = Vec::new();
        let mut deferred: Vec<Deferred<'t>> = Vec::new();
        let mut known: i64 = 0;
        let mut nested_balanced = true;

        for (stack_index, stack) in compound.stacks().iter().enumerate() {
            let quantity = stack.quantity();
            match stack.unit() {
                AtomicUnit::Compound(inner) => {
                    let child = self.solve(inner)?;
                    known += i64::from(quantity) * i64::from(child.target());
                    if !child.is_balanced() {
                        warn!(nested = %inner, "Nested compound is unbalanced, its numbers are dropped.");
                        nested_balanced = false;
                        continue;
                    }
                    // Multiplicities never exceed the atom count, which a compound keeps within `u32`.
                    for mut entry in child.into_entries() {
                        entry.multiplicity *= quantity;
                        entry.path.insert(0, stack_index);
                        entries.push(entry);
                    }
                }
                AtomicUnit::Atom(atom) => match classify(atom.element(), context) {
                    Classification::Fixed { number, rule } => {
                        debug!(element = %atom.element().symbol, number, %rule, "Fixed by rule.");
                        known += i64::from(number) * i64::from(quantity);
                        if rule == OxidationRule::Oxide {
                            if let Some(existing) = entries
                                .iter_mut()
                                .find(|e| e.path.len() == 1 && e.rule == OxidationRule::Oxide)
                            {
                                existing.quantity += quantity;
                                existing.multiplicity += quantity;
                                continue;
                            }
                        }
                        entries.push(OxidationEntry {
                            element: atom.element(),
                            atom_charge: atom.charge(),
                            quantity,
                            multiplicity: quantity,
                            number,
                            rule,
                            path: vec![stack_index],
                        });
                    }
                    Classification::Deferred => {
                        debug!(element = %atom.element().symbol, "Deferred to balancing.");
                        deferred.push(Deferred {
                            slot: entries.len(),
                            stack_index,
                            atom: *atom,
                            quantity,
                        });
                    }
                },
            }
        }

        if deferred.len() > 1 {
            return Err(EngineError::UnresolvedAmbiguity {
                compound: compound.to_string(),
                elements: deferred
                    .iter()
                    .map(|d| d.atom.element().symbol.clone())
                    .collect(),
            });
        }

        let mut unresolved = None;
        if let Some(pending) = deferred.pop() {
            match self.backsolve(target, known, pending.quantity) {
                Some(number) => {
                    debug!(element = %pending.atom.element().symbol, number, "Solved by balance.");
                    entries.insert(
                        pending.slot,
                        OxidationEntry {
                            element: pending.atom.element(),
                            atom_charge: pending.atom.charge(),
                            quantity: pending.quantity,
                            multiplicity: pending.quantity,
                            number,
                            rule: OxidationRule::Balance,
                            path: vec![pending.stack_index],
                        },
                    );
                }
                None => {
                    warn!(
                        element = %pending.atom.element().symbol,
                        charge = target,
                        known,
                        "No oxidation number balances the compound."
                    );
                    unresolved = Some(pending.atom.element());
                }
            }
        }

        let weighted: i64 = entries.iter().map(OxidationEntry::weighted).sum();
        let balanced = nested_balanced && unresolved.is_none() && weighted == i64::from(target);
        if !balanced && unresolved.is_none() {
            warn!(charge = target, weighted, "Oxidation numbers do not add up to the net charge.");
        }

        Ok(OxidationResult {
            target,
            entries,
            unresolved,
            balanced,
        })
    }

    /// Finds `x` with `x * quantity + known == target` inside the configured bounds.
    fn backsolve(&self, target: i32, known: i64, quantity: u32) -> Option<i32> {
        let quantity = i64::from(quantity);
        let target = i64::from(target);
        let lower = self.config.search_lower_bound;
        let upper = self.config.search_upper_bound;
        match self.config.strategy {
            SolveStrategy::DownwardScan => (lower..=upper)
                .rev()
                .find(|&x| i64::from(x) * quantity + known == target),
            SolveStrategy::ClosedForm => {
                let missing = target - known;
                if quantity == 0 || missing % quantity != 0 {
                    return None;
                }
                i32::try_from(missing / quantity)
                    .ok()
                    .filter(|x| (lower..=upper).contains(x))
            }
        }
    }
}
