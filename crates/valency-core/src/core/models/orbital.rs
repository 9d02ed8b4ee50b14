#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Electron {
    pub spin: Spin,
}

/// A single orbital holding at most two electrons of opposite spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orbital {
    magnetic_quantum_number: i8,
    slots: [Option<Electron>; 2],
}

impl Orbital {
    pub const CAPACITY: u32 = 2;

    pub fn new(magnetic_quantum_number: i8) -> Self {
        Self {
            magnetic_quantum_number,
            slots: [None, None],
        }
    }

    pub fn magnetic_quantum_number(&self) -> i8 {
        self.magnetic_quantum_number
    }

    pub fn electrons(&self) -> impl Iterator<Item = &Electron> {
        self.slots.iter().flatten()
    }

    pub fn electron_count(&self) -> u32 {
        self.slots.iter().filter(|slot| slot.is_some()).count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.electron_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.electron_count() == Self::CAPACITY
    }

    /// Paired means an up/down pair, or no electrons at all.
    pub fn is_paired(&self) -> bool {
        match self.slots {
            [None, None] => true,
            [Some(first), Some(second)] => first.spin == Spin::Up && second.spin == Spin::Down,
            _ => false,
        }
    }

    /// Holds exactly one electron.
    pub fn is_singly_occupied(&self) -> bool {
        self.electron_count() == 1
    }

    /// Adds an electron: spin up into an empty orbital, spin down to complete a pair.
    ///
    /// Returns `false` if the orbital was already full.
    pub(crate) fn push(&mut self) -> bool {
        match self.slots {
            [None, _] => {
                self.slots[0] = Some(Electron { spin: Spin::Up });
                true
            }
            [Some(_), None] => {
                self.slots[1] = Some(Electron { spin: Spin::Down });
                true
            }
            [Some(_), Some(_)] => false,
        }
    }
}
