use std::fmt;

/// Sequence number attached to one filter request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out increasing generations and remembers the newest one.
///
/// A completion may only touch the displayed list while its generation is
/// still the newest issued.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationGuard {
    latest: Generation,
}

impl GenerationGuard {
    pub fn issue(&mut self) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.latest
    }

    pub fn latest(&self) -> Generation {
        self.latest
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest
    }
}
