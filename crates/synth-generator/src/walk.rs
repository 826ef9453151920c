//! Bounded random-walk sampling for a single unit.

use crate::alias::AliasTable;
use crate::error::GeneratorError;
use rand::Rng;
use synth_core::UnitSpec;

/// One unit's running state during a generation run.
///
/// The accumulator is owned here and read back by the caller when the run
/// completes, so unit state is never mutated behind the caller's back.
pub struct BoundedWalk<'a> {
    unit: &'a UnitSpec,
    sampler: &'a AliasTable,
    reading: f64,
}

impl<'a> BoundedWalk<'a> {
    /// Start a walk from the given running total.
    pub fn new(unit: &'a UnitSpec, sampler: &'a AliasTable, reading: f64) -> Self {
        Self {
            unit,
            sampler,
            reading,
        }
    }

    /// Current running total.
    pub fn reading(&self) -> f64 {
        self.reading
    }

    /// Draw the next delta and fold it into the running total.
    ///
    /// Returns the (possibly reflected) delta that was applied.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<f64, GeneratorError> {
        let index = self.sampler.next(rng);
        let category = self.unit.categories.get(index).ok_or_else(|| {
            GeneratorError::CategoryNotFound {
                unit: self.unit.name.clone(),
                index,
            }
        })?;

        // The delta spans the category's width but always starts at 0; the
        // lower bound only narrows the span, it does not shift the draw.
        let mut delta = rng.gen::<f64>() * category.span();

        // Ceiling and floor checks are independent, not exclusive. The
        // floor check sees the delta as the ceiling check left it, so a
        // delta rejected by both comes back with its original sign.
        if let Some(ceiling) = self.unit.ceiling {
            if self.reading + delta > ceiling {
                delta = -delta;
            }
        }
        if let Some(floor) = self.unit.floor {
            if self.reading - delta < floor {
                delta = -delta;
            }
        }

        self.reading += delta;
        Ok(delta)
    }
}
