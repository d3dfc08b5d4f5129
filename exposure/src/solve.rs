//! Exposure value combinator
//!
//! The exposure equation balances Av and Tv against Sv and the light slot.
//! Given three quantities in distinct slots, the fourth follows by summing
//! their stops with the sign of their side of the equation.

use exposure_core::{ExposureError, Fraction, Result};
use exposure_units::{Kind, Quantity, QuantityKind, Slot};
use crate::context::{SolveContext, TraceStep};

/// Solve for the quantity of `result_kind` from three others.
///
/// ```
/// use exposure::{solve, Av, Bv, Kind, Sv};
///
/// let inputs = [Av::from_stop(2)?.into(), Sv::from_stop(2).into(), Bv::from_stop(1).into()];
/// let tv = solve(Kind::Tv, &inputs)?;
/// assert_eq!(tv.to_string(), "Tv 2 sec");
/// # Ok::<(), exposure::ExposureError>(())
/// ```
pub fn solve(result_kind: Kind, inputs: &[Quantity]) -> Result<Quantity> {
    solve_with(result_kind, inputs, &mut SolveContext::default())
}

/// [`solve`], recording each step in `ctx` when tracing is enabled
pub fn solve_with(result_kind: Kind, inputs: &[Quantity], ctx: &mut SolveContext) -> Result<Quantity> {
    validate(result_kind, inputs)?;
    tracing::debug!(result = %result_kind, "solving exposure equation");

    let mut accumulator = Fraction::ZERO;
    for input in inputs {
        let kind = input.kind();
        accumulator = if kind.adds_light() {
            accumulator + input.stop()
        } else {
            accumulator - input.stop()
        };
        tracing::trace!(kind = %kind, stop = %input.stop(), accumulator = %accumulator, "folded input");
        ctx.record(TraceStep {
            kind,
            stop: input.stop().clone(),
            adds_light: kind.adds_light(),
            accumulator: accumulator.clone(),
        });
    }

    let stop = if result_kind.adds_light() { -accumulator } else { accumulator };
    let result = Quantity::from_stop(result_kind, stop)?;
    tracing::debug!(result = %result, "solved");
    Ok(result)
}

fn validate(result_kind: Kind, inputs: &[Quantity]) -> Result<()> {
    let mut slots: Vec<Slot> = inputs.iter().map(|q| q.kind().slot()).collect();
    slots.sort();
    slots.dedup();
    if inputs.len() != 3 || slots.len() != 3 {
        tracing::debug!(given = inputs.len(), distinct_slots = slots.len(), "rejected solve inputs");
        return Err(ExposureError::configuration("3 different items from Av, Tv, Sv and Bv/Iv needed")
            .with_suggestion("Pass one value from each of three slots: Av, Tv, Sv, Bv/Iv"));
    }

    if let Some(clash) = inputs.iter().find(|q| q.kind().slot() == result_kind.slot()) {
        let message = if clash.kind() == result_kind {
            format!("Can not compute {} as it is also given as parameter", result_kind)
        } else {
            format!("Can not compute {} as {} is also given as parameter", result_kind, clash.kind())
        };
        return Err(ExposureError::configuration(message));
    }

    Ok(())
}

/// Solve directly into a concrete kind: `Tv::from_exposures(&[..])`
pub trait FromExposures: QuantityKind {
    fn from_exposures(inputs: &[Quantity]) -> Result<Self> {
        solve(Self::KIND, inputs)?.into_kind()
    }
}

impl<T: QuantityKind> FromExposures for T {}
