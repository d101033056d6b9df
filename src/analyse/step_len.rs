//! Step-length comparison harness.

use crate::{
    Float,
    args::IterArgs,
    error::Error,
    ode::Derivative,
    solve::{Method, solve},
};

/// Step sizes analysed when the caller supplies none.
pub const DEFAULT_STEPS: [Float; 3] = [0.01, 0.005, 0.001];

/// One value column of a [`StepLenTable`].
#[derive(Clone, Debug)]
pub struct StepLenColumn {
    /// The step size this column was produced with.
    pub h: Float,
    /// One entry per reference grid point; `None` where this step size
    /// produced no sample.
    pub y: Vec<Option<Float>>,
}

/// Trajectories for several step sizes aligned on one shared time axis.
///
/// The axis is the uniform grid over `[a, b]` at the finest requested
/// resolution. Reading a column's `Some` entries in order reproduces
/// exactly the trajectory the solver returned for that step size.
#[derive(Clone, Debug)]
pub struct StepLenTable {
    /// The shared time axis.
    pub t: Vec<Float>,
    /// One column per requested step size, in request order.
    pub columns: Vec<StepLenColumn>,
}

impl StepLenTable {
    /// Number of reference grid points (rows).
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Look up the column produced for step size `h`.
    pub fn column(&self, h: Float) -> Option<&StepLenColumn> {
        self.columns.iter().find(|c| c.h == h)
    }
}

/// Run `method` over the same span once per step size and align the
/// resulting trajectories on the finest requested grid.
///
/// An empty `steps` slice selects [`DEFAULT_STEPS`]. Every step size
/// must be an integer multiple of the finest one; incommensurate
/// requests fail before any solver runs, and a sample that lands on no
/// grid point is an error rather than being silently misplaced. Solver
/// calls are independent of one another and all share `args`.
pub fn analyse_step_len<F>(
    f: &F,
    method: Method,
    a: Float,
    b: Float,
    t0: Float,
    y0: Float,
    steps: &[Float],
    args: Option<IterArgs>,
) -> Result<StepLenTable, Error>
where
    F: Derivative,
{
    let steps = if steps.is_empty() {
        &DEFAULT_STEPS[..]
    } else {
        steps
    };

    // Reference resolution: the finest requested step size.
    let space = steps.iter().copied().fold(Float::INFINITY, Float::min);
    if !(space.is_finite() && space > 0.0) {
        return Err(Error::InvalidStepSize(space));
    }
    for &h in steps {
        let ratio = h / space;
        if (ratio - ratio.round()).abs() > ALIGN_TOL {
            return Err(Error::IncommensurateStepSizes { h, space });
        }
    }

    // Shared axis, endpoints exact.
    let rows = ((b - a) / space).round() as usize + 1;
    let t: Vec<Float> = if rows == 1 {
        vec![a]
    } else {
        (0..rows)
            .map(|i| a + (b - a) * i as Float / (rows - 1) as Float)
            .collect()
    };

    let mut columns = Vec::with_capacity(steps.len());
    for &h in steps {
        let traj = solve(f, method, a, b, t0, y0, h, args.clone())?;
        let mut y = vec![None; rows];
        for (tj, yj) in traj.iter() {
            let pos = (tj - a) / space;
            let idx = pos.round();
            if (pos - idx).abs() > ALIGN_TOL || idx < 0.0 || idx as usize >= rows {
                return Err(Error::GridMisaligned { t: tj, space });
            }
            y[idx as usize] = Some(yj);
        }
        columns.push(StepLenColumn { h, y });
    }

    Ok(StepLenTable { t, columns })
}

// Tolerance for matching sample times onto the reference grid.
const ALIGN_TOL: Float = 1e-6;
