// SPDX: CC0-1.0

//! Progressive rendering of a curve across frames.
//!
//! Instead of one dense sweep per frame, each tick halves the sampling step
//! and sweeps once, so a coarse preview shows up immediately and sharpens
//! until the floor resolution is reached. After that ticks are free until
//! the parameters (or the view origin) move by more than the threshold.

use crate::{eval::Curve, view::ViewBox, Number, Point, Surface};

pub const CHANGE_THRESHOLD: Number = 0.1;
pub const DEFAULT_START_STEP: Number = 2.0;
pub const DEFAULT_FLOOR_STEP: Number = 0.0004;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefineCfg {
    /// Step restored on a restart; the first sweep uses half of it.
    pub start_step: Number,
    /// Refinement stops once the step is at or below this.
    pub floor_step: Number,
    /// Minimum signature movement that restarts refinement.
    pub threshold: Number,
}

impl RefineCfg {
    pub const fn new(start_step: Number, floor_step: Number) -> Self {
        Self {
            start_step,
            floor_step,
            threshold: CHANGE_THRESHOLD,
        }
    }

    /// Sweeps needed after a restart to reach the floor.
    pub fn sweeps_to_floor(&self) -> u32 {
        if self.start_step <= self.floor_step {
            return 0;
        }
        (self.start_step / self.floor_step).log2().ceil() as u32
    }
}

impl Default for RefineCfg {
    fn default() -> Self {
        Self::new(DEFAULT_START_STEP, DEFAULT_FLOOR_STEP)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefinementState {
    /// `None` forces a restart on the next tick.
    pub last_signature: Option<Number>,
    pub current_step: Number,
    pub floor_step: Number,
}

impl RefinementState {
    pub fn is_idle(&self) -> bool {
        self.current_step <= self.floor_step
    }
}

/// Cheap summary of everything that changes the picture. Distinct states
/// with equal sums (swapped coefficients, say) are not told apart.
pub fn signature(params: &[Number], origin: Point<Number>) -> Number {
    params.iter().sum::<Number>() + origin.x + origin.y
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepReport {
    /// Sampling step used by this sweep.
    pub step: Number,
    /// The sweep was preceded by a restart.
    pub restarted: bool,
    /// Points handed to the sink.
    pub drawn: usize,
    /// This was the last sweep before going idle.
    pub converged: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// A sweep was already running.
    Skipped,
    Idle,
    Swept(SweepReport),
}

#[derive(Debug)]
pub struct Scheduler {
    cfg: RefineCfg,
    state: RefinementState,
    busy: bool,
    sweeps: usize,
}

impl Scheduler {
    pub fn new(cfg: RefineCfg) -> Self {
        Self {
            cfg,
            state: RefinementState {
                last_signature: None,
                current_step: cfg.floor_step,
                floor_step: cfg.floor_step,
            },
            busy: false,
            sweeps: 0,
        }
    }

    #[inline]
    pub const fn cfg(&self) -> &RefineCfg {
        &self.cfg
    }

    #[inline]
    pub const fn state(&self) -> &RefinementState {
        &self.state
    }

    /// Total sweeps performed since construction.
    #[inline]
    pub const fn sweeps(&self) -> usize {
        self.sweeps
    }

    #[inline]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Forget the last signature so the next tick restarts refinement.
    pub fn reset(&mut self) {
        self.state.last_signature = None;
    }

    /// Advances the state machine by one frame. Curve points that land inside
    /// `surface` are passed to `draw` as (data point, surface point); an error
    /// from `draw` aborts the sweep and is returned as is.
    ///
    /// `&mut self` already keeps a tick from starting while another one is
    /// sweeping, so [`Tick::Skipped`] only shows up if the busy flag was left
    /// set, which this type never does.
    pub fn tick<C, D, DErr>(
        &mut self,
        curve: &C,
        view: &ViewBox,
        surface: Surface,
        draw: D,
    ) -> Result<Tick, DErr>
    where
        C: Curve + ?Sized,
        D: FnMut(Point<Number>, Point<Number>) -> Result<(), DErr>,
    {
        if self.busy {
            return Ok(Tick::Skipped);
        }

        let sig = signature(curve.params(), view.origin);
        let restarted = match self.state.last_signature {
            None => true,
            // a non-finite signature only counts as changed when it moves
            Some(last) if !(last.is_finite() && sig.is_finite()) => last.to_bits() != sig.to_bits(),
            Some(last) => !((sig - last).abs() <= self.cfg.threshold),
        };
        if restarted {
            log::debug!("refinement restarted, signature {sig}");
            self.state.last_signature = Some(sig);
            self.state.current_step = self.cfg.start_step;
        }

        if self.state.is_idle() {
            return Ok(Tick::Idle);
        }

        self.state.current_step /= 2.0;
        let step = self.state.current_step;

        self.busy = true;
        let drawn = sweep(curve, view, surface, step, draw);
        self.busy = false;
        let drawn = drawn?;
        self.sweeps += 1;

        let converged = self.state.is_idle();
        if converged {
            log::debug!("refinement converged at step {step} after {} sweeps", self.sweeps);
        }

        Ok(Tick::Swept(SweepReport {
            step,
            restarted,
            drawn,
            converged,
        }))
    }
}

/// One full pass over the visible x range at `step`. Returns the number of
/// points that fell inside the surface.
pub fn sweep<C, D, DErr>(
    curve: &C,
    view: &ViewBox,
    surface: Surface,
    step: Number,
    mut draw: D,
) -> Result<usize, DErr>
where
    C: Curve + ?Sized,
    D: FnMut(Point<Number>, Point<Number>) -> Result<(), DErr>,
{
    let range = view.x_range();
    let mut drawn = 0;
    if !(step > 0.0) {
        return Ok(drawn);
    }

    let mut i: u64 = 0;
    loop {
        // indexed rather than accumulated so long sweeps don't drift
        let x = range.start + step * i as Number;
        if !(x < range.end) {
            break;
        }
        i += 1;

        for y in curve.ys(x) {
            let p = Point { x, y };
            let px = view.to_surface(p, surface);
            if surface.contains(px) {
                draw(p, px)?;
                drawn += 1;
            }
        }
    }

    Ok(drawn)
}
