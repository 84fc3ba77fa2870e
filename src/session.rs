// SPDX: CC0-1.0

//! Owned state behind one interactive session: the curve being edited, the
//! view, the reference points and the refinement schedule. A presentation
//! layer mutates it through the setters and calls [`Session::tick`] on a
//! timer; each sweep yields a complete [`Frame`].

use crate::{
    config::{Config, ORIGIN_BOUNDS},
    draw::{Color, DrawCmd, Frame},
    fit,
    formula::{Formula, Parsed},
    refine::{Scheduler, Tick},
    view::ViewBox,
    Number, Point, Surface,
};
use core::{convert::Infallible, ops::RangeInclusive};
use std::sync::Arc;

/// Where the error readout sits, measured from the bottom right corner.
const ERROR_LABEL_INSET: Point<Number> = Point { x: 60.0, y: 14.0 };

/// Rounds like a slider readout: two decimal places.
pub fn round_2dp(val: Number) -> Number {
    (val * 100.0).round() / 100.0
}

#[derive(Debug)]
pub struct Session<C> {
    pub curve: C,
    pub view: ViewBox,
    pub points: Vec<Point<Number>>,
    pub surface: Surface,
    scheduler: Scheduler,
    bounds: RangeInclusive<Number>,
    initial_formula: Option<Arc<String>>,
    formula: String,
    last_frame: Option<Frame>,
}

impl<C> Session<C>
where
    C: Formula + Default,
{
    pub fn new(cfg: &Config, view: ViewBox, surface: Surface, points: Vec<Point<Number>>) -> Self {
        let initial_formula = cfg
            .has_initial_formula()
            .then(|| Arc::new(cfg.initial_formula.clone()));
        let mut ret = Self {
            curve: C::default(),
            view,
            points,
            surface,
            scheduler: Scheduler::new(cfg.refine),
            bounds: cfg.coeficient_bounds.clone(),
            initial_formula,
            formula: String::new(),
            last_frame: None,
        };
        ret.reset();
        ret
    }

    /// Back to the initial formula (or unit parameters) and the home origin;
    /// the next tick restarts refinement.
    pub fn reset(&mut self) -> Option<Parsed> {
        self.curve = C::default();
        let parsed = self
            .initial_formula
            .clone()
            .map(|src| self.curve.parse_into(&src));
        self.view.reset_origin();
        self.scheduler.reset();
        self.formula = self.curve.render();
        parsed
    }

    pub fn read_formula(&mut self, src: &Arc<String>) -> Parsed {
        let parsed = self.curve.parse_into(src);
        log::debug!("read {} parameter(s) from formula", parsed.assigned);
        parsed
    }

    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.curve.names().iter().position(|n| *n == name)
    }

    /// Sets one parameter the way a slider would: clamped to the configured
    /// bounds and rounded to two decimals. Returns the stored value, or
    /// `None` when `idx` is out of range or `val` isn't finite.
    pub fn set_param(&mut self, idx: usize, val: Number) -> Option<Number> {
        if !val.is_finite() {
            return None;
        }
        let val = round_2dp(val.clamp(*self.bounds.start(), *self.bounds.end()));
        let slot = self.curve.params_mut().get_mut(idx)?;
        *slot = val;
        Some(val)
    }

    /// Moves the view, clamped to [`ORIGIN_BOUNDS`]. A non-finite coordinate
    /// leaves the origin where it was and returns `None`.
    pub fn move_origin(&mut self, origin: Point<Number>) -> Option<Point<Number>> {
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return None;
        }
        let clamp = |v: Number| v.clamp(*ORIGIN_BOUNDS.start(), *ORIGIN_BOUNDS.end());
        self.view.origin = Point::new(clamp(origin.x), clamp(origin.y));
        Some(self.view.origin)
    }

    /// Canonical text of the parameters as of the last restart or reset.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn bounds(&self) -> &RangeInclusive<Number> {
        &self.bounds
    }

    pub fn score(&self) -> Number {
        fit::score(&self.points, &self.curve)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Latest complete frame, kept until the next sweep replaces it.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    pub fn tick(&mut self) -> Tick {
        let mut curve_cmds = Vec::new();
        let tick = self.scheduler.tick(&self.curve, &self.view, self.surface, |_, px| {
            curve_cmds.push(DrawCmd::curve(px));
            Ok::<_, Infallible>(())
        });
        let tick = match tick {
            Ok(tick) => tick,
            Err(never) => match never {},
        };

        if let Tick::Swept(report) = tick {
            if report.restarted {
                self.formula = self.curve.render();
            }
            let mut frame = self.frame_prelude();
            frame.step = report.step;
            frame.cmds.append(&mut curve_cmds);
            self.last_frame = Some(frame);
        }
        tick
    }

    // background, labels and reference points; curve points go on top
    fn frame_prelude(&self) -> Frame {
        let surface = self.surface;
        let mut cmds = vec![DrawCmd::Clear(Color::Black)];

        let origin = self.view.to_surface(Point::new(0.0, 0.0), surface);
        if surface.contains(origin) {
            cmds.push(DrawCmd::Text {
                at: origin,
                color: Color::Grey,
                text: String::from("(0,0)"),
            });
        }

        let error = self.score();
        let error_label = fit::error_label(error);
        cmds.push(DrawCmd::Text {
            at: Point::new(surface.w - ERROR_LABEL_INSET.x, surface.h - ERROR_LABEL_INSET.y),
            color: Color::Grey,
            text: error_label.clone(),
        });

        cmds.extend(
            self.points
                .iter()
                .map(|p| self.view.to_surface(*p, surface))
                .filter(|px| surface.contains(*px))
                .map(DrawCmd::reference),
        );

        Frame {
            cmds,
            error_label,
            error,
            step: Number::NAN,
        }
    }
}
