//! Evaluated figure data shared by every renderer.

use oscillator::{
    InitialConditions, Mode, MotionError, PhysicalParameters, PositionSeries, TimeGrid, evaluate,
};
use tracing::{info, info_span};

use crate::config::Config;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Line color for a mode's panel.
pub const fn mode_color(mode: Mode) -> Rgb {
    match mode {
        Mode::Simple => Rgb(31, 119, 180),
        Mode::Damped => Rgb(255, 127, 14),
        Mode::Forced => Rgb(44, 160, 44),
    }
}

/// Panel title for a mode.
pub const fn mode_title(mode: Mode) -> &'static str {
    match mode {
        Mode::Simple => "Simple Harmonic Motion",
        Mode::Damped => "Damped Harmonic Motion",
        Mode::Forced => "Forced Harmonic Motion",
    }
}

/// X axis caption.
pub const TIME_LABEL: &str = "Time (s)";

/// Y axis caption.
pub const POSITION_LABEL: &str = "Position (m)";

/// One chart: a mode and its positions over the figure's time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    mode: Mode,
    positions: PositionSeries,
}

impl Panel {
    /// Mode plotted in this panel.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Chart title.
    pub fn title(&self) -> &'static str {
        mode_title(self.mode)
    }

    /// Line color.
    pub fn color(&self) -> Rgb {
        mode_color(self.mode)
    }

    /// Positions, one per time sample.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Smallest and largest position, or `None` for an empty panel.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.positions.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }

    /// Bounds widened by 5% of the span, and to a unit span around a flat
    /// series, so lines never sit on the frame.
    pub fn padded_bounds(&self) -> (f64, f64) {
        let Some((lo, hi)) = self.bounds() else {
            return (-1.0, 1.0);
        };
        let span = hi - lo;
        if span <= f64::EPSILON * lo.abs().max(hi.abs()).max(1.0) {
            return (lo - 0.5, hi + 0.5);
        }
        let pad = 0.05 * span;
        (lo - pad, hi + pad)
    }
}

/// Every panel of a run over a shared time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    parameters: PhysicalParameters,
    initial: InitialConditions,
    grid: TimeGrid,
    panels: Vec<Panel>,
}

impl Figure {
    /// Evaluates every selected mode of `config` over its time grid.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Grid`] if the grid settings do not describe a
    /// valid grid, otherwise the first [`MotionError`]; no figure is
    /// produced if any mode fails.
    pub fn build(config: &Config) -> Result<Self, MotionError> {
        Self::evaluate(
            config.time_grid()?,
            &config.render.effective_modes(),
            &config.parameters,
            &config.initial,
        )
    }

    /// Evaluates `modes` over `grid`.
    ///
    /// # Errors
    ///
    /// Returns the first [`MotionError`].
    pub fn evaluate(
        grid: TimeGrid,
        modes: &[Mode],
        parameters: &PhysicalParameters,
        initial: &InitialConditions,
    ) -> Result<Self, MotionError> {
        let _span = info_span!("figure", samples = grid.len()).entered();

        let panels = modes
            .iter()
            .map(|&mode| {
                let positions = evaluate(&grid, mode, parameters, initial)?;
                info!(mode = %mode, samples = positions.len(), "evaluated panel");
                Ok(Panel { mode, positions })
            })
            .collect::<Result<Vec<_>, MotionError>>()?;

        Ok(Self {
            parameters: *parameters,
            initial: *initial,
            grid,
            panels,
        })
    }

    /// Physical constants the figure was evaluated with.
    pub fn parameters(&self) -> &PhysicalParameters {
        &self.parameters
    }

    /// Initial conditions the figure was evaluated with.
    pub fn initial(&self) -> &InitialConditions {
        &self.initial
    }

    /// Shared time axis.
    pub fn times(&self) -> &[f64] {
        self.grid.as_slice()
    }

    /// Panels in display order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// First and last time sample, or `(0, 1)` for an empty grid.
    pub fn time_range(&self) -> (f64, f64) {
        match (self.grid.first(), self.grid.last()) {
            (Some(start), Some(end)) if end > start => (start, end),
            (Some(start), Some(_)) => (start, start + 1.0),
            _ => (0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oscillator::GridError;

    fn reference(samples: usize) -> Figure {
        Figure::evaluate(
            TimeGrid::linspace(0.0, 20.0, samples).unwrap(),
            &Mode::ALL,
            &PhysicalParameters::default(),
            &InitialConditions::default(),
        )
        .unwrap()
    }

    #[test]
    fn build_uses_config_modes_and_grid() {
        let mut config = Config::default();
        config.grid.samples = 25;
        config.render.modes = vec![Mode::Forced];
        let figure = Figure::build(&config).unwrap();

        assert_eq!(figure.times().len(), 25);
        assert_eq!(figure.panels().len(), 1);
        assert_eq!(figure.panels()[0].mode(), Mode::Forced);
        assert_eq!(figure.panels()[0].positions().len(), 25);
    }

    #[test]
    fn panels_follow_mode_order() {
        let figure = reference(10);
        let modes: Vec<Mode> = figure.panels().iter().map(Panel::mode).collect();
        assert_eq!(modes, Mode::ALL.to_vec());
        assert_eq!(figure.panels()[1].title(), "Damped Harmonic Motion");
    }

    #[test]
    fn build_fails_for_overdamped_config() {
        let mut config = Config::default();
        config.parameters.damping = 50.0;
        assert!(matches!(
            Figure::build(&config),
            Err(MotionError::NotUnderdamped { .. })
        ));

        config.render.modes = vec![Mode::Simple];
        assert!(Figure::build(&config).is_ok());
    }

    #[test]
    fn build_fails_for_negative_duration() {
        let mut config = Config::default();
        config.grid.duration = -5.0;
        assert!(matches!(
            Figure::build(&config),
            Err(MotionError::Grid(GridError::Decreasing { index: 1, .. }))
        ));
    }

    #[test]
    fn simple_bounds_cover_unit_amplitude() {
        let figure = reference(1000);
        let (lo, hi) = figure.panels()[0].bounds().unwrap();
        assert!(lo >= -1.0 && lo < -0.99);
        assert_eq!(hi, 1.0);
    }

    #[test]
    fn padded_bounds_handle_flat_and_empty_series() {
        let flat = Panel {
            mode: Mode::Simple,
            positions: vec![2.0; 5],
        };
        assert_eq!(flat.padded_bounds(), (1.5, 2.5));

        let empty = Panel {
            mode: Mode::Simple,
            positions: Vec::new(),
        };
        assert_eq!(empty.bounds(), None);
        assert_eq!(empty.padded_bounds(), (-1.0, 1.0));
    }

    #[test]
    fn time_range_handles_degenerate_grids() {
        assert_eq!(reference(5).time_range(), (0.0, 20.0));
        assert_eq!(reference(1).time_range(), (0.0, 1.0));
        assert_eq!(reference(0).time_range(), (0.0, 1.0));
    }

    #[test]
    fn colors_are_distinct() {
        assert_ne!(mode_color(Mode::Simple), mode_color(Mode::Damped));
        assert_ne!(mode_color(Mode::Damped), mode_color(Mode::Forced));
    }
}
