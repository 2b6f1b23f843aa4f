use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::{Error, Series};

/// One plot within a [`Figure`].
///
/// Construct with [`Panel::new`] and chain builder methods as needed. The grid
/// and legend are off unless enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    title: String,
    x_label: String,
    y_label: String,
    grid: bool,
    legend: bool,
    series: Vec<Series>,
}

impl Panel {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            grid: false,
            legend: false,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    #[must_use]
    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Enables a legend labeling each series by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Adds a series, drawn after any already added.
    #[must_use]
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn all_series(&self) -> &[Series] {
        &self.series
    }

    fn ui(&self, ui: &mut egui::Ui, index: usize) {
        ui.heading(self.title.as_str());

        let mut plot = Plot::new(("tau-plot-panel", index))
            .x_axis_label(self.x_label.clone())
            .y_axis_label(self.y_label.clone())
            .show_grid(self.grid);
        if self.legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for series in &self.series {
                let points: PlotPoints = series.points().iter().copied().collect();
                plot_ui.line(
                    Line::new(points)
                        .name(series.name())
                        .style(series.line_style().into()),
                );
            }
        });
    }
}

/// A window of [`Panel`]s arranged left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    size: [f32; 2],
    panels: Vec<Panel>,
}

impl Figure {
    /// Creates an empty figure with a 1200×600 window.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: [1200.0, 600.0],
            panels: Vec::new(),
        }
    }

    /// Sets the initial window size in logical points.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = [width, height];
        self
    }

    /// Adds a panel to the right of any already added.
    #[must_use]
    pub fn panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Opens a blocking egui window displaying the figure.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Display`] if the native window cannot be created.
    pub fn show(self) -> Result<(), Error> {
        log::info!(
            "showing {:?} with {} panel(s) at {}x{}",
            self.title,
            self.panels.len(),
            self.size[0],
            self.size[1],
        );

        let title = self.title.clone();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(self.size),
            ..Default::default()
        };

        eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(self))))?;
        Ok(())
    }
}

impl eframe::App for Figure {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.panels.is_empty() {
                return;
            }

            ui.columns(self.panels.len(), |columns| {
                for (index, (column, panel)) in columns.iter_mut().zip(&self.panels).enumerate() {
                    panel.ui(column, index);
                }
            });
        });
    }
}
