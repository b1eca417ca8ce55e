// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Static line charts of one series against time, rendered to PNG.

use plotters::prelude::*;

use std::error::Error;
use std::path::Path;

mod scales;

pub use scales::*;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const LINE_COLOUR: RGBColor = hexcolour!(0x1F77B4);

const FONT: &str = "monospace";

/// Opacity of the dashed gridlines.
pub const GRID_ALPHA: f64 = 0.4;

/// Upper bound on labelled key points (and gridlines) per axis.
const KEY_POINTS: usize = 10;

/// Make the bundled DejaVu face available to the text renderer. Safe to call
/// more than once.
pub fn register_fonts() -> Result<(), Box<dyn Error>> {
    plotters::style::register_font(FONT, FontStyle::Normal, dejavu::sans_mono::regular())
        .map_err(|_| "bundled font could not be loaded".into())
}

pub struct PlotConfig<'data> {
    x_desc: String,
    y_desc: String,
    caption: String,
    size: (u32, u32),

    x: &'data [f64],
    y: &'data [f64],
}

impl<'d> PlotConfig<'d> {
    pub fn new(x: &'d [f64], y: &'d [f64]) -> Self {
        Self {
            x_desc: String::new(),
            y_desc: String::new(),
            caption: String::new(),
            size: (640, 480),

            x,
            y,
        }
    }

    pub fn caption(&mut self, caption: impl AsRef<str>) -> &mut Self {
        self.caption = caption.as_ref().to_owned();
        self
    }

    pub fn x_desc(&mut self, x_desc: impl AsRef<str>) -> &mut Self {
        self.x_desc = x_desc.as_ref().to_owned();
        self
    }

    pub fn y_desc(&mut self, y_desc: impl AsRef<str>) -> &mut Self {
        self.y_desc = y_desc.as_ref().to_owned();
        self
    }

    pub fn size(&mut self, size: (u32, u32)) -> &mut Self {
        self.size = size;
        self
    }

    /// Draw `y` against `x` as a single line and write the image to
    /// `filename`, replacing any existing file.
    pub fn plot_line(&mut self, filename: impl AsRef<Path>) -> Result<&mut Self, Box<dyn Error>> {
        register_fonts()?;

        let points = finite_points(self.x, self.y);
        let x_range = padded_range(points.iter().map(|p| p.0));
        let y_range = padded_range(points.iter().map(|p| p.1));

        // an axis is at most f64::MAX wide, so wider data is pinned to its edges
        let points: Vec<(f64, f64)> = points
            .into_iter()
            .map(|(x, y)| {
                (
                    x.clamp(x_range.start, x_range.end),
                    y.clamp(y_range.start, y_range.end),
                )
            })
            .collect();

        let root = BitMapBackend::new(filename.as_ref(), self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.caption, (FONT, 20))
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(x_range.clone(), y_range.clone())?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(KEY_POINTS)
            .y_labels(KEY_POINTS)
            .x_desc(&self.x_desc)
            .y_desc(&self.y_desc)
            .label_style((FONT, 12))
            .axis_desc_style((FONT, 14))
            .draw()?;

        let xs = chart.as_coord_spec().x_spec().key_points(KEY_POINTS);
        let ys = chart.as_coord_spec().y_spec().key_points(KEY_POINTS);
        let grid = BLACK.mix(GRID_ALPHA).stroke_width(1);

        for x in xs {
            let ends = vec![(x, y_range.start), (x, y_range.end)];
            chart.draw_series(DashedLineSeries::new(ends, 4, 3, grid))?;
        }
        for y in ys {
            let ends = vec![(x_range.start, y), (x_range.end, y)];
            chart.draw_series(DashedLineSeries::new(ends, 4, 3, grid))?;
        }

        chart.draw_series(LineSeries::new(points, LINE_COLOUR.stroke_width(2)))?;

        root.present()?;

        Ok(self)
    }
}
