use eframe::{egui, Frame};
use egui::{Align2, Color32, Context, FontId, Pos2, Rect, Sense, Stroke};

use zipfian_core::model::frequency::Analysis;
use zipfian_core::model::zipf_fit::FitResult;

const MARGIN_LEFT: f32 = 56.0;
const MARGIN_BOTTOM: f32 = 40.0;
const MARGIN_TOP: f32 = 24.0;
const MARGIN_RIGHT: f32 = 16.0;

/// Data range shown on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Bounds {
    /// Smallest box holding every point and both ends of the fitted line.
    /// Degenerate ranges are widened by one unit on each side.
    fn enclosing(points: &[(f64, f64)], fit: &FitResult) -> Self {
        let mut bounds = Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for &(x, y) in points {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        if points.is_empty() {
            bounds.min_x = 0.0;
            bounds.max_x = 0.0;
        }
        for x in [bounds.min_x, bounds.max_x] {
            let y = fit.predict(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }

        if bounds.max_x - bounds.min_x <= f64::EPSILON {
            bounds.min_x -= 1.0;
            bounds.max_x += 1.0;
        }
        if bounds.max_y - bounds.min_y <= f64::EPSILON {
            bounds.min_y -= 1.0;
            bounds.max_y += 1.0;
        }
        bounds
    }

    /// Maps a data point into `area` (y grows upwards).
    fn to_screen(&self, area: Rect, x: f64, y: f64) -> Pos2 {
        let tx = ((x - self.min_x) / (self.max_x - self.min_x)) as f32;
        let ty = ((y - self.min_y) / (self.max_y - self.min_y)) as f32;
        Pos2::new(
            area.left() + tx * area.width(),
            area.bottom() - ty * area.height(),
        )
    }
}

/// Whole-number tick positions covering `[min, max]`, at most about six of them.
fn ticks(min: f64, max: f64) -> Vec<f64> {
    let step = ((max - min) / 6.0).ceil().max(1.0);
    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut tick = first;
    while tick <= max {
        // `+ 0.0` turns -0.0 into 0.0
        ticks.push(tick + 0.0);
        tick += step;
    }
    ticks
}

/// Log-log scatter of frequency against rank, with the fitted line on top.
pub struct ZipfPlot {
    words: Vec<String>,
    points: Vec<(f64, f64)>,
    fit: FitResult,
    bounds: Bounds,
}

impl ZipfPlot {
    pub fn new(analysis: &Analysis, fit: FitResult) -> Self {
        let points = analysis.log_log_points();
        let bounds = Bounds::enclosing(&points, &fit);
        Self {
            words: analysis.ranked.iter().map(|entry| entry.word.clone()).collect(),
            points,
            fit,
            bounds,
        }
    }

    fn draw(&self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let full = response.rect;
        let area = Rect::from_min_max(
            Pos2::new(full.left() + MARGIN_LEFT, full.top() + MARGIN_TOP),
            Pos2::new(full.right() - MARGIN_RIGHT, full.bottom() - MARGIN_BOTTOM),
        );
        if area.width() <= 0.0 || area.height() <= 0.0 {
            return;
        }

        let text_color = ui.visuals().text_color();
        let axis = Stroke::new(1.0, text_color);
        let font = FontId::proportional(12.0);

        // Axes
        painter.line_segment([area.left_bottom(), area.right_bottom()], axis);
        painter.line_segment([area.left_bottom(), area.left_top()], axis);

        for x in ticks(self.bounds.min_x, self.bounds.max_x) {
            let p = self.bounds.to_screen(area, x, self.bounds.min_y);
            painter.line_segment([p, p + egui::vec2(0.0, 4.0)], axis);
            painter.text(p + egui::vec2(0.0, 6.0), Align2::CENTER_TOP, x, font.clone(), text_color);
        }
        for y in ticks(self.bounds.min_y, self.bounds.max_y) {
            let p = self.bounds.to_screen(area, self.bounds.min_x, y);
            painter.line_segment([p, p - egui::vec2(4.0, 0.0)], axis);
            painter.text(p - egui::vec2(6.0, 0.0), Align2::RIGHT_CENTER, y, font.clone(), text_color);
        }

        painter.text(
            Pos2::new(area.center().x, full.bottom() - 4.0),
            Align2::CENTER_BOTTOM,
            "Word Rank",
            FontId::proportional(14.0),
            text_color,
        );
        painter.text(
            Pos2::new(full.left() + 4.0, full.top() + 4.0),
            Align2::LEFT_TOP,
            "Word Frequency",
            FontId::proportional(14.0),
            text_color,
        );

        // Data
        let dot = Color32::from_rgb(31, 119, 180);
        for &(x, y) in &self.points {
            painter.circle_filled(self.bounds.to_screen(area, x, y), 2.5, dot);
        }

        let line = Stroke::new(2.0, Color32::from_rgb(255, 127, 14));
        let from = self.bounds.to_screen(area, self.bounds.min_x, self.fit.predict(self.bounds.min_x));
        let to = self.bounds.to_screen(area, self.bounds.max_x, self.fit.predict(self.bounds.max_x));
        painter.with_clip_rect(area).line_segment([from, to], line);

        // Word under the pointer
        if let Some(pointer) = response.hover_pos() {
            let nearest = self
                .points
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| (i, self.bounds.to_screen(area, x, y).distance(pointer)))
                .filter(|&(_, distance)| distance < 6.0)
                .min_by(|a, b| a.1.total_cmp(&b.1));
            if let Some((i, _)) = nearest {
                let p = self.bounds.to_screen(area, self.points[i].0, self.points[i].1);
                painter.text(
                    p + egui::vec2(6.0, -6.0),
                    Align2::LEFT_BOTTOM,
                    format!("#{} {}", i + 1, self.words[i]),
                    font,
                    text_color,
                );
            }
        }
    }
}

impl eframe::App for ZipfPlot {
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading("Zipf's Law"));
            self.draw(ui);
        });
    }
}

/// Opens the plot window and blocks until it is closed.
pub fn show(plot: ZipfPlot) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native("Zipf's Law", options, Box::new(|_| Ok(Box::new(plot))))
}
