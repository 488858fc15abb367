//! SVG visualization for match audit.
//!
//! Renders a matching run to SVG: one circle marker per matched offset and
//! per unmatched model position, colored to distinguish the two groups.
//! The SVG serves as an audit file for inspecting a run without any
//! rendering stack; the matcher itself never depends on it.
//!
//! Markers are projected top-down onto the X/Y plane; the Z component only
//! appears in the marker tooltips.

use std::fmt::Write;
use std::path::Path;

use crate::core::Vec3;
use crate::matching::MatchResult;

use super::IoError;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Matched offset marker color
    pub matched: &'static str,
    /// Unmatched position marker color
    pub unmatched: &'static str,
    /// Background color
    pub background: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            matched: "#22AA22",
            unmatched: "#AA2222",
            background: "#F8F8F8",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per world unit
    pub scale: f32,
    /// Marker radius in pixels
    pub marker_radius: f32,
    /// Padding around the plot in pixels
    pub padding: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 50.0,
            marker_radius: 4.0,
            padding: 20.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG visualization builder for a matching run
pub struct SvgVisualizer {
    config: SvgConfig,
    /// Matched offsets (one marker each)
    matched: Vec<Vec3>,
    /// Unmatched model positions (one marker each)
    unmatched: Vec<Vec3>,
    /// Title to display
    title: Option<String>,
}

impl SvgVisualizer {
    /// Create a visualizer from a match result.
    pub fn new(result: &MatchResult, config: SvgConfig) -> Self {
        Self {
            config,
            matched: result.matching_offsets.clone(),
            unmatched: result.unmatched_positions.clone(),
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let (min, max) = self.bounds();
        let plot_width = ((max.x - min.x) * self.config.scale).max(1.0);
        let plot_height = ((max.y - min.y) * self.config.scale).max(1.0);

        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let legend_height = 50.0;

        let width = plot_width + 2.0 * padding;
        let height = plot_height + 2.0 * padding + title_height + legend_height;

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();

        writeln!(
            &mut svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.config.colors.background
        )
        .unwrap();

        if let Some(ref title) = self.title {
            writeln!(
                &mut svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )
            .unwrap();
        }

        // Plot group; SVG y grows downward, so flip y around the plot height
        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )
        .unwrap();

        self.render_markers(
            &mut svg,
            &self.matched,
            self.config.colors.matched,
            "offset",
            min,
            plot_height,
        );
        self.render_markers(
            &mut svg,
            &self.unmatched,
            self.config.colors.unmatched,
            "unmatched",
            min,
            plot_height,
        );

        writeln!(&mut svg, "  </g>").unwrap();

        self.render_legend(&mut svg, padding, padding + title_height + plot_height + 15.0);

        writeln!(&mut svg, "</svg>").unwrap();

        svg
    }

    /// Render to SVG and save to a file.
    pub fn save(&self, path: &Path) -> Result<(), IoError> {
        std::fs::write(path, self.render())?;
        log::info!("wrote match audit SVG to {}", path.display());
        Ok(())
    }

    /// World-space bounds over both marker groups (x/y projection).
    fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::new(f32::MAX, f32::MAX, 0.0);
        let mut max = Vec3::new(f32::MIN, f32::MIN, 0.0);

        for p in self.matched.iter().chain(self.unmatched.iter()) {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        if self.matched.is_empty() && self.unmatched.is_empty() {
            return (Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        }

        (min, max)
    }

    fn render_markers(
        &self,
        svg: &mut String,
        points: &[Vec3],
        color: &str,
        label: &str,
        min: Vec3,
        plot_height: f32,
    ) {
        writeln!(svg, r#"    <g id="{}">"#, label).unwrap();

        for (i, p) in points.iter().enumerate() {
            let px = (p.x - min.x) * self.config.scale;
            let py = plot_height - (p.y - min.y) * self.config.scale;

            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"><title>{} {}: ({:.3}, {:.3}, {:.3})</title></circle>"#,
                px, py, self.config.marker_radius, color, label, i, p.x, p.y, p.z
            )
            .unwrap();
        }

        writeln!(svg, "    </g>").unwrap();
    }

    fn render_legend(&self, svg: &mut String, x: f32, y: f32) {
        let entries = [
            (
                self.config.colors.matched,
                format!("Matched offsets ({})", self.matched.len()),
            ),
            (
                self.config.colors.unmatched,
                format!("Unmatched positions ({})", self.unmatched.len()),
            ),
        ];

        for (i, (color, text)) in entries.iter().enumerate() {
            let row_y = y + i as f32 * 20.0;
            writeln!(
                svg,
                r#"  <circle cx="{:.0}" cy="{:.0}" r="5" fill="{}"/>"#,
                x + 5.0,
                row_y,
                color
            )
            .unwrap();
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="{:.0}" font-family="sans-serif" font-size="12" fill="#333">{}</text>"##,
                x + 18.0,
                row_y + 4.0,
                text
            )
            .unwrap();
        }
    }
}
