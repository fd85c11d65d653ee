// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An SVG-emitting [`Renderer`] for `vizir_axis`.
//!
//! [`SvgRenderer`] keeps the drawing state an axis sets (font, stroke) and turns each
//! `stroke` and `text` call into an SVG element, in call order. Text is measured with any
//! [`TextMeasurer`], so tick estimation and output agree on label widths.

use std::fmt::Write as _;

use kurbo::{BezPath, Point, Size};
use peniko::Color;
use peniko::color::palette::css;
use vizir_axis::{DEFAULT_DPI, Renderer, points_to_pixels};
use vizir_text::{TextMeasurer, TextStyle};

/// A stateful renderer that records draw calls as SVG elements.
#[derive(Debug)]
pub struct SvgRenderer<M> {
    measurer: M,
    size: Size,
    dpi: f64,
    font_size: f64,
    font_color: Color,
    stroke_color: Color,
    stroke_width: f64,
    path: BezPath,
    body: String,
}

impl<M: TextMeasurer> SvgRenderer<M> {
    /// Creates a renderer for a canvas of `size` pixels at [`DEFAULT_DPI`].
    pub fn new(measurer: M, size: Size) -> Self {
        Self {
            measurer,
            size,
            dpi: DEFAULT_DPI,
            font_size: 10.0,
            font_color: css::BLACK,
            stroke_color: css::BLACK,
            stroke_width: 1.0,
            path: BezPath::new(),
            body: String::new(),
        }
    }

    /// Sets the output resolution.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Returns the canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the elements drawn so far, one per line.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Wraps the drawn elements in an `<svg>` document.
    pub fn finish(&self) -> String {
        let Size { width, height } = self.size;
        let mut out = String::with_capacity(self.body.len() + 160);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl<M: TextMeasurer> Renderer for SvgRenderer<M> {
    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn measure_text(&self, text: &str) -> f64 {
        self.measurer
            .measure(text, &TextStyle::new(self.font_size))
            .width
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        self.path.line_to(p);
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        if path.elements().is_empty() {
            return;
        }
        let _ = write!(self.body, r#"<path d="{}" fill="none""#, path.to_svg());
        write_paint_attr(&mut self.body, "stroke", self.stroke_color);
        let _ = writeln!(self.body, r#" stroke-width="{}"/>"#, self.stroke_width);
    }

    fn text(&mut self, text: &str, pos: Point) {
        let font_px = points_to_pixels(self.dpi, self.font_size);
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}""#,
            pos.x, pos.y, font_px
        );
        write_paint_attr(&mut self.body, "fill", self.font_color);
        let _ = writeln!(self.body, ">{}</text>", escape_xml(text));
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use vizir_axis::{Range, Style, Tick, XAxis};
    use vizir_text::MonospaceMeasurer;

    use super::*;

    fn renderer() -> SvgRenderer<MonospaceMeasurer> {
        SvgRenderer::new(MonospaceMeasurer::new(0.5), Size::new(200.0, 100.0)).with_dpi(72.0)
    }

    #[test]
    fn measure_uses_current_font_size() {
        let mut r = renderer();
        r.set_font_size(10.0);
        assert_eq!(r.measure_text("abcd"), 20.0);
        r.set_font_size(20.0);
        assert_eq!(r.measure_text("abcd"), 40.0);
    }

    #[test]
    fn stroke_emits_one_path_and_clears_it() {
        let mut r = renderer();
        r.set_stroke_color(css::RED);
        r.set_stroke_width(2.0);
        r.move_to(Point::new(0.0, 50.0));
        r.line_to(Point::new(100.0, 50.0));
        r.stroke();
        r.stroke();
        assert_eq!(
            r.body(),
            "<path d=\"M0,50 L100,50\" fill=\"none\" stroke=\"#ff0000\" stroke-width=\"2\"/>\n"
        );
    }

    #[test]
    fn text_is_escaped_and_sized_in_pixels() {
        let mut r = renderer().with_dpi(144.0);
        r.set_font_size(10.0);
        r.set_font_color(css::BLACK.with_alpha(0.5));
        r.text("a<b & c", Point::new(1.0, 2.0));
        let body = r.body();
        assert!(body.contains(r#"font-size="20""#), "{body}");
        assert!(body.contains("a&lt;b &amp; c"), "{body}");
        assert!(body.contains(r#"fill-opacity="#), "{body}");
    }

    #[test]
    fn axis_draws_baseline_and_labels() {
        let mut r = renderer();
        let axis = XAxis::new("x").with_style(Style::default().with_font_size(10.0));
        let canvas = Rect::new(0.0, 0.0, 200.0, 60.0);
        let range = Range::new(0.0, 10.0, 200.0).unwrap();

        let ticks = axis.draw(&mut r, canvas, &range);

        // "10.00" is 5 chars * 5pt = 25px, + 20 = 45; ceil(200 / 45) = 5 ticks, step 2.
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, [0.0, 2.0, 4.0, 6.0, 8.0]);

        let svg = r.finish();
        assert!(svg.starts_with("<svg "), "{svg}");
        assert!(svg.contains(r#"d="M0,60 L200,60""#), "{svg}");
        assert_eq!(svg.matches("<text ").count(), 5);
        // Right-anchored: value 2 sits 40px from the right edge.
        assert!(svg.contains(r#"<text x="160" y="80""#), "{svg}");
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn explicit_ticks_are_drawn_sorted() {
        let mut r = renderer();
        let axis = XAxis::new("x").with_ticks([Tick::new(8.0, "late"), Tick::new(2.0, "early")]);
        let canvas = Rect::new(0.0, 0.0, 100.0, 40.0);
        let range = Range::new(0.0, 10.0, 100.0).unwrap();

        axis.draw(&mut r, canvas, &range);

        let body = r.body();
        let early = body.find(">early<").expect("early label");
        let late = body.find(">late<").expect("late label");
        assert!(early < late, "{body}");
    }
}
