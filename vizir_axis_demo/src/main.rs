// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout demos for `vizir_axis`.
//!
//! Writes one SVG per demo into the directory given as the first argument (default: the
//! current directory). Set `RUST_LOG=vizir_axis=trace` to see tick estimation.

use std::error::Error;
use std::path::{Path, PathBuf};

use kurbo::{Rect, Size};
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;
use vizir_axis::{Range, Style, Tick, XAxis, float_formatter};
use vizir_axis_svg::SvgRenderer;
use vizir_text::TextMeasurer;

const CANVAS: Size = Size::new(480.0, 160.0);
const PLOT: Rect = Rect::new(20.0, 20.0, 460.0, 110.0);

struct Demo {
    name: &'static str,
    axis: XAxis,
    data: (f64, f64),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    let demos = [
        Demo {
            name: "default",
            axis: XAxis::new("value"),
            data: (0.0, 100.0),
        },
        Demo {
            name: "styled",
            axis: XAxis::new("value").with_style(
                Style::default()
                    .with_stroke_color(css::STEEL_BLUE)
                    .with_stroke_width(2.0)
                    .with_font_color(css::DARK_SLATE_GRAY)
                    .with_font_size(8.0),
            ),
            data: (-1.0, 1.0),
        },
        Demo {
            name: "wide_labels",
            axis: XAxis::new("revenue")
                .with_value_formatter(|v| format!("${v:.0}k"))
                .with_range(0.0, 250_000.0),
            data: (0.0, 1.0),
        },
        Demo {
            name: "integers",
            axis: XAxis {
                value_formatter: Some(float_formatter(0)),
                ..XAxis::new("count")
            },
            data: (0.0, 12.0),
        },
        Demo {
            name: "explicit",
            axis: XAxis::new("quarter").with_ticks([
                Tick::new(3.0, "Q4"),
                Tick::new(0.0, "Q1"),
                Tick::new(2.0, "Q3"),
                Tick::new(1.0, "Q2"),
            ]),
            data: (0.0, 4.0),
        },
        Demo {
            name: "empty_range",
            axis: XAxis::new("constant"),
            data: (7.0, 7.0),
        },
    ];

    for demo in &demos {
        let path = render_demo(demo, &out_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn render_demo(demo: &Demo, out_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let data = Range::new(demo.data.0, demo.data.1, PLOT.width())?;
    let range = demo.axis.resolve_range(data);

    let mut renderer = SvgRenderer::new(demo_measurer(), CANVAS);
    let ticks = demo.axis.draw(&mut renderer, PLOT, &range);
    tracing::info!(demo = demo.name, ticks = ticks.len(), "rendered axis");

    let path = out_dir.join(format!("vizir_axis_{}.svg", demo.name));
    std::fs::write(&path, renderer.finish())?;
    Ok(path)
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(vizir_text_parley::ParleyMeasurer::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(vizir_text::MonospaceMeasurer::default())
    }
}
