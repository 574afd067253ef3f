mod canvas;
mod error;
mod fonts;
mod layout;
mod model;
mod report;

pub use canvas::{A4, BufferedCanvas, Color, GraphicsState, Surface};
pub use error::Error;
pub use fonts::Font;
pub use layout::wrap_text;
pub use model::{Amostra, Report};

use std::path::Path;
use std::time::Instant;

/// Render a report to PDF bytes.
pub fn render_report(report: &Report) -> Vec<u8> {
    report::render(report)
}

pub fn render_report_to_file(report: &Report, output: &Path) -> Result<(), Error> {
    let t0 = Instant::now();

    let bytes = report::render(report);
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}

/// Read a JSON report and write the rendered PDF next to it.
pub fn convert_json_to_pdf(input: &Path, output: &Path) -> Result<(), Error> {
    let t0 = Instant::now();

    let report = Report::from_json_file(input)?;
    let t_parse = t0.elapsed();

    let bytes = report::render(&report);
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_render - t_parse).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}
