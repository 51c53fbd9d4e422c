//! Two-figure sample document: a 2-D line plot and a 3-D axis with filled
//! step regions.
//!
//! Run: cargo run --example two_figures [output.tex]

use pgfplots::prelude::*;

fn main() -> pgfplots::Result<()> {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let falling: Vec<f64> = x.iter().rev().copied().collect();

    let mut doc = Document::new();

    let mut fig = Figure::new().with_note("This is a note");
    let mut ax = Axis::with_options(
        Options::new()
            .with("xlabel", "X-Axis")
            .with("ylabel", "Y-Axis")
            .with("xmin", 0)
            .with("xmax", 10)
            .with("ymin", 0)
            .with("ymax", 10),
    );
    ax.add_plot(
        CoordinatePlot::from_data(&x, &x, Channel::Absent)?
            .option("color", "green!50!black")
            .option("const plot mark mid", ""),
    );
    fig.add_axis(ax);
    doc.add_figure(fig);

    let mut fig = Figure::new().with_note("Second note");
    let mut ax = Axis::with_options(
        Options::new()
            .with("xlabel", "X-Axis")
            .with("ylabel", "Y-Axis")
            .with("xmin", 0)
            .with("xmax", 10)
            .with("ymin", 0)
            .with("ymax", 3)
            .with("zmin", 0)
            .with("zmax", 10)
            .flag("grid"),
    );
    ax.add_plot(
        StepPlot::from_data(&x, 2.0, &falling)?
            .option("fill", "green")
            .option("opacity", 0.5)
            .flag("no markers"),
    );
    ax.add_plot(
        StepPlot::from_data(&x, 1.0, &x)?
            .option("fill", "blue")
            .option("opacity", 0.5)
            .flag("no markers"),
    );
    ax.add_plot(CoordinatePlot::from_data(&x, &[1.0; 10], x.as_slice())?.flag("only marks"));
    fig.add_axis(ax);
    doc.add_figure(fig);

    match std::env::args().nth(1) {
        Some(path) => doc.write_to_file(path)?,
        None => println!("{doc}"),
    }
    Ok(())
}
