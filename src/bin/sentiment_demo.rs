//! Batch sentiment demo.
//!
//! Scores a fixed list of example strings, prints an index/text/score
//! table, and renders the compound scores as a bar chart with a zero
//! reference line to `sentiment_chart.png`.
//!
//! ```bash
//! cargo run --bin sentiment-demo
//! ```

use plotters::prelude::*;

use sentimeter::SentimentIntensityAnalyzer;

const CHART_PATH: &str = "sentiment_chart.png";

/// Sample data (you could replace this with real data from a CSV file
/// or an API).
const DATA: &[&str] = &[
    "I love this product! It's amazing!",
    "This is okay, but could be better.",
    "I'm really disappointed with the quality.",
    "The customer service was excellent!",
    "I'm not sure how I feel about this.",
    "Holy shit you are good",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sia = SentimentIntensityAnalyzer::new();

    let mut scores = Vec::with_capacity(DATA.len());
    for text in DATA {
        scores.push(sia.polarity_scores(text)?.compound);
    }

    render_chart(&scores, CHART_PATH)?;

    println!("{:<5} {:<45} {:>9}", "", "text", "sentiment");
    for (i, (text, score)) in DATA.iter().zip(&scores).enumerate() {
        println!("{i:<5} {text:<45} {score:>9.4}");
    }
    println!();
    println!("chart written to {CHART_PATH}");

    Ok(())
}

/// Bar chart of compound scores: one bar per text index, positive bars
/// blue, negative bars red, with a horizontal line at zero. The chart
/// carries no text labels, which keeps the renderer free of any native
/// font stack; the printed table is the labelled view.
fn render_chart(scores: &[f64], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = scores.len() as f64 - 0.5;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(-0.5f64..x_max, -1.0f64..1.0f64)?;

    chart.draw_series(scores.iter().enumerate().map(|(i, &score)| {
        let x = i as f64;
        let style = if score >= 0.0 {
            BLUE.filled()
        } else {
            RED.filled()
        };
        Rectangle::new([(x - 0.35, 0.0), (x + 0.35, score)], style)
    }))?;

    chart.draw_series(LineSeries::new([(-0.5, 0.0), (x_max, 0.0)], &BLACK))?;

    root.present()?;
    Ok(())
}
