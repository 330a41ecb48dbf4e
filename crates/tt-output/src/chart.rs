//! Terminal bar chart.

use std::fmt::Write;

use tt_stats::HistogramAccumulator;

/// Render one line per bin: the bin value, a bar of `#` scaled so the largest
/// bin is `width` characters long, and the raw count.
///
/// ```text
///   37.0 |                                          0
///   38.0 |####                                    212
/// ```
pub fn render_bars(hist: &HistogramAccumulator, width: usize) -> String {
    let max = hist.max_bin();
    let mut out = String::with_capacity(hist.bin_count() * (width + 24));

    for (i, &count) in hist.bins().iter().enumerate() {
        let len = if max == 0 {
            0
        } else {
            (count as u128 * width as u128 / max as u128) as usize
        };
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:>8.1} |{:<width$} {}",
            hist.bin_value(i),
            "#".repeat(len),
            count,
        );
    }
    out
}
