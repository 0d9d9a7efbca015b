//! Text rendering of poll results.

use crate::model::poll::{PollOption, PollResult};

/// Number of cells in a result bar.
const BAR_CELLS: u64 = 10;

/// Scales `count` onto the bar.
///
/// Counts are drawn as-is until the largest count exceeds the bar width, then scaled so
/// the largest fills it. A non-zero count always gets at least one cell.
fn bar_length(count: u64, max: u64) -> u64 {
    let scaled = if max > BAR_CELLS {
        count * BAR_CELLS / max
    } else {
        count
    };

    if count > 0 {
        scaled.max(1)
    } else {
        scaled
    }
}

fn bar(count: u64, max: u64) -> String {
    let filled = bar_length(count, max);

    (0..BAR_CELLS)
        .map(|cell| if cell < filled { '\u{2588}' } else { '\u{2591}' })
        .collect()
}

/// Renders one line per option under the poll description.
///
/// Options without votes show a count of zero. Single digit indices are padded when the
/// poll has more than nine options so the bars line up.
pub fn render_results(description: &str, options: &[PollOption], results: &[PollResult]) -> Vec<String> {
    let max = results.iter().map(|r| r.count).max().unwrap_or(0);
    let pad = options.len() > 9;

    let mut lines = Vec::with_capacity(options.len() + 1);
    lines.push(description.to_string());

    for option in options {
        let count = results
            .iter()
            .find(|r| r.position == option.position)
            .map(|r| r.count)
            .unwrap_or(0);
        let buf = if pad && option.position < 10 { "_" } else { "" };

        lines.push(format!(
            "`{}{}. `{} {} ({} votes)",
            buf,
            option.position,
            bar(count, max),
            option.option,
            count
        ));
    }

    lines
}
