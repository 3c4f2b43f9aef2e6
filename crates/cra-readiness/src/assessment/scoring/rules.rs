use super::super::domain::Rating;

/// Sub-criteria count at which their average outweighs the main rating.
const FULL_DETAIL_THRESHOLD: usize = 3;

/// Weighted 0-100 score for a question with a positive main rating.
///
/// `rated` holds the sub-criteria ratings above zero. Weighting shifts toward the
/// sub-criteria average as more of them are rated.
pub(crate) fn question_score(main: Rating, rated: &[Rating]) -> u8 {
    let main = f64::from(main.value());

    let fraction = if rated.is_empty() {
        main / 5.0
    } else {
        let average = rated
            .iter()
            .map(|rating| f64::from(rating.value()))
            .sum::<f64>()
            / rated.len() as f64;

        if rated.len() >= FULL_DETAIL_THRESHOLD {
            (main * 0.25 + average * 0.75) / 5.0
        } else {
            (main * 0.4 + average * 0.6) / 5.0
        }
    };

    clamp_percentage(fraction * 100.0)
}

/// Rounded arithmetic mean, `None` for an empty input.
pub(crate) fn rounded_mean<I>(values: I) -> Option<u8>
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), value| {
            (sum + u32::from(value), count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(clamp_percentage(f64::from(sum) / f64::from(count)))
    }
}

/// `part / whole` as a rounded percentage, `None` when `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> Option<u8> {
    if whole == 0 {
        None
    } else {
        Some(clamp_percentage(part as f64 / whole as f64 * 100.0))
    }
}

fn clamp_percentage(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
