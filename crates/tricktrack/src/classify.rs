//! Template table and gesture classification.

use crate::correlate::correlate;
use crate::data::{Axis, SAMPLES_PER_BLOCK, Window};
use crate::normalize::{Normalized, normalize_window};

/// Maximum number of prepared templates an engine can hold.
pub const MAX_TEMPLATES: usize = 4;

/// Default confidence floor: 0.6 in Q15.
pub const DEFAULT_CONFIDENCE_FLOOR: i32 = 19_661;

/// A reference gesture definition: label plus three `'static` axis tables.
///
/// Definitions are plain read-only data, typically `static` arrays baked
/// into flash; the engine prepares them into normalized [`Template`]s at
/// construction.
#[derive(Clone, Copy, Debug)]
pub struct TemplateDef<const N: usize = SAMPLES_PER_BLOCK> {
    /// Gesture label reported on a match.
    pub label: &'static str,
    /// X-axis reference samples.
    pub x: &'static [i16; N],
    /// Y-axis reference samples.
    pub y: &'static [i16; N],
    /// Z-axis reference samples.
    pub z: &'static [i16; N],
}

impl<const N: usize> TemplateDef<N> {
    /// Creates a template definition.
    pub const fn new(
        label: &'static str,
        x: &'static [i16; N],
        y: &'static [i16; N],
        z: &'static [i16; N],
    ) -> Self {
        Self { label, x, y, z }
    }
}

/// A prepared template: the definition's window in normalized form.
#[derive(Clone, Debug)]
pub struct Template<const N: usize = SAMPLES_PER_BLOCK> {
    label: &'static str,
    normalized: Normalized<N>,
}

impl<const N: usize> Template<N> {
    /// Normalizes a definition into its prepared form.
    pub fn prepare(def: &TemplateDef<N>) -> Self {
        let mut window: Window<N> = Window::new();
        window.x = *def.x;
        window.y = *def.y;
        window.z = *def.z;
        Self {
            label: def.label,
            normalized: normalize_window(&window),
        }
    }

    /// Gesture label reported on a match.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Aggregate coefficient against a normalized capture.
    ///
    /// Unweighted mean over the axes where both sides have usable
    /// variance. `None` when no axis is comparable: an all-flat pairing
    /// carries no evidence either way and is excluded from the decision.
    pub fn aggregate(&self, capture: &Normalized<N>) -> Option<i32> {
        let mut sum: i64 = 0;
        let mut count: i64 = 0;
        for axis in Axis::ALL {
            let index = axis.index();
            if !(capture.live[index] && self.normalized.live[index]) {
                continue;
            }
            if let Some(coeff) = correlate(
                capture.window.axis(axis),
                self.normalized.window.axis(axis),
            ) {
                sum += coeff as i64;
                count += 1;
            }
        }
        if count == 0 {
            return None;
        }
        Some((sum / count) as i32)
    }
}

/// Outcome of classifying one capture against the template table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassificationResult {
    /// Matched gesture label; `None` when no template cleared the floor.
    pub label: Option<&'static str>,
    /// Winning aggregate coefficient (Q15). For an unclassified capture
    /// this is the best aggregate seen, or 0 if nothing was comparable.
    pub confidence: i32,
}

impl ClassificationResult {
    /// Whether a template cleared the confidence floor.
    pub const fn is_match(&self) -> bool {
        self.label.is_some()
    }
}

/// Selects the best template for a normalized capture.
///
/// The winner is the maximum aggregate coefficient; ties keep the earlier
/// table entry. A winner below `confidence_floor` reports as unclassified
/// rather than forcing a match.
pub fn classify<const N: usize>(
    capture: &Normalized<N>,
    templates: &[Template<N>],
    confidence_floor: i32,
) -> ClassificationResult {
    let mut best: Option<(&'static str, i32)> = None;
    for template in templates {
        let Some(aggregate) = template.aggregate(capture) else {
            continue;
        };
        let beats = match best {
            Some((_, value)) => aggregate > value,
            None => true,
        };
        if beats {
            best = Some((template.label(), aggregate));
        }
    }
    match best {
        Some((label, confidence)) if confidence >= confidence_floor => ClassificationResult {
            label: Some(label),
            confidence,
        },
        Some((_, confidence)) => ClassificationResult {
            label: None,
            confidence,
        },
        None => ClassificationResult {
            label: None,
            confidence: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlate::COEFF_ONE;

    static RISE: [i16; 8] = [5_000, 3_000, 1_000, -500, -1_500, -2_500, -1_000, 400];
    static WOBBLE: [i16; 8] = [-2_000, 2_000, -2_000, 2_000, -2_000, 2_000, -2_000, 2_000];
    static FLAT: [i16; 8] = [0; 8];

    fn capture_from(x: &[i16; 8], y: &[i16; 8], z: &[i16; 8]) -> Normalized<8> {
        let mut window: Window<8> = Window::new();
        window.x = *x;
        window.y = *y;
        window.z = *z;
        normalize_window(&window)
    }

    #[test]
    fn identical_capture_matches_its_template() {
        let templates = [
            Template::prepare(&TemplateDef::new("ollie", &RISE, &WOBBLE, &RISE)),
            Template::prepare(&TemplateDef::new("shuvit", &WOBBLE, &RISE, &WOBBLE)),
        ];
        let capture = capture_from(&RISE, &WOBBLE, &RISE);
        let result = classify(&capture, &templates, DEFAULT_CONFIDENCE_FLOOR);
        assert_eq!(result.label, Some("ollie"));
        assert_eq!(result.confidence, COEFF_ONE);
    }

    #[test]
    fn all_zero_capture_is_unclassified() {
        let templates = [Template::prepare(&TemplateDef::new(
            "ollie", &RISE, &WOBBLE, &RISE,
        ))];
        let capture = capture_from(&FLAT, &FLAT, &FLAT);
        let result = classify(&capture, &templates, DEFAULT_CONFIDENCE_FLOOR);
        assert_eq!(result.label, None);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn anti_correlated_capture_stays_below_the_floor() {
        let templates = [Template::prepare(&TemplateDef::new(
            "ollie", &RISE, &WOBBLE, &RISE,
        ))];
        let inverted_rise: [i16; 8] = RISE.map(|v| -v);
        let inverted_wobble: [i16; 8] = WOBBLE.map(|v| -v);
        let capture = capture_from(&inverted_rise, &inverted_wobble, &inverted_rise);
        let result = classify(&capture, &templates, DEFAULT_CONFIDENCE_FLOOR);
        assert_eq!(result.label, None);
        assert_eq!(result.confidence, -COEFF_ONE);
    }

    #[test]
    fn degenerate_template_axis_is_excluded_from_the_mean() {
        // Template has a flat Y axis; the capture's Y must not count.
        let templates = [Template::prepare(&TemplateDef::new(
            "ollie", &RISE, &FLAT, &RISE,
        ))];
        let capture = capture_from(&RISE, &WOBBLE, &RISE);
        let result = classify(&capture, &templates, DEFAULT_CONFIDENCE_FLOOR);
        assert_eq!(result.label, Some("ollie"));
        assert_eq!(result.confidence, COEFF_ONE);
    }

    #[test]
    fn fully_degenerate_template_is_skipped() {
        let templates = [
            Template::prepare(&TemplateDef::new("dead", &FLAT, &FLAT, &FLAT)),
            Template::prepare(&TemplateDef::new("ollie", &RISE, &WOBBLE, &RISE)),
        ];
        let capture = capture_from(&RISE, &WOBBLE, &RISE);
        let result = classify(&capture, &templates, DEFAULT_CONFIDENCE_FLOOR);
        assert_eq!(result.label, Some("ollie"));
    }

    #[test]
    fn ties_keep_table_order() {
        let templates = [
            Template::prepare(&TemplateDef::new("first", &RISE, &WOBBLE, &RISE)),
            Template::prepare(&TemplateDef::new("second", &RISE, &WOBBLE, &RISE)),
        ];
        let capture = capture_from(&RISE, &WOBBLE, &RISE);
        let result = classify(&capture, &templates, DEFAULT_CONFIDENCE_FLOOR);
        assert_eq!(result.label, Some("first"));
    }

    #[test]
    fn empty_table_reports_unclassified() {
        let templates: [Template<8>; 0] = [];
        let capture = capture_from(&RISE, &WOBBLE, &RISE);
        let result = classify(&capture, &templates, DEFAULT_CONFIDENCE_FLOOR);
        assert_eq!(result.label, None);
        assert_eq!(result.confidence, 0);
    }
}
