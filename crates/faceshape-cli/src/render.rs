//! Human-readable output.

use faceshape_core::{ClassificationResult, ShapeArchetype, StyleTips};

const BAR_WIDTH: usize = 20;

pub fn classification(result: &ClassificationResult) -> String {
    let mut out = String::new();
    let primary = result.primary_shape;
    out.push_str(&format!(
        "Face shape: {primary} ({}%)\n",
        result.scores.percent(primary)
    ));
    out.push_str(&format!("  {}\n\n", primary.description()));

    for (shape, score) in result.scores.ranked() {
        let filled = ((score * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        out.push_str(&format!(
            "  {:<8} {:>3}%  {}{}\n",
            shape.label(),
            result.scores.percent(shape),
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled)
        ));
    }
    out.push('\n');
    out.push_str(&tips(&result.tips));
    out
}

pub fn tips(tips: &StyleTips) -> String {
    let mut out = String::new();
    for (heading, list) in [
        ("Hairstyles", &tips.hairstyles),
        ("Glasses", &tips.glasses),
        ("Makeup", &tips.makeup),
    ] {
        out.push_str(&format!("{heading}:\n"));
        for tip in list {
            out.push_str(&format!("  - {tip}\n"));
        }
    }
    out
}

pub fn shapes() -> String {
    ShapeArchetype::ALL
        .iter()
        .map(|shape| format!("{:<8} {}\n", shape.label(), shape.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceshape_core::{classify_measurements, FaceMeasurements};

    #[test]
    fn test_classification_lists_every_shape() {
        let result = classify_measurements(&FaceMeasurements {
            face_length: 1.5,
            forehead_width: 0.9,
            cheekbone_width: 1.0,
            jaw_width: 0.95,
            jaw_angle: 0.4 * std::f64::consts::PI,
            chin_shape: 0.5,
        });
        let text = classification(&result);
        assert!(text.starts_with("Face shape: Oval"));
        for shape in ShapeArchetype::ALL {
            assert!(text.contains(shape.label()), "{shape} missing");
        }
        assert!(text.contains("Hairstyles:"));
    }

    #[test]
    fn test_classification_layout() {
        let result = classify_measurements(&FaceMeasurements {
            face_length: 1.5,
            forehead_width: 0.9,
            cheekbone_width: 1.0,
            jaw_width: 0.95,
            jaw_angle: 0.4 * std::f64::consts::PI,
            chin_shape: 0.5,
        });
        let text = classification(&result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], format!("  {}", ShapeArchetype::Oval.description()));
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("  Oval"));
        assert_eq!(lines[9], "");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_tips_sections() {
        let text = tips(&StyleTips::generic());
        assert_eq!(text.lines().filter(|l| l.ends_with(':')).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("  - ")).count(), 9);
    }

    #[test]
    fn test_shapes_one_line_each() {
        assert_eq!(shapes().lines().count(), ShapeArchetype::ALL.len());
    }
}
