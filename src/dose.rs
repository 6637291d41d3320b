//! Dose Formulas
//!
//! Pure weight-to-dose math for the meds the form tracks. Inputs come
//! from the raw weight text; anything unparseable simply yields no
//! dose rather than an error, since the user may still be typing.

use crate::models::Topical;

/// Panacur suspension, ml per lb per day
const PANACUR_ML_PER_LB: f64 = 0.23;
/// Ponazuril suspension, ml per lb per day
const PONAZURIL_ML_PER_LB: f64 = 0.14;

/// Parse the weight field leniently ("3." counts as 3.0)
pub fn parse_weight(text: &str) -> Option<f64> {
    let trimmed = text.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|w| *w > 0.0)
}

/// Topical dose label for the given product and weight
pub fn topical_dose(topical: Topical, weight_lb: f64) -> Option<String> {
    match topical {
        Topical::Revolution => {
            // 60 mg/ml kitten strength, 6 mg/kg
            let ml = weight_lb * 0.045;
            Some(format!("{:.2} ml Revolution", ml))
        }
        Topical::Advantage => {
            let label = if weight_lb < 5.0 {
                "0.23 ml Advantage (small cat)"
            } else if weight_lb < 9.0 {
                "0.4 ml Advantage (large cat)"
            } else {
                "0.8 ml Advantage (XL cat)"
            };
            Some(label.to_string())
        }
        Topical::None => None,
    }
}

/// Panacur ml per daily dose
pub fn panacur_ml(weight_lb: f64) -> f64 {
    weight_lb * PANACUR_ML_PER_LB
}

/// Ponazuril ml per daily dose
pub fn ponazuril_ml(weight_lb: f64) -> f64 {
    weight_lb * PONAZURIL_ML_PER_LB
}

/// Drontal fraction of a tablet, banded by weight
pub fn drontal_tablets(weight_lb: f64) -> &'static str {
    if weight_lb < 1.5 {
        "too small"
    } else if weight_lb < 4.0 {
        "1/4 tablet"
    } else if weight_lb < 9.0 {
        "1/2 tablet"
    } else {
        "1 tablet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_parsing_is_lenient() {
        assert_eq!(parse_weight("3.5"), Some(3.5));
        assert_eq!(parse_weight("3."), Some(3.0));
        assert_eq!(parse_weight(" 2 "), Some(2.0));
        assert_eq!(parse_weight(""), None);
        assert_eq!(parse_weight("."), None);
        assert_eq!(parse_weight("abc"), None);
        assert_eq!(parse_weight("0"), None);
        assert_eq!(parse_weight("-1"), None);
    }

    #[test]
    fn panacur_scales_linearly() {
        assert!((panacur_ml(2.0) - 0.46).abs() < 1e-9);
    }

    #[test]
    fn drontal_bands() {
        assert_eq!(drontal_tablets(1.0), "too small");
        assert_eq!(drontal_tablets(2.0), "1/4 tablet");
        assert_eq!(drontal_tablets(5.0), "1/2 tablet");
        assert_eq!(drontal_tablets(10.0), "1 tablet");
    }

    #[test]
    fn no_topical_means_no_dose() {
        assert_eq!(topical_dose(Topical::None, 3.0), None);
        assert!(topical_dose(Topical::Revolution, 3.0).unwrap().starts_with("0.14"));
    }
}
