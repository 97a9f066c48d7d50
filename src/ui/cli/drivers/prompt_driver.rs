use anyhow::Result;

pub trait PromptDriver {
    /// Asks the user to pick one of `options`; returns its index.
    fn ask_select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize>;
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64>;
    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64>;
}

/// Range check shared by drivers; the message is shown next to the prompt.
///
/// Written as "inside the bounds" so that unordered values (NaN) fail.
pub fn check_range<T: PartialOrd + std::fmt::Display>(
    x: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<(), String> {
    let above = min.as_ref().is_none_or(|lo| x >= *lo);
    let below = max.as_ref().is_none_or(|hi| x <= *hi);
    if above && below {
        return Ok(());
    }
    Err(match (min, max) {
        (Some(lo), Some(hi)) => format!("Must be between {lo} and {hi}"),
        (Some(lo), None) => format!("Must be ≥ {lo}"),
        (None, Some(hi)) => format!("Must be ≤ {hi}"),
        (None, None) => unreachable!(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_messages() {
        assert!(check_range(5u64, Some(0), Some(10)).is_ok());
        assert!(check_range(0u64, Some(0), Some(10)).is_ok());
        assert_eq!(
            check_range(11u64, Some(0), Some(10)).unwrap_err(),
            "Must be between 0 and 10"
        );
        assert_eq!(check_range(-0.5, Some(0.0), None).unwrap_err(), "Must be ≥ 0");
        assert_eq!(check_range(1.5, None, Some(1.0)).unwrap_err(), "Must be ≤ 1");
        assert!(check_range(7, None, None).is_ok());
    }

    #[test]
    fn nan_is_rejected_by_bounds() {
        assert!(check_range(f64::NAN, Some(0.0), Some(1.0)).is_err());
        assert!(check_range(f64::NAN, None, Some(1.0)).is_err());
    }
}
