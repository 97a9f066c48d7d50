use crate::estimators::{BaselineEstimator, MovingAverage, SingleExponentialSmoothing};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{
    ExponentialSmoothingParameters, MAX_PERIOD, MethodChoice, MovingAverageParameters,
};
use std::convert::TryFrom;

fn check_period(period: usize) -> Result<usize, BuildError> {
    if period > MAX_PERIOD {
        return Err(BuildError::InvalidParameter(format!(
            "period must be 0..={MAX_PERIOD}"
        )));
    }
    Ok(period)
}

impl TryFrom<MovingAverageParameters> for MovingAverage {
    type Error = BuildError;

    fn try_from(p: MovingAverageParameters) -> Result<Self, Self::Error> {
        Ok(MovingAverage::new(check_period(p.period)?))
    }
}

impl TryFrom<ExponentialSmoothingParameters> for SingleExponentialSmoothing {
    type Error = BuildError;

    fn try_from(p: ExponentialSmoothingParameters) -> Result<Self, Self::Error> {
        let period = check_period(p.period)?;
        if !(0.0..=1.0).contains(&p.smoothing_factor) {
            return Err(BuildError::InvalidParameter(
                "smoothing_factor must be in [0, 1]".into(),
            ));
        }
        Ok(SingleExponentialSmoothing::new(period, p.smoothing_factor))
    }
}

pub fn build_estimator(choice: MethodChoice) -> Result<Box<dyn BaselineEstimator>, BuildError> {
    match choice {
        MethodChoice::MovingAverage(p) => {
            let e = MovingAverage::try_from(p)?;
            Ok(Box::new(e))
        }
        MethodChoice::SingleExponentialSmoothing(p) => {
            let e = SingleExponentialSmoothing::try_from(p)?;
            Ok(Box::new(e))
        }
    }
}
