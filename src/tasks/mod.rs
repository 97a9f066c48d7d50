mod baseline_task;

pub use baseline_task::{BaselineTask, deliver, run_session};
