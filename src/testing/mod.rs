pub mod stubs;

pub use stubs::{Answer, ScriptedDriver};
