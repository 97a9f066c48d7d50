mod session;
mod wizard;

pub use session::{offer_save_session, run_wizard};
pub use wizard::prompt_choice;
