use crate::ui::cli::drivers::{PromptDriver, check_range};
use anyhow::{Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Select(usize),
    Bool(bool),
    Text(String),
    U64(u64),
    F64(f64),
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

/// A [`PromptDriver`] that replays canned answers in order.
///
/// Like a real prompt, an out-of-range number is rejected and the next answer
/// is taken for the same question. Running out of answers is an error.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    /// Titles of every prompt shown so far, repeats included.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_select(&self, title: &str, _help: Option<&str>, options: &[String]) -> Result<usize> {
        match self.next(title)? {
            Answer::Select(i) if i < options.len() => Ok(i),
            other => bail!("'{title}' expected a selection among {options:?}, got {other:?}"),
        }
    }

    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Bool(b) => Ok(b),
            other => bail!("'{title}' expected a bool, got {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            other => bail!("'{title}' expected text, got {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        _default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        loop {
            match self.next(title)? {
                Answer::U64(n) if check_range(n, min, max).is_ok() => return Ok(n),
                Answer::U64(_) => continue,
                other => bail!("'{title}' expected an integer, got {other:?}"),
            }
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        _default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        loop {
            match self.next(title)? {
                Answer::F64(x) if check_range(x, min, max).is_ok() => return Ok(x),
                Answer::F64(_) => continue,
                other => bail!("'{title}' expected a number, got {other:?}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_and_records_titles() {
        let d = ScriptedDriver::new([Answer::Bool(true), "hello".into()]);
        assert!(d.ask_bool("first", "", false).unwrap());
        assert_eq!(d.ask_string("second", "", "").unwrap(), "hello");
        assert_eq!(d.asked(), vec!["first", "second"]);
        assert_eq!(d.remaining(), 0);
        assert!(d.ask_bool("third", "", false).is_err());
    }

    #[test]
    fn out_of_range_numbers_are_asked_again() {
        let d = ScriptedDriver::new([Answer::U64(11), Answer::U64(4)]);
        assert_eq!(d.ask_u64("Period", "", 3, Some(0), Some(10)).unwrap(), 4);
        assert_eq!(d.asked(), vec!["Period", "Period"]);
    }

    #[test]
    fn wrong_answer_type_is_an_error() {
        let d = ScriptedDriver::new([Answer::Select(0)]);
        assert!(d.ask_f64("alpha", "", 0.5, None, None).is_err());
    }

    #[test]
    fn selection_must_be_in_bounds() {
        let options = vec!["a".to_string()];
        let d = ScriptedDriver::new([Answer::Select(1)]);
        assert!(d.ask_select("pick", None, &options).is_err());
    }
}
