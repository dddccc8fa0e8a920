//! In-process fixtures: a recording launcher and scripted confirmations.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::io::{self, Write};

use concher_core::{Location, Registry};
use concher_launcher::{LaunchError, Launcher};

use crate::console::{is_affirmative, Confirm};
use crate::interpreter::{Interpreter, Outcome};

/// Records every launch instead of touching the host. Names listed in
/// `failing` return a spawn error.
#[derive(Default)]
pub struct RecordingLauncher {
    launched: RefCell<Vec<String>>,
    failing: HashSet<String>,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, location: &Location) -> Result<(), LaunchError> {
        if self.failing.contains(&location.name.0) {
            return Err(LaunchError::Spawn {
                name: location.name.0.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "command not found"),
            });
        }
        self.launched.borrow_mut().push(location.name.0.clone());
        Ok(())
    }
}

/// Answers confirmations from a queue; an exhausted queue declines.
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, _out: &mut dyn Write, question: &str) -> io::Result<bool> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().is_some_and(|a| is_affirmative(&a)))
    }
}

pub struct Harness {
    pub registry: Registry,
    pub launcher: RecordingLauncher,
    pub confirm: ScriptedConfirm,
    out: Vec<u8>,
}

impl Harness {
    pub fn new() -> Self {
        colored::control::set_override(false);
        Self {
            registry: Registry::new(),
            launcher: RecordingLauncher::default(),
            confirm: ScriptedConfirm::default(),
            out: Vec::new(),
        }
    }

    pub fn fail_launch_of(&mut self, name: &str) {
        self.launcher.failing.insert(name.to_string());
    }

    pub fn answer(&mut self, answer: &str) {
        self.confirm.answers.push_back(answer.to_string());
    }

    pub fn run(&mut self, line: &str) -> Outcome {
        let mut interpreter = Interpreter {
            registry: &mut self.registry,
            launcher: &self.launcher,
            confirm: &mut self.confirm,
            out: &mut self.out,
        };
        interpreter.execute(line).expect("in-memory output never fails")
    }

    pub fn with_output(&mut self, out: &mut dyn Write, line: &str) -> io::Result<Outcome> {
        Interpreter {
            registry: &mut self.registry,
            launcher: &self.launcher,
            confirm: &mut self.confirm,
            out,
        }
        .execute(line)
    }

    /// Run several lines, then return everything printed since the last take.
    pub fn script(&mut self, lines: &[&str]) -> String {
        for line in lines {
            self.run(line);
        }
        self.take_output()
    }

    pub fn take_output(&mut self) -> String {
        String::from_utf8(std::mem::take(&mut self.out)).expect("utf-8 output")
    }

    pub fn launched(&self) -> Vec<String> {
        self.launcher.launched.borrow().clone()
    }

    pub fn members(&self, context: &str) -> Vec<String> {
        self.registry
            .context(context)
            .map(|c| c.members.iter().map(|m| m.0.clone()).collect())
            .unwrap_or_default()
    }
}
