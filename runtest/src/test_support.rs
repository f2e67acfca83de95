//! Test-only shell double that records command lines.

use std::cell::RefCell;

use anyhow::Result;

use crate::io::process::{CapturedOutput, Shell};

/// One recorded shell invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedCall {
    CheckOutput(String),
    Run(String),
}

impl ScriptedCall {
    pub fn into_line(self) -> String {
        match self {
            ScriptedCall::CheckOutput(line) | ScriptedCall::Run(line) => line,
        }
    }
}

/// Shell that returns fixed exit codes and records every command line.
pub struct ScriptedShell {
    compile_code: Option<i32>,
    compile_stdout: Vec<u8>,
    run_code: Option<i32>,
    calls: RefCell<Vec<ScriptedCall>>,
}

impl ScriptedShell {
    pub fn new(compile_code: Option<i32>, compile_stdout: &[u8], run_code: Option<i32>) -> Self {
        Self {
            compile_code,
            compile_stdout: compile_stdout.to_vec(),
            run_code,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Both steps exit zero.
    pub fn passing() -> Self {
        Self::new(Some(0), b"", Some(0))
    }

    pub fn calls(&self) -> Vec<ScriptedCall> {
        self.calls.borrow().clone()
    }
}

impl Shell for ScriptedShell {
    fn check_output(&self, command_line: &str) -> Result<CapturedOutput> {
        self.calls
            .borrow_mut()
            .push(ScriptedCall::CheckOutput(command_line.to_string()));
        Ok(CapturedOutput {
            code: self.compile_code,
            stdout: self.compile_stdout.clone(),
        })
    }

    fn run(&self, command_line: &str) -> Result<Option<i32>> {
        self.calls
            .borrow_mut()
            .push(ScriptedCall::Run(command_line.to_string()));
        Ok(self.run_code)
    }
}
