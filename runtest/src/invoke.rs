//! Compile a single test source file and hand the resulting class to the runner.

use anyhow::{Result, bail};
use tracing::{info, instrument, warn};

use crate::core::class_name::derive_class_name;
use crate::io::config::RuntestConfig;
use crate::io::process::Shell;

/// What happened once the test compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeOutcome {
    /// Class name handed to the runner (empty if the path had no `org` segment).
    pub class_name: String,
    /// Runner exit code, `None` if it was killed by a signal.
    pub run_code: Option<i32>,
}

impl InvokeOutcome {
    pub fn run_passed(&self) -> bool {
        self.run_code == Some(0)
    }
}

/// `<compiler> -cp <classpath> <test_path>`
pub fn compile_command(config: &RuntestConfig, test_path: &str) -> String {
    format!("{} -cp {} {}", config.compiler, config.classpath, test_path)
}

/// `<launcher> -cp <classpath> <runner_main> <class_name>`
pub fn run_command(config: &RuntestConfig, class_name: &str) -> String {
    format!(
        "{} -cp {} {} {}",
        config.launcher, config.classpath, config.runner_main, class_name
    )
}

/// Compile `test_path`, then run the test class derived from it.
///
/// A nonzero compiler exit is an error and the runner is never started.
/// A failing runner is not: its exit code is reported in the outcome.
#[instrument(skip(shell, config))]
pub fn invoke_test<S: Shell>(
    shell: &S,
    config: &RuntestConfig,
    test_path: &str,
) -> Result<InvokeOutcome> {
    println!("Compiling test");
    let compiled = shell.check_output(&compile_command(config, test_path))?;
    if !compiled.success() {
        let stdout = String::from_utf8_lossy(&compiled.stdout);
        let code = compiled
            .code
            .map_or_else(|| "signal".to_string(), |code| code.to_string());
        if stdout.trim().is_empty() {
            bail!("compile {test_path} failed (exit {code})");
        }
        bail!("compile {test_path} failed (exit {code}):\n{}", stdout.trim_end());
    }

    let class_name = derive_class_name(test_path);
    if class_name.is_empty() {
        warn!(test_path, "no `org` segment in path, running with empty class name");
    }
    info!(%class_name, "compiled");

    println!("Running test");
    let run_code = shell.run(&run_command(config, &class_name))?;
    if run_code != Some(0) {
        warn!(%class_name, exit_code = ?run_code, "test runner exited with failure");
    }

    Ok(InvokeOutcome {
        class_name,
        run_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedCall, ScriptedShell};

    const GEOMETRY_TEST: &str = "test/unit/org/openstreetmap/josm/tools/GeometryTest.java";

    #[test]
    fn compile_failure_skips_run() {
        let shell = ScriptedShell::new(Some(1), b"Foo.java:3: error: ';' expected\n", Some(0));
        let config = RuntestConfig::default();

        let err = invoke_test(&shell, &config, GEOMETRY_TEST).expect_err("compile failure");
        let message = format!("{err:#}");
        assert!(message.contains("exit 1"));
        assert!(message.contains("';' expected"));

        let calls = shell.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], ScriptedCall::CheckOutput(_)));
    }

    #[test]
    fn compile_killed_by_signal_is_failure() {
        let shell = ScriptedShell::new(None, b"", Some(0));
        let err = invoke_test(&shell, &RuntestConfig::default(), GEOMETRY_TEST)
            .expect_err("signal");
        assert!(err.to_string().contains("exit signal"));
        assert_eq!(shell.calls().len(), 1);
    }

    #[test]
    fn compile_success_runs_exactly_once() {
        let shell = ScriptedShell::passing();
        let config = RuntestConfig::default();

        let outcome = invoke_test(&shell, &config, GEOMETRY_TEST).expect("invoke");
        assert_eq!(outcome.class_name, "org.openstreetmap.josm.tools.GeometryTest");
        assert!(outcome.run_passed());

        assert_eq!(
            shell.calls(),
            vec![
                ScriptedCall::CheckOutput(format!(
                    "javac -cp {} {GEOMETRY_TEST}",
                    config.classpath
                )),
                ScriptedCall::Run(format!(
                    "java -cp {} org.junit.runner.JUnitCore org.openstreetmap.josm.tools.GeometryTest",
                    config.classpath
                )),
            ]
        );
    }

    #[test]
    fn classpath_is_identical_in_both_steps() {
        let shell = ScriptedShell::passing();
        let config = RuntestConfig {
            classpath: "a b:'q'/*:$HOME/lib/*".to_string(),
            ..RuntestConfig::default()
        };

        invoke_test(&shell, &config, GEOMETRY_TEST).expect("invoke");
        let lines: Vec<String> = shell
            .calls()
            .into_iter()
            .map(ScriptedCall::into_line)
            .collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            let rest = line.split_once(" -cp ").expect("-cp flag").1;
            assert!(rest.starts_with(&config.classpath));
        }
    }

    #[test]
    fn runner_failure_is_reported_not_raised() {
        let shell = ScriptedShell::new(Some(0), b"", Some(1));
        let outcome =
            invoke_test(&shell, &RuntestConfig::default(), GEOMETRY_TEST).expect("invoke");
        assert_eq!(outcome.run_code, Some(1));
        assert!(!outcome.run_passed());
    }

    #[test]
    fn missing_anchor_still_runs_with_empty_name() {
        let shell = ScriptedShell::passing();
        let config = RuntestConfig::default();

        let outcome = invoke_test(&shell, &config, "test/unit/FooTest.java").expect("invoke");
        assert_eq!(outcome.class_name, "");
        assert_eq!(
            shell.calls()[1],
            ScriptedCall::Run(format!(
                "java -cp {} org.junit.runner.JUnitCore ",
                config.classpath
            ))
        );
    }

    #[test]
    fn commands_use_configured_programs() {
        let config = RuntestConfig {
            classpath: "cp".to_string(),
            compiler: "ecj".to_string(),
            launcher: "jdk/bin/java".to_string(),
            runner_main: "org.junit.platform.console.ConsoleLauncher".to_string(),
        };
        assert_eq!(compile_command(&config, "x/org/A.java"), "ecj -cp cp x/org/A.java");
        assert_eq!(
            run_command(&config, "org.A"),
            "jdk/bin/java -cp cp org.junit.platform.console.ConsoleLauncher org.A"
        );
    }
}
