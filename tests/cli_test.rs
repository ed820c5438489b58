//! Integration tests for the launcher binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("loan-launcher"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("loan installment calculator"))
        .stdout(predicate::str::contains("--no-pause"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("loan-launcher"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_positional_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("loan-launcher"));
    cmd.arg("loan_calculator.py");
    cmd.assert().failure();
    Ok(())
}

#[cfg(unix)]
mod scenarios {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct Sandbox {
        temp: TempDir,
    }

    impl Sandbox {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            fs::create_dir_all(temp.path().join("bin")).unwrap();
            fs::create_dir_all(temp.path().join("work")).unwrap();
            Self { temp }
        }

        fn bin(&self) -> PathBuf {
            self.temp.path().join("bin")
        }

        fn work(&self) -> PathBuf {
            self.temp.path().join("work")
        }

        fn log(&self) -> PathBuf {
            self.temp.path().join("delegate.log")
        }

        fn cwd_log(&self) -> PathBuf {
            self.temp.path().join("delegate_cwd.log")
        }

        /// Fake `python` on the sandbox PATH.
        fn python(&self, version: &str, exit_code: i32) -> PathBuf {
            self.python_at(&self.bin().join("python"), version, exit_code)
        }

        /// Fake `python` answering `--version`. Like the real one it fails
        /// when the script argument does not resolve from its working
        /// directory; otherwise it logs the run and its cwd.
        fn python_at(&self, path: &Path, version: &str, exit_code: i32) -> PathBuf {
            let body = format!(
                "#!/bin/sh\n\
                 if [ \"$1\" = \"--version\" ]; then echo \"Python {}\"; exit 0; fi\n\
                 if [ ! -f \"$1\" ]; then echo \"python: can't open file '$1'\" >&2; exit 2; fi\n\
                 echo \"$*\" >> '{}'\n\
                 pwd >> '{}'\n\
                 exit {}\n",
                version,
                self.log().display(),
                self.cwd_log().display(),
                exit_code
            );
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
            path.to_path_buf()
        }

        fn script(&self) -> PathBuf {
            self.script_in(&self.work())
        }

        fn script_in(&self, dir: &Path) -> PathBuf {
            fs::create_dir_all(dir).unwrap();
            let path = dir.join("loan_calculator.py");
            fs::write(&path, "print('ok')\n").unwrap();
            path
        }

        fn delegate_dirs(&self) -> Vec<PathBuf> {
            fs::read_to_string(self.cwd_log())
                .map(|s| s.lines().map(PathBuf::from).collect())
                .unwrap_or_default()
        }

        fn delegate_calls(&self) -> Vec<String> {
            fs::read_to_string(self.log())
                .map(|s| s.lines().map(String::from).collect())
                .unwrap_or_default()
        }

        fn cmd(&self) -> Command {
            let mut cmd = Command::new(cargo_bin("loan-launcher"));
            cmd.current_dir(self.work())
                .env("PATH", self.bin())
                .env_remove("RUST_LOG")
                .env_remove("LOAN_LAUNCHER_PYTHON")
                .env_remove("LOAN_LAUNCHER_SCRIPT")
                .env_remove("LOAN_LAUNCHER_MIN_PYTHON")
                .env_remove("LOAN_LAUNCHER_PAUSE");
            cmd
        }
    }

    #[test]
    fn interpreter_absent_exits_one() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.script();

        sb.cmd()
            .assert()
            .code(1)
            .stdout(predicate::str::contains("贷款分期金融计算器"))
            .stdout(predicate::str::contains("python.org"))
            .stderr(predicate::str::contains("未找到 Python"))
            .stderr(predicate::str::contains("3.8"))
            .stderr(predicate::str::contains("WARN").not());

        assert!(sb.delegate_calls().is_empty());
        Ok(())
    }

    #[test]
    fn interpreter_present_runs_script_once() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 0);
        sb.script();

        sb.cmd()
            .assert()
            .success()
            .stdout(predicate::str::contains("正在启动"));

        let calls = sb.delegate_calls();
        assert_eq!(calls.len(), 1);
        assert!(Path::new(&calls[0]).ends_with("loan_calculator.py"));
        Ok(())
    }

    #[test]
    fn missing_script_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 0);

        sb.cmd()
            .assert()
            .code(1)
            .stderr(predicate::str::contains("运行时错误"))
            .stderr(predicate::str::contains("loan_calculator.py"));

        assert!(sb.delegate_calls().is_empty());
        Ok(())
    }

    #[test]
    fn failing_script_still_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 5);
        sb.script();

        sb.cmd()
            .assert()
            .success()
            .stderr(predicate::str::contains("退出码 5"));

        assert_eq!(sb.delegate_calls().len(), 1);
        Ok(())
    }

    #[test]
    fn propagate_exit_code_flag() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 5);
        sb.script();

        sb.cmd().arg("--propagate-exit-code").assert().code(5);
        Ok(())
    }

    #[test]
    fn old_interpreter_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.7.3", 0);
        sb.script();

        sb.cmd()
            .assert()
            .code(1)
            .stderr(predicate::str::contains("3.7.3"));

        assert!(sb.delegate_calls().is_empty());
        Ok(())
    }

    #[test]
    fn min_python_flag_lowers_requirement() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.7.3", 0);
        sb.script();

        sb.cmd().args(["--min-python", "3.6"]).assert().success();

        assert_eq!(sb.delegate_calls().len(), 1);
        Ok(())
    }

    #[test]
    fn pause_always_waits_for_input() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 0);
        sb.script();

        sb.cmd()
            .args(["--pause", "always"])
            .write_stdin("\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("按任意键退出"));
        Ok(())
    }

    #[test]
    fn auto_pause_skips_without_terminal() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 0);
        sb.script();

        sb.cmd()
            .assert()
            .success()
            .stdout(predicate::str::contains("按任意键退出").not());
        Ok(())
    }

    #[test]
    fn config_file_in_working_directory_is_used() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 0);
        fs::write(sb.work().join("calc.py"), "").unwrap();
        fs::write(
            sb.work().join("launcher.yml"),
            "title: Custom Title\ntarget:\n  script: calc.py\n",
        )
        .unwrap();

        sb.cmd()
            .assert()
            .success()
            .stdout(predicate::str::contains("Custom Title"));

        let calls = sb.delegate_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].ends_with("calc.py"));
        Ok(())
    }

    #[test]
    fn env_python_override_is_used() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        let python = sb.python("3.12.1", 0);
        let renamed = sb.temp.path().join("custom-python");
        fs::rename(&python, &renamed).unwrap();
        sb.script();

        sb.cmd()
            .env("LOAN_LAUNCHER_PYTHON", &renamed)
            .assert()
            .success();

        assert_eq!(sb.delegate_calls().len(), 1);
        Ok(())
    }

    #[test]
    fn relative_config_resolves_script_next_to_it() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 0);
        let app = sb.work().join("app");
        let script = sb.script_in(&app);
        fs::write(app.join("launcher.yml"), "title: From App\n").unwrap();

        sb.cmd()
            .args(["--config", "app/launcher.yml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("From App"))
            .stderr(predicate::str::contains("退出码").not());

        let calls = sb.delegate_calls();
        assert_eq!(calls.len(), 1);
        assert!(Path::new(&calls[0]).is_absolute());
        assert_eq!(fs::canonicalize(&calls[0])?, fs::canonicalize(&script)?);
        assert_eq!(
            fs::canonicalize(&sb.delegate_dirs()[0])?,
            fs::canonicalize(&app)?
        );
        Ok(())
    }

    #[test]
    fn relative_script_flag_runs_in_script_dir() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 7);
        let app = sb.work().join("app");
        sb.script_in(&app);

        // Propagation makes a failed start (exit 2) distinguishable.
        sb.cmd()
            .args(["--script", "app/loan_calculator.py", "--propagate-exit-code"])
            .assert()
            .code(7);

        assert_eq!(sb.delegate_calls().len(), 1);
        assert_eq!(
            fs::canonicalize(&sb.delegate_dirs()[0])?,
            fs::canonicalize(&app)?
        );
        Ok(())
    }

    #[test]
    fn relative_python_flag_survives_cwd_change() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python_at(&sb.work().join("venv/bin/python"), "3.11.4", 0);
        sb.script_in(&sb.work().join("app"));

        sb.cmd()
            .args([
                "--python",
                "venv/bin/python",
                "--script",
                "app/loan_calculator.py",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("已找到 Python 3.11.4"))
            .stderr(predicate::str::contains("运行时错误").not());

        assert_eq!(sb.delegate_calls().len(), 1);
        Ok(())
    }

    #[test]
    fn relative_env_python_is_anchored() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python_at(&sb.work().join("venv/bin/python"), "3.11.4", 0);
        sb.script_in(&sb.work().join("app"));

        sb.cmd()
            .env("LOAN_LAUNCHER_PYTHON", "venv/bin/python")
            .env("LOAN_LAUNCHER_SCRIPT", "app/loan_calculator.py")
            .assert()
            .success();

        assert_eq!(sb.delegate_calls().len(), 1);
        Ok(())
    }

    #[test]
    fn invalid_config_fails_before_probing() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();
        sb.python("3.11.4", 0);
        sb.script();
        fs::write(sb.work().join("launcher.yml"), "pause: sometimes\n").unwrap();

        sb.cmd()
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Error:"));

        assert!(sb.delegate_calls().is_empty());
        Ok(())
    }

    #[test]
    fn explicit_missing_config_fails() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();

        sb.cmd()
            .args(["--config", "nope.yml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Configuration not found"));
        Ok(())
    }

    #[test]
    fn quiet_hides_banner_but_not_errors() -> Result<(), Box<dyn std::error::Error>> {
        let sb = Sandbox::new();

        sb.cmd()
            .arg("--quiet")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("贷款分期金融计算器").not())
            .stderr(predicate::str::contains("未找到 Python"));
        Ok(())
    }
}
