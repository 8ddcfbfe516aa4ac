use anyhow::Result;
use assert_cmd::Command;
use assert_fs::TempDir;

pub mod prelude {
    pub use super::{Env, Stdout};
    pub use anyhow::Result;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;
    pub use predicates::str;
}

pub struct Env {
    pub conf_dir: TempDir,
    pub data_dir: TempDir,
}

#[allow(unused_macros)]
macro_rules! raw_cmd {
    ($env:ident, $($tail:tt)*) => {
        raw_cmd!(@args $env.command()?, $($tail)*)
    };
    (@args $cmd:expr, ) => {
        $cmd
    };
    (@args $cmd:expr, --$arg:tt $($tail:tt)*) => {
        raw_cmd!(@args $cmd.arg(concat!("--", stringify!($arg))), $($tail)*)
    };
    (@args $cmd:expr, $arg:literal $($tail:tt)*) => {
        raw_cmd!(@args $cmd.arg(format!("{}", $arg)), $($tail)*)
    };
    (@args $cmd:expr, $arg:tt $($tail:tt)*) => {
        raw_cmd!(@args $cmd.arg(stringify!($arg)), $($tail)*)
    };
}

#[allow(unused_macros)]
macro_rules! cmd {
    ($env:ident, $($tail:tt)*) => {
        raw_cmd!($env, $($tail)*).assert()
    };
}

impl Env {
    pub fn new() -> Result<Self> {
        Ok(Self {
            conf_dir: TempDir::new()?,
            data_dir: TempDir::new()?,
        })
    }

    /// Environment where `name` is the default user
    #[allow(dead_code)]
    pub fn with_user(name: &str) -> Result<Self> {
        let env = Self::new()?;
        env.command()?
            .args(["user", "default", "-U", name])
            .assert()
            .success();
        Ok(env)
    }

    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("meowletctl")?;
        cmd.arg("-C")
            .arg(self.conf_dir.path())
            .arg("-D")
            .arg(self.data_dir.path());
        Ok(cmd)
    }
}

pub trait Stdout {
    fn stdout_str(&self) -> String;
}

impl Stdout for assert_cmd::assert::Assert {
    fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.get_output().stdout).into_owned()
    }
}

/// Panics unless every pattern is found in `output`, in this order
#[allow(dead_code)]
pub fn assert_in_order(output: &str, patterns: &[&str]) {
    let mut start = 0;
    for pattern in patterns {
        match output[start..].find(pattern) {
            Some(index) => start += index + pattern.len(),
            None => panic!("Unable to find {} in {}", pattern, &output[start..]),
        }
    }
}
