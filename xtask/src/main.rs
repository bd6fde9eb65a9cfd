// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::process::Command as StdCommand;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "x", about = "Development tasks for the cmsketch workspace")]
struct Command {
    #[command(subcommand)]
    sub: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Run format and clippy checks.
    Lint {
        /// Apply fixes instead of only checking.
        #[arg(long)]
        fix: bool,
    },
    /// Run unit, integration and doc tests.
    Test {
        /// Skip doc tests.
        #[arg(long)]
        no_doc: bool,
    },
    /// Build every crate with all targets.
    Build,
}

fn main() -> ExitCode {
    let cmd = Command::parse();
    let result = match cmd.sub {
        SubCommand::Lint { fix } => run_lint(fix),
        SubCommand::Test { no_doc } => run_test(no_doc),
        SubCommand::Build => run_cargo(&["build", "--workspace", "--all-targets"]),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run_lint(fix: bool) -> Result<(), String> {
    if fix {
        run_cargo(&["fmt", "--all"])?;
        run_cargo(&[
            "clippy",
            "--workspace",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--allow-staged",
        ])
    } else {
        run_cargo(&["fmt", "--all", "--check"])?;
        run_cargo(&[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ])
    }
}

fn run_test(no_doc: bool) -> Result<(), String> {
    run_cargo(&["test", "--workspace", "--all-targets"])?;
    if !no_doc {
        run_cargo(&["test", "--workspace", "--doc"])?;
    }
    Ok(())
}

fn run_cargo(args: &[&str]) -> Result<(), String> {
    let cargo = which::which("cargo").map_err(|err| format!("cannot find cargo: {err}"))?;
    let status = StdCommand::new(&cargo)
        .args(args)
        .status()
        .map_err(|err| format!("failed to run {}: {err}", cargo.display()))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("cargo {} failed with {status}", args.join(" ")))
    }
}
