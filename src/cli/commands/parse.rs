use std::io;

use anyhow::Result;
use serde_json::{Value, json};

use super::super::{
    args::ParseCommand,
    exit_status::ExitStatus,
    report::{format_directive, print_json, print_parse_error_to},
};
use crate::directives::parse_directive;

pub fn parse(cmd: ParseCommand) -> Result<ExitStatus> {
    let mut status = ExitStatus::Success;
    let mut json_results = Vec::new();

    for line in &cmd.lines {
        let result = parse_directive(line);
        if result.is_err() {
            status = ExitStatus::Failure;
        }

        if cmd.json {
            json_results.push(match result {
                Ok(directives) => json!({ "line": line, "directives": directives }),
                Err(err) => json!({
                    "line": line,
                    "error": { "kind": format!("{:?}", err.kind), "message": err.to_string() },
                }),
            });
            continue;
        }

        match result {
            Ok(directives) => {
                for directive in &directives {
                    println!("{}", format_directive(directive));
                }
            }
            Err(err) => print_parse_error_to(&err, &mut io::stderr().lock()),
        }
    }

    if cmd.json {
        print_json(&Value::Array(json_results))?;
    }
    Ok(status)
}
