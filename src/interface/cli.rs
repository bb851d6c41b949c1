use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::infrastructure::schema_validator::validate_routes_file;
use crate::infrastructure::serde_json_adapter::{
    read_routes_file, read_routes_value, write_report_file,
};
use crate::usecase::analyze::analyze_routes;
use crate::usecase::event::AppEvent;
use crate::usecase::sample::sample_routes;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::RoutesOptimize {
            input,
            emit_events,
            report,
        } => {
            if let (Some(input), Some(report)) = (input.as_deref(), report.as_deref()) {
                if is_same_file(input, report) {
                    return Err(anyhow!(
                        "refusing to overwrite input with report: {input}"
                    ));
                }
            }

            let routes = match input.as_deref() {
                Some(path) => read_routes_file(path)
                    .await
                    .with_context(|| format!("reading routes JSON: {path}"))?
                    .into_pairs(),
                None => sample_routes(),
            };

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let scc = KosarajuSccDetector;
            let (out, stats) = analyze_routes(routes, &scc, Some(tx)).await?;

            if let Some(path) = report.as_deref() {
                write_report_file(path, &out)
                    .await
                    .with_context(|| format!("writing report JSON: {path}"))?;
            }

            if let Some(handle) = printer {
                handle.await.ok();
            }

            let line = format!(
                "minimum number of routes to be added: {}",
                out.minimum_additional_routes
            );
            // Keep stdout pure NDJSON when events are on.
            if emit_events {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }

            eprintln!(
                "summary: routes={} airports={} components={} cyclic_components={} condensed_edges={} source_components={}",
                stats.routes_seen,
                stats.airports_seen,
                stats.components,
                stats.cyclic_components,
                stats.condensed_edges,
                stats.source_components
            );

            Ok(())
        }

        Cli::RoutesValidate { input } => {
            let value = read_routes_value(&input)
                .await
                .with_context(|| format!("reading routes JSON: {input}"))?;

            validate_routes_file(&value).with_context(|| format!("validating routes: {input}"))?;

            eprintln!("schema validation passed");
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Cli {
    RoutesOptimize {
        input: Option<String>,
        emit_events: bool,
        report: Option<String>,
    },
    RoutesValidate {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> routes optimize [--in/--input <routes.json>] [--emit-events] [--report <report.json>]
        // <bin> routes validate --in/--input <routes.json>
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "routes" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "optimize" => Self::parse_optimize(args),
            "validate" => Self::parse_validate(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_optimize(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut report: Option<String> = None;
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = Some(required_value(args, i, "--in/--input")?);
                }
                "--report" => {
                    i += 1;
                    report = Some(required_value(args, i, "--report")?);
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::RoutesOptimize {
            input,
            emit_events,
            report,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::RoutesValidate { input })
    }
}

fn required_value(args: &[String], i: usize, flag: &str) -> Result<String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))
}

fn usage() -> &'static str {
    "Usage:\n  routes optimize [--in/--input <routes.json>] [--emit-events] [--report <report.json>]\n  routes validate --in/--input <routes.json>\n\nInput:\n  A JSON object with a \"routes\" array of [from, to] pairs or {\"from\", \"to\"} objects.\n  Without --in, the built-in sample network is used.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; the result line and summary go to stderr."
}

fn is_same_file(a: &str, b: &str) -> bool {
    let a = std::fs::canonicalize(a).unwrap_or_else(|_| PathBuf::from(a));
    let b = std::fs::canonicalize(b).unwrap_or_else(|_| PathBuf::from(b));
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_rejects_unknown_arg() {
        let err = Cli::parse(&args(&["bin", "routes", "optimize", "--wat"]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown arg"));
        assert!(err.contains("Usage"));
    }

    #[test]
    fn parse_rejects_unknown_command() {
        let err = Cli::parse(&args(&["bin", "flights", "optimize"]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("Usage"));

        let err = Cli::parse(&args(&["bin", "routes", "shuffle"]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("Usage"));
    }

    #[test]
    fn parse_optimize_defaults_to_sample() {
        let cmd = Cli::parse(&args(&["bin", "routes", "optimize"])).expect("parse");
        match cmd {
            Cli::RoutesOptimize {
                input,
                emit_events,
                report,
            } => {
                assert_eq!(input, None);
                assert!(!emit_events);
                assert_eq!(report, None);
            }
            _ => panic!("expected optimize"),
        }
    }

    #[test]
    fn parse_optimize_with_all_flags() {
        let cmd = Cli::parse(&args(&[
            "bin",
            "routes",
            "optimize",
            "--in",
            "a.json",
            "--report",
            "r.json",
            "--emit-events",
        ]))
        .expect("parse");

        match cmd {
            Cli::RoutesOptimize {
                input,
                emit_events,
                report,
            } => {
                assert_eq!(input.as_deref(), Some("a.json"));
                assert!(emit_events);
                assert_eq!(report.as_deref(), Some("r.json"));
            }
            _ => panic!("expected optimize"),
        }
    }

    #[test]
    fn parse_optimize_requires_flag_values() {
        let err = Cli::parse(&args(&["bin", "routes", "optimize", "--in"]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing value for --in/--input"));
    }

    #[test]
    fn parse_validate_requires_input() {
        let err = Cli::parse(&args(&["bin", "routes", "validate"]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing --in/--input"));

        let cmd = Cli::parse(&args(&["bin", "routes", "validate", "--in", "a.json"]))
            .expect("parse");
        match cmd {
            Cli::RoutesValidate { input } => assert_eq!(input, "a.json"),
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn parse_help_returns_error_with_usage() {
        let err = Cli::parse(&args(&["bin", "routes", "optimize", "--help"]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("Usage"));
    }

    #[tokio::test]
    async fn run_with_args_sample_smoke() {
        run_with_args(&args(&["bin", "routes", "optimize"]))
            .await
            .expect("run");
    }

    #[tokio::test]
    async fn run_with_args_writes_report() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("routes.json");
        let report_path = dir.path().join("report.json");
        std::fs::write(&input_path, r#"{"routes": [["A", "B"], ["B", "C"]]}"#)
            .expect("write input");

        run_with_args(&args(&[
            "bin",
            "routes",
            "optimize",
            "--in",
            input_path.to_str().unwrap(),
            "--report",
            report_path.to_str().unwrap(),
            "--emit-events",
        ]))
        .await
        .expect("run");

        let raw = std::fs::read_to_string(&report_path).expect("read report");
        let parsed: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(parsed["minimum_additional_routes"], 1);
        assert_eq!(parsed["airports"], 3);
    }

    #[tokio::test]
    async fn run_with_args_refuses_report_over_input() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("routes.json");
        std::fs::write(&input_path, r#"{"routes": []}"#).expect("write input");

        let err = run_with_args(&args(&[
            "bin",
            "routes",
            "optimize",
            "--in",
            input_path.to_str().unwrap(),
            "--report",
            input_path.to_str().unwrap(),
        ]))
        .await
        .unwrap_err()
        .to_string();
        assert!(err.contains("refusing to overwrite"));
    }

    #[tokio::test]
    async fn run_with_args_validate_smoke_ok() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("routes.json");
        std::fs::write(&input_path, r#"{"routes": [{"from": "A", "to": "B"}]}"#)
            .expect("write input");

        run_with_args(&args(&[
            "bin",
            "routes",
            "validate",
            "--in",
            input_path.to_str().unwrap(),
        ]))
        .await
        .expect("validate");
    }

    #[tokio::test]
    async fn run_with_args_validate_rejects_bad_shape() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("routes.json");
        std::fs::write(&input_path, r#"{"routes": [["A"]]}"#).expect("write input");

        let err = run_with_args(&args(&[
            "bin",
            "routes",
            "validate",
            "--in",
            input_path.to_str().unwrap(),
        ]))
        .await
        .unwrap_err();
        assert!(format!("{err:#}").contains("validation failed"));
    }

    #[tokio::test]
    async fn run_uses_env_args_and_returns_usage_error_under_test_harness() {
        let err = run().await.unwrap_err().to_string();
        assert!(err.contains("Usage"));
    }
}
