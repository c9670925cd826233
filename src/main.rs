//! CLI mínima:
//!   wireflow serialize '<JSON>'   [--serializer json|canonical]
//!   wireflow deserialize '<TEXT>' [--serializer json|canonical]
//!   wireflow roundtrip '<JSON>'   [--serializer json|canonical]
//!
//! Códigos de salida: 0 ok, 2 uso, 3 JSON inválido, 4 rechazado por el step
//! (tipo/tamaño), 5 otro error.

use log::{error, info};
use serde_json::Value;
use wireflow::{AppConfig, AppError, WirePipeline};

const USAGE: &str = "Uso: wireflow <serialize|deserialize|roundtrip> <ARG> [--serializer json|canonical]";
const COMMANDS: &[&str] = &["serialize", "deserialize", "roundtrip"];

fn main() {
    let mut cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => { eprintln!("[wireflow] {e}"); std::process::exit(exit_code(&e)); }
    };
    env_logger::builder().filter_level(cfg.log_level).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, arg, serializer) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => { eprintln!("[wireflow] {e}\n{USAGE}"); std::process::exit(exit_code(&e)); }
    };
    if let Some(name) = serializer { cfg.serializer = name; }

    let pipeline = match WirePipeline::from_config(&cfg) {
        Ok(p) => p,
        Err(e) => { eprintln!("[wireflow] {e}"); std::process::exit(exit_code(&e)); }
    };
    info!("serializer: {}", cfg.serializer);

    match run(&pipeline, &command, &arg) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            error!("{command} falló: {e}");
            eprintln!("error: {e}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Devuelve `(comando, argumento, serializer)`. Rechaza comandos
/// desconocidos, `--serializer` sin valor y posicionales sobrantes.
fn parse_args(args: &[String]) -> Result<(String, String, Option<String>), AppError> {
    let mut positionals: Vec<&str> = Vec::new();
    let mut serializer: Option<String> = None;
    let mut iter = args.iter();
    while let Some(a) = iter.next() {
        match a.as_str() {
            "--serializer" => match iter.next() {
                Some(v) if !v.starts_with("--") => serializer = Some(v.clone()),
                _ => return Err(AppError::Usage("falta valor para --serializer".into())),
            },
            other => positionals.push(other),
        }
    }
    match positionals.as_slice() {
        [command, arg] if COMMANDS.contains(command) => Ok((command.to_string(), arg.to_string(), serializer)),
        [command, _] => Err(AppError::Usage(format!("comando desconocido: {command}"))),
        [] | [_] => Err(AppError::Usage("faltan argumentos".into())),
        [_, _, extra @ ..] => Err(AppError::Usage(format!("argumentos sobrantes: {}", extra.join(" ")))),
    }
}

fn run(pipeline: &WirePipeline, command: &str, arg: &str) -> Result<String, AppError> {
    match command {
        "serialize" => Ok(pipeline.serialize.run(&parse_json(arg)?)?),
        "deserialize" => Ok(pipeline.deserialize.run(arg)?.to_string()),
        "roundtrip" => Ok(pipeline.roundtrip(&parse_json(arg)?)?.to_string()),
        other => Err(AppError::Usage(format!("comando desconocido: {other}"))),
    }
}

fn parse_json(text: &str) -> Result<Value, AppError> {
    Ok(serde_json::from_str(text)?)
}

fn exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Usage(_) | AppError::Config(_) => 2,
        AppError::Json(_) => 3,
        AppError::Step(e) if e.is_policy_violation() => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wireflow::SerializerError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_command_argument_and_serializer_in_any_order() {
        let parsed = parse_args(&args(&["--serializer", "canonical", "serialize", "{}"])).unwrap();
        assert_eq!(parsed, ("serialize".into(), "{}".into(), Some("canonical".into())));
        let parsed = parse_args(&args(&["roundtrip", "[1]"])).unwrap();
        assert_eq!(parsed, ("roundtrip".into(), "[1]".into(), None));
    }

    #[test]
    fn trailing_serializer_flag_without_value_is_a_usage_error() {
        let err = parse_args(&args(&["serialize", "{\"a\":1}", "--serializer"])).unwrap_err();
        assert!(matches!(err, AppError::Usage(_)), "got {err:?}");
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn extra_positionals_are_a_usage_error() {
        let err = parse_args(&args(&["serialize", "{\"a\":1}", "extra", "junk"])).unwrap_err();
        assert_eq!(err.to_string(), "Uso incorrecto: argumentos sobrantes: extra junk");
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn unknown_command_and_missing_argument_are_usage_errors() {
        for list in [&["encode", "{}"][..], &["serialize"][..], &[][..]] {
            let err = parse_args(&args(list)).unwrap_err();
            assert_eq!(exit_code(&err), 2, "{list:?}");
        }
    }

    #[test]
    fn exit_codes_follow_the_error_kind() {
        let pipeline = WirePipeline::from_name("json").unwrap();
        assert_eq!(run(&pipeline, "serialize", "{\"a\":1}").unwrap(), "{\"a\":1}");

        let bad_json = run(&pipeline, "serialize", "{nope").unwrap_err();
        assert_eq!(exit_code(&bad_json), 3);

        let oversize = run(&pipeline, "serialize", &format!("\"{}\"", "x".repeat(2000))).unwrap_err();
        assert!(matches!(oversize, AppError::Step(SerializerError::SizeViolation { .. })));
        assert_eq!(exit_code(&oversize), 4);

        let decode = run(&pipeline, "deserialize", "not-json").unwrap_err();
        assert!(matches!(decode, AppError::Step(SerializerError::Decode(_))));
        assert_eq!(exit_code(&decode), 5);

        assert_eq!(exit_code(&AppError::Config("x".into())), 2);
    }
}
