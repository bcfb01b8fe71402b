use cad_pretest::{PatientQuery, assess};
use log::info;
use std::process::ExitCode;

const USAGE: &str = "Usage: cad-pretest [--json] <age> <sex> <symptom> [risk-factor...]\n\
    sex:          male | female\n\
    symptom:      typical_angina | atypical_angina | non_anginal | asymptomatic\n\
    risk-factor:  diabetes | hypertension | smoking | dyslipidemia | family_history";

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.first().is_some_and(|a| a == "--json");
    if json {
        args.remove(0);
    }

    if args.len() < 3 {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    let factors: Vec<&str> = args[3..].iter().map(String::as_str).collect();
    let query = match PatientQuery::from_raw(&args[0], &args[1], &args[2], &factors) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Assessing: age {}, {}, {}, {} risk factor(s)",
        query.age,
        query.sex,
        query.symptom,
        query.risk_factor_count()
    );

    match assess(&query) {
        Ok(assessment) if json => match serde_json::to_string_pretty(&assessment) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: failed to serialize result: {e}");
                return ExitCode::FAILURE;
            }
        },
        Ok(assessment) => println!("{assessment}"),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
