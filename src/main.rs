use std::path::Path;
use std::process::ExitCode;

use numexplore::configuration::AnalysisRequest;
use numexplore::logistic;
use numexplore::quadrature;

fn main() -> ExitCode {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: numexplore <request.json>");
            return ExitCode::FAILURE;
        }
    };
    let request = match AnalysisRequest::from_reader(Path::new(&path)) {
        Ok(request) => request,
        Err(error) => {
            eprintln!("failed to load request '{}': {}", path, error);
            return ExitCode::FAILURE;
        }
    };

    // One JSON document out per JSON document in; undefined values come
    // out as null, which is what the plot layer consumes.
    let mut output = serde_json::Map::new();

    if let Some(params) = request.logistic() {
        let analysis = logistic::analysis::analyze(params);
        match serde_json::to_value(&analysis) {
            Ok(value) => {
                output.insert("logistic".to_owned(), value);
            },
            Err(error) => {
                eprintln!("failed to serialize logistic analysis: {}", error);
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(params) = request.quadrature() {
        let analysis = quadrature::analysis::analyze(params);
        match serde_json::to_value(&analysis) {
            Ok(value) => {
                output.insert("quadrature".to_owned(), value);
            },
            Err(error) => {
                eprintln!("failed to serialize quadrature analysis: {}", error);
                return ExitCode::FAILURE;
            }
        }
    }

    println!("{}", serde_json::Value::Object(output));
    ExitCode::SUCCESS
}
