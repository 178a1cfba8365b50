use std::fs;
use std::process;

use tracing_subscriber::EnvFilter;

use reconstructor::{Analysis, Config, Reconstructor, ReportObserver};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        // clap ya imprime la ayuda o el error con el código de salida adecuado
        Err(e) => e.exit(),
    };

    let engine_config = match config.reconstructor_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };
    let reconstructor = Reconstructor::new(&engine_config);

    let sentences = match config.load_sentences() {
        Ok(sentences) => sentences,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Con informe se procesa en orden; sin él, en paralelo
    let (analyses, reports): (Vec<Analysis>, Vec<String>) = if config.verbose {
        sentences
            .iter()
            .map(|tokens| {
                let mut observer = ReportObserver::new();
                let analysis = reconstructor.reconstruct_with_observer(tokens, &mut observer);
                (analysis, observer.into_report())
            })
            .unzip()
    } else {
        (reconstructor.reconstruct_batch(&sentences), Vec::new())
    };

    let output = match render_output(&config, &analyses, &reports) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error serializando resultado: {}", e);
            process::exit(1);
        }
    };

    // Escribir resultado
    if let Some(ref output_file) = config.output_file {
        if let Err(e) = fs::write(output_file, &output) {
            eprintln!(
                "Error escribiendo archivo '{}': {}",
                output_file.display(),
                e
            );
            process::exit(1);
        }
    } else {
        print!("{}", output);
    }
}

fn render_output(
    config: &Config,
    analyses: &[Analysis],
    reports: &[String],
) -> Result<String, serde_json::Error> {
    let mut output = String::new();

    for (i, analysis) in analyses.iter().enumerate() {
        if let Some(report) = reports.get(i) {
            output.push_str(report);
            output.push('\n');
        }
        if config.json {
            output.push_str(&serde_json::to_string(analysis)?);
        } else {
            output.push_str(&analysis.reconstructed);
        }
        output.push('\n');
    }

    if config.verbose {
        let rule = "=".repeat(60);
        output.push_str(&format!("\n{}\nResumen\n{}\n", rule, rule));
        for (i, analysis) in analyses.iter().enumerate() {
            output.push_str(&format!(
                "{}. original:      {}\n   reconstruida:  {}\n",
                i + 1,
                analysis.original,
                analysis.reconstructed
            ));
        }
    }

    Ok(output)
}
