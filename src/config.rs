//! Configuración y argumentos CLI

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{ReconstructError, Result};
use crate::grammar::repair::DEFAULT_MAX_REWRITES;
use crate::grammar::rules::{ProblemKind, RuleEngine};
use crate::grammar::tokenizer::TaggedToken;
use crate::reconstructor::ReconstructorConfig;
use crate::tagging::{parse_document, parse_line, InputFormat};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "reconstructor",
    about = "Reconstructor sintáctico de oraciones etiquetadas",
    after_help = concat!(
        "EJEMPLOS:\n",
        "    reconstructor \"quickly/RB he/PRP ran/VBD\"\n",
        "    reconstructor --input oraciones.txt --json\n",
        "    reconstructor -v --disable-rule unusual_start \"the/DT the/DT dog/NN barks/VBZ\"",
    )
)]
pub struct Config {
    /// Oración en formato palabra/ETIQUETA (argumento posicional)
    pub text: Option<String>,

    /// Archivo de entrada, una oración por línea
    #[arg(short = 'i', long = "input")]
    pub input_file: Option<PathBuf>,

    /// Formato de las oraciones de entrada
    #[arg(long, value_enum, default_value = "slash")]
    pub format: InputFormat,

    /// Archivo de salida (default: stdout)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Emitir el análisis completo en JSON, uno por línea
    #[arg(long)]
    pub json: bool,

    /// Mostrar el informe paso a paso y un resumen final
    #[arg(short, long)]
    pub verbose: bool,

    /// Desactivar una regla de reparación por nombre (repetible)
    #[arg(long = "disable-rule", value_name = "NOMBRE")]
    pub disabled_rules: Vec<String>,

    /// Reescrituras máximas por oración
    #[arg(long, default_value_t = DEFAULT_MAX_REWRITES)]
    pub max_rewrites: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: None,
            input_file: None,
            format: InputFormat::Slash,
            output_file: None,
            json: false,
            verbose: false,
            disabled_rules: Vec::new(),
            max_rewrites: DEFAULT_MAX_REWRITES,
        }
    }
}

impl Config {
    /// Lee la configuración de los argumentos (el primero es el nombre del programa)
    pub fn from_args(args: Vec<String>) -> std::result::Result<Self, clap::Error> {
        Self::try_parse_from(args)
    }

    /// Parámetros del motor; falla si se desactiva una regla que no existe
    pub fn reconstructor_config(&self) -> Result<ReconstructorConfig> {
        let mut rules = RuleEngine::standard();
        for name in &self.disabled_rules {
            let kind = ProblemKind::from_id(name)
                .ok_or_else(|| ReconstructError::UnknownRule(name.clone()))?;
            rules.disable_rule(kind);
        }

        Ok(ReconstructorConfig {
            rules,
            max_rewrites: self.max_rewrites,
        })
    }

    /// Oraciones a procesar: del archivo de entrada o, si no hay, del texto posicional
    pub fn load_sentences(&self) -> Result<Vec<Vec<TaggedToken>>> {
        let sentences = if let Some(ref input_file) = self.input_file {
            let content =
                fs::read_to_string(input_file).map_err(|e| ReconstructError::io(input_file, e))?;
            parse_document(&content, self.format)?
        } else if let Some(ref text) = self.text {
            vec![parse_line(text, self.format, 1)?]
        } else {
            return Err(ReconstructError::EmptyInput);
        };

        if sentences.is_empty() {
            return Err(ReconstructError::EmptyInput);
        }
        Ok(sentences)
    }
}
