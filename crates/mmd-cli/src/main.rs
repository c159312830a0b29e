use anyhow::{Context, Result, bail};
use mmd_config::Config;
use mmd_engine::{Document, Syntax, outline, parse_document, write_html};
use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "Usage: mmd [input-file] [--output <path>] [--config <path>] [--outline]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    outline: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" | "-o" => {
                let path = args.next().context("--output requires a path")?;
                parsed.output = Some(PathBuf::from(path));
            }
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--outline" => parsed.outline = true,
            flag if flag.starts_with('-') => bail!("Unknown option '{flag}'"),
            _ if parsed.input.is_some() => bail!("Unexpected extra argument '{arg}'"),
            _ => parsed.input = Some(PathBuf::from(arg)),
        }
    }

    Ok(parsed)
}

fn syntax_from_config(config: &Config) -> Syntax {
    Syntax {
        header_open: config.syntax.header_open.clone(),
        header_close: config.syntax.header_close.clone(),
        code_fence: config.syntax.code_fence.clone(),
    }
}

fn load_syntax(config_path: Option<&Path>) -> Result<Syntax> {
    let path = config_path.map_or_else(Config::config_path, Path::to_path_buf);
    match Config::load_from_path(&path)? {
        Some(config) => {
            log::info!("Loaded config from {}", path.display());
            Ok(syntax_from_config(&config))
        }
        None if config_path.is_some() => {
            bail!("Config file '{}' does not exist", path.display())
        }
        None => {
            log::debug!("No config at {}, using default syntax", path.display());
            Ok(Syntax::default())
        }
    }
}

/// Prints the banner and working directory, then reads one path from `input`.
fn prompt_for_input<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<PathBuf> {
    writeln!(out, "////////////////////////////////")?;
    writeln!(out, "///   MMD to HTML Converter  ///")?;
    writeln!(out, "////////////////////////////////")?;
    writeln!(out, "Working directory: {}", env::current_dir()?.display())?;
    write!(out, "Enter path to input file: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let path = line.trim();
    if path.is_empty() {
        bail!("No input file given");
    }
    Ok(PathBuf::from(path))
}

fn convert(doc: &Document, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_html(doc, &mut writer)?;
            writer.flush()?;
            log::info!("Wrote HTML to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_html(doc, &mut writer)?;
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let syntax = load_syntax(args.config.as_deref())?;

    let input = match args.input {
        Some(path) => path,
        None => prompt_for_input(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let file = File::open(&input)
        .with_context(|| format!("Failed to open input file '{}'", input.display()))?;
    let doc = parse_document(BufReader::new(file), &syntax)
        .with_context(|| format!("Error parsing file '{}'", input.display()))?;
    log::info!("Parsed '{}' from {}", doc.metadata().title(), input.display());

    if args.outline {
        for line in outline(&doc) {
            eprintln!("{line}");
        }
    }

    convert(&doc, args.output.as_deref())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args_empty() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_parse_args_all_options() {
        let parsed = args(&["post.mmd", "--output", "post.html", "--config", "c.toml", "--outline"])
            .unwrap();
        assert_eq!(
            parsed,
            Args {
                input: Some(PathBuf::from("post.mmd")),
                output: Some(PathBuf::from("post.html")),
                config: Some(PathBuf::from("c.toml")),
                outline: true,
            }
        );
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert!(args(&["--output"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.mmd", "b.mmd"]).is_err());
    }

    #[test]
    fn test_syntax_from_default_config_matches_engine_default() {
        assert_eq!(syntax_from_config(&Config::default()), Syntax::default());
    }

    #[test]
    fn test_load_syntax_requires_explicit_config_to_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(load_syntax(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_syntax_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[syntax]\ncode_fence = \"```\"\n").unwrap();

        let syntax = load_syntax(Some(&path)).unwrap();
        assert_eq!(syntax.code_fence, "```");
        assert_eq!(syntax.header_open, "+++ header");
    }

    #[test]
    fn test_prompt_reads_trimmed_path() {
        let mut input = "  notes/post.mmd  \n".as_bytes();
        let mut out = Vec::new();

        let path = prompt_for_input(&mut input, &mut out).unwrap();

        assert_eq!(path, PathBuf::from("notes/post.mmd"));
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("MMD to HTML Converter"));
        assert!(shown.contains("Working directory: "));
        assert!(shown.ends_with("Enter path to input file: "));
    }

    #[test]
    fn test_prompt_rejects_empty_answer() {
        let mut input = "\n".as_bytes();
        assert!(prompt_for_input(&mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_convert_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.html");
        let text = "+++ header
@file: a.txt
@brief: b
@title: t
@author: me
@date: [created: 2025-05-11, updated: 2025-05-17]
@version: 0.1.0
+++
# T
a < b
";
        let doc = mmd_engine::parse_document_str(text, &Syntax::default()).unwrap();

        convert(&doc, Some(&output)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "<div>\n<p>\na &lt; b\n</p>\n</div>\n"
        );
    }
}
