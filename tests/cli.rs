use clap::Parser;
use ytcfg::presentation::Cli;

#[test]
fn parse_input_file_positional() {
    let cli = Cli::parse_from(["ytcfg", "urls.txt"]);
    assert_eq!(cli.input_file.as_deref(), Some("urls.txt"));
    assert!(cli.output.is_none());
    assert!(!cli.sample);
}

#[test]
fn parse_output_largo() {
    let cli = Cli::parse_from(["ytcfg", "urls.txt", "--output", "custom-config.js"]);
    assert_eq!(cli.output.as_deref(), Some("custom-config.js"));
}

#[test]
fn parse_output_corto() {
    let cli = Cli::parse_from(["ytcfg", "urls.txt", "-o", "custom-config.js"]);
    assert_eq!(cli.output.as_deref(), Some("custom-config.js"));
}

#[test]
fn parse_sample_sin_archivo() {
    let cli = Cli::parse_from(["ytcfg", "--sample"]);
    assert!(cli.sample);
    assert!(cli.input_file.is_none());
}

#[test]
fn parse_sin_argumentos() {
    let cli = Cli::parse_from(["ytcfg"]);
    assert!(cli.input_file.is_none());
    assert!(cli.output.is_none());
    assert!(!cli.sample);
}
