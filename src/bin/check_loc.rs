use clap::Parser;

use hygiene_guard::checker::{LocChecker, LocThresholds};
use hygiene_guard::cli::LocCli;
use hygiene_guard::counter::{CommentSyntax, EffectiveLocCounter};
use hygiene_guard::output::{LocTextFormatter, ReportFormatter};
use hygiene_guard::scanner::{DirectoryScanner, FileScanner, SourceFilter};
use hygiene_guard::source::DecodePolicy;
use hygiene_guard::{EXIT_SUCCESS, EXIT_USAGE_ERROR, EXIT_VIOLATION};

fn main() {
    let cli = LocCli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &LocCli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_USAGE_ERROR
        }
    }
}

fn run_impl(cli: &LocCli) -> hygiene_guard::Result<i32> {
    let filter = SourceFilter::new(cli.ext.clone(), &cli.exclude)?;
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan(&cli.root)?;

    let syntax = CommentSyntax::rust();
    let counter = EffectiveLocCounter::new(&syntax);
    let thresholds = LocThresholds::new(cli.warn_threshold, cli.fail_threshold);
    let decode_policy = DecodePolicy::from_strict(cli.strict_decode);
    let checker = LocChecker::new(counter, thresholds, decode_policy);
    let report = checker.check(&files)?;

    print!("{}", LocTextFormatter::new(thresholds).format(&report));

    if report.has_failures() {
        Ok(EXIT_VIOLATION)
    } else {
        Ok(EXIT_SUCCESS)
    }
}
