use clap::Parser;

use hygiene_guard::checker::{HeaderChecker, RegexHeaderMatcher};
use hygiene_guard::cli::HeadersCli;
use hygiene_guard::output::{HeaderTextFormatter, ReportFormatter};
use hygiene_guard::scanner::{DirectoryScanner, FileScanner, SourceFilter};
use hygiene_guard::source::DecodePolicy;
use hygiene_guard::{EXIT_SUCCESS, EXIT_USAGE_ERROR, EXIT_VIOLATION};

fn main() {
    let cli = HeadersCli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &HeadersCli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_USAGE_ERROR
        }
    }
}

fn run_impl(cli: &HeadersCli) -> hygiene_guard::Result<i32> {
    let filter = SourceFilter::new(cli.ext.clone(), &[])?;
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan(&cli.root)?;

    let matcher = RegexHeaderMatcher::with_pattern(&cli.pattern)?;
    let checker = HeaderChecker::new(matcher, DecodePolicy::from_strict(cli.strict_decode));
    let report = checker.check(&files)?;

    print!("{}", HeaderTextFormatter.format(&report));

    if report.is_clean() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATION)
    }
}
