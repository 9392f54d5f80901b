mod text;

pub use text::{HeaderTextFormatter, LocTextFormatter};

/// Trait for rendering a checker report as displayable text.
pub trait ReportFormatter {
    type Report;

    fn format(&self, report: &Self::Report) -> String;
}
