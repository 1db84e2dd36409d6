use barkhood_i18n::Language;

use crate::cli::OutputFormat;
use crate::client::CliResult;
use crate::output::render_strings;

pub(crate) fn handle_strings(language: Language, format: OutputFormat) -> CliResult<()> {
    render_strings(language, format)
}
