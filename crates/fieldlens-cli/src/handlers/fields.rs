use anyhow::Result;
use std::path::Path;

use fieldlens_normalize::{extract_fields_with_locations, load_result};
use fieldlens_types::Field;

use crate::presentation;
use crate::types::OutputFormat;

pub fn run(result_path: &Path, format: OutputFormat) -> Result<()> {
    let result = load_result(result_path)?;
    let fields = extract_fields_with_locations(&result);

    if fields.is_empty() {
        anyhow::bail!("No fields found in analyzer output");
    }

    match format {
        OutputFormat::Plain => presentation::print_fields_table(&fields),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fields)?),
        OutputFormat::Csv => write_csv(&fields)?,
    }

    Ok(())
}

fn write_csv(fields: &[Field]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["field", "value", "pages"])?;

    for field in fields {
        let value = presentation::summarize_value(&field.value);
        let pages = presentation::page_list(field);
        writer.write_record([field.name.as_str(), value.as_str(), pages.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
