use std::{
    io::{stdout, Write},
    path::Path,
};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tle::OrbitalRecord;

use crate::{catalog, render};

#[derive(Debug, Clone)]
pub enum Selection {
    Catalog(u32),
    Name(String),
}

#[derive(Serialize)]
struct Element {
    name: &'static str,
    value: String,
}

#[derive(Serialize)]
struct RecordRenderData {
    name: String,
    elements: Vec<Element>,
}

#[derive(Serialize)]
struct ShowRenderData {
    records: Vec<RecordRenderData>,
}

fn select<'a>(records: &'a [OrbitalRecord], selection: &Selection) -> Result<Vec<&'a OrbitalRecord>> {
    let selected = match selection {
        Selection::Catalog(num) => catalog::by_catalog_number(records, *num)
            .into_iter()
            .collect::<Vec<_>>(),
        Selection::Name(pattern) => catalog::by_name(records, &catalog::name_pattern(pattern)?),
    };
    if selected.is_empty() {
        match selection {
            Selection::Catalog(num) => bail!("No record found for catalog number {num}"),
            Selection::Name(pattern) => bail!("No record found with name matching {pattern:?}"),
        }
    }
    Ok(selected)
}

pub fn show(
    input: &Path,
    reference_year: Option<i32>,
    selection: &Selection,
    format: &render::Format,
) -> Result<()> {
    let records = catalog::load(input, reference_year)?;
    let selected = select(&records, selection)?;

    match format {
        render::Format::Json => {
            serde_json::to_writer_pretty(stdout(), &selected).context("serializing to json")
        }
        render::Format::Text => {
            let data = ShowRenderData {
                records: selected
                    .into_iter()
                    .map(|rec| RecordRenderData {
                        name: rec.name().to_string(),
                        elements: rec
                            .description()
                            .into_iter()
                            .map(|(name, value)| Element { name, value })
                            .collect(),
                    })
                    .collect(),
            };
            let text = render::render_text(SHOW_TEMPLATE, &data)?;
            stdout()
                .write_all(text.as_bytes())
                .context("writing to stdout")
        }
    }
}

const SHOW_TEMPLATE: &str = r"
{{ #each records ~}}
===========================================================================================
{{ name }}
===========================================================================================
{{ #each elements }}
  {{ rpad 20 name }} {{ value }}
{{ /each ~}}
{{ /each ~}}
";
