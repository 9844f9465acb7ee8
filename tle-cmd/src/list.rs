use std::{
    io::{stdout, Write},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Serialize;
use tle::OrbitalRecord;

use crate::{catalog, render};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Row {
    catalog_number: u32,
    name: String,
    epoch: String,
    inclination: f64,
    eccentricity: f64,
    mean_motion: f64,
}

impl From<&OrbitalRecord> for Row {
    fn from(rec: &OrbitalRecord) -> Self {
        Row {
            catalog_number: rec.catalog_number(),
            name: rec.name().to_string(),
            epoch: rec.epoch().to_string(),
            inclination: rec.inclination(),
            eccentricity: rec.eccentricity(),
            mean_motion: rec.mean_motion(),
        }
    }
}

#[derive(Serialize)]
struct ListRenderData {
    rows: Vec<Row>,
}

pub fn list(
    input: &Path,
    reference_year: Option<i32>,
    name: Option<&str>,
    format: &render::Format,
) -> Result<()> {
    let records = catalog::load(input, reference_year)?;
    let selected: Vec<&OrbitalRecord> = match name {
        Some(pattern) => catalog::by_name(&records, &catalog::name_pattern(pattern)?),
        None => records.iter().collect(),
    };

    match format {
        render::Format::Json => {
            serde_json::to_writer_pretty(stdout(), &selected).context("serializing to json")
        }
        render::Format::Text => {
            let data = ListRenderData {
                rows: selected.into_iter().map(Row::from).collect(),
            };
            let text = render::render_text(LIST_TEMPLATE, &data)?;
            stdout()
                .write_all(text.as_bytes())
                .context("writing to stdout")
        }
    }
}

const LIST_TEMPLATE: &str = r"
-------------------------------------------------------------------------------------------
CatNum   Name                      Epoch        Inclination  Eccentricity  MeanMotion
-------------------------------------------------------------------------------------------
{{ #each rows }}
{{ lpad 6 catalogNumber }}   {{ rpad 24 name }}  {{ epoch }}   {{ lpad 11 inclination }}  {{ lpad 12 eccentricity }}  {{ lpad 10 meanMotion }}
{{ /each ~}}
";
