use anyhow::{Context, Result};
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;

#[derive(Debug, Clone)]
pub enum Format {
    Json,
    Text,
}

impl clap::ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Text]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Text => Some(clap::builder::PossibleValue::new("text")),
        }
    }
}

fn pad_to(num: u64, len: usize) -> usize {
    usize::try_from(num).unwrap_or(0).saturating_sub(len)
}

fn as_text(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.to_owned(),
        serde_json::Value::Null => String::new(),
        _ => v.to_string(),
    }
}

fn setup_handlebars() -> Handlebars<'static> {
    let mut hb = Handlebars::new();
    hb.register_escape_fn(handlebars::no_escape);

    handlebars_helper!(left_pad: |num: u64, v: Json| {
        let v = as_text(v);
        format!("{}{v}", " ".repeat(pad_to(num, v.chars().count())))
    });
    hb.register_helper("lpad", Box::new(left_pad));

    handlebars_helper!(right_pad: |num: u64, v: Json| {
        let v = as_text(v);
        format!("{v}{}", " ".repeat(pad_to(num, v.chars().count())))
    });
    hb.register_helper("rpad", Box::new(right_pad));

    hb
}

/// Render `data` with the handlebars `template`.
pub fn render_text<T: Serialize>(template: &str, data: &T) -> Result<String> {
    let mut hb = setup_handlebars();

    hb.register_template_string("template", template)
        .context("registering template")?;

    hb.render("template", data).context("rendering text")
}
