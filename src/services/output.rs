use crate::domain::models::JsonOut;
use serde::Serialize;

/// Writes command results to stdout, either as text lines or as a single
/// `{ok, data}` JSON envelope when `--json` is set.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Output { json }
    }

    fn envelope<T: Serialize>(data: T) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&JsonOut { ok: true, data })?)
    }

    pub fn rows<T: Serialize>(&self, data: &[T], row: impl Fn(&T) -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", Self::envelope(data)?);
        } else {
            data.iter().for_each(|d| println!("{}", row(d)));
        }
        Ok(())
    }

    pub fn report<T: Serialize>(&self, data: T, line: impl Fn(&T) -> String) -> anyhow::Result<()> {
        let text = if self.json {
            Self::envelope(&data)?
        } else {
            line(&data)
        };
        println!("{}", text);
        Ok(())
    }
}
