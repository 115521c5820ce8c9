//! Rendering of command results as table, JSON or CSV.

use std::io::Write;

use arvo_rand::GeneratorKind;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

#[derive(Serialize)]
struct SampleRow {
    index: usize,
    value: f64,
}

#[derive(Serialize)]
struct PermutationRow {
    position: usize,
    value: usize,
}

#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    generator: GeneratorKind,
    seed: i32,
    values: &'a [T],
}

/// Outcome of one self-check in `verify`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

/// Writes a list of draws.
pub fn write_samples<W: Write>(
    out: &mut W,
    format: OutputFormat,
    generator: GeneratorKind,
    seed: i32,
    values: &[f64],
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, generator, seed, values),
        OutputFormat::Csv => write_csv(
            out,
            values
                .iter()
                .enumerate()
                .map(|(index, &value)| SampleRow { index, value }),
        ),
        OutputFormat::Table => {
            writeln!(out, "generator: {}  seed: {}", generator, seed)?;
            writeln!(out, "{:>8}  {:<22}", "index", "value")?;
            for (index, value) in values.iter().enumerate() {
                writeln!(out, "{:>8}  {:<22}", index, value)?;
            }
            Ok(())
        }
    }
}

/// Writes a permutation.
pub fn write_permutation<W: Write>(
    out: &mut W,
    format: OutputFormat,
    generator: GeneratorKind,
    seed: i32,
    perm: &[usize],
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, generator, seed, perm),
        OutputFormat::Csv => write_csv(
            out,
            perm.iter()
                .enumerate()
                .map(|(position, &value)| PermutationRow { position, value }),
        ),
        OutputFormat::Table => {
            writeln!(out, "generator: {}  seed: {}", generator, seed)?;
            let line = perm
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{}", line)?;
            Ok(())
        }
    }
}

/// Writes the results of `verify`.
pub fn write_checks<W: Write>(
    out: &mut W,
    format: OutputFormat,
    generator: GeneratorKind,
    seed: i32,
    checks: &[CheckResult],
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, generator, seed, checks),
        OutputFormat::Csv => write_csv(out, checks.iter()),
        OutputFormat::Table => {
            writeln!(out, "generator: {}  seed: {}", generator, seed)?;
            for check in checks {
                let status = if check.passed { "ok" } else { "FAILED" };
                writeln!(out, "{:<22} {:<6} {}", check.name, status, check.detail)?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize>(
    out: &mut W,
    generator: GeneratorKind,
    seed: i32,
    values: &[T],
) -> Result<()> {
    let report = Report {
        generator,
        seed,
        values,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W, I, T>(out: &mut W, rows: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
