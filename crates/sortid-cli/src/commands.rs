use anyhow::Context;
use chrono::{DateTime, Local, SecondsFormat};
use sortid::{IdService, Record, short_id};
use std::cmp::Ordering;
use std::io::Write;
use std::time::{Duration, SystemTime};

/// Prints `count` fresh identifiers.
pub fn generate(service: &IdService, count: usize, out: &mut impl Write) -> anyhow::Result<()> {
    for _ in 0..count {
        writeln!(out, "{}", service.generate())?;
    }
    tracing::debug!(count, "generated identifiers");
    Ok(())
}

/// Prints whether `id` is well formed and returns the verdict.
pub fn validate(service: &IdService, id: &str, out: &mut impl Write) -> anyhow::Result<bool> {
    match service.parse(id) {
        Ok(_) => {
            writeln!(out, "valid")?;
            Ok(true)
        }
        Err(err) => {
            writeln!(out, "invalid: {err}")?;
            Ok(false)
        }
    }
}

pub fn inspect(service: &IdService, id: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let created = service
        .extract_timestamp(id)
        .with_context(|| format!("cannot inspect {id:?}"))?;
    let age = service.age(id)?;

    writeln!(out, "id:        {id}")?;
    writeln!(out, "timestamp: {}", format_time(created))?;
    writeln!(out, "age:       {}", format_age(age))?;
    Ok(())
}

pub fn compare(service: &IdService, a: &str, b: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let ordering = service
        .compare(a, b)
        .with_context(|| format!("cannot compare {a:?} with {b:?}"))?;
    writeln!(out, "{} ({})", relation(a, b, ordering), ordering as i8)?;
    Ok(())
}

/// Runs every operation against sample data, printing what happens.
pub fn demo(service: &IdService, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "=== sortid {} ===", env!("CARGO_PKG_VERSION"))?;

    writeln!(out, "\n1. Records:")?;
    let record = Record::new("demo", 42);
    writeln!(
        out,
        "   created: name={}, value={}, id={}",
        record.name, record.value, record.id
    )?;
    writeln!(out, "   describe(): {:?}", record.describe())?;

    writeln!(out, "\n2. Identifier operations:")?;
    let id = service.generate().to_string();
    writeln!(out, "   generated: {id}")?;
    let created = service.extract_timestamp(&id)?;
    writeln!(out, "   timestamp: {}", format_time(created))?;
    writeln!(out, "   age:       {}", format_age(service.age(&id)?))?;

    writeln!(out, "\n3. Validation:")?;
    for (label, record) in [
        ("valid", Record::new("valid", 100)),
        ("empty name", Record::new("", 50)),
        ("negative value", Record::new("test", -10)),
    ] {
        match record.validate() {
            Ok(()) => writeln!(out, "   ✓ {label} record passed validation")?,
            Err(err) => writeln!(out, "   ✗ {label} record: {err}")?,
        }
    }

    writeln!(out, "\n4. Comparison:")?;
    let first = service.generate().to_string();
    std::thread::sleep(Duration::from_millis(1));
    let second = service.generate().to_string();
    let ordering = service.compare(&first, &second)?;
    writeln!(out, "   {}", relation(&first, &second, ordering))?;

    Ok(())
}

fn relation(a: &str, b: &str, ordering: Ordering) -> String {
    let (a, b) = (short_id(a), short_id(b));
    match ordering {
        Ordering::Less => format!("{a}... was created before {b}..."),
        Ordering::Greater => format!("{a}... was created after {b}..."),
        Ordering::Equal => format!("{a}... and {b}... were created at the same time"),
    }
}

fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).to_rfc3339_opts(SecondsFormat::Millis, false)
}

fn format_age(age: Duration) -> String {
    format!("{age:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortid::Ulid;

    fn run(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn generate_prints_count_valid_lines() {
        let service = IdService::global();
        let output = run(|out| generate(service, 3, out));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| service.is_valid(l)));
        assert!(lines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn validate_reports_verdict() {
        let service = IdService::global();
        let mut out = Vec::new();
        assert!(validate(service, "01ARZ3NDEKTSV4RRFFQ69G5FAV", &mut out).unwrap());
        assert!(!validate(service, "invalid-id", &mut out).unwrap());
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("valid\n"));
        assert!(output.contains("invalid: invalid identifier format"));
    }

    #[test]
    fn inspect_prints_timestamp_and_age() {
        let service = IdService::global();
        let output = run(|out| inspect(service, "01ARZ3NDEKTSV4RRFFQ69G5FAV", out));
        assert!(output.contains("id:        01ARZ3NDEKTSV4RRFFQ69G5FAV"));
        assert!(output.contains("timestamp: 2016-07-3"));
        assert!(output.contains("age:"));
    }

    #[test]
    fn inspect_rejects_invalid() {
        let err = inspect(IdService::global(), "invalid-id", &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("cannot inspect"));
    }

    #[test]
    fn compare_prints_relation() {
        let service = IdService::global();
        let a = Ulid::from_components(1, 0).to_string();
        let b = Ulid::from_components(2, 0).to_string();

        let output = run(|out| compare(service, &a, &b, out));
        assert_eq!(output, "00000000... was created before 00000000... (-1)\n");

        let output = run(|out| compare(service, &b, &a, out));
        assert!(output.ends_with("(1)\n"));

        let output = run(|out| compare(service, &a, &a, out));
        assert!(output.contains("at the same time (0)"));
    }

    #[test]
    fn demo_runs_every_section() {
        let output = run(|out| demo(IdService::global(), out));
        assert!(output.contains("1. Records:"));
        assert!(output.contains("has value 42"));
        assert!(output.contains("✓ valid record passed validation"));
        assert!(output.contains("✗ empty name record: name cannot be empty"));
        assert!(output.contains("✗ negative value record: value cannot be negative"));
        assert!(output.contains("was created before"));
    }
}
