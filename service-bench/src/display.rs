//! Table output for service records.
use std::io::{self, Write};

use super::service::Service;

/// Horizontal rule framing the table.
pub const RULE: &str =
    "--------------------------------------------------------------------------------";

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "| {:<15} | {:<15} | {:<7} | {:<8} | {:<15} |",
        "Service Name", "Service Type", "Cost", "Duration", "Master Name"
    )?;
    writeln!(out, "{}", RULE)
}

pub fn write_row<W: Write>(out: &mut W, service: &Service) -> io::Result<()> {
    writeln!(
        out,
        "| {:<15} | {:<15} | {:<7} | {:<8} | {:<15} |",
        service.service_name,
        service.service_type,
        service.cost,
        service.duration,
        service.master_name
    )
}

/// Write `services` as a framed table.
pub fn write_table<'a, W, I>(out: &mut W, services: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Service>,
{
    write_header(out)?;
    for service in services {
        write_row(out, service)?;
    }
    writeln!(out, "{}", RULE)
}
