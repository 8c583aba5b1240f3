//! Paytable command: the Jacks or Better schedule for every bet size.

use crate::error::CliError;
use crate::formatters::format_pay_table;
use std::io::Write;

pub fn handle_paytable_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "{}", format_pay_table())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_paying_rank() {
        let mut out = Vec::new();
        handle_paytable_command(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 10);
        assert!(text.contains("Royal Flush"));
        assert!(text.contains("4000"));
        assert!(text.contains("Jacks or Better"));
        assert!(!text.contains("No Win"));
    }
}
